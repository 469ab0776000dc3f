use staticd::http::template::{DATE_TOKEN, SERVER_TOKEN, mountain_date_now, render};

#[test]
fn test_render_replaces_both_tokens() {
    let text = format!("Hello {} on {}", SERVER_TOKEN, DATE_TOKEN);
    let out = render(&text, "Jan 1, 2026 9:00:00 AM", "test-server");

    assert_eq!(out, "Hello test-server on Jan 1, 2026 9:00:00 AM");
    assert!(!out.contains(DATE_TOKEN));
    assert!(!out.contains(SERVER_TOKEN));
}

#[test]
fn test_render_replaces_every_occurrence() {
    let text = format!("{s} and {s} and {d}{d}", s = SERVER_TOKEN, d = DATE_TOKEN);
    let out = render(&text, "D", "S");

    assert_eq!(out, "S and S and DD");
}

#[test]
fn test_render_without_tokens_is_identity() {
    let text = "<html><body>plain document</body></html>";
    assert_eq!(render(text, "date", "server"), text);
}

#[test]
fn test_render_with_empty_input() {
    assert_eq!(render("", "date", "server"), "");
}

#[test]
fn test_mountain_date_format() {
    let date = mountain_date_now();

    // Medium date/time format, e.g. "Aug 23, 2026 1:05:09 PM".
    assert!(date.ends_with("AM") || date.ends_with("PM"));
    assert!(date.contains(','));
    assert!(!date.contains("GMT"));
}
