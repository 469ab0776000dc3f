use chrono::{FixedOffset, Offset, Utc};

/// Placeholder replaced by the current date in served HTML documents.
pub const DATE_TOKEN: &str = "<cs371date>";
/// Placeholder replaced by the server identification string.
pub const SERVER_TOKEN: &str = "<cs371server>";

// Mountain Standard Time, the fixed zone used for the body date. The
// header's Date is rendered in GMT, so the two are deliberately distinct.
const MOUNTAIN_OFFSET_SECS: i32 = -7 * 3600;

/// Replaces every occurrence of the date and server placeholders.
///
/// This is a plain literal replace, not a templating language; each token
/// may appear zero, one, or many times.
pub fn render(text: &str, date: &str, server_name: &str) -> String {
    text.replace(DATE_TOKEN, date)
        .replace(SERVER_TOKEN, server_name)
}

/// Renders the current time at the fixed Mountain offset, in a
/// locale-independent medium date/time format.
pub fn mountain_date_now() -> String {
    let offset = FixedOffset::east_opt(MOUNTAIN_OFFSET_SECS)
        .unwrap_or_else(|| Utc.fix());
    Utc::now()
        .with_timezone(&offset)
        .format("%b %-d, %Y %-I:%M:%S %p")
        .to_string()
}
