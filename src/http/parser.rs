use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error};

const GET_PREFIX: &str = "GET ";

/// Reads one request's header lines and returns the resource path.
///
/// Lines are consumed until the blank line terminating the header block or
/// until the stream ends. The first line starting with `GET ` supplies the
/// path; every other line is discarded. A malformed or absent request line
/// yields an empty path, which the caller treats as "not found".
///
/// Read errors are not fatal: they end the loop early and whatever path was
/// captured so far is returned.
pub async fn read_request<R: AsyncBufRead + Unpin>(reader: &mut R) -> String {
    let mut path = String::new();
    let mut seen_get = false;
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break,
            Ok(_) => {
                let line = line.trim_end_matches(['\r', '\n']);
                debug!("Request line: ({})", line);

                if line.is_empty() {
                    break;
                }

                if !seen_get && line.starts_with(GET_PREFIX) {
                    seen_get = true;
                    if let Some(p) = resource_path(line) {
                        path = p;
                    }
                }
            }
            Err(e) => {
                error!("Request read error: {}", e);
                break;
            }
        }
    }

    path
}

/// Extracts the resource path from a `GET` request line.
///
/// The leading `/` after the method is stripped and the remainder is cut at
/// the first space, so `GET /index.html HTTP/1.1` yields `index.html` and
/// `GET / HTTP/1.1` yields the empty string. Filenames containing spaces
/// are not supported.
pub fn resource_path(line: &str) -> Option<String> {
    let rest = line.strip_prefix(GET_PREFIX)?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let token = rest.split(' ').next().unwrap_or("");
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_simple_path() {
        let line = "GET /index.html HTTP/1.1";
        assert_eq!(resource_path(line).unwrap(), "index.html");
    }

    #[test]
    fn extract_root_path_is_empty() {
        let line = "GET / HTTP/1.1";
        assert_eq!(resource_path(line).unwrap(), "");
    }

    #[test]
    fn non_get_line_is_ignored() {
        assert!(resource_path("Host: example.com").is_none());
    }
}
