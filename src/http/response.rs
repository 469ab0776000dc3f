use tokio::io::{AsyncWrite, AsyncWriteExt};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Fixed HTML fragment served as the entire body of every 404 response.
pub const NOT_FOUND_BODY: &str = "\
<html><head><title>404 - File or directory not found.</title></head><body>\n\
<h3>404 Not Found</h3>\n\
</body></html>\n";

/// HTTP status codes produced by the server.
///
/// Only these two are ever emitted: a missing or unreadable resource is a
/// 404, and every other failure degrades to closing the connection rather
/// than a 500-class status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl Status {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::NotFound => "Not Found",
        }
    }
}

fn serialize_header(status: Status, content_type: &str, server_name: &str, date: &str) -> String {
    format!(
        "{} {} {}\n\
         Date: {}\n\
         Server: {}\n\
         Connection: close\n\
         Content-Type: {}\n\
         \n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason(),
        date,
        server_name,
        content_type,
    )
}

/// Writes the complete status line and header block for one response.
///
/// Headers are emitted in a fixed order and the block is closed by one
/// blank line before any body bytes. No `Content-Length` is sent: the body
/// is framed by the connection closing, which is why `Connection: close`
/// appears on every response.
pub async fn write_header<W: AsyncWrite + Unpin>(
    out: &mut W,
    status: Status,
    content_type: &str,
    server_name: &str,
) -> std::io::Result<()> {
    let date = httpdate::fmt_http_date(std::time::SystemTime::now());
    let header = serialize_header(status, content_type, server_name, &date);
    out.write_all(header.as_bytes()).await
}
