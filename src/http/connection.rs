use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error};

use crate::config::Config;
use crate::http::media::MediaKind;
use crate::http::parser::read_request;
use crate::http::response::{self, NOT_FOUND_BODY, Status};
use crate::http::template;

const COPY_BUF_SIZE: usize = 1024;

/// Handles one client connection carrying exactly one request.
///
/// The handler is strictly sequential: the full request is read before any
/// header byte is written, and the full header block is written before any
/// body byte. No state is shared across connections, so concurrent handlers
/// need no synchronization.
pub struct Connection<S> {
    stream: S,
    config: Config,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, config: Config) -> Self {
        Self { stream, config }
    }

    /// Runs the request/response exchange, then shuts the stream down.
    ///
    /// A missing resource is not an error here; it produces a 404 response.
    /// File-read faults on an existing resource are logged and degrade to a
    /// truncated or empty body. Only transport failures surface as `Err`,
    /// to be logged by the spawning task.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        debug!("Handling connection...");

        let (read_half, mut write_half) = tokio::io::split(&mut self.stream);
        let mut reader = BufReader::new(read_half);

        let path = read_request(&mut reader).await;
        debug!("Resource path = ({})", path);

        let file_path = self.config.document_root.join(&path);

        if is_servable(&file_path).await {
            let kind = MediaKind::from_path(&path);
            response::write_header(
                &mut write_half,
                Status::Ok,
                kind.content_type(),
                &self.config.server_name,
            )
            .await?;

            if kind.is_binary() {
                copy_file_bytes(&file_path, &mut write_half).await?;
            } else {
                write_templated(&file_path, &self.config.server_name, &mut write_half).await?;
            }
        } else {
            response::write_header(
                &mut write_half,
                Status::NotFound,
                MediaKind::Html.content_type(),
                &self.config.server_name,
            )
            .await?;
            write_half.write_all(NOT_FOUND_BODY.as_bytes()).await?;
        }

        write_half.flush().await?;
        write_half.shutdown().await?;

        debug!("Done handling connection.");
        Ok(())
    }
}

/// A resource is servable when it exists and is a regular file. Directories
/// and missing paths both produce a 404.
async fn is_servable(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) => meta.is_file(),
        Err(_) => false,
    }
}

/// Reads a text resource, substitutes the date and server placeholders, and
/// writes the result as the body. A file that cannot be read yields an
/// empty body after the already-written header.
async fn write_templated<W: AsyncWrite + Unpin>(
    path: &Path,
    server_name: &str,
    out: &mut W,
) -> std::io::Result<()> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            error!("Cannot read file {}: {}", path.display(), e);
            return Ok(());
        }
    };

    let body = template::render(&text, &template::mountain_date_now(), server_name);
    out.write_all(body.as_bytes()).await
}

/// Streams a binary resource verbatim through a fixed-size buffer.
///
/// Each iteration writes only the bytes filled by the last read, so the
/// output is byte-identical to the file. The bytes never pass through a
/// text decode, which would corrupt image data. A read fault mid-file ends
/// the copy early; the partial body stands and the connection closes.
async fn copy_file_bytes<W: AsyncWrite + Unpin>(
    path: &Path,
    out: &mut W,
) -> std::io::Result<()> {
    let mut file = match File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            error!("Cannot open file {}: {}", path.display(), e);
            return Ok(());
        }
    };

    let mut buf = [0u8; COPY_BUF_SIZE];
    loop {
        let n = match file.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                error!("Read error on {}: {}", path.display(), e);
                break;
            }
        };
        out.write_all(&buf[..n]).await?;
    }

    Ok(())
}
