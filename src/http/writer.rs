use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{
    NOT_FOUND_BODY, NOT_IMPLEMENTED_BODY, Outcome, SERVER, StatusCode,
};

const HTTP_VERSION: &str = "HTTP/1.0";

/// Chunk size for streaming file bodies.
const BUFFER_SIZE: usize = 8192;

fn serialize_head(status: StatusCode) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers. No Content-Length: the client detects end-of-body by the
    // connection closing, and the content type is always text/html
    // regardless of what the file actually holds.
    buf.extend_from_slice(format!("Server: {}\r\n", SERVER).as_bytes());
    buf.extend_from_slice(b"Content-Type: text/html\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Frames and writes exactly one response.
///
/// Consuming `send` makes a second response on the same connection
/// unrepresentable.
pub struct ResponseWriter<'a, W> {
    stream: &'a mut W,
}

impl<'a, W: AsyncWrite + Unpin> ResponseWriter<'a, W> {
    pub fn new(stream: &'a mut W) -> Self {
        Self { stream }
    }

    pub async fn send(mut self, outcome: Outcome) -> anyhow::Result<()> {
        self.stream.write_all(&serialize_head(outcome.status())).await?;

        match outcome {
            Outcome::Ok(file) => self.stream_body(file).await?,
            Outcome::NotFound => self.stream.write_all(NOT_FOUND_BODY.as_bytes()).await?,
            Outcome::NotImplemented => {
                self.stream.write_all(NOT_IMPLEMENTED_BODY.as_bytes()).await?
            }
        }

        self.stream.flush().await?;
        Ok(())
    }

    /// Streams the file in binary chunks until exhausted. Byte-safe:
    /// embedded NUL bytes and non-text content pass through unchanged.
    async fn stream_body(&mut self, mut file: File) -> anyhow::Result<()> {
        let mut buf = [0u8; BUFFER_SIZE];
        loop {
            let n = file.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            self.stream.write_all(&buf[..n]).await?;
        }
        Ok(())
    }
}
