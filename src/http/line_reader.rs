use bytes::{Buf, Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Longest line handed back in one piece, terminator included.
pub const MAX_LINE: usize = 1024;

/// Tokenizes a raw byte stream into terminator-delimited lines.
///
/// A line ends at `\n`, at `\r\n` (consumed as a single terminator), or at
/// a `\r` followed by anything else, in which case the following byte is
/// left in place for the next read. Lines are buffered internally, so the
/// reader must own the stream for the lifetime of the connection.
pub struct LineReader<R> {
    stream: R,
    buf: BytesMut,
    eof: bool,
    max_line: usize,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(stream: R) -> Self {
        Self::with_limit(stream, MAX_LINE)
    }

    pub fn with_limit(stream: R, max_line: usize) -> Self {
        Self {
            stream,
            buf: BytesMut::with_capacity(max_line),
            eof: false,
            max_line,
        }
    }

    /// Reads the next line, with the terminator stripped.
    ///
    /// Returns `None` once the stream is exhausted and no buffered bytes
    /// remain; a blank line comes back as `Some` of an empty slice. A line
    /// longer than the limit is handed back in `max_line - 1` byte slices,
    /// with the remainder left buffered for subsequent calls. A partial
    /// line cut off by the stream closing is returned as-is.
    pub async fn read_line(&mut self) -> std::io::Result<Option<Bytes>> {
        let mut scanned = 0;

        loop {
            let limit = self.buf.len().min(self.max_line - 1);
            let mut need_lookahead = false;

            while scanned < limit {
                match self.buf[scanned] {
                    b'\n' => {
                        let line = self.buf.split_to(scanned).freeze();
                        self.buf.advance(1);
                        return Ok(Some(line));
                    }
                    b'\r' => {
                        if scanned + 1 < self.buf.len() {
                            let line = self.buf.split_to(scanned).freeze();
                            // \r\n collapses to one terminator; a lone \r
                            // terminates and leaves the next byte unread
                            if self.buf[1] == b'\n' {
                                self.buf.advance(2);
                            } else {
                                self.buf.advance(1);
                            }
                            return Ok(Some(line));
                        }
                        if self.eof {
                            let line = self.buf.split_to(scanned).freeze();
                            self.buf.advance(1);
                            return Ok(Some(line));
                        }
                        // need one more byte to see past the \r
                        need_lookahead = true;
                        break;
                    }
                    _ => scanned += 1,
                }
            }

            if !need_lookahead {
                if scanned >= self.max_line - 1 {
                    return Ok(Some(self.buf.split_to(scanned).freeze()));
                }
                if self.eof {
                    if self.buf.is_empty() {
                        return Ok(None);
                    }
                    return Ok(Some(self.buf.split().freeze()));
                }
            }

            let n = self.stream.read_buf(&mut self.buf).await?;
            if n == 0 {
                self.eof = true;
            }
        }
    }
}
