use std::path::PathBuf;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::config::SiteConfig;
use crate::http::line_reader::LineReader;
use crate::http::parser::parse_request_line;
use crate::http::request::RequestLine;
use crate::http::resolver::{self, Resolution};
use crate::http::response::Outcome;
use crate::http::writer::ResponseWriter;

/// Drives one connection through a single request/response cycle.
///
/// The handler owns the connection for exactly one cycle; the listener
/// closes the socket when `run` returns. Nothing is retained between
/// connections.
pub struct Connection<R, W> {
    reader: LineReader<R>,
    writer: W,
    site: SiteConfig,
    state: State,
}

pub enum State {
    ReadRequestLine,
    Parsed(RequestLine),
    Resolve(RequestLine),
    Drain(Resolution),
    Open(PathBuf),
    Respond(Outcome),
    Done,
}

impl<R, W> Connection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, site: SiteConfig) -> Self {
        Self {
            reader: LineReader::new(reader),
            writer,
            site,
            state: State::ReadRequestLine,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::ReadRequestLine => {
                    match self.reader.read_line().await? {
                        Some(line) => {
                            self.state = State::Parsed(parse_request_line(&line));
                        }
                        None => {
                            // closed before sending anything; no response owed
                            tracing::debug!("Connection closed before request line");
                        }
                    }
                }

                State::Parsed(req) => {
                    tracing::debug!(method = %req.method, url = %req.url, "Request line parsed");

                    if req.is_get() {
                        self.state = State::Resolve(req);
                    } else {
                        // 501 goes out immediately, remaining header lines unread
                        self.state = State::Respond(Outcome::NotImplemented);
                    }
                }

                State::Resolve(req) => {
                    let resolution =
                        resolver::resolve(&self.site.root, &req.url, &self.site.index).await;
                    self.state = State::Drain(resolution);
                }

                State::Drain(resolution) => {
                    // discard header lines up to the blank line or close
                    while let Some(line) = self.reader.read_line().await? {
                        if line.is_empty() {
                            break;
                        }
                    }

                    self.state = match resolution {
                        Resolution::File(path) => State::Open(path),
                        Resolution::NotFound => State::Respond(Outcome::NotFound),
                    };
                }

                State::Open(path) => {
                    // a path that stats as a file can still fail to open
                    // (permissions, or it vanished since the stat)
                    self.state = match File::open(&path).await {
                        Ok(file) => State::Respond(Outcome::Ok(file)),
                        Err(e) => {
                            tracing::debug!(path = %path.display(), error = %e, "Open failed");
                            State::Respond(Outcome::NotFound)
                        }
                    };
                }

                State::Respond(outcome) => {
                    let status = outcome.status().as_u16();
                    ResponseWriter::new(&mut self.writer).send(outcome).await?;
                    tracing::debug!(status, "Response sent");
                }

                State::Done => {
                    break;
                }
            }
        }

        Ok(())
    }
}
