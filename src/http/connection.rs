use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::config::ContentConfig;
use crate::content::resource::{self, Resource, ResourceKind};
use crate::content::{dynamic, static_files};
use crate::http::parser::{self, ParseError};
use crate::http::response::StatusCode;
use crate::http::writer;

/// Maximum accepted length of a request or header line, terminator
/// included. Longer input is rejected as malformed.
const MAX_LINE_BYTES: usize = 8192;

/// Outcome of one bounded line read.
enum Line {
    Complete(String),
    TooLong,
    Eof,
}

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    content: ContentConfig,
}

impl Connection {
    pub fn new(stream: TcpStream, content: ContentConfig) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            content,
        }
    }

    /// Performs one request/response cycle and returns.
    ///
    /// Every recognized failure is answered with a complete error
    /// response; the returned `Err` covers only I/O failures, after
    /// which the connection is dropped mid-response.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let line = match self.read_line().await? {
            Line::Complete(line) => line,
            Line::TooLong => {
                return self
                    .reject(StatusCode::BadRequest, "request line", "Line too long")
                    .await;
            }
            // Client connected and left without sending anything.
            Line::Eof => return Ok(()),
        };

        let request = match parser::parse_request_line(&line) {
            Ok(request) => request,
            Err(ParseError::UnsupportedMethod(method)) => {
                // No further reads on this connection.
                return self
                    .reject(
                        StatusCode::NotImplemented,
                        &method,
                        "Wicket does not implement this method",
                    )
                    .await;
            }
            Err(ParseError::MalformedRequestLine) => {
                return self
                    .reject(
                        StatusCode::BadRequest,
                        line.trim(),
                        "Wicket couldn't parse the request line",
                    )
                    .await;
            }
        };

        tracing::debug!(
            method = request.method.as_str(),
            target = %request.target,
            version = %request.version,
            "Request received"
        );

        if !self.drain_headers().await? {
            return self
                .reject(
                    StatusCode::BadRequest,
                    "request headers",
                    "Wicket couldn't read the request head",
                )
                .await;
        }

        let res = Resource::resolve(&request.target, &self.content);

        let meta = match tokio::fs::metadata(&res.path).await {
            Ok(meta) => meta,
            Err(_) => {
                return self
                    .reject(
                        StatusCode::NotFound,
                        &res.path,
                        "Wicket couldn't find this file",
                    )
                    .await;
            }
        };

        if !resource::is_servable(&meta) {
            let detail = match res.kind {
                ResourceKind::Static => "Wicket couldn't read the file",
                ResourceKind::Dynamic => "Wicket couldn't run the handler program",
            };
            return self.reject(StatusCode::Forbidden, &res.path, detail).await;
        }

        match res.kind {
            ResourceKind::Static => {
                static_files::serve(&mut self.stream, &res.path, meta.len(), request.method)
                    .await
            }
            ResourceKind::Dynamic => {
                dynamic::serve(&mut self.stream, &res.path, &res.args, request.method).await
            }
        }
    }

    async fn reject(
        &mut self,
        status: StatusCode,
        cause: &str,
        detail: &str,
    ) -> anyhow::Result<()> {
        writer::write_error(&mut self.stream, status, cause, detail).await
    }

    /// Consumes header lines until the empty line that terminates the
    /// head. Header content is discarded, never interpreted. Returns
    /// false if the head was truncated or a line exceeded the bound.
    async fn drain_headers(&mut self) -> anyhow::Result<bool> {
        loop {
            match self.read_line().await? {
                Line::Complete(line) if line.is_empty() => return Ok(true),
                Line::Complete(_) => continue,
                Line::TooLong | Line::Eof => return Ok(false),
            }
        }
    }

    /// Reads one `\n`-terminated line, stripping the terminator and an
    /// optional preceding `\r`. Bounded by `MAX_LINE_BYTES`.
    async fn read_line(&mut self) -> anyhow::Result<Line> {
        loop {
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                if pos + 1 > MAX_LINE_BYTES {
                    return Ok(Line::TooLong);
                }

                let mut line = self.buffer.split_to(pos + 1);
                line.truncate(pos);
                if line.last() == Some(&b'\r') {
                    line.truncate(line.len() - 1);
                }

                return Ok(Line::Complete(
                    String::from_utf8_lossy(&line).into_owned(),
                ));
            }

            if self.buffer.len() >= MAX_LINE_BYTES {
                return Ok(Line::TooLong);
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;
            if n == 0 {
                return Ok(Line::Eof);
            }
        }
    }
}
