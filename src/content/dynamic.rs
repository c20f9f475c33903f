//! The dynamic response path.
//!
//! The server writes only a partial head (status line and server line);
//! the handler process owns the remainder of the response, including
//! whether a body is written at all. The handler is expected to check
//! the request method itself.

use std::process::{ExitStatus, Stdio};

use anyhow::Context;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::process::Command;

use crate::http::request::Method;
use crate::http::writer;

/// Environment entry carrying the raw, undecoded query string.
pub const QUERY_STRING: &str = "QUERY_STRING";

/// Environment entry carrying the request method name.
pub const REQUEST_METHOD: &str = "REQUEST_METHOD";

/// One handler-process invocation.
///
/// Wraps the spawn and the unbounded wait behind a single type so a
/// timeout policy could be added here without touching the dispatcher.
pub struct Handler {
    command: Command,
}

impl Handler {
    /// Prepares the program at `path` with the two request-derived
    /// environment entries merged into the parent environment. No
    /// arguments are passed; everything the handler needs arrives via
    /// the environment.
    pub fn new(path: &str, args: &str, method: Method) -> Self {
        let mut command = Command::new(path);
        command
            .env(QUERY_STRING, args)
            .env(REQUEST_METHOD, method.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped());

        Self { command }
    }

    /// Spawns the handler, streams its standard output to the connection
    /// until it closes, then waits for the process to terminate. There is
    /// no timeout: a hung handler stalls the connection until the server
    /// is killed externally.
    pub async fn run<W>(mut self, stream: &mut W) -> anyhow::Result<ExitStatus>
    where
        W: AsyncWrite + Unpin,
    {
        let mut child = self.command.spawn().context("Failed to spawn handler")?;
        let mut stdout = child
            .stdout
            .take()
            .context("Handler stdout was not captured")?;

        tokio::io::copy(&mut stdout, stream).await?;
        stream.flush().await?;

        Ok(child.wait().await?)
    }
}

/// Serves a dynamic resource whose existence and readability were already
/// checked by the dispatcher.
pub async fn serve<W>(
    stream: &mut W,
    path: &str,
    args: &str,
    method: Method,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer::write_dynamic_preamble(stream).await?;

    tracing::debug!(path, args, "Invoking handler");

    let status = Handler::new(path, args, method).run(stream).await?;
    if !status.success() {
        tracing::warn!(path, %status, "Handler exited with failure");
    }

    Ok(())
}
