//! The static response path.

use anyhow::Context;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::mime;
use crate::http::request::Method;
use crate::http::writer;

/// Serves a static file whose existence and readability were already
/// checked by the dispatcher.
///
/// Writes the full header block, then for GET reads the whole file and
/// writes it. A HEAD request stops after the headers. An open/read
/// failure here means the file changed under us after the stat; the
/// error propagates and the connection is dropped without a second
/// response.
pub async fn serve<W>(
    stream: &mut W,
    path: &str,
    size: u64,
    method: Method,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let content_type = mime::content_type(path);
    writer::write_static_head(stream, size, content_type).await?;

    tracing::debug!(path, size, content_type, "Serving static file");

    if !method.wants_body() {
        return Ok(());
    }

    // Whole file held in memory for the duration of the write.
    let body = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {path}"))?;
    stream.write_all(&body).await?;

    Ok(())
}
