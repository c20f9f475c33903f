use bytes::BytesMut;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{self, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.0";

/// Token asserted in the `Server` header of every non-error response.
pub const SERVER_NAME: &str = "Wicket Web Server";

fn status_line(status: StatusCode) -> String {
    format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    )
}

/// Serializes a complete error response: status line, `Content-type`,
/// `Content-length`, blank line, HTML body. No other headers are emitted.
///
/// Note: serialization is public for integration testing purposes.
pub fn serialize_error(status: StatusCode, cause: &str, detail: &str) -> BytesMut {
    let body = response::error_body(status, cause, detail);

    let mut buf = BytesMut::new();
    buf.extend_from_slice(status_line(status).as_bytes());
    buf.extend_from_slice(b"Content-type: text/html\r\n");
    buf.extend_from_slice(format!("Content-length: {}\r\n\r\n", body.len()).as_bytes());
    buf.extend_from_slice(body.as_bytes());

    buf
}

/// Serializes the full header block of a static response, terminated by
/// the blank line. The body (if any) follows separately.
pub fn serialize_static_head(size: u64, content_type: &str) -> BytesMut {
    let mut buf = BytesMut::new();
    buf.extend_from_slice(status_line(StatusCode::Ok).as_bytes());
    buf.extend_from_slice(format!("Server: {SERVER_NAME}\r\n").as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");
    buf.extend_from_slice(format!("Content-length: {size}\r\n").as_bytes());
    buf.extend_from_slice(format!("Content-type: {content_type}\r\n\r\n").as_bytes());

    buf
}

/// Serializes the partial head written before a handler process takes
/// over: status line and server line only. No blank line, no Content-*
/// headers; the handler owns the remainder of the response.
pub fn serialize_dynamic_preamble() -> BytesMut {
    let mut buf = BytesMut::new();
    buf.extend_from_slice(status_line(StatusCode::Ok).as_bytes());
    buf.extend_from_slice(format!("Server: {SERVER_NAME}\r\n").as_bytes());

    buf
}

pub async fn write_error<W>(
    stream: &mut W,
    status: StatusCode,
    cause: &str,
    detail: &str,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    stream.write_all(&serialize_error(status, cause, detail)).await?;
    Ok(())
}

pub async fn write_static_head<W>(
    stream: &mut W,
    size: u64,
    content_type: &str,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    stream.write_all(&serialize_static_head(size, content_type)).await?;
    Ok(())
}

pub async fn write_dynamic_preamble<W>(stream: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    stream.write_all(&serialize_dynamic_preamble()).await?;
    Ok(())
}
