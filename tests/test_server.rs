//! End-to-end dispatch tests over a real socket
//!
//! Each test stands up a server on an ephemeral port with a temporary
//! content root, sends one raw request, and reads the response until the
//! server closes the connection.

use std::net::SocketAddr;
use std::path::Path;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use wicket::config::Config;
use wicket::server::listener::Listener;

async fn spawn_server(root: &Path) -> SocketAddr {
    let mut cfg = Config::default();
    cfg.server.listen_addr = "127.0.0.1:0".to_string();
    cfg.content.root = root.to_str().unwrap().to_string();

    let listener = Listener::bind(&cfg).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = listener.run().await;
    });

    addr
}

async fn roundtrip(addr: SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8_lossy(&buf).into_owned()
}

fn split_response(raw: &str) -> (&str, &str) {
    raw.split_once("\r\n\r\n").expect("response has no head")
}

#[tokio::test]
async fn test_get_static_file() {
    let root = tempfile::tempdir().unwrap();
    let content = "x".repeat(120);
    std::fs::write(root.path().join("hello.html"), &content).unwrap();
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "GET /hello.html HTTP/1.0\r\nHost: test\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.0 200 OK\r\n"));
    assert!(head.contains("Server: Wicket Web Server"));
    assert!(head.contains("Connection: close"));
    assert!(head.contains("Content-length: 120"));
    assert!(head.contains("Content-type: text/html"));
    assert_eq!(body, content);
}

#[tokio::test]
async fn test_head_suppresses_body() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("hello.html"), "x".repeat(120)).unwrap();
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "HEAD /hello.html HTTP/1.0\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.0 200 OK\r\n"));
    assert!(head.contains("Content-length: 120"));
    assert_eq!(body, "");
}

#[tokio::test]
async fn test_trailing_slash_serves_index_document() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("home.html"), "<html>front door</html>").unwrap();
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "GET / HTTP/1.0\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.0 200 OK\r\n"));
    assert_eq!(body, "<html>front door</html>");
}

#[tokio::test]
async fn test_unknown_suffix_served_as_plain_text() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("notes.txt"), "plain").unwrap();
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "GET /notes.txt HTTP/1.0\r\n\r\n").await;
    let (head, _) = split_response(&raw);

    assert!(head.contains("Content-type: text/plain"));
}

#[tokio::test]
async fn test_missing_file_is_404_with_cause() {
    let root = tempfile::tempdir().unwrap();
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "GET /missing.html HTTP/1.0\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.0 404 Not Found\r\n"));
    // The resolved filename is echoed into the body as the cause.
    let resolved = format!("{}/missing.html", root.path().to_str().unwrap());
    assert!(body.contains(&resolved));
}

#[tokio::test]
async fn test_post_is_not_implemented() {
    let root = tempfile::tempdir().unwrap();
    let addr = spawn_server(root.path()).await;

    // Only the request line is sent: the server answers without reading
    // anything further on the connection.
    let raw = roundtrip(addr, "POST /form HTTP/1.0\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.0 501 Not Implemented\r\n"));
    assert!(body.contains("POST"));
}

#[tokio::test]
async fn test_malformed_request_line_is_bad_request() {
    let root = tempfile::tempdir().unwrap();
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "GET /hello.html\r\n").await;
    let (head, _) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.0 400 Bad Request\r\n"));
}

#[tokio::test]
async fn test_oversized_request_line_is_bad_request() {
    let root = tempfile::tempdir().unwrap();
    let addr = spawn_server(root.path()).await;

    // Exactly the line bound, with no terminator in sight: the server
    // consumes all of it and rejects without reading further.
    let mut raw_request = String::from("GET /");
    raw_request.push_str(&"x".repeat(8192 - raw_request.len()));
    let raw = roundtrip(addr, &raw_request).await;
    let (head, _) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.0 400 Bad Request\r\n"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_file_is_forbidden() {
    use std::os::unix::fs::PermissionsExt;

    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("secret.html");
    std::fs::write(&path, "classified").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o200)).unwrap();
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "GET /secret.html HTTP/1.0\r\n\r\n").await;
    let (head, _) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.0 403 Forbidden\r\n"));
}

#[tokio::test]
async fn test_directory_target_is_forbidden() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir(root.path().join("sub")).unwrap();
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "GET /sub HTTP/1.0\r\n\r\n").await;
    let (head, _) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.0 403 Forbidden\r\n"));
}

#[cfg(unix)]
fn install_echo_handler(root: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let dir = root.join("cgi-bin");
    std::fs::create_dir(&dir).unwrap();
    let script = dir.join("echo.sh");
    std::fs::write(
        &script,
        "#!/bin/sh\nprintf 'Content-type: text/plain\\r\\n\\r\\nargs=%s method=%s' \"$QUERY_STRING\" \"$REQUEST_METHOD\"\n",
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[tokio::test]
async fn test_dynamic_handler_receives_query_and_method() {
    let root = tempfile::tempdir().unwrap();
    install_echo_handler(root.path());
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "GET /cgi-bin/echo.sh?a=3&b=4 HTTP/1.0\r\n\r\n").await;

    // The core writes the status and server lines; the handler finishes
    // the head and writes the body.
    assert!(raw.starts_with("HTTP/1.0 200 OK\r\nServer: Wicket Web Server\r\n"));
    assert!(raw.contains("args=a=3&b=4 method=GET"));

    // Content-type comes from the handler alone, and nobody wrote a
    // Content-length.
    assert_eq!(raw.matches("Content-type:").count(), 1);
    assert_eq!(raw.matches("Content-length:").count(), 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_dynamic_handler_sees_head_method() {
    let root = tempfile::tempdir().unwrap();
    install_echo_handler(root.path());
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "HEAD /cgi-bin/echo.sh HTTP/1.0\r\n\r\n").await;

    // The method is passed through; suppressing the body is the
    // handler's decision, not the core's.
    assert!(raw.contains("method=HEAD"));
    assert!(raw.contains("args= "));
}

#[cfg(unix)]
#[tokio::test]
async fn test_missing_handler_is_404() {
    let root = tempfile::tempdir().unwrap();
    let addr = spawn_server(root.path()).await;

    let raw = roundtrip(addr, "GET /cgi-bin/nope?x=1 HTTP/1.0\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.0 404 Not Found\r\n"));
    // The cause is the resolved path, query stripped.
    assert!(body.contains("/cgi-bin/nope"));
    assert!(!body.contains("x=1"));
}

#[tokio::test]
async fn test_connection_closed_after_response() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("home.html"), "hi").unwrap();
    let addr = spawn_server(root.path()).await;

    // read_to_end in roundtrip only returns because the server closes
    // the connection after one cycle; a second request on a new
    // connection is served by the same sequential loop.
    let first = roundtrip(addr, "GET / HTTP/1.0\r\n\r\n").await;
    let second = roundtrip(addr, "GET / HTTP/1.0\r\n\r\n").await;

    assert!(first.starts_with("HTTP/1.0 200 OK\r\n"));
    assert!(second.starts_with("HTTP/1.0 200 OK\r\n"));
}
