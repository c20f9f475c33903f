/// HTTP status codes emitted by the server.
///
/// Status codes used in responses:
/// - `Ok` (200): Request successful
/// - `BadRequest` (400): Malformed request line
/// - `Forbidden` (403): Resource exists but is not a regular, readable file
/// - `NotFound` (404): Resource does not exist
/// - `NotImplemented` (501): Method other than GET/HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use wicket::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use wicket::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Builds the self-contained HTML body of an error response.
///
/// `cause` names the thing that failed (a filename, a method token);
/// `detail` is the longer human-readable description. Both are echoed
/// verbatim into the page.
pub fn error_body(status: StatusCode, cause: &str, detail: &str) -> String {
    let mut body = String::new();

    body.push_str("<html><title>Wicket Error</title>");
    body.push_str("<body bgcolor=\"ffffff\">\r\n");
    body.push_str(&format!(
        "{}: {}\r\n",
        status.as_u16(),
        status.reason_phrase()
    ));
    body.push_str(&format!("<p>{detail}: {cause}\r\n"));
    body.push_str("<hr><em>The Wicket Web Server</em>\r\n");

    body
}
