/// HTTP request methods.
///
/// Represents the HTTP method/verb of a request. The server implements
/// resource retrieval only: GET serves the resource, HEAD serves its
/// headers. Any other method is rejected with 501 Not Implemented before
/// the rest of the request is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// HEAD - Like GET but without the response body
    Head,
}

impl Method {
    /// Parses an HTTP method from a string, case-insensitively.
    ///
    /// # Returns
    ///
    /// `Some(Method)` for GET/HEAD in any casing, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use wicket::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Some(Method::Get));
    /// assert_eq!(Method::parse("head"), Some(Method::Head));
    /// assert_eq!(Method::parse("POST"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("GET") {
            Some(Method::Get)
        } else if s.eq_ignore_ascii_case("HEAD") {
            Some(Method::Head)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
        }
    }

    /// Whether a response to this method carries a body.
    pub fn wants_body(&self) -> bool {
        matches!(self, Method::Get)
    }
}

/// Represents a parsed HTTP request line.
///
/// Header lines are drained but never interpreted, so this is all the
/// request state the dispatcher carries. Immutable once parsed; lives for
/// one connection.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET or HEAD)
    pub method: Method,
    /// The request target as received, path plus optional query
    /// (e.g. `/cgi-bin/adder?a=3&b=4`)
    pub target: String,
    /// Protocol version token (informational only, not negotiated)
    pub version: String,
}
