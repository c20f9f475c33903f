use crate::http::request::{Method, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request line did not contain exactly three tokens.
    MalformedRequestLine,
    /// Method token was something other than GET/HEAD; carries the token
    /// so it can be echoed into the error body.
    UnsupportedMethod(String),
}

/// Parses a request line of the form `METHOD SP TARGET SP VERSION`.
///
/// Exactly three whitespace-separated tokens are required; anything else
/// is malformed. The line is expected with its terminator already
/// stripped.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let mut tokens = line.split_whitespace();

    let method_token = tokens.next().ok_or(ParseError::MalformedRequestLine)?;
    let target = tokens.next().ok_or(ParseError::MalformedRequestLine)?;
    let version = tokens.next().ok_or(ParseError::MalformedRequestLine)?;

    if tokens.next().is_some() {
        return Err(ParseError::MalformedRequestLine);
    }

    let method = Method::parse(method_token)
        .ok_or_else(|| ParseError::UnsupportedMethod(method_token.to_string()))?;

    Ok(Request {
        method,
        target: target.to_string(),
        version: version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_request_line("GET /home.html HTTP/1.0").unwrap();

        assert_eq!(req.method, Method::Get);
        assert_eq!(req.target, "/home.html");
        assert_eq!(req.version, "HTTP/1.0");
    }

    #[test]
    fn missing_version_is_malformed() {
        let result = parse_request_line("GET /home.html");

        assert_eq!(result.unwrap_err(), ParseError::MalformedRequestLine);
    }
}
