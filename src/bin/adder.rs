//! Sample handler program: adds two numbers taken from the query string.
//!
//! Invoked by the server with `QUERY_STRING` and `REQUEST_METHOD` in its
//! environment and its standard output feeding the connection. The server
//! has already written the status and server lines; this program finishes
//! the head and writes the body for GET requests.

use std::io::Write;

fn parse_operands(query: &str) -> (i64, i64) {
    let mut n1 = 0;
    let mut n2 = 0;

    if let Some((first, second)) = query.split_once('&') {
        if let Some((_, value)) = first.split_once('=') {
            n1 = value.parse().unwrap_or(0);
        }
        if let Some((_, value)) = second.split_once('=') {
            n2 = value.parse().unwrap_or(0);
        }
    }

    (n1, n2)
}

fn main() {
    let query = std::env::var("QUERY_STRING").unwrap_or_default();
    let method = std::env::var("REQUEST_METHOD").unwrap_or_default();

    let (n1, n2) = parse_operands(&query);

    let mut content = String::new();
    content.push_str("Welcome to add.com: ");
    content.push_str("The Internet addition portal.\r\n<p>");
    content.push_str(&format!(
        "The answer is: {} + {} = {}\r\n<p>",
        n1,
        n2,
        n1 + n2
    ));
    content.push_str("Thanks for visiting!\r\n");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let _ = write!(out, "Connection: close\r\n");
    let _ = write!(out, "Content-length: {}\r\n", content.len());
    let _ = write!(out, "Content-type: text/html\r\n\r\n");
    if method.eq_ignore_ascii_case("GET") {
        let _ = write!(out, "{content}");
    }
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_operands() {
        assert_eq!(parse_operands("a=3&b=4"), (3, 4));
    }

    #[test]
    fn missing_or_junk_operands_default_to_zero() {
        assert_eq!(parse_operands(""), (0, 0));
        assert_eq!(parse_operands("a=x&b=2"), (0, 2));
    }
}
