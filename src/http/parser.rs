use crate::http::request::RequestLine;

/// Longest method or URL token kept; excess bytes are dropped silently.
pub const MAX_TOKEN: usize = 254;

/// Extracts the method and URL tokens from a request line.
///
/// The method is the leading run of non-whitespace bytes, the URL the next
/// run after any amount of whitespace. The HTTP version token and anything
/// following it are ignored. Tokens are capped at [`MAX_TOKEN`] bytes and
/// decoded lossily, so no input can fail the parse; a garbage line simply
/// yields tokens that classify the request as unimplemented downstream.
pub fn parse_request_line(line: &[u8]) -> RequestLine {
    let (method, after_method) = token(line, 0);

    let mut i = after_method;
    while i < line.len() && line[i].is_ascii_whitespace() {
        i += 1;
    }

    let (url, _) = token(line, i);

    RequestLine { method, url }
}

/// Reads one non-whitespace run starting at `start`, truncating at the
/// token cap. Returns the token and the index just past the full run.
fn token(line: &[u8], start: usize) -> (String, usize) {
    let mut end = start;
    while end < line.len() && !line[end].is_ascii_whitespace() && end - start < MAX_TOKEN {
        end += 1;
    }
    let tok = String::from_utf8_lossy(&line[start..end]).into_owned();

    // skip the tail of an oversized token
    while end < line.len() && !line[end].is_ascii_whitespace() {
        end += 1;
    }

    (tok, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let line = parse_request_line(b"GET /index.html HTTP/1.0");

        assert_eq!(line.method, "GET");
        assert_eq!(line.url, "/index.html");
        assert!(line.is_get());
    }
}
