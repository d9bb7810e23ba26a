/// Represents the parsed request line of an HTTP request.
///
/// Only the method and URL tokens carry meaning here; the version token and
/// anything else on the line is discarded during parsing. Both tokens are
/// bounded-length and immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The method token, exactly as sent (e.g. "GET", "post")
    pub method: String,
    /// The URL token (e.g. "/index.html")
    pub url: String,
}

impl RequestLine {
    /// Whether this request uses the one method the server implements.
    ///
    /// The comparison is case-insensitive: `get`, `Get` and `GET` are all
    /// accepted. Every other method (or an empty line) is answered with
    /// 501 before any filesystem access happens.
    pub fn is_get(&self) -> bool {
        self.method.eq_ignore_ascii_case("GET")
    }
}
