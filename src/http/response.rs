use tokio::fs::File;

/// Server identification sent with every response.
pub const SERVER: &str = "hearth/0.1.0";

/// HTTP status codes the server can answer with.
///
/// There are exactly three:
/// - `Ok` (200): the URL resolved to a readable regular file
/// - `NotFound` (404): the URL resolved to nothing servable
/// - `NotImplemented` (501): any method other than GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 NOT FOUND
    NotFound,
    /// 501 Method Not Implemented
    NotImplemented,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "NOT FOUND",
            StatusCode::NotImplemented => "Method Not Implemented",
        }
    }
}

/// The single per-connection decision of what to send back.
///
/// Each connection produces exactly one `Outcome`, and the writer consumes
/// it to emit exactly one response.
#[derive(Debug)]
pub enum Outcome {
    /// Stream this open file as the body
    Ok(File),
    /// Fixed not-found error page
    NotFound,
    /// Fixed unsupported-method error page
    NotImplemented,
}

impl Outcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Ok(_) => StatusCode::Ok,
            Outcome::NotFound => StatusCode::NotFound,
            Outcome::NotImplemented => StatusCode::NotImplemented,
        }
    }
}

/// Body sent with a 404 response.
pub const NOT_FOUND_BODY: &str = "<HTML><TITLE>Not Found</TITLE>\r\n\
<BODY><P>The server could not fulfill\r\n\
your request because the resource specified\r\n\
is unavailable or nonexistent.\r\n\
</BODY></HTML>\r\n";

/// Body sent with a 501 response.
pub const NOT_IMPLEMENTED_BODY: &str = "<HTML><HEAD><TITLE>Method Not Implemented\r\n\
</TITLE></HEAD>\r\n\
<BODY><P>HTTP request method not supported.\r\n\
</BODY></HTML>\r\n";
