use crate::http::HTTP_VERSION;

/// Value of the fixed server identification header.
pub const SERVER_NAME: &str = "staticserve";

/// The single content type this server reports. File extensions are never
/// inspected; this is a deliberate simplification, not a gap.
pub const CONTENT_TYPE: &str = "text/html";

/// HTTP status codes produced by the server.
///
/// - `Ok` (200): Request served
/// - `BadRequest` (400): Malformed request line or target
/// - `Forbidden` (403): File exists but cannot be read
/// - `NotFound` (404): No file at the resolved path
/// - `InternalServerError` (500): Read fault on a file that resolved as servable
/// - `NotImplemented` (501): Method other than GET or HEAD
/// - `HttpVersionNotSupported` (505): Version other than HTTP/1.1
///
/// The closed enum is the status table: a code outside this set cannot be
/// constructed, so every response carries exactly one well-formed reason
/// phrase.
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
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
            StatusCode::HttpVersionNotSupported => 505,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
            StatusCode::HttpVersionNotSupported => "HTTP Version Not Supported",
        }
    }
}

/// A response ready to be serialized: a status code plus the body text
/// the header block describes.
///
/// Whether the body actually goes on the wire is the writer's concern
/// (HEAD reports the length but sends no bytes).
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Response body; empty for every non-200 outcome
    pub body: String,
}

impl Response {
    /// Creates a response with an empty body, used for every rejection
    /// and failure outcome.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Creates a 200 OK response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::Ok,
            body: body.into(),
        }
    }

    /// Byte length of the body, as reported in `Content-Length`.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    /// Builds the header block: status line, server identification,
    /// content type and content length, each line CRLF-terminated.
    ///
    /// Pure function of the response and the status table; the body is
    /// only consulted for its byte length.
    pub fn header_block(&self) -> String {
        format!(
            "{} {} {}\r\nServer: {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase(),
            SERVER_NAME,
            CONTENT_TYPE,
            self.content_length(),
        )
    }
}
