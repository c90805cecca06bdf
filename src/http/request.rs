/// HTTP request methods implemented by the server.
///
/// Only GET and HEAD are served. Any other verb on the wire is rejected
/// during validation with 501 Not Implemented and never reaches the
/// request handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a supported method, `None`
    /// otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticserve::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
        }
    }
}

/// A validated HTTP request line.
///
/// Exists only once validation has passed; rejected lines never produce
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The HTTP method (GET or HEAD)
    pub method: Method,
    /// The request target (e.g., "/index.html")
    pub target: String,
    /// HTTP version, always "HTTP/1.1" once validated
    pub version: String,
}
