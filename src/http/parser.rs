use std::path::MAIN_SEPARATOR;

use crate::http::HTTP_VERSION;
use crate::http::request::{Method, RequestLine};
use crate::http::response::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    MalformedRequestLine,
    UnsupportedVersion,
    UnimplementedMethod,
    MalformedTarget,
}

impl ParseError {
    /// The status code the client receives for this rejection.
    pub fn status(&self) -> StatusCode {
        match self {
            ParseError::MalformedRequestLine => StatusCode::BadRequest,
            ParseError::UnsupportedVersion => StatusCode::HttpVersionNotSupported,
            ParseError::UnimplementedMethod => StatusCode::NotImplemented,
            ParseError::MalformedTarget => StatusCode::BadRequest,
        }
    }
}

/// Validates one request line, already stripped of its line break.
///
/// Checks run in order and stop at the first failure: token count,
/// protocol version, method, target shape. An empty line (a client that
/// closed without sending data) fails the token count check like any
/// other malformed line.
pub fn parse_request_line(line: &str) -> Result<RequestLine, ParseError> {
    // Single-space split: "GET  / HTTP/1.1" is four tokens, not three.
    let tokens: Vec<&str> = line.split(' ').collect();

    if tokens.len() != 3 {
        return Err(ParseError::MalformedRequestLine);
    }

    if tokens[2].trim() != HTTP_VERSION {
        return Err(ParseError::UnsupportedVersion);
    }

    let method = Method::from_str(tokens[0]).ok_or(ParseError::UnimplementedMethod)?;

    if !target_is_well_formed(tokens[1]) {
        return Err(ParseError::MalformedTarget);
    }

    Ok(RequestLine {
        method,
        target: tokens[1].to_string(),
        version: tokens[2].trim().to_string(),
    })
}

// Accepts an optional single leading separator followed by at least one
// non-separator character: "/index.html" and "index.html" pass; "", "/"
// and "//x" do not.
fn target_is_well_formed(target: &str) -> bool {
    let rest = target.strip_prefix(MAIN_SEPARATOR).unwrap_or(target);
    rest.chars().next().is_some_and(|c| c != MAIN_SEPARATOR)
}
