//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset this server speaks: one
//! request line per connection, answered with a fixed header block and an
//! optional body.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The connection handler implementing the request-response state machine
//! - **`parser`**: Validates the request line and maps rejections to status codes
//! - **`request`**: Request-line representation and method parsing
//! - **`response`**: Status table and response representation
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line
//!        └──────┬──────┘
//!               │ Line received (possibly empty)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Validate, resolve, read file
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, record access log
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close
//! ```
//!
//! There is no keep-alive: a connection serves exactly one request and is
//! then closed.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

/// The only protocol version this server accepts and speaks.
pub const HTTP_VERSION: &str = "HTTP/1.1";
