//! staticserve - HTTP/1.1 Static File Server
//!
//! Core library for request validation, file resolution and access logging.

pub mod access_log;
pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
