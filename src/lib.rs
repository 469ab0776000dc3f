//! staticd - Single-request static file server
//!
//! Core library for request parsing and response writing. Each connection
//! carries exactly one GET request and is closed after the response.

pub mod config;
pub mod http;
pub mod server;
