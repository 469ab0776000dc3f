//! HTTP protocol implementation.
//!
//! This module implements a single-request HTTP/1.1 handler: every
//! connection carries exactly one GET request and is closed after the
//! response has been written.
//!
//! # Architecture
//!
//! - **`parser`**: Reads the request header lines and extracts the resource path
//! - **`media`**: Content classification based on the filename suffix
//! - **`response`**: Status line and header block serialization
//! - **`template`**: Placeholder substitution for HTML bodies
//! - **`connection`**: The per-connection handler tying the stages together
//!
//! # Request flow
//!
//! ```text
//!   Reading ──▶ resource path ──▶ Header block ──▶ Body ──▶ Closed
//! ```
//!
//! The body is either a templated text document or a verbatim byte copy,
//! depending on the media classification. There is no keep-alive: framing
//! relies on `Connection: close`, so no `Content-Length` is ever sent.

pub mod parser;
pub mod media;
pub mod response;
pub mod template;
pub mod connection;
