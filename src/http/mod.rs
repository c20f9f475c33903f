//! HTTP/1.0 protocol implementation.
//!
//! This module implements the request-dispatch core of the server.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection dispatcher performing one
//!   request/response cycle
//! - **`parser`**: Parses the request line into method, target and version
//! - **`request`**: HTTP request representation
//! - **`response`**: Status codes and error-page construction
//! - **`writer`**: Serializes and writes response heads to the client
//! - **`mime`**: MIME type detection based on file suffixes
//!
//! # Dispatch cycle
//!
//! Each accepted connection goes through exactly one cycle:
//!
//! ```text
//!   read request line ──► validate method ──► drain headers
//!         │                     │                  │
//!         ▼ malformed           ▼ unsupported      ▼
//!       400 error            501 error      classify target
//!                                                  │
//!                                 ┌────────────────┤
//!                                 ▼                ▼
//!                            stat failed      stat ok
//!                            404 / 403           │
//!                                      ┌─────────┴─────────┐
//!                                      ▼                   ▼
//!                                serve static        serve dynamic
//! ```
//!
//! Exactly one response is written per connection; the connection is
//! closed once the cycle returns.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
