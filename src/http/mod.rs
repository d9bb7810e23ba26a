//! HTTP protocol implementation.
//!
//! This module implements an HTTP/1.0 origin server: one request per
//! connection, answered from the filesystem, then close.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The connection handler implementing the request-response state machine
//! - **`line_reader`**: Tokenizes the raw byte stream into terminator-delimited lines
//! - **`parser`**: Extracts the method and URL tokens from a request line
//! - **`request`**: The parsed request-line representation
//! - **`resolver`**: Maps a URL to a candidate path under the document root
//! - **`response`**: Status codes, response outcomes, and fixed error bodies
//! - **`writer`**: Frames and writes a response to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────────┐
//!        │ ReadRequestLine │ ← Read the first line (closed → done, silently)
//!        └────────┬────────┘
//!                 ▼
//!        ┌─────────────────┐
//!        │     Parsed      │ ← Extract method and URL tokens
//!        └────────┬────────┘
//!         not GET │ GET
//!           ┌─────┴──────┐
//!           ▼            ▼
//!     ┌──────────┐ ┌───────────┐
//!     │ Respond  │ │  Resolve  │ ← Map URL to a path under the root
//!     │   501    │ └─────┬─────┘
//!     └──────────┘       ▼
//!                  ┌───────────┐
//!                  │   Drain   │ ← Discard header lines up to the blank line
//!                  └─────┬─────┘
//!            not found   │   found
//!               ┌────────┴───────┐
//!               ▼                ▼
//!         ┌──────────┐    ┌───────────┐
//!         │ Respond  │    │   Open    │ ← Open failure falls back to 404
//!         │   404    │    └─────┬─────┘
//!         └──────────┘          ▼
//!                         ┌───────────┐
//!                         │ Respond   │ ← Stream the file body
//!                         │   200     │
//!                         └───────────┘
//! ```
//!
//! Every path through the machine writes exactly one response (or none at
//! all, for a connection that closed before sending a byte) and ends with
//! the connection closed by the listener.

pub mod connection;
pub mod line_reader;
pub mod parser;
pub mod request;
pub mod resolver;
pub mod response;
pub mod writer;
