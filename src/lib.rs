//! Zero-copy parsing of HTTP header blocks.
//!
//! A [`HeaderIndex`](header::HeaderIndex) borrows a buffer of
//! CRLF-terminated `Name:value` lines and answers count, lookup and
//! iteration by handing out [`ByteView`]s into that buffer. No header bytes
//! are copied and nothing is allocated per header.
//!
//! ```
//! use header_span::header::HeaderIndex;
//!
//! let idx = HeaderIndex::new("Host: localhost:8080\r\nConnection: keep-alive\r\n");
//! assert_eq!(idx.count(), Ok(2));
//! assert_eq!(idx.get("Host").unwrap().to_text(), " localhost:8080");
//! assert!(idx.get("Content-Length").unwrap().is_empty());
//! ```

pub(crate) mod common;
#[cfg(not(fuzzing))]
pub(crate) mod decoder;
#[cfg(fuzzing)]
pub mod decoder;
pub mod errors;
pub mod header;

pub use common::*;
