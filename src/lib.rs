//! Incremental HTTP/1.x parser for accelerating and filtering proxies.
//!
//! Messages are fed fragment by fragment as they arrive and are parsed without copying:
//! every value is a [`StrView`] over the received fragments. Framing and the value of every
//! well-known header are validated on the way, so a message that reaches completion can be
//! forwarded or served from cache, and anything ambiguous is rejected.
//!
//! ```
//! use bytes::Bytes;
//! use strait::h1::{Request, Response};
//!
//! let mut req = Request::new();
//! let consumed = req.feed(&Bytes::from_static(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n"));
//! assert!(consumed.is_ok());
//!
//! let mut res = Response::new(&req);
//! let bytes = Bytes::from_static(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nhi");
//! assert!(res.feed(&bytes).is_ok());
//! assert_eq!(res.head().body(), "hi");
//! ```
#![warn(missing_debug_implementations)]

mod log;

pub mod common;
pub mod config;
pub mod matches;
pub mod strview;

pub mod http;
pub mod headers;
pub mod h1;
pub mod io;

pub use common::ParseResult;
pub use strview::StrView;
