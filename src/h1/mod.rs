//! HTTP/1.x messages.
//!
//! [`Request`] and [`Response`] are fed fragments as they arrive from the transport and
//! validate, classify and frame the message on the way:
//!
//! - `parser` is the resumable state machine shared by both directions,
//! - `classify` holds the value grammar of every well-known header,
//! - `write` serializes a parsed head back to the wire.
//!
//! Every violation is a [`Reject`], which is final for the message and the connection.
mod error;
mod message;
mod request;
mod response;

mod classify;
pub(crate) mod parser;
mod write;

pub use error::Reject;
pub use message::{BodyMode, MessageHead};
pub use request::{Referer, Request};
pub use response::Response;
pub use write::WriteOptions;

pub use classify::{CacheControl, EntityTag, KeepAlive};
