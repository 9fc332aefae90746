//! Reading messages from an async transport.
use bytes::{Bytes, BytesMut};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::common::ParseResult;
use crate::config::Limits;
use crate::h1::parser::{self, Message};
use crate::h1::{Reject, Request, Response};
use crate::http::Method;
use crate::log::trace;

const READ_CAPACITY: usize = 4096;

/// Reads consecutive messages from a transport.
///
/// Every read is handed to the parser as one fragment. Bytes past the end of a message are
/// kept for the next one, so pipelined requests are supported.
#[derive(Debug)]
pub struct MessageReader<R> {
    io: R,
    leftover: Bytes,
}

impl<R> MessageReader<R> {
    pub fn new(io: R) -> Self {
        Self {
            io,
            leftover: Bytes::new(),
        }
    }

    /// Returns bytes received after the last complete message.
    #[inline]
    pub fn leftover(&self) -> &Bytes {
        &self.leftover
    }

    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.io
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.io
    }
}

impl<R: AsyncRead + Unpin> MessageReader<R> {
    /// Read the next request.
    ///
    /// Returns `None` if the transport is closed before a new request starts. Empty lines
    /// preceding the close are ignored.
    pub async fn read_request(&mut self) -> Result<Option<Request>, ReadError> {
        self.read_request_with(Limits::DEFAULT).await
    }

    /// Read the next request with the given limits.
    pub async fn read_request_with(
        &mut self,
        limits: Limits,
    ) -> Result<Option<Request>, ReadError> {
        let mut request = Request::with_limits(limits);
        match self.drive(&mut request).await? {
            true => Ok(Some(request)),
            false => Ok(None),
        }
    }

    /// Read the response to `request`.
    pub async fn read_response(&mut self, request: &Request) -> Result<Response, ReadError> {
        self.read_message(Response::new(request)).await
    }

    /// Read the response to a request with the given method.
    pub async fn read_response_for(&mut self, method: Method) -> Result<Response, ReadError> {
        self.read_message(Response::for_method(method)).await
    }

    async fn read_message(&mut self, mut response: Response) -> Result<Response, ReadError> {
        match self.drive(&mut response).await? {
            true => Ok(response),
            false => Err(ReadError::Reject(Reject::UnexpectedEof)),
        }
    }

    /// Feed fragments until `msg` completes.
    ///
    /// Returns `false` if the transport closed before the start line, empty lines aside.
    async fn drive<M: Message>(&mut self, msg: &mut M) -> Result<bool, ReadError> {
        loop {
            let fragment = if self.leftover.is_empty() {
                let mut buf = BytesMut::with_capacity(READ_CAPACITY);
                if self.io.read_buf(&mut buf).await? == 0 {
                    if !msg.head().parser.is_started() {
                        return Ok(false);
                    }
                    parser::feed_eof(msg)?;
                    return Ok(true);
                }
                trace!("read {} bytes", buf.len());
                buf.freeze()
            } else {
                std::mem::take(&mut self.leftover)
            };

            match parser::feed(msg, &fragment) {
                ParseResult::Pending => {}
                ParseResult::Ok(consumed) => {
                    self.leftover = fragment.slice(consumed..);
                    return Ok(true);
                }
                ParseResult::Err(reason) => return Err(reason.into()),
            }
        }
    }
}

// ===== Error =====

/// Error reading a message.
#[derive(Debug)]
pub enum ReadError {
    /// Transport error.
    Io(io::Error),
    /// The message was rejected.
    Reject(Reject),
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Reject(reason) => Some(reason),
        }
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Reject(reason) => write!(f, "message rejected: {reason}"),
        }
    }
}

impl From<io::Error> for ReadError {
    #[inline]
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<Reject> for ReadError {
    #[inline]
    fn from(value: Reject) -> Self {
        Self::Reject(value)
    }
}
