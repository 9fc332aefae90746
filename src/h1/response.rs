use bytes::Bytes;

use super::classify::{self, EntityTag};
use super::parser::{self, Message};
use super::{BodyMode, MessageHead, Reject};
use crate::common::ParseResult;
use crate::config::Limits;
use crate::headers::{Direction, HeaderId};
use crate::http::{Method, StatusCode, Version, parse_httpdate};
use crate::matches;
use crate::strview::StrView;

const VERSION_LEN: usize = b"HTTP/1.1".len();

/// HTTP response parsed incrementally.
///
/// Whether a body follows depends on the request method, so a response is always created
/// for a request.
#[derive(Debug)]
pub struct Response {
    head: MessageHead,
    request_method: Method,
    status: StatusCode,
    reason: StrView,
    etag: Option<EntityTag>,
    expires: Option<u64>,
    age: Option<u32>,
}

impl Response {
    /// Create an empty response to `request`.
    #[inline]
    pub fn new(request: &super::Request) -> Self {
        Self::with_limits(request.method(), request.head().limits)
    }

    /// Create an empty response to a request with the given method.
    #[inline]
    pub fn for_method(method: Method) -> Self {
        Self::with_limits(method, Limits::DEFAULT)
    }

    /// Create an empty response to a request with the given method, parsed with the given
    /// limits.
    pub fn with_limits(method: Method, limits: Limits) -> Self {
        Self {
            head: MessageHead::new(Direction::Response, limits),
            request_method: method,
            status: StatusCode::OK,
            reason: StrView::new(),
            etag: None,
            expires: None,
            age: None,
        }
    }

    /// Feed the next fragment of the response.
    ///
    /// See [`Request::feed`][super::Request::feed].
    #[inline]
    pub fn feed(&mut self, fragment: &Bytes) -> ParseResult<usize, Reject> {
        parser::feed(self, fragment)
    }

    /// Signal that the connection is closed.
    ///
    /// Completes a body delimited by end of stream, rejects any other incomplete response.
    #[inline]
    pub fn feed_eof(&mut self) -> Result<(), Reject> {
        parser::feed_eof(self)
    }

    /// Returns the state shared with requests.
    #[inline]
    pub fn head(&self) -> &MessageHead {
        &self.head
    }

    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.head.is_complete()
    }

    /// Returns the method of the request this response answers.
    #[inline]
    pub const fn request_method(&self) -> Method {
        self.request_method
    }

    // ===== Status line =====

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the reason phrase as received, possibly empty.
    #[inline]
    pub fn reason(&self) -> &StrView {
        &self.reason
    }

    #[inline]
    pub const fn version(&self) -> Version {
        self.head.version
    }

    // ===== Headers =====

    #[inline]
    pub fn etag(&self) -> Option<&EntityTag> {
        self.etag.as_ref()
    }

    /// Returns `Expires` as Unix seconds, `0` if the value is not a valid date.
    #[inline]
    pub const fn expires(&self) -> Option<u64> {
        self.expires
    }

    /// Returns `Age` in seconds.
    #[inline]
    pub const fn age(&self) -> Option<u32> {
        self.age
    }
}

impl Message for Response {
    #[inline]
    fn head(&self) -> &MessageHead {
        &self.head
    }

    #[inline]
    fn head_mut(&mut self) -> &mut MessageHead {
        &mut self.head
    }

    /// status-line = HTTP-version SP status-code SP [ reason-phrase ]
    fn parse_start_line(&mut self, line: &StrView, bytes: &[u8]) -> Result<(), Reject> {
        let version = bytes.get(..VERSION_LEN).ok_or(Reject::InvalidVersion)?;
        self.head.version = Version::from_bytes(version).ok_or(Reject::InvalidVersion)?;
        if bytes.get(VERSION_LEN) != Some(&b' ') {
            return Err(Reject::InvalidStartLine);
        }

        let code_start = VERSION_LEN + 1;
        let code = bytes
            .get(code_start..code_start + 3)
            .ok_or(Reject::InvalidStatus)?;
        self.status = StatusCode::from_bytes(code).ok_or(Reject::InvalidStatus)?;

        match &bytes[code_start + 3..] {
            [] => {}
            [b' ', reason @ ..] => {
                if !reason.iter().all(|b| matches::is_field_value(*b)) {
                    return Err(Reject::InvalidReason);
                }
                self.reason = line.slice(code_start + 4..line.len());
            }
            _ => return Err(Reject::InvalidStatus),
        }
        Ok(())
    }

    fn classify(&mut self, id: HeaderId, value: &StrView, bytes: &[u8]) -> Result<(), Reject> {
        match id {
            HeaderId::ETag => {
                let (weak, tag) = classify::parse_etag(bytes)?;
                self.etag = Some(EntityTag::new(weak, value.slice(tag)));
            }
            HeaderId::Expires => self.expires = Some(parse_httpdate(bytes).unwrap_or(0)),
            HeaderId::Age => {
                self.age = Some(classify::delta_seconds(bytes).ok_or(Reject::InvalidAge)?);
            }
            _ => {}
        }
        Ok(())
    }

    fn finish_headers(&mut self) -> BodyMode {
        // replaced by the proxy's own
        self.head.headers.mark_known(HeaderId::Server);

        let head = &self.head;
        if self.request_method == Method::HEAD || self.status.is_bodiless() {
            BodyMode::None
        } else if head.is_chunked() {
            BodyMode::Chunked
        } else if let Some(len) = head.content_length {
            BodyMode::Fixed(len)
        } else {
            BodyMode::Unbounded
        }
    }
}
