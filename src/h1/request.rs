use bytes::Bytes;

use super::classify::{self, Authority, EntityTag, Target};
use super::parser::{self, Message};
use super::{BodyMode, MessageHead, Reject};
use crate::common::ParseResult;
use crate::config::Limits;
use crate::headers::{Direction, HeaderId};
use crate::http::{Method, Version};
use crate::matches;
use crate::strview::StrView;

/// Host, port and path of a `Referer`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Referer {
    host: StrView,
    port: Option<u16>,
    path: StrView,
}

impl Referer {
    /// Returns the host, empty for a relative referer.
    #[inline]
    pub fn host(&self) -> &StrView {
        &self.host
    }

    #[inline]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    #[inline]
    pub fn path(&self) -> &StrView {
        &self.path
    }
}

/// HTTP request parsed incrementally.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use strait::h1::Request;
/// use strait::http::Method;
///
/// let mut req = Request::new();
/// assert!(req.feed(&Bytes::from_static(b"GET /index.html HTTP/1.1\r\nHo")).is_pending());
/// assert!(req.feed(&Bytes::from_static(b"st: example.com\r\n\r\n")).is_ok());
///
/// assert_eq!(req.method(), Method::GET);
/// assert_eq!(req.path(), "/index.html");
/// assert_eq!(req.host(), "example.com");
/// ```
#[derive(Debug)]
pub struct Request {
    head: MessageHead,
    method: Method,
    method_token: StrView,
    uri: StrView,
    path: StrView,
    host: StrView,
    port: Option<u16>,
    /// Host is taken from an absolute-form target.
    uri_authority: bool,
    referer: Option<Referer>,
    if_none_match: Vec<EntityTag>,
    if_none_match_any: bool,
    accepts_html: bool,
    cookies: Vec<(StrView, StrView)>,
    forwarded_for: usize,
}

impl Default for Request {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Create an empty request with default [`Limits`].
    #[inline]
    pub fn new() -> Self {
        Self::with_limits(Limits::DEFAULT)
    }

    /// Create an empty request parsed with the given limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            head: MessageHead::new(Direction::Request, limits),
            method: Method::GET,
            method_token: StrView::new(),
            uri: StrView::new(),
            path: StrView::new(),
            host: StrView::new(),
            port: None,
            uri_authority: false,
            referer: None,
            if_none_match: Vec::new(),
            if_none_match_any: false,
            accepts_html: false,
            cookies: Vec::new(),
            forwarded_for: 0,
        }
    }

    /// Feed the next fragment of the request.
    ///
    /// Returns [`ParseResult::Pending`] while more bytes are needed, and the number of bytes
    /// of `fragment` consumed once the request completes. A rejected request stays rejected.
    #[inline]
    pub fn feed(&mut self, fragment: &Bytes) -> ParseResult<usize, Reject> {
        parser::feed(self, fragment)
    }

    /// Signal that the connection is closed, an incomplete request is rejected.
    #[inline]
    pub fn feed_eof(&mut self) -> Result<(), Reject> {
        parser::feed_eof(self)
    }

    /// Returns the state shared with responses.
    #[inline]
    pub fn head(&self) -> &MessageHead {
        &self.head
    }

    /// Returns `true` if the request is complete.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.head.is_complete()
    }

    // ===== Request line =====

    /// Returns the method, [`Method::UNKNOWN`] for an unsupported token.
    #[inline]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Returns the method token as received.
    #[inline]
    pub fn method_token(&self) -> &StrView {
        &self.method_token
    }

    /// Returns the request target as received.
    #[inline]
    pub fn uri(&self) -> &StrView {
        &self.uri
    }

    /// Returns the path and query.
    ///
    /// Empty for an absolute-form target without path, or an authority-form target.
    #[inline]
    pub fn path(&self) -> &StrView {
        &self.path
    }

    /// Returns the host, from an absolute-form target or else the `Host` header.
    ///
    /// The port is excluded and brackets of an IP literal are kept.
    #[inline]
    pub fn host(&self) -> &StrView {
        &self.host
    }

    #[inline]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    #[inline]
    pub const fn version(&self) -> Version {
        self.head.version
    }

    // ===== Headers =====

    #[inline]
    pub fn referer(&self) -> Option<&Referer> {
        self.referer.as_ref()
    }

    /// Returns the entity tags listed by `If-None-Match`.
    #[inline]
    pub fn if_none_match(&self) -> &[EntityTag] {
        &self.if_none_match
    }

    /// Returns `true` for `If-None-Match: *`.
    #[inline]
    pub const fn is_if_none_match_any(&self) -> bool {
        self.if_none_match_any
    }

    /// Returns `true` if `Accept` explicitly lists `text/html`.
    #[inline]
    pub const fn accepts_html(&self) -> bool {
        self.accepts_html
    }

    /// Returns the value of the cookie called `name`.
    pub fn cookie(&self, name: &[u8]) -> Option<&StrView> {
        self.cookies
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns every cookie pair, in order.
    pub fn cookies(&self) -> impl Iterator<Item = (&StrView, &StrView)> {
        self.cookies.iter().map(|(name, value)| (name, value))
    }

    /// Returns the number of nodes listed by `X-Forwarded-For`.
    #[inline]
    pub const fn forwarded_for(&self) -> usize {
        self.forwarded_for
    }

    fn set_authority(&mut self, view: &StrView, authority: Authority) {
        self.host = view.slice(authority.host);
        self.port = authority.port;
    }
}

impl Message for Request {
    #[inline]
    fn head(&self) -> &MessageHead {
        &self.head
    }

    #[inline]
    fn head_mut(&mut self) -> &mut MessageHead {
        &mut self.head
    }

    /// request-line = method SP request-target SP HTTP-version
    fn parse_start_line(&mut self, line: &StrView, bytes: &[u8]) -> Result<(), Reject> {
        let method_len = bytes
            .iter()
            .position(|b| *b == b' ')
            .ok_or(Reject::InvalidStartLine)?;
        let method = &bytes[..method_len];
        if method.is_empty() || !method.iter().all(|b| matches::is_token(*b)) {
            return Err(Reject::InvalidMethod);
        }

        let uri_start = method_len + 1;
        let uri_len = bytes[uri_start..]
            .iter()
            .position(|b| *b == b' ')
            .ok_or(Reject::InvalidStartLine)?;
        if uri_len == 0 {
            return Err(Reject::InvalidStartLine);
        }
        let uri = &bytes[uri_start..uri_start + uri_len];
        if !uri.iter().all(|b| matches::is_uri(*b)) {
            return Err(Reject::InvalidUri);
        }

        let version = &bytes[uri_start + uri_len + 1..];
        if version.first().is_some_and(|b| matches::is_ows(*b))
            || version.last().is_some_and(|b| matches::is_ows(*b))
        {
            return Err(Reject::InvalidStartLine);
        }
        self.head.version = Version::from_bytes(version).ok_or(Reject::InvalidVersion)?;

        self.method = Method::from_bytes(method);
        self.method_token = line.slice(0..method_len);
        self.uri = line.slice(uri_start..uri_start + uri_len);

        match classify::parse_target(uri).ok_or(Reject::InvalidUri)? {
            Target::Origin | Target::Asterisk => self.path = self.uri.clone(),
            Target::Absolute { authority, path } => {
                let uri = self.uri.clone();
                self.set_authority(&uri, authority);
                self.path = uri.slice(path);
                self.uri_authority = true;
            }
            Target::Authority(authority) => {
                let uri = self.uri.clone();
                self.set_authority(&uri, authority);
                self.uri_authority = true;
            }
        }
        Ok(())
    }

    fn classify(&mut self, id: HeaderId, value: &StrView, bytes: &[u8]) -> Result<(), Reject> {
        match id {
            HeaderId::Host => {
                let authority = classify::parse_host(bytes).ok_or(Reject::InvalidHost)?;
                if let (Some(authority), false) = (authority, self.uri_authority) {
                    self.set_authority(value, authority);
                }
            }
            HeaderId::Cookie => {
                let pairs = classify::parse_cookies(bytes)?;
                self.cookies.extend(
                    pairs
                        .into_iter()
                        .map(|(name, val)| (value.slice(name), value.slice(val))),
                );
            }
            HeaderId::Referer => {
                let referer = match classify::parse_referer(bytes) {
                    Some(Target::Origin) => Referer {
                        host: StrView::new(),
                        port: None,
                        path: value.clone(),
                    },
                    Some(Target::Absolute { authority, path }) => Referer {
                        host: value.slice(authority.host),
                        port: authority.port,
                        path: value.slice(path),
                    },
                    _ => return Err(Reject::InvalidReferer),
                };
                self.referer = Some(referer);
            }
            HeaderId::IfNoneMatch => match classify::parse_if_none_match(bytes)? {
                None => self.if_none_match_any = true,
                Some(tags) => self.if_none_match.extend(
                    tags.into_iter()
                        .map(|(weak, tag)| EntityTag::new(weak, value.slice(tag))),
                ),
            },
            HeaderId::XForwardedFor => {
                self.forwarded_for += classify::parse_forwarded_for(bytes)?;
            }
            HeaderId::Accept => self.accepts_html |= classify::accepts_html(bytes)?,
            _ => {}
        }
        Ok(())
    }

    fn finish_headers(&mut self) -> BodyMode {
        let head = &self.head;
        if head.is_chunked() {
            BodyMode::Chunked
        } else if let Some(len) = head.content_length {
            BodyMode::Fixed(len)
        } else {
            BodyMode::None
        }
    }
}
