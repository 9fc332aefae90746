use bytes::BytesMut;

use super::Reject;
use super::classify::{self, CacheControl, Codings, ConnectionOptions, KeepAlive};
use super::parser::ParserState;
use super::write::{self, WriteOptions};
use crate::config::Limits;
use crate::headers::{Direction, HeaderId, HeaderTable};
use crate::http::{Version, parse_httpdate};
use crate::strview::StrView;

/// How the body of a message is delimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyMode {
    /// No body.
    #[default]
    None,
    /// `Content-Length` bytes.
    Fixed(u64),
    /// `Transfer-Encoding: chunked`.
    Chunked,
    /// Until the connection closes, responses only.
    Unbounded,
}

/// State shared by requests and responses.
///
/// Holds the header table, the framing facts collected from it, the decoded body and the
/// continuation state of the parser.
pub struct MessageHead {
    pub(crate) version: Version,
    pub(crate) start_line: StrView,
    pub(crate) start_eol: u8,
    pub(crate) headers: HeaderTable,
    pub(crate) crlf_len: u8,

    pub(crate) body_mode: BodyMode,
    pub(crate) body: StrView,
    pub(crate) body_wire_len: u64,
    pub(crate) content_length: Option<u64>,
    pub(crate) codings: Codings,

    pub(crate) connection: ConnectionOptions,
    pub(crate) hop_by_hop: Vec<StrView>,
    pub(crate) keep_alive: KeepAlive,
    pub(crate) cache_control: CacheControl,
    pub(crate) date: Option<u64>,

    pub(crate) parser: ParserState,
    pub(crate) limits: Limits,
    pub(crate) scratch: Vec<u8>,
}

impl MessageHead {
    pub(crate) fn new(direction: Direction, limits: Limits) -> Self {
        Self {
            version: Version::default(),
            start_line: StrView::new(),
            start_eol: 2,
            headers: HeaderTable::new(direction),
            crlf_len: 2,
            body_mode: BodyMode::None,
            body: StrView::new(),
            body_wire_len: 0,
            content_length: None,
            codings: Codings::default(),
            connection: ConnectionOptions::default(),
            hop_by_hop: Vec::new(),
            keep_alive: KeepAlive::default(),
            cache_control: CacheControl::default(),
            date: None,
            parser: ParserState::new(),
            limits,
            scratch: Vec::new(),
        }
    }

    // ===== Framing =====

    /// Returns the HTTP version.
    #[inline]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Returns the start line as received, without terminator.
    #[inline]
    pub fn start_line(&self) -> &StrView {
        &self.start_line
    }

    /// Returns the header table.
    #[inline]
    pub fn headers(&self) -> &HeaderTable {
        &self.headers
    }

    /// Returns the terminator length of the blank line ending the header block.
    ///
    /// `2` for `CRLF`, `1` for bare `LF`.
    #[inline]
    pub const fn crlf_len(&self) -> usize {
        self.crlf_len as usize
    }

    /// Returns how the body is delimited, known once the header block completes.
    #[inline]
    pub const fn body_mode(&self) -> BodyMode {
        self.body_mode
    }

    /// Returns the decoded body, chunk framing excluded.
    #[inline]
    pub fn body(&self) -> &StrView {
        &self.body
    }

    /// Returns the decoded body length.
    #[inline]
    pub fn body_len(&self) -> u64 {
        self.body.len() as u64
    }

    /// Returns the number of body bytes on the wire.
    ///
    /// For a chunked body this counts every chunk-size line, chunk data and terminator up
    /// to and including the last-chunk line, the trailer excluded.
    #[inline]
    pub fn body_wire_len(&self) -> u64 {
        match self.body_mode {
            BodyMode::Chunked => self.body_wire_len,
            _ => self.body.len() as u64,
        }
    }

    /// Returns the `Content-Length` value.
    #[inline]
    pub const fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Returns `true` if the body is chunked.
    #[inline]
    pub const fn is_chunked(&self) -> bool {
        self.codings.is_chunked()
    }

    // ===== Connection =====

    /// Returns `true` if the connection may be reused after this message.
    ///
    /// `Connection: close` and `Connection: keep-alive` override the version default.
    pub const fn keep_alive(&self) -> bool {
        if self.connection.close {
            false
        } else if self.connection.keep_alive {
            true
        } else {
            self.version.is_persistent_by_default()
        }
    }

    /// Returns `true` if `Connection: close` is present.
    #[inline]
    pub const fn is_close(&self) -> bool {
        self.connection.close
    }

    /// Returns the header names declared hop-by-hop by `Connection`, as received.
    #[inline]
    pub fn connection_tokens(&self) -> &[StrView] {
        &self.hop_by_hop
    }

    /// Returns the `Keep-Alive` parameters.
    #[inline]
    pub const fn keep_alive_params(&self) -> KeepAlive {
        self.keep_alive
    }

    // ===== Caching =====

    /// Returns the directives of `Cache-Control` and `Pragma`.
    #[inline]
    pub const fn cache_control(&self) -> &CacheControl {
        &self.cache_control
    }

    /// Returns the `Date` header as Unix seconds.
    #[inline]
    pub const fn date(&self) -> Option<u64> {
        self.date
    }

    // ===== Parser =====

    /// Returns `true` if the message is complete.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.parser.is_done()
    }

    /// Returns the reason the message was rejected, if it was.
    #[inline]
    pub const fn rejected(&self) -> Option<Reject> {
        self.parser.rejected()
    }

    /// Returns the ceilings this message is parsed with.
    #[inline]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Serialize the start line and header block into `buf`.
    ///
    /// Lines are written in header table order with the terminators they were received
    /// with.
    pub fn write_head(&self, options: WriteOptions, buf: &mut BytesMut) {
        write::write_head(self, options, buf);
    }

    /// Classify a header common to both directions.
    ///
    /// Returns `false` if `id` is not handled here.
    pub(crate) fn classify(
        &mut self,
        id: HeaderId,
        value: &StrView,
        bytes: &[u8],
    ) -> Result<bool, Reject> {
        match id {
            HeaderId::ContentLength => {
                self.content_length = Some(classify::content_length(bytes)?);
            }
            HeaderId::TransferEncoding => self.codings.push(bytes)?,
            HeaderId::Connection => {
                let names = classify::parse_connection(bytes, &mut self.connection)?;
                self.hop_by_hop
                    .extend(names.into_iter().map(|range| value.slice(range)));
            }
            HeaderId::KeepAlive => classify::parse_keep_alive(bytes, &mut self.keep_alive)?,
            HeaderId::CacheControl => {
                classify::parse_cache_control(bytes, &mut self.cache_control)?
            }
            HeaderId::Pragma => classify::parse_pragma(bytes, &mut self.cache_control)?,
            HeaderId::Date => {
                self.date = Some(parse_httpdate(bytes).ok_or(Reject::InvalidDate)?);
            }
            HeaderId::ContentType => {}
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Mark `Connection` and every present header it names as hop-by-hop.
    pub(crate) fn mark_hop_by_hop(&mut self) {
        self.headers.mark_known(HeaderId::Connection);
        let mut scratch = std::mem::take(&mut self.scratch);
        for name in &self.hop_by_hop {
            self.headers.mark_by_name(name.contiguous(&mut scratch));
        }
        self.scratch = scratch;
    }
}

impl std::fmt::Debug for MessageHead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageHead")
            .field("version", &self.version)
            .field("headers", &self.headers)
            .field("body_mode", &self.body_mode)
            .field("body_len", &self.body.len())
            .field("keep_alive", &self.keep_alive())
            .field("state", &self.parser)
            .finish()
    }
}
