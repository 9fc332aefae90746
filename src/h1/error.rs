/// Reason a message was rejected.
///
/// Every reject is terminal for the message and fatal for the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reject {
    // ===== Framing =====
    /// Too many empty lines before the start line.
    TooManyEmptyLines,
    /// Start line is too long.
    StartLineTooLong,
    /// Header, trailer or chunk-size line is too long.
    LineTooLong,
    /// Too many header lines.
    TooManyHeaders,
    /// Bare `CR` inside a line.
    BareCr,
    /// Malformed start line, e.g. wrong separators or trailing whitespace.
    InvalidStartLine,
    /// Invalid character in method.
    InvalidMethod,
    /// Invalid request target.
    InvalidUri,
    /// Unsupported HTTP version.
    InvalidVersion,
    /// Invalid status code.
    InvalidStatus,
    /// Invalid character in reason phrase.
    InvalidReason,
    /// Invalid header name or missing colon.
    InvalidHeaderName,
    /// Invalid character in header value.
    InvalidHeaderValue,
    /// Obsolete line folding.
    LineFolding,
    /// Non repeatable header appears more than once.
    DuplicateHeader,
    /// `Content-Length` and `Transfer-Encoding` both present.
    FramingConflict,
    /// Malformed `Content-Length`.
    InvalidContentLength,
    /// Malformed `Transfer-Encoding`, or `chunked` is not the single final coding.
    InvalidCodings,
    /// Malformed chunked framing.
    InvalidChunk,
    /// Chunk size does not fit in 63 bits.
    ChunkTooLarge,
    /// Framing header inside a trailer.
    ForbiddenTrailer,
    /// Connection closed before the message completed.
    UnexpectedEof,

    // ===== Header grammar =====
    /// Malformed `Cache-Control`.
    InvalidCacheControl,
    /// Malformed `Connection`.
    InvalidConnection,
    /// `Connection` names an end-to-end header.
    ProtectedHopByHop,
    /// Too many `Connection` tokens.
    TooManyConnectionTokens,
    /// Malformed `ETag`.
    InvalidETag,
    /// Malformed `If-None-Match`.
    InvalidIfNoneMatch,
    /// Malformed `Cookie`.
    InvalidCookie,
    /// Malformed `X-Forwarded-For`.
    InvalidForwardedFor,
    /// Malformed `Referer`.
    InvalidReferer,
    /// Malformed `Accept`.
    InvalidAccept,
    /// Malformed `Keep-Alive`.
    InvalidKeepAlive,
    /// Malformed `Date`.
    InvalidDate,
    /// Malformed `Age`.
    InvalidAge,
    /// Malformed `Host`.
    InvalidHost,
}

impl Reject {
    /// Returns `true` if a configured ceiling was exceeded, rather than a grammar violated.
    #[inline]
    pub const fn is_limit(&self) -> bool {
        matches!(
            self,
            Self::TooManyEmptyLines
                | Self::StartLineTooLong
                | Self::LineTooLong
                | Self::TooManyHeaders
                | Self::TooManyConnectionTokens
        )
    }

    /// Returns the error message.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::TooManyEmptyLines => "too many empty lines before start line",
            Self::StartLineTooLong => "start line too long",
            Self::LineTooLong => "line too long",
            Self::TooManyHeaders => "too many headers",
            Self::BareCr => "bare CR in line",
            Self::InvalidStartLine => "invalid start line",
            Self::InvalidMethod => "invalid method",
            Self::InvalidUri => "invalid request target",
            Self::InvalidVersion => "unsupported version",
            Self::InvalidStatus => "invalid status code",
            Self::InvalidReason => "invalid reason phrase",
            Self::InvalidHeaderName => "invalid header name",
            Self::InvalidHeaderValue => "invalid header value",
            Self::LineFolding => "obsolete line folding",
            Self::DuplicateHeader => "duplicate header",
            Self::FramingConflict => "both content-length and transfer-encoding present",
            Self::InvalidContentLength => "invalid content-length",
            Self::InvalidCodings => "invalid transfer-encoding",
            Self::InvalidChunk => "invalid chunked framing",
            Self::ChunkTooLarge => "chunk size too large",
            Self::ForbiddenTrailer => "framing header in trailer",
            Self::UnexpectedEof => "unexpected end of stream",
            Self::InvalidCacheControl => "invalid cache-control",
            Self::InvalidConnection => "invalid connection",
            Self::ProtectedHopByHop => "connection names an end-to-end header",
            Self::TooManyConnectionTokens => "too many connection tokens",
            Self::InvalidETag => "invalid etag",
            Self::InvalidIfNoneMatch => "invalid if-none-match",
            Self::InvalidCookie => "invalid cookie",
            Self::InvalidForwardedFor => "invalid x-forwarded-for",
            Self::InvalidReferer => "invalid referer",
            Self::InvalidAccept => "invalid accept",
            Self::InvalidKeepAlive => "invalid keep-alive",
            Self::InvalidDate => "invalid date",
            Self::InvalidAge => "invalid age",
            Self::InvalidHost => "invalid host",
        }
    }
}

impl std::error::Error for Reject {}

impl std::fmt::Display for Reject {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
