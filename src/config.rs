//! Parser ceilings.

/// Maximum number of tokens in all `Connection` header occurrences of one message.
pub const MAX_CONNECTION_TOKENS: usize = 16;

/// Upper bound of [`Limits::max_header_line`], header offsets are stored as `u32`.
pub const MAX_HEADER_LINE: usize = u32::MAX as usize;

/// Ceilings enforced while parsing a single message.
///
/// Exceeding any of them rejects the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_start_line: usize,
    max_header_line: usize,
    max_headers: usize,
    max_empty_lines: usize,
}

impl Limits {
    /// Default ceilings.
    pub const DEFAULT: Self = Self {
        max_start_line: 8192,
        max_header_line: 8192,
        max_headers: 128,
        max_empty_lines: 8,
    };

    /// Maximum length of the request or status line, terminator excluded.
    #[inline]
    pub const fn max_start_line(&self) -> usize {
        self.max_start_line
    }

    /// Maximum length of a header, trailer or chunk-size line, terminator excluded.
    #[inline]
    pub const fn max_header_line(&self) -> usize {
        self.max_header_line
    }

    /// Maximum number of header lines, trailers included.
    #[inline]
    pub const fn max_headers(&self) -> usize {
        self.max_headers
    }

    /// Maximum number of empty lines tolerated before the start line.
    #[inline]
    pub const fn max_empty_lines(&self) -> usize {
        self.max_empty_lines
    }

    pub const fn with_max_start_line(mut self, value: usize) -> Self {
        self.max_start_line = value;
        self
    }

    /// Values above [`MAX_HEADER_LINE`] are clamped.
    pub const fn with_max_header_line(mut self, value: usize) -> Self {
        self.max_header_line = if value > MAX_HEADER_LINE {
            MAX_HEADER_LINE
        } else {
            value
        };
        self
    }

    pub const fn with_max_headers(mut self, value: usize) -> Self {
        self.max_headers = value;
        self
    }

    pub const fn with_max_empty_lines(mut self, value: usize) -> Self {
        self.max_empty_lines = value;
        self
    }
}

impl Default for Limits {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_header_line_clamp() {
        let limits = Limits::DEFAULT.with_max_header_line(usize::MAX);
        assert_eq!(limits.max_header_line(), MAX_HEADER_LINE);
        let limits = Limits::DEFAULT.with_max_header_line(100);
        assert_eq!(limits.max_header_line(), 100);
    }
}
