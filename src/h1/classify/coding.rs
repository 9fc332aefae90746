use super::{Elements, is_token};
use crate::h1::Reject;
use crate::matches;

/// Parse `Content-Length`.
///
/// Content-Length = 1*DIGIT
pub(crate) fn content_length(bytes: &[u8]) -> Result<u64, Reject> {
    matches::atou(bytes).ok_or(Reject::InvalidContentLength)
}

/// Transfer codings seen across every `Transfer-Encoding` line of a message.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Codings {
    present: bool,
    chunked: bool,
    chunked_last: bool,
}

impl Codings {
    /// Feed the value of one `Transfer-Encoding` line.
    ///
    /// Rejects immediately on a malformed list or a repeated `chunked`.
    pub(crate) fn push(&mut self, bytes: &[u8]) -> Result<(), Reject> {
        self.present = true;
        for range in Elements::new(bytes) {
            let element = &bytes[range];
            // transfer-coding may carry parameters, only the name matters here
            let name_len = element
                .iter()
                .position(|b| *b == b';')
                .unwrap_or(element.len());
            let name = matches::trim_ows(&element[..name_len]);
            if !is_token(name) {
                return Err(Reject::InvalidCodings);
            }
            if name.eq_ignore_ascii_case(b"chunked") {
                if self.chunked || name_len != element.len() {
                    return Err(Reject::InvalidCodings);
                }
                self.chunked = true;
                self.chunked_last = true;
            } else {
                self.chunked_last = false;
            }
        }
        Ok(())
    }

    /// Returns `true` if any `Transfer-Encoding` line was seen.
    #[inline]
    pub(crate) const fn is_present(&self) -> bool {
        self.present
    }

    /// Returns `true` if `chunked` is the final coding.
    #[inline]
    pub(crate) const fn is_chunked(&self) -> bool {
        self.chunked_last
    }

    /// Validate the merged coding list once every line is known.
    pub(crate) const fn finish(&self) -> Result<(), Reject> {
        if self.present && !self.chunked_last {
            Err(Reject::InvalidCodings)
        } else {
            Ok(())
        }
    }
}
