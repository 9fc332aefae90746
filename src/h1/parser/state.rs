use bytes::Bytes;

use crate::h1::Reject;
use crate::strview::StrView;

/// Position of the parser inside a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Skipping empty lines before the start line.
    Pre,
    StartLine,
    Headers,
    /// `Content-Length` body.
    Fixed { remaining: u64 },
    ChunkSize,
    ChunkData { remaining: u64 },
    /// Terminator after chunk data, `cr` is set once the `CR` is seen.
    ChunkEol { cr: bool },
    Trailer,
    /// Body delimited by end of stream.
    Unbounded,
    Done,
    Rejected(Reject),
}

/// Continuation state carried between fragments.
pub(crate) struct ParserState {
    pub(crate) state: State,
    /// Part of the current line seen in previous fragments.
    line: StrView,
    /// Previous fragment ended with a `CR`.
    pub(super) pending_cr: bool,
    /// Number of empty lines skipped in [`State::Pre`].
    pub(super) empty_lines: usize,
}

impl ParserState {
    pub(crate) const fn new() -> Self {
        Self {
            state: State::Pre,
            line: StrView::new(),
            pending_cr: false,
            empty_lines: 0,
        }
    }

    /// Returns `true` once a byte other than an empty line was received.
    #[inline]
    pub(crate) const fn is_started(&self) -> bool {
        !matches!(self.state, State::Pre)
    }

    #[inline]
    pub(crate) const fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    #[inline]
    pub(crate) const fn rejected(&self) -> Option<Reject> {
        match self.state {
            State::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    /// Take the next line of `buf` starting at `cursor`.
    ///
    /// Returns the line without terminator and the terminator length, or `None` if the line
    /// continues in the next fragment. Lines longer than `max` are rejected with `too_long`.
    pub(crate) fn take_line(
        &mut self,
        buf: &Bytes,
        cursor: &mut usize,
        max: usize,
        too_long: Reject,
    ) -> Result<Option<(StrView, u8)>, Reject> {
        let start = *cursor;
        let rest = &buf[start..];

        if self.pending_cr {
            return match rest.first() {
                None => Ok(None),
                Some(b'\n') => {
                    *cursor += 1;
                    self.pending_cr = false;
                    Ok(Some((std::mem::take(&mut self.line), 2)))
                }
                Some(_) => Err(Reject::BareCr),
            };
        }

        let Some(len) = rest.iter().position(|b| matches!(b, b'\r' | b'\n')) else {
            self.extend(buf.slice(start..), max, too_long)?;
            *cursor = buf.len();
            return Ok(None);
        };
        self.extend(buf.slice(start..start + len), max, too_long)?;

        match (rest[len], rest.get(len + 1)) {
            (b'\n', _) => {
                *cursor = start + len + 1;
                Ok(Some((std::mem::take(&mut self.line), 1)))
            }
            (_, Some(b'\n')) => {
                *cursor = start + len + 2;
                Ok(Some((std::mem::take(&mut self.line), 2)))
            }
            (_, Some(_)) => Err(Reject::BareCr),
            (_, None) => {
                self.pending_cr = true;
                *cursor = buf.len();
                Ok(None)
            }
        }
    }

    fn extend(&mut self, segment: Bytes, max: usize, too_long: Reject) -> Result<(), Reject> {
        self.line.push(segment);
        if self.line.len() > max {
            return Err(too_long);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ParserState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.state, f)
    }
}
