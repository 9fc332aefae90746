//! Incremental HTTP/1.x parser.
//!
//! [`feed`] takes a fragment of any length and advances the message as far as the fragment
//! allows. Everything needed to resume, including a partially received line, is kept in the
//! message's [`ParserState`], so the same message split at any boundary produces the same
//! result.
//!
//! Lines are never copied while scanning. A line is collected as a [`StrView`] over the
//! received fragments and only made contiguous, in the message scratch buffer, when it spans
//! more than one fragment.
use bytes::Bytes;

use super::{BodyMode, MessageHead, Reject};
use crate::common::ParseResult;
use crate::headers::HeaderId;
use crate::log::{debug, rejected, trace};
use crate::strview::StrView;

mod chunked;
mod header;
mod state;

pub(crate) use state::ParserState;
use state::State;


/// Direction specific half of a message.
pub(crate) trait Message {
    fn head(&self) -> &MessageHead;

    fn head_mut(&mut self) -> &mut MessageHead;

    /// Parse the start line, `bytes` is the contiguous content of `line`.
    fn parse_start_line(&mut self, line: &StrView, bytes: &[u8]) -> Result<(), Reject>;

    /// Classify a well-known header not shared by both directions.
    fn classify(&mut self, id: HeaderId, value: &StrView, bytes: &[u8]) -> Result<(), Reject>;

    /// Called once the header block completes, returns how the body is delimited.
    fn finish_headers(&mut self) -> BodyMode;
}

/// Feed the next fragment.
///
/// Returns the number of bytes of `fragment` consumed once the message completes, the rest
/// belongs to the next message.
pub(crate) fn feed<M: Message>(msg: &mut M, fragment: &Bytes) -> ParseResult<usize, Reject> {
    match msg.head().parser.state {
        State::Done => return ParseResult::Ok(0),
        State::Rejected(reason) => return ParseResult::Err(reason),
        _ => {}
    }

    let mut cursor = 0;
    match advance(msg, fragment, &mut cursor) {
        Ok(true) => {
            debug!(
                "message complete, {} body bytes, {} bytes left in fragment",
                msg.head().body.len(),
                fragment.len() - cursor,
            );
            ParseResult::Ok(cursor)
        }
        Ok(false) => ParseResult::Pending,
        Err(reason) => {
            let parser = &mut msg.head_mut().parser;
            rejected!(reason, parser.state);
            parser.state = State::Rejected(reason);
            ParseResult::Err(reason)
        }
    }
}

/// Signal the end of the stream.
///
/// Completes a body delimited by end of stream, any other incomplete message is rejected.
pub(crate) fn feed_eof<M: Message>(msg: &mut M) -> Result<(), Reject> {
    let parser = &mut msg.head_mut().parser;
    match parser.state {
        State::Done => Ok(()),
        State::Rejected(reason) => Err(reason),
        State::Unbounded => {
            parser.state = State::Done;
            debug!("message complete at end of stream");
            Ok(())
        }
        _ => {
            rejected!(Reject::UnexpectedEof, parser.state);
            parser.state = State::Rejected(Reject::UnexpectedEof);
            Err(Reject::UnexpectedEof)
        }
    }
}

/// Returns `true` once the message is complete.
fn advance<M: Message>(msg: &mut M, buf: &Bytes, cursor: &mut usize) -> Result<bool, Reject> {
    loop {
        let head = msg.head_mut();
        let limits = head.limits;
        let state = head.parser.state;

        match state {
            State::Pre => {
                let parser = &mut head.parser;
                while let Some(&byte) = buf.get(*cursor) {
                    match byte {
                        b'\n' => {
                            parser.pending_cr = false;
                            parser.empty_lines += 1;
                        }
                        b'\r' => {
                            if parser.pending_cr {
                                parser.empty_lines += 1;
                            }
                            parser.pending_cr = true;
                        }
                        _ => break,
                    }
                    *cursor += 1;
                    if parser.empty_lines > limits.max_empty_lines() {
                        return Err(Reject::TooManyEmptyLines);
                    }
                }
                if *cursor == buf.len() {
                    return Ok(false);
                }
                // a stray `CR` before the start line counts as one empty line
                if std::mem::take(&mut parser.pending_cr) {
                    parser.empty_lines += 1;
                    if parser.empty_lines > limits.max_empty_lines() {
                        return Err(Reject::TooManyEmptyLines);
                    }
                }
                parser.state = State::StartLine;
            }
            State::StartLine => {
                let line = head.parser.take_line(
                    buf,
                    cursor,
                    limits.max_start_line(),
                    Reject::StartLineTooLong,
                )?;
                let Some((line, eol)) = line else {
                    return Ok(false);
                };
                start_line(msg, line, eol)?;
                msg.head_mut().parser.state = State::Headers;
            }
            State::Headers => {
                let line = head.parser.take_line(
                    buf,
                    cursor,
                    limits.max_header_line(),
                    Reject::LineTooLong,
                )?;
                let Some((line, eol)) = line else {
                    return Ok(false);
                };
                if line.is_empty() {
                    head.crlf_len = eol;
                    end_of_headers(msg)?;
                } else {
                    header::header_line(msg, line, eol, false)?;
                }
            }
            State::Fixed { remaining } => {
                let read = take_body(head, buf, cursor, remaining);
                if read < remaining {
                    head.parser.state = State::Fixed {
                        remaining: remaining - read,
                    };
                    return Ok(false);
                }
                head.parser.state = State::Done;
            }
            State::ChunkSize => {
                let line = head.parser.take_line(
                    buf,
                    cursor,
                    limits.max_header_line(),
                    Reject::LineTooLong,
                )?;
                let Some((line, eol)) = line else {
                    return Ok(false);
                };
                let size = chunked::chunk_size(line.contiguous(&mut head.scratch))?;
                head.body_wire_len += (line.len() + eol as usize) as u64;
                trace!("chunk of {size} bytes");
                head.parser.state = match size {
                    0 => State::Trailer,
                    _ => State::ChunkData { remaining: size },
                };
            }
            State::ChunkData { remaining } => {
                let read = take_body(head, buf, cursor, remaining);
                head.body_wire_len += read;
                if read < remaining {
                    head.parser.state = State::ChunkData {
                        remaining: remaining - read,
                    };
                    return Ok(false);
                }
                head.parser.state = State::ChunkEol { cr: false };
            }
            State::ChunkEol { cr } => {
                let Some(&byte) = buf.get(*cursor) else {
                    return Ok(false);
                };
                *cursor += 1;
                head.parser.state = match (byte, cr) {
                    (b'\n', _) => {
                        head.body_wire_len += 1 + cr as u64;
                        State::ChunkSize
                    }
                    (b'\r', false) => State::ChunkEol { cr: true },
                    _ => return Err(Reject::InvalidChunk),
                };
            }
            State::Trailer => {
                let line = head.parser.take_line(
                    buf,
                    cursor,
                    limits.max_header_line(),
                    Reject::LineTooLong,
                )?;
                let Some((line, eol)) = line else {
                    return Ok(false);
                };
                if line.is_empty() {
                    // trailer may declare more hop-by-hop headers
                    head.mark_hop_by_hop();
                    head.parser.state = State::Done;
                } else {
                    header::header_line(msg, line, eol, true)?;
                }
            }
            State::Unbounded => {
                take_body(head, buf, cursor, u64::MAX);
                return Ok(false);
            }
            State::Done => return Ok(true),
            State::Rejected(reason) => return Err(reason),
        }
    }
}

fn start_line<M: Message>(msg: &mut M, line: StrView, eol: u8) -> Result<(), Reject> {
    let mut scratch = std::mem::take(&mut msg.head_mut().scratch);
    let result = msg.parse_start_line(&line, line.contiguous(&mut scratch));

    let head = msg.head_mut();
    head.scratch = scratch;
    head.start_line = line;
    head.start_eol = eol;
    result
}

/// Cross validate framing headers and resolve the body mode.
fn end_of_headers<M: Message>(msg: &mut M) -> Result<(), Reject> {
    let head = msg.head_mut();
    if head.codings.is_present() && head.content_length.is_some() {
        return Err(Reject::FramingConflict);
    }
    head.codings.finish()?;
    head.mark_hop_by_hop();

    let mode = msg.finish_headers();
    trace!("header block complete, body {mode:?}");

    let head = msg.head_mut();
    head.body_mode = mode;
    head.parser.state = match mode {
        BodyMode::None | BodyMode::Fixed(0) => State::Done,
        BodyMode::Fixed(len) => State::Fixed { remaining: len },
        BodyMode::Chunked => State::ChunkSize,
        BodyMode::Unbounded => State::Unbounded,
    };
    Ok(())
}

/// Append up to `max` bytes of `buf` to the body, returns the number taken.
fn take_body(head: &mut MessageHead, buf: &Bytes, cursor: &mut usize, max: u64) -> u64 {
    let available = (buf.len() - *cursor) as u64;
    let read = max.min(available) as usize;
    head.body.push(buf.slice(*cursor..*cursor + read));
    *cursor += read;
    read as u64
}
