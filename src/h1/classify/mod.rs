//! Per-header value grammars.
//!
//! Every function here works on the value bytes with surrounding whitespace already removed,
//! and reports positions as ranges into those bytes so the caller can slice the matching
//! [`StrView`][crate::strview::StrView] without copying.
use std::ops::Range;

use crate::matches;

mod accept;
mod cache_control;
mod coding;
mod connection;
mod cookie;
mod etag;
mod forwarded;
mod keep_alive;
mod uri;

pub use cache_control::CacheControl;
pub use etag::EntityTag;
pub use keep_alive::KeepAlive;

pub(crate) use accept::accepts_html;
pub(crate) use cache_control::{delta_seconds, parse_cache_control, parse_pragma};
pub(crate) use coding::{Codings, content_length};
pub(crate) use connection::{ConnectionOptions, parse_connection};
pub(crate) use cookie::parse_cookies;
pub(crate) use etag::{parse_etag, parse_if_none_match};
pub(crate) use forwarded::parse_forwarded_for;
pub(crate) use keep_alive::parse_keep_alive;
pub(crate) use uri::{Authority, Target, parse_host, parse_referer, parse_target};

#[cfg(test)]
mod test;

/// Iterator over the elements of a comma separated list.
///
/// Yields each element with surrounding whitespace removed, empty elements included. Commas
/// inside a quoted string do not split.
pub(crate) struct Elements<'a> {
    bytes: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> Elements<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            done: false,
        }
    }
}

impl Iterator for Elements<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.pos;
        let mut quoted = false;
        let mut escaped = false;
        let mut end = self.bytes.len();
        for (i, &byte) in self.bytes[start..].iter().enumerate() {
            match byte {
                _ if escaped => escaped = false,
                b'\\' if quoted => escaped = true,
                b'"' => quoted = !quoted,
                b',' if !quoted => {
                    end = start + i;
                    break;
                }
                _ => {}
            }
        }
        if end == self.bytes.len() {
            self.done = true;
        } else {
            self.pos = end + 1;
        }
        Some(trim(self.bytes, start..end))
    }
}

/// Shrink `range` to exclude surrounding whitespace.
pub(crate) fn trim(bytes: &[u8], mut range: Range<usize>) -> Range<usize> {
    while range.start < range.end && matches::is_ows(bytes[range.start]) {
        range.start += 1;
    }
    while range.start < range.end && matches::is_ows(bytes[range.end - 1]) {
        range.end -= 1;
    }
    range
}

/// Length of the token at the start of `bytes`.
pub(crate) fn token_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| matches::is_token(**b)).count()
}

/// Returns `true` if `bytes` is a non empty token.
pub(crate) fn is_token(bytes: &[u8]) -> bool {
    !bytes.is_empty() && token_len(bytes) == bytes.len()
}

/// Length of the quoted-string at the start of `bytes`, quotes included.
///
/// quoted-string = DQUOTE *( qdtext / quoted-pair ) DQUOTE
pub(crate) fn quoted_len(bytes: &[u8]) -> Option<usize> {
    let [b'"', rest @ ..] = bytes else {
        return None;
    };
    let mut iter = rest.iter().enumerate();
    while let Some((i, &byte)) = iter.next() {
        match byte {
            b'"' => return Some(i + 2),
            b'\\' => {
                let (_, &escaped) = iter.next()?;
                if !matches::is_field_value(escaped) {
                    return None;
                }
            }
            b'\t' | b' ' | 0x21 | 0x23..=0x7E | 0x80.. => {}
            _ => return None,
        }
    }
    None
}

/// Split `name[=value]` parameter, both parts trimmed.
///
/// The value is either a token or a quoted-string, returns `None` if the syntax is invalid.
pub(crate) fn parameter(bytes: &[u8]) -> Option<(&[u8], Option<&[u8]>)> {
    let name_len = token_len(bytes);
    if name_len == 0 {
        return None;
    }
    let name = &bytes[..name_len];
    let rest = matches::trim_ows(&bytes[name_len..]);
    let Some(value) = rest.strip_prefix(b"=") else {
        return rest.is_empty().then_some((name, None));
    };
    let value = matches::trim_ows(value);
    let valid = match value.first() {
        Some(b'"') => quoted_len(value) == Some(value.len()),
        _ => is_token(value),
    };
    valid.then_some((name, Some(value)))
}

/// Returns the value without its surrounding quotes, if quoted.
pub(crate) fn unquote(value: &[u8]) -> &[u8] {
    match value {
        [b'"', inner @ .., b'"'] => inner,
        _ => value,
    }
}
