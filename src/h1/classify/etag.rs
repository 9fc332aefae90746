use std::ops::Range;

use crate::h1::Reject;
use crate::matches;
use crate::strview::StrView;

/// Entity tag.
///
/// entity-tag = [ weak ] opaque-tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTag {
    weak: bool,
    tag: StrView,
}

impl EntityTag {
    pub(crate) fn new(weak: bool, tag: StrView) -> Self {
        Self { weak, tag }
    }

    /// Returns `true` if the tag carries the `W/` weak indicator.
    #[inline]
    pub const fn is_weak(&self) -> bool {
        self.weak
    }

    /// Returns the opaque tag, without quotes.
    #[inline]
    pub const fn tag(&self) -> &StrView {
        &self.tag
    }
}

/// Parse one entity tag at the start of `bytes`.
///
/// Returns whether the tag is weak, the range of the opaque tag without quotes and the
/// number of bytes consumed.
fn entity_tag(bytes: &[u8]) -> Option<(bool, Range<usize>, usize)> {
    let (weak, start) = match bytes {
        [b'W', b'/', ..] => (true, 2),
        _ => (false, 0),
    };
    if bytes.get(start) != Some(&b'"') {
        return None;
    }
    let open = start + 1;
    let len = bytes[open..]
        .iter()
        .take_while(|b| matches::is_etagc(**b))
        .count();
    let close = open + len;
    if bytes.get(close) != Some(&b'"') {
        return None;
    }
    Some((weak, open..close, close + 1))
}

/// Parse `ETag`, exactly one entity tag.
///
/// ETag = entity-tag
pub(crate) fn parse_etag(bytes: &[u8]) -> Result<(bool, Range<usize>), Reject> {
    match entity_tag(bytes) {
        Some((weak, tag, len)) if len == bytes.len() => Ok((weak, tag)),
        _ => Err(Reject::InvalidETag),
    }
}

/// Parse `If-None-Match`.
///
/// Returns `None` for `*`, or the weakness and range of every listed tag.
///
/// If-None-Match = "*" / #entity-tag
pub(crate) fn parse_if_none_match(
    bytes: &[u8],
) -> Result<Option<Vec<(bool, Range<usize>)>>, Reject> {
    if bytes == b"*" {
        return Ok(None);
    }
    let mut tags = Vec::new();
    let mut pos = 0;
    loop {
        let (weak, tag, len) = entity_tag(&bytes[pos..]).ok_or(Reject::InvalidIfNoneMatch)?;
        tags.push((weak, tag.start + pos..tag.end + pos));
        pos += len;
        pos += bytes[pos..].iter().take_while(|b| matches::is_ows(**b)).count();
        match bytes.get(pos) {
            None => break,
            Some(b',') => {
                pos += 1;
                pos += bytes[pos..].iter().take_while(|b| matches::is_ows(**b)).count();
            }
            Some(_) => return Err(Reject::InvalidIfNoneMatch),
        }
    }
    Ok(Some(tags))
}
