//! Fragmented string view.
use bytes::{BufMut, Bytes, BytesMut};
use std::ops::Range;

use crate::matches;

/// Read-only view over bytes that may span several input fragments.
///
/// Each segment is a reference counted [`Bytes`] slice of a fragment, so a view keeps its
/// fragments alive and never copies them. Use [`to_bytes`] for a single contiguous owned
/// value.
///
/// [`to_bytes`]: StrView::to_bytes
#[derive(Clone, Default)]
pub struct StrView {
    repr: Repr,
}

#[derive(Clone, Default)]
enum Repr {
    #[default]
    Empty,
    One(Bytes),
    Many { segments: Vec<Bytes>, len: usize },
}

impl StrView {
    /// Create new empty view.
    #[inline]
    pub const fn new() -> Self {
        Self { repr: Repr::Empty }
    }

    /// Create view from static bytes.
    #[inline]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self {
            repr: Repr::One(Bytes::from_static(bytes)),
        }
    }

    /// Append a segment to the end of the view.
    ///
    /// Empty segments are ignored.
    pub fn push(&mut self, segment: Bytes) {
        if segment.is_empty() {
            return;
        }
        match &mut self.repr {
            Repr::Empty => self.repr = Repr::One(segment),
            Repr::One(first) => {
                let len = first.len() + segment.len();
                let first = std::mem::take(first);
                self.repr = Repr::Many {
                    segments: vec![first, segment],
                    len,
                };
            }
            Repr::Many { segments, len } => {
                *len += segment.len();
                segments.push(segment);
            }
        }
    }

    /// Append all segments of `other`.
    pub fn append(&mut self, other: StrView) {
        match other.repr {
            Repr::Empty => {}
            Repr::One(segment) => self.push(segment),
            Repr::Many { segments, .. } => {
                for segment in segments {
                    self.push(segment);
                }
            }
        }
    }

    /// Returns the total number of bytes.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Empty => 0,
            Repr::One(one) => one.len(),
            Repr::Many { len, .. } => *len,
        }
    }

    /// Returns `true` if the view contains no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.repr, Repr::Empty)
    }

    /// Returns the underlying segments in logical order.
    #[inline]
    pub fn segments(&self) -> &[Bytes] {
        match &self.repr {
            Repr::Empty => &[],
            Repr::One(one) => std::slice::from_ref(one),
            Repr::Many { segments, .. } => segments,
        }
    }

    /// Returns an iterator over every byte.
    pub fn bytes(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.segments().iter().flat_map(|e| e.iter().copied())
    }

    /// Returns the byte at `index`.
    pub fn get(&self, mut index: usize) -> Option<u8> {
        for segment in self.segments() {
            if index < segment.len() {
                return Some(segment[index]);
            }
            index -= segment.len();
        }
        None
    }

    /// Returns the position of the first byte matching `f`.
    pub fn position(&self, f: impl FnMut(u8) -> bool) -> Option<usize> {
        self.bytes().position(f)
    }

    /// Returns a zero-copy sub view.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> StrView {
        assert!(
            range.start <= range.end && range.end <= self.len(),
            "view slice out of bounds"
        );
        let mut view = StrView::new();
        let mut offset = 0;
        for segment in self.segments() {
            let end = offset + segment.len();
            if end > range.start && offset < range.end {
                let lo = range.start.saturating_sub(offset);
                let hi = range.end.min(end) - offset;
                view.push(segment.slice(lo..hi));
            }
            if end >= range.end {
                break;
            }
            offset = end;
        }
        view
    }

    /// Returns the view without leading and trailing `SP` and `HTAB`.
    pub fn trim_ows(&self) -> StrView {
        let lead = self.bytes().take_while(|&b| matches::is_ows(b)).count();
        if lead == self.len() {
            return StrView::new();
        }
        let trail = self.bytes().rev().take_while(|&b| matches::is_ows(b)).count();
        self.slice(lead..self.len() - trail)
    }

    /// Compare with `other` using ASCII case insensitive comparison.
    pub fn eq_ignore_ascii_case(&self, other: &[u8]) -> bool {
        self.len() == other.len()
            && self
                .bytes()
                .zip(other.iter())
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }

    /// Returns the bytes as one contiguous slice.
    ///
    /// A single segment view is returned as is, otherwise bytes are copied into `scratch`.
    pub fn contiguous<'a>(&'a self, scratch: &'a mut Vec<u8>) -> &'a [u8] {
        match &self.repr {
            Repr::Empty => &[],
            Repr::One(one) => &one[..],
            Repr::Many { segments, .. } => {
                scratch.clear();
                for segment in segments {
                    scratch.extend_from_slice(segment);
                }
                &scratch[..]
            }
        }
    }

    /// Copy the view into a contiguous [`Bytes`].
    ///
    /// Single segment view does not copy.
    pub fn to_bytes(&self) -> Bytes {
        match &self.repr {
            Repr::Empty => Bytes::new(),
            Repr::One(one) => one.clone(),
            Repr::Many { segments, len } => {
                let mut buf = BytesMut::with_capacity(*len);
                self.write_to(&mut buf);
                debug_assert_eq!(buf.len(), segments.iter().map(Bytes::len).sum::<usize>());
                buf.freeze()
            }
        }
    }

    /// Write every segment into `buf`.
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        for segment in self.segments() {
            buf.put_slice(segment);
        }
    }
}

// ===== Traits =====

impl From<Bytes> for StrView {
    #[inline]
    fn from(value: Bytes) -> Self {
        let mut view = StrView::new();
        view.push(value);
        view
    }
}

impl From<&'static str> for StrView {
    #[inline]
    fn from(value: &'static str) -> Self {
        Bytes::from_static(value.as_bytes()).into()
    }
}

impl PartialEq for StrView {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.bytes().eq(other.bytes())
    }
}

impl Eq for StrView {}

impl PartialEq<[u8]> for StrView {
    fn eq(&self, other: &[u8]) -> bool {
        self.len() == other.len() && self.bytes().eq(other.iter().copied())
    }
}

impl<const N: usize> PartialEq<[u8; N]> for StrView {
    #[inline]
    fn eq(&self, other: &[u8; N]) -> bool {
        self == &other[..]
    }
}

impl PartialEq<&[u8]> for StrView {
    #[inline]
    fn eq(&self, other: &&[u8]) -> bool {
        self == *other
    }
}

impl PartialEq<str> for StrView {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self == other.as_bytes()
    }
}

impl PartialEq<&str> for StrView {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self == other.as_bytes()
    }
}

impl std::fmt::Debug for StrView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut scratch = Vec::new();
        let bytes = self.contiguous(&mut scratch);
        write!(f, "\"{}\"", bytes.escape_ascii())
    }
}

impl std::fmt::Display for StrView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut scratch = Vec::new();
        let bytes = self.contiguous(&mut scratch);
        f.write_str(&String::from_utf8_lossy(bytes))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn view(parts: &[&'static str]) -> StrView {
        let mut view = StrView::new();
        for part in parts {
            view.push(Bytes::from_static(part.as_bytes()));
        }
        view
    }

    #[test]
    fn test_push_and_compare() {
        let v = view(&["He", "", "llo"]);
        assert_eq!(v.len(), 5);
        assert_eq!(v.segments().len(), 2);
        assert_eq!(v, "Hello");
        assert!(v.eq_ignore_ascii_case(b"hELLO"));
        assert!(!v.eq_ignore_ascii_case(b"hELL"));
        assert_eq!(v.get(2), Some(b'l'));
        assert_eq!(v.get(5), None);
        assert!(view(&["", ""]).is_empty());
    }

    #[test]
    fn test_slice() {
        let v = view(&["ab", "cd", "ef"]);
        assert_eq!(v.slice(1..5), "bcde");
        assert_eq!(v.slice(1..5).segments().len(), 3);
        assert_eq!(v.slice(2..4), "cd");
        assert_eq!(v.slice(2..4).segments().len(), 1);
        assert_eq!(v.slice(0..6), "abcdef");
        assert!(v.slice(3..3).is_empty());
    }

    #[test]
    fn test_trim_ows() {
        assert_eq!(view(&[" ", "\tab", "c  "]).trim_ows(), "abc");
        assert!(view(&[" ", "\t"]).trim_ows().is_empty());
    }

    #[test]
    fn test_contiguous() {
        let mut scratch = Vec::new();
        let v = view(&["foo", "bar"]);
        assert_eq!(v.contiguous(&mut scratch), b"foobar");
        assert_eq!(v.to_bytes(), &b"foobar"[..]);

        let one = view(&["foo"]);
        let ptr = one.segments()[0].as_ptr();
        assert_eq!(one.contiguous(&mut scratch).as_ptr(), ptr);
        assert_eq!(one.to_bytes().as_ptr(), ptr);
    }
}
