use std::num::NonZeroU32;

use crate::strview::StrView;

/// One header line as received.
///
/// The line is kept whole, without its terminator, so the name, the value and the exact
/// original bytes are all available from the same view.
#[derive(Clone)]
pub struct HeaderLine {
    line: StrView,
    name_len: u32,
    value_start: u32,
    eol: u8,
}

impl HeaderLine {
    /// Returns `None` if the offsets do not fit in `u32`.
    pub(crate) fn new(
        line: StrView,
        name_len: usize,
        value_start: usize,
        eol: u8,
    ) -> Option<Self> {
        debug_assert!(name_len < value_start && value_start <= line.len());
        debug_assert!(matches!(eol, 1 | 2));
        Some(Self {
            line,
            name_len: u32::try_from(name_len).ok()?,
            value_start: u32::try_from(value_start).ok()?,
            eol,
        })
    }

    /// Returns the whole `Name: value` line, without terminator.
    #[inline]
    pub fn line(&self) -> &StrView {
        &self.line
    }

    /// Returns the header name as received.
    #[inline]
    pub fn name(&self) -> StrView {
        self.line.slice(0..self.name_len as usize)
    }

    /// Returns the value, leading whitespace excluded and trailing whitespace preserved.
    #[inline]
    pub fn value(&self) -> StrView {
        self.line.slice(self.value_start as usize..self.line.len())
    }

    /// Returns the value without surrounding whitespace.
    #[inline]
    pub fn trimmed_value(&self) -> StrView {
        self.value().trim_ows()
    }

    /// Returns the length of the line terminator, `2` for `CRLF` and `1` for bare `LF`.
    #[inline]
    pub fn eol(&self) -> usize {
        self.eol as usize
    }
}

impl std::fmt::Debug for HeaderLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderLine")
            .field("line", &self.line)
            .field("eol", &self.eol)
            .finish()
    }
}

/// Header field.
///
/// Contains every [`HeaderLine`] of the same header, in arrival order.
#[derive(Clone)]
pub struct HeaderField {
    first: HeaderLine,
    next: Option<Box<FieldExtra>>,
    len: NonZeroU32,
    hop_by_hop: bool,
}

#[derive(Clone)]
struct FieldExtra {
    line: HeaderLine,
    next: Option<Box<FieldExtra>>,
}

impl HeaderField {
    pub(crate) const fn new(line: HeaderLine) -> Self {
        Self {
            first: line,
            next: None,
            len: NonZeroU32::MIN,
            hop_by_hop: false,
        }
    }

    /// Returns the first line.
    #[inline]
    pub const fn first(&self) -> &HeaderLine {
        &self.first
    }

    /// Returns the value of the first line.
    ///
    /// Use [`iter`][HeaderField::iter] to get every value of a repeated header.
    #[inline]
    pub fn value(&self) -> StrView {
        self.first.value()
    }

    /// Returns the header name of the first line.
    #[inline]
    pub fn name(&self) -> StrView {
        self.first.name()
    }

    /// Returns the number of lines.
    ///
    /// This function will returns at least `1`.
    #[inline]
    #[allow(
        clippy::len_without_is_empty,
        reason = "Field always have at least 1 line"
    )]
    pub const fn len(&self) -> usize {
        self.len.get() as _
    }

    /// Returns an iterator over every line.
    #[inline]
    pub fn iter(&self) -> Lines<'_> {
        Lines {
            first: Some(&self.first),
            next: self.next.as_deref(),
        }
    }

    /// Returns `true` if the header only concerns the current connection.
    #[inline]
    pub const fn is_hop_by_hop(&self) -> bool {
        self.hop_by_hop
    }

    pub(crate) fn set_hop_by_hop(&mut self) {
        self.hop_by_hop = true;
    }

    /// Chain another line of the same header.
    pub(crate) fn push(&mut self, line: HeaderLine) {
        let mut slot = &mut self.next;
        while let Some(extra) = slot {
            slot = &mut extra.next;
        }
        *slot = Some(Box::new(FieldExtra { line, next: None }));
        self.len = self.len.saturating_add(1);
    }
}

impl std::fmt::Debug for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderField")
            .field("name", &self.first.name())
            .field("values", &self.iter().map(HeaderLine::value).collect::<Vec<_>>())
            .field("hop_by_hop", &self.hop_by_hop)
            .finish()
    }
}

// ===== Iterator =====

impl<'a> IntoIterator for &'a HeaderField {
    type Item = &'a HeaderLine;

    type IntoIter = Lines<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned from [`HeaderField::iter`].
#[derive(Debug)]
pub struct Lines<'a> {
    first: Option<&'a HeaderLine>,
    next: Option<&'a FieldExtra>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a HeaderLine;

    fn next(&mut self) -> Option<Self::Item> {
        match self.first.take() {
            Some(first) => Some(first),
            None => {
                let extra = self.next?;
                self.next = extra.next.as_deref();
                Some(&extra.line)
            }
        }
    }
}

impl std::fmt::Debug for FieldExtra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.line, f)
    }
}
