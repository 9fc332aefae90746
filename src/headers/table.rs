use super::{Direction, HeaderField, HeaderId, HeaderLine};

/// Header table of a single message.
///
/// Well-known headers live in a fixed slot per [`HeaderId`]. Every other header goes to an
/// append-only raw list, lines with the same name share one entry so the index returned on
/// first insertion stays valid for the lifetime of the table.
#[derive(Clone)]
pub struct HeaderTable {
    direction: Direction,
    known: [Option<HeaderField>; HeaderId::COUNT],
    raw: Vec<HeaderField>,
    lines: usize,
}

impl HeaderTable {
    /// Create new empty table.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            known: [const { None }; HeaderId::COUNT],
            raw: Vec::new(),
            lines: 0,
        }
    }

    /// Returns the direction used to resolve well-known names.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the total number of stored lines.
    #[inline]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Returns `true` if the table contains no header.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.lines == 0
    }

    /// Returns `true` if the well-known header is present.
    #[inline]
    pub fn contains(&self, id: HeaderId) -> bool {
        self.known[id as usize].is_some()
    }

    /// Returns the well-known header.
    #[inline]
    pub fn get(&self, id: HeaderId) -> Option<&HeaderField> {
        self.known[id as usize].as_ref()
    }

    /// Returns the raw header at `index`.
    #[inline]
    pub fn raw(&self, index: usize) -> Option<&HeaderField> {
        self.raw.get(index)
    }

    /// Returns the raw headers in insertion order.
    #[inline]
    pub fn raw_headers(&self) -> &[HeaderField] {
        &self.raw
    }

    /// Returns the index of the raw header called `name`, compared case insensitively.
    pub fn find_raw(&self, name: &[u8]) -> Option<usize> {
        self.raw
            .iter()
            .position(|field| field.name().eq_ignore_ascii_case(name))
    }

    /// Returns the header called `name`, either well-known or raw.
    pub fn get_by_name(&self, name: &[u8]) -> Option<&HeaderField> {
        match HeaderId::lookup(name, self.direction) {
            Some(id) => self.get(id),
            None => self.raw(self.find_raw(name)?),
        }
    }

    /// Returns an iterator over every header, well-known headers first in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderField> {
        self.known.iter().flatten().chain(self.raw.iter())
    }

    /// Store a line of a well-known header.
    ///
    /// Returns `false` if the header was already present, the line is chained on it.
    pub(crate) fn push_known(&mut self, id: HeaderId, line: HeaderLine) -> bool {
        self.lines += 1;
        if let Some(field) = &mut self.known[id as usize] {
            field.push(line);
            return false;
        }
        self.known[id as usize] = Some(HeaderField::new(line));
        true
    }

    /// Store a raw header line, returns its stable index.
    pub(crate) fn push_raw(&mut self, line: HeaderLine) -> usize {
        self.lines += 1;
        let mut scratch = Vec::new();
        let name = line.name();
        let name = name.contiguous(&mut scratch);
        match self.find_raw(name) {
            Some(index) => {
                self.raw[index].push(line);
                index
            }
            None => {
                self.raw.push(HeaderField::new(line));
                self.raw.len() - 1
            }
        }
    }

    /// Mark the well-known header as hop-by-hop, returns `false` if it is absent.
    pub(crate) fn mark_known(&mut self, id: HeaderId) -> bool {
        match &mut self.known[id as usize] {
            Some(field) => {
                field.set_hop_by_hop();
                true
            }
            None => false,
        }
    }

    /// Mark the header called `name` as hop-by-hop, returns `false` if it is absent.
    pub(crate) fn mark_by_name(&mut self, name: &[u8]) -> bool {
        if let Some(id) = HeaderId::lookup(name, self.direction) {
            return self.mark_known(id);
        }
        match self.find_raw(name) {
            Some(index) => {
                self.raw[index].set_hop_by_hop();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for HeaderTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
