use bytes::{BufMut, BytesMut};

use super::classify::Elements;
use super::{BodyMode, MessageHead};
use crate::headers::{HeaderField, HeaderId};

/// Options of [`MessageHead::write_head`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    strip_hop_by_hop: bool,
    dechunk: bool,
}

impl WriteOptions {
    /// Write every header as received.
    #[inline]
    pub const fn new() -> Self {
        Self {
            strip_hop_by_hop: false,
            dechunk: false,
        }
    }

    /// Drop headers marked hop-by-hop.
    #[inline]
    pub const fn strip_hop_by_hop(mut self, value: bool) -> Self {
        self.strip_hop_by_hop = value;
        self
    }

    /// For a chunked body, drop `chunked` from `Transfer-Encoding` and add the `Content-Length`
    /// of the decoded body.
    ///
    /// Codings applied before `chunked` are kept.
    #[inline]
    pub const fn dechunk(mut self, value: bool) -> Self {
        self.dechunk = value;
        self
    }
}

const fn eol(len: u8) -> &'static [u8] {
    match len {
        1 => b"\n",
        _ => b"\r\n",
    }
}

pub(crate) fn write_head(head: &MessageHead, options: WriteOptions, buf: &mut BytesMut) {
    let dechunk = options.dechunk && head.body_mode == BodyMode::Chunked;

    head.start_line.write_to(buf);
    buf.put_slice(eol(head.start_eol));

    for id in HeaderId::ALL {
        let Some(field) = head.headers.get(*id) else {
            continue;
        };
        if dechunk && *id == HeaderId::TransferEncoding {
            write_unchunked(field, buf);
        } else {
            write_field(field, options, buf);
        }
    }
    for field in head.headers.raw_headers() {
        write_field(field, options, buf);
    }

    if dechunk {
        buf.put_slice(b"Content-Length: ");
        buf.put_slice(itoa::Buffer::new().format(head.body.len()).as_bytes());
        buf.put_slice(eol(head.crlf_len));
    }
    buf.put_slice(eol(head.crlf_len));
}

fn write_field(field: &HeaderField, options: WriteOptions, buf: &mut BytesMut) {
    if options.strip_hop_by_hop && field.is_hop_by_hop() {
        return;
    }
    for line in field {
        line.line().write_to(buf);
        buf.put_slice(eol(line.eol() as u8));
    }
}

/// Write `Transfer-Encoding` without its final `chunked` coding, nothing if no coding is left.
fn write_unchunked(field: &HeaderField, buf: &mut BytesMut) {
    let mut codings = Vec::new();
    for line in field {
        let value = line.value().to_bytes();
        for range in Elements::new(&value) {
            if !range.is_empty() {
                codings.push(value.slice(range));
            }
        }
    }
    // `chunked` is always the final coding of a chunked body
    codings.pop();
    if codings.is_empty() {
        return;
    }

    field.name().write_to(buf);
    buf.put_slice(b": ");
    for (i, coding) in codings.iter().enumerate() {
        if i != 0 {
            buf.put_slice(b", ");
        }
        buf.put_slice(coding);
    }
    buf.put_slice(eol(field.first().eol() as u8));
}
