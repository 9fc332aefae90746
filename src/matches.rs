//! Byte class lookup tables.
//!
//! Every table is computed at compile time and indexed by the byte value, so each check is a
//! single load.

macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

// ===== Blocks =====

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
const fn unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
const fn sub_delims(byte: u8) -> bool {
    matches!(
        byte,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// VCHAR = %x21-7E
const fn vchar(byte: u8) -> bool {
    matches!(byte, 0x21..=0x7E)
}

/// obs-text = %x80-FF
const fn obs_text(byte: u8) -> bool {
    byte >= 0x80
}

// ===== lookup table =====

byte_map! {
    /// token   = 1*tchar
    /// tchar   = "!" / "#" / "$" / "%" / "&" / "'" / "*"
    ///         / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
    ///         / DIGIT / ALPHA
    #[inline(always)]
    pub const fn is_token(byte: u8) {
        matches!(
            byte,
            | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*'
            | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
        )
        || byte.is_ascii_alphanumeric()
    }
}

byte_map! {
    /// Bytes allowed in a request target.
    ///
    /// Only visible ASCII is accepted, raw DEL, controls and non-ASCII bytes must be
    /// percent-encoded by the client.
    #[inline(always)]
    pub const fn is_uri(byte: u8) {
        vchar(byte)
    }
}

byte_map! {
    /// field-vchar = VCHAR / obs-text, plus SP and HTAB inside a field value
    #[inline(always)]
    pub const fn is_field_value(byte: u8) {
        vchar(byte) || obs_text(byte) || matches!(byte, b' ' | b'\t')
    }
}

byte_map! {
    /// etagc = %x21 / %x23-7E / obs-text
    #[inline(always)]
    pub const fn is_etagc(byte: u8) {
        byte == 0x21 || matches!(byte, 0x23..=0x7E) || obs_text(byte)
    }
}

byte_map! {
    /// Cookie value bytes.
    ///
    /// Values are opaque, only the pair delimiters and whitespace are excluded.
    #[inline(always)]
    pub const fn is_cookie_value(byte: u8) {
        (vchar(byte) || obs_text(byte)) && !matches!(byte, b',' | b';')
    }
}

byte_map! {
    /// X-Forwarded-For node: hostname, IPv4 or unbracketed IPv6 literal.
    #[inline(always)]
    pub const fn is_node(byte: u8) {
        byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-' | b'_' | b':')
    }
}

byte_map! {
    /// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    #[inline(always)]
    pub const fn is_scheme(byte: u8) {
        byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.')
    }
}

byte_map! {
    /// reg-name = *( unreserved / pct-encoded / sub-delims )
    #[inline(always)]
    pub const fn is_regname(byte: u8) {
        unreserved(byte) || byte == b'%' || sub_delims(byte)
    }
}

byte_map! {
    /// IPv6 address or IPvFuture inside brackets.
    #[inline(always)]
    pub const fn is_ip_literal(byte: u8) {
        byte.is_ascii_hexdigit() || matches!(byte, b':' | b'.' | b'v' | b'V')
    }
}

/// OWS = *( SP / HTAB )
#[inline(always)]
pub const fn is_ows(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// Returns `bytes` without leading and trailing optional whitespace.
pub fn trim_ows(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes
        && is_ows(*first)
    {
        bytes = rest;
    }
    while let [rest @ .., last] = bytes
        && is_ows(*last)
    {
        bytes = rest;
    }
    bytes
}

/// Parse decimal digits into `u64`, rejecting empty input, signs and overflow.
pub fn atou(bytes: &[u8]) -> Option<u64> {
    if bytes.is_empty() {
        return None;
    }
    let mut value = 0u64;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value.checked_mul(10)?.checked_add((byte - b'0') as u64)?;
    }
    Some(value)
}
