use crate::h1::Reject;
use crate::matches;

const MAX_SIZE_DIGITS: usize = 16;

/// Parse a chunk-size line, extensions are validated and discarded.
///
/// chunk-size = 1*HEXDIG
/// chunk-ext  = *( ";" chunk-ext-name [ "=" chunk-ext-val ] )
pub(crate) fn chunk_size(line: &[u8]) -> Result<u64, Reject> {
    let digits = line.iter().take_while(|b| b.is_ascii_hexdigit()).count();
    if digits == 0 {
        return Err(Reject::InvalidChunk);
    }
    if digits > MAX_SIZE_DIGITS {
        return Err(Reject::ChunkTooLarge);
    }

    let size = line[..digits]
        .iter()
        .fold(0u64, |acc, b| acc << 4 | hex_value(*b));
    if size > i64::MAX as u64 {
        return Err(Reject::ChunkTooLarge);
    }

    match &line[digits..] {
        [] => Ok(size),
        [b';', ext @ ..] if ext.iter().all(|b| matches::is_field_value(*b)) => Ok(size),
        _ => Err(Reject::InvalidChunk),
    }
}

const fn hex_value(byte: u8) -> u64 {
    (match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => byte - b'A' + 10,
    }) as u64
}
