use std::ops::Range;

use super::token_len;
use crate::h1::Reject;
use crate::matches;

/// Parse `Cookie`, returns the name and value range of every pair.
///
/// Values are opaque, quotes inside them are not interpreted.
///
/// cookie-string = cookie-pair *( ";" SP cookie-pair )
/// cookie-pair   = cookie-name "=" cookie-value
pub(crate) fn parse_cookies(bytes: &[u8]) -> Result<Vec<(Range<usize>, Range<usize>)>, Reject> {
    let mut pairs = Vec::new();
    let mut pos = 0;
    loop {
        let name_len = token_len(&bytes[pos..]);
        if name_len == 0 {
            return Err(Reject::InvalidCookie);
        }
        let name = pos..pos + name_len;
        pos += name_len;
        if bytes.get(pos) != Some(&b'=') {
            return Err(Reject::InvalidCookie);
        }
        pos += 1;
        let value_len = bytes[pos..]
            .iter()
            .take_while(|b| matches::is_cookie_value(**b))
            .count();
        pairs.push((name, pos..pos + value_len));
        pos += value_len;
        match &bytes[pos..] {
            [] => break,
            [b';', b' ', ..] => pos += 2,
            _ => return Err(Reject::InvalidCookie),
        }
    }
    Ok(pairs)
}
