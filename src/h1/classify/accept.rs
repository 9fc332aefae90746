use super::{Elements, is_token, parameter};
use crate::h1::Reject;
use crate::matches;

/// Parse one `Accept` line, returns `true` if it explicitly accepts `text/html`.
///
/// Wildcard ranges such as `text/*` or `*/*` do not count, neither does a zero weight.
///
/// Accept       = #( media-range [ weight ] )
/// media-range  = ( "*/*" / ( type "/" "*" ) / ( type "/" subtype ) ) parameters
pub(crate) fn accepts_html(bytes: &[u8]) -> Result<bool, Reject> {
    let mut html = false;
    for range in Elements::new(bytes) {
        if range.is_empty() {
            continue;
        }
        let element = &bytes[range];
        let mut params = element.split(|b| *b == b';');
        let media = matches::trim_ows(params.next().unwrap_or_default());
        let Some(slash) = media.iter().position(|b| *b == b'/') else {
            return Err(Reject::InvalidAccept);
        };
        let (kind, subtype) = (&media[..slash], &media[slash + 1..]);
        if !is_token(kind) || !is_token(subtype) {
            return Err(Reject::InvalidAccept);
        }

        let mut weight_zero = false;
        for param in params {
            let (name, value) =
                parameter(matches::trim_ows(param)).ok_or(Reject::InvalidAccept)?;
            if name.eq_ignore_ascii_case(b"q") {
                weight_zero = is_zero_weight(value.ok_or(Reject::InvalidAccept)?)?;
            }
        }

        if kind.eq_ignore_ascii_case(b"text") && subtype.eq_ignore_ascii_case(b"html") {
            html |= !weight_zero;
        }
    }
    Ok(html)
}

/// qvalue = ( "0" [ "." 0*3DIGIT ] ) / ( "1" [ "." 0*3("0") ] )
fn is_zero_weight(qvalue: &[u8]) -> Result<bool, Reject> {
    let (int, frac) = match qvalue.iter().position(|b| *b == b'.') {
        Some(dot) => (&qvalue[..dot], &qvalue[dot + 1..]),
        None => (qvalue, &[][..]),
    };
    if frac.len() > 3 || !frac.iter().all(u8::is_ascii_digit) {
        return Err(Reject::InvalidAccept);
    }
    match int {
        b"0" => Ok(frac.iter().all(|b| *b == b'0')),
        b"1" if frac.iter().all(|b| *b == b'0') => Ok(false),
        _ => Err(Reject::InvalidAccept),
    }
}
