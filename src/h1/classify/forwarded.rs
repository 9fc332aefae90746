use super::Elements;
use crate::h1::Reject;
use crate::matches;

/// Validate `X-Forwarded-For`, returns the number of nodes.
///
/// X-Forwarded-For = 1#node
/// node            = ( "[" IPv6 "]" / nodename ) [ ":" port ]
pub(crate) fn parse_forwarded_for(bytes: &[u8]) -> Result<usize, Reject> {
    if bytes.is_empty() {
        return Err(Reject::InvalidForwardedFor);
    }
    let mut count = 0;
    for range in Elements::new(bytes) {
        if !is_node(&bytes[range]) {
            return Err(Reject::InvalidForwardedFor);
        }
        count += 1;
    }
    Ok(count)
}

fn is_node(node: &[u8]) -> bool {
    if let [b'[', rest @ ..] = node {
        let Some(close) = rest.iter().position(|b| *b == b']') else {
            return false;
        };
        let (ip, port) = rest.split_at(close);
        return !ip.is_empty()
            && ip.iter().all(|b| matches::is_ip_literal(*b))
            && match &port[1..] {
                [] => true,
                [b':', port @ ..] => is_port(port),
                _ => false,
            };
    }

    if node.is_empty() || !node.iter().all(|b| matches::is_node(*b)) {
        return false;
    }
    match node.iter().filter(|b| **b == b':').count() {
        0 => true,
        1 => {
            let colon = node.iter().position(|b| *b == b':').unwrap_or_default();
            colon != 0 && is_port(&node[colon + 1..])
        }
        // unbracketed IPv6 literal
        _ => node.iter().all(|b| b.is_ascii_hexdigit() || matches!(b, b':' | b'.')),
    }
}

/// port = 1*5DIGIT, at most 65535
pub(crate) fn is_port(bytes: &[u8]) -> bool {
    parse_port(bytes).is_some()
}

pub(crate) fn parse_port(bytes: &[u8]) -> Option<u16> {
    if bytes.len() > 5 {
        return None;
    }
    u16::try_from(matches::atou(bytes)?).ok()
}
