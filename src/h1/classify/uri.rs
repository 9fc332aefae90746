use std::ops::Range;

use super::forwarded::parse_port;
use crate::matches;

/// Host and optional port of an authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Authority {
    /// Host range, brackets of an IP literal included.
    pub(crate) host: Range<usize>,
    pub(crate) port: Option<u16>,
}

/// Parsed request target or referer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    /// `/path?query`
    Origin,
    /// `scheme://authority[/path]`, path is empty when absent.
    Absolute {
        authority: Authority,
        path: Range<usize>,
    },
    /// `host:port`
    Authority(Authority),
    /// `*`
    Asterisk,
}

/// authority = host [ ":" port ], userinfo is not accepted
///
/// `offset` is added to every returned range.
fn authority(bytes: &[u8], offset: usize) -> Option<Authority> {
    let host_len = match bytes {
        [b'[', rest @ ..] => {
            let close = rest.iter().position(|b| *b == b']')?;
            let ip = &rest[..close];
            if ip.is_empty() || !ip.iter().all(|b| matches::is_ip_literal(*b)) {
                return None;
            }
            close + 2
        }
        _ => bytes
            .iter()
            .take_while(|b| matches::is_regname(**b))
            .count(),
    };
    if host_len == 0 {
        return None;
    }
    let port = match &bytes[host_len..] {
        [] => None,
        [b':', port @ ..] => Some(parse_port(port)?),
        _ => return None,
    };
    Some(Authority {
        host: offset..offset + host_len,
        port,
    })
}

/// absolute-URI = scheme "://" authority path-abempty [ "?" query ]
fn absolute(bytes: &[u8]) -> Option<Target> {
    let scheme_len = match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() => {
            bytes.iter().take_while(|b| matches::is_scheme(**b)).count()
        }
        _ => return None,
    };
    let start = scheme_len + b"://".len();
    if bytes.get(scheme_len..start)? != b"://" {
        return None;
    }
    let end = bytes[start..]
        .iter()
        .position(|b| matches!(b, b'/' | b'?' | b'#'))
        .map_or(bytes.len(), |len| start + len);
    Some(Target::Absolute {
        authority: authority(&bytes[start..end], start)?,
        path: end..bytes.len(),
    })
}

/// Parse a request target, every byte must already be a valid URI byte.
///
/// request-target = origin-form / absolute-form / authority-form / asterisk-form
pub(crate) fn parse_target(bytes: &[u8]) -> Option<Target> {
    match bytes {
        [] => None,
        [b'/', ..] => Some(Target::Origin),
        b"*" => Some(Target::Asterisk),
        _ => absolute(bytes).or_else(|| authority(bytes, 0).map(Target::Authority)),
    }
}

/// Parse `Referer`, an absolute URI or an absolute path.
///
/// Referer = absolute-URI / partial-URI
pub(crate) fn parse_referer(bytes: &[u8]) -> Option<Target> {
    if !bytes.iter().all(|b| matches::is_uri(*b)) {
        return None;
    }
    match bytes {
        [b'/', ..] => Some(Target::Origin),
        _ => absolute(bytes),
    }
}

/// Parse `Host`, an empty value is allowed.
///
/// Host = uri-host [ ":" port ]
pub(crate) fn parse_host(bytes: &[u8]) -> Option<Option<Authority>> {
    if bytes.is_empty() {
        return Some(None);
    }
    authority(bytes, 0).map(Some)
}
