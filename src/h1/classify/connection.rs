use std::ops::Range;

use super::{Elements, is_token};
use crate::config::MAX_CONNECTION_TOKENS;
use crate::h1::Reject;
use crate::headers::is_protected_name;

/// Connection options collected from every `Connection` line of a message.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConnectionOptions {
    pub(crate) close: bool,
    pub(crate) keep_alive: bool,
    pub(crate) tokens: usize,
}

/// Parse one `Connection` line.
///
/// Returns the ranges of the header names the line declares hop-by-hop, `keep-alive`
/// included. `close` only sets the option.
///
/// Connection = #connection-option
pub(crate) fn parse_connection(
    bytes: &[u8],
    options: &mut ConnectionOptions,
) -> Result<Vec<Range<usize>>, Reject> {
    let mut names = Vec::new();
    for range in Elements::new(bytes) {
        let token = &bytes[range.clone()];
        if !is_token(token) {
            return Err(Reject::InvalidConnection);
        }
        options.tokens += 1;
        if options.tokens > MAX_CONNECTION_TOKENS {
            return Err(Reject::TooManyConnectionTokens);
        }
        if token.eq_ignore_ascii_case(b"close") {
            options.close = true;
        } else {
            if is_protected_name(token) {
                return Err(Reject::ProtectedHopByHop);
            }
            if token.eq_ignore_ascii_case(b"keep-alive") {
                options.keep_alive = true;
            }
            names.push(range);
        }
        if options.close && options.keep_alive {
            return Err(Reject::InvalidConnection);
        }
    }
    Ok(names)
}
