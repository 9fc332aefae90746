use super::{Elements, delta_seconds, parameter, unquote};
use crate::h1::Reject;

/// Parameters of the `Keep-Alive` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeepAlive {
    /// `timeout=N`, idle seconds before the peer closes the connection.
    pub timeout: Option<u32>,
    /// `max=N`, remaining requests on the connection.
    pub max: Option<u32>,
}

/// Parse one `Keep-Alive` line into `ka`, unknown parameters are ignored.
///
/// Keep-Alive = #keep-alive-param
pub(crate) fn parse_keep_alive(bytes: &[u8], ka: &mut KeepAlive) -> Result<(), Reject> {
    for range in Elements::new(bytes) {
        if range.is_empty() {
            continue;
        }
        let (name, value) = parameter(&bytes[range]).ok_or(Reject::InvalidKeepAlive)?;
        let slot = if name.eq_ignore_ascii_case(b"timeout") {
            &mut ka.timeout
        } else if name.eq_ignore_ascii_case(b"max") {
            &mut ka.max
        } else {
            continue;
        };
        let seconds = value.map(unquote).and_then(delta_seconds);
        *slot = Some(seconds.ok_or(Reject::InvalidKeepAlive)?);
    }
    Ok(())
}
