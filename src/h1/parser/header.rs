use super::Message;
use crate::h1::Reject;
use crate::headers::{HeaderId, HeaderLine};
use crate::log::trace;
use crate::matches;
use crate::strview::StrView;

/// Split a header line into name length and value start.
///
/// field-line = field-name ":" OWS field-value OWS
fn split_header(bytes: &[u8]) -> Result<(usize, usize), Reject> {
    if let Some(b' ' | b'\t') = bytes.first() {
        return Err(Reject::LineFolding);
    }

    let name_len = bytes.iter().take_while(|b| matches::is_token(**b)).count();
    if name_len == 0 || bytes.get(name_len) != Some(&b':') {
        return Err(Reject::InvalidHeaderName);
    }

    let value = &bytes[name_len + 1..];
    if !value.iter().all(|b| matches::is_field_value(*b)) {
        return Err(Reject::InvalidHeaderValue);
    }
    let ows = value.iter().take_while(|b| matches::is_ows(**b)).count();

    Ok((name_len, name_len + 1 + ows))
}

/// Validate, classify and store one header or trailer line.
pub(super) fn header_line<M: Message>(
    msg: &mut M,
    line: StrView,
    eol: u8,
    trailer: bool,
) -> Result<(), Reject> {
    let head = msg.head_mut();
    if head.headers.lines() >= head.limits.max_headers() {
        return Err(Reject::TooManyHeaders);
    }

    let mut scratch = std::mem::take(&mut head.scratch);
    let result = classify_line(msg, line, eol, trailer, &mut scratch);
    msg.head_mut().scratch = scratch;
    result
}

fn classify_line<M: Message>(
    msg: &mut M,
    line: StrView,
    eol: u8,
    trailer: bool,
    scratch: &mut Vec<u8>,
) -> Result<(), Reject> {
    let bytes = line.contiguous(scratch);
    let (name_len, value_start) = split_header(bytes)?;
    let id = HeaderId::lookup(&bytes[..name_len], msg.head().headers.direction());
    let line =
        HeaderLine::new(line, name_len, value_start, eol).ok_or(Reject::LineTooLong)?;

    let Some(id) = id else {
        trace!("raw header {:?}", line.name());
        msg.head_mut().headers.push_raw(line);
        return Ok(());
    };

    if trailer
        && matches!(
            id,
            HeaderId::ContentLength | HeaderId::TransferEncoding | HeaderId::Host
        )
    {
        return Err(Reject::ForbiddenTrailer);
    }
    if !id.is_repeatable() && msg.head().headers.contains(id) {
        return Err(Reject::DuplicateHeader);
    }

    let value = line.trimmed_value();
    let bytes = value.contiguous(scratch);
    if !msg.head_mut().classify(id, &value, bytes)? {
        msg.classify(id, &value, bytes)?;
    }

    msg.head_mut().headers.push_known(id, line);
    Ok(())
}
