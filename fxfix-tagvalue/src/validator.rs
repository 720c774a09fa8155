/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Structural, checksum, and body-length validation.
//!
//! The structural check (BeginString first, CheckSum last) always runs; the
//! numeric checks are invoked by the parser according to its strictness
//! configuration and report mismatches for it to either raise or flag.
//!
//! Byte ranges are measured over the normalized (SOH-delimited) buffer:
//! - checksum covers everything before the final `10=` field, including the
//!   delimiter that precedes it;
//! - body length covers everything after the tag-9 field's delimiter up to
//!   the start of the `10=` field.

use crate::checksum;
use crate::tokenizer::SOH;
use fxfix_core::error::ParseError;
use fxfix_core::field::RawField;
use memchr::memchr;

/// Validates that the message is structurally bounded: the first field must
/// be BeginString (tag 8) and the last field CheckSum (tag 10).
///
/// # Errors
/// Returns [`ParseError::MissingBeginString`] or
/// [`ParseError::MissingChecksum`] naming the missing boundary.
pub fn validate_structure(fields: &[RawField<'_>]) -> Result<(), ParseError> {
    match fields.first() {
        Some(first) if first.tag == 8 => {}
        _ => return Err(ParseError::MissingBeginString),
    }
    match fields.last() {
        Some(last) if last.tag == 10 => {}
        _ => return Err(ParseError::MissingChecksum),
    }
    Ok(())
}

/// Finds the byte offset of the final `10=` field within the normalized
/// buffer. The match must start the buffer or follow a delimiter.
#[must_use]
pub fn checksum_offset(normalized: &[u8]) -> Option<usize> {
    let mut found = None;
    let mut offset = 0;
    while offset + 3 <= normalized.len() {
        match memchr(b'1', &normalized[offset..]) {
            Some(step) => {
                let at = offset + step;
                if normalized[at..].starts_with(b"10=") && (at == 0 || normalized[at - 1] == SOH) {
                    found = Some(at);
                }
                offset = at + 1;
            }
            None => break,
        }
    }
    found
}

/// Verifies the declared checksum against the computed one.
///
/// # Returns
/// `None` when they match (or the trailer cannot be located);
/// `Some((expected, actual))` on mismatch, where `expected` is the computed
/// 3-digit value and `actual` the declared one.
#[must_use]
pub fn verify_checksum(normalized: &[u8], declared: &str) -> Option<(String, String)> {
    let offset = checksum_offset(normalized)?;
    let expected = checksum::format(checksum::calculate(&normalized[..offset]));

    // A declared value that is not 3 ASCII digits can never match.
    let matches = checksum::parse(declared).is_some_and(|d| checksum::format(d) == expected);
    if matches {
        None
    } else {
        Some((expected, declared.to_string()))
    }
}

/// Finds the byte offset just past the tag-9 field's delimiter.
fn body_offset(normalized: &[u8]) -> Option<usize> {
    let mut offset = 0;
    loop {
        let step = memchr(b'9', &normalized[offset..])?;
        let at = offset + step;
        if normalized[at..].starts_with(b"9=") && (at == 0 || normalized[at - 1] == SOH) {
            let delim = memchr(SOH, &normalized[at..])?;
            return Some(at + delim + 1);
        }
        offset = at + 1;
    }
}

/// Verifies the declared body length against the measured byte count.
///
/// # Returns
/// `None` when they match (or the byte range cannot be located);
/// `Some((expected, actual))` on mismatch, where `expected` is the declared
/// length and `actual` the measured one.
#[must_use]
pub fn verify_body_length(normalized: &[u8], declared: usize) -> Option<(usize, usize)> {
    let start = body_offset(normalized)?;
    let end = checksum_offset(normalized)?;
    let actual = end.checked_sub(start)?;
    if actual == declared {
        None
    } else {
        Some((declared, actual))
    }
}
