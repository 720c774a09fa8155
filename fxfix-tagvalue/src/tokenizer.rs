/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Delimiter normalization and tag=value tokenizing.
//!
//! FIX messages are single-line by definition, delimited by SOH (0x01). Log
//! extraction commonly substitutes a pipe and injects line breaks, so the
//! tokenizer first normalizes the buffer: CR/LF are stripped, and pipe is
//! mapped to SOH only when no SOH is present — values may legitimately
//! contain `|` (currency pairs are tag-bounded, not character-bounded).

use fxfix_core::error::ParseError;
use fxfix_core::field::RawField;
use memchr::{memchr, memrchr};
use smallvec::SmallVec;

/// SOH (Start of Header) delimiter used in FIX messages.
pub const SOH: u8 = 0x01;

/// Pipe character accepted as a lenient delimiter substitute.
pub const PIPE: u8 = b'|';

/// Equals sign separating tag and value.
pub const EQUALS: u8 = b'=';

/// Token buffer sized for typical FX messages without spilling to the heap.
pub type TokenVec<'a> = SmallVec<[RawField<'a>; 32]>;

/// Normalizes delimiters and strips line-wrapping artifacts.
///
/// A buffer containing SOH is treated as SOH-delimited even if pipes also
/// appear; otherwise, when `allow_pipe` is set, pipes become SOH.
#[must_use]
pub fn normalize(input: &str, allow_pipe: bool) -> String {
    let mut normalized: String = input.chars().filter(|c| *c != '\r' && *c != '\n').collect();
    if memchr(SOH, normalized.as_bytes()).is_none()
        && allow_pipe
        && memchr(PIPE, normalized.as_bytes()).is_some()
    {
        tracing::debug!("no SOH delimiter found, substituting pipe");
        normalized = normalized.replace('|', "\u{1}");
    }
    normalized
}

/// Splits a normalized buffer into an ordered sequence of raw fields.
///
/// Each SOH-bounded segment must contain exactly one `=` and a positive
/// integer tag. The trailing empty segment produced by a terminal delimiter
/// is discarded; in strict-delimiter mode that terminal delimiter is
/// required.
///
/// # Errors
/// Returns [`ParseError::MissingSeparator`] or [`ParseError::InvalidTag`]
/// for malformed segments, and [`ParseError::UnterminatedMessage`] when the
/// strict-delimiter requirement is not met.
pub fn tokenize(normalized: &str, strict_delimiter: bool) -> Result<TokenVec<'_>, ParseError> {
    let bytes = normalized.as_bytes();
    if strict_delimiter && memrchr(SOH, bytes) != Some(bytes.len().saturating_sub(1)) {
        return Err(ParseError::UnterminatedMessage);
    }

    let mut fields = TokenVec::new();
    let mut offset = 0;
    let mut position = 0;

    while offset < bytes.len() {
        let remaining = &bytes[offset..];
        let (segment_len, step) = match memchr(SOH, remaining) {
            Some(soh) => (soh, soh + 1),
            None => (remaining.len(), remaining.len()),
        };
        let segment = &normalized[offset..offset + segment_len];
        offset += step;

        fields.push(split_segment(segment, position)?);
        position += 1;
    }

    Ok(fields)
}

/// Splits one `tag=value` segment.
fn split_segment(segment: &str, position: usize) -> Result<RawField<'_>, ParseError> {
    let bytes = segment.as_bytes();
    let eq = memchr(EQUALS, bytes).ok_or_else(|| ParseError::MissingSeparator {
        segment: segment.to_string(),
        position,
    })?;
    // Exactly one separator per segment.
    if memchr(EQUALS, &bytes[eq + 1..]).is_some() {
        return Err(ParseError::MissingSeparator {
            segment: segment.to_string(),
            position,
        });
    }

    let tag = parse_tag(&bytes[..eq]).ok_or_else(|| ParseError::InvalidTag {
        segment: segment.to_string(),
        position,
    })?;

    Ok(RawField::new(tag, &segment[eq + 1..], position))
}

/// Parses a tag number from ASCII digits.
///
/// # Returns
/// The parsed tag, or `None` when empty, non-numeric, zero, or overlong.
#[inline]
fn parse_tag(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }

    let mut result: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        result = result.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }

    if result == 0 { None } else { Some(result) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag(b"8"), Some(8));
        assert_eq!(parse_tag(b"35"), Some(35));
        assert_eq!(parse_tag(b"12345"), Some(12345));
        assert_eq!(parse_tag(b""), None);
        assert_eq!(parse_tag(b"abc"), None);
        assert_eq!(parse_tag(b"12a"), None);
        assert_eq!(parse_tag(b"0"), None);
    }

    #[test]
    fn test_normalize_keeps_soh_buffer_intact() {
        // SOH wins even when pipes appear inside values.
        let input = "8=FIX.4.4\u{1}55=EUR|USD\u{1}";
        let normalized = normalize(input, true);
        assert_eq!(normalized, input);
    }

    #[test]
    fn test_normalize_substitutes_pipe() {
        let normalized = normalize("8=FIX.4.4|9=5|", true);
        assert_eq!(normalized, "8=FIX.4.4\u{1}9=5\u{1}");
    }

    #[test]
    fn test_normalize_pipe_disabled() {
        let normalized = normalize("8=FIX.4.4|9=5|", false);
        assert_eq!(normalized, "8=FIX.4.4|9=5|");
    }

    #[test]
    fn test_normalize_strips_line_breaks() {
        let normalized = normalize("8=FIX.4.4\u{1}9=\r\n5\u{1}35=0\n\u{1}", true);
        assert_eq!(normalized, "8=FIX.4.4\u{1}9=5\u{1}35=0\u{1}");
    }

    #[test]
    fn test_tokenize_order_and_positions() {
        let fields = tokenize("8=FIX.4.4\u{1}9=5\u{1}35=0\u{1}", false).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].tag, 8);
        assert_eq!(fields[0].value, "FIX.4.4");
        assert_eq!(fields[1].position, 1);
        assert_eq!(fields[2].tag, 35);
    }

    #[test]
    fn test_tokenize_roundtrip_preserves_sequence() {
        let normalized = "8=FIX.4.4\u{1}9=100\u{1}55=EUR/USD\u{1}10=123\u{1}";
        let fields = tokenize(normalized, false).unwrap();
        let rejoined: String = fields
            .iter()
            .map(|f| format!("{}={}\u{1}", f.tag, f.value))
            .collect();
        assert_eq!(rejoined, normalized);
    }

    #[test]
    fn test_tokenize_trailing_segment_without_delimiter() {
        let fields = tokenize("8=FIX.4.4\u{1}10=123", false).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].value, "123");
    }

    #[test]
    fn test_tokenize_strict_delimiter() {
        assert_eq!(
            tokenize("8=FIX.4.4\u{1}10=123", true),
            Err(ParseError::UnterminatedMessage)
        );
        assert!(tokenize("8=FIX.4.4\u{1}10=123\u{1}", true).is_ok());
    }

    #[test]
    fn test_tokenize_missing_separator() {
        let err = tokenize("8=FIX.4.4\u{1}nonsense\u{1}", false).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingSeparator {
                segment: "nonsense".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn test_tokenize_double_separator() {
        let err = tokenize("8=FIX.4.4\u{1}58=a=b\u{1}", false).unwrap_err();
        assert!(matches!(err, ParseError::MissingSeparator { position: 1, .. }));
    }

    #[test]
    fn test_tokenize_non_numeric_tag() {
        let err = tokenize("8=FIX.4.4\u{1}ab=c\u{1}", false).unwrap_err();
        assert!(matches!(err, ParseError::InvalidTag { position: 1, .. }));
    }

    #[test]
    fn test_tokenize_empty_value_allowed() {
        let fields = tokenize("58=\u{1}", false).unwrap();
        assert_eq!(fields[0].value, "");
    }
}
