/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Error types for the FxFix message decoder.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all FxFix operations.

use crate::types::FieldType;
use thiserror::Error;

/// Result type alias using [`FxError`] as the error type.
pub type Result<T> = std::result::Result<T, FxError>;

/// Top-level error type for all FxFix operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FxError {
    /// Error during message parsing or validation.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error coercing a raw value to its declared type (strict typing only).
    #[error("coercion error: {0}")]
    Coercion(#[from] CoercionError),
}

/// Errors that occur while tokenizing and validating a FIX message.
///
/// Only input that cannot be tokenized or structurally bounded aborts a
/// parse; checksum and body-length mismatches are fatal only under the
/// corresponding strict flags and are otherwise recorded as flags on the
/// resulting message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty or contains only whitespace.
    #[error("empty message")]
    EmptyInput,

    /// No tag=value fields could be extracted from the buffer.
    #[error("no valid fields found in message")]
    NoFields,

    /// A segment does not contain exactly one `=` separator.
    #[error("malformed field '{segment}' at position {position}: expected tag=value")]
    MissingSeparator {
        /// The offending raw segment.
        segment: String,
        /// Ordinal position of the segment in the input.
        position: usize,
    },

    /// A segment's tag is not a positive integer.
    #[error("invalid tag in field '{segment}' at position {position}")]
    InvalidTag {
        /// The offending raw segment.
        segment: String,
        /// Ordinal position of the segment in the input.
        position: usize,
    },

    /// The final field is not terminated by a delimiter (strict delimiter mode).
    #[error("message not terminated by a trailing delimiter")]
    UnterminatedMessage,

    /// The first field is not BeginString (tag 8).
    #[error("message must start with BeginString (tag 8)")]
    MissingBeginString,

    /// The last field is not CheckSum (tag 10).
    #[error("message must end with CheckSum (tag 10)")]
    MissingChecksum,

    /// Declared and computed checksums disagree (strict checksum mode).
    #[error("checksum mismatch: expected {expected}, actual {actual}")]
    ChecksumMismatch {
        /// Checksum computed over the message body, zero-padded 3 digits.
        expected: String,
        /// Checksum declared in tag 10.
        actual: String,
    },

    /// Declared and measured body lengths disagree (strict body-length mode).
    #[error("body length mismatch: expected {expected}, actual {actual}")]
    BodyLengthMismatch {
        /// Body length declared in tag 9.
        expected: usize,
        /// Byte count measured between tag 9 and tag 10.
        actual: usize,
    },

    /// A tag occurs more than once among top-level, non-grouped fields
    /// (strict duplicate mode).
    #[error("duplicate top-level tag {tag}")]
    DuplicateTag {
        /// The repeated tag number.
        tag: u32,
    },
}

/// Error converting a raw field value to its declared semantic type.
///
/// Coercion failures never abort a lenient parse; the raw text is retained
/// and a flag is recorded on the message instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot coerce tag {tag} value '{raw_value}' as {field_type}")]
pub struct CoercionError {
    /// The tag whose value failed to convert.
    pub tag: u32,
    /// The raw textual value.
    pub raw_value: String,
    /// The declared semantic type.
    pub field_type: FieldType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::ChecksumMismatch {
            expected: "042".to_string(),
            actual: "123".to_string(),
        };
        assert_eq!(err.to_string(), "checksum mismatch: expected 042, actual 123");
    }

    #[test]
    fn test_fx_error_from_parse() {
        let parse_err = ParseError::EmptyInput;
        let err: FxError = parse_err.into();
        assert!(matches!(err, FxError::Parse(ParseError::EmptyInput)));
    }

    #[test]
    fn test_coercion_error_display() {
        let err = CoercionError {
            tag: 38,
            raw_value: "abc".to_string(),
            field_type: FieldType::Qty,
        };
        assert_eq!(err.to_string(), "cannot coerce tag 38 value 'abc' as QTY");
    }

    #[test]
    fn test_body_length_error_display() {
        let err = ParseError::BodyLengthMismatch {
            expected: 100,
            actual: 97,
        };
        assert_eq!(err.to_string(), "body length mismatch: expected 100, actual 97");
    }
}
