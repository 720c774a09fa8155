/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! The parse entry point and message assembler.
//!
//! [`FixParser`] drives the whole pipeline: normalize → tokenize →
//! structural validation → checksum/body-length verification → dictionary
//! decoration with typed coercion → repeating-group parsing → message
//! assembly. The dictionary and group registry are immutable and shared, so
//! one parser can serve any number of concurrent callers.

use crate::config::ParserConfig;
use crate::groups::GroupParser;
use crate::{tokenizer, validator};
use bytes::Bytes;
use fxfix_core::error::{ParseError, Result};
use fxfix_core::field::{Field, RawField};
use fxfix_core::message::{FixMessage, MessageNode, ParseFlag};
use fxfix_core::value::{FieldValue, coerce};
use fxfix_dictionary::groups::GroupRegistry;
use fxfix_dictionary::schema::TagDictionary;
use std::collections::HashMap;
use std::sync::Arc;

/// Parser for FIX 4.4-style tag=value messages.
#[derive(Debug, Clone)]
pub struct FixParser {
    config: ParserConfig,
    dictionary: Arc<TagDictionary>,
    groups: Arc<GroupRegistry>,
}

impl Default for FixParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl FixParser {
    /// Creates a parser with the given configuration and the standard
    /// dictionary and group registry.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            dictionary: Arc::new(TagDictionary::standard()),
            groups: Arc::new(GroupRegistry::standard()),
        }
    }

    /// Replaces the tag dictionary.
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Arc<TagDictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Replaces the group schema registry.
    #[must_use]
    pub fn with_groups(mut self, groups: Arc<GroupRegistry>) -> Self {
        self.groups = groups;
        self
    }

    /// Returns the parser configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the tag dictionary.
    #[must_use]
    pub fn dictionary(&self) -> &TagDictionary {
        &self.dictionary
    }

    /// Parses a raw message into a [`FixMessage`].
    ///
    /// # Errors
    /// Fails on input that cannot be tokenized or structurally bounded, and
    /// on checksum/body-length/typing/duplicate violations when the
    /// corresponding strict flag is set. All other mismatches degrade to
    /// flags on the returned message.
    pub fn parse(&self, input: &str) -> Result<FixMessage> {
        if input.trim().is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let normalized = tokenizer::normalize(input, self.config.allow_pipe_delimiter);
        let raw_fields = tokenizer::tokenize(&normalized, self.config.strict_delimiter)?;
        if raw_fields.is_empty() {
            return Err(ParseError::NoFields.into());
        }

        validator::validate_structure(&raw_fields)?;

        let mut flags = Vec::new();
        self.verify_checksum(&normalized, &raw_fields, &mut flags)?;
        self.verify_body_length(&normalized, &raw_fields, &mut flags)?;

        let mut fields = Vec::with_capacity(raw_fields.len());
        for raw in &raw_fields {
            fields.push(self.decorate(raw, &mut flags)?);
        }

        let nodes = GroupParser::new(&self.groups).parse(fields, &mut flags);
        self.check_duplicates(&nodes, &mut flags)?;

        tracing::debug!(
            fields = raw_fields.len(),
            flags = flags.len(),
            "message parsed"
        );
        Ok(FixMessage::new(
            Bytes::copy_from_slice(input.as_bytes()),
            nodes,
            flags,
        ))
    }

    /// Parses a raw byte buffer.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected: log
    /// captures routinely carry stray bytes, and FIX content is ASCII.
    ///
    /// # Errors
    /// Same failure modes as [`FixParser::parse`].
    pub fn parse_bytes(&self, input: &[u8]) -> Result<FixMessage> {
        self.parse(&String::from_utf8_lossy(input))
    }

    fn verify_checksum(
        &self,
        normalized: &str,
        raw_fields: &[RawField<'_>],
        flags: &mut Vec<ParseFlag>,
    ) -> Result<()> {
        let declared = raw_fields
            .last()
            .map(|f| f.value)
            .unwrap_or_default();
        if let Some((expected, actual)) = validator::verify_checksum(normalized.as_bytes(), declared)
        {
            if self.config.strict_checksum {
                return Err(ParseError::ChecksumMismatch { expected, actual }.into());
            }
            flags.push(ParseFlag::ChecksumMismatch { expected, actual });
        }
        Ok(())
    }

    fn verify_body_length(
        &self,
        normalized: &str,
        raw_fields: &[RawField<'_>],
        flags: &mut Vec<ParseFlag>,
    ) -> Result<()> {
        // Without a numeric tag 9 there is nothing to compare against.
        let Some(declared) = raw_fields
            .iter()
            .find(|f| f.tag == 9)
            .and_then(|f| f.value.trim().parse::<usize>().ok())
        else {
            return Ok(());
        };
        if let Some((expected, actual)) =
            validator::verify_body_length(normalized.as_bytes(), declared)
        {
            if self.config.strict_body_length {
                return Err(ParseError::BodyLengthMismatch { expected, actual }.into());
            }
            flags.push(ParseFlag::BodyLengthMismatch { expected, actual });
        }
        Ok(())
    }

    /// Decorates a raw token with dictionary metadata and a typed value.
    fn decorate(&self, raw: &RawField<'_>, flags: &mut Vec<ParseFlag>) -> Result<Field> {
        let mut field = Field::undecorated(raw.tag, raw.value, raw.position);
        let Some(def) = self.dictionary.resolve(raw.tag) else {
            return Ok(field);
        };

        field.name = def.name.clone();
        field.field_type = def.field_type;
        field.value_description = def.value_description(raw.value).map(str::to_string);
        field.typed_value = match coerce(raw.tag, raw.value, def.field_type) {
            Ok(value) => value,
            Err(err) => {
                if self.config.strict_typing {
                    return Err(err.into());
                }
                tracing::debug!(
                    tag = raw.tag,
                    value = raw.value,
                    field_type = %err.field_type,
                    "coercion failed, keeping raw text"
                );
                flags.push(ParseFlag::CoercionFailed {
                    tag: err.tag,
                    raw_value: err.raw_value,
                    field_type: err.field_type,
                });
                FieldValue::Text(raw.value.to_string())
            }
        };
        Ok(field)
    }

    /// Checks tag uniqueness among top-level, non-grouped fields.
    fn check_duplicates(&self, nodes: &[MessageNode], flags: &mut Vec<ParseFlag>) -> Result<()> {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for field in nodes.iter().filter_map(MessageNode::as_field) {
            *counts.entry(field.tag).or_insert(0) += 1;
        }
        let mut duplicates: Vec<u32> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(tag, _)| tag)
            .collect();
        duplicates.sort_unstable();

        for tag in duplicates {
            if self.config.strict_duplicate_tags {
                return Err(ParseError::DuplicateTag { tag }.into());
            }
            tracing::warn!(tag, "duplicate top-level tag");
            flags.push(ParseFlag::DuplicateTag { tag });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum;
    use fxfix_core::error::FxError;
    use rust_decimal::Decimal;

    /// Builds a syntactically complete message with a correct checksum.
    fn with_checksum(body: &str) -> String {
        let value = checksum::format(checksum::calculate(body.as_bytes()));
        format!("{}10={}\u{1}", body, value)
    }

    fn lenient() -> FixParser {
        FixParser::new(ParserConfig::lenient())
    }

    const SPOT_PIPE: &str =
        "8=FIX.4.4|9=100|35=8|49=FXGO|56=CLIENT|55=EUR/USD|54=1|32=1000000|31=1.0850|10=123|";

    #[test]
    fn test_parse_spot_message_pipe() {
        let message = lenient().parse(SPOT_PIPE).unwrap();
        assert_eq!(message.begin_string(), Some("FIX.4.4"));
        assert_eq!(message.msg_type(), Some("8"));
        assert_eq!(message.sender_comp_id(), Some("FXGO"));
        assert_eq!(message.get_value(55), Some("EUR/USD"));

        // Typed coercion and enum resolution.
        let side = message.get_field(54).unwrap();
        assert_eq!(side.value_description.as_deref(), Some("Buy"));
        let qty = message.get_field(32).unwrap();
        assert_eq!(qty.typed_value.as_decimal(), Some(Decimal::from(1_000_000)));
    }

    #[test]
    fn test_soh_and_pipe_produce_same_fields() {
        let soh = SPOT_PIPE.replace('|', "\u{1}");
        let from_pipe = lenient().parse(SPOT_PIPE).unwrap();
        let from_soh = lenient().parse(&soh).unwrap();
        assert_eq!(from_pipe.field_count(), from_soh.field_count());
        assert_eq!(from_pipe.get_value(55), from_soh.get_value(55));
        assert_eq!(from_pipe.checksum(), from_soh.checksum());
    }

    #[test]
    fn test_strict_checksum_fails_fast() {
        let parser = FixParser::default();
        let err = parser.parse(SPOT_PIPE).unwrap_err();
        match err {
            FxError::Parse(ParseError::ChecksumMismatch { expected, actual }) => {
                assert_eq!(actual, "123");
                assert_ne!(expected, actual);
            }
            other => panic!("expected checksum mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_checksum_passes_strict() {
        let body = "8=FIX.4.4\u{1}9=5\u{1}35=0\u{1}";
        let message = FixParser::default().parse(&with_checksum(body)).unwrap();
        assert!(message.flags().is_empty());
    }

    #[test]
    fn test_lenient_checksum_recorded_as_flag() {
        let message = lenient().parse(SPOT_PIPE).unwrap();
        assert!(
            message
                .flags()
                .iter()
                .any(|f| matches!(f, ParseFlag::ChecksumMismatch { actual, .. } if actual == "123"))
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            lenient().parse("").unwrap_err(),
            FxError::Parse(ParseError::EmptyInput)
        ));
        assert!(matches!(
            lenient().parse("   \n\t  ").unwrap_err(),
            FxError::Parse(ParseError::EmptyInput)
        ));
    }

    #[test]
    fn test_missing_begin_string_always_fatal() {
        let input = "9=5\u{1}35=0\u{1}10=123\u{1}";
        assert!(matches!(
            lenient().parse(input).unwrap_err(),
            FxError::Parse(ParseError::MissingBeginString)
        ));
    }

    #[test]
    fn test_missing_checksum_always_fatal() {
        let input = "8=FIX.4.4\u{1}9=5\u{1}35=0\u{1}";
        assert!(matches!(
            lenient().parse(input).unwrap_err(),
            FxError::Parse(ParseError::MissingChecksum)
        ));
    }

    #[test]
    fn test_body_length_strict() {
        let body = "8=FIX.4.4\u{1}9=99\u{1}35=0\u{1}";
        let input = with_checksum(body);
        let parser = FixParser::new(
            ParserConfig::lenient().with_strict_body_length(true),
        );
        assert!(matches!(
            parser.parse(&input).unwrap_err(),
            FxError::Parse(ParseError::BodyLengthMismatch { expected: 99, .. })
        ));

        // Lenient mode records the mismatch instead.
        let message = lenient().parse(&input).unwrap();
        assert!(
            message
                .flags()
                .iter()
                .any(|f| matches!(f, ParseFlag::BodyLengthMismatch { expected: 99, .. }))
        );
    }

    #[test]
    fn test_coercion_failure_keeps_raw_text() {
        let body = "8=FIX.4.4\u{1}9=5\u{1}35=8\u{1}32=abc\u{1}";
        let message = lenient().parse(&with_checksum(body)).unwrap();
        let qty = message.get_field(32).unwrap();
        assert_eq!(qty.typed_value, FieldValue::Text("abc".to_string()));
        assert!(
            message
                .flags()
                .iter()
                .any(|f| matches!(f, ParseFlag::CoercionFailed { tag: 32, .. }))
        );
    }

    #[test]
    fn test_strict_typing_aborts() {
        let body = "8=FIX.4.4\u{1}9=5\u{1}35=8\u{1}32=abc\u{1}";
        let parser = FixParser::new(ParserConfig::lenient().with_strict_typing(true));
        assert!(matches!(
            parser.parse(&with_checksum(body)).unwrap_err(),
            FxError::Coercion(_)
        ));
    }

    #[test]
    fn test_unknown_tag_does_not_fail() {
        let body = "8=FIX.4.4\u{1}9=5\u{1}35=8\u{1}7777=X\u{1}";
        let message = lenient().parse(&with_checksum(body)).unwrap();
        let field = message.get_field(7777).unwrap();
        assert!(field.is_unknown());
        assert_eq!(field.name, "Unknown");
    }

    #[test]
    fn test_swap_style_flat_fields_no_group_required() {
        // Two settlement dates and a far-leg quantity as plain flat fields.
        let body = "8=FIX.4.4\u{1}9=50\u{1}35=8\u{1}64=20240117\u{1}193=20240415\u{1}192=500000\u{1}";
        let message = lenient().parse(&with_checksum(body)).unwrap();
        assert_eq!(message.get_value(64), Some("20240117"));
        assert_eq!(message.get_value(193), Some("20240415"));
        assert_eq!(message.get_value(192), Some("500000"));
        assert!(message.groups().next().is_none());
    }

    #[test]
    fn test_duplicate_top_level_tags() {
        let body = "8=FIX.4.4\u{1}9=5\u{1}35=8\u{1}58=a\u{1}58=b\u{1}";
        let input = with_checksum(body);

        let message = lenient().parse(&input).unwrap();
        assert!(
            message
                .flags()
                .iter()
                .any(|f| matches!(f, ParseFlag::DuplicateTag { tag: 58 }))
        );

        let strict = FixParser::new(ParserConfig::lenient().with_strict_duplicate_tags(true));
        assert!(matches!(
            strict.parse(&input).unwrap_err(),
            FxError::Parse(ParseError::DuplicateTag { tag: 58 })
        ));
    }

    #[test]
    fn test_repeated_tags_inside_groups_are_not_duplicates() {
        let body = "8=FIX.4.4\u{1}9=40\u{1}35=W\u{1}268=2\u{1}269=0\u{1}270=1.0850\u{1}269=1\u{1}270=1.0852\u{1}";
        let strict = FixParser::new(ParserConfig::lenient().with_strict_duplicate_tags(true));
        let message = strict.parse(&with_checksum(body)).unwrap();
        let group = message.group(268).unwrap();
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_group_parse_end_to_end() {
        let body = "8=FIX.4.4\u{1}9=60\u{1}35=W\u{1}55=EUR/USD\u{1}268=2\u{1}269=0\u{1}270=1.0850\u{1}269=1\u{1}270=1.0852\u{1}";
        let message = lenient().parse(&with_checksum(body)).unwrap();
        let group = message.group(268).unwrap();
        assert_eq!(group.name, "Market Data Entries");
        assert_eq!(group.declared_count(), 2);
        assert_eq!(group.len(), 2);

        // The flat view still sees every field in order.
        let tags: Vec<u32> = message.fields().map(|f| f.tag).collect();
        assert_eq!(tags, vec![8, 9, 35, 55, 268, 269, 270, 269, 270, 10]);
    }

    #[test]
    fn test_parse_bytes() {
        let body = "8=FIX.4.4\u{1}9=5\u{1}35=0\u{1}";
        let input = with_checksum(body);
        let message = FixParser::default().parse_bytes(input.as_bytes()).unwrap();
        assert_eq!(message.msg_type(), Some("0"));
    }

    #[test]
    fn test_concurrent_parses_share_one_parser() {
        let parser = std::sync::Arc::new(lenient());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let parser = std::sync::Arc::clone(&parser);
                std::thread::spawn(move || parser.parse(SPOT_PIPE).map(|m| m.field_count()))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 10);
        }
    }
}
