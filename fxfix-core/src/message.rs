/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Message and repeating-group models.
//!
//! This module provides:
//! - [`FixMessage`]: An immutable decoded message owning its fields
//! - [`GroupInstance`] / [`GroupEntry`]: The repeating-group tree
//! - [`MessageNode`]: A field or group at one level of the tree
//! - [`ParseFlag`]: Non-fatal observations recorded during a lenient parse
//!
//! A message is assembled once and never mutated; venue and product
//! annotations produce derived copies so one source message can back several
//! independent interpretations.

use crate::field::Field;
use crate::types::FieldType;
use crate::value::FieldValue;
use bytes::Bytes;
use serde::Serialize;
use std::fmt;

/// Standard FIX 4.4 administrative header tags. The message header is the
/// run of leading fields whose tags are all in this set.
pub const HEADER_TAGS: [u32; 16] = [
    8, 9, 34, 35, 43, 49, 50, 52, 56, 57, 97, 115, 116, 122, 128, 129,
];

/// Non-fatal observation recorded on a message during a lenient parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFlag {
    /// Declared and computed checksums disagree.
    ChecksumMismatch {
        /// Checksum computed over the message body.
        expected: String,
        /// Checksum declared in tag 10.
        actual: String,
    },
    /// Declared and measured body lengths disagree.
    BodyLengthMismatch {
        /// Body length declared in tag 9.
        expected: usize,
        /// Byte count measured between tag 9 and tag 10.
        actual: usize,
    },
    /// A raw value could not be coerced to its declared type.
    CoercionFailed {
        /// The field tag.
        tag: u32,
        /// The raw value that failed to convert.
        raw_value: String,
        /// The declared semantic type.
        field_type: FieldType,
    },
    /// A group's declared entry count differs from the entries found.
    GroupCountMismatch {
        /// The group's count tag.
        count_tag: u32,
        /// Entries declared by the count field.
        declared: usize,
        /// Entries actually captured.
        actual: usize,
    },
    /// A field appeared outside the group schema that expected it and was
    /// reattached to the nearest enclosing scope.
    ReattachedField {
        /// The field tag.
        tag: u32,
        /// Ordinal position of the field in the source buffer.
        position: usize,
    },
    /// A tag occurred more than once among top-level, non-grouped fields.
    DuplicateTag {
        /// The repeated tag number.
        tag: u32,
    },
}

impl fmt::Display for ParseFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChecksumMismatch { expected, actual } => {
                write!(f, "checksum mismatch: expected {}, actual {}", expected, actual)
            }
            Self::BodyLengthMismatch { expected, actual } => {
                write!(f, "body length mismatch: expected {}, actual {}", expected, actual)
            }
            Self::CoercionFailed {
                tag,
                raw_value,
                field_type,
            } => write!(f, "cannot coerce tag {} value '{}' as {}", tag, raw_value, field_type),
            Self::GroupCountMismatch {
                count_tag,
                declared,
                actual,
            } => write!(
                f,
                "group {} declared {} entries, found {}",
                count_tag, declared, actual
            ),
            Self::ReattachedField { tag, position } => {
                write!(f, "tag {} at position {} reattached outside its group", tag, position)
            }
            Self::DuplicateTag { tag } => write!(f, "duplicate top-level tag {}", tag),
        }
    }
}

/// A field or a repeating group at one level of the message tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageNode {
    /// A plain field.
    Field(Field),
    /// A repeating group instance.
    Group(GroupInstance),
}

impl MessageNode {
    /// Returns the contained field, if this node is a plain field.
    #[must_use]
    pub const fn as_field(&self) -> Option<&Field> {
        match self {
            Self::Field(field) => Some(field),
            Self::Group(_) => None,
        }
    }

    /// Returns the contained group, if this node is a group.
    #[must_use]
    pub const fn as_group(&self) -> Option<&GroupInstance> {
        match self {
            Self::Group(group) => Some(group),
            Self::Field(_) => None,
        }
    }
}

/// A single repetition within a repeating group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupEntry {
    /// 1-based index of this entry within the group.
    pub index: usize,
    /// Fields and nested groups belonging to this entry, in wire order.
    pub nodes: Vec<MessageNode>,
}

impl GroupEntry {
    /// Creates an empty entry with the given 1-based index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            nodes: Vec::new(),
        }
    }

    /// Returns an iterator over the entry's direct fields (not nested groups).
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.nodes.iter().filter_map(MessageNode::as_field)
    }

    /// Gets the first direct field with the given tag.
    #[must_use]
    pub fn field(&self, tag: u32) -> Option<&Field> {
        self.fields().find(|f| f.tag == tag)
    }

    /// Returns an iterator over the entry's nested group instances.
    pub fn groups(&self) -> impl Iterator<Item = &GroupInstance> {
        self.nodes.iter().filter_map(MessageNode::as_group)
    }
}

/// A decoded repeating group: its count field and captured entries.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupInstance {
    /// Human-readable group name from the schema registry.
    pub name: String,
    /// The count field (NUMINGROUP) that announced the group.
    pub count_field: Field,
    /// Captured entries, in wire order.
    pub entries: Vec<GroupEntry>,
}

impl GroupInstance {
    /// Creates a group instance with no entries.
    #[must_use]
    pub fn new(name: impl Into<String>, count_field: Field) -> Self {
        Self {
            name: name.into(),
            count_field,
            entries: Vec::new(),
        }
    }

    /// Returns the tag carrying the repetition count.
    #[inline]
    #[must_use]
    pub fn count_tag(&self) -> u32 {
        self.count_field.tag
    }

    /// Returns the declared entry count, or 0 when non-numeric.
    #[must_use]
    pub fn declared_count(&self) -> usize {
        self.count_field.as_count().unwrap_or(0)
    }

    /// Returns the number of entries actually captured.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries were captured.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets an entry by 0-based offset.
    #[must_use]
    pub fn entry(&self, offset: usize) -> Option<&GroupEntry> {
        self.entries.get(offset)
    }
}

/// In-order iterator over every field in a message tree, group members
/// included. A group yields its count field first, then each entry's
/// fields in wire order.
pub struct FieldIter<'a> {
    stack: Vec<std::slice::Iter<'a, MessageNode>>,
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = &'a Field;

    fn next(&mut self) -> Option<&'a Field> {
        loop {
            // The yielded reference borrows the message tree, not the
            // iterator, so the stack stays free to mutate below.
            let node = self.stack.last_mut()?.next();
            match node {
                Some(MessageNode::Field(field)) => return Some(field),
                Some(MessageNode::Group(group)) => {
                    // Reverse push so the first entry is consumed first; the
                    // enclosing level resumes once all entries are drained.
                    for entry in group.entries.iter().rev() {
                        self.stack.push(entry.nodes.iter());
                    }
                    return Some(&group.count_field);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// A parsed, immutable FIX message.
#[derive(Debug, Clone, PartialEq)]
pub struct FixMessage {
    /// The original input buffer, exactly as received.
    raw: Bytes,
    /// Top-level fields and group instances, in wire order.
    nodes: Vec<MessageNode>,
    /// Non-fatal observations recorded during the parse.
    flags: Vec<ParseFlag>,
    /// Venue annotation, when detection ran.
    venue: Option<String>,
    /// Product-type annotation, when classification ran.
    product_type: Option<String>,
}

impl FixMessage {
    /// Creates a message from assembled parts.
    #[must_use]
    pub fn new(raw: Bytes, nodes: Vec<MessageNode>, flags: Vec<ParseFlag>) -> Self {
        Self {
            raw,
            nodes,
            flags,
            venue: None,
            product_type: None,
        }
    }

    /// Returns the original input buffer.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Returns the top-level nodes in wire order.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[MessageNode] {
        &self.nodes
    }

    /// Returns the flags recorded during the parse.
    #[inline]
    #[must_use]
    pub fn flags(&self) -> &[ParseFlag] {
        &self.flags
    }

    /// Returns the venue annotation, if any.
    #[must_use]
    pub fn venue(&self) -> Option<&str> {
        self.venue.as_deref()
    }

    /// Returns the product-type annotation, if any.
    #[must_use]
    pub fn product_type(&self) -> Option<&str> {
        self.product_type.as_deref()
    }

    /// Returns a derived copy annotated with the given venue.
    #[must_use]
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    /// Returns a derived copy annotated with the given product type.
    #[must_use]
    pub fn with_product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    /// Returns an in-order iterator over every field, group members included.
    #[must_use]
    pub fn fields(&self) -> FieldIter<'_> {
        FieldIter {
            stack: vec![self.nodes.iter()],
        }
    }

    /// Returns the number of fields in the message, group members included.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    /// Gets the first field with the given tag, searching in wire order
    /// across all scopes.
    #[must_use]
    pub fn get_field(&self, tag: u32) -> Option<&Field> {
        self.fields().find(|f| f.tag == tag)
    }

    /// Gets every field with the given tag, in wire order.
    #[must_use]
    pub fn get_fields(&self, tag: u32) -> Vec<&Field> {
        self.fields().filter(|f| f.tag == tag).collect()
    }

    /// Gets the raw value of the first field with the given tag.
    #[must_use]
    pub fn get_value(&self, tag: u32) -> Option<&str> {
        self.get_field(tag).map(|f| f.raw_value.as_str())
    }

    /// Gets the typed value of the first field with the given tag.
    #[must_use]
    pub fn get_typed(&self, tag: u32) -> Option<&FieldValue> {
        self.get_field(tag).map(|f| &f.typed_value)
    }

    /// Gets the top-level group instance announced by the given count tag.
    #[must_use]
    pub fn group(&self, count_tag: u32) -> Option<&GroupInstance> {
        self.nodes
            .iter()
            .filter_map(MessageNode::as_group)
            .find(|g| g.count_tag() == count_tag)
    }

    /// Returns an iterator over the top-level group instances.
    pub fn groups(&self) -> impl Iterator<Item = &GroupInstance> {
        self.nodes.iter().filter_map(MessageNode::as_group)
    }

    /// Returns the leading run of standard header fields.
    #[must_use]
    pub fn header(&self) -> Vec<&Field> {
        let mut header = Vec::new();
        for node in &self.nodes {
            match node.as_field() {
                Some(field) if HEADER_TAGS.contains(&field.tag) => header.push(field),
                _ => break,
            }
        }
        header
    }

    /// Returns the trailer fields (the checksum field).
    #[must_use]
    pub fn trailer(&self) -> Vec<&Field> {
        self.nodes
            .iter()
            .filter_map(MessageNode::as_field)
            .filter(|f| f.tag == 10)
            .collect()
    }

    /// Gets the BeginString (tag 8) value.
    #[must_use]
    pub fn begin_string(&self) -> Option<&str> {
        self.get_value(8)
    }

    /// Gets the BodyLength (tag 9) value as an integer.
    #[must_use]
    pub fn body_length(&self) -> Option<usize> {
        self.get_field(9).and_then(Field::as_count)
    }

    /// Gets the MsgType (tag 35) value.
    #[must_use]
    pub fn msg_type(&self) -> Option<&str> {
        self.get_value(35)
    }

    /// Gets the SenderCompID (tag 49) value.
    #[must_use]
    pub fn sender_comp_id(&self) -> Option<&str> {
        self.get_value(49)
    }

    /// Gets the TargetCompID (tag 56) value.
    #[must_use]
    pub fn target_comp_id(&self) -> Option<&str> {
        self.get_value(56)
    }

    /// Gets the CheckSum (tag 10) value.
    #[must_use]
    pub fn checksum(&self) -> Option<&str> {
        self.get_value(10)
    }

    /// Exports the message as a serializable nested document.
    #[must_use]
    pub fn to_document(&self) -> MessageDocument {
        MessageDocument {
            begin_string: self.begin_string().map(str::to_string),
            msg_type: self.msg_type().map(str::to_string),
            sender_comp_id: self.sender_comp_id().map(str::to_string),
            target_comp_id: self.target_comp_id().map(str::to_string),
            venue: self.venue.clone(),
            product_type: self.product_type.clone(),
            fields: self.nodes.iter().map(node_document).collect(),
            flags: self.flags.iter().map(ToString::to_string).collect(),
        }
    }

    /// Renders the message as multi-line text, one line per field, with
    /// groups as indented entry blocks.
    #[must_use]
    pub fn to_human_readable(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!(
            "FIX Message: {}",
            self.begin_string().unwrap_or("Unknown")
        ));
        lines.push(format!(
            "Message Type: {}",
            self.msg_type().unwrap_or("Unknown")
        ));
        if let Some(venue) = &self.venue {
            lines.push(format!("Venue: {}", venue));
        }
        if let Some(product) = &self.product_type {
            lines.push(format!("Product Type: {}", product));
        }
        lines.push("-".repeat(50));
        render_nodes(&self.nodes, 0, &mut lines);
        lines.join("\n")
    }
}

fn render_nodes(nodes: &[MessageNode], depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            MessageNode::Field(field) => lines.push(format!("{}{}", indent, field)),
            MessageNode::Group(group) => {
                lines.push(format!(
                    "{}{} ({}): {} - {}",
                    indent,
                    group.count_field.name,
                    group.count_tag(),
                    group.declared_count(),
                    group.name
                ));
                for entry in &group.entries {
                    lines.push(format!("{}  [Entry {}]", indent, entry.index));
                    render_nodes(&entry.nodes, depth + 2, lines);
                }
            }
        }
    }
}

fn node_document(node: &MessageNode) -> NodeDocument {
    match node {
        MessageNode::Field(field) => NodeDocument::Field(field_document(field)),
        MessageNode::Group(group) => NodeDocument::Group(GroupDocument {
            name: group.name.clone(),
            count_tag: group.count_tag(),
            count: group.declared_count(),
            entries: group
                .entries
                .iter()
                .map(|e| e.nodes.iter().map(node_document).collect())
                .collect(),
        }),
    }
}

fn field_document(field: &Field) -> FieldDocument {
    FieldDocument {
        tag: field.tag,
        name: field.name.clone(),
        value: field.raw_value.clone(),
        typed_value: field.typed_value.clone(),
        description: field.value_description.clone(),
    }
}

/// Serializable view of a single field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDocument {
    /// The field tag number.
    pub tag: u32,
    /// Resolved field name.
    pub name: String,
    /// Raw value text.
    pub value: String,
    /// Coerced typed value.
    pub typed_value: FieldValue,
    /// Enumerated-value description, when defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Serializable view of a repeating group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupDocument {
    /// Group name.
    pub name: String,
    /// The group's count tag.
    pub count_tag: u32,
    /// Declared entry count.
    pub count: usize,
    /// Entries, each an ordered list of nodes.
    pub entries: Vec<Vec<NodeDocument>>,
}

/// Serializable view of a field or group node.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum NodeDocument {
    /// A plain field.
    Field(FieldDocument),
    /// A repeating group.
    Group(GroupDocument),
}

/// Serializable view of a whole message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageDocument {
    /// BeginString (tag 8).
    pub begin_string: Option<String>,
    /// MsgType (tag 35).
    pub msg_type: Option<String>,
    /// SenderCompID (tag 49).
    pub sender_comp_id: Option<String>,
    /// TargetCompID (tag 56).
    pub target_comp_id: Option<String>,
    /// Venue annotation.
    pub venue: Option<String>,
    /// Product-type annotation.
    pub product_type: Option<String>,
    /// Top-level fields and groups.
    pub fields: Vec<NodeDocument>,
    /// Rendered parse flags.
    pub flags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_field(tag: u32, name: &str, raw: &str, position: usize) -> Field {
        let mut field = Field::undecorated(tag, raw, position);
        field.name = name.to_string();
        field
    }

    fn sample_message() -> FixMessage {
        let mut group = GroupInstance::new(
            "Market Data Entries",
            named_field(268, "NoMDEntries", "2", 3),
        );
        let mut entry1 = GroupEntry::new(1);
        entry1
            .nodes
            .push(MessageNode::Field(named_field(269, "MDEntryType", "0", 4)));
        entry1
            .nodes
            .push(MessageNode::Field(named_field(270, "MDEntryPx", "1.0850", 5)));
        let mut entry2 = GroupEntry::new(2);
        entry2
            .nodes
            .push(MessageNode::Field(named_field(269, "MDEntryType", "1", 6)));
        entry2
            .nodes
            .push(MessageNode::Field(named_field(270, "MDEntryPx", "1.0852", 7)));
        group.entries.push(entry1);
        group.entries.push(entry2);

        let nodes = vec![
            MessageNode::Field(named_field(8, "BeginString", "FIX.4.4", 0)),
            MessageNode::Field(named_field(35, "MsgType", "W", 1)),
            MessageNode::Field(named_field(55, "Symbol", "EUR/USD", 2)),
            MessageNode::Group(group),
            MessageNode::Field(named_field(10, "CheckSum", "123", 8)),
        ];
        FixMessage::new(Bytes::new(), nodes, Vec::new())
    }

    #[test]
    fn test_field_iteration_order() {
        let message = sample_message();
        let tags: Vec<u32> = message.fields().map(|f| f.tag).collect();
        assert_eq!(tags, vec![8, 35, 55, 268, 269, 270, 269, 270, 10]);
    }

    #[test]
    fn test_get_field_first_match() {
        let message = sample_message();
        assert_eq!(message.get_value(269), Some("0"));
        assert_eq!(message.get_fields(269).len(), 2);
        assert!(message.get_field(9999).is_none());
    }

    #[test]
    fn test_group_lookup() {
        let message = sample_message();
        let group = message.group(268).unwrap();
        assert_eq!(group.declared_count(), 2);
        assert_eq!(group.len(), 2);
        assert_eq!(group.entry(0).unwrap().field(270).unwrap().raw_value, "1.0850");
        assert!(message.group(453).is_none());
    }

    #[test]
    fn test_header_and_trailer() {
        let message = sample_message();
        let header: Vec<u32> = message.header().iter().map(|f| f.tag).collect();
        assert_eq!(header, vec![8, 35]);
        let trailer: Vec<u32> = message.trailer().iter().map(|f| f.tag).collect();
        assert_eq!(trailer, vec![10]);
    }

    #[test]
    fn test_annotations_are_derived_copies() {
        let message = sample_message();
        let annotated = message.clone().with_venue("FXGO").with_product_type("Spot");
        assert_eq!(annotated.venue(), Some("FXGO"));
        assert_eq!(annotated.product_type(), Some("Spot"));
        assert_eq!(message.venue(), None);
    }

    #[test]
    fn test_human_readable_rendering() {
        let message = sample_message();
        let output = message.to_human_readable();
        assert!(output.contains("FIX Message: FIX.4.4"));
        assert!(output.contains("Symbol (55): EUR/USD"));
        assert!(output.contains("NoMDEntries (268): 2 - Market Data Entries"));
        assert!(output.contains("[Entry 1]"));
        assert!(output.contains("[Entry 2]"));
        assert!(output.contains("1.0852"));
    }

    #[test]
    fn test_document_export() {
        let message = sample_message();
        let doc = message.to_document();
        assert_eq!(doc.begin_string.as_deref(), Some("FIX.4.4"));
        assert_eq!(doc.msg_type.as_deref(), Some("W"));
        assert_eq!(doc.fields.len(), 5);
        match &doc.fields[3] {
            NodeDocument::Group(group) => {
                assert_eq!(group.count_tag, 268);
                assert_eq!(group.entries.len(), 2);
            }
            NodeDocument::Field(_) => panic!("expected a group document"),
        }
    }

    #[test]
    fn test_parse_flag_display() {
        let flag = ParseFlag::GroupCountMismatch {
            count_tag: 268,
            declared: 2,
            actual: 3,
        };
        assert_eq!(flag.to_string(), "group 268 declared 2 entries, found 3");
    }
}
