/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Repeating-group schemas.
//!
//! A [`GroupSchema`] describes, for a tag carrying a repetition count, which
//! tag marks the start of each entry and which tags may appear inside one.
//! Member tags may themselves be count tags of nested schemas. The
//! [`GroupRegistry`] is built once and shared read-only across parses.

use std::collections::{BTreeSet, HashMap};

/// Schema of one repeating group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSchema {
    /// The NUMINGROUP tag announcing the repetition count.
    pub count_tag: u32,
    /// Human-readable group name.
    pub name: String,
    /// The tag that marks the start of each entry.
    pub delimiter_tag: u32,
    /// Tags that may appear inside one entry (delimiter included).
    pub member_tags: BTreeSet<u32>,
    /// Nested group schemas, keyed by their count tag.
    pub nested: HashMap<u32, GroupSchema>,
}

impl GroupSchema {
    /// Creates a schema with an empty member set.
    ///
    /// # Arguments
    /// * `count_tag` - The NUMINGROUP tag
    /// * `name` - Human-readable group name
    /// * `delimiter_tag` - The tag starting each entry
    #[must_use]
    pub fn new(count_tag: u32, name: impl Into<String>, delimiter_tag: u32) -> Self {
        let mut member_tags = BTreeSet::new();
        member_tags.insert(delimiter_tag);
        Self {
            count_tag,
            name: name.into(),
            delimiter_tag,
            member_tags,
            nested: HashMap::new(),
        }
    }

    /// Adds member tags to the schema.
    #[must_use]
    pub fn with_members(mut self, tags: impl IntoIterator<Item = u32>) -> Self {
        self.member_tags.extend(tags);
        self
    }

    /// Adds a nested group schema; its count tag becomes a member tag.
    #[must_use]
    pub fn with_nested(mut self, schema: GroupSchema) -> Self {
        self.member_tags.insert(schema.count_tag);
        self.nested.insert(schema.count_tag, schema);
        self
    }

    /// Returns true if the tag is the delimiter or a member of this group.
    #[must_use]
    pub fn contains(&self, tag: u32) -> bool {
        tag == self.delimiter_tag || self.member_tags.contains(&tag)
    }

    /// Gets the nested schema announced by the given count tag.
    #[must_use]
    pub fn nested_schema(&self, count_tag: u32) -> Option<&GroupSchema> {
        self.nested.get(&count_tag)
    }
}

/// Immutable registry of repeating-group schemas, keyed by count tag.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    schemas: HashMap<u32, GroupSchema>,
}

impl GroupRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schema to the registry.
    #[must_use]
    pub fn with_schema(mut self, schema: GroupSchema) -> Self {
        self.schemas.insert(schema.count_tag, schema);
        self
    }

    /// Gets the schema for a count tag.
    #[inline]
    #[must_use]
    pub fn get(&self, count_tag: u32) -> Option<&GroupSchema> {
        self.schemas.get(&count_tag)
    }

    /// Returns true if the tag announces a registered group.
    #[must_use]
    pub fn is_count_tag(&self, tag: u32) -> bool {
        self.schemas.contains_key(&tag)
    }

    /// Returns the number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no schemas are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Builds the standard FIX 4.4 / FX group registry.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_schema(
                // Market data entries. Count tag 268 serves both snapshot
                // entries (first tag 269) and incremental entries (first tag
                // 279); the parser's lenient first-member rule covers the
                // incremental form.
                GroupSchema::new(268, "Market Data Entries", 269).with_members([
                    270, 271, 272, 273, 274, 275, 276, 277, 278, 279, 280, 282, 283, 284, 286,
                    290, 15, 64, 40, 110, 1026, 1027, 9122, 9123, 37, 198, 336, 625, 58,
                ]),
            )
            .with_schema(GroupSchema::new(267, "Market Data Entry Types", 269))
            .with_schema(
                GroupSchema::new(453, "Party IDs", 448)
                    .with_members([447, 452])
                    .with_nested(GroupSchema::new(802, "Party Sub IDs", 523).with_members([803])),
            )
            .with_schema(GroupSchema::new(146, "Related Symbols", 55).with_members([
                65, 48, 22, 167, 207, 106, 107, 15, 64, 54, 38, 63, 193, 192, 126, 8004,
            ]))
            .with_schema(GroupSchema::new(555, "Legs", 600).with_members([
                602, 603, 608, 609, 610, 611, 612, 616, 617, 618, 619, 620, 623, 624, 556, 564,
                566, 587, 588, 637, 654, 684, 685, 686, 687,
            ]))
            .with_schema(GroupSchema::new(78, "Allocations", 79).with_members([
                661, 573, 366, 80, 467, 81, 736, 737, 161,
            ]))
            .with_schema(
                GroupSchema::new(73, "Orders", 11).with_members([526, 67, 583, 160]),
            )
            .with_schema(
                GroupSchema::new(1362, "Fills", 1363).with_members([1364, 1365, 1443]),
            )
            .with_schema(
                GroupSchema::new(768, "Regulatory Timestamps", 769).with_members([770]),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_market_data() {
        let registry = GroupRegistry::standard();
        let schema = registry.get(268).unwrap();
        assert_eq!(schema.name, "Market Data Entries");
        assert_eq!(schema.delimiter_tag, 269);
        assert!(schema.contains(270));
        assert!(schema.contains(1026));
        assert!(schema.contains(1027));
        assert!(!schema.contains(55));
    }

    #[test]
    fn test_standard_registry_nested_party_sub_ids() {
        let registry = GroupRegistry::standard();
        let parties = registry.get(453).unwrap();
        // The nested count tag is itself a member of the parent.
        assert!(parties.contains(802));
        let sub = parties.nested_schema(802).unwrap();
        assert_eq!(sub.delimiter_tag, 523);
        assert!(sub.contains(803));
    }

    #[test]
    fn test_related_symbols_cover_swap_tags() {
        let registry = GroupRegistry::standard();
        let schema = registry.get(146).unwrap();
        for tag in [63, 64, 192, 193, 8004] {
            assert!(schema.contains(tag), "missing member {tag}");
        }
    }

    #[test]
    fn test_is_count_tag() {
        let registry = GroupRegistry::standard();
        assert!(registry.is_count_tag(268));
        assert!(registry.is_count_tag(453));
        assert!(!registry.is_count_tag(55));
        assert!(!registry.is_count_tag(9999));
        // Nested count tags are not top-level registry entries.
        assert!(!registry.is_count_tag(802));
    }

    #[test]
    fn test_delimiter_is_always_a_member() {
        let schema = GroupSchema::new(1362, "Fills", 1363);
        assert!(schema.contains(1363));
    }
}
