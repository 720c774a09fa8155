/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Field definitions and the tiered tag dictionary.
//!
//! A [`TagDictionary`] is built once by merging ordered layers of
//! [`FieldDef`]s — base specification, curated overrides, venue extensions —
//! where a later layer's definition for a tag fully replaces an earlier
//! layer's. The built dictionary is immutable and safe to share across
//! concurrent parses.

use fxfix_core::types::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Definition of a FIX field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field tag number.
    pub tag: u32,
    /// Field name.
    pub name: String,
    /// Field data type.
    pub field_type: FieldType,
    /// Valid values for enumerated fields, mapped to their descriptions.
    pub values: Option<HashMap<String, String>>,
    /// Field description.
    pub description: Option<String>,
}

impl FieldDef {
    /// Creates a new field definition.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `name` - The field name
    /// * `field_type` - The field data type
    #[must_use]
    pub fn new(tag: u32, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            tag,
            name: name.into(),
            field_type,
            values: None,
            description: None,
        }
    }

    /// Adds valid values for an enumerated field.
    #[must_use]
    pub fn with_values<K, V>(mut self, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values = Some(
            values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Adds a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Gets the description for an enumerated value.
    #[must_use]
    pub fn value_description(&self, raw_value: &str) -> Option<&str> {
        self.values
            .as_ref()
            .and_then(|values| values.get(raw_value))
            .map(String::as_str)
    }
}

/// Immutable tag dictionary merged from ordered definition layers.
#[derive(Debug, Clone, Default)]
pub struct TagDictionary {
    fields: HashMap<u32, FieldDef>,
}

impl TagDictionary {
    /// Starts a new layered dictionary build.
    #[must_use]
    pub fn builder() -> TagDictionaryBuilder {
        TagDictionaryBuilder { layers: Vec::new() }
    }

    /// Builds the standard FX dictionary: the FIX 4.4 base table overlaid
    /// with the curated FX extensions.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder()
            .layer(crate::fix44::base_fields())
            .layer(crate::fx::overlay_fields())
            .build()
    }

    /// Builds the standard FX dictionary with a venue-specific third tier.
    ///
    /// Venue definitions override base and overlay definitions for the same
    /// tag.
    #[must_use]
    pub fn standard_with_venue(venue_fields: Vec<FieldDef>) -> Self {
        Self::builder()
            .layer(crate::fix44::base_fields())
            .layer(crate::fx::overlay_fields())
            .layer(venue_fields)
            .build()
    }

    /// Resolves a tag to its definition.
    #[inline]
    #[must_use]
    pub fn resolve(&self, tag: u32) -> Option<&FieldDef> {
        self.fields.get(&tag)
    }

    /// Returns true if the tag is defined.
    #[must_use]
    pub fn contains(&self, tag: u32) -> bool {
        self.fields.contains_key(&tag)
    }

    /// Gets the name for a tag, or `"Unknown"` when undefined.
    #[must_use]
    pub fn name(&self, tag: u32) -> &str {
        self.resolve(tag)
            .map_or(fxfix_core::UNKNOWN_FIELD_NAME, |def| def.name.as_str())
    }

    /// Returns the number of defined tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the dictionary has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.values()
    }
}

/// Ordered-layer builder for [`TagDictionary`].
///
/// Layers are applied in the order they were added; the last definition for
/// a tag wins. There is no field-level merge.
#[derive(Debug, Default)]
pub struct TagDictionaryBuilder {
    layers: Vec<Vec<FieldDef>>,
}

impl TagDictionaryBuilder {
    /// Adds a definition layer.
    #[must_use]
    pub fn layer(mut self, definitions: impl IntoIterator<Item = FieldDef>) -> Self {
        self.layers.push(definitions.into_iter().collect());
        self
    }

    /// Merges the layers into an immutable dictionary.
    #[must_use]
    pub fn build(self) -> TagDictionary {
        let mut fields = HashMap::new();
        for layer in self.layers {
            for def in layer {
                fields.insert(def.tag, def);
            }
        }
        TagDictionary { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_def_value_description() {
        let def = FieldDef::new(54, "Side", FieldType::Char).with_values([("1", "Buy"), ("2", "Sell")]);
        assert_eq!(def.value_description("1"), Some("Buy"));
        assert_eq!(def.value_description("9"), None);
    }

    #[test]
    fn test_builder_last_layer_wins() {
        let dictionary = TagDictionary::builder()
            .layer([FieldDef::new(8004, "UserDefined", FieldType::String)])
            .layer([FieldDef::new(8004, "SettlType2", FieldType::Tenor)
                .with_values([("M1", "1 Month")])])
            .build();

        let def = dictionary.resolve(8004).unwrap();
        assert_eq!(def.name, "SettlType2");
        assert_eq!(def.field_type, FieldType::Tenor);
        assert_eq!(def.value_description("M1"), Some("1 Month"));
    }

    #[test]
    fn test_replacement_is_whole_definition() {
        // A later layer without values must not inherit the earlier layer's
        // enum map.
        let dictionary = TagDictionary::builder()
            .layer([FieldDef::new(63, "SettlType", FieldType::Char).with_values([("0", "Regular")])])
            .layer([FieldDef::new(63, "SettlType", FieldType::String)])
            .build();

        let def = dictionary.resolve(63).unwrap();
        assert!(def.values.is_none());
    }

    #[test]
    fn test_unknown_tag_resolves_to_none() {
        let dictionary = TagDictionary::standard();
        assert!(dictionary.resolve(99_999).is_none());
        assert_eq!(dictionary.name(99_999), "Unknown");
    }

    #[test]
    fn test_standard_dictionary_tiers() {
        let dictionary = TagDictionary::standard();
        // Base tier.
        assert_eq!(dictionary.name(8), "BeginString");
        assert_eq!(dictionary.name(55), "Symbol");
        // Overlay tier.
        assert_eq!(dictionary.name(1026), "MDEntrySpotRate");
        assert_eq!(dictionary.name(8004), "SettlType2");
    }

    #[test]
    fn test_venue_tier_overrides() {
        let venue = vec![FieldDef::new(55, "VenueSymbol", FieldType::String)];
        let dictionary = TagDictionary::standard_with_venue(venue);
        assert_eq!(dictionary.name(55), "VenueSymbol");
        // Untouched tags keep their standard definition.
        assert_eq!(dictionary.name(54), "Side");
    }
}
