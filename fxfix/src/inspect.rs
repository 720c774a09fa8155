/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! One-call message inspection.
//!
//! [`Inspector`] wires the full workflow: parse under the standard
//! dictionary, detect the venue from SenderCompID, re-parse under the
//! venue-extended dictionary when the venue contributes a tag tier,
//! classify the product, and extract a trade record. The source message is
//! never mutated; each annotation step produces a derived copy.

use fxfix_core::error::Result;
use fxfix_core::message::FixMessage;
use fxfix_dictionary::schema::TagDictionary;
use fxfix_products::{ProductDetails, ProductRegistry};
use fxfix_tagvalue::{FixParser, ParserConfig};
use fxfix_venues::{TradeRecord, VenueRegistry};
use std::sync::Arc;

/// The outcome of inspecting one raw message.
#[derive(Debug)]
pub struct Inspection {
    /// The decoded message, annotated with venue and product type where
    /// detection succeeded.
    pub message: FixMessage,
    /// High-level trade record, when a venue was detected.
    pub trade: Option<TradeRecord>,
    /// Product-specific details, when classification succeeded.
    pub details: Option<ProductDetails>,
}

/// Parser + venue registry + product registry, wired together.
pub struct Inspector {
    config: ParserConfig,
    parser: FixParser,
    venues: VenueRegistry,
    products: ProductRegistry,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl Inspector {
    /// Creates an inspector with the given parser configuration and the
    /// standard venue and product registries.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            parser: FixParser::new(config),
            venues: VenueRegistry::standard(),
            products: ProductRegistry::standard(),
        }
    }

    /// Creates a fully lenient inspector, suited to log-extracted input.
    #[must_use]
    pub fn lenient() -> Self {
        Self::new(ParserConfig::lenient())
    }

    /// Returns the venue registry.
    #[must_use]
    pub fn venues(&self) -> &VenueRegistry {
        &self.venues
    }

    /// Returns the product registry.
    #[must_use]
    pub fn products(&self) -> &ProductRegistry {
        &self.products
    }

    /// Decodes, annotates, and classifies one raw message.
    ///
    /// # Errors
    /// Same failure modes as [`FixParser::parse`] under the configured
    /// strictness.
    pub fn inspect(&self, raw: &str) -> Result<Inspection> {
        let mut message = self.parser.parse(raw)?;

        let venue = self.venues.detect(&message);
        if let Some(handler) = venue {
            let custom = handler.custom_tags();
            if !custom.is_empty() {
                // Venue definitions may override tier-1/2 entries, so the
                // message is decoded again under the extended dictionary.
                tracing::debug!(venue = handler.name(), tags = custom.len(), "re-parsing under venue tier");
                let dictionary = Arc::new(TagDictionary::standard_with_venue(custom));
                message = FixParser::new(self.config)
                    .with_dictionary(dictionary)
                    .parse(raw)?;
            }
            message = message.with_venue(handler.name());
        }

        let product = self.products.detect(&message);
        let details = product.map(|p| p.details(&message));
        if let Some(handler) = product {
            message = message.with_product_type(handler.product_type().as_str());
        }

        let trade = venue.map(|handler| {
            let mut trade = handler.extract(&message);
            trade.product_type = message.product_type().map(str::to_string);
            trade
        });

        Ok(Inspection {
            message,
            trade,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_annotates_venue_and_product() {
        let inspector = Inspector::lenient();
        let inspection = inspector
            .inspect("8=FIX.4.4|9=100|35=8|49=FXGO|56=CLIENT|55=EUR/USD|54=1|32=1000000|31=1.0850|10=123|")
            .unwrap();

        assert_eq!(inspection.message.venue(), Some("FXGO"));
        assert_eq!(inspection.message.product_type(), Some("Spot"));
        let trade = inspection.trade.unwrap();
        assert_eq!(trade.symbol.as_deref(), Some("EUR/USD"));
        assert_eq!(trade.product_type.as_deref(), Some("Spot"));
    }

    #[test]
    fn test_inspect_unknown_sender_has_no_trade() {
        let inspector = Inspector::lenient();
        let inspection = inspector
            .inspect("8=FIX.4.4|9=40|35=8|49=NOBODY|55=EUR/USD|10=000|")
            .unwrap();
        assert_eq!(inspection.message.venue(), None);
        assert!(inspection.trade.is_none());
        // Product classification does not depend on the venue.
        assert_eq!(inspection.message.product_type(), Some("Spot"));
    }

    #[test]
    fn test_inspect_venue_tier_overrides_names() {
        let inspector = Inspector::lenient();
        let inspection = inspector
            .inspect("8=FIX.4.4|9=80|35=R|49=SMARTTRADE|55=EUR/USD|63=SPOT|8004=M1|10=000|")
            .unwrap();
        assert_eq!(inspection.message.venue(), Some("Smart Trade (LiquidityFX)"));
        let tenor = inspection.message.get_field(8004).unwrap();
        assert_eq!(tenor.name, "SettlType2");
        assert_eq!(tenor.value_description.as_deref(), Some("1 Month"));
        assert_eq!(inspection.message.product_type(), Some("Swap"));
    }
}
