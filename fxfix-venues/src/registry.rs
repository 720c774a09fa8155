/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Ordered registry of venue handlers.
//!
//! Detection walks the handlers in registration order and returns the first
//! whose SenderCompID set matches, so more specific venues should be
//! registered before catch-all ones.

use crate::bloomberg::BloombergDorVenue;
use crate::fxgo::FxgoVenue;
use crate::handler::VenueHandler;
use crate::smart_trade::SmartTradeVenue;
use crate::three_sixty_t::ThreeSixtyTVenue;
use fxfix_core::message::FixMessage;

/// Registry of venue handlers in detection order.
#[derive(Default)]
pub struct VenueRegistry {
    handlers: Vec<Box<dyn VenueHandler>>,
}

impl VenueRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in venue handlers.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SmartTradeVenue));
        registry.register(Box::new(FxgoVenue));
        registry.register(Box::new(ThreeSixtyTVenue));
        registry.register(Box::new(BloombergDorVenue));
        registry
    }

    /// Appends a handler to the detection order.
    pub fn register(&mut self, handler: Box<dyn VenueHandler>) {
        self.handlers.push(handler);
    }

    /// Gets a handler by venue name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn VenueHandler> {
        self.handlers
            .iter()
            .find(|h| h.name().eq_ignore_ascii_case(name))
            .map(Box::as_ref)
    }

    /// Gets the handler whose SenderCompID set matches.
    #[must_use]
    pub fn by_sender(&self, sender_comp_id: &str) -> Option<&dyn VenueHandler> {
        self.handlers
            .iter()
            .find(|h| h.matches_sender(sender_comp_id))
            .map(Box::as_ref)
    }

    /// Detects the venue of a decoded message.
    #[must_use]
    pub fn detect(&self, message: &FixMessage) -> Option<&dyn VenueHandler> {
        let venue = self
            .handlers
            .iter()
            .find(|h| h.detect(message))
            .map(Box::as_ref);
        if let Some(handler) = venue {
            tracing::debug!(venue = handler.name(), "venue detected");
        }
        venue
    }

    /// Returns the registered handlers in detection order.
    #[must_use]
    pub fn handlers(&self) -> &[Box<dyn VenueHandler>] {
        &self.handlers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxfix_tagvalue::{FixParser, ParserConfig};

    #[test]
    fn test_standard_registry_lookup_by_name() {
        let registry = VenueRegistry::standard();
        assert!(registry.get("FXGO").is_some());
        assert!(registry.get("fxgo").is_some());
        assert!(registry.get("360T").is_some());
        assert!(registry.get("Nowhere").is_none());
    }

    #[test]
    fn test_lookup_by_sender() {
        let registry = VenueRegistry::standard();
        assert_eq!(registry.by_sender("BBG").unwrap().name(), "FXGO");
        assert_eq!(
            registry.by_sender("LFX").unwrap().name(),
            "Smart Trade (LiquidityFX)"
        );
        assert_eq!(registry.by_sender("FXOM").unwrap().name(), "Bloomberg DOR");
        assert!(registry.by_sender("UNKNOWN").is_none());
    }

    #[test]
    fn test_detect_from_message() {
        let parser = FixParser::new(ParserConfig::lenient());
        let message = parser
            .parse("8=FIX.4.4|9=30|35=8|49=FXGO|56=CLIENT|10=000|")
            .unwrap();
        let registry = VenueRegistry::standard();
        assert_eq!(registry.detect(&message).unwrap().name(), "FXGO");
    }

    #[test]
    fn test_detect_unknown_sender() {
        let parser = FixParser::new(ParserConfig::lenient());
        let message = parser
            .parse("8=FIX.4.4|9=30|35=8|49=NOBODY|10=000|")
            .unwrap();
        let registry = VenueRegistry::standard();
        assert!(registry.detect(&message).is_none());
    }
}
