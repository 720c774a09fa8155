/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! The product-classification capability interface.
//!
//! Each FX product category implements [`ProductHandler`]; the
//! [`ProductRegistry`] runs detection in a fixed specificity order, most
//! specific product first, with Spot as the trade-shaped fallback.

use fxfix_core::message::FixMessage;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// FX instrument category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProductType {
    /// FX Spot.
    Spot,
    /// FX Forward (outright).
    Forward,
    /// FX Swap.
    Swap,
    /// Non-Deliverable Forward.
    Ndf,
    /// FX Futures.
    Futures,
    /// FX Options.
    Options,
}

impl ProductType {
    /// Returns the display name of the product type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "Spot",
            Self::Forward => "Forward",
            Self::Swap => "Swap",
            Self::Ndf => "NDF",
            Self::Futures => "Futures",
            Self::Options => "Options",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Product-specific details extracted from a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetails {
    /// The classified product type.
    pub product_type: ProductType,
    /// Named raw values relevant to this product.
    pub fields: BTreeMap<&'static str, String>,
}

impl ProductDetails {
    /// Creates an empty detail record for a product type.
    #[must_use]
    pub fn new(product_type: ProductType) -> Self {
        Self {
            product_type,
            fields: BTreeMap::new(),
        }
    }

    /// Records a detail when the message carries the value.
    pub fn record(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.fields.insert(key, value.to_string());
        }
    }
}

/// Capability interface implemented by each product category.
pub trait ProductHandler: Send + Sync {
    /// Returns the product type this handler classifies.
    fn product_type(&self) -> ProductType;

    /// Returns true if the message is for this product type.
    fn detect(&self, message: &FixMessage) -> bool;

    /// Extracts product-specific details from the message.
    fn details(&self, _message: &FixMessage) -> ProductDetails {
        ProductDetails::new(self.product_type())
    }
}

/// Registry of product handlers in detection order.
#[derive(Default)]
pub struct ProductRegistry {
    handlers: Vec<Box<dyn ProductHandler>>,
}

impl ProductRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in handlers, most specific first;
    /// Spot is the fallback for trade-shaped messages.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::swap::SwapProduct));
        registry.register(Box::new(crate::ndf::NdfProduct));
        registry.register(Box::new(crate::options::OptionsProduct));
        registry.register(Box::new(crate::futures::FuturesProduct));
        registry.register(Box::new(crate::forward::ForwardProduct));
        registry.register(Box::new(crate::spot::SpotProduct));
        registry
    }

    /// Appends a handler to the detection order.
    pub fn register(&mut self, handler: Box<dyn ProductHandler>) {
        self.handlers.push(handler);
    }

    /// Classifies a decoded message.
    ///
    /// # Returns
    /// The first handler whose detection matches, or `None` for non-trade
    /// messages.
    #[must_use]
    pub fn detect(&self, message: &FixMessage) -> Option<&dyn ProductHandler> {
        let product = self
            .handlers
            .iter()
            .find(|h| h.detect(message))
            .map(Box::as_ref);
        if let Some(handler) = product {
            tracing::debug!(product = %handler.product_type(), "product classified");
        }
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_display() {
        assert_eq!(ProductType::Spot.to_string(), "Spot");
        assert_eq!(ProductType::Ndf.to_string(), "NDF");
    }

    #[test]
    fn test_details_record_skips_missing() {
        let mut details = ProductDetails::new(ProductType::Forward);
        details.record("settlement_date", Some("20240117"));
        details.record("forward_points", None);
        assert_eq!(details.fields.get("settlement_date").unwrap(), "20240117");
        assert!(!details.fields.contains_key("forward_points"));
    }
}
