/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! # FxFix Products
//!
//! FX product-type classification for decoded messages: Spot, Forward,
//! Swap, NDF, Futures, and Options.
//!
//! Detection runs in a fixed specificity order (Swap → NDF → Options →
//! Futures → Forward → Spot); Spot is the fallback for trade-shaped
//! messages, and session-level traffic never classifies. Handlers read
//! messages through the read-only contract and never mutate them.

pub mod forward;
pub mod futures;
pub mod handler;
pub mod ndf;
pub mod options;
pub mod spot;
pub mod swap;

pub use forward::ForwardProduct;
pub use futures::FuturesProduct;
pub use handler::{ProductDetails, ProductHandler, ProductRegistry, ProductType};
pub use ndf::NdfProduct;
pub use options::OptionsProduct;
pub use spot::SpotProduct;
pub use swap::SwapProduct;

#[cfg(test)]
mod tests {
    use super::*;
    use fxfix_tagvalue::{FixParser, ParserConfig};

    fn parse(input: &str) -> fxfix_core::message::FixMessage {
        FixParser::new(ParserConfig::lenient()).parse(input).unwrap()
    }

    #[test]
    fn test_registry_order_swap_before_forward() {
        // Forward points plus two settlement dates: swap wins by specificity.
        let message = parse(
            "8=FIX.4.4|9=80|35=8|55=EUR/USD|64=20240117|193=20240415|195=0.0050|10=000|",
        );
        let registry = ProductRegistry::standard();
        assert_eq!(
            registry.detect(&message).unwrap().product_type(),
            ProductType::Swap
        );
    }

    #[test]
    fn test_registry_spot_fallback() {
        let message = parse("8=FIX.4.4|9=40|35=8|55=EUR/USD|54=1|10=000|");
        let registry = ProductRegistry::standard();
        assert_eq!(
            registry.detect(&message).unwrap().product_type(),
            ProductType::Spot
        );
    }

    #[test]
    fn test_registry_session_message_unclassified() {
        let message = parse("8=FIX.4.4|9=10|35=0|10=000|");
        let registry = ProductRegistry::standard();
        assert!(registry.detect(&message).is_none());
    }

    #[test]
    fn test_registry_ndf_before_forward() {
        let message = parse(
            "8=FIX.4.4|9=80|35=8|55=USD/INR|167=FXNDF|195=0.0020|120=USD|10=000|",
        );
        let registry = ProductRegistry::standard();
        assert_eq!(
            registry.detect(&message).unwrap().product_type(),
            ProductType::Ndf
        );
    }
}
