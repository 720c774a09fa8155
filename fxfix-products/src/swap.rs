/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Swap product handler.

use crate::handler::{ProductDetails, ProductHandler, ProductType};
use crate::spot::is_trade_message;
use fxfix_core::message::FixMessage;

/// Handler for FX Swap trades.
///
/// Swap is identified by SecurityType (167) = FXSWAP, OrdType (40) = G
/// (ForexSwap), both settlement dates (64 and 193) present, a far-leg tenor
/// (8004), or a near-leg SettlType (63) paired with a far-leg quantity
/// (192).
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapProduct;

impl ProductHandler for SwapProduct {
    fn product_type(&self) -> ProductType {
        ProductType::Swap
    }

    fn detect(&self, message: &FixMessage) -> bool {
        if !is_trade_message(message) {
            return false;
        }

        if let Some(security_type) = message.get_value(167) {
            if security_type.eq_ignore_ascii_case("FXSWAP") {
                return true;
            }
        }

        if message.get_value(40) == Some("G") {
            return true;
        }

        // Near and far settlement dates.
        if message.get_value(64).is_some() && message.get_value(193).is_some() {
            return true;
        }

        // Far-leg tenor.
        if message.get_value(8004).is_some() {
            return true;
        }

        // Near-leg settlement type plus far-leg quantity.
        message.get_value(63).is_some() && message.get_value(192).is_some()
    }

    fn details(&self, message: &FixMessage) -> ProductDetails {
        let mut details = ProductDetails::new(self.product_type());
        details.record("near_settlement_date", message.get_value(64));
        details.record("far_settlement_date", message.get_value(193));
        details.record("near_quantity", message.get_value(32));
        details.record("far_quantity", message.get_value(192));
        details.record("spot_rate", message.get_value(194));
        details.record("forward_points", message.get_value(195));
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxfix_tagvalue::{FixParser, ParserConfig};

    fn parse(input: &str) -> FixMessage {
        FixParser::new(ParserConfig::lenient()).parse(input).unwrap()
    }

    #[test]
    fn test_detects_by_two_settlement_dates() {
        let message = parse("8=FIX.4.4|9=60|35=8|55=EUR/USD|64=20240117|193=20240415|10=000|");
        assert!(SwapProduct.detect(&message));
        let details = SwapProduct.details(&message);
        assert_eq!(details.fields.get("near_settlement_date").unwrap(), "20240117");
        assert_eq!(details.fields.get("far_settlement_date").unwrap(), "20240415");
    }

    #[test]
    fn test_detects_by_ord_type() {
        let message = parse("8=FIX.4.4|9=40|35=D|55=EUR/USD|40=G|10=000|");
        assert!(SwapProduct.detect(&message));
    }

    #[test]
    fn test_detects_by_far_leg_tenor() {
        let message = parse("8=FIX.4.4|9=50|35=R|55=EUR/USD|63=SPOT|8004=M1|10=000|");
        assert!(SwapProduct.detect(&message));
    }

    #[test]
    fn test_detects_by_far_leg_quantity() {
        let message = parse("8=FIX.4.4|9=50|35=R|55=EUR/USD|63=0|192=500000|10=000|");
        assert!(SwapProduct.detect(&message));
    }

    #[test]
    fn test_ignores_single_leg() {
        let message = parse("8=FIX.4.4|9=40|35=8|55=EUR/USD|64=20240117|10=000|");
        assert!(!SwapProduct.detect(&message));
    }
}
