/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Forward product handler.

use crate::handler::{ProductDetails, ProductHandler, ProductType};
use crate::spot::is_trade_message;
use fxfix_core::message::FixMessage;

/// Handler for FX Forward trades.
///
/// Forward is identified by SettlType (63) = 6 or B, SecurityType (167) =
/// FXFWD, or the presence of forward points (tag 195).
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardProduct;

impl ProductHandler for ForwardProduct {
    fn product_type(&self) -> ProductType {
        ProductType::Forward
    }

    fn detect(&self, message: &FixMessage) -> bool {
        if !is_trade_message(message) {
            return false;
        }

        if let Some(security_type) = message.get_value(167) {
            if security_type.eq_ignore_ascii_case("FXFWD") {
                return true;
            }
        }

        if matches!(message.get_value(63), Some("6" | "B")) {
            return true;
        }

        message.get_value(195).is_some()
    }

    fn details(&self, message: &FixMessage) -> ProductDetails {
        let mut details = ProductDetails::new(self.product_type());
        details.record("settlement_date", message.get_value(64));
        details.record("spot_rate", message.get_value(194));
        details.record("forward_points", message.get_value(195));
        details
    }
}
