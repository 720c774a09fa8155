/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Spot product handler.

use crate::handler::{ProductDetails, ProductHandler, ProductType};
use fxfix_core::message::FixMessage;

/// Message types that are trade-related and can carry a product type.
pub const TRADE_MSG_TYPES: [&str; 12] = [
    "8", "D", "E", "F", "G", "R", "S", "i", "W", "X", "AE", "AR",
];

/// Returns true for messages that can carry a product type at all;
/// session-level traffic (Heartbeat, Logon, ...) never classifies.
#[must_use]
pub fn is_trade_message(message: &FixMessage) -> bool {
    message
        .msg_type()
        .is_some_and(|t| TRADE_MSG_TYPES.contains(&t))
}

/// Handler for FX Spot trades.
///
/// Spot is identified by SettlType (63) in the short-dated set, or
/// SecurityType (167) = FXSPOT/FX, and is the default for trade-shaped
/// messages when nothing more specific matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpotProduct;

impl ProductHandler for SpotProduct {
    fn product_type(&self) -> ProductType {
        ProductType::Spot
    }

    fn detect(&self, message: &FixMessage) -> bool {
        if !is_trade_message(message) {
            return false;
        }

        if let Some(security_type) = message.get_value(167) {
            if matches!(security_type.to_uppercase().as_str(), "FXSPOT" | "FX") {
                return true;
            }
        }

        if let Some(settl_type) = message.get_value(63) {
            if matches!(settl_type, "0" | "1" | "2" | "3" | "C") {
                return true;
            }
        }

        // Default product for trade messages.
        true
    }

    fn details(&self, message: &FixMessage) -> ProductDetails {
        let mut details = ProductDetails::new(self.product_type());
        details.record("settlement_date", message.get_value(64));
        details.record("spot_rate", message.get_value(194));
        details
    }
}
