/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! NDF (Non-Deliverable Forward) product handler.

use crate::handler::{ProductDetails, ProductHandler, ProductType};
use crate::spot::is_trade_message;
use fxfix_core::message::FixMessage;

/// Handler for FX NDF trades.
///
/// NDF is identified by SecurityType (167) = FXNDF or the presence of the
/// fixing-date/fixing-source custom tags (5709/5711).
#[derive(Debug, Clone, Copy, Default)]
pub struct NdfProduct;

impl ProductHandler for NdfProduct {
    fn product_type(&self) -> ProductType {
        ProductType::Ndf
    }

    fn detect(&self, message: &FixMessage) -> bool {
        if !is_trade_message(message) {
            return false;
        }

        if let Some(security_type) = message.get_value(167) {
            if security_type.eq_ignore_ascii_case("FXNDF") {
                return true;
            }
        }

        message.get_value(5709).is_some() || message.get_value(5711).is_some()
    }

    fn details(&self, message: &FixMessage) -> ProductDetails {
        let mut details = ProductDetails::new(self.product_type());
        details.record("settlement_date", message.get_value(64));
        details.record("fixing_date", message.get_value(5709));
        details.record("fixing_rate", message.get_value(5710));
        details.record("fixing_source", message.get_value(5711));
        details.record("settlement_currency", message.get_value(120));
        details
    }
}
