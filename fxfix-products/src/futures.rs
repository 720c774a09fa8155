/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Futures product handler.

use crate::handler::{ProductDetails, ProductHandler, ProductType};
use crate::spot::is_trade_message;
use fxfix_core::message::FixMessage;

/// Handler for FX Futures trades.
///
/// Futures is identified by SecurityType (167) = FUT, or a maturity
/// month/year (200) together with a security exchange (207).
#[derive(Debug, Clone, Copy, Default)]
pub struct FuturesProduct;

impl ProductHandler for FuturesProduct {
    fn product_type(&self) -> ProductType {
        ProductType::Futures
    }

    fn detect(&self, message: &FixMessage) -> bool {
        if !is_trade_message(message) {
            return false;
        }

        if let Some(security_type) = message.get_value(167) {
            if security_type.eq_ignore_ascii_case("FUT") {
                return true;
            }
        }

        message.get_value(200).is_some() && message.get_value(207).is_some()
    }

    fn details(&self, message: &FixMessage) -> ProductDetails {
        let mut details = ProductDetails::new(self.product_type());
        details.record("maturity_month_year", message.get_value(200));
        details.record("maturity_date", message.get_value(541));
        details.record("security_exchange", message.get_value(207));
        details.record("contract_multiplier", message.get_value(231));
        details
    }
}
