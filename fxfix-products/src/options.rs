/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Options product handler.

use crate::handler::{ProductDetails, ProductHandler, ProductType};
use crate::spot::is_trade_message;
use fxfix_core::message::FixMessage;

/// Handler for FX Options trades.
///
/// Options is identified by SecurityType (167) = OPT, or the presence of
/// PutOrCall (201) or StrikePrice (202).
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionsProduct;

impl ProductHandler for OptionsProduct {
    fn product_type(&self) -> ProductType {
        ProductType::Options
    }

    fn detect(&self, message: &FixMessage) -> bool {
        if !is_trade_message(message) {
            return false;
        }

        if let Some(security_type) = message.get_value(167) {
            if security_type.eq_ignore_ascii_case("OPT") {
                return true;
            }
        }

        message.get_value(201).is_some() || message.get_value(202).is_some()
    }

    fn details(&self, message: &FixMessage) -> ProductDetails {
        let mut details = ProductDetails::new(self.product_type());
        let put_or_call = message.get_field(201).map(|f| {
            f.value_description
                .clone()
                .unwrap_or_else(|| f.raw_value.clone())
        });
        details.record("put_or_call", put_or_call.as_deref());
        details.record("strike_price", message.get_value(202));
        details.record("maturity_date", message.get_value(541));
        details.record("maturity_month_year", message.get_value(200));
        details.record("opt_attribute", message.get_value(206));
        details
    }
}
