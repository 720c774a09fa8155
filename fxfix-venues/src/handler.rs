/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! The venue capability interface.
//!
//! A venue handler detects whether a decoded message came from its platform
//! (by SenderCompID), contributes a custom tag tier to the dictionary, and
//! extracts a [`TradeRecord`] through the message's read-only contract.

use crate::trade::TradeRecord;
use fxfix_core::message::FixMessage;
use fxfix_dictionary::schema::FieldDef;
use rust_decimal::Decimal;

/// Capability interface implemented by each venue.
pub trait VenueHandler: Send + Sync {
    /// Returns the venue name.
    fn name(&self) -> &'static str;

    /// Returns the SenderCompID values that identify this venue.
    fn sender_comp_ids(&self) -> &'static [&'static str];

    /// Returns the venue-specific custom tag definitions (dictionary tier 3).
    fn custom_tags(&self) -> Vec<FieldDef> {
        Vec::new()
    }

    /// Returns true if the SenderCompID matches this venue
    /// (case-insensitive).
    fn matches_sender(&self, sender_comp_id: &str) -> bool {
        self.sender_comp_ids()
            .iter()
            .any(|id| id.eq_ignore_ascii_case(sender_comp_id))
    }

    /// Returns true if the message came from this venue.
    fn detect(&self, message: &FixMessage) -> bool {
        message
            .sender_comp_id()
            .is_some_and(|sender| self.matches_sender(sender))
    }

    /// Extracts high-level trade information from a decoded message.
    fn extract(&self, message: &FixMessage) -> TradeRecord {
        extract_trade(self.name(), message)
    }
}

/// Reads the first value for a tag as a decimal.
fn decimal_value(message: &FixMessage, tag: u32) -> Option<Decimal> {
    message
        .get_value(tag)
        .and_then(|v| v.trim().parse::<Decimal>().ok())
}

/// Default trade extraction shared by all venues.
///
/// Quote messages (35=S) carry two-sided pricing; execution reports and
/// orders carry fill or order quantities and prices. Extraction never
/// fails: absent or malformed values stay `None`.
#[must_use]
pub fn extract_trade(venue: &str, message: &FixMessage) -> TradeRecord {
    let mut trade = TradeRecord::for_venue(venue);

    trade.symbol = message.get_value(55).map(str::to_string);

    match message.msg_type() {
        Some("S") => extract_quote_info(message, &mut trade),
        Some("R") => extract_quote_request_info(message, &mut trade),
        _ => extract_execution_info(message, &mut trade),
    }

    // Currency or venue DealCurrency.
    trade.currency = message
        .get_value(15)
        .or_else(|| message.get_value(8021))
        .map(str::to_string);
    trade.settlement_date = message.get_value(64).map(str::to_string);
    // OrderID, falling back to ClOrdID.
    trade.order_id = message
        .get_value(37)
        .or_else(|| message.get_value(11))
        .map(str::to_string);
    trade.exec_id = message.get_value(17).map(str::to_string);
    trade.trade_date = message.get_value(75).map(str::to_string);
    trade.settlement_currency = message.get_value(120).map(str::to_string);

    trade
}

/// Extraction for execution reports and orders.
fn extract_execution_info(message: &FixMessage, trade: &mut TradeRecord) {
    if let Some(side) = message.get_field(54) {
        trade.side = Some(
            side.value_description
                .clone()
                .unwrap_or_else(|| side.raw_value.clone()),
        );
    }

    // LastQty first (executions), then OrderQty (orders).
    trade.quantity = decimal_value(message, 32).or_else(|| decimal_value(message, 38));
    // LastPx first (executions), then Price (orders).
    trade.price = decimal_value(message, 31).or_else(|| decimal_value(message, 44));
}

/// Extraction for quote messages (35=S).
fn extract_quote_info(message: &FixMessage, trade: &mut TradeRecord) {
    trade.is_quote = true;

    trade.bid_price = decimal_value(message, 132);
    trade.offer_price = decimal_value(message, 133);

    trade.bid_size = decimal_value(message, 134);
    trade.offer_size = decimal_value(message, 135);
    // Bid size doubles as the default quantity.
    trade.quantity = trade.bid_size;

    trade.bid_spot_rate = decimal_value(message, 188);
    trade.offer_spot_rate = decimal_value(message, 190);
    trade.bid_fwd_points = decimal_value(message, 189);
    trade.offer_fwd_points = decimal_value(message, 191);

    // A far leg settlement date makes this a swap quote.
    if let Some(far_date) = message.get_value(193) {
        trade.is_swap = true;
        trade.far_settlement_date = Some(far_date.to_string());
        trade.far_bid_fwd_points = decimal_value(message, 642);
        trade.far_offer_fwd_points = decimal_value(message, 643);
        trade.bid_swap_points = decimal_value(message, 1065);
        trade.offer_swap_points = decimal_value(message, 1066);
        trade.near_leg_bid_rate = decimal_value(message, 8011);
        trade.near_leg_offer_rate = decimal_value(message, 8012);
        trade.far_leg_bid_rate = decimal_value(message, 8019);
        trade.far_leg_offer_rate = decimal_value(message, 8020);
    }

    trade.side = match (trade.bid_price, trade.offer_price) {
        (Some(_), Some(_)) => Some("Two-Way".to_string()),
        (Some(_), None) => Some("Bid Only".to_string()),
        (None, Some(_)) => Some("Offer Only".to_string()),
        (None, None) => None,
    };

    trade.price = match (trade.bid_price, trade.offer_price) {
        (Some(bid), Some(offer)) => Some((bid + offer) / Decimal::TWO),
        (Some(bid), None) => Some(bid),
        (None, Some(offer)) => Some(offer),
        (None, None) => None,
    };
}

/// Extraction for quote requests (35=R).
fn extract_quote_request_info(message: &FixMessage, trade: &mut TradeRecord) {
    trade.side = match message.get_field(54) {
        Some(side) => Some(
            side.value_description
                .clone()
                .unwrap_or_else(|| side.raw_value.clone()),
        ),
        None => Some("Request".to_string()),
    };
    trade.quantity = decimal_value(message, 38);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxfix_tagvalue::{FixParser, ParserConfig};

    fn parse(input: &str) -> FixMessage {
        FixParser::new(ParserConfig::lenient()).parse(input).unwrap()
    }

    #[test]
    fn test_extract_execution() {
        let message = parse(
            "8=FIX.4.4|9=100|35=8|49=FXGO|55=EUR/USD|54=1|32=1000000|31=1.0850|15=EUR|64=20240117|37=ORD1|17=EX1|10=000|",
        );
        let trade = extract_trade("FXGO", &message);
        assert_eq!(trade.symbol.as_deref(), Some("EUR/USD"));
        assert_eq!(trade.side.as_deref(), Some("Buy"));
        assert_eq!(trade.quantity, "1000000".parse().ok());
        assert_eq!(trade.price, "1.0850".parse().ok());
        assert_eq!(trade.currency.as_deref(), Some("EUR"));
        assert_eq!(trade.order_id.as_deref(), Some("ORD1"));
        assert!(!trade.is_quote);
    }

    #[test]
    fn test_extract_order_falls_back_to_order_fields() {
        let message = parse("8=FIX.4.4|9=50|35=D|49=FXGO|55=EUR/USD|54=2|38=250000|44=1.0900|11=CL1|10=000|");
        let trade = extract_trade("FXGO", &message);
        assert_eq!(trade.side.as_deref(), Some("Sell"));
        assert_eq!(trade.quantity, "250000".parse().ok());
        assert_eq!(trade.price, "1.0900".parse().ok());
        assert_eq!(trade.order_id.as_deref(), Some("CL1"));
    }

    #[test]
    fn test_extract_two_way_quote() {
        let message = parse(
            "8=FIX.4.4|9=80|35=S|49=LFX|55=EUR/USD|132=1.0850|133=1.0852|134=1000000|135=1000000|10=000|",
        );
        let trade = extract_trade("Smart Trade (LiquidityFX)", &message);
        assert!(trade.is_quote);
        assert_eq!(trade.side.as_deref(), Some("Two-Way"));
        // Mid of 1.0850 and 1.0852.
        assert_eq!(trade.price, "1.0851".parse().ok());
        assert_eq!(trade.quantity, "1000000".parse().ok());
    }

    #[test]
    fn test_extract_swap_quote_far_leg() {
        let message = parse(
            "8=FIX.4.4|9=120|35=S|49=LFX|55=EUR/USD|132=1.0850|64=20240117|193=20240415|1065=0.0015|8011=1.0845|8019=1.0862|10=000|",
        );
        let trade = extract_trade("Smart Trade (LiquidityFX)", &message);
        assert!(trade.is_swap);
        assert_eq!(trade.far_settlement_date.as_deref(), Some("20240415"));
        assert_eq!(trade.bid_swap_points, "0.0015".parse().ok());
        assert_eq!(trade.near_leg_bid_rate, "1.0845".parse().ok());
        assert_eq!(trade.far_leg_bid_rate, "1.0862".parse().ok());
        assert_eq!(trade.side.as_deref(), Some("Bid Only"));
    }

    #[test]
    fn test_extract_quote_request_without_side() {
        let message = parse("8=FIX.4.4|9=40|35=R|49=360T|55=EUR/USD|38=500000|10=000|");
        let trade = extract_trade("360T", &message);
        assert_eq!(trade.side.as_deref(), Some("Request"));
        assert_eq!(trade.quantity, "500000".parse().ok());
    }
}
