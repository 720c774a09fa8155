/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! High-level trade record extracted from a decoded message.

use rust_decimal::Decimal;
use serde::Serialize;

/// Domain record distilled from one FIX message by a venue handler.
///
/// Every field is optional: extraction is best-effort over whatever the
/// message carries. Quote- and swap-specific fields are populated only when
/// [`TradeRecord::is_quote`] / [`TradeRecord::is_swap`] are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradeRecord {
    /// Instrument symbol (tag 55), e.g. `EUR/USD`.
    pub symbol: Option<String>,
    /// Trade side, resolved to its description where possible.
    pub side: Option<String>,
    /// Dealt quantity.
    pub quantity: Option<Decimal>,
    /// Trade or mid price.
    pub price: Option<Decimal>,
    /// Dealt currency (tag 15, or venue equivalent).
    pub currency: Option<String>,
    /// Settlement (value) date of the trade or near leg.
    pub settlement_date: Option<String>,
    /// Venue that produced the message.
    pub venue: Option<String>,
    /// Classified product type, when classification ran.
    pub product_type: Option<String>,
    /// Order identifier (tag 37, falling back to tag 11).
    pub order_id: Option<String>,
    /// Execution identifier (tag 17).
    pub exec_id: Option<String>,
    /// Trade date (tag 75).
    pub trade_date: Option<String>,
    /// Counter currency, when derivable.
    pub counter_currency: Option<String>,
    /// Settlement currency (tag 120).
    pub settlement_currency: Option<String>,

    // Quote fields
    /// Bid price (tag 132).
    pub bid_price: Option<Decimal>,
    /// Offer price (tag 133).
    pub offer_price: Option<Decimal>,
    /// Bid size (tag 134).
    pub bid_size: Option<Decimal>,
    /// Offer size (tag 135).
    pub offer_size: Option<Decimal>,
    /// Bid spot rate (tag 188).
    pub bid_spot_rate: Option<Decimal>,
    /// Offer spot rate (tag 190).
    pub offer_spot_rate: Option<Decimal>,
    /// Bid forward points, near leg (tag 189).
    pub bid_fwd_points: Option<Decimal>,
    /// Offer forward points, near leg (tag 191).
    pub offer_fwd_points: Option<Decimal>,

    // Swap fields (far leg)
    /// Far leg settlement date (tag 193).
    pub far_settlement_date: Option<String>,
    /// Far leg bid forward points (tag 642).
    pub far_bid_fwd_points: Option<Decimal>,
    /// Far leg offer forward points (tag 643).
    pub far_offer_fwd_points: Option<Decimal>,
    /// Bid swap points (tag 1065).
    pub bid_swap_points: Option<Decimal>,
    /// Offer swap points (tag 1066).
    pub offer_swap_points: Option<Decimal>,
    /// Near leg bid all-in rate (tag 8011).
    pub near_leg_bid_rate: Option<Decimal>,
    /// Near leg offer all-in rate (tag 8012).
    pub near_leg_offer_rate: Option<Decimal>,
    /// Far leg bid all-in rate (tag 8019).
    pub far_leg_bid_rate: Option<Decimal>,
    /// Far leg offer all-in rate (tag 8020).
    pub far_leg_offer_rate: Option<Decimal>,

    /// True for quote-shaped messages (35=S).
    pub is_quote: bool,
    /// True when a far leg was detected.
    pub is_swap: bool,
}

impl TradeRecord {
    /// Creates an empty record attributed to the given venue.
    #[must_use]
    pub fn for_venue(venue: impl Into<String>) -> Self {
        Self {
            venue: Some(venue.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_venue() {
        let record = TradeRecord::for_venue("FXGO");
        assert_eq!(record.venue.as_deref(), Some("FXGO"));
        assert!(record.symbol.is_none());
        assert!(!record.is_quote);
    }
}
