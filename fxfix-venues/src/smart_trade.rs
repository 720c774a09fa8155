/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Smart Trade (LiquidityFX) venue handler.
//!
//! Based on the smartTrade LiquidityFX Distribution FIX ROE specification.
//! The LFX tags are used primarily for FX Swap trading; the definitions
//! here form the venue tier and override the generic overlay for the same
//! tags.

use crate::handler::VenueHandler;
use fxfix_core::types::FieldType;
use fxfix_dictionary::fx::tenor_values;
use fxfix_dictionary::schema::FieldDef;

/// Handler for Smart Trade LiquidityFX FIX messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartTradeVenue;

impl VenueHandler for SmartTradeVenue {
    fn name(&self) -> &'static str {
        "Smart Trade (LiquidityFX)"
    }

    fn sender_comp_ids(&self) -> &'static [&'static str] {
        &["SMARTTRADE", "SMTRADE", "ST", "LFX_CORE", "LFX", "UAT.ATP.RFS.MKT"]
    }

    fn custom_tags(&self) -> Vec<FieldDef> {
        vec![
            // MassQuote entry identifiers
            FieldDef::new(8000, "BidEntryID", FieldType::String)
                .with_description("Uniquely identifies the bid quote in a MassQuote message."),
            FieldDef::new(8001, "OfferEntryID", FieldType::String)
                .with_description("Uniquely identifies the offer quote in a MassQuote message."),
            // Far leg tenor
            FieldDef::new(8004, "SettlType2", FieldType::Tenor)
                .with_description("FX Swap: far leg tenor.")
                .with_values(tenor_values()),
            // Far leg rates, sizes, and dates
            FieldDef::new(8011, "BidSpotRate2", FieldType::Price)
                .with_description("FX Swap: bid entry spot rate of the far leg."),
            FieldDef::new(8012, "OfferSpotRate2", FieldType::Price)
                .with_description("FX Swap: offer entry spot rate of the far leg."),
            FieldDef::new(8013, "BidSize2", FieldType::Qty),
            FieldDef::new(8014, "OfferSize2", FieldType::Qty),
            FieldDef::new(8015, "BidSettlDate", FieldType::LocalMktDate),
            FieldDef::new(8016, "BidSettlDate2", FieldType::LocalMktDate),
            FieldDef::new(8017, "OfferSettlDate", FieldType::LocalMktDate),
            FieldDef::new(8018, "OfferSettlDate2", FieldType::LocalMktDate),
            FieldDef::new(8019, "BidPx2", FieldType::Price)
                .with_description("FX Swap: all-in price of the bid entry's far leg."),
            FieldDef::new(8020, "OfferPx2", FieldType::Price)
                .with_description("FX Swap: all-in price of the offer entry's far leg."),
            FieldDef::new(8021, "BidCurrency", FieldType::Currency),
            FieldDef::new(8022, "OfferCurrency", FieldType::Currency),
            // Swap points
            FieldDef::new(1065, "BidSwapPoints", FieldType::PriceOffset),
            FieldDef::new(1066, "OfferSwapPoints", FieldType::PriceOffset),
            // Tiered market data
            FieldDef::new(9000, "NoRequestedSize", FieldType::NumInGroup),
            FieldDef::new(9001, "RequestedSize", FieldType::Qty),
            // Venue timestamps
            FieldDef::new(9122, "MDEntryOrigTime", FieldType::UtcTimeOnly)
                .with_description("UTC time received from venue; only when AggregatedBook=N."),
            // Swap execution far-leg fields
            FieldDef::new(9044, "MaturityDate2", FieldType::LocalMktDate),
            FieldDef::new(9091, "LastPx2", FieldType::Price),
            FieldDef::new(9092, "LastQty2", FieldType::Qty),
            FieldDef::new(9093, "LeavesQty2", FieldType::Qty),
            FieldDef::new(9094, "CumQty2", FieldType::Qty),
            FieldDef::new(9095, "LastSpotRate2", FieldType::Price),
            // Fixing orders
            FieldDef::new(9300, "FixingSourceID", FieldType::String),
            FieldDef::new(9301, "FixingTime", FieldType::UtcTimestamp),
            // Regulatory
            FieldDef::new(9400, "RegulationType", FieldType::String).with_values([
                ("SEF", "Swap Execution Facility (US)"),
                ("MTF", "Multilateral Trading Facility (EU MIFID2)"),
                ("XOFF", "Off-exchange/Other"),
            ]),
            FieldDef::new(10002, "UTIPrefix", FieldType::String),
            FieldDef::new(10003, "UTI", FieldType::String),
            FieldDef::new(10011, "IsSEFTrade", FieldType::Boolean),
            // Forward rolls
            FieldDef::new(9011, "ClRootOrderID", FieldType::String)
                .with_description("Forward rolls: ID of the spot order to roll."),
            // Pre-allocations
            FieldDef::new(11001, "RequestType", FieldType::Char).with_values([("M", "Multileg")]),
            FieldDef::new(11003, "AllocationID", FieldType::String),
            FieldDef::new(11078, "C_NoAllocs", FieldType::NumInGroup),
            FieldDef::new(11079, "C_AllocAccount", FieldType::String),
            FieldDef::new(11467, "C_IndividualAllocID", FieldType::String),
            FieldDef::new(11080, "C_AllocQty", FieldType::Qty),
            FieldDef::new(11054, "C_AllocSide", FieldType::Char).with_values([
                ("B", "AS_DEFINED (same side)"),
                ("C", "OPPOSITE (opposite side)"),
                ("U", "UNDISCLOSED"),
            ]),
            FieldDef::new(11063, "C_AllocSettlType", FieldType::Tenor).with_values(tenor_values()),
            FieldDef::new(11064, "C_AllocSettlDate", FieldType::LocalMktDate),
            // Leg allocations
            FieldDef::new(11670, "C_NoLegAllocs", FieldType::NumInGroup),
            FieldDef::new(11671, "C_LegAllocAccount", FieldType::String),
            FieldDef::new(11672, "C_LegIndividualAllocID", FieldType::String),
            FieldDef::new(11673, "C_LegAllocQty", FieldType::Qty),
            FieldDef::new(11654, "C_LegAllocSide", FieldType::Char).with_values([
                ("B", "AS_DEFINED (same side as leg)"),
                ("C", "OPPOSITE (opposite side to leg)"),
            ]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_matching() {
        let venue = SmartTradeVenue;
        assert!(venue.matches_sender("SMARTTRADE"));
        assert!(venue.matches_sender("lfx"));
        assert!(venue.matches_sender("UAT.ATP.RFS.MKT"));
        assert!(!venue.matches_sender("FXGO"));
    }

    #[test]
    fn test_custom_tags_cover_far_leg() {
        let tags = SmartTradeVenue.custom_tags();
        for tag in [8004, 8011, 8019, 9091, 11078] {
            assert!(tags.iter().any(|d| d.tag == tag), "missing tag {tag}");
        }
    }

    #[test]
    fn test_far_leg_tenor_values() {
        let tags = SmartTradeVenue.custom_tags();
        let tenor = tags.iter().find(|d| d.tag == 8004).unwrap();
        assert_eq!(tenor.value_description("TOM"), Some("Tomorrow"));
    }
}
