/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Curated FX extension overlay.
//!
//! Tier 2 of the tag dictionary: forward/swap far-leg tags, LiquidityFX
//! custom ranges, NDF fixing tags, and venue/counterparty/regulatory custom
//! ranges common across FX platforms. Definitions here replace the base
//! table's entry for the same tag; venue tiers replace these in turn.

use crate::schema::FieldDef;
use fxfix_core::types::FieldType;

/// Supported tenor codes and their descriptions (LFX specification §11.9).
#[must_use]
pub fn tenor_values() -> Vec<(&'static str, &'static str)> {
    vec![
        ("TOD", "Today"),
        ("TOM", "Tomorrow"),
        ("SPOT", "Spot"),
        ("ONI", "Overnight"),
        ("SNX", "Spot Next"),
        ("TNX", "Tomorrow Next"),
        ("D2", "Spot + 2 Days"),
        ("D3", "Spot + 3 Days"),
        ("W1", "1 Week"),
        ("W2", "2 Weeks"),
        ("W3", "3 Weeks"),
        ("M1", "1 Month"),
        ("M2", "2 Months"),
        ("M3", "3 Months"),
        ("M4", "4 Months"),
        ("M5", "5 Months"),
        ("M6", "6 Months"),
        ("M9", "9 Months"),
        ("M12", "12 Months"),
        ("M15", "15 Months"),
        ("M18", "18 Months"),
        ("Y1", "1 Year"),
        ("Y2", "2 Years"),
        ("Y3", "3 Years"),
        ("Y5", "5 Years"),
        ("Y10", "10 Years"),
        ("MAR", "Third Wednesday of next March (IMM)"),
        ("JUN", "Third Wednesday of next June (IMM)"),
        ("SEP", "Third Wednesday of next September (IMM)"),
        ("DEC", "Third Wednesday of next December (IMM)"),
        ("ME1", "Last day of current month"),
        ("ME2", "Last day of next month"),
    ]
}

/// Returns the curated FX overlay definitions.
#[must_use]
pub fn overlay_fields() -> Vec<FieldDef> {
    vec![
        // FIX 5.0 additions used inside repeating groups
        FieldDef::new(685, "LegOrderQty", FieldType::Qty)
            .with_description("Order quantity for a leg of a multi-leg instrument."),
        FieldDef::new(1362, "NoFills", FieldType::NumInGroup)
            .with_description("Count of entries in the Fills repeating group."),
        FieldDef::new(1363, "FillExecID", FieldType::String),
        FieldDef::new(1364, "FillPx", FieldType::Price),
        FieldDef::new(1365, "FillQty", FieldType::Qty),
        FieldDef::new(1443, "FillLiquidityInd", FieldType::Int),
        // Forward market data components (per MD entry)
        FieldDef::new(1026, "MDEntrySpotRate", FieldType::Price).with_description(
            "Spot component of the all-in forward price for this market data entry.",
        ),
        FieldDef::new(1027, "MDEntryForwardPoints", FieldType::PriceOffset).with_description(
            "Difference between the all-in forward price and the spot rate for this entry.",
        ),
        // Swap points
        FieldDef::new(1065, "BidSwapPoints", FieldType::PriceOffset)
            .with_description("FX Swap: swap points of the bid entry (far leg minus near leg)."),
        FieldDef::new(1066, "OfferSwapPoints", FieldType::PriceOffset)
            .with_description("FX Swap: swap points of the offer entry (far leg minus near leg)."),
        // LFX 8000 range - MassQuote and far-leg fields
        FieldDef::new(8000, "BidEntryID", FieldType::String)
            .with_description("Uniquely identifies the bid quote in a MassQuote message."),
        FieldDef::new(8001, "OfferEntryID", FieldType::String)
            .with_description("Uniquely identifies the offer quote in a MassQuote message."),
        FieldDef::new(8004, "SettlType2", FieldType::Tenor)
            .with_description("FX Swap: far leg tenor.")
            .with_values(tenor_values()),
        FieldDef::new(8011, "BidSpotRate2", FieldType::Price)
            .with_description("FX Swap: bid entry spot rate of the far leg."),
        FieldDef::new(8012, "OfferSpotRate2", FieldType::Price)
            .with_description("FX Swap: offer entry spot rate of the far leg."),
        FieldDef::new(8013, "BidSize2", FieldType::Qty)
            .with_description("FX Swap: size of the far leg (bid entry)."),
        FieldDef::new(8014, "OfferSize2", FieldType::Qty)
            .with_description("FX Swap: size of the far leg (offer entry)."),
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
        // LFX 9000 range - market data and execution
        FieldDef::new(9000, "NoRequestedSize", FieldType::NumInGroup)
            .with_description("Count of size tiers for tiered market data quotes."),
        FieldDef::new(9001, "RequestedSize", FieldType::Qty),
        FieldDef::new(9011, "ClRootOrderID", FieldType::String)
            .with_description("Forward rolls: ID of the spot order to roll."),
        FieldDef::new(9044, "MaturityDate2", FieldType::LocalMktDate)
            .with_description("For NDS, fixing date of the far leg."),
        FieldDef::new(9091, "LastPx2", FieldType::Price)
            .with_description("FX Swap: fill price of the far leg."),
        FieldDef::new(9092, "LastQty2", FieldType::Qty)
            .with_description("FX Swap: fill amount of the far leg."),
        FieldDef::new(9093, "LeavesQty2", FieldType::Qty),
        FieldDef::new(9094, "CumQty2", FieldType::Qty),
        FieldDef::new(9095, "LastSpotRate2", FieldType::Price),
        FieldDef::new(9122, "MDEntryOrigTime", FieldType::UtcTimeOnly)
            .with_description("UTC time received from the venue, when unaggregated."),
        FieldDef::new(9123, "MDEntryOrigDate", FieldType::UtcDateOnly),
        FieldDef::new(9300, "FixingSourceID", FieldType::String),
        FieldDef::new(9301, "FixingTime", FieldType::UtcTimestamp),
        FieldDef::new(9400, "RegulationType", FieldType::String)
            .with_description("Type of regulated venue.")
            .with_values([
                ("SEF", "Swap Execution Facility (US)"),
                ("MTF", "Multilateral Trading Facility (EU MIFID2)"),
                ("XOFF", "Off-exchange/Other"),
            ]),
        // LFX 10000 range - UTI/regulatory
        FieldDef::new(10002, "UTIPrefix", FieldType::String),
        FieldDef::new(10003, "UTI", FieldType::String).with_description("Unique Trade Id."),
        FieldDef::new(10011, "IsSEFTrade", FieldType::Boolean),
        // LFX 11000 range - allocations
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
        // Generic FX extensions (5700 range)
        FieldDef::new(5700, "FXCurrencyPair", FieldType::String)
            .with_description("Currency pair in compact format (e.g., EURUSD)."),
        FieldDef::new(5701, "BaseCurrency", FieldType::Currency),
        FieldDef::new(5702, "QuoteCurrency", FieldType::Currency),
        FieldDef::new(5703, "ValueDate", FieldType::LocalMktDate),
        FieldDef::new(5704, "FarValueDate", FieldType::LocalMktDate),
        FieldDef::new(5705, "NearLegQty", FieldType::Qty),
        FieldDef::new(5706, "FarLegQty", FieldType::Qty),
        FieldDef::new(5707, "SwapPoints", FieldType::PriceOffset),
        FieldDef::new(5708, "AllInRate", FieldType::Price)
            .with_description("Complete forward exchange rate: spot plus forward points."),
        FieldDef::new(5709, "NDFFixingDate", FieldType::LocalMktDate)
            .with_description("Date when the NDF fixing rate is determined."),
        FieldDef::new(5710, "NDFFixingRate", FieldType::Price),
        FieldDef::new(5711, "NDFFixingSource", FieldType::String)
            .with_description("Official source for the NDF fixing rate (e.g., WMR, BFIX)."),
        FieldDef::new(5712, "TenorValue", FieldType::Tenor).with_values(tenor_values()),
        FieldDef::new(5713, "FarTenorValue", FieldType::Tenor).with_values(tenor_values()),
        // Venue custom range (5800)
        FieldDef::new(5800, "VenueTradeID", FieldType::String),
        FieldDef::new(5801, "VenueOrderID", FieldType::String),
        FieldDef::new(5802, "VenueQuoteID", FieldType::String),
        FieldDef::new(5803, "VenueName", FieldType::String),
        FieldDef::new(5804, "VenueTimestamp", FieldType::UtcTimestamp),
        // Counterparty range (5900)
        FieldDef::new(5900, "CounterpartyID", FieldType::String),
        FieldDef::new(5901, "CounterpartyName", FieldType::String),
        FieldDef::new(5902, "CounterpartyLEI", FieldType::String),
        // Regulatory range (6000)
        FieldDef::new(6000, "TradeReportID", FieldType::String),
        FieldDef::new(6001, "RegulatoryReportType", FieldType::Int),
        FieldDef::new(6002, "RegulatoryUTI", FieldType::String)
            .with_description("Unique Transaction Identifier for EMIR/MiFID reporting."),
        FieldDef::new(6003, "USI", FieldType::String)
            .with_description("Unique Swap Identifier for Dodd-Frank reporting."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_fields_unique_tags() {
        let fields = overlay_fields();
        let mut tags: Vec<u32> = fields.iter().map(|d| d.tag).collect();
        let total = tags.len();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), total, "duplicate tag in overlay table");
    }

    #[test]
    fn test_tenor_map_on_far_leg_tenor() {
        let fields = overlay_fields();
        let def = fields.iter().find(|d| d.tag == 8004).unwrap();
        assert_eq!(def.value_description("M1"), Some("1 Month"));
        assert_eq!(def.value_description("SPOT"), Some("Spot"));
    }

    #[test]
    fn test_ndf_fixing_tags_present() {
        let fields = overlay_fields();
        for tag in [5709, 5710, 5711] {
            assert!(fields.iter().any(|d| d.tag == tag), "missing tag {tag}");
        }
    }
}
