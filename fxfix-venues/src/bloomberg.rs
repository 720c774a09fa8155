/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Bloomberg DOR (Derivatives Order Routing) venue handler.
//!
//! Supports Bloomberg's ORP/DOR FIX dialect for FX trading: Spot, Forward,
//! Swap, NDF, and FX Algo orders. Standard tags come from the base
//! dictionary; the definitions below are Bloomberg-specific.

use crate::handler::VenueHandler;
use fxfix_core::types::FieldType;
use fxfix_dictionary::schema::FieldDef;

/// Handler for Bloomberg DOR FIX messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct BloombergDorVenue;

impl VenueHandler for BloombergDorVenue {
    fn name(&self) -> &'static str {
        "Bloomberg DOR"
    }

    fn sender_comp_ids(&self) -> &'static [&'static str] {
        &["BLOOMBERG_DOR", "BBGDOR", "DOR", "FXOM", "ORP"]
    }

    fn custom_tags(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::new(22913, "LastMktSpotRate", FieldType::Price)
                .with_description("FX Algo: prevailing market spot rate at the time of fill."),
            FieldDef::new(22914, "AvgMktSpotRate", FieldType::Price)
                .with_description("FX Algo: average prevailing market spot rate across fills."),
            FieldDef::new(2793, "AvgSpotRate", FieldType::Price)
                .with_description("FX Algo: average all-in spot rate of all fills."),
            FieldDef::new(2794, "AvgForwardPoints", FieldType::PriceOffset)
                .with_description("FX Algo: average forward points of all fills."),
            FieldDef::new(9032, "AvgCommission", FieldType::Amt)
                .with_description("FX Algo: total average commission across all fills."),
            FieldDef::new(22858, "AlgoStrategyID", FieldType::String)
                .with_description("Bloomberg internal identifier for the algorithm strategy."),
            FieldDef::new(6215, "Tenor", FieldType::Tenor)
                .with_description("FX tenor code (e.g., SP, 1W, 1M, 3M, 1Y)."),
            FieldDef::new(22010, "LegTenor", FieldType::Tenor)
                .with_description("FX Swap: tenor code for the individual leg."),
            FieldDef::new(22262, "CalculatedCurrency", FieldType::Currency)
                .with_description("Currency opposite to the dealt currency."),
            FieldDef::new(22263, "LegCalculatedCurrency", FieldType::Currency),
            FieldDef::new(1071, "LastSwapPoints", FieldType::PriceOffset)
                .with_description("FX Swap: swap points differential."),
            FieldDef::new(22869, "ForexAccommodationTransaction", FieldType::Boolean),
            FieldDef::new(9575, "StagedOrderIsInquiry", FieldType::Boolean)
                .with_description("Distinguishes staged orders from inquiries."),
            FieldDef::new(22923, "ManualTicket", FieldType::Int).with_values([
                ("0", "No"),
                ("1", "Before venue"),
                ("2", "After venue"),
            ]),
            FieldDef::new(22000, "AutoConfirm", FieldType::Boolean)
                .with_description("Whether the trade should be auto-confirmed."),
            FieldDef::new(1056, "CalculatedCcyLastQty", FieldType::Qty)
                .with_description("Calculated quantity in the non-dealt currency."),
            FieldDef::new(22040, "DV01", FieldType::Price)
                .with_description("Dollar Value of 01: interest rate risk measure."),
            FieldDef::new(22041, "LegDV01", FieldType::Price),
            FieldDef::new(9610, "NoNotes", FieldType::NumInGroup)
                .with_description("Count of entries in the Bloomberg Notes repeating group."),
            FieldDef::new(9612, "NoteLabel", FieldType::String),
            FieldDef::new(9613, "NoteText", FieldType::String),
            FieldDef::new(22941, "SideProtection", FieldType::Int)
                .with_description("Side intended by taker in an RFM request."),
            FieldDef::new(9896, "PricingNo", FieldType::String)
                .with_description("Client's TS PX number for quote routing."),
            FieldDef::new(2795, "OffshoreIndicator", FieldType::Int).with_values([
                ("0", "Regular"),
                ("1", "Offshore"),
                ("2", "Onshore"),
            ]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_matching() {
        let venue = BloombergDorVenue;
        assert!(venue.matches_sender("BLOOMBERG_DOR"));
        assert!(venue.matches_sender("fxom"));
        assert!(!venue.matches_sender("FXGO"));
    }

    #[test]
    fn test_custom_tags() {
        let tags = BloombergDorVenue.custom_tags();
        assert!(tags.iter().any(|d| d.tag == 22913));
        let ticket = tags.iter().find(|d| d.tag == 22923).unwrap();
        assert_eq!(ticket.value_description("1"), Some("Before venue"));
    }
}
