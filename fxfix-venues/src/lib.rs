/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! # FxFix Venues
//!
//! Venue layer for the FxFix decoder: detection by SenderCompID, per-venue
//! custom tag tiers, and high-level trade extraction.
//!
//! Venues consume decoded messages through the read-only message contract
//! and never mutate them; venue-specific decoding differences are expressed
//! as dictionary tiers applied at parse time.

pub mod bloomberg;
pub mod fxgo;
pub mod handler;
pub mod registry;
pub mod smart_trade;
pub mod three_sixty_t;
pub mod trade;

pub use bloomberg::BloombergDorVenue;
pub use fxgo::FxgoVenue;
pub use handler::VenueHandler;
pub use registry::VenueRegistry;
pub use smart_trade::SmartTradeVenue;
pub use three_sixty_t::ThreeSixtyTVenue;
pub use trade::TradeRecord;
