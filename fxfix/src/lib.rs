/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! # FxFix
//!
//! A FIX 4.4 FX message decoder and inspector for Rust.
//!
//! FxFix decodes tag=value trading messages into a structured, queryable
//! form, validates their structural and numeric integrity with configurable
//! strictness, and resolves every tag through a three-tier, override-aware
//! dictionary (FIX 4.4 base → curated FX overlay → venue extensions).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fxfix::prelude::*;
//!
//! let inspector = Inspector::lenient();
//! let inspection = inspector.inspect(
//!     "8=FIX.4.4|9=100|35=8|49=FXGO|56=CLIENT|55=EUR/USD|54=1|32=1000000|31=1.0850|10=123|",
//! )?;
//! println!("{}", inspection.message.to_human_readable());
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Field models, typed values, message tree, errors
//! - [`dictionary`]: Tiered tag dictionary and repeating-group schemas
//! - [`tagvalue`]: Tokenizer, validator, group parser, and [`FixParser`]
//! - [`venues`]: Venue detection, custom tag tiers, trade extraction
//! - [`products`]: FX product-type classification
//!
//! [`FixParser`]: tagvalue::FixParser

pub mod core {
    //! Field models, typed values, message tree, and error definitions.
    pub use fxfix_core::*;
}

pub mod dictionary {
    //! Tiered tag dictionary and repeating-group schemas.
    pub use fxfix_dictionary::*;
}

pub mod tagvalue {
    //! Tokenizing, validation, group parsing, and message assembly.
    pub use fxfix_tagvalue::*;
}

pub mod venues {
    //! Venue detection, custom tag tiers, and trade extraction.
    pub use fxfix_venues::*;
}

pub mod products {
    //! FX product-type classification.
    pub use fxfix_products::*;
}

pub mod inspect;

pub use inspect::{Inspection, Inspector};

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fxfix_core::{
        CoercionError, Field, FieldType, FieldValue, FixMessage, FxError, GroupEntry,
        GroupInstance, MessageNode, ParseError, ParseFlag, RawField, Result,
    };

    // Dictionary
    pub use fxfix_dictionary::{FieldDef, GroupRegistry, GroupSchema, TagDictionary};

    // Tag-value decoding
    pub use fxfix_tagvalue::{FixParser, GroupParser, ParserConfig};

    // Venues
    pub use fxfix_venues::{TradeRecord, VenueHandler, VenueRegistry};

    // Products
    pub use fxfix_products::{ProductDetails, ProductHandler, ProductRegistry, ProductType};

    // Inspection facade
    pub use crate::inspect::{Inspection, Inspector};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let config = ParserConfig::default();
        assert!(config.strict_checksum);
        let dictionary = TagDictionary::standard();
        assert_eq!(dictionary.name(35), "MsgType");
        assert_eq!(ProductType::Swap.as_str(), "Swap");
    }
}
