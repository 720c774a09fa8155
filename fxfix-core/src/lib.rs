/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! # FxFix Core
//!
//! Core types, field models, and error definitions for the FxFix FX message
//! decoder.
//!
//! This crate provides the fundamental building blocks used across all FxFix
//! crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field models**: [`RawField`] tokens and dictionary-decorated [`Field`]s
//! - **Typed values**: [`FieldValue`] and the stateless [`coerce`] conversion
//! - **Message model**: [`FixMessage`], repeating-group trees, parse flags
//!
//! ## Immutability
//!
//! Dictionaries, schemas, and assembled messages are read-only after
//! construction, so they can be shared freely across concurrent parses;
//! annotations produce derived copies instead of mutating in place.

pub mod error;
pub mod field;
pub mod message;
pub mod types;
pub mod value;

pub use error::{CoercionError, FxError, ParseError, Result};
pub use field::{Field, RawField, UNKNOWN_FIELD_NAME};
pub use message::{
    FieldDocument, FixMessage, GroupDocument, GroupEntry, GroupInstance, MessageDocument,
    MessageNode, NodeDocument, ParseFlag,
};
pub use types::FieldType;
pub use value::{FieldValue, coerce};
