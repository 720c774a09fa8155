/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! # FxFix Dictionary
//!
//! Tiered tag dictionary and repeating-group schemas for the FxFix decoder.
//!
//! This crate provides:
//! - **Schema definitions**: [`FieldDef`] and the layered [`TagDictionary`]
//! - **Built-in tables**: the FIX 4.4 base tier and the curated FX overlay
//! - **Group schemas**: [`GroupSchema`] and the standard [`GroupRegistry`]
//!
//! Dictionaries and registries are constructed once, are immutable, and can
//! be queried concurrently from any number of parse operations.

pub mod fix44;
pub mod fx;
pub mod groups;
pub mod schema;

pub use groups::{GroupRegistry, GroupSchema};
pub use schema::{FieldDef, TagDictionary, TagDictionaryBuilder};
