/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Typed field values and type coercion.
//!
//! [`coerce`] is a stateless conversion from a raw textual value plus a
//! declared [`FieldType`] to a [`FieldValue`]. Integer-classed types become
//! `i64`, decimal-classed types become [`Decimal`], booleans accept `Y`/`1`
//! and `N`/`0`, and everything else passes through as text.

use crate::error::CoercionError;
use crate::types::FieldType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed value of a decoded field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Textual value (all non-numeric, non-boolean types).
    Text(String),
    /// Integer value.
    Int(i64),
    /// Decimal value (prices, quantities, offsets).
    Decimal(Decimal),
    /// Boolean value.
    Bool(bool),
}

impl FieldValue {
    /// Returns the value as a string slice, if it is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a Decimal, if it is a decimal.
    #[must_use]
    pub const fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a bool, if it is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Int(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", if *v { "Y" } else { "N" }),
        }
    }
}

/// Converts a raw value to its typed form according to the declared type.
///
/// # Arguments
/// * `tag` - The field tag (for error reporting)
/// * `raw` - The raw textual value
/// * `field_type` - The declared semantic type
///
/// # Errors
/// Returns [`CoercionError`] when the raw value is malformed for a numeric
/// or boolean type. Callers decide whether that is fatal; in lenient mode
/// the raw text is retained and a flag recorded instead.
pub fn coerce(tag: u32, raw: &str, field_type: FieldType) -> Result<FieldValue, CoercionError> {
    let fail = || CoercionError {
        tag,
        raw_value: raw.to_string(),
        field_type,
    };

    if field_type.is_integer() {
        return raw.trim().parse::<i64>().map(FieldValue::Int).map_err(|_| fail());
    }

    if field_type.is_decimal() {
        return raw
            .trim()
            .parse::<Decimal>()
            .map(FieldValue::Decimal)
            .map_err(|_| fail());
    }

    if field_type == FieldType::Boolean {
        return match raw {
            "Y" | "1" => Ok(FieldValue::Bool(true)),
            "N" | "0" => Ok(FieldValue::Bool(false)),
            _ => Err(fail()),
        };
    }

    Ok(FieldValue::Text(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn test_coerce_integer() {
        let value = coerce(34, "12345", FieldType::SeqNum).unwrap();
        assert_eq!(value.as_int(), Some(12345));
    }

    #[test]
    fn test_coerce_integer_invalid() {
        let err = coerce(34, "12x45", FieldType::SeqNum).unwrap_err();
        assert_eq!(err.tag, 34);
        assert_eq!(err.raw_value, "12x45");
    }

    #[test]
    fn test_coerce_decimal() {
        let value = coerce(31, "1.0850", FieldType::Price).unwrap();
        assert_eq!(value.as_decimal(), Some(Decimal::from_f64(1.0850).unwrap()));
    }

    #[test]
    fn test_coerce_quantity_one_million() {
        let value = coerce(32, "1000000", FieldType::Qty).unwrap();
        assert_eq!(value.as_decimal(), Some(Decimal::from(1_000_000)));
    }

    #[test]
    fn test_coerce_boolean() {
        assert_eq!(coerce(43, "Y", FieldType::Boolean).unwrap().as_bool(), Some(true));
        assert_eq!(coerce(43, "1", FieldType::Boolean).unwrap().as_bool(), Some(true));
        assert_eq!(coerce(43, "N", FieldType::Boolean).unwrap().as_bool(), Some(false));
        assert_eq!(coerce(43, "0", FieldType::Boolean).unwrap().as_bool(), Some(false));
    }

    #[test]
    fn test_coerce_boolean_unrecognized() {
        assert!(coerce(43, "yes", FieldType::Boolean).is_err());
        assert!(coerce(43, "", FieldType::Boolean).is_err());
    }

    #[test]
    fn test_coerce_text_passthrough() {
        let value = coerce(55, "EUR/USD", FieldType::String).unwrap();
        assert_eq!(value.as_text(), Some("EUR/USD"));

        // Temporal types stay textual.
        let value = coerce(64, "20240117", FieldType::LocalMktDate).unwrap();
        assert_eq!(value.as_text(), Some("20240117"));
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Text("EUR/USD".to_string()).to_string(), "EUR/USD");
        assert_eq!(FieldValue::Int(42).to_string(), "42");
        assert_eq!(FieldValue::Bool(true).to_string(), "Y");
    }
}
