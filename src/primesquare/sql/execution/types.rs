//! Core data types for the listings analytics engine.
//!
//! This module contains the fundamental data types used throughout the
//! engine:
//! - [`FieldValue`] - The value type system supporting the SQL data types of
//!   the listings star schema
//! - [`TableRecord`] - The row format handed out by the relation provider
//!   and produced by every report

use crate::primesquare::sql::error::SqlError;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A value in a record field
///
/// This enum represents the SQL data types that appear in the listings star
/// schema: identifiers and counts (integers), physical measurements
/// (floats), descriptive attributes (strings), prices (decimals for exact
/// arithmetic), and listing/audit dates.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Boolean value (true/false)
    Boolean(bool),
    /// SQL NULL value
    Null,
    /// Date type (YYYY-MM-DD)
    Date(NaiveDate),
    /// Timestamp type (YYYY-MM-DD HH:MM:SS[.nnn])
    Timestamp(NaiveDateTime),
    /// Decimal type for precise price arithmetic
    Decimal(Decimal),
}

impl FieldValue {
    /// Name of this value's type, for error reporting
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "Integer",
            FieldValue::Float(_) => "Float",
            FieldValue::String(_) => "String",
            FieldValue::Boolean(_) => "Boolean",
            FieldValue::Null => "Null",
            FieldValue::Date(_) => "Date",
            FieldValue::Timestamp(_) => "Timestamp",
            FieldValue::Decimal(_) => "Decimal",
        }
    }

    /// Whether this value is SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Display implementation for FieldValue for clean string formatting
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "NULL"),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Date(d) => write!(f, "{}", d),
            FieldValue::Timestamp(t) => write!(f, "{}", t),
            FieldValue::Decimal(d) => write!(f, "{}", d),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Integer(i) => serializer.serialize_i64(*i),
            FieldValue::Float(f) => serializer.serialize_f64(*f),
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Boolean(b) => serializer.serialize_bool(*b),
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Date(d) => {
                // Format as YYYY-MM-DD
                serializer.serialize_str(&d.format("%Y-%m-%d").to_string())
            }
            FieldValue::Timestamp(ts) => {
                // Format as ISO timestamp with milliseconds
                serializer.serialize_str(&ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
            }
            FieldValue::Decimal(dec) => {
                // Serialize as string for precision
                serializer.serialize_str(&dec.to_string())
            }
        }
    }
}

/// A single row of a relation or report result
///
/// Rows are field maps rather than fixed structs: the provider's relations
/// and the reports' wide output rows share one representation, and joins
/// produce enriched rows by merging field maps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRecord {
    /// Field name to value mapping
    pub fields: HashMap<String, FieldValue>,
}

impl TableRecord {
    /// Create a record from a field map
    pub fn new(fields: HashMap<String, FieldValue>) -> Self {
        Self { fields }
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Set a field, replacing any existing value
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Extract a required integer field
    ///
    /// Missing or NULL values are type errors here: callers use this for
    /// identity and foreign-key columns, which the schema never leaves null.
    pub fn integer(&self, name: &str) -> Result<i64, SqlError> {
        match self.fields.get(name) {
            Some(FieldValue::Integer(i)) => Ok(*i),
            Some(other) => Err(SqlError::type_error(
                "Integer",
                other.type_name(),
                Some(other.to_string()),
            )),
            None => Err(SqlError::execution_error(
                format!("missing required field '{}'", name),
                None,
            )),
        }
    }

    /// Extract a nullable decimal field
    ///
    /// NULL and missing both map to `None`; any other non-decimal value is a
    /// type error.
    pub fn decimal(&self, name: &str) -> Result<Option<Decimal>, SqlError> {
        match self.fields.get(name) {
            Some(FieldValue::Decimal(d)) => Ok(Some(*d)),
            Some(FieldValue::Null) | None => Ok(None),
            Some(other) => Err(SqlError::type_error(
                "Decimal",
                other.type_name(),
                Some(other.to_string()),
            )),
        }
    }

    /// Extract a nullable string field
    pub fn string(&self, name: &str) -> Result<Option<&str>, SqlError> {
        match self.fields.get(name) {
            Some(FieldValue::String(s)) => Ok(Some(s.as_str())),
            Some(FieldValue::Null) | None => Ok(None),
            Some(other) => Err(SqlError::type_error(
                "String",
                other.type_name(),
                Some(other.to_string()),
            )),
        }
    }
}

impl Serialize for TableRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize fields in sorted key order for stable output
        let mut sorted: Vec<(&String, &FieldValue)> = self.fields.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        let mut map = serializer.serialize_map(Some(sorted.len()))?;
        for (k, v) in sorted {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn record(fields: Vec<(&str, FieldValue)>) -> TableRecord {
        TableRecord::new(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_integer_accessor() {
        let rec = record(vec![("fact_id", FieldValue::Integer(7))]);
        assert_eq!(rec.integer("fact_id").unwrap(), 7);
        assert!(rec.integer("missing").is_err());
    }

    #[test]
    fn test_decimal_accessor_null_and_missing() {
        let rec = record(vec![
            ("price", FieldValue::Null),
            ("bedrooms", FieldValue::Integer(3)),
        ]);
        assert_eq!(rec.decimal("price").unwrap(), None);
        assert_eq!(rec.decimal("absent").unwrap(), None);
        assert!(rec.decimal("bedrooms").is_err());
    }

    #[test]
    fn test_serialize_decimal_as_string() {
        let rec = record(vec![(
            "price",
            FieldValue::Decimal(Decimal::new(249950, 2)),
        )]);
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"price":"2499.50"}"#);
    }
}
