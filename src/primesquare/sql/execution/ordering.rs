//! Result-set ordering.
//!
//! Implements value comparison and the stable sorts the reports require.
//! Every report's output order is part of its contract, so comparison and
//! tie-break behavior live here in one place: `Vec::sort_by` is stable,
//! which preserves insertion order between equal keys.

use crate::primesquare::sql::error::SqlError;
use crate::primesquare::sql::execution::types::{FieldValue, TableRecord};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Sorting utilities for report result sets
pub struct RecordSorter;

impl RecordSorter {
    /// Sort records by one field, descending, NULL (or missing) values last.
    ///
    /// Ties and incomparable pairs keep their relative input order.
    pub fn sort_desc_nulls_last(records: &mut [TableRecord], field: &str) {
        records.sort_by(|a, b| {
            let left = a.field(field).unwrap_or(&FieldValue::Null);
            let right = b.field(field).unwrap_or(&FieldValue::Null);
            match (left.is_null(), right.is_null()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => compare_values(left, right)
                    .map(Ordering::reverse)
                    .unwrap_or(Ordering::Equal),
            }
        });
    }
}

/// Compare two FieldValues for ordering
///
/// NULL sorts smallest; numeric types compare across Integer, Float, and
/// Decimal. Incomparable type pairs are an error.
pub fn compare_values(left: &FieldValue, right: &FieldValue) -> Result<Ordering, SqlError> {
    use FieldValue::*;

    match (left, right) {
        // Handle NULL values (NULL is smallest)
        (Null, Null) => Ok(Ordering::Equal),
        (Null, _) => Ok(Ordering::Less),
        (_, Null) => Ok(Ordering::Greater),

        // Same-type comparisons
        (Integer(a), Integer(b)) => Ok(a.cmp(b)),
        (Float(a), Float(b)) => Ok(compare_f64(*a, *b)),
        (String(a), String(b)) => Ok(a.cmp(b)),
        (Boolean(a), Boolean(b)) => Ok(a.cmp(b)),
        (Date(a), Date(b)) => Ok(a.cmp(b)),
        (Timestamp(a), Timestamp(b)) => Ok(a.cmp(b)),
        (Decimal(a), Decimal(b)) => Ok(a.cmp(b)),

        // Numeric type coercion for comparison
        (Integer(a), Float(b)) => Ok(compare_f64(*a as f64, *b)),
        (Float(a), Integer(b)) => Ok(compare_f64(*a, *b as f64)),
        (Integer(a), Decimal(b)) => Ok(rust_decimal::Decimal::from(*a).cmp(b)),
        (Decimal(a), Integer(b)) => Ok(a.cmp(&rust_decimal::Decimal::from(*b))),
        (Float(a), Decimal(b)) => Ok(compare_f64(*a, b.to_f64().unwrap_or(f64::NAN))),
        (Decimal(a), Float(b)) => Ok(compare_f64(a.to_f64().unwrap_or(f64::NAN), *b)),

        // Incomparable types
        _ => Err(SqlError::type_error(
            left.type_name(),
            right.type_name(),
            Some(right.to_string()),
        )),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn priced(id: i64, price: FieldValue) -> TableRecord {
        let mut fields = HashMap::new();
        fields.insert("fact_id".to_string(), FieldValue::Integer(id));
        fields.insert("price".to_string(), price);
        TableRecord::new(fields)
    }

    fn ids(records: &[TableRecord]) -> Vec<i64> {
        records.iter().map(|r| r.integer("fact_id").unwrap()).collect()
    }

    #[test]
    fn test_sort_desc_nulls_last() {
        let mut records = vec![
            priced(1, FieldValue::Null),
            priced(2, FieldValue::Decimal(Decimal::new(100, 0))),
            priced(3, FieldValue::Decimal(Decimal::new(300, 0))),
            priced(4, FieldValue::Null),
            priced(5, FieldValue::Decimal(Decimal::new(200, 0))),
        ];
        RecordSorter::sort_desc_nulls_last(&mut records, "price");
        assert_eq!(ids(&records), vec![3, 5, 2, 1, 4]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut records = vec![
            priced(10, FieldValue::Decimal(Decimal::new(500, 0))),
            priced(11, FieldValue::Decimal(Decimal::new(500, 0))),
            priced(12, FieldValue::Decimal(Decimal::new(500, 0))),
        ];
        RecordSorter::sort_desc_nulls_last(&mut records, "price");
        assert_eq!(ids(&records), vec![10, 11, 12]);
    }

    #[test]
    fn test_compare_values_cross_numeric() {
        assert_eq!(
            compare_values(
                &FieldValue::Integer(3),
                &FieldValue::Decimal(Decimal::new(25, 1))
            )
            .unwrap(),
            Ordering::Greater
        );
        assert!(compare_values(
            &FieldValue::String("a".to_string()),
            &FieldValue::Integer(1)
        )
        .is_err());
    }
}
