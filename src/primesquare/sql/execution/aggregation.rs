//! Aggregation utilities for the agent-performance report.
//!
//! Price aggregates use `Decimal` arithmetic throughout so the global
//! threshold and the per-group means are exact and deterministic.

use crate::primesquare::sql::error::SqlError;
use crate::primesquare::sql::execution::types::TableRecord;
use rust_decimal::Decimal;

/// Accumulator for a single group's price aggregates
///
/// Tracks the running count and sum of qualifying prices for one group,
/// from which the group's mean is derived. Groups come into existence only
/// when their first row is added, so an accumulator never represents an
/// empty group.
#[derive(Debug, Clone, Default)]
pub struct SalesAccumulator {
    count: u64,
    sum: Decimal,
}

impl SalesAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one price observation
    pub fn add_price(&mut self, price: Decimal) {
        self.count += 1;
        self.sum += price;
    }

    /// Number of observations in this group
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean of the observations, or `None` for an accumulator that has seen
    /// no rows
    pub fn average(&self) -> Option<Decimal> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / Decimal::from(self.count))
        }
    }
}

/// Arithmetic mean of a nullable decimal column over a record snapshot
///
/// NULL and missing values are excluded from both the sum and the count.
/// Returns `None` when no non-null values exist; the caller must treat the
/// aggregate as undefined rather than dividing by zero.
pub fn mean_of_column(
    records: &[TableRecord],
    field: &str,
) -> Result<Option<Decimal>, SqlError> {
    let mut acc = SalesAccumulator::new();
    for record in records {
        if let Some(price) = record.decimal(field)? {
            acc.add_price(price);
        }
    }
    Ok(acc.average())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primesquare::sql::execution::types::FieldValue;
    use std::collections::HashMap;

    fn priced(price: Option<i64>) -> TableRecord {
        let mut fields = HashMap::new();
        fields.insert(
            "price".to_string(),
            match price {
                Some(p) => FieldValue::Decimal(Decimal::from(p)),
                None => FieldValue::Null,
            },
        );
        TableRecord::new(fields)
    }

    #[test]
    fn test_mean_excludes_nulls() {
        let records = vec![priced(Some(100)), priced(None), priced(Some(200))];
        let mean = mean_of_column(&records, "price").unwrap();
        assert_eq!(mean, Some(Decimal::from(150)));
    }

    #[test]
    fn test_mean_of_all_nulls_is_undefined() {
        let records = vec![priced(None), priced(None)];
        assert_eq!(mean_of_column(&records, "price").unwrap(), None);
    }

    #[test]
    fn test_accumulator_average() {
        let mut acc = SalesAccumulator::new();
        assert_eq!(acc.average(), None);
        acc.add_price(Decimal::from(100));
        acc.add_price(Decimal::from(200));
        assert_eq!(acc.count(), 2);
        assert_eq!(acc.average(), Some(Decimal::from(150)));
    }
}
