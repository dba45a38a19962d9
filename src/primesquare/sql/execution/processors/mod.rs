//! Report and procedure processors.
//!
//! One processor per operation the engine supports. Each is a stateless
//! request/response unit fed straight from the relation provider;
//! processors never call one another.
//!
//! Joins here are hash joins: dimension relations are indexed by their key
//! once per invocation, then fact rows probe the indexes. Fact rows with a
//! dangling dimension reference are skipped by inner-join semantics, never
//! an error.

pub mod active_listings;
pub mod agent_performance;
pub mod city_ranking;
pub mod city_search;
pub mod status_update;

pub use active_listings::ActiveListingsProcessor;
pub use agent_performance::AgentPerformanceProcessor;
pub use city_ranking::CityRankingProcessor;
pub use city_search::CitySearchProcessor;
pub use status_update::StatusUpdateProcessor;

use crate::primesquare::sql::error::SqlError;
use crate::primesquare::sql::execution::types::TableRecord;
use std::collections::HashMap;

/// Index a dimension snapshot by its integer key field (hash-join build
/// side). On duplicate keys the first row wins, matching insertion order.
pub(crate) fn index_by_key(
    rows: Vec<TableRecord>,
    key_field: &str,
) -> Result<HashMap<i64, TableRecord>, SqlError> {
    let mut index = HashMap::with_capacity(rows.len());
    for row in rows {
        let key = row.integer(key_field)?;
        index.entry(key).or_insert(row);
    }
    Ok(index)
}

/// Copy the named fields from `source` into `target`, skipping fields the
/// source row does not carry
pub(crate) fn copy_fields(target: &mut TableRecord, source: &TableRecord, names: &[&str]) {
    for name in names {
        if let Some(value) = source.field(name) {
            target.set(*name, value.clone());
        }
    }
}
