//! Active listings report.
//!
//! Joins the listing fact table with the property and agent dimensions and
//! returns every active listing enriched with property and agent detail,
//! highest price first.

use super::index_by_key;
use crate::primesquare::schema;
use crate::primesquare::sql::error::SqlError;
use crate::primesquare::sql::execution::ordering::RecordSorter;
use crate::primesquare::sql::execution::types::TableRecord;
use crate::primesquare::table::RelationProvider;

/// Listing status that marks a row as active
pub const ACTIVE_STATUS: &str = "Active";

/// Processor for the active-listings join report
pub struct ActiveListingsProcessor;

impl ActiveListingsProcessor {
    /// Produce one enriched row per fact row with status `Active`.
    ///
    /// Output is ordered by price descending with NULL prices last; rows
    /// with equal prices keep their insertion order. An empty active set
    /// yields an empty result, not an error.
    pub fn process(provider: &dyn RelationProvider) -> Result<Vec<TableRecord>, SqlError> {
        let facts = provider.scan(schema::FACT)?;
        let properties = index_by_key(provider.scan(schema::PROPERTY)?, "property_id")?;
        let agents = index_by_key(provider.scan(schema::AGENT)?, "agent_id")?;

        let mut results = Vec::new();
        for fact in facts {
            if fact.string("status")? != Some(ACTIVE_STATUS) {
                continue;
            }
            let property = match properties.get(&fact.integer("property_id")?) {
                Some(row) => row,
                None => continue,
            };
            let agent = match agents.get(&fact.integer("agent_id")?) {
                Some(row) => row,
                None => continue,
            };

            let mut row = fact;
            for (name, value) in &property.fields {
                row.set(name.clone(), value.clone());
            }
            for (name, value) in &agent.fields {
                row.set(name.clone(), value.clone());
            }
            results.push(row);
        }

        RecordSorter::sort_desc_nulls_last(&mut results, "price");
        Ok(results)
    }
}
