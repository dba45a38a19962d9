//! Top-priced properties per city.
//!
//! Partitions priced fact rows by their resolved city and keeps the five
//! highest-priced per partition, with row-number rank semantics: equal
//! prices get distinct sequential ranks in insertion order. Partitions are
//! bounded selections, not full sorts, so memory per city stays at the
//! retained five rows.

use super::{copy_fields, index_by_key};
use crate::primesquare::schema;
use crate::primesquare::sql::error::SqlError;
use crate::primesquare::sql::execution::ranking::BoundedTopK;
use crate::primesquare::sql::execution::types::{FieldValue, TableRecord};
use crate::primesquare::table::RelationProvider;
use std::collections::BTreeMap;

/// Rows retained per city partition
pub const TOP_PER_CITY: usize = 5;

/// Processor for the per-city price ranking report
pub struct CityRankingProcessor;

impl CityRankingProcessor {
    /// Rank properties within each city by price descending and keep the
    /// top five per city.
    ///
    /// Rows with a NULL price or a NULL (or unresolvable) city are
    /// excluded. Output is ordered by city ascending, then rank ascending
    /// (price descending, insertion order between equal prices); each row
    /// carries its rank in the `rank` field, starting at 1 per city.
    pub fn process(provider: &dyn RelationProvider) -> Result<Vec<TableRecord>, SqlError> {
        let facts = provider.scan(schema::FACT)?;
        let properties = index_by_key(provider.scan(schema::PROPERTY)?, "property_id")?;
        let locations = index_by_key(provider.scan(schema::LOCATION)?, "location_id")?;

        // BTreeMap keys give the city-ascending output order for free
        let mut partitions: BTreeMap<String, BoundedTopK> = BTreeMap::new();

        for (seq, fact) in facts.iter().enumerate() {
            let price = match fact.decimal("price")? {
                Some(price) => price,
                None => continue,
            };
            let property = match properties.get(&fact.integer("property_id")?) {
                Some(row) => row,
                None => continue,
            };
            let location = match locations.get(&fact.integer("location_id")?) {
                Some(row) => row,
                None => continue,
            };
            let city = match location.string("city")? {
                Some(city) => city.to_string(),
                None => continue,
            };

            let mut row = fact.clone();
            for (name, value) in &property.fields {
                row.set(name.clone(), value.clone());
            }
            copy_fields(&mut row, location, &["city", "state", "zip_code"]);

            partitions
                .entry(city)
                .or_insert_with(|| BoundedTopK::new(TOP_PER_CITY))
                .offer(price, seq, row);
        }

        let mut results = Vec::new();
        for (_city, topk) in partitions {
            for (rank, mut row) in topk.into_ranked() {
                row.set("rank", FieldValue::Integer(rank as i64));
                results.push(row);
            }
        }
        Ok(results)
    }
}
