//! Parameterized city and price-range search.
//!
//! Implements `get_properties_by_city_price`: joins fact rows to their
//! property and location dimensions, filters by exact city match and an
//! inclusive price range, and returns wide rows of property detail plus
//! price, status, and location.

use super::{copy_fields, index_by_key};
use crate::primesquare::schema;
use crate::primesquare::sql::error::SqlError;
use crate::primesquare::sql::execution::ordering::RecordSorter;
use crate::primesquare::sql::execution::types::TableRecord;
use crate::primesquare::table::RelationProvider;
use rust_decimal::Decimal;

/// Property attributes projected into every search result row
const PROPERTY_FIELDS: &[&str] = &[
    "property_code",
    "property_address",
    "property_type",
    "bedrooms",
    "bathrooms",
    "square_footage",
    "year_built",
    "lot_size",
];

/// Processor for the parameterized city/price-range search
pub struct CitySearchProcessor;

impl CitySearchProcessor {
    /// Search listings by exact city and inclusive price range.
    ///
    /// City comparison is case-sensitive byte equality. Both bounds are
    /// inclusive; a NULL price never matches. Callers are expected to pass
    /// `min_price <= max_price`, but an inverted range is not an error:
    /// it simply matches nothing. Output is ordered by price descending,
    /// stable on ties.
    pub fn process(
        provider: &dyn RelationProvider,
        city: &str,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Result<Vec<TableRecord>, SqlError> {
        let facts = provider.scan(schema::FACT)?;
        let properties = index_by_key(provider.scan(schema::PROPERTY)?, "property_id")?;
        let locations = index_by_key(provider.scan(schema::LOCATION)?, "location_id")?;

        let mut results = Vec::new();
        for fact in &facts {
            match fact.decimal("price")? {
                Some(price) if price >= min_price && price <= max_price => {}
                _ => continue,
            }
            let location = match locations.get(&fact.integer("location_id")?) {
                Some(row) => row,
                None => continue,
            };
            if location.string("city")? != Some(city) {
                continue;
            }
            let property = match properties.get(&fact.integer("property_id")?) {
                Some(row) => row,
                None => continue,
            };

            let mut row = TableRecord::default();
            copy_fields(&mut row, fact, &["fact_id", "price", "status"]);
            copy_fields(&mut row, property, PROPERTY_FIELDS);
            copy_fields(&mut row, location, &["city", "state", "zip_code"]);
            results.push(row);
        }

        RecordSorter::sort_desc_nulls_last(&mut results, "price");
        Ok(results)
    }
}
