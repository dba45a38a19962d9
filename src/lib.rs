//! # primesquare
//!
//! Star-schema analytics over a real-estate listings dataset: one fact table
//! of listing transactions referencing property, agent, and location
//! dimensions, with a small set of deterministic reports and a guarded
//! single-row status update.
//!
//! ## Features
//!
//! - **Typed row model**: rows are maps of `FieldValue` supporting the SQL
//!   types the schema needs (integers, strings, dates, timestamps, decimals)
//! - **Deterministic reports**: active-listing join, above-average agent
//!   aggregation, top-5-per-city ranking, and a parameterized city/price
//!   search, all with fully specified ordering and tie-break rules
//! - **Guarded mutation**: a transactional status update that verifies row
//!   existence and stamps an audit timestamp from an injected clock
//! - **In-memory relation provider**: insertion-ordered tables behind a
//!   scoped write transaction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use primesquare::{ActiveListingsProcessor, ListingStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ListingStore::new();
//!     // ... load fact/property/agent/location rows ...
//!     let listings = ActiveListingsProcessor::process(&store)?;
//!     for row in &listings {
//!         println!("{:?}", row.field("property_address"));
//!     }
//!     Ok(())
//! }
//! ```

pub mod primesquare;

// Re-export main API at crate root for easy access
pub use primesquare::sql::execution::processors::{
    ActiveListingsProcessor, AgentPerformanceProcessor, CityRankingProcessor, CitySearchProcessor,
    StatusUpdateProcessor,
};
pub use primesquare::sql::execution::{Clock, FieldValue, FixedClock, SystemClock, TableRecord};
pub use primesquare::sql::{SqlError, SqlResult};
pub use primesquare::table::{ListingStore, RelationProvider, TableError, UpdateTransaction};
