// Analytics SQL module for primesquare
// Query and procedure execution semantics over the listings star schema

pub mod error;
pub mod execution;

// Re-export main API
pub use error::{SqlError, SqlResult};
pub use execution::{FieldValue, TableRecord};
