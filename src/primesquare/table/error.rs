//! Relation-provider error types.
//!
//! Read-path failures surface to the analytics layer unmodified; the core
//! introduces no read-side error kinds of its own.

/// Error type for relation provider operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// The named relation is not part of the star schema
    #[error("Unknown relation '{relation}'. Available relations: {available:?}")]
    UnknownRelation {
        relation: String,
        available: Vec<String>,
    },

    /// A row or staged change does not conform to the relation schema
    #[error("Schema violation in relation '{relation}', field '{field}': {message}")]
    SchemaViolation {
        relation: String,
        field: String,
        message: String,
    },
}

/// Result type alias for provider operations
pub type TableResult<T> = Result<T, TableError>;
