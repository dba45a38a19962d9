/*!
# SQL Error Handling

Error types for the analytics query and procedure layer.

## Error Categories

- **Row Errors**: a guarded mutation targeted a row that does not exist
- **Invariant Errors**: a supposedly-unique key matched more than one row
- **Type Errors**: a relation handed the core a value of an unexpected type
- **Execution Errors**: residual runtime failures during query execution
- **Provider Errors**: failures surfaced by the relation provider, passed
  through unmodified

The read path introduces no error kinds of its own: empty result sets and
inverted search ranges are valid empty answers, not failures. The only
core-introduced errors are raised by the guarded update path, which aborts
its enclosing transaction.

Errors implement the standard Rust error traits (`std::error::Error`,
`Display`, `Debug`) for seamless integration with error handling libraries.
*/

use crate::primesquare::table::TableError;
use std::fmt;

/// Error types for analytics query and procedure execution.
///
/// Each variant carries the context relevant to its error class so callers
/// can report precisely what failed and on which row.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlError {
    /// A guarded mutation matched no row.
    ///
    /// Raised before any commit point; the enclosing transaction is
    /// discarded and no write becomes visible.
    RowNotFound {
        /// Relation the mutation targeted
        relation: String,
        /// Key value that matched nothing
        key: i64,
    },

    /// A unique key matched more than one row.
    ///
    /// This is an internal-consistency failure, distinct from not-found:
    /// it is never resolved by silently updating the first match.
    UniquenessViolation {
        /// Relation whose uniqueness invariant is broken
        relation: String,
        /// Key value that matched multiple rows
        key: i64,
        /// Number of rows that matched
        matched: usize,
    },

    /// Data type conversion and validation errors.
    ///
    /// Occurs when a relation contains a value of an unexpected type for a
    /// column the core depends on (e.g. a non-decimal price).
    TypeError {
        /// Expected data type
        expected: String,
        /// Actual data type encountered
        actual: String,
        /// The value that caused the type error, if available
        value: Option<String>,
    },

    /// Runtime errors during query execution.
    ExecutionError {
        /// Description of the execution failure
        message: String,
        /// Operation that caused the error, if available
        query: Option<String>,
    },

    /// Relation provider failure, passed through unmodified.
    ProviderError(TableError),
}

impl fmt::Display for SqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlError::RowNotFound { relation, key } => {
                write!(f, "No row in relation '{}' matched key {}", relation, key)
            }
            SqlError::UniquenessViolation {
                relation,
                key,
                matched,
            } => {
                write!(
                    f,
                    "Uniqueness violation in relation '{}': key {} matched {} rows, expected exactly 1",
                    relation, key, matched
                )
            }
            SqlError::TypeError {
                expected,
                actual,
                value,
            } => {
                if let Some(val) = value {
                    write!(
                        f,
                        "Type error: expected {}, got {} for value '{}'",
                        expected, actual, val
                    )
                } else {
                    write!(f, "Type error: expected {}, got {}", expected, actual)
                }
            }
            SqlError::ExecutionError { message, query } => {
                if let Some(q) = query {
                    write!(f, "Query execution error in '{}': {}", q, message)
                } else {
                    write!(f, "Query execution error: {}", message)
                }
            }
            SqlError::ProviderError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SqlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SqlError::ProviderError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TableError> for SqlError {
    fn from(err: TableError) -> Self {
        SqlError::ProviderError(err)
    }
}

impl SqlError {
    /// Create a row-not-found error for a guarded mutation
    pub fn row_not_found(relation: impl Into<String>, key: i64) -> Self {
        SqlError::RowNotFound {
            relation: relation.into(),
            key,
        }
    }

    /// Create a uniqueness-violation error
    pub fn uniqueness_violation(relation: impl Into<String>, key: i64, matched: usize) -> Self {
        SqlError::UniquenessViolation {
            relation: relation.into(),
            key,
            matched,
        }
    }

    /// Create a type error
    pub fn type_error(
        expected: impl Into<String>,
        actual: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        SqlError::TypeError {
            expected: expected.into(),
            actual: actual.into(),
            value,
        }
    }

    /// Create an execution error
    pub fn execution_error(message: impl Into<String>, query: Option<String>) -> Self {
        SqlError::ExecutionError {
            message: message.into(),
            query,
        }
    }
}

/// Result type for analytics operations
pub type SqlResult<T> = Result<T, SqlError>;
