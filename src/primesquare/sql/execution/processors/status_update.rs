//! Guarded listing status update.
//!
//! Implements `update_property_status`: the only writer in the system.
//! The existence check and the write happen inside one provider
//! transaction, so a concurrent update of the same row cannot slip between
//! them, and nothing is committed unless exactly one row was affected.

use crate::primesquare::schema;
use crate::primesquare::sql::error::SqlError;
use crate::primesquare::sql::execution::clock::Clock;
use crate::primesquare::sql::execution::types::FieldValue;
use crate::primesquare::table::RelationProvider;
use log::{info, warn};
use std::collections::HashMap;

/// Processor for the guarded status update procedure
pub struct StatusUpdateProcessor;

impl StatusUpdateProcessor {
    /// Update one fact row's `status` and stamp `last_seen_date` from the
    /// injected clock, atomically.
    ///
    /// Fails with [`SqlError::RowNotFound`] when `fact_id` matches no row
    /// and with [`SqlError::UniquenessViolation`] when it matches more than
    /// one; in both cases the transaction is discarded and no field
    /// changes. Re-invoking with the same status succeeds and leaves the
    /// row in the same terminal state, with a fresh audit timestamp.
    pub fn process(
        provider: &dyn RelationProvider,
        fact_id: i64,
        new_status: &str,
        clock: &dyn Clock,
    ) -> Result<(), SqlError> {
        let mut tx = provider.begin_update(schema::FACT)?;

        let mut changes = HashMap::new();
        changes.insert(
            "status".to_string(),
            FieldValue::String(new_status.to_string()),
        );
        changes.insert(
            "last_seen_date".to_string(),
            FieldValue::Timestamp(clock.now()),
        );

        let affected = tx.update_where(
            &|row| row.integer("fact_id").map(|id| id == fact_id).unwrap_or(false),
            &changes,
        )?;

        match affected {
            0 => Err(SqlError::row_not_found(schema::FACT, fact_id)),
            1 => {
                tx.commit()?;
                info!("fact row {} status set to '{}'", fact_id, new_status);
                Ok(())
            }
            matched => {
                warn!(
                    "fact_id {} matched {} rows; refusing to update",
                    fact_id, matched
                );
                Err(SqlError::uniqueness_violation(schema::FACT, fact_id, matched))
            }
        }
    }
}
