//! Relation provider interface.
//!
//! The boundary between the analytics core and whatever owns the data. The
//! read path hands out consistent snapshots; the write path is a scoped
//! transaction so a caller can verify the affected-row count before
//! anything becomes visible.

use crate::primesquare::sql::execution::types::{FieldValue, TableRecord};
use crate::primesquare::table::error::TableResult;
use std::collections::HashMap;

/// Predicate over rows, used to select update targets
pub type RowPredicate<'a> = &'a dyn Fn(&TableRecord) -> bool;

/// Row-oriented access to the relations of the star schema
pub trait RelationProvider: Send + Sync {
    /// Read one relation as a snapshot in insertion order.
    ///
    /// The snapshot is stable for the caller's lifetime: later mutations do
    /// not bleed into it, which is what lets multi-pass computations see
    /// consistent data.
    fn scan(&self, relation: &str) -> TableResult<Vec<TableRecord>>;

    /// Open a write transaction on one relation.
    ///
    /// The transaction excludes all other writers (and readers of the same
    /// relation) until it is committed or dropped, so a check-then-act
    /// sequence inside it cannot interleave with a concurrent update.
    fn begin_update<'a>(&'a self, relation: &str)
        -> TableResult<Box<dyn UpdateTransaction + 'a>>;
}

/// A scoped write transaction on a single relation
///
/// Changes are staged, not applied: nothing becomes visible until
/// [`commit`](UpdateTransaction::commit). Dropping the transaction without
/// committing discards every staged change.
pub trait UpdateTransaction {
    /// Stage `changes` on every row matching `predicate`, replacing any
    /// previously staged changes, and return the affected-row count.
    fn update_where(
        &mut self,
        predicate: RowPredicate<'_>,
        changes: &HashMap<String, FieldValue>,
    ) -> TableResult<usize>;

    /// Apply the staged changes atomically.
    fn commit(self: Box<Self>) -> TableResult<()>;
}
