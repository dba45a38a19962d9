//! Insertion-ordered in-memory relation store.
//!
//! Reference implementation of [`RelationProvider`] backing tests and the
//! CLI. Rows live in per-relation vectors behind `Arc<RwLock<...>>`:
//! vectors preserve insertion order, which the reports' tie-break rules
//! depend on, and the write lock held by an open update transaction is what
//! makes the guarded update's check-then-act atomic.

use crate::primesquare::schema::{star_schema, RelationSchema};
use crate::primesquare::sql::execution::types::{FieldValue, TableRecord};
use crate::primesquare::table::error::{TableError, TableResult};
use crate::primesquare::table::provider::{RelationProvider, RowPredicate, UpdateTransaction};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

/// In-memory store for the listings star schema
#[derive(Clone)]
pub struct ListingStore {
    /// Per-relation row storage, insertion-ordered
    relations: HashMap<&'static str, Arc<RwLock<Vec<TableRecord>>>>,
    /// Relation schemas used to validate writes
    schemas: HashMap<&'static str, RelationSchema>,
}

impl ListingStore {
    /// Create an empty store holding the four star-schema relations
    pub fn new() -> Self {
        let mut relations = HashMap::new();
        let mut schemas = HashMap::new();
        for schema in star_schema() {
            relations.insert(schema.name, Arc::new(RwLock::new(Vec::new())));
            schemas.insert(schema.name, schema);
        }
        Self { relations, schemas }
    }

    /// Insert a row, validating it against the relation schema
    pub fn insert(&self, relation: &str, record: TableRecord) -> TableResult<()> {
        let schema = self
            .schemas
            .get(relation)
            .ok_or_else(|| self.unknown_relation(relation))?;
        schema.validate(&record)?;

        let rows = self.rows(relation)?;
        let mut rows = rows.write().unwrap();
        rows.push(record);
        debug!("inserted row into '{}' ({} rows total)", relation, rows.len());
        Ok(())
    }

    /// Number of rows currently in a relation
    pub fn row_count(&self, relation: &str) -> TableResult<usize> {
        Ok(self.rows(relation)?.read().unwrap().len())
    }

    fn rows(&self, relation: &str) -> TableResult<&Arc<RwLock<Vec<TableRecord>>>> {
        self.relations
            .get(relation)
            .ok_or_else(|| self.unknown_relation(relation))
    }

    fn unknown_relation(&self, relation: &str) -> TableError {
        let mut available: Vec<String> =
            self.schemas.keys().map(|name| name.to_string()).collect();
        available.sort();
        TableError::UnknownRelation {
            relation: relation.to_string(),
            available,
        }
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RelationProvider for ListingStore {
    fn scan(&self, relation: &str) -> TableResult<Vec<TableRecord>> {
        let rows = self.rows(relation)?.read().unwrap();
        debug!("scan '{}': {} rows", relation, rows.len());
        Ok(rows.clone())
    }

    fn begin_update<'a>(
        &'a self,
        relation: &str,
    ) -> TableResult<Box<dyn UpdateTransaction + 'a>> {
        let schema = self
            .schemas
            .get(relation)
            .ok_or_else(|| self.unknown_relation(relation))?
            .clone();
        let guard = self.rows(relation)?.write().unwrap();
        Ok(Box::new(StoreUpdateTx {
            schema,
            guard,
            staged: Vec::new(),
        }))
    }
}

/// Write transaction over one relation of a [`ListingStore`]
///
/// Holds the relation's write lock for its whole lifetime; staged changes
/// are applied on commit and thrown away on drop.
struct StoreUpdateTx<'a> {
    schema: RelationSchema,
    guard: RwLockWriteGuard<'a, Vec<TableRecord>>,
    staged: Vec<(usize, HashMap<String, FieldValue>)>,
}

impl StoreUpdateTx<'_> {
    fn validate_changes(&self, changes: &HashMap<String, FieldValue>) -> TableResult<()> {
        for (field, value) in changes {
            let def = self
                .schema
                .fields
                .iter()
                .find(|def| def.name == field.as_str())
                .ok_or_else(|| TableError::SchemaViolation {
                    relation: self.schema.name.to_string(),
                    field: field.clone(),
                    message: "field is not declared in the relation schema".to_string(),
                })?;
            let type_ok = match value {
                FieldValue::Null => def.nullable,
                other => def.field_type.matches(other),
            };
            if !type_ok {
                return Err(TableError::SchemaViolation {
                    relation: self.schema.name.to_string(),
                    field: field.clone(),
                    message: format!(
                        "expected {}, got {}",
                        def.field_type.name(),
                        value.type_name()
                    ),
                });
            }
        }
        Ok(())
    }
}

impl UpdateTransaction for StoreUpdateTx<'_> {
    fn update_where(
        &mut self,
        predicate: RowPredicate<'_>,
        changes: &HashMap<String, FieldValue>,
    ) -> TableResult<usize> {
        self.validate_changes(changes)?;
        self.staged.clear();
        for (index, row) in self.guard.iter().enumerate() {
            if predicate(row) {
                self.staged.push((index, changes.clone()));
            }
        }
        Ok(self.staged.len())
    }

    fn commit(mut self: Box<Self>) -> TableResult<()> {
        let affected = self.staged.len();
        for (index, changes) in std::mem::take(&mut self.staged) {
            for (field, value) in changes {
                self.guard[index].set(field, value);
            }
        }
        info!(
            "committed update on '{}': {} rows affected",
            self.schema.name, affected
        );
        Ok(())
    }
}
