//! Above-average agent performance report.
//!
//! Two-pass aggregation over a single fact snapshot: pass 1 computes the
//! portfolio-wide average price, pass 2 groups the fact rows priced above
//! that threshold by agent. Reading the snapshot once keeps both passes
//! consistent even if a writer commits between invocations.

use super::index_by_key;
use crate::primesquare::schema;
use crate::primesquare::sql::error::SqlError;
use crate::primesquare::sql::execution::aggregation::{mean_of_column, SalesAccumulator};
use crate::primesquare::sql::execution::ordering::RecordSorter;
use crate::primesquare::sql::execution::types::{FieldValue, TableRecord};
use crate::primesquare::table::RelationProvider;
use log::debug;
use std::collections::HashMap;

/// Processor for the aggregate-threshold agent report
pub struct AgentPerformanceProcessor;

impl AgentPerformanceProcessor {
    /// Produce one row per agent holding at least one fact row priced
    /// strictly above the portfolio-wide average.
    ///
    /// Each row carries `agent_id`, `agent_name`, `properties_sold` (count
    /// of qualifying rows), and `avg_sale_price` (mean over the qualifying
    /// rows only). Output is ordered by `avg_sale_price` descending, stable
    /// on ties. When no fact row has a non-null price the threshold is
    /// undefined and the result is empty.
    pub fn process(provider: &dyn RelationProvider) -> Result<Vec<TableRecord>, SqlError> {
        let facts = provider.scan(schema::FACT)?;

        let threshold = match mean_of_column(&facts, "price")? {
            Some(avg) => avg,
            None => return Ok(Vec::new()),
        };
        debug!("portfolio-wide average price: {}", threshold);

        // Group qualifying rows by agent, first-appearance order
        let mut groups: HashMap<i64, SalesAccumulator> = HashMap::new();
        let mut group_order: Vec<i64> = Vec::new();
        for fact in &facts {
            let price = match fact.decimal("price")? {
                Some(price) if price > threshold => price,
                _ => continue,
            };
            let agent_id = fact.integer("agent_id")?;
            groups
                .entry(agent_id)
                .or_insert_with(|| {
                    group_order.push(agent_id);
                    SalesAccumulator::new()
                })
                .add_price(price);
        }

        let agents = index_by_key(provider.scan(schema::AGENT)?, "agent_id")?;

        let mut results = Vec::new();
        for agent_id in group_order {
            let acc = &groups[&agent_id];
            // A tracked group has seen at least one row, so its mean exists
            let avg_sale_price = match acc.average() {
                Some(avg) => avg,
                None => continue,
            };

            let mut row = TableRecord::default();
            row.set("agent_id", FieldValue::Integer(agent_id));
            row.set(
                "agent_name",
                agents
                    .get(&agent_id)
                    .and_then(|agent| agent.field("agent_name"))
                    .cloned()
                    .unwrap_or(FieldValue::Null),
            );
            row.set("properties_sold", FieldValue::Integer(acc.count() as i64));
            row.set("avg_sale_price", FieldValue::Decimal(avg_sale_price));
            results.push(row);
        }

        RecordSorter::sort_desc_nulls_last(&mut results, "avg_sale_price");
        Ok(results)
    }
}
