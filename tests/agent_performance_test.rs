mod common;

use common::*;
use primesquare::{AgentPerformanceProcessor, ListingStore};
use rust_decimal::Decimal;

fn store_with_dimensions() -> ListingStore {
    let store = ListingStore::new();
    insert_location(&store, 1, "San Antonio");
    insert_agent(&store, 1, "Maria Delgado");
    insert_agent(&store, 2, "James Okafor");
    for id in 1..=5 {
        insert_property(&store, id);
    }
    store
}

#[test]
fn only_agents_above_portfolio_average_appear() {
    let store = store_with_dimensions();
    // Global average = (100 + 200 + 50) / 3 = 116.67; only the 200 qualifies
    insert_fact(&store, 1, 1, 1, 1, Some(100), "Active");
    insert_fact(&store, 2, 2, 1, 1, Some(200), "Active");
    insert_fact(&store, 3, 3, 2, 1, Some(50), "Active");

    let rows = AgentPerformanceProcessor::process(&store).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].integer("agent_id").unwrap(), 1);
    assert_eq!(rows[0].integer("properties_sold").unwrap(), 1);
    assert_eq!(
        rows[0].decimal("avg_sale_price").unwrap(),
        Some(Decimal::from(200))
    );
    assert_eq!(rows[0].string("agent_name").unwrap(), Some("Maria Delgado"));
}

#[test]
fn all_null_prices_yield_empty_result_not_a_failure() {
    let store = store_with_dimensions();
    insert_fact(&store, 1, 1, 1, 1, None, "Active");
    insert_fact(&store, 2, 2, 2, 1, None, "Active");

    let rows = AgentPerformanceProcessor::process(&store).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn empty_fact_table_yields_empty_result() {
    let store = store_with_dimensions();
    let rows = AgentPerformanceProcessor::process(&store).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn output_is_ordered_by_avg_sale_price_descending() {
    let store = store_with_dimensions();
    // Global average = (100 + 400 + 100 + 600) / 4 = 300
    insert_fact(&store, 1, 1, 1, 1, Some(100), "Active");
    insert_fact(&store, 2, 2, 1, 1, Some(400), "Active");
    insert_fact(&store, 3, 3, 2, 1, Some(100), "Active");
    insert_fact(&store, 4, 4, 2, 1, Some(600), "Active");

    let rows = AgentPerformanceProcessor::process(&store).unwrap();
    assert_eq!(integer_column(&rows, "agent_id"), vec![2, 1]);
    assert_eq!(
        decimal_column(&rows, "avg_sale_price"),
        vec![Some(Decimal::from(600)), Some(Decimal::from(400))]
    );
}

#[test]
fn group_average_covers_qualifying_rows_only() {
    let store = store_with_dimensions();
    // Global average = (100 + 500 + 700 + 100 + 100) / 5 = 300
    insert_fact(&store, 1, 1, 1, 1, Some(100), "Active");
    insert_fact(&store, 2, 2, 1, 1, Some(500), "Active");
    insert_fact(&store, 3, 3, 1, 1, Some(700), "Active");
    insert_fact(&store, 4, 4, 2, 1, Some(100), "Active");
    insert_fact(&store, 5, 5, 2, 1, Some(100), "Active");

    let rows = AgentPerformanceProcessor::process(&store).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].integer("agent_id").unwrap(), 1);
    // Mean of 500 and 700 only; the agent's 100-priced row is excluded
    assert_eq!(rows[0].integer("properties_sold").unwrap(), 2);
    assert_eq!(
        rows[0].decimal("avg_sale_price").unwrap(),
        Some(Decimal::from(600))
    );
}
