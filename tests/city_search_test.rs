mod common;

use common::*;
use primesquare::{CitySearchProcessor, ListingStore};
use rust_decimal::Decimal;

fn store_with_dimensions() -> ListingStore {
    let store = ListingStore::new();
    insert_location(&store, 1, "San Antonio");
    insert_location(&store, 2, "Austin");
    insert_agent(&store, 1, "Maria Delgado");
    for id in 1..=4 {
        insert_property(&store, id);
    }
    store
}

#[test]
fn price_bounds_are_inclusive_on_both_ends() {
    let store = store_with_dimensions();
    insert_fact(&store, 1, 1, 1, 1, Some(100_000), "Active");
    insert_fact(&store, 2, 2, 1, 1, Some(200_000), "Active");
    insert_fact(&store, 3, 3, 1, 1, Some(300_000), "Active");
    insert_fact(&store, 4, 4, 1, 1, Some(300_001), "Active");

    let rows = CitySearchProcessor::process(
        &store,
        "San Antonio",
        Decimal::from(100_000),
        Decimal::from(300_000),
    )
    .unwrap();
    assert_eq!(integer_column(&rows, "fact_id"), vec![3, 2, 1]);
}

#[test]
fn inverted_range_yields_empty_result_not_an_error() {
    let store = store_with_dimensions();
    insert_fact(&store, 1, 1, 1, 1, Some(200_000), "Active");

    let rows = CitySearchProcessor::process(
        &store,
        "San Antonio",
        Decimal::from(300_000),
        Decimal::from(100_000),
    )
    .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn city_match_is_exact_and_case_sensitive() {
    let store = store_with_dimensions();
    insert_fact(&store, 1, 1, 1, 1, Some(200_000), "Active");
    insert_fact(&store, 2, 2, 1, 2, Some(200_000), "Active");

    let exact = CitySearchProcessor::process(
        &store,
        "San Antonio",
        Decimal::from(0),
        Decimal::from(1_000_000),
    )
    .unwrap();
    assert_eq!(integer_column(&exact, "fact_id"), vec![1]);

    let wrong_case = CitySearchProcessor::process(
        &store,
        "san antonio",
        Decimal::from(0),
        Decimal::from(1_000_000),
    )
    .unwrap();
    assert!(wrong_case.is_empty());
}

#[test]
fn null_priced_rows_never_match() {
    let store = store_with_dimensions();
    insert_fact(&store, 1, 1, 1, 1, None, "Active");

    let rows = CitySearchProcessor::process(
        &store,
        "San Antonio",
        Decimal::from(0),
        Decimal::from(1_000_000),
    )
    .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn result_rows_are_wide_and_ordered_by_price_descending() {
    let store = store_with_dimensions();
    insert_fact(&store, 1, 1, 1, 1, Some(150_000), "Active");
    insert_fact(&store, 2, 2, 1, 1, Some(275_000), "Pending");

    let rows = CitySearchProcessor::process(
        &store,
        "San Antonio",
        Decimal::from(100_000),
        Decimal::from(400_000),
    )
    .unwrap();
    assert_eq!(integer_column(&rows, "fact_id"), vec![2, 1]);

    let top = &rows[0];
    assert_eq!(top.string("property_address").unwrap(), Some("102 Main St"));
    assert_eq!(top.integer("square_footage").unwrap(), 1800);
    assert_eq!(top.string("status").unwrap(), Some("Pending"));
    assert_eq!(top.string("city").unwrap(), Some("San Antonio"));
    assert_eq!(top.string("state").unwrap(), Some("TX"));
    assert_eq!(top.string("zip_code").unwrap(), Some("78204"));
}
