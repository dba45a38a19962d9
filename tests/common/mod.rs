//! Shared dataset builders for integration tests.

#![allow(dead_code)]

use primesquare::primesquare::schema;
use primesquare::{FieldValue, ListingStore, TableRecord};
use rust_decimal::Decimal;
use std::collections::HashMap;

pub fn record(fields: Vec<(&str, FieldValue)>) -> TableRecord {
    TableRecord::new(
        fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect::<HashMap<_, _>>(),
    )
}

pub fn insert_location(store: &ListingStore, id: i64, city: &str) {
    store
        .insert(
            schema::LOCATION,
            record(vec![
                ("location_id", FieldValue::Integer(id)),
                ("city", FieldValue::String(city.to_string())),
                ("state", FieldValue::String("TX".to_string())),
                ("zip_code", FieldValue::String("78204".to_string())),
            ]),
        )
        .unwrap();
}

pub fn insert_location_without_city(store: &ListingStore, id: i64) {
    store
        .insert(
            schema::LOCATION,
            record(vec![
                ("location_id", FieldValue::Integer(id)),
                ("city", FieldValue::Null),
            ]),
        )
        .unwrap();
}

pub fn insert_agent(store: &ListingStore, id: i64, name: &str) {
    store
        .insert(
            schema::AGENT,
            record(vec![
                ("agent_id", FieldValue::Integer(id)),
                ("agent_name", FieldValue::String(name.to_string())),
                ("agent_phone", FieldValue::String("210-555-0100".to_string())),
                (
                    "agent_email",
                    FieldValue::String(format!("{}@primesquare.example", id)),
                ),
            ]),
        )
        .unwrap();
}

pub fn insert_property(store: &ListingStore, id: i64) {
    store
        .insert(
            schema::PROPERTY,
            record(vec![
                ("property_id", FieldValue::Integer(id)),
                ("property_code", FieldValue::String(format!("PS-{:04}", id))),
                (
                    "property_address",
                    FieldValue::String(format!("{} Main St", 100 + id)),
                ),
                ("property_type", FieldValue::String("Single Family".to_string())),
                ("bedrooms", FieldValue::Integer(3)),
                ("bathrooms", FieldValue::Integer(2)),
                ("square_footage", FieldValue::Integer(1800)),
                ("year_built", FieldValue::Integer(2004)),
            ]),
        )
        .unwrap();
}

pub fn insert_fact(
    store: &ListingStore,
    fact_id: i64,
    property_id: i64,
    agent_id: i64,
    location_id: i64,
    price: Option<i64>,
    status: &str,
) {
    store
        .insert(
            schema::FACT,
            record(vec![
                ("fact_id", FieldValue::Integer(fact_id)),
                ("property_id", FieldValue::Integer(property_id)),
                ("agent_id", FieldValue::Integer(agent_id)),
                ("location_id", FieldValue::Integer(location_id)),
                (
                    "price",
                    match price {
                        Some(dollars) => FieldValue::Decimal(Decimal::from(dollars)),
                        None => FieldValue::Null,
                    },
                ),
                ("status", FieldValue::String(status.to_string())),
            ]),
        )
        .unwrap();
}

/// Extract one integer column from a result set, in result order
pub fn integer_column(rows: &[TableRecord], field: &str) -> Vec<i64> {
    rows.iter().map(|row| row.integer(field).unwrap()).collect()
}

/// Extract one decimal column from a result set, in result order
pub fn decimal_column(rows: &[TableRecord], field: &str) -> Vec<Option<Decimal>> {
    rows.iter().map(|row| row.decimal(field).unwrap()).collect()
}
