//! Star-schema definitions for the listings dataset.
//!
//! Declares the four relations the relation provider exposes (the listing
//! fact table and the property, agent, and location dimensions) with their
//! field names, types, and nullability. The in-memory store validates
//! inserted rows against these definitions in place of database DDL.
//!
//! Field sets mirror the warehouse tables the dataset is loaded into:
//! dimension rows carry descriptive, immutable attributes; fact rows carry
//! the listing transaction itself plus foreign keys into each dimension.

use crate::primesquare::sql::execution::types::{FieldValue, TableRecord};
use crate::primesquare::table::TableError;

/// Listing fact relation name
pub const FACT: &str = "fact";
/// Property dimension relation name
pub const PROPERTY: &str = "property";
/// Agent dimension relation name
pub const AGENT: &str = "agent";
/// Location dimension relation name
pub const LOCATION: &str = "location";

/// Data type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Float,
    String,
    Boolean,
    Date,
    Timestamp,
    Decimal,
}

impl FieldType {
    /// Whether a value inhabits this type (NULL is handled by nullability,
    /// not here)
    pub fn matches(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (FieldType::Integer, FieldValue::Integer(_))
                | (FieldType::Float, FieldValue::Float(_))
                | (FieldType::String, FieldValue::String(_))
                | (FieldType::Boolean, FieldValue::Boolean(_))
                | (FieldType::Date, FieldValue::Date(_))
                | (FieldType::Timestamp, FieldValue::Timestamp(_))
                | (FieldType::Decimal, FieldValue::Decimal(_))
        )
    }

    /// Name of this type, for error reporting
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Integer => "Integer",
            FieldType::Float => "Float",
            FieldType::String => "String",
            FieldType::Boolean => "Boolean",
            FieldType::Date => "Date",
            FieldType::Timestamp => "Timestamp",
            FieldType::Decimal => "Decimal",
        }
    }
}

/// One field of a relation
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub field_type: FieldType,
    pub nullable: bool,
}

impl FieldDefinition {
    const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            nullable: false,
        }
    }

    const fn nullable(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            nullable: true,
        }
    }
}

/// Schema of one relation: name, identity field, and field definitions
#[derive(Debug, Clone)]
pub struct RelationSchema {
    pub name: &'static str,
    pub key_field: &'static str,
    pub fields: Vec<FieldDefinition>,
}

impl RelationSchema {
    /// Validate a row against this schema.
    ///
    /// Every declared non-nullable field must be present with a matching
    /// type; nullable fields may be NULL or absent; undeclared fields are
    /// rejected.
    pub fn validate(&self, record: &TableRecord) -> Result<(), TableError> {
        for def in &self.fields {
            match record.field(def.name) {
                Some(FieldValue::Null) | None => {
                    if !def.nullable {
                        return Err(TableError::SchemaViolation {
                            relation: self.name.to_string(),
                            field: def.name.to_string(),
                            message: "non-nullable field is missing or NULL".to_string(),
                        });
                    }
                }
                Some(value) => {
                    if !def.field_type.matches(value) {
                        return Err(TableError::SchemaViolation {
                            relation: self.name.to_string(),
                            field: def.name.to_string(),
                            message: format!(
                                "expected {}, got {}",
                                def.field_type.name(),
                                value.type_name()
                            ),
                        });
                    }
                }
            }
        }
        for field_name in record.fields.keys() {
            if !self.fields.iter().any(|def| def.name == field_name.as_str()) {
                return Err(TableError::SchemaViolation {
                    relation: self.name.to_string(),
                    field: field_name.clone(),
                    message: "field is not declared in the relation schema".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Schema of the listing fact relation
pub fn fact_schema() -> RelationSchema {
    RelationSchema {
        name: FACT,
        key_field: "fact_id",
        fields: vec![
            FieldDefinition::required("fact_id", FieldType::Integer),
            FieldDefinition::required("property_id", FieldType::Integer),
            FieldDefinition::required("agent_id", FieldType::Integer),
            FieldDefinition::required("location_id", FieldType::Integer),
            FieldDefinition::nullable("price", FieldType::Decimal),
            FieldDefinition::nullable("status", FieldType::String),
            FieldDefinition::nullable("listing_type", FieldType::String),
            FieldDefinition::nullable("listed_date", FieldType::Date),
            FieldDefinition::nullable("last_seen_date", FieldType::Timestamp),
        ],
    }
}

/// Schema of the property dimension
pub fn property_schema() -> RelationSchema {
    RelationSchema {
        name: PROPERTY,
        key_field: "property_id",
        fields: vec![
            FieldDefinition::required("property_id", FieldType::Integer),
            FieldDefinition::required("property_code", FieldType::String),
            FieldDefinition::required("property_address", FieldType::String),
            FieldDefinition::nullable("property_type", FieldType::String),
            FieldDefinition::nullable("bedrooms", FieldType::Integer),
            FieldDefinition::nullable("bathrooms", FieldType::Integer),
            FieldDefinition::nullable("square_footage", FieldType::Integer),
            FieldDefinition::nullable("year_built", FieldType::Integer),
            FieldDefinition::nullable("lot_size", FieldType::Float),
        ],
    }
}

/// Schema of the agent dimension
pub fn agent_schema() -> RelationSchema {
    RelationSchema {
        name: AGENT,
        key_field: "agent_id",
        fields: vec![
            FieldDefinition::required("agent_id", FieldType::Integer),
            FieldDefinition::required("agent_name", FieldType::String),
            FieldDefinition::nullable("agent_phone", FieldType::String),
            FieldDefinition::nullable("agent_email", FieldType::String),
        ],
    }
}

/// Schema of the location dimension
pub fn location_schema() -> RelationSchema {
    RelationSchema {
        name: LOCATION,
        key_field: "location_id",
        fields: vec![
            FieldDefinition::required("location_id", FieldType::Integer),
            FieldDefinition::nullable("city", FieldType::String),
            FieldDefinition::nullable("state", FieldType::String),
            FieldDefinition::nullable("zip_code", FieldType::String),
        ],
    }
}

/// All relations of the listings star schema
pub fn star_schema() -> Vec<RelationSchema> {
    vec![
        fact_schema(),
        property_schema(),
        agent_schema(),
        location_schema(),
    ]
}
