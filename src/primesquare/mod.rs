pub mod schema;
pub mod sql;
pub mod table;
