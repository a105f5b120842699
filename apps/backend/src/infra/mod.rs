//! Infrastructure layer - database connection, schema, state and error mapping.

pub mod db;
pub mod db_errors;
pub mod schema;
pub mod state;
