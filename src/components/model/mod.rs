#[path = "value_type.rs"]
pub mod value_type;

#[path = "schema.rs"]
pub mod schema;

#[path = "error.rs"]
pub mod error;

#[path = "record.rs"]
pub mod record;

#[path = "row.rs"]
pub mod row;

#[path = "db_client.rs"]
pub mod db_client;
