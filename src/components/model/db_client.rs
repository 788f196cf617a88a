use tracing::debug;

use super::error::ModelError;
use super::record::FieldMapped;
use super::row::Row;
use super::value_type::FieldValue;

// Seam to the SQL execution layer. The caller owns the connection; a
// model only hands over statement text plus positional parameters and
// decodes whatever rows come back.
pub trait SqlClient {
    fn query_rows(&self, sql: &str, params: &[FieldValue]) -> Result<Vec<Row>, String>;
}

// Fetch the single record a foreign key points at. An unset key
// short-circuits to None without touching the client.
pub fn find_related<R, C>(client: &C, key: Option<i64>) -> Result<Option<R>, ModelError>
where
    R: FieldMapped,
    C: SqlClient + ?Sized,
{
    let key = match key {
        Some(key) => key,
        None => return Ok(None),
    };

    let sql = R::schema().sql_for_finding_by_primary_key();
    debug!("forwarding lookup to client: {} [{}]", sql, key);
    let rows = client
        .query_rows(&sql, &[FieldValue::Int(key)])
        .map_err(ModelError::Query)?;

    match rows.first() {
        Some(row) => Ok(Some(R::from_row(row)?)),
        None => Ok(None),
    }
}

// Fetch every record whose `column` matches `key`, e.g. all persons
// belonging to one department
pub fn find_all_related<R, C>(client: &C, column: &str, key: Option<i64>) -> Result<Vec<R>, ModelError>
where
    R: FieldMapped,
    C: SqlClient + ?Sized,
{
    let key = match key {
        Some(key) => key,
        None => return Ok(Vec::new()),
    };

    let sql = R::schema().sql_for_finding_by(column);
    debug!("forwarding lookup to client: {} [{}]", sql, key);
    let rows = client
        .query_rows(&sql, &[FieldValue::Int(key)])
        .map_err(ModelError::Query)?;

    rows.iter().map(|row| R::from_row(row)).collect()
}
