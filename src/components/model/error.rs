use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("type mismatch in the '{field}' field: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: String,
    },
    #[error("bad masquerading vector: {got} names for {expected} columns")]
    BadMasqueradingVector { expected: usize, got: usize },
    #[error("column index {index} out of range ({count} columns)")]
    ColumnOutOfRange { index: usize, count: usize },
    #[error("query failed: {0}")]
    Query(String),
}
