use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Missing column(s): {}", .0.join(", "))]
    MissingColumn(Vec<String>),

    #[error("Invalid value for {location} in column {column}: {reason}")]
    InvalidVector {
        location: String,
        column: String,
        reason: String,
    },

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Invalid row {location}: expected {expected} cells, got {actual}")]
    InvalidRow {
        location: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate location: {0}")]
    DuplicateLocation(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),
}
