//! Database error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Invalid pagination: offset {offset}, limit {limit}")]
    InvalidPagination { offset: i64, limit: i64 },
}
