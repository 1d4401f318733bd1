//! Error types for taskboard-db

use thiserror::Error;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] taskboard_core::CoreError),

    #[error("Entity for table '{table}' is already registered")]
    DuplicateEntity { table: &'static str },
}
