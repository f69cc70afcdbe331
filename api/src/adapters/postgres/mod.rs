//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod category_repo;
pub mod director_repo;
pub mod film_repo;


pub use category_repo::PostgresCategoryRepository;
pub use director_repo::PostgresDirectorRepository;
pub use film_repo::PostgresFilmRepository;

use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

/// Translate a SeaORM error into a domain error.
///
/// Unique and foreign key violations surface as `Conflict` so a request that
/// loses a race against a concurrent writer still gets a meaningful status.
pub(crate) fn map_db_err(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => DomainError::Conflict(detail),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => DomainError::Conflict(detail),
        _ => DomainError::Database(err.to_string()),
    }
}

/// Build a `LIKE` pattern matching `needle` anywhere, lowercased.
/// `%` and `_` in the input match literally.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
