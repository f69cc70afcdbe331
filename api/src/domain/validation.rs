//! Field-level validators
//!
//! Pure checks on single values. None of these touch storage; each failure
//! carries the offending field name.

use chrono::{Datelike, NaiveDate, Utc};

use crate::error::DomainError;

/// Year of the first surviving motion picture
pub const EARLIEST_RELEASE_YEAR: i32 = 1888;
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

pub const TITLE_MAX_LEN: usize = 255;
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

pub fn current_year() -> i32 {
    Utc::now().year()
}

pub fn validate_release_year(year: i32) -> Result<(), DomainError> {
    validate_release_year_at(year, current_year())
}

fn validate_release_year_at(year: i32, current_year: i32) -> Result<(), DomainError> {
    if year > current_year {
        return Err(DomainError::validation(
            "releaseYear",
            format!("Release year {} cannot be in the future", year),
        ));
    }
    if year < EARLIEST_RELEASE_YEAR {
        return Err(DomainError::validation(
            "releaseYear",
            format!(
                "Release year {} cannot be before {}",
                year, EARLIEST_RELEASE_YEAR
            ),
        ));
    }
    Ok(())
}

pub fn validate_duration(duration: Option<i32>) -> Result<(), DomainError> {
    match duration {
        Some(d) if d <= 0 => Err(DomainError::validation(
            "duration",
            format!("Duration must be greater than 0, got {}", d),
        )),
        _ => Ok(()),
    }
}

pub fn validate_rating(rating: Option<f64>) -> Result<(), DomainError> {
    match rating {
        // NaN fails the range check as well
        Some(r) if !(MIN_RATING..=MAX_RATING).contains(&r) => Err(DomainError::validation(
            "rating",
            format!(
                "Rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, r
            ),
        )),
        _ => Ok(()),
    }
}

pub fn validate_birth_date(birth_date: Option<NaiveDate>) -> Result<(), DomainError> {
    validate_birth_date_at(birth_date, Utc::now().date_naive())
}

fn validate_birth_date_at(
    birth_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), DomainError> {
    match birth_date {
        Some(d) if d >= today => Err(DomainError::validation(
            "birthDate",
            format!("Birth date {} must be in the past", d),
        )),
        _ => Ok(()),
    }
}

pub fn validate_not_blank(value: &str, field: &'static str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(
            field,
            format!("{} must not be blank", field),
        ));
    }
    Ok(())
}

pub fn validate_positive_id(id: i64, field: &'static str) -> Result<(), DomainError> {
    if id <= 0 {
        return Err(DomainError::validation(
            field,
            format!("{} must be a positive number, got {}", field, id),
        ));
    }
    Ok(())
}

/// Non-blank and between `min` and `max` characters
pub fn validate_length(
    value: &str,
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<(), DomainError> {
    validate_not_blank(value, field)?;
    let len = value.chars().count();
    if len < min || len > max {
        return Err(DomainError::validation(
            field,
            format!(
                "{} must be between {} and {} characters, got {}",
                field, min, max, len
            ),
        ));
    }
    Ok(())
}

pub fn validate_max_length(
    value: Option<&str>,
    field: &'static str,
    max: usize,
) -> Result<(), DomainError> {
    match value {
        Some(v) if v.chars().count() > max => Err(DomainError::validation(
            field,
            format!("{} cannot exceed {} characters", field, max),
        )),
        _ => Ok(()),
    }
}
