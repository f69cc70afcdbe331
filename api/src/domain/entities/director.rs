//! Director domain entity
//!
//! Films hold the reference to their director; a director does not own
//! its filmography, which is looked up through the film repository.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a director
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectorId(pub i64);

impl From<i64> for DirectorId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DirectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted director
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Director {
    pub id: DirectorId,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub biography: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Director {
    /// Display name, always derived from the two name fields
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    /// Case-insensitive comparison on the (first, last) identity pair
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.to_lowercase() == first_name.to_lowercase()
            && self.last_name.to_lowercase() == last_name.to_lowercase()
    }

    /// Apply the present fields of a partial update
    pub fn apply(&mut self, update: &DirectorUpdate) {
        if let Some(ref first_name) = update.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(ref last_name) = update.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(ref nationality) = update.nationality {
            self.nationality = nationality.clone();
        }
        if let Some(birth_date) = update.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(ref biography) = update.biography {
            self.biography = Some(biography.clone());
        }
    }
}

pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}

/// Data needed to create a new director
#[derive(Debug, Clone, PartialEq)]
pub struct NewDirector {
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub biography: Option<String>,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectorUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub biography: Option<String>,
}

impl DirectorUpdate {
    pub fn touches_name(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }
}
