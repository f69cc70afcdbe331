//! Film domain entity
//!
//! A film owns exactly one director reference and one category reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryId};
use super::director::{Director, DirectorId};

/// Unique identifier for a film
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FilmId(pub i64);

impl From<i64> for FilmId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FilmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted film
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    pub release_year: i32,
    /// Running time in minutes
    pub duration: i32,
    pub synopsis: Option<String>,
    pub rating: Option<f64>,
    pub director_id: DirectorId,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Film {
    /// Apply the present fields of a partial update
    pub fn apply(&mut self, update: &FilmUpdate) {
        if let Some(ref title) = update.title {
            self.title = title.clone();
        }
        if let Some(release_year) = update.release_year {
            self.release_year = release_year;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }
        if let Some(ref synopsis) = update.synopsis {
            self.synopsis = Some(synopsis.clone());
        }
        if let Some(rating) = update.rating {
            self.rating = Some(rating);
        }
        if let Some(director_id) = update.director_id {
            self.director_id = director_id;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
    }
}

/// A film with both of its references resolved (eager join)
#[derive(Debug, Clone, PartialEq)]
pub struct FilmDetails {
    pub film: Film,
    pub director: Director,
    pub category: Category,
}

/// Data needed to create a new film
#[derive(Debug, Clone, PartialEq)]
pub struct NewFilm {
    pub title: String,
    pub release_year: i32,
    pub duration: i32,
    pub synopsis: Option<String>,
    pub rating: Option<f64>,
    pub director_id: DirectorId,
    pub category_id: CategoryId,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilmUpdate {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub duration: Option<i32>,
    pub synopsis: Option<String>,
    pub rating: Option<f64>,
    pub director_id: Option<DirectorId>,
    pub category_id: Option<CategoryId>,
}
