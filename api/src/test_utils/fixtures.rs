//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{NaiveDate, Utc};

use crate::app::dto::{CreateCategoryRequest, CreateDirectorRequest, CreateFilmRequest};
use crate::domain::entities::{
    Category, CategoryId, Director, DirectorId, Film, FilmDetails, FilmId,
};

static NEXT_ID: AtomicI64 = AtomicI64::new(10_000);

/// Ids handed out by fixtures never collide with each other
pub fn next_test_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Create a test director (Ann Lee) with default values
pub fn test_director() -> Director {
    test_director_named("Ann", "Lee")
}

/// Create a test director with a specific name
pub fn test_director_named(first_name: &str, last_name: &str) -> Director {
    Director {
        id: DirectorId(next_test_id()),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        nationality: "US".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        biography: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Create a test category (Drama) with default values
pub fn test_category() -> Category {
    test_category_named("Drama")
}

/// Create a test category with a specific name
pub fn test_category_named(name: &str) -> Category {
    Category {
        id: CategoryId(next_test_id()),
        name: name.to_string(),
        description: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Create a test film bound to the given director and category
pub fn test_film(director: &Director, category: &Category) -> Film {
    test_film_titled("Go Home", director, category)
}

/// Create a test film with a specific title
pub fn test_film_titled(title: &str, director: &Director, category: &Category) -> Film {
    Film {
        id: FilmId(next_test_id()),
        title: title.to_string(),
        release_year: 2020,
        duration: 90,
        synopsis: None,
        rating: Some(7.5),
        director_id: director.id,
        category_id: category.id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Create a film with both references resolved
pub fn test_film_details() -> FilmDetails {
    let director = test_director();
    let category = test_category();
    FilmDetails {
        film: test_film(&director, &category),
        director,
        category,
    }
}

pub fn create_director_request(first_name: &str, last_name: &str) -> CreateDirectorRequest {
    CreateDirectorRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        nationality: "US".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        biography: None,
    }
}

pub fn create_category_request(name: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
        description: None,
    }
}

pub fn create_film_request(
    title: &str,
    director_id: DirectorId,
    category_id: CategoryId,
) -> CreateFilmRequest {
    CreateFilmRequest {
        title: title.to_string(),
        release_year: 2020,
        duration: 90,
        synopsis: None,
        rating: Some(7.5),
        director_id: director_id.0,
        category_id: category_id.0,
    }
}
