//! Boundary shapes
//!
//! Request payloads accepted by the services and the representations they
//! return. JSON field names are camelCase.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Categories
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// ============================================================================
// Directors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    pub biography: Option<String>,
    /// Always `first_name + " " + last_name`
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDirectorRequest {
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub biography: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDirectorRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub biography: Option<String>,
}

// ============================================================================
// Films
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDto {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub duration: i32,
    pub synopsis: Option<String>,
    pub rating: Option<f64>,
    pub director: DirectorDto,
    pub category: CategoryDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmRequest {
    pub title: String,
    pub release_year: i32,
    pub duration: i32,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    pub director_id: i64,
    pub category_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilmRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub director_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
}
