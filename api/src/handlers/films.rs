//! Film handlers
//!
//! CRUD and search endpoints for films. Every film in a response carries its
//! resolved director and category.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::MessageResponse;
use crate::app::dto::{CreateFilmRequest, FilmDto, UpdateFilmRequest};
use crate::domain::entities::{CategoryId, DirectorId, FilmId};
use crate::domain::ports::{CategoryRepository, DirectorRepository, FilmRepository};
use crate::error::AppError;
use crate::AppState;

/// Query for substring searches
#[derive(Debug, Deserialize)]
pub struct TextQuery {
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

/// Inclusive release year range
#[derive(Debug, Deserialize)]
pub struct YearRangeQuery {
    pub start: i32,
    pub end: i32,
}

#[derive(Debug, Deserialize)]
pub struct RatingQuery {
    pub min: f64,
}

/// POST /films
pub async fn create_film<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    payload: Result<Json<CreateFilmRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FilmDto>), AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Json(request) = payload?;
    let film = state.film_service.create(&request).await?;
    Ok((StatusCode::CREATED, Json(film)))
}

/// GET /films
pub async fn list_films<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
) -> Result<Json<Vec<FilmDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    Ok(Json(state.film_service.list().await?))
}

/// GET /films/:id
pub async fn get_film<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<FilmDto>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(id) = path?;
    Ok(Json(state.film_service.get_by_id(&FilmId(id)).await?))
}

/// PUT /films/:id
///
/// Only the fields present in the body are changed.
pub async fn update_film<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateFilmRequest>, JsonRejection>,
) -> Result<Json<FilmDto>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(id) = path?;
    let Json(request) = payload?;
    Ok(Json(state.film_service.update(&FilmId(id), &request).await?))
}

/// DELETE /films/:id
pub async fn delete_film<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(id) = path?;
    state.film_service.delete(&FilmId(id)).await?;
    Ok(Json(MessageResponse::new(format!(
        "Film {} deleted successfully",
        id
    ))))
}

/// GET /films/search/title?q=
pub async fn search_by_title<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    query: Result<Query<TextQuery>, QueryRejection>,
) -> Result<Json<Vec<FilmDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Query(query) = query?;
    Ok(Json(state.film_service.search_by_title(&query.q).await?))
}

/// GET /films/search/year?year=
pub async fn search_by_year<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Result<Json<Vec<FilmDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Query(query) = query?;
    Ok(Json(state.film_service.search_by_year(query.year).await?))
}

/// GET /films/search/years?start=&end=
pub async fn search_by_year_range<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    query: Result<Query<YearRangeQuery>, QueryRejection>,
) -> Result<Json<Vec<FilmDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Query(query) = query?;
    let films = state
        .film_service
        .search_by_year_range(query.start, query.end)
        .await?;
    Ok(Json(films))
}

/// GET /films/search/category/:category_id
pub async fn search_by_category<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<FilmDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(category_id) = path?;
    let films = state
        .film_service
        .search_by_category(&CategoryId(category_id))
        .await?;
    Ok(Json(films))
}

/// GET /films/search/rating?min=
pub async fn search_by_min_rating<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    query: Result<Query<RatingQuery>, QueryRejection>,
) -> Result<Json<Vec<FilmDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Query(query) = query?;
    Ok(Json(state.film_service.search_by_min_rating(query.min).await?))
}

/// GET /films/director/:director_id
pub async fn search_by_director<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<FilmDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(director_id) = path?;
    let films = state
        .film_service
        .search_by_director(&DirectorId(director_id))
        .await?;
    Ok(Json(films))
}
