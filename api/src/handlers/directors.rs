//! Director handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use super::films::TextQuery;
use super::MessageResponse;
use crate::app::dto::{CreateDirectorRequest, DirectorDto, FilmDto, UpdateDirectorRequest};
use crate::domain::entities::DirectorId;
use crate::domain::ports::{CategoryRepository, DirectorRepository, FilmRepository};
use crate::error::AppError;
use crate::AppState;

/// POST /directors
pub async fn create_director<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    payload: Result<Json<CreateDirectorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DirectorDto>), AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Json(request) = payload?;
    let director = state.director_service.create(&request).await?;
    Ok((StatusCode::CREATED, Json(director)))
}

/// GET /directors
pub async fn list_directors<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
) -> Result<Json<Vec<DirectorDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    Ok(Json(state.director_service.list().await?))
}

/// GET /directors/:id
pub async fn get_director<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DirectorDto>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(id) = path?;
    Ok(Json(state.director_service.get_by_id(&DirectorId(id)).await?))
}

/// PUT /directors/:id
pub async fn update_director<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateDirectorRequest>, JsonRejection>,
) -> Result<Json<DirectorDto>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(id) = path?;
    let Json(request) = payload?;
    let director = state
        .director_service
        .update(&DirectorId(id), &request)
        .await?;
    Ok(Json(director))
}

/// DELETE /directors/:id
///
/// Refused with 409 while any film still references the director.
pub async fn delete_director<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(id) = path?;
    state.director_service.delete(&DirectorId(id)).await?;
    Ok(Json(MessageResponse::new(format!(
        "Director {} deleted successfully",
        id
    ))))
}

/// GET /directors/:id/filmography
pub async fn get_filmography<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<FilmDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(id) = path?;
    Ok(Json(
        state.director_service.get_filmography(&DirectorId(id)).await?,
    ))
}

/// GET /directors/search/lastname?q=
pub async fn search_by_last_name<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    query: Result<Query<TextQuery>, QueryRejection>,
) -> Result<Json<Vec<DirectorDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Query(query) = query?;
    Ok(Json(
        state.director_service.search_by_last_name(&query.q).await?,
    ))
}

/// GET /directors/search/firstname?q=
pub async fn search_by_first_name<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    query: Result<Query<TextQuery>, QueryRejection>,
) -> Result<Json<Vec<DirectorDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Query(query) = query?;
    Ok(Json(
        state.director_service.search_by_first_name(&query.q).await?,
    ))
}

/// GET /directors/search/nationality?q=
///
/// Exact match.
pub async fn search_by_nationality<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    query: Result<Query<TextQuery>, QueryRejection>,
) -> Result<Json<Vec<DirectorDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Query(query) = query?;
    Ok(Json(
        state.director_service.search_by_nationality(&query.q).await?,
    ))
}
