//! Category handlers

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
use crate::app::dto::{CategoryDto, CreateCategoryRequest, FilmDto, UpdateCategoryRequest};
use crate::domain::entities::CategoryId;
use crate::domain::ports::{CategoryRepository, DirectorRepository, FilmRepository};
use crate::error::AppError;
use crate::AppState;

/// POST /categories
pub async fn create_category<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryDto>), AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Json(request) = payload?;
    let category = state.category_service.create(&request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories
pub async fn list_categories<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
) -> Result<Json<Vec<CategoryDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    Ok(Json(state.category_service.list().await?))
}

/// GET /categories/:id
pub async fn get_category<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CategoryDto>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(id) = path?;
    Ok(Json(state.category_service.get_by_id(&CategoryId(id)).await?))
}

/// PUT /categories/:id
pub async fn update_category<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> Result<Json<CategoryDto>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(id) = path?;
    let Json(request) = payload?;
    let category = state
        .category_service
        .update(&CategoryId(id), &request)
        .await?;
    Ok(Json(category))
}

/// DELETE /categories/:id
///
/// Refused with 409 while the category still contains films.
pub async fn delete_category<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Path(id) = path?;
    state.category_service.delete(&CategoryId(id)).await?;
    Ok(Json(MessageResponse::new(format!(
        "Category {} deleted successfully",
        id
    ))))
}

/// GET /categories/:id/films
pub async fn list_category_films<FR, DR, CR>(
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
        state.category_service.list_films(&CategoryId(id)).await?,
    ))
}

/// GET /categories/search?q=
pub async fn search_categories<FR, DR, CR>(
    State(state): State<AppState<FR, DR, CR>>,
    query: Result<Query<TextQuery>, QueryRejection>,
) -> Result<Json<Vec<CategoryDto>>, AppError>
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let Query(query) = query?;
    Ok(Json(state.category_service.search_by_name(&query.q).await?))
}
