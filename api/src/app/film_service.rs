//! Film service
//!
//! Films are the only entity holding references; every write resolves the
//! director and category first so a film never points at a missing row.
//! Reads always return films with both references eagerly resolved.

use std::sync::Arc;

use crate::app::dto::{CreateFilmRequest, FilmDto, UpdateFilmRequest};
use crate::app::mapper;
use crate::domain::entities::{Category, CategoryId, Director, DirectorId, FilmDetails, FilmId};
use crate::domain::ports::{CategoryRepository, DirectorRepository, FilmRepository};
use crate::domain::validation::{
    validate_duration, validate_length, validate_positive_id, validate_rating,
    validate_release_year, TITLE_MAX_LEN,
};
use crate::error::DomainError;

/// Service for managing films
pub struct FilmService<FR, DR, CR>
where
    FR: FilmRepository,
    DR: DirectorRepository,
    CR: CategoryRepository,
{
    films: Arc<FR>,
    directors: Arc<DR>,
    categories: Arc<CR>,
}

impl<FR, DR, CR> FilmService<FR, DR, CR>
where
    FR: FilmRepository,
    DR: DirectorRepository,
    CR: CategoryRepository,
{
    pub fn new(films: Arc<FR>, directors: Arc<DR>, categories: Arc<CR>) -> Self {
        Self {
            films,
            directors,
            categories,
        }
    }

    /// Create a film.
    ///
    /// Value checks run before any lookup: release year, then rating, then
    /// duration, then the title shape. The director is resolved before the
    /// category.
    pub async fn create(&self, request: &CreateFilmRequest) -> Result<FilmDto, DomainError> {
        tracing::info!(title = %request.title, "Creating film");

        validate_release_year(request.release_year)?;
        validate_rating(request.rating)?;
        validate_duration(Some(request.duration))?;
        validate_length(&request.title, "title", 1, TITLE_MAX_LEN)?;
        validate_positive_id(request.director_id, "directorId")?;
        validate_positive_id(request.category_id, "categoryId")?;

        if self.films.exists_by_title(&request.title).await? {
            return Err(duplicate_title(&request.title));
        }

        let director = self.resolve_director(&DirectorId(request.director_id)).await?;
        let category = self.resolve_category(&CategoryId(request.category_id)).await?;

        let film = self
            .films
            .create(&mapper::new_film_from_request(request, &director, &category))
            .await?;

        tracing::info!(
            film_id = %film.id,
            director_id = %director.id,
            category_id = %category.id,
            "Film created"
        );

        Ok(mapper::film_to_dto(&FilmDetails {
            film,
            director,
            category,
        }))
    }

    pub async fn get_by_id(&self, id: &FilmId) -> Result<FilmDto, DomainError> {
        tracing::debug!(film_id = %id, "Fetching film");
        let details = self.films.find_by_id_with_details(id).await?;
        mapper::film_to_dto_opt(details.as_ref()).ok_or_else(|| DomainError::not_found("Film", id))
    }

    pub async fn list(&self) -> Result<Vec<FilmDto>, DomainError> {
        let films = self.films.find_all_with_details().await?;
        Ok(to_dtos(&films))
    }

    /// Apply a partial update. Each present field is validated before
    /// anything is written; absent fields keep their stored values.
    pub async fn update(&self, id: &FilmId, request: &UpdateFilmRequest) -> Result<FilmDto, DomainError> {
        tracing::info!(film_id = %id, "Updating film");

        let mut film = self
            .films
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Film", id))?;

        if let Some(ref title) = request.title {
            validate_length(title, "title", 1, TITLE_MAX_LEN)?;
            if *title != film.title && self.films.exists_by_title(title).await? {
                return Err(duplicate_title(title));
            }
        }
        if let Some(release_year) = request.release_year {
            validate_release_year(release_year)?;
        }
        validate_duration(request.duration)?;
        validate_rating(request.rating)?;

        let update = mapper::film_update_from_request(request);

        let director = match update.director_id {
            Some(director_id) => self.resolve_director(&director_id).await?,
            None => self.resolve_director(&film.director_id).await?,
        };
        let category = match update.category_id {
            Some(category_id) => self.resolve_category(&category_id).await?,
            None => self.resolve_category(&film.category_id).await?,
        };

        film.apply(&update);
        let film = self.films.update(&film).await?;

        tracing::info!(film_id = %film.id, "Film updated");
        Ok(mapper::film_to_dto(&FilmDetails {
            film,
            director,
            category,
        }))
    }

    /// Films have no dependents, so delete only checks existence
    pub async fn delete(&self, id: &FilmId) -> Result<(), DomainError> {
        tracing::info!(film_id = %id, "Deleting film");

        if !self.films.exists_by_id(id).await? {
            return Err(DomainError::not_found("Film", id));
        }

        self.films.delete_by_id(id).await?;
        tracing::info!(film_id = %id, "Film deleted");
        Ok(())
    }

    pub async fn search_by_title(&self, title: &str) -> Result<Vec<FilmDto>, DomainError> {
        tracing::debug!(query = %title, "Searching films by title");
        let films = self.films.find_by_title_containing(title).await?;
        Ok(to_dtos(&films))
    }

    pub async fn search_by_year(&self, year: i32) -> Result<Vec<FilmDto>, DomainError> {
        tracing::debug!(year, "Searching films by release year");
        let films = self.films.find_by_release_year(year).await?;
        Ok(to_dtos(&films))
    }

    /// Films released between `start` and `end`, both inclusive
    pub async fn search_by_year_range(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<FilmDto>, DomainError> {
        tracing::debug!(start, end, "Searching films by release year range");

        validate_release_year(start)?;
        validate_release_year(end)?;
        if start > end {
            return Err(DomainError::validation(
                "startYear",
                format!("Start year {} is after end year {}", start, end),
            ));
        }

        let films = self.films.find_by_release_year_between(start, end).await?;
        Ok(to_dtos(&films))
    }

    pub async fn search_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<FilmDto>, DomainError> {
        if !self.categories.exists_by_id(category_id).await? {
            return Err(DomainError::not_found("Category", category_id));
        }

        let films = self.films.find_by_category(category_id).await?;
        Ok(to_dtos(&films))
    }

    pub async fn search_by_min_rating(&self, min_rating: f64) -> Result<Vec<FilmDto>, DomainError> {
        validate_rating(Some(min_rating))?;

        tracing::debug!(min_rating, "Searching films by minimum rating");
        let films = self.films.find_by_min_rating(min_rating).await?;
        Ok(to_dtos(&films))
    }

    pub async fn search_by_director(
        &self,
        director_id: &DirectorId,
    ) -> Result<Vec<FilmDto>, DomainError> {
        if !self.directors.exists_by_id(director_id).await? {
            return Err(DomainError::not_found("Director", director_id));
        }

        let films = self.films.find_by_director(director_id).await?;
        Ok(to_dtos(&films))
    }

    async fn resolve_director(&self, id: &DirectorId) -> Result<Director, DomainError> {
        self.directors
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Director", id))
    }

    async fn resolve_category(&self, id: &CategoryId) -> Result<Category, DomainError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", id))
    }
}

fn to_dtos(films: &[FilmDetails]) -> Vec<FilmDto> {
    films.iter().map(mapper::film_to_dto).collect()
}

fn duplicate_title(title: &str) -> DomainError {
    DomainError::Conflict(format!("Film with title '{}' already exists", title))
}
