//! Category service
//!
//! CRUD and search over categories, guarding deletes against films that
//! still reference the category.

use std::sync::Arc;

use crate::app::dto::{CategoryDto, CreateCategoryRequest, FilmDto, UpdateCategoryRequest};
use crate::app::mapper;
use crate::domain::entities::CategoryId;
use crate::domain::ports::{CategoryRepository, FilmRepository};
use crate::domain::validation::{
    validate_length, validate_max_length, DESCRIPTION_MAX_LEN, NAME_MAX_LEN, NAME_MIN_LEN,
};
use crate::error::DomainError;

/// Service for managing categories
pub struct CategoryService<CR, FR>
where
    CR: CategoryRepository,
    FR: FilmRepository,
{
    categories: Arc<CR>,
    films: Arc<FR>,
}

impl<CR, FR> CategoryService<CR, FR>
where
    CR: CategoryRepository,
    FR: FilmRepository,
{
    pub fn new(categories: Arc<CR>, films: Arc<FR>) -> Self {
        Self { categories, films }
    }

    /// Create a category. Names are unique regardless of case.
    pub async fn create(&self, request: &CreateCategoryRequest) -> Result<CategoryDto, DomainError> {
        tracing::info!(name = %request.name, "Creating category");

        validate_length(&request.name, "name", NAME_MIN_LEN, NAME_MAX_LEN)?;
        validate_max_length(
            request.description.as_deref(),
            "description",
            DESCRIPTION_MAX_LEN,
        )?;

        if self.categories.find_by_name(&request.name).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Category with name '{}' already exists",
                request.name
            )));
        }

        let category = self
            .categories
            .create(&mapper::new_category_from_request(request))
            .await?;

        tracing::info!(category_id = %category.id, "Category created");
        Ok(mapper::category_to_dto(&category))
    }

    pub async fn get_by_id(&self, id: &CategoryId) -> Result<CategoryDto, DomainError> {
        tracing::debug!(category_id = %id, "Fetching category");
        let category = self.categories.find_by_id(id).await?;
        mapper::category_to_dto_opt(category.as_ref())
            .ok_or_else(|| DomainError::not_found("Category", id))
    }

    /// All categories, in storage order
    pub async fn list(&self) -> Result<Vec<CategoryDto>, DomainError> {
        let categories = self.categories.find_all().await?;
        Ok(categories.iter().map(mapper::category_to_dto).collect())
    }

    /// Apply a partial update
    pub async fn update(
        &self,
        id: &CategoryId,
        request: &UpdateCategoryRequest,
    ) -> Result<CategoryDto, DomainError> {
        tracing::info!(category_id = %id, "Updating category");

        let mut category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", id))?;

        if let Some(ref name) = request.name {
            validate_length(name, "name", NAME_MIN_LEN, NAME_MAX_LEN)?;
            if let Some(existing) = self.categories.find_by_name(name).await? {
                if existing.id != category.id {
                    return Err(DomainError::Conflict(format!(
                        "Category with name '{}' already exists",
                        name
                    )));
                }
            }
        }
        validate_max_length(
            request.description.as_deref(),
            "description",
            DESCRIPTION_MAX_LEN,
        )?;

        category.apply(&mapper::category_update_from_request(request));
        let category = self.categories.update(&category).await?;

        tracing::info!(category_id = %category.id, "Category updated");
        Ok(mapper::category_to_dto(&category))
    }

    /// Delete a category that no film references
    pub async fn delete(&self, id: &CategoryId) -> Result<(), DomainError> {
        tracing::info!(category_id = %id, "Deleting category");

        if !self.categories.exists_by_id(id).await? {
            return Err(DomainError::not_found("Category", id));
        }

        let film_count = self.films.count_by_category(id).await?;
        if film_count > 0 {
            tracing::warn!(category_id = %id, film_count, "Category delete blocked by films");
            return Err(DomainError::BusinessRule {
                message: format!(
                    "Cannot delete category {}: it still contains {} film(s). \
                     Delete or recategorize them first.",
                    id, film_count
                ),
                dependents: film_count,
            });
        }

        self.categories.delete_by_id(id).await?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }

    /// Films filed under a category
    pub async fn list_films(&self, category_id: &CategoryId) -> Result<Vec<FilmDto>, DomainError> {
        if !self.categories.exists_by_id(category_id).await? {
            return Err(DomainError::not_found("Category", category_id));
        }

        let films = self.films.find_by_category(category_id).await?;
        Ok(films.iter().map(mapper::film_to_dto).collect())
    }

    /// Case-insensitive substring search on name
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<CategoryDto>, DomainError> {
        tracing::debug!(query = %name, "Searching categories by name");
        let categories = self.categories.find_by_name_containing(name).await?;
        Ok(categories.iter().map(mapper::category_to_dto).collect())
    }
}
