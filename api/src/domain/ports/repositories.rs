//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Repositories own no business rules. Uniqueness, referential integrity
//! and field validation are enforced by the services before these are called.

use async_trait::async_trait;

use crate::domain::entities::{
    Category, CategoryId, Director, DirectorId, Film, FilmDetails, FilmId, NewCategory,
    NewDirector, NewFilm,
};
use crate::error::DomainError;

/// Repository for Film entities
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Persist a new film, assigning its id and timestamps
    async fn create(&self, film: &NewFilm) -> Result<Film, DomainError>;

    /// Save changes to an existing film; advances `updated_at`
    async fn update(&self, film: &Film) -> Result<Film, DomainError>;

    /// Find a film by ID without resolving its references
    async fn find_by_id(&self, id: &FilmId) -> Result<Option<Film>, DomainError>;

    /// Find a film by ID with director and category resolved
    async fn find_by_id_with_details(
        &self,
        id: &FilmId,
    ) -> Result<Option<FilmDetails>, DomainError>;

    /// All films with director and category resolved
    async fn find_all_with_details(&self) -> Result<Vec<FilmDetails>, DomainError>;

    async fn exists_by_id(&self, id: &FilmId) -> Result<bool, DomainError>;

    /// Exact-match title lookup
    async fn exists_by_title(&self, title: &str) -> Result<bool, DomainError>;

    /// Remove a film. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: &FilmId) -> Result<(), DomainError>;

    /// Case-insensitive substring search on title
    async fn find_by_title_containing(&self, title: &str)
        -> Result<Vec<FilmDetails>, DomainError>;

    async fn find_by_release_year(&self, year: i32) -> Result<Vec<FilmDetails>, DomainError>;

    /// Films released between `start` and `end`, inclusive
    async fn find_by_release_year_between(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<FilmDetails>, DomainError>;

    async fn find_by_director(
        &self,
        director_id: &DirectorId,
    ) -> Result<Vec<FilmDetails>, DomainError>;

    async fn find_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<FilmDetails>, DomainError>;

    /// Films whose rating is at least `min_rating`; unrated films never match
    async fn find_by_min_rating(&self, min_rating: f64) -> Result<Vec<FilmDetails>, DomainError>;

    /// Number of films referencing a director
    async fn count_by_director(&self, director_id: &DirectorId) -> Result<u64, DomainError>;

    /// Number of films referencing a category
    async fn count_by_category(&self, category_id: &CategoryId) -> Result<u64, DomainError>;
}

/// Repository for Director entities
#[async_trait]
pub trait DirectorRepository: Send + Sync {
    async fn create(&self, director: &NewDirector) -> Result<Director, DomainError>;

    async fn update(&self, director: &Director) -> Result<Director, DomainError>;

    async fn find_by_id(&self, id: &DirectorId) -> Result<Option<Director>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Director>, DomainError>;

    async fn exists_by_id(&self, id: &DirectorId) -> Result<bool, DomainError>;

    /// Case-insensitive lookup on the (first, last) name pair
    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Director>, DomainError>;

    async fn delete_by_id(&self, id: &DirectorId) -> Result<(), DomainError>;

    /// Case-insensitive substring search on last name
    async fn find_by_last_name_containing(
        &self,
        last_name: &str,
    ) -> Result<Vec<Director>, DomainError>;

    /// Case-insensitive substring search on first name
    async fn find_by_first_name_containing(
        &self,
        first_name: &str,
    ) -> Result<Vec<Director>, DomainError>;

    /// Exact nationality match
    async fn find_by_nationality(&self, nationality: &str) -> Result<Vec<Director>, DomainError>;
}

/// Repository for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError>;

    async fn update(&self, category: &Category) -> Result<Category, DomainError>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    async fn exists_by_id(&self, id: &CategoryId) -> Result<bool, DomainError>;

    /// Case-insensitive name lookup
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), DomainError>;

    /// Case-insensitive substring search on name
    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Category>, DomainError>;
}
