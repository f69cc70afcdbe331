//! Director service
//!
//! Handles director registration, profile updates, filmography lookups and
//! the name/nationality searches. A director is identified by its
//! (first name, last name) pair, compared without regard to case.

use std::sync::Arc;

use crate::app::dto::{CreateDirectorRequest, DirectorDto, FilmDto, UpdateDirectorRequest};
use crate::app::mapper;
use crate::domain::entities::DirectorId;
use crate::domain::ports::{DirectorRepository, FilmRepository};
use crate::domain::validation::{
    validate_birth_date, validate_length, NAME_MAX_LEN, NAME_MIN_LEN,
};
use crate::error::DomainError;

/// Service for managing directors
pub struct DirectorService<DR, FR>
where
    DR: DirectorRepository,
    FR: FilmRepository,
{
    directors: Arc<DR>,
    films: Arc<FR>,
}

impl<DR, FR> DirectorService<DR, FR>
where
    DR: DirectorRepository,
    FR: FilmRepository,
{
    pub fn new(directors: Arc<DR>, films: Arc<FR>) -> Self {
        Self { directors, films }
    }

    pub async fn create(&self, request: &CreateDirectorRequest) -> Result<DirectorDto, DomainError> {
        tracing::info!(
            first_name = %request.first_name,
            last_name = %request.last_name,
            "Creating director"
        );

        validate_length(&request.first_name, "firstName", NAME_MIN_LEN, NAME_MAX_LEN)?;
        validate_length(&request.last_name, "lastName", NAME_MIN_LEN, NAME_MAX_LEN)?;
        validate_length(&request.nationality, "nationality", NAME_MIN_LEN, NAME_MAX_LEN)?;
        validate_birth_date(Some(request.birth_date))?;

        if self
            .directors
            .find_by_full_name(&request.first_name, &request.last_name)
            .await?
            .is_some()
        {
            return Err(duplicate_name(&request.first_name, &request.last_name));
        }

        let director = self
            .directors
            .create(&mapper::new_director_from_request(request))
            .await?;

        tracing::info!(director_id = %director.id, "Director created");
        Ok(mapper::director_to_dto(&director))
    }

    pub async fn get_by_id(&self, id: &DirectorId) -> Result<DirectorDto, DomainError> {
        tracing::debug!(director_id = %id, "Fetching director");
        let director = self.directors.find_by_id(id).await?;
        mapper::director_to_dto_opt(director.as_ref())
            .ok_or_else(|| DomainError::not_found("Director", id))
    }

    pub async fn list(&self) -> Result<Vec<DirectorDto>, DomainError> {
        let directors = self.directors.find_all().await?;
        Ok(directors.iter().map(mapper::director_to_dto).collect())
    }

    /// Apply a partial update.
    ///
    /// When either name field changes, the resulting pair must not belong to
    /// another director.
    pub async fn update(
        &self,
        id: &DirectorId,
        request: &UpdateDirectorRequest,
    ) -> Result<DirectorDto, DomainError> {
        tracing::info!(director_id = %id, "Updating director");

        let mut director = self
            .directors
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Director", id))?;

        if let Some(ref first_name) = request.first_name {
            validate_length(first_name, "firstName", NAME_MIN_LEN, NAME_MAX_LEN)?;
        }
        if let Some(ref last_name) = request.last_name {
            validate_length(last_name, "lastName", NAME_MIN_LEN, NAME_MAX_LEN)?;
        }
        if let Some(ref nationality) = request.nationality {
            validate_length(nationality, "nationality", NAME_MIN_LEN, NAME_MAX_LEN)?;
        }
        validate_birth_date(request.birth_date)?;

        let update = mapper::director_update_from_request(request);
        if update.touches_name() {
            let first_name = update.first_name.as_deref().unwrap_or(&director.first_name);
            let last_name = update.last_name.as_deref().unwrap_or(&director.last_name);

            if let Some(existing) = self
                .directors
                .find_by_full_name(first_name, last_name)
                .await?
            {
                if existing.id != director.id {
                    return Err(duplicate_name(first_name, last_name));
                }
            }
        }

        director.apply(&update);
        let director = self.directors.update(&director).await?;

        tracing::info!(director_id = %director.id, "Director updated");
        Ok(mapper::director_to_dto(&director))
    }

    /// Delete a director with no films
    pub async fn delete(&self, id: &DirectorId) -> Result<(), DomainError> {
        tracing::info!(director_id = %id, "Deleting director");

        if !self.directors.exists_by_id(id).await? {
            return Err(DomainError::not_found("Director", id));
        }

        let film_count = self.films.count_by_director(id).await?;
        if film_count > 0 {
            tracing::warn!(director_id = %id, film_count, "Director delete blocked by films");
            return Err(DomainError::BusinessRule {
                message: format!(
                    "Cannot delete director {}: {} film(s) still reference them. \
                     Delete or reassign those films first.",
                    id, film_count
                ),
                dependents: film_count,
            });
        }

        self.directors.delete_by_id(id).await?;
        tracing::info!(director_id = %id, "Director deleted");
        Ok(())
    }

    pub async fn get_filmography(&self, director_id: &DirectorId) -> Result<Vec<FilmDto>, DomainError> {
        if !self.directors.exists_by_id(director_id).await? {
            return Err(DomainError::not_found("Director", director_id));
        }

        let films = self.films.find_by_director(director_id).await?;
        Ok(films.iter().map(mapper::film_to_dto).collect())
    }

    pub async fn search_by_last_name(&self, last_name: &str) -> Result<Vec<DirectorDto>, DomainError> {
        tracing::debug!(query = %last_name, "Searching directors by last name");
        let directors = self.directors.find_by_last_name_containing(last_name).await?;
        Ok(directors.iter().map(mapper::director_to_dto).collect())
    }

    pub async fn search_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<DirectorDto>, DomainError> {
        tracing::debug!(query = %first_name, "Searching directors by first name");
        let directors = self
            .directors
            .find_by_first_name_containing(first_name)
            .await?;
        Ok(directors.iter().map(mapper::director_to_dto).collect())
    }

    /// Exact match on nationality
    pub async fn search_by_nationality(
        &self,
        nationality: &str,
    ) -> Result<Vec<DirectorDto>, DomainError> {
        tracing::debug!(query = %nationality, "Searching directors by nationality");
        let directors = self.directors.find_by_nationality(nationality).await?;
        Ok(directors.iter().map(mapper::director_to_dto).collect())
    }
}

fn duplicate_name(first_name: &str, last_name: &str) -> DomainError {
    DomainError::Conflict(format!(
        "Director '{} {}' already exists",
        first_name, last_name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};

    use crate::test_utils::{
        create_director_request, test_category, test_director, test_film,
        InMemoryCategoryRepository, InMemoryDirectorRepository, InMemoryFilmRepository,
    };

    fn create_service(
        directors: InMemoryDirectorRepository,
        films: InMemoryFilmRepository,
    ) -> DirectorService<InMemoryDirectorRepository, InMemoryFilmRepository> {
        DirectorService::new(Arc::new(directors), Arc::new(films))
    }

    fn empty_service() -> DirectorService<InMemoryDirectorRepository, InMemoryFilmRepository> {
        let directors = InMemoryDirectorRepository::new();
        let films = InMemoryFilmRepository::new(&directors, &InMemoryCategoryRepository::new());
        create_service(directors, films)
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let service = empty_service();

        let created = service
            .create(&create_director_request("Ann", "Lee"))
            .await
            .unwrap();
        let fetched = service.get_by_id(&DirectorId(created.id)).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.full_name, "Ann Lee");
    }

    #[tokio::test]
    async fn create_fails_with_duplicate_name_any_case() {
        let service = empty_service();
        service
            .create(&create_director_request("Ann", "Lee"))
            .await
            .unwrap();

        let err = service
            .create(&create_director_request("ann", "LEE"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_fails_with_future_birth_date() {
        let service = empty_service();
        let mut request = create_director_request("Ann", "Lee");
        request.birth_date = Utc::now().date_naive() + Duration::days(1);

        let err = service.create(&request).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation {
                field: "birthDate",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn create_fails_with_one_letter_name() {
        let service = empty_service();

        let err = service
            .create(&create_director_request("A", "Lee"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation {
                field: "firstName",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn update_one_field_leaves_others() {
        let service = empty_service();
        let created = service
            .create(&create_director_request("Ann", "Lee"))
            .await
            .unwrap();

        let updated = service
            .update(
                &DirectorId(created.id),
                &UpdateDirectorRequest {
                    nationality: Some("KR".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.nationality, "KR");
        assert_eq!(updated.first_name, created.first_name);
        assert_eq!(updated.last_name, created.last_name);
        assert_eq!(updated.birth_date, created.birth_date);
        assert_eq!(updated.biography, created.biography);
    }

    #[tokio::test]
    async fn update_last_name_recomputes_full_name() {
        let service = empty_service();
        let created = service
            .create(&create_director_request("Ann", "Lee"))
            .await
            .unwrap();

        let updated = service
            .update(
                &DirectorId(created.id),
                &UpdateDirectorRequest {
                    last_name: Some("Park".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.full_name, "Ann Park");
    }

    #[tokio::test]
    async fn update_to_existing_pair_conflicts() {
        let service = empty_service();
        service
            .create(&create_director_request("Ann", "Lee"))
            .await
            .unwrap();
        let other = service
            .create(&create_director_request("Ann", "Park"))
            .await
            .unwrap();

        // Only the last name is given; the first name comes from storage.
        let err = service
            .update(
                &DirectorId(other.id),
                &UpdateDirectorRequest {
                    last_name: Some("lee".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_own_name_case_succeeds() {
        let service = empty_service();
        let created = service
            .create(&create_director_request("Ann", "Lee"))
            .await
            .unwrap();

        let updated = service
            .update(
                &DirectorId(created.id),
                &UpdateDirectorRequest {
                    first_name: Some("ANN".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.full_name, "ANN Lee");
    }

    #[tokio::test]
    async fn update_rejects_future_birth_date() {
        let service = empty_service();
        let created = service
            .create(&create_director_request("Ann", "Lee"))
            .await
            .unwrap();

        let err = service
            .update(
                &DirectorId(created.id),
                &UpdateDirectorRequest {
                    birth_date: NaiveDate::from_ymd_opt(2999, 1, 1),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn delete_blocked_while_films_reference_director() {
        let director = test_director();
        let category = test_category();
        let directors = InMemoryDirectorRepository::new().with_director(director.clone());
        let categories = InMemoryCategoryRepository::new().with_category(category.clone());
        let films = InMemoryFilmRepository::new(&directors, &categories)
            .with_film(test_film(&director, &category));
        let service = create_service(directors, films);

        let err = service.delete(&director.id).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::BusinessRule { dependents: 1, .. }
        ));
    }

    #[tokio::test]
    async fn delete_without_films_succeeds() {
        let director = test_director();
        let directors = InMemoryDirectorRepository::new().with_director(director.clone());
        let films = InMemoryFilmRepository::new(&directors, &InMemoryCategoryRepository::new());
        let service = create_service(directors, films);

        service.delete(&director.id).await.unwrap();

        assert!(service.get_by_id(&director.id).await.is_err());
    }

    #[tokio::test]
    async fn delete_missing_director_not_found() {
        let service = empty_service();

        let err = service.delete(&DirectorId(3)).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "Director",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn filmography_lists_director_films() {
        let director = test_director();
        let category = test_category();
        let directors = InMemoryDirectorRepository::new().with_director(director.clone());
        let categories = InMemoryCategoryRepository::new().with_category(category.clone());
        let films = InMemoryFilmRepository::new(&directors, &categories)
            .with_film(test_film(&director, &category));
        let service = create_service(directors, films);

        let films = service.get_filmography(&director.id).await.unwrap();

        assert_eq!(films.len(), 1);
        assert_eq!(films[0].director.id, director.id.0);
    }

    #[tokio::test]
    async fn filmography_of_missing_director_not_found() {
        let service = empty_service();

        let err = service.get_filmography(&DirectorId(8)).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn searches() {
        let service = empty_service();
        service
            .create(&create_director_request("Ann", "Lee"))
            .await
            .unwrap();
        service
            .create(&create_director_request("Spike", "Lee"))
            .await
            .unwrap();
        let mut french = create_director_request("Agnes", "Varda");
        french.nationality = "FR".to_string();
        service.create(&french).await.unwrap();

        assert_eq!(service.search_by_last_name("LEE").await.unwrap().len(), 2);
        assert_eq!(service.search_by_first_name("an").await.unwrap().len(), 1);
        assert_eq!(service.search_by_nationality("FR").await.unwrap().len(), 1);
        // Nationality is an exact match
        assert!(service.search_by_nationality("fr").await.unwrap().is_empty());
    }
}
