//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.
//! Maps are ordered by id so "storage order" is deterministic.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Category, CategoryId, Director, DirectorId, Film, FilmDetails, FilmId, NewCategory,
    NewDirector, NewFilm,
};
use crate::domain::ports::{CategoryRepository, DirectorRepository, FilmRepository};
use crate::error::DomainError;

type Store<K, V> = Arc<RwLock<BTreeMap<K, V>>>;

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn bump(next_id: &AtomicI64, seen: i64) {
    next_id.fetch_max(seen + 1, Ordering::Relaxed);
}

// ============================================================================
// In-Memory Category Repository
// ============================================================================

pub struct InMemoryCategoryRepository {
    categories: Store<CategoryId, Category>,
    next_id: AtomicI64,
    failing: bool,
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self {
            categories: Arc::default(),
            next_id: AtomicI64::new(1),
            failing: false,
        }
    }
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a storage error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a category for testing
    pub fn with_category(self, category: Category) -> Self {
        bump(&self.next_id, category.id.0);
        self.categories
            .write()
            .unwrap()
            .insert(category.id, category);
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            return Err(DomainError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, new_category: &NewCategory) -> Result<Category, DomainError> {
        self.check()?;
        let now = Utc::now();
        let category = Category {
            id: CategoryId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            name: new_category.name.clone(),
            description: new_category.description.clone(),
            created_at: now,
            updated_at: now,
        };

        self.categories
            .write()
            .unwrap()
            .insert(category.id, category.clone());
        Ok(category)
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        self.check()?;
        let mut categories = self.categories.write().unwrap();
        let stored = categories
            .get_mut(&category.id)
            .ok_or_else(|| DomainError::Database(format!("Category {} vanished", category.id)))?;

        let created_at = stored.created_at;
        *stored = Category {
            created_at,
            updated_at: Utc::now(),
            ..category.clone()
        };
        Ok(stored.clone())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        self.check()?;
        Ok(self.categories.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        self.check()?;
        Ok(self.categories.read().unwrap().values().cloned().collect())
    }

    async fn exists_by_id(&self, id: &CategoryId) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.categories.read().unwrap().contains_key(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        self.check()?;
        let name = name.to_lowercase();
        Ok(self
            .categories
            .read()
            .unwrap()
            .values()
            .find(|c| c.name.to_lowercase() == name)
            .cloned())
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), DomainError> {
        self.check()?;
        self.categories.write().unwrap().remove(id);
        Ok(())
    }

    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Category>, DomainError> {
        self.check()?;
        Ok(self
            .categories
            .read()
            .unwrap()
            .values()
            .filter(|c| contains_ignore_case(&c.name, name))
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Director Repository
// ============================================================================

pub struct InMemoryDirectorRepository {
    directors: Store<DirectorId, Director>,
    next_id: AtomicI64,
}

impl Default for InMemoryDirectorRepository {
    fn default() -> Self {
        Self {
            directors: Arc::default(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryDirectorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a director for testing
    pub fn with_director(self, director: Director) -> Self {
        bump(&self.next_id, director.id.0);
        self.directors
            .write()
            .unwrap()
            .insert(director.id, director);
        self
    }
}

#[async_trait]
impl DirectorRepository for InMemoryDirectorRepository {
    async fn create(&self, new_director: &NewDirector) -> Result<Director, DomainError> {
        let now = Utc::now();
        let director = Director {
            id: DirectorId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            first_name: new_director.first_name.clone(),
            last_name: new_director.last_name.clone(),
            nationality: new_director.nationality.clone(),
            birth_date: new_director.birth_date,
            biography: new_director.biography.clone(),
            created_at: now,
            updated_at: now,
        };

        self.directors
            .write()
            .unwrap()
            .insert(director.id, director.clone());
        Ok(director)
    }

    async fn update(&self, director: &Director) -> Result<Director, DomainError> {
        let mut directors = self.directors.write().unwrap();
        let stored = directors
            .get_mut(&director.id)
            .ok_or_else(|| DomainError::Database(format!("Director {} vanished", director.id)))?;

        let created_at = stored.created_at;
        *stored = Director {
            created_at,
            updated_at: Utc::now(),
            ..director.clone()
        };
        Ok(stored.clone())
    }

    async fn find_by_id(&self, id: &DirectorId) -> Result<Option<Director>, DomainError> {
        Ok(self.directors.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Director>, DomainError> {
        Ok(self.directors.read().unwrap().values().cloned().collect())
    }

    async fn exists_by_id(&self, id: &DirectorId) -> Result<bool, DomainError> {
        Ok(self.directors.read().unwrap().contains_key(id))
    }

    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Director>, DomainError> {
        Ok(self
            .directors
            .read()
            .unwrap()
            .values()
            .find(|d| d.has_name(first_name, last_name))
            .cloned())
    }

    async fn delete_by_id(&self, id: &DirectorId) -> Result<(), DomainError> {
        self.directors.write().unwrap().remove(id);
        Ok(())
    }

    async fn find_by_last_name_containing(
        &self,
        last_name: &str,
    ) -> Result<Vec<Director>, DomainError> {
        Ok(self
            .directors
            .read()
            .unwrap()
            .values()
            .filter(|d| contains_ignore_case(&d.last_name, last_name))
            .cloned()
            .collect())
    }

    async fn find_by_first_name_containing(
        &self,
        first_name: &str,
    ) -> Result<Vec<Director>, DomainError> {
        Ok(self
            .directors
            .read()
            .unwrap()
            .values()
            .filter(|d| contains_ignore_case(&d.first_name, first_name))
            .cloned()
            .collect())
    }

    async fn find_by_nationality(&self, nationality: &str) -> Result<Vec<Director>, DomainError> {
        Ok(self
            .directors
            .read()
            .unwrap()
            .values()
            .filter(|d| d.nationality == nationality)
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Film Repository
// ============================================================================

/// Shares the director and category stores it was built from, so eager
/// fetches see the same data the other repositories hold.
pub struct InMemoryFilmRepository {
    films: Store<FilmId, Film>,
    directors: Store<DirectorId, Director>,
    categories: Store<CategoryId, Category>,
    next_id: AtomicI64,
}

impl InMemoryFilmRepository {
    pub fn new(
        directors: &InMemoryDirectorRepository,
        categories: &InMemoryCategoryRepository,
    ) -> Self {
        Self {
            films: Arc::default(),
            directors: directors.directors.clone(),
            categories: categories.categories.clone(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Pre-populate with a film for testing
    pub fn with_film(self, film: Film) -> Self {
        bump(&self.next_id, film.id.0);
        self.films.write().unwrap().insert(film.id, film);
        self
    }

    fn details(&self, film: &Film) -> Result<FilmDetails, DomainError> {
        let director = self
            .directors
            .read()
            .unwrap()
            .get(&film.director_id)
            .cloned()
            .ok_or_else(|| {
                DomainError::Database(format!("Film {} has dangling director", film.id))
            })?;
        let category = self
            .categories
            .read()
            .unwrap()
            .get(&film.category_id)
            .cloned()
            .ok_or_else(|| {
                DomainError::Database(format!("Film {} has dangling category", film.id))
            })?;

        Ok(FilmDetails {
            film: film.clone(),
            director,
            category,
        })
    }

    fn select<P>(&self, predicate: P) -> Result<Vec<FilmDetails>, DomainError>
    where
        P: Fn(&Film) -> bool,
    {
        let films: Vec<Film> = self
            .films
            .read()
            .unwrap()
            .values()
            .filter(|f| predicate(f))
            .cloned()
            .collect();

        films.iter().map(|f| self.details(f)).collect()
    }
}

#[async_trait]
impl FilmRepository for InMemoryFilmRepository {
    async fn create(&self, new_film: &NewFilm) -> Result<Film, DomainError> {
        let now = Utc::now();
        let film = Film {
            id: FilmId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            title: new_film.title.clone(),
            release_year: new_film.release_year,
            duration: new_film.duration,
            synopsis: new_film.synopsis.clone(),
            rating: new_film.rating,
            director_id: new_film.director_id,
            category_id: new_film.category_id,
            created_at: now,
            updated_at: now,
        };

        self.films.write().unwrap().insert(film.id, film.clone());
        Ok(film)
    }

    async fn update(&self, film: &Film) -> Result<Film, DomainError> {
        let mut films = self.films.write().unwrap();
        let stored = films
            .get_mut(&film.id)
            .ok_or_else(|| DomainError::Database(format!("Film {} vanished", film.id)))?;

        let created_at = stored.created_at;
        *stored = Film {
            created_at,
            updated_at: Utc::now(),
            ..film.clone()
        };
        Ok(stored.clone())
    }

    async fn find_by_id(&self, id: &FilmId) -> Result<Option<Film>, DomainError> {
        Ok(self.films.read().unwrap().get(id).cloned())
    }

    async fn find_by_id_with_details(
        &self,
        id: &FilmId,
    ) -> Result<Option<FilmDetails>, DomainError> {
        let film = self.films.read().unwrap().get(id).cloned();
        film.map(|f| self.details(&f)).transpose()
    }

    async fn find_all_with_details(&self) -> Result<Vec<FilmDetails>, DomainError> {
        self.select(|_| true)
    }

    async fn exists_by_id(&self, id: &FilmId) -> Result<bool, DomainError> {
        Ok(self.films.read().unwrap().contains_key(id))
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool, DomainError> {
        Ok(self
            .films
            .read()
            .unwrap()
            .values()
            .any(|f| f.title == title))
    }

    async fn delete_by_id(&self, id: &FilmId) -> Result<(), DomainError> {
        self.films.write().unwrap().remove(id);
        Ok(())
    }

    async fn find_by_title_containing(
        &self,
        title: &str,
    ) -> Result<Vec<FilmDetails>, DomainError> {
        self.select(|f| contains_ignore_case(&f.title, title))
    }

    async fn find_by_release_year(&self, year: i32) -> Result<Vec<FilmDetails>, DomainError> {
        self.select(|f| f.release_year == year)
    }

    async fn find_by_release_year_between(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<FilmDetails>, DomainError> {
        self.select(|f| (start..=end).contains(&f.release_year))
    }

    async fn find_by_director(
        &self,
        director_id: &DirectorId,
    ) -> Result<Vec<FilmDetails>, DomainError> {
        self.select(|f| f.director_id == *director_id)
    }

    async fn find_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<FilmDetails>, DomainError> {
        self.select(|f| f.category_id == *category_id)
    }

    async fn find_by_min_rating(&self, min_rating: f64) -> Result<Vec<FilmDetails>, DomainError> {
        self.select(|f| f.rating.is_some_and(|r| r >= min_rating))
    }

    async fn count_by_director(&self, director_id: &DirectorId) -> Result<u64, DomainError> {
        Ok(self
            .films
            .read()
            .unwrap()
            .values()
            .filter(|f| f.director_id == *director_id)
            .count() as u64)
    }

    async fn count_by_category(&self, category_id: &CategoryId) -> Result<u64, DomainError> {
        Ok(self
            .films
            .read()
            .unwrap()
            .values()
            .filter(|f| f.category_id == *category_id)
            .count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    async fn tick() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    #[tokio::test]
    async fn category_update_keeps_created_at() {
        let repo = InMemoryCategoryRepository::new();
        let created = repo
            .create(&NewCategory {
                name: "Drama".to_string(),
                description: None,
            })
            .await
            .unwrap();
        tick().await;

        let mut changed = created.clone();
        changed.name = "Thriller".to_string();
        let updated = repo.update(&changed).await.unwrap();

        assert_eq!(updated.name, "Thriller");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn director_update_keeps_created_at() {
        let repo = InMemoryDirectorRepository::new();
        let created = repo
            .create(&NewDirector {
                first_name: "Ann".to_string(),
                last_name: "Lee".to_string(),
                nationality: "US".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                biography: None,
            })
            .await
            .unwrap();
        tick().await;

        // A caller-supplied created_at is ignored
        let mut changed = created.clone();
        changed.nationality = "CA".to_string();
        changed.created_at = Utc::now();
        let updated = repo.update(&changed).await.unwrap();

        assert_eq!(updated.nationality, "CA");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn film_update_keeps_created_at() {
        let directors = InMemoryDirectorRepository::new();
        let categories = InMemoryCategoryRepository::new();
        let director = directors
            .create(&NewDirector {
                first_name: "Ann".to_string(),
                last_name: "Lee".to_string(),
                nationality: "US".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                biography: None,
            })
            .await
            .unwrap();
        let category = categories
            .create(&NewCategory {
                name: "Drama".to_string(),
                description: None,
            })
            .await
            .unwrap();
        let repo = InMemoryFilmRepository::new(&directors, &categories);
        let created = repo
            .create(&NewFilm {
                title: "Go Home".to_string(),
                release_year: 2020,
                duration: 90,
                synopsis: None,
                rating: None,
                director_id: director.id,
                category_id: category.id,
            })
            .await
            .unwrap();
        tick().await;

        let mut changed = created.clone();
        changed.rating = Some(8.5);
        let first = repo.update(&changed).await.unwrap();
        tick().await;
        let second = repo.update(&first).await.unwrap();

        assert_eq!(first.rating, Some(8.5));
        assert_eq!(first.created_at, created.created_at);
        assert_eq!(second.created_at, created.created_at);
        assert!(first.updated_at > created.updated_at);
        assert!(second.updated_at > first.updated_at);
    }
}
