//! PostgreSQL adapter for FilmRepository
//!
//! Detail queries load the matching films first, then their directors and
//! categories in one query each.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::{contains_pattern, map_db_err};
use crate::domain::entities::{
    Category, CategoryId, Director, DirectorId, Film, FilmDetails, FilmId, NewFilm,
};
use crate::domain::ports::FilmRepository;
use crate::entity::{categories, directors, films};
use crate::error::DomainError;

/// PostgreSQL implementation of FilmRepository
pub struct PostgresFilmRepository {
    db: DatabaseConnection,
}

impl PostgresFilmRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load films matching `condition`, ordered by id, with references resolved
    async fn find_details_where(
        &self,
        condition: Condition,
    ) -> Result<Vec<FilmDetails>, DomainError> {
        let models = films::Entity::find()
            .filter(condition)
            .order_by_asc(films::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        self.attach_references(models).await
    }

    async fn attach_references(
        &self,
        models: Vec<films::Model>,
    ) -> Result<Vec<FilmDetails>, DomainError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let director_ids: Vec<i64> = models.iter().map(|m| m.director_id).collect();
        let category_ids: Vec<i64> = models.iter().map(|m| m.category_id).collect();

        let directors: HashMap<i64, Director> = directors::Entity::find()
            .filter(directors::Column::Id.is_in(director_ids))
            .all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|m| (m.id, m.into()))
            .collect();
        let categories: HashMap<i64, Category> = categories::Entity::find()
            .filter(categories::Column::Id.is_in(category_ids))
            .all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|m| (m.id, m.into()))
            .collect();

        models
            .into_iter()
            .map(|model| {
                let director = directors.get(&model.director_id).cloned().ok_or_else(|| {
                    DomainError::Database(format!("Film {} has dangling director", model.id))
                })?;
                let category = categories.get(&model.category_id).cloned().ok_or_else(|| {
                    DomainError::Database(format!("Film {} has dangling category", model.id))
                })?;

                Ok(FilmDetails {
                    film: model.into(),
                    director,
                    category,
                })
            })
            .collect()
    }
}

#[async_trait]
impl FilmRepository for PostgresFilmRepository {
    async fn create(&self, film: &NewFilm) -> Result<Film, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = films::ActiveModel {
            title: Set(film.title.clone()),
            release_year: Set(film.release_year),
            duration: Set(film.duration),
            synopsis: Set(film.synopsis.clone()),
            rating: Set(film.rating),
            director_id: Set(film.director_id.0),
            category_id: Set(film.category_id.0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(result.into())
    }

    async fn update(&self, film: &Film) -> Result<Film, DomainError> {
        let result = films::ActiveModel {
            id: Set(film.id.0),
            title: Set(film.title.clone()),
            release_year: Set(film.release_year),
            duration: Set(film.duration),
            synopsis: Set(film.synopsis.clone()),
            rating: Set(film.rating),
            director_id: Set(film.director_id.0),
            category_id: Set(film.category_id.0),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: &FilmId) -> Result<Option<Film>, DomainError> {
        let result = films::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_id_with_details(
        &self,
        id: &FilmId,
    ) -> Result<Option<FilmDetails>, DomainError> {
        let details = self
            .find_details_where(Condition::all().add(films::Column::Id.eq(id.0)))
            .await?;

        Ok(details.into_iter().next())
    }

    async fn find_all_with_details(&self) -> Result<Vec<FilmDetails>, DomainError> {
        self.find_details_where(Condition::all()).await
    }

    async fn exists_by_id(&self, id: &FilmId) -> Result<bool, DomainError> {
        let count = films::Entity::find()
            .filter(films::Column::Id.eq(id.0))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool, DomainError> {
        let count = films::Entity::find()
            .filter(films::Column::Title.eq(title))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: &FilmId) -> Result<(), DomainError> {
        films::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn find_by_title_containing(
        &self,
        title: &str,
    ) -> Result<Vec<FilmDetails>, DomainError> {
        self.find_details_where(
            Condition::all().add(
                Expr::expr(Func::lower(Expr::col(films::Column::Title)))
                    .like(contains_pattern(title)),
            ),
        )
        .await
    }

    async fn find_by_release_year(&self, year: i32) -> Result<Vec<FilmDetails>, DomainError> {
        self.find_details_where(Condition::all().add(films::Column::ReleaseYear.eq(year)))
            .await
    }

    async fn find_by_release_year_between(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<FilmDetails>, DomainError> {
        self.find_details_where(
            Condition::all().add(films::Column::ReleaseYear.between(start, end)),
        )
        .await
    }

    async fn find_by_director(
        &self,
        director_id: &DirectorId,
    ) -> Result<Vec<FilmDetails>, DomainError> {
        self.find_details_where(Condition::all().add(films::Column::DirectorId.eq(director_id.0)))
            .await
    }

    async fn find_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<FilmDetails>, DomainError> {
        self.find_details_where(Condition::all().add(films::Column::CategoryId.eq(category_id.0)))
            .await
    }

    async fn find_by_min_rating(&self, min_rating: f64) -> Result<Vec<FilmDetails>, DomainError> {
        // NULL ratings never satisfy the comparison
        self.find_details_where(Condition::all().add(films::Column::Rating.gte(min_rating)))
            .await
    }

    async fn count_by_director(&self, director_id: &DirectorId) -> Result<u64, DomainError> {
        films::Entity::find()
            .filter(films::Column::DirectorId.eq(director_id.0))
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn count_by_category(&self, category_id: &CategoryId) -> Result<u64, DomainError> {
        films::Entity::find()
            .filter(films::Column::CategoryId.eq(category_id.0))
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }
}

/// Convert SeaORM model to domain entity
impl From<films::Model> for Film {
    fn from(model: films::Model) -> Self {
        Film {
            id: FilmId(model.id),
            title: model.title,
            release_year: model.release_year,
            duration: model.duration,
            synopsis: model.synopsis,
            rating: model.rating,
            director_id: DirectorId(model.director_id),
            category_id: CategoryId(model.category_id),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
