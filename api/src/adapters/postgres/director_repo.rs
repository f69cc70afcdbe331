//! PostgreSQL adapter for DirectorRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{contains_pattern, map_db_err};
use crate::domain::entities::{Director, DirectorId, NewDirector};
use crate::domain::ports::DirectorRepository;
use crate::entity::directors;
use crate::error::DomainError;

/// PostgreSQL implementation of DirectorRepository
pub struct PostgresDirectorRepository {
    db: DatabaseConnection,
}

impl PostgresDirectorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_where_lower_like(
        &self,
        column: directors::Column,
        needle: &str,
    ) -> Result<Vec<Director>, DomainError> {
        let results = directors::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(column))).like(contains_pattern(needle)))
            .order_by_asc(directors::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

#[async_trait]
impl DirectorRepository for PostgresDirectorRepository {
    async fn create(&self, director: &NewDirector) -> Result<Director, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = directors::ActiveModel {
            first_name: Set(director.first_name.clone()),
            last_name: Set(director.last_name.clone()),
            nationality: Set(director.nationality.clone()),
            birth_date: Set(director.birth_date),
            biography: Set(director.biography.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(result.into())
    }

    async fn update(&self, director: &Director) -> Result<Director, DomainError> {
        let result = directors::ActiveModel {
            id: Set(director.id.0),
            first_name: Set(director.first_name.clone()),
            last_name: Set(director.last_name.clone()),
            nationality: Set(director.nationality.clone()),
            birth_date: Set(director.birth_date),
            biography: Set(director.biography.clone()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: &DirectorId) -> Result<Option<Director>, DomainError> {
        let result = directors::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Director>, DomainError> {
        let results = directors::Entity::find()
            .order_by_asc(directors::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn exists_by_id(&self, id: &DirectorId) -> Result<bool, DomainError> {
        let count = directors::Entity::find()
            .filter(directors::Column::Id.eq(id.0))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Director>, DomainError> {
        let result = directors::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(directors::Column::FirstName)))
                    .eq(first_name.to_lowercase()),
            )
            .filter(
                Expr::expr(Func::lower(Expr::col(directors::Column::LastName)))
                    .eq(last_name.to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn delete_by_id(&self, id: &DirectorId) -> Result<(), DomainError> {
        directors::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn find_by_last_name_containing(
        &self,
        last_name: &str,
    ) -> Result<Vec<Director>, DomainError> {
        self.find_where_lower_like(directors::Column::LastName, last_name)
            .await
    }

    async fn find_by_first_name_containing(
        &self,
        first_name: &str,
    ) -> Result<Vec<Director>, DomainError> {
        self.find_where_lower_like(directors::Column::FirstName, first_name)
            .await
    }

    async fn find_by_nationality(&self, nationality: &str) -> Result<Vec<Director>, DomainError> {
        let results = directors::Entity::find()
            .filter(directors::Column::Nationality.eq(nationality))
            .order_by_asc(directors::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<directors::Model> for Director {
    fn from(model: directors::Model) -> Self {
        Director {
            id: DirectorId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            nationality: model.nationality,
            birth_date: model.birth_date,
            biography: model.biography,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
