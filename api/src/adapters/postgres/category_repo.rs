//! PostgreSQL adapter for CategoryRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{contains_pattern, map_db_err};
use crate::domain::entities::{Category, CategoryId, NewCategory};
use crate::domain::ports::CategoryRepository;
use crate::entity::categories;
use crate::error::DomainError;

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = categories::ActiveModel {
            name: Set(category.name.clone()),
            description: Set(category.description.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(result.into())
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        let result = categories::ActiveModel {
            id: Set(category.id.0),
            name: Set(category.name.clone()),
            description: Set(category.description.clone()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let results = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn exists_by_id(&self, id: &CategoryId) -> Result<bool, DomainError> {
        let count = categories::Entity::find()
            .filter(categories::Column::Id.eq(id.0))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(categories::Column::Name)))
                    .eq(name.to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), DomainError> {
        categories::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Category>, DomainError> {
        let results = categories::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(categories::Column::Name)))
                    .like(contains_pattern(name)),
            )
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Category {
            id: CategoryId(model.id),
            name: model.name,
            description: model.description,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
