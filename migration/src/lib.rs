//! Schema migrations for the catalog.
//! Tables are created parents first; unique indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_categories;
mod m20240101_000002_create_directors;
mod m20240101_000003_create_films;
mod m20240101_000004_add_unique_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_categories::Migration),
            Box::new(m20240101_000002_create_directors::Migration),
            Box::new(m20240101_000003_create_films::Migration),
            Box::new(m20240101_000004_add_unique_indexes::Migration),
        ]
    }
}
