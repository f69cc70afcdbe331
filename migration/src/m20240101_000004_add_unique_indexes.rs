use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Films: title is unique as written
        manager
            .create_index(
                Index::create()
                    .name("uniq_films_title")
                    .table(Films::Table)
                    .col(Films::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Expression indexes are not expressible through the index builder
        let db = manager.get_connection();
        db.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS uniq_categories_name_ci \
             ON categories (lower(name))",
        )
        .await?;
        db.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS uniq_directors_full_name_ci \
             ON directors (lower(first_name), lower(last_name))",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP INDEX IF EXISTS uniq_directors_full_name_ci")
            .await?;
        db.execute_unprepared("DROP INDEX IF EXISTS uniq_categories_name_ci")
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uniq_films_title")
                    .table(Films::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Films {
    Table,
    Title,
}
