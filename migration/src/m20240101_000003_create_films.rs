use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Films::Table)
                    .if_not_exists()
                    .col(big_integer(Films::Id).primary_key().auto_increment())
                    .col(string_len(Films::Title, 255).not_null())
                    .col(integer(Films::ReleaseYear).not_null())
                    .col(integer(Films::Duration).not_null())
                    .col(text_null(Films::Synopsis))
                    .col(double_null(Films::Rating))
                    .col(big_integer(Films::DirectorId).not_null())
                    .col(big_integer(Films::CategoryId).not_null())
                    .col(timestamp_with_time_zone(Films::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Films::UpdatedAt).not_null())
                    // Deletes are guarded in the service layer; the database
                    // refuses to orphan a film either way.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_films_director")
                            .from(Films::Table, Films::DirectorId)
                            .to(Directors::Table, Directors::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_films_category")
                            .from(Films::Table, Films::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_films_director")
                    .table(Films::Table)
                    .col(Films::DirectorId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_films_category")
                    .table(Films::Table)
                    .col(Films::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Films::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Films {
    Table,
    Id,
    Title,
    ReleaseYear,
    Duration,
    Synopsis,
    Rating,
    DirectorId,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Directors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}
