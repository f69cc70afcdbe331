use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Directors::Table)
                    .if_not_exists()
                    .col(big_integer(Directors::Id).primary_key().auto_increment())
                    .col(string_len(Directors::FirstName, 100).not_null())
                    .col(string_len(Directors::LastName, 100).not_null())
                    .col(string_len(Directors::Nationality, 100).not_null())
                    .col(date(Directors::BirthDate).not_null())
                    .col(text_null(Directors::Biography))
                    .col(timestamp_with_time_zone(Directors::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Directors::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Directors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Directors {
    Table,
    Id,
    FirstName,
    LastName,
    Nationality,
    BirthDate,
    Biography,
    CreatedAt,
    UpdatedAt,
}
