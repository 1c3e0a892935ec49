use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per document kind (hero, journey, timeline, contact, theme).
        manager
            .create_table(
                Table::create()
                    .table(SingletonDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SingletonDocuments::Kind)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SingletonDocuments::Id)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SingletonDocuments::Document)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SingletonDocuments::Version)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(SingletonDocuments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SingletonDocuments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SingletonDocuments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SingletonDocuments {
    Table,
    Kind,
    Id,
    Document,
    Version,
    CreatedAt,
    UpdatedAt,
}
