use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Certifications::Title).text().not_null())
                    .col(ColumnDef::new(Certifications::Issuer).text().not_null())
                    .col(ColumnDef::new(Certifications::Date).date().not_null())
                    .col(ColumnDef::new(Certifications::CredentialId).text())
                    .col(ColumnDef::new(Certifications::CredentialUrl).text())
                    .col(ColumnDef::new(Certifications::Image).json_binary())
                    .col(
                        ColumnDef::new(Certifications::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Certifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Certifications::UpdatedAt)
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
            .drop_table(Table::drop().table(Certifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certifications {
    Table,
    Id,
    Title,
    Issuer,
    Date,
    CredentialId,
    CredentialUrl,
    Image,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
