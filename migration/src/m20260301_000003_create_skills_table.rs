use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::Name).text().not_null())
                    .col(ColumnDef::new(Skills::Logo).json_binary())
                    .col(
                        ColumnDef::new(Skills::Category)
                            .text()
                            .not_null()
                            .default("other"),
                    )
                    .col(
                        ColumnDef::new(Skills::Proficiency)
                            .integer()
                            .not_null()
                            .default(50)
                            .check(Expr::col(Skills::Proficiency).between(0, 100)),
                    )
                    .col(
                        ColumnDef::new(Skills::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Skills::DisplayInMarquee)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Skills::UpdatedAt)
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
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Logo,
    Category,
    Proficiency,
    SortOrder,
    DisplayInMarquee,
    CreatedAt,
    UpdatedAt,
}
