use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experiences::Title).text().not_null())
                    .col(ColumnDef::new(Experiences::Company).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::Location)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Experiences::EmploymentType)
                            .text()
                            .not_null()
                            .default("full-time"),
                    )
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(
                        ColumnDef::new(Experiences::Current)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Experiences::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Experiences::Responsibilities)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Technologies)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::CompanyLogo).json_binary())
                    .col(
                        ColumnDef::new(Experiences::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experiences::UpdatedAt)
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
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Location,
    EmploymentType,
    StartDate,
    EndDate,
    Current,
    Description,
    Responsibilities,
    Technologies,
    CompanyLogo,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
