use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Blogs::Title).text().not_null())
                    .col(ColumnDef::new(Blogs::Slug).text().not_null())
                    .col(ColumnDef::new(Blogs::Excerpt).text().not_null().default(""))
                    .col(ColumnDef::new(Blogs::Content).text().not_null())
                    .col(ColumnDef::new(Blogs::FeaturedImage).json_binary())
                    .col(ColumnDef::new(Blogs::Tags).json_binary().not_null())
                    .col(
                        ColumnDef::new(Blogs::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Blogs::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Blogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Blogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Backstop for the slug search in the service layer
        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_slug_unique")
                    .table(Blogs::Table)
                    .col(Blogs::Slug)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Public listing: published posts, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_blogs_published_created_at
                ON blogs (published, created_at DESC);
                "#,
            )
            .await?;

        // Tag filter uses `tags @> '["rust"]'`
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_blogs_tags
                ON blogs USING GIN (tags);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_blogs_tags;
                DROP INDEX IF EXISTS idx_blogs_published_created_at;
                DROP INDEX IF EXISTS idx_blogs_slug_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    FeaturedImage,
    Tags,
    Published,
    Views,
    CreatedAt,
    UpdatedAt,
}
