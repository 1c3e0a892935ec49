use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub short_description: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub thumbnail: Option<Json>,

    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub tech_stack: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub links: Json,

    #[sea_orm(column_type = "Text")]
    pub category: String,

    pub featured: bool,

    pub sort_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
