use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub company: String,

    #[sea_orm(column_type = "Text")]
    pub location: String,

    #[sea_orm(column_type = "Text")]
    pub employment_type: String,

    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    pub current: bool,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub responsibilities: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub company_logo: Option<Json>,

    pub sort_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
