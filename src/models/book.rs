use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of genres; stored as TEXT, serialized in the wire format the
/// catalog has always used (upper snake case).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookGenre {
    #[sea_orm(string_value = "SCIENCE")]
    Science,
    #[sea_orm(string_value = "FICTION")]
    Fiction,
    #[sea_orm(string_value = "NON_FICTION")]
    NonFiction,
    #[sea_orm(string_value = "FANTASY")]
    Fantasy,
    #[sea_orm(string_value = "MYSTERY")]
    Mystery,
    #[sea_orm(string_value = "BIOGRAPHY")]
    Biography,
    #[sea_orm(string_value = "HISTORY")]
    History,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub isbn: String,
    pub publication_year: i32,
    // Both replaced wholesale on update; non-negative by convention
    pub available_copies: i32,
    pub price: f64,
    pub genre: BookGenre,
    pub author_id: i32,
    pub publisher_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::publisher::Entity",
        from = "Column::PublisherId",
        to = "super::publisher::Column::Id"
    )]
    Publisher,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
