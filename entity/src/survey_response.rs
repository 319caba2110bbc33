use sea_orm::entity::prelude::*;

/// One submitted survey form.
///
/// `time_ranges` holds the selected slot labels as a JSON array of strings in
/// the order they were submitted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "survey_response")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub in_game_name: String,
    pub time_zone: String,
    #[sea_orm(column_type = "Json")]
    pub time_ranges: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
