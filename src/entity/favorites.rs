use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A user's favorite catalog item.
///
/// `user_id` and `item_id` are soft references: nothing in the schema ties
/// them to `users` or to the catalog table named by `item_type`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub item_id: i32,
    pub item_type: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
