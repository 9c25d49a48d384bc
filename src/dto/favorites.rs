use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{FavoriteItem, ItemType};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddFavoriteRequest {
    #[serde(rename = "id_unico")]
    pub item_id: Option<i32>,
    pub item_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddFavoriteResponse {
    pub msg: String,
    #[serde(rename = "id_unico_agregado")]
    pub item_id: i32,
    #[serde(rename = "tipo_agregado")]
    pub item_type: ItemType,
}

/// Serialized as a bare array of items.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct FavoriteList {
    pub items: Vec<FavoriteItem>,
}
