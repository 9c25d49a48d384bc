use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    dto::favorites::{AddFavoriteRequest, AddFavoriteResponse, FavoriteList},
    entity::favorites::{ActiveModel, Column, Entity as Favorites},
    error::{AppError, AppResult},
    models::{FavoriteItem, ItemType},
    response::MessageResponse,
    services::{catalog_service::resolve_item, user_service::find_user},
    state::AppState,
};

pub async fn add_favorite(
    state: &AppState,
    user_id: i32,
    payload: AddFavoriteRequest,
) -> AppResult<AddFavoriteResponse> {
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;

    let (item_id, raw_type) = match (payload.item_id, payload.item_type) {
        (Some(item_id), Some(item_type)) if item_id != 0 && !item_type.is_empty() => {
            (item_id, item_type)
        }
        _ => {
            return Err(AppError::BadRequest(
                "ID Único y Tipo de Item son requeridos".into(),
            ));
        }
    };
    let item_type: ItemType = raw_type.parse()?;

    if resolve_item(&txn, item_type, item_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "El {} con ID Único {} no fue encontrado",
            item_type.title(),
            item_id
        )));
    }

    let existing = Favorites::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::ItemId.eq(item_id))
        .filter(Column::ItemType.eq(item_type.as_str()))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("El item ya está en favoritos".into()));
    }

    ActiveModel {
        user_id: Set(user_id),
        item_id: Set(item_id),
        item_type: Set(item_type.as_str().to_owned()),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|err| AppError::on_unique_violation(err, "El item ya está en favoritos"))?;

    txn.commit().await?;
    tracing::info!(user_id, item_id, item_type = %item_type, "favorite added");

    Ok(AddFavoriteResponse {
        msg: "Favorito añadido exitosamente".into(),
        item_id,
        item_type,
    })
}

/// Resolve every favorite of the user against its catalog. Rows with an
/// unknown type or whose item no longer exists are left out.
pub async fn list_favorites(state: &AppState, user_id: i32) -> AppResult<FavoriteList> {
    find_user(&state.orm, user_id).await?;

    let favorites = Favorites::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?;

    let mut items = Vec::with_capacity(favorites.len());
    for favorite in favorites {
        let Some(item_type) = ItemType::from_stored(&favorite.item_type) else {
            tracing::debug!(
                favorite_id = favorite.id,
                item_type = %favorite.item_type,
                "skipping favorite with unknown item type"
            );
            continue;
        };
        match resolve_item(&state.orm, item_type, favorite.item_id).await? {
            Some((id, name)) => items.push(FavoriteItem {
                id,
                name,
                kind: item_type.label().to_owned(),
            }),
            None => tracing::debug!(
                favorite_id = favorite.id,
                item_id = favorite.item_id,
                "skipping favorite whose item no longer exists"
            ),
        }
    }

    Ok(FavoriteList { items })
}

pub async fn remove_favorite(
    state: &AppState,
    user_id: i32,
    item_type: &str,
    item_id: i32,
) -> AppResult<MessageResponse> {
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;

    let favorite = Favorites::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::ItemId.eq(item_id))
        .filter(Column::ItemType.eq(item_type))
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound("Favorito no encontrado para este usuario".into()))?;

    favorite.delete(&txn).await?;
    txn.commit().await?;
    tracing::info!(user_id, item_id, item_type, "favorite removed");

    Ok(MessageResponse::new("Favorito eliminado exitosamente"))
}
