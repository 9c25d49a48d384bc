use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    dto::favorites::{AddFavoriteRequest, AddFavoriteResponse, FavoriteList},
    error::AppResult,
    middleware::extract::{AppJson, AppPath},
    models::FavoriteItem,
    response::{ErrorBody, MessageResponse},
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/usuario/{id}/favoritos",
            get(list_favorites).post(add_favorite),
        )
        .route(
            "/usuario/{id}/favoritos/{item_type}/{item_id}",
            delete(remove_favorite),
        )
}

#[utoipa::path(
    post,
    path = "/usuario/{id}/favoritos",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Added to favorites", body = AddFavoriteResponse),
        (status = 400, description = "Missing field or invalid item type", body = ErrorBody),
        (status = 404, description = "User or catalog item not found", body = ErrorBody),
        (status = 409, description = "Already a favorite", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
    AppJson(payload): AppJson<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<AddFavoriteResponse>)> {
    let resp = favorite_service::add_favorite(&state, user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/usuario/{id}/favoritos",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "List favorites", body = Vec<FavoriteItem>),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> AppResult<Json<FavoriteList>> {
    let resp = favorite_service::list_favorites(&state, user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/usuario/{id}/favoritos/{item_type}/{item_id}",
    params(
        ("id" = i32, Path, description = "User ID"),
        ("item_type" = String, Path, description = "Item type: personas, vehiculos, planetas"),
        ("item_id" = i32, Path, description = "Catalog item ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 404, description = "User or favorite not found", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    AppPath((user_id, item_type, item_id)): AppPath<(i32, String, i32)>,
) -> AppResult<Json<MessageResponse>> {
    let resp = favorite_service::remove_favorite(&state, user_id, &item_type, item_id).await?;
    Ok(Json(resp))
}
