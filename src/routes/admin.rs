use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde_json::Value;

use crate::{
    error::AppResult,
    middleware::extract::{AppJson, AppPath},
    response::{ErrorBody, ListResponse, MessageResponse},
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{resource}", get(list_rows).post(insert_row))
        .route("/{resource}/{id}", get(get_row).delete(delete_row))
}

#[utoipa::path(
    get,
    path = "/admin/{resource}",
    params(
        ("resource" = String, Path, description = "usuarios, personas, vehiculos, planetas or favoritos")
    ),
    responses(
        (status = 200, description = "Raw rows of the table", body = ListResponse<Value>),
        (status = 404, description = "Unknown resource", body = ErrorBody)
    ),
    tag = "Admin"
)]
pub async fn list_rows(
    State(state): State<AppState>,
    AppPath(resource): AppPath<String>,
) -> AppResult<Json<ListResponse<Value>>> {
    let resp = admin_service::list_rows(&state, &resource).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/admin/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "usuarios, personas, vehiculos, planetas or favoritos"),
        ("id" = i32, Path, description = "Row ID")
    ),
    responses(
        (status = 200, description = "Raw row", body = Value),
        (status = 404, description = "Unknown resource or row", body = ErrorBody)
    ),
    tag = "Admin"
)]
pub async fn get_row(
    State(state): State<AppState>,
    AppPath((resource, id)): AppPath<(String, i32)>,
) -> AppResult<Json<Value>> {
    let resp = admin_service::get_row(&state, &resource, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/admin/{resource}",
    params(
        ("resource" = String, Path, description = "usuarios, personas, vehiculos, planetas or favoritos")
    ),
    request_body = Value,
    responses(
        (status = 201, description = "Row inserted", body = Value),
        (status = 400, description = "Invalid row", body = ErrorBody),
        (status = 404, description = "Unknown resource", body = ErrorBody),
        (status = 409, description = "Unique constraint violated", body = ErrorBody)
    ),
    tag = "Admin"
)]
pub async fn insert_row(
    State(state): State<AppState>,
    AppPath(resource): AppPath<String>,
    AppJson(payload): AppJson<Value>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let resp = admin_service::insert_row(&state, &resource, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/admin/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "usuarios, personas, vehiculos, planetas or favoritos"),
        ("id" = i32, Path, description = "Row ID")
    ),
    responses(
        (status = 200, description = "Row deleted", body = MessageResponse),
        (status = 404, description = "Unknown resource or row", body = ErrorBody)
    ),
    tag = "Admin"
)]
pub async fn delete_row(
    State(state): State<AppState>,
    AppPath((resource, id)): AppPath<(String, i32)>,
) -> AppResult<Json<MessageResponse>> {
    let resp = admin_service::delete_row(&state, &resource, id).await?;
    Ok(Json(resp))
}
