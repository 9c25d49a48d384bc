use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::users::{CreateUserRequest, CreateUserResponse},
    error::AppResult,
    middleware::{
        extract::{AppJson, AppPath},
        link::BaseUrl,
    },
    models::{User, UserSummary},
    response::{ErrorBody, ListResponse},
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/usuarios", get(list_users))
        .route("/usuario", post(create_user))
        .route("/usuario/{id}", get(get_user))
}

#[utoipa::path(
    get,
    path = "/usuarios",
    responses(
        (status = 200, description = "List users", body = ListResponse<UserSummary>)
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    base: BaseUrl,
) -> AppResult<Json<ListResponse<UserSummary>>> {
    let resp = user_service::list_users(&state, &base).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/usuario/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = User),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<User>> {
    let resp = user_service::get_user(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/usuario",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Email or password missing", body = ErrorBody),
        (status = 409, description = "Email or name already taken", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<CreateUserResponse>)> {
    let resp = user_service::create_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
