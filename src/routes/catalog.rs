use axum::{Json, Router, extract::State, routing::get};

use crate::{
    entity::{People, Planets, Vehicles},
    error::AppResult,
    middleware::{extract::AppPath, link::BaseUrl},
    models::{CatalogDetail, CatalogSummary, PersonProperties, PlanetProperties, VehicleProperties},
    response::{ErrorBody, ListResponse},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/personas", get(list_people))
        .route("/personas/{id}", get(get_person))
        .route("/vehiculos", get(list_vehicles))
        .route("/vehiculos/{id}", get(get_vehicle))
        .route("/planetas", get(list_planets))
        .route("/planetas/{id}", get(get_planet))
}

#[utoipa::path(
    get,
    path = "/personas",
    responses(
        (status = 200, description = "List people", body = ListResponse<CatalogSummary>)
    ),
    tag = "Catalog"
)]
pub async fn list_people(
    State(state): State<AppState>,
    base: BaseUrl,
) -> AppResult<Json<ListResponse<CatalogSummary>>> {
    let resp = catalog_service::list_catalog::<People>(&state, &base).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/personas/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Get person", body = CatalogDetail<PersonProperties>),
        (status = 404, description = "Person not found", body = ErrorBody)
    ),
    tag = "Catalog"
)]
pub async fn get_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<CatalogDetail<PersonProperties>>> {
    let resp = catalog_service::get_catalog::<People>(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/vehiculos",
    responses(
        (status = 200, description = "List vehicles", body = ListResponse<CatalogSummary>)
    ),
    tag = "Catalog"
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    base: BaseUrl,
) -> AppResult<Json<ListResponse<CatalogSummary>>> {
    let resp = catalog_service::list_catalog::<Vehicles>(&state, &base).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/vehiculos/{id}",
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Get vehicle", body = CatalogDetail<VehicleProperties>),
        (status = 404, description = "Vehicle not found", body = ErrorBody)
    ),
    tag = "Catalog"
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<CatalogDetail<VehicleProperties>>> {
    let resp = catalog_service::get_catalog::<Vehicles>(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/planetas",
    responses(
        (status = 200, description = "List planets", body = ListResponse<CatalogSummary>)
    ),
    tag = "Catalog"
)]
pub async fn list_planets(
    State(state): State<AppState>,
    base: BaseUrl,
) -> AppResult<Json<ListResponse<CatalogSummary>>> {
    let resp = catalog_service::list_catalog::<Planets>(&state, &base).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/planetas/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = CatalogDetail<PlanetProperties>),
        (status = 404, description = "Planet not found", body = ErrorBody)
    ),
    tag = "Catalog"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<CatalogDetail<PlanetProperties>>> {
    let resp = catalog_service::get_catalog::<Planets>(&state, id).await?;
    Ok(Json(resp))
}
