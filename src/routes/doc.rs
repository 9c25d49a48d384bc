use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        favorites::{AddFavoriteRequest, AddFavoriteResponse},
        users::{CreateUserRequest, CreateUserResponse},
    },
    models::{
        CatalogDetail, CatalogSummary, FavoriteItem, ItemType, PersonProperties, PlanetProperties,
        User, UserSummary, VehicleProperties,
    },
    response::{ErrorBody, ListResponse, MessageResponse},
    routes::{admin, catalog, favorites, health, sitemap, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        users::list_users,
        users::get_user,
        users::create_user,
        catalog::list_people,
        catalog::get_person,
        catalog::list_vehicles,
        catalog::get_vehicle,
        catalog::list_planets,
        catalog::get_planet,
        favorites::add_favorite,
        favorites::list_favorites,
        favorites::remove_favorite,
        admin::list_rows,
        admin::get_row,
        admin::insert_row,
        admin::delete_row
    ),
    components(
        schemas(
            User,
            UserSummary,
            CatalogSummary,
            PersonProperties,
            VehicleProperties,
            PlanetProperties,
            FavoriteItem,
            ItemType,
            CreateUserRequest,
            CreateUserResponse,
            AddFavoriteRequest,
            AddFavoriteResponse,
            MessageResponse,
            ErrorBody,
            sitemap::Sitemap,
            sitemap::SitemapEntry,
            ListResponse<UserSummary>,
            ListResponse<CatalogSummary>,
            CatalogDetail<PersonProperties>,
            CatalogDetail<VehicleProperties>,
            CatalogDetail<PlanetProperties>
        )
    ),
    tags(
        (name = "Health", description = "Health check and route discovery"),
        (name = "Users", description = "User endpoints"),
        (name = "Catalog", description = "People, vehicles and planets"),
        (name = "Favorites", description = "Per-user favorites"),
        (name = "Admin", description = "Raw table access for back-office tools"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
