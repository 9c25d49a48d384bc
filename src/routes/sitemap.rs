use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema, openapi::path::PathItem};

use crate::{middleware::link::BaseUrl, routes::doc::ApiDoc};

#[derive(Debug, Serialize, ToSchema)]
pub struct Sitemap {
    pub endpoints: Vec<SitemapEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SitemapEntry {
    pub method: String,
    pub path: String,
    pub url: String,
}

/// Every documented route, one entry per method.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Map of registered routes", body = Sitemap)
    ),
    tag = "Health"
)]
pub async fn sitemap(base: BaseUrl) -> Json<Sitemap> {
    let doc = ApiDoc::openapi();
    let mut endpoints = Vec::new();
    for (path, item) in doc.paths.paths.iter() {
        for method in methods(item) {
            endpoints.push(SitemapEntry {
                method: method.to_string(),
                path: path.clone(),
                url: base.link(path),
            });
        }
    }
    Json(Sitemap { endpoints })
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}
