#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tower::ServiceExt;

use starwars_api::{
    db::{create_orm_conn, run_migrations},
    entity::{people, planets, users, vehicles},
    routes::create_app,
    state::AppState,
};

pub const PUBLIC_URL: &str = "http://api.test";

/// Fresh in-memory store with every migration applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState {
        orm,
        public_url: Some(PUBLIC_URL.to_string()),
    })
}

pub async fn setup_app() -> anyhow::Result<(AppState, Router)> {
    let state = setup_state().await?;
    let app = create_app(state.clone());
    Ok((state, app))
}

pub async fn create_user(state: &AppState, name: &str, email: &str) -> anyhow::Result<i32> {
    let user = users::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password: Set("secret".into()),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    Ok(user.id)
}

pub async fn create_person(state: &AppState, name: &str) -> anyhow::Result<i32> {
    let person = people::ActiveModel {
        name: Set(name.to_string()),
        height: Set(Some("172".into())),
        weight: Set(Some("77".into())),
        gender: Set(Some("male".into())),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    Ok(person.id)
}

pub async fn create_vehicle(state: &AppState, name: &str) -> anyhow::Result<i32> {
    let vehicle = vehicles::ActiveModel {
        name: Set(name.to_string()),
        model_name: Set(Some("T-16 skyhopper".into())),
        manufacturer: Set(Some("Incom Corporation".into())),
        cargo_capacity: Set(Some("50".into())),
        vehicle_class: Set(Some("repulsorcraft".into())),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    Ok(vehicle.id)
}

pub async fn create_planet(state: &AppState, name: &str) -> anyhow::Result<i32> {
    let planet = planets::ActiveModel {
        name: Set(name.to_string()),
        climate: Set(Some("arid".into())),
        terrain: Set(Some("desert".into())),
        gravity: Set(Some("1 standard".into())),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    Ok(planet.id)
}

/// Send one request through the router and decode the JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost:3000");
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}
