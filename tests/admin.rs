mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn admin_inserts_lists_gets_and_deletes_rows() -> anyhow::Result<()> {
    let (_state, app) = common::setup_app().await?;

    let (status, row) = common::send(
        &app,
        Method::POST,
        "/admin/planetas",
        Some(json!({ "id": 99, "name": "Hoth", "climate": "frozen" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(row["name"], "Hoth");
    assert_eq!(row["climate"], "frozen");
    let id = row["id"].as_i64().expect("id");
    assert_ne!(id, 99, "ids are assigned by the store");

    let (status, listed) = common::send(&app, Method::GET, "/admin/planetas", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["results"].as_array().map(Vec::len), Some(1));

    let (status, fetched) =
        common::send(&app, Method::GET, &format!("/admin/planetas/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Hoth");

    let (status, _) =
        common::send(&app, Method::DELETE, &format!("/admin/planetas/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        common::send(&app, Method::GET, &format!("/admin/planetas/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn admin_user_insert_respects_uniqueness() -> anyhow::Result<()> {
    let (_state, app) = common::setup_app().await?;
    let user = json!({ "name": "Wedge", "email": "wedge@rogue.sq", "password": "x" });

    let (status, row) = common::send(&app, Method::POST, "/admin/usuarios", Some(user.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(row["is_active"], true);

    let (status, _) = common::send(&app, Method::POST, "/admin/usuarios", Some(user)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn admin_favorites_get_a_timestamp() -> anyhow::Result<()> {
    let (_state, app) = common::setup_app().await?;

    let (status, row) = common::send(
        &app,
        Method::POST,
        "/admin/favoritos",
        Some(json!({ "user_id": 1, "item_id": 1, "item_type": "personas" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(row["created_at"].is_string());
    Ok(())
}

#[tokio::test]
async fn admin_insert_without_required_column_is_bad_request() -> anyhow::Result<()> {
    let (_state, app) = common::setup_app().await?;

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/admin/planetas",
        Some(json!({ "climate": "frozen" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|msg| msg.starts_with("Registro inválido"))
    );

    let (status, body) = common::send(&app, Method::POST, "/admin/planetas", Some(json!([1]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, listed) = common::send(&app, Method::GET, "/admin/planetas", None).await;
    assert_eq!(listed["results"], json!([]));
    Ok(())
}

#[tokio::test]
async fn admin_unknown_resource_is_not_found() -> anyhow::Result<()> {
    let (_state, app) = common::setup_app().await?;

    let (status, body) = common::send(&app, Method::GET, "/admin/naves", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Recurso desconocido: naves");
    Ok(())
}
