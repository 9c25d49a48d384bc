mod common;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use starwars_api::{
    dto::favorites::AddFavoriteRequest,
    entity::{Favorites, Planets, favorites},
    error::AppError,
    models::{FavoriteItem, ItemType},
    services::favorite_service,
};

fn favorite(item_id: Option<i32>, item_type: Option<&str>) -> AddFavoriteRequest {
    AddFavoriteRequest {
        item_id,
        item_type: item_type.map(str::to_string),
    }
}

#[tokio::test]
async fn add_then_repeat_is_a_conflict() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "Luke", "luke@tatooine.net").await?;
    let planet = common::create_planet(&state, "Tatooine").await?;

    let added =
        favorite_service::add_favorite(&state, user, favorite(Some(planet), Some("planetas")))
            .await?;
    assert_eq!(added.msg, "Favorito añadido exitosamente");
    assert_eq!(added.item_id, planet);
    assert_eq!(added.item_type, ItemType::Planetas);

    let err =
        favorite_service::add_favorite(&state, user, favorite(Some(planet), Some("planetas")))
            .await
            .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "El item ya está en favoritos");
    assert_eq!(Favorites::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn same_item_id_in_another_catalog_is_a_distinct_favorite() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "Luke", "luke@tatooine.net").await?;
    let person = common::create_person(&state, "Obi-Wan Kenobi").await?;
    let planet = common::create_planet(&state, "Tatooine").await?;
    assert_eq!(person, planet);

    favorite_service::add_favorite(&state, user, favorite(Some(person), Some("personas"))).await?;
    favorite_service::add_favorite(&state, user, favorite(Some(planet), Some("planetas"))).await?;

    assert_eq!(Favorites::find().count(&state.orm).await?, 2);
    Ok(())
}

#[tokio::test]
async fn unknown_item_type_is_a_bad_request() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "Luke", "luke@tatooine.net").await?;
    common::create_planet(&state, "Tatooine").await?;

    for item_type in ["planet", "naves", "PLANETAS"] {
        let err = favorite_service::add_favorite(&state, user, favorite(Some(1), Some(item_type)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)), "{item_type} accepted");
    }
    Ok(())
}

#[tokio::test]
async fn missing_fields_are_a_bad_request() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "Luke", "luke@tatooine.net").await?;

    for payload in [
        favorite(None, Some("planetas")),
        favorite(Some(1), None),
        favorite(Some(0), Some("planetas")),
        favorite(Some(1), Some("")),
    ] {
        let err = favorite_service::add_favorite(&state, user, payload)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.to_string(), "ID Único y Tipo de Item son requeridos");
    }
    Ok(())
}

#[tokio::test]
async fn missing_catalog_item_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "Luke", "luke@tatooine.net").await?;
    common::create_person(&state, "Luke Skywalker").await?;

    let err = favorite_service::add_favorite(&state, user, favorite(Some(1), Some("vehiculos")))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "El Vehiculos con ID Único 1 no fue encontrado");
    assert_eq!(Favorites::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn unknown_user_is_not_found_for_every_operation() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let planet = common::create_planet(&state, "Tatooine").await?;

    let add = favorite_service::add_favorite(&state, 7, favorite(Some(planet), Some("planetas")))
        .await
        .unwrap_err();
    let list = favorite_service::list_favorites(&state, 7).await.unwrap_err();
    let remove = favorite_service::remove_favorite(&state, 7, "planetas", planet)
        .await
        .unwrap_err();

    for err in [add, list, remove] {
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Usuario no encontrado");
    }
    Ok(())
}

#[tokio::test]
async fn listing_resolves_names_and_skips_unresolvable_rows() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "Luke", "luke@tatooine.net").await?;
    let other = common::create_user(&state, "Leia", "leia@alderaan.gov").await?;
    let person = common::create_person(&state, "Luke Skywalker").await?;
    let vehicle = common::create_vehicle(&state, "T-16 skyhopper").await?;
    let planet = common::create_planet(&state, "Tatooine").await?;
    let doomed = common::create_planet(&state, "Alderaan").await?;

    favorite_service::add_favorite(&state, user, favorite(Some(person), Some("personas"))).await?;
    favorite_service::add_favorite(&state, user, favorite(Some(vehicle), Some("vehiculos"))).await?;
    favorite_service::add_favorite(&state, user, favorite(Some(doomed), Some("planetas"))).await?;
    favorite_service::add_favorite(&state, other, favorite(Some(planet), Some("planetas"))).await?;

    // Catalog rows can disappear underneath a favorite.
    Planets::delete_by_id(doomed).exec(&state.orm).await?;

    // Rows written with the legacy singular tokens, and one nobody understands.
    for (item_id, item_type) in [(planet, "planet"), (person, "starship")] {
        favorites::ActiveModel {
            user_id: Set(user),
            item_id: Set(item_id),
            item_type: Set(item_type.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&state.orm)
        .await?;
    }

    let listed = favorite_service::list_favorites(&state, user).await?;
    assert_eq!(
        listed.items,
        vec![
            FavoriteItem {
                id: person,
                name: "Luke Skywalker".into(),
                kind: "persona".into(),
            },
            FavoriteItem {
                id: vehicle,
                name: "T-16 skyhopper".into(),
                kind: "vehiculo".into(),
            },
            FavoriteItem {
                id: planet,
                name: "Tatooine".into(),
                kind: "planeta".into(),
            },
        ]
    );
    Ok(())
}

#[tokio::test]
async fn delete_removes_one_row_and_repeat_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "Luke", "luke@tatooine.net").await?;
    let person = common::create_person(&state, "Luke Skywalker").await?;
    let planet = common::create_planet(&state, "Tatooine").await?;
    favorite_service::add_favorite(&state, user, favorite(Some(person), Some("personas"))).await?;
    favorite_service::add_favorite(&state, user, favorite(Some(planet), Some("planetas"))).await?;

    let removed = favorite_service::remove_favorite(&state, user, "planetas", planet).await?;
    assert_eq!(removed.msg, "Favorito eliminado exitosamente");
    assert_eq!(Favorites::find().count(&state.orm).await?, 1);

    let err = favorite_service::remove_favorite(&state, user, "planetas", planet)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Favorito no encontrado para este usuario");
    assert_eq!(Favorites::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn unique_index_violation_maps_to_conflict() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "Luke", "luke@tatooine.net").await?;
    let planet = common::create_planet(&state, "Tatooine").await?;

    let row = || favorites::ActiveModel {
        user_id: Set(user),
        item_id: Set(planet),
        item_type: Set(ItemType::Planetas.as_str().to_string()),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    };
    row().insert(&state.orm).await?;

    let db_err = row()
        .insert(&state.orm)
        .await
        .expect_err("second row hits uq_favorites_user_item");
    let err = AppError::on_unique_violation(db_err, "El item ya está en favoritos");
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.status(), axum::http::StatusCode::CONFLICT);
    assert_eq!(err.to_string(), "El item ya está en favoritos");
    assert_eq!(Favorites::find().count(&state.orm).await?, 1);

    let other = AppError::on_unique_violation(
        sea_orm::DbErr::RecordNotFound("favorites".into()),
        "El item ya está en favoritos",
    );
    assert!(matches!(other, AppError::OrmError(_)));
    assert_eq!(other.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
