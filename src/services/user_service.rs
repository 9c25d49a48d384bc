use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    dto::users::{CreateUserRequest, CreateUserResponse},
    entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    middleware::link::BaseUrl,
    models::{User, UserSummary},
    response::ListResponse,
    state::AppState,
};

pub const DEFAULT_USER_NAME: &str = "Nuevo Usuario";

pub async fn list_users(
    state: &AppState,
    base: &BaseUrl,
) -> AppResult<ListResponse<UserSummary>> {
    let items = Users::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|user| UserSummary {
            url: base.link(&format!("/usuario/{}", user.id)),
            id: user.id,
            name: user.name,
            email: user.email,
        })
        .collect();

    Ok(ListResponse::new(items))
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<User> {
    let user = find_user(&state.orm, id).await?;
    Ok(user_from_entity(user))
}

/// Load a user row or fail with the user-facing 404.
pub async fn find_user<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<UserModel> {
    Users::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".into()))
}

pub async fn create_user(
    state: &AppState,
    payload: CreateUserRequest,
) -> AppResult<CreateUserResponse> {
    let (email, password) = match (present(payload.email), present(payload.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(AppError::BadRequest(
                "Correo y contraseña son requeridos".into(),
            ));
        }
    };
    let name = present(payload.name).unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

    let txn = state.orm.begin().await?;

    let email_taken = Users::find()
        .filter(Column::Email.eq(email.as_str()))
        .one(&txn)
        .await?
        .is_some();
    if email_taken {
        return Err(AppError::Conflict(
            "El usuario con este correo ya existe".into(),
        ));
    }

    let name_taken = Users::find()
        .filter(Column::Name.eq(name.as_str()))
        .one(&txn)
        .await?
        .is_some();
    if name_taken {
        return Err(AppError::Conflict(
            "El usuario con este nombre ya existe".into(),
        ));
    }

    let user = ActiveModel {
        name: Set(name),
        email: Set(email),
        password: Set(password),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|err| AppError::on_unique_violation(err, "El usuario ya existe"))?;

    txn.commit().await?;
    tracing::info!(user_id = user.id, "user created");

    Ok(CreateUserResponse {
        msg: "Usuario creado exitosamente".into(),
        user: user_from_entity(user),
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        email: model.email,
    }
}
