use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, TryIntoModel,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    entity::{Favorites, People, Planets, Users, Vehicles, favorites, people, planets, users, vehicles},
    error::{AppError, AppResult},
    response::{ListResponse, MessageResponse},
    state::AppState,
};

/// Tables reachable through the back-office interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminResource {
    Users,
    People,
    Vehicles,
    Planets,
    Favorites,
}

impl AdminResource {
    pub fn from_segment(segment: &str) -> AppResult<Self> {
        match segment {
            "usuarios" => Ok(AdminResource::Users),
            "personas" => Ok(AdminResource::People),
            "vehiculos" => Ok(AdminResource::Vehicles),
            "planetas" => Ok(AdminResource::Planets),
            "favoritos" => Ok(AdminResource::Favorites),
            _ => Err(AppError::NotFound(format!("Recurso desconocido: {segment}"))),
        }
    }
}

pub async fn list_rows(state: &AppState, resource: &str) -> AppResult<ListResponse<Value>> {
    let db = &state.orm;
    let rows = match AdminResource::from_segment(resource)? {
        AdminResource::Users => all_rows::<Users>(db).await?,
        AdminResource::People => all_rows::<People>(db).await?,
        AdminResource::Vehicles => all_rows::<Vehicles>(db).await?,
        AdminResource::Planets => all_rows::<Planets>(db).await?,
        AdminResource::Favorites => all_rows::<Favorites>(db).await?,
    };
    Ok(ListResponse::new(rows))
}

pub async fn get_row(state: &AppState, resource: &str, id: i32) -> AppResult<Value> {
    let db = &state.orm;
    let row = match AdminResource::from_segment(resource)? {
        AdminResource::Users => one_row::<Users>(db, id).await?,
        AdminResource::People => one_row::<People>(db, id).await?,
        AdminResource::Vehicles => one_row::<Vehicles>(db, id).await?,
        AdminResource::Planets => one_row::<Planets>(db, id).await?,
        AdminResource::Favorites => one_row::<Favorites>(db, id).await?,
    };
    row.ok_or_else(|| AppError::NotFound("Registro no encontrado".into()))
}

/// Insert a raw row. The id is always assigned by the store: any submitted
/// value is replaced by a placeholder that is dropped before the insert.
pub async fn insert_row(state: &AppState, resource: &str, mut payload: Value) -> AppResult<Value> {
    let Some(fields) = payload.as_object_mut() else {
        return Err(AppError::BadRequest("Se esperaba un objeto JSON".into()));
    };
    fields.insert("id".into(), Value::from(0));

    let resource = AdminResource::from_segment(resource)?;
    match resource {
        AdminResource::Users => {
            fields.entry("is_active").or_insert(Value::Bool(true));
        }
        AdminResource::Favorites => {
            if !fields.contains_key("created_at") {
                let now = serde_json::to_value(Utc::now().fixed_offset())
                    .map_err(|err| AppError::Internal(err.into()))?;
                fields.insert("created_at".into(), now);
            }
        }
        _ => {}
    }

    let db = &state.orm;
    let row = match resource {
        AdminResource::Users => insert::<users::ActiveModel>(db, payload).await?,
        AdminResource::People => insert::<people::ActiveModel>(db, payload).await?,
        AdminResource::Vehicles => insert::<vehicles::ActiveModel>(db, payload).await?,
        AdminResource::Planets => insert::<planets::ActiveModel>(db, payload).await?,
        AdminResource::Favorites => insert::<favorites::ActiveModel>(db, payload).await?,
    };
    tracing::info!(?resource, "admin row inserted");
    Ok(row)
}

pub async fn delete_row(state: &AppState, resource: &str, id: i32) -> AppResult<MessageResponse> {
    let db = &state.orm;
    let resource = AdminResource::from_segment(resource)?;
    let affected = match resource {
        AdminResource::Users => delete::<Users>(db, id).await?,
        AdminResource::People => delete::<People>(db, id).await?,
        AdminResource::Vehicles => delete::<Vehicles>(db, id).await?,
        AdminResource::Planets => delete::<Planets>(db, id).await?,
        AdminResource::Favorites => delete::<Favorites>(db, id).await?,
    };

    if affected == 0 {
        return Err(AppError::NotFound("Registro no encontrado".into()));
    }
    tracing::info!(?resource, id, "admin row deleted");
    Ok(MessageResponse::new("Registro eliminado"))
}

async fn all_rows<E: EntityTrait>(db: &DatabaseConnection) -> AppResult<Vec<Value>> {
    Ok(E::find().into_json().all(db).await?)
}

async fn one_row<E>(db: &DatabaseConnection, id: i32) -> AppResult<Option<Value>>
where
    E: EntityTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(E::find_by_id(id).into_json().one(db).await?)
}

async fn insert<A>(db: &DatabaseConnection, payload: Value) -> AppResult<Value>
where
    A: ActiveModelTrait
        + ActiveModelBehavior
        + TryIntoModel<<A::Entity as EntityTrait>::Model>
        + Send
        + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A> + Serialize + for<'de> Deserialize<'de>,
{
    let mut active = A::from_json(payload)
        .map_err(|err| AppError::BadRequest(format!("Registro inválido: {err}")))?;
    for key in <A::Entity as EntityTrait>::PrimaryKey::iter() {
        active.not_set(key.into_column());
    }
    let model = active
        .insert(db)
        .await
        .map_err(|err| AppError::on_unique_violation(err, "El registro ya existe"))?;
    serde_json::to_value(model).map_err(|err| AppError::Internal(err.into()))
}

async fn delete<E>(db: &DatabaseConnection, id: i32) -> AppResult<u64>
where
    E: EntityTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(E::delete_by_id(id).exec(db).await?.rows_affected)
}
