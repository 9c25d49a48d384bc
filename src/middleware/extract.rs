use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// `Json` whose rejection is reported through `AppError`, so malformed
/// bodies get the same `{"error": ...}` shape as every other failure.
/// Only a JSON object is accepted; serde would otherwise bind an array to
/// struct fields by position.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::BadRequest(format!("Cuerpo JSON inválido: {}", rejection.body_text()))
            })?;
        if !body.is_object() {
            return Err(AppError::BadRequest(
                "Cuerpo JSON inválido: se esperaba un objeto".into(),
            ));
        }
        serde_json::from_value(body)
            .map(Self)
            .map_err(|err| AppError::BadRequest(format!("Cuerpo JSON inválido: {err}")))
    }
}

/// `Path` for typed route parameters. A segment that does not parse (an id
/// that is not an integer) cannot name an existing row, so it is a 404.
#[derive(Debug)]
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "path rejected");
                Err(AppError::NotFound("Ruta no encontrada".into()))
            }
        }
    }
}
