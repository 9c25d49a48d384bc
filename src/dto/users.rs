use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// Body of `POST /usuario`. Every field is optional at the wire level so
/// that a missing email or password is reported as a 400 with our message.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "correo")]
    pub email: Option<String>,
    #[serde(rename = "contraseña")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    pub msg: String,
    #[serde(rename = "usuario")]
    pub user: User,
}
