use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for every list endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T> {
    pub results: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self { results }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
