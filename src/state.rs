use sea_orm::DatabaseConnection;

/// Per-request data-access context, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    /// Base used for self-links; derived from request headers when unset.
    pub public_url: Option<String>,
}
