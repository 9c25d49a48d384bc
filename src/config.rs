use std::env;

/// Development store used when no `DATABASE_URL` is provided.
pub const FALLBACK_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub public_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                tracing::warn!(
                    url = FALLBACK_DATABASE_URL,
                    "DATABASE_URL not set, using local sqlite store"
                );
                FALLBACK_DATABASE_URL.to_string()
            }
        };
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(p) => p
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid PORT {p:?}: {e}"))?,
            Err(_) => 3000,
        };
        let public_url = env::var("PUBLIC_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        Ok(Self {
            port,
            database_url,
            host,
            public_url,
        })
    }
}
