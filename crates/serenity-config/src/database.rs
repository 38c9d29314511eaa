use crate::env::parse_or;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Postgres settings. When `url` is `None` the service runs against the
/// in-memory user store.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            max_connections: pool_size(parse_or(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )),
        }
    }
}

/// A pool needs at least one connection.
fn pool_size(requested: u32) -> u32 {
    requested.max(1)
}
