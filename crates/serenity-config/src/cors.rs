use crate::env::flag_or;

pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Clone, Debug)]
pub struct CorsConfig {
    /// Explicit allow-list. The first entry doubles as the fallback origin.
    pub allowed_origins: Vec<String>,
    /// Accept any localhost / loopback / private-network origin at any port
    pub allow_local_network: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            allow_local_network: true,
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .ok()
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| parse_origins(DEFAULT_ALLOWED_ORIGINS));

        Self {
            allowed_origins,
            allow_local_network: flag_or("CORS_ALLOW_LOCAL_NETWORK", true),
        }
    }
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
