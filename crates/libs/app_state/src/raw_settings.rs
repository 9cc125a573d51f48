use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
    pub tmdb: RawTmdbSettings,
    pub database: DatabaseSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub public_url: String,
    pub allowed_origins: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    /// Signing key for identity tokens. Must not be empty.
    pub jwt: String,
    pub database_url: String,
    #[serde(default)]
    pub tmdb_api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawTmdbSettings {
    pub base_url: String,
    pub language: String,
    pub leg_timeout_ms: u64,
    pub detail_sections: Vec<DetailSection>,
}

/// One named upstream leg of a media detail request.
///
/// `path_suffix` is appended to `{media_type}/{media_id}`, an empty suffix
/// addresses the media resource itself.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub name: String,
    #[serde(default)]
    pub path_suffix: String,
}

/// Database connection pool configuration. Durations are in seconds.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: u64,
    pub idle_timeout: u64,
    pub acquire_timeout: u64,
}
