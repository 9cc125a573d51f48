use crate::{
    ApiSettings, DatabaseSettings, DetailSection, LoggingSettings, RawSettings, SecretSettings,
};
use color_eyre::eyre::{Report, bail, eyre};
use std::collections::HashSet;
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Key of the merged detail response that holds locally stored reviews.
/// Upstream sections may not use it.
pub const RESERVED_SECTION_NAME: &str = "reviews";

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
    pub tmdb: TmdbSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone)]
pub struct TmdbSettings {
    /// Always ends in `/` so relative media paths can be joined onto it.
    pub base_url: Url,
    pub language: String,
    pub leg_timeout: Duration,
    pub detail_sections: Vec<DetailSection>,
}

impl TryFrom<RawSettings> for AppSettings {
    type Error = Report;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        if raw.secrets.jwt.trim().is_empty() {
            bail!("secrets.jwt is empty, a token signing key is required to start the server");
        }
        if raw.secrets.tmdb_api_key.trim().is_empty() {
            warn!("secrets.tmdb_api_key is empty, upstream metadata requests will fail");
        }
        if raw.tmdb.leg_timeout_ms == 0 {
            bail!("tmdb.leg_timeout_ms must be greater than zero");
        }
        validate_sections(&raw.tmdb.detail_sections)?;

        let mut base_url = raw.tmdb.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)
            .map_err(|e| eyre!("Invalid tmdb.base_url {base_url}: {e}"))?;

        Ok(Self {
            api: raw.api,
            logging: raw.logging,
            secrets: raw.secrets,
            tmdb: TmdbSettings {
                base_url,
                language: raw.tmdb.language,
                leg_timeout: Duration::from_millis(raw.tmdb.leg_timeout_ms),
                detail_sections: raw.tmdb.detail_sections,
            },
            database: raw.database,
        })
    }
}

fn validate_sections(sections: &[DetailSection]) -> color_eyre::Result<()> {
    let mut seen = HashSet::new();
    for section in sections {
        if section.name.is_empty() {
            bail!("tmdb.detail_sections contains a section without a name");
        }
        if section.name == RESERVED_SECTION_NAME {
            bail!("tmdb.detail_sections may not use the reserved name '{RESERVED_SECTION_NAME}'");
        }
        if !seen.insert(section.name.as_str()) {
            bail!("tmdb.detail_sections contains '{}' twice", section.name);
        }
    }
    Ok(())
}
