use crate::database::media::MediaType;
use crate::tmdb::{FetchError, Leg, section_path};
use app_state::{DetailSection, TmdbSettings};
use reqwest::{Client, StatusCode};
use serde_json::value::RawValue;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Raw outcome of a single upstream request that got a response.
#[derive(Debug)]
pub struct FetchResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Client for the upstream media metadata provider.
///
/// Cheap to clone, the underlying connection pool and configuration are shared.
#[derive(Clone)]
pub struct TmdbClient {
    http_client: Client,
    base_url: Url,
    api_key: Arc<str>,
    language: Arc<str>,
    leg_timeout: Duration,
    detail_sections: Arc<[DetailSection]>,
}

impl TmdbClient {
    #[must_use]
    pub fn new(http_client: Client, settings: &TmdbSettings, api_key: &str) -> Self {
        Self {
            http_client,
            base_url: settings.base_url.clone(),
            api_key: Arc::from(api_key),
            language: Arc::from(settings.language.as_str()),
            leg_timeout: settings.leg_timeout,
            detail_sections: Arc::from(settings.detail_sections.as_slice()),
        }
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    #[must_use]
    pub fn detail_sections(&self) -> &[DetailSection] {
        &self.detail_sections
    }

    /// Builds one leg per configured detail section for a media item.
    pub fn detail_legs(
        &self,
        media_type: MediaType,
        media_id: i32,
    ) -> Result<Vec<Leg>, url::ParseError> {
        self.detail_sections
            .iter()
            .map(|section| {
                let mut url = self
                    .base_url
                    .join(&section_path(media_type, media_id, section))?;
                url.query_pairs_mut()
                    .append_pair("api_key", &self.api_key)
                    .append_pair("language", &self.language);
                Ok(Leg {
                    name: section.name.clone(),
                    url,
                })
            })
            .collect()
    }

    /// Performs one GET request. No retries.
    ///
    /// A response with any status is a success at this level, only a missing
    /// response or an unreadable body is an error.
    pub async fn fetch(&self, url: Url) -> Result<FetchResponse, FetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.without_url()))?;
        Ok(FetchResponse { status, body })
    }

    /// Fetches one section within the leg timeout and keeps the body only if it is
    /// a 200 with a JSON document.
    pub async fn fetch_section(&self, url: Url) -> Result<Box<RawValue>, FetchError> {
        let response = timeout(self.leg_timeout, self.fetch(url))
            .await
            .map_err(|_| FetchError::Timeout(self.leg_timeout))??;
        if response.status != StatusCode::OK {
            return Err(FetchError::Status(response.status));
        }
        RawValue::from_string(response.body).map_err(FetchError::InvalidJson)
    }
}
