//! HTTP catalog provider for production use.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use super::CatalogProvider;
use crate::catalog::errors::CatalogError;
use crate::catalog::types::{ApiSession, MediaId, MovieRecord, SeasonRecord, SeriesRecord};
use crate::config::CatalogConfig;

/// Catalog provider backed by the remote REST API.
///
/// Issues JSON GET requests against `/api/movies`, `/api/series` and
/// `/api/series/{id}/seasons`. Credentials come from the injected
/// [`ApiSession`]; the provider never consults ambient state.
#[derive(Debug)]
pub struct HttpCatalogProvider {
    client: reqwest::Client,
    base_url: String,
    session: ApiSession,
}

impl HttpCatalogProvider {
    /// Create a provider from configuration and an injected session.
    ///
    /// # Errors
    /// - `CatalogError::InvalidBaseUrl` - Configured base URL does not parse
    /// - `CatalogError::Request` - HTTP client could not be constructed
    pub fn new(config: &CatalogConfig, session: ApiSession) -> Result<Self, CatalogError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Url::parse(&base_url).map_err(|e| CatalogError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| CatalogError::Request {
                url: base_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, CatalogError> {
        let mut request = self.client.get(&url);
        if let Some(token) = self.session.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| CatalogError::Request {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| CatalogError::Decode {
            url,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalogProvider {
    async fn fetch_movies(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        self.get_json(self.endpoint("api/movies")).await
    }

    async fn fetch_series(&self) -> Result<Vec<SeriesRecord>, CatalogError> {
        self.get_json(self.endpoint("api/series")).await
    }

    async fn fetch_seasons(&self, series_id: &MediaId) -> Result<Vec<SeasonRecord>, CatalogError> {
        self.get_json(self.endpoint(&format!("api/series/{series_id}/seasons")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base(base_url: &str) -> CatalogConfig {
        CatalogConfig {
            base_url: base_url.to_string(),
            ..CatalogConfig::default()
        }
    }

    #[test]
    fn test_endpoint_building_strips_trailing_slash() {
        let provider = HttpCatalogProvider::new(
            &config_with_base("https://catalog.example.net/"),
            ApiSession::anonymous(),
        )
        .unwrap();

        assert_eq!(
            provider.endpoint("api/movies"),
            "https://catalog.example.net/api/movies"
        );
        assert_eq!(
            provider.endpoint(&format!("api/series/{}/seasons", MediaId::from(9))),
            "https://catalog.example.net/api/series/9/seasons"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = HttpCatalogProvider::new(
            &config_with_base("not a url"),
            ApiSession::anonymous(),
        );

        assert!(matches!(
            result,
            Err(CatalogError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_session_token_is_carried() {
        let provider = HttpCatalogProvider::new(
            &config_with_base("http://localhost:8080"),
            ApiSession::with_token("secret"),
        )
        .unwrap();

        assert_eq!(provider.session.bearer_token(), Some("secret"));
    }
}
