//! Static asset client - reqwest adapter for the definition-file host
//!
//! Definition files are plain static assets; this adapter maps HTTP
//! semantics onto the port contract. 404 means the candidate doesn't exist
//! and the resolution chain advances; anything else unexpected is a
//! transport failure. No retries here: the fallback chain is the only
//! retry-like behavior the system has.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::ClientConfig;
use crate::ports::outbound::{DefinitionSourcePort, FetchError, FetchOutcome};

/// HTTP implementation of [`DefinitionSourcePort`].
pub struct StaticAssetClient {
    http: Client,
    base_url: Url,
    definitions_root: String,
}

impl StaticAssetClient {
    /// Build an adapter from client configuration.
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .context("building HTTP client")?;

        // Url::join treats a base without a trailing slash as a file and
        // would drop its last path segment.
        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http,
            base_url,
            definitions_root: config.definitions_root.clone(),
        })
    }

    fn definition_url(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(&format!("{}/{}", self.definitions_root, path))
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

#[async_trait]
impl DefinitionSourcePort for StaticAssetClient {
    async fn fetch_definition(&self, path: &str) -> Result<FetchOutcome, FetchError> {
        let url = self.definition_url(path)?;
        tracing::debug!(%url, "Fetching render definition");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::GONE => Ok(FetchOutcome::NotFound),
            status if status.is_success() => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| FetchError::Transport(e.to_string()))?;
                Ok(FetchOutcome::Found(body))
            }
            status => Err(FetchError::Status(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> StaticAssetClient {
        let config = ClientConfig::new(Url::parse(base).unwrap());
        StaticAssetClient::new(&config).unwrap()
    }

    #[test]
    fn definition_url_joins_root_and_candidate_path() {
        let client = client_for("https://lore.example/");
        let url = client.definition_url("ros/bestiary.json").unwrap();
        assert_eq!(
            url.as_str(),
            "https://lore.example/render-definitions/ros/bestiary.json"
        );
    }

    #[test]
    fn definition_url_preserves_base_path_without_trailing_slash() {
        let client = client_for("https://lore.example/app");
        let url = client.definition_url("ros.json").unwrap();
        assert_eq!(
            url.as_str(),
            "https://lore.example/app/render-definitions/ros.json"
        );
    }
}
