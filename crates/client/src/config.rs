//! Client configuration
//!
//! Three knobs, all env-overridable: where the backend lives, which path the
//! authored definition files are published under, and how long a single
//! fetch may take.

use anyhow::Context;
use url::Url;

/// Path under the base URL where definition files are published.
pub const DEFAULT_DEFINITIONS_ROOT: &str = "render-definitions";

/// Default per-fetch timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Configuration for the client's transport layer.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root of the backend serving static definition files
    pub base_url: Url,
    /// Path segment under the base URL holding definition files
    pub definitions_root: String,
    /// Per-request timeout, applied at the transport boundary only
    pub request_timeout_ms: u64,
}

impl ClientConfig {
    /// Build a config with defaults for everything but the base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            definitions_root: DEFAULT_DEFINITIONS_ROOT.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    /// Read configuration from `LOREBLDR_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        let base = std::env::var("LOREBLDR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base).context("parsing LOREBLDR_BASE_URL")?;

        let definitions_root = std::env::var("LOREBLDR_DEFINITIONS_ROOT")
            .unwrap_or_else(|_| DEFAULT_DEFINITIONS_ROOT.to_string());

        let request_timeout_ms = std::env::var("LOREBLDR_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        Ok(Self {
            base_url,
            definitions_root,
            request_timeout_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let config = ClientConfig::new(Url::parse("https://lore.example/").unwrap());
        assert_eq!(config.definitions_root, DEFAULT_DEFINITIONS_ROOT);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }
}
