//! Definition Source Port - boundary to the static definition-file host
//!
//! Authored render definitions are published as static JSON files at
//! deterministic paths. This port abstracts fetching one candidate file so
//! the resolution service stays transport-agnostic; a missing file is an
//! expected outcome, not an error.

use thiserror::Error;

/// Outcome of fetching one candidate definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The file exists; raw body text, parsed by the caller.
    Found(String),
    /// No file at this path. The resolution chain advances.
    NotFound,
}

/// Errors from the definition-file transport.
#[derive(Debug, Error, Clone)]
pub enum FetchError {
    /// Connection, timeout, or protocol failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The host answered with a status that is neither success nor not-found
    #[error("Unexpected status {0} from definition host")]
    Status(u16),
}

/// Port for fetching authored render-definition files.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait DefinitionSourcePort: Send + Sync {
    /// Fetch one namespace-relative candidate path (e.g. `ros/bestiary.json`).
    async fn fetch_definition(&self, path: &str) -> Result<FetchOutcome, FetchError>;
}
