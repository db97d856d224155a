//! Render Definition Service - resolution with specificity fallback
//!
//! Resolution walks candidate file paths from most-specific to
//! least-specific (`ros/bestiary/Cultural-Being.json`, `ros/bestiary.json`,
//! `ros.json`), then falls back to a definition generated from the content
//! record. Results are cached per `(namespace, type_path)` for the lifetime
//! of the service; concurrent lookups for the same key share one in-flight
//! resolution.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::OnceCell;

use lorebldr_domain::{generate, RenderDefinition};

use crate::ports::outbound::{DefinitionSourcePort, FetchOutcome};

/// Cache key: namespace plus optional type path.
type DefinitionKey = (String, Option<String>);

/// Resolves the render definition for a content record.
///
/// This is a total operation: every code path yields a usable definition.
/// Missing files advance the fallback chain; transport failures and
/// malformed definition files abort it and fall through to generation.
pub struct RenderDefinitionService {
    source: Arc<dyn DefinitionSourcePort>,
    cache: DashMap<DefinitionKey, Arc<OnceCell<RenderDefinition>>>,
}

impl RenderDefinitionService {
    /// Create a new service over the given definition source.
    pub fn new(source: Arc<dyn DefinitionSourcePort>) -> Self {
        Self {
            source,
            cache: DashMap::new(),
        }
    }

    /// Resolve the definition for `(namespace, type_path)`.
    ///
    /// When no authored definition is found the result is generated from
    /// `sample`, or is the bare catch-all when no sample is available.
    /// Repeated calls with the same key never re-issue network fetches.
    pub async fn resolve(
        &self,
        namespace: &str,
        type_path: Option<&str>,
        sample: Option<&Value>,
    ) -> RenderDefinition {
        let key = (namespace.to_string(), type_path.map(str::to_string));
        let cell = {
            let entry = self
                .cache
                .entry(key)
                .or_insert_with(|| Arc::new(OnceCell::new()));
            Arc::clone(entry.value())
        };

        cell.get_or_init(|| self.resolve_uncached(namespace, type_path, sample))
            .await
            .clone()
    }

    async fn resolve_uncached(
        &self,
        namespace: &str,
        type_path: Option<&str>,
        sample: Option<&Value>,
    ) -> RenderDefinition {
        for candidate in candidate_paths(namespace, type_path) {
            match self.source.fetch_definition(&candidate).await {
                Ok(FetchOutcome::Found(body)) => match RenderDefinition::from_json(&body) {
                    Ok(definition) => {
                        tracing::info!(path = %candidate, "Resolved authored render definition");
                        return definition;
                    }
                    Err(e) => {
                        tracing::warn!(path = %candidate, error = %e, "Bad definition file, falling back to generation");
                        return self.generated_fallback(sample);
                    }
                },
                Ok(FetchOutcome::NotFound) => {
                    tracing::debug!(path = %candidate, "No definition at candidate path");
                }
                Err(e) => {
                    tracing::warn!(path = %candidate, error = %e, "Definition fetch failed, falling back to generation");
                    return self.generated_fallback(sample);
                }
            }
        }

        tracing::debug!(namespace, ?type_path, "No authored definition found, generating");
        self.generated_fallback(sample)
    }

    fn generated_fallback(&self, sample: Option<&Value>) -> RenderDefinition {
        match sample {
            Some(record) => generate(record),
            None => RenderDefinition::catch_all(),
        }
    }
}

/// Candidate file paths from most-specific to least-specific, ending at the
/// namespace-level file.
fn candidate_paths(namespace: &str, type_path: Option<&str>) -> Vec<String> {
    let mut candidates = Vec::new();

    if let Some(path) = type_path {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        for end in (1..=segments.len()).rev() {
            candidates.push(format!("{}/{}.json", namespace, segments[..end].join("/")));
        }
    }

    candidates.push(format!("{namespace}.json"));
    candidates
}
