//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application services to interact with external
//! systems without depending on concrete implementations.

pub mod definition_source_port;

pub use definition_source_port::{DefinitionSourcePort, FetchError, FetchOutcome};

#[cfg(any(test, feature = "testing"))]
pub use definition_source_port::MockDefinitionSourcePort;
