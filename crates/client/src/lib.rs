//! LoreBldr Client - the client half of the campaign wiki.
//!
//! This crate contains application services, outbound ports, and
//! infrastructure adapters. The render-definition pipeline itself lives in
//! `lorebldr-domain`; this crate resolves authored definitions from the
//! static-file host and falls back to generation.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;

// Re-export commonly used entrypoints
pub use application::RenderDefinitionService;
pub use config::ClientConfig;
