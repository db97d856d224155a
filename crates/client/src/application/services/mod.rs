//! Application services for render-definition resolution

pub mod render_definition_service;

pub use render_definition_service::RenderDefinitionService;
