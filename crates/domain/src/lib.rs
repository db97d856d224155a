//! LoreBldr Domain - render-definition model and generation pipeline.
//!
//! Everything in this crate is pure and synchronous: classifying a content
//! record, detecting field families, and assembling display sections never
//! perform I/O and are safe to run in parallel for independent payloads.

pub mod error;
pub mod render;
pub mod value_objects;

pub use error::DomainError;
pub use render::generate;

// Re-export the render-definition model (explicit list in value_objects/mod.rs)
pub use value_objects::{FieldRender, RenderDefinition, RenderField, RenderSection, SectionRender};
