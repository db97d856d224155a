//! Adaptive render-definition pipeline
//!
//! Turns an arbitrary, schema-less JSON content record into a displayable
//! [`RenderDefinition`](crate::value_objects::RenderDefinition) without a
//! hand-authored template: classify fields, detect underscore-prefix
//! families, group them into sections.

mod classifier;
mod field_info;
mod generator;
pub mod helpers;
mod prefix_groups;
mod sections;

pub use generator::generate;
