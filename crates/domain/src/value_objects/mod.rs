//! Value objects - Immutable objects defined by their attributes

mod render_definition;

pub use render_definition::{FieldRender, RenderDefinition, RenderField, RenderSection, SectionRender};
