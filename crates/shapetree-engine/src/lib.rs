// Engine module - structure mirroring and rendering
// This layer sits between the input value model (types) and CLI presentation

pub mod label;
pub mod model;
pub mod palette;
pub mod render;

pub use label::TensorLabel;
pub use model::{MAX_DEPTH, ModelOpts, SequenceKind, StructureNode};
pub use palette::{Palette, palette};
pub use render::{RenderOpts, render};

use shapetree_types::{Result, Value};

// Façade API - Stable public interface for CLI layer

/// Mirror `value` into a structure model and render it in one call
pub fn format_value(
    value: &Value,
    model_opts: &ModelOpts,
    render_opts: &RenderOpts,
) -> Result<String> {
    let node = StructureNode::build(value, model_opts)?;
    render::render(&node, render_opts)
}
