use crate::model::{MAX_DEPTH, StructureNode};
use shapetree_types::{Error, Result};

/// Options recognized when rendering a structure model
#[derive(Debug, Clone)]
pub struct RenderOpts {
    /// Spaces per nesting level
    pub indent: usize,
    pub enable_color: bool,
    /// Maximum nesting depth before rendering fails
    pub max_depth: usize,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            indent: 4,
            enable_color: true,
            max_depth: MAX_DEPTH,
        }
    }
}

/// Render a structure model as an indented, bracketed string.
///
/// Pure function of the tree and the options; the depth guard is applied
/// here again, independent of the one enforced during construction.
pub fn render(node: &StructureNode, opts: &RenderOpts) -> Result<String> {
    render_node(node, 0, opts)
}

fn render_node(node: &StructureNode, level: usize, opts: &RenderOpts) -> Result<String> {
    if level > opts.max_depth {
        return Err(Error::DepthExceeded {
            depth: level,
            limit: opts.max_depth,
        });
    }

    match node {
        StructureNode::Primitive(scalar) => Ok(scalar.to_string()),
        StructureNode::Tensor(label) => Ok(label.render(opts.enable_color)),
        StructureNode::Sequence { kind, children } => {
            let (open, close) = kind.brackets();
            if children.is_empty() {
                return Ok(format!("{}{}", open, close));
            }

            if children.iter().all(renders_inline) {
                let parts = children
                    .iter()
                    .map(|child| render_node(child, level + 1, opts))
                    .collect::<Result<Vec<_>>>()?;
                return Ok(format!("{}{}{}", open, parts.join(", "), close));
            }

            let mut out = String::new();
            out.push(open);
            out.push('\n');
            for (i, child) in children.iter().enumerate() {
                out.push_str(&indent_for(level + 1, opts));
                out.push_str(&render_node(child, level + 1, opts)?);
                if i < children.len() - 1 {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&indent_for(level, opts));
            out.push(close);
            Ok(out)
        }
        StructureNode::Mapping(pairs) => {
            if pairs.is_empty() {
                return Ok("{}".to_string());
            }

            // Mappings never collapse to one line, however simple the values
            let mut out = String::from("{\n");
            for (i, (key, val)) in pairs.iter().enumerate() {
                out.push_str(&indent_for(level + 1, opts));
                out.push_str(&key.to_string());
                out.push_str(": ");
                out.push_str(&render_node(val, level + 1, opts)?);
                if i < pairs.len() - 1 {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&indent_for(level, opts));
            out.push('}');
            Ok(out)
        }
    }
}

/// Whether a node may sit inside a one-line sequence render.
///
/// Tensor leaves never qualify: a sequence holding tensors expands one per
/// line even though each label is short. Empty containers qualify, their
/// render is already atomic.
fn renders_inline(node: &StructureNode) -> bool {
    match node {
        StructureNode::Primitive(_) => true,
        StructureNode::Sequence { children, .. } => children.is_empty(),
        StructureNode::Mapping(pairs) => pairs.is_empty(),
        StructureNode::Tensor(_) => false,
    }
}

fn indent_for(level: usize, opts: &RenderOpts) -> String {
    " ".repeat(level * opts.indent)
}
