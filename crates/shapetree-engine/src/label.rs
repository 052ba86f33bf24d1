use crate::palette::palette;
use owo_colors::OwoColorize;
use shapetree_types::{Error, Result, Value};

/// Inline label for a single tensor leaf.
///
/// The shape text is computed once at construction. When `detailed` is set,
/// the dtype/device/gradient tokens are carried along and joined into the
/// rendered line.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorLabel {
    shape_text: String,
    detailed: bool,
    dtype: String,
    device: String,
    requires_grad: bool,
}

impl TensorLabel {
    /// Fails unless `value` is a tensor. The wrap dispatch already routes
    /// only tensors here; the check stands on its own anyway.
    pub fn new(value: &Value, detailed: bool) -> Result<Self> {
        let Value::Tensor(meta) = value else {
            return Err(Error::TypeConstraint {
                found: value.kind_name(),
            });
        };

        Ok(Self {
            shape_text: format_shape(&meta.shape),
            detailed,
            dtype: meta.dtype.clone(),
            device: meta.device.clone(),
            requires_grad: meta.requires_grad,
        })
    }

    /// Render as a single line. Never contains a line break, detailed or not.
    pub fn render(&self, enable_color: bool) -> String {
        let colors = palette();

        if !self.detailed {
            return if enable_color {
                format!("{}", self.shape_text.style(colors.shape))
            } else {
                self.shape_text.clone()
            };
        }

        if enable_color {
            format!(
                "<{}, {}, {}, {}>",
                self.shape_text.style(colors.shape),
                self.dtype.style(colors.dtype),
                self.device.style(colors.device),
                self.requires_grad.style(colors.grad),
            )
        } else {
            format!(
                "<{}, {}, {}, {}>",
                self.shape_text, self.dtype, self.device, self.requires_grad
            )
        }
    }
}

/// Dimensions joined by two spaces inside angle brackets: `[3, 4]` -> `<3  4>`
fn format_shape(shape: &[usize]) -> String {
    let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
    format!("<{}>", dims.join("  "))
}
