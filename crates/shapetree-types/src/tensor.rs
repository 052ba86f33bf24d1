use serde::{Deserialize, Serialize};

/// Metadata of an opaque tensor value.
///
/// Only the structural facts a printer needs: extent per dimension plus the
/// dtype/device/gradient tokens. The numeric contents are never represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorMeta {
    /// Per-dimension sizes, outermost first. Empty for a scalar tensor.
    pub shape: Vec<usize>,

    /// Element type token, e.g. "float32". Opaque to the printer.
    pub dtype: String,

    /// Placement token, e.g. "cpu" or "cuda:0". Opaque to the printer.
    pub device: String,

    /// Whether the tensor tracks gradients
    pub requires_grad: bool,
}

impl TensorMeta {
    pub fn new(
        shape: Vec<usize>,
        dtype: impl Into<String>,
        device: impl Into<String>,
        requires_grad: bool,
    ) -> Self {
        Self {
            shape,
            dtype: dtype.into(),
            device: device.into(),
            requires_grad,
        }
    }
}
