pub mod error;
pub mod tensor;
pub mod value;

pub use error::{Error, Result};
pub use tensor::TensorMeta;
pub use value::{Scalar, Value};
