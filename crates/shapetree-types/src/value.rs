use crate::tensor::TensorMeta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque scalar primitive that is printed verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
}

impl Scalar {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::Str(_) => "string",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Bool(_) => "bool",
            Scalar::None => "none",
        }
    }
}

// Display is the printer's "natural form": strings are quoted, everything
// else keeps its native representation.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "\"{}\"", s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::None => write!(f, "None"),
        }
    }
}

/// Input model for the structure printer.
///
/// An arbitrarily nested combination of sequences, mappings, tensors, and
/// scalars. Mapping pairs keep their input iteration order; key uniqueness is
/// the caller's contract and is not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Tensor(TensorMeta),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(Vec<(Scalar, Value)>),
    Scalar(Scalar),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Tensor(_) => "tensor",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "mapping",
            Value::Scalar(s) => s.kind_name(),
        }
    }
}

impl From<TensorMeta> for Value {
    fn from(meta: TensorMeta) -> Self {
        Value::Tensor(meta)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Scalar(Scalar::Int(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(Scalar::Float(x))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::Str(s.to_string()))
    }
}
