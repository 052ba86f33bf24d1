use crate::label::TensorLabel;
use shapetree_types::{Error, Result, Scalar, Value};

/// Default bound on nesting depth. Enforced independently while building the
/// model and while rendering it, so a pathological input fails fast instead
/// of overflowing the call stack.
pub const MAX_DEPTH: usize = 1000;

/// Options recognized when building a structure model
#[derive(Debug, Clone)]
pub struct ModelOpts {
    /// Include dtype/device/gradient info on every tensor leaf
    pub detailed: bool,
    /// Maximum nesting depth before construction fails
    pub max_depth: usize,
}

impl Default for ModelOpts {
    fn default() -> Self {
        Self {
            detailed: false,
            max_depth: MAX_DEPTH,
        }
    }
}

/// Bracket kind preserved from the input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    List,
    Tuple,
}

impl SequenceKind {
    pub(crate) fn brackets(self) -> (char, char) {
        match self {
            SequenceKind::List => ('[', ']'),
            SequenceKind::Tuple => ('(', ')'),
        }
    }
}

/// Shadow tree mirroring the nesting of an input value.
///
/// Classification happens once here; rendering dispatches purely on the
/// variant tag and never re-inspects the original input.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureNode {
    Tensor(TensorLabel),
    Sequence {
        kind: SequenceKind,
        children: Vec<StructureNode>,
    },
    Mapping(Vec<(Scalar, StructureNode)>),
    Primitive(Scalar),
}

impl StructureNode {
    /// Mirror `value` into a structure model. The input is never mutated.
    pub fn build(value: &Value, opts: &ModelOpts) -> Result<Self> {
        wrap(value, opts, 0)
    }
}

fn wrap(value: &Value, opts: &ModelOpts, depth: usize) -> Result<StructureNode> {
    if depth > opts.max_depth {
        return Err(Error::DepthExceeded {
            depth,
            limit: opts.max_depth,
        });
    }

    match value {
        Value::Tensor(_) => Ok(StructureNode::Tensor(TensorLabel::new(
            value,
            opts.detailed,
        )?)),
        Value::List(items) => Ok(StructureNode::Sequence {
            kind: SequenceKind::List,
            children: wrap_children(items, opts, depth)?,
        }),
        Value::Tuple(items) => Ok(StructureNode::Sequence {
            kind: SequenceKind::Tuple,
            children: wrap_children(items, opts, depth)?,
        }),
        Value::Map(pairs) => {
            let mut wrapped = Vec::with_capacity(pairs.len());
            for (key, val) in pairs {
                // Keys pass through unwrapped
                wrapped.push((key.clone(), wrap(val, opts, depth + 1)?));
            }
            Ok(StructureNode::Mapping(wrapped))
        }
        Value::Scalar(scalar) => Ok(StructureNode::Primitive(scalar.clone())),
    }
}

fn wrap_children(items: &[Value], opts: &ModelOpts, depth: usize) -> Result<Vec<StructureNode>> {
    items.iter().map(|item| wrap(item, opts, depth + 1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapetree_types::TensorMeta;

    fn tensor(shape: &[usize]) -> Value {
        Value::Tensor(TensorMeta::new(shape.to_vec(), "float32", "cpu", false))
    }

    /// `levels` nested single-element lists around an integer
    fn nested_lists(levels: usize) -> Value {
        let mut value = Value::from(0i64);
        for _ in 0..levels {
            value = Value::List(vec![value]);
        }
        value
    }

    #[test]
    fn test_wrap_classifies_each_variant_once() {
        let value = Value::List(vec![tensor(&[2]), Value::from(1i64)]);
        let node = StructureNode::build(&value, &ModelOpts::default()).unwrap();

        let StructureNode::Sequence { kind, children } = node else {
            panic!("expected a sequence node");
        };
        assert_eq!(kind, SequenceKind::List);
        assert!(matches!(children[0], StructureNode::Tensor(_)));
        assert!(matches!(children[1], StructureNode::Primitive(Scalar::Int(1))));
    }

    #[test]
    fn test_tuple_kind_survives_wrapping() {
        let value = Value::Tuple(vec![Value::from(1i64)]);
        let node = StructureNode::build(&value, &ModelOpts::default()).unwrap();
        assert!(matches!(
            node,
            StructureNode::Sequence {
                kind: SequenceKind::Tuple,
                ..
            }
        ));
    }

    #[test]
    fn test_mapping_preserves_key_order() {
        let value = Value::Map(vec![
            (Scalar::Str("zeta".to_string()), Value::from(1i64)),
            (Scalar::Str("alpha".to_string()), Value::from(2i64)),
        ]);
        let node = StructureNode::build(&value, &ModelOpts::default()).unwrap();

        let StructureNode::Mapping(pairs) = node else {
            panic!("expected a mapping node");
        };
        assert_eq!(pairs[0].0, Scalar::Str("zeta".to_string()));
        assert_eq!(pairs[1].0, Scalar::Str("alpha".to_string()));
    }

    #[test]
    fn test_build_succeeds_exactly_at_depth_limit() {
        let opts = ModelOpts {
            max_depth: 3,
            ..Default::default()
        };
        assert!(StructureNode::build(&nested_lists(3), &opts).is_ok());
    }

    #[test]
    fn test_build_fails_past_depth_limit() {
        let opts = ModelOpts {
            max_depth: 3,
            ..Default::default()
        };
        let err = StructureNode::build(&nested_lists(4), &opts).unwrap_err();
        assert_eq!(err, Error::DepthExceeded { depth: 4, limit: 3 });
    }

    #[test]
    fn test_default_depth_limit_accepts_deep_but_bounded_input() {
        assert!(StructureNode::build(&nested_lists(MAX_DEPTH), &ModelOpts::default()).is_ok());
        assert!(StructureNode::build(&nested_lists(MAX_DEPTH + 1), &ModelOpts::default()).is_err());
    }
}
