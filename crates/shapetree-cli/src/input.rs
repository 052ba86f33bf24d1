use anyhow::{Context, Result, bail};
use shapetree_types::{Scalar, TensorMeta, Value};

// NOTE: JSON Input Convention
//
// JSON has no native tensor or tuple, so two single-key marker objects stand
// in for them:
// - {"$tensor": {"shape": [3, 4], "dtype": "float32", "device": "cpu",
//   "requires_grad": false}} - dtype/device/requires_grad are optional
// - {"$tuple": [ ... ]}
// Plain arrays become lists, other objects become mappings (document order
// preserved), and strings/numbers/bools/null become scalars.

pub fn value_from_json(json: &serde_json::Value) -> Result<Value> {
    match json {
        serde_json::Value::Null => Ok(Value::Scalar(Scalar::None)),
        serde_json::Value::Bool(b) => Ok(Value::Scalar(Scalar::Bool(*b))),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Scalar(Scalar::Int(i)))
            } else {
                let x = n
                    .as_f64()
                    .with_context(|| format!("Unsupported number: {}", n))?;
                Ok(Value::Scalar(Scalar::Float(x)))
            }
        }
        serde_json::Value::String(s) => Ok(Value::Scalar(Scalar::Str(s.clone()))),
        serde_json::Value::Array(items) => {
            let converted: Result<Vec<Value>> = items.iter().map(value_from_json).collect();
            Ok(Value::List(converted?))
        }
        serde_json::Value::Object(map) => {
            if map.len() == 1 {
                if let Some(payload) = map.get("$tensor") {
                    return tensor_from_json(payload);
                }
                if let Some(items) = map.get("$tuple") {
                    let Some(items) = items.as_array() else {
                        bail!("\"$tuple\" must hold an array");
                    };
                    let converted: Result<Vec<Value>> =
                        items.iter().map(value_from_json).collect();
                    return Ok(Value::Tuple(converted?));
                }
            }

            let mut pairs = Vec::with_capacity(map.len());
            for (key, val) in map {
                pairs.push((Scalar::Str(key.clone()), value_from_json(val)?));
            }
            Ok(Value::Map(pairs))
        }
    }
}

fn tensor_from_json(payload: &serde_json::Value) -> Result<Value> {
    let obj = payload
        .as_object()
        .context("\"$tensor\" must hold an object")?;

    let shape = obj
        .get("shape")
        .context("\"$tensor\" requires a \"shape\" array")?
        .as_array()
        .context("\"shape\" must be an array")?
        .iter()
        .map(|dim| {
            dim.as_u64()
                .map(|d| d as usize)
                .with_context(|| format!("\"shape\" entries must be non-negative integers, got {}", dim))
        })
        .collect::<Result<Vec<usize>>>()?;

    let dtype = obj
        .get("dtype")
        .and_then(|v| v.as_str())
        .unwrap_or("float32");
    let device = obj
        .get("device")
        .and_then(|v| v.as_str())
        .unwrap_or("cpu");
    let requires_grad = obj
        .get("requires_grad")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    Ok(Value::Tensor(TensorMeta::new(
        shape,
        dtype,
        device,
        requires_grad,
    )))
}
