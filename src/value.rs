//! Payload shape classification and scalar rendering.

use std::fmt;

use serde_json::Value;

/// Shape of a payload value as seen by the assignment contract.
///
/// Leaves accept scalars, composites accept mappings. Sequences are never
/// valid in a field tree and only show up in mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Any non-container JSON value (string, number, bool, null).
    Scalar,
    /// A JSON object keyed by child name.
    Mapping,
    /// A JSON array.
    Sequence,
}

impl ValueShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => ValueShape::Mapping,
            Value::Array(_) => ValueShape::Sequence,
            _ => ValueShape::Scalar,
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            ValueShape::Scalar => "scalar",
            ValueShape::Mapping => "mapping",
            ValueShape::Sequence => "sequence",
        };
        write!(f, "{}", shape)
    }
}

/// Renders a stored scalar for embedding in a markup fragment.
///
/// Strings render without quotes, `Null` (unset) renders empty, other scalars
/// use their JSON representation.
pub fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
