//! Leaf node: a single named form field holding a scalar value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ElementError, ElementResult};
use crate::value::{render_scalar, ValueShape};

/// Terminal tree node.
///
/// Since leaves have no children to delegate to, they do the actual
/// rendering and value storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    name: String,
    title: String,
    kind: String,
    value: Value,
}

impl Input {
    /// Creates an unset field. `kind` is a presentation hint such as `"text"`
    /// or `"file"`; the tree traversal never interprets it.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind: kind.into(),
            value: Value::Null,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Replaces the stored scalar. Containers are a shape mismatch.
    pub fn set_value(&mut self, value: Value) -> ElementResult<()> {
        match ValueShape::of(&value) {
            ValueShape::Scalar => {
                self.value = value;
                Ok(())
            }
            found => Err(ElementError::ShapeMismatch {
                name: self.name.clone(),
                expected: ValueShape::Scalar,
                found,
            }),
        }
    }

    pub fn value(&self) -> Value {
        self.value.clone()
    }

    /// Minimal label+input fragment embedding name, title, and current value.
    pub fn render(&self) -> String {
        format!(
            "<label for=\"{name}\">{title}</label>\n<input name=\"{name}\" type=\"{kind}\" value=\"{value}\">\n",
            name = self.name,
            title = self.title,
            kind = self.kind,
            value = render_scalar(&self.value),
        )
    }
}
