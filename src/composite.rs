//! Ordered, name-keyed child storage shared by the concrete composites.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::element::Element;
use crate::error::{ElementError, ElementResult};
use crate::value::ValueShape;

/// Child store for composite nodes.
///
/// Children form a strict tree: each child is exclusively owned here, keyed
/// by name, iterated in insertion order. Iteration order is load-bearing for
/// rendering and value reconstruction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composite {
    children: IndexMap<String, Element>,
}

impl Composite {
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }

    /// Appends at the end of the order for a new name. A duplicate name
    /// overwrites the existing slot in place, position unchanged.
    pub fn add(&mut self, element: impl Into<Element>) {
        let element = element.into();
        self.children.insert(element.name().to_string(), element);
    }

    /// Removes the child equal to `element`, if any, preserving the order of
    /// the remaining children. Absent nodes are a no-op, not an error.
    pub fn remove(&mut self, element: &Element) {
        if let Some(position) = self.children.values().position(|child| child == element) {
            self.children.shift_remove_index(position);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Element> {
        self.children.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.children.values()
    }

    /// Distributes a mapping across matching children.
    ///
    /// For each key present in both the payload and the children, the
    /// sub-value is assigned recursively. Keys without a matching child are
    /// ignored; children not mentioned keep their current value. A non-mapping
    /// payload is a shape mismatch reported against `name`, the owning
    /// composite. On error, siblings assigned before the failing child keep
    /// their new values.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_value(&mut self, name: &str, value: Value) -> ElementResult<()> {
        let Value::Object(entries) = value else {
            return Err(ElementError::ShapeMismatch {
                name: name.to_string(),
                expected: ValueShape::Mapping,
                found: ValueShape::of(&value),
            });
        };

        for (key, sub_value) in entries {
            if let Some(child) = self.children.get_mut(&key) {
                child.set_value(sub_value)?;
            }
        }
        Ok(())
    }

    /// Reconstructs the full mapping from every child name to that child's
    /// value, in iteration order. Never filtered.
    pub fn value(&self) -> Value {
        let mut entries = Map::new();
        for (name, child) in &self.children {
            entries.insert(name.clone(), child.value());
        }
        Value::Object(entries)
    }

    /// Base composite rendering: children rendered in insertion order,
    /// concatenated. Concrete composites wrap this in their own envelope.
    pub fn render_children(&self) -> String {
        let mut output = String::new();
        for child in self.children.values() {
            output.push_str(&child.render());
        }
        output
    }

    pub(crate) fn depth(&self) -> usize {
        1 + self
            .children
            .values()
            .map(Element::depth)
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn collect_leaf_names(&self, leaves: &mut Vec<String>) {
        for child in self.children.values() {
            child.collect_leaf_names(leaves);
        }
    }
}
