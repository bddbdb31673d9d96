//! Polymorphic node dispatch over the closed set of tree variants.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::composite::Composite;
use crate::error::ElementResult;
use crate::form::{Fieldset, Form};
use crate::input::Input;

/// A node in the field tree.
///
/// Callers hold and traverse `Element`s without distinguishing leaves from
/// groups: every variant supports identity, value assignment, value
/// extraction, and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Input(Input),
    Fieldset(Fieldset),
    Form(Form),
}

impl Element {
    /// Stable identifier, unique among siblings, never empty.
    pub fn name(&self) -> &str {
        match self {
            Element::Input(input) => input.name(),
            Element::Fieldset(fieldset) => fieldset.name(),
            Element::Form(form) => form.name(),
        }
    }

    /// Display label.
    pub fn title(&self) -> &str {
        match self {
            Element::Input(input) => input.title(),
            Element::Fieldset(fieldset) => fieldset.title(),
            Element::Form(form) => form.title(),
        }
    }

    /// Assigns a value: a scalar for a leaf, a nested mapping for a group.
    #[instrument(level = "trace", skip(self, value), fields(name = %self.name()))]
    pub fn set_value(&mut self, value: Value) -> ElementResult<()> {
        match self {
            Element::Input(input) => input.set_value(value),
            Element::Fieldset(fieldset) => fieldset.set_value(value),
            Element::Form(form) => form.set_value(value),
        }
    }

    /// Extracts the current value: the stored scalar for a leaf, the fully
    /// reconstructed child mapping for a group.
    pub fn value(&self) -> Value {
        match self {
            Element::Input(input) => input.value(),
            Element::Fieldset(fieldset) => fieldset.value(),
            Element::Form(form) => form.value(),
        }
    }

    /// Renders the subtree rooted at this node to a text fragment.
    #[instrument(level = "trace", skip(self), fields(name = %self.name()))]
    pub fn render(&self) -> String {
        match self {
            Element::Input(input) => input.render(),
            Element::Fieldset(fieldset) => fieldset.render(),
            Element::Form(form) => form.render(),
        }
    }

    /// 1 for a leaf, 1 + deepest child for a group.
    pub fn depth(&self) -> usize {
        match self {
            Element::Input(_) => 1,
            Element::Fieldset(fieldset) => fieldset.children().depth(),
            Element::Form(form) => form.children().depth(),
        }
    }

    /// Names of all leaf descendants in traversal order. A lone leaf reports
    /// its own name.
    pub fn leaf_names(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaf_names(&mut leaves);
        leaves
    }

    pub(crate) fn collect_leaf_names(&self, leaves: &mut Vec<String>) {
        match self {
            Element::Input(input) => leaves.push(input.name().to_string()),
            Element::Fieldset(fieldset) => fieldset.children().collect_leaf_names(leaves),
            Element::Form(form) => form.children().collect_leaf_names(leaves),
        }
    }

    /// Child store of a group node, `None` for a leaf.
    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Element::Input(_) => None,
            Element::Fieldset(fieldset) => Some(fieldset.children()),
            Element::Form(form) => Some(form.children()),
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut Composite> {
        match self {
            Element::Input(_) => None,
            Element::Fieldset(fieldset) => Some(fieldset.children_mut()),
            Element::Form(form) => Some(form.children_mut()),
        }
    }
}

impl From<Input> for Element {
    fn from(input: Input) -> Self {
        Element::Input(input)
    }
}

impl From<Fieldset> for Element {
    fn from(fieldset: Fieldset) -> Self {
        Element::Fieldset(fieldset)
    }
}

impl From<Form> for Element {
    fn from(form: Form) -> Self {
        Element::Form(form)
    }
}
