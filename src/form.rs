//! Concrete composites: a labeled field group and the top-level form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::composite::Composite;
use crate::element::Element;
use crate::error::ElementResult;

/// Named group of fields. Wraps the combined child output in a labeled
/// envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fieldset {
    name: String,
    title: String,
    children: Composite,
}

impl Fieldset {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            children: Composite::new(),
        }
    }

    /// Builder-style `add` for assembling trees inline.
    pub fn with(mut self, element: impl Into<Element>) -> Self {
        self.children.add(element);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add(&mut self, element: impl Into<Element>) {
        self.children.add(element);
    }

    pub fn remove(&mut self, element: &Element) {
        self.children.remove(element);
    }

    pub fn children(&self) -> &Composite {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Composite {
        &mut self.children
    }

    pub fn set_value(&mut self, value: Value) -> ElementResult<()> {
        self.children.set_value(&self.name, value)
    }

    pub fn value(&self) -> Value {
        self.children.value()
    }

    pub fn render(&self) -> String {
        format!(
            "<fieldset><legend>{title}</legend>\n{children}</fieldset>\n",
            title = self.title,
            children = self.children.render_children(),
        )
    }
}

/// Top-level composite. Carries a routing `action` attribute which the tree
/// traversal ignores; only rendering consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    name: String,
    title: String,
    action: String,
    children: Composite,
}

impl Form {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            action: action.into(),
            children: Composite::new(),
        }
    }

    /// Builder-style `add` for assembling trees inline.
    pub fn with(mut self, element: impl Into<Element>) -> Self {
        self.children.add(element);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn add(&mut self, element: impl Into<Element>) {
        self.children.add(element);
    }

    pub fn remove(&mut self, element: &Element) {
        self.children.remove(element);
    }

    pub fn children(&self) -> &Composite {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Composite {
        &mut self.children
    }

    pub fn set_value(&mut self, value: Value) -> ElementResult<()> {
        self.children.set_value(&self.name, value)
    }

    pub fn value(&self) -> Value {
        self.children.value()
    }

    pub fn render(&self) -> String {
        format!(
            "<form action=\"{action}\">\n<h3>{title}</h3>\n{children}</form>\n",
            action = self.action,
            title = self.title,
            children = self.children.render_children(),
        )
    }
}
