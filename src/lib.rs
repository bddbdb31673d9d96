//! Composite trees for nested, named field hierarchies.
//!
//! A form is a tree of [`Element`]s: [`Input`] leaves holding scalar values,
//! and the composites [`Fieldset`] and [`Form`] owning ordered, name-keyed
//! children. Three operations traverse the tree uniformly, without the caller
//! distinguishing leaves from groups:
//!
//! - [`Element::render`] produces a presentation fragment,
//! - [`Element::set_value`] bulk-assigns values from a nested payload,
//! - [`Element::value`] bulk-extracts values into a nested payload.
//!
//! Sibling names are unique per composite (adding a duplicate name replaces
//! the existing child in place), iteration order is insertion order, and
//! payload keys without a matching child are silently ignored.
//!
//! ```
//! use formtree::{Element, Fieldset, Form, Input};
//! use serde_json::json;
//!
//! let mut form: Element = Form::new("product", "Add product", "/product/add")
//!     .with(Input::new("name", "Name", "text"))
//!     .with(
//!         Fieldset::new("photo", "Product photo")
//!             .with(Input::new("caption", "Caption", "text")),
//!     )
//!     .into();
//!
//! form.set_value(json!({
//!     "name": "Apple MacBook",
//!     "photo": { "caption": "Front photo." },
//! }))?;
//!
//! assert_eq!(form.value()["photo"]["caption"], "Front photo.");
//! # Ok::<(), formtree::ElementError>(())
//! ```

pub mod composite;
pub mod element;
pub mod error;
pub mod form;
pub mod input;
pub mod util;
pub mod value;

pub use composite::Composite;
pub use element::Element;
pub use error::{ElementError, ElementResult};
pub use form::{Fieldset, Form};
pub use input::Input;
pub use value::ValueShape;
