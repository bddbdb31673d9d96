//! Child-management invariants: in-place replacement, order preservation,
//! identity-based removal.

use formtree::util::testing::init_test_setup;
use formtree::{Element, Fieldset, Form, Input};

fn child_names(form: &Form) -> Vec<String> {
    form.children()
        .iter()
        .map(|child| child.name().to_string())
        .collect()
}

// ============================================================
// Duplicate Name Tests
// ============================================================

#[test]
fn given_duplicate_name_when_adding_then_replaces_child_in_place() {
    init_test_setup();

    let mut form = Form::new("product", "Add product", "/product/add")
        .with(Input::new("name", "Name", "text"))
        .with(Input::new("description", "Description", "text"))
        .with(Input::new("sku", "SKU", "text"));

    form.add(Input::new("description", "Long description", "textarea"));

    // Position is unchanged, identity is replaced
    assert_eq!(child_names(&form), vec!["name", "description", "sku"]);
    let replaced = form.children().get("description").unwrap();
    assert_eq!(replaced.title(), "Long description");
    assert_eq!(form.children().len(), 3);
}

// ============================================================
// Removal Tests
// ============================================================

#[test]
fn given_existing_child_when_removing_then_remaining_order_preserved() {
    let mut form = Form::new("product", "Add product", "/product/add")
        .with(Input::new("name", "Name", "text"))
        .with(Input::new("description", "Description", "text"))
        .with(Input::new("sku", "SKU", "text"));

    let description = Element::from(Input::new("description", "Description", "text"));
    form.remove(&description);

    assert_eq!(child_names(&form), vec!["name", "sku"]);
}

#[test]
fn given_foreign_node_when_removing_then_tree_unchanged() {
    let mut form = Form::new("product", "Add product", "/product/add")
        .with(Input::new("name", "Name", "text"))
        .with(Input::new("description", "Description", "text"));

    let before = form.clone();
    let foreign = Element::from(Input::new("price", "Price", "number"));
    form.remove(&foreign);

    assert_eq!(form, before);
}

#[test]
fn given_structurally_different_node_with_same_name_when_removing_then_tree_unchanged() {
    // Removal matches by structural identity, not by name
    let mut form = Form::new("product", "Add product", "/product/add")
        .with(Input::new("name", "Name", "text"));

    let same_name_different_kind = Element::from(Input::new("name", "Name", "file"));
    form.remove(&same_name_different_kind);

    assert_eq!(form.children().len(), 1);
}

// ============================================================
// Lookup Tests
// ============================================================

#[test]
fn given_nested_tree_when_looking_up_by_name_then_returns_child() {
    let form = Form::new("product", "Add product", "/product/add").with(
        Fieldset::new("photo", "Product photo").with(Input::new("caption", "Caption", "text")),
    );

    let photo = form.children().get("photo").unwrap();
    let caption = photo.as_composite().unwrap().get("caption").unwrap();
    assert_eq!(caption.title(), "Caption");

    assert!(form.children().get("missing").is_none());
}

#[test]
fn given_empty_form_when_checking_children_then_is_empty() {
    let form = Form::new("product", "Add product", "/product/add");
    assert!(form.children().is_empty());
    assert_eq!(form.children().len(), 0);
}
