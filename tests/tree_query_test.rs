//! Structural queries: depth and leaf collection.

use formtree::{Element, Fieldset, Form, Input};

fn product_form() -> Element {
    Form::new("product", "Add product", "/product/add")
        .with(Input::new("name", "Name", "text"))
        .with(Input::new("description", "Description", "text"))
        .with(
            Fieldset::new("photo", "Product photo")
                .with(Input::new("caption", "Caption", "text"))
                .with(Input::new("image", "Image", "file")),
        )
        .into()
}

#[test]
fn given_two_level_tree_when_measuring_depth_then_counts_longest_branch() {
    let form = product_form();
    assert_eq!(form.depth(), 3, "form -> fieldset -> input");
}

#[test]
fn given_lone_leaf_when_measuring_depth_then_returns_one() {
    let leaf = Element::from(Input::new("name", "Name", "text"));
    assert_eq!(leaf.depth(), 1);
}

#[test]
fn given_empty_form_when_measuring_depth_then_returns_one() {
    let form: Element = Form::new("product", "Add product", "/product/add").into();
    assert_eq!(form.depth(), 1);
}

#[test]
fn given_tree_when_collecting_leaves_then_returns_names_in_traversal_order() {
    let form = product_form();
    assert_eq!(
        form.leaf_names(),
        vec!["name", "description", "caption", "image"]
    );
}

#[test]
fn given_lone_leaf_when_collecting_leaves_then_reports_own_name() {
    let leaf = Element::from(Input::new("caption", "Caption", "text"));
    assert_eq!(leaf.leaf_names(), vec!["caption"]);
}
