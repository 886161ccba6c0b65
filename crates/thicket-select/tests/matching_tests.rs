//! Integration tests for compound-selector matching against single nodes.

use thicket_dom::{DomTree, ElementData, NodeId};
use thicket_select::{Element, Fragment, Tree, matches, parse};

/// Compile a selector that must consist of a single compound element.
fn compound(selector: &str) -> Element {
    let mut parsed = parse(selector).unwrap();
    assert_eq!(parsed.alternatives.len(), 1, "{selector}");
    match parsed.alternatives.remove(0) {
        Fragment::Element(element) => element,
        Fragment::Exp(exp) => panic!("expected a compound selector, got {exp}"),
    }
}

fn single(element: ElementData) -> (DomTree, NodeId) {
    let mut tree = DomTree::new();
    let node = tree.append_element(NodeId::ROOT, element);
    (tree, node)
}

#[test]
fn test_tag_is_case_sensitive() {
    let (tree, div) = single(ElementData::new("div"));
    assert!(matches(&tree, div, &compound("div")));
    assert!(!matches(&tree, div, &compound("DIV")));
    assert!(!matches(&tree, div, &compound("span")));
}

#[test]
fn test_universal_matches_elements_only() {
    let mut tree = DomTree::new();
    let p = tree.append_element(NodeId::ROOT, ElementData::new("p"));
    let text = tree.append_text(p, "hello");
    let universal = compound("*");

    assert!(matches(&tree, p, &universal));
    assert!(!matches(&tree, text, &universal));
    assert!(!matches(&tree, NodeId::ROOT, &universal));
}

#[test]
fn test_empty_element_matches_any_element() {
    let mut tree = DomTree::new();
    let p = tree.append_element(NodeId::ROOT, ElementData::new("p"));
    let text = tree.append_text(p, "hello");
    let empty = Element::default();

    assert!(matches(&tree, p, &empty));
    assert!(!matches(&tree, text, &empty));
}

#[test]
fn test_id() {
    let (tree, node) = single(ElementData::new("section").with_attr("id", "main"));
    assert!(matches(&tree, node, &compound("#main")));
    assert!(!matches(&tree, node, &compound("#mai")));

    let (tree, node) = single(ElementData::new("section"));
    assert!(!matches(&tree, node, &compound("#main")));
}

#[test]
fn test_duplicate_attribute_uses_first() {
    let (tree, node) = single(
        ElementData::new("a")
            .with_attr("id", "one")
            .with_attr("id", "two"),
    );
    assert!(matches(&tree, node, &compound("#one")));
    assert!(!matches(&tree, node, &compound("#two")));
    assert_eq!(tree.attr(node, "id"), Some("one"));
}

#[test]
fn test_class_list_split_on_single_spaces() {
    let (tree, node) = single(ElementData::new("li").with_attr("class", "nav-item  active"));
    assert!(matches(&tree, node, &compound(".nav-item")));
    assert!(matches(&tree, node, &compound(".active")));
    assert!(!matches(&tree, node, &compound(".nav")));
    assert!(!matches(&tree, node, &compound(".item")));
}

#[test]
fn test_class_without_attribute() {
    let (tree, node) = single(ElementData::new("li"));
    assert!(!matches(&tree, node, &compound(".active")));
}

#[test]
fn test_attribute_operators() {
    let (tree, node) = single(ElementData::new("span").with_attr("data", "abc.123"));
    for (selector, expected) in [
        ("[data]", true),
        ("[data^=ab]", true),
        ("[data$=23]", true),
        ("[data*=c.1]", true),
        ("[data=abc.123]", true),
        ("[data='abc.123']", true),
        ("[data=abc]", false),
        ("[data^=bc]", false),
        ("[data$=12]", false),
        ("[data*=xyz]", false),
        ("[other]", false),
    ] {
        assert_eq!(matches(&tree, node, &compound(selector)), expected, "{selector}");
    }
}

#[test]
fn test_empty_attribute_value() {
    let (tree, node) = single(ElementData::new("input").with_attr("disabled", ""));
    assert!(matches(&tree, node, &compound("[disabled]")));
    assert!(matches(&tree, node, &compound("[disabled='']")));
    assert!(!matches(&tree, node, &compound("[checked='']")));
}

#[test]
fn test_all_predicates_must_hold() {
    let (tree, node) = single(
        ElementData::new("a")
            .with_attr("id", "home")
            .with_attr("class", "nav")
            .with_attr("href", "/index.html"),
    );
    assert!(matches(&tree, node, &compound("a#home.nav[href$=.html]")));
    assert!(!matches(&tree, node, &compound("a#home.nav[href$=.htm]")));
    assert!(!matches(&tree, node, &compound("span#home.nav")));
    assert!(!matches(&tree, node, &compound("a#away.nav")));
}

#[test]
fn test_tree_view_of_dom() {
    let mut tree = DomTree::new();
    let p = tree.append_element(NodeId::ROOT, ElementData::new("p"));
    let _ = tree.append_text(p, "one ");
    let b = tree.append_element(p, ElementData::new("b"));
    let _ = tree.append_text(b, "bold");
    let _ = tree.append_text(p, "two");

    assert!(Tree::is_element(&tree, p));
    assert_eq!(Tree::tag_name(&tree, p), Some("p"));
    assert_eq!(Tree::tag_name(&tree, NodeId::ROOT), None);
    assert_eq!(Tree::parent(&tree, b), Some(p));
    assert_eq!(Tree::text(&tree, p), "one two");
}
