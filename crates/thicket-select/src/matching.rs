//! Simple-selector matching against a single node.
//!
//! The matcher only needs a handful of capabilities from the tree, described
//! by the [`Tree`] trait. [`thicket_dom::DomTree`] implements it; any other
//! arena or pointer-based tree can be queried by implementing it as well.

use core::fmt;

use thicket_dom::{DomTree, NodeId};

use crate::ast::{Element, Predicate};

/// Read-only view of an element tree.
pub trait Tree {
    /// Handle to one node of the tree.
    type NodeId: Copy + Eq + fmt::Debug;

    /// Check if the node is an element (as opposed to text, comment or the
    /// document itself). Only elements take part in matching.
    fn is_element(&self, node: Self::NodeId) -> bool;

    /// The element's tag name, `None` for non-elements.
    fn tag_name(&self, node: Self::NodeId) -> Option<&str>;

    /// Value of the first attribute called `name`.
    fn attr(&self, node: Self::NodeId, name: &str) -> Option<&str>;

    /// First child of any type.
    fn first_child(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// Next sibling of any type.
    fn next_sibling(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// Previous sibling of any type.
    fn prev_sibling(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// Parent node, `None` at the root.
    fn parent(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// Concatenated content of the node's immediate text children.
    fn text(&self, node: Self::NodeId) -> String;
}

impl Tree for DomTree {
    type NodeId = NodeId;

    fn is_element(&self, node: NodeId) -> bool {
        self.as_element(node).is_some()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.as_element(node).map(|e| e.tag_name.as_str())
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.as_element(node).and_then(|e| e.attr(name))
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        Self::first_child(self, node)
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        Self::next_sibling(self, node)
    }

    fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        Self::prev_sibling(self, node)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Self::parent(self, node)
    }

    fn text(&self, node: NodeId) -> String {
        self.text_content(node)
    }
}

/// Check if `node` is an element satisfying every predicate of `element`.
///
/// The empty compound selector matches every element node.
#[must_use]
pub fn matches<T: Tree + ?Sized>(tree: &T, node: T::NodeId, element: &Element) -> bool {
    tree.is_element(node)
        && element
            .predicates
            .iter()
            .all(|predicate| predicate_matches(tree, node, predicate))
}

/// Check a single simple selector against an element node.
#[must_use]
pub fn predicate_matches<T: Tree + ?Sized>(tree: &T, node: T::NodeId, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Tag(name) => name == "*" || tree.tag_name(node) == Some(name.as_str()),
        Predicate::Id(name) => tree.attr(node, "id") == Some(name.as_str()),
        Predicate::Class(name) => tree
            .attr(node, "class")
            .is_some_and(|list| list.split(' ').any(|class| class == name)),
        // Absent attributes fail every test, including `[name='']`.
        Predicate::Attr(attr) => tree
            .attr(node, &attr.name)
            .is_some_and(|actual| attr.kind.test(actual, &attr.value)),
    }
}
