//! Traversal primitives.
//!
//! Each primitive starts from one node, walks one relationship of the tree
//! and returns, in document order for downward and forward walks and
//! nearest-first for backward and upward walks, the element nodes that
//! satisfy a compound selector. Text, comment and document nodes are never
//! returned.

use core::iter;

use crate::ast::Element;
use crate::matching::{Tree, matches};

/// Every matching element below `node`, depth-first pre-order. `node`
/// itself is not considered.
#[must_use]
pub fn find<T: Tree + ?Sized>(tree: &T, node: T::NodeId, element: &Element) -> Vec<T::NodeId> {
    let mut found = Vec::new();
    find_into(tree, node, element, &mut found);
    found
}

fn find_into<T: Tree + ?Sized>(
    tree: &T,
    node: T::NodeId,
    element: &Element,
    found: &mut Vec<T::NodeId>,
) {
    for child in children(tree, node).filter(|&c| tree.is_element(c)) {
        if matches(tree, child, element) {
            found.push(child);
        }
        find_into(tree, child, element, found);
    }
}

/// Matching direct children of `node`.
#[must_use]
pub fn child<T: Tree + ?Sized>(tree: &T, node: T::NodeId, element: &Element) -> Vec<T::NodeId> {
    children(tree, node)
        .filter(|&c| matches(tree, c, element))
        .collect()
}

/// Element children of `node` that do *not* match.
#[must_use]
pub fn not<T: Tree + ?Sized>(tree: &T, node: T::NodeId, element: &Element) -> Vec<T::NodeId> {
    children(tree, node)
        .filter(|&c| tree.is_element(c) && !matches(tree, c, element))
        .collect()
}

/// The next element sibling, if it matches.
///
/// Only the nearest element sibling is considered; a non-matching one ends
/// the search rather than being skipped.
#[must_use]
pub fn next<T: Tree + ?Sized>(tree: &T, node: T::NodeId, element: &Element) -> Vec<T::NodeId> {
    first_element(tree, following(tree, node), element)
}

/// Every later element sibling that matches.
#[must_use]
pub fn next_all<T: Tree + ?Sized>(tree: &T, node: T::NodeId, element: &Element) -> Vec<T::NodeId> {
    following(tree, node)
        .filter(|&s| matches(tree, s, element))
        .collect()
}

/// The previous element sibling, if it matches.
#[must_use]
pub fn prev<T: Tree + ?Sized>(tree: &T, node: T::NodeId, element: &Element) -> Vec<T::NodeId> {
    first_element(tree, preceding(tree, node), element)
}

/// Every earlier element sibling that matches, nearest first.
#[must_use]
pub fn prev_all<T: Tree + ?Sized>(tree: &T, node: T::NodeId, element: &Element) -> Vec<T::NodeId> {
    preceding(tree, node)
        .filter(|&s| matches(tree, s, element))
        .collect()
}

/// The parent, if it is an element and matches.
#[must_use]
pub fn parent<T: Tree + ?Sized>(tree: &T, node: T::NodeId, element: &Element) -> Vec<T::NodeId> {
    tree.parent(node)
        .filter(|&p| matches(tree, p, element))
        .into_iter()
        .collect()
}

/// Every matching element ancestor, nearest first.
#[must_use]
pub fn parents<T: Tree + ?Sized>(tree: &T, node: T::NodeId, element: &Element) -> Vec<T::NodeId> {
    iter::successors(tree.parent(node), |&p| tree.parent(p))
        .filter(|&p| matches(tree, p, element))
        .collect()
}

fn first_element<T: Tree + ?Sized>(
    tree: &T,
    mut siblings: impl Iterator<Item = T::NodeId>,
    element: &Element,
) -> Vec<T::NodeId> {
    siblings
        .find(|&s| tree.is_element(s))
        .filter(|&s| matches(tree, s, element))
        .into_iter()
        .collect()
}

fn children<T: Tree + ?Sized>(tree: &T, node: T::NodeId) -> impl Iterator<Item = T::NodeId> {
    iter::successors(tree.first_child(node), move |&c| tree.next_sibling(c))
}

fn following<T: Tree + ?Sized>(tree: &T, node: T::NodeId) -> impl Iterator<Item = T::NodeId> {
    iter::successors(tree.next_sibling(node), move |&s| tree.next_sibling(s))
}

fn preceding<T: Tree + ?Sized>(tree: &T, node: T::NodeId) -> impl Iterator<Item = T::NodeId> {
    iter::successors(tree.prev_sibling(node), move |&s| tree.prev_sibling(s))
}
