//! Evaluation of compiled selectors over node sets.
//!
//! [`find`] evaluates a whole [`Selector`], combinators included, below a
//! set of starting nodes. [`relative`] applies one of the other traversal
//! relationships ([`Axis`]) using each alternative as a plain predicate.
//!
//! Results are concatenated in evaluation order and never deduplicated: a
//! node reachable from two starting nodes, or matched by two alternatives,
//! appears once per path.

#[cfg(feature = "match-trace")]
use std::cell::Cell;

use strum_macros::{Display, EnumIter};
use thicket_common::warning::warn_once;

use crate::ast::{Combinator, Element, Fragment, Selector};
use crate::matching::Tree;
use crate::traversal;

#[cfg(feature = "match-trace")]
thread_local! {
    static EVAL_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// A relationship to walk from each node of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Axis {
    /// Descendants, with full combinator evaluation.
    Find,
    /// Direct children.
    Child,
    /// Direct children that do not match.
    Not,
    /// The immediately following element sibling.
    Next,
    /// All following element siblings.
    NextAll,
    /// The immediately preceding element sibling.
    Prev,
    /// All preceding element siblings.
    PrevAll,
    /// The parent element.
    Parent,
    /// All ancestor elements.
    Parents,
}

impl Axis {
    /// Apply this axis from a single node, using `element` as the predicate.
    #[must_use]
    pub fn apply<T: Tree + ?Sized>(self, tree: &T, node: T::NodeId, element: &Element) -> Vec<T::NodeId> {
        match self {
            Self::Find => traversal::find(tree, node, element),
            Self::Child => traversal::child(tree, node, element),
            Self::Not => traversal::not(tree, node, element),
            Self::Next => traversal::next(tree, node, element),
            Self::NextAll => traversal::next_all(tree, node, element),
            Self::Prev => traversal::prev(tree, node, element),
            Self::PrevAll => traversal::prev_all(tree, node, element),
            Self::Parent => traversal::parent(tree, node, element),
            Self::Parents => traversal::parents(tree, node, element),
        }
    }
}

impl From<Combinator> for Axis {
    fn from(combinator: Combinator) -> Self {
        match combinator {
            Combinator::Descendant => Self::Find,
            Combinator::Child => Self::Child,
            Combinator::AdjacentSibling => Self::Next,
            Combinator::GeneralSibling => Self::NextAll,
        }
    }
}

/// Every node below `nodes` matched by any alternative of `selector`.
///
/// Alternatives are evaluated independently against the same starting set
/// and their results concatenated in alternative order.
#[must_use]
pub fn find<T: Tree + ?Sized>(tree: &T, nodes: &[T::NodeId], selector: &Selector) -> Vec<T::NodeId> {
    selector
        .alternatives
        .iter()
        .flat_map(|fragment| evaluate(tree, nodes, fragment))
        .collect()
}

/// Evaluate one fragment below `nodes`.
///
/// An [`Element`] is searched for among the descendants of every starting
/// node. An `Exp` first evaluates its left side, then walks the combinator's
/// relationship from each of those nodes with the right side as predicate.
#[must_use]
pub fn evaluate<T: Tree + ?Sized>(tree: &T, nodes: &[T::NodeId], fragment: &Fragment) -> Vec<T::NodeId> {
    #[cfg(feature = "match-trace")]
    let depth = EVAL_DEPTH.with(|d| {
        let current = d.get();
        d.set(current + 1);
        current
    });

    let result = match fragment {
        Fragment::Element(element) => apply_each(tree, nodes, element, Axis::Find),
        Fragment::Exp(exp) => {
            let left = evaluate(tree, nodes, &exp.left);
            apply_each(tree, &left, &exp.right, exp.combinator.into())
        }
    };

    #[cfg(feature = "match-trace")]
    {
        eprintln!(
            "[MATCH] {:indent$}{fragment} in={} out={}",
            "",
            nodes.len(),
            result.len(),
            indent = depth * 2
        );
        EVAL_DEPTH.with(|d| d.set(depth));
    }

    result
}

/// Walk `axis` from every node of `nodes`, using each alternative of
/// `selector` as the predicate.
///
/// [`Axis::Find`] delegates to [`find`]. For the other axes an alternative
/// containing a combinator has no single predicate to test, so it
/// contributes nothing and a warning is emitted once.
#[must_use]
pub fn relative<T: Tree + ?Sized>(
    tree: &T,
    nodes: &[T::NodeId],
    selector: &Selector,
    axis: Axis,
) -> Vec<T::NodeId> {
    if axis == Axis::Find {
        return find(tree, nodes, selector);
    }
    let mut result = Vec::new();
    for fragment in &selector.alternatives {
        match fragment {
            Fragment::Element(element) => result.extend(apply_each(tree, nodes, element, axis)),
            Fragment::Exp(exp) => warn_once(
                "Selector",
                &format!("combinator alternative `{exp}` has no effect on `{axis}`"),
            ),
        }
    }
    result
}

fn apply_each<T: Tree + ?Sized>(
    tree: &T,
    nodes: &[T::NodeId],
    element: &Element,
    axis: Axis,
) -> Vec<T::NodeId> {
    nodes
        .iter()
        .flat_map(|&node| axis.apply(tree, node, element))
        .collect()
}
