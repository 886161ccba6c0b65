//! Fluent, chainable queries over a tree.
//!
//! ```ignore
//! let doc = Selection::document(&tree);
//! let links = doc.find("#post a")?;
//! let hrefs = links.attrs("href");
//! let list = links.parent("div.links")?;
//! ```
//!
//! Every step parses its selector, walks one [`Axis`] from the current
//! nodes and returns a new selection; the original is left untouched.

use thicket_dom::DomTree;

use crate::ast::Selector;
use crate::error::SelectorError;
use crate::matching::Tree;
use crate::parse;
use crate::query::{Axis, relative};

/// An ordered list of nodes from one tree.
#[derive(Debug)]
pub struct Selection<'t, T: Tree + ?Sized> {
    tree: &'t T,
    nodes: Vec<T::NodeId>,
}

impl<'t> Selection<'t, DomTree> {
    /// A selection holding only the tree's document node.
    #[must_use]
    pub fn document(tree: &'t DomTree) -> Self {
        Self::new(tree, vec![tree.root()])
    }
}

impl<'t, T: Tree + ?Sized> Selection<'t, T> {
    /// Wrap an explicit list of nodes.
    #[must_use]
    pub const fn new(tree: &'t T, nodes: Vec<T::NodeId>) -> Self {
        Self { tree, nodes }
    }

    /// Descendants matching `selector`, combinators included.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `selector` does not compile.
    pub fn find(&self, selector: &str) -> Result<Self, SelectorError> {
        self.walk(selector, Axis::Find)
    }

    /// Direct children matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `selector` does not compile.
    pub fn child(&self, selector: &str) -> Result<Self, SelectorError> {
        self.walk(selector, Axis::Child)
    }

    /// Direct element children not matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `selector` does not compile.
    pub fn not(&self, selector: &str) -> Result<Self, SelectorError> {
        self.walk(selector, Axis::Not)
    }

    /// The next element sibling of each node, where it matches.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `selector` does not compile.
    pub fn next(&self, selector: &str) -> Result<Self, SelectorError> {
        self.walk(selector, Axis::Next)
    }

    /// All later element siblings matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `selector` does not compile.
    pub fn next_all(&self, selector: &str) -> Result<Self, SelectorError> {
        self.walk(selector, Axis::NextAll)
    }

    /// The previous element sibling of each node, where it matches.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `selector` does not compile.
    pub fn prev(&self, selector: &str) -> Result<Self, SelectorError> {
        self.walk(selector, Axis::Prev)
    }

    /// All earlier element siblings matching `selector`, nearest first.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `selector` does not compile.
    pub fn prev_all(&self, selector: &str) -> Result<Self, SelectorError> {
        self.walk(selector, Axis::PrevAll)
    }

    /// The parent of each node, where it matches.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `selector` does not compile.
    pub fn parent(&self, selector: &str) -> Result<Self, SelectorError> {
        self.walk(selector, Axis::Parent)
    }

    /// All matching ancestors of each node, nearest first.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `selector` does not compile.
    pub fn parents(&self, selector: &str) -> Result<Self, SelectorError> {
        self.walk(selector, Axis::Parents)
    }

    /// Walk `axis` with an already compiled selector.
    #[must_use]
    pub fn select(&self, selector: &Selector, axis: Axis) -> Self {
        Self::new(self.tree, relative(self.tree, &self.nodes, selector, axis))
    }

    fn walk(&self, selector: &str, axis: Axis) -> Result<Self, SelectorError> {
        Ok(self.select(&parse(selector)?, axis))
    }

    /// The selected nodes, in order.
    #[must_use]
    pub fn nodes(&self) -> &[T::NodeId] {
        &self.nodes
    }

    /// Number of selected nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Immediate text of the first node, or `""` if the selection is empty.
    #[must_use]
    pub fn text(&self) -> String {
        self.nodes
            .first()
            .map(|&node| self.tree.text(node))
            .unwrap_or_default()
    }

    /// Immediate text of every node.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.nodes.iter().map(|&node| self.tree.text(node)).collect()
    }

    /// Attribute `name` of the first node; `""` when absent or empty.
    #[must_use]
    pub fn attr(&self, name: &str) -> String {
        self.nodes
            .first()
            .and_then(|&node| self.tree.attr(node, name))
            .unwrap_or_default()
            .to_string()
    }

    /// Attribute `name` of every node, `""` where absent.
    #[must_use]
    pub fn attrs(&self, name: &str) -> Vec<String> {
        self.nodes
            .iter()
            .map(|&node| self.tree.attr(node, name).unwrap_or_default().to_string())
            .collect()
    }
}
