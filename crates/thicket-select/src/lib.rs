//! Selector compilation and element-tree matching for Thicket.
//!
//! # Scope
//!
//! This crate implements:
//! - **Scanner** - two-mode tokenizer; attribute values after `=` are read
//!   verbatim until `]`
//! - **Parser** - recursive descent with one token of lookahead, building
//!   the syntax tree on an explicit construction stack
//! - **Matcher** - compound selectors (tag, `*`, `#id`, `.class`,
//!   `[attr]`, `[attr=v]`, `[attr^=v]`, `[attr$=v]`, `[attr*=v]`) evaluated
//!   against any tree implementing [`Tree`]
//! - **Traversal** - descendant, child, adjacent and general sibling
//!   combinators, plus the relational axes used by [`Selection`]
//!
//! # Not Implemented
//!
//! - Pseudo-classes and pseudo-elements
//! - Namespaces
//! - Specificity and cascade
//!
//! # Example
//!
//! ```
//! use thicket_dom::{DomTree, ElementData, NodeId};
//! use thicket_select::{parse, query};
//!
//! let mut tree = DomTree::new();
//! let div = tree.append_element(NodeId::ROOT, ElementData::new("div"));
//! let img = tree.append_element(div, ElementData::new("img").with_attr("src", "a.png"));
//!
//! let selector = parse("div > img[src$=.png]").unwrap();
//! assert_eq!(query::find(&tree, &[NodeId::ROOT], &selector), vec![img]);
//! ```

/// Selector syntax tree.
pub mod ast;
mod builder;
/// Compilation errors.
pub mod error;
/// Simple-selector matching and the [`Tree`] capability trait.
pub mod matching;
/// Recursive-descent parser.
pub mod parser;
/// Selector evaluation over node sets.
pub mod query;
/// Two-mode scanner.
pub mod scanner;
/// Chainable query facade.
pub mod selection;
/// Single-step traversal primitives.
pub mod traversal;

pub use ast::{Attr, AttrMatch, Combinator, Element, Exp, Fragment, Predicate, Selector};
pub use error::{LexError, SelectorError};
pub use matching::{Tree, matches};
pub use parser::Parser;
pub use query::Axis;
pub use scanner::{ScanMode, Scanner, Token, TokenKind, tokenize};
pub use selection::Selection;

/// Compile a selector string.
///
/// # Errors
///
/// Returns [`SelectorError::Lexical`] when the input contains a character
/// that starts no token or an unterminated quoted value, and
/// [`SelectorError::Syntax`] when the tokens do not form a selector.
pub fn parse(input: &str) -> Result<Selector, SelectorError> {
    Parser::new(input).parse()
}
