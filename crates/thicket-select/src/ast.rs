//! Selector syntax tree.
//!
//! ```text
//! div.post > a[href^=http], img
//!
//! Selector
//! ├── Exp(Child)
//! │   ├── left:  Element [Tag(div), Class(post)]
//! │   └── right: Element [Tag(a), Attr(href ^= http)]
//! └── Element [Tag(img)]
//! ```
//!
//! Every type renders back to selector syntax through `Display`; parsing
//! the rendered text yields an equal tree.

use core::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Comma-separated alternatives. A node matches if any alternative does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    /// The alternatives, in source order.
    pub alternatives: Vec<Fragment>,
}

/// One alternative: either a lone compound selector or a combinator chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
    /// A single compound selector.
    Element(Element),
    /// Two fragments joined by a combinator.
    Exp(Box<Exp>),
}

/// `left <combinator> right`.
///
/// Chains associate to the left: `a > b c` is `Exp(Exp(a > b) c)`. The right
/// operand is always the compound selector the grammar has just read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exp {
    /// Everything before the combinator.
    pub left: Fragment,
    /// How `right` relates to the nodes matched by `left`.
    pub combinator: Combinator,
    /// The compound selector after the combinator.
    pub right: Element,
}

/// Relationship between the two sides of an [`Exp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Combinator {
    /// `a b`: `b` anywhere below `a`.
    Descendant,
    /// `a > b`: `b` a direct child of `a`.
    Child,
    /// `a + b`: `b` the element immediately after `a`.
    AdjacentSibling,
    /// `a ~ b`: `b` any later element sibling of `a`.
    GeneralSibling,
}

impl Combinator {
    /// The operator as written in a selector (`" "` for descendant).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::AdjacentSibling => "+",
            Self::GeneralSibling => "~",
        }
    }
}

/// A compound selector: every predicate must hold for the same node.
///
/// An element with no predicates matches any element node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Predicates in source order.
    pub predicates: Vec<Predicate>,
}

impl Element {
    /// Create a compound selector from its predicates.
    #[must_use]
    pub const fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    /// Check if this is the empty (match-anything) compound selector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// One simple selector inside a compound selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Element name, or `*` for any element.
    Tag(String),
    /// `#name`
    Id(String),
    /// `.name`
    Class(String),
    /// `[name]`, `[name=value]`, `[name^=value]`, ...
    Attr(Attr),
}

/// An attribute test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr {
    /// Attribute name.
    pub name: String,
    /// Comparison applied to the attribute's value.
    pub kind: AttrMatch,
    /// Unquoted comparison value; empty for [`AttrMatch::Exists`].
    pub value: String,
}

/// Attribute comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum AttrMatch {
    /// `[name]`
    Exists,
    /// `[name=value]`
    Equals,
    /// `[name^=value]`
    PrefixEquals,
    /// `[name$=value]`
    SuffixEquals,
    /// `[name*=value]`
    ContainsEquals,
}

impl AttrMatch {
    /// The operator as written in a selector (empty for `Exists`).
    #[must_use]
    pub const fn operator(self) -> &'static str {
        match self {
            Self::Exists => "",
            Self::Equals => "=",
            Self::PrefixEquals => "^=",
            Self::SuffixEquals => "$=",
            Self::ContainsEquals => "*=",
        }
    }

    /// Compare an attribute's `actual` value against the selector's `expected` value.
    #[must_use]
    pub fn test(self, actual: &str, expected: &str) -> bool {
        match self {
            Self::Exists => true,
            Self::Equals => actual == expected,
            Self::PrefixEquals => actual.starts_with(expected),
            Self::SuffixEquals => actual.ends_with(expected),
            Self::ContainsEquals => actual.contains(expected),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{alternative}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Exp(exp) => fmt::Display::fmt(exp, f),
        }
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.combinator {
            Combinator::Descendant => write!(f, "{} {}", self.left, self.right),
            op => write!(f, "{} {} {}", self.left, op.symbol(), self.right),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.predicates
            .iter()
            .try_for_each(|p| fmt::Display::fmt(p, f))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(name) => f.write_str(name),
            Self::Id(name) => write!(f, "#{name}"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::Attr(attr) => fmt::Display::fmt(attr, f),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == AttrMatch::Exists {
            return write!(f, "[{}]", self.name);
        }
        let quote = if self.value.contains('\'') { '"' } else { '\'' };
        write!(
            f,
            "[{}{}{quote}{}{quote}]",
            self.name,
            self.kind.operator(),
            self.value
        )
    }
}

/// Bracketed structural rendering, one bracket pair per `Exp` and `Element`.
///
/// `div a > img` dumps as `[[[div] [a]]>[img]]`, which makes associativity
/// visible where `Display` output would not.
#[must_use]
pub fn dump(selector: &Selector) -> String {
    let alternatives: Vec<String> = selector.alternatives.iter().map(dump_fragment).collect();
    alternatives.join(", ")
}

fn dump_fragment(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Element(element) => dump_element(element),
        Fragment::Exp(exp) => format!(
            "[{}{}{}]",
            dump_fragment(&exp.left),
            exp.combinator.symbol(),
            dump_element(&exp.right)
        ),
    }
}

fn dump_element(element: &Element) -> String {
    let predicates: Vec<String> = element
        .predicates
        .iter()
        .map(|p| match p {
            Predicate::Attr(attr) => format!("[{}{}{}]", attr.name, attr.kind.operator(), attr.value),
            other => other.to_string(),
        })
        .collect();
    format!("[{}]", predicates.join(" "))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn tag(name: &str) -> Element {
        Element::new(vec![Predicate::Tag(name.to_string())])
    }

    #[test]
    fn test_attr_match_operators() {
        let value = "abc.123";
        let expectations = [
            (AttrMatch::Exists, "anything", true),
            (AttrMatch::Equals, "abc.123", true),
            (AttrMatch::Equals, "abc", false),
            (AttrMatch::PrefixEquals, "ab", true),
            (AttrMatch::SuffixEquals, "23", true),
            (AttrMatch::ContainsEquals, "c.1", true),
            (AttrMatch::ContainsEquals, "x", false),
        ];
        for (kind, expected, outcome) in expectations {
            assert_eq!(kind.test(value, expected), outcome, "{kind} {expected}");
        }
    }

    #[test]
    fn test_every_operator_renders_distinctly() {
        let rendered: Vec<String> = AttrMatch::iter()
            .map(|kind| {
                Attr {
                    name: "x".to_string(),
                    kind,
                    value: "v".to_string(),
                }
                .to_string()
            })
            .collect();
        assert_eq!(rendered, ["[x]", "[x='v']", "[x^='v']", "[x$='v']", "[x*='v']"]);
    }

    #[test]
    fn test_attr_value_with_single_quote_uses_double_quotes() {
        let attr = Attr {
            name: "title".to_string(),
            kind: AttrMatch::Equals,
            value: "it's".to_string(),
        };
        assert_eq!(attr.to_string(), "[title=\"it's\"]");
    }

    #[test]
    fn test_combinator_rendering() {
        let rendered: Vec<String> = Combinator::iter()
            .map(|combinator| {
                Exp {
                    left: Fragment::Element(tag("a")),
                    combinator,
                    right: tag("b"),
                }
                .to_string()
            })
            .collect();
        assert_eq!(rendered, ["a b", "a > b", "a + b", "a ~ b"]);
    }

    #[test]
    fn test_dump_shows_left_association() {
        let inner = Exp {
            left: Fragment::Element(tag("div")),
            combinator: Combinator::Descendant,
            right: tag("a"),
        };
        let outer = Exp {
            left: Fragment::Exp(Box::new(inner)),
            combinator: Combinator::Child,
            right: tag("img"),
        };
        let selector = Selector {
            alternatives: vec![Fragment::Exp(Box::new(outer)), Fragment::Element(Element::default())],
        };
        assert_eq!(dump(&selector), "[[[div] [a]]>[img]], []");
        assert_eq!(selector.to_string(), "div a > img, ");
    }
}
