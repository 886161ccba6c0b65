//! Explicit construction stack driven by the parser.
//!
//! Grammar actions push simple selectors as they are recognised and then
//! reduce the top of the stack: `element` folds the pending predicates into a
//! compound selector, `exp` joins the two topmost fragments with a
//! combinator, and `selector` gathers every remaining fragment into the
//! final alternation.

use thicket_common::warning::warn_once;

use crate::ast::{Attr, AttrMatch, Combinator, Element, Exp, Fragment, Predicate, Selector};
use crate::error::SelectorError;

/// A partially built value on the construction stack.
#[derive(Debug)]
enum Entry {
    Predicate(Predicate),
    Fragment(Fragment),
    Selector(Selector),
}

/// Stack-based AST builder. Lives for exactly one parse.
#[derive(Debug, Default)]
pub(crate) struct AstBuilder {
    stack: Vec<Entry>,
    /// Predicates pushed since the last `element` reduction.
    pending: usize,
}

impl AstBuilder {
    pub(crate) fn tag(&mut self, name: String) {
        self.push_predicate(Predicate::Tag(name));
    }

    pub(crate) fn id(&mut self, name: String) {
        self.push_predicate(Predicate::Id(name));
    }

    pub(crate) fn class(&mut self, name: String) {
        self.push_predicate(Predicate::Class(name));
    }

    pub(crate) fn attr(&mut self, name: String, kind: AttrMatch, value: String) {
        self.push_predicate(Predicate::Attr(Attr { name, kind, value }));
    }

    fn push_predicate(&mut self, predicate: Predicate) {
        self.stack.push(Entry::Predicate(predicate));
        self.pending += 1;
    }

    /// Fold the pending predicates, in source order, into one [`Element`].
    pub(crate) fn element(&mut self) -> Result<(), SelectorError> {
        let fault = self.fault("element");
        let start = self.stack.len().checked_sub(self.pending).ok_or(fault.clone())?;
        let predicates = self
            .stack
            .drain(start..)
            .map(|entry| match entry {
                Entry::Predicate(p) => Ok(p),
                Entry::Fragment(_) | Entry::Selector(_) => Err(fault.clone()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.pending = 0;
        self.stack
            .push(Entry::Fragment(Fragment::Element(Element::new(predicates))));
        Ok(())
    }

    /// Replace the two topmost fragments with `left <combinator> right`.
    pub(crate) fn exp(&mut self, combinator: Combinator) -> Result<(), SelectorError> {
        let fault = self.fault("exp");
        let Some(Entry::Fragment(Fragment::Element(right))) = self.stack.pop() else {
            return Err(fault);
        };
        let Some(Entry::Fragment(left)) = self.stack.pop() else {
            return Err(fault);
        };
        self.stack.push(Entry::Fragment(Fragment::Exp(Box::new(Exp {
            left,
            combinator,
            right,
        }))));
        Ok(())
    }

    /// Collect every stacked fragment, first to last, into one [`Selector`].
    pub(crate) fn selector(&mut self) -> Result<(), SelectorError> {
        let fault = self.fault("selector");
        let alternatives = self
            .stack
            .drain(..)
            .map(|entry| match entry {
                Entry::Fragment(fragment) => Ok(fragment),
                Entry::Predicate(_) | Entry::Selector(_) => Err(fault.clone()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.stack.push(Entry::Selector(Selector { alternatives }));
        Ok(())
    }

    /// Take the finished selector. The stack must hold exactly that selector.
    pub(crate) fn build(mut self) -> Result<Selector, SelectorError> {
        let fault = self.fault("build");
        match (self.stack.pop(), self.stack.is_empty(), self.pending) {
            (Some(Entry::Selector(selector)), true, 0) => Ok(selector),
            _ => {
                warn_once("Selector", &fault.to_string());
                Err(fault)
            }
        }
    }

    fn fault(&self, action: &'static str) -> SelectorError {
        SelectorError::Construction {
            action,
            depth: self.stack.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> Element {
        Element::new(vec![Predicate::Tag(name.to_string())])
    }

    #[test]
    fn test_element_takes_only_pending_predicates() {
        let mut builder = AstBuilder::default();
        builder.tag("div".to_string());
        builder.element().unwrap();
        builder.tag("a".to_string());
        builder.class("x".to_string());
        builder.element().unwrap();
        builder.exp(Combinator::Child).unwrap();
        builder.selector().unwrap();

        let selector = builder.build().unwrap();
        assert_eq!(
            selector.alternatives,
            vec![Fragment::Exp(Box::new(Exp {
                left: Fragment::Element(tag("div")),
                combinator: Combinator::Child,
                right: Element::new(vec![
                    Predicate::Tag("a".to_string()),
                    Predicate::Class("x".to_string()),
                ]),
            }))]
        );
    }

    #[test]
    fn test_element_with_nothing_pending_is_empty() {
        let mut builder = AstBuilder::default();
        builder.element().unwrap();
        builder.selector().unwrap();
        let selector = builder.build().unwrap();
        assert_eq!(selector.alternatives, vec![Fragment::Element(Element::default())]);
    }

    #[test]
    fn test_selector_keeps_alternative_order() {
        let mut builder = AstBuilder::default();
        for name in ["a", "b", "c"] {
            builder.tag(name.to_string());
            builder.element().unwrap();
        }
        builder.selector().unwrap();
        let selector = builder.build().unwrap();
        assert_eq!(selector.to_string(), "a, b, c");
    }

    #[test]
    fn test_exp_without_operands_is_a_fault() {
        let mut builder = AstBuilder::default();
        builder.element().unwrap();
        assert_eq!(
            builder.exp(Combinator::Descendant),
            Err(SelectorError::Construction {
                action: "exp",
                depth: 1
            })
        );
    }

    #[test]
    fn test_build_rejects_unreduced_stack() {
        let mut builder = AstBuilder::default();
        builder.tag("div".to_string());
        assert!(matches!(
            builder.build(),
            Err(SelectorError::Construction { action: "build", .. })
        ));
    }
}
