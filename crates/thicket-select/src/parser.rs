//! Recursive-descent selector parser with one token of lookahead.
//!
//! ```text
//! Selector       := Exp ( ',' Blank? Selector )?
//! Exp            := Element ExpTail
//! ExpTail        := Blank CombinatorTail
//!                 | ( '>' | '+' | '~' ) Blank? Element ExpTail
//!                 | ε
//! CombinatorTail := ( '>' | '+' | '~' ) Blank? Element ExpTail
//!                 | Element ExpTail
//! Element        := Tag? Adjunct*
//! Adjunct        := '#' Identifier | '.' Identifier | '[' Identifier AttrOp? ']'
//! AttrOp         := ( '=' | '^=' | '$=' | '*=' ) ( StringLit | Literal )
//! Tag            := Identifier | '*'
//! ```
//!
//! Each production drives the [`AstBuilder`] as soon as its constituents are
//! recognised. The first error is kept; after it the parser stops scanning
//! and stops touching the builder, and every production unwinds.

use core::mem;

use crate::ast::{AttrMatch, Combinator, Selector};
use crate::builder::AstBuilder;
use crate::error::SelectorError;
use crate::scanner::{Scanner, Token, TokenKind};

/// Parser for a single selector string.
#[derive(Debug)]
pub struct Parser {
    scanner: Scanner,
    lookahead: Token,
    builder: AstBuilder,
    error: Option<SelectorError>,
}

impl Parser {
    /// Create a parser and read the first token.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut parser = Self {
            scanner: Scanner::new(input),
            lookahead: Token::EndOfInput,
            builder: AstBuilder::default(),
            error: None,
        };
        parser.advance();
        parser
    }

    /// Parse the whole input.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntax error encountered. No partial
    /// selector is returned alongside it.
    pub fn parse(mut self) -> Result<Selector, SelectorError> {
        self.selector();
        self.reduce(AstBuilder::selector);
        match self.error {
            Some(err) => Err(err),
            None => self.builder.build(),
        }
    }

    /// `Selector := Exp ( ',' Blank? Selector )?`
    fn selector(&mut self) {
        loop {
            self.exp();
            if self.failed() {
                return;
            }
            match self.lookahead.kind() {
                TokenKind::Comma => {
                    let _ = self.take();
                    self.space();
                }
                TokenKind::EndOfInput => return,
                _ => {
                    self.unexpected(&[TokenKind::Comma, TokenKind::EndOfInput]);
                    return;
                }
            }
        }
    }

    /// `Exp := Element ExpTail`
    fn exp(&mut self) {
        self.element();
        self.exp_tail();
    }

    /// Reads combinator/element pairs until a comma or the end of input,
    /// reducing each pair onto the fragment to its left.
    fn exp_tail(&mut self) {
        while !self.failed() {
            let kind = self.lookahead.kind();
            let combinator = if kind == TokenKind::Blank {
                let _ = self.take();
                // Whitespace followed by an explicit combinator is just padding.
                self.explicit_combinator().unwrap_or(Combinator::Descendant)
            } else if let Some(combinator) = self.explicit_combinator() {
                combinator
            } else {
                if !matches!(kind, TokenKind::Comma | TokenKind::EndOfInput) {
                    self.unexpected(&[
                        TokenKind::Blank,
                        TokenKind::Greater,
                        TokenKind::Plus,
                        TokenKind::Wave,
                    ]);
                }
                return;
            };
            self.element();
            self.reduce(|builder| builder.exp(combinator));
        }
    }

    /// Consume `>`, `+` or `~` and any whitespace after it.
    fn explicit_combinator(&mut self) -> Option<Combinator> {
        let combinator = match self.lookahead.kind() {
            TokenKind::Greater => Combinator::Child,
            TokenKind::Plus => Combinator::AdjacentSibling,
            TokenKind::Wave => Combinator::GeneralSibling,
            _ => return None,
        };
        let _ = self.take();
        self.space();
        Some(combinator)
    }

    /// `Element := Tag? Adjunct*`
    fn element(&mut self) {
        match self.lookahead.kind() {
            TokenKind::Identifier => {
                if let Token::Identifier(name) = self.take() {
                    self.build(|builder| builder.tag(name));
                }
            }
            TokenKind::Star => {
                let _ = self.take();
                self.build(|builder| builder.tag("*".to_string()));
            }
            _ => {}
        }
        self.adjuncts();
        self.reduce(AstBuilder::element);
    }

    /// `Adjunct*`
    fn adjuncts(&mut self) {
        while !self.failed() {
            match self.lookahead.kind() {
                TokenKind::Sharp => {
                    let _ = self.take();
                    if let Some(name) = self.identifier() {
                        self.build(|builder| builder.id(name));
                    }
                }
                TokenKind::Dot => {
                    let _ = self.take();
                    if let Some(name) = self.identifier() {
                        self.build(|builder| builder.class(name));
                    }
                }
                TokenKind::LeftBracket => self.attr(),
                TokenKind::Blank
                | TokenKind::Greater
                | TokenKind::Plus
                | TokenKind::Wave
                | TokenKind::Comma
                | TokenKind::EndOfInput => return,
                _ => {
                    self.unexpected(&[TokenKind::Sharp, TokenKind::Dot, TokenKind::LeftBracket]);
                    return;
                }
            }
        }
    }

    /// `'[' Identifier AttrOp? ']'`
    fn attr(&mut self) {
        let _ = self.take();
        let Some(name) = self.identifier() else {
            return;
        };

        let kind = match self.lookahead.kind() {
            TokenKind::RightBracket => {
                let _ = self.take();
                self.build(|builder| builder.attr(name, AttrMatch::Exists, String::new()));
                return;
            }
            TokenKind::Assign => AttrMatch::Equals,
            TokenKind::Up => AttrMatch::PrefixEquals,
            TokenKind::Dollar => AttrMatch::SuffixEquals,
            TokenKind::Star => AttrMatch::ContainsEquals,
            _ => {
                self.unexpected(&[
                    TokenKind::RightBracket,
                    TokenKind::Assign,
                    TokenKind::Up,
                    TokenKind::Dollar,
                    TokenKind::Star,
                ]);
                return;
            }
        };
        if kind != AttrMatch::Equals {
            let _ = self.take();
        }
        if self.expect(TokenKind::Assign).is_none() {
            return;
        }
        let Some(value) = self.attr_value() else {
            return;
        };
        if self.expect(TokenKind::RightBracket).is_some() {
            self.build(|builder| builder.attr(name, kind, value));
        }
    }

    /// `StringLit | Literal`, with quotes stripped from strings.
    fn attr_value(&mut self) -> Option<String> {
        match self.lookahead.kind() {
            TokenKind::StringLit => match self.take() {
                Token::StringLit(quoted) => Some(unquote(&quoted)),
                _ => None,
            },
            TokenKind::Literal => match self.take() {
                Token::Literal(raw) => Some(raw),
                _ => None,
            },
            _ => {
                self.unexpected(&[TokenKind::StringLit, TokenKind::Literal]);
                None
            }
        }
    }

    fn identifier(&mut self) -> Option<String> {
        match self.expect(TokenKind::Identifier)? {
            Token::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Optional whitespace.
    fn space(&mut self) {
        if self.lookahead.kind() == TokenKind::Blank {
            let _ = self.take();
        }
    }

    /// Consume the lookahead if it has the given kind; otherwise record a
    /// syntax error naming that kind.
    fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        if self.failed() {
            return None;
        }
        if self.lookahead.kind() == kind {
            Some(self.take())
        } else {
            self.unexpected(&[kind]);
            None
        }
    }

    /// Return the lookahead and scan the next token in its place.
    fn take(&mut self) -> Token {
        let token = mem::replace(&mut self.lookahead, Token::EndOfInput);
        self.advance();
        token
    }

    fn advance(&mut self) {
        if self.failed() {
            return;
        }
        match self.scanner.next_token() {
            Ok(token) => self.lookahead = token,
            Err(err) => self.fail(err.into()),
        }
    }

    /// Run an infallible builder action unless an error is already recorded.
    fn build(&mut self, action: impl FnOnce(&mut AstBuilder)) {
        if !self.failed() {
            action(&mut self.builder);
        }
    }

    /// Run a reducing builder action unless an error is already recorded.
    fn reduce(&mut self, action: impl FnOnce(&mut AstBuilder) -> Result<(), SelectorError>) {
        if self.failed() {
            return;
        }
        if let Err(err) = action(&mut self.builder) {
            self.fail(err);
        }
    }

    fn unexpected(&mut self, expected: &[TokenKind]) {
        let found = self.lookahead.clone();
        self.fail(SelectorError::Syntax {
            expected: expected.to_vec(),
            found,
        });
    }

    fn fail(&mut self, err: SelectorError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    const fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Strip the surrounding quote characters from a scanned string token.
fn unquote(quoted: &str) -> String {
    let mut chars = quoted.chars();
    let _ = chars.next();
    let _ = chars.next_back();
    chars.as_str().to_string()
}
