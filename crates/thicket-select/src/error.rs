//! Errors raised while compiling a selector.
//!
//! Matching never fails, so these are only produced by [`crate::parse`].

use thiserror::Error;

use crate::scanner::{Token, TokenKind};

/// A character sequence the scanner cannot turn into a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token outside an attribute value.
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Its index, in chars.
        position: usize,
    },

    /// A quoted attribute value with no closing quote.
    #[error("unterminated string {literal} starting at position {position}")]
    UnterminatedString {
        /// Everything read from the opening quote to the end of the input.
        literal: String,
        /// Index of the opening quote, in chars.
        position: usize,
    },
}

/// Why a selector failed to compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The scanner rejected the input.
    #[error("lexical error: {0}")]
    Lexical(#[from] LexError),

    /// The lookahead token cannot continue the current production.
    #[error("syntax error: expected {}, found {found}", describe_expected(.expected))]
    Syntax {
        /// Token kinds that would have been accepted.
        expected: Vec<TokenKind>,
        /// The token actually seen.
        found: Token,
    },

    /// The construction stack was not in the shape a builder action needs.
    ///
    /// The parser only drives the builder in grammar order, so this indicates
    /// a bug rather than bad input.
    #[error("internal error: `{action}` found a malformed construction stack (depth {depth})")]
    Construction {
        /// The builder action that failed.
        action: &'static str,
        /// Stack depth when it failed.
        depth: usize,
    },
}

impl SelectorError {
    /// Check if this error came from the scanner.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::Lexical(_))
    }

    /// Check if this error came from the parser's grammar checks.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [single] => single.to_string(),
        kinds => {
            let names: Vec<String> = kinds.iter().map(ToString::to_string).collect();
            format!("one of {}", names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_message_lists_expected_kinds() {
        let err = SelectorError::Syntax {
            expected: vec![TokenKind::Comma, TokenKind::EndOfInput],
            found: Token::identifier("div"),
        };
        assert_eq!(
            err.to_string(),
            "syntax error: expected one of Comma, EndOfInput, found <Identifier, div>"
        );
    }

    #[test]
    fn test_syntax_message_single_kind() {
        let err = SelectorError::Syntax {
            expected: vec![TokenKind::Identifier],
            found: Token::EndOfInput,
        };
        assert_eq!(
            err.to_string(),
            "syntax error: expected Identifier, found <EndOfInput>"
        );
    }

    #[test]
    fn test_lexical_message() {
        let err = SelectorError::from(LexError::UnterminatedString {
            literal: "'abc".to_string(),
            position: 6,
        });
        assert!(err.is_lexical());
        assert!(!err.is_syntax());
        assert_eq!(
            err.to_string(),
            "lexical error: unterminated string 'abc starting at position 6"
        );
    }
}
