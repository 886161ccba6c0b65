//! Selector tokens.
//!
//! The scanner emits one [`Token`] at a time. Punctuation tokens carry no
//! payload; [`Token::Identifier`], [`Token::Literal`] and [`Token::StringLit`]
//! carry the text they were scanned from.

use core::fmt;

use strum_macros::Display;

/// The closed set of token kinds, without payloads.
///
/// Used in diagnostics to describe which tokens a production would have
/// accepted. The `Display` name of each kind is its variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenKind {
    /// `,`
    Comma,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `>`
    Greater,
    /// `+`
    Plus,
    /// `~`
    Wave,
    /// `#`
    Sharp,
    /// `.`
    Dot,
    /// `^`
    Up,
    /// `$`
    Dollar,
    /// `*`
    Star,
    /// `=`
    Assign,
    /// A letter or `_` followed by letters, digits, `_` or `-`.
    Identifier,
    /// An unquoted attribute value such as `123.45` or `http://a.b/c`.
    Literal,
    /// A quoted attribute value, `'...'` or `"..."`.
    StringLit,
    /// A run of whitespace.
    Blank,
    /// The input is exhausted.
    EndOfInput,
}

/// A single selector token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `,`
    Comma,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `>`
    Greater,
    /// `+`
    Plus,
    /// `~`
    Wave,
    /// `#`
    Sharp,
    /// `.`
    Dot,
    /// `^`
    Up,
    /// `$`
    Dollar,
    /// `*`
    Star,
    /// `=`
    Assign,
    /// An identifier, e.g. a tag, id, class or attribute name.
    Identifier(String),
    /// An unquoted attribute value, taken verbatim.
    Literal(String),
    /// A quoted attribute value. The payload keeps the surrounding quotes.
    StringLit(String),
    /// One or more whitespace characters.
    Blank,
    /// Returned forever once the input is exhausted.
    EndOfInput,
}

impl Token {
    /// Create an identifier token.
    #[must_use]
    pub fn identifier(value: impl Into<String>) -> Self {
        Self::Identifier(value.into())
    }

    /// Create a literal token.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Create a quoted string token. `value` must include its quotes.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLit(value.into())
    }

    /// The payload-free kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Comma => TokenKind::Comma,
            Self::LeftBracket => TokenKind::LeftBracket,
            Self::RightBracket => TokenKind::RightBracket,
            Self::Greater => TokenKind::Greater,
            Self::Plus => TokenKind::Plus,
            Self::Wave => TokenKind::Wave,
            Self::Sharp => TokenKind::Sharp,
            Self::Dot => TokenKind::Dot,
            Self::Up => TokenKind::Up,
            Self::Dollar => TokenKind::Dollar,
            Self::Star => TokenKind::Star,
            Self::Assign => TokenKind::Assign,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Literal(_) => TokenKind::Literal,
            Self::StringLit(_) => TokenKind::StringLit,
            Self::Blank => TokenKind::Blank,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// The text payload, for the three kinds that have one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Identifier(s) | Self::Literal(s) | Self::StringLit(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this is the end-of-input token.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "<{}, {text}>", self.kind()),
            None => write!(f, "<{}>", self.kind()),
        }
    }
}
