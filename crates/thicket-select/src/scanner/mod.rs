//! Selector scanner.
//!
//! Turns a selector string into a lazy stream of [`Token`]s. The scanner has
//! exactly one piece of cross-token state, its [`ScanMode`]: after an `=` it
//! switches to [`ScanMode::AfterAssign`], where attribute values are read
//! verbatim instead of being split into identifiers and operators, and the
//! next `]` switches it back.

/// Token types produced by the scanner.
pub mod token;

use strum_macros::Display;

use crate::error::LexError;
pub use token::{Token, TokenKind};

/// Lexical context of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ScanMode {
    /// Selector syntax: punctuation, identifiers and whitespace.
    #[default]
    Default,
    /// Inside `[name=...]`: quoted strings and raw literals up to `]`.
    AfterAssign,
}

/// Char-indexed scanner over one selector string.
#[derive(Debug, Clone)]
pub struct Scanner {
    /// The input being scanned
    input: Vec<char>,
    /// Index of the next unread char
    position: usize,
    mode: ScanMode,
}

impl Scanner {
    /// Create a scanner positioned at the start of `input`, in default mode.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            mode: ScanMode::Default,
        }
    }

    /// The current lexical mode.
    #[must_use]
    pub const fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Index (in chars) of the next unread character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Consume and return the next token.
    ///
    /// Once the input is exhausted this returns [`Token::EndOfInput`] on
    /// every call.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::UnexpectedCharacter`] for a character that starts
    /// no token in default mode, and [`LexError::UnterminatedString`] when a
    /// quoted value runs to the end of the input.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let Some(c) = self.consume() else {
            return Ok(Token::EndOfInput);
        };

        // Whitespace is collapsed before the mode is consulted.
        if c.is_whitespace() {
            let _ = self.consume_while(char::is_whitespace);
            return Ok(Token::Blank);
        }

        match self.mode {
            ScanMode::Default => self.consume_default(c),
            ScanMode::AfterAssign => self.consume_after_assign(c),
        }
    }

    fn consume_default(&mut self, c: char) -> Result<Token, LexError> {
        let token = match c {
            ',' => Token::Comma,
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            '>' => Token::Greater,
            '+' => Token::Plus,
            '~' => Token::Wave,
            '#' => Token::Sharp,
            '.' => Token::Dot,
            '^' => Token::Up,
            '$' => Token::Dollar,
            '*' => Token::Star,
            '=' => {
                self.mode = ScanMode::AfterAssign;
                Token::Assign
            }
            c if is_ident_start(c) => {
                self.reconsume();
                Token::Identifier(self.consume_while(is_ident_char))
            }
            ch => {
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    position: self.position - 1,
                });
            }
        };
        Ok(token)
    }

    fn consume_after_assign(&mut self, c: char) -> Result<Token, LexError> {
        match c {
            ']' => {
                self.mode = ScanMode::Default;
                Ok(Token::RightBracket)
            }
            '\'' | '"' => self.consume_string(c),
            _ => {
                self.reconsume();
                Ok(Token::Literal(
                    self.consume_while(|ch| !matches!(ch, '\'' | '"' | ']')),
                ))
            }
        }
    }

    /// Consume a quoted value whose opening `quote` was just consumed. The
    /// returned payload keeps both quotes.
    fn consume_string(&mut self, quote: char) -> Result<Token, LexError> {
        let start = self.position - 1;
        let mut literal = String::from(quote);
        while let Some(c) = self.consume() {
            literal.push(c);
            if c == quote {
                return Ok(Token::StringLit(literal));
            }
        }
        Err(LexError::UnterminatedString {
            literal,
            position: start,
        })
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    const fn reconsume(&mut self) {
        self.position -= 1;
    }

    fn consume_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.input.get(self.position).is_some_and(|&c| accept(c)) {
            self.position += 1;
        }
        self.input[start..self.position].iter().collect()
    }
}

/// Scan `input` to the end, returning every token including the final
/// [`Token::EndOfInput`].
///
/// # Errors
///
/// Returns the first [`LexError`] the scanner hits.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let is_end = token.is_end();
        tokens.push(token);
        if is_end {
            return Ok(tokens);
        }
    }
}

/// Letters (any script) and `_` may start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_switches_on_assign_and_right_bracket() {
        let mut scanner = Scanner::new("[a=b]c");
        assert_eq!(scanner.next_token(), Ok(Token::LeftBracket));
        assert_eq!(scanner.next_token(), Ok(Token::identifier("a")));
        assert_eq!(scanner.mode(), ScanMode::Default);
        assert_eq!(scanner.next_token(), Ok(Token::Assign));
        assert_eq!(scanner.mode(), ScanMode::AfterAssign);
        assert_eq!(scanner.next_token(), Ok(Token::literal("b")));
        assert_eq!(scanner.mode(), ScanMode::AfterAssign);
        assert_eq!(scanner.next_token(), Ok(Token::RightBracket));
        assert_eq!(scanner.mode(), ScanMode::Default);
        assert_eq!(scanner.next_token(), Ok(Token::identifier("c")));
    }

    #[test]
    fn test_right_bracket_in_default_mode_keeps_mode() {
        let mut scanner = Scanner::new("]");
        assert_eq!(scanner.next_token(), Ok(Token::RightBracket));
        assert_eq!(scanner.mode(), ScanMode::Default);
    }

    #[test]
    fn test_end_of_input_is_sticky() {
        let mut scanner = Scanner::new("a");
        assert_eq!(scanner.next_token(), Ok(Token::identifier("a")));
        for _ in 0..3 {
            assert_eq!(scanner.next_token(), Ok(Token::EndOfInput));
        }
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn test_position_counts_chars_not_bytes() {
        let mut scanner = Scanner::new("héllo!");
        assert_eq!(scanner.next_token(), Ok(Token::identifier("héllo")));
        assert_eq!(
            scanner.next_token(),
            Err(LexError::UnexpectedCharacter {
                ch: '!',
                position: 5
            })
        );
    }
}
