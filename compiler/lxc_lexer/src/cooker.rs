//! Token cooking layer.
//!
//! Turns raw [`Lexeme`]s into [`Token`]s:
//!
//! ```text
//! source → RawScanner → Lexeme → TokenCooker → Token
//! ```
//!
//! - **Whitespace/comments**: kept as trivia tokens for position fidelity
//! - **Identifiers**: classifier lookup (keyword, reserved word, identifier)
//! - **Operators/delimiters**: spelling lookup into the sub-kind enums
//! - **Literals**: char literals validated to one interior character
//! - **Anomalies**: push a [`LexError`] and produce `TokenKind::Invalid`

use lxc_ir::{Delimiter, Operator, Token, TokenKind};
use lxc_lexer_core::{Lexeme, LexemeTag};
use tracing::trace;

use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};

/// Cooks lexemes into tokens, accumulating anomalies for the whole input.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    errors: Vec<LexError>,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        TokenCooker {
            source,
            errors: Vec::new(),
        }
    }

    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Cook a single lexeme.
    pub(crate) fn cook(&mut self, lexeme: &Lexeme) -> Token {
        let text = self.source.get(lexeme.range()).unwrap_or_default();
        let kind = match lexeme.tag {
            LexemeTag::Whitespace | LexemeTag::Newline => TokenKind::Whitespace,
            LexemeTag::LineComment | LexemeTag::BlockComment => TokenKind::Comment,
            LexemeTag::Ident => Self::word(text),
            LexemeTag::Number => TokenKind::NumericConstant,
            LexemeTag::String => TokenKind::StringLiteral,
            LexemeTag::Char => self.char_literal(lexeme, text),
            LexemeTag::Operator => match Operator::from_text(text) {
                Some(op) => TokenKind::Operator(op),
                None => self.invalid(LexErrorKind::InvalidCharacter, lexeme, text),
            },
            LexemeTag::Punct => match text.chars().next().and_then(Delimiter::from_char) {
                Some(delim) => TokenKind::Delimiter(delim),
                None => self.invalid(LexErrorKind::InvalidCharacter, lexeme, text),
            },
            LexemeTag::UnterminatedBlockComment => {
                self.invalid(LexErrorKind::UnterminatedBlockComment, lexeme, text)
            }
            LexemeTag::UnterminatedString => {
                self.invalid(LexErrorKind::UnterminatedString, lexeme, text)
            }
            LexemeTag::UnterminatedChar => self.invalid(LexErrorKind::UnterminatedChar, lexeme, text),
            LexemeTag::MalformedNumber => self.invalid(LexErrorKind::MalformedNumber, lexeme, text),
            LexemeTag::Underscore => self.invalid(LexErrorKind::LoneUnderscore, lexeme, text),
            LexemeTag::InvalidChar => self.invalid(LexErrorKind::InvalidCharacter, lexeme, text),
            // The driver loop stops before cooking `Eof`.
            LexemeTag::Eof => TokenKind::Whitespace,
        };
        trace!(line = lexeme.line, column = lexeme.column, kind = %kind, text, "cook");
        Token::new(kind, text, lexeme.line, lexeme.column)
    }

    fn word(text: &str) -> TokenKind {
        keywords::lookup(text).unwrap_or(TokenKind::Identifier)
    }

    /// `'x'` is a char literal; `''`, `'ab'` and the like are invalid.
    fn char_literal(&mut self, lexeme: &Lexeme, text: &str) -> TokenKind {
        let interior = text
            .strip_prefix('\'')
            .and_then(|t| t.strip_suffix('\''))
            .unwrap_or_default();
        if interior.chars().count() == 1 {
            TokenKind::CharLiteral
        } else {
            self.invalid(LexErrorKind::InvalidCharLiteral, lexeme, text)
        }
    }

    fn invalid(&mut self, kind: LexErrorKind, lexeme: &Lexeme, text: &str) -> TokenKind {
        self.errors
            .push(LexError::new(kind, lexeme.line, lexeme.column, text));
        TokenKind::Invalid
    }
}
