//! Token cursor for navigating the token stream.
//!
//! Whitespace and comment tokens stay in the [`TokenList`] for position
//! fidelity but are invisible here: the cursor always rests on a
//! significant token or at the end of the stream. Every lookahead and
//! consume operation therefore skips trivia transparently.

use lxc_diagnostic::ErrorCode;
use lxc_ir::{Delimiter, Keyword, Operator, Token, TokenKind, TokenList};

use crate::error::ParseError;

/// Cursor over significant tokens, plus the panic-mode flag.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
    /// Line of the last consumed token (0 before the first).
    prev_line: u32,
    panic: bool,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first significant token.
    pub fn new(tokens: &'a TokenList) -> Self {
        let mut cursor = Cursor {
            tokens,
            pos: 0,
            prev_line: 0,
            panic: false,
        };
        cursor.skip_trivia();
        cursor
    }

    /// Index of the current token in the full stream (trivia included).
    ///
    /// Used for progress tracking: compare positions before and after
    /// parsing to determine if tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The current significant token, `None` at end of stream.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Position reported for errors at end of stream.
    #[inline]
    pub fn end_position(&self) -> (u32, u32) {
        self.tokens.end_position()
    }

    /// Line of the most recently consumed token.
    #[inline]
    pub fn previous_line(&self) -> u32 {
        self.prev_line
    }

    /// Whether the current token starts a line below the previous one.
    pub fn at_line_start(&self) -> bool {
        self.current().is_some_and(|t| t.line > self.prev_line)
    }

    // ─── Lookahead ───────────────────────────────────────────────────

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    #[inline]
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        self.check(TokenKind::Keyword(kw))
    }

    #[inline]
    pub fn check_delim(&self, delim: Delimiter) -> bool {
        self.check(TokenKind::Delimiter(delim))
    }

    #[inline]
    pub fn check_op(&self, op: Operator) -> bool {
        self.check(TokenKind::Operator(op))
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        self.check(TokenKind::Identifier)
    }

    /// Compare the current token's text.
    pub fn check_lexeme(&self, text: &str) -> bool {
        self.current().is_some_and(|t| t.text == text)
    }

    /// Whether the current token is `op` immediately followed, with no
    /// gap, by a second `op` (how `<<` and `>>` appear in the stream).
    pub fn check_doubled(&self, op: Operator) -> bool {
        let (Some(first), Some(second)) = (self.current(), self.tokens.get(self.pos + 1)) else {
            return false;
        };
        first.kind == TokenKind::Operator(op)
            && second.kind == TokenKind::Operator(op)
            && second.line == first.line
            && second.column == first.end_column()
    }

    // ─── Consumption ─────────────────────────────────────────────────

    /// Consume the current token unconditionally.
    ///
    /// Returns the consumed token, or `None` at end of stream.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        self.prev_line = token.line;
        self.pos += 1;
        self.skip_trivia();
        Some(token)
    }

    /// Consume and return the current token if it has `kind`.
    pub fn match_kind(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Consume the current token if it has `kind`, or build an error.
    pub fn expect(
        &mut self,
        kind: TokenKind,
        code: ErrorCode,
        message: &str,
    ) -> Result<&'a Token, ParseError> {
        match self.match_kind(kind) {
            Some(token) => Ok(token),
            None => Err(self.error(code, message)),
        }
    }

    fn skip_trivia(&mut self) {
        while self.tokens.get(self.pos).is_some_and(Token::is_trivia) {
            self.pos += 1;
        }
    }

    // ─── Panic mode ──────────────────────────────────────────────────

    #[inline]
    pub fn in_panic(&self) -> bool {
        self.panic
    }

    #[inline]
    pub fn set_panic(&mut self) {
        self.panic = true;
    }

    #[inline]
    pub fn clear_panic(&mut self) {
        self.panic = false;
    }

    // ─── Errors ──────────────────────────────────────────────────────

    /// Build an error at the current token, or at end of input.
    #[cold]
    pub fn error(&self, code: ErrorCode, message: impl Into<String>) -> ParseError {
        match self.current() {
            Some(token) => ParseError::at_token(code, message, token),
            None => {
                let (line, column) = self.end_position();
                ParseError::at_end(code, message, line, column)
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests {
    use super::*;
    use lxc_lexer::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_leading_and_inner_trivia() {
        let tokens = tokenize("  ## c\n  int   x");
        let mut cursor = Cursor::new(&tokens);
        assert!(cursor.check_keyword(Keyword::Int));
        assert_eq!(cursor.advance().map(|t| t.text.as_str()), Some("int"));
        assert!(cursor.check_ident());
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn match_kind_consumes_only_on_match() {
        let tokens = tokenize("; x");
        let mut cursor = Cursor::new(&tokens);
        assert!(cursor.match_kind(TokenKind::Identifier).is_none());
        let before = cursor.position();
        assert!(cursor
            .match_kind(TokenKind::Delimiter(Delimiter::Semicolon))
            .is_some());
        assert!(cursor.position() > before);
        assert!(cursor.check_lexeme("x"));
    }

    #[test]
    fn expect_error_points_at_current_token() {
        let tokens = tokenize("x\n  }");
        let mut cursor = Cursor::new(&tokens);
        cursor.advance();
        let err = cursor
            .expect(
                TokenKind::Delimiter(Delimiter::Semicolon),
                ErrorCode::E1006,
                "Missing ';' at end of statement",
            )
            .unwrap_err();
        assert_eq!((err.line, err.column), (2, 3));
        assert_eq!(err.found, "}");
    }

    #[test]
    fn error_at_end_uses_end_position() {
        let tokens = tokenize("x ");
        let mut cursor = Cursor::new(&tokens);
        cursor.advance();
        let err = cursor.error(ErrorCode::E1006, "Missing ';' at end of statement");
        assert_eq!((err.line, err.column), (1, 3));
        assert_eq!(err.found, "end of file");
    }

    #[test]
    fn doubled_operator_needs_adjacency() {
        let tokens = tokenize("a >> b > > c");
        let mut cursor = Cursor::new(&tokens);
        cursor.advance();
        assert!(cursor.check_doubled(Operator::Gt));
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert!(cursor.check_op(Operator::Gt));
        assert!(!cursor.check_doubled(Operator::Gt));
    }

    #[test]
    fn line_start_tracking() {
        let tokens = tokenize("a b\nc");
        let mut cursor = Cursor::new(&tokens);
        assert!(cursor.at_line_start());
        cursor.advance();
        assert!(!cursor.at_line_start());
        cursor.advance();
        assert!(cursor.at_line_start());
        assert_eq!(cursor.previous_line(), 1);
    }

    #[test]
    fn panic_flag() {
        let tokens = tokenize("");
        let mut cursor = Cursor::new(&tokens);
        assert!(!cursor.in_panic());
        cursor.set_panic();
        assert!(cursor.in_panic());
        cursor.clear_panic();
        assert!(!cursor.in_panic());
    }
}
