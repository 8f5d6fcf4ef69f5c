//! Recursive-descent parser for LXC with panic-mode error recovery.
//!
//! The parser walks a [`TokenList`] with one token of lookahead, checking
//! it against the grammar and recording a [`ParseTrace`]. It never stops
//! at the first problem: every syntax error becomes a [`Diagnostic`] and
//! recovery skips to the next synchronization point so later, independent
//! errors are still found.
//!
//! ```text
//! Program   := ['func'] 'main' ':' (Block | Statement*) | Statement*
//! Block     := '{' Statement* '}'
//! Statement := DeclStmt | CondStmt | IterStmt | OutputStmt
//!            | InputStmt | BreakStmt | AssignStmt
//! ```
//!
//! The statement and expression rules live under `grammar/`.

mod cursor;
mod error;
mod grammar;
pub mod recovery;
mod trace;

use lxc_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode};
use lxc_ir::{Delimiter, Token, TokenKind, TokenList};
use lxc_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

pub use cursor::Cursor;
pub use error::ParseError;
pub use grammar::BinaryOp;
pub use trace::{ParseTrace, Rule, TraceEvent};

/// Default maximum number of stored diagnostics.
pub const DEFAULT_MAX_DIAGNOSTICS: usize = 100;

/// Parser configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Diagnostics beyond this many are counted but not stored.
    pub max_diagnostics: usize,
    /// Whether to record a [`ParseTrace`].
    pub record_trace: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            max_diagnostics: DEFAULT_MAX_DIAGNOSTICS,
            record_trace: true,
        }
    }
}

/// Result of parsing: the trace plus every diagnostic, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub trace: ParseTrace,
    pub diagnostics: Vec<Diagnostic>,
    /// Diagnostics dropped by the limit.
    pub suppressed: usize,
}

impl ParseOutput {
    /// No syntax errors.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty() && self.suppressed == 0
    }
}

/// Parse a token list.
pub fn parse(tokens: &TokenList, config: &ParseConfig) -> ParseOutput {
    Parser::new(tokens, config).parse_program()
}

/// Parser state: cursor, diagnostics and trace.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    diagnostics: DiagnosticQueue,
    trace: ParseTrace,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, config: &ParseConfig) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            diagnostics: DiagnosticQueue::with_config(DiagnosticConfig {
                error_limit: config.max_diagnostics,
            }),
            trace: if config.record_trace {
                ParseTrace::new()
            } else {
                ParseTrace::disabled()
            },
        }
    }

    /// Parse the whole token stream.
    pub fn parse_program(mut self) -> ParseOutput {
        self.program();
        debug!(
            diagnostics = self.diagnostics.len(),
            suppressed = self.diagnostics.suppressed(),
            "parsed program"
        );
        ParseOutput {
            suppressed: self.diagnostics.suppressed(),
            diagnostics: self.diagnostics.flush(),
            trace: self.trace,
        }
    }

    // ─── Cursor delegation ───────────────────────────────────────────

    #[inline]
    fn current(&self) -> Option<&'a Token> {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> Option<TokenKind> {
        self.cursor.current_kind()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Consume the current token, recording it in the trace.
    ///
    /// Accepting a token ends panic mode.
    fn consume(&mut self) -> Option<&'a Token> {
        let token = self.cursor.advance()?;
        self.cursor.clear_panic();
        trace!(line = token.line, column = token.column, text = %token.text, "consume");
        self.trace.consumed(&token.text, token.line, token.column);
        Some(token)
    }

    /// Consume the current token if it has `kind`.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.cursor.check(kind) {
            self.consume();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail with `message`.
    fn expect(
        &mut self,
        kind: TokenKind,
        code: ErrorCode,
        message: &str,
    ) -> Result<&'a Token, ParseError> {
        if self.cursor.check(kind) {
            if let Some(token) = self.consume() {
                return Ok(token);
            }
        }
        Err(self.cursor.error(code, message))
    }

    // ─── Trace and recovery ──────────────────────────────────────────

    /// Run `f` as grammar rule `rule`, logging entry and exit.
    fn traced<T>(
        &mut self,
        rule: Rule,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.enter(rule);
        let result = ensure_sufficient_stack(|| f(self));
        self.exit(rule, result.is_ok());
        result
    }

    fn enter(&mut self, rule: Rule) {
        debug!(rule = rule.name(), pos = self.cursor.position(), "enter");
        self.trace.enter(rule);
    }

    fn exit(&mut self, rule: Rule, ok: bool) {
        self.trace.exit(rule, ok);
    }

    /// Record a syntax error and enter panic mode.
    ///
    /// Errors raised while already in panic mode are dropped. Panic mode
    /// lasts until recovery skips tokens or the grammar consumes one, so a
    /// second error at the same token (an enclosing rule failing on the
    /// same `}` or end of input) is not reported twice.
    fn report(&mut self, err: ParseError) {
        self.trace.error(&err.message, err.line, err.column);
        if self.cursor.in_panic() {
            debug!(message = %err.message, "error suppressed in panic mode");
            return;
        }
        debug!(line = err.line, column = err.column, message = %err.message, "syntax error");
        self.cursor.set_panic();
        self.diagnostics.add(err.to_diagnostic());
    }

    /// Skip to a synchronization point if needed.
    ///
    /// If the current token is already one (a `}`, a statement or clause
    /// keyword, or an identifier opening a new line) nothing is skipped and
    /// panic mode stays on until that token is consumed.
    fn recover(&mut self) {
        let skipped = if self.is_at_end() || self.at_resume_point() {
            0
        } else {
            recovery::synchronize(&mut self.cursor, recovery::RESUME)
        };
        self.trace.recovered(skipped);
    }

    fn at_resume_point(&self) -> bool {
        match self.current_kind() {
            Some(TokenKind::Delimiter(Delimiter::RBrace)) => true,
            Some(kind @ TokenKind::Keyword(_)) => recovery::RESUME.contains_kind(kind),
            Some(TokenKind::Identifier) => self.cursor.at_line_start(),
            _ => false,
        }
    }

    /// Discard one token the grammar could not place.
    fn skip_stuck_token(&mut self) {
        if let Some(token) = self.cursor.advance() {
            debug!(text = %token.text, "skipping stuck token");
            self.trace.recovered(1);
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
