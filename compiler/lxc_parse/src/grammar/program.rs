//! Program, block and statement-list parsing.

use lxc_diagnostic::ErrorCode;
use lxc_ir::{Delimiter, Keyword};

use super::{kw, COLON, LBRACE, RBRACE};
use crate::cursor::Cursor;
use crate::recovery::STMT_START;
use crate::{ParseError, Parser, Rule};

impl Parser<'_> {
    /// `['func'] 'main' ':' (Block | Statement*)`, or a bare statement list
    /// when the input has no header at all.
    pub(crate) fn program(&mut self) {
        self.enter(Rule::Program);

        let has_header =
            self.cursor.check_keyword(Keyword::Func) || self.cursor.check_keyword(Keyword::Main);
        if has_header {
            if let Err(err) = self.program_header() {
                self.report(err);
                self.recover_header();
            }
            if self.cursor.check_delim(Delimiter::LBrace) {
                if let Err(err) = self.parse_block() {
                    self.report(err);
                    self.recover();
                }
                self.trailing_tokens();
            } else {
                self.statement_list(|_| false);
            }
        } else {
            self.statement_list(|_| false);
        }

        let ok = self.diagnostics.is_empty() && self.diagnostics.suppressed() == 0;
        self.exit(Rule::Program, ok);
    }

    fn program_header(&mut self) -> Result<(), ParseError> {
        self.eat(kw(Keyword::Func));
        self.expect(
            kw(Keyword::Main),
            ErrorCode::E1008,
            "Missing 'main' at the start of your program",
        )?;
        self.expect(COLON, ErrorCode::E1008, "Missing ':' after 'main'")?;
        Ok(())
    }

    /// Skip a broken header up to the program body.
    ///
    /// Stops before `{` or a statement keyword; a stray `:` is consumed.
    /// Panic mode ends only if something was skipped.
    fn recover_header(&mut self) {
        let mut skipped = 0;
        while let Some(token) = self.current() {
            if token.kind == LBRACE || STMT_START.contains_kind(token.kind) {
                break;
            }
            self.cursor.advance();
            skipped += 1;
            if token.kind == COLON {
                break;
            }
        }
        if skipped > 0 {
            self.cursor.clear_panic();
        }
        self.trace.recovered(skipped);
    }

    /// Anything after the program's closing `}` is one error.
    fn trailing_tokens(&mut self) {
        if self.is_at_end() {
            return;
        }
        let err = self.cursor.error(
            ErrorCode::E1009,
            "Unexpected code after the end of the program",
        );
        self.report(err);
        let mut skipped = 0;
        while self.cursor.advance().is_some() {
            skipped += 1;
        }
        self.cursor.clear_panic();
        self.trace.recovered(skipped);
    }

    /// `'{' Statement* '}'`
    pub(crate) fn parse_block(&mut self) -> Result<(), ParseError> {
        self.traced(Rule::Block, |p| {
            p.expect(LBRACE, ErrorCode::E1003, "Missing '{' to start a block")?;
            p.statement_list(|c| c.check_delim(Delimiter::RBrace));
            p.expect(RBRACE, ErrorCode::E1003, "Missing '}' to close a block")?;
            Ok(())
        })
    }

    /// A Block, or a single Statement.
    pub(crate) fn parse_body(&mut self) -> Result<(), ParseError> {
        if self.cursor.check_delim(Delimiter::LBrace) {
            self.parse_block()
        } else {
            self.parse_statement();
            Ok(())
        }
    }

    /// Parse statements until `stop` holds or the input ends.
    ///
    /// A statement that consumed nothing has its first token discarded,
    /// so the loop always advances.
    pub(crate) fn statement_list(&mut self, stop: fn(&Cursor<'_>) -> bool) {
        while !self.is_at_end() && !stop(&self.cursor) {
            let before = self.cursor.position();
            self.parse_statement();
            if self.cursor.position() == before {
                self.skip_stuck_token();
            }
        }
    }
}
