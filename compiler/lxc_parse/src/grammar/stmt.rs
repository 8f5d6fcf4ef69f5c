//! Statement parsing.
//!
//! `parse_statement` is the recovery boundary: errors raised anywhere
//! inside a statement (including its expressions) are reported here and
//! the cursor is resynchronized before control returns to the list loop.

use lxc_diagnostic::ErrorCode;
use lxc_ir::{Delimiter, Keyword, Operator, TokenKind};
use lxc_stack::ensure_sufficient_stack;

use super::{kw, ASSIGN, COLON, COMMA, LBRACE, LPAREN, RBRACE, RPAREN, SEMI};
use crate::{recovery, ParseError, Parser, Rule};

/// Which kind of `compare` arm was parsed.
enum CompareArm {
    /// `what if`; more arms may follow.
    Case,
    /// `then do`; always the last arm.
    Default,
}

impl Parser<'_> {
    /// Parse one statement, recovering from any error inside it.
    pub(crate) fn parse_statement(&mut self) {
        self.enter(Rule::Statement);
        let ok = match ensure_sufficient_stack(|| self.statement()) {
            Ok(()) => true,
            Err(err) => {
                self.report(err);
                self.recover();
                false
            }
        };
        self.exit(Rule::Statement, ok);
    }

    fn statement(&mut self) -> Result<(), ParseError> {
        match self.current_kind() {
            Some(TokenKind::Keyword(k)) if k == Keyword::Cons || k.is_scope_modifier() || k.is_data_type() => {
                self.parse_decl_stmt()
            }
            Some(TokenKind::Keyword(Keyword::Do | Keyword::Compare)) => self.parse_cond_stmt(),
            Some(TokenKind::Keyword(Keyword::Continue | Keyword::Stop)) => self.parse_iter_stmt(),
            Some(TokenKind::Keyword(Keyword::Display)) => self.parse_output_stmt(),
            Some(TokenKind::Keyword(Keyword::Put)) => self.parse_input_stmt(),
            Some(TokenKind::Keyword(Keyword::Break | Keyword::Back)) => self.parse_break_stmt(),
            Some(TokenKind::Identifier) => self.parse_assign_stmt(),
            None => Err(self.cursor.error(ErrorCode::E1007, "Unexpected end of code")),
            Some(_) => Err(self.cursor.error(
                ErrorCode::E1007,
                "This doesn't look like a valid statement",
            )),
        }
    }

    // ─── Declarations and assignment ─────────────────────────────────

    /// `'cons' DataType Identifier '=' Expr ';'`
    /// | `[ScopeMod] DataType Identifier ['=' Expr] (',' Identifier ['=' Expr])* ';'`
    fn parse_decl_stmt(&mut self) -> Result<(), ParseError> {
        self.traced(Rule::DeclStmt, |p| {
            if p.eat(kw(Keyword::Cons)) {
                p.expect_data_type("Missing data type after 'cons'")?;
                p.expect_identifier("Missing variable name")?;
                p.expect(ASSIGN, ErrorCode::E1011, "Constant needs '=' and a value")?;
                p.parse_expr()?;
                return p.expect_semicolon();
            }

            if matches!(p.current_kind(), Some(TokenKind::Keyword(k)) if k.is_scope_modifier()) {
                p.consume();
            }
            p.expect_data_type("Missing data type")?;
            p.expect_identifier("Missing variable name")?;

            let mut bare = true;
            if p.eat(ASSIGN) {
                bare = false;
                p.parse_expr()?;
            }
            while p.eat(COMMA) {
                bare = false;
                p.expect_identifier("Missing variable name after ','")?;
                if p.eat(ASSIGN) {
                    p.parse_expr()?;
                }
            }

            if bare && !p.cursor.check(SEMI) {
                return Err(p.cursor.error(
                    ErrorCode::E1006,
                    "Expected ';', '=', or ',' after variable name",
                ));
            }
            p.expect_semicolon()
        })
    }

    /// `Identifier AssignOp Expr ';'`
    fn parse_assign_stmt(&mut self) -> Result<(), ParseError> {
        self.traced(Rule::AssignStmt, |p| {
            p.expect_identifier("Missing variable name")?;
            if p.match_assign_op().is_none() {
                return Err(p.cursor.error(
                    ErrorCode::E1011,
                    "Expects an assignment operator (e.g., '=', '+=', '*=')",
                ));
            }
            p.consume();
            p.parse_expr()?;
            p.expect_semicolon()
        })
    }

    // ─── Conditionals ────────────────────────────────────────────────

    /// `'do' 'if' '(' Expr ')' Body ('what' 'if' '(' Expr ')' Body)* ['then' 'do' Body]`
    /// | `'compare' Expr '{' Case* [Default] '}'`
    fn parse_cond_stmt(&mut self) -> Result<(), ParseError> {
        self.traced(Rule::CondStmt, |p| {
            if p.eat(kw(Keyword::Do)) {
                p.expect_keyword(Keyword::If, "Missing 'if' after 'do'")?;
                p.parse_condition("Missing '(' after 'if'", "Missing ')' after condition")?;
                p.parse_body()?;

                while p.eat(kw(Keyword::What)) {
                    p.expect_keyword(Keyword::If, "Missing 'if' after 'what'")?;
                    p.parse_condition("Missing '(' after 'if'", "Missing ')' after condition")?;
                    p.parse_body()?;
                }
                if p.eat(kw(Keyword::Then)) {
                    p.expect_keyword(Keyword::Do, "Missing 'do' after 'then'")?;
                    p.parse_body()?;
                }
                Ok(())
            } else {
                p.expect_keyword(Keyword::Compare, "Expected 'do' or 'compare'")?;
                p.parse_compare_rest()
            }
        })
    }

    /// After `compare`:
    /// `Expr '{' ('what' 'if' Expr ':' Statement* 'break' ';')* ['then' 'do' ':' Statement*] '}'`
    ///
    /// Errors inside the braces are reported and recovered here, at arm
    /// granularity, so the `}` that closes the compare is always consumed
    /// by the compare and never by an enclosing block.
    fn parse_compare_rest(&mut self) -> Result<(), ParseError> {
        self.parse_expr()?;
        self.expect(LBRACE, ErrorCode::E1003, "Missing '{' after compare")?;

        while !self.is_at_end() && !self.cursor.check_delim(Delimiter::RBrace) {
            let before = self.cursor.position();
            match self.parse_compare_arm() {
                Ok(CompareArm::Default) => break,
                Ok(CompareArm::Case) => {}
                Err(err) => {
                    self.report(err);
                    let skipped = recovery::skip_to_compare_arm(&mut self.cursor);
                    self.trace.recovered(skipped);
                }
            }
            if self.cursor.position() == before {
                self.skip_stuck_token();
            }
        }

        self.expect(RBRACE, ErrorCode::E1003, "Missing '}' at end of compare")?;
        Ok(())
    }

    /// `'what' 'if' Expr ':' Statement* 'break' ';'` | `'then' 'do' ':' Statement*`
    fn parse_compare_arm(&mut self) -> Result<CompareArm, ParseError> {
        if self.eat(kw(Keyword::What)) {
            self.expect_keyword(Keyword::If, "Missing 'if' after 'what'")?;
            self.parse_expr()?;
            self.expect(COLON, ErrorCode::E1001, "Missing ':' after case value")?;
            self.statement_list(|c| {
                c.check_keyword(Keyword::Break)
                    || c.check_keyword(Keyword::What)
                    || c.check_keyword(Keyword::Then)
                    || c.check_delim(Delimiter::RBrace)
            });
            self.expect_keyword(Keyword::Break, "Missing 'break' at end of case")?;
            self.expect(SEMI, ErrorCode::E1006, "Missing ';' after 'break'")?;
            Ok(CompareArm::Case)
        } else if self.eat(kw(Keyword::Then)) {
            self.expect_keyword(Keyword::Do, "Missing 'do' after 'then'")?;
            self.expect(COLON, ErrorCode::E1001, "Missing ':' after 'then do'")?;
            self.statement_list(|c| c.check_delim(Delimiter::RBrace));
            Ok(CompareArm::Default)
        } else {
            Err(self.cursor.error(
                ErrorCode::E1010,
                "Expected 'what if' or 'then do' inside compare",
            ))
        }
    }

    /// `'(' Expr ')'`
    fn parse_condition(&mut self, missing_open: &str, missing_close: &str) -> Result<(), ParseError> {
        self.expect(LPAREN, ErrorCode::E1003, missing_open)?;
        self.parse_expr()?;
        self.expect(RPAREN, ErrorCode::E1003, missing_close)?;
        Ok(())
    }

    // ─── Loops ───────────────────────────────────────────────────────

    /// `'continue' 'until' '(' Expr [';' Expr ';' Expr] ')' Body`
    /// | `'stop' 'when' '(' Expr ')' Body`
    fn parse_iter_stmt(&mut self) -> Result<(), ParseError> {
        self.traced(Rule::IterStmt, |p| {
            if p.eat(kw(Keyword::Continue)) {
                p.expect_keyword(Keyword::Until, "Missing 'until' after 'continue'")?;
                p.expect(LPAREN, ErrorCode::E1003, "Missing '(' after 'until'")?;
                p.parse_expr()?;
                if p.eat(SEMI) {
                    p.parse_expr()?;
                    p.expect(SEMI, ErrorCode::E1006, "Missing ';' in loop")?;
                    p.parse_expr()?;
                }
                p.expect(RPAREN, ErrorCode::E1003, "Missing ')' after loop condition")?;
            } else {
                p.expect_keyword(Keyword::Stop, "Expected 'continue' or 'stop'")?;
                p.expect_keyword(Keyword::When, "Missing 'when' after 'stop'")?;
                p.parse_condition("Missing '(' after 'when'", "Missing ')' after condition")?;
            }
            p.parse_body()
        })
    }

    // ─── Input, output and control ───────────────────────────────────

    /// `'display' Expr (',' Expr)* ';'`
    fn parse_output_stmt(&mut self) -> Result<(), ParseError> {
        self.traced(Rule::OutputStmt, |p| {
            p.expect_keyword(Keyword::Display, "Expected 'display'")?;
            p.parse_expr()?;
            while p.eat(COMMA) {
                p.parse_expr()?;
            }
            p.expect_semicolon()
        })
    }

    /// `'put' Identifier ';'`
    fn parse_input_stmt(&mut self) -> Result<(), ParseError> {
        self.traced(Rule::InputStmt, |p| {
            p.expect_keyword(Keyword::Put, "Expected 'put'")?;
            p.expect_identifier("Missing variable name after 'put'")?;
            p.expect_semicolon()
        })
    }

    /// `('break' | 'back') ';'`
    fn parse_break_stmt(&mut self) -> Result<(), ParseError> {
        self.traced(Rule::BreakStmt, |p| {
            if !p.eat(kw(Keyword::Break)) {
                p.expect_keyword(Keyword::Back, "Expected 'break' or 'back'")?;
            }
            p.expect_semicolon()
        })
    }

    // ─── Helpers ─────────────────────────────────────────────────────

    fn expect_semicolon(&mut self) -> Result<(), ParseError> {
        self.expect(SEMI, ErrorCode::E1006, "Missing ';' at end of statement")?;
        Ok(())
    }

    fn expect_keyword(&mut self, keyword: Keyword, message: &str) -> Result<(), ParseError> {
        self.expect(kw(keyword), ErrorCode::E1010, message)?;
        Ok(())
    }

    fn expect_identifier(&mut self, message: &str) -> Result<(), ParseError> {
        self.expect(TokenKind::Identifier, ErrorCode::E1004, message)?;
        Ok(())
    }

    fn expect_data_type(&mut self, message: &str) -> Result<(), ParseError> {
        match self.current_kind() {
            Some(TokenKind::Keyword(k)) if k.is_data_type() => {
                self.consume();
                Ok(())
            }
            _ => Err(self.cursor.error(ErrorCode::E1005, message)),
        }
    }

    /// Current token as an assignment operator, if it is one.
    pub(crate) fn match_assign_op(&self) -> Option<Operator> {
        match self.current_kind() {
            Some(TokenKind::Operator(op)) if op.is_assign() => Some(op),
            _ => None,
        }
    }
}
