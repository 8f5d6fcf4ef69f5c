//! Expression parsing.
//!
//! One method per precedence level, loosest first:
//!
//! ```text
//! Expr           := Assign
//! Assign         := Conditional [AssignOp Assign]
//! Conditional    := LogicalOr ['?' Expr ':' Expr]
//! LogicalOr      := LogicalAnd ('||' LogicalAnd)*
//! LogicalAnd     := BitOr ('&&' BitOr)*
//! BitOr          := BitXor ('|' BitXor)*
//! BitXor         := BitAnd ('^' BitAnd)*
//! BitAnd         := Equality ('&' Equality)*
//! Equality       := Relational (('==' | '!=') Relational)*
//! Relational     := Shift (('<' | '>' | '<=' | '>=') Shift)*
//! Shift          := Additive (('<<' | '>>') Additive)*
//! Additive       := Multiplicative (('+' | '-') Multiplicative)*
//! Multiplicative := Power (('*' | '/' | '//' | '%') Power)*
//! Power          := Unary ['**' Power]
//! Unary          := ('+' | '-' | '!' | '++' | '--') Unary | Postfix
//! Postfix        := Primary ('++' | '--')*
//! Primary        := Identifier | Constant | Literal | 'true' | 'false' | '(' Expr ')'
//! ```
//!
//! The parser only validates, so every level returns `()`.

use lxc_diagnostic::ErrorCode;
use lxc_ir::{Delimiter, Operator, ReservedWord, TokenKind};
use lxc_stack::ensure_sufficient_stack;
use tracing::debug;

use super::{BinaryOp, COLON, RPAREN};
use crate::{ParseError, Parser, Rule};

type Level<P> = fn(&mut P) -> Result<(), ParseError>;
type OpMatcher<P> = fn(&P) -> Option<BinaryOp>;

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<(), ParseError> {
        self.traced(Rule::Expr, Self::parse_assign)
    }

    fn parse_assign(&mut self) -> Result<(), ParseError> {
        self.parse_conditional()?;
        if self.match_assign_op().is_some() {
            self.consume();
            ensure_sufficient_stack(|| self.parse_assign())?;
        }
        Ok(())
    }

    fn parse_conditional(&mut self) -> Result<(), ParseError> {
        self.parse_logical_or()?;
        if self.eat(TokenKind::Operator(Operator::Question)) {
            self.parse_expr()?;
            self.expect(
                COLON,
                ErrorCode::E1001,
                "Missing ':' in conditional expression",
            )?;
            self.parse_expr()?;
        }
        Ok(())
    }

    /// One left-associative level: `operand (op operand)*`.
    fn binary_level(
        &mut self,
        operand: Level<Self>,
        matcher: OpMatcher<Self>,
    ) -> Result<(), ParseError> {
        operand(self)?;
        while let Some(op) = matcher(self) {
            self.consume_binary_op(op);
            operand(self)?;
        }
        Ok(())
    }

    fn consume_binary_op(&mut self, op: BinaryOp) {
        for _ in 0..op.token_count() {
            self.consume();
        }
    }

    fn parse_logical_or(&mut self) -> Result<(), ParseError> {
        self.binary_level(Self::parse_logical_and, Self::match_or_op)
    }

    fn parse_logical_and(&mut self) -> Result<(), ParseError> {
        self.binary_level(Self::parse_bit_or, Self::match_and_op)
    }

    fn parse_bit_or(&mut self) -> Result<(), ParseError> {
        self.binary_level(Self::parse_bit_xor, Self::match_bit_or_op)
    }

    fn parse_bit_xor(&mut self) -> Result<(), ParseError> {
        self.binary_level(Self::parse_bit_and, Self::match_bit_xor_op)
    }

    fn parse_bit_and(&mut self) -> Result<(), ParseError> {
        self.binary_level(Self::parse_equality, Self::match_bit_and_op)
    }

    fn parse_equality(&mut self) -> Result<(), ParseError> {
        self.binary_level(Self::parse_relational, Self::match_equality_op)
    }

    fn parse_relational(&mut self) -> Result<(), ParseError> {
        self.binary_level(Self::parse_shift, Self::match_relational_op)
    }

    fn parse_shift(&mut self) -> Result<(), ParseError> {
        self.binary_level(Self::parse_additive, Self::match_shift_op)
    }

    fn parse_additive(&mut self) -> Result<(), ParseError> {
        self.binary_level(Self::parse_multiplicative, Self::match_additive_op)
    }

    fn parse_multiplicative(&mut self) -> Result<(), ParseError> {
        self.binary_level(Self::parse_power, Self::match_multiplicative_op)
    }

    /// `**` binds right: `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
    fn parse_power(&mut self) -> Result<(), ParseError> {
        self.parse_unary()?;
        if let Some(op) = self.match_power_op() {
            self.consume_binary_op(op);
            ensure_sufficient_stack(|| self.parse_power())?;
        }
        Ok(())
    }

    fn parse_unary(&mut self) -> Result<(), ParseError> {
        if self.match_unary_op().is_some() {
            self.consume();
            return ensure_sufficient_stack(|| self.parse_unary());
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<(), ParseError> {
        self.parse_primary()?;
        while self.match_postfix_op().is_some() {
            self.consume();
        }
        Ok(())
    }

    fn parse_primary(&mut self) -> Result<(), ParseError> {
        let Some(token) = self.current() else {
            return Err(self.cursor.error(
                ErrorCode::E1002,
                "Expected an expression, found end of file",
            ));
        };

        match token.kind {
            TokenKind::Identifier
            | TokenKind::NumericConstant
            | TokenKind::StringLiteral
            | TokenKind::CharLiteral
            | TokenKind::ReservedWord(ReservedWord::True | ReservedWord::False) => {
                self.consume();
                Ok(())
            }
            TokenKind::Delimiter(Delimiter::LParen) => {
                self.consume();
                self.parse_expr()?;
                self.expect(RPAREN, ErrorCode::E1003, "Missing ')' to close '('")?;
                Ok(())
            }
            TokenKind::ReservedWord(word) => {
                debug!(%word, "reserved word in expression position");
                Err(self.cursor.error(
                    ErrorCode::E1002,
                    format!("Reserved word '{word}' cannot be used as a value"),
                ))
            }
            _ => Err(self.cursor.error(
                ErrorCode::E1002,
                format!("Expected an expression, found '{}'", token.text),
            )),
        }
    }
}
