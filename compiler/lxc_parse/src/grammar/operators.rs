//! Operator matching helpers.
//!
//! Each precedence level of the expression ladder asks one of these
//! whether the current token continues it. Shifts are the odd case: the
//! lexer has no `<<`/`>>` lexeme, so a shift is two adjacent `<` or `>`
//! tokens and the relational matcher must leave those alone.

use std::fmt;

use lxc_ir::{Operator, TokenKind};

use crate::Parser;

/// Binary operators, from loosest to tightest binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
        }
    }

    /// Number of tokens the operator occupies in the stream.
    pub const fn token_count(self) -> usize {
        match self {
            BinaryOp::Shl | BinaryOp::Shr => 2,
            _ => 1,
        }
    }

    pub const fn is_right_assoc(self) -> bool {
        matches!(self, BinaryOp::Pow)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Parser<'_> {
    fn current_op(&self) -> Option<Operator> {
        match self.current_kind() {
            Some(TokenKind::Operator(op)) => Some(op),
            _ => None,
        }
    }

    pub(crate) fn match_or_op(&self) -> Option<BinaryOp> {
        (self.current_op() == Some(Operator::OrOr)).then_some(BinaryOp::Or)
    }

    pub(crate) fn match_and_op(&self) -> Option<BinaryOp> {
        (self.current_op() == Some(Operator::AndAnd)).then_some(BinaryOp::And)
    }

    pub(crate) fn match_bit_or_op(&self) -> Option<BinaryOp> {
        (self.current_op() == Some(Operator::Pipe)).then_some(BinaryOp::BitOr)
    }

    pub(crate) fn match_bit_xor_op(&self) -> Option<BinaryOp> {
        (self.current_op() == Some(Operator::Caret)).then_some(BinaryOp::BitXor)
    }

    pub(crate) fn match_bit_and_op(&self) -> Option<BinaryOp> {
        (self.current_op() == Some(Operator::Amp)).then_some(BinaryOp::BitAnd)
    }

    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current_op()? {
            Operator::EqEq => Some(BinaryOp::Eq),
            Operator::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    pub(crate) fn match_relational_op(&self) -> Option<BinaryOp> {
        match self.current_op()? {
            Operator::Lt if !self.cursor.check_doubled(Operator::Lt) => Some(BinaryOp::Lt),
            Operator::Gt if !self.cursor.check_doubled(Operator::Gt) => Some(BinaryOp::Gt),
            Operator::LtEq => Some(BinaryOp::LtEq),
            Operator::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(crate) fn match_shift_op(&self) -> Option<BinaryOp> {
        if self.cursor.check_doubled(Operator::Lt) {
            Some(BinaryOp::Shl)
        } else if self.cursor.check_doubled(Operator::Gt) {
            Some(BinaryOp::Shr)
        } else {
            None
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_op()? {
            Operator::Plus => Some(BinaryOp::Add),
            Operator::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_op()? {
            Operator::Star => Some(BinaryOp::Mul),
            Operator::Slash => Some(BinaryOp::Div),
            Operator::SlashSlash => Some(BinaryOp::FloorDiv),
            Operator::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub(crate) fn match_power_op(&self) -> Option<BinaryOp> {
        (self.current_op() == Some(Operator::StarStar)).then_some(BinaryOp::Pow)
    }

    /// Prefix operators: `+ - ! ++ --`.
    pub(crate) fn match_unary_op(&self) -> Option<Operator> {
        self.current_op().filter(|op| {
            matches!(
                op,
                Operator::Plus
                    | Operator::Minus
                    | Operator::Bang
                    | Operator::PlusPlus
                    | Operator::MinusMinus
            )
        })
    }

    /// Postfix operators: `++ --`.
    pub(crate) fn match_postfix_op(&self) -> Option<Operator> {
        self.current_op()
            .filter(|op| matches!(op, Operator::PlusPlus | Operator::MinusMinus))
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryOp;

    #[test]
    fn shifts_span_two_tokens() {
        assert_eq!(BinaryOp::Shl.token_count(), 2);
        assert_eq!(BinaryOp::Shr.token_count(), 2);
        assert_eq!(BinaryOp::Add.token_count(), 1);
    }

    #[test]
    fn only_power_is_right_associative() {
        assert!(BinaryOp::Pow.is_right_assoc());
        assert!(!BinaryOp::Sub.is_right_assoc());
    }

    #[test]
    fn display_matches_source_spelling() {
        assert_eq!(BinaryOp::FloorDiv.to_string(), "//");
        assert_eq!(BinaryOp::Shr.to_string(), ">>");
    }
}
