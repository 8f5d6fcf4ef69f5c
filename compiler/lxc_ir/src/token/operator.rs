//! Operator and delimiter sub-kinds.

use std::fmt;

/// One- and two-character operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    // Two-character
    EqEq,
    NotEq,
    GtEq,
    LtEq,
    PlusPlus,
    MinusMinus,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    StarStar,
    SlashSlash,
    AndAnd,
    OrOr,
    Arrow,
    // Single-character
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Lt,
    Gt,
    Eq,
    Bang,
    Amp,
    Pipe,
    Question,
    Caret,
}

impl Operator {
    /// Look up an operator by spelling.
    pub fn from_text(text: &str) -> Option<Operator> {
        Some(match text {
            "==" => Operator::EqEq,
            "!=" => Operator::NotEq,
            ">=" => Operator::GtEq,
            "<=" => Operator::LtEq,
            "++" => Operator::PlusPlus,
            "--" => Operator::MinusMinus,
            "+=" => Operator::PlusEq,
            "-=" => Operator::MinusEq,
            "*=" => Operator::StarEq,
            "/=" => Operator::SlashEq,
            "%=" => Operator::PercentEq,
            "**" => Operator::StarStar,
            "//" => Operator::SlashSlash,
            "&&" => Operator::AndAnd,
            "||" => Operator::OrOr,
            "->" => Operator::Arrow,
            "+" => Operator::Plus,
            "-" => Operator::Minus,
            "*" => Operator::Star,
            "/" => Operator::Slash,
            "%" => Operator::Percent,
            "<" => Operator::Lt,
            ">" => Operator::Gt,
            "=" => Operator::Eq,
            "!" => Operator::Bang,
            "&" => Operator::Amp,
            "|" => Operator::Pipe,
            "?" => Operator::Question,
            "^" => Operator::Caret,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::EqEq => "==",
            Operator::NotEq => "!=",
            Operator::GtEq => ">=",
            Operator::LtEq => "<=",
            Operator::PlusPlus => "++",
            Operator::MinusMinus => "--",
            Operator::PlusEq => "+=",
            Operator::MinusEq => "-=",
            Operator::StarEq => "*=",
            Operator::SlashEq => "/=",
            Operator::PercentEq => "%=",
            Operator::StarStar => "**",
            Operator::SlashSlash => "//",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
            Operator::Arrow => "->",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Eq => "=",
            Operator::Bang => "!",
            Operator::Amp => "&",
            Operator::Pipe => "|",
            Operator::Question => "?",
            Operator::Caret => "^",
        }
    }

    /// `= += -= *= /= %=`.
    pub const fn is_assign(self) -> bool {
        matches!(
            self,
            Operator::Eq
                | Operator::PlusEq
                | Operator::MinusEq
                | Operator::StarEq
                | Operator::SlashEq
                | Operator::PercentEq
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-character delimiters, brackets distinguished by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delimiter {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Colon,
    Comma,
    Dot,
}

impl Delimiter {
    pub fn from_char(c: char) -> Option<Delimiter> {
        Some(match c {
            '(' => Delimiter::LParen,
            ')' => Delimiter::RParen,
            '[' => Delimiter::LBracket,
            ']' => Delimiter::RBracket,
            '{' => Delimiter::LBrace,
            '}' => Delimiter::RBrace,
            ';' => Delimiter::Semicolon,
            ':' => Delimiter::Colon,
            ',' => Delimiter::Comma,
            '.' => Delimiter::Dot,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::LParen => "(",
            Delimiter::RParen => ")",
            Delimiter::LBracket => "[",
            Delimiter::RBracket => "]",
            Delimiter::LBrace => "{",
            Delimiter::RBrace => "}",
            Delimiter::Semicolon => ";",
            Delimiter::Colon => ":",
            Delimiter::Comma => ",",
            Delimiter::Dot => ".",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
