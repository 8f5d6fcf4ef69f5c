//! Grammar productions.
//!
//! - `program`: program header, blocks and statement lists
//! - `stmt`: the seven statement forms
//! - `expr`: the expression precedence ladder
//! - `operators`: operator matching for each ladder level

mod expr;
mod operators;
mod program;
mod stmt;

use lxc_ir::{Delimiter, Keyword, Operator, TokenKind};

pub use operators::BinaryOp;

const LBRACE: TokenKind = TokenKind::Delimiter(Delimiter::LBrace);
const RBRACE: TokenKind = TokenKind::Delimiter(Delimiter::RBrace);
const LPAREN: TokenKind = TokenKind::Delimiter(Delimiter::LParen);
const RPAREN: TokenKind = TokenKind::Delimiter(Delimiter::RParen);
const SEMI: TokenKind = TokenKind::Delimiter(Delimiter::Semicolon);
const COLON: TokenKind = TokenKind::Delimiter(Delimiter::Colon);
const COMMA: TokenKind = TokenKind::Delimiter(Delimiter::Comma);
const ASSIGN: TokenKind = TokenKind::Operator(Operator::Eq);

#[inline]
const fn kw(keyword: Keyword) -> TokenKind {
    TokenKind::Keyword(keyword)
}
