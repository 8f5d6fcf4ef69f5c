//! Shared data model for the LXC front end.
//!
//! The lexer produces [`Token`]s into a [`TokenList`]; the parser reads
//! them back. Nothing here depends on either stage.

mod token;

pub use token::{Delimiter, Keyword, Operator, ReservedWord, Token, TokenKind, TokenList};
