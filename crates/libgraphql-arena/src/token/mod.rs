//! This module provides the token types produced by the
//! [`Lexer`](crate::Lexer) and consumed by the [`Parser`](crate::Parser).

mod graphql_token;
mod ident_keyword;
mod keyword;
mod lex_error_kind;
mod string_value_cooking;

pub use graphql_token::Token;
pub use ident_keyword::IdentKeyword;
pub use keyword::Keyword;
pub use lex_error_kind::LexErrorKind;
pub use string_value_cooking::StringValueError;
pub use string_value_cooking::cook_string_value;

#[cfg(test)]
mod tests;
