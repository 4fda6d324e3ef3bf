use crate::ByteSliceReference;
use crate::Position;
use crate::token::Keyword;
use crate::token::LexErrorKind;

/// A single lexed token.
///
/// Tokens are transient and `Copy`: the literal is a reference into the
/// [`Input`](crate::Input) being lexed, never an owned string.
///
/// For [`Keyword::String`] and [`Keyword::BlockString`] the literal excludes
/// the surrounding quotes while `position` covers the whole token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token {
    pub keyword: Keyword,
    pub literal: ByteSliceReference,
    pub position: Position,
    /// Why the lexer produced a [`Keyword::Error`] token. `None` for every
    /// other keyword.
    pub error: Option<LexErrorKind>,
}

impl Token {
    /// Convenience constructor for a non-error token.
    pub fn new(
        keyword: Keyword,
        literal: ByteSliceReference,
        position: Position,
    ) -> Self {
        Self {
            keyword,
            literal,
            position,
            error: None,
        }
    }
}
