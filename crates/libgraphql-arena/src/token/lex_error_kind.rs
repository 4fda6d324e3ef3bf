/// Why the lexer emitted a [`Keyword::Error`](crate::token::Keyword) token.
///
/// The lexer never aborts; it reports the problem through the token and lets
/// the parser turn it into a parse error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected character")]
    InvalidCharacter,

    #[error("unterminated string")]
    UnterminatedString,

    #[error("unterminated block string")]
    UnterminatedBlockString,

    #[error("invalid number")]
    InvalidNumber,

    /// One or two dots that don't form a `...` spread.
    #[error("unexpected `.`")]
    InvalidEllipsis,
}

impl LexErrorKind {
    /// An optional suggestion shown alongside the error.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexErrorKind::InvalidCharacter => None,
            LexErrorKind::UnterminatedString => Some(
                "Strings may not span lines; use a `\"\"\"` block string for \
                multi-line text",
            ),
            LexErrorKind::UnterminatedBlockString => {
                Some("Add a closing `\"\"\"`")
            },
            LexErrorKind::InvalidNumber => Some(
                "Numbers may not have leading zeros and may not be directly \
                followed by a name or `.`",
            ),
            LexErrorKind::InvalidEllipsis => {
                Some("Use `...` (three adjacent dots) for spreads")
            },
        }
    }
}
