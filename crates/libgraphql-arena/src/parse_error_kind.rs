use crate::token::Keyword;
use smallvec::SmallVec;

/// Categorizes a [`ParseError`](crate::ParseError) for programmatic
/// handling.
///
/// The parser is fail-fast, so every error a parse can produce is one of
/// these. Human-readable detail lives in the error's message and notes.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The token at the error position can't appear there.
    ///
    /// Also used for lexer error tokens (`keyword == Keyword::Error`); the
    /// lexer's reason is attached to the error as a note.
    #[error("unexpected {keyword} `{literal}`")]
    UnexpectedToken {
        /// The keyword of the offending token.
        keyword: Keyword,

        /// The source text of the offending token (lossily decoded).
        literal: String,

        /// The keywords that would have been accepted. May be empty when the
        /// parser expected a specific contextual keyword (e.g. `on`); the
        /// message names it in that case.
        expected: SmallVec<[Keyword; 4]>,
    },

    /// A directive definition names a location that isn't one of the
    /// GraphQL `DirectiveLocation` values.
    #[error("unknown directive location `{name}`")]
    UnknownDirectiveLocation { name: String },

    /// Values, types or selection sets are nested deeper than the parser
    /// allows.
    #[error("nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },
}
