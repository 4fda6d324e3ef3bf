/// The lexical category of a [`Token`](crate::token::Token).
///
/// Contextual keywords such as `schema`, `type` or `query` are *not* distinct
/// variants: the lexer emits them as [`Keyword::Ident`] and the parser
/// disambiguates them by their literal (see
/// [`IdentKeyword`](crate::token::IdentKeyword)). `true`, `false` and `null`
/// are also plain identifiers at this level.
///
/// Numeric literals never include a sign. A leading `-` is lexed as its own
/// [`Keyword::Minus`] token and folded into a negative number by the parser.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum Keyword {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `-`
    Minus,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A name matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    Ident,
    /// An unsigned integer literal.
    Integer,
    /// An unsigned float literal.
    Float,
    /// A `"..."` string. The token literal excludes the quotes.
    String,
    /// A `"""..."""` block string. The token literal excludes the quotes.
    BlockString,

    // =========================================================================
    // Insignificant tokens (only reported by `Lexer::peek(_, false)`)
    // =========================================================================
    /// Whitespace, line terminators, commas or a byte order mark.
    Whitespace,
    /// A `#` comment.
    Comment,

    // =========================================================================
    // End of input / lexer error
    // =========================================================================
    /// End of input.
    Eof,
    /// An unrecognized byte sequence. The token's `error` field says why.
    Error,
}

impl Keyword {
    /// Returns `true` if this keyword is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the source text of this keyword if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            Keyword::Ampersand => Some("&"),
            Keyword::At => Some("@"),
            Keyword::Bang => Some("!"),
            Keyword::Colon => Some(":"),
            Keyword::CurlyBraceClose => Some("}"),
            Keyword::CurlyBraceOpen => Some("{"),
            Keyword::Dollar => Some("$"),
            Keyword::Ellipsis => Some("..."),
            Keyword::Equals => Some("="),
            Keyword::Minus => Some("-"),
            Keyword::ParenClose => Some(")"),
            Keyword::ParenOpen => Some("("),
            Keyword::Pipe => Some("|"),
            Keyword::SquareBracketClose => Some("]"),
            Keyword::SquareBracketOpen => Some("["),

            Keyword::Ident
            | Keyword::Integer
            | Keyword::Float
            | Keyword::String
            | Keyword::BlockString
            | Keyword::Whitespace
            | Keyword::Comment
            | Keyword::Eof
            | Keyword::Error => None,
        }
    }

    /// Returns `true` for whitespace and comments.
    pub fn is_insignificant(&self) -> bool {
        matches!(self, Keyword::Whitespace | Keyword::Comment)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(punctuator) = self.as_punctuator_str() {
            return write!(f, "`{punctuator}`");
        }
        let description = match self {
            Keyword::Ident => "name",
            Keyword::Integer => "integer",
            Keyword::Float => "float",
            Keyword::String => "string",
            Keyword::BlockString => "block string",
            Keyword::Whitespace => "whitespace",
            Keyword::Comment => "comment",
            Keyword::Eof => "end of input",
            Keyword::Error => "invalid token",
            _ => unreachable!("punctuators are handled above"),
        };
        f.write_str(description)
    }
}
