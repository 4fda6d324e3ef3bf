//! Tests for [`Keyword`] and [`LexErrorKind`].

use crate::token::Keyword;
use crate::token::LexErrorKind;

#[test]
fn punctuators_display_in_backticks() {
    assert_eq!(Keyword::CurlyBraceOpen.to_string(), "`{`");
    assert_eq!(Keyword::Ellipsis.to_string(), "`...`");
    assert_eq!(Keyword::Minus.to_string(), "`-`");
}

#[test]
fn other_keywords_display_by_name() {
    assert_eq!(Keyword::Ident.to_string(), "name");
    assert_eq!(Keyword::BlockString.to_string(), "block string");
    assert_eq!(Keyword::Eof.to_string(), "end of input");
    assert_eq!(Keyword::Error.to_string(), "invalid token");
}

#[test]
fn punctuator_classification() {
    assert!(Keyword::Pipe.is_punctuator());
    assert_eq!(Keyword::Pipe.as_punctuator_str(), Some("|"));
    assert!(!Keyword::Ident.is_punctuator());
    assert_eq!(Keyword::Float.as_punctuator_str(), None);
}

#[test]
fn only_whitespace_and_comments_are_insignificant() {
    assert!(Keyword::Whitespace.is_insignificant());
    assert!(Keyword::Comment.is_insignificant());
    assert!(!Keyword::Eof.is_insignificant());
    assert!(!Keyword::Integer.is_insignificant());
}

/// Every lexer error but an invalid character carries a suggestion.
#[test]
fn lex_error_help() {
    assert_eq!(LexErrorKind::InvalidCharacter.help(), None);
    for kind in [
        LexErrorKind::UnterminatedString,
        LexErrorKind::UnterminatedBlockString,
        LexErrorKind::InvalidNumber,
        LexErrorKind::InvalidEllipsis,
    ] {
        assert!(kind.help().is_some(), "{kind:?}");
    }
    assert_eq!(LexErrorKind::UnterminatedString.to_string(), "unterminated string");
}
