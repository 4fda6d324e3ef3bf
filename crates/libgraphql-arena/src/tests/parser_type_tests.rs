//! Tests for type reference parsing.

use crate::Parser;
use crate::ParseErrorKind;
use crate::Position;
use crate::ast::Document;
use crate::ast::TypeKind;
use crate::tests::utils::parse_error;
use crate::tests::utils::parse_type;

#[test]
fn named_type() {
    let (document, type_ref) = parse_type("String");
    let ty = document.types[type_ref as usize];
    assert_eq!(ty.kind, TypeKind::Named);
    assert_eq!(ty.of_type, None);
    assert_eq!(document.type_name_string(type_ref), "String");
}

/// `[ID!]!` is a non-null wrapping a list wrapping a non-null named type.
#[test]
fn wrapped_type_chain() {
    let (document, type_ref) = parse_type("[ID!]!");
    let mut kinds = Vec::new();
    let mut current = Some(type_ref);
    while let Some(r) = current {
        let ty = document.types[r as usize];
        kinds.push(ty.kind);
        current = ty.of_type;
    }
    assert_eq!(
        kinds,
        vec![TypeKind::NonNull, TypeKind::List, TypeKind::NonNull, TypeKind::Named],
    );
    assert_eq!(document.type_name_string(type_ref), "ID");
    assert_eq!(document.type_string(type_ref), "[ID!]!");
}

#[test]
fn type_predicates() {
    let (document, type_ref) = parse_type("[Int]!");
    assert!(document.type_is_non_null(type_ref));
    assert!(document.type_is_list(type_ref));

    let (document, type_ref) = parse_type("Int!");
    assert!(document.type_is_non_null(type_ref));
    assert!(!document.type_is_list(type_ref));
}

#[test]
fn type_positions() {
    let (document, type_ref) = parse_type("[User!]!");
    let outer = document.types[type_ref as usize];
    assert_eq!(outer.position, Position::new(1, 1, 1, 9));
    assert_eq!(outer.bang, Position::new(1, 8, 1, 9));

    let list = document.types[outer.of_type.unwrap_or_default() as usize];
    assert_eq!(list.open, Position::new(1, 1, 1, 2));
    assert_eq!(list.close, Position::new(1, 7, 1, 8));
}

#[test]
fn types_compare_structurally_across_documents() {
    let (left, left_type) = parse_type("[String!]");
    let (right, right_type) = parse_type("[String!]");
    let (other, other_type) = parse_type("[String]!");
    assert!(left.types_are_equal(left_type, &right, right_type));
    assert!(!left.types_are_equal(left_type, &other, other_type));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn double_non_null_is_an_error() {
    let error = parse_error("query ($a: Int!!) { a }");
    assert!(error.message().starts_with("expected a single `!`"), "{}", error.message());
    assert!(
        error
            .notes()
            .iter()
            .any(|note| note.message.contains("non-null again")),
    );
}

#[test]
fn unclosed_list_type_is_an_error() {
    let error = parse_error("query ($a: [Int) { a }");
    assert_eq!(error.message(), "expected `]` to close list type, found `)`");
}

#[test]
fn parse_type_rejects_trailing_input() {
    let mut document = Document::from_source("Int Float");
    let error = Parser::new().parse_type(&mut document);
    assert!(error.is_err_and(|error| error.message() == "expected end of input after type, found `Float`"));
}

/// Deeply nested list types hit the depth limit instead of overflowing the
/// stack.
#[test]
fn deeply_nested_list_type() {
    let depth = Parser::MAX_DEPTH + 1;
    let source = format!("{}Int{}", "[".repeat(depth), "]".repeat(depth));
    let mut document = Document::from_source(&source);
    let error = Parser::new().parse_type(&mut document).err();
    assert_eq!(
        error.map(|error| error.kind().clone()),
        Some(ParseErrorKind::NestingTooDeep {
            max_depth: Parser::MAX_DEPTH,
        }),
    );

    // The named type counts as one level of its own.
    let depth = Parser::MAX_DEPTH - 1;
    let source = format!("{}Int{}", "[".repeat(depth), "]".repeat(depth));
    let mut document = Document::from_source(&source);
    assert!(Parser::new().parse_type(&mut document).is_ok());
}
