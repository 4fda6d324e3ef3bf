//! Tests for the errors the parser reports for malformed documents.

use crate::ErrorNoteKind;
use crate::ParseErrorKind;
use crate::Parser;
use crate::Position;
use crate::ast::Document;
use crate::tests::utils::parse_error;
use crate::token::Keyword;

fn note_messages(source: &str, kind: ErrorNoteKind) -> Vec<String> {
    parse_error(source)
        .notes()
        .iter()
        .filter(|note| note.kind == kind)
        .map(|note| note.message.clone())
        .collect()
}

// =============================================================================
// Definitions
// =============================================================================

#[test]
fn unknown_definition_keyword() {
    let error = parse_error("foo { a }");
    assert_eq!(error.message(), "expected a definition, found `foo`");
    assert_eq!(error.position(), Position::new(1, 1, 1, 4));
    assert!(matches!(
        error.kind(),
        ParseErrorKind::UnexpectedToken { keyword: Keyword::Ident, literal, .. } if literal == "foo",
    ));
    assert_eq!(
        note_messages("foo { a }", ErrorNoteKind::Spec),
        vec!["https://spec.graphql.org/October2021/#Document"],
    );
    assert_eq!(note_messages("foo { a }", ErrorNoteKind::Help).len(), 1);
}

#[test]
fn punctuator_instead_of_definition() {
    let error = parse_error("query { a } )");
    assert_eq!(error.message(), "expected a definition, found `)`");
    assert_eq!(error.position(), Position::new(1, 13, 1, 14));
}

/// Only type system definitions take descriptions.
#[test]
fn description_before_operation() {
    let error = parse_error("\"Fetches things\" query { a }");
    assert_eq!(
        error.message(),
        "expected a type system definition after description, found `query`",
    );
    assert_eq!(
        note_messages("\"Fetches things\" query { a }", ErrorNoteKind::General),
        vec!["only type system definitions may have descriptions"],
    );
}

#[test]
fn unknown_extension_target() {
    let error = parse_error("extend foo Bar");
    assert_eq!(
        error.message(),
        "expected `schema`, `type`, `interface`, `union`, `enum`, `input` or `scalar` \
        after `extend`, found `foo`",
    );
}

// =============================================================================
// Extensions
// =============================================================================

/// Every kind of extension must add something.
#[test]
fn empty_extensions() {
    let cases = [
        (
            "extend type User",
            "expected `implements`, a directive or fields in object type extension, \
            found end of input",
        ),
        (
            "extend interface Node",
            "expected `implements`, a directive or fields in interface extension, \
            found end of input",
        ),
        (
            "extend scalar Date type X",
            "expected a directive in scalar extension, found `type`",
        ),
        (
            "extend union U",
            "expected `=` or a directive in union extension, found end of input",
        ),
        (
            "extend enum E",
            "expected `{` or a directive in enum extension, found end of input",
        ),
        (
            "extend input I",
            "expected `{` or a directive in input object extension, found end of input",
        ),
        (
            "extend schema",
            "expected `{` or a directive in schema extension, found end of input",
        ),
    ];
    for (source, expected) in cases {
        let error = parse_error(source);
        assert_eq!(error.message(), expected, "source: {source}");
        assert_eq!(
            note_messages(source, ErrorNoteKind::General),
            vec!["an extension must add something to the extended definition"],
            "source: {source}",
        );
    }
}

// =============================================================================
// Bodies
// =============================================================================

#[test]
fn empty_bodies_are_errors() {
    let cases = [
        ("schema { }", "expected `query`, `mutation` or `subscription`, found `}`"),
        ("schema @a", "expected `{` to start the schema definition body, found end of input"),
        ("type T { }", "expected name as field definition name, found `}`"),
        ("type T { f(): Int }", "expected name as input value name, found `)`"),
        ("enum E { }", "expected name as enum value, found `}`"),
        ("input I { }", "expected name as input value name, found `}`"),
        ("directive @d() on FIELD", "expected name as input value name, found `)`"),
    ];
    for (source, expected) in cases {
        assert_eq!(parse_error(source).message(), expected, "source: {source}");
    }
}

/// An incomplete schema definition is an error, never a partial success.
#[test]
fn incomplete_schema_definitions() {
    for source in ["schema", "schema {", "schema foo {}"] {
        let error = parse_error(source);
        assert!(
            matches!(error.kind(), ParseErrorKind::UnexpectedToken { .. }),
            "source: {source}",
        );
    }
    assert!(parse_error("schema foo {}").message().ends_with("found `foo`"));
}

#[test]
fn schema_root_operation_requires_operation_type() {
    let error = parse_error("schema { query: Q fetch: F }");
    assert_eq!(
        error.message(),
        "expected `query`, `mutation` or `subscription`, found `fetch`",
    );
}

#[test]
fn field_definition_requires_type() {
    let error = parse_error("type T { name }");
    assert_eq!(error.message(), "expected `:` after field name, found `}`");
}

#[test]
fn union_requires_member_after_pipe() {
    let error = parse_error("union U = A |");
    assert_eq!(error.message(), "expected name as union member, found end of input");
}

#[test]
fn implements_requires_interface() {
    let error = parse_error("type T implements { a: Int }");
    assert_eq!(error.message(), "expected name as implemented interface, found `{`");
}

// =============================================================================
// Names
// =============================================================================

#[test]
fn reserved_enum_values() {
    for name in ["true", "false", "null"] {
        let source = format!("enum E {{ A {name} }}");
        let error = parse_error(&source);
        assert_eq!(error.message(), format!("expected an enum value, found `{name}`"));
        assert_eq!(
            note_messages(&source, ErrorNoteKind::General),
            vec![format!("`{name}` can't be used as an enum value")],
        );
    }
}

#[test]
fn fragment_named_on() {
    let source = "fragment on on T { a }";
    assert_eq!(
        note_messages(source, ErrorNoteKind::General),
        vec!["a fragment can't be named `on`"],
    );
}

// =============================================================================
// Directive locations
// =============================================================================

#[test]
fn unknown_directive_location_with_suggestion() {
    let source = "directive @a on FIELD | FEILD";
    let error = parse_error(source);
    assert_eq!(error.message(), "unknown directive location `FEILD`");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::UnknownDirectiveLocation {
            name: "FEILD".to_string(),
        },
    );
    assert_eq!(error.position(), Position::new(1, 25, 1, 30));
    assert_eq!(note_messages(source, ErrorNoteKind::Help), vec!["did you mean `FIELD`?"]);
    assert_eq!(
        note_messages(source, ErrorNoteKind::Spec),
        vec!["https://spec.graphql.org/October2021/#DirectiveLocations"],
    );
}

/// Locations are case-sensitive, but suggestions aren't.
#[test]
fn lowercase_directive_location_suggests_uppercase() {
    let source = "directive @a on field_definition";
    assert_eq!(
        note_messages(source, ErrorNoteKind::Help),
        vec!["did you mean `FIELD_DEFINITION`?"],
    );
}

#[test]
fn unrecognizable_directive_location_has_no_suggestion() {
    let source = "directive @a on SOMEWHERE_ELSE";
    assert!(note_messages(source, ErrorNoteKind::Help).is_empty());
}

#[test]
fn directive_definition_requires_on() {
    let error = parse_error("directive @a FIELD");
    assert_eq!(error.message(), "expected `on` before directive locations, found `FIELD`");
}

// =============================================================================
// Lexer errors
// =============================================================================

/// A lexer error token surfaces as a parse error with the lexer's reason
/// attached.
#[test]
fn lexer_errors_become_notes() {
    let source = "{ a(x: \"abc) }";
    let error = parse_error(source);
    assert!(error.message().starts_with("expected a value, found `"), "{}", error.message());
    assert!(matches!(
        error.kind(),
        ParseErrorKind::UnexpectedToken {
            keyword: Keyword::Error,
            ..
        },
    ));
    assert_eq!(
        note_messages(source, ErrorNoteKind::General),
        vec!["unterminated string"],
    );
    assert_eq!(note_messages(source, ErrorNoteKind::Help).len(), 1);
}

#[test]
fn invalid_character_in_selection_set() {
    let source = "{ a ? }";
    let error = parse_error(source);
    assert_eq!(
        error.message(),
        "expected a field, fragment spread or inline fragment, found `?`",
    );
    assert_eq!(note_messages(source, ErrorNoteKind::General), vec!["unexpected character"]);
    assert!(note_messages(source, ErrorNoteKind::Help).is_empty());
}

#[test]
fn invalid_number_in_value() {
    let source = "{ a(x: 007) }";
    let error = parse_error(source);
    assert_eq!(error.message(), "expected a value, found `007`");
    assert_eq!(note_messages(source, ErrorNoteKind::General), vec!["invalid number"]);
}

#[test]
fn two_dots_instead_of_spread() {
    let source = "{ ..F }";
    let error = parse_error(source);
    assert_eq!(
        error.message(),
        "expected a field, fragment spread or inline fragment, found `..`",
    );
}

// =============================================================================
// Depth
// =============================================================================

#[test]
fn deeply_nested_list_value() {
    let depth = Parser::MAX_DEPTH + 1;
    let source = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    let mut document = Document::from_source(&source);
    let error = Parser::new().parse_value(&mut document).err();
    assert_eq!(error.as_ref().map(|error| error.message()), Some("maximum nesting depth exceeded"));

    let depth = Parser::MAX_DEPTH;
    let source = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    let mut document = Document::from_source(&source);
    assert!(Parser::new().parse_value(&mut document).is_ok());
}

#[test]
fn deeply_nested_object_value() {
    let depth = Parser::MAX_DEPTH + 1;
    let source = format!("{}1{}", "{a: ".repeat(depth), "}".repeat(depth));
    let mut document = Document::from_source(&source);
    let error = Parser::new().parse_value(&mut document).err();
    assert!(error.is_some_and(|error| matches!(
        error.kind(),
        ParseErrorKind::NestingTooDeep { max_depth } if *max_depth == Parser::MAX_DEPTH,
    )));
}

/// Depth is shared between selection sets and the values inside them.
#[test]
fn selection_and_value_depth_combine() {
    let value_depth = Parser::MAX_DEPTH;
    let source = format!(
        "{{ a(x: {}1{}) }}",
        "[".repeat(value_depth),
        "]".repeat(value_depth),
    );
    let error = parse_error(&source);
    assert!(matches!(error.kind(), ParseErrorKind::NestingTooDeep { .. }));
}
