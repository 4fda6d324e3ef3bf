//! Tests for value parsing.
//!
//! Values are parsed in argument position (`{ field(arg: <value>) }`) and
//! through [`Parser::parse_value()`](crate::Parser::parse_value).

use crate::Position;
use crate::Printer;
use crate::ast::ValueKind;
use crate::tests::utils::parse_argument_value;
use crate::tests::utils::parse_error;
use crate::tests::utils::parse_value;

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn int_value() {
    let (document, value) = parse_argument_value("123");
    assert_eq!(document.value_kind(value), ValueKind::Int);
    let int_value = document.values[value as usize].value_ref;
    assert_eq!(document.int_value_as_i64(int_value), Some(123));
    assert_eq!(document.value_content_bytes(value), b"123");
}

/// The sign is recorded separately; the literal stays unsigned.
#[test]
fn negative_int_value() {
    let (document, value) = parse_argument_value("-456");
    let int_value = document.values[value as usize].value_ref;
    let int_value_entry = document.int_values[int_value as usize];
    assert!(int_value_entry.negative_sign.is_some());
    assert_eq!(document.input.byte_slice(int_value_entry.raw), b"456");
    assert_eq!(document.int_value_as_i64(int_value), Some(-456));
}

/// An int value too large for 32 bits still parses; narrowing fails.
#[test]
fn large_int_value() {
    let (document, value) = parse_argument_value("3000000000");
    let int_value = document.values[value as usize].value_ref;
    assert_eq!(document.int_value_as_i64(int_value), Some(3_000_000_000));
    assert_eq!(document.int_value_as_i32(int_value), None);
}

#[test]
fn float_values() {
    for (source, expected) in [("1.5", 1.5), ("-0.25", -0.25), ("1e3", 1000.0), ("-2.5E-1", -0.25)] {
        let (document, value) = parse_argument_value(source);
        assert_eq!(document.value_kind(value), ValueKind::Float, "{source}");
        let float_value = document.values[value as usize].value_ref;
        let parsed = document.float_value_as_f64(float_value);
        assert!(
            parsed.is_some_and(|parsed| (parsed - expected).abs() < f64::EPSILON),
            "{source}: {parsed:?}",
        );
    }
}

#[test]
fn string_value() {
    let (document, value) = parse_argument_value(r#""hello\nworld""#);
    assert_eq!(document.value_kind(value), ValueKind::String);
    let string_value = document.values[value as usize].value_ref;
    assert!(!document.string_values[string_value as usize].block_string);
    assert_eq!(document.value_content_bytes(value), br"hello\nworld");
    assert_eq!(
        document.string_value_content_string(string_value).as_deref(),
        Ok("hello\nworld"),
    );
}

#[test]
fn block_string_value() {
    let (document, value) = parse_argument_value("\"\"\"\n    indented\n      more\n\"\"\"");
    let string_value = document.values[value as usize].value_ref;
    assert!(document.string_values[string_value as usize].block_string);
    assert_eq!(
        document.string_value_content_string(string_value).as_deref(),
        Ok("indented\n  more"),
    );
}

/// `true` and `false` carry their truth in `value_ref`; `null` has no
/// payload.
#[test]
fn boolean_and_null_values() {
    let (document, value) = parse_argument_value("true");
    assert_eq!(document.value_kind(value), ValueKind::Boolean);
    assert_eq!(document.values[value as usize].value_ref, 1);
    assert_eq!(document.boolean_value(value), Some(true));

    let (document, value) = parse_argument_value("false");
    assert_eq!(document.values[value as usize].value_ref, 0);
    assert_eq!(document.boolean_value(value), Some(false));

    let (document, value) = parse_argument_value("null");
    assert_eq!(document.value_kind(value), ValueKind::Null);
    assert_eq!(document.boolean_value(value), None);
    assert_eq!(document.value_content_bytes(value), b"null");
}

#[test]
fn enum_value() {
    let (document, value) = parse_argument_value("ASCENDING");
    assert_eq!(document.value_kind(value), ValueKind::Enum);
    let enum_value = document.values[value as usize].value_ref;
    assert_eq!(document.enum_value_name_string(enum_value), "ASCENDING");
}

/// Keyword-like names other than `true`/`false`/`null` are enum values.
#[test]
fn contextual_keyword_enum_value() {
    let (document, value) = parse_argument_value("query");
    assert_eq!(document.value_kind(value), ValueKind::Enum);
    assert_eq!(document.value_content_bytes(value), b"query");
}

#[test]
fn variable_value() {
    let (document, value) = parse_argument_value("$id");
    assert_eq!(document.value_kind(value), ValueKind::Variable);
    let variable_value = document.values[value as usize].value_ref;
    assert_eq!(document.variable_value_name_string(variable_value), "id");
}

// =============================================================================
// Lists and objects
// =============================================================================

#[test]
fn list_value() {
    let (document, value) = parse_argument_value("[1, \"two\", THREE, [4]]");
    assert_eq!(document.value_kind(value), ValueKind::List);
    let list_value = document.values[value as usize].value_ref;
    let kinds: Vec<ValueKind> = document
        .list_value_values(list_value)
        .map(|member| document.value_kind(member))
        .collect();
    assert_eq!(
        kinds,
        vec![ValueKind::Int, ValueKind::String, ValueKind::Enum, ValueKind::List],
    );
}

#[test]
fn empty_list_and_object_values() {
    let (document, value) = parse_argument_value("[]");
    let list_value = document.values[value as usize].value_ref;
    assert_eq!(document.list_value_values(list_value).count(), 0);

    let (document, value) = parse_argument_value("{}");
    assert_eq!(document.value_kind(value), ValueKind::Object);
    let object_value = document.values[value as usize].value_ref;
    assert_eq!(document.object_value_fields(object_value).count(), 0);
}

#[test]
fn object_value() {
    let (document, value) = parse_argument_value("{ name: \"x\", nested: { deep: [true] } }");
    let object_value = document.values[value as usize].value_ref;
    let fields: Vec<_> = document.object_value_fields(object_value).collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(document.object_field_name_string(fields[0]), "name");
    assert_eq!(document.object_field_name_string(fields[1]), "nested");

    let nested = document.object_fields[fields[1] as usize].value;
    assert_eq!(document.value_kind(nested), ValueKind::Object);
}

/// Four levels of brackets nest through the value tables and reprint as
/// written.
#[test]
fn nested_list_and_object_value() {
    let (document, value) = parse_value("[[{a:\"b\",c:[1,2]}]]");
    let outer = document.values[value as usize].value_ref;
    let inner: Vec<_> = document.list_value_values(outer).collect();
    assert_eq!(inner.len(), 1);
    assert_eq!(document.value_kind(inner[0]), ValueKind::List);

    let inner_list = document.values[inner[0] as usize].value_ref;
    let objects: Vec<_> = document.list_value_values(inner_list).collect();
    assert_eq!(document.value_kind(objects[0]), ValueKind::Object);

    let object_value = document.values[objects[0] as usize].value_ref;
    let fields: Vec<_> = document.object_value_fields(object_value).collect();
    assert_eq!(document.object_field_name_string(fields[1]), "c");
    let c = document.object_fields[fields[1] as usize].value;
    let c_list = document.values[c as usize].value_ref;
    assert_eq!(document.list_value_values(c_list).count(), 2);

    assert_eq!(
        Printer::new().print_value(&document, value),
        "[[{a: \"b\", c: [1,2]}]]",
    );
}

// =============================================================================
// Positions
// =============================================================================

/// A negative number's position starts at its sign.
#[test]
fn negative_number_position() {
    let (document, value) = parse_value("-12");
    assert_eq!(document.values[value as usize].position, Position::new(1, 1, 1, 4));
}

#[test]
fn list_value_position_spans_brackets() {
    let (document, value) = parse_value("[1, 2]");
    assert_eq!(document.values[value as usize].position, Position::new(1, 1, 1, 7));
}

// =============================================================================
// Standalone value parsing
// =============================================================================

#[test]
fn parse_value_requires_end_of_input() {
    let mut document = crate::ast::Document::from_source("1 2");
    let error = crate::Parser::new().parse_value(&mut document);
    assert!(error.is_err());
}

#[test]
fn values_compare_across_documents() {
    let (left, left_value) = parse_value("{a: [1, -2.5, \"s\", E, $v, null, true]}");
    let (right, right_value) =
        parse_argument_value("{a: [1, -2.5, \"s\", E, $v, null, true]}");
    assert!(left.values_are_equal(left_value, &right, right_value));

    let (different, different_value) = parse_value("{a: [1, -2.5, \"s\", E, $v, null, false]}");
    assert!(!left.values_are_equal(left_value, &different, different_value));
}

// =============================================================================
// Errors
// =============================================================================

/// `-` must be directly followed by the number.
#[test]
fn space_after_minus_is_an_error() {
    let error = parse_error("{ field(arg: - 1) }");
    assert!(error.message().contains("directly after `-`"), "{}", error.message());
}

#[test]
fn minus_before_non_number_is_an_error() {
    let error = parse_error("{ field(arg: -abc) }");
    assert!(error.message().starts_with("expected a number after `-`"), "{}", error.message());
}

#[test]
fn unterminated_list_is_an_error() {
    let error = parse_error("{ field(arg: [1, 2 ) }");
    assert!(error.message().starts_with("expected a value"), "{}", error.message());

    let error = parse_error("{ field(arg: [1, 2");
    assert!(error.message().contains("`]` to close list value"), "{}", error.message());
}

#[test]
fn object_field_requires_colon() {
    let error = parse_error("{ field(arg: { a 1 }) }");
    assert_eq!(error.message(), "expected `:` after object field name, found `1`");
}
