//! Various test utils.

use crate::ParseError;
use crate::Parser;
use crate::ast::Document;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::ast::SelectionKind;

/// Parses `source`, panicking with a rendered diagnostic if it fails.
pub(crate) fn parse(source: &str) -> Document {
    let mut document = Document::from_source(source);
    if let Err(error) = Parser::new().parse(&mut document) {
        panic!(
            "failed to parse `{source}`:\n{}",
            error.format_detailed(Some(source)),
        );
    }
    document
}

/// Parses `source` and returns the error it must fail with.
pub(crate) fn parse_error(source: &str) -> ParseError {
    let mut document = Document::from_source(source);
    match Parser::new().parse(&mut document) {
        Ok(()) => panic!("expected `{source}` to fail to parse"),
        Err(error) => error,
    }
}

/// Parses `source` as a standalone value.
pub(crate) fn parse_value(source: &str) -> (Document, Ref) {
    let mut document = Document::from_source(source);
    match Parser::new().parse_value(&mut document) {
        Ok(value) => (document, value),
        Err(error) => panic!("failed to parse value `{source}`: {error}"),
    }
}

/// Parses `source` as a standalone type reference.
pub(crate) fn parse_type(source: &str) -> (Document, Ref) {
    let mut document = Document::from_source(source);
    match Parser::new().parse_type(&mut document) {
        Ok(type_ref) => (document, type_ref),
        Err(error) => panic!("failed to parse type `{source}`: {error}"),
    }
}

/// The first root node's ref, asserting its kind.
pub(crate) fn first_root(document: &Document, kind: NodeKind) -> Ref {
    let node = document.root_nodes[0];
    assert_eq!(node.kind, kind);
    node.node_ref
}

/// The refs of the fields selected directly in a selection set.
pub(crate) fn selected_fields(document: &Document, selection_set: Ref) -> Vec<Ref> {
    document.selection_sets[selection_set as usize]
        .selections
        .iter(&document.selections)
        .map(|selection| document.selections[selection as usize])
        .filter(|selection| selection.kind == SelectionKind::Field)
        .map(|selection| selection.node_ref)
        .collect()
}

/// The first field of the first operation in `document`.
pub(crate) fn first_operation_field(document: &Document) -> Ref {
    let operation = first_root(document, NodeKind::OperationDefinition);
    let selection_set = document.operation_definitions[operation as usize].selection_set;
    selected_fields(document, selection_set)[0]
}

/// The value of a field's first argument.
pub(crate) fn first_argument_value(document: &Document, field: Ref) -> Ref {
    let Some(argument) = document.fields[field as usize].arguments.refs.first else {
        panic!("field has no arguments");
    };
    document.arguments[argument as usize].value
}

/// Parses `{ field(arg: <value>) }` and returns the argument's value.
pub(crate) fn parse_argument_value(value_source: &str) -> (Document, Ref) {
    let document = parse(&format!("{{ field(arg: {value_source}) }}"));
    let field = first_operation_field(&document);
    let value = first_argument_value(&document, field);
    (document, value)
}
