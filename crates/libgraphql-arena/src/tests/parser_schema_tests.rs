//! Tests for parsing type system definitions and extensions.

use crate::ast::DirectiveLocation;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::OperationType;
use crate::ast::Ref;
use crate::tests::utils::first_root;
use crate::tests::utils::parse;

// =============================================================================
// Schema definitions
// =============================================================================

#[test]
fn schema_definition() {
    let document = parse(
        "schema @link { query: RootQuery mutation: RootMutation }",
    );
    let schema = first_root(&document, NodeKind::SchemaDefinition);
    let definition = document.schema_definitions[schema as usize];
    assert_eq!(definition.directives.len(&document.directives), 1);

    let roots: Vec<(OperationType, String)> = definition
        .root_operation_types
        .refs
        .iter(&document.root_operation_type_definitions)
        .map(|root| {
            let root = document.root_operation_type_definitions[root as usize];
            (root.operation_type, document.type_name_string(root.named_type))
        })
        .collect();
    assert_eq!(
        roots,
        vec![
            (OperationType::Query, "RootQuery".to_string()),
            (OperationType::Mutation, "RootMutation".to_string()),
        ],
    );
}

#[test]
fn schema_definition_root_operation_refs() {
    let document = parse(
        "schema { query: Query mutation: Mutation subscription: Subscription }",
    );
    assert_eq!(document.root_nodes.len(), 1);
    let schema = first_root(&document, NodeKind::SchemaDefinition);
    let definition = document.schema_definitions[schema as usize];
    let roots: Vec<(Ref, String, OperationType)> = definition
        .root_operation_types
        .refs
        .iter(&document.root_operation_type_definitions)
        .map(|root_ref| {
            let root = document.root_operation_type_definitions[root_ref as usize];
            (root_ref, document.type_name_string(root.named_type), root.operation_type)
        })
        .collect();
    assert_eq!(
        roots,
        vec![
            (0, "Query".to_string(), OperationType::Query),
            (1, "Mutation".to_string(), OperationType::Mutation),
            (2, "Subscription".to_string(), OperationType::Subscription),
        ],
    );
}

/// A declared root type wins over the conventional name.
#[test]
fn root_operation_type_name_prefers_schema_definition() {
    let document = parse(
        "schema { query: RootQuery } type RootQuery { a: Int } type Query { b: Int }",
    );
    assert_eq!(
        document.root_operation_type_name(OperationType::Query),
        Some(&b"RootQuery"[..]),
    );
    assert_eq!(
        document.root_operation_type_definition(OperationType::Query),
        Some(Node::new(NodeKind::ObjectTypeDefinition, 0)),
    );
}

#[test]
fn root_operation_type_name_falls_back_to_conventional_names() {
    let document = parse("type Query { a: Int } type Mutation { b: Int }");
    assert_eq!(
        document.root_operation_type_name(OperationType::Query),
        Some(&b"Query"[..]),
    );
    assert_eq!(
        document.root_operation_type_name(OperationType::Mutation),
        Some(&b"Mutation"[..]),
    );
    assert_eq!(document.root_operation_type_name(OperationType::Subscription), None);
}

#[test]
fn root_operation_type_from_schema_extension() {
    let document = parse("extend schema { subscription: Events } type Events { e: Int }");
    assert_eq!(
        document.root_operation_type_name(OperationType::Subscription),
        Some(&b"Events"[..]),
    );
}

// =============================================================================
// Type definitions
// =============================================================================

#[test]
fn object_type_definition() {
    let document = parse(
        "type User implements & Node & Entity @key(fields: \"id\") {
            id: ID!
            friends(first: Int = 10, after: String): [User!]! @deprecated
        }",
    );
    let object = first_root(&document, NodeKind::ObjectTypeDefinition);
    let definition = document.object_type_definitions[object as usize];
    assert_eq!(document.input.byte_slice(definition.name), b"User");

    let interfaces: Vec<String> = definition
        .implements_interfaces
        .iter(&document.types)
        .map(|interface| document.type_name_string(interface))
        .collect();
    assert_eq!(interfaces, vec!["Node", "Entity"]);
    assert_eq!(definition.directives.len(&document.directives), 1);

    let fields: Vec<_> = definition.fields.refs.iter(&document.field_definitions).collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(document.field_definition_name_string(fields[0]), "id");
    assert_eq!(document.type_string(document.field_definition_type(fields[0])), "ID!");

    let friends = document.field_definitions[fields[1] as usize];
    assert_eq!(document.type_string(friends.type_ref), "[User!]!");
    let arguments: Vec<_> = friends.arguments.refs.iter(&document.input_value_definitions).collect();
    assert_eq!(arguments.len(), 2);
    assert_eq!(document.input_value_definition_name_bytes(arguments[0]), b"first");
    assert!(document.input_value_definitions[arguments[0] as usize].default_value.is_some());
    assert!(document.input_value_definitions[arguments[1] as usize].default_value.is_none());
    assert_eq!(friends.directives.len(&document.directives), 1);
}

/// A type may be declared without a field list.
#[test]
fn object_type_without_fields() {
    let document = parse("type Empty");
    let definition = document.object_type_definitions[0];
    assert!(definition.fields.is_empty());
    assert!(definition.fields.open.is_unset());
}

#[test]
fn interface_type_definition() {
    let document = parse("interface Named implements Node { name: String }");
    let interface = first_root(&document, NodeKind::InterfaceTypeDefinition);
    let definition = document.interface_type_definitions[interface as usize];
    assert_eq!(definition.implements_interfaces.len(&document.types), 1);
    assert_eq!(definition.fields.refs.len(&document.field_definitions), 1);
}

#[test]
fn scalar_type_definition() {
    let document = parse("scalar DateTime @specifiedBy(url: \"https://example.com\")");
    let scalar = first_root(&document, NodeKind::ScalarTypeDefinition);
    let definition = document.scalar_type_definitions[scalar as usize];
    assert_eq!(document.input.byte_slice(definition.name), b"DateTime");
    assert_eq!(definition.directives.len(&document.directives), 1);
}

#[test]
fn union_type_definition_with_leading_pipe() {
    let document = parse("union SearchResult = | User | Post | Comment");
    let union = first_root(&document, NodeKind::UnionTypeDefinition);
    let definition = document.union_type_definitions[union as usize];
    assert!(definition.equals.is_some());
    let members: Vec<String> = definition
        .member_types
        .iter(&document.types)
        .map(|member| document.type_name_string(member))
        .collect();
    assert_eq!(members, vec!["User", "Post", "Comment"]);
}

#[test]
fn enum_type_definition() {
    let document = parse("enum Color { \"The red one\" RED GREEN @deprecated BLUE }");
    let enum_type = first_root(&document, NodeKind::EnumTypeDefinition);
    let definition = document.enum_type_definitions[enum_type as usize];
    let values: Vec<_> = definition.values.refs.iter(&document.enum_value_definitions).collect();
    let names: Vec<&[u8]> = values
        .iter()
        .map(|value| document.enum_value_definition_name_bytes(*value))
        .collect();
    assert_eq!(names, vec![&b"RED"[..], b"GREEN", b"BLUE"]);

    let red = Node::new(NodeKind::EnumValueDefinition, values[0]);
    let description = document.node_description(red);
    assert_eq!(
        description
            .map(|description| document.description_string(&description).map(|d| d.into_owned())),
        Some(Ok("The red one".to_string())),
    );
    assert_eq!(
        document.enum_value_definitions[values[1] as usize]
            .directives
            .len(&document.directives),
        1,
    );
}

#[test]
fn input_object_type_definition() {
    let document = parse("input Filter { term: String! = \"x\" limit: Int @deprecated }");
    let input = first_root(&document, NodeKind::InputObjectTypeDefinition);
    let definition = document.input_object_type_definitions[input as usize];
    let fields: Vec<_> = definition.fields.refs.iter(&document.input_value_definitions).collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(document.input_value_definition_name_bytes(fields[1]), b"limit");
}

#[test]
fn descriptions_on_definitions() {
    let document = parse(
        "\"\"\"\n  A user of the system.\n\"\"\"\ntype User {\n  \"The id\" id: ID\n}",
    );
    let user = document.root_nodes[0];
    let Some(description) = document.node_description(user) else {
        panic!("expected a description");
    };
    assert!(description.block_string);
    assert_eq!(
        document.description_string(&description).as_deref(),
        Ok("A user of the system."),
    );

    // The definition's position starts at its description.
    assert_eq!(document.node_position(user).line_start, 1);
    assert_eq!(document.object_type_definitions[0].type_keyword.line_start, 4);

    let field = document.object_type_definitions[0].fields.refs.first;
    let field_description = field.and_then(|field| document.field_definitions[field as usize].description);
    assert!(field_description.is_some_and(|description| !description.block_string));
}

// =============================================================================
// Directive definitions
// =============================================================================

#[test]
fn directive_definition() {
    let document = parse(
        "directive @cache(ttl: Int = 60) repeatable on | FIELD_DEFINITION | OBJECT | QUERY",
    );
    let directive = first_root(&document, NodeKind::DirectiveDefinition);
    let definition = document.directive_definitions[directive as usize];
    assert_eq!(document.input.byte_slice(definition.name), b"cache");
    assert!(definition.repeatable.is_some());
    assert_eq!(definition.arguments.refs.len(&document.input_value_definitions), 1);
    assert_eq!(
        definition.locations.iter().collect::<Vec<_>>(),
        vec![
            DirectiveLocation::Query,
            DirectiveLocation::Object,
            DirectiveLocation::FieldDefinition,
        ],
    );
    assert_eq!(document.directive_definition_by_name(b"cache"), Some(directive));
}

#[test]
fn non_repeatable_directive_definition() {
    let document = parse("directive @internal on FIELD");
    let definition = document.directive_definitions[0];
    assert!(definition.repeatable.is_none());
    assert!(definition.arguments.is_empty());
    assert!(definition.locations.contains(DirectiveLocation::Field));
    assert_eq!(definition.locations.len(), 1);
}

// =============================================================================
// Extensions
// =============================================================================

#[test]
fn type_extensions() {
    let document = parse(
        "extend type User @key(fields: \"id\")
        extend interface Node { id: ID! }
        extend scalar Url @specifiedBy(url: \"x\")
        extend union Result = Photo
        extend enum Color { PURPLE }
        extend input Filter { tag: String }
        extend schema @link",
    );
    let kinds: Vec<NodeKind> = document.root_nodes.iter().map(|node| node.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::ObjectTypeExtension,
            NodeKind::InterfaceTypeExtension,
            NodeKind::ScalarTypeExtension,
            NodeKind::UnionTypeExtension,
            NodeKind::EnumTypeExtension,
            NodeKind::InputObjectTypeExtension,
            NodeKind::SchemaExtension,
        ],
    );
    let names: Vec<String> = document
        .root_nodes
        .iter()
        .map(|node| document.node_name_string(*node))
        .collect();
    assert_eq!(names, vec!["User", "Node", "Url", "Result", "Color", "Filter", ""]);
    assert!(document.schema_extensions[0].definition.root_operation_types.is_empty());
}

/// An extension's position starts at `extend`.
#[test]
fn extension_position_includes_extend() {
    let document = parse("extend type User { name: String }");
    let node = document.root_nodes[0];
    let position = document.node_position(node);
    assert_eq!((position.line_start, position.char_start), (1, 1));
    assert_eq!(position.char_end, 34);
}

// =============================================================================
// Index
// =============================================================================

#[test]
fn index_records_definitions_and_extensions() {
    let document = parse(
        "extend type User { email: String }
        type User { id: ID }
        extend type User { name: String }
        directive @a on FIELD
        directive @a on QUERY
        scalar Date",
    );
    let nodes = document.index.type_nodes(b"User");
    assert_eq!(
        nodes,
        &[
            Node::new(NodeKind::ObjectTypeExtension, 0),
            Node::new(NodeKind::ObjectTypeDefinition, 0),
            Node::new(NodeKind::ObjectTypeExtension, 1),
        ],
    );
    assert_eq!(
        document.index_node(b"User"),
        Some(Node::new(NodeKind::ObjectTypeDefinition, 0)),
    );
    assert_eq!(document.index.directive_definition(b"a"), Some(0));
    assert_eq!(
        document.index.type_names().collect::<Vec<_>>(),
        vec![&b"User"[..], b"Date"],
    );
}

/// Field lookups search a type's extensions as well as its definition.
#[test]
fn field_definition_lookup_spans_extensions() {
    let document = parse(
        "type User { id: ID } extend type User { name: String }",
    );
    let user = Node::new(NodeKind::ObjectTypeDefinition, 0);
    let name = document.node_field_definition_by_name(user, b"name");
    assert_eq!(name.map(|name| document.field_definition_name_string(name)).as_deref(), Some("name"));
    assert!(document.node_field_definition_by_name(user, b"id").is_some());
    assert_eq!(document.node_field_definition_by_name(user, b"missing"), None);
}

/// Executable and type system definitions may share a document.
#[test]
fn mixed_document() {
    let document = parse("type Query { a: Int } { a } fragment F on Query { a }");
    let kinds: Vec<NodeKind> = document.root_nodes.iter().map(|node| node.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::ObjectTypeDefinition,
            NodeKind::OperationDefinition,
            NodeKind::FragmentDefinition,
        ],
    );
}
