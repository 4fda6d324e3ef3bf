//! Differential tests against `graphql-parser`: both parsers must agree on
//! what a document contains, and `graphql-parser` must read our printed
//! output as the same document it reads from the original source.

use crate::Printer;
use crate::ast::Document;
use crate::ast::NodeKind;
use crate::tests::utils::parse;
use graphql_parser::query;
use graphql_parser::schema;

const QUERIES: &[&str] = &[
    "{ a }",
    "query { user(id: 1) { id name } }",
    "query Q($id: ID! = \"x\", $n: [Int!]) @live { me: user(id: $id) { ...F ... on Admin { level } } }",
    "mutation M { like(story: 123, note: \"\"\"block\"\"\") @a(b: [1, 2.5, ENUM, null, true]) { likes } }",
    "subscription S { events(filter: {kind: NEW, tags: [\"a\", \"b\"], nested: {x: -1}}) { id } }",
    "fragment F on User @d { friends(first: 10) { edges { node { id } } } }",
    "{ a } query B { b } fragment C on T { c } mutation D { d }",
    "{ ... @include(if: $flag) { a } ... { b } }",
];

const SCHEMAS: &[&str] = &[
    "schema { query: Query mutation: Mutation }",
    "\"The root\" type Query implements Node & Entity @key(fields: \"id\") { \
        \"Identifier\" id: ID! \
        posts(first: Int = 10, after: String): [Post!]! @deprecated(reason: \"no\") \
    }",
    "interface Node { id: ID! }",
    "scalar Date @specifiedBy(url: \"https://example.com\")",
    "union SearchResult = User | Post",
    "enum Color { RED GREEN @deprecated BLUE }",
    "input Filter { kind: Kind = NEW, tags: [String!] = [\"a\"] }",
    "directive @cached(ttl: Int = 60) on QUERY | FIELD | FRAGMENT_SPREAD",
    "extend type Query { extra: Int } extend enum Color { PURPLE } extend union SearchResult = Comment",
    "extend interface Node @a extend input Filter { limit: Int } extend scalar Date @b",
];

fn our_definition_names(document: &Document) -> Vec<Option<String>> {
    document
        .root_nodes
        .iter()
        .map(|&node| Some(document.node_name_string(node)).filter(|name| !name.is_empty()))
        .collect()
}

fn query_definition_names(document: &query::Document<'_, String>) -> Vec<Option<String>> {
    document
        .definitions
        .iter()
        .map(|definition| match definition {
            query::Definition::Operation(query::OperationDefinition::SelectionSet(_)) => None,
            query::Definition::Operation(query::OperationDefinition::Query(q)) => q.name.clone(),
            query::Definition::Operation(query::OperationDefinition::Mutation(m)) => {
                m.name.clone()
            },
            query::Definition::Operation(query::OperationDefinition::Subscription(s)) => {
                s.name.clone()
            },
            query::Definition::Fragment(fragment) => Some(fragment.name.clone()),
        })
        .collect()
}

fn schema_definition_names(document: &schema::Document<'_, String>) -> Vec<Option<String>> {
    fn type_definition_name(definition: &schema::TypeDefinition<'_, String>) -> String {
        match definition {
            schema::TypeDefinition::Scalar(t) => t.name.clone(),
            schema::TypeDefinition::Object(t) => t.name.clone(),
            schema::TypeDefinition::Interface(t) => t.name.clone(),
            schema::TypeDefinition::Union(t) => t.name.clone(),
            schema::TypeDefinition::Enum(t) => t.name.clone(),
            schema::TypeDefinition::InputObject(t) => t.name.clone(),
        }
    }
    fn type_extension_name(extension: &schema::TypeExtension<'_, String>) -> String {
        match extension {
            schema::TypeExtension::Scalar(t) => t.name.clone(),
            schema::TypeExtension::Object(t) => t.name.clone(),
            schema::TypeExtension::Interface(t) => t.name.clone(),
            schema::TypeExtension::Union(t) => t.name.clone(),
            schema::TypeExtension::Enum(t) => t.name.clone(),
            schema::TypeExtension::InputObject(t) => t.name.clone(),
        }
    }
    document
        .definitions
        .iter()
        .map(|definition| match definition {
            schema::Definition::SchemaDefinition(_) => None,
            schema::Definition::TypeDefinition(t) => Some(type_definition_name(t)),
            schema::Definition::TypeExtension(t) => Some(type_extension_name(t)),
            schema::Definition::DirectiveDefinition(d) => Some(d.name.clone()),
        })
        .collect()
}

fn parse_reference_query(source: &str) -> query::Document<'_, String> {
    match graphql_parser::parse_query::<String>(source) {
        Ok(document) => document,
        Err(error) => panic!("graphql-parser rejected `{source}`: {error}"),
    }
}

fn parse_reference_schema(source: &str) -> schema::Document<'_, String> {
    match graphql_parser::parse_schema::<String>(source) {
        Ok(document) => document,
        Err(error) => panic!("graphql-parser rejected `{source}`: {error}"),
    }
}

#[test]
fn executable_definitions_match() {
    for source in QUERIES {
        let ours = parse(source);
        let reference = parse_reference_query(source);
        assert_eq!(
            our_definition_names(&ours),
            query_definition_names(&reference),
            "source: {source}",
        );
        for (node, definition) in ours.root_nodes.iter().zip(&reference.definitions) {
            let is_fragment = matches!(definition, query::Definition::Fragment(_));
            assert_eq!(node.kind == NodeKind::FragmentDefinition, is_fragment);
        }
    }
}

#[test]
fn type_system_definitions_match() {
    for source in SCHEMAS {
        let ours = parse(source);
        let reference = parse_reference_schema(source);
        assert_eq!(
            our_definition_names(&ours),
            schema_definition_names(&reference),
            "source: {source}",
        );
        for (node, definition) in ours.root_nodes.iter().zip(&reference.definitions) {
            let is_extension = matches!(definition, schema::Definition::TypeExtension(_));
            assert_eq!(node.kind.is_type_extension(), is_extension, "source: {source}");
        }
    }
}

/// `graphql-parser` normalizes what it prints, so reading our output and
/// the original source must give it the same text.
#[test]
fn printed_queries_mean_the_same_to_graphql_parser() {
    for source in QUERIES {
        let expected = parse_reference_query(source).to_string();
        for mut printer in [Printer::new(), Printer::with_indent(2)] {
            let printed = printer.print(&parse(source));
            assert_eq!(parse_reference_query(&printed).to_string(), expected, "printed: {printed}");
        }
    }
}

#[test]
fn printed_schemas_mean_the_same_to_graphql_parser() {
    for source in SCHEMAS {
        let expected = parse_reference_schema(source).to_string();
        for mut printer in [Printer::new(), Printer::with_indent(2)] {
            let printed = printer.print(&parse(source));
            assert_eq!(parse_reference_schema(&printed).to_string(), expected, "printed: {printed}");
        }
    }
}

/// Inputs both parsers reject.
#[test]
fn both_reject_malformed_documents() {
    for source in ["{ a", "{ a(x: ) }", "{ a(x: 1 }", "query Q($v Int) { a }", "fragment F { a }"] {
        let mut document = Document::from_source(source);
        assert!(crate::Parser::new().parse(&mut document).is_err(), "source: {source}");
        assert!(graphql_parser::parse_query::<String>(source).is_err(), "source: {source}");
    }
}
