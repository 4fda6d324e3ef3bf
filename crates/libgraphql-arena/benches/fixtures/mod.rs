use std::fmt::Write;

pub const SCHEMA: &str = include_str!("schema.graphql");
pub const QUERY: &str = include_str!("query.graphql");

/// Repeats the object types of [`SCHEMA`] under numbered names until the
/// document has `copies` of each.
pub fn large_schema(copies: usize) -> String {
    let mut out = String::with_capacity(copies * 400);
    for i in 0..copies {
        writeln!(out, "\"\"\"Generated type {i}.\"\"\"").unwrap();
        writeln!(out, "type Generated{i} implements Node @cacheControl(maxAge: {i}) {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        writeln!(out, "  name(locale: String = \"en\"): String").unwrap();
        writeln!(out, "  siblings(first: Int = 10, after: String): [Generated{i}!]!").unwrap();
        writeln!(out, "  state: IssueState @deprecated").unwrap();
        writeln!(out, "}}\n").unwrap();
        writeln!(out, "input GeneratedInput{i} {{ id: ID! tags: [String!] = [\"a\", \"b\"] }}\n")
            .unwrap();
    }
    out
}

/// A query whose selection sets nest `depth` levels deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 16);
    out.push_str("query Nested {");
    for _ in 0..depth {
        out.push_str(" child { id");
    }
    out.push_str(" name");
    for _ in 0..depth {
        out.push_str(" }");
    }
    out.push_str(" }");
    out
}

/// `count` small named operations in one document.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!) {{ node(id: $id) {{ id alias{i}: name }} }}")
            .unwrap();
    }
    out
}
