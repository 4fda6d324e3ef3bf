/// Contextual keywords of the GraphQL grammar.
///
/// The lexer emits all of these as [`Keyword::Ident`](crate::token::Keyword)
/// tokens; the parser classifies an identifier's literal with
/// [`IdentKeyword::from_bytes()`] wherever the grammar gives a keyword special
/// meaning. Everywhere else (field names, argument names, ...) they are
/// ordinary names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IdentKeyword {
    Directive,
    Enum,
    Extend,
    False,
    Fragment,
    Implements,
    Input,
    Interface,
    Mutation,
    Null,
    On,
    Query,
    Repeatable,
    Scalar,
    Schema,
    Subscription,
    True,
    Type,
    Union,
}

impl IdentKeyword {
    pub fn from_bytes(literal: &[u8]) -> Option<Self> {
        Some(match literal {
            b"directive" => IdentKeyword::Directive,
            b"enum" => IdentKeyword::Enum,
            b"extend" => IdentKeyword::Extend,
            b"false" => IdentKeyword::False,
            b"fragment" => IdentKeyword::Fragment,
            b"implements" => IdentKeyword::Implements,
            b"input" => IdentKeyword::Input,
            b"interface" => IdentKeyword::Interface,
            b"mutation" => IdentKeyword::Mutation,
            b"null" => IdentKeyword::Null,
            b"on" => IdentKeyword::On,
            b"query" => IdentKeyword::Query,
            b"repeatable" => IdentKeyword::Repeatable,
            b"scalar" => IdentKeyword::Scalar,
            b"schema" => IdentKeyword::Schema,
            b"subscription" => IdentKeyword::Subscription,
            b"true" => IdentKeyword::True,
            b"type" => IdentKeyword::Type,
            b"union" => IdentKeyword::Union,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentKeyword::Directive => "directive",
            IdentKeyword::Enum => "enum",
            IdentKeyword::Extend => "extend",
            IdentKeyword::False => "false",
            IdentKeyword::Fragment => "fragment",
            IdentKeyword::Implements => "implements",
            IdentKeyword::Input => "input",
            IdentKeyword::Interface => "interface",
            IdentKeyword::Mutation => "mutation",
            IdentKeyword::Null => "null",
            IdentKeyword::On => "on",
            IdentKeyword::Query => "query",
            IdentKeyword::Repeatable => "repeatable",
            IdentKeyword::Scalar => "scalar",
            IdentKeyword::Schema => "schema",
            IdentKeyword::Subscription => "subscription",
            IdentKeyword::True => "true",
            IdentKeyword::Type => "type",
            IdentKeyword::Union => "union",
        }
    }

    /// Returns `true` for the keywords that may follow a description at the
    /// start of a type system definition.
    pub fn starts_type_system_definition(&self) -> bool {
        matches!(
            self,
            IdentKeyword::Directive
                | IdentKeyword::Enum
                | IdentKeyword::Input
                | IdentKeyword::Interface
                | IdentKeyword::Scalar
                | IdentKeyword::Schema
                | IdentKeyword::Type
                | IdentKeyword::Union
        )
    }
}
