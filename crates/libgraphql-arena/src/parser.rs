//! A fail-fast recursive-descent GraphQL parser that fills a [`Document`]'s
//! tables directly from its [`Input`](crate::Input).
//!
//! The parser handles executable documents and type system documents (SDL),
//! including mixed documents. It never builds an intermediate tree: every
//! production appends its node to the matching table and links it into its
//! parent's sibling list.
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_arena::Parser;
//! use libgraphql_arena::ast::Document;
//!
//! let mut document = Document::from_source("query { posts(first: 100) { id } }");
//! let mut parser = Parser::new();
//! parser.parse(&mut document).unwrap();
//! assert_eq!(document.operation_definitions.len(), 1);
//! assert_eq!(document.field_name_bytes(0), b"posts");
//! ```
//!
//! Parsers and documents are meant to be pooled: `reset()` the document,
//! load new input and parse again, reusing all table capacity.

use crate::ErrorNote;
use crate::ExternalError;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::Position;
use crate::Report;
use crate::ast::Alias;
use crate::ast::Argument;
use crate::ast::DefaultValue;
use crate::ast::DelimitedList;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveList;
use crate::ast::DirectiveLocation;
use crate::ast::DirectiveLocations;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Extension;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ListValue;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::RefListBuilder;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionKind;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::TypeCondition;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::ast::VariableDefinition;
use crate::ast::VariableValue;
use crate::lexer::Lexer;
use crate::token::IdentKeyword;
use crate::token::Keyword;
use crate::token::Token;
use smallvec::SmallVec;

/// A reusable GraphQL parser.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    /// The deepest values, types and selection sets may nest.
    pub const MAX_DEPTH: usize = 64;

    pub fn new() -> Self {
        Self {
            lexer: Lexer::new(),
        }
    }

    /// Parses `document.input` as a complete GraphQL document, appending to
    /// the document's tables and root nodes.
    ///
    /// On error the document's contents are unspecified; `reset()` it before
    /// reuse.
    pub fn parse(&mut self, document: &mut Document) -> Result<(), ParseError> {
        self.lexer.reset();
        log::trace!("parsing document ({} bytes)", document.input.len());
        let result = DocumentParser::new(&mut self.lexer, document).parse_document();
        match &result {
            Ok(()) => log::trace!(
                "parsed document with {} definitions",
                document.root_nodes.len(),
            ),
            Err(error) => log::trace!("parse failed: {error}"),
        }
        result
    }

    /// Parses `document.input` as a single type reference (e.g. `[ID!]!`)
    /// and returns its ref into `document.types`.
    pub fn parse_type(&mut self, document: &mut Document) -> Result<Ref, ParseError> {
        self.lexer.reset();
        let mut parser = DocumentParser::new(&mut self.lexer, document);
        let type_ref = parser.parse_type()?;
        parser.expect(Keyword::Eof, "after type")?;
        Ok(type_ref)
    }

    /// Parses `document.input` as a single value and returns its ref into
    /// `document.values`.
    pub fn parse_value(&mut self, document: &mut Document) -> Result<Ref, ParseError> {
        self.lexer.reset();
        let mut parser = DocumentParser::new(&mut self.lexer, document);
        let value = parser.parse_value()?;
        parser.expect(Keyword::Eof, "after value")?;
        Ok(value)
    }
}

/// Parses `source` into a fresh [`Document`].
///
/// A parse error is reported as the report's only external error; the
/// document must then be discarded.
pub fn parse_graphql_document_string(source: &str) -> (Document, Report) {
    let mut document = Document::from_source(source);
    let report = parse_into(&mut document);
    (document, report)
}

/// Like [`parse_graphql_document_string()`] for raw bytes.
pub fn parse_graphql_document_bytes(source: &[u8]) -> (Document, Report) {
    let mut document = Document::new();
    document.input.reset_input_bytes(source);
    let report = parse_into(&mut document);
    (document, report)
}

fn parse_into(document: &mut Document) -> Report {
    let mut report = Report::new();
    if let Err(error) = Parser::new().parse(document) {
        report.add_external_error(ExternalError::from(&error));
    }
    report
}

/// The state of one parse: the lexer cursor, the document being filled and
/// the current nesting depth.
struct DocumentParser<'a> {
    lexer: &'a mut Lexer,
    document: &'a mut Document,
    depth: usize,
    last_position: Position,
}

impl<'a> DocumentParser<'a> {
    fn new(lexer: &'a mut Lexer, document: &'a mut Document) -> Self {
        Self {
            lexer,
            document,
            depth: 0,
            last_position: Position::default(),
        }
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn read(&mut self) -> Token {
        let token = self.lexer.read(&self.document.input);
        self.last_position = token.position;
        token
    }

    fn peek(&self) -> Keyword {
        self.lexer.peek(&self.document.input, true)
    }

    fn peek_token(&self) -> Token {
        self.lexer.peek_token(&self.document.input)
    }

    fn ident_keyword(&self, token: &Token) -> Option<IdentKeyword> {
        if token.keyword != Keyword::Ident {
            return None;
        }
        IdentKeyword::from_bytes(self.document.input.byte_slice(token.literal))
    }

    fn peek_ident_keyword(&self) -> Option<IdentKeyword> {
        self.ident_keyword(&self.peek_token())
    }

    fn span_from(&self, start: Position) -> Position {
        Position::span(start, self.last_position)
    }

    /// Reads the next token and requires it to be `keyword`.
    fn expect(&mut self, keyword: Keyword, context: &str) -> Result<Token, ParseError> {
        let token = self.read();
        if token.keyword == keyword {
            return Ok(token);
        }
        let what = if context.is_empty() {
            keyword.to_string()
        } else {
            format!("{keyword} {context}")
        };
        Err(self.unexpected_token(&token, &[keyword], &what))
    }

    fn expect_name(&mut self, context: &str) -> Result<Token, ParseError> {
        self.expect(Keyword::Ident, context)
    }

    /// Reads the next token and requires it to be the contextual keyword
    /// `keyword` (e.g. `on`).
    fn expect_ident_keyword(
        &mut self,
        keyword: IdentKeyword,
        context: &str,
    ) -> Result<Token, ParseError> {
        let token = self.read();
        if self.ident_keyword(&token) == Some(keyword) {
            return Ok(token);
        }
        let what = format!("`{}` {context}", keyword.as_str());
        Err(self.unexpected_token(&token, &[], &what))
    }

    /// Builds the error for `token` appearing where `what` was expected.
    fn unexpected_token(&self, token: &Token, expected: &[Keyword], what: &str) -> ParseError {
        let literal = self.document.input.byte_slice_string(token.literal);
        let found = match token.keyword {
            Keyword::Eof => "end of input".to_string(),
            Keyword::String => format!("string \"{literal}\""),
            Keyword::BlockString => "block string".to_string(),
            Keyword::Ident | Keyword::Integer | Keyword::Float | Keyword::Error => {
                format!("`{literal}`")
            },
            keyword => keyword.to_string(),
        };

        let mut notes = SmallVec::new();
        if let Some(lex_error) = token.error {
            notes.push(ErrorNote::general(lex_error.to_string()));
            if let Some(help) = lex_error.help() {
                notes.push(ErrorNote::help(help));
            }
        }

        ParseError::with_notes(
            format!("expected {what}, found {found}"),
            token.position,
            ParseErrorKind::UnexpectedToken {
                keyword: token.keyword,
                literal,
                expected: SmallVec::from_slice(expected),
            },
            notes,
        )
    }

    // =========================================================================
    // Recursion depth tracking
    // =========================================================================

    fn enter_recursion(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > Parser::MAX_DEPTH {
            let token = self.peek_token();
            return Err(ParseError::new(
                "maximum nesting depth exceeded",
                token.position,
                ParseErrorKind::NestingTooDeep {
                    max_depth: Parser::MAX_DEPTH,
                },
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // Document
    // =========================================================================

    fn parse_document(&mut self) -> Result<(), ParseError> {
        loop {
            let token = self.peek_token();
            let node = match token.keyword {
                Keyword::Eof => return Ok(()),
                Keyword::CurlyBraceOpen => Node::new(
                    NodeKind::OperationDefinition,
                    self.parse_operation_definition()?,
                ),
                Keyword::String | Keyword::BlockString => {
                    let description = self.parse_description();
                    self.parse_type_system_definition(description)?
                },
                Keyword::Ident => match self.ident_keyword(&token) {
                    Some(
                        IdentKeyword::Query
                        | IdentKeyword::Mutation
                        | IdentKeyword::Subscription,
                    ) => Node::new(
                        NodeKind::OperationDefinition,
                        self.parse_operation_definition()?,
                    ),
                    Some(IdentKeyword::Fragment) => Node::new(
                        NodeKind::FragmentDefinition,
                        self.parse_fragment_definition()?,
                    ),
                    Some(IdentKeyword::Extend) => self.parse_extension()?,
                    Some(keyword) if keyword.starts_type_system_definition() => {
                        self.parse_type_system_definition(None)?
                    },
                    _ => {
                        let token = self.read();
                        return Err(self.unexpected_definition(&token));
                    },
                },
                _ => {
                    let token = self.read();
                    return Err(self.unexpected_definition(&token));
                },
            };
            self.document.add_root_node(node);
        }
    }

    fn unexpected_definition(&self, token: &Token) -> ParseError {
        let mut error = self.unexpected_token(
            token,
            &[
                Keyword::CurlyBraceOpen,
                Keyword::Ident,
                Keyword::String,
                Keyword::BlockString,
            ],
            "a definition",
        );
        error.add_help(
            "a document consists of operations, fragments and type system \
            definitions or extensions",
        );
        error.add_spec("https://spec.graphql.org/October2021/#Document");
        error
    }

    fn parse_description(&mut self) -> Option<Description> {
        match self.peek() {
            Keyword::String | Keyword::BlockString => {
                let token = self.read();
                Some(Description {
                    content: token.literal,
                    block_string: token.keyword == Keyword::BlockString,
                    position: token.position,
                })
            },
            _ => None,
        }
    }

    /// Parses the type system definition starting at the next token, after
    /// an optional (already parsed) description, and indexes it.
    fn parse_type_system_definition(
        &mut self,
        description: Option<Description>,
    ) -> Result<Node, ParseError> {
        let node = match self.peek_ident_keyword() {
            Some(IdentKeyword::Schema) => {
                let schema = self.parse_schema_definition(description, true)?;
                let r = self.document.put_schema_definition(schema);
                return Ok(Node::new(NodeKind::SchemaDefinition, r));
            },
            Some(IdentKeyword::Directive) => {
                let definition = self.parse_directive_definition(description)?;
                let name = definition.name;
                let r = self.document.put_directive_definition(definition);
                self.document.index.add_directive_definition(
                    self.document.input.byte_slice(name),
                    r,
                );
                return Ok(Node::new(NodeKind::DirectiveDefinition, r));
            },
            Some(IdentKeyword::Type) => {
                let definition = self.parse_object_type_definition(description)?;
                let r = self.document.put_object_type_definition(definition);
                Node::new(NodeKind::ObjectTypeDefinition, r)
            },
            Some(IdentKeyword::Interface) => {
                let definition = self.parse_interface_type_definition(description)?;
                let r = self.document.put_interface_type_definition(definition);
                Node::new(NodeKind::InterfaceTypeDefinition, r)
            },
            Some(IdentKeyword::Scalar) => {
                let definition = self.parse_scalar_type_definition(description)?;
                let r = self.document.put_scalar_type_definition(definition);
                Node::new(NodeKind::ScalarTypeDefinition, r)
            },
            Some(IdentKeyword::Union) => {
                let definition = self.parse_union_type_definition(description)?;
                let r = self.document.put_union_type_definition(definition);
                Node::new(NodeKind::UnionTypeDefinition, r)
            },
            Some(IdentKeyword::Enum) => {
                let definition = self.parse_enum_type_definition(description)?;
                let r = self.document.put_enum_type_definition(definition);
                Node::new(NodeKind::EnumTypeDefinition, r)
            },
            Some(IdentKeyword::Input) => {
                let definition = self.parse_input_object_type_definition(description)?;
                let r = self.document.put_input_object_type_definition(definition);
                Node::new(NodeKind::InputObjectTypeDefinition, r)
            },
            _ => {
                let token = self.read();
                let mut error = self.unexpected_token(
                    &token,
                    &[Keyword::Ident],
                    "a type system definition after description",
                );
                error.add_note("only type system definitions may have descriptions");
                return Err(error);
            },
        };
        self.index_type_node(node);
        Ok(node)
    }

    fn index_type_node(&mut self, node: Node) {
        let name = self.document.node_name_bytes(node).to_vec();
        self.document.index.add_type_node(&name, node);
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_operation_definition(&mut self) -> Result<Ref, ParseError> {
        if self.peek() == Keyword::CurlyBraceOpen {
            let start = self.peek_token().position;
            let selection_set = self.parse_selection_set()?;
            return Ok(self.document.put_operation_definition(OperationDefinition {
                operation_type: OperationType::Query,
                operation_type_position: None,
                name: None,
                variable_definitions: DelimitedList::default(),
                directives: DirectiveList::default(),
                selection_set,
                position: self.span_from(start),
            }));
        }

        let token = self.read();
        let Some(operation_type) = self
            .ident_keyword(&token)
            .and_then(OperationType::from_ident_keyword)
        else {
            return Err(self.unexpected_token(
                &token,
                &[Keyword::Ident],
                "`query`, `mutation` or `subscription`",
            ));
        };

        let name = (self.peek() == Keyword::Ident).then(|| self.read().literal);
        let variable_definitions = if self.peek() == Keyword::ParenOpen {
            self.parse_variable_definitions()?
        } else {
            DelimitedList::default()
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(self.document.put_operation_definition(OperationDefinition {
            operation_type,
            operation_type_position: Some(token.position),
            name,
            variable_definitions,
            directives,
            selection_set,
            position: self.span_from(token.position),
        }))
    }

    fn parse_variable_definitions(&mut self) -> Result<DelimitedList, ParseError> {
        let open = self.expect(Keyword::ParenOpen, "")?.position;
        let mut refs = RefListBuilder::new();
        loop {
            if self.peek() == Keyword::ParenClose && !refs.is_empty() {
                break;
            }
            let variable_definition = self.parse_variable_definition()?;
            refs.push(&mut self.document.variable_definitions, variable_definition);
        }
        let close = self.read().position;
        Ok(DelimitedList {
            open,
            close,
            refs: refs.finish(),
        })
    }

    fn parse_variable_definition(&mut self) -> Result<Ref, ParseError> {
        let dollar = self.expect(Keyword::Dollar, "to start a variable definition")?;
        let name = self.expect_name("after `$`")?;
        let colon = self.expect(Keyword::Colon, "after variable name")?;
        let type_ref = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        let directives = self.parse_directives()?;
        Ok(self.document.put_variable_definition(VariableDefinition {
            dollar: dollar.position,
            name: name.literal,
            colon: colon.position,
            type_ref,
            default_value,
            directives,
            position: self.span_from(dollar.position),
            next: None,
        }))
    }

    fn parse_default_value(&mut self) -> Result<Option<DefaultValue>, ParseError> {
        if self.peek() != Keyword::Equals {
            return Ok(None);
        }
        let equals = self.read().position;
        let value = self.parse_value()?;
        Ok(Some(DefaultValue { equals, value }))
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<Ref, ParseError> {
        self.enter_recursion()?;
        let lbrace = self.expect(Keyword::CurlyBraceOpen, "to start a selection set")?;
        let mut selections = RefListBuilder::new();
        loop {
            if self.peek() == Keyword::CurlyBraceClose && !selections.is_empty() {
                break;
            }
            let selection = self.parse_selection()?;
            let r = self.document.put_selection(selection);
            selections.push(&mut self.document.selections, r);
        }
        let rbrace = self.read();
        self.exit_recursion();
        Ok(self.document.put_selection_set(SelectionSet {
            lbrace: lbrace.position,
            rbrace: rbrace.position,
            selections: selections.finish(),
        }))
    }

    fn parse_selection(&mut self) -> Result<Selection, ParseError> {
        let (kind, node_ref) = match self.peek() {
            Keyword::Ident => (SelectionKind::Field, self.parse_field()?),
            Keyword::Ellipsis => {
                let spread = self.read();
                let next = self.peek_token();
                let is_inline_fragment = match next.keyword {
                    Keyword::Ident => self.ident_keyword(&next) == Some(IdentKeyword::On),
                    _ => true,
                };
                if is_inline_fragment {
                    (
                        SelectionKind::InlineFragment,
                        self.parse_inline_fragment(spread.position)?,
                    )
                } else {
                    (
                        SelectionKind::FragmentSpread,
                        self.parse_fragment_spread(spread.position)?,
                    )
                }
            },
            _ => {
                let token = self.read();
                return Err(self.unexpected_token(
                    &token,
                    &[Keyword::Ident, Keyword::Ellipsis],
                    "a field, fragment spread or inline fragment",
                ));
            },
        };
        Ok(Selection {
            kind,
            node_ref,
            next: None,
        })
    }

    fn parse_field(&mut self) -> Result<Ref, ParseError> {
        let first = self.expect_name("")?;
        let (alias, name) = if self.peek() == Keyword::Colon {
            let colon = self.read();
            let name = self.expect_name("after alias")?;
            let alias = Alias {
                name: first.literal,
                colon: colon.position,
            };
            (Some(alias), name)
        } else {
            (None, first)
        };
        let arguments = self.parse_optional_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek() == Keyword::CurlyBraceOpen {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(self.document.put_field(Field {
            alias,
            name: name.literal,
            arguments,
            directives,
            selection_set,
            position: self.span_from(first.position),
        }))
    }

    fn parse_inline_fragment(&mut self, spread: Position) -> Result<Ref, ParseError> {
        let type_condition = if self.peek_ident_keyword() == Some(IdentKeyword::On) {
            Some(self.parse_type_condition()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(self.document.put_inline_fragment(InlineFragment {
            spread,
            type_condition,
            directives,
            selection_set,
            position: self.span_from(spread),
        }))
    }

    fn parse_fragment_spread(&mut self, spread: Position) -> Result<Ref, ParseError> {
        let name = self.expect_name("after `...`")?;
        let directives = self.parse_directives()?;
        Ok(self.document.put_fragment_spread(FragmentSpread {
            spread,
            fragment_name: name.literal,
            directives,
            position: self.span_from(spread),
        }))
    }

    fn parse_type_condition(&mut self) -> Result<TypeCondition, ParseError> {
        let on = self.expect_ident_keyword(IdentKeyword::On, "to start a type condition")?;
        let named_type = self.parse_named_type("after `on`")?;
        Ok(TypeCondition {
            on: on.position,
            named_type,
        })
    }

    fn parse_fragment_definition(&mut self) -> Result<Ref, ParseError> {
        let fragment_keyword = self.read();
        let name = self.expect_name("after `fragment`")?;
        if self.ident_keyword(&name) == Some(IdentKeyword::On) {
            let mut error = self.unexpected_token(&name, &[Keyword::Ident], "a fragment name");
            error.add_note("a fragment can't be named `on`");
            return Err(error);
        }
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(self.document.put_fragment_definition(FragmentDefinition {
            fragment_keyword: fragment_keyword.position,
            name: name.literal,
            type_condition,
            directives,
            selection_set,
            position: self.span_from(fragment_keyword.position),
        }))
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    fn parse_optional_arguments(&mut self) -> Result<DelimitedList, ParseError> {
        if self.peek() != Keyword::ParenOpen {
            return Ok(DelimitedList::default());
        }
        let open = self.read().position;
        let mut refs = RefListBuilder::new();
        loop {
            if self.peek() == Keyword::ParenClose && !refs.is_empty() {
                break;
            }
            let argument = self.parse_argument()?;
            refs.push(&mut self.document.arguments, argument);
        }
        let close = self.read().position;
        Ok(DelimitedList {
            open,
            close,
            refs: refs.finish(),
        })
    }

    fn parse_argument(&mut self) -> Result<Ref, ParseError> {
        let name = self.expect_name("")?;
        let colon = self.expect(Keyword::Colon, "after argument name")?;
        let value = self.parse_value()?;
        Ok(self.document.put_argument(Argument {
            name: name.literal,
            colon: colon.position,
            value,
            position: self.span_from(name.position),
            next: None,
        }))
    }

    fn parse_directives(&mut self) -> Result<RefList, ParseError> {
        let mut directives = RefListBuilder::new();
        while self.peek() == Keyword::At {
            let directive = self.parse_directive()?;
            directives.push(&mut self.document.directives, directive);
        }
        Ok(directives.finish())
    }

    fn parse_directive(&mut self) -> Result<Ref, ParseError> {
        let at = self.read();
        let name = self.expect_name("after `@`")?;
        let arguments = self.parse_optional_arguments()?;
        Ok(self.document.put_directive(Directive {
            at: at.position,
            name: name.literal,
            arguments,
            position: self.span_from(at.position),
            next: None,
        }))
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn parse_type(&mut self) -> Result<Ref, ParseError> {
        self.enter_recursion()?;
        let token = self.read();
        let mut type_ref = match token.keyword {
            Keyword::Ident => self.document.put_type(Type::named(token.literal, token.position)),
            Keyword::SquareBracketOpen => {
                let of_type = self.parse_type()?;
                let close = self.expect(Keyword::SquareBracketClose, "to close list type")?;
                self.document
                    .put_type(Type::list(of_type, token.position, close.position))
            },
            _ => {
                return Err(self.unexpected_token(
                    &token,
                    &[Keyword::Ident, Keyword::SquareBracketOpen],
                    "a type",
                ));
            },
        };
        if self.peek() == Keyword::Bang {
            let bang = self.read();
            let inner_position = self.document.types[type_ref as usize].position;
            type_ref = self.document.put_type(Type::non_null(
                type_ref,
                inner_position,
                bang.position,
            ));
            if self.peek() == Keyword::Bang {
                let token = self.read();
                let mut error = self.unexpected_token(&token, &[], "a single `!`");
                error.add_note("a non-null type can't be wrapped in non-null again");
                return Err(error);
            }
        }
        self.exit_recursion();
        Ok(type_ref)
    }

    fn parse_named_type(&mut self, context: &str) -> Result<Ref, ParseError> {
        let name = self.expect_name(context)?;
        Ok(self.document.put_type(Type::named(name.literal, name.position)))
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self) -> Result<Ref, ParseError> {
        let token = self.peek_token();
        let (kind, value_ref) = match token.keyword {
            Keyword::Dollar => (ValueKind::Variable, self.parse_variable_value()?),
            Keyword::Integer | Keyword::Float | Keyword::Minus => self.parse_number_value()?,
            Keyword::String | Keyword::BlockString => {
                let token = self.read();
                let r = self.document.put_string_value(StringValue {
                    content: token.literal,
                    block_string: token.keyword == Keyword::BlockString,
                    position: token.position,
                });
                (ValueKind::String, r)
            },
            Keyword::SquareBracketOpen => (ValueKind::List, self.parse_list_value()?),
            Keyword::CurlyBraceOpen => (ValueKind::Object, self.parse_object_value()?),
            Keyword::Ident => {
                let token = self.read();
                match self.ident_keyword(&token) {
                    Some(IdentKeyword::True) => (ValueKind::Boolean, 1),
                    Some(IdentKeyword::False) => (ValueKind::Boolean, 0),
                    Some(IdentKeyword::Null) => (ValueKind::Null, 0),
                    _ => {
                        let r = self.document.put_enum_value(EnumValue {
                            name: token.literal,
                            position: token.position,
                        });
                        (ValueKind::Enum, r)
                    },
                }
            },
            _ => {
                let token = self.read();
                return Err(self.unexpected_token(&token, &VALUE_START_KEYWORDS, "a value"));
            },
        };
        Ok(self.document.put_value(Value {
            kind,
            value_ref,
            position: self.span_from(token.position),
            next: None,
        }))
    }

    fn parse_variable_value(&mut self) -> Result<Ref, ParseError> {
        let dollar = self.read();
        let name = self.expect_name("after `$`")?;
        Ok(self.document.put_variable_value(VariableValue {
            dollar: dollar.position,
            name: name.literal,
            position: self.span_from(dollar.position),
        }))
    }

    /// Parses `123`, `1.5`, `-123` or `-1.5`. The sign must directly precede
    /// the number.
    fn parse_number_value(&mut self) -> Result<(ValueKind, Ref), ParseError> {
        let mut negative_sign = None;
        if self.peek() == Keyword::Minus {
            let minus = self.read();
            if self.lexer.peek(&self.document.input, false).is_insignificant() {
                let token = self.read();
                let mut error = self.unexpected_token(
                    &token,
                    &[Keyword::Integer, Keyword::Float],
                    "a number directly after `-`",
                );
                error.add_note("whitespace is not allowed between `-` and the number");
                return Err(error);
            }
            negative_sign = Some(minus.position);
        }

        let token = self.read();
        let start = negative_sign.unwrap_or(token.position);
        let position = Position::span(start, token.position);
        match token.keyword {
            Keyword::Integer => {
                let r = self.document.put_int_value(IntValue {
                    negative_sign,
                    raw: token.literal,
                    position,
                });
                Ok((ValueKind::Int, r))
            },
            Keyword::Float => {
                let r = self.document.put_float_value(FloatValue {
                    negative_sign,
                    raw: token.literal,
                    position,
                });
                Ok((ValueKind::Float, r))
            },
            _ => Err(self.unexpected_token(
                &token,
                &[Keyword::Integer, Keyword::Float],
                "a number after `-`",
            )),
        }
    }

    fn parse_list_value(&mut self) -> Result<Ref, ParseError> {
        self.enter_recursion()?;
        let lbrack = self.read();
        let mut values = RefListBuilder::new();
        while self.peek() != Keyword::SquareBracketClose {
            if self.peek() == Keyword::Eof {
                let token = self.read();
                return Err(self.unexpected_token(
                    &token,
                    &[Keyword::SquareBracketClose],
                    "`]` to close list value",
                ));
            }
            let value = self.parse_value()?;
            values.push(&mut self.document.values, value);
        }
        let rbrack = self.read();
        self.exit_recursion();
        Ok(self.document.put_list_value(ListValue {
            lbrack: lbrack.position,
            rbrack: rbrack.position,
            values: values.finish(),
        }))
    }

    fn parse_object_value(&mut self) -> Result<Ref, ParseError> {
        self.enter_recursion()?;
        let lbrace = self.read();
        let mut fields = RefListBuilder::new();
        while self.peek() != Keyword::CurlyBraceClose {
            let name = self.expect_name("or `}` in object value")?;
            let colon = self.expect(Keyword::Colon, "after object field name")?;
            let value = self.parse_value()?;
            let field = self.document.put_object_field(ObjectField {
                name: name.literal,
                colon: colon.position,
                value,
                position: self.span_from(name.position),
                next: None,
            });
            fields.push(&mut self.document.object_fields, field);
        }
        let rbrace = self.read();
        self.exit_recursion();
        Ok(self.document.put_object_value(ObjectValue {
            lbrace: lbrace.position,
            rbrace: rbrace.position,
            fields: fields.finish(),
        }))
    }

    // =========================================================================
    // Schema definitions
    // =========================================================================

    /// Parses `schema @directives { ... }`. The operation type list is
    /// optional only in extensions.
    fn parse_schema_definition(
        &mut self,
        description: Option<Description>,
        body_required: bool,
    ) -> Result<SchemaDefinition, ParseError> {
        let schema_keyword = self.read();
        let directives = self.parse_directives()?;
        let root_operation_types = if body_required || self.peek() == Keyword::CurlyBraceOpen {
            self.parse_root_operation_type_definitions()?
        } else {
            DelimitedList::default()
        };
        Ok(SchemaDefinition {
            description,
            schema_keyword: schema_keyword.position,
            directives,
            root_operation_types,
            position: self.span_from(description.map_or(schema_keyword.position, |d| d.position)),
        })
    }

    fn parse_root_operation_type_definitions(&mut self) -> Result<DelimitedList, ParseError> {
        let open = self
            .expect(Keyword::CurlyBraceOpen, "to start the schema definition body")?
            .position;
        let mut refs = RefListBuilder::new();
        loop {
            if self.peek() == Keyword::CurlyBraceClose && !refs.is_empty() {
                break;
            }
            let token = self.read();
            let Some(operation_type) = self
                .ident_keyword(&token)
                .and_then(OperationType::from_ident_keyword)
            else {
                return Err(self.unexpected_token(
                    &token,
                    &[Keyword::Ident],
                    "`query`, `mutation` or `subscription`",
                ));
            };
            let colon = self.expect(Keyword::Colon, "after operation type")?;
            let named_type = self.parse_named_type("after `:`")?;
            let r = self
                .document
                .put_root_operation_type_definition(RootOperationTypeDefinition {
                    operation_type,
                    operation_type_position: token.position,
                    colon: colon.position,
                    named_type,
                    position: self.span_from(token.position),
                    next: None,
                });
            refs.push(&mut self.document.root_operation_type_definitions, r);
        }
        let close = self.read().position;
        Ok(DelimitedList {
            open,
            close,
            refs: refs.finish(),
        })
    }

    // =========================================================================
    // Type definitions
    // =========================================================================

    fn start_position(description: Option<Description>, keyword: &Token) -> Position {
        description.map_or(keyword.position, |description| description.position)
    }

    fn parse_object_type_definition(
        &mut self,
        description: Option<Description>,
    ) -> Result<ObjectTypeDefinition, ParseError> {
        let keyword = self.read();
        let name = self.expect_name("after `type`")?;
        let implements_interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_optional_fields_definition()?;
        Ok(ObjectTypeDefinition {
            description,
            type_keyword: keyword.position,
            name: name.literal,
            implements_interfaces,
            directives,
            fields,
            position: self.span_from(Self::start_position(description, &keyword)),
        })
    }

    fn parse_interface_type_definition(
        &mut self,
        description: Option<Description>,
    ) -> Result<InterfaceTypeDefinition, ParseError> {
        let keyword = self.read();
        let name = self.expect_name("after `interface`")?;
        let implements_interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_optional_fields_definition()?;
        Ok(InterfaceTypeDefinition {
            description,
            interface_keyword: keyword.position,
            name: name.literal,
            implements_interfaces,
            directives,
            fields,
            position: self.span_from(Self::start_position(description, &keyword)),
        })
    }

    fn parse_scalar_type_definition(
        &mut self,
        description: Option<Description>,
    ) -> Result<ScalarTypeDefinition, ParseError> {
        let keyword = self.read();
        let name = self.expect_name("after `scalar`")?;
        let directives = self.parse_directives()?;
        Ok(ScalarTypeDefinition {
            description,
            scalar_keyword: keyword.position,
            name: name.literal,
            directives,
            position: self.span_from(Self::start_position(description, &keyword)),
        })
    }

    fn parse_union_type_definition(
        &mut self,
        description: Option<Description>,
    ) -> Result<UnionTypeDefinition, ParseError> {
        let keyword = self.read();
        let name = self.expect_name("after `union`")?;
        let directives = self.parse_directives()?;
        let mut equals = None;
        let mut member_types = RefListBuilder::new();
        if self.peek() == Keyword::Equals {
            equals = Some(self.read().position);
            if self.peek() == Keyword::Pipe {
                self.read();
            }
            loop {
                let member = self.parse_named_type("as union member")?;
                member_types.push(&mut self.document.types, member);
                if self.peek() != Keyword::Pipe {
                    break;
                }
                self.read();
            }
        }
        Ok(UnionTypeDefinition {
            description,
            union_keyword: keyword.position,
            name: name.literal,
            directives,
            equals,
            member_types: member_types.finish(),
            position: self.span_from(Self::start_position(description, &keyword)),
        })
    }

    fn parse_enum_type_definition(
        &mut self,
        description: Option<Description>,
    ) -> Result<EnumTypeDefinition, ParseError> {
        let keyword = self.read();
        let name = self.expect_name("after `enum`")?;
        let directives = self.parse_directives()?;
        let values = if self.peek() == Keyword::CurlyBraceOpen {
            let open = self.read().position;
            let mut refs = RefListBuilder::new();
            loop {
                if self.peek() == Keyword::CurlyBraceClose && !refs.is_empty() {
                    break;
                }
                let value = self.parse_enum_value_definition()?;
                refs.push(&mut self.document.enum_value_definitions, value);
            }
            let close = self.read().position;
            DelimitedList {
                open,
                close,
                refs: refs.finish(),
            }
        } else {
            DelimitedList::default()
        };
        Ok(EnumTypeDefinition {
            description,
            enum_keyword: keyword.position,
            name: name.literal,
            directives,
            values,
            position: self.span_from(Self::start_position(description, &keyword)),
        })
    }

    fn parse_enum_value_definition(&mut self) -> Result<Ref, ParseError> {
        let description = self.parse_description();
        let name = self.expect_name("as enum value")?;
        if let Some(
            keyword @ (IdentKeyword::True | IdentKeyword::False | IdentKeyword::Null),
        ) = self.ident_keyword(&name)
        {
            let mut error = self.unexpected_token(&name, &[Keyword::Ident], "an enum value");
            error.add_note(format!("`{}` can't be used as an enum value", keyword.as_str()));
            return Err(error);
        }
        let directives = self.parse_directives()?;
        Ok(self.document.put_enum_value_definition(EnumValueDefinition {
            description,
            name: name.literal,
            directives,
            position: self.span_from(description.map_or(name.position, |d| d.position)),
            next: None,
        }))
    }

    fn parse_input_object_type_definition(
        &mut self,
        description: Option<Description>,
    ) -> Result<InputObjectTypeDefinition, ParseError> {
        let keyword = self.read();
        let name = self.expect_name("after `input`")?;
        let directives = self.parse_directives()?;
        let fields = if self.peek() == Keyword::CurlyBraceOpen {
            self.parse_input_value_definitions(Keyword::CurlyBraceOpen, Keyword::CurlyBraceClose)?
        } else {
            DelimitedList::default()
        };
        Ok(InputObjectTypeDefinition {
            description,
            input_keyword: keyword.position,
            name: name.literal,
            directives,
            fields,
            position: self.span_from(Self::start_position(description, &keyword)),
        })
    }

    /// Parses `implements A & B`, allowing a leading `&`.
    fn parse_implements_interfaces(&mut self) -> Result<RefList, ParseError> {
        let mut interfaces = RefListBuilder::new();
        if self.peek_ident_keyword() != Some(IdentKeyword::Implements) {
            return Ok(interfaces.finish());
        }
        self.read();
        if self.peek() == Keyword::Ampersand {
            self.read();
        }
        loop {
            let interface = self.parse_named_type("as implemented interface")?;
            interfaces.push(&mut self.document.types, interface);
            if self.peek() != Keyword::Ampersand {
                break;
            }
            self.read();
        }
        Ok(interfaces.finish())
    }

    fn parse_optional_fields_definition(&mut self) -> Result<DelimitedList, ParseError> {
        if self.peek() != Keyword::CurlyBraceOpen {
            return Ok(DelimitedList::default());
        }
        let open = self.read().position;
        let mut refs = RefListBuilder::new();
        loop {
            if self.peek() == Keyword::CurlyBraceClose && !refs.is_empty() {
                break;
            }
            let field = self.parse_field_definition()?;
            refs.push(&mut self.document.field_definitions, field);
        }
        let close = self.read().position;
        Ok(DelimitedList {
            open,
            close,
            refs: refs.finish(),
        })
    }

    fn parse_field_definition(&mut self) -> Result<Ref, ParseError> {
        let description = self.parse_description();
        let name = self.expect_name("as field definition name")?;
        let arguments = if self.peek() == Keyword::ParenOpen {
            self.parse_input_value_definitions(Keyword::ParenOpen, Keyword::ParenClose)?
        } else {
            DelimitedList::default()
        };
        let colon = self.expect(Keyword::Colon, "after field name")?;
        let type_ref = self.parse_type()?;
        let directives = self.parse_directives()?;
        Ok(self.document.put_field_definition(FieldDefinition {
            description,
            name: name.literal,
            arguments,
            colon: colon.position,
            type_ref,
            directives,
            position: self.span_from(description.map_or(name.position, |d| d.position)),
            next: None,
        }))
    }

    /// Parses `( ... )` argument definitions or `{ ... }` input fields.
    fn parse_input_value_definitions(
        &mut self,
        open_keyword: Keyword,
        close_keyword: Keyword,
    ) -> Result<DelimitedList, ParseError> {
        let open = self.expect(open_keyword, "")?.position;
        let mut refs = RefListBuilder::new();
        loop {
            if self.peek() == close_keyword && !refs.is_empty() {
                break;
            }
            let input_value = self.parse_input_value_definition()?;
            refs.push(&mut self.document.input_value_definitions, input_value);
        }
        let close = self.read().position;
        Ok(DelimitedList {
            open,
            close,
            refs: refs.finish(),
        })
    }

    fn parse_input_value_definition(&mut self) -> Result<Ref, ParseError> {
        let description = self.parse_description();
        let name = self.expect_name("as input value name")?;
        let colon = self.expect(Keyword::Colon, "after input value name")?;
        let type_ref = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        let directives = self.parse_directives()?;
        Ok(self.document.put_input_value_definition(InputValueDefinition {
            description,
            name: name.literal,
            colon: colon.position,
            type_ref,
            default_value,
            directives,
            position: self.span_from(description.map_or(name.position, |d| d.position)),
            next: None,
        }))
    }

    // =========================================================================
    // Directive definitions
    // =========================================================================

    fn parse_directive_definition(
        &mut self,
        description: Option<Description>,
    ) -> Result<DirectiveDefinition, ParseError> {
        let keyword = self.read();
        let at = self.expect(Keyword::At, "after `directive`")?;
        let name = self.expect_name("after `@`")?;
        let arguments = if self.peek() == Keyword::ParenOpen {
            self.parse_input_value_definitions(Keyword::ParenOpen, Keyword::ParenClose)?
        } else {
            DelimitedList::default()
        };
        let repeatable = if self.peek_ident_keyword() == Some(IdentKeyword::Repeatable) {
            Some(self.read().position)
        } else {
            None
        };
        let on = self.expect_ident_keyword(IdentKeyword::On, "before directive locations")?;
        let locations = self.parse_directive_locations()?;
        Ok(DirectiveDefinition {
            description,
            directive_keyword: keyword.position,
            at: at.position,
            name: name.literal,
            arguments,
            repeatable,
            on: on.position,
            locations,
            position: self.span_from(Self::start_position(description, &keyword)),
        })
    }

    /// Parses `FIELD | OBJECT | ...` (leading `|` allowed) into a bitmask.
    fn parse_directive_locations(&mut self) -> Result<DirectiveLocations, ParseError> {
        if self.peek() == Keyword::Pipe {
            self.read();
        }
        let mut locations = DirectiveLocations::new();
        loop {
            let name = self.expect_name("as directive location")?;
            let raw = self.document.input.byte_slice(name.literal);
            if locations.set_from_raw(raw).is_none() {
                let name_string = self.document.input.byte_slice_string(name.literal);
                let mut error = ParseError::new(
                    format!("unknown directive location `{name_string}`"),
                    name.position,
                    ParseErrorKind::UnknownDirectiveLocation {
                        name: name_string.clone(),
                    },
                );
                if let Some(suggestion) = suggest_directive_location(&name_string) {
                    error.add_help(format!("did you mean `{suggestion}`?"));
                }
                error.add_spec("https://spec.graphql.org/October2021/#DirectiveLocations");
                return Err(error);
            }
            if self.peek() != Keyword::Pipe {
                break;
            }
            self.read();
        }
        Ok(locations)
    }

    // =========================================================================
    // Extensions
    // =========================================================================

    fn parse_extension(&mut self) -> Result<Node, ParseError> {
        let extend = self.read().position;
        let node = match self.peek_ident_keyword() {
            Some(IdentKeyword::Schema) => {
                let definition = self.parse_schema_definition(None, false)?;
                if definition.directives.is_empty() && definition.root_operation_types.is_empty() {
                    return Err(self.empty_extension("`{` or a directive in schema extension"));
                }
                let r = self
                    .document
                    .put_schema_extension(Extension::new(extend, definition));
                return Ok(Node::new(NodeKind::SchemaExtension, r));
            },
            Some(IdentKeyword::Type) => {
                let definition = self.parse_object_type_definition(None)?;
                if definition.implements_interfaces.is_empty()
                    && definition.directives.is_empty()
                    && definition.fields.is_empty()
                {
                    return Err(self.empty_extension(
                        "`implements`, a directive or fields in object type extension",
                    ));
                }
                let r = self
                    .document
                    .put_object_type_extension(Extension::new(extend, definition));
                Node::new(NodeKind::ObjectTypeExtension, r)
            },
            Some(IdentKeyword::Interface) => {
                let definition = self.parse_interface_type_definition(None)?;
                if definition.implements_interfaces.is_empty()
                    && definition.directives.is_empty()
                    && definition.fields.is_empty()
                {
                    return Err(self.empty_extension(
                        "`implements`, a directive or fields in interface extension",
                    ));
                }
                let r = self
                    .document
                    .put_interface_type_extension(Extension::new(extend, definition));
                Node::new(NodeKind::InterfaceTypeExtension, r)
            },
            Some(IdentKeyword::Scalar) => {
                let definition = self.parse_scalar_type_definition(None)?;
                if definition.directives.is_empty() {
                    return Err(self.empty_extension("a directive in scalar extension"));
                }
                let r = self
                    .document
                    .put_scalar_type_extension(Extension::new(extend, definition));
                Node::new(NodeKind::ScalarTypeExtension, r)
            },
            Some(IdentKeyword::Union) => {
                let definition = self.parse_union_type_definition(None)?;
                if definition.directives.is_empty() && definition.member_types.is_empty() {
                    return Err(self.empty_extension("`=` or a directive in union extension"));
                }
                let r = self
                    .document
                    .put_union_type_extension(Extension::new(extend, definition));
                Node::new(NodeKind::UnionTypeExtension, r)
            },
            Some(IdentKeyword::Enum) => {
                let definition = self.parse_enum_type_definition(None)?;
                if definition.directives.is_empty() && definition.values.is_empty() {
                    return Err(self.empty_extension("`{` or a directive in enum extension"));
                }
                let r = self
                    .document
                    .put_enum_type_extension(Extension::new(extend, definition));
                Node::new(NodeKind::EnumTypeExtension, r)
            },
            Some(IdentKeyword::Input) => {
                let definition = self.parse_input_object_type_definition(None)?;
                if definition.directives.is_empty() && definition.fields.is_empty() {
                    return Err(self.empty_extension(
                        "`{` or a directive in input object extension",
                    ));
                }
                let r = self
                    .document
                    .put_input_object_type_extension(Extension::new(extend, definition));
                Node::new(NodeKind::InputObjectTypeExtension, r)
            },
            _ => {
                let token = self.read();
                return Err(self.unexpected_token(
                    &token,
                    &[Keyword::Ident],
                    "`schema`, `type`, `interface`, `union`, `enum`, `input` or \
                    `scalar` after `extend`",
                ));
            },
        };
        self.index_type_node(node);
        Ok(node)
    }

    fn empty_extension(&mut self, what: &str) -> ParseError {
        let token = self.read();
        let mut error = self.unexpected_token(&token, &[], what);
        error.add_note("an extension must add something to the extended definition");
        error
    }
}

/// Keywords that can start a value, for error reporting.
const VALUE_START_KEYWORDS: [Keyword; 9] = [
    Keyword::Dollar,
    Keyword::Integer,
    Keyword::Float,
    Keyword::Minus,
    Keyword::String,
    Keyword::BlockString,
    Keyword::SquareBracketOpen,
    Keyword::CurlyBraceOpen,
    Keyword::Ident,
];

/// Suggests the closest directive location for a typo.
fn suggest_directive_location(input: &str) -> Option<&'static str> {
    let input_upper = input.to_uppercase();
    DirectiveLocation::ALL
        .iter()
        .map(|location| (location.as_str(), edit_distance(&input_upper, location.as_str())))
        .filter(|(_, distance)| *distance <= 3)
        .min_by_key(|(_, distance)| *distance)
        .map(|(location, _)| location)
}

/// Levenshtein edit distance.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();
    if a_chars.is_empty() {
        return n;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];
    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = usize::from(*a_char != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}
