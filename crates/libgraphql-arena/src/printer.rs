//! Renders a [`Document`] (or any node in it) back to GraphQL text.
//!
//! [`Printer::new()`] produces compact single-line output;
//! [`Printer::with_indent()`] produces one definition per paragraph and one
//! selection or field per line. Both outputs parse back to an equivalent
//! document, and printing that document again yields the same text.
//!
//! Directive definition locations are stored as a bitmask, so they print in
//! the order the GraphQL specification lists them rather than in source
//! order: `directive @a on OBJECT | FIELD` prints as `on FIELD | OBJECT`.
//!
//! ```rust
//! use libgraphql_arena::Printer;
//! use libgraphql_arena::parse_graphql_document_string;
//!
//! let (document, report) = parse_graphql_document_string(
//!     "query Q($id: ID!) { user(id: $id) { name, friends { name } } }",
//! );
//! assert!(!report.has_errors());
//! assert_eq!(
//!     Printer::new().print(&document),
//!     "query Q($id: ID!) {user(id: $id) {name friends {name}}}",
//! );
//! ```

use crate::ByteSliceReference;
use crate::ast::DefaultValue;
use crate::ast::DelimitedList;
use crate::ast::Description;
use crate::ast::DirectiveList;
use crate::ast::Document;
use crate::ast::Extension;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::SelectionKind;
use crate::ast::TypeKind;
use crate::ast::ValueKind;

/// A reusable GraphQL printer.
#[derive(Clone, Debug, Default)]
pub struct Printer {
    /// Spaces per nesting level, or `None` for compact output.
    indent: Option<usize>,
    level: usize,
    out: String,
}

impl Printer {
    /// A printer producing compact output.
    pub fn new() -> Self {
        Self {
            indent: None,
            level: 0,
            out: String::new(),
        }
    }

    /// A printer producing multi-line output indented by `indent` spaces per
    /// level.
    pub fn with_indent(indent: usize) -> Self {
        Self {
            indent: Some(indent),
            level: 0,
            out: String::new(),
        }
    }

    /// Prints every root node of `document`.
    pub fn print(&mut self, document: &Document) -> String {
        self.begin();
        let separator = if self.indent.is_some() { "\n\n" } else { " " };
        for (i, node) in document.root_nodes.iter().enumerate() {
            if i > 0 {
                self.out.push_str(separator);
            }
            self.write_node(document, *node);
        }
        if self.indent.is_some() && !document.root_nodes.is_empty() {
            self.out.push('\n');
        }
        std::mem::take(&mut self.out)
    }

    /// Prints a single node and its subtree.
    pub fn print_node(&mut self, document: &Document, node: Node) -> String {
        self.begin();
        self.write_node(document, node);
        std::mem::take(&mut self.out)
    }

    /// Prints the value `value` (a ref into `document.values`).
    pub fn print_value(&mut self, document: &Document, value: Ref) -> String {
        self.begin();
        self.write_value(document, value);
        std::mem::take(&mut self.out)
    }

    /// Prints the type reference `type_ref` (a ref into `document.types`).
    pub fn print_type(&mut self, document: &Document, type_ref: Ref) -> String {
        self.begin();
        self.write_type(document, type_ref);
        std::mem::take(&mut self.out)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn begin(&mut self) {
        self.level = 0;
        self.out.clear();
    }

    fn push_bytes(&mut self, bytes: &[u8]) {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.out.push_str(text),
            Err(_) => self.out.push_str(&String::from_utf8_lossy(bytes)),
        }
    }

    fn push_literal(&mut self, document: &Document, literal: ByteSliceReference) {
        self.push_bytes(document.input.byte_slice(literal));
    }

    /// Starts a new line at the current level, or emits a single space in
    /// compact mode.
    fn line_break(&mut self) {
        match self.indent {
            Some(indent) => {
                self.out.push('\n');
                self.out
                    .extend(std::iter::repeat_n(' ', indent * self.level));
            },
            None => self.out.push(' '),
        }
    }

    fn open_block(&mut self) {
        self.out.push('{');
        self.level += 1;
        if self.indent.is_some() {
            self.line_break();
        }
    }

    fn close_block(&mut self) {
        self.level -= 1;
        if self.indent.is_some() {
            self.line_break();
        }
        self.out.push('}');
    }

    // =========================================================================
    // Nodes
    // =========================================================================

    fn write_node(&mut self, document: &Document, node: Node) {
        let r = node.node_ref;
        match node.kind {
            NodeKind::OperationDefinition => self.write_operation_definition(document, r),
            NodeKind::VariableDefinition => self.write_variable_definition(document, r),
            NodeKind::SelectionSet => self.write_selection_set(document, r),
            NodeKind::Field => self.write_field(document, r),
            NodeKind::Argument => self.write_argument(document, r),
            NodeKind::FragmentSpread => self.write_fragment_spread(document, r),
            NodeKind::InlineFragment => self.write_inline_fragment(document, r),
            NodeKind::FragmentDefinition => self.write_fragment_definition(document, r),
            NodeKind::Directive => self.write_directive(document, r),
            NodeKind::Value => self.write_value(document, r),
            NodeKind::ObjectField => self.write_object_field(document, r),
            NodeKind::Type | NodeKind::UnionMemberType => self.write_type(document, r),
            NodeKind::SchemaDefinition => {
                self.write_schema_definition(document, r, false);
            },
            NodeKind::SchemaExtension => {
                self.write_schema_definition(document, r, true);
            },
            NodeKind::RootOperationTypeDefinition => {
                self.write_root_operation_type_definition(document, r);
            },
            NodeKind::ObjectTypeDefinition => {
                let definition = &document.object_type_definitions[r as usize];
                self.write_object_like(
                    document,
                    "type",
                    definition.description,
                    definition.name,
                    definition.implements_interfaces,
                    definition.directives,
                    definition.fields,
                );
            },
            NodeKind::ObjectTypeExtension => {
                let Extension { definition, .. } = &document.object_type_extensions[r as usize];
                self.out.push_str("extend ");
                self.write_object_like(
                    document,
                    "type",
                    None,
                    definition.name,
                    definition.implements_interfaces,
                    definition.directives,
                    definition.fields,
                );
            },
            NodeKind::InterfaceTypeDefinition => {
                let definition = &document.interface_type_definitions[r as usize];
                self.write_object_like(
                    document,
                    "interface",
                    definition.description,
                    definition.name,
                    definition.implements_interfaces,
                    definition.directives,
                    definition.fields,
                );
            },
            NodeKind::InterfaceTypeExtension => {
                let Extension { definition, .. } =
                    &document.interface_type_extensions[r as usize];
                self.out.push_str("extend ");
                self.write_object_like(
                    document,
                    "interface",
                    None,
                    definition.name,
                    definition.implements_interfaces,
                    definition.directives,
                    definition.fields,
                );
            },
            NodeKind::ScalarTypeDefinition => {
                let definition = &document.scalar_type_definitions[r as usize];
                self.write_description(document, definition.description);
                self.write_scalar(document, definition.name, definition.directives);
            },
            NodeKind::ScalarTypeExtension => {
                let Extension { definition, .. } = &document.scalar_type_extensions[r as usize];
                self.out.push_str("extend ");
                self.write_scalar(document, definition.name, definition.directives);
            },
            NodeKind::UnionTypeDefinition => {
                let definition = &document.union_type_definitions[r as usize];
                self.write_description(document, definition.description);
                self.write_union(
                    document,
                    definition.name,
                    definition.directives,
                    definition.member_types,
                );
            },
            NodeKind::UnionTypeExtension => {
                let Extension { definition, .. } = &document.union_type_extensions[r as usize];
                self.out.push_str("extend ");
                self.write_union(
                    document,
                    definition.name,
                    definition.directives,
                    definition.member_types,
                );
            },
            NodeKind::EnumTypeDefinition => {
                let definition = &document.enum_type_definitions[r as usize];
                self.write_description(document, definition.description);
                self.write_enum(document, definition.name, definition.directives, definition.values);
            },
            NodeKind::EnumTypeExtension => {
                let Extension { definition, .. } = &document.enum_type_extensions[r as usize];
                self.out.push_str("extend ");
                self.write_enum(document, definition.name, definition.directives, definition.values);
            },
            NodeKind::EnumValueDefinition => self.write_enum_value_definition(document, r),
            NodeKind::InputObjectTypeDefinition => {
                let definition = &document.input_object_type_definitions[r as usize];
                self.write_description(document, definition.description);
                self.write_input_object(
                    document,
                    definition.name,
                    definition.directives,
                    definition.fields,
                );
            },
            NodeKind::InputObjectTypeExtension => {
                let Extension { definition, .. } =
                    &document.input_object_type_extensions[r as usize];
                self.out.push_str("extend ");
                self.write_input_object(
                    document,
                    definition.name,
                    definition.directives,
                    definition.fields,
                );
            },
            NodeKind::DirectiveDefinition => self.write_directive_definition(document, r),
            NodeKind::FieldDefinition => self.write_field_definition(document, r),
            NodeKind::InputValueDefinition => self.write_input_value_definition(document, r),
        }
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn write_operation_definition(&mut self, document: &Document, operation: Ref) {
        let operation = &document.operation_definitions[operation as usize];
        if operation.is_shorthand() {
            self.write_selection_set(document, operation.selection_set);
            return;
        }
        self.out.push_str(operation.operation_type.as_str());
        if let Some(name) = operation.name {
            self.out.push(' ');
            self.push_literal(document, name);
        }
        if !operation.variable_definitions.is_empty() {
            self.out.push('(');
            for (i, variable) in operation
                .variable_definitions
                .refs
                .iter(&document.variable_definitions)
                .enumerate()
            {
                if i > 0 {
                    self.out.push_str(", ");
                }
                self.write_variable_definition(document, variable);
            }
            self.out.push(')');
        }
        self.write_directives(document, operation.directives);
        self.out.push(' ');
        self.write_selection_set(document, operation.selection_set);
    }

    fn write_variable_definition(&mut self, document: &Document, variable: Ref) {
        let variable = &document.variable_definitions[variable as usize];
        self.out.push('$');
        self.push_literal(document, variable.name);
        self.out.push_str(": ");
        self.write_type(document, variable.type_ref);
        self.write_default_value(document, variable.default_value);
        self.write_directives(document, variable.directives);
    }

    fn write_default_value(&mut self, document: &Document, default_value: Option<DefaultValue>) {
        if let Some(default_value) = default_value {
            self.out.push_str(" = ");
            self.write_value(document, default_value.value);
        }
    }

    fn write_selection_set(&mut self, document: &Document, selection_set: Ref) {
        let selection_set = &document.selection_sets[selection_set as usize];
        self.open_block();
        for (i, selection) in selection_set
            .selections
            .iter(&document.selections)
            .enumerate()
        {
            if i > 0 {
                self.line_break();
            }
            let selection = &document.selections[selection as usize];
            match selection.kind {
                SelectionKind::Field => self.write_field(document, selection.node_ref),
                SelectionKind::InlineFragment => {
                    self.write_inline_fragment(document, selection.node_ref);
                },
                SelectionKind::FragmentSpread => {
                    self.write_fragment_spread(document, selection.node_ref);
                },
            }
        }
        self.close_block();
    }

    fn write_field(&mut self, document: &Document, field: Ref) {
        let field = &document.fields[field as usize];
        if let Some(alias) = field.alias {
            self.push_literal(document, alias.name);
            self.out.push_str(": ");
        }
        self.push_literal(document, field.name);
        self.write_arguments(document, field.arguments);
        self.write_directives(document, field.directives);
        if let Some(selection_set) = field.selection_set {
            self.out.push(' ');
            self.write_selection_set(document, selection_set);
        }
    }

    fn write_inline_fragment(&mut self, document: &Document, inline_fragment: Ref) {
        let inline_fragment = &document.inline_fragments[inline_fragment as usize];
        self.out.push_str("...");
        if let Some(type_condition) = inline_fragment.type_condition {
            self.out.push_str(" on ");
            self.write_type(document, type_condition.named_type);
        }
        self.write_directives(document, inline_fragment.directives);
        self.out.push(' ');
        self.write_selection_set(document, inline_fragment.selection_set);
    }

    fn write_fragment_spread(&mut self, document: &Document, fragment_spread: Ref) {
        let fragment_spread = &document.fragment_spreads[fragment_spread as usize];
        self.out.push_str("...");
        self.push_literal(document, fragment_spread.fragment_name);
        self.write_directives(document, fragment_spread.directives);
    }

    fn write_fragment_definition(&mut self, document: &Document, fragment: Ref) {
        let fragment = &document.fragment_definitions[fragment as usize];
        self.out.push_str("fragment ");
        self.push_literal(document, fragment.name);
        self.out.push_str(" on ");
        self.write_type(document, fragment.type_condition.named_type);
        self.write_directives(document, fragment.directives);
        self.out.push(' ');
        self.write_selection_set(document, fragment.selection_set);
    }

    // =========================================================================
    // Arguments, directives, values and types
    // =========================================================================

    fn write_arguments(&mut self, document: &Document, arguments: DelimitedList) {
        if arguments.is_empty() {
            return;
        }
        self.out.push('(');
        for (i, argument) in arguments.refs.iter(&document.arguments).enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write_argument(document, argument);
        }
        self.out.push(')');
    }

    fn write_argument(&mut self, document: &Document, argument: Ref) {
        let argument = &document.arguments[argument as usize];
        self.push_literal(document, argument.name);
        self.out.push_str(": ");
        self.write_value(document, argument.value);
    }

    /// Writes ` @a @b(x: 1)`, each directive preceded by a space.
    fn write_directives(&mut self, document: &Document, directives: DirectiveList) {
        for directive in directives.iter(&document.directives) {
            self.out.push(' ');
            self.write_directive(document, directive);
        }
    }

    fn write_directive(&mut self, document: &Document, directive: Ref) {
        let directive = &document.directives[directive as usize];
        self.out.push('@');
        self.push_literal(document, directive.name);
        self.write_arguments(document, directive.arguments);
    }

    fn write_value(&mut self, document: &Document, value: Ref) {
        let value = document.values[value as usize];
        let r = value.value_ref as usize;
        match value.kind {
            ValueKind::Variable => {
                self.out.push('$');
                self.push_literal(document, document.variable_values[r].name);
            },
            ValueKind::Int => {
                let int_value = &document.int_values[r];
                if int_value.negative_sign.is_some() {
                    self.out.push('-');
                }
                self.push_literal(document, int_value.raw);
            },
            ValueKind::Float => {
                let float_value = &document.float_values[r];
                if float_value.negative_sign.is_some() {
                    self.out.push('-');
                }
                self.push_literal(document, float_value.raw);
            },
            ValueKind::String => {
                let string_value = &document.string_values[r];
                self.write_string(document, string_value.content, string_value.block_string);
            },
            ValueKind::Boolean if value.value_ref == 1 => self.out.push_str("true"),
            ValueKind::Boolean => self.out.push_str("false"),
            ValueKind::Null => self.out.push_str("null"),
            ValueKind::Enum => self.push_literal(document, document.enum_values[r].name),
            ValueKind::List => {
                self.out.push('[');
                for (i, item) in document.list_values[r]
                    .values
                    .iter(&document.values)
                    .enumerate()
                {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.write_value(document, item);
                }
                self.out.push(']');
            },
            ValueKind::Object => {
                self.out.push('{');
                for (i, field) in document.object_values[r]
                    .fields
                    .iter(&document.object_fields)
                    .enumerate()
                {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_object_field(document, field);
                }
                self.out.push('}');
            },
        }
    }

    fn write_object_field(&mut self, document: &Document, object_field: Ref) {
        let object_field = &document.object_fields[object_field as usize];
        self.push_literal(document, object_field.name);
        self.out.push_str(": ");
        self.write_value(document, object_field.value);
    }

    /// Strings are printed from their raw source content, so escapes and
    /// block string layout survive unchanged.
    fn write_string(&mut self, document: &Document, content: ByteSliceReference, block: bool) {
        let quotes = if block { "\"\"\"" } else { "\"" };
        self.out.push_str(quotes);
        self.push_literal(document, content);
        self.out.push_str(quotes);
    }

    fn write_type(&mut self, document: &Document, type_ref: Ref) {
        let ty = &document.types[type_ref as usize];
        match (ty.kind, ty.of_type) {
            (TypeKind::Named, _) => self.push_literal(document, ty.name),
            (TypeKind::List, Some(of_type)) => {
                self.out.push('[');
                self.write_type(document, of_type);
                self.out.push(']');
            },
            (TypeKind::NonNull, Some(of_type)) => {
                self.write_type(document, of_type);
                self.out.push('!');
            },
            (_, None) => (),
        }
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    /// Writes a description followed by a line break (or a space in compact
    /// mode).
    fn write_description(&mut self, document: &Document, description: Option<Description>) {
        if let Some(description) = description {
            self.write_string(document, description.content, description.block_string);
            self.line_break();
        }
    }

    /// Writes a description of an item inside `( ... )`, which always stays
    /// on the item's line.
    fn write_inline_description(&mut self, document: &Document, description: Option<Description>) {
        if let Some(description) = description {
            self.write_string(document, description.content, description.block_string);
            self.out.push(' ');
        }
    }

    /// Writes `schema ...`, or `extend schema ...` when `is_extension`.
    fn write_schema_definition(&mut self, document: &Document, r: Ref, is_extension: bool) {
        let schema = if is_extension {
            self.out.push_str("extend ");
            document.schema_extensions[r as usize].definition
        } else {
            let schema = document.schema_definitions[r as usize];
            self.write_description(document, schema.description);
            schema
        };
        self.out.push_str("schema");
        self.write_directives(document, schema.directives);
        if schema.root_operation_types.is_empty() {
            return;
        }
        self.out.push(' ');
        self.open_block();
        for (i, root) in schema
            .root_operation_types
            .refs
            .iter(&document.root_operation_type_definitions)
            .enumerate()
        {
            if i > 0 {
                self.line_break();
            }
            self.write_root_operation_type_definition(document, root);
        }
        self.close_block();
    }

    fn write_root_operation_type_definition(&mut self, document: &Document, root: Ref) {
        let root = &document.root_operation_type_definitions[root as usize];
        self.out.push_str(root.operation_type.as_str());
        self.out.push_str(": ");
        self.write_type(document, root.named_type);
    }

    #[allow(clippy::too_many_arguments)]
    fn write_object_like(
        &mut self,
        document: &Document,
        keyword: &str,
        description: Option<Description>,
        name: ByteSliceReference,
        implements_interfaces: RefList,
        directives: DirectiveList,
        fields: DelimitedList,
    ) {
        self.write_description(document, description);
        self.out.push_str(keyword);
        self.out.push(' ');
        self.push_literal(document, name);
        for (i, interface) in implements_interfaces.iter(&document.types).enumerate() {
            self.out.push_str(if i == 0 { " implements " } else { " & " });
            self.write_type(document, interface);
        }
        self.write_directives(document, directives);
        if fields.is_empty() {
            return;
        }
        self.out.push(' ');
        self.open_block();
        for (i, field) in fields.refs.iter(&document.field_definitions).enumerate() {
            if i > 0 {
                self.line_break();
            }
            self.write_field_definition(document, field);
        }
        self.close_block();
    }

    fn write_field_definition(&mut self, document: &Document, field: Ref) {
        let field = &document.field_definitions[field as usize];
        self.write_description(document, field.description);
        self.push_literal(document, field.name);
        self.write_argument_definitions(document, field.arguments);
        self.out.push_str(": ");
        self.write_type(document, field.type_ref);
        self.write_directives(document, field.directives);
    }

    fn write_argument_definitions(&mut self, document: &Document, arguments: DelimitedList) {
        if arguments.is_empty() {
            return;
        }
        self.out.push('(');
        for (i, argument) in arguments
            .refs
            .iter(&document.input_value_definitions)
            .enumerate()
        {
            if i > 0 {
                self.out.push_str(", ");
            }
            let description = document.input_value_definitions[argument as usize].description;
            self.write_inline_description(document, description);
            self.write_input_value_definition_body(document, argument);
        }
        self.out.push(')');
    }

    fn write_input_value_definition(&mut self, document: &Document, input_value: Ref) {
        let description = document.input_value_definitions[input_value as usize].description;
        self.write_description(document, description);
        self.write_input_value_definition_body(document, input_value);
    }

    fn write_input_value_definition_body(&mut self, document: &Document, input_value: Ref) {
        let input_value = &document.input_value_definitions[input_value as usize];
        self.push_literal(document, input_value.name);
        self.out.push_str(": ");
        self.write_type(document, input_value.type_ref);
        self.write_default_value(document, input_value.default_value);
        self.write_directives(document, input_value.directives);
    }

    fn write_scalar(
        &mut self,
        document: &Document,
        name: ByteSliceReference,
        directives: DirectiveList,
    ) {
        self.out.push_str("scalar ");
        self.push_literal(document, name);
        self.write_directives(document, directives);
    }

    fn write_union(
        &mut self,
        document: &Document,
        name: ByteSliceReference,
        directives: DirectiveList,
        member_types: RefList,
    ) {
        self.out.push_str("union ");
        self.push_literal(document, name);
        self.write_directives(document, directives);
        for (i, member) in member_types.iter(&document.types).enumerate() {
            self.out.push_str(if i == 0 { " = " } else { " | " });
            self.write_type(document, member);
        }
    }

    fn write_enum(
        &mut self,
        document: &Document,
        name: ByteSliceReference,
        directives: DirectiveList,
        values: DelimitedList,
    ) {
        self.out.push_str("enum ");
        self.push_literal(document, name);
        self.write_directives(document, directives);
        if values.is_empty() {
            return;
        }
        self.out.push(' ');
        self.open_block();
        for (i, value) in values.refs.iter(&document.enum_value_definitions).enumerate() {
            if i > 0 {
                self.line_break();
            }
            self.write_enum_value_definition(document, value);
        }
        self.close_block();
    }

    fn write_enum_value_definition(&mut self, document: &Document, value: Ref) {
        let value = &document.enum_value_definitions[value as usize];
        self.write_description(document, value.description);
        self.push_literal(document, value.name);
        self.write_directives(document, value.directives);
    }

    fn write_input_object(
        &mut self,
        document: &Document,
        name: ByteSliceReference,
        directives: DirectiveList,
        fields: DelimitedList,
    ) {
        self.out.push_str("input ");
        self.push_literal(document, name);
        self.write_directives(document, directives);
        if fields.is_empty() {
            return;
        }
        self.out.push(' ');
        self.open_block();
        for (i, field) in fields.refs.iter(&document.input_value_definitions).enumerate() {
            if i > 0 {
                self.line_break();
            }
            self.write_input_value_definition(document, field);
        }
        self.close_block();
    }

    fn write_directive_definition(&mut self, document: &Document, directive: Ref) {
        let directive = &document.directive_definitions[directive as usize];
        self.write_description(document, directive.description);
        self.out.push_str("directive @");
        self.push_literal(document, directive.name);
        self.write_argument_definitions(document, directive.arguments);
        if directive.repeatable.is_some() {
            self.out.push_str(" repeatable");
        }
        self.out.push_str(" on ");
        for (i, location) in directive.locations.iter().enumerate() {
            if i > 0 {
                self.out.push_str(" | ");
            }
            self.out.push_str(location.as_str());
        }
    }
}
