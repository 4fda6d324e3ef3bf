use crate::Input;
use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::Index;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ListValue;
use crate::ast::Node;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::Ref;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::ast::VariableValue;

/// Declares the node tables of [`Document`] together with their `put_*`
/// methods and their part in [`Document::reset()`].
macro_rules! document_tables {
    ($($(#[$meta:meta])* $table:ident: $ty:ty => $put:ident;)*) => {
        /// A parsed GraphQL document stored as an arena: one flat table per
        /// node kind, addressed by [`Ref`].
        ///
        /// No entry stores a pointer to another; nodes reference each other
        /// only through refs and [`Node`] handles, and every
        /// [`ByteSliceReference`](crate::ByteSliceReference) in the tables
        /// resolves against [`Document::input`].
        ///
        /// Tables are append-only. Refs returned by `put_*` stay valid until
        /// [`reset()`](Document::reset), which truncates every table but
        /// keeps its capacity so a pooled document can be refilled without
        /// reallocating.
        #[derive(Clone, Debug)]
        pub struct Document {
            /// The source text (plus any literals appended by the
            /// [`Importer`](crate::Importer)).
            pub input: Input,

            /// Top-level definitions in source order.
            pub root_nodes: Vec<Node>,

            /// Type and directive definitions by name.
            pub index: Index,

            $(
                $(#[$meta])*
                pub $table: Vec<$ty>,
            )*
        }

        impl Document {
            pub fn new() -> Self {
                Self {
                    input: Input::new(),
                    root_nodes: Vec::new(),
                    index: Index::default(),
                    $($table: Vec::new(),)*
                }
            }

            /// Empties the document for reuse. Every previously returned ref
            /// becomes invalid.
            pub fn reset(&mut self) {
                self.input.reset();
                self.root_nodes.clear();
                self.index.clear();
                $(self.$table.clear();)*
            }

            $(
                pub fn $put(&mut self, value: $ty) -> Ref {
                    push_ref(&mut self.$table, value)
                }
            )*
        }
    };
}

document_tables! {
    operation_definitions: OperationDefinition => put_operation_definition;
    variable_definitions: VariableDefinition => put_variable_definition;
    selection_sets: SelectionSet => put_selection_set;
    selections: Selection => put_selection;
    fields: Field => put_field;
    arguments: Argument => put_argument;
    directives: Directive => put_directive;
    inline_fragments: InlineFragment => put_inline_fragment;
    fragment_spreads: FragmentSpread => put_fragment_spread;
    fragment_definitions: FragmentDefinition => put_fragment_definition;

    /// Every value, whatever its kind. Payloads live in the typed value
    /// tables below.
    values: Value => put_value;
    int_values: IntValue => put_int_value;
    float_values: FloatValue => put_float_value;
    string_values: StringValue => put_string_value;
    enum_values: EnumValue => put_enum_value;
    variable_values: VariableValue => put_variable_value;
    list_values: ListValue => put_list_value;
    object_values: ObjectValue => put_object_value;
    object_fields: ObjectField => put_object_field;

    types: Type => put_type;

    schema_definitions: SchemaDefinition => put_schema_definition;
    schema_extensions: SchemaExtension => put_schema_extension;
    root_operation_type_definitions: RootOperationTypeDefinition
        => put_root_operation_type_definition;
    object_type_definitions: ObjectTypeDefinition => put_object_type_definition;
    object_type_extensions: ObjectTypeExtension => put_object_type_extension;
    interface_type_definitions: InterfaceTypeDefinition
        => put_interface_type_definition;
    interface_type_extensions: InterfaceTypeExtension
        => put_interface_type_extension;
    scalar_type_definitions: ScalarTypeDefinition => put_scalar_type_definition;
    scalar_type_extensions: ScalarTypeExtension => put_scalar_type_extension;
    union_type_definitions: UnionTypeDefinition => put_union_type_definition;
    union_type_extensions: UnionTypeExtension => put_union_type_extension;
    enum_type_definitions: EnumTypeDefinition => put_enum_type_definition;
    enum_type_extensions: EnumTypeExtension => put_enum_type_extension;
    enum_value_definitions: EnumValueDefinition => put_enum_value_definition;
    input_object_type_definitions: InputObjectTypeDefinition
        => put_input_object_type_definition;
    input_object_type_extensions: InputObjectTypeExtension
        => put_input_object_type_extension;
    field_definitions: FieldDefinition => put_field_definition;
    input_value_definitions: InputValueDefinition => put_input_value_definition;
    directive_definitions: DirectiveDefinition => put_directive_definition;
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document whose input is `source`, ready to be
    /// filled by [`Parser::parse()`](crate::Parser::parse).
    pub fn from_source(source: &str) -> Self {
        let mut document = Self::new();
        document.input.reset_input_string(source);
        document
    }

    pub fn add_root_node(&mut self, node: Node) {
        self.root_nodes.push(node);
    }

    /// Returns `true` if the document has no definitions.
    pub fn is_empty(&self) -> bool {
        self.root_nodes.is_empty()
    }
}

fn push_ref<T>(table: &mut Vec<T>, value: T) -> Ref {
    let node_ref = table.len() as Ref;
    table.push(value);
    node_ref
}
