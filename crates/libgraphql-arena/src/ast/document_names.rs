//! Name and position accessors on [`Document`].

use crate::Position;
use crate::ast::Description;
use crate::ast::Document;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::ast::SelectionKind;
use crate::token::StringValueError;
use crate::token::cook_string_value;
use std::borrow::Cow;

impl Document {
    pub fn field_name_bytes(&self, field: Ref) -> &[u8] {
        self.input.byte_slice(self.fields[field as usize].name)
    }

    pub fn field_name_string(&self, field: Ref) -> String {
        self.input.byte_slice_string(self.fields[field as usize].name)
    }

    pub fn field_alias_bytes(&self, field: Ref) -> Option<&[u8]> {
        self.fields[field as usize]
            .alias
            .map(|alias| self.input.byte_slice(alias.name))
    }

    pub fn field_alias_string(&self, field: Ref) -> Option<String> {
        self.fields[field as usize]
            .alias
            .map(|alias| self.input.byte_slice_string(alias.name))
    }

    /// The key the field's result appears under: its alias if it has one,
    /// else its name.
    pub fn field_response_key_bytes(&self, field: Ref) -> &[u8] {
        self.field_alias_bytes(field)
            .unwrap_or_else(|| self.field_name_bytes(field))
    }

    pub fn field_response_key_string(&self, field: Ref) -> String {
        String::from_utf8_lossy(self.field_response_key_bytes(field)).into_owned()
    }

    pub fn argument_name_bytes(&self, argument: Ref) -> &[u8] {
        self.input.byte_slice(self.arguments[argument as usize].name)
    }

    pub fn argument_name_string(&self, argument: Ref) -> String {
        self.input.byte_slice_string(self.arguments[argument as usize].name)
    }

    pub fn directive_name_bytes(&self, directive: Ref) -> &[u8] {
        self.input.byte_slice(self.directives[directive as usize].name)
    }

    pub fn directive_name_string(&self, directive: Ref) -> String {
        self.input.byte_slice_string(self.directives[directive as usize].name)
    }

    /// Empty for anonymous and shorthand operations.
    pub fn operation_definition_name_bytes(&self, operation: Ref) -> &[u8] {
        self.operation_definitions[operation as usize]
            .name
            .map(|name| self.input.byte_slice(name))
            .unwrap_or_default()
    }

    pub fn operation_definition_name_string(&self, operation: Ref) -> String {
        String::from_utf8_lossy(self.operation_definition_name_bytes(operation))
            .into_owned()
    }

    pub fn fragment_definition_name_bytes(&self, fragment: Ref) -> &[u8] {
        self.input
            .byte_slice(self.fragment_definitions[fragment as usize].name)
    }

    pub fn fragment_definition_name_string(&self, fragment: Ref) -> String {
        self.input
            .byte_slice_string(self.fragment_definitions[fragment as usize].name)
    }

    pub fn fragment_spread_name_bytes(&self, spread: Ref) -> &[u8] {
        self.input
            .byte_slice(self.fragment_spreads[spread as usize].fragment_name)
    }

    pub fn fragment_spread_name_string(&self, spread: Ref) -> String {
        self.input
            .byte_slice_string(self.fragment_spreads[spread as usize].fragment_name)
    }

    /// The variable name, without `$`.
    pub fn variable_definition_name_bytes(&self, variable: Ref) -> &[u8] {
        self.input
            .byte_slice(self.variable_definitions[variable as usize].name)
    }

    pub fn variable_definition_name_string(&self, variable: Ref) -> String {
        self.input
            .byte_slice_string(self.variable_definitions[variable as usize].name)
    }

    pub fn object_field_name_bytes(&self, object_field: Ref) -> &[u8] {
        self.input.byte_slice(self.object_fields[object_field as usize].name)
    }

    pub fn object_field_name_string(&self, object_field: Ref) -> String {
        self.input
            .byte_slice_string(self.object_fields[object_field as usize].name)
    }

    /// The type condition's type name, or `None` for an inline fragment
    /// without one.
    pub fn inline_fragment_type_condition_name_bytes(&self, inline_fragment: Ref) -> Option<&[u8]> {
        self.inline_fragments[inline_fragment as usize]
            .type_condition
            .map(|condition| self.type_name_bytes(condition.named_type))
    }

    pub fn fragment_definition_type_condition_name_bytes(&self, fragment: Ref) -> &[u8] {
        let condition = self.fragment_definitions[fragment as usize].type_condition;
        self.type_name_bytes(condition.named_type)
    }

    /// The name of any named node: definitions, fields (their name, not
    /// alias), arguments, directives, variables and so on.
    ///
    /// Returns an empty slice for nameless kinds (selection sets, values,
    /// schema definitions, inline fragments, anonymous operations).
    pub fn node_name_bytes(&self, node: Node) -> &[u8] {
        let r = node.node_ref as usize;
        let name = match node.kind {
            NodeKind::OperationDefinition => {
                return self.operation_definition_name_bytes(node.node_ref);
            },
            NodeKind::VariableDefinition => self.variable_definitions[r].name,
            NodeKind::Field => self.fields[r].name,
            NodeKind::Argument => self.arguments[r].name,
            NodeKind::FragmentSpread => self.fragment_spreads[r].fragment_name,
            NodeKind::FragmentDefinition => self.fragment_definitions[r].name,
            NodeKind::Directive => self.directives[r].name,
            NodeKind::ObjectField => self.object_fields[r].name,
            NodeKind::Type | NodeKind::UnionMemberType => {
                return self.type_name_bytes(node.node_ref);
            },
            NodeKind::RootOperationTypeDefinition => {
                let named_type = self.root_operation_type_definitions[r].named_type;
                return self.type_name_bytes(named_type);
            },
            NodeKind::ObjectTypeDefinition => self.object_type_definitions[r].name,
            NodeKind::ObjectTypeExtension => {
                self.object_type_extensions[r].definition.name
            },
            NodeKind::InterfaceTypeDefinition => {
                self.interface_type_definitions[r].name
            },
            NodeKind::InterfaceTypeExtension => {
                self.interface_type_extensions[r].definition.name
            },
            NodeKind::ScalarTypeDefinition => self.scalar_type_definitions[r].name,
            NodeKind::ScalarTypeExtension => {
                self.scalar_type_extensions[r].definition.name
            },
            NodeKind::UnionTypeDefinition => self.union_type_definitions[r].name,
            NodeKind::UnionTypeExtension => {
                self.union_type_extensions[r].definition.name
            },
            NodeKind::EnumTypeDefinition => self.enum_type_definitions[r].name,
            NodeKind::EnumTypeExtension => self.enum_type_extensions[r].definition.name,
            NodeKind::EnumValueDefinition => self.enum_value_definitions[r].name,
            NodeKind::InputObjectTypeDefinition => {
                self.input_object_type_definitions[r].name
            },
            NodeKind::InputObjectTypeExtension => {
                self.input_object_type_extensions[r].definition.name
            },
            NodeKind::DirectiveDefinition => self.directive_definitions[r].name,
            NodeKind::FieldDefinition => self.field_definitions[r].name,
            NodeKind::InputValueDefinition => self.input_value_definitions[r].name,
            NodeKind::SelectionSet
            | NodeKind::InlineFragment
            | NodeKind::Value
            | NodeKind::SchemaDefinition
            | NodeKind::SchemaExtension => return &[],
        };
        self.input.byte_slice(name)
    }

    pub fn node_name_string(&self, node: Node) -> String {
        String::from_utf8_lossy(self.node_name_bytes(node)).into_owned()
    }

    /// The source position of any node. Unset for nodes synthesized by the
    /// [`Importer`](crate::Importer).
    pub fn node_position(&self, node: Node) -> Position {
        let r = node.node_ref as usize;
        match node.kind {
            NodeKind::OperationDefinition => self.operation_definitions[r].position,
            NodeKind::VariableDefinition => self.variable_definitions[r].position,
            NodeKind::SelectionSet => {
                let set = &self.selection_sets[r];
                Position::span(set.lbrace, set.rbrace)
            },
            NodeKind::Field => self.fields[r].position,
            NodeKind::Argument => self.arguments[r].position,
            NodeKind::FragmentSpread => self.fragment_spreads[r].position,
            NodeKind::InlineFragment => self.inline_fragments[r].position,
            NodeKind::FragmentDefinition => self.fragment_definitions[r].position,
            NodeKind::Directive => self.directives[r].position,
            NodeKind::Value => self.values[r].position,
            NodeKind::ObjectField => self.object_fields[r].position,
            NodeKind::Type | NodeKind::UnionMemberType => self.types[r].position,
            NodeKind::SchemaDefinition => self.schema_definitions[r].position,
            NodeKind::SchemaExtension => {
                let extension = &self.schema_extensions[r];
                Position::span(extension.extend, extension.definition.position)
            },
            NodeKind::RootOperationTypeDefinition => {
                self.root_operation_type_definitions[r].position
            },
            NodeKind::ObjectTypeDefinition => self.object_type_definitions[r].position,
            NodeKind::ObjectTypeExtension => {
                let extension = &self.object_type_extensions[r];
                Position::span(extension.extend, extension.definition.position)
            },
            NodeKind::InterfaceTypeDefinition => {
                self.interface_type_definitions[r].position
            },
            NodeKind::InterfaceTypeExtension => {
                let extension = &self.interface_type_extensions[r];
                Position::span(extension.extend, extension.definition.position)
            },
            NodeKind::ScalarTypeDefinition => self.scalar_type_definitions[r].position,
            NodeKind::ScalarTypeExtension => {
                let extension = &self.scalar_type_extensions[r];
                Position::span(extension.extend, extension.definition.position)
            },
            NodeKind::UnionTypeDefinition => self.union_type_definitions[r].position,
            NodeKind::UnionTypeExtension => {
                let extension = &self.union_type_extensions[r];
                Position::span(extension.extend, extension.definition.position)
            },
            NodeKind::EnumTypeDefinition => self.enum_type_definitions[r].position,
            NodeKind::EnumTypeExtension => {
                let extension = &self.enum_type_extensions[r];
                Position::span(extension.extend, extension.definition.position)
            },
            NodeKind::EnumValueDefinition => self.enum_value_definitions[r].position,
            NodeKind::InputObjectTypeDefinition => {
                self.input_object_type_definitions[r].position
            },
            NodeKind::InputObjectTypeExtension => {
                let extension = &self.input_object_type_extensions[r];
                Position::span(extension.extend, extension.definition.position)
            },
            NodeKind::DirectiveDefinition => self.directive_definitions[r].position,
            NodeKind::FieldDefinition => self.field_definitions[r].position,
            NodeKind::InputValueDefinition => self.input_value_definitions[r].position,
        }
    }

    /// The [`Node`] a selection points at.
    pub fn selection_node(&self, selection: Ref) -> Node {
        let selection = &self.selections[selection as usize];
        let kind = match selection.kind {
            SelectionKind::Field => NodeKind::Field,
            SelectionKind::InlineFragment => NodeKind::InlineFragment,
            SelectionKind::FragmentSpread => NodeKind::FragmentSpread,
        };
        Node::new(kind, selection.node_ref)
    }

    /// The cooked text of a description.
    pub fn description_string(
        &self,
        description: &Description,
    ) -> Result<Cow<'_, str>, StringValueError> {
        cook_string_value(
            self.input.byte_slice(description.content),
            description.block_string,
        )
    }

    /// The description of a type system node, if it has one.
    pub fn node_description(&self, node: Node) -> Option<Description> {
        let r = node.node_ref as usize;
        match node.kind {
            NodeKind::SchemaDefinition => self.schema_definitions[r].description,
            NodeKind::ObjectTypeDefinition => self.object_type_definitions[r].description,
            NodeKind::InterfaceTypeDefinition => {
                self.interface_type_definitions[r].description
            },
            NodeKind::ScalarTypeDefinition => self.scalar_type_definitions[r].description,
            NodeKind::UnionTypeDefinition => self.union_type_definitions[r].description,
            NodeKind::EnumTypeDefinition => self.enum_type_definitions[r].description,
            NodeKind::EnumValueDefinition => self.enum_value_definitions[r].description,
            NodeKind::InputObjectTypeDefinition => {
                self.input_object_type_definitions[r].description
            },
            NodeKind::DirectiveDefinition => self.directive_definitions[r].description,
            NodeKind::FieldDefinition => self.field_definitions[r].description,
            NodeKind::InputValueDefinition => self.input_value_definitions[r].description,
            _ => None,
        }
    }
}
