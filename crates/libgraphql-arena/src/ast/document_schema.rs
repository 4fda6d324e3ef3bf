//! Schema lookups on [`Document`], used when a document is the schema side
//! of a walk.

use crate::ast::DelimitedList;
use crate::ast::Document;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::OperationType;
use crate::ast::Ref;
use crate::ast::RefList;

impl Document {
    /// The definition (or, failing that, first extension) of the named type.
    pub fn index_node(&self, name: &[u8]) -> Option<Node> {
        self.index.first_type_node(name)
    }

    /// The name of the root type for `operation_type`.
    ///
    /// Root operation types declared in a schema definition or schema
    /// extension win. Without one, the conventional name (`Query`,
    /// `Mutation`, `Subscription`) is used if the document defines a type
    /// with that name.
    pub fn root_operation_type_name(&self, operation_type: OperationType) -> Option<&[u8]> {
        let declared = self
            .schema_definitions
            .iter()
            .map(|schema| schema.root_operation_types)
            .chain(
                self.schema_extensions
                    .iter()
                    .map(|extension| extension.definition.root_operation_types),
            )
            .flat_map(|list| list.refs.iter(&self.root_operation_type_definitions))
            .map(|r| &self.root_operation_type_definitions[r as usize])
            .find(|root| root.operation_type == operation_type);
        if let Some(root) = declared {
            return Some(self.type_name_bytes(root.named_type));
        }

        let default_name = operation_type.default_root_type_name().as_bytes();
        self.index_node(default_name).map(|node| self.node_name_bytes(node))
    }

    /// The type definition node of the root type for `operation_type`.
    pub fn root_operation_type_definition(&self, operation_type: OperationType) -> Option<Node> {
        self.root_operation_type_name(operation_type)
            .and_then(|name| self.index_node(name))
    }

    /// The `{ ... }` field list of an object or interface type definition or
    /// extension. Absent for every other kind.
    pub fn node_field_definitions(&self, node: Node) -> DelimitedList {
        let r = node.node_ref as usize;
        match node.kind {
            NodeKind::ObjectTypeDefinition => self.object_type_definitions[r].fields,
            NodeKind::ObjectTypeExtension => self.object_type_extensions[r].definition.fields,
            NodeKind::InterfaceTypeDefinition => self.interface_type_definitions[r].fields,
            NodeKind::InterfaceTypeExtension => {
                self.interface_type_extensions[r].definition.fields
            },
            _ => DelimitedList::default(),
        }
    }

    /// The `implements` list of an object or interface type definition or
    /// extension (refs into `types`).
    pub fn node_implements_interfaces(&self, node: Node) -> RefList {
        let r = node.node_ref as usize;
        match node.kind {
            NodeKind::ObjectTypeDefinition => {
                self.object_type_definitions[r].implements_interfaces
            },
            NodeKind::ObjectTypeExtension => {
                self.object_type_extensions[r].definition.implements_interfaces
            },
            NodeKind::InterfaceTypeDefinition => {
                self.interface_type_definitions[r].implements_interfaces
            },
            NodeKind::InterfaceTypeExtension => {
                self.interface_type_extensions[r].definition.implements_interfaces
            },
            _ => RefList::default(),
        }
    }

    /// Finds the field definition called `field_name` on the type `node`
    /// names, searching the type's definition and all of its extensions.
    pub fn node_field_definition_by_name(&self, node: Node, field_name: &[u8]) -> Option<Ref> {
        let type_name = self.node_name_bytes(node);
        let indexed = self.index.type_nodes(type_name);
        let candidates = std::iter::once(node)
            .chain(indexed.iter().copied().filter(|indexed| *indexed != node));
        for candidate in candidates {
            let found = self
                .node_field_definitions(candidate)
                .refs
                .iter(&self.field_definitions)
                .find(|r| self.field_definition_name_bytes(*r) == field_name);
            if found.is_some() {
                return found;
            }
        }
        None
    }

    pub fn field_definition_name_bytes(&self, field_definition: Ref) -> &[u8] {
        self.input
            .byte_slice(self.field_definitions[field_definition as usize].name)
    }

    pub fn field_definition_name_string(&self, field_definition: Ref) -> String {
        self.input
            .byte_slice_string(self.field_definitions[field_definition as usize].name)
    }

    /// The declared type of a field definition (a ref into `types`).
    pub fn field_definition_type(&self, field_definition: Ref) -> Ref {
        self.field_definitions[field_definition as usize].type_ref
    }

    pub fn input_value_definition_name_bytes(&self, input_value_definition: Ref) -> &[u8] {
        self.input.byte_slice(
            self.input_value_definitions[input_value_definition as usize].name,
        )
    }

    pub fn enum_value_definition_name_bytes(&self, enum_value_definition: Ref) -> &[u8] {
        self.input.byte_slice(
            self.enum_value_definitions[enum_value_definition as usize].name,
        )
    }

    /// The directive definition named `name` (without `@`).
    pub fn directive_definition_by_name(&self, name: &[u8]) -> Option<Ref> {
        self.index.directive_definition(name)
    }
}
