/// An index into one of a [`Document`](crate::ast::Document)'s node tables.
///
/// A `Ref` is only meaningful together with the table (and therefore the
/// [`NodeKind`]) it was returned for, and only until the owning document is
/// reset.
pub type Ref = u32;

/// Every kind of node a [`Document`](crate::ast::Document) stores, one per
/// node table.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum NodeKind {
    // Executable definitions
    OperationDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    Directive,

    // Values and types
    Value,
    ObjectField,
    Type,

    // Type system definitions
    SchemaDefinition,
    SchemaExtension,
    RootOperationTypeDefinition,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    UnionTypeDefinition,
    UnionTypeExtension,
    /// A member of a union's `= A | B` list. The ref points into
    /// [`Document::types`](crate::ast::Document::types).
    UnionMemberType,
    EnumTypeDefinition,
    EnumTypeExtension,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    DirectiveDefinition,
    FieldDefinition,
    InputValueDefinition,
}

impl NodeKind {
    /// Returns `true` for type definitions and type extensions (the node
    /// kinds that can be an enclosing type).
    pub fn is_type_definition_or_extension(&self) -> bool {
        matches!(
            self,
            NodeKind::ObjectTypeDefinition
                | NodeKind::ObjectTypeExtension
                | NodeKind::InterfaceTypeDefinition
                | NodeKind::InterfaceTypeExtension
                | NodeKind::ScalarTypeDefinition
                | NodeKind::ScalarTypeExtension
                | NodeKind::UnionTypeDefinition
                | NodeKind::UnionTypeExtension
                | NodeKind::EnumTypeDefinition
                | NodeKind::EnumTypeExtension
                | NodeKind::InputObjectTypeDefinition
                | NodeKind::InputObjectTypeExtension
        )
    }

    /// Returns `true` for type extensions (`extend type ...` and friends).
    pub fn is_type_extension(&self) -> bool {
        matches!(
            self,
            NodeKind::ObjectTypeExtension
                | NodeKind::InterfaceTypeExtension
                | NodeKind::ScalarTypeExtension
                | NodeKind::UnionTypeExtension
                | NodeKind::EnumTypeExtension
                | NodeKind::InputObjectTypeExtension
        )
    }

    /// Returns `true` for kinds whose selections have fields (object and
    /// interface types and their extensions).
    pub fn has_field_definitions(&self) -> bool {
        matches!(
            self,
            NodeKind::ObjectTypeDefinition
                | NodeKind::ObjectTypeExtension
                | NodeKind::InterfaceTypeDefinition
                | NodeKind::InterfaceTypeExtension
        )
    }
}

/// The universal handle for any node of a [`Document`](crate::ast::Document):
/// which table (`kind`) and where in it (`node_ref`).
///
/// A `Node` never embeds a pointer; it is only meaningful alongside the
/// document it came from.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Node {
    pub kind: NodeKind,
    pub node_ref: Ref,
}

impl Node {
    pub fn new(kind: NodeKind, node_ref: Ref) -> Self {
        Self { kind, node_ref }
    }
}
