use crate::ByteSliceReference;
use crate::Position;
use crate::ast::DefaultValue;
use crate::ast::DelimitedList;
use crate::ast::Description;
use crate::ast::DirectiveList;
use crate::ast::Extension;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::ref_list::impl_linked;

/// `type Name implements A & B @directives { fields }`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ObjectTypeDefinition {
    pub description: Option<Description>,
    pub type_keyword: Position,
    pub name: ByteSliceReference,
    /// Named types (refs into `types`).
    pub implements_interfaces: RefList,
    pub directives: DirectiveList,
    /// Refs into `field_definitions`.
    pub fields: DelimitedList,
    pub position: Position,
}

/// `interface Name implements A @directives { fields }`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub description: Option<Description>,
    pub interface_keyword: Position,
    pub name: ByteSliceReference,
    pub implements_interfaces: RefList,
    pub directives: DirectiveList,
    pub fields: DelimitedList,
    pub position: Position,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarTypeDefinition {
    pub description: Option<Description>,
    pub scalar_keyword: Position,
    pub name: ByteSliceReference,
    pub directives: DirectiveList,
    pub position: Position,
}

/// `union Name @directives = A | B`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnionTypeDefinition {
    pub description: Option<Description>,
    pub union_keyword: Position,
    pub name: ByteSliceReference,
    pub directives: DirectiveList,
    pub equals: Option<Position>,
    /// Named types (refs into `types`).
    pub member_types: RefList,
    pub position: Position,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnumTypeDefinition {
    pub description: Option<Description>,
    pub enum_keyword: Position,
    pub name: ByteSliceReference,
    pub directives: DirectiveList,
    /// Refs into `enum_value_definitions`.
    pub values: DelimitedList,
    pub position: Position,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub description: Option<Description>,
    pub input_keyword: Position,
    pub name: ByteSliceReference,
    pub directives: DirectiveList,
    /// Refs into `input_value_definitions`.
    pub fields: DelimitedList,
    pub position: Position,
}

/// `name(arguments): Type @directives` in an object or interface type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDefinition {
    pub description: Option<Description>,
    pub name: ByteSliceReference,
    /// Refs into `input_value_definitions`.
    pub arguments: DelimitedList,
    pub colon: Position,
    /// Indexes `types`.
    pub type_ref: Ref,
    pub directives: DirectiveList,
    pub position: Position,
    pub next: Option<Ref>,
}

/// An argument definition or an input object field:
/// `name: Type = default @directives`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InputValueDefinition {
    pub description: Option<Description>,
    pub name: ByteSliceReference,
    pub colon: Position,
    pub type_ref: Ref,
    pub default_value: Option<DefaultValue>,
    pub directives: DirectiveList,
    pub position: Position,
    pub next: Option<Ref>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnumValueDefinition {
    pub description: Option<Description>,
    pub name: ByteSliceReference,
    pub directives: DirectiveList,
    pub position: Position,
    pub next: Option<Ref>,
}

pub type ObjectTypeExtension = Extension<ObjectTypeDefinition>;
pub type InterfaceTypeExtension = Extension<InterfaceTypeDefinition>;
pub type ScalarTypeExtension = Extension<ScalarTypeDefinition>;
pub type UnionTypeExtension = Extension<UnionTypeDefinition>;
pub type EnumTypeExtension = Extension<EnumTypeDefinition>;
pub type InputObjectTypeExtension = Extension<InputObjectTypeDefinition>;

impl_linked!(FieldDefinition, InputValueDefinition, EnumValueDefinition);
