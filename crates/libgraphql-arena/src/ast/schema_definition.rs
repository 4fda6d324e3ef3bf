use crate::Position;
use crate::ast::DelimitedList;
use crate::ast::Description;
use crate::ast::DirectiveList;
use crate::ast::OperationType;
use crate::ast::Ref;
use crate::ast::ref_list::impl_linked;

/// `schema @directives { query: Query ... }`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SchemaDefinition {
    pub description: Option<Description>,
    pub schema_keyword: Position,
    pub directives: DirectiveList,
    /// Refs into `root_operation_type_definitions`. Absent only in a
    /// `extend schema @directive` extension.
    pub root_operation_types: DelimitedList,
    pub position: Position,
}

/// `query: Query` inside a schema definition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RootOperationTypeDefinition {
    pub operation_type: OperationType,
    pub operation_type_position: Position,
    pub colon: Position,
    /// Indexes `types`.
    pub named_type: Ref,
    pub position: Position,
    pub next: Option<Ref>,
}

/// `extend <definition>`: a type system extension reuses the shape of the
/// definition it extends.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Extension<T> {
    pub extend: Position,
    pub definition: T,
}

impl<T> Extension<T> {
    pub fn new(extend: Position, definition: T) -> Self {
        Self { extend, definition }
    }
}

pub type SchemaExtension = Extension<SchemaDefinition>;

impl_linked!(RootOperationTypeDefinition);
