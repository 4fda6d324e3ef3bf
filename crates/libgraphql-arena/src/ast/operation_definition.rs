use crate::ByteSliceReference;
use crate::Position;
use crate::ast::DefaultValue;
use crate::ast::DelimitedList;
use crate::ast::DirectiveList;
use crate::ast::Ref;
use crate::ast::ref_list::impl_linked;
use crate::token::IdentKeyword;

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
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }

    /// The conventional root type name (`Query`, `Mutation`,
    /// `Subscription`) used when a schema has no schema definition.
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            OperationType::Query => "Query",
            OperationType::Mutation => "Mutation",
            OperationType::Subscription => "Subscription",
        }
    }

    pub fn from_ident_keyword(keyword: IdentKeyword) -> Option<Self> {
        match keyword {
            IdentKeyword::Query => Some(OperationType::Query),
            IdentKeyword::Mutation => Some(OperationType::Mutation),
            IdentKeyword::Subscription => Some(OperationType::Subscription),
            _ => None,
        }
    }
}

/// A named or anonymous operation, or the `{ ... }` query shorthand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    /// Position of the `query`/`mutation`/`subscription` keyword. `None`
    /// for the shorthand form.
    pub operation_type_position: Option<Position>,
    pub name: Option<ByteSliceReference>,
    /// Refs into `variable_definitions`.
    pub variable_definitions: DelimitedList,
    pub directives: DirectiveList,
    pub selection_set: Ref,
    pub position: Position,
}

impl OperationDefinition {
    pub fn is_shorthand(&self) -> bool {
        self.operation_type_position.is_none()
    }
}

/// `$name: Type = default @directives`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VariableDefinition {
    pub dollar: Position,
    pub name: ByteSliceReference,
    pub colon: Position,
    /// Indexes `types`.
    pub type_ref: Ref,
    pub default_value: Option<DefaultValue>,
    pub directives: DirectiveList,
    pub position: Position,
    pub next: Option<Ref>,
}

impl_linked!(VariableDefinition);
