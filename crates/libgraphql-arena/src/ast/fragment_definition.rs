use crate::ByteSliceReference;
use crate::Position;
use crate::ast::DirectiveList;
use crate::ast::Ref;
use crate::ast::TypeCondition;

/// `fragment Name on Type @directives { ... }`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FragmentDefinition {
    pub fragment_keyword: Position,
    pub name: ByteSliceReference,
    pub type_condition: TypeCondition,
    pub directives: DirectiveList,
    pub selection_set: Ref,
    pub position: Position,
}
