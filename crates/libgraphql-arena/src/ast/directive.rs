use crate::ByteSliceReference;
use crate::Position;
use crate::ast::DelimitedList;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::ref_list::impl_linked;

/// `name: value` in a field's or directive's argument list. `value` indexes
/// `values`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Argument {
    pub name: ByteSliceReference,
    pub colon: Position,
    pub value: Ref,
    pub position: Position,
    pub next: Option<Ref>,
}

/// `@name(arguments)` applied to a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Directive {
    pub at: Position,
    pub name: ByteSliceReference,
    /// Refs into `arguments`.
    pub arguments: DelimitedList,
    pub position: Position,
    pub next: Option<Ref>,
}

/// The directives applied to a node. Members index `directives`.
pub type DirectiveList = RefList;

impl_linked!(Argument, Directive);
