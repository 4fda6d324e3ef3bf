use crate::ByteSliceReference;
use crate::Position;
use crate::ast::DelimitedList;
use crate::ast::DirectiveList;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::ref_list::impl_linked;

/// `{ selection ... }`. Members index `selections`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SelectionSet {
    pub lbrace: Position,
    pub rbrace: Position,
    pub selections: RefList,
}

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
pub enum SelectionKind {
    Field,
    InlineFragment,
    FragmentSpread,
}

/// One member of a selection set. `node_ref` indexes the table named by
/// `kind`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Selection {
    pub kind: SelectionKind,
    pub node_ref: Ref,
    pub next: Option<Ref>,
}

/// `alias:` preceding a field name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Alias {
    pub name: ByteSliceReference,
    pub colon: Position,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    pub alias: Option<Alias>,
    pub name: ByteSliceReference,
    /// Refs into `arguments`.
    pub arguments: DelimitedList,
    pub directives: DirectiveList,
    /// Indexes `selection_sets`.
    pub selection_set: Option<Ref>,
    pub position: Position,
}

/// `on Type`. `named_type` indexes `types`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypeCondition {
    pub on: Position,
    pub named_type: Ref,
}

/// `... on Type @directives { ... }`; the type condition is optional.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InlineFragment {
    pub spread: Position,
    pub type_condition: Option<TypeCondition>,
    pub directives: DirectiveList,
    pub selection_set: Ref,
    pub position: Position,
}

/// `...FragmentName @directives`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FragmentSpread {
    pub spread: Position,
    pub fragment_name: ByteSliceReference,
    pub directives: DirectiveList,
    pub position: Position,
}

impl_linked!(Selection);
