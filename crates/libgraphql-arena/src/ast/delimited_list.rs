use crate::Position;
use crate::ast::RefList;

/// A sibling list enclosed in delimiters: `( ... )` argument and variable
/// definition lists, `{ ... }` field, enum value and root operation type
/// lists.
///
/// An absent list is the `Default`: unset positions and no members. The
/// parser never produces a present-but-empty list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DelimitedList {
    pub open: Position,
    pub close: Position,
    pub refs: RefList,
}

impl DelimitedList {
    /// Returns `true` if the list has no members (or is absent).
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}
