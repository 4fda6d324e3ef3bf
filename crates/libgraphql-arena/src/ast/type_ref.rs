use crate::ByteSliceReference;
use crate::Position;
use crate::ast::Ref;
use crate::ast::ref_list::impl_linked;

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
pub enum TypeKind {
    Named,
    List,
    NonNull,
}

/// A type reference: `Name`, `[T]` or `T!`, stored in the `types` table.
///
/// Wrapping types point at the wrapped type through `of_type`. Chains are
/// always finite; the parser bounds their depth.
///
/// `next` links the members of `implements` and union member lists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Type {
    pub kind: TypeKind,
    /// The type name. Only set for [`TypeKind::Named`].
    pub name: ByteSliceReference,
    /// `[` for list types.
    pub open: Position,
    /// `]` for list types.
    pub close: Position,
    /// `!` for non-null types.
    pub bang: Position,
    /// The wrapped type for [`TypeKind::List`] and [`TypeKind::NonNull`].
    pub of_type: Option<Ref>,
    pub position: Position,
    pub next: Option<Ref>,
}

impl Type {
    pub fn named(name: ByteSliceReference, position: Position) -> Self {
        Self {
            kind: TypeKind::Named,
            name,
            open: Position::default(),
            close: Position::default(),
            bang: Position::default(),
            of_type: None,
            position,
            next: None,
        }
    }

    pub fn list(of_type: Ref, open: Position, close: Position) -> Self {
        Self {
            kind: TypeKind::List,
            name: ByteSliceReference::default(),
            open,
            close,
            bang: Position::default(),
            of_type: Some(of_type),
            position: Position::span(open, close),
            next: None,
        }
    }

    pub fn non_null(of_type: Ref, inner_position: Position, bang: Position) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: ByteSliceReference::default(),
            open: Position::default(),
            close: Position::default(),
            bang,
            of_type: Some(of_type),
            position: Position::span(inner_position, bang),
            next: None,
        }
    }
}

impl_linked!(Type);
