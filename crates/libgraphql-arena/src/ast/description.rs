use crate::ByteSliceReference;
use crate::Position;

/// A description string preceding a type system definition.
///
/// Like [`StringValue`](crate::ast::StringValue), `content` is the raw text
/// between the quotes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Description {
    pub content: ByteSliceReference,
    pub block_string: bool,
    pub position: Position,
}
