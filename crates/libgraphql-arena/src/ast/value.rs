use crate::ByteSliceReference;
use crate::Position;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::ref_list::impl_linked;

/// Which payload table a [`Value`]'s `value_ref` points into.
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
pub enum ValueKind {
    /// `value_ref` indexes `variable_values`.
    Variable,
    /// `value_ref` indexes `int_values`.
    Int,
    /// `value_ref` indexes `float_values`.
    Float,
    /// `value_ref` indexes `string_values`.
    String,
    /// No table: `value_ref` is `0` for `false` and `1` for `true`.
    Boolean,
    /// No payload.
    Null,
    /// `value_ref` indexes `enum_values`.
    Enum,
    /// `value_ref` indexes `list_values`.
    List,
    /// `value_ref` indexes `object_values`.
    Object,
}

/// A value of any kind, stored in the generic `values` table.
///
/// Values nest only through refs, so a `Value` is `Copy` and the same size
/// regardless of how deeply its payload nests. `next` links the members of a
/// list value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Value {
    pub kind: ValueKind,
    pub value_ref: Ref,
    pub position: Position,
    pub next: Option<Ref>,
}

/// `123` or `-123`. The literal never includes the sign.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IntValue {
    pub negative_sign: Option<Position>,
    pub raw: ByteSliceReference,
    pub position: Position,
}

/// `1.5`, `-1.5e3`. The literal never includes the sign.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FloatValue {
    pub negative_sign: Option<Position>,
    pub raw: ByteSliceReference,
    pub position: Position,
}

/// A `"..."` or `"""..."""` string.
///
/// `content` is the raw source text between the quotes, escapes included.
/// Use [`Document::string_value_content_string()`](crate::ast::Document::string_value_content_string)
/// for the cooked value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StringValue {
    pub content: ByteSliceReference,
    pub block_string: bool,
    pub position: Position,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnumValue {
    pub name: ByteSliceReference,
    pub position: Position,
}

/// `$name`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VariableValue {
    pub dollar: Position,
    pub name: ByteSliceReference,
    pub position: Position,
}

/// `[ ... ]`. Members are refs into `values`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListValue {
    pub lbrack: Position,
    pub rbrack: Position,
    pub values: RefList,
}

/// `{ ... }`. Members are refs into `object_fields`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ObjectValue {
    pub lbrace: Position,
    pub rbrace: Position,
    pub fields: RefList,
}

/// `name: value` inside an object value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ObjectField {
    pub name: ByteSliceReference,
    pub colon: Position,
    pub value: Ref,
    pub position: Position,
    pub next: Option<Ref>,
}

/// `= value` after a variable or input value definition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DefaultValue {
    pub equals: Position,
    pub value: Ref,
}

impl_linked!(Value, ObjectField);
