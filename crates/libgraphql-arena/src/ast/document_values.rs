//! Value accessors on [`Document`].

use crate::Input;
use crate::ast::Document;
use crate::ast::ObjectField;
use crate::ast::Ref;
use crate::ast::RefListIter;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::token::StringValueError;
use crate::token::cook_string_value;
use std::borrow::Cow;

impl Document {
    pub fn value(&self, value: Ref) -> Value {
        self.values[value as usize]
    }

    pub fn value_kind(&self, value: Ref) -> ValueKind {
        self.values[value as usize].kind
    }

    /// The raw literal of a scalar value: the unsigned number, the string
    /// content between the quotes, the enum or variable name, or
    /// `true`/`false`/`null`. Empty for lists and objects.
    pub fn value_content_bytes(&self, value: Ref) -> &[u8] {
        let value = &self.values[value as usize];
        let r = value.value_ref as usize;
        match value.kind {
            ValueKind::Int => self.input.byte_slice(self.int_values[r].raw),
            ValueKind::Float => self.input.byte_slice(self.float_values[r].raw),
            ValueKind::String => self.input.byte_slice(self.string_values[r].content),
            ValueKind::Enum => self.input.byte_slice(self.enum_values[r].name),
            ValueKind::Variable => self.input.byte_slice(self.variable_values[r].name),
            ValueKind::Boolean if value.value_ref == 1 => b"true",
            ValueKind::Boolean => b"false",
            ValueKind::Null => b"null",
            ValueKind::List | ValueKind::Object => &[],
        }
    }

    pub fn int_value_as_i64(&self, int_value: Ref) -> Option<i64> {
        let int_value = &self.int_values[int_value as usize];
        let raw = std::str::from_utf8(self.input.byte_slice(int_value.raw)).ok()?;
        let magnitude: i128 = raw.parse().ok()?;
        let value = if int_value.negative_sign.is_some() {
            -magnitude
        } else {
            magnitude
        };
        i64::try_from(value).ok()
    }

    /// `None` if the literal doesn't fit a GraphQL `Int` (32 bits).
    pub fn int_value_as_i32(&self, int_value: Ref) -> Option<i32> {
        self.int_value_as_i64(int_value)
            .and_then(|value| i32::try_from(value).ok())
    }

    pub fn float_value_as_f64(&self, float_value: Ref) -> Option<f64> {
        let float_value = &self.float_values[float_value as usize];
        let raw = std::str::from_utf8(self.input.byte_slice(float_value.raw)).ok()?;
        let value: f64 = raw.parse().ok()?;
        Some(if float_value.negative_sign.is_some() { -value } else { value })
    }

    /// The cooked value of a string: escapes processed and, for block
    /// strings, common indentation removed.
    pub fn string_value_content(
        &self,
        string_value: Ref,
    ) -> Result<Cow<'_, str>, StringValueError> {
        let string_value = &self.string_values[string_value as usize];
        cook_string_value(
            self.input.byte_slice(string_value.content),
            string_value.block_string,
        )
    }

    pub fn string_value_content_string(
        &self,
        string_value: Ref,
    ) -> Result<String, StringValueError> {
        self.string_value_content(string_value).map(Cow::into_owned)
    }

    /// `Some` for boolean values (refs into `values`).
    pub fn boolean_value(&self, value: Ref) -> Option<bool> {
        let value = &self.values[value as usize];
        (value.kind == ValueKind::Boolean).then_some(value.value_ref == 1)
    }

    pub fn enum_value_name_bytes(&self, enum_value: Ref) -> &[u8] {
        self.input.byte_slice(self.enum_values[enum_value as usize].name)
    }

    pub fn enum_value_name_string(&self, enum_value: Ref) -> String {
        self.input.byte_slice_string(self.enum_values[enum_value as usize].name)
    }

    /// The variable name, without `$`.
    pub fn variable_value_name_bytes(&self, variable_value: Ref) -> &[u8] {
        self.input
            .byte_slice(self.variable_values[variable_value as usize].name)
    }

    pub fn variable_value_name_string(&self, variable_value: Ref) -> String {
        self.input
            .byte_slice_string(self.variable_values[variable_value as usize].name)
    }

    /// The member refs (into `values`) of a list value.
    pub fn list_value_values(&self, list_value: Ref) -> RefListIter<'_, Value> {
        self.list_values[list_value as usize].values.iter(&self.values)
    }

    /// The member refs (into `object_fields`) of an object value.
    pub fn object_value_fields(
        &self,
        object_value: Ref,
    ) -> RefListIter<'_, ObjectField> {
        self.object_values[object_value as usize]
            .fields
            .iter(&self.object_fields)
    }

    /// Deep equality of two values, possibly from different documents.
    ///
    /// Object fields compare in order. Numbers compare by their literal
    /// (so `1.0` and `1.00` differ); strings by their raw content.
    pub fn values_are_equal(&self, left: Ref, other: &Document, right: Ref) -> bool {
        let left_value = self.values[left as usize];
        let right_value = other.values[right as usize];
        if left_value.kind != right_value.kind {
            return false;
        }
        let (l, r) = (left_value.value_ref as usize, right_value.value_ref as usize);
        match left_value.kind {
            ValueKind::Boolean => left_value.value_ref == right_value.value_ref,
            ValueKind::Null => true,
            ValueKind::Int => {
                let (a, b) = (&self.int_values[l], &other.int_values[r]);
                a.negative_sign.is_some() == b.negative_sign.is_some()
                    && Input::byte_slice_equals(a.raw, &self.input, b.raw, &other.input)
            },
            ValueKind::Float => {
                let (a, b) = (&self.float_values[l], &other.float_values[r]);
                a.negative_sign.is_some() == b.negative_sign.is_some()
                    && Input::byte_slice_equals(a.raw, &self.input, b.raw, &other.input)
            },
            ValueKind::String => {
                let (a, b) = (&self.string_values[l], &other.string_values[r]);
                a.block_string == b.block_string
                    && Input::byte_slice_equals(
                        a.content,
                        &self.input,
                        b.content,
                        &other.input,
                    )
            },
            ValueKind::Enum => Input::byte_slice_equals(
                self.enum_values[l].name,
                &self.input,
                other.enum_values[r].name,
                &other.input,
            ),
            ValueKind::Variable => Input::byte_slice_equals(
                self.variable_values[l].name,
                &self.input,
                other.variable_values[r].name,
                &other.input,
            ),
            ValueKind::List => {
                let mut left_members = self.list_value_values(left_value.value_ref);
                let mut right_members = other.list_value_values(right_value.value_ref);
                loop {
                    match (left_members.next(), right_members.next()) {
                        (None, None) => return true,
                        (Some(a), Some(b)) if self.values_are_equal(a, other, b) => (),
                        _ => return false,
                    }
                }
            },
            ValueKind::Object => {
                let mut left_fields = self.object_value_fields(left_value.value_ref);
                let mut right_fields = other.object_value_fields(right_value.value_ref);
                loop {
                    match (left_fields.next(), right_fields.next()) {
                        (None, None) => return true,
                        (Some(a), Some(b)) => {
                            let a = &self.object_fields[a as usize];
                            let b = &other.object_fields[b as usize];
                            let same_name = Input::byte_slice_equals(
                                a.name,
                                &self.input,
                                b.name,
                                &other.input,
                            );
                            if !same_name
                                || !self.values_are_equal(a.value, other, b.value)
                            {
                                return false;
                            }
                        },
                        _ => return false,
                    }
                }
            },
        }
    }
}
