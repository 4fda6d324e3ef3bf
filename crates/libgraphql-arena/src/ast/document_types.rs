//! Type reference accessors on [`Document`].

use crate::Input;
use crate::ast::Document;
use crate::ast::Ref;
use crate::ast::TypeKind;

impl Document {
    /// Follows `of_type` links down to the innermost named type.
    pub fn type_unwrapped(&self, mut type_ref: Ref) -> Ref {
        while let Some(of_type) = self.types[type_ref as usize].of_type {
            type_ref = of_type;
        }
        type_ref
    }

    /// The innermost named type's name: `User` for `[User!]!`.
    pub fn type_name_bytes(&self, type_ref: Ref) -> &[u8] {
        let named = self.type_unwrapped(type_ref);
        self.input.byte_slice(self.types[named as usize].name)
    }

    pub fn type_name_string(&self, type_ref: Ref) -> String {
        String::from_utf8_lossy(self.type_name_bytes(type_ref)).into_owned()
    }

    pub fn type_is_non_null(&self, type_ref: Ref) -> bool {
        self.types[type_ref as usize].kind == TypeKind::NonNull
    }

    /// `true` for `[T]` and `[T]!`.
    pub fn type_is_list(&self, type_ref: Ref) -> bool {
        let ty = &self.types[type_ref as usize];
        match (ty.kind, ty.of_type) {
            (TypeKind::List, _) => true,
            (TypeKind::NonNull, Some(of_type)) => {
                self.types[of_type as usize].kind == TypeKind::List
            },
            _ => false,
        }
    }

    /// Renders a type reference as GraphQL text, e.g. `[String!]!`.
    pub fn type_string(&self, type_ref: Ref) -> String {
        let mut out = String::new();
        self.write_type(type_ref, &mut out);
        out
    }

    fn write_type(&self, type_ref: Ref, out: &mut String) {
        let ty = &self.types[type_ref as usize];
        match (ty.kind, ty.of_type) {
            (TypeKind::Named, _) => out.push_str(&self.input.byte_slice_string(ty.name)),
            (TypeKind::List, Some(of_type)) => {
                out.push('[');
                self.write_type(of_type, out);
                out.push(']');
            },
            (TypeKind::NonNull, Some(of_type)) => {
                self.write_type(of_type, out);
                out.push('!');
            },
            (_, None) => (),
        }
    }

    /// Structural equality of two type references, possibly from different
    /// documents.
    pub fn types_are_equal(&self, left: Ref, other: &Document, right: Ref) -> bool {
        let left_type = &self.types[left as usize];
        let right_type = &other.types[right as usize];
        if left_type.kind != right_type.kind {
            return false;
        }
        match (left_type.of_type, right_type.of_type) {
            (Some(left_of), Some(right_of)) => {
                self.types_are_equal(left_of, other, right_of)
            },
            (None, None) => Input::byte_slice_equals(
                left_type.name,
                &self.input,
                right_type.name,
                &other.input,
            ),
            _ => false,
        }
    }
}
