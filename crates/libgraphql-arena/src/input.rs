//! Owned source bytes plus zero-copy views into them.

use crate::ByteSliceReference;
use std::borrow::Cow;

/// The raw source bytes of one [`Document`](crate::ast::Document).
///
/// Every piece of text stored in a document's tables is a
/// [`ByteSliceReference`] into the document's `Input` rather than an owned
/// string. Text that doesn't exist in the original source (e.g. literals
/// copied in by the [`Importer`](crate::Importer)) is appended to the end of
/// the buffer via [`append_input_bytes()`](Self::append_input_bytes).
///
/// Resetting an `Input` keeps the buffer's capacity so that a pooled
/// `Document` can be reused for many parses without reallocating.
#[derive(Clone, Debug, Default)]
pub struct Input {
    raw_bytes: Vec<u8>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input holding a copy of `source`.
    pub fn from_string(source: &str) -> Self {
        Self {
            raw_bytes: source.as_bytes().to_vec(),
        }
    }

    /// Replaces the buffer with `bytes`.
    ///
    /// Every `ByteSliceReference` produced before this call is invalidated.
    pub fn reset_input_bytes(&mut self, bytes: &[u8]) {
        self.raw_bytes.clear();
        self.raw_bytes.extend_from_slice(bytes);
    }

    /// Replaces the buffer with the UTF-8 bytes of `source`.
    pub fn reset_input_string(&mut self, source: &str) {
        self.reset_input_bytes(source.as_bytes());
    }

    /// Empties the buffer (capacity is retained).
    pub fn reset(&mut self) {
        self.raw_bytes.clear();
    }

    /// Appends `bytes` to the end of the buffer and returns a reference to
    /// the appended region.
    pub fn append_input_bytes(&mut self, bytes: &[u8]) -> ByteSliceReference {
        let start = self.raw_bytes.len() as u32;
        self.raw_bytes.extend_from_slice(bytes);
        ByteSliceReference::new(start, self.raw_bytes.len() as u32)
    }

    /// Appends the UTF-8 bytes of `value` and returns a reference to them.
    pub fn append_input_string(&mut self, value: &str) -> ByteSliceReference {
        self.append_input_bytes(value.as_bytes())
    }

    /// The whole buffer.
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    pub fn len(&self) -> usize {
        self.raw_bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_bytes.is_empty()
    }

    /// Zero-copy view of the referenced bytes, or `None` if the reference
    /// does not lie within this input.
    pub fn try_byte_slice(&self, reference: ByteSliceReference) -> Option<&[u8]> {
        self.raw_bytes
            .get(reference.start as usize..reference.end as usize)
    }

    /// Zero-copy view of the referenced bytes.
    ///
    /// A reference that does not lie within this input (e.g. one produced by
    /// a different `Input`) resolves to an empty slice.
    pub fn byte_slice(&self, reference: ByteSliceReference) -> &[u8] {
        self.try_byte_slice(reference).unwrap_or_default()
    }

    /// The referenced bytes as `&str`, or an empty string if they are not
    /// valid UTF-8.
    ///
    /// Names, numbers and punctuation produced by the lexer are always ASCII,
    /// so this never loses data for them.
    pub fn byte_slice_str(&self, reference: ByteSliceReference) -> &str {
        std::str::from_utf8(self.byte_slice(reference)).unwrap_or_default()
    }

    /// Copies the referenced bytes into an owned `String` (lossy for
    /// invalid UTF-8). Intended for error messages.
    pub fn byte_slice_string(&self, reference: ByteSliceReference) -> String {
        match String::from_utf8_lossy(self.byte_slice(reference)) {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => s,
        }
    }

    /// Byte-wise comparison of two references that may belong to different
    /// inputs.
    pub fn byte_slice_equals(
        reference_a: ByteSliceReference,
        input_a: &Input,
        reference_b: ByteSliceReference,
        input_b: &Input,
    ) -> bool {
        if reference_a.len() != reference_b.len() {
            return false;
        }
        input_a.byte_slice(reference_a) == input_b.byte_slice(reference_b)
    }
}
