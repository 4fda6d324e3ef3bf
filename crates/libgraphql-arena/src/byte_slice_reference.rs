/// Compact byte-offset reference into an [`Input`](crate::Input). 8 bytes.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// raw bytes of one specific `Input`. Both offsets are 0-based.
///
/// A `ByteSliceReference` carries no pointer back to the `Input` it was
/// produced from: resolving it against any other `Input` yields unrelated
/// bytes. APIs that compare references across documents therefore always take
/// the owning `Input` alongside each reference (see
/// [`Input::byte_slice_equals()`](crate::Input::byte_slice_equals)).
///
/// `u32` offsets support inputs up to 4 GiB.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[repr(C)]
pub struct ByteSliceReference {
    /// Byte offset of the first byte (0-based, inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (0-based, exclusive).
    pub end: u32,
}

impl ByteSliceReference {
    /// Creates a new reference from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of the referenced region in bytes.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the referenced region has zero length.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}
