/// Line/column span of a token or node in its source text.
///
/// This is a plain `Copy` struct so that every arena entry can carry its own
/// position inline without any allocation.
///
/// # Indexing Convention
///
/// **All values are 1-based**, matching the `locations` of GraphQL error
/// responses:
/// - `line_start`/`line_end`: 1 = first line of the document
/// - `char_start`: UTF-8 character column of the first character (1-based)
/// - `char_end`: column immediately after the last character (exclusive)
///
/// Columns count characters, not bytes: `"🎉"` (4 bytes) advances the column
/// by 1.
///
/// A zeroed position (the `Default`) marks "not present", e.g. a synthesized
/// node created by the [`Importer`](crate::Importer).
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
pub struct Position {
    pub line_start: u32,
    pub char_start: u32,
    pub line_end: u32,
    pub char_end: u32,
}

impl Position {
    pub fn new(
        line_start: u32,
        char_start: u32,
        line_end: u32,
        char_end: u32,
    ) -> Self {
        Self {
            line_start,
            char_start,
            line_end,
            char_end,
        }
    }

    /// Builds a position spanning from the start of `start` to the end of
    /// `end`.
    pub fn span(start: Position, end: Position) -> Self {
        Self {
            line_start: start.line_start,
            char_start: start.char_start,
            line_end: end.line_end,
            char_end: end.char_end,
        }
    }

    /// Returns `true` if this position was never set (see type docs).
    pub fn is_unset(&self) -> bool {
        self.line_start == 0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line_start, self.char_start)
    }
}
