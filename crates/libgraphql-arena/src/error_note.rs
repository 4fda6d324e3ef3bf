use smallvec::SmallVec;

/// The kind of an [`ErrorNote`] (determines how the note is rendered).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorNoteKind {
    /// Context about the error. Rendered as `= note: ...`.
    General,

    /// An actionable suggestion. Rendered as `= help: ...`.
    Help,

    /// A link into the GraphQL specification. Rendered as `= spec: ...`.
    Spec,
}

/// Additional context attached to a [`ParseError`](crate::ParseError).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorNote {
    pub kind: ErrorNoteKind,
    pub message: String,
}

impl ErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Help,
            message: message.into(),
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Spec,
            message: url.into(),
        }
    }
}

/// Most errors carry zero to two notes.
pub type ErrorNotes = SmallVec<[ErrorNote; 2]>;
