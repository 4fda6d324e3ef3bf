use crate::ParseError;
use crate::PathItem;
use crate::Position;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::path_item::format_path;
use smallvec::SmallVec;

/// A 1-based line/column location, as in the `locations` of a GraphQL error
/// response.
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
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl From<Position> for Location {
    fn from(position: Position) -> Self {
        Self {
            line: position.line_start,
            column: position.char_start,
        }
    }
}

/// A user-facing error: the document (not the library) is at fault.
#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    thiserror::Error,
)]
#[error("{message}")]
pub struct ExternalError {
    pub message: String,

    /// The response path where the error was found. Empty when not
    /// applicable.
    pub path: Vec<PathItem>,

    pub locations: SmallVec<[Location; 2]>,
}

impl ExternalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
            locations: SmallVec::new(),
        }
    }

    /// Adds `position` to the locations unless it is unset.
    pub fn with_location(mut self, position: Position) -> Self {
        if !position.is_unset() {
            self.locations.push(Location::from(position));
        }
        self
    }

    pub fn with_path(mut self, path: Vec<PathItem>) -> Self {
        self.path = path;
        self
    }

    pub fn field_undefined(field_name: &str, type_name: &str, position: Position) -> Self {
        Self::new(format!(
            "field: {field_name} not defined on type: {type_name}"
        ))
        .with_location(position)
    }

    pub fn type_undefined(type_name: &str, position: Position) -> Self {
        Self::new(format!("type not defined: {type_name}")).with_location(position)
    }

    pub fn operation_root_type_undefined(operation_type: &str, position: Position) -> Self {
        Self::new(format!(
            "schema has no root type for operation type: {operation_type}"
        ))
        .with_location(position)
    }
}

impl From<&ParseError> for ExternalError {
    fn from(error: &ParseError) -> Self {
        Self::new(error.message()).with_location(error.position())
    }
}

/// An error in how the library was driven (a dangling ref, a node of the
/// wrong kind). Never caused by document content.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InternalError {
    #[error("invalid ref {node_ref} into the {kind:?} table")]
    InvalidRef { kind: NodeKind, node_ref: Ref },

    #[error("unexpected node kind {kind:?}")]
    UnexpectedNodeKind { kind: NodeKind },

    #[error("{0}")]
    Message(String),
}

/// Either kind of error, as carried by
/// [`Instruction::StopWithError`](crate::walker::Instruction::StopWithError).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    External(#[from] ExternalError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Accumulates the errors of one parse or walk.
///
/// Walking is accumulative: visitors may add any number of errors, and
/// aborting a walk keeps everything collected so far.
#[derive(Clone, Debug, Default)]
pub struct Report {
    pub internal_errors: Vec<InternalError>,
    pub external_errors: Vec<ExternalError>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_external_error(&mut self, error: ExternalError) {
        self.external_errors.push(error);
    }

    pub fn add_internal_error(&mut self, error: InternalError) {
        self.internal_errors.push(error);
    }

    pub fn add_error(&mut self, error: ReportError) {
        match error {
            ReportError::External(error) => self.add_external_error(error),
            ReportError::Internal(error) => self.add_internal_error(error),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.internal_errors.is_empty() || !self.external_errors.is_empty()
    }

    pub fn reset(&mut self) {
        self.internal_errors.clear();
        self.external_errors.clear();
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for error in &self.internal_errors {
            writeln!(f, "internal: {error}")?;
        }
        for error in &self.external_errors {
            write!(f, "external: {}", error.message)?;
            for location in &error.locations {
                write!(f, " ({}:{})", location.line, location.column)?;
            }
            if !error.path.is_empty() {
                write!(f, " at {}", format_path(&error.path))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
