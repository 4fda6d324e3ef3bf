use crate::ReportError;

/// What a visitor callback tells the [`Walker`](crate::walker::Walker) to do
/// next.
#[derive(Debug, Default)]
pub enum Instruction {
    /// Keep walking.
    #[default]
    Continue,

    /// Don't descend into the current node's children. Only meaningful from
    /// an enter callback; the node's leave callbacks still run.
    SkipNode,

    /// End the walk. No further callbacks run, not even pending leave
    /// callbacks.
    Stop,

    /// Record the error in the walk's [`Report`](crate::Report) and end the
    /// walk.
    StopWithError(ReportError),
}

impl Instruction {
    pub fn stop_with_error(error: impl Into<ReportError>) -> Self {
        Instruction::StopWithError(error.into())
    }
}
