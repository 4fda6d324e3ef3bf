/// The lifecycle of a [`Walker`](crate::walker::Walker)'s most recent walk.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
)]
pub enum WalkerState {
    #[default]
    NotStarted,
    InProgress,
    /// Every node was visited (or skipped).
    Completed,
    /// A callback returned [`Instruction::Stop`](crate::walker::Instruction::Stop)
    /// or [`Instruction::StopWithError`](crate::walker::Instruction::StopWithError),
    /// or the schema was missing a type the walk depended on.
    Aborted,
}
