//! A depth-first [`Walker`] over arena documents.
//!
//! Visitors implement one enter or leave trait per node kind they care about
//! and are registered on the walker. Each callback receives the node's
//! [`Ref`](crate::ast::Ref) and a [`VisitContext`] describing where the walk
//! is, and answers with an [`Instruction`].

mod graph_walker;
mod instruction;
mod visit_context;
mod visitors;
mod walker_state;

pub use graph_walker::Walker;
pub use instruction::Instruction;
pub use visit_context::VisitContext;
pub use visitors::*;
pub use walker_state::WalkerState;

#[cfg(test)]
mod tests;
