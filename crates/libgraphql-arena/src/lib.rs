//! An arena-backed GraphQL core.
//!
//! A [`Parser`] reads GraphQL source through a zero-copy [`Lexer`] into a
//! [`Document`](ast::Document), which stores every node in flat per-kind
//! tables addressed by integer refs. On top of the arena sit a [`Printer`]
//! that renders documents back to GraphQL, an [`Importer`] that deep-copies
//! executable nodes between documents, and a schema-aware
//! [`Walker`](walker::Walker).

pub mod ast;
mod byte_slice_reference;
mod error_note;
mod importer;
mod input;
mod lexer;
mod parse_error;
mod parse_error_kind;
mod parser;
mod path_item;
mod position;
mod printer;
mod report;
pub mod token;
pub mod walker;

pub use byte_slice_reference::ByteSliceReference;
pub use error_note::ErrorNote;
pub use error_note::ErrorNoteKind;
pub use error_note::ErrorNotes;
pub use importer::Importer;
pub use input::Input;
pub use lexer::Lexer;
pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use parser::Parser;
pub use parser::parse_graphql_document_bytes;
pub use parser::parse_graphql_document_string;
pub use path_item::PathItem;
pub use path_item::format_path;
pub use position::Position;
pub use printer::Printer;
pub use report::ExternalError;
pub use report::InternalError;
pub use report::Location;
pub use report::Report;
pub use report::ReportError;

#[cfg(test)]
mod tests;
