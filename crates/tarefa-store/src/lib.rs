//! # tarefa-store
//!
//! Flat-JSON persistence for Tarefa: the task-status document and the
//! language-preference document. A mutation rewrites the whole document
//! via atomic replace; mutations are serialized through a per-store
//! mutex so interleaved writers cannot lose updates.

mod document;
mod language;
mod tasks;


pub use language::LanguagePrefs;
pub use tasks::{TaskStatusDocument, TaskStore};
