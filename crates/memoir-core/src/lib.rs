//! Core domain layer of the memoir engine.
//!
//! This crate holds everything the rest of the workspace agrees on: the
//! prompt catalog, the persisted session state and its repository trait,
//! the consent gate, the session manager that funnels every mutation
//! through a write-through persistence step, progress derivation and the
//! deterministic document compiler. It performs no I/O of its own beyond
//! the repository trait it defines.

pub mod catalog;
pub mod compile;
pub mod consent;
pub mod error;
pub mod session;
pub mod state;

// Re-export common error type
pub use error::MemoirError;
