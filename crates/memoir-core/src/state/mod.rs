//! Session state domain module.
//!
//! - `model`: the persisted-state domain types (`MemoirState`, `Answer`,
//!   `Photo`, `CoreInfo`, `JournalEntry`)
//! - `repository`: the persistence trait the infrastructure layer implements

pub mod model;
pub mod repository;

pub use model::{Answer, CoreInfo, JournalEntry, MemoirState, Photo};
pub use repository::StateRepository;
