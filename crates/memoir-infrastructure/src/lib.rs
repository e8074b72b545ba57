//! Infrastructure layer: persistence, configuration and paths.
//!
//! Implements the repository traits defined in `memoir-core` against the
//! local filesystem, with versioned DTOs mediating between the persisted
//! schema and the domain model.

pub mod config;
pub mod dto;
pub mod paths;
pub mod state_repository;

pub use config::{AppConfig, load_config};
pub use paths::MemoirPaths;
pub use state_repository::JsonStateRepository;
