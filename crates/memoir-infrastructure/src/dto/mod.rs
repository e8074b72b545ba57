//! Versioned persistence DTOs.
//!
//! The durable blob carries an explicit schema version tag; DTOs here model
//! every version ever written, plus the migration chain to the canonical
//! (latest) shape. Nothing outside this module branches on value shape.

mod memoir_state;

pub use memoir_state::{
    AnswerDTO, AnswerValueV1, CoreInfoDTO, JournalEntryDTO, MemoirStateDTO, MemoirStateV1_0,
    MemoirStateV2_0, PhotoDTO, decode_state, encode_state,
};
