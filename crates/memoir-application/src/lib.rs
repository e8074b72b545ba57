//! Application layer: use cases over the memoir engine.

mod memoir_service;

pub use memoir_service::{
    CaptureResult, CaptureStart, DELETE_CONFIRMATION_PROMPT, MemoirService,
};
