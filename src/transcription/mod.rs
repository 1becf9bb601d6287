//! Conversation transcription
//!
//! The user's microphone transcription and the agent's transcription are
//! produced independently and are not ordered relative to each other. This
//! module folds them into one chronological conversation log.

mod log;
mod merger;
mod segment;

pub use log::ConversationLog;
pub use merger::{merge, merge_sorted};
pub use segment::{Speaker, TranscriptionSegment};
