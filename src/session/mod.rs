//! Assistant session management
//!
//! This module provides:
//! - `SessionState`, the UI-visible state of one call
//! - the reducer, the only code that changes a `SessionState`
//! - `AssistantSession`, which fetches a credential, connects the media
//!   session and runs the single event loop that owns the state
//! - the `MediaSession` trait implemented by transports

mod error;
mod host;
mod media;
mod phase;
mod reducer;
mod state;

pub use error::{ConnectionError, SessionError};
pub use host::{run_event_loop, AssistantSession};
pub use media::{FeedSender, MediaSession, SessionFeed};
pub use phase::UiPhase;
pub use reducer::{
    apply_payload, apply_payload_tracked, apply_segment_payload, apply_segment_payload_tracked, reduce,
    reduce_segment, reduce_tracked, replay, replay_payloads,
};
pub use state::SessionState;
