//! Data-channel event decoding
//!
//! Every payload that arrives on the session data channel is UTF-8 JSON with
//! a required `type` discriminator:
//! - `vad_update` - speech activity of the agent (`SPEAKING` / `SILENT`)
//! - `transcript_update` - latest text for the current utterance
//! - `metrics_update` - latest metrics for one pipeline stage
//!
//! Transcription segments travel on their own per-speaker feeds and are
//! decoded with [`decode_segment`].

mod decoder;
mod messages;

pub use decoder::{decode, decode_segment, DecodeError};
pub use messages::{Event, SegmentMessage, VadStatus};
