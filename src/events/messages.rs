use crate::metrics::StageData;
use serde::{Deserialize, Serialize};

/// Speech activity reported by the agent's voice-activity detector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VadStatus {
    Speaking,
    #[default]
    Silent,
}

impl VadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VadStatus::Speaking => "SPEAKING",
            VadStatus::Silent => "SILENT",
        }
    }

    pub fn is_speaking(&self) -> bool {
        matches!(self, VadStatus::Speaking)
    }
}

/// Event published by the agent on the data channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Voice-activity status changed
    VadUpdate { status: VadStatus },

    /// Latest full or partial text for the current utterance
    TranscriptUpdate { transcript: String },

    /// Latest metrics for one pipeline stage
    MetricsUpdate { metric_type: String, data: StageData },
}

impl Event {
    /// Wire names of every event type this build understands
    pub const KNOWN_TYPES: [&'static str; 3] = ["vad_update", "transcript_update", "metrics_update"];

    pub fn type_name(&self) -> &'static str {
        match self {
            Event::VadUpdate { .. } => "vad_update",
            Event::TranscriptUpdate { .. } => "transcript_update",
            Event::MetricsUpdate { .. } => "metrics_update",
        }
    }

    /// Encode to the wire form (UTF-8 JSON)
    pub fn to_payload(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// Transcription segment as carried on a per-speaker feed
///
/// The speaker is implied by the feed the message arrived on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentMessage {
    pub text: String,

    /// Start of the segment, seconds since the Unix epoch
    pub start_time: f64,

    #[serde(default)]
    pub is_final: bool,
}
