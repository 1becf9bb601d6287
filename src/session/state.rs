use crate::events::VadStatus;
use crate::metrics::MetricsSnapshot;
use crate::transcription::{ConversationLog, TranscriptionSegment};
use serde::Serialize;

/// UI-visible state of one assistant call
///
/// Created empty when a call starts and discarded when it ends. Only the
/// reducer functions in this module produce new states.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub(crate) vad_status: VadStatus,
    pub(crate) current_transcript: String,
    pub(crate) metrics: MetricsSnapshot,
    #[serde(rename = "conversation_log")]
    pub(crate) conversation: ConversationLog,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vad_status(&self) -> VadStatus {
        self.vad_status
    }

    pub fn current_transcript(&self) -> &str {
        &self.current_transcript
    }

    pub fn metrics(&self) -> &MetricsSnapshot {
        &self.metrics
    }

    /// Both speakers' segments in chronological order
    pub fn conversation_log(&self) -> &[TranscriptionSegment] {
        self.conversation.segments()
    }

    pub fn conversation(&self) -> &ConversationLog {
        &self.conversation
    }
}
