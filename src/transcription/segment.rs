use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Party a transcription segment is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Agent,
}

impl Speaker {
    /// Conversation line prefix
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Agent => "Agent",
            Speaker::User => "You",
        }
    }
}

/// A timestamped span of transcribed text attributed to one speaker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionSegment {
    pub speaker: Speaker,

    pub text: String,

    /// Start of the segment, seconds since the Unix epoch
    pub start_time: f64,

    /// Whether the transcriber has committed this text
    pub is_final: bool,
}

impl TranscriptionSegment {
    pub fn new(speaker: Speaker, text: impl Into<String>, start_time: f64) -> Self {
        Self {
            speaker,
            text: text.into(),
            start_time,
            is_final: true,
        }
    }

    /// Chronological order of two segments from different sources.
    ///
    /// Equal start times put the agent first; segments from the same speaker
    /// keep the order of their own source sequence.
    pub(crate) fn precedes(&self, other: &Self) -> bool {
        match self.start_time.total_cmp(&other.start_time) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.speaker == Speaker::Agent || other.speaker == Speaker::User,
        }
    }
}
