use super::merger::merge;
use super::segment::{Speaker, TranscriptionSegment};
use serde::{Serialize, Serializer};

/// Chronological conversation built from both speakers' append-only feeds
///
/// Appending a segment inserts it at its sorted position instead of
/// re-sorting everything, and always yields the same order as [`merge`]
/// over the two source sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationLog {
    user: Vec<TranscriptionSegment>,
    agent: Vec<TranscriptionSegment>,
    merged: Vec<TranscriptionSegment>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from complete source sequences
    pub fn from_sources(
        user: Vec<TranscriptionSegment>,
        agent: Vec<TranscriptionSegment>,
    ) -> Self {
        let merged = merge(&user, &agent);
        Self {
            user,
            agent,
            merged,
        }
    }

    /// Append a segment to its speaker's source and place it in the log
    pub fn push(&mut self, segment: TranscriptionSegment) {
        let position = self.merged.partition_point(|existing| existing.precedes(&segment));
        self.merged.insert(position, segment.clone());

        match segment.speaker {
            Speaker::User => self.user.push(segment),
            Speaker::Agent => self.agent.push(segment),
        }
    }

    /// Segments in chronological order
    pub fn segments(&self) -> &[TranscriptionSegment] {
        &self.merged
    }

    pub fn user_segments(&self) -> &[TranscriptionSegment] {
        &self.user
    }

    pub fn agent_segments(&self) -> &[TranscriptionSegment] {
        &self.agent
    }

    pub fn len(&self) -> usize {
        self.merged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}

impl Serialize for ConversationLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.merged.serialize(serializer)
    }
}
