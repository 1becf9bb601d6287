use super::segment::{Speaker, TranscriptionSegment};
use std::cmp::Ordering;

/// Merge both speakers' segments into one chronological log.
///
/// Segments are tagged with the speaker of the sequence they came from and
/// stably sorted by start time. On equal start times agent segments come
/// before user segments; within one speaker the source order is kept.
pub fn merge(
    user_segments: &[TranscriptionSegment],
    agent_segments: &[TranscriptionSegment],
) -> Vec<TranscriptionSegment> {
    let mut merged: Vec<TranscriptionSegment> = agent_segments
        .iter()
        .map(|s| tagged(s, Speaker::Agent))
        .chain(user_segments.iter().map(|s| tagged(s, Speaker::User)))
        .collect();

    merged.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    merged
}

/// Two-pointer merge of sequences that are each already sorted by start time.
///
/// Produces the same order as [`merge`] in linear time.
pub fn merge_sorted(
    user_segments: &[TranscriptionSegment],
    agent_segments: &[TranscriptionSegment],
) -> Vec<TranscriptionSegment> {
    let mut merged = Vec::with_capacity(user_segments.len() + agent_segments.len());
    let mut users = user_segments.iter().peekable();
    let mut agents = agent_segments.iter().peekable();

    loop {
        let next = match (users.peek(), agents.peek()) {
            (Some(user), Some(agent)) => {
                if user.start_time.total_cmp(&agent.start_time) == Ordering::Less {
                    users.next().map(|s| tagged(s, Speaker::User))
                } else {
                    agents.next().map(|s| tagged(s, Speaker::Agent))
                }
            }
            (Some(_), None) => users.next().map(|s| tagged(s, Speaker::User)),
            (None, Some(_)) => agents.next().map(|s| tagged(s, Speaker::Agent)),
            (None, None) => None,
        };

        match next {
            Some(segment) => merged.push(segment),
            None => break,
        }
    }

    merged
}

fn tagged(segment: &TranscriptionSegment, speaker: Speaker) -> TranscriptionSegment {
    TranscriptionSegment {
        speaker,
        ..segment.clone()
    }
}
