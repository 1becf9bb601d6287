use super::state::SessionState;
use crate::events::{decode, decode_segment, Event};
use crate::transcription::{Speaker, TranscriptionSegment};
use tracing::{debug, warn};

/// Fold one decoded event into the session state
pub fn reduce(mut state: SessionState, event: Event) -> SessionState {
    match event {
        Event::VadUpdate { status } => {
            state.vad_status = status;
        }
        Event::TranscriptUpdate { transcript } => {
            state.current_transcript = transcript;
        }
        Event::MetricsUpdate { metric_type, data } => {
            state.metrics = state.metrics.apply(&metric_type, data);
        }
    }
    state
}

/// Fold one transcription segment into the conversation log
pub fn reduce_segment(mut state: SessionState, segment: TranscriptionSegment) -> SessionState {
    state.conversation.push(segment);
    state
}

/// Like [`reduce`], also reporting whether the event changed the state.
///
/// Only the part the event addresses is compared. An event that changes
/// nothing hands the state back untouched.
pub fn reduce_tracked(state: SessionState, event: Event) -> (SessionState, bool) {
    let changed = match &event {
        Event::VadUpdate { status } => state.vad_status != *status,
        Event::TranscriptUpdate { transcript } => state.current_transcript != *transcript,
        Event::MetricsUpdate { metric_type, data } => state.metrics.get(metric_type) != Some(data),
    };

    if changed {
        (reduce(state, event), true)
    } else {
        (state, false)
    }
}

/// Decode a raw data-channel payload and fold it in.
///
/// Payloads that fail to decode are logged and leave the state untouched.
pub fn apply_payload(state: SessionState, raw: &[u8]) -> SessionState {
    apply_payload_tracked(state, raw).0
}

/// [`apply_payload`] that also reports whether the state changed
pub fn apply_payload_tracked(state: SessionState, raw: &[u8]) -> (SessionState, bool) {
    match decode(raw) {
        Ok(event) => {
            debug!("Reducing {}", event.type_name());
            reduce_tracked(state, event)
        }
        Err(e) => {
            warn!("Dropping data-channel message: {}", e);
            (state, false)
        }
    }
}

/// Decode a raw payload from a speaker's transcription feed and fold it in
pub fn apply_segment_payload(state: SessionState, raw: &[u8], speaker: Speaker) -> SessionState {
    apply_segment_payload_tracked(state, raw, speaker).0
}

/// [`apply_segment_payload`] that also reports whether the state changed
pub fn apply_segment_payload_tracked(
    state: SessionState,
    raw: &[u8],
    speaker: Speaker,
) -> (SessionState, bool) {
    match decode_segment(raw, speaker) {
        Ok(segment) => (reduce_segment(state, segment), true),
        Err(e) => {
            warn!("Dropping {:?} transcription segment: {}", speaker, e);
            (state, false)
        }
    }
}

/// Fold raw data-channel payloads starting from the empty state
pub fn replay_payloads<'a, I>(payloads: I) -> SessionState
where
    I: IntoIterator<Item = &'a [u8]>,
{
    payloads.into_iter().fold(SessionState::new(), apply_payload)
}

/// Fold a sequence of events starting from the empty state
pub fn replay<I>(events: I) -> SessionState
where
    I: IntoIterator<Item = Event>,
{
    events.into_iter().fold(SessionState::new(), reduce)
}
