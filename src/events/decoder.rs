use super::messages::{Event, SegmentMessage};
use crate::transcription::{Speaker, TranscriptionSegment};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Not UTF-8, not JSON, missing `type`, or a payload that doesn't fit its type
    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("unknown event type: {0}")]
    UnknownType(String),
}

/// Decode one raw data-channel payload into a typed event
pub fn decode(raw: &[u8]) -> Result<Event, DecodeError> {
    let text = std::str::from_utf8(raw).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    let value: Value =
        serde_json::from_str(text).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let event_type = match value.get("type") {
        Some(Value::String(t)) => t.as_str(),
        Some(other) => {
            return Err(DecodeError::Malformed(format!(
                "`type` must be a string, got {}",
                other
            )))
        }
        None => return Err(DecodeError::Malformed("missing `type` field".to_string())),
    };

    if !Event::KNOWN_TYPES.contains(&event_type) {
        return Err(DecodeError::UnknownType(event_type.to_string()));
    }

    serde_json::from_value(value).map_err(|e| DecodeError::Malformed(e.to_string()))
}

/// Decode one raw payload from a speaker's transcription feed
pub fn decode_segment(raw: &[u8], speaker: Speaker) -> Result<TranscriptionSegment, DecodeError> {
    let message: SegmentMessage =
        serde_json::from_slice(raw).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    Ok(TranscriptionSegment {
        speaker,
        text: message.text,
        start_time: message.start_time,
        is_final: message.is_final,
    })
}
