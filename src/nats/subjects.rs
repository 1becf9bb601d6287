use crate::transcription::Speaker;

/// Subject carrying the room's data-channel events
pub fn data_subject(prefix: &str, room: &str) -> String {
    format!("{}.{}.data", prefix, room)
}

/// Subject carrying one speaker's transcription segments
pub fn transcription_subject(prefix: &str, room: &str, speaker: Speaker) -> String {
    let party = match speaker {
        Speaker::User => "user",
        Speaker::Agent => "agent",
    };
    format!("{}.{}.transcription.{}", prefix, room, party)
}
