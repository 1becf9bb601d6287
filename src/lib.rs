pub mod config;
pub mod credential;
pub mod events;
pub mod format;
pub mod http;
pub mod metrics;
pub mod nats;
pub mod session;
pub mod transcription;

pub use config::Config;
pub use credential::{Credential, CredentialFetchError, CredentialProvider, HttpCredentialClient, TokenRequest};
pub use events::{decode, DecodeError, Event, VadStatus};
pub use format::{format_duration, format_timestamp, render_text};
pub use http::{create_router, AppState};
pub use metrics::{MetricsSnapshot, StageData};
pub use nats::{NatsClient, NatsMediaSession};
pub use session::{
    apply_payload, reduce, replay, AssistantSession, MediaSession, SessionFeed, SessionState, UiPhase,
};
pub use transcription::{merge, ConversationLog, Speaker, TranscriptionSegment};
