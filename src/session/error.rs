use crate::credential::CredentialFetchError;
use thiserror::Error;

/// Media session failure
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("failed to connect media session: {0}")]
    Connect(String),

    #[error("failed to subscribe to {subject}: {reason}")]
    Subscribe { subject: String, reason: String },

    #[error("failed to disconnect media session: {0}")]
    Disconnect(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session is already active")]
    AlreadyActive,

    #[error(transparent)]
    Credential(#[from] CredentialFetchError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

impl SessionError {
    /// Whether the process should keep running and let the caller try again.
    ///
    /// A missing credential leaves the session `Unavailable` until the next
    /// `start`; a failed media connection ends the call.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SessionError::AlreadyActive | SessionError::Credential(_))
    }
}
