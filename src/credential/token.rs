use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is asking for a credential, for which room and model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    pub identity: String,
    pub room: String,
    pub model: String,
}

impl TokenRequest {
    /// Request for a freshly generated participant identity (e.g. "user-3f2a9c1e")
    pub fn new(room: impl Into<String>, model: impl Into<String>) -> Self {
        let id = uuid::Uuid::new_v4().simple().to_string();
        Self {
            identity: format!("user-{}", &id[..8]),
            room: room.into(),
            model: model.into(),
        }
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }
}

/// Opaque session credential
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
