use super::client::NatsClient;
use crate::credential::Credential;
use crate::session::{ConnectionError, MediaSession, SessionFeed};
use tracing::warn;

/// Media session whose data channel runs over NATS
pub struct NatsMediaSession {
    url: String,
    room: String,
    subject_prefix: String,
    client: Option<NatsClient>,
}

impl NatsMediaSession {
    pub fn new(url: impl Into<String>, room: impl Into<String>, subject_prefix: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            room: room.into(),
            subject_prefix: subject_prefix.into(),
            client: None,
        }
    }
}

#[async_trait::async_trait]
impl MediaSession for NatsMediaSession {
    async fn connect(&mut self, credential: &Credential) -> Result<SessionFeed, ConnectionError> {
        if self.client.is_some() {
            warn!("NATS media session already connected, reconnecting");
            self.disconnect().await?;
        }

        let client = NatsClient::connect(
            &self.url,
            Some(credential),
            self.room.clone(),
            self.subject_prefix.clone(),
        )
        .await?;

        let feed = client.subscribe_feed().await?;
        self.client = Some(client);
        Ok(feed)
    }

    async fn disconnect(&mut self) -> Result<(), ConnectionError> {
        match self.client.take() {
            Some(client) => client.close().await,
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "nats"
    }
}
