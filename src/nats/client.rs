use super::subjects::{data_subject, transcription_subject};
use crate::credential::Credential;
use crate::events::{Event, SegmentMessage};
use crate::session::{ConnectionError, SessionFeed};
use crate::transcription::{Speaker, TranscriptionSegment};
use anyhow::{Context, Result};
use async_nats::Client;
use futures::stream::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Feed buffer per subject
const FEED_CAPACITY: usize = 256;

pub struct NatsClient {
    client: Client,
    room: String,
    subject_prefix: String,
}

impl NatsClient {
    /// Connect to NATS, presenting the credential as the connection token
    pub async fn connect(
        url: &str,
        credential: Option<&Credential>,
        room: String,
        subject_prefix: String,
    ) -> Result<Self, ConnectionError> {
        info!("Connecting to NATS at {}", url);

        let options = match credential {
            Some(credential) => async_nats::ConnectOptions::with_token(credential.as_str().to_string()),
            None => async_nats::ConnectOptions::new(),
        };

        let client = options
            .connect(url)
            .await
            .map_err(|e| ConnectionError::Connect(e.to_string()))?;

        info!("Connected to NATS successfully");

        Ok(Self {
            client,
            room,
            subject_prefix,
        })
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    /// Publish an event on the room's data channel
    pub async fn publish_event(&self, event: &Event) -> Result<()> {
        let subject = data_subject(&self.subject_prefix, &self.room);
        let payload = event.to_payload()?;

        self.client
            .publish(subject.clone(), payload.into())
            .await
            .context("Failed to publish event")?;

        debug!("Published {} to {}", event.type_name(), subject);
        Ok(())
    }

    /// Publish a transcription segment on its speaker's feed
    pub async fn publish_segment(&self, segment: &TranscriptionSegment) -> Result<()> {
        let subject = transcription_subject(&self.subject_prefix, &self.room, segment.speaker);
        let message = SegmentMessage {
            text: segment.text.clone(),
            start_time: segment.start_time,
            is_final: segment.is_final,
        };
        let payload = serde_json::to_vec(&message)?;

        self.client
            .publish(subject.clone(), payload.into())
            .await
            .context("Failed to publish transcription segment")?;

        debug!("Published segment to {}", subject);
        Ok(())
    }

    /// Subscribe to the room's data channel and both transcription feeds
    pub async fn subscribe_feed(&self) -> Result<SessionFeed, ConnectionError> {
        let (sender, mut feed) = SessionFeed::channel(FEED_CAPACITY);

        let subjects = [
            (data_subject(&self.subject_prefix, &self.room), sender.data),
            (
                transcription_subject(&self.subject_prefix, &self.room, Speaker::User),
                sender.user_segments,
            ),
            (
                transcription_subject(&self.subject_prefix, &self.room, Speaker::Agent),
                sender.agent_segments,
            ),
        ];

        for (subject, tx) in subjects {
            let task = self.forward(subject, tx).await?;
            feed.attach(task);
        }

        Ok(feed)
    }

    async fn forward(
        &self,
        subject: String,
        tx: mpsc::Sender<Vec<u8>>,
    ) -> Result<tokio::task::JoinHandle<()>, ConnectionError> {
        info!("Subscribing to {}", subject);

        let mut subscriber = self
            .client
            .subscribe(subject.clone())
            .await
            .map_err(|e| ConnectionError::Subscribe {
                subject: subject.clone(),
                reason: e.to_string(),
            })?;

        Ok(tokio::spawn(async move {
            while let Some(msg) = subscriber.next().await {
                if tx.send(msg.payload.to_vec()).await.is_err() {
                    break;
                }
            }
            debug!("Forwarding from {} stopped", subject);
        }))
    }

    /// Flush pending publishes; the connection closes when the client is dropped
    pub async fn close(self) -> Result<(), ConnectionError> {
        info!("Closing NATS connection");
        self.client
            .flush()
            .await
            .map_err(|e| ConnectionError::Disconnect(e.to_string()))
    }
}
