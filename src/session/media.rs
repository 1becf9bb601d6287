use super::error::ConnectionError;
use crate::credential::Credential;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Raw payload feeds of a connected media session
///
/// Holds the data-channel subscription for as long as the session is
/// active. Dropping the feed aborts any forwarding tasks the transport
/// registered, whichever way the session ends.
pub struct SessionFeed {
    /// Event payloads from the data channel
    pub data: mpsc::Receiver<Vec<u8>>,

    /// Segment payloads transcribed from the local microphone
    pub user_segments: mpsc::Receiver<Vec<u8>>,

    /// Segment payloads transcribed from the agent's audio
    pub agent_segments: mpsc::Receiver<Vec<u8>>,

    tasks: Vec<JoinHandle<()>>,
}

/// Sending half of a [`SessionFeed`], held by the transport
#[derive(Clone)]
pub struct FeedSender {
    pub data: mpsc::Sender<Vec<u8>>,
    pub user_segments: mpsc::Sender<Vec<u8>>,
    pub agent_segments: mpsc::Sender<Vec<u8>>,
}

impl SessionFeed {
    /// Create a connected sender/feed pair with `capacity` slots per feed
    pub fn channel(capacity: usize) -> (FeedSender, SessionFeed) {
        let (data_tx, data_rx) = mpsc::channel(capacity);
        let (user_tx, user_rx) = mpsc::channel(capacity);
        let (agent_tx, agent_rx) = mpsc::channel(capacity);

        let sender = FeedSender {
            data: data_tx,
            user_segments: user_tx,
            agent_segments: agent_tx,
        };
        let feed = SessionFeed {
            data: data_rx,
            user_segments: user_rx,
            agent_segments: agent_rx,
            tasks: Vec::new(),
        };
        (sender, feed)
    }

    /// Tie a forwarding task's lifetime to this feed
    pub fn attach(&mut self, task: JoinHandle<()>) {
        self.tasks.push(task);
    }
}

impl Drop for SessionFeed {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Real-time media session carrying the data channel
///
/// Implementations:
/// - NATS: data channel and transcription feeds on per-room subjects
#[async_trait::async_trait]
pub trait MediaSession: Send + Sync {
    /// Connect using the issued credential and subscribe to the feeds
    async fn connect(&mut self, credential: &Credential) -> Result<SessionFeed, ConnectionError>;

    /// Leave the session
    async fn disconnect(&mut self) -> Result<(), ConnectionError>;

    /// Transport name for logging
    fn name(&self) -> &str;
}
