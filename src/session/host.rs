use super::error::SessionError;
use super::media::{MediaSession, SessionFeed};
use super::phase::UiPhase;
use super::reducer::{apply_payload_tracked, apply_segment_payload_tracked};
use super::state::SessionState;
use crate::credential::{CredentialProvider, TokenRequest};
use crate::transcription::Speaker;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// One assistant call: credential, media connection and the event loop
///
/// The event loop task is the only writer of the session state. Readers get
/// `watch` receivers from [`AssistantSession::state`] and
/// [`AssistantSession::phase`].
pub struct AssistantSession {
    /// Participant, room and model the credential is requested for
    request: TokenRequest,

    /// Issues the session credential
    credentials: Arc<dyn CredentialProvider>,

    /// Transport carrying the data channel
    media: Box<dyn MediaSession>,

    /// Current UI phase
    phase: watch::Sender<UiPhase>,

    /// Latest session state, published after every change
    state: Arc<watch::Sender<SessionState>>,

    /// Stop signal for the event loop
    shutdown: Option<watch::Sender<bool>>,

    /// Handle for the event loop task
    event_task: Option<JoinHandle<()>>,

    /// Whether the media session is connected
    connected: bool,
}

impl AssistantSession {
    pub fn new(
        request: TokenRequest,
        credentials: Arc<dyn CredentialProvider>,
        media: Box<dyn MediaSession>,
    ) -> Self {
        let (phase, _) = watch::channel(UiPhase::Idle);
        let (state, _) = watch::channel(SessionState::new());

        Self {
            request,
            credentials,
            media,
            phase,
            state: Arc::new(state),
            shutdown: None,
            event_task: None,
            connected: false,
        }
    }

    /// Read-only handle on the session state
    pub fn state(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Read-only handle on the UI phase
    pub fn phase(&self) -> watch::Receiver<UiPhase> {
        self.phase.subscribe()
    }

    pub fn request(&self) -> &TokenRequest {
        &self.request
    }

    /// Start the call
    ///
    /// A credential failure leaves the session `Unavailable`; a connection
    /// failure returns it to `Idle`. Neither is retried, but `start` may be
    /// called again.
    pub async fn start(&mut self) -> Result<(), SessionError> {
        if self.connected {
            warn!("Session already started");
            return Err(SessionError::AlreadyActive);
        }

        info!(
            "Starting session for {} in room {} (model {})",
            self.request.identity, self.request.room, self.request.model
        );
        self.set_phase(UiPhase::Loading);

        let credential = match self.credentials.fetch(&self.request).await {
            Ok(credential) => credential,
            Err(e) => {
                error!("Failed to fetch credential: {}", e);
                self.set_phase(UiPhase::Unavailable(e.to_string()));
                return Err(e.into());
            }
        };

        let feed = match self.media.connect(&credential).await {
            Ok(feed) => feed,
            Err(e) => {
                error!("Failed to connect {} media session: {}", self.media.name(), e);
                self.set_phase(UiPhase::Idle);
                return Err(e.into());
            }
        };

        self.state.send_replace(SessionState::new());

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let updates = Arc::clone(&self.state);
        let event_task = tokio::spawn(async move {
            run_event_loop(SessionState::new(), feed, &updates, shutdown_rx).await;
        });

        self.shutdown = Some(shutdown_tx);
        self.event_task = Some(event_task);
        self.connected = true;
        self.set_phase(UiPhase::Active);

        info!("Session active on {}", self.media.name());
        Ok(())
    }

    /// Wait until the remote side closes every feed, then end the call
    ///
    /// Returns the last state the call reached. Cancel-safe while waiting:
    /// if the wait is abandoned the loop keeps running and
    /// [`AssistantSession::stop`] still tears it down.
    pub async fn closed(&mut self) -> Result<SessionState, SessionError> {
        if let Some(task) = self.event_task.as_mut() {
            if let Err(e) = task.await {
                error!("Event loop task failed: {}", e);
            }
            self.event_task = None;
            info!("Remote side closed the session");
        }

        self.teardown().await
    }

    /// End the call and return the last state it reached
    ///
    /// An event already being reduced is applied before the loop exits.
    pub async fn stop(&mut self) -> Result<SessionState, SessionError> {
        if let Some(shutdown) = self.shutdown.as_ref() {
            let _ = shutdown.send(true);
        }

        if let Some(task) = self.event_task.take() {
            if let Err(e) = task.await {
                error!("Event loop task failed: {}", e);
            }
        }

        self.teardown().await
    }

    /// Disconnect, discard the state and return to `Idle`
    async fn teardown(&mut self) -> Result<SessionState, SessionError> {
        self.shutdown = None;
        let final_state = self.state.send_replace(SessionState::new());

        if !self.connected {
            return Ok(final_state);
        }
        self.connected = false;

        let disconnected = self.media.disconnect().await;
        self.set_phase(UiPhase::Idle);

        info!("Session ended ({} conversation segments)", final_state.conversation_log().len());

        disconnected?;
        Ok(final_state)
    }

    fn set_phase(&self, phase: UiPhase) {
        info!("UI phase: {:?}", phase);
        self.phase.send_replace(phase);
    }
}

/// Reduce feed payloads one at a time until shutdown or until every feed closes
///
/// A state is published on `updates` only when a payload changed it.
/// Returns the final state.
pub async fn run_event_loop(
    mut state: SessionState,
    mut feed: SessionFeed,
    updates: &watch::Sender<SessionState>,
    mut shutdown: watch::Receiver<bool>,
) -> SessionState {
    info!("Event loop started");

    let mut data_open = true;
    let mut user_open = true;
    let mut agent_open = true;

    while data_open || user_open || agent_open {
        if *shutdown.borrow() {
            break;
        }

        let outcome = tokio::select! {
            biased;

            changed = shutdown.changed() => {
                if changed.is_err() {
                    // Owner went away without signalling
                    break;
                }
                continue;
            }

            msg = feed.data.recv(), if data_open => match msg {
                Some(raw) => apply_payload_tracked(state, &raw),
                None => {
                    data_open = false;
                    continue;
                }
            },

            msg = feed.user_segments.recv(), if user_open => match msg {
                Some(raw) => apply_segment_payload_tracked(state, &raw, Speaker::User),
                None => {
                    user_open = false;
                    continue;
                }
            },

            msg = feed.agent_segments.recv(), if agent_open => match msg {
                Some(raw) => apply_segment_payload_tracked(state, &raw, Speaker::Agent),
                None => {
                    agent_open = false;
                    continue;
                }
            },
        };

        let (next, modified) = outcome;
        state = next;
        if modified {
            updates.send_replace(state.clone());
        }
    }

    info!("Event loop stopped");
    state
}
