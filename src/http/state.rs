use crate::session::{SessionState, UiPhase};
use tokio::sync::watch;

/// Read-only handles on the running session for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Latest session state
    pub session: watch::Receiver<SessionState>,

    /// Current UI phase
    pub phase: watch::Receiver<UiPhase>,
}

impl AppState {
    pub fn new(session: watch::Receiver<SessionState>, phase: watch::Receiver<UiPhase>) -> Self {
        Self { session, phase }
    }
}
