/// What the UI shows around the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiPhase {
    /// No call in progress
    #[default]
    Idle,

    /// Waiting for the credential or the media connection
    Loading,

    /// Connected; events are being reduced
    Active,

    /// Credential could not be obtained; the caller may start again
    Unavailable(String),
}

impl UiPhase {
    pub fn name(&self) -> &'static str {
        match self {
            UiPhase::Idle => "idle",
            UiPhase::Loading => "loading",
            UiPhase::Active => "active",
            UiPhase::Unavailable(_) => "unavailable",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            UiPhase::Unavailable(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, UiPhase::Active)
    }
}
