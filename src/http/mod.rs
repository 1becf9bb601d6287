//! HTTP render surface
//!
//! Read-only views of the running session for a presentation layer:
//! - GET /health - Health check
//! - GET /session - UI phase and full session state
//! - GET /session/metrics - Formatted metric panel
//! - GET /session/conversation - Merged conversation log
//! - GET /session/render - Plain-text rendering

mod handlers;
mod routes;
mod state;

pub use handlers::{MetricsResponse, SessionResponse};
pub use routes::create_router;
pub use state::AppState;
