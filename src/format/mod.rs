//! Display formatting
//!
//! Pure functions only: nothing here mutates session state, and nothing
//! here fails. Values that can't be shown become [`NOT_AVAILABLE`].

mod panel;
mod render;
mod time;

pub use panel::{format_field, humanize_key, metrics_panel, MetricBlock, MetricRow, WAITING_FOR_METRICS};
pub use render::render_text;
pub use time::{format_duration, format_timestamp, format_timestamp_in, NOT_AVAILABLE};
