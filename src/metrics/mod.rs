//! Per-stage pipeline metrics
//!
//! The agent reports metrics for each pipeline stage independently. The
//! snapshot keeps the latest report per stage; reports for one stage never
//! touch another.

mod snapshot;
mod stage;

pub use snapshot::{MetricsSnapshot, StageData};
pub use stage::{FieldFormat, MetricStage};
