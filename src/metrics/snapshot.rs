use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fields of one stage report, in the order the agent sent them
pub type StageData = serde_json::Map<String, serde_json::Value>;

/// Latest metrics report per pipeline stage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsSnapshot {
    stages: BTreeMap<String, StageData>,
}

impl MetricsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot equal to `self` with `metric_type` replaced wholesale by `data`.
    ///
    /// Other stages are carried over unchanged. Stage names outside the known
    /// catalogue are stored as-is.
    pub fn apply(&self, metric_type: &str, data: StageData) -> MetricsSnapshot {
        let mut stages = self.stages.clone();
        stages.insert(metric_type.to_string(), data);
        MetricsSnapshot { stages }
    }

    pub fn get(&self, metric_type: &str) -> Option<&StageData> {
        self.stages.get(metric_type)
    }

    pub fn contains(&self, metric_type: &str) -> bool {
        self.stages.contains_key(metric_type)
    }

    /// Stage names and data, ordered by stage name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StageData)> {
        self.stages.iter().map(|(name, data)| (name.as_str(), data))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
