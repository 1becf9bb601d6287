use super::time::{format_duration, format_timestamp, NOT_AVAILABLE};
use crate::metrics::{FieldFormat, MetricStage, MetricsSnapshot, StageData};
use serde::Serialize;
use serde_json::Value;

/// Shown while no stage has reported yet
pub const WAITING_FOR_METRICS: &str = "Waiting for first user utterance to collect metrics...";

/// One rendered metrics stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricBlock {
    /// Stage key as reported on the wire
    pub stage: String,
    pub title: String,
    pub rows: Vec<MetricRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    pub label: String,
    pub value: String,
}

/// Blocks for every stage with something to show.
///
/// Known stages come first in pipeline order, then any other stage in key
/// order. Null fields are skipped and stages left with no rows are omitted.
pub fn metrics_panel(metrics: &MetricsSnapshot) -> Vec<MetricBlock> {
    let mut blocks = Vec::new();

    for stage in MetricStage::ALL {
        if let Some(data) = metrics.get(stage.key()) {
            blocks.extend(metric_block(stage.key(), Some(stage), data));
        }
    }

    for (key, data) in metrics.iter() {
        if MetricStage::from_key(key).is_none() {
            blocks.extend(metric_block(key, None, data));
        }
    }

    blocks
}

fn metric_block(key: &str, stage: Option<MetricStage>, data: &StageData) -> Option<MetricBlock> {
    let rows: Vec<MetricRow> = data
        .iter()
        .filter_map(|(field, value)| {
            let format = stage.map_or(FieldFormat::Plain, |s| s.field_format(field));
            format_field(format, value).map(|value| MetricRow {
                label: humanize_key(field),
                value,
            })
        })
        .collect();

    if rows.is_empty() {
        return None;
    }

    let title = match stage {
        Some(stage) => stage.title().to_string(),
        None => format!("{} Metrics", humanize_key(key)),
    };

    Some(MetricBlock {
        stage: key.to_string(),
        title,
        rows,
    })
}

/// Display text for one metric value; `None` for null
pub fn format_field(format: FieldFormat, value: &Value) -> Option<String> {
    if value.is_null() {
        return None;
    }

    let formatted = match format {
        FieldFormat::Time => value
            .as_f64()
            .map(format_timestamp)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        FieldFormat::Duration => value
            .as_f64()
            .map(format_duration)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        FieldFormat::Plain => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    };
    Some(formatted)
}

/// "end_of_utterance_delay" -> "End of utterance delay", "totalTokens" -> "Total Tokens"
pub fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);

    for (i, c) in key.chars().enumerate() {
        if c == '_' {
            label.push(' ');
        } else if c.is_uppercase() && i > 0 {
            label.push(' ');
            label.push(c);
        } else if i == 0 {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
    }

    label
}
