/// How a metric field is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Epoch seconds shown as a wall-clock time
    Time,
    /// Seconds shown with millisecond precision
    Duration,
    /// Value shown verbatim
    Plain,
}

/// Pipeline stages the agent is known to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricStage {
    Vad,
    Stt,
    Eou,
    Llm,
    Tts,
}

impl MetricStage {
    /// Display order of the metric panel
    pub const ALL: [MetricStage; 5] = [
        MetricStage::Vad,
        MetricStage::Stt,
        MetricStage::Eou,
        MetricStage::Llm,
        MetricStage::Tts,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "vad" => Some(MetricStage::Vad),
            "stt" => Some(MetricStage::Stt),
            "eou" => Some(MetricStage::Eou),
            "llm" => Some(MetricStage::Llm),
            "tts" => Some(MetricStage::Tts),
            _ => None,
        }
    }

    /// Key used in `metrics_update.metric_type`
    pub fn key(&self) -> &'static str {
        match self {
            MetricStage::Vad => "vad",
            MetricStage::Stt => "stt",
            MetricStage::Eou => "eou",
            MetricStage::Llm => "llm",
            MetricStage::Tts => "tts",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MetricStage::Vad => "VAD Metrics",
            MetricStage::Stt => "STT Metrics",
            MetricStage::Eou => "EOU Metrics",
            MetricStage::Llm => "LLM Metrics",
            MetricStage::Tts => "TTS Metrics",
        }
    }

    pub fn field_format(&self, field: &str) -> FieldFormat {
        match (self, field) {
            (_, "timestamp") => FieldFormat::Time,
            (MetricStage::Tts, "start_time") => FieldFormat::Time,
            (MetricStage::Eou, "end_of_utterance_delay" | "transcription_delay") => {
                FieldFormat::Duration
            }
            (MetricStage::Llm, "ttft" | "total_latency") => FieldFormat::Duration,
            (MetricStage::Tts, "ttfb" | "audio_duration") => FieldFormat::Duration,
            (MetricStage::Stt, "audio_duration") => FieldFormat::Duration,
            _ => FieldFormat::Plain,
        }
    }
}
