use serde_json::json;
use voice_console::events::{decode, Event, VadStatus};
use voice_console::metrics::StageData;
use voice_console::session::{apply_payload, apply_segment_payload, reduce, reduce_segment, replay, SessionState};
use voice_console::{Speaker, TranscriptionSegment};

fn data(value: serde_json::Value) -> StageData {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

fn metrics(metric_type: &str, value: serde_json::Value) -> Event {
    Event::MetricsUpdate {
        metric_type: metric_type.to_string(),
        data: data(value),
    }
}

#[test]
fn test_initial_state_is_silent_and_empty() {
    let state = SessionState::new();
    assert_eq!(state.vad_status(), VadStatus::Silent);
    assert_eq!(state.current_transcript(), "");
    assert!(state.metrics().is_empty());
    assert!(state.conversation_log().is_empty());
}

#[test]
fn test_end_to_end_scenario() {
    let payloads: [&[u8]; 3] = [
        br#"{"type":"vad_update","status":"SPEAKING"}"#,
        br#"{"type":"metrics_update","metric_type":"eou","data":{"end_of_utterance_delay":0.42}}"#,
        br#"{"type":"vad_update","status":"SILENT"}"#,
    ];

    let state = payloads
        .iter()
        .fold(SessionState::new(), |state, raw| apply_payload(state, raw));

    assert_eq!(state.vad_status(), VadStatus::Silent);
    assert_eq!(state.metrics().len(), 1);
    assert_eq!(
        state.metrics().get("eou"),
        Some(&data(json!({"end_of_utterance_delay": 0.42})))
    );
}

#[test]
fn test_transcript_update_replaces_text() {
    let state = replay(vec![
        Event::TranscriptUpdate {
            transcript: "what's".to_string(),
        },
        Event::TranscriptUpdate {
            transcript: "what's the weather".to_string(),
        },
    ]);
    assert_eq!(state.current_transcript(), "what's the weather");
}

#[test]
fn test_metrics_update_does_not_touch_other_stages() {
    let before = replay(vec![
        metrics("vad", json!({"timestamp": 1.0})),
        metrics("eou", json!({"end_of_utterance_delay": 0.4})),
        metrics("tts", json!({"ttfb": 0.2})),
    ]);

    let after = reduce(before.clone(), metrics("llm", json!({"ttft": 0.3})));

    for stage in ["vad", "eou", "tts"] {
        assert_eq!(after.metrics().get(stage), before.metrics().get(stage));
    }
    assert_eq!(after.metrics().get("llm"), Some(&data(json!({"ttft": 0.3}))));
}

#[test]
fn test_metrics_update_replaces_stage_wholesale() {
    let state = replay(vec![
        metrics("llm", json!({"ttft": 0.3, "total_tokens": 80})),
        metrics("llm", json!({"ttft": 0.25})),
    ]);

    // No field-level merge within a stage
    assert_eq!(state.metrics().get("llm"), Some(&data(json!({"ttft": 0.25}))));
}

#[test]
fn test_unknown_stage_is_stored() {
    let state = reduce(SessionState::new(), metrics("custom", json!({"score": "good"})));
    assert_eq!(state.metrics().get("custom"), Some(&data(json!({"score": "good"}))));
}

#[test]
fn test_malformed_payload_leaves_state_unchanged() {
    let state = replay(vec![
        Event::VadUpdate {
            status: VadStatus::Speaking,
        },
        metrics("tts", json!({"ttfb": 0.1})),
    ]);

    assert!(decode(b"\x00garbage").is_err());
    let after = apply_payload(state.clone(), b"\x00garbage");
    assert_eq!(after, state);

    let after = apply_payload(state.clone(), br#"{"type":"mood_update","mood":"happy"}"#);
    assert_eq!(after, state);

    let after = apply_payload(state.clone(), br#"{"type":"vad_update","status":"MAYBE"}"#);
    assert_eq!(after, state);
}

#[test]
fn test_replay_is_deterministic() {
    let events = vec![
        Event::VadUpdate {
            status: VadStatus::Speaking,
        },
        Event::TranscriptUpdate {
            transcript: "tell me a joke".to_string(),
        },
        metrics("stt", json!({"audio_duration": 1.2, "timestamp": 1730000000.0})),
        metrics("llm", json!({"ttft": 0.5})),
        Event::VadUpdate {
            status: VadStatus::Silent,
        },
        metrics("llm", json!({"ttft": 0.4, "total_tokens": 60})),
    ];

    assert_eq!(replay(events.clone()), replay(events));
}

#[test]
fn test_segments_fold_into_conversation_log() {
    let state = reduce_segment(
        SessionState::new(),
        TranscriptionSegment::new(Speaker::User, "hi", 2.0),
    );
    let state = apply_segment_payload(state, br#"{"text":"hello","start_time":1.0,"is_final":true}"#, Speaker::Agent);

    let log: Vec<(Speaker, &str)> = state
        .conversation_log()
        .iter()
        .map(|s| (s.speaker, s.text.as_str()))
        .collect();
    assert_eq!(log, vec![(Speaker::Agent, "hello"), (Speaker::User, "hi")]);
}

#[test]
fn test_malformed_segment_leaves_state_unchanged() {
    let state = reduce_segment(
        SessionState::new(),
        TranscriptionSegment::new(Speaker::Agent, "hello", 1.0),
    );
    let after = apply_segment_payload(state.clone(), b"{not json", Speaker::User);
    assert_eq!(after, state);
}

#[test]
fn test_replay_recorded_session_file() -> anyhow::Result<()> {
    use std::io::Write;
    use voice_console::session::replay_payloads;

    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, r#"{{"type":"vad_update","status":"SPEAKING"}}"#)?;
    writeln!(file, r#"{{"type":"transcript_update","transcript":"book a table"}}"#)?;
    writeln!(file, "this line is corrupt")?;
    writeln!(file, r#"{{"type":"metrics_update","metric_type":"tts","data":{{"ttfb":0.18,"audio_duration":2.5}}}}"#)?;
    writeln!(file, r#"{{"type":"vad_update","status":"SILENT"}}"#)?;
    file.flush()?;

    let contents = std::fs::read_to_string(file.path())?;
    let first = replay_payloads(contents.lines().map(str::as_bytes));
    let second = replay_payloads(contents.lines().map(str::as_bytes));

    assert_eq!(first, second);
    assert_eq!(first.vad_status(), VadStatus::Silent);
    assert_eq!(first.current_transcript(), "book a table");
    assert_eq!(
        first.metrics().get("tts"),
        Some(&data(json!({"ttfb": 0.18, "audio_duration": 2.5})))
    );
    Ok(())
}

#[test]
fn test_tracked_reduce_reports_only_real_changes() {
    use voice_console::session::{apply_payload_tracked, apply_segment_payload_tracked, reduce_tracked};

    let (state, changed) = reduce_tracked(
        SessionState::new(),
        Event::VadUpdate {
            status: VadStatus::Silent,
        },
    );
    assert!(!changed, "initial status is already SILENT");

    let (state, changed) = reduce_tracked(state, metrics("llm", json!({"ttft": 0.3})));
    assert!(changed);

    // Same stage data again
    let (state, changed) = reduce_tracked(state, metrics("llm", json!({"ttft": 0.3})));
    assert!(!changed);

    let (state, changed) = reduce_tracked(state, metrics("llm", json!({"ttft": 0.2})));
    assert!(changed);
    assert_eq!(state.metrics().get("llm"), Some(&data(json!({"ttft": 0.2}))));

    let (state, changed) = apply_payload_tracked(state, b"not json");
    assert!(!changed);

    let (state, changed) = apply_payload_tracked(state, br#"{"type":"transcript_update","transcript":""}"#);
    assert!(!changed);

    let (state, changed) =
        apply_segment_payload_tracked(state, br#"{"text":"hi","start_time":1.0}"#, Speaker::User);
    assert!(changed);
    assert_eq!(state.conversation_log().len(), 1);
}
