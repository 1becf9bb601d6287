use voice_console::events::{decode, decode_segment, DecodeError, Event, VadStatus};
use voice_console::Speaker;

#[test]
fn test_decode_vad_update() {
    let event = decode(br#"{"type":"vad_update","status":"SPEAKING"}"#).unwrap();
    assert_eq!(
        event,
        Event::VadUpdate {
            status: VadStatus::Speaking
        }
    );
}

#[test]
fn test_decode_transcript_update_ignores_extra_fields() {
    // The agent also sends who spoke
    let raw = br#"{"type":"transcript_update","transcript":"what's the weather","speaker":"user"}"#;

    match decode(raw).unwrap() {
        Event::TranscriptUpdate { transcript } => assert_eq!(transcript, "what's the weather"),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_decode_metrics_update_keeps_field_order() {
    let raw = br#"{
        "type": "metrics_update",
        "metric_type": "llm",
        "data": {"ttft": 0.31, "total_tokens": 120, "timestamp": 1730000000.5, "label": null}
    }"#;

    match decode(raw).unwrap() {
        Event::MetricsUpdate { metric_type, data } => {
            assert_eq!(metric_type, "llm");
            let keys: Vec<&str> = data.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["ttft", "total_tokens", "timestamp", "label"]);
            assert_eq!(data["ttft"].as_f64(), Some(0.31));
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_decode_non_json_is_malformed() {
    let err = decode(b"not json at all").unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));
}

#[test]
fn test_decode_invalid_utf8_is_malformed() {
    let err = decode(&[0xff, 0xfe, 0x7b]).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));
}

#[test]
fn test_decode_missing_type_is_malformed() {
    let err = decode(br#"{"status":"SPEAKING"}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));

    let err = decode(br#"{"type":7}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));
}

#[test]
fn test_decode_unknown_type() {
    let err = decode(br#"{"type":"agent_thinking","level":3}"#).unwrap_err();
    assert_eq!(err, DecodeError::UnknownType("agent_thinking".to_string()));
}

#[test]
fn test_decode_known_type_with_bad_payload_is_malformed() {
    // Status outside SPEAKING / SILENT
    let err = decode(br#"{"type":"vad_update","status":"LISTENING"}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));

    // Metrics data must be an object
    let err = decode(br#"{"type":"metrics_update","metric_type":"tts","data":[1,2]}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));
}

#[test]
fn test_event_payload_decodes_back() {
    let event = Event::VadUpdate {
        status: VadStatus::Silent,
    };
    let payload = event.to_payload().unwrap();
    let json = String::from_utf8(payload.clone()).unwrap();
    assert!(json.contains("\"type\":\"vad_update\""));
    assert!(json.contains("\"status\":\"SILENT\""));
    assert_eq!(decode(&payload).unwrap(), event);
}

#[test]
fn test_decode_segment_takes_speaker_from_feed() {
    let raw = br#"{"text":"hello there","start_time":12.5,"is_final":true}"#;
    let segment = decode_segment(raw, Speaker::Agent).unwrap();

    assert_eq!(segment.speaker, Speaker::Agent);
    assert_eq!(segment.text, "hello there");
    assert_eq!(segment.start_time, 12.5);
    assert!(segment.is_final);
}

#[test]
fn test_decode_segment_defaults_to_interim() {
    let segment = decode_segment(br#"{"text":"hel","start_time":3}"#, Speaker::User).unwrap();
    assert!(!segment.is_final);
}

#[test]
fn test_decode_segment_malformed() {
    let err = decode_segment(br#"{"text":"no time"}"#, Speaker::User).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));
}
