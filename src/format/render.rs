use super::panel::{metrics_panel, WAITING_FOR_METRICS};
use crate::session::{SessionState, UiPhase};
use std::fmt::Write;

/// Plain-text rendering of the assistant window
pub fn render_text(phase: &UiPhase, state: &SessionState) -> String {
    let mut out = String::new();

    match phase {
        UiPhase::Idle => {
            out.push_str("Not connected\n");
            return out;
        }
        UiPhase::Loading => {
            out.push_str("Loading...\n");
            return out;
        }
        UiPhase::Unavailable(reason) => {
            let _ = writeln!(out, "Assistant unavailable: {}", reason);
            return out;
        }
        UiPhase::Active => {}
    }

    let status = state.vad_status();
    let dot = if status.is_speaking() { "●" } else { "○" };
    let _ = writeln!(out, "{} Agent is {}", dot, status.as_str().to_lowercase());

    if !state.conversation_log().is_empty() {
        out.push('\n');
        for segment in state.conversation_log() {
            let _ = writeln!(out, "{}: {}", segment.speaker.label(), segment.text);
        }
    }

    if !state.current_transcript().is_empty() {
        let _ = writeln!(out, "\nLast Transcript: {}", state.current_transcript());
    }

    out.push('\n');
    let blocks = metrics_panel(state.metrics());
    if blocks.is_empty() {
        let _ = writeln!(out, "{}", WAITING_FOR_METRICS);
    }
    for block in blocks {
        let _ = writeln!(out, "{}", block.title);
        for row in block.rows {
            let _ = writeln!(out, "  {}: {}", row.label, row.value);
        }
    }

    out
}
