// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for player activity tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated player actions worth recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlayerAction {
    /// A lightbox was opened with a source.
    OpenLightbox {
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },
    /// A lightbox was closed.
    CloseLightbox,
    /// Every active lightbox closed via the escape signal.
    EscapeCloseAll,
    /// Play/pause toggled.
    TogglePlayback,
    /// Mute toggled.
    ToggleMute,
    /// Fullscreen toggled.
    ToggleFullscreen,
    /// A scrub drag committed its final seek.
    ScrubCommit {
        /// Committed position in seconds.
        position_secs: f64,
    },
}

/// What a diagnostic event records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A user action.
    Action { action: PlayerAction },
    /// A degraded-path warning (missing element, unroutable control).
    Warning { message: String },
    /// An adaptive session was torn down ahead of a new attach.
    SessionTeardown { source: String },
    /// A manifest probe failed; ratio sizing stays at its default.
    /// Recorded so the silent fallback is observable (monitoring gap).
    ProbeFailed { url: String },
}

/// A single timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_carry_a_timestamp() {
        let before = Utc::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "missing timeline".into(),
        });
        assert!(event.at >= before);
    }

    #[test]
    fn warning_serializes_with_kind_tag() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "missing timeline".into(),
        });
        let toml = toml::to_string(&event).expect("serializable");
        assert!(toml.contains("kind = \"warning\""));
        assert!(toml.contains("missing timeline"));
    }
}
