// SPDX-License-Identifier: MPL-2.0
//! Adaptive streaming session lifecycle.
//!
//! One session mediates the quality variants of a single source. Lifecycle:
//! `attach_media` binds the session to the surface, `manifest_loaded` parses
//! the quality levels, `level_loaded` reports duration hints as variant
//! playlists arrive. `destroy` is idempotent and never fails outward —
//! teardown runs on best-effort paths that must not throw.
//!
//! The session itself is synchronous state; the network half (fetching the
//! manifest text) lives with the caller, which maps completions back into
//! these methods.

use super::manifest::{self, QualityLevel};

/// Events emitted by an adaptive session, drained by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The session is bound to the playback surface.
    MediaAttached,
    /// The variant manifest was parsed; quality levels are known.
    ManifestParsed { levels: Vec<QualityLevel> },
    /// A variant playlist loaded, carrying a total-duration hint.
    LevelLoaded { total_duration_secs: f64 },
}

/// Client-side adaptive streaming session for one source.
#[derive(Debug)]
pub struct AdaptiveSession {
    source: String,
    attached: bool,
    destroyed: bool,
    levels: Vec<QualityLevel>,
    pending: Vec<SessionEvent>,
}

impl AdaptiveSession {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            attached: false,
            destroyed: false,
            levels: Vec::new(),
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached && !self.destroyed
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Parsed quality levels, empty until the manifest arrives.
    #[must_use]
    pub fn levels(&self) -> &[QualityLevel] {
        &self.levels
    }

    /// The widest advertised level, used as a sizing hint.
    #[must_use]
    pub fn best_level(&self) -> Option<QualityLevel> {
        self.levels
            .iter()
            .copied()
            .fold(None, |best: Option<QualityLevel>, level| match best {
                Some(current) if level.width <= current.width => Some(current),
                _ => Some(level),
            })
    }

    /// Binds the session to the playback surface. Loading the source only
    /// starts after attachment, matching the original's event ordering.
    pub fn attach_media(&mut self) {
        if self.destroyed || self.attached {
            return;
        }
        self.attached = true;
        self.pending.push(SessionEvent::MediaAttached);
    }

    /// Feeds the fetched manifest text into the session.
    pub fn manifest_loaded(&mut self, text: &str) {
        if self.destroyed || !self.attached {
            return;
        }
        self.levels = manifest::parse_levels(text);
        self.pending.push(SessionEvent::ManifestParsed {
            levels: self.levels.clone(),
        });
    }

    /// Records a variant playlist's total-duration hint.
    pub fn level_loaded(&mut self, total_duration_secs: f64) {
        if self.destroyed || !total_duration_secs.is_finite() {
            return;
        }
        self.pending
            .push(SessionEvent::LevelLoaded { total_duration_secs });
    }

    /// Tears the session down. Idempotent; discards queued events.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.attached = false;
        self.levels.clear();
        self.pending.clear();
    }

    /// Drains the events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending)
    }
}
