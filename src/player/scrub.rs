// SPDX-License-Identifier: MPL-2.0
//! Timeline scrubbing.
//!
//! A scrub session lives from pointer-down to pointer-up on the timeline.
//! Visual previews (handle position, time text) track every move; committed
//! seeks are throttled to one per [`crate::config::SEEK_THROTTLE_MS`] so the
//! media pipeline is not flooded. The final seek on release is always
//! committed, exactly once.

use crate::config::SEEK_THROTTLE_MS;
use std::time::{Duration, Instant};

/// Horizontal extent of the timeline control, cached at drag start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineRect {
    pub left: f32,
    pub width: f32,
}

impl TimelineRect {
    /// Maps a pointer X coordinate to a clamped fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction_from_x(&self, x: f32) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        ((x - self.left) / self.width).clamp(0.0, 1.0)
    }
}

/// What a scrub step asks of the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubStep {
    /// Fraction to render the preview at (always present).
    pub preview_fraction: f32,
    /// Seek to commit now, if the throttle window has elapsed.
    pub commit_secs: Option<f64>,
}

/// Outcome of ending a scrub.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubEnd {
    /// The final committed seek position.
    pub commit_secs: f64,
    /// Whether playback should resume (it was playing at drag start).
    pub resume: bool,
}

/// One pointer-down → pointer-up drag on the timeline.
#[derive(Debug, Clone)]
pub struct ScrubSession {
    rect: TimelineRect,
    duration_secs: f64,
    was_playing: bool,
    target_secs: f64,
    last_commit: Instant,
}

impl ScrubSession {
    /// Starts a drag. No seek is committed yet; the first commit happens on
    /// a move once the throttle window elapses, or on release.
    #[must_use]
    pub fn begin(
        rect: TimelineRect,
        duration_secs: f64,
        was_playing: bool,
        pointer_x: f32,
        now: Instant,
    ) -> (Self, ScrubStep) {
        let fraction = rect.fraction_from_x(pointer_x);
        let session = Self {
            rect,
            duration_secs,
            was_playing,
            target_secs: f64::from(fraction) * duration_secs,
            last_commit: now,
        };
        let step = ScrubStep {
            preview_fraction: fraction,
            commit_secs: None,
        };
        (session, step)
    }

    /// Processes a pointer move during the drag.
    pub fn update(&mut self, pointer_x: f32, now: Instant) -> ScrubStep {
        let fraction = self.rect.fraction_from_x(pointer_x);
        self.target_secs = f64::from(fraction) * self.duration_secs;

        let elapsed = now.saturating_duration_since(self.last_commit);
        let commit_secs = if elapsed >= Duration::from_millis(SEEK_THROTTLE_MS) {
            self.last_commit = now;
            Some(self.target_secs)
        } else {
            None
        };

        ScrubStep {
            preview_fraction: fraction,
            commit_secs,
        }
    }

    /// Ends the drag, committing the final position unconditionally.
    #[must_use]
    pub fn end(mut self, pointer_x: f32) -> ScrubEnd {
        let fraction = self.rect.fraction_from_x(pointer_x);
        self.target_secs = f64::from(fraction) * self.duration_secs;
        ScrubEnd {
            commit_secs: self.target_secs,
            resume: self.was_playing,
        }
    }

    #[must_use]
    pub fn was_playing(&self) -> bool {
        self.was_playing
    }

    #[must_use]
    pub fn target_secs(&self) -> f64 {
        self.target_secs
    }
}
