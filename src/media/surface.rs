// SPDX-License-Identifier: MPL-2.0
//! Playback surface port.
//!
//! `MediaSurface` abstracts the platform video element the controller drives.
//! The controller never assumes a concrete pipeline: the shipped
//! [`SimulatedSurface`] advances a wall clock while playing (enough for the
//! demo binary and tests), [`NullSurface`] is the degraded no-op used when a
//! root is missing its video element, and real decoder stacks implement the
//! trait behind the same seam.

use std::time::{Duration, Instant};

/// Result of a play request.
///
/// Play can be rejected for benign reasons (a racing pause, a platform
/// gesture policy). Rejection is expected and non-actionable, so callers
/// discard the outcome explicitly with `let _ =`.
#[must_use = "play rejection is expected; discard it explicitly"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    Rejected,
}

/// Result of a fullscreen request, same discard policy as [`PlayOutcome`].
#[must_use = "fullscreen rejection is expected; discard it explicitly"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenOutcome {
    Entered,
    Rejected,
}

/// Typed media events consumed by the player state machine.
///
/// These mirror the readiness/transport notifications a platform video
/// element emits; the app's subscription (or a test driver) feeds them in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// A play request was accepted; playback is starting.
    Play,
    /// Frames are actually advancing.
    Playing,
    /// Playback paused.
    Pause,
    /// Playback stalled waiting for data.
    Waiting,
    /// Enough data to begin playing.
    CanPlay,
    /// Intrinsic dimensions and duration are known.
    LoadedMetadata,
    /// The reported duration changed.
    DurationChange,
    /// The buffered ranges advanced.
    Progress,
    /// Current time advanced during playback.
    TimeUpdate,
    /// Playback reached the end of the media.
    Ended,
}

/// Port trait over a single video rendering/playback surface.
pub trait MediaSurface {
    /// Whether the surface can play `source` without an adaptive session.
    fn can_play_native(&self, source: &str) -> bool;

    /// Binds `source` directly (native transport).
    fn set_source(&mut self, source: &str);

    fn play(&mut self) -> PlayOutcome;
    fn pause(&mut self);
    /// Commits a seek to `position_secs` (clamped to the media duration).
    fn seek(&mut self, position_secs: f64);

    fn current_time(&self) -> f64;
    fn duration(&self) -> Option<f64>;
    fn buffered_end(&self) -> Option<f64>;
    fn dimensions(&self) -> Option<(u32, u32)>;

    fn set_muted(&mut self, muted: bool);
    fn muted(&self) -> bool;

    fn is_paused(&self) -> bool;
    fn has_ended(&self) -> bool;
    /// Whether playback has ever advanced past time zero since attach.
    fn has_played(&self) -> bool;

    fn request_fullscreen(&mut self) -> FullscreenOutcome;
    fn exit_fullscreen(&mut self);
    fn fullscreen_active(&self) -> bool;

    /// Advances any internal clock to `now`. Pipelines that push their own
    /// events can ignore this.
    fn advance(&mut self, _now: Instant) {}

    /// Drains the media events emitted since the last call.
    fn take_events(&mut self) -> Vec<MediaEvent> {
        Vec::new()
    }
}

/// Degraded no-op surface used when a player root has no video element.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl MediaSurface for NullSurface {
    fn can_play_native(&self, _source: &str) -> bool {
        false
    }
    fn set_source(&mut self, _source: &str) {}
    fn play(&mut self) -> PlayOutcome {
        PlayOutcome::Rejected
    }
    fn pause(&mut self) {}
    fn seek(&mut self, _position_secs: f64) {}
    fn current_time(&self) -> f64 {
        0.0
    }
    fn duration(&self) -> Option<f64> {
        None
    }
    fn buffered_end(&self) -> Option<f64> {
        None
    }
    fn dimensions(&self) -> Option<(u32, u32)> {
        None
    }
    fn set_muted(&mut self, _muted: bool) {}
    fn muted(&self) -> bool {
        false
    }
    fn is_paused(&self) -> bool {
        true
    }
    fn has_ended(&self) -> bool {
        false
    }
    fn has_played(&self) -> bool {
        false
    }
    fn request_fullscreen(&mut self) -> FullscreenOutcome {
        FullscreenOutcome::Rejected
    }
    fn exit_fullscreen(&mut self) {}
    fn fullscreen_active(&self) -> bool {
        false
    }
}

/// File extensions the simulated surface treats as natively playable.
const NATIVE_EXTENSIONS: [&str; 4] = [".mp4", ".webm", ".mov", ".m4v"];

/// Clock-driven surface: while playing, `advance` moves the position in real
/// time and synthesizes the media events a platform element would emit.
#[derive(Debug)]
pub struct SimulatedSurface {
    source: Option<String>,
    duration_secs: f64,
    dimensions: Option<(u32, u32)>,
    position_secs: f64,
    playing: bool,
    ended: bool,
    max_position_secs: f64,
    muted: bool,
    fullscreen: bool,
    play_epoch: Option<Instant>,
    pending: Vec<MediaEvent>,
}

/// Default duration reported by the simulated surface once metadata loads.
const SIMULATED_DURATION_SECS: f64 = 90.0;

impl Default for SimulatedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            duration_secs: SIMULATED_DURATION_SECS,
            dimensions: None,
            position_secs: 0.0,
            playing: false,
            ended: false,
            max_position_secs: 0.0,
            muted: false,
            fullscreen: false,
            play_epoch: None,
            pending: Vec::new(),
        }
    }

    /// Overrides the metadata reported after the next `set_source`.
    pub fn with_metadata(mut self, duration_secs: f64, dimensions: (u32, u32)) -> Self {
        self.duration_secs = duration_secs;
        self.dimensions = Some(dimensions);
        self
    }

    /// Test/demo helper: advance as if `dt` elapsed.
    pub fn advance_by(&mut self, dt: Duration) {
        if let Some(epoch) = self.play_epoch {
            self.advance(epoch + dt);
        }
    }
}

impl MediaSurface for SimulatedSurface {
    /// Advances the simulated clock to `now`, emitting time and end events.
    fn advance(&mut self, now: Instant) {
        if !self.playing {
            return;
        }
        let Some(epoch) = self.play_epoch else { return };
        let elapsed = now.saturating_duration_since(epoch);
        self.play_epoch = Some(now);
        self.position_secs += elapsed.as_secs_f64();
        if self.position_secs >= self.duration_secs {
            self.position_secs = self.duration_secs;
            self.playing = false;
            self.ended = true;
            self.play_epoch = None;
            self.pending.push(MediaEvent::TimeUpdate);
            self.pending.push(MediaEvent::Ended);
        } else {
            self.pending.push(MediaEvent::TimeUpdate);
        }
        self.max_position_secs = self.max_position_secs.max(self.position_secs);
    }

    fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.pending)
    }

    fn can_play_native(&self, source: &str) -> bool {
        let lower = source.to_ascii_lowercase();
        NATIVE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }

    fn set_source(&mut self, source: &str) {
        self.source = Some(source.to_string());
        self.position_secs = 0.0;
        self.max_position_secs = 0.0;
        self.playing = false;
        self.ended = false;
        self.play_epoch = None;
        if self.dimensions.is_none() {
            self.dimensions = Some((1920, 1080));
        }
        // Metadata is available immediately in the simulation.
        self.pending.push(MediaEvent::LoadedMetadata);
        self.pending.push(MediaEvent::DurationChange);
        self.pending.push(MediaEvent::CanPlay);
    }

    fn play(&mut self) -> PlayOutcome {
        if self.source.is_none() {
            return PlayOutcome::Rejected;
        }
        if self.ended {
            self.position_secs = 0.0;
            self.ended = false;
        }
        self.playing = true;
        self.play_epoch = Some(Instant::now());
        self.pending.push(MediaEvent::Play);
        self.pending.push(MediaEvent::Playing);
        PlayOutcome::Started
    }

    fn pause(&mut self) {
        if self.playing {
            self.advance(Instant::now());
        }
        if self.playing || self.play_epoch.is_some() {
            self.playing = false;
            self.play_epoch = None;
            self.pending.push(MediaEvent::Pause);
        } else if !self.ended {
            self.pending.push(MediaEvent::Pause);
        }
    }

    fn seek(&mut self, position_secs: f64) {
        self.position_secs = position_secs.clamp(0.0, self.duration_secs);
        self.max_position_secs = self.max_position_secs.max(self.position_secs);
        self.ended = false;
        if self.playing {
            self.play_epoch = Some(Instant::now());
        }
        self.pending.push(MediaEvent::TimeUpdate);
    }

    fn current_time(&self) -> f64 {
        self.position_secs
    }

    fn duration(&self) -> Option<f64> {
        self.source.as_ref().map(|_| self.duration_secs)
    }

    fn buffered_end(&self) -> Option<f64> {
        // The simulation has no network pipeline; treat everything played
        // plus a small readahead as buffered.
        self.source
            .as_ref()
            .map(|_| (self.position_secs + 10.0).min(self.duration_secs))
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        self.source.as_ref().and(self.dimensions)
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }

    fn has_ended(&self) -> bool {
        self.ended
    }

    fn has_played(&self) -> bool {
        self.max_position_secs > 0.0
    }

    fn request_fullscreen(&mut self) -> FullscreenOutcome {
        self.fullscreen = true;
        FullscreenOutcome::Entered
    }

    fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    fn fullscreen_active(&self) -> bool {
        self.fullscreen
    }
}
