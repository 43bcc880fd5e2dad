// SPDX-License-Identifier: MPL-2.0
//! Player status state machine and per-instance state record.
//!
//! Status lifecycle:
//! - `Idle → Loading → Playing ⇄ Paused`
//! - `Playing | Paused → Idle` on ended (via close)
//! - any state may re-enter `Loading` on an explicit play request
//!
//! `Ready` is a cosmetic resting state: media finished loading while the
//! player is neither activated nor expecting playback.

/// Playback status driving the presentation attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    /// Nothing loaded or shown since open.
    #[default]
    Idle,
    /// A play request or media load is in flight.
    Loading,
    /// Media is ready but playback never started.
    Ready,
    /// Frames are advancing.
    Playing,
    /// Playback paused with progress retained.
    Paused,
}

impl PlayerStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerStatus::Idle => "idle",
            PlayerStatus::Loading => "loading",
            PlayerStatus::Ready => "ready",
            PlayerStatus::Playing => "playing",
            PlayerStatus::Paused => "paused",
        }
    }
}

/// Runtime state owned by one player instance.
///
/// The controller mutates this exclusively; everything the presentation
/// needs is projected into the attribute set.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    /// Currently attached stream URL; empty when detached.
    pub media_source: String,
    /// Whether a media pipeline (native or adaptive) is bound to the source.
    pub is_attached: bool,
    /// A play was requested before the media became ready.
    pub pending_play: bool,
    /// Deferred autoplay set when opening while media is still loading.
    pub auto_start_on_ready: bool,
    /// True once playback has started at least once since open.
    pub activated: bool,
    /// Fullscreen presentation flag.
    pub fullscreen: bool,
    /// Lightbox overlay currently active.
    pub lightbox_active: bool,
    pub status: PlayerStatus,
}

impl PlayerState {
    #[must_use]
    pub fn is_attached_to(&self, source: &str) -> bool {
        self.is_attached && !self.media_source.is_empty() && self.media_source == source
    }

    /// Clears attach bookkeeping ahead of binding a different source.
    pub fn reset_for_new_source(&mut self) {
        self.media_source.clear();
        self.is_attached = false;
        self.activated = false;
        self.status = PlayerStatus::Idle;
    }

    /// Marks `source` as the attach target.
    pub fn begin_attach(&mut self, source: &str) {
        self.media_source = source.to_string();
        self.is_attached = true;
    }

    /// The `ready` status only surfaces when nothing else claims the player:
    /// no pending play, not activated, still idle.
    pub fn ready_if_idle(&mut self) -> bool {
        if !self.pending_play && !self.activated && self.status == PlayerStatus::Idle {
            self.status = PlayerStatus::Ready;
            return true;
        }
        false
    }
}
