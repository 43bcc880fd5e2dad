// SPDX-License-Identifier: MPL-2.0
//! Hover-control visibility.
//!
//! Pointer activity inside the player wakes the controls; after a quiet
//! period they auto-hide. The timer is a deadline checked from the app's
//! tick rather than a spawned timer, so repeated wakes just push the
//! deadline out.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverVisibility {
    Active,
    #[default]
    Idle,
}

impl HoverVisibility {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HoverVisibility::Active => "active",
            HoverVisibility::Idle => "idle",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HoverState {
    visibility: HoverVisibility,
    hide_at: Option<Instant>,
}

impl HoverState {
    #[must_use]
    pub fn visibility(&self) -> HoverVisibility {
        self.visibility
    }

    /// Wakes the controls and schedules auto-hide `delay` from `now`.
    /// Returns whether visibility changed.
    pub fn wake(&mut self, now: Instant, delay: Duration) -> bool {
        self.hide_at = Some(now + delay);
        let changed = self.visibility != HoverVisibility::Active;
        self.visibility = HoverVisibility::Active;
        changed
    }

    /// Hides immediately (pointer left the player). Returns whether
    /// visibility changed.
    pub fn sleep(&mut self) -> bool {
        self.hide_at = None;
        let changed = self.visibility != HoverVisibility::Idle;
        self.visibility = HoverVisibility::Idle;
        changed
    }

    /// Checks the auto-hide deadline. Returns whether visibility changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline && self.visibility == HoverVisibility::Active => {
                self.visibility = HoverVisibility::Idle;
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }
}
