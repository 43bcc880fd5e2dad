// SPDX-License-Identifier: MPL-2.0
//! Rotating logo grid.
//!
//! A fixed number of visible cells draws from a larger pool of partner
//! logos. Every cycle the window advances by the visible count, wrapping
//! around the pool, so each cell swaps to a fresh logo. Rotation pauses
//! while the grid is scrolled out of view.

use std::time::{Duration, Instant};

use crate::config::LOGO_ROTATOR_CYCLE_MS;

use super::lifecycle::PageComponent;

#[derive(Debug, Clone)]
pub struct LogoRotator {
    pool_len: usize,
    visible_count: usize,
    cycle_index: usize,
    in_view: bool,
    cycle_delay: Duration,
    next_cycle: Option<Instant>,
}

impl LogoRotator {
    #[must_use]
    pub fn new(pool_len: usize, visible_count: usize) -> Self {
        Self::with_cycle(
            pool_len,
            visible_count,
            Duration::from_millis(LOGO_ROTATOR_CYCLE_MS),
        )
    }

    #[must_use]
    pub fn with_cycle(pool_len: usize, visible_count: usize, cycle_delay: Duration) -> Self {
        Self {
            pool_len,
            visible_count,
            cycle_index: 0,
            in_view: true,
            cycle_delay,
            next_cycle: None,
        }
    }

    /// Pool indices currently shown, one per cell. A pool smaller than the
    /// cell count repeats.
    #[must_use]
    pub fn visible_logos(&self) -> Vec<usize> {
        if self.pool_len == 0 {
            return Vec::new();
        }
        let start = (self.cycle_index * self.visible_count) % self.pool_len;
        (0..self.visible_count)
            .map(|cell| (start + cell) % self.pool_len)
            .collect()
    }

    /// Advances the window on the cycle deadline. Returns whether the
    /// cells swapped.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_cycle else {
            return false;
        };
        if !self.in_view || now < deadline || self.pool_len == 0 {
            return false;
        }
        // Wrapping at the pool length preserves the window sequence.
        self.cycle_index = (self.cycle_index + 1) % self.pool_len;
        self.next_cycle = Some(now + self.cycle_delay);
        true
    }

    /// Visibility gate fed by the scroll position. Re-entering view puts
    /// the next swap a full interval away.
    pub fn set_in_view(&mut self, in_view: bool, now: Instant) {
        if in_view && !self.in_view && self.next_cycle.is_some() {
            self.next_cycle = Some(now + self.cycle_delay);
        }
        self.in_view = in_view;
    }

    /// Starts the cycle clock relative to `now`.
    pub fn start_cycling(&mut self, now: Instant) {
        self.next_cycle = Some(now + self.cycle_delay);
    }
}

impl PageComponent for LogoRotator {
    fn init(&mut self) {
        self.cycle_index = 0;
        self.in_view = true;
        self.next_cycle = Some(Instant::now() + self.cycle_delay);
    }

    fn cleanup(&mut self) {
        self.next_cycle = None;
    }
}
