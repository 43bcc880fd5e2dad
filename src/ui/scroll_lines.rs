// SPDX-License-Identifier: MPL-2.0
//! Scroll-scrubbed decorative line drawing.
//!
//! Each line's draw progress is scrubbed directly from the scroll position
//! between a trigger start and end, with successive lines staggered by a
//! fractional delay so they draw one after another as the section scrolls
//! through the viewport.

use super::lifecycle::PageComponent;

#[derive(Debug, Clone)]
pub struct ScrollLines {
    line_count: usize,
    /// Fraction of the scroll range consumed before each successive line
    /// starts, in `[0, 1)`.
    stagger: f32,
    scroll_progress: f32,
    active: bool,
}

impl ScrollLines {
    #[must_use]
    pub fn new(line_count: usize, stagger: f32) -> Self {
        Self {
            line_count,
            stagger: stagger.clamp(0.0, 0.99),
            scroll_progress: 0.0,
            active: false,
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Feeds the section's scroll progress through its trigger range,
    /// clamped to `[0, 1]`.
    pub fn on_scroll_progress(&mut self, progress: f32) {
        if self.active {
            self.scroll_progress = progress.clamp(0.0, 1.0);
        }
    }

    /// Draw progress of line `index`, `0.0` (undrawn) to `1.0` (complete).
    ///
    /// Line `i` occupies the window starting at `i * stagger` of the scroll
    /// range; all lines finish together at full progress.
    #[must_use]
    pub fn line_progress(&self, index: usize) -> f32 {
        if index >= self.line_count {
            return 0.0;
        }
        let start = self.stagger * index as f32;
        let span = 1.0 - start;
        if span <= 0.0 {
            return if self.scroll_progress >= 1.0 { 1.0 } else { 0.0 };
        }
        ((self.scroll_progress - start) / span).clamp(0.0, 1.0)
    }
}

impl PageComponent for ScrollLines {
    fn init(&mut self) {
        self.scroll_progress = 0.0;
        self.active = true;
    }

    fn cleanup(&mut self) {
        self.active = false;
        self.scroll_progress = 0.0;
    }
}
