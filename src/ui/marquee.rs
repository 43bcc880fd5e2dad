// SPDX-License-Identifier: MPL-2.0
//! Continuous logo marquee.
//!
//! The strip scrolls leftward at a rate derived from a base speed, the
//! content/viewport width ratio, and a viewport-class multiplier so narrow
//! screens read calmer. The content is duplicated enough times that the loop
//! never shows a gap.

use crate::config::{MARQUEE_MEDIUM_VIEWPORT, MARQUEE_NARROW_VIEWPORT};

use super::lifecycle::PageComponent;

/// Viewport-class speed multiplier.
#[must_use]
pub fn speed_multiplier(viewport_width: f32) -> f32 {
    if viewport_width < MARQUEE_NARROW_VIEWPORT {
        0.25
    } else if viewport_width < MARQUEE_MEDIUM_VIEWPORT {
        0.5
    } else {
        1.0
    }
}

#[derive(Debug, Clone)]
pub struct Marquee {
    base_speed: f32,
    content_width: f32,
    viewport_width: f32,
    offset: f32,
    running: bool,
}

impl Marquee {
    /// `base_speed` is in pixels per second at the reference viewport.
    #[must_use]
    pub fn new(base_speed: f32) -> Self {
        Self {
            base_speed,
            content_width: 0.0,
            viewport_width: 0.0,
            offset: 0.0,
            running: false,
        }
    }

    /// Records measured geometry; called on layout and on resize.
    pub fn measure(&mut self, content_width: f32, viewport_width: f32) {
        self.content_width = content_width.max(0.0);
        self.viewport_width = viewport_width.max(0.0);
        self.offset %= self.content_width.max(1.0);
    }

    /// Effective scroll speed in pixels per second.
    #[must_use]
    pub fn effective_speed(&self) -> f32 {
        if self.viewport_width <= 0.0 || self.content_width <= 0.0 {
            return 0.0;
        }
        self.base_speed * (self.content_width / self.viewport_width)
            * speed_multiplier(self.viewport_width)
    }

    /// How many copies of the strip are needed for a gapless loop.
    #[must_use]
    pub fn copies_needed(&self) -> usize {
        if self.content_width <= 0.0 || self.viewport_width <= 0.0 {
            return 1;
        }
        ((self.viewport_width / self.content_width).ceil() as usize + 1).max(2)
    }

    /// Current leftward offset into the strip.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Advances the scroll by `dt_secs`, wrapping at the content width.
    pub fn advance(&mut self, dt_secs: f32) {
        if !self.running || self.content_width <= 0.0 {
            return;
        }
        self.offset = (self.offset + self.effective_speed() * dt_secs) % self.content_width;
    }
}

impl PageComponent for Marquee {
    fn init(&mut self) {
        self.offset = 0.0;
        self.running = true;
    }

    fn cleanup(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_relative_eq;

    #[test]
    fn multiplier_tiers_match_viewport_classes() {
        assert_relative_eq!(speed_multiplier(400.0), 0.25);
        assert_relative_eq!(speed_multiplier(700.0), 0.5);
        assert_relative_eq!(speed_multiplier(991.0), 1.0);
        assert_relative_eq!(speed_multiplier(1920.0), 1.0);
    }

    #[test]
    fn effective_speed_scales_with_content_ratio() {
        let mut marquee = Marquee::new(100.0);
        marquee.measure(2400.0, 1200.0);
        assert_relative_eq!(marquee.effective_speed(), 200.0);

        marquee.measure(2400.0, 600.0);
        // Ratio 4, viewport class 0.5.
        assert_relative_eq!(marquee.effective_speed(), 200.0);
    }

    #[test]
    fn duplication_covers_wide_viewports() {
        let mut marquee = Marquee::new(100.0);
        marquee.measure(500.0, 1700.0);
        assert_eq!(marquee.copies_needed(), 5);

        marquee.measure(2000.0, 1000.0);
        assert_eq!(marquee.copies_needed(), 2);
    }

    #[test]
    fn advance_wraps_at_content_width() {
        let mut marquee = Marquee::new(100.0);
        marquee.measure(1000.0, 1000.0);
        marquee.init();

        marquee.advance(5.0);
        assert_relative_eq!(marquee.offset(), 500.0);
        marquee.advance(6.0);
        assert_relative_eq!(marquee.offset(), 100.0);
    }

    #[test]
    fn cleanup_freezes_the_strip() {
        let mut marquee = Marquee::new(100.0);
        marquee.measure(1000.0, 1000.0);
        marquee.init();
        marquee.cleanup();
        marquee.advance(5.0);
        assert_relative_eq!(marquee.offset(), 0.0);
    }
}
