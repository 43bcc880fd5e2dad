// SPDX-License-Identifier: MPL-2.0
//! Free-scrolling case-study teaser slider.
//!
//! Unlike the stepped testimonial carousel this one drifts: continuous
//! autoplay with a linear per-card travel time, looping forever. Drags
//! scroll freely and never stop the autoplay. Card count and travel time
//! step with the viewport width, and on desktop the slide set is
//! duplicated so the loop never shows a gap.

use super::lifecycle::PageComponent;

/// Viewport width from which the slide set is duplicated for the loop.
const DESKTOP_VIEWPORT: f32 = 992.0;

/// Cards visible at once for a given viewport width.
#[must_use]
pub fn slides_per_view(viewport_width: f32) -> f32 {
    if viewport_width < 480.0 {
        1.2
    } else if viewport_width < 640.0 {
        1.5
    } else if viewport_width < 768.0 {
        2.0
    } else if viewport_width < DESKTOP_VIEWPORT {
        2.5
    } else if viewport_width < 1280.0 {
        3.0
    } else if viewport_width < 1440.0 {
        3.5
    } else {
        4.0
    }
}

/// Travel time for one card width, in milliseconds.
#[must_use]
pub fn slide_travel_ms(viewport_width: f32) -> f32 {
    if viewport_width < 640.0 {
        5000.0
    } else if viewport_width < 768.0 {
        7500.0
    } else {
        10_000.0
    }
}

#[derive(Debug, Clone)]
pub struct CaseStudiesSlider {
    slide_count: usize,
    viewport_width: f32,
    /// Scroll position in card units, wrapping at `slide_count`.
    position: f32,
    running: bool,
}

impl CaseStudiesSlider {
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            viewport_width: 0.0,
            position: 0.0,
            running: false,
        }
    }

    /// Records the viewport width; called on layout and on resize.
    pub fn measure(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width.max(0.0);
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Continuous position in card units, `[0, slide_count)`.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Index of the leading card.
    #[must_use]
    pub fn current_slide(&self) -> usize {
        (self.position.floor() as usize).min(self.slide_count.saturating_sub(1))
    }

    /// Whether the slide set is cloned for a gapless desktop loop.
    #[must_use]
    pub fn duplicates_slides(&self) -> bool {
        self.viewport_width >= DESKTOP_VIEWPORT
    }

    /// Advances the drift by `dt_secs`.
    pub fn advance(&mut self, dt_secs: f32) {
        if !self.running || self.slide_count == 0 || self.viewport_width <= 0.0 {
            return;
        }
        let cards = dt_secs * 1000.0 / slide_travel_ms(self.viewport_width);
        self.position = (self.position + cards).rem_euclid(self.slide_count as f32);
    }

    /// Free-mode drag by `delta` card widths, either direction. The drift
    /// keeps running through and after the drag.
    pub fn drag_by(&mut self, delta: f32) {
        if !self.running || self.slide_count == 0 {
            return;
        }
        self.position = (self.position + delta).rem_euclid(self.slide_count as f32);
    }
}

impl PageComponent for CaseStudiesSlider {
    fn init(&mut self) {
        self.position = 0.0;
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

    fn slider(slide_count: usize, viewport_width: f32) -> CaseStudiesSlider {
        let mut slider = CaseStudiesSlider::new(slide_count);
        slider.measure(viewport_width);
        slider.init();
        slider
    }

    #[test]
    fn visible_cards_step_with_the_viewport() {
        assert_relative_eq!(slides_per_view(320.0), 1.2);
        assert_relative_eq!(slides_per_view(640.0), 2.0);
        assert_relative_eq!(slides_per_view(991.0), 2.5);
        assert_relative_eq!(slides_per_view(1440.0), 4.0);
    }

    #[test]
    fn travel_time_steps_with_the_viewport() {
        assert_relative_eq!(slide_travel_ms(480.0), 5000.0);
        assert_relative_eq!(slide_travel_ms(700.0), 7500.0);
        assert_relative_eq!(slide_travel_ms(1920.0), 10_000.0);
    }

    #[test]
    fn autoplay_drifts_and_wraps() {
        let mut slider = slider(4, 1000.0);
        // 10 s per card at this width.
        slider.advance(25.0);
        assert_relative_eq!(slider.position(), 2.5);
        assert_eq!(slider.current_slide(), 2);

        slider.advance(20.0);
        assert_relative_eq!(slider.position(), 0.5);
    }

    #[test]
    fn drags_scroll_freely_without_stopping_the_drift() {
        let mut slider = slider(4, 1000.0);
        slider.drag_by(-1.2);
        assert_relative_eq!(slider.position(), 2.8);

        // Autoplay keeps moving after the drag.
        slider.advance(10.0);
        assert_relative_eq!(slider.position(), 3.8);
    }

    #[test]
    fn only_desktop_duplicates_the_slides() {
        assert!(!slider(4, 991.0).duplicates_slides());
        assert!(slider(4, 992.0).duplicates_slides());
    }

    #[test]
    fn lifecycle_freezes_and_restarts_the_drift() {
        let mut slider = slider(4, 1000.0);
        slider.advance(10.0);
        assert_relative_eq!(slider.position(), 1.0);

        slider.cleanup();
        slider.advance(10.0);
        slider.drag_by(1.0);
        assert_relative_eq!(slider.position(), 1.0);

        slider.init();
        assert_relative_eq!(slider.position(), 0.0);
    }
}
