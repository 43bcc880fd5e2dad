// SPDX-License-Identifier: MPL-2.0
//! Scroll-reactive navigation bar state.
//!
//! Three independent behaviors share the scroll position:
//! - visibility: hide on downward scroll past a threshold, show on upward;
//! - transparency: the bar is transparent until the page scrolls;
//! - text theme: near the top of the page, the background under the bar is
//!   sampled periodically and a perceptual brightness decides light vs dark
//!   text. Past a small scroll cutoff the light theme is always dropped.
//!
//! The bar itself is global and survives page transitions; the routing layer
//! calls [`NavbarState::reset`] on navigation.

use std::time::Instant;

use crate::config::{
    BRIGHTNESS_THRESHOLD, COLOR_CHECK_INTERVAL_MS, NAVBAR_SCROLL_THRESHOLD, THEME_SCROLL_CUTOFF,
};

/// An opaque RGB sample of the page area behind the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BackgroundSample {
    /// Perceived brightness, 0–255.
    #[must_use]
    pub fn brightness(self) -> f32 {
        0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)
    }
}

#[derive(Debug, Clone)]
pub struct NavbarState {
    scroll_y: f32,
    hidden: bool,
    transparent: bool,
    light_theme: bool,
    last_sample_at: Option<Instant>,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            hidden: false,
            transparent: true,
            light_theme: false,
            last_sample_at: None,
        }
    }
}

impl NavbarState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    #[must_use]
    pub fn light_theme(&self) -> bool {
        self.light_theme
    }

    /// Feeds a new scroll offset. Returns whether any presentation state
    /// changed.
    pub fn on_scroll(&mut self, y: f32) -> bool {
        let y = y.max(0.0);
        let previous = (self.hidden, self.transparent, self.light_theme);

        if y <= NAVBAR_SCROLL_THRESHOLD {
            self.hidden = false;
        } else if y > self.scroll_y {
            self.hidden = true;
        } else if y < self.scroll_y {
            self.hidden = false;
        }

        self.transparent = y <= 0.0;

        if y > THEME_SCROLL_CUTOFF {
            self.light_theme = false;
        }

        self.scroll_y = y;
        previous != (self.hidden, self.transparent, self.light_theme)
    }

    /// Feeds a background sample. Sampling is throttled; a sample inside
    /// the throttle window or past the theme cutoff is discarded. Returns
    /// whether the theme changed.
    pub fn on_background_sample(&mut self, now: Instant, sample: BackgroundSample) -> bool {
        if self.scroll_y > THEME_SCROLL_CUTOFF {
            return false;
        }
        if let Some(last) = self.last_sample_at {
            if now.saturating_duration_since(last).as_millis() < u128::from(COLOR_CHECK_INTERVAL_MS)
            {
                return false;
            }
        }
        self.last_sample_at = Some(now);

        let light = sample.brightness() < BRIGHTNESS_THRESHOLD;
        let changed = light != self.light_theme;
        self.light_theme = light;
        changed
    }

    /// Back to the top-of-page defaults; called on navigation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_relative_eq;
    use std::time::Duration;

    #[test]
    fn brightness_uses_perceptual_weighting() {
        let white = BackgroundSample {
            r: 255,
            g: 255,
            b: 255,
        };
        assert_relative_eq!(white.brightness(), 255.0, epsilon = 1e-3);

        let green = BackgroundSample { r: 0, g: 255, b: 0 };
        assert_relative_eq!(green.brightness(), 0.587 * 255.0, epsilon = 1e-3);
    }

    #[test]
    fn hides_on_downward_scroll_past_threshold_only() {
        let mut navbar = NavbarState::new();
        let _ = navbar.on_scroll(80.0);
        assert!(!navbar.is_hidden());

        let _ = navbar.on_scroll(300.0);
        assert!(navbar.is_hidden());

        let _ = navbar.on_scroll(250.0);
        assert!(!navbar.is_hidden());
    }

    #[test]
    fn transparent_only_at_the_very_top() {
        let mut navbar = NavbarState::new();
        assert!(navbar.is_transparent());
        let _ = navbar.on_scroll(1.0);
        assert!(!navbar.is_transparent());
        let _ = navbar.on_scroll(0.0);
        assert!(navbar.is_transparent());
    }

    #[test]
    fn dark_background_near_top_switches_to_light_theme() {
        let mut navbar = NavbarState::new();
        let now = Instant::now();
        let dark = BackgroundSample { r: 20, g: 20, b: 30 };
        assert!(navbar.on_background_sample(now, dark));
        assert!(navbar.light_theme());

        let bright = BackgroundSample {
            r: 250,
            g: 250,
            b: 245,
        };
        // Within the throttle window: ignored.
        assert!(!navbar.on_background_sample(now + Duration::from_millis(50), bright));
        assert!(navbar.light_theme());
        // After it: theme flips back.
        assert!(navbar.on_background_sample(now + Duration::from_millis(200), bright));
        assert!(!navbar.light_theme());
    }

    #[test]
    fn scrolling_past_cutoff_drops_light_theme_and_blocks_samples() {
        let mut navbar = NavbarState::new();
        let now = Instant::now();
        let dark = BackgroundSample { r: 0, g: 0, b: 0 };
        let _ = navbar.on_background_sample(now, dark);
        assert!(navbar.light_theme());

        let _ = navbar.on_scroll(120.0);
        assert!(!navbar.light_theme());
        assert!(!navbar.on_background_sample(now + Duration::from_secs(1), dark));
    }

    #[test]
    fn reset_restores_top_of_page_defaults() {
        let mut navbar = NavbarState::new();
        let _ = navbar.on_scroll(500.0);
        assert!(navbar.is_hidden());
        navbar.reset();
        assert!(!navbar.is_hidden());
        assert!(navbar.is_transparent());
    }
}
