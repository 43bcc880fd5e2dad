// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Player**: scrub throttling, hover auto-hide, fallback aspect ratio
//! - **Navbar**: scroll thresholds and background sampling
//! - **Carousel/Marquee**: autoplay and speed scaling
//! - **Calculator**: floor-area slider bounds

// ==========================================================================
// Player Defaults
// ==========================================================================

/// Minimum interval between committed seeks while scrubbing (milliseconds).
/// Preview visuals update on every move; only commits are throttled.
pub const SEEK_THROTTLE_MS: u64 = 180;

/// Delay before hover controls auto-hide while idle (milliseconds).
pub const HOVER_HIDE_DELAY_MS: u64 = 3000;

/// Fallback display aspect ratio when no dimension source is available.
pub const FALLBACK_ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Displayed duration before any media metadata arrives.
pub const ZERO_TIME_TEXT: &str = "00:00";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Maximum number of diagnostic events retained in memory.
pub const DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

// ==========================================================================
// Navbar Defaults
// ==========================================================================

/// Scroll offset below which the navbar stays transparent (pixels).
pub const NAVBAR_SCROLL_THRESHOLD: f32 = 100.0;

/// Interval between background brightness checks (milliseconds).
pub const COLOR_CHECK_INTERVAL_MS: u64 = 150;

/// Perceived brightness (0-255) below which the light text theme is used.
pub const BRIGHTNESS_THRESHOLD: f32 = 120.0;

/// Scroll offset past which the light theme is always dropped (pixels).
pub const THEME_SCROLL_CUTOFF: f32 = 50.0;

// ==========================================================================
// Carousel / Marquee Defaults
// ==========================================================================

/// Autoplay delay between carousel slides (milliseconds).
pub const CAROUSEL_AUTOPLAY_DELAY_MS: u64 = 3000;

/// Carousel slide transition duration (milliseconds).
pub const CAROUSEL_TRANSITION_MS: u64 = 800;

/// Delay between logo rotator cell swaps (milliseconds).
pub const LOGO_ROTATOR_CYCLE_MS: u64 = 5000;

/// Viewport width below which marquee speed is quartered (pixels).
pub const MARQUEE_NARROW_VIEWPORT: f32 = 479.0;

/// Viewport width below which marquee speed is halved (pixels).
pub const MARQUEE_MEDIUM_VIEWPORT: f32 = 991.0;

// ==========================================================================
// Calculator Defaults
// ==========================================================================

/// Minimum selectable floor area (m²).
pub const MIN_FLOOR_AREA: u32 = 0;

/// Maximum selectable floor area (m²).
pub const MAX_FLOOR_AREA: u32 = 50_000;
