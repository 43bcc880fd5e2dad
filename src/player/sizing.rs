// SPDX-License-Identifier: MPL-2.0
//! Aspect-ratio derivation and lightbox clamp math.
//!
//! The player box must fit inside the lightbox wrapper without distorting
//! the media. The display ratio comes from, in priority order:
//!
//! 1. native media dimensions once the surface knows them,
//! 2. the best adaptive-stream quality level,
//! 3. a probed manifest's best listed resolution.
//!
//! The tiers exist because dimensions are unavailable synchronously on slow
//! networks; until any tier resolves, the configured fallback applies.

use crate::config::{SizeMode, FALLBACK_ASPECT_RATIO};
use crate::media::QualityLevel;

/// Computed box constraints as percentages of the wrapper's content box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampBox {
    pub max_width_pct: f32,
    pub max_height_pct: f32,
}

/// Where the active ratio came from, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioSource {
    Surface,
    SessionLevel,
    Probe,
    Fallback,
}

/// Resolves the display ratio from the available tiers.
///
/// `Cover` mode opts out of ratio sizing entirely.
#[must_use]
pub fn derive_ratio(
    mode: SizeMode,
    surface_dimensions: Option<(u32, u32)>,
    session_best: Option<QualityLevel>,
    probed_best: Option<QualityLevel>,
) -> Option<(f32, RatioSource)> {
    if mode == SizeMode::Cover {
        return None;
    }
    if mode == SizeMode::Auto {
        if let Some((w, h)) = surface_dimensions {
            if w > 0 && h > 0 {
                return Some((w as f32 / h as f32, RatioSource::Surface));
            }
        }
        if let Some(ratio) = session_best.and_then(|level| level.aspect_ratio()) {
            return Some((ratio, RatioSource::SessionLevel));
        }
        if let Some(ratio) = probed_best.and_then(|level| level.aspect_ratio()) {
            return Some((ratio, RatioSource::Probe));
        }
    }
    Some((FALLBACK_ASPECT_RATIO, RatioSource::Fallback))
}

/// Fits a box of `ratio` into the wrapper's content area.
///
/// Returns `None` when the content area is degenerate, in which case the
/// previous clamp is left untouched.
#[must_use]
pub fn clamp_box(content_width: f32, content_height: f32, ratio: f32) -> Option<ClampBox> {
    if content_width <= 0.0 || content_height <= 0.0 || ratio <= 0.0 {
        return None;
    }

    let height_if_full_width = content_width / ratio;
    if height_if_full_width <= content_height {
        Some(ClampBox {
            max_width_pct: 100.0,
            max_height_pct: height_if_full_width / content_height * 100.0,
        })
    } else {
        Some(ClampBox {
            max_width_pct: (content_height * ratio) / content_width * 100.0,
            max_height_pct: 100.0,
        })
    }
}
