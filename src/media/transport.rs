// SPDX-License-Identifier: MPL-2.0
//! Transport capability selection.
//!
//! Mirrors the original attach logic: prefer the surface's native playback
//! when it can handle the format, otherwise fall back to an adaptive
//! streaming session when one is supported.

use super::surface::MediaSurface;

/// How a source gets bound to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// The surface plays the source directly.
    Native,
    /// An [`crate::media::AdaptiveSession`] mediates quality variants.
    Adaptive,
}

/// Whether adaptive sessions are available in this build.
///
/// The session implementation is always compiled in; the hook exists so a
/// host embedding only native playback can turn it off.
pub const ADAPTIVE_SUPPORTED: bool = true;

/// Selects the transport for `source`, or `None` when nothing can play it.
pub fn select_transport(surface: &dyn MediaSurface, source: &str) -> Option<Transport> {
    if surface.can_play_native(source) {
        return Some(Transport::Native);
    }
    if ADAPTIVE_SUPPORTED {
        return Some(Transport::Adaptive);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::surface::SimulatedSurface;

    #[test]
    fn native_formats_use_native_transport() {
        let surface = SimulatedSurface::new();
        assert_eq!(
            select_transport(&surface, "clip.mp4"),
            Some(Transport::Native)
        );
    }

    #[test]
    fn manifests_use_adaptive_transport() {
        let surface = SimulatedSurface::new();
        assert_eq!(
            select_transport(&surface, "https://cdn.example/master.m3u8"),
            Some(Transport::Adaptive)
        );
    }
}
