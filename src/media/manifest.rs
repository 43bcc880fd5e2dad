// SPDX-License-Identifier: MPL-2.0
//! Line-oriented parsing of variant playlists.
//!
//! A variant (master) playlist lists quality levels as pairs of an
//! `#EXT-X-STREAM-INF` tag line and the following non-comment URI line.
//! Only the `RESOLUTION=WxH` attribute is extracted; everything else in the
//! tag is ignored. The format assumption is deliberate and narrow — if the
//! upstream format drifts, parsing yields no levels and callers fall back,
//! so the gap is surfaced through diagnostics rather than a hard failure.

const STREAM_INF_TAG: &str = "#EXT-X-STREAM-INF:";

/// One quality level advertised by a variant playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityLevel {
    pub width: u32,
    pub height: u32,
}

impl QualityLevel {
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.width as f32 / self.height as f32)
    }
}

/// Extracts every quality level with a parseable resolution, in playlist order.
#[must_use]
pub fn parse_levels(manifest: &str) -> Vec<QualityLevel> {
    let mut levels = Vec::new();
    let mut pending_tag: Option<&str> = None;

    for line in manifest.lines() {
        let line = line.trim_end_matches('\r');
        if line.starts_with(STREAM_INF_TAG) {
            pending_tag = Some(line);
        } else if let Some(tag) = pending_tag {
            // The first non-comment line after the tag is the variant URI,
            // which completes the pair whether or not it parses.
            if !line.is_empty() && !line.starts_with('#') {
                if let Some(level) = parse_resolution(tag) {
                    levels.push(level);
                }
                pending_tag = None;
            }
        }
    }

    levels
}

/// Picks the level with the largest width, ties resolved by first occurrence.
#[must_use]
pub fn best_level(manifest: &str) -> Option<QualityLevel> {
    parse_levels(manifest)
        .into_iter()
        .fold(None, |best: Option<QualityLevel>, level| match best {
            Some(current) if level.width <= current.width => Some(current),
            _ => Some(level),
        })
}

fn parse_resolution(tag: &str) -> Option<QualityLevel> {
    let start = tag.find("RESOLUTION=")? + "RESOLUTION=".len();
    let rest = &tag[start..];
    let end = rest.find(',').unwrap_or(rest.len());
    let (w, h) = rest[..end].split_once('x')?;
    Some(QualityLevel {
        width: w.trim().parse().ok()?,
        height: h.trim().parse().ok()?,
    })
}
