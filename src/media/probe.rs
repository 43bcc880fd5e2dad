// SPDX-License-Identifier: MPL-2.0
//! Network probe for variant-playlist resolution hints.
//!
//! Used as the last sizing tier when neither the media surface nor the
//! adaptive session has reported dimensions yet. The request carries no
//! credentials and disables caching; any failure collapses to `None` so the
//! caller's fallback ratio simply stays unset.

use super::manifest::{best_level, QualityLevel};

/// Fetches `url` and returns the best listed resolution, if any.
///
/// Only `http(s)` URLs are probed; anything else (including `blob:`-style
/// local handles) is rejected up front without a request.
pub async fn probe_best_resolution(url: &str) -> Option<QualityLevel> {
    let text = fetch_manifest_text(url).await?;
    best_level(&text)
}

/// Fetches a manifest's text, `None` on any transport or status failure.
pub async fn fetch_manifest_text(url: &str) -> Option<String> {
    if !is_probeable(url) {
        return None;
    }

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .await
        .ok()?;

    if !response.status().is_success() {
        return None;
    }

    response.text().await.ok()
}

/// Returns true when the URL is a remote manifest worth probing.
#[must_use]
pub fn is_probeable(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http:") || lower.starts_with("https:")
}
