// SPDX-License-Identifier: MPL-2.0
//! State-output attribute surface.
//!
//! The controller communicates with its presentation exclusively through
//! these named attributes — the analog of the original data-attribute
//! contract. Nothing else inspects controller internals. Writes are diffed:
//! setting an attribute to its current value is a no-op.

use std::collections::BTreeMap;

/// Attribute keys the controller writes.
pub mod keys {
    /// Player status (`idle`/`loading`/`ready`/`playing`/`paused`).
    pub const STATUS: &str = "status";
    /// Whether playback has started at least once since open.
    pub const ACTIVATED: &str = "activated";
    /// Audio mute flag.
    pub const MUTED: &str = "muted";
    /// Fullscreen flag.
    pub const FULLSCREEN: &str = "fullscreen";
    /// Timeline drag-in-progress flag.
    pub const TIMELINE_DRAG: &str = "timeline-drag";
    /// Hover-control visibility (`active`/`idle`).
    pub const HOVER: &str = "hover";
    /// Lightbox presentation state (`active`/`not-active`).
    pub const LIGHTBOX: &str = "lightbox";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    values: BTreeMap<&'static str, String>,
}

impl AttributeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning whether anything changed.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.values.get(key) == Some(&value) {
            return false;
        }
        self.values.insert(key, value);
        true
    }

    /// Boolean convenience writing `"true"`/`"false"`.
    pub fn set_flag(&mut self, key: &'static str, value: bool) -> bool {
        self.set(key, if value { "true" } else { "false" })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_change_only_on_difference() {
        let mut attrs = AttributeSet::new();
        assert!(attrs.set(keys::STATUS, "idle"));
        assert!(!attrs.set(keys::STATUS, "idle"));
        assert!(attrs.set(keys::STATUS, "loading"));
        assert_eq!(attrs.get(keys::STATUS), Some("loading"));
    }

    #[test]
    fn flags_round_trip() {
        let mut attrs = AttributeSet::new();
        assert!(attrs.set_flag(keys::ACTIVATED, true));
        assert!(attrs.flag(keys::ACTIVATED));
        assert!(attrs.set_flag(keys::ACTIVATED, false));
        assert!(!attrs.flag(keys::ACTIVATED));
    }

    #[test]
    fn missing_attribute_reads_as_unset() {
        let attrs = AttributeSet::new();
        assert!(attrs.get(keys::FULLSCREEN).is_none());
        assert!(!attrs.flag(keys::FULLSCREEN));
    }
}
