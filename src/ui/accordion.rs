// SPDX-License-Identifier: MPL-2.0
//! Accordion panel state.
//!
//! Behavior is driven by four options mirroring the original component's
//! configuration: whether opening one panel closes the previous, whether a
//! second click closes an open panel, whether hovering opens, and an
//! optional 1-indexed panel opened on init.

use std::collections::BTreeSet;

use super::lifecycle::PageComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionOptions {
    /// Opening a panel closes the previously open ones.
    pub close_previous: bool,
    /// Clicking an open panel's header closes it.
    pub close_on_second_click: bool,
    /// Hovering a header opens its panel.
    pub open_on_hover: bool,
    /// 1-indexed panel opened on `init`; out-of-range values are ignored.
    pub open_by_default: Option<usize>,
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self {
            close_previous: true,
            close_on_second_click: true,
            open_on_hover: false,
            open_by_default: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Accordion {
    len: usize,
    options: AccordionOptions,
    open: BTreeSet<usize>,
}

impl Accordion {
    #[must_use]
    pub fn new(len: usize, options: AccordionOptions) -> Self {
        let mut accordion = Self {
            len,
            options,
            open: BTreeSet::new(),
        };
        accordion.apply_default();
        accordion
    }

    fn apply_default(&mut self) {
        if let Some(nth) = self.options.open_by_default {
            if nth >= 1 && nth <= self.len {
                self.open.insert(nth - 1);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Header click on panel `index` (0-indexed).
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        if self.open.contains(&index) {
            if self.options.close_on_second_click {
                self.open.remove(&index);
            }
            return;
        }
        self.open_panel(index);
    }

    /// Header hover on panel `index`; only acts when configured.
    pub fn hover(&mut self, index: usize) {
        if !self.options.open_on_hover || index >= self.len {
            return;
        }
        if !self.open.contains(&index) {
            self.open_panel(index);
        }
    }

    fn open_panel(&mut self, index: usize) {
        if self.options.close_previous {
            self.open.clear();
        }
        self.open.insert(index);
    }
}

impl PageComponent for Accordion {
    fn init(&mut self) {
        self.open.clear();
        self.apply_default();
    }

    fn cleanup(&mut self) {
        self.open.clear();
    }
}
