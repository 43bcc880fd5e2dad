// SPDX-License-Identifier: MPL-2.0
//! Looping testimonial carousel.
//!
//! Advances automatically on a fixed delay and wraps at both ends. Manual
//! navigation (arrows, bullets) does not stop the autoplay; it only restarts
//! the delay so the next automatic advance is a full interval away.

use std::time::{Duration, Instant};

use crate::config::CAROUSEL_AUTOPLAY_DELAY_MS;

use super::lifecycle::PageComponent;

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    current: usize,
    autoplay_delay: Duration,
    next_advance: Option<Instant>,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::with_delay(len, Duration::from_millis(CAROUSEL_AUTOPLAY_DELAY_MS))
    }

    #[must_use]
    pub fn with_delay(len: usize, autoplay_delay: Duration) -> Self {
        Self {
            len,
            current: 0,
            autoplay_delay,
            next_advance: None,
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
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advances on the autoplay deadline. Returns whether the slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_advance else {
            return false;
        };
        if now < deadline || self.len < 2 {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        self.next_advance = Some(now + self.autoplay_delay);
        true
    }

    pub fn next(&mut self, now: Instant) {
        if self.len < 2 {
            return;
        }
        self.current = (self.current + 1) % self.len;
        self.reschedule(now);
    }

    pub fn previous(&mut self, now: Instant) {
        if self.len < 2 {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
        self.reschedule(now);
    }

    /// Bullet click.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index < self.len {
            self.current = index;
            self.reschedule(now);
        }
    }

    fn reschedule(&mut self, now: Instant) {
        if self.next_advance.is_some() {
            self.next_advance = Some(now + self.autoplay_delay);
        }
    }

    /// Starts the autoplay clock relative to `now`.
    pub fn start_autoplay(&mut self, now: Instant) {
        self.next_advance = Some(now + self.autoplay_delay);
    }
}

impl PageComponent for Carousel {
    fn init(&mut self) {
        self.current = 0;
        self.next_advance = Some(Instant::now() + self.autoplay_delay);
    }

    fn cleanup(&mut self) {
        self.next_advance = None;
    }
}
