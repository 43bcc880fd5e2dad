// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` models a marketing site's client-side behaviors as an
//! Iced desktop application: a video lightbox driven by an explicit player
//! state machine, plus the scroll- and viewport-reactive page components
//! around it.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod media;
pub mod player;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
