// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for player activity.
//!
//! Captures user actions, degraded-path warnings, session teardowns, and
//! probe failures in a memory-bounded circular buffer. Controllers send
//! through a [`DiagnosticsHandle`]; the app drains the channel each tick.

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, PlayerAction};
