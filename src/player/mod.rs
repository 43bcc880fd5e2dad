// SPDX-License-Identifier: MPL-2.0
//! Video lightbox player: per-instance state control, scrubbing, hover
//! visibility, ratio sizing, and cross-player control routing.

pub mod attributes;
pub mod controller;
pub mod hover;
pub mod orchestrator;
pub mod registry;
pub mod scrub;
pub mod sizing;
pub mod state;

pub use attributes::{keys, AttributeSet};
pub use controller::{Effect, PlayerController};
pub use hover::{HoverState, HoverVisibility};
pub use orchestrator::{ControlActivation, PlayerOrchestrator, RoutedEffect};
pub use registry::PlayerRegistry;
pub use scrub::{ScrubEnd, ScrubSession, ScrubStep, TimelineRect};
pub use sizing::{ClampBox, RatioSource};
pub use state::{PlayerState, PlayerStatus};
