// SPDX-License-Identifier: MPL-2.0
//! Media pipeline: surface port, transport selection, adaptive sessions,
//! and manifest handling.

pub mod manifest;
pub mod probe;
pub mod session;
pub mod surface;
pub mod time_format;
pub mod transport;

pub use manifest::QualityLevel;
pub use session::{AdaptiveSession, SessionEvent};
pub use surface::{
    FullscreenOutcome, MediaEvent, MediaSurface, NullSurface, PlayOutcome, SimulatedSurface,
};
pub use time_format::format_time;
pub use transport::{select_transport, Transport};
