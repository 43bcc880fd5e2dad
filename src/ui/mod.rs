// SPDX-License-Identifier: MPL-2.0
//! Page components: lifecycle-managed, viewport-reactive behaviors.

pub mod accordion;
pub mod calculator;
pub mod carousel;
pub mod case_studies;
pub mod lifecycle;
pub mod logo_rotator;
pub mod marquee;
pub mod navbar;
pub mod scroll_lines;

pub use accordion::{Accordion, AccordionOptions};
pub use calculator::{
    BuildingPeriod, Calculator, CalculatorInputs, HeatingType, PaybackModel, PaybackResult,
    RetrofitModel,
};
pub use carousel::Carousel;
pub use case_studies::{slide_travel_ms, slides_per_view, CaseStudiesSlider};
pub use lifecycle::{Page, PageComponent, PageLifecycle};
pub use logo_rotator::LogoRotator;
pub use marquee::{speed_multiplier, Marquee};
pub use navbar::{BackgroundSample, NavbarState};
pub use scroll_lines::ScrollLines;
