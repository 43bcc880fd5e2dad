// SPDX-License-Identifier: MPL-2.0
//! Application root: pages, the lightbox overlay, and message routing.
//!
//! The app owns the player orchestrator, the page components, and the
//! diagnostics collector, and translates UI messages and raw window events
//! into controller operations. Controller effects (manifest fetches,
//! placeholder loads, resolution probes) become tokio tasks whose
//! completions are mapped back into messages.

use std::time::{Duration, Instant};

use iced::{
    event, keyboard, time,
    widget::{button, column, container, mouse_area, row, scrollable, slider, stack, text},
    window, Element, Length, Subscription, Task, Theme,
};

use crate::config::{self, Config, HOVER_HIDE_DELAY_MS};
use crate::diagnostics::DiagnosticsCollector;
use crate::media::{probe, QualityLevel, SimulatedSurface};
use crate::player::{
    ControlActivation, Effect, PlayerController, PlayerOrchestrator, PlayerStatus, RoutedEffect,
};
use crate::ui::{
    Accordion, AccordionOptions, BuildingPeriod, Calculator, Carousel, CaseStudiesSlider,
    HeatingType, LogoRotator, Marquee, NavbarState, Page, PageComponent, PageLifecycle,
    RetrofitModel, ScrollLines,
};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;

/// Root id of the home page's hero player.
const HERO_PLAYER: &str = "hero";
/// Demo stream bound to the hero player.
const HERO_SOURCE: &str = "https://cdn.example/video/hero.mp4";
/// Partner logo pool backing the rotating spotlight grid.
const PARTNER_LOGOS: [&str; 8] = [
    "Alpiq", "Bellerive", "Calanda", "Diavolezza", "Engadin", "Flims", "Gstaad", "Herens",
];

/// Interval of the coarse tick driving hover deadlines, carousel autoplay,
/// and the marquee while no video is playing.
const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// Frame-rate tick used while a player is in the playing state.
const PLAYBACK_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    Scrolled(f32),

    OpenLightbox { target: Option<String> },
    CloseLightbox { target: String },
    TogglePlay(String),
    ToggleMute(String),
    ToggleFullscreen(String),
    ScrubBegin { player: String, x: f32 },
    ScrubMove { player: String, x: f32 },
    ScrubEnd { player: String, x: f32 },
    PointerActivity(String),
    PointerLeft(String),

    ManifestFetched {
        player: String,
        url: String,
        text: Option<String>,
    },
    PlaceholderLoaded { player: String, ok: bool },
    ProbeResolved {
        player: String,
        url: String,
        best: Option<QualityLevel>,
    },

    AccordionToggled(usize),
    AccordionHovered(usize),
    CarouselNext,
    CarouselPrevious,
    CarouselBullet(usize),

    HeatingSelected(HeatingType),
    PeriodSelected(BuildingPeriod),
    RenovatedSelected(bool),
    FloorAreaChanged(f32),

    EscapePressed,
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Startup page override (`home`, `about`, `contact`).
    pub start_page: Option<String>,
}

pub struct App {
    page: Page,
    lifecycle: PageLifecycle,
    orchestrator: PlayerOrchestrator,
    diagnostics: DiagnosticsCollector,

    navbar: NavbarState,
    accordion: Accordion,
    carousel: Carousel,
    marquee: Marquee,
    scroll_lines: ScrollLines,
    calculator: Calculator,
    logo_rotator: LogoRotator,
    case_studies: CaseStudiesSlider,
    payback_model: RetrofitModel,

    last_tick: Option<Instant>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|_state: &App| String::from("iced_lightbox"))
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let mut app = Self::with_config(&config);

        let start = flags
            .start_page
            .as_deref()
            .or(config.start_page.as_deref())
            .and_then(Page::parse)
            .unwrap_or_default();
        let task = app.navigate(start);
        (app, task)
    }

    fn with_config(config: &Config) -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let handle = diagnostics.handle();

        let mut orchestrator = PlayerOrchestrator::new();
        orchestrator.set_diagnostics(handle.clone());

        let hover_delay =
            Duration::from_millis(config.hover_hide_ms.unwrap_or(HOVER_HIDE_DELAY_MS));
        let mut hero = PlayerController::new(
            config.player,
            hover_delay,
            HERO_SOURCE,
            Box::new(SimulatedSurface::new()),
        );
        hero.set_diagnostics(handle);
        let _ = hero.attach();
        orchestrator.registry_mut().register(HERO_PLAYER, hero);

        let mut case_studies = CaseStudiesSlider::new(4);
        case_studies.measure(WINDOW_DEFAULT_WIDTH as f32);

        Self {
            page: Page::Home,
            lifecycle: PageLifecycle::new(),
            orchestrator,
            diagnostics,
            navbar: NavbarState::new(),
            accordion: Accordion::new(4, AccordionOptions::default()),
            carousel: Carousel::new(3),
            marquee: Marquee::new(60.0),
            scroll_lines: ScrollLines::new(3, 0.2),
            calculator: Calculator::new(),
            logo_rotator: LogoRotator::new(PARTNER_LOGOS.len(), 4),
            case_studies,
            payback_model: RetrofitModel,
            last_tick: None,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Switches pages: cleanup of the outgoing component set, init of the
    /// incoming one, navbar reset, and player pruning.
    ///
    /// The component sets overlap between pages, so the lifecycle takes one
    /// component list plus per-page index sets instead of two slices.
    fn navigate(&mut self, page: Page) -> Task<Message> {
        if self.lifecycle.current() == Some(page) {
            return Task::none();
        }
        let previous = self.page;
        let Self {
            lifecycle,
            accordion,
            carousel,
            marquee,
            scroll_lines,
            calculator,
            logo_rotator,
            case_studies,
            ..
        } = self;
        let mut components: [&mut dyn PageComponent; 7] = [
            accordion,
            carousel,
            marquee,
            scroll_lines,
            calculator,
            logo_rotator,
            case_studies,
        ];
        let _ = lifecycle.navigate(
            page,
            &mut components,
            Self::component_indices(previous),
            Self::component_indices(page),
        );
        self.page = page;
        self.navbar.reset();
        // Only the hero root exists on every page in this demo site; a real
        // embedding would pass the roots present after the transition.
        self.orchestrator.registry_mut().prune(&[HERO_PLAYER]);
        Task::none()
    }

    /// Indices into the `navigate` component list that are live on `page`.
    /// Order: accordion, carousel, marquee, scroll lines, calculator,
    /// logo rotator, case studies.
    fn component_indices(page: Page) -> &'static [usize] {
        match page {
            Page::Home => &[0, 1, 2, 3, 4, 5, 6],
            Page::About => &[2],
            Page::Contact => &[],
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_subscription = event::listen_with(|event, _status, _window| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        });

        // While something plays the tick runs at frame rate for smooth
        // progress; otherwise a coarse tick covers deadlines and autoplay.
        let tick_subscription = if self.any_player_playing() {
            time::every(PLAYBACK_TICK_INTERVAL).map(Message::Tick)
        } else {
            time::every(TICK_INTERVAL).map(Message::Tick)
        };

        Subscription::batch([keyboard_subscription, tick_subscription])
    }

    fn any_player_playing(&self) -> bool {
        self.orchestrator
            .registry()
            .ids()
            .any(|id| {
                self.orchestrator
                    .registry()
                    .get(id)
                    .is_some_and(|c| c.status() == PlayerStatus::Playing)
            })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => self.navigate(page),
            Message::Scrolled(y) => {
                let _ = self.navbar.on_scroll(y);
                Task::none()
            }

            Message::OpenLightbox { target } => {
                let routed = self.orchestrator.handle(ControlActivation::Open { target });
                self.run_effects(routed)
            }
            Message::CloseLightbox { target } => {
                let _ = self.orchestrator.handle(ControlActivation::Close { target });
                Task::none()
            }
            Message::EscapePressed => {
                let _ = self.orchestrator.handle(ControlActivation::Escape);
                Task::none()
            }

            Message::TogglePlay(id) => {
                if let Some(controller) = self.orchestrator.registry_mut().get_mut(&id) {
                    controller.toggle_play();
                }
                Task::none()
            }
            Message::ToggleMute(id) => {
                if let Some(controller) = self.orchestrator.registry_mut().get_mut(&id) {
                    controller.toggle_mute();
                }
                Task::none()
            }
            Message::ToggleFullscreen(id) => {
                if let Some(controller) = self.orchestrator.registry_mut().get_mut(&id) {
                    controller.toggle_fullscreen();
                }
                Task::none()
            }
            Message::ScrubBegin { player, x } => {
                if let Some(controller) = self.orchestrator.registry_mut().get_mut(&player) {
                    controller.begin_scrub(x, Instant::now());
                }
                Task::none()
            }
            Message::ScrubMove { player, x } => {
                if let Some(controller) = self.orchestrator.registry_mut().get_mut(&player) {
                    controller.update_scrub(x, Instant::now());
                }
                Task::none()
            }
            Message::ScrubEnd { player, x } => {
                if let Some(controller) = self.orchestrator.registry_mut().get_mut(&player) {
                    controller.end_scrub(x);
                }
                Task::none()
            }
            Message::PointerActivity(player) => {
                if let Some(controller) = self.orchestrator.registry_mut().get_mut(&player) {
                    controller.pointer_activity(Instant::now());
                }
                Task::none()
            }
            Message::PointerLeft(player) => {
                if let Some(controller) = self.orchestrator.registry_mut().get_mut(&player) {
                    controller.pointer_left();
                }
                Task::none()
            }

            Message::ManifestFetched { player, url, text } => {
                if let Some(controller) = self.orchestrator.registry_mut().get_mut(&player) {
                    match text {
                        Some(text) => controller.manifest_text_loaded(&url, &text),
                        None => controller.manifest_failed(&url),
                    }
                }
                Task::none()
            }
            Message::PlaceholderLoaded { player, ok } => {
                let routed = match self.orchestrator.registry_mut().get_mut(&player) {
                    Some(controller) => match controller.placeholder_loaded(ok) {
                        Effect::None => Vec::new(),
                        effect => vec![RoutedEffect { player, effect }],
                    },
                    None => Vec::new(),
                };
                self.run_effects(routed)
            }
            Message::ProbeResolved { player, url, best } => {
                if let Some(controller) = self.orchestrator.registry_mut().get_mut(&player) {
                    controller.probe_resolved(&url, best);
                }
                Task::none()
            }

            Message::AccordionToggled(index) => {
                self.accordion.toggle(index);
                Task::none()
            }
            Message::AccordionHovered(index) => {
                self.accordion.hover(index);
                Task::none()
            }
            Message::CarouselNext => {
                self.carousel.next(Instant::now());
                Task::none()
            }
            Message::CarouselPrevious => {
                self.carousel.previous(Instant::now());
                Task::none()
            }
            Message::CarouselBullet(index) => {
                self.carousel.go_to(index, Instant::now());
                Task::none()
            }

            Message::HeatingSelected(heating) => {
                self.calculator.select_heating_type(heating);
                Task::none()
            }
            Message::PeriodSelected(period) => {
                self.calculator.select_building_period(period);
                Task::none()
            }
            Message::RenovatedSelected(renovated) => {
                self.calculator.set_renovated(renovated);
                Task::none()
            }
            Message::FloorAreaChanged(fraction) => {
                self.calculator.set_slider_fraction(fraction);
                Task::none()
            }

            Message::Tick(now) => self.tick(now),
        }
    }

    fn tick(&mut self, now: Instant) -> Task<Message> {
        let routed = self.orchestrator.pump(now);
        let _ = self.carousel.tick(now);
        let _ = self.logo_rotator.tick(now);
        if let Some(last) = self.last_tick {
            let dt = now.saturating_duration_since(last).as_secs_f32();
            self.marquee.advance(dt);
            self.case_studies.advance(dt);
        }
        self.last_tick = Some(now);
        self.diagnostics.process_pending();
        self.run_effects(routed)
    }

    /// Turns controller effects into async tasks whose completions come
    /// back as messages.
    fn run_effects(&mut self, routed: Vec<RoutedEffect>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = routed
            .into_iter()
            .map(|RoutedEffect { player, effect }| match effect {
                Effect::None => Task::none(),
                Effect::LoadManifest { url } => Task::perform(
                    async move {
                        let text = probe::fetch_manifest_text(&url).await;
                        (url, text)
                    },
                    move |(url, text)| Message::ManifestFetched {
                        player: player.clone(),
                        url,
                        text,
                    },
                ),
                Effect::LoadPlaceholder { url } => Task::perform(
                    async move { load_placeholder(&url).await },
                    move |ok| Message::PlaceholderLoaded {
                        player: player.clone(),
                        ok,
                    },
                ),
                Effect::ProbeManifest { url } => Task::perform(
                    async move {
                        let best = probe::probe_best_resolution(&url).await;
                        (url, best)
                    },
                    move |(url, best)| Message::ProbeResolved {
                        player: player.clone(),
                        url,
                        best,
                    },
                ),
            })
            .collect();
        Task::batch(tasks)
    }

    // ======================================================================
    // Views
    // ======================================================================

    fn view(&self) -> Element<'_, Message> {
        let page_body = match self.page {
            Page::Home => self.view_home(),
            Page::About => self.view_about(),
            Page::Contact => self.view_contact(),
        };

        let content = column![self.view_navbar(), page_body].width(Length::Fill);
        let scrolled = scrollable(content)
            .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y));

        let hero_open = self
            .orchestrator
            .registry()
            .get(HERO_PLAYER)
            .is_some_and(PlayerController::is_open);
        if hero_open {
            stack![scrolled, self.view_lightbox(HERO_PLAYER)]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            scrolled.into()
        }
    }

    fn view_navbar(&self) -> Element<'_, Message> {
        let links = row![
            button(text("Home")).on_press(Message::Navigate(Page::Home)),
            button(text("About")).on_press(Message::Navigate(Page::About)),
            button(text("Contact")).on_press(Message::Navigate(Page::Contact)),
        ]
        .spacing(12);

        let label = if self.navbar.is_hidden() {
            "·"
        } else if self.navbar.light_theme() {
            "iced_lightbox (light)"
        } else {
            "iced_lightbox"
        };

        container(row![text(label), links].spacing(24))
            .width(Length::Fill)
            .padding(if self.navbar.is_transparent() { 8 } else { 12 })
            .into()
    }

    fn view_home(&self) -> Element<'_, Message> {
        let open_button = button(text("Watch the film")).on_press(Message::OpenLightbox {
            target: Some(HERO_PLAYER.to_string()),
        });

        let accordion = self.view_accordion();
        let carousel = self.view_carousel();
        let calculator = self.view_calculator();

        let spotlight = self
            .logo_rotator
            .visible_logos()
            .into_iter()
            .map(|index| PARTNER_LOGOS[index])
            .collect::<Vec<_>>()
            .join(" · ");

        column![
            text("Smart heating, retrofitted").size(40),
            open_button,
            accordion,
            carousel,
            text(format!("Spotlight partners: {spotlight}")),
            text(format!(
                "Partner logos scroll at {:.0} px/s",
                self.marquee.effective_speed()
            )),
            text(format!(
                "Case study {} of {}",
                self.case_studies.current_slide() + 1,
                self.case_studies.slide_count()
            )),
            calculator,
        ]
        .spacing(32)
        .padding(24)
        .into()
    }

    fn view_about(&self) -> Element<'_, Message> {
        column![
            text("About").size(40),
            text("We retrofit thermostats onto existing radiators."),
        ]
        .spacing(16)
        .padding(24)
        .into()
    }

    fn view_contact(&self) -> Element<'_, Message> {
        column![text("Contact").size(40), text("hello@example.com")]
            .spacing(16)
            .padding(24)
            .into()
    }

    fn view_accordion(&self) -> Element<'_, Message> {
        let questions = [
            "How does the retrofit work?",
            "What does installation cost?",
            "Which buildings qualify?",
            "How are savings measured?",
        ];
        let mut items = column![].spacing(8);
        for (index, question) in questions.iter().enumerate() {
            let header = button(text(*question)).on_press(Message::AccordionToggled(index));
            items = items.push(header);
            if self.accordion.is_open(index) {
                items = items.push(text("Answer placeholder for the demo page."));
            }
        }
        items.into()
    }

    fn view_carousel(&self) -> Element<'_, Message> {
        let quotes = [
            "\"Payback in under two heating seasons.\"",
            "\"Installed over a lunch break.\"",
            "\"Our tenants never noticed the switch.\"",
        ];
        let current = self.carousel.current().min(quotes.len() - 1);

        let mut bullets = row![].spacing(6);
        for index in 0..quotes.len() {
            let label = if index == current { "●" } else { "○" };
            bullets = bullets.push(button(text(label)).on_press(Message::CarouselBullet(index)));
        }

        column![
            text(quotes[current]),
            row![
                button(text("‹")).on_press(Message::CarouselPrevious),
                bullets,
                button(text("›")).on_press(Message::CarouselNext),
            ]
            .spacing(12),
        ]
        .spacing(8)
        .into()
    }

    fn view_calculator(&self) -> Element<'_, Message> {
        let result = self.calculator.evaluate(&self.payback_model);
        let area = self.calculator.inputs().floor_area_m2;

        let heating = row![
            button(text("Gas")).on_press(Message::HeatingSelected(HeatingType::Gas)),
            button(text("Oil")).on_press(Message::HeatingSelected(HeatingType::Oil)),
            button(text("District"))
                .on_press(Message::HeatingSelected(HeatingType::DistrictHeating)),
            button(text("Heat pump")).on_press(Message::HeatingSelected(HeatingType::HeatPump)),
        ]
        .spacing(8);

        let periods = row![
            button(text("pre-1920")).on_press(Message::PeriodSelected(BuildingPeriod::Before1920)),
            button(text("pre-1980")).on_press(Message::PeriodSelected(BuildingPeriod::Before1980)),
            button(text("post-2020")).on_press(Message::PeriodSelected(BuildingPeriod::After2020)),
        ]
        .spacing(8);

        column![
            text("Payback calculator").size(24),
            heating,
            periods,
            row![
                button(text("Renovated")).on_press(Message::RenovatedSelected(true)),
                button(text("Not renovated")).on_press(Message::RenovatedSelected(false)),
            ]
            .spacing(8),
            slider(0.0..=1.0, self.calculator.slider_fraction(), Message::FloorAreaChanged)
                .step(0.001),
            text(format!("{area} m²")),
            text(format!(
                "Savings: {} CHF/year — amortized in {} years",
                result.savings_text(),
                result.years_text()
            )),
        ]
        .spacing(12)
        .into()
    }

    fn view_lightbox(&self, id: &str) -> Element<'_, Message> {
        let Some(controller) = self.orchestrator.registry().get(id) else {
            return column![].into();
        };
        let player = id.to_string();

        let status_line = text(format!(
            "{} · {} / {}",
            controller.status().as_str(),
            controller.current_time_text(),
            controller.duration_text()
        ));

        let controls = row![
            button(text("⏯")).on_press(Message::TogglePlay(player.clone())),
            button(text("🔇")).on_press(Message::ToggleMute(player.clone())),
            button(text("⛶")).on_press(Message::ToggleFullscreen(player.clone())),
            button(text("✕")).on_press(Message::CloseLightbox {
                target: player.clone(),
            }),
        ]
        .spacing(8);

        let timeline = text(format!(
            "buffered {:.0}% · played {:.0}%",
            controller.buffered_fraction() * 100.0,
            controller.played_fraction() * 100.0
        ));

        let body = column![status_line, timeline, controls].spacing(12);
        let surface = mouse_area(container(body).padding(32))
            .on_move(move |_point| Message::PointerActivity(player.clone()))
            .on_exit(Message::PointerLeft(id.to_string()));

        container(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

/// Loads the placeholder image, returning whether it decoded. Remote URLs
/// are fetched; anything else is treated as a local path.
async fn load_placeholder(url: &str) -> bool {
    if probe::is_probeable(url) {
        let Ok(response) = reqwest::get(url).await else {
            return false;
        };
        if !response.status().is_success() {
            return false;
        }
        let Ok(bytes) = response.bytes().await else {
            return false;
        };
        image_rs::load_from_memory(&bytes).is_ok()
    } else {
        image_rs::open(url).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_config(&Config::default())
    }

    #[test]
    fn hero_player_is_registered_and_attached_at_startup() {
        let app = app();
        let hero = app.orchestrator.registry().get(HERO_PLAYER).expect("hero");
        assert_eq!(hero.source(), HERO_SOURCE);
        assert!(!hero.is_open());
    }

    #[test]
    fn open_message_opens_the_hero_lightbox() {
        let mut app = app();
        let _ = app.update(Message::OpenLightbox {
            target: Some(HERO_PLAYER.to_string()),
        });
        assert!(app.orchestrator.registry().get(HERO_PLAYER).unwrap().is_open());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.orchestrator.registry().get(HERO_PLAYER).unwrap().is_open());
    }

    #[test]
    fn boot_honors_the_start_page_flag() {
        let (app, _task) = App::new(Flags {
            start_page: Some("about".to_string()),
        });
        assert_eq!(app.page, Page::About);
    }

    #[test]
    fn marquee_restarts_when_navigating_between_pages_that_share_it() {
        let mut app = app();
        let _ = app.navigate(Page::Home);
        app.marquee.measure(1200.0, 1920.0);
        app.marquee.advance(0.5);
        assert!(app.marquee.offset() > 0.0);

        let _ = app.navigate(Page::About);
        assert_eq!(app.marquee.offset(), 0.0);
    }

    #[test]
    fn navigation_resets_the_navbar_and_keeps_the_player() {
        let mut app = app();
        let _ = app.update(Message::Scrolled(500.0));
        assert!(app.navbar.is_hidden());

        let _ = app.update(Message::Navigate(Page::About));
        assert!(!app.navbar.is_hidden());
        assert!(app.orchestrator.registry().get(HERO_PLAYER).is_some());
    }

    #[test]
    fn carousel_autoplay_advances_on_tick() {
        let mut app = app();
        let _ = app.navigate(Page::Home);
        assert_eq!(app.carousel.current(), 0);

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(4)));
        assert_eq!(app.carousel.current(), 1);
    }

    #[test]
    fn navigating_to_the_current_page_is_a_noop() {
        let mut app = app();
        let _ = app.navigate(Page::Home);
        let _ = app.update(Message::AccordionToggled(0));
        assert!(app.accordion.is_open(0));

        let _ = app.update(Message::Navigate(Page::Home));
        // No re-init: the open panel survives.
        assert!(app.accordion.is_open(0));
    }
}
