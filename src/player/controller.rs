// SPDX-License-Identifier: MPL-2.0
//! Lightbox player controller.
//!
//! One controller owns the full state of a single video lightbox: the
//! attached media pipeline, playback status, scrub and hover sessions, and
//! the attribute surface the presentation reads. All mutation enters through
//! the operations here; asynchronous work (manifest fetches, placeholder
//! loads, resolution probes) is returned as an [`Effect`] for the app to run
//! and map back in.

use std::time::{Duration, Instant};

use crate::config::{PlayerOptions, SizeMode, ZERO_TIME_TEXT};
use crate::diagnostics::{DiagnosticsHandle, PlayerAction};
use crate::error::MediaError;
use crate::media::{
    format_time, probe, select_transport, AdaptiveSession, MediaEvent, MediaSurface, QualityLevel,
    SessionEvent, Transport,
};

use super::attributes::{keys, AttributeSet};
use super::hover::HoverState;
use super::scrub::{ScrubSession, TimelineRect};
use super::sizing::{self, ClampBox, RatioSource};
use super::state::{PlayerState, PlayerStatus};

/// Deferred work a controller operation asks the app to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Fetch the adaptive manifest text for `url`, then call
    /// [`PlayerController::manifest_text_loaded`] (or `manifest_failed`).
    LoadManifest { url: String },
    /// Load the placeholder image at `url`, then call
    /// [`PlayerController::placeholder_loaded`] with the outcome.
    LoadPlaceholder { url: String },
    /// Probe the manifest at `url` for its best resolution, then call
    /// [`PlayerController::probe_resolved`].
    ProbeManifest { url: String },
}

/// State controller for one video lightbox instance.
pub struct PlayerController {
    options: PlayerOptions,
    hover_delay: Duration,
    configured_source: String,
    placeholder_url: Option<String>,

    state: PlayerState,
    attributes: AttributeSet,
    surface: Box<dyn MediaSurface>,
    session: Option<AdaptiveSession>,
    scrub: Option<ScrubSession>,
    hover: HoverState,
    timeline: Option<TimelineRect>,

    /// An open is waiting on its placeholder swap.
    pending_open: bool,
    /// Playback crossed time zero since the last open/ended reset.
    has_progressed: bool,

    duration_text: String,
    current_secs: f64,
    buffered_fraction: f32,

    ratio: Option<(f32, RatioSource)>,
    probed_best: Option<QualityLevel>,
    probe_requested: bool,

    diagnostics: Option<DiagnosticsHandle>,
}

impl PlayerController {
    #[must_use]
    pub fn new(
        options: PlayerOptions,
        hover_delay: Duration,
        source: impl Into<String>,
        surface: Box<dyn MediaSurface>,
    ) -> Self {
        let mut controller = Self {
            options,
            hover_delay,
            configured_source: source.into(),
            placeholder_url: None,
            state: PlayerState::default(),
            attributes: AttributeSet::new(),
            surface,
            session: None,
            scrub: None,
            hover: HoverState::default(),
            timeline: None,
            pending_open: false,
            has_progressed: false,
            duration_text: ZERO_TIME_TEXT.to_string(),
            current_secs: 0.0,
            buffered_fraction: 0.0,
            ratio: None,
            probed_best: None,
            probe_requested: false,
            diagnostics: None,
        };
        controller.surface.set_muted(options.start_muted);
        controller.project_status();
        let _ = controller.attributes.set(keys::LIGHTBOX, "not-active");
        let _ = controller.attributes.set_flag(keys::ACTIVATED, false);
        let _ = controller
            .attributes
            .set_flag(keys::MUTED, options.start_muted);
        controller
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn set_placeholder(&mut self, url: impl Into<String>) {
        self.placeholder_url = Some(url.into());
    }

    /// Rebinds the configured source. The running pipeline is untouched
    /// until the next attach or open.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.configured_source = source.into();
    }

    /// Cached timeline geometry, refreshed by the presentation on layout.
    pub fn set_timeline_rect(&mut self, rect: TimelineRect) {
        self.timeline = Some(rect);
    }

    // ======================================================================
    // Accessors
    // ======================================================================

    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        self.state.status
    }

    #[must_use]
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.lightbox_active
    }

    #[must_use]
    pub fn is_activated(&self) -> bool {
        self.state.activated
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.configured_source
    }

    #[must_use]
    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }

    #[must_use]
    pub fn current_time_text(&self) -> String {
        format_time(self.current_secs)
    }

    /// Played fraction of the known duration, for the timeline fill.
    #[must_use]
    pub fn played_fraction(&self) -> f32 {
        match self.surface.duration() {
            Some(duration) if duration > 0.0 => {
                let shown = self
                    .scrub
                    .as_ref()
                    .map_or(self.current_secs, ScrubSession::target_secs);
                (shown / duration).clamp(0.0, 1.0) as f32
            }
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn buffered_fraction(&self) -> f32 {
        self.buffered_fraction
    }

    /// Box constraints for the current wrapper content area, or `None` when
    /// ratio sizing is inactive (cover mode, degenerate wrapper).
    #[must_use]
    pub fn layout_clamp(&self, content_width: f32, content_height: f32) -> Option<ClampBox> {
        let (ratio, _) = self.ratio?;
        sizing::clamp_box(content_width, content_height, ratio)
    }

    #[must_use]
    pub fn ratio_source(&self) -> Option<RatioSource> {
        self.ratio.map(|(_, source)| source)
    }

    // ======================================================================
    // Attach and media pipeline
    // ======================================================================

    /// Binds the configured source to the surface, tearing down any previous
    /// adaptive session first. Attaching the already-attached source is a
    /// no-op.
    pub fn attach(&mut self) -> Effect {
        let source = self.configured_source.clone();
        if source.is_empty() {
            self.warn("attach requested without a media source");
            return Effect::None;
        }
        if self.state.is_attached_to(&source) {
            return Effect::None;
        }

        if let Some(mut session) = self.session.take() {
            if let Some(diag) = &self.diagnostics {
                diag.log_session_teardown(session.source());
            }
            session.destroy();
        }

        self.surface.pause();
        self.duration_text = ZERO_TIME_TEXT.to_string();
        self.current_secs = 0.0;
        self.buffered_fraction = 0.0;
        self.probed_best = None;
        self.probe_requested = false;
        self.has_progressed = false;

        let Some(transport) = select_transport(self.surface.as_ref(), &source) else {
            self.warn(MediaError::UnsupportedSource(source).to_string());
            return Effect::None;
        };

        self.state.begin_attach(&source);
        match transport {
            Transport::Native => {
                self.surface.set_source(&source);
                Effect::None
            }
            Transport::Adaptive => {
                let mut session = AdaptiveSession::new(source.clone());
                session.attach_media();
                self.drain_session_events(&mut session);
                self.session = Some(session);
                Effect::LoadManifest { url: source }
            }
        }
    }

    /// Completion of an [`Effect::LoadManifest`] fetch.
    pub fn manifest_text_loaded(&mut self, url: &str, text: &str) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if session.source() == url {
            session.manifest_loaded(text);
            self.drain_session_events(&mut session);
            // The surface streams through the session from here.
            self.surface.set_source(url);
        }
        self.session = Some(session);
    }

    /// Failure of an [`Effect::LoadManifest`] fetch. The player stays
    /// attached; readiness simply never arrives.
    pub fn manifest_failed(&mut self, url: &str) {
        self.warn(MediaError::ManifestUnavailable(url.to_string()).to_string());
    }

    /// A variant playlist reported its total duration.
    pub fn level_duration_loaded(&mut self, total_duration_secs: f64) {
        if let Some(session) = &mut self.session {
            session.level_loaded(total_duration_secs);
        }
        if self.surface.duration().is_none() && total_duration_secs.is_finite() {
            self.duration_text = format_time(total_duration_secs);
        }
    }

    /// Completion of an [`Effect::ProbeManifest`] request.
    pub fn probe_resolved(&mut self, url: &str, best: Option<QualityLevel>) {
        match best {
            Some(level) => {
                self.probed_best = Some(level);
                self.refresh_ratio();
            }
            None => {
                if let Some(diag) = &self.diagnostics {
                    diag.log_probe_failed(url);
                }
            }
        }
    }

    fn drain_session_events(&mut self, session: &mut AdaptiveSession) {
        for event in session.take_events() {
            match event {
                SessionEvent::MediaAttached => {}
                SessionEvent::ManifestParsed { .. } => {
                    self.refresh_ratio_with(session.best_level());
                }
                SessionEvent::LevelLoaded { total_duration_secs } => {
                    if self.surface.duration().is_none() {
                        self.duration_text = format_time(total_duration_secs);
                    }
                }
            }
        }
    }

    // ======================================================================
    // Lightbox lifecycle
    // ======================================================================

    /// Opens the lightbox. When a placeholder image is configured the
    /// activation waits for its load (success or failure both proceed).
    pub fn open(&mut self) -> Effect {
        if let Some(diag) = &self.diagnostics {
            diag.log_action(PlayerAction::OpenLightbox { target: None });
        }
        self.state.lightbox_active = true;
        let _ = self.attributes.set(keys::LIGHTBOX, "active");

        if let Some(url) = self.placeholder_url.clone() {
            self.pending_open = true;
            return Effect::LoadPlaceholder { url };
        }
        self.activate_and_plan()
    }

    /// Completion of an [`Effect::LoadPlaceholder`] load. A failed load
    /// still activates the player; only the image stays stale.
    pub fn placeholder_loaded(&mut self, ok: bool) -> Effect {
        if !self.pending_open {
            return Effect::None;
        }
        self.pending_open = false;
        if !ok {
            self.warn("placeholder image failed to load");
        }
        if !self.state.lightbox_active {
            // Closed while the placeholder was in flight.
            return Effect::None;
        }
        self.activate_and_plan()
    }

    fn activate_and_plan(&mut self) -> Effect {
        if self.state.is_attached_to(&self.configured_source) {
            if self.options.autoplay {
                self.request_play();
            } else {
                self.surface.pause();
                if self.has_progressed {
                    self.state.status = PlayerStatus::Paused;
                    self.project_status();
                }
            }
            return Effect::None;
        }

        self.state.reset_for_new_source();
        let effect = self.attach();
        if self.options.autoplay && self.state.is_attached {
            self.state.auto_start_on_ready = true;
            self.state.status = PlayerStatus::Loading;
            self.project_status();
        }
        effect
    }

    /// Closes the lightbox. The media pipeline stays attached so reopening
    /// the same source resumes instantly.
    pub fn close(&mut self) {
        if !self.state.lightbox_active {
            return;
        }
        if let Some(diag) = &self.diagnostics {
            diag.log_action(PlayerAction::CloseLightbox);
        }
        self.state.lightbox_active = false;
        let _ = self.attributes.set(keys::LIGHTBOX, "not-active");

        self.surface.pause();
        if self.surface.fullscreen_active() {
            self.surface.exit_fullscreen();
        }
        self.state.fullscreen = false;
        let _ = self.attributes.set_flag(keys::FULLSCREEN, false);

        self.scrub = None;
        let _ = self.attributes.set_flag(keys::TIMELINE_DRAG, false);
        if self.hover.sleep() {
            self.project_hover();
        }

        self.pending_open = false;
        self.state.pending_play = false;
        self.state.auto_start_on_ready = false;

        if self.has_progressed {
            self.state.status = PlayerStatus::Paused;
        } else {
            self.state.status = PlayerStatus::Idle;
            self.state.activated = false;
            let _ = self.attributes.set_flag(keys::ACTIVATED, false);
        }
        self.project_status();
    }

    // ======================================================================
    // Transport controls
    // ======================================================================

    pub fn toggle_play(&mut self) {
        if let Some(diag) = &self.diagnostics {
            diag.log_action(PlayerAction::TogglePlayback);
        }
        if self.surface.is_paused() {
            self.request_play();
        } else {
            self.surface.pause();
        }
    }

    pub fn toggle_mute(&mut self) {
        if let Some(diag) = &self.diagnostics {
            diag.log_action(PlayerAction::ToggleMute);
        }
        let muted = !self.surface.muted();
        self.surface.set_muted(muted);
        let _ = self.attributes.set_flag(keys::MUTED, muted);
    }

    pub fn toggle_fullscreen(&mut self) {
        if let Some(diag) = &self.diagnostics {
            diag.log_action(PlayerAction::ToggleFullscreen);
        }
        if self.surface.fullscreen_active() {
            self.surface.exit_fullscreen();
        } else {
            let _ = self.surface.request_fullscreen();
        }
        self.state.fullscreen = self.surface.fullscreen_active();
        let _ = self
            .attributes
            .set_flag(keys::FULLSCREEN, self.state.fullscreen);
    }

    fn request_play(&mut self) {
        self.state.pending_play = true;
        self.state.status = PlayerStatus::Loading;
        self.project_status();
        // Rejection is benign; the pending flag clears on the next
        // readiness event or pause.
        let _ = self.surface.play();
    }

    // ======================================================================
    // Scrubbing
    // ======================================================================

    /// Starts a timeline drag. Playback pauses for the duration of the drag
    /// and resumes on release if it was running.
    pub fn begin_scrub(&mut self, pointer_x: f32, now: Instant) {
        let Some(rect) = self.timeline else {
            self.warn(MediaError::MissingElement("timeline").to_string());
            return;
        };
        let Some(duration) = self.surface.duration() else {
            return;
        };
        let was_playing = !self.surface.is_paused();
        if was_playing {
            self.surface.pause();
        }
        let (session, _step) = ScrubSession::begin(rect, duration, was_playing, pointer_x, now);
        self.scrub = Some(session);
        let _ = self.attributes.set_flag(keys::TIMELINE_DRAG, true);
    }

    pub fn update_scrub(&mut self, pointer_x: f32, now: Instant) {
        let Some(scrub) = &mut self.scrub else {
            return;
        };
        let step = scrub.update(pointer_x, now);
        if let Some(position) = step.commit_secs {
            self.surface.seek(position);
            self.current_secs = position;
        }
    }

    /// Ends the drag, committing the final position exactly once.
    pub fn end_scrub(&mut self, pointer_x: f32) {
        let Some(scrub) = self.scrub.take() else {
            return;
        };
        let end = scrub.end(pointer_x);
        self.surface.seek(end.commit_secs);
        self.current_secs = end.commit_secs;
        if end.commit_secs > 0.0 {
            self.has_progressed = true;
        }
        if let Some(diag) = &self.diagnostics {
            diag.log_action(PlayerAction::ScrubCommit {
                position_secs: end.commit_secs,
            });
        }
        let _ = self.attributes.set_flag(keys::TIMELINE_DRAG, false);
        if end.resume {
            self.request_play();
        }
    }

    // ======================================================================
    // Hover controls
    // ======================================================================

    /// Pointer moved inside the player: show controls, reschedule auto-hide.
    pub fn pointer_activity(&mut self, now: Instant) {
        if self.hover.wake(now, self.hover_delay) {
            self.project_hover();
        }
    }

    /// Pointer left the player: hide controls immediately.
    pub fn pointer_left(&mut self) {
        if self.hover.sleep() {
            self.project_hover();
        }
    }

    // ======================================================================
    // Event pump
    // ======================================================================

    /// Drives time-based behavior: the surface clock, emitted media events,
    /// and the hover auto-hide deadline. Call once per app tick.
    pub fn pump(&mut self, now: Instant) -> Vec<Effect> {
        self.surface.advance(now);
        let mut effects = Vec::new();
        // Handling one event can queue more (a readiness event triggering a
        // deferred play); keep draining until the surface settles.
        loop {
            let events = self.surface.take_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                match self.handle_media_event(event) {
                    Effect::None => {}
                    effect => effects.push(effect),
                }
            }
        }
        if self.hover.poll(now) {
            self.project_hover();
        }
        effects
    }

    /// Applies one media event to the state machine.
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Effect {
        match event {
            MediaEvent::Play => {
                self.state.activated = true;
                let _ = self.attributes.set_flag(keys::ACTIVATED, true);
                Effect::None
            }
            MediaEvent::Playing => {
                self.state.pending_play = false;
                self.state.auto_start_on_ready = false;
                if self.state.lightbox_active {
                    self.state.activated = true;
                    let _ = self.attributes.set_flag(keys::ACTIVATED, true);
                    self.state.status = PlayerStatus::Playing;
                    self.project_status();
                } else {
                    // A start that raced a close: park the surface and keep
                    // the settled status, mirroring the stray-pause guard.
                    self.surface.pause();
                }
                Effect::None
            }
            MediaEvent::Pause => {
                self.state.pending_play = false;
                // Only an active player pauses; an idle/ready one stays put
                // so a stray pause cannot resurrect a closed lightbox state.
                if matches!(
                    self.state.status,
                    PlayerStatus::Playing | PlayerStatus::Loading
                ) {
                    self.state.status = PlayerStatus::Paused;
                    self.project_status();
                }
                Effect::None
            }
            MediaEvent::Waiting => {
                if self.state.status == PlayerStatus::Playing {
                    self.state.status = PlayerStatus::Loading;
                    self.project_status();
                }
                Effect::None
            }
            MediaEvent::CanPlay | MediaEvent::LoadedMetadata => self.on_ready(),
            MediaEvent::DurationChange => {
                self.refresh_duration_text();
                Effect::None
            }
            MediaEvent::Progress => {
                self.refresh_buffered();
                Effect::None
            }
            MediaEvent::TimeUpdate => {
                if self.scrub.is_none() {
                    self.current_secs = self.surface.current_time();
                }
                if self.current_secs > 0.0 {
                    self.has_progressed = true;
                }
                Effect::None
            }
            MediaEvent::Ended => {
                self.on_ended();
                Effect::None
            }
        }
    }

    /// Media became ready: surface metadata, derive the ratio, kick any
    /// deferred autoplay, or settle into the cosmetic `ready` state.
    fn on_ready(&mut self) -> Effect {
        self.refresh_duration_text();
        self.refresh_ratio();

        if self.state.ready_if_idle() {
            self.project_status();
        }

        if self.state.auto_start_on_ready && self.state.lightbox_active {
            self.state.auto_start_on_ready = false;
            self.request_play();
        }

        self.maybe_probe()
    }

    /// Playback finished: rewind, drop fullscreen, and fold the lightbox
    /// back to its pristine pre-activation look.
    fn on_ended(&mut self) {
        self.surface.seek(0.0);
        self.current_secs = 0.0;
        if self.surface.fullscreen_active() {
            self.surface.exit_fullscreen();
            self.state.fullscreen = false;
            let _ = self.attributes.set_flag(keys::FULLSCREEN, false);
        }
        self.has_progressed = false;
        self.state.pending_play = false;
        if self.state.lightbox_active {
            self.close();
        } else {
            self.state.status = PlayerStatus::Idle;
            self.state.activated = false;
            let _ = self.attributes.set_flag(keys::ACTIVATED, false);
            self.project_status();
        }
    }

    /// Requests a manifest probe when no other dimension source exists.
    fn maybe_probe(&mut self) -> Effect {
        if self.options.size_mode != SizeMode::Auto
            || self.probe_requested
            || self.probed_best.is_some()
            || self.surface.dimensions().is_some()
            || self
                .session
                .as_ref()
                .is_some_and(|session| session.best_level().is_some())
            || !probe::is_probeable(&self.configured_source)
        {
            return Effect::None;
        }
        self.probe_requested = true;
        Effect::ProbeManifest {
            url: self.configured_source.clone(),
        }
    }

    fn refresh_duration_text(&mut self) {
        if let Some(duration) = self.surface.duration() {
            self.duration_text = format_time(duration);
        }
    }

    fn refresh_buffered(&mut self) {
        if let (Some(buffered), Some(duration)) =
            (self.surface.buffered_end(), self.surface.duration())
        {
            if duration > 0.0 {
                self.buffered_fraction = (buffered / duration).clamp(0.0, 1.0) as f32;
            }
        }
    }

    fn refresh_ratio(&mut self) {
        let session_best = self.session.as_ref().and_then(AdaptiveSession::best_level);
        self.refresh_ratio_with(session_best);
    }

    fn refresh_ratio_with(&mut self, session_best: Option<QualityLevel>) {
        self.ratio = sizing::derive_ratio(
            self.options.size_mode,
            self.surface.dimensions(),
            session_best,
            self.probed_best,
        );
    }

    fn project_status(&mut self) {
        let _ = self.attributes.set(keys::STATUS, self.state.status.as_str());
    }

    fn project_hover(&mut self) {
        let _ = self
            .attributes
            .set(keys::HOVER, self.hover.visibility().as_str());
    }

    fn warn(&self, message: impl Into<String>) {
        let message = message.into();
        if let Some(diag) = &self.diagnostics {
            diag.log_warning(message);
        } else {
            eprintln!("Warning: {message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HOVER_HIDE_DELAY_MS;
    use crate::media::SimulatedSurface;

    const HOVER_DELAY: Duration = Duration::from_millis(HOVER_HIDE_DELAY_MS);

    fn native_controller(options: PlayerOptions) -> PlayerController {
        PlayerController::new(
            options,
            HOVER_DELAY,
            "https://cdn.example/clip.mp4",
            Box::new(SimulatedSurface::new().with_metadata(60.0, (1920, 1080))),
        )
    }

    fn pump_once(controller: &mut PlayerController) -> Vec<Effect> {
        controller.pump(Instant::now())
    }

    #[test]
    fn attach_is_idempotent() {
        let mut controller = native_controller(PlayerOptions::default());
        assert_eq!(controller.attach(), Effect::None);
        let _ = pump_once(&mut controller);
        let before = controller.duration_text().to_string();
        assert_eq!(controller.attach(), Effect::None);
        assert_eq!(controller.duration_text(), before);
    }

    #[test]
    fn attach_resets_duration_until_metadata_arrives() {
        let mut controller = native_controller(PlayerOptions::default());
        let _ = controller.attach();
        assert_eq!(controller.duration_text(), ZERO_TIME_TEXT);
        let _ = pump_once(&mut controller);
        assert_eq!(controller.duration_text(), "01:00");
    }

    #[test]
    fn adaptive_source_requests_manifest_load() {
        let mut controller = PlayerController::new(
            PlayerOptions::default(),
            HOVER_DELAY,
            "https://cdn.example/master.m3u8",
            Box::new(SimulatedSurface::new()),
        );
        let effect = controller.attach();
        assert_eq!(
            effect,
            Effect::LoadManifest {
                url: "https://cdn.example/master.m3u8".to_string()
            }
        );
    }

    #[test]
    fn level_duration_hint_fills_unknown_duration() {
        let mut controller = PlayerController::new(
            PlayerOptions::default(),
            HOVER_DELAY,
            "https://cdn.example/master.m3u8",
            Box::new(SimulatedSurface::new()),
        );
        let _ = controller.attach();
        // The surface knows nothing before the manifest resolves; the
        // variant playlist hint fills the display.
        controller.level_duration_loaded(125.0);
        assert_eq!(controller.duration_text(), "02:05");
    }

    #[test]
    fn ready_without_open_settles_into_ready_status() {
        let mut controller = native_controller(PlayerOptions::default());
        let _ = controller.attach();
        let _ = pump_once(&mut controller);
        assert_eq!(controller.status(), PlayerStatus::Ready);
        assert!(!controller.is_activated());
    }

    #[test]
    fn open_with_autoplay_attaches_and_starts_on_ready() {
        let mut controller = native_controller(PlayerOptions::default());
        assert_eq!(controller.open(), Effect::None);
        assert!(controller.is_open());
        assert_eq!(controller.status(), PlayerStatus::Loading);

        let _ = pump_once(&mut controller);
        assert_eq!(controller.status(), PlayerStatus::Playing);
        assert!(controller.is_activated());
        assert_eq!(controller.attributes().get(keys::LIGHTBOX), Some("active"));
    }

    #[test]
    fn open_without_autoplay_stays_unactivated() {
        let options = PlayerOptions {
            autoplay: false,
            ..PlayerOptions::default()
        };
        let mut controller = native_controller(options);
        let _ = controller.open();
        let _ = pump_once(&mut controller);
        assert_eq!(controller.status(), PlayerStatus::Ready);
        assert!(!controller.is_activated());
    }

    #[test]
    fn placeholder_gates_activation_and_failure_still_activates() {
        let mut controller = native_controller(PlayerOptions::default());
        controller.set_placeholder("https://cdn.example/poster.webp");

        let effect = controller.open();
        assert_eq!(
            effect,
            Effect::LoadPlaceholder {
                url: "https://cdn.example/poster.webp".to_string()
            }
        );
        // Not yet planned: still idle.
        assert_eq!(controller.status(), PlayerStatus::Idle);

        let _ = controller.placeholder_loaded(false);
        assert_eq!(controller.status(), PlayerStatus::Loading);
    }

    #[test]
    fn placeholder_result_after_close_is_ignored() {
        let mut controller = native_controller(PlayerOptions::default());
        controller.set_placeholder("poster.webp");
        let _ = controller.open();
        controller.close();
        assert_eq!(controller.placeholder_loaded(true), Effect::None);
        assert_eq!(controller.status(), PlayerStatus::Idle);
    }

    #[test]
    fn close_keeps_pipeline_and_pauses_with_progress() {
        let mut controller = native_controller(PlayerOptions::default());
        let _ = controller.open();
        let _ = pump_once(&mut controller);
        // Let some playback elapse.
        std::thread::sleep(Duration::from_millis(20));
        let _ = pump_once(&mut controller);
        assert_eq!(controller.status(), PlayerStatus::Playing);

        controller.close();
        assert!(!controller.is_open());
        assert_eq!(controller.status(), PlayerStatus::Paused);
        assert!(controller.is_activated());

        // Reopening the same source replays without a new attach effect.
        assert_eq!(controller.open(), Effect::None);
        assert_eq!(controller.status(), PlayerStatus::Loading);
    }

    #[test]
    fn playing_event_after_close_cannot_resurrect_the_status() {
        let mut controller = native_controller(PlayerOptions::default());
        let _ = controller.open();
        let _ = pump_once(&mut controller);
        std::thread::sleep(Duration::from_millis(20));
        let _ = pump_once(&mut controller);
        assert_eq!(controller.status(), PlayerStatus::Playing);

        controller.close();
        assert_eq!(controller.status(), PlayerStatus::Paused);

        // A start event that was already in flight when the close landed.
        let _ = controller.handle_media_event(MediaEvent::Playing);
        assert_eq!(controller.status(), PlayerStatus::Paused);
        let _ = pump_once(&mut controller);
        assert_eq!(controller.status(), PlayerStatus::Paused);
    }

    #[test]
    fn close_before_any_progress_returns_to_idle() {
        let options = PlayerOptions {
            autoplay: false,
            ..PlayerOptions::default()
        };
        let mut controller = native_controller(options);
        let _ = controller.open();
        let _ = pump_once(&mut controller);
        controller.close();
        assert_eq!(controller.status(), PlayerStatus::Idle);
        assert!(!controller.is_activated());
    }

    #[test]
    fn ended_folds_back_to_pristine_idle() {
        let mut controller = PlayerController::new(
            PlayerOptions::default(),
            HOVER_DELAY,
            "clip.mp4",
            Box::new(SimulatedSurface::new().with_metadata(0.05, (640, 360))),
        );
        let _ = controller.open();
        let _ = pump_once(&mut controller);
        std::thread::sleep(Duration::from_millis(80));
        let _ = pump_once(&mut controller);

        assert_eq!(controller.status(), PlayerStatus::Idle);
        assert!(!controller.is_activated());
        assert!(!controller.is_open());
        assert_eq!(
            controller.attributes().get(keys::LIGHTBOX),
            Some("not-active")
        );
    }

    #[test]
    fn scrub_commits_once_on_release_within_throttle() {
        let mut controller = native_controller(PlayerOptions::default());
        let _ = controller.attach();
        let _ = pump_once(&mut controller);
        controller.set_timeline_rect(TimelineRect {
            left: 0.0,
            width: 100.0,
        });

        let now = Instant::now();
        controller.begin_scrub(10.0, now);
        assert!(controller.attributes().flag(keys::TIMELINE_DRAG));
        controller.update_scrub(20.0, now + Duration::from_millis(50));
        controller.end_scrub(50.0);

        assert!(!controller.attributes().flag(keys::TIMELINE_DRAG));
        // 50% of 60s.
        assert!((controller.played_fraction() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn scrub_resumes_playback_when_it_was_running() {
        let mut controller = native_controller(PlayerOptions::default());
        let _ = controller.open();
        let _ = pump_once(&mut controller);
        controller.set_timeline_rect(TimelineRect {
            left: 0.0,
            width: 100.0,
        });

        controller.begin_scrub(0.0, Instant::now());
        controller.end_scrub(50.0);
        let _ = pump_once(&mut controller);
        assert_eq!(controller.status(), PlayerStatus::Playing);
    }

    #[test]
    fn hover_attribute_follows_activity_and_deadline() {
        let mut controller = native_controller(PlayerOptions::default());
        let now = Instant::now();
        controller.pointer_activity(now);
        assert_eq!(controller.attributes().get(keys::HOVER), Some("active"));

        let _ = controller.pump(now + HOVER_DELAY + Duration::from_millis(1));
        assert_eq!(controller.attributes().get(keys::HOVER), Some("idle"));
    }

    #[test]
    fn mute_and_fullscreen_toggle_project_attributes() {
        let mut controller = native_controller(PlayerOptions::default());
        let _ = controller.attach();
        controller.toggle_mute();
        assert!(controller.attributes().flag(keys::MUTED));
        controller.toggle_fullscreen();
        assert!(controller.attributes().flag(keys::FULLSCREEN));
        controller.toggle_fullscreen();
        assert!(!controller.attributes().flag(keys::FULLSCREEN));
    }

    #[test]
    fn ratio_derives_from_surface_dimensions() {
        let mut controller = native_controller(PlayerOptions::default());
        let _ = controller.attach();
        let _ = pump_once(&mut controller);
        assert_eq!(controller.ratio_source(), Some(RatioSource::Surface));
        let clamp = controller.layout_clamp(2000.0, 1000.0).expect("clamp");
        assert!((clamp.max_height_pct - 100.0).abs() < 1e-3);
    }
}
