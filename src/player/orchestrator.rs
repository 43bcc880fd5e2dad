// SPDX-License-Identifier: MPL-2.0
//! Control routing across all registered players.
//!
//! Open/close controls can live anywhere on a page and name their player by
//! root id; an open control without a target falls back to the first
//! registered player. The escape key closes every active lightbox at once.

use std::time::Instant;

use crate::diagnostics::{DiagnosticsHandle, PlayerAction};

use super::controller::Effect;
use super::registry::PlayerRegistry;

/// A user gesture routed to the player layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlActivation {
    /// An open control fired, optionally naming its player.
    Open { target: Option<String> },
    /// A close control fired inside the lightbox with root id `target`.
    Close { target: String },
    /// The escape key: close every active lightbox.
    Escape,
}

/// An effect produced by a specific player, tagged for the app to run and
/// route the completion back.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEffect {
    pub player: String,
    pub effect: Effect,
}

/// Owns the registry and routes activations to players.
#[derive(Default)]
pub struct PlayerOrchestrator {
    registry: PlayerRegistry,
    diagnostics: Option<DiagnosticsHandle>,
}

impl PlayerOrchestrator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PlayerRegistry {
        &mut self.registry
    }

    /// Routes one activation. Unroutable controls degrade to a warning, not
    /// an error: a misconfigured target id must not break the page.
    pub fn handle(&mut self, activation: ControlActivation) -> Vec<RoutedEffect> {
        match activation {
            ControlActivation::Open { target } => {
                let id = match target {
                    Some(id) => id,
                    None => match self.registry.first_id() {
                        Some(first) => first.to_string(),
                        None => {
                            self.warn("open control fired with no players registered");
                            return Vec::new();
                        }
                    },
                };
                let Some(controller) = self.registry.get_mut(&id) else {
                    self.warn(format!("open control targets unknown player `{id}`"));
                    return Vec::new();
                };
                match controller.open() {
                    Effect::None => Vec::new(),
                    effect => vec![RoutedEffect { player: id, effect }],
                }
            }
            ControlActivation::Close { target } => {
                match self.registry.get_mut(&target) {
                    Some(controller) => controller.close(),
                    None => {
                        self.warn(format!("close control targets unknown player `{target}`"));
                    }
                }
                Vec::new()
            }
            ControlActivation::Escape => {
                let open_ids: Vec<String> = self
                    .registry
                    .ids()
                    .filter(|id| {
                        self.registry
                            .get(id)
                            .is_some_and(|controller| controller.is_open())
                    })
                    .map(str::to_string)
                    .collect();
                if !open_ids.is_empty() {
                    if let Some(diag) = &self.diagnostics {
                        diag.log_action(PlayerAction::EscapeCloseAll);
                    }
                }
                for id in open_ids {
                    if let Some(controller) = self.registry.get_mut(&id) {
                        controller.close();
                    }
                }
                Vec::new()
            }
        }
    }

    /// Pumps every player, collecting tagged effects.
    pub fn pump(&mut self, now: Instant) -> Vec<RoutedEffect> {
        let mut routed = Vec::new();
        for (id, controller) in self.registry.iter_mut() {
            for effect in controller.pump(now) {
                routed.push(RoutedEffect {
                    player: id.to_string(),
                    effect,
                });
            }
        }
        routed
    }

    /// Whether any lightbox is currently open (drives the redraw
    /// subscription).
    #[must_use]
    pub fn any_open(&self) -> bool {
        self.registry
            .ids()
            .any(|id| self.registry.get(id).is_some_and(|c| c.is_open()))
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
