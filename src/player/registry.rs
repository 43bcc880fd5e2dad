// SPDX-License-Identifier: MPL-2.0
//! Player instance registry.
//!
//! Players are keyed by their root identifier and outlive page transitions:
//! a page re-initializing its players finds the existing instances instead
//! of building new ones, so an attached pipeline survives navigation.
//! Registration order is remembered because an unaddressed open control
//! falls back to the first registered player.

use std::collections::HashMap;

use super::controller::PlayerController;

#[derive(Default)]
pub struct PlayerRegistry {
    players: HashMap<String, PlayerController>,
    order: Vec<String>,
}

impl PlayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a player under `id`. Re-registering an existing id keeps
    /// the live instance and drops the new one.
    pub fn register(&mut self, id: impl Into<String>, controller: PlayerController) {
        let id = id.into();
        if self.players.contains_key(&id) {
            return;
        }
        self.order.push(id.clone());
        self.players.insert(id, controller);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlayerController> {
        self.players.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut PlayerController> {
        self.players.get_mut(id)
    }

    /// The id of the earliest-registered player still present.
    #[must_use]
    pub fn first_id(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn remove(&mut self, id: &str) -> Option<PlayerController> {
        self.order.retain(|existing| existing != id);
        self.players.remove(id)
    }

    /// Deregisters every player whose root id is not in `present`. Called
    /// after a page transition with the roots that survived it.
    pub fn prune(&mut self, present: &[&str]) {
        self.order.retain(|id| present.contains(&id.as_str()));
        self.players.retain(|id, _| present.contains(&id.as_str()));
    }

    /// Ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut PlayerController)> {
        self.players
            .iter_mut()
            .map(|(id, controller)| (id.as_str(), controller))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
