//! In-match world state.
//!
//! The world exists only while a match is running. It owns the player
//! table, the client-to-player mapping, the world-level order validators,
//! the gameplay actors, and the local player's shroud.

pub mod actor;
pub mod player;
pub mod shroud;

use std::collections::BTreeMap;

use thiserror::Error;

pub use actor::{Actor, ActorId, Health, ResolveOrder};
pub use player::{Player, PlayerId, Stance, WinState};
pub use shroud::{Shroud, StanceTransition};

use crate::dispatch::ValidateOrder;
use crate::session::Client;

/// Errors raised while populating a world.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("client {client} is already bound to player {player:?}")]
    ClientAlreadyBound { client: u32, player: PlayerId },

    #[error("unknown player {0:?}")]
    UnknownPlayer(PlayerId),
}

#[derive(Default)]
pub struct World {
    players: Vec<Player>,
    /// Injective: each client owns at most one player.
    client_players: BTreeMap<u32, PlayerId>,
    local_player: Option<PlayerId>,
    /// World-level validators in registration order.
    validators: Vec<Box<dyn ValidateOrder>>,
    actors: BTreeMap<ActorId, Actor>,
    pub shroud: Shroud,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player. Human players pass their client index, which must
    /// not already own a player; bots and map players pass `None`.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        client_index: Option<u32>,
    ) -> Result<PlayerId, WorldError> {
        let id = PlayerId(self.players.len() as u32);
        if let Some(client) = client_index {
            if let Some(&player) = self.client_players.get(&client) {
                return Err(WorldError::ClientAlreadyBound { client, player });
            }
            self.client_players.insert(client, id);
        }
        self.players.push(Player::new(id, name, client_index));
        Ok(id)
    }

    pub fn set_local_player(&mut self, id: PlayerId) -> Result<(), WorldError> {
        if self.player(id).is_none() {
            return Err(WorldError::UnknownPlayer(id));
        }
        self.local_player = Some(id);
        Ok(())
    }

    pub fn local_player(&self) -> Option<PlayerId> {
        self.local_player
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0 as usize)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.0 as usize)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player owned by `client`, if any.
    pub fn find_player_by_client(&self, client: &Client) -> Option<&Player> {
        self.client_players
            .get(&client.index)
            .and_then(|&id| self.player(id))
    }

    pub fn add_validator(&mut self, validator: impl ValidateOrder + 'static) {
        self.validators.push(Box::new(validator));
    }

    pub fn validators(&self) -> &[Box<dyn ValidateOrder>] {
        &self.validators
    }

    pub fn add_actor(&mut self, actor: Actor) {
        self.actors.insert(actor.id, actor);
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }
}
