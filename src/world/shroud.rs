//! Shared-vision bookkeeping for the local player.
//!
//! Players allied toward the local player share their vision with it. The
//! diplomacy mutator notifies the shroud whenever a stance toward the local
//! player changes so the shared set stays in step with the stance table.

use std::collections::BTreeSet;

use super::player::{PlayerId, Stance};

/// A stance change toward the local player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StanceTransition {
    pub player: PlayerId,
    pub old: Stance,
    pub new: Stance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shroud {
    shared_vision: BTreeSet<PlayerId>,
    revision: u64,
    last_transition: Option<StanceTransition>,
}

impl Shroud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `player` changed its stance toward the local player.
    pub fn update_player_stance(&mut self, player: PlayerId, old: Stance, new: Stance) {
        match (old == Stance::Ally, new == Stance::Ally) {
            (false, true) => {
                self.shared_vision.insert(player);
            }
            (true, false) => {
                self.shared_vision.remove(&player);
            }
            _ => {}
        }
        self.revision += 1;
        self.last_transition = Some(StanceTransition { player, old, new });
    }

    pub fn shares_vision_with(&self, player: PlayerId) -> bool {
        self.shared_vision.contains(&player)
    }

    pub fn shared_vision(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.shared_vision.iter().copied()
    }

    /// Number of transitions seen so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_transition(&self) -> Option<StanceTransition> {
        self.last_transition
    }
}
