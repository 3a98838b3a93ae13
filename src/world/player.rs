//! Players and their diplomatic relations.

use std::collections::BTreeMap;
use std::fmt;

/// Index of a player in the world's player table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u32);

/// Directional diplomatic relation from one player toward another.
///
/// Discriminants are the values carried on the wire in a stance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Stance {
    Ally = 0,
    Neutral = 1,
    Enemy = 2,
}

impl Stance {
    /// Decodes a wire stance value.
    pub fn from_index(value: i32) -> Option<Stance> {
        match value {
            0 => Some(Stance::Ally),
            1 => Some(Stance::Neutral),
            2 => Some(Stance::Enemy),
            _ => None,
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stance::Ally => "Ally",
            Stance::Neutral => "Neutral",
            Stance::Enemy => "Enemy",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WinState {
    #[default]
    Undefined,
    Won,
    Lost,
}

/// One faction in the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Owning client, for human players. Lookup only.
    pub client_index: Option<u32>,
    pub win_state: WinState,
    stances: BTreeMap<PlayerId, Stance>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, client_index: Option<u32>) -> Self {
        Player {
            id,
            name: name.into(),
            client_index,
            win_state: WinState::Undefined,
            stances: BTreeMap::new(),
        }
    }

    /// Stance toward `other`. A player is always allied with itself;
    /// unknown players read as neutral.
    pub fn stance_toward(&self, other: PlayerId) -> Stance {
        if other == self.id {
            return Stance::Ally;
        }
        self.stances.get(&other).copied().unwrap_or(Stance::Neutral)
    }

    /// Overwrites the stance toward `other`, returning the previous value.
    pub fn set_stance_toward(&mut self, other: PlayerId, stance: Stance) -> Stance {
        let old = self.stance_toward(other);
        self.stances.insert(other, stance);
        old
    }

    pub fn has_lost(&self) -> bool {
        self.win_state == WinState::Lost
    }
}
