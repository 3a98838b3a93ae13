//! Per-participant lobby records.
//!
//! A client is one network participant in the session. Clients are keyed
//! by a session-wide index and are never removed once joined; a dropped
//! connection only flips the state to `Disconnected`.

use serde::{Deserialize, Serialize};

/// An opaque RGB color used for player tags and chat lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const PALE_GREEN: Color = Color::rgb(152, 251, 152);
    pub const PEACH_PUFF: Color = Color::rgb(255, 218, 185);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Connection state of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClientState {
    #[default]
    Active,
    Disconnected,
}

/// A participant in the lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub index: u32,
    pub name: String,
    pub color1: Color,
    pub color2: Color,
    pub team: u32,
    #[serde(default)]
    pub state: ClientState,
    /// Faction picked in the lobby.
    #[serde(default)]
    pub country: String,
    /// Map spawn slot, 0 for random.
    #[serde(default)]
    pub spawn_point: u32,
}

impl Client {
    /// Creates an active client with default colors and no team.
    pub fn new(index: u32, name: impl Into<String>) -> Self {
        Client {
            index,
            name: name.into(),
            color1: Color::WHITE,
            color2: Color::WHITE,
            team: 0,
            state: ClientState::Active,
            country: String::new(),
            spawn_point: 0,
        }
    }

    pub fn with_team(mut self, team: u32) -> Self {
        self.team = team;
        self
    }

    pub fn with_colors(mut self, color1: Color, color2: Color) -> Self {
        self.color1 = color1;
        self.color2 = color2;
        self
    }

    pub fn is_connected(&self) -> bool {
        self.state == ClientState::Active
    }
}
