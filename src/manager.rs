//! Session manager state.
//!
//! Holds the lobby snapshot, the local client's identity, the current
//! order latency, and whether the match has started. One value lives for
//! the whole session and is passed explicitly to every dispatch call.

use crate::config::{DispatchConfig, LocalIdentity};
use crate::session::{Client, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderManager {
    pub lobby_info: Session,
    pub local_client_index: u32,
    /// Frames of input delay currently in effect.
    pub frames_ahead: u32,
    pub game_started: bool,
    pub identity: LocalIdentity,
}

impl OrderManager {
    pub fn new(config: &DispatchConfig, lobby_info: Session) -> Self {
        OrderManager {
            lobby_info,
            local_client_index: config.local_client_index,
            frames_ahead: config.initial_order_latency,
            game_started: false,
            identity: config.identity.clone(),
        }
    }

    pub fn local_client(&self) -> Option<&Client> {
        self.lobby_info.client_with_index(self.local_client_index)
    }
}
