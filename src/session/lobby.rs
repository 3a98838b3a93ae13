//! The lobby snapshot: every client plus the global settings.

use serde::{Deserialize, Serialize};

use super::client::Client;
use super::settings::GlobalSettings;

/// Complete lobby state at a point in time.
///
/// This is the value exchanged in handshake and sync orders. A received
/// snapshot replaces the local one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub clients: Vec<Client>,
    pub global_settings: GlobalSettings,
}

impl Session {
    pub fn new(global_settings: GlobalSettings) -> Self {
        Session {
            clients: Vec::new(),
            global_settings,
        }
    }

    /// Adds a client, replacing any existing record with the same index.
    pub fn add_client(&mut self, client: Client) {
        match self.clients.iter_mut().find(|c| c.index == client.index) {
            Some(existing) => *existing = client,
            None => self.clients.push(client),
        }
    }

    pub fn client_with_index(&self, index: u32) -> Option<&Client> {
        self.clients.iter().find(|c| c.index == index)
    }

    pub fn client_with_index_mut(&mut self, index: u32) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.index == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ClientState;

    fn lobby() -> Session {
        let mut s = Session::new(GlobalSettings::new("desert", &["ra"], 2));
        s.add_client(Client::new(0, "host"));
        s.add_client(Client::new(4, "guest").with_team(1));
        s
    }

    #[test]
    fn lookup_by_index_not_position() {
        let s = lobby();
        assert_eq!(s.client_with_index(4).unwrap().name, "guest");
        assert!(s.client_with_index(1).is_none());
    }

    #[test]
    fn add_client_replaces_same_index() {
        let mut s = lobby();
        s.add_client(Client::new(4, "renamed"));
        assert_eq!(s.clients.len(), 2);
        assert_eq!(s.client_with_index(4).unwrap().name, "renamed");
    }

    #[test]
    fn mutable_lookup_updates_in_place() {
        let mut s = lobby();
        s.client_with_index_mut(0).unwrap().state = ClientState::Disconnected;
        assert_eq!(s.client_with_index(0).unwrap().state, ClientState::Disconnected);
    }
}
