//! Order values.
//!
//! An order is one command applied to the shared simulation. Orders arrive
//! already totally ordered from the transport layer, are consumed once by
//! the dispatcher, and are never mutated.

use crate::world::{ActorId, PlayerId, Stance};

/// The closed set of order kinds the dispatcher routes on.
///
/// Wire tags that name none of the infrastructural kinds decode to
/// `Gameplay`, carrying the original tag for the gameplay capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderKind {
    Chat,
    TeamChat,
    Disconnected,
    StartGame,
    HandshakeRequest,
    HandshakeResponse,
    SyncInfo,
    SetStance,
    Gameplay(String),
}

impl OrderKind {
    /// Maps a wire tag to its kind.
    pub fn from_tag(tag: &str) -> OrderKind {
        match tag {
            "Chat" => OrderKind::Chat,
            "TeamChat" => OrderKind::TeamChat,
            "Disconnected" => OrderKind::Disconnected,
            "StartGame" => OrderKind::StartGame,
            "HandshakeRequest" => OrderKind::HandshakeRequest,
            "HandshakeResponse" => OrderKind::HandshakeResponse,
            "SyncInfo" => OrderKind::SyncInfo,
            "SetStance" => OrderKind::SetStance,
            other => OrderKind::Gameplay(other.to_string()),
        }
    }

    /// Returns the wire tag for this kind.
    pub fn tag(&self) -> &str {
        match self {
            OrderKind::Chat => "Chat",
            OrderKind::TeamChat => "TeamChat",
            OrderKind::Disconnected => "Disconnected",
            OrderKind::StartGame => "StartGame",
            OrderKind::HandshakeRequest => "HandshakeRequest",
            OrderKind::HandshakeResponse => "HandshakeResponse",
            OrderKind::SyncInfo => "SyncInfo",
            OrderKind::SetStance => "SetStance",
            OrderKind::Gameplay(tag) => tag,
        }
    }
}

/// A single command in the order stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub kind: OrderKind,
    /// Actor the order is addressed to, for gameplay orders.
    pub subject: Option<ActorId>,
    pub target_string: String,
    /// Packed integer pair; for `SetStance` this is (target player, stance).
    pub target_location: Option<(i32, i32)>,
    /// Immediate orders bypass gameplay resolution.
    pub is_immediate: bool,
    /// Acting player, when the order was issued on behalf of one.
    pub player: Option<PlayerId>,
}

impl Order {
    fn immediate(kind: OrderKind, text: impl Into<String>) -> Self {
        Order {
            kind,
            subject: None,
            target_string: text.into(),
            target_location: None,
            is_immediate: true,
            player: None,
        }
    }

    pub fn chat(text: impl Into<String>) -> Self {
        Self::immediate(OrderKind::Chat, text)
    }

    pub fn team_chat(text: impl Into<String>) -> Self {
        Self::immediate(OrderKind::TeamChat, text)
    }

    pub fn disconnected() -> Self {
        Self::immediate(OrderKind::Disconnected, "")
    }

    pub fn start_game() -> Self {
        Self::immediate(OrderKind::StartGame, "")
    }

    /// Server capability snapshot sent to a joining client.
    pub fn handshake_request(snapshot: impl Into<String>) -> Self {
        Self::immediate(OrderKind::HandshakeRequest, snapshot)
    }

    /// Client identity payload answering a handshake request.
    pub fn handshake_response(payload: impl Into<String>) -> Self {
        Self::immediate(OrderKind::HandshakeResponse, payload)
    }

    pub fn sync_info(snapshot: impl Into<String>) -> Self {
        Self::immediate(OrderKind::SyncInfo, snapshot)
    }

    /// Diplomatic stance change by `player` toward `target`.
    pub fn set_stance(player: PlayerId, target: PlayerId, stance: Stance) -> Self {
        Order {
            kind: OrderKind::SetStance,
            subject: None,
            target_string: String::new(),
            target_location: Some((target.0 as i32, stance as i32)),
            is_immediate: false,
            player: Some(player),
        }
    }

    /// Gameplay order addressed to an actor.
    pub fn gameplay(tag: impl Into<String>, subject: ActorId) -> Self {
        Order {
            kind: OrderKind::Gameplay(tag.into()),
            subject: Some(subject),
            target_string: String::new(),
            target_location: None,
            is_immediate: false,
            player: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_to_their_kind() {
        for kind in [
            OrderKind::Chat,
            OrderKind::TeamChat,
            OrderKind::Disconnected,
            OrderKind::StartGame,
            OrderKind::HandshakeRequest,
            OrderKind::HandshakeResponse,
            OrderKind::SyncInfo,
            OrderKind::SetStance,
        ] {
            assert_eq!(OrderKind::from_tag(kind.tag()), kind);
        }
    }

    #[test]
    fn unknown_tag_is_gameplay() {
        let kind = OrderKind::from_tag("AttackMove");
        assert_eq!(kind, OrderKind::Gameplay("AttackMove".to_string()));
        assert_eq!(kind.tag(), "AttackMove");
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(
            OrderKind::from_tag("chat"),
            OrderKind::Gameplay("chat".to_string())
        );
    }

    #[test]
    fn set_stance_packs_target_and_stance() {
        let order = Order::set_stance(PlayerId(1), PlayerId(4), Stance::Enemy);
        assert_eq!(order.target_location, Some((4, 2)));
        assert_eq!(order.player, Some(PlayerId(1)));
        assert!(!order.is_immediate);
    }

    #[test]
    fn lobby_orders_are_immediate() {
        assert!(Order::chat("hi").is_immediate);
        assert!(Order::start_game().is_immediate);
        assert!(Order::handshake_response("{}").is_immediate);
        assert!(!Order::gameplay("Move", ActorId(7)).is_immediate);
    }
}
