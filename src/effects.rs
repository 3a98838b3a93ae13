//! Side effects emitted by the dispatcher.
//!
//! The dispatcher never touches transport or presentation directly. It
//! reports everything observable through an `Effects` sink; `EffectLog`
//! records those calls in order.

use crate::order::Order;
use crate::session::Color;

/// Receiver of the dispatcher's outward-facing calls.
pub trait Effects {
    fn add_chat_line(&mut self, color: Color, name: &str, text: &str);
    fn start_game(&mut self, map: &str);
    fn lobby_info_changed(&mut self);
    /// Queues an order for the transport to send.
    fn issue_order(&mut self, order: Order);
    fn debug(&mut self, text: &str);
}

/// One recorded side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ChatLine {
        color: Color,
        name: String,
        text: String,
    },
    StartGame {
        map: String,
    },
    LobbyInfoChanged,
    IssueOrder(Order),
    Debug(String),
}

/// An `Effects` sink that keeps every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectLog {
    pub effects: Vec<Effect>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chat_lines(&self) -> impl Iterator<Item = (&Color, &str, &str)> {
        self.effects.iter().filter_map(|e| match e {
            Effect::ChatLine { color, name, text } => Some((color, name.as_str(), text.as_str())),
            _ => None,
        })
    }

    pub fn debug_notices(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(|e| match e {
            Effect::Debug(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn issued_orders(&self) -> impl Iterator<Item = &Order> {
        self.effects.iter().filter_map(|e| match e {
            Effect::IssueOrder(order) => Some(order),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

impl Effects for EffectLog {
    fn add_chat_line(&mut self, color: Color, name: &str, text: &str) {
        self.effects.push(Effect::ChatLine {
            color,
            name: name.to_string(),
            text: text.to_string(),
        });
    }

    fn start_game(&mut self, map: &str) {
        self.effects.push(Effect::StartGame {
            map: map.to_string(),
        });
    }

    fn lobby_info_changed(&mut self) {
        self.effects.push(Effect::LobbyInfoChanged);
    }

    fn issue_order(&mut self, order: Order) {
        self.effects.push(Effect::IssueOrder(order));
    }

    fn debug(&mut self, text: &str) {
        self.effects.push(Effect::Debug(text.to_string()));
    }
}
