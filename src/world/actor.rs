//! Actors and the gameplay capabilities attached to them.
//!
//! Gameplay content is opaque to the dispatcher: an actor is only a health
//! component (optional) and an ordered list of order resolvers.

use std::fmt;

use crate::order::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(pub u32);

/// Hit points of a destructible actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub hp: i32,
    pub max_hp: i32,
}

impl Health {
    pub fn new(max_hp: i32) -> Self {
        Health { hp: max_hp, max_hp }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// A gameplay capability that reacts to orders addressed to its actor.
pub trait ResolveOrder {
    fn resolve_order(&mut self, subject: ActorId, order: &Order);
}

/// An entity that can be the subject of gameplay orders.
pub struct Actor {
    pub id: ActorId,
    pub health: Option<Health>,
    /// Resolvers in registration order.
    pub resolvers: Vec<Box<dyn ResolveOrder>>,
}

impl Actor {
    pub fn new(id: ActorId) -> Self {
        Actor {
            id,
            health: None,
            resolvers: Vec::new(),
        }
    }

    pub fn with_health(mut self, health: Health) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_resolver(mut self, resolver: impl ResolveOrder + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// True only when a health component exists and reports dead.
    pub fn is_dead(&self) -> bool {
        self.health.is_some_and(|h| h.is_dead())
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("id", &self.id)
            .field("health", &self.health)
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}
