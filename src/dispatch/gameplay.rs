//! Routing of gameplay orders to actor capabilities.

use tracing::trace;

use crate::order::Order;
use crate::world::World;

/// Hands a non-immediate order to every resolver on its subject, in
/// registration order. Immediate orders, orders without a live subject,
/// and orders outside a match are skipped.
pub fn resolve_gameplay(world: Option<&mut World>, order: &Order) {
    if order.is_immediate {
        return;
    }
    let Some(world) = world else {
        trace!(kind = order.kind.tag(), "gameplay order outside of a match");
        return;
    };
    let Some(subject) = order.subject else {
        trace!(kind = order.kind.tag(), "gameplay order without subject");
        return;
    };
    let Some(actor) = world.actor_mut(subject) else {
        trace!(?subject, "gameplay order for missing actor");
        return;
    };
    if actor.is_dead() {
        trace!(?subject, "gameplay order for dead actor");
        return;
    }
    for resolver in actor.resolvers.iter_mut() {
        resolver.resolve_order(subject, order);
    }
}
