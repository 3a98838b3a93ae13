//! Order validation gate.

use tracing::trace;

use crate::manager::OrderManager;
use crate::order::Order;
use crate::world::World;

/// A world-level capability that may veto orders before dispatch.
///
/// Implementations must depend only on state shared by every participant:
/// no clocks, no randomness.
pub trait ValidateOrder {
    fn validate_order(
        &self,
        manager: &OrderManager,
        world: &World,
        client_id: u32,
        order: &Order,
    ) -> bool;
}

/// Returns true when every registered validator accepts the order.
///
/// Without a world (lobby) there is nothing to validate against and every
/// order is admitted.
pub fn admit(manager: &OrderManager, world: Option<&World>, client_id: u32, order: &Order) -> bool {
    let Some(world) = world else {
        return true;
    };
    let admitted = world
        .validators()
        .iter()
        .all(|v| v.validate_order(manager, world, client_id, order));
    if !admitted {
        trace!(client_id, kind = order.kind.tag(), "order rejected by validator");
    }
    admitted
}
