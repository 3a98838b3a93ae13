//! Order dispatch.
//!
//! Every admitted order is routed by kind to exactly one handler. The
//! dispatcher is synchronous and total: given the same prior state and the
//! same ordered input it always produces the same state and the same
//! effects. The only error it returns is a terminal one, after which the
//! session cannot continue in lockstep.

pub mod chat;
pub mod diplomacy;
pub mod gameplay;
pub mod handshake;
pub mod validate;

use thiserror::Error;
use tracing::{info, trace};

pub use chat::{team_chat_suffix, DEAD_SUFFIX, TEAM_SUFFIX};
pub use diplomacy::{set_player_stance, set_stance};
pub use validate::{admit, ValidateOrder};

use crate::effects::Effects;
use crate::manager::OrderManager;
use crate::order::{Order, OrderKind};
use crate::protocol::SnapshotError;
use crate::session::{ClientState, Color};
use crate::world::World;

/// Terminal dispatch failures. The connection must be torn down.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("version mismatch. client: `{}`, server: `{}`", .local.join(","), .server.join(","))]
    IncompatibleMods {
        local: Vec<String>,
        server: Vec<String>,
    },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Applies one order from `client_id`.
///
/// Orders vetoed by a validator are dropped without any effect.
pub fn process_order(
    manager: &mut OrderManager,
    world: Option<&mut World>,
    client_id: u32,
    order: &Order,
    fx: &mut dyn Effects,
) -> Result<(), DispatchError> {
    if !admit(manager, world.as_deref(), client_id, order) {
        return Ok(());
    }
    trace!(client_id, kind = order.kind.tag(), "dispatching order");

    match &order.kind {
        OrderKind::Chat => chat::chat(manager, world.as_deref(), client_id, order, fx),
        OrderKind::Disconnected => {
            if let Some(client) = manager.lobby_info.client_with_index_mut(client_id) {
                client.state = ClientState::Disconnected;
                info!(client_id, name = %client.name, "client disconnected");
            }
        }
        OrderKind::TeamChat => chat::team_chat(manager, world.as_deref(), client_id, order, fx),
        OrderKind::StartGame => {
            fx.add_chat_line(Color::WHITE, "Server", "The game has started.");
            fx.start_game(&manager.lobby_info.global_settings.map);
            manager.game_started = true;
        }
        OrderKind::HandshakeRequest => handshake::handshake_request(manager, order, fx)?,
        OrderKind::SyncInfo => handshake::sync_info(manager, order, fx)?,
        OrderKind::SetStance => diplomacy::resolve_stance_order(world, order, fx),
        OrderKind::HandshakeResponse | OrderKind::Gameplay(_) => {
            gameplay::resolve_gameplay(world, order)
        }
    }
    Ok(())
}

/// Applies a frame's orders in stream order, stopping at the first
/// terminal error.
pub fn process_frame(
    manager: &mut OrderManager,
    mut world: Option<&mut World>,
    orders: &[(u32, Order)],
    fx: &mut dyn Effects,
) -> Result<(), DispatchError> {
    for (client_id, order) in orders {
        process_order(manager, world.as_deref_mut(), *client_id, order, fx)?;
    }
    Ok(())
}
