//! Handshake and lobby sync.
//!
//! A handshake request carries the server's session; the client answers
//! with its identity only if both sides run the same mod set. A mismatch
//! means the two processes would simulate different rules, so it ends the
//! connection instead of continuing.

use tracing::{debug, info};

use super::DispatchError;
use crate::effects::Effects;
use crate::manager::OrderManager;
use crate::order::Order;
use crate::protocol::{decode_session, HandshakeResponse};

/// Checks the server's mods against ours and queues the handshake response.
pub fn handshake_request(
    manager: &OrderManager,
    order: &Order,
    fx: &mut dyn Effects,
) -> Result<(), DispatchError> {
    info!("received handshake request");
    let server = decode_session(&order.target_string)?;
    let local = &manager.lobby_info.global_settings;

    // TODO: check that the server's map is installed locally.
    if !local.mod_difference(&server.global_settings).is_empty() {
        return Err(DispatchError::IncompatibleMods {
            local: local.mods.clone(),
            server: server.global_settings.mods,
        });
    }

    let identity = &manager.identity;
    let response = HandshakeResponse {
        name: identity.name.clone(),
        color1: identity.color1,
        color2: identity.color2,
        mods: local.mods.clone(),
        password: identity.password.clone(),
    };
    fx.issue_order(Order::handshake_response(response.encode()?));
    Ok(())
}

/// Replaces the local lobby with the server's and adopts its order latency
/// while the match has not started.
pub fn sync_info(
    manager: &mut OrderManager,
    order: &Order,
    fx: &mut dyn Effects,
) -> Result<(), DispatchError> {
    debug!("received lobby sync");
    manager.lobby_info = decode_session(&order.target_string)?;

    let latency = manager.lobby_info.global_settings.order_latency;
    if manager.frames_ahead != latency && !manager.game_started {
        manager.frames_ahead = latency;
        info!(latency, "order latency changed");
        fx.debug(&format!("Order lag is now {} frames.", latency));
    }
    fx.lobby_info_changed();
    Ok(())
}
