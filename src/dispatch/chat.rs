//! Chat and team-chat handling.
//!
//! Team chat must never reach a living opponent who is not allied with the
//! sender. Messages from players who have lost are visible to everyone and
//! carry a dead marker instead of the team marker.

use tracing::debug;

use crate::effects::Effects;
use crate::manager::OrderManager;
use crate::order::Order;
use crate::session::{Client, Color};
use crate::world::{Stance, World};

pub const DEAD_SUFFIX: &str = " (Dead)";
pub const TEAM_SUFFIX: &str = " (Team)";

/// Emits a public chat line from `client_id`.
pub fn chat(
    manager: &OrderManager,
    world: Option<&World>,
    client_id: u32,
    order: &Order,
    fx: &mut dyn Effects,
) {
    match manager.lobby_info.client_with_index(client_id) {
        Some(client) => {
            let lost = world
                .and_then(|w| w.find_player_by_client(client))
                .is_some_and(|p| p.has_lost());
            let suffix = if lost { DEAD_SUFFIX } else { "" };
            fx.add_chat_line(
                client.color1,
                &format!("{}{}", client.name, suffix),
                &order.target_string,
            );
        }
        None => {
            fx.add_chat_line(
                Color::WHITE,
                &format!("(player {})", client_id),
                &order.target_string,
            );
        }
    }
}

/// Decides whether a team message from `sender` is visible locally.
///
/// Returns the name suffix to render, or `None` when the message must be
/// suppressed.
pub fn team_chat_suffix(
    manager: &OrderManager,
    world: Option<&World>,
    sender: &Client,
) -> Option<&'static str> {
    let Some(world) = world else {
        let local_team = manager.local_client()?.team;
        return (sender.team == local_team).then_some(TEAM_SUFFIX);
    };

    let player = world.find_player_by_client(sender)?;
    let allied = world
        .local_player()
        .is_some_and(|local| player.stance_toward(local) == Stance::Ally);
    if player.has_lost() {
        Some(DEAD_SUFFIX)
    } else if allied {
        Some(TEAM_SUFFIX)
    } else {
        None
    }
}

/// Emits a team chat line from `client_id` if the local observer may see it.
pub fn team_chat(
    manager: &OrderManager,
    world: Option<&World>,
    client_id: u32,
    order: &Order,
    fx: &mut dyn Effects,
) {
    let Some(client) = manager.lobby_info.client_with_index(client_id) else {
        return;
    };
    match team_chat_suffix(manager, world, client) {
        Some(suffix) => fx.add_chat_line(
            client.color1,
            &format!("{}{}", client.name, suffix),
            &order.target_string,
        ),
        None => debug!(client_id, "team chat suppressed"),
    }
}
