//! Diplomatic stance changes.
//!
//! Stances are directional. The one exception is war against an ally: when
//! a player declares war on someone who considers them an ally, the target
//! declares war back in the same step. The cascade is a single level.

use tracing::{debug, warn};

use crate::effects::Effects;
use crate::order::Order;
use crate::world::{PlayerId, Stance, World};

/// Overwrites `player`'s stance toward `target` and keeps the local shroud
/// informed. Returns the previous stance, or `None` if `player` is unknown.
pub fn set_player_stance(
    world: &mut World,
    player: PlayerId,
    target: PlayerId,
    stance: Stance,
) -> Option<Stance> {
    let old = world.player_mut(player)?.set_stance_toward(target, stance);
    if world.local_player() == Some(target) {
        world.shroud.update_player_stance(player, old, stance);
    }
    Some(old)
}

/// Applies a stance change from `actor` toward `target`, including the
/// reciprocal declaration of war. Returns true if the target reciprocated.
pub fn set_stance(
    world: &mut World,
    actor: PlayerId,
    target: PlayerId,
    stance: Stance,
    fx: &mut dyn Effects,
) -> bool {
    let (Some(actor_player), Some(target_player)) = (world.player(actor), world.player(target))
    else {
        warn!(?actor, ?target, "stance change between unknown players");
        return false;
    };
    let actor_name = actor_player.name.clone();
    let target_name = target_player.name.clone();
    let target_was_allied = target_player.stance_toward(actor) == Stance::Ally;

    set_player_stance(world, actor, target, stance);
    fx.debug(&format!(
        "{} has set diplomatic stance vs {} to {}",
        actor_name, target_name, stance
    ));

    if stance == Stance::Enemy && target_was_allied {
        set_player_stance(world, target, actor, Stance::Enemy);
        fx.debug(&format!("{} has reciprocated", target_name));
        return true;
    }
    false
}

/// Handles a `SetStance` order.
///
/// The packed target location carries (target player, stance). Orders that
/// cannot be resolved against the world are dropped.
pub fn resolve_stance_order(world: Option<&mut World>, order: &Order, fx: &mut dyn Effects) {
    let Some(world) = world else {
        warn!("stance order outside of a match");
        return;
    };
    let (Some(actor), Some((x, y))) = (order.player, order.target_location) else {
        warn!("stance order without acting player or target");
        return;
    };
    let Some(stance) = Stance::from_index(y) else {
        warn!(value = y, "stance order with invalid stance");
        return;
    };
    let Ok(index) = u32::try_from(x) else {
        warn!(value = x, "stance order with invalid target");
        return;
    };
    let target = PlayerId(index);
    if target == actor {
        debug!(?actor, "ignoring stance order toward self");
        return;
    }
    set_stance(world, actor, target, stance, fx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectLog;

    fn two_players(a_to_b: Stance, b_to_a: Stance) -> (World, PlayerId, PlayerId) {
        let mut w = World::new();
        let a = w.add_player("a", Some(0)).unwrap();
        let b = w.add_player("b", Some(1)).unwrap();
        w.player_mut(a).unwrap().set_stance_toward(b, a_to_b);
        w.player_mut(b).unwrap().set_stance_toward(a, b_to_a);
        (w, a, b)
    }

    fn stance(w: &World, from: PlayerId, to: PlayerId) -> Stance {
        w.player(from).unwrap().stance_toward(to)
    }

    #[test]
    fn war_on_ally_is_reciprocated() {
        let (mut w, a, b) = two_players(Stance::Ally, Stance::Ally);
        let mut log = EffectLog::new();
        assert!(set_stance(&mut w, a, b, Stance::Enemy, &mut log));
        assert_eq!(stance(&w, a, b), Stance::Enemy);
        assert_eq!(stance(&w, b, a), Stance::Enemy);
        assert_eq!(
            log.debug_notices().collect::<Vec<_>>(),
            vec!["a has set diplomatic stance vs b to Enemy", "b has reciprocated"]
        );
    }

    #[test]
    fn war_on_neutral_is_one_sided() {
        let (mut w, a, b) = two_players(Stance::Neutral, Stance::Neutral);
        let mut log = EffectLog::new();
        assert!(!set_stance(&mut w, a, b, Stance::Enemy, &mut log));
        assert_eq!(stance(&w, a, b), Stance::Enemy);
        assert_eq!(stance(&w, b, a), Stance::Neutral);
    }

    #[test]
    fn reciprocity_depends_on_target_view_only() {
        // a considers b neutral, but b considers a an ally.
        let (mut w, a, b) = two_players(Stance::Neutral, Stance::Ally);
        let mut log = EffectLog::new();
        assert!(set_stance(&mut w, a, b, Stance::Enemy, &mut log));
        assert_eq!(stance(&w, b, a), Stance::Enemy);
    }

    #[test]
    fn peace_does_not_cascade() {
        let (mut w, a, b) = two_players(Stance::Enemy, Stance::Ally);
        let mut log = EffectLog::new();
        assert!(!set_stance(&mut w, a, b, Stance::Neutral, &mut log));
        assert_eq!(stance(&w, a, b), Stance::Neutral);
        assert_eq!(stance(&w, b, a), Stance::Ally);
    }

    #[test]
    fn stance_toward_local_player_updates_shroud() {
        let (mut w, a, b) = two_players(Stance::Neutral, Stance::Neutral);
        w.set_local_player(b).unwrap();
        let mut log = EffectLog::new();
        set_stance(&mut w, a, b, Stance::Ally, &mut log);
        assert!(w.shroud.shares_vision_with(a));
        assert_eq!(w.shroud.revision(), 1);
    }

    #[test]
    fn stance_toward_other_player_leaves_shroud_alone() {
        let (mut w, a, b) = two_players(Stance::Neutral, Stance::Neutral);
        w.set_local_player(a).unwrap();
        let mut log = EffectLog::new();
        set_stance(&mut w, a, b, Stance::Ally, &mut log);
        assert_eq!(w.shroud.revision(), 0);
    }

    #[test]
    fn reciprocal_war_against_local_player_reaches_shroud() {
        let (mut w, a, b) = two_players(Stance::Ally, Stance::Ally);
        w.set_local_player(a).unwrap();
        w.shroud.update_player_stance(b, Stance::Neutral, Stance::Ally);
        let mut log = EffectLog::new();
        set_stance(&mut w, a, b, Stance::Enemy, &mut log);
        assert!(!w.shroud.shares_vision_with(b));
        assert_eq!(w.shroud.revision(), 2);
    }

    #[test]
    fn order_decodes_packed_pair() {
        let (mut w, a, b) = two_players(Stance::Ally, Stance::Ally);
        let mut log = EffectLog::new();
        resolve_stance_order(Some(&mut w), &Order::set_stance(a, b, Stance::Enemy), &mut log);
        assert_eq!(stance(&w, a, b), Stance::Enemy);
        assert_eq!(stance(&w, b, a), Stance::Enemy);
    }

    #[test]
    fn unresolvable_orders_are_dropped() {
        let (mut w, a, b) = two_players(Stance::Ally, Stance::Ally);
        let mut log = EffectLog::new();

        let mut bad_stance = Order::set_stance(a, b, Stance::Enemy);
        bad_stance.target_location = Some((b.0 as i32, 7));
        resolve_stance_order(Some(&mut w), &bad_stance, &mut log);

        let mut bad_target = Order::set_stance(a, b, Stance::Enemy);
        bad_target.target_location = Some((42, 2));
        resolve_stance_order(Some(&mut w), &bad_target, &mut log);

        let mut no_player = Order::set_stance(a, b, Stance::Enemy);
        no_player.player = None;
        resolve_stance_order(Some(&mut w), &no_player, &mut log);

        resolve_stance_order(None, &Order::set_stance(a, b, Stance::Enemy), &mut log);

        assert!(log.is_empty());
        assert_eq!(stance(&w, a, b), Stance::Ally);
    }

    #[test]
    fn self_targeted_stance_is_ignored() {
        let (mut w, a, _) = two_players(Stance::Ally, Stance::Ally);
        let mut log = EffectLog::new();
        resolve_stance_order(Some(&mut w), &Order::set_stance(a, a, Stance::Enemy), &mut log);
        assert!(log.is_empty());
        assert_eq!(stance(&w, a, a), Stance::Ally);
    }
}
