//! Multi-peer replay for determinism checks.
//!
//! Builds several independent participants from the same scenario, feeds
//! each the same ordered stream, and compares what they end up with. Peers
//! run concurrently on a rayon pool; each peer's own dispatch stays strictly
//! sequential.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::DispatchConfig;
use crate::dispatch::process_frame;
use crate::effects::{Effect, EffectLog};
use crate::manager::OrderManager;
use crate::order::Order;
use crate::session::{Client, Color, GlobalSettings, Session};
use crate::world::{ActorId, PlayerId, Stance, WinState, World, WorldError};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("replay needs at least one peer")]
    NoPeers,

    #[error("failed to build world: {0}")]
    World(#[from] WorldError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("peer {peer} diverged from peer 0")]
    Diverged { peer: usize },
}

/// A player to create when building a peer's world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSeed {
    pub name: String,
    pub client_index: Option<u32>,
    /// Players sharing a team start allied; other teamed players start as
    /// enemies. Players without a team start neutral toward everyone.
    pub team: Option<u32>,
    pub win_state: WinState,
}

/// Who is watching: the local client and, in a match, its player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observer {
    pub client_index: u32,
    pub player: Option<PlayerId>,
}

/// Everything needed to build a fresh participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub config: DispatchConfig,
    pub session: Session,
    /// Players to create; `None` runs the replay in the lobby.
    pub players: Option<Vec<PlayerSeed>>,
    pub local_player: Option<PlayerId>,
}

impl Scenario {
    /// A match with a neutral map player followed by `humans` human players
    /// split across two teams. Client 0 observes as player 1.
    pub fn skirmish(humans: u32) -> Self {
        let mut session = Session::new(GlobalSettings::new("skirmish", &["base", "ra"], 2));
        let mut players = vec![PlayerSeed {
            name: "Neutral".to_string(),
            client_index: None,
            team: None,
            win_state: WinState::Undefined,
        }];
        for i in 0..humans {
            let name = format!("player{}", i);
            let team = i % 2 + 1;
            session.add_client(
                Client::new(i, name.clone())
                    .with_team(team)
                    .with_colors(Color::rgb((i * 40) as u8, 128, 200), Color::WHITE),
            );
            players.push(PlayerSeed {
                name,
                client_index: Some(i),
                team: Some(team),
                win_state: WinState::Undefined,
            });
        }
        Scenario {
            config: DispatchConfig::default(),
            session,
            local_player: (humans > 0).then_some(PlayerId(1)),
            players: Some(players),
        }
    }

    /// The same scenario seen from another participant.
    pub fn for_observer(&self, observer: Observer) -> Self {
        let mut scenario = self.clone();
        scenario.config.local_client_index = observer.client_index;
        scenario.local_player = observer.player;
        scenario
    }

    /// Builds a fresh manager and, for match scenarios, a fresh world.
    pub fn build(&self) -> Result<(OrderManager, Option<World>), WorldError> {
        let manager = OrderManager::new(&self.config, self.session.clone());
        let Some(seeds) = &self.players else {
            return Ok((manager, None));
        };

        let mut world = World::new();
        let mut ids = Vec::with_capacity(seeds.len());
        for seed in seeds {
            let id = world.add_player(seed.name.clone(), seed.client_index)?;
            if let Some(player) = world.player_mut(id) {
                player.win_state = seed.win_state;
            }
            ids.push(id);
        }
        for (i, a) in seeds.iter().enumerate() {
            for (j, b) in seeds.iter().enumerate() {
                if i == j {
                    continue;
                }
                let stance = match (a.team, b.team) {
                    (Some(x), Some(y)) if x == y => Stance::Ally,
                    (Some(_), Some(_)) => Stance::Enemy,
                    _ => Stance::Neutral,
                };
                if let Some(player) = world.player_mut(ids[i]) {
                    player.set_stance_toward(ids[j], stance);
                }
            }
        }
        if let Some(local) = self.local_player {
            world.set_local_player(local)?;
            for &id in &ids {
                let stance = world.player(id).map(|p| p.stance_toward(local));
                if id != local && stance == Some(Stance::Ally) {
                    world.shroud.update_player_stance(id, Stance::Neutral, Stance::Ally);
                }
            }
        }
        Ok((manager, Some(world)))
    }

    fn player_count(&self) -> usize {
        self.players.as_ref().map_or(0, Vec::len)
    }
}

/// State every participant must agree on, whoever is observing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedState {
    pub lobby: Session,
    pub frames_ahead: u32,
    pub game_started: bool,
    /// `stances[a][b]` is player a's stance toward player b.
    pub stances: Vec<Vec<Stance>>,
}

/// Everything one peer ended up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerOutcome {
    pub shared: SharedState,
    pub shroud_revision: u64,
    pub effects: Vec<Effect>,
    /// Terminal dispatch error, rendered, if the stream aborted.
    pub fatal: Option<String>,
}

/// Runs one peer over the stream.
pub fn run_peer(scenario: &Scenario, stream: &[(u32, Order)]) -> Result<PeerOutcome, ReplayError> {
    let (mut manager, mut world) = scenario.build()?;
    let mut log = EffectLog::new();
    let fatal = process_frame(&mut manager, world.as_mut(), stream, &mut log)
        .err()
        .map(|e| e.to_string());

    let stances = match &world {
        Some(w) => w
            .players()
            .iter()
            .map(|p| w.players().iter().map(|q| p.stance_toward(q.id)).collect())
            .collect(),
        None => Vec::new(),
    };
    Ok(PeerOutcome {
        shared: SharedState {
            lobby: manager.lobby_info,
            frames_ahead: manager.frames_ahead,
            game_started: manager.game_started,
            stances,
        },
        shroud_revision: world.map_or(0, |w| w.shroud.revision()),
        effects: log.effects,
        fatal,
    })
}

fn run_parallel(
    scenarios: &[Scenario],
    stream: &[(u32, Order)],
    threads: usize,
) -> Result<Vec<PeerOutcome>, ReplayError> {
    if scenarios.is_empty() {
        return Err(ReplayError::NoPeers);
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    pool.install(|| {
        scenarios
            .par_iter()
            .map(|s| run_peer(s, stream))
            .collect::<Result<Vec<_>, _>>()
    })
}

/// Runs `peers` identical participants and requires identical outcomes,
/// effects included.
pub fn check_convergence(
    scenario: &Scenario,
    stream: &[(u32, Order)],
    peers: usize,
    threads: usize,
) -> Result<PeerOutcome, ReplayError> {
    let scenarios = vec![scenario.clone(); peers];
    let outcomes = run_parallel(&scenarios, stream, threads)?;
    if let Some(peer) = outcomes.iter().position(|o| *o != outcomes[0]) {
        warn!(peer, "peer outcome diverged");
        return Err(ReplayError::Diverged { peer });
    }
    debug!(peers, orders = stream.len(), "peers converged");
    Ok(outcomes[0].clone())
}

/// Runs one participant per observer and requires identical shared state.
/// Chat visibility and shroud bookkeeping legitimately differ per observer.
pub fn check_observers(
    scenario: &Scenario,
    stream: &[(u32, Order)],
    observers: &[Observer],
    threads: usize,
) -> Result<Vec<PeerOutcome>, ReplayError> {
    let scenarios: Vec<Scenario> = observers.iter().map(|o| scenario.for_observer(*o)).collect();
    let outcomes = run_parallel(&scenarios, stream, threads)?;
    if let Some(peer) = outcomes.iter().position(|o| o.shared != outcomes[0].shared) {
        warn!(peer, "observer shared state diverged");
        return Err(ReplayError::Diverged { peer });
    }
    Ok(outcomes)
}

/// Generates a reproducible stream of chat, stance, disconnect and
/// unrouted gameplay orders for the scenario.
pub fn random_stream(scenario: &Scenario, len: usize, seed: u64) -> Vec<(u32, Order)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let clients: Vec<u32> = scenario.session.clients.iter().map(|c| c.index).collect();
    let players = scenario.player_count() as u32;
    let mut stream = Vec::with_capacity(len);

    for n in 0..len {
        // Occasionally use an index no client owns.
        let client = if clients.is_empty() || rng.gen_bool(0.05) {
            clients.iter().max().map_or(0, |m| m + 1)
        } else {
            clients[rng.gen_range(0..clients.len())]
        };
        let order = match rng.gen_range(0..100) {
            0..=29 => Order::chat(format!("message {}", n)),
            30..=54 => Order::team_chat(format!("team message {}", n)),
            55..=89 if players > 1 => {
                let actor = PlayerId(rng.gen_range(0..players));
                let target = PlayerId(rng.gen_range(0..players));
                let stance = match rng.gen_range(0..3) {
                    0 => Stance::Ally,
                    1 => Stance::Neutral,
                    _ => Stance::Enemy,
                };
                Order::set_stance(actor, target, stance)
            }
            90..=92 => Order::disconnected(),
            _ => {
                let mut order = Order::gameplay("Stop", ActorId(n as u32));
                order.is_immediate = rng.gen_bool(0.5);
                order
            }
        };
        stream.push((client, order));
    }
    stream
}
