//! Simulation state and read-only snapshots
//!
//! [`SimulationState`] exclusively owns every entity. Collaborators only ever
//! see [`SimulationSnapshot`] copies.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Food, Player, Rival, Spatial, WorldBounds};
use super::population::{EntityIds, maintain_food_count, spawn_rival};
use crate::config::SimConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Ticks advance the world
    Running,
    /// Player was eaten; only a reset leaves this phase
    GameOver,
}

/// Something that happened during a tick, in resolution order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    FoodEaten { id: u32, mass_gain: f32 },
    RivalEaten { id: u32, mass_gain: f32, points: u64 },
    /// Player and rival overlap but neither is big enough to eat the other
    Standoff { rival_id: u32 },
    PlayerEaten { rival_id: u32 },
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Config this state was built from
    pub config: SimConfig,
    /// Seed actually used (config seed or a random pick)
    pub seed: u64,
    pub bounds: WorldBounds,
    pub player: Player,
    /// Food pellets (sorted by id)
    pub food: Vec<Food>,
    /// Rivals (sorted by id, only ever shrinks)
    pub rivals: Vec<Rival>,
    pub score: u64,
    pub phase: SimPhase,
    /// Ticks advanced since init/reset
    pub time_ticks: u64,
    /// Largest mass the player reached this session
    pub peak_mass: f32,
    /// Events from the most recent tick
    pub last_events: Vec<SimEvent>,
    pub(crate) rng: Pcg32,
    pub(crate) ids: EntityIds,
}

impl SimulationState {
    /// Build a fresh world: player at the origin, full food and rival populations
    ///
    /// The config is assumed to be validated already.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let bounds = WorldBounds::new(config.world_size);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ids = EntityIds::default();

        let player = Player::new(ids.next_id(), config.player_start_mass);

        let mut food = Vec::with_capacity(config.food_target);
        maintain_food_count(&mut food, config.food_target, &bounds, &mut ids, &mut rng);

        let rivals = (0..config.rival_target)
            .map(|_| spawn_rival(ids.next_id(), &bounds, &mut rng))
            .collect();

        Self {
            peak_mass: player.mass(),
            config,
            seed,
            bounds,
            player,
            food,
            rivals,
            score: 0,
            phase: SimPhase::Running,
            time_ticks: 0,
            last_events: Vec::new(),
            rng,
            ids,
        }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        self.ids.next_id()
    }

    /// Read-only copy for renderers and UI
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            seed: self.seed,
            time_ticks: self.time_ticks,
            score: self.score,
            running: self.running(),
            phase: self.phase,
            player: PlayerView {
                id: self.player.id,
                pos: self.player.pos,
                radius: self.player.radius(),
                mass: self.player.mass(),
            },
            food: self
                .food
                .iter()
                .map(|f| BodyView {
                    id: f.id,
                    pos: f.pos,
                    radius: f.radius,
                })
                .collect(),
            rivals: self
                .rivals
                .iter()
                .map(|r| RivalView {
                    id: r.id,
                    pos: r.pos,
                    vel: r.vel,
                    radius: r.radius,
                    mass: r.mass,
                })
                .collect(),
            events: self.last_events.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: u32,
    pub pos: Vec3,
    pub radius: f32,
    pub mass: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub id: u32,
    pub pos: Vec3,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RivalView {
    pub id: u32,
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
    pub mass: f32,
}

/// Everything a renderer/UI needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub seed: u64,
    pub time_ticks: u64,
    pub score: u64,
    pub running: bool,
    pub phase: SimPhase,
    pub player: PlayerView,
    pub food: Vec<BodyView>,
    pub rivals: Vec<RivalView>,
    pub events: Vec<SimEvent>,
}
