//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per external pacing signal, no internal scheduling
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod eating;
pub mod entity;
pub mod player;
pub mod population;
pub mod state;
pub mod tick;

pub use collision::{collides, distance, dominates};
pub use eating::{EatOutcome, resolve_eating};
pub use entity::{Food, Player, Rival, Spatial, WorldBounds};
pub use player::{MoveIntent, MoveKey, apply_move, compute_move_intent, grow, speed_multiplier};
pub use population::{
    EntityIds, maintain_food_count, random_rival_velocity, spawn_food, spawn_rival, step_rival,
};
pub use state::{
    BodyView, PlayerView, RivalView, SimEvent, SimPhase, SimulationSnapshot, SimulationState,
};
pub use tick::{Simulation, tick};
