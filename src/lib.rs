//! Sphere Feast - a grow-by-consuming arena simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, eating rules, tick)
//! - `config`: Init-time configuration with validation
//! - `highscores`: In-memory leaderboard of finished runs
//!
//! Rendering, input capture and UI overlays are external collaborators:
//! they feed [`sim::MoveIntent`] values in and read [`sim::SimulationSnapshot`]s out.

pub mod config;
pub mod error;
pub mod highscores;
pub mod sim;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use highscores::HighScores;
pub use sim::{MoveIntent, Simulation, SimulationSnapshot};

/// Game configuration constants
pub mod consts {
    /// Fixed pacing timestep used by the native driver (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Vertical world range (all entities live between these heights)
    pub const WORLD_Y_MIN: f32 = -2.0;
    pub const WORLD_Y_MAX: f32 = 15.0;

    /// Player defaults
    /// Start radius is sqrt(400 / π) ~ 11.28, larger than any rival
    pub const PLAYER_START_MASS: f32 = 400.0;
    /// Below this planar distance the pointer target produces no movement
    pub const POINTER_DEAD_ZONE: f32 = 0.5;
    /// Slowest speed multiplier a large player can fall to
    pub const MIN_SPEED_MULTIPLIER: f32 = 0.3;
    /// Radius at which the speed multiplier starts dropping below 1
    pub const SPEED_FALLOFF_START_RADIUS: f32 = 2.0;
    /// Radius units per 100% speed loss
    pub const SPEED_FALLOFF_SPAN: f32 = 10.0;
    /// Vertical movement is slower than planar movement
    pub const VERTICAL_SPEED_FACTOR: f32 = 0.5;

    /// Food defaults
    pub const FOOD_RADIUS_MIN: f32 = 0.3;
    pub const FOOD_RADIUS_MAX: f32 = 0.7;
    pub const FOOD_SPAWN_Y_MIN: f32 = -2.0;
    pub const FOOD_SPAWN_Y_MAX: f32 = 8.0;
    /// Mass gained per unit of food radius
    pub const FOOD_MASS_FACTOR: f32 = 10.0;

    /// Rival defaults
    pub const RIVAL_RADIUS_MIN: f32 = 1.5;
    pub const RIVAL_RADIUS_MAX: f32 = 4.5;
    pub const RIVAL_SPAWN_Y_MIN: f32 = 0.0;
    pub const RIVAL_SPAWN_Y_MAX: f32 = 8.0;
    /// Max planar (x/z) speed component per tick
    pub const RIVAL_SPEED_XZ: f32 = 0.1;
    /// Max vertical speed component per tick
    pub const RIVAL_SPEED_Y: f32 = 0.05;
    /// Chance per tick that a rival picks a fresh velocity
    pub const RIVAL_MOOD_CHANGE_CHANCE: f64 = 0.01;
    /// Fraction of a rival's mass the player keeps after eating it
    pub const RIVAL_MASS_FACTOR: f32 = 0.8;
    /// Score per unit of rival radius
    pub const RIVAL_SCORE_FACTOR: f32 = 2.0;

    /// One body must be this many times larger than the other to eat it
    pub const DOMINANCE_MARGIN: f32 = 1.1;
}

/// Radius of a sphere whose cross-section area equals `mass`
#[inline]
pub fn radius_for_mass(mass: f32) -> f32 {
    (mass / std::f32::consts::PI).sqrt()
}

/// Inverse of [`radius_for_mass`]
#[inline]
pub fn mass_for_radius(radius: f32) -> f32 {
    radius * radius * std::f32::consts::PI
}
