//! Simulation tick and session lifecycle
//!
//! The core never schedules itself: an external pacing loop calls
//! [`Simulation::tick`] once per signal and reads back a snapshot.

use super::eating::{EatOutcome, resolve_eating};
use super::entity::Spatial;
use super::player::{MoveIntent, apply_move, compute_move_intent};
use super::population::step_rival;
use super::state::{SimPhase, SimulationSnapshot, SimulationState};
use crate::config::SimConfig;
use crate::error::Result;
use crate::highscores::HighScores;

/// Advance the state by one tick
///
/// Returns `None` without touching the state when the game is over.
pub fn tick(
    state: &mut SimulationState,
    intent: &MoveIntent,
    dt_scale: f32,
) -> Option<EatOutcome> {
    if state.phase == SimPhase::GameOver {
        return None;
    }

    state.time_ticks += 1;

    // Player movement
    let dir = compute_move_intent(state.player.position(), intent);
    apply_move(
        &mut state.player,
        dir,
        state.config.player_speed,
        &state.bounds,
        dt_scale,
    );

    // Rival wandering
    for rival in &mut state.rivals {
        step_rival(rival, &state.bounds, &mut state.rng);
    }

    let outcome = resolve_eating(state);
    state.last_events = outcome.events.clone();

    if outcome.player_eaten {
        log::info!(
            "Game over at tick {}: score {}, peak mass {:.1}",
            state.time_ticks,
            state.score,
            state.peak_mass
        );
    }

    Some(outcome)
}

/// A running session plus the leaderboard of finished runs
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SimulationState,
    high_scores: HighScores,
}

impl Simulation {
    /// Validate the config and build a fresh world
    pub fn new(config: SimConfig) -> Result<Self> {
        let state = build_state(config)?;
        Ok(Self {
            state,
            high_scores: HighScores::new(),
        })
    }

    /// Advance one tick at nominal speed
    pub fn tick(&mut self, intent: &MoveIntent) -> SimulationSnapshot {
        self.tick_scaled(intent, 1.0)
    }

    /// Advance one tick with movement scaled by `dt_scale`
    ///
    /// A no-op once the game is over; the unchanged snapshot is returned.
    pub fn tick_scaled(&mut self, intent: &MoveIntent, dt_scale: f32) -> SimulationSnapshot {
        if let Some(outcome) = tick(&mut self.state, intent, dt_scale) {
            if outcome.player_eaten {
                self.high_scores.add_run(
                    self.state.score,
                    self.state.peak_mass,
                    self.state.time_ticks,
                );
            }
        }
        self.state.snapshot()
    }

    /// Rebuild the world from the current config and resume running
    ///
    /// The RNG stream carries on from the previous session, so each reset
    /// yields a new layout while staying reproducible from the original seed.
    pub fn reset(&mut self) -> SimulationSnapshot {
        let config = self.state.config.clone();
        let seed = self.next_seed();
        self.state = SimulationState::new(config, seed);
        log::info!("Simulation reset (seed {})", seed);
        self.state.snapshot()
    }

    /// Rebuild the world from a new config
    ///
    /// On an invalid config the current session is left untouched.
    pub fn reset_with(&mut self, config: SimConfig) -> Result<SimulationSnapshot> {
        self.state = build_state(config)?;
        Ok(self.state.snapshot())
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        self.state.snapshot()
    }

    /// Read-only access to the live state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.state.running()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    fn next_seed(&mut self) -> u64 {
        use rand::Rng;
        self.state.rng.random()
    }

    /// Mutable state access for scenario tests
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }
}

fn build_state(config: SimConfig) -> Result<SimulationState> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "Starting simulation (seed {}, world {}, food {}, rivals {})",
        seed,
        config.world_size,
        config.food_target,
        config.rival_target
    );
    Ok(SimulationState::new(config, seed))
}
