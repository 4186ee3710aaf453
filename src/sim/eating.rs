//! Consumption rules
//!
//! Resolved once per tick after movement, in a fixed order:
//! 1. food the player overlaps is eaten
//! 2. every overlapping rival is judged against the player
//! 3. the food population is topped back up
//!
//! Each pass collects consumed IDs first and removes them afterwards.
//! The player grows as each item is resolved, so later checks in the same
//! pass see the updated radius.

use super::collision::{collides, dominates};
use super::entity::Spatial;
use super::player::grow;
use super::population::maintain_food_count;
use super::state::{SimEvent, SimPhase, SimulationState};
use crate::consts::*;

/// Summary of one resolver pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EatOutcome {
    pub events: Vec<SimEvent>,
    pub food_eaten: usize,
    pub rivals_eaten: usize,
    pub food_respawned: usize,
    pub points: u64,
    /// True if a rival ate the player during this pass
    pub player_eaten: bool,
}

/// Food pass: eat every pellet the player overlaps
fn resolve_food(state: &mut SimulationState, outcome: &mut EatOutcome) {
    let mut eaten = Vec::new();
    for food in &state.food {
        if collides(&state.player, food) {
            let mass_gain = grow(&mut state.player, food.radius, FOOD_MASS_FACTOR);
            eaten.push(food.id);
            outcome.events.push(SimEvent::FoodEaten {
                id: food.id,
                mass_gain,
            });
        }
    }

    if eaten.is_empty() {
        return;
    }
    state.food.retain(|f| !eaten.contains(&f.id));
    state.score += eaten.len() as u64;
    outcome.points += eaten.len() as u64;
    outcome.food_eaten = eaten.len();
}

/// Rival pass: eat smaller rivals, get eaten by larger ones, ignore near-equals
///
/// All overlapping rivals are judged even after the player has been eaten,
/// but an eaten player no longer grows or scores.
fn resolve_rivals(state: &mut SimulationState, outcome: &mut EatOutcome) {
    let mut eaten = Vec::new();
    for rival in &state.rivals {
        if !collides(&state.player, rival) {
            continue;
        }

        let player_radius = state.player.radius();
        if dominates(player_radius, rival.radius, DOMINANCE_MARGIN) {
            if outcome.player_eaten {
                continue;
            }
            let mass_gain = grow(&mut state.player, rival.mass, RIVAL_MASS_FACTOR);
            let points = (rival.radius * RIVAL_SCORE_FACTOR).floor() as u64;
            state.score += points;
            outcome.points += points;
            eaten.push(rival.id);
            outcome.events.push(SimEvent::RivalEaten {
                id: rival.id,
                mass_gain,
                points,
            });
        } else if dominates(rival.radius, player_radius, DOMINANCE_MARGIN) {
            state.phase = SimPhase::GameOver;
            outcome.player_eaten = true;
            outcome.events.push(SimEvent::PlayerEaten { rival_id: rival.id });
        } else {
            outcome.events.push(SimEvent::Standoff { rival_id: rival.id });
        }
    }

    if !eaten.is_empty() {
        state.rivals.retain(|r| !eaten.contains(&r.id));
        outcome.rivals_eaten = eaten.len();
    }
}

/// Run the full consumption pass for the current tick
pub fn resolve_eating(state: &mut SimulationState) -> EatOutcome {
    let mut outcome = EatOutcome::default();

    resolve_food(state, &mut outcome);
    resolve_rivals(state, &mut outcome);

    outcome.food_respawned = maintain_food_count(
        &mut state.food,
        state.config.food_target,
        &state.bounds,
        &mut state.ids,
        &mut state.rng,
    );

    state.peak_mass = state.peak_mass.max(state.player.mass());

    for event in &outcome.events {
        log::debug!("tick {}: {:?}", state.time_ticks, event);
    }

    outcome
}
