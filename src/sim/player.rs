//! Player movement and growth
//!
//! Turns an abstract [`MoveIntent`] into a direction, moves the player with
//! size-dependent speed, and applies mass gains.

use std::collections::HashSet;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::entity::{Player, Spatial, WorldBounds};
use crate::consts::*;

/// Named directional keys the input collaborator may report as held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKey {
    /// Toward -z
    Forward,
    /// Toward +z
    Back,
    /// Toward -x
    Left,
    /// Toward +x
    Right,
    /// Toward +y
    Up,
    /// Toward -y
    Down,
}

/// Input for a single tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Point on the x/z plane the player should head toward (pointer/touch)
    pub pointer_target: Option<Vec2>,
    /// Directional keys currently held
    pub keys: HashSet<MoveKey>,
}

impl MoveIntent {
    /// No movement at all
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn toward(target: Vec2) -> Self {
        Self {
            pointer_target: Some(target),
            keys: HashSet::new(),
        }
    }

    pub fn with_keys(keys: impl IntoIterator<Item = MoveKey>) -> Self {
        Self {
            pointer_target: None,
            keys: keys.into_iter().collect(),
        }
    }

    #[inline]
    fn held(&self, key: MoveKey) -> bool {
        self.keys.contains(&key)
    }

    /// Key axis value, or None when neither key of the pair is held
    fn key_axis(&self, negative: MoveKey, positive: MoveKey) -> Option<f32> {
        let neg = self.held(negative);
        let pos = self.held(positive);
        if !neg && !pos {
            return None;
        }
        Some(pos as i32 as f32 - neg as i32 as f32)
    }
}

/// Resolve an intent into a per-axis direction for the player
///
/// Pointer movement is a unit vector on x/z toward the target, unless the
/// player is already within the dead zone. A held key replaces the pointer
/// value for its axis outright. The vertical axis is key-driven only.
pub fn compute_move_intent(player_pos: Vec3, intent: &MoveIntent) -> Vec3 {
    let mut dir = Vec3::ZERO;

    if let Some(target) = intent.pointer_target {
        let offset = target - Vec2::new(player_pos.x, player_pos.z);
        if offset.length() > POINTER_DEAD_ZONE {
            let unit = offset.normalize();
            dir.x = unit.x;
            dir.z = unit.y;
        }
    }

    if let Some(x) = intent.key_axis(MoveKey::Left, MoveKey::Right) {
        dir.x = x;
    }
    if let Some(z) = intent.key_axis(MoveKey::Forward, MoveKey::Back) {
        dir.z = z;
    }
    if let Some(y) = intent.key_axis(MoveKey::Down, MoveKey::Up) {
        dir.y = y;
    }

    dir
}

/// Speed multiplier for a player of the given radius (bigger is slower)
#[inline]
pub fn speed_multiplier(radius: f32) -> f32 {
    (1.0 - (radius - SPEED_FALLOFF_START_RADIUS) / SPEED_FALLOFF_SPAN).max(MIN_SPEED_MULTIPLIER)
}

/// Move the player along `dir`, then hard-clamp into the world
pub fn apply_move(
    player: &mut Player,
    dir: Vec3,
    base_speed: f32,
    bounds: &WorldBounds,
    dt_scale: f32,
) {
    let speed = base_speed * speed_multiplier(player.radius()) * dt_scale;
    let step = Vec3::new(dir.x, dir.y * VERTICAL_SPEED_FACTOR, dir.z) * speed;
    player.pos = bounds.clamp(player.pos + step);
}

/// Add `consumed_mass * factor` to the player; radius follows immediately
pub fn grow(player: &mut Player, consumed_mass: f32, factor: f32) -> f32 {
    let gain = consumed_mass * factor;
    player.set_mass(player.mass() + gain);
    gain
}
