//! Sphere-shaped bodies living in the arena
//!
//! Every body is a plain record; the [`Spatial`] trait lets collision code
//! treat the player, food and rivals alike. Entities carry no render handle:
//! renderers key their own resources by the stable `id` assigned at spawn.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_Y_MAX, WORLD_Y_MIN};
use crate::radius_for_mass;

/// Anything with a position and a collision radius
pub trait Spatial {
    fn position(&self) -> Vec3;
    fn radius(&self) -> f32;
}

/// Axis-aligned world box: ±half_extent on x/z, fixed vertical range on y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl WorldBounds {
    pub fn new(world_size: f32) -> Self {
        let half = world_size / 2.0;
        Self {
            min: Vec3::new(-half, WORLD_Y_MIN, -half),
            max: Vec3::new(half, WORLD_Y_MAX, half),
        }
    }

    /// Full extent on x and z
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Hard clamp into the box
    #[inline]
    pub fn clamp(&self, pos: Vec3) -> Vec3 {
        pos.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, pos: Vec3) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }

    /// Per-axis flags: true where `pos` lies outside the box
    #[inline]
    pub fn outside_axes(&self, pos: Vec3) -> [bool; 3] {
        let below = pos.cmplt(self.min);
        let above = pos.cmpgt(self.max);
        [
            below.test(0) || above.test(0),
            below.test(1) || above.test(1),
            below.test(2) || above.test(2),
        ]
    }
}

/// The player-controlled sphere
///
/// Mass and radius are private so that a radius can never drift from
/// `sqrt(mass / π)`; every mass change goes through [`Player::set_mass`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub pos: Vec3,
    mass: f32,
    radius: f32,
}

impl Player {
    pub fn new(id: u32, mass: f32) -> Self {
        Self {
            id,
            pos: Vec3::ZERO,
            mass,
            radius: radius_for_mass(mass),
        }
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set mass and recompute radius in one step
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
        self.radius = radius_for_mass(mass);
    }
}

impl Spatial for Player {
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// A static food pellet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub pos: Vec3,
    pub radius: f32,
}

impl Spatial for Food {
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// A wandering rival sphere (fixed size, never grows)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rival {
    pub id: u32,
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
    pub mass: f32,
}

impl Spatial for Rival {
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}
