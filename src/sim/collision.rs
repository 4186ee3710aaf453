//! Sphere-sphere collision predicates
//!
//! Pure geometry over anything implementing [`Spatial`].

use super::entity::Spatial;

/// Euclidean distance between two bodies' centers
#[inline]
pub fn distance(a: &impl Spatial, b: &impl Spatial) -> f32 {
    a.position().distance(b.position())
}

/// True when the spheres overlap. Touching spheres do not collide.
#[inline]
pub fn collides(a: &impl Spatial, b: &impl Spatial) -> bool {
    distance(a, b) < a.radius() + b.radius()
}

/// True when `eater` is large enough to swallow `prey` (strictly beyond the margin)
#[inline]
pub fn dominates(eater_radius: f32, prey_radius: f32, margin: f32) -> bool {
    eater_radius > prey_radius * margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Food, Rival};
    use glam::Vec3;

    fn food(pos: Vec3, radius: f32) -> Food {
        Food { id: 0, pos, radius }
    }

    #[test]
    fn test_distance() {
        let a = food(Vec3::new(0.0, 0.0, 0.0), 0.5);
        let b = food(Vec3::new(3.0, 4.0, 12.0), 0.5);
        assert!((distance(&a, &b) - 13.0).abs() < 1e-5);
        assert!((distance(&b, &a) - 13.0).abs() < 1e-5);
    }

    #[test]
    fn test_overlap_collides() {
        let a = food(Vec3::ZERO, 1.0);
        let b = food(Vec3::new(1.5, 0.0, 0.0), 1.0);
        assert!(collides(&a, &b));
        assert!(collides(&b, &a));
    }

    #[test]
    fn test_touching_does_not_collide() {
        let a = food(Vec3::ZERO, 1.0);
        let b = food(Vec3::new(2.0, 0.0, 0.0), 1.0);
        assert!(!collides(&a, &b));
    }

    #[test]
    fn test_mixed_roles() {
        let f = food(Vec3::new(0.0, 3.0, 0.0), 0.5);
        let r = Rival {
            id: 1,
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            radius: 2.6,
            mass: 0.0,
        };
        assert!(collides(&f, &r));
        assert!(collides(&r, &f));
    }

    #[test]
    fn test_dominates() {
        assert!(dominates(10.0, 9.0, 1.1));
        assert!(!dominates(10.0, 9.3, 1.1));
        assert!(!dominates(9.3, 10.0, 1.1));
        assert!(dominates(6.0, 5.0, 1.1));
    }
}
