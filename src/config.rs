//! Simulation configuration
//!
//! Everything the collaborator layer may tune at `init`/`reset` time.
//! Missing JSON fields fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_START_MASS;
use crate::error::{Result, SimError};

/// Init-time world configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Full width of the world on x and z (bounds are ±world_size/2)
    pub world_size: f32,
    /// Food population maintained every tick
    pub food_target: usize,
    /// Rivals spawned at init (never replenished)
    pub rival_target: usize,
    /// Player distance per tick at full speed
    pub player_speed: f32,
    /// Player mass at init and after every reset
    ///
    /// Radius is `sqrt(mass / π)`, so the default of 400 starts the player at
    /// radius ~11.28: already at the speed floor and larger than any rival
    /// (max radius 4.5), which means the default world cannot reach game over.
    /// Use `4π` (~12.57) for a radius-2 start where rivals are a threat.
    pub player_start_mass: f32,
    /// RNG seed; `None` picks a random one at init
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_size: 200.0,
            food_target: 300,
            rival_target: 8,
            player_speed: 0.5,
            player_start_mass: PLAYER_START_MASS,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Same config with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configs that would produce a degenerate world
    pub fn validate(&self) -> Result<()> {
        // Half-extent must be a normal positive float or spawn ranges collapse
        let half = self.half_extent();
        if !half.is_normal() || half < 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "world_size must be positive, got {}",
                self.world_size
            )));
        }
        if self.food_target == 0 {
            return Err(SimError::InvalidConfiguration(
                "food_target must be positive".to_string(),
            ));
        }
        if self.rival_target == 0 {
            return Err(SimError::InvalidConfiguration(
                "rival_target must be positive".to_string(),
            ));
        }
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "player_speed must be non-negative, got {}",
                self.player_speed
            )));
        }
        if !self.player_start_mass.is_finite() || self.player_start_mass <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "player_start_mass must be positive, got {}",
                self.player_start_mass
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!("Loaded simulation config: {:?}", config);
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Half-extent of the world on x and z
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.world_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world_size, 200.0);
        assert_eq!(config.food_target, 300);
        assert_eq!(config.rival_target, 8);
        assert_eq!(config.player_speed, 0.5);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let bad = [
            SimConfig { world_size: 0.0, ..Default::default() },
            SimConfig { world_size: -5.0, ..Default::default() },
            SimConfig { world_size: f32::NAN, ..Default::default() },
            SimConfig { world_size: f32::INFINITY, ..Default::default() },
            // Smallest subnormal: halving it rounds to zero
            SimConfig { world_size: f32::from_bits(1), ..Default::default() },
            SimConfig { food_target: 0, ..Default::default() },
            SimConfig { rival_target: 0, ..Default::default() },
        ];
        for config in &bad {
            assert!(matches!(
                config.validate(),
                Err(SimError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_subnormal_world_fails_instead_of_panicking() {
        let config = SimConfig {
            world_size: f32::from_bits(1),
            seed: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            crate::Simulation::new(config),
            Err(SimError::InvalidConfiguration(_))
        ));

        // Smallest world whose half-extent is still normal is accepted
        let tiny = SimConfig {
            world_size: f32::MIN_POSITIVE * 2.0,
            ..Default::default()
        };
        assert!(tiny.validate().is_ok());
    }

    #[test]
    fn test_default_start_mass_outgrows_every_rival() {
        use crate::consts::{DOMINANCE_MARGIN, RIVAL_RADIUS_MAX};
        use crate::radius_for_mass;

        let start = radius_for_mass(SimConfig::default().player_start_mass);
        assert!(start > RIVAL_RADIUS_MAX * DOMINANCE_MARGIN);

        // A 4π start gives radius 2, which larger rivals can beat
        let small = radius_for_mass(4.0 * std::f32::consts::PI);
        assert!((small - 2.0).abs() < 1e-5);
        assert!(RIVAL_RADIUS_MAX > small * DOMINANCE_MARGIN);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json(r#"{ "food_target": 50, "seed": 7 }"#).unwrap();
        assert_eq!(config.food_target, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.rival_target, 8);
        assert_eq!(config.world_size, 200.0);
    }

    #[test]
    fn test_json_validation_error() {
        let err = SimConfig::from_json(r#"{ "rival_target": 0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration(_)));

        let err = SimConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, SimError::ConfigParse(_)));
    }
}
