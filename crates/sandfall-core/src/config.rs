//! Configuration for the Sandfall simulation

use crate::error::{ConfigError, MIN_GRID_SIZE};
use sandfall_simulation::Material;
use serde::{Deserialize, Serialize};

/// Main configuration for a simulation world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Water emitter density (0.0-1.0)
    pub water_density: f32,
    /// Sand emitter density (0.0-1.0)
    pub sand_density: f32,
    /// Salt emitter density (0.0-1.0)
    pub salt_density: f32,
    /// Oil emitter density (0.0-1.0)
    pub oil_density: f32,
    /// Initial brush material
    pub brush_material: Material,
    /// Initial pen size (doubling control value, 1-32)
    pub pen_size: u32,
    /// Denser materials sink through lighter ones when enabled
    pub particle_swaps: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 720,
            height: 480,
            water_density: 0.3,
            sand_density: 0.3,
            salt_density: 0.3,
            oil_density: 0.3,
            brush_material: Material::Wall,
            pen_size: 2,
            particle_swaps: true,
        }
    }
}

impl SimConfig {
    /// Check that the configuration describes a usable world.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_GRID_SIZE || self.height < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        for (name, value) in [
            ("water", self.water_density),
            ("sand", self.sand_density),
            ("salt", self.salt_density),
            ("oil", self.oil_density),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::DensityOutOfRange { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = SimConfig {
            width: 3,
            height: 480,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooSmall {
                width: 3,
                height: 480
            })
        );
    }

    #[test]
    fn test_rejects_density_out_of_range() {
        let config = SimConfig {
            salt_density: 1.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DensityOutOfRange {
                name: "salt",
                value: 1.5
            })
        );

        let config = SimConfig {
            oil_density: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DensityOutOfRange { name: "oil", .. })
        ));
    }

    #[test]
    fn test_minimum_grid_is_accepted() {
        let config = SimConfig {
            width: 4,
            height: 4,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
