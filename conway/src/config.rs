// config.rs - Simulation and display settings

use std::time::Duration;

use crate::error::ConfigError;

// Compile-time defaults
pub const GRID_SIZE: usize = 200;                        // Cells per side
pub const POPULATION: f64 = 0.03;                        // Chance a seeded cell starts alive
pub const SCALE: f32 = 4.0;                              // Pixels per cell
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
pub const PATTERN_OFFSET: usize = 10;                    // Where "generate" stamps its pattern

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub grid_size: usize,
    pub population: f64,
    pub scale: f32,
    pub tick_interval: Duration,
    pub pattern_offset: usize,
    /// Stop ticking once a generation repeats one of the recent ones.
    pub pause_on_cycle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            population: POPULATION,
            scale: SCALE,
            tick_interval: TICK_INTERVAL,
            pattern_offset: PATTERN_OFFSET,
            pause_on_cycle: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.grid_size.checked_mul(self.grid_size).is_none() {
            return Err(ConfigError::TooLarge(self.grid_size));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Side length of the drawing surface in pixels.
    pub fn canvas_size(&self) -> f32 {
        self.grid_size as f32 * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.canvas_size(), 800.0);
    }

    #[test]
    fn rejects_degenerate_values() {
        let zero = Config { grid_size: 0, ..Config::default() };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroSize));

        let huge = Config { grid_size: 5_000_000_000, ..Config::default() };
        assert_eq!(huge.validate(), Err(ConfigError::TooLarge(5_000_000_000)));

        let flat = Config { scale: 0.0, ..Config::default() };
        assert_eq!(flat.validate(), Err(ConfigError::InvalidScale(0.0)));

        let nan = Config { scale: f32::NAN, ..Config::default() };
        assert!(matches!(nan.validate(), Err(ConfigError::InvalidScale(_))));

        let frozen = Config { tick_interval: Duration::ZERO, ..Config::default() };
        assert_eq!(frozen.validate(), Err(ConfigError::ZeroInterval));
    }
}
