//! World geometry and pacing, validated once at startup
//!
//! A gap too tall for the world would leave the spawner an empty range and
//! produce malformed pipes, so bad geometry aborts startup instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::GameMode;
use crate::sprite::Appearance;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("world dimensions must be positive, got {width}x{height}")]
    NonPositiveWorld { width: f32, height: f32 },
    #[error("pipe width must be positive, got {0}")]
    NonPositivePipeWidth(f32),
    #[error("min segment height must be positive, got {0}")]
    NonPositiveMinSegment(f32),
    #[error(
        "{mode:?} gap of {gap}px leaves no room for two {min_segment}px segments in a {world_height}px world"
    )]
    GapTooTall {
        mode: GameMode,
        gap: f32,
        min_segment: f32,
        world_height: f32,
    },
    #[error("scroll speed must be positive, got {0}")]
    NonPositiveSpeed(f32),
    #[error("spawn interval must be at least 1 frame")]
    ZeroSpawnInterval,
}

/// World geometry and tuning. Construct, then call [`WorldConfig::validated`]
/// before handing it to the simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub pipe_width: f32,
    pub min_segment_height: f32,
    pub gap_height_normal: f32,
    pub gap_height_easy: f32,
    pub scroll_speed: f32,
    pub spawn_interval: u64,
    /// How spawned pipes are drawn: flat fill or sprite image
    pub pipe_appearance: Appearance,
    pub bird_appearance: Appearance,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            min_segment_height: MIN_SEGMENT_HEIGHT,
            gap_height_normal: GAP_HEIGHT_NORMAL,
            gap_height_easy: GAP_HEIGHT_EASY,
            scroll_speed: SCROLL_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            pipe_appearance: Appearance::SolidColor(crate::sprite::PIPE_GREEN),
            bird_appearance: Appearance::SolidColor(crate::sprite::BIRD_YELLOW),
        }
    }
}

impl WorldConfig {
    /// Gap height for the given mode, read live at every spawn
    pub fn gap_height(&self, mode: GameMode) -> f32 {
        match mode {
            GameMode::Normal => self.gap_height_normal,
            GameMode::Easy => self.gap_height_easy,
        }
    }

    /// Check every startup invariant. Any failure here is fatal: the game
    /// loop must not begin with geometry the spawner can't honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::NonPositiveWorld {
                width: self.width,
                height: self.height,
            });
        }
        if self.pipe_width <= 0.0 {
            return Err(ConfigError::NonPositivePipeWidth(self.pipe_width));
        }
        if self.min_segment_height <= 0.0 {
            return Err(ConfigError::NonPositiveMinSegment(self.min_segment_height));
        }
        for mode in [GameMode::Normal, GameMode::Easy] {
            let gap = self.gap_height(mode);
            // Valid gap centers span [min + gap/2, height - min - gap/2];
            // the range is empty when both segments can't fit
            if 2.0 * self.min_segment_height + gap > self.height {
                return Err(ConfigError::GapTooTall {
                    mode,
                    gap,
                    min_segment: self.min_segment_height,
                    world_height: self.height,
                });
            }
        }
        if self.scroll_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.scroll_speed));
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        Ok(())
    }

    /// Validate and return self, for one-line startup wiring
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn gap_taller_than_world_is_rejected() {
        let config = WorldConfig {
            gap_height_easy: 480.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapTooTall {
                mode: GameMode::Easy,
                ..
            })
        ));
    }

    #[test]
    fn gap_that_exactly_fits_is_allowed() {
        // 2 * 30 + 420 == 480: the spawn range collapses to a single center
        let config = WorldConfig {
            gap_height_easy: 420.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn degenerate_worlds_are_rejected() {
        let config = WorldConfig {
            height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveWorld { .. })
        ));

        let config = WorldConfig {
            spawn_interval: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSpawnInterval));
    }

    #[test]
    fn gap_height_follows_mode() {
        let config = WorldConfig::default();
        assert_eq!(config.gap_height(GameMode::Normal), 130.0);
        assert_eq!(config.gap_height(GameMode::Easy), 180.0);
    }
}
