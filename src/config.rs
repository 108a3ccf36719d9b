//! Simulation configuration
//!
//! Every tuning constant the core uses lives here. Defaults come from
//! [`crate::consts`]; hosts may override any subset from JSON.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Rect;

/// Why a configuration was refused
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("platform width range [{min}, {max}) is empty")]
    InvalidWidthRange { min: u32, max: u32 },

    #[error("platform max width {max} does not fit a viewport {viewport} pixels wide")]
    WidthRangeExceedsViewport { max: u32, viewport: u32 },

    #[error("platform spawn height range [{min}, {max}) is empty")]
    InvalidSpawnRange { min: i32, max: i32 },

    #[error("platform height must be at least 1 pixel")]
    ZeroPlatformHeight,

    #[error("minimum platform count must be at least 1")]
    ZeroMinPlatforms,

    #[error("score increment must be at least 1")]
    ZeroScoreIncrement,

    #[error("arrival score must be at least 1")]
    ZeroArrivalScore,

    #[error("initial platform layout is empty")]
    EmptyLayout,

    #[error("initial platform {index} has invalid size {width}x{height}")]
    InvalidLayoutPlatform { index: usize, width: f32, height: f32 },

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A fixed platform of the starting layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlatformSpec {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Layout every session starts from: a full-width floor plus a ladder of ledges
pub fn default_layout() -> Vec<PlatformSpec> {
    let w = VIEWPORT_WIDTH as f32;
    let h = VIEWPORT_HEIGHT as f32;
    vec![
        PlatformSpec::new(0.0, h - 40.0, w, 40.0),
        PlatformSpec::new(w / 2.0 - 50.0, h * 3.0 / 4.0, 100.0, 20.0),
        PlatformSpec::new(125.0, h - 350.0, 100.0, 20.0),
        PlatformSpec::new(350.0, 200.0, 100.0, 20.0),
        PlatformSpec::new(175.0, 100.0, 50.0, 20.0),
    ]
}

/// Tuning for one game, shared by every session it runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub title: String,

    // === Viewport & timing ===
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub tick_rate: u32,

    // === Player motion ===
    pub player_width: f32,
    pub player_height: f32,
    pub gravity: f32,
    pub jump_speed: f32,
    pub max_fall_speed: f32,
    pub move_speed: f32,
    pub max_horizontal_speed: f32,
    pub friction: f32,

    // === Landing ===
    pub landing_slack: f32,
    pub landing_epsilon: f32,

    // === Spawner ===
    pub min_platforms: usize,
    pub platform_min_width: u32,
    pub platform_max_width: u32,
    pub platform_height: u32,
    pub spawn_y_min: i32,
    pub spawn_y_max: i32,

    // === Scoring & end conditions ===
    pub score_increment: u32,
    pub arrival_score: u32,
    pub fall_away_min: f32,

    pub initial_layout: Vec<PlatformSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),

            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            tick_rate: TICK_RATE,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            move_speed: MOVE_SPEED,
            max_horizontal_speed: MAX_HORIZONTAL_SPEED,
            friction: FRICTION,

            landing_slack: LANDING_SLACK,
            landing_epsilon: LANDING_EPSILON,

            min_platforms: MIN_PLATFORMS,
            platform_min_width: PLATFORM_MIN_WIDTH,
            platform_max_width: PLATFORM_MAX_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            spawn_y_min: SPAWN_Y_MIN,
            spawn_y_max: SPAWN_Y_MAX,

            score_increment: SCORE_INCREMENT,
            arrival_score: ARRIVAL_SCORE,
            fall_away_min: FALL_AWAY_MIN,

            initial_layout: default_layout(),
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Fixed timestep in seconds
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport_width as f32, self.viewport_height as f32)
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }

    /// Reject tuning that would produce undefined motion
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("gravity", self.gravity)?;
        positive("jump_speed", self.jump_speed)?;
        positive("max_fall_speed", self.max_fall_speed)?;
        positive("move_speed", self.move_speed)?;
        positive("max_horizontal_speed", self.max_horizontal_speed)?;
        non_negative("friction", self.friction)?;
        non_negative("landing_slack", self.landing_slack)?;
        non_negative("landing_epsilon", self.landing_epsilon)?;
        non_negative("fall_away_min", self.fall_away_min)?;

        if self.min_platforms == 0 {
            return Err(ConfigError::ZeroMinPlatforms);
        }
        if self.platform_min_width == 0 || self.platform_min_width >= self.platform_max_width {
            return Err(ConfigError::InvalidWidthRange {
                min: self.platform_min_width,
                max: self.platform_max_width,
            });
        }
        if self.platform_max_width > self.viewport_width {
            return Err(ConfigError::WidthRangeExceedsViewport {
                max: self.platform_max_width,
                viewport: self.viewport_width,
            });
        }
        if self.platform_height == 0 {
            return Err(ConfigError::ZeroPlatformHeight);
        }
        if self.spawn_y_min >= self.spawn_y_max {
            return Err(ConfigError::InvalidSpawnRange {
                min: self.spawn_y_min,
                max: self.spawn_y_max,
            });
        }

        if self.score_increment == 0 {
            return Err(ConfigError::ZeroScoreIncrement);
        }
        if self.arrival_score == 0 {
            return Err(ConfigError::ZeroArrivalScore);
        }

        if self.initial_layout.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }
        for (index, spec) in self.initial_layout.iter().enumerate() {
            if !(spec.width > 0.0 && spec.height > 0.0) {
                return Err(ConfigError::InvalidLayoutPlatform {
                    index,
                    width: spec.width,
                    height: spec.height,
                });
            }
        }

        Ok(())
    }
}

// NaN fails both checks
fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
