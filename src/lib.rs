//! Sky Hopper - an endless vertical platform jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, landings, scrolling, spawning, game phases)
//! - `config`: Validated, data-driven tuning
//! - `host`: Host input translation
//! - `view`: Render boundary snapshots
//! - `runner`: Fixed timestep drivers

pub mod config;
pub mod host;
pub mod runner;
pub mod sim;
pub mod view;

pub use config::{ConfigError, PlatformSpec, SimConfig};
pub use sim::{Control, Event, Game, GamePhase, Horizontal};
pub use view::Frame;

/// Default tuning (classic 480x600 layout at 60 Hz)
pub mod consts {
    pub const TITLE: &str = "Sky Hopper";

    /// Viewport dimensions (pixels)
    pub const VIEWPORT_WIDTH: u32 = 480;
    pub const VIEWPORT_HEIGHT: u32 = 600;

    /// Simulation rate
    pub const TICK_RATE: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the accumulator will absorb (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Player body (pixels)
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 2880.0;
    /// Upward launch speed of a jump (pixels/s)
    pub const JUMP_SPEED: f32 = 1200.0;
    /// Terminal fall speed (pixels/s)
    pub const MAX_FALL_SPEED: f32 = 900.0;
    /// Horizontal speed while a direction is held (pixels/s)
    pub const MOVE_SPEED: f32 = 300.0;
    pub const MAX_HORIZONTAL_SPEED: f32 = 300.0;
    /// Fraction of horizontal speed shed per second with no input
    pub const FRICTION: f32 = 7.2;

    /// Landing tolerance below a platform's midline (pixels)
    pub const LANDING_SLACK: f32 = 10.0;
    /// Overlap kept after a landing so the next tick lands again
    pub const LANDING_EPSILON: f32 = 0.1;

    /// Spawner
    pub const MIN_PLATFORMS: usize = 6;
    pub const PLATFORM_MIN_WIDTH: u32 = 50;
    pub const PLATFORM_MAX_WIDTH: u32 = 100;
    pub const PLATFORM_HEIGHT: u32 = 20;
    pub const SPAWN_Y_MIN: i32 = -75;
    pub const SPAWN_Y_MAX: i32 = -30;

    /// Scoring
    pub const SCORE_INCREMENT: u32 = 10;
    pub const ARRIVAL_SCORE: u32 = 100;

    /// Minimum upward shift applied on the frame the player falls off
    pub const FALL_AWAY_MIN: f32 = 10.0;
}
