//! Game state and core simulation types
//!
//! Everything a single run mutates lives in [`Session`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::physics;
use super::rect::Rect;
use crate::config::SimConfig;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    StartScreen,
    /// Active gameplay
    Playing,
    /// Player fell off the bottom of the viewport
    GameOver,
    /// Score target reached
    Arrival,
}

impl GamePhase {
    /// End screens wait for confirm before a new session starts
    pub fn is_end_screen(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Arrival)
    }
}

/// Held horizontal input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Horizontal {
    Left,
    #[default]
    None,
    Right,
}

impl Horizontal {
    pub fn sign(&self) -> f32 {
        match self {
            Horizontal::Left => -1.0,
            Horizontal::None => 0.0,
            Horizontal::Right => 1.0,
        }
    }
}

/// Something that advances each tick and occupies a rectangle
pub trait Body {
    fn tick(&mut self, dt: f32);
    fn bounds(&self) -> Rect;
}

/// Motion constants the player integrates with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub gravity: f32,
    pub jump_speed: f32,
    pub max_fall_speed: f32,
    pub move_speed: f32,
    pub max_horizontal_speed: f32,
    pub friction: f32,
    /// Width of the band the player wraps around
    pub wrap_width: f32,
}

impl Motion {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            gravity: config.gravity,
            jump_speed: config.jump_speed,
            max_fall_speed: config.max_fall_speed,
            move_speed: config.move_speed,
            max_horizontal_speed: config.max_horizontal_speed,
            friction: config.friction,
            wrap_width: config.viewport_width as f32,
        }
    }
}

/// The player body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Airborne after a jump, cleared on landing
    pub jumping: bool,
    pub intent: Horizontal,
    pub motion: Motion,
}

impl Player {
    /// Spawn centered horizontally with feet at mid-screen
    pub fn new(config: &SimConfig) -> Self {
        let size = config.player_size();
        let view = config.viewport_size();
        Self {
            pos: Vec2::new(view.x / 2.0 - size.x / 2.0, view.y / 2.0 - size.y),
            vel: Vec2::ZERO,
            size,
            jumping: false,
            intent: Horizontal::None,
            motion: Motion::from_config(config),
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    /// Launch upward if grounded. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        physics::jump(self)
    }
}

impl Body for Player {
    fn tick(&mut self, dt: f32) {
        physics::step(self, dt);
    }

    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// A platform entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub rect: Rect,
}

impl Body for Platform {
    // Platforms only move when the world scrolls
    fn tick(&mut self, _dt: f32) {}

    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Live platforms and the score they have earned
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    /// Live platforms in insertion order
    pub platforms: Vec<Platform>,
    score: u32,
    /// Next platform ID
    next_id: u32,
}

impl World {
    /// Build the starting world from a fixed layout
    pub fn from_layout(config: &SimConfig) -> Self {
        let mut world = Self {
            platforms: Vec::with_capacity(config.initial_layout.len().max(config.min_platforms)),
            score: 0,
            next_id: 1,
        };
        for spec in &config.initial_layout {
            world.add_platform(spec.rect());
        }
        world
    }

    /// Insert a platform, returning its fresh ID
    pub fn add_platform(&mut self, rect: Rect) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.platforms.push(Platform { id, rect });
        id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// IDs are handed out monotonically, so live IDs must be strictly increasing
    pub fn assert_unique_ids(&self) {
        assert!(
            self.platforms.windows(2).all(|w| w[0].id < w[1].id),
            "duplicate or out-of-order platform ids"
        );
    }
}

/// One run of the game: everything between a confirm and an end screen
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the spawner RNG was created from
    pub seed: u64,
    pub player: Player,
    pub world: World,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Session {
    /// Fresh session: score 0, new player, initial layout
    pub fn new(config: &SimConfig, seed: u64) -> Self {
        Self {
            seed,
            player: Player::new(config),
            world: World::from_layout(config),
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.world.score()
    }
}
