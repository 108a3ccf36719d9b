//! Procedural platform spawning
//!
//! Keeps the world stocked with a minimum number of platforms. New platforms
//! appear just above the visible area so they scroll into view.

use rand::Rng;

use super::rect::Rect;
use super::state::World;
use crate::config::SimConfig;

/// Roll one platform rectangle
///
/// Width in `[platform_min_width, platform_max_width)`, x in
/// `[0, viewport_width - width)`, y in `[spawn_y_min, spawn_y_max)`, all whole
/// pixels.
pub fn roll_platform<R: Rng + ?Sized>(rng: &mut R, config: &SimConfig) -> Rect {
    let width = rng.random_range(config.platform_min_width..config.platform_max_width);
    let x = rng.random_range(0..config.viewport_width - width);
    let y = rng.random_range(config.spawn_y_min..config.spawn_y_max);
    Rect::new(x as f32, y as f32, width as f32, config.platform_height as f32)
}

/// Spawn platforms until the world holds at least `min_platforms`
///
/// Returns the IDs of the new platforms.
pub fn replenish<R: Rng + ?Sized>(world: &mut World, rng: &mut R, config: &SimConfig) -> Vec<u32> {
    let mut spawned = Vec::new();
    while world.len() < config.min_platforms {
        let rect = roll_platform(rng, config);
        let id = world.add_platform(rect);
        log::debug!(
            "Spawned platform {} at ({}, {}) width {}",
            id,
            rect.x,
            rect.y,
            rect.w
        );
        spawned.push(id);
    }

    assert!(world.len() >= config.min_platforms);
    world.assert_unique_ids();
    spawned
}
