//! World scrolling and platform recycling
//!
//! When the player climbs into the top quarter of the viewport the whole world
//! shifts down by the player's per-tick ascent. Platforms pushed off the bottom
//! are recycled for score.

use super::state::{Player, World};
use crate::config::SimConfig;

/// What one scroll pass did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollResult {
    /// Downward shift applied to every entity (0 when no scroll happened)
    pub delta: f32,
    /// Recycled platform IDs, in world order
    pub recycled: Vec<u32>,
}

/// Top edge at or above which the world scrolls
pub fn scroll_line(config: &SimConfig) -> f32 {
    config.viewport_height as f32 / 4.0
}

/// Shift the world if the player is high enough, then recycle fallen platforms
pub fn scroll_world(player: &mut Player, world: &mut World, config: &SimConfig, dt: f32) -> ScrollResult {
    let top = player.pos.y;
    if top > scroll_line(config) {
        return ScrollResult::default();
    }

    // Velocity that carried the player up here, before anything is shifted
    let delta = player.vel.y.abs() * dt;
    player.pos.y += delta;

    let floor = config.viewport_height as f32;
    let mut recycled = Vec::new();
    world.platforms.retain_mut(|p| {
        p.rect.y += delta;
        if p.rect.top() >= floor {
            recycled.push(p.id);
            false
        } else {
            true
        }
    });

    let count = u32::try_from(recycled.len()).unwrap_or(u32::MAX);
    let points = count.saturating_mul(config.score_increment);
    if points > 0 {
        world.award(points);
        log::debug!(
            "Recycled {} platform(s) {:?}, score now {}",
            recycled.len(),
            recycled,
            world.score()
        );
    }

    ScrollResult { delta, recycled }
}
