//! Fixed timestep simulation tick
//!
//! Advances one Playing session deterministically:
//! physics -> landing -> scroll -> spawn -> end conditions.

use super::collision::resolve_landing;
use super::scroll::scroll_world;
use super::spawn::replenish;
use super::state::{Body, Session};
use crate::config::SimConfig;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player dropped below the viewport
    FellOff,
    /// Score target reached
    Arrived,
}

/// Everything that happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Platform the player landed on
    pub landed_on: Option<u32>,
    /// Downward world shift this tick
    pub scrolled: f32,
    /// Platforms recycled by the scroll
    pub recycled: Vec<u32>,
    /// Platforms created by the spawner
    pub spawned: Vec<u32>,
    pub outcome: Option<Outcome>,
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut Session, config: &SimConfig, dt: f32) -> TickReport {
    session.time_ticks += 1;

    session.player.tick(dt);
    for platform in &mut session.world.platforms {
        platform.tick(dt);
    }

    let landing = resolve_landing(
        &mut session.player,
        &session.world.platforms,
        config.landing_slack,
        config.landing_epsilon,
    );
    if let Some(landing) = landing {
        log::trace!("Tick {}: landed on platform {}", session.time_ticks, landing.platform_id);
    }

    let scroll = scroll_world(&mut session.player, &mut session.world, config, dt);
    let spawned = replenish(&mut session.world, &mut session.rng, config);

    let outcome = check_outcome(session, config);
    if outcome == Some(Outcome::FellOff) {
        fall_away(session, config, dt);
    }

    TickReport {
        landed_on: landing.map(|l| l.platform_id),
        scrolled: scroll.delta,
        recycled: scroll.recycled,
        spawned,
        outcome,
    }
}

/// End conditions, fall-death first: it wins when both hold on the same tick
pub fn check_outcome(session: &Session, config: &SimConfig) -> Option<Outcome> {
    if session.player.bounds().bottom() > config.viewport_height as f32 {
        Some(Outcome::FellOff)
    } else if session.score() >= config.arrival_score {
        Some(Outcome::Arrived)
    } else {
        None
    }
}

/// Final frame of a fall: lift everything so the player drops out of view,
/// discarding platforms pushed above the top edge (no score)
fn fall_away(session: &mut Session, config: &SimConfig, dt: f32) {
    let shift = (session.player.vel.y * dt).max(config.fall_away_min);
    session.player.pos.y -= shift;
    session.world.platforms.retain_mut(|p| {
        p.rect.y -= shift;
        p.rect.bottom() >= 0.0
    });
}
