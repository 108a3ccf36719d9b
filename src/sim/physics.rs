//! Player kinematics
//!
//! Gravity, held horizontal input, integration and horizontal wrap-around.
//! Pure functions of the player state and `dt`.

use super::state::{Horizontal, Player};

/// Below this horizontal speed (pixels/s) friction stops the player dead
const REST_SPEED: f32 = 1.0;

/// Advance the player by one fixed timestep
pub fn step(player: &mut Player, dt: f32) {
    apply_gravity(player, dt);
    apply_horizontal(player, dt);
    player.pos += player.vel * dt;
    wrap_horizontal(player);
}

/// Constant downward acceleration, capped at terminal speed
pub fn apply_gravity(player: &mut Player, dt: f32) {
    player.vel.y = (player.vel.y + player.motion.gravity * dt).min(player.motion.max_fall_speed);
}

/// Held direction sets speed directly; no input lets friction bleed it off
pub fn apply_horizontal(player: &mut Player, dt: f32) {
    let m = player.motion;
    let vx = match player.intent {
        Horizontal::Left | Horizontal::Right => player.intent.sign() * m.move_speed,
        Horizontal::None => {
            let decayed = player.vel.x * (1.0 - m.friction * dt).max(0.0);
            if decayed.abs() < REST_SPEED { 0.0 } else { decayed }
        }
    };
    player.vel.x = vx.clamp(-m.max_horizontal_speed, m.max_horizontal_speed);
}

/// Leaving one side of the viewport re-enters from the other
///
/// The band is measured on the top-left x, so the box is fully off screen
/// before it wraps right but still half visible when it wraps left.
pub fn wrap_horizontal(player: &mut Player) {
    let half = player.half_width();
    let width = player.motion.wrap_width;
    if player.pos.x > width + half {
        player.pos.x = -half;
    } else if player.pos.x < -half {
        player.pos.x = width + half;
    }
}

/// Jump only from the ground; airborne requests are ignored
pub fn jump(player: &mut Player) -> bool {
    if player.jumping {
        return false;
    }
    player.vel.y = -player.motion.jump_speed;
    player.jumping = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::state::Body;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn player() -> Player {
        Player::new(&SimConfig::default())
    }

    #[test]
    fn test_gravity_accelerates_down() {
        let mut p = player();
        let y0 = p.pos.y;
        p.tick(DT);
        assert!((p.vel.y - 2880.0 * DT).abs() < 1e-3);
        assert!(p.pos.y > y0);
    }

    #[test]
    fn test_fall_speed_capped() {
        let mut p = player();
        for _ in 0..200 {
            p.tick(DT);
        }
        assert_eq!(p.vel.y, p.motion.max_fall_speed);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut p = player();
        assert!(p.jump());
        assert_eq!(p.vel.y, -1200.0);
        assert!(p.jumping);

        p.tick(DT);
        let vy = p.vel.y;
        assert!(!p.jump(), "airborne jump must be a no-op");
        assert_eq!(p.vel.y, vy);
    }

    #[test]
    fn test_held_direction_sets_speed() {
        let mut p = player();
        p.intent = Horizontal::Right;
        p.tick(DT);
        assert_eq!(p.vel.x, 300.0);

        p.intent = Horizontal::Left;
        p.tick(DT);
        assert_eq!(p.vel.x, -300.0);
    }

    #[test]
    fn test_friction_decays_to_rest() {
        let mut p = player();
        p.vel.x = 300.0;
        p.tick(DT);
        assert!(p.vel.x > 0.0 && p.vel.x < 300.0);
        for _ in 0..120 {
            p.tick(DT);
        }
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_speed_clamped() {
        let mut p = player();
        p.motion.move_speed = 1000.0;
        p.intent = Horizontal::Right;
        p.tick(DT);
        assert_eq!(p.vel.x, p.motion.max_horizontal_speed);
    }

    #[test]
    fn test_wrap_right_to_left() {
        let mut p = player();
        p.pos.x = 480.0 + 15.0 + 0.5;
        p.vel = Vec2::new(120.0, -40.0);
        wrap_horizontal(&mut p);
        assert_eq!(p.pos.x, -15.0);
        assert_eq!(p.vel, Vec2::new(120.0, -40.0));
    }

    #[test]
    fn test_wrap_left_to_right() {
        let mut p = player();
        p.pos.x = -15.5;
        wrap_horizontal(&mut p);
        assert_eq!(p.pos.x, 495.0);
    }

    #[test]
    fn test_wrap_edges_measured_from_left_edge() {
        // Right side: the box is entirely past the viewport before wrapping
        let mut p = player();
        p.pos.x = 480.0 + 14.0;
        wrap_horizontal(&mut p);
        assert_eq!(p.pos.x, 494.0);
        assert!(p.bounds().left() > 480.0);

        // Left side: wraps while half the box is still on screen
        p.pos.x = -15.5;
        assert!(p.bounds().right() > 0.0);
        wrap_horizontal(&mut p);
        assert_eq!(p.pos.x, 495.0);
    }

    #[test]
    fn test_no_wrap_inside_band() {
        let mut p = player();
        p.pos.x = 494.0;
        wrap_horizontal(&mut p);
        assert_eq!(p.pos.x, 494.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fall_speed_never_exceeds_cap(
                vy in -2000.0f32..2000.0,
                ticks in 1usize..300
            ) {
                let mut p = player();
                p.vel.y = vy;
                for _ in 0..ticks {
                    p.tick(DT);
                    prop_assert!(p.vel.y <= p.motion.max_fall_speed);
                }
            }

            #[test]
            fn position_stays_in_wrap_band(
                x in -15.0f32..495.0,
                intents in proptest::collection::vec(0u8..3, 1..200)
            ) {
                let mut p = player();
                p.pos.x = x;
                for i in intents {
                    p.intent = match i {
                        0 => Horizontal::Left,
                        1 => Horizontal::None,
                        _ => Horizontal::Right,
                    };
                    p.tick(DT);
                    let half = p.half_width();
                    prop_assert!(p.pos.x >= -half && p.pos.x <= p.motion.wrap_width + half);
                    prop_assert!(p.vel.x.abs() <= p.motion.max_horizontal_speed);
                }
            }
        }
    }
}
