//! Landing detection and response
//!
//! A descending player lands on the lowest platform it overlaps, as long as
//! its feet have not already sunk past that platform's midline plus slack.

use super::rect::Rect;
use super::state::{Body, Platform, Player};

/// A landing the resolver decided on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub platform_id: u32,
    /// Top edge of the platform landed on
    pub surface_y: f32,
}

/// Pick the platform a descending player would hit first
///
/// Among overlapping platforms that is the one with the greatest bottom edge;
/// the first one in world order wins a tie.
pub fn lowest_overlapping<'a>(bounds: &Rect, platforms: &'a [Platform]) -> Option<&'a Platform> {
    platforms
        .iter()
        .filter(|p| bounds.overlaps(&p.bounds()))
        .fold(None::<&Platform>, |lowest, p| match lowest {
            Some(l) if p.rect.bottom() <= l.rect.bottom() => Some(l),
            _ => Some(p),
        })
}

/// Decide whether the player lands this tick, without mutating anything
pub fn find_landing(player: &Player, platforms: &[Platform], slack: f32) -> Option<Landing> {
    // Rising players pass through platforms
    if player.vel.y <= 0.0 {
        return None;
    }

    let bounds = player.bounds();
    let lowest = lowest_overlapping(&bounds, platforms)?;
    if bounds.bottom() < lowest.rect.center_y() + slack {
        Some(Landing {
            platform_id: lowest.id,
            surface_y: lowest.rect.top(),
        })
    } else {
        None
    }
}

/// Snap the player onto a platform it lands on
///
/// Feet end `epsilon` below the surface so the next tick keeps overlapping
/// and the player stays grounded.
pub fn resolve_landing(
    player: &mut Player,
    platforms: &[Platform],
    slack: f32,
    epsilon: f32,
) -> Option<Landing> {
    let landing = find_landing(player, platforms, slack)?;
    player.pos.y = landing.surface_y + epsilon - player.size.y;
    player.vel.y = 0.0;
    player.jumping = false;
    Some(landing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    const SLACK: f32 = 10.0;
    const EPS: f32 = 0.1;

    fn platform(id: u32, x: f32, y: f32, w: f32) -> Platform {
        Platform {
            id,
            rect: Rect::new(x, y, w, 20.0),
        }
    }

    /// Player whose feet are at `bottom`, falling
    fn falling_player(x: f32, bottom: f32) -> Player {
        let mut p = Player::new(&SimConfig::default());
        p.pos.x = x;
        p.pos.y = bottom - p.size.y;
        p.vel.y = 200.0;
        p.jumping = true;
        p
    }

    #[test]
    fn test_lands_on_platform() {
        let platforms = vec![platform(1, 100.0, 300.0, 100.0)];
        let mut p = falling_player(120.0, 305.0);

        let landing = resolve_landing(&mut p, &platforms, SLACK, EPS).expect("should land");
        assert_eq!(landing.platform_id, 1);
        assert!((p.bounds().bottom() - 300.1).abs() < 1e-4);
        assert_eq!(p.vel.y, 0.0);
        assert!(!p.jumping);
    }

    #[test]
    fn test_rising_player_passes_through() {
        let platforms = vec![platform(1, 100.0, 300.0, 100.0)];
        let mut p = falling_player(120.0, 305.0);
        p.vel.y = -300.0;
        let before = p.clone();

        assert!(resolve_landing(&mut p, &platforms, SLACK, EPS).is_none());
        assert_eq!(p.pos, before.pos);
        assert_eq!(p.vel, before.vel);
        assert!(p.jumping);
    }

    #[test]
    fn test_zero_vertical_speed_does_not_land() {
        let platforms = vec![platform(1, 100.0, 300.0, 100.0)];
        let mut p = falling_player(120.0, 305.0);
        p.vel.y = 0.0;
        assert!(find_landing(&p, &platforms, SLACK).is_none());
    }

    #[test]
    fn test_sunk_past_midline_falls_through() {
        // Midline at 310, so the landing threshold is 320
        let platforms = vec![platform(1, 100.0, 300.0, 100.0)];
        let p = falling_player(120.0, 320.0);
        assert!(find_landing(&p, &platforms, SLACK).is_none());

        let p = falling_player(120.0, 319.9);
        assert!(find_landing(&p, &platforms, SLACK).is_some());
    }

    #[test]
    fn test_touching_edges_count_as_overlap() {
        let platforms = vec![platform(1, 100.0, 300.0, 100.0)];
        let p = falling_player(120.0, 300.0);
        let landing = find_landing(&p, &platforms, SLACK).expect("touching lands");
        assert_eq!(landing.surface_y, 300.0);
    }

    #[test]
    fn test_no_overlap_no_landing() {
        let platforms = vec![platform(1, 300.0, 300.0, 60.0)];
        let p = falling_player(100.0, 305.0);
        assert!(find_landing(&p, &platforms, SLACK).is_none());
    }

    #[test]
    fn test_lowest_platform_selected() {
        // Player spans 270..310; overlaps both platforms
        let platforms = vec![
            platform(1, 100.0, 260.0, 100.0),
            platform(2, 100.0, 295.0, 100.0),
        ];
        let p = falling_player(120.0, 310.0);
        let landing = find_landing(&p, &platforms, SLACK).expect("should land");
        assert_eq!(landing.platform_id, 2);
    }

    #[test]
    fn test_lowest_platform_decides_miss() {
        // Feet are past the lower platform's threshold; the upper one is not consulted
        let platforms = vec![
            platform(1, 100.0, 270.0, 100.0),
            platform(2, 100.0, 280.0, 100.0),
        ];
        let p = falling_player(120.0, 300.0);
        assert!(find_landing(&p, &platforms, SLACK).is_none());
    }

    #[test]
    fn test_tie_goes_to_first() {
        let platforms = vec![
            platform(4, 100.0, 300.0, 50.0),
            platform(9, 140.0, 300.0, 50.0),
        ];
        let p = falling_player(130.0, 305.0);
        let landing = find_landing(&p, &platforms, SLACK).expect("should land");
        assert_eq!(landing.platform_id, 4);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn landing_requires_descent_and_threshold(
                vy in -500.0f32..500.0,
                bottom in 280.0f32..340.0,
            ) {
                let platforms = vec![platform(1, 100.0, 300.0, 100.0)];
                let mut p = falling_player(120.0, bottom);
                p.vel.y = vy;
                let before = p.clone();

                match resolve_landing(&mut p, &platforms, SLACK, EPS) {
                    Some(_) => {
                        prop_assert!(vy > 0.0);
                        prop_assert!(bottom < 320.0);
                        prop_assert_eq!(p.vel.y, 0.0);
                    }
                    None => {
                        prop_assert_eq!(p.pos, before.pos);
                        prop_assert_eq!(p.vel, before.vel);
                    }
                }
            }
        }
    }
}
