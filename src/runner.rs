//! Simulation drivers
//!
//! - [`FixedTimestep`]: turns variable frame times into whole simulation ticks
//! - [`EventSource`]: where each tick's events come from
//! - [`run_ticks`]: headless driver used by the binary and the tests

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS};
use crate::host::EventQueue;
use crate::sim::{Control, Event, Game, GamePhase};
use crate::view::Frame;

/// Supplies the events for one tick
pub trait EventSource {
    /// Drain everything pending; called exactly once per tick
    fn poll(&mut self, phase: GamePhase) -> Vec<Event>;
}

impl EventSource for EventQueue {
    fn poll(&mut self, _phase: GamePhase) -> Vec<Event> {
        self.drain()
    }
}

/// Scripted player: repeats a pattern while playing and confirms through
/// menus until it has played `max_sessions`, then quits
#[derive(Debug, Clone)]
pub struct Autopilot {
    pattern: Vec<Vec<Event>>,
    cursor: usize,
    sessions: u32,
    max_sessions: u32,
}

impl Autopilot {
    pub fn new(pattern: Vec<Vec<Event>>, max_sessions: u32) -> Self {
        Self {
            pattern,
            cursor: 0,
            sessions: 0,
            max_sessions,
        }
    }

    /// Press jump every tick, no horizontal movement
    pub fn hold_jump(max_sessions: u32) -> Self {
        Self::new(vec![vec![Event::Jump]], max_sessions)
    }

    pub fn sessions(&self) -> u32 {
        self.sessions
    }
}

impl EventSource for Autopilot {
    fn poll(&mut self, phase: GamePhase) -> Vec<Event> {
        if phase == GamePhase::Playing {
            if self.pattern.is_empty() {
                return Vec::new();
            }
            let events = self.pattern[self.cursor % self.pattern.len()].clone();
            self.cursor += 1;
            return events;
        }

        if self.sessions < self.max_sessions {
            self.sessions += 1;
            self.cursor = 0;
            vec![Event::Confirm]
        } else {
            vec![Event::Quit]
        }
    }
}

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Add one frame's elapsed time, return how many ticks to run now
    ///
    /// Long frames are clamped and at most `max_substeps` ticks run, so a
    /// stall never snowballs.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            self.accumulator -= self.dt;
            substeps += 1;
        }
        // Drop what could not be simulated this frame
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.dt);
        }
        substeps
    }
}

/// How a headless run ended
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Stopped by Quit rather than the tick limit
    pub exited: bool,
    pub sessions: u32,
    pub final_frame: Frame,
}

/// Drive the game for up to `max_ticks`, polling `source` once per tick
pub fn run_ticks<S: EventSource + ?Sized>(game: &mut Game, source: &mut S, max_ticks: u64) -> RunSummary {
    let mut ticks = 0;
    let mut exited = false;
    while ticks < max_ticks {
        let events = source.poll(game.phase());
        ticks += 1;
        if game.tick(events) == Control::Exit {
            exited = true;
            break;
        }
    }

    log::info!(
        "Run finished after {ticks} tick(s) in {:?}{}",
        game.phase(),
        if exited { " (quit)" } else { "" }
    );
    RunSummary {
        ticks,
        exited,
        sessions: game.sessions_started(),
        final_frame: Frame::capture(game),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlatformSpec, SimConfig};
    use crate::host::{Key, RawInput};

    #[test]
    fn test_fixed_timestep_accumulates() {
        let mut clock = FixedTimestep::new(0.01);
        assert_eq!(clock.advance(0.005), 0);
        assert_eq!(clock.advance(0.0051), 1);
        assert_eq!(clock.advance(0.03), 3);
    }

    #[test]
    fn test_fixed_timestep_caps_substeps() {
        let mut clock = FixedTimestep::new(1.0 / 120.0);
        // Clamped to 0.1s = 12 ticks' worth, capped at 8
        assert_eq!(clock.advance(5.0), MAX_SUBSTEPS);
        // Backlog was dropped
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut clock = FixedTimestep::new(0.01);
        assert_eq!(clock.advance(-1.0), 0);
    }

    #[test]
    fn test_autopilot_confirms_then_quits() {
        let mut pilot = Autopilot::hold_jump(1);
        assert_eq!(pilot.poll(GamePhase::StartScreen), vec![Event::Confirm]);
        assert_eq!(pilot.poll(GamePhase::Playing), vec![Event::Jump]);
        assert_eq!(pilot.poll(GamePhase::GameOver), vec![Event::Quit]);
        assert_eq!(pilot.sessions(), 1);
    }

    #[test]
    fn test_run_stops_on_quit() {
        let mut game = Game::new(SimConfig::default(), 3).expect("valid");
        let mut queue = EventQueue::new();
        queue.push_raw(RawInput::KeyDown(Key::Enter));
        let summary = run_ticks(&mut game, &mut queue, 10);
        assert_eq!(summary.ticks, 10);
        assert!(!summary.exited);
        assert_eq!(summary.final_frame.phase, GamePhase::Playing);

        queue.push_raw(RawInput::Close);
        let summary = run_ticks(&mut game, &mut queue, 10);
        assert_eq!(summary.ticks, 1);
        assert!(summary.exited);
        assert_eq!(summary.sessions, 1);
    }

    #[test]
    fn test_autopilot_run_plays_sessions() {
        // Nothing under the spawn point: every session ends in a fall
        let config = SimConfig {
            initial_layout: vec![PlatformSpec::new(0.0, 0.0, 50.0, 20.0)],
            ..Default::default()
        };
        let mut game = Game::new(config, 11).expect("valid");
        let mut pilot = Autopilot::new(vec![Vec::new()], 2);
        let summary = run_ticks(&mut game, &mut pilot, 10_000);
        assert!(summary.exited, "autopilot should quit after its sessions");
        assert_eq!(summary.sessions, 2);
        assert!(summary.final_frame.phase.is_end_screen());
    }
}
