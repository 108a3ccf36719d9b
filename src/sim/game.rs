//! Game phase machine
//!
//! StartScreen -> Playing -> GameOver | Arrival -> Playing -> ...
//!
//! Every tick drains the pending events the same way in every phase and then,
//! only while Playing, advances the session. Waiting for confirm on the start
//! and end screens is just a phase that ignores everything but Confirm/Quit.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GamePhase, Horizontal, Session};
use super::tick::{Outcome, TickReport, tick};
use crate::config::{ConfigError, SimConfig};

/// Discrete input the core understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Leave the game from any phase
    Quit,
    /// Jump (edge-triggered)
    Jump,
    /// Start or restart a session from the start/end screens
    Confirm,
    /// Held horizontal direction changed
    Move(Horizontal),
}

/// Whether the host should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Owns the configuration, the current phase and the current session
#[derive(Debug)]
pub struct Game {
    config: SimConfig,
    phase: GamePhase,
    session: Option<Session>,
    /// Derives one seed per session
    seeds: Pcg32,
    /// Held direction, carried into new sessions
    held: Horizontal,
    sessions_started: u32,
    last_report: Option<TickReport>,
}

impl Game {
    /// Validate the config and sit on the start screen
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("Game created (seed {seed})");
        Ok(Self {
            config,
            phase: GamePhase::StartScreen,
            session: None,
            seeds: Pcg32::seed_from_u64(seed),
            held: Horizontal::None,
            sessions_started: 0,
            last_report: None,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Current (or just-ended) session; `None` before the first confirm
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// Report of the most recent Playing tick of the current session
    pub fn last_report(&self) -> Option<&TickReport> {
        self.last_report.as_ref()
    }

    /// Apply one event in the current phase
    pub fn handle_event(&mut self, event: Event) -> Control {
        if event == Event::Quit {
            log::info!("Quit requested in {:?}", self.phase);
            return Control::Exit;
        }
        if let Event::Move(dir) = event {
            self.held = dir;
        }

        match self.phase {
            GamePhase::StartScreen | GamePhase::GameOver | GamePhase::Arrival => {
                if event == Event::Confirm {
                    self.start_session();
                }
            }
            GamePhase::Playing => {
                if let Some(session) = self.session.as_mut() {
                    match event {
                        Event::Jump => {
                            session.player.jump();
                        }
                        Event::Move(dir) => session.player.intent = dir,
                        Event::Confirm | Event::Quit => {}
                    }
                }
            }
        }
        Control::Continue
    }

    /// One fixed tick: drain events, then simulate if Playing
    ///
    /// A Quit ends processing at once; later events of the same tick are dropped.
    pub fn tick<I: IntoIterator<Item = Event>>(&mut self, events: I) -> Control {
        for event in events {
            if self.handle_event(event) == Control::Exit {
                return Control::Exit;
            }
        }

        if self.phase != GamePhase::Playing {
            return Control::Continue;
        }
        let Some(session) = self.session.as_mut() else {
            return Control::Continue;
        };

        let report = tick(session, &self.config, self.config.dt());
        match report.outcome {
            Some(Outcome::FellOff) => {
                log::info!("Game over: fell off with score {}", session.score());
                self.phase = GamePhase::GameOver;
            }
            Some(Outcome::Arrived) => {
                log::info!("Arrival with score {}", session.score());
                self.phase = GamePhase::Arrival;
            }
            None => {}
        }
        self.last_report = Some(report);
        Control::Continue
    }

    /// Replace any previous session with a fresh one and start playing
    fn start_session(&mut self) {
        let seed: u64 = self.seeds.random();
        let mut session = Session::new(&self.config, seed);
        session.player.intent = self.held;
        self.session = Some(session);
        self.last_report = None;
        self.sessions_started += 1;
        log::info!(
            "Session {} started from {:?} (seed {seed})",
            self.sessions_started,
            self.phase
        );
        self.phase = GamePhase::Playing;
    }
}
