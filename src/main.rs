//! Sky Hopper headless runner
//!
//! Plays scripted sessions against the simulation core and logs how they end.
//! Drawing, audio and real input devices belong to the host, not this binary.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};

use sky_hopper::runner::{Autopilot, EventSource, FixedTimestep, RunSummary, run_ticks};
use sky_hopper::{Control, Event, Frame, Game, Horizontal, SimConfig};

/// Scripted input patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Script {
    /// Jump every tick, never steer
    HoldJump,
    /// Jump every tick while sweeping left and right
    Zigzag,
    /// No input at all
    Idle,
}

impl Script {
    fn autopilot(self, sessions: u32) -> Autopilot {
        match self {
            Script::HoldJump => Autopilot::hold_jump(sessions),
            Script::Idle => Autopilot::new(vec![Vec::new()], sessions),
            Script::Zigzag => {
                let pattern = (0..80)
                    .map(|i| match i {
                        0 => vec![Event::Move(Horizontal::Right), Event::Jump],
                        40 => vec![Event::Move(Horizontal::Left), Event::Jump],
                        _ => vec![Event::Jump],
                    })
                    .collect();
                Autopilot::new(pattern, sessions)
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sky-hopper")]
#[command(author, version, about = "Headless runner for the Sky Hopper simulation core", long_about = None)]
struct Cli {
    /// JSON file overriding the default tuning
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Master seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tick limit for the whole run
    #[arg(short, long, default_value = "3600")]
    ticks: u64,

    /// Input pattern played during sessions
    #[arg(long, value_enum, default_value = "zigzag")]
    script: Script,

    /// Sessions to play before quitting
    #[arg(long, default_value = "1")]
    sessions: u32,

    /// Pace ticks at the configured tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Print the final frame as JSON
    #[arg(long)]
    dump_frame: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match SimConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut game = match Game::new(config, seed) {
        Ok(game) => game,
        Err(err) => {
            log::error!("Refusing to start: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("{} (native) starting, seed {seed}", game.config().title);
    let mut pilot = cli.script.autopilot(cli.sessions);
    let summary = if cli.realtime {
        run_realtime(&mut game, &mut pilot, cli.ticks)
    } else {
        run_ticks(&mut game, &mut pilot, cli.ticks)
    };

    log::info!(
        "Played {} session(s) over {} tick(s); final phase {:?}, score {}",
        summary.sessions,
        summary.ticks,
        summary.final_frame.phase,
        summary.final_frame.score
    );

    if cli.dump_frame {
        match serde_json::to_string_pretty(&summary.final_frame) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("Failed to serialize frame: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

/// Wall-clock paced loop, the way a windowed host would drive the core
fn run_realtime<S: EventSource>(game: &mut Game, source: &mut S, max_ticks: u64) -> RunSummary {
    let mut clock = FixedTimestep::new(game.config().dt());
    let frame = Duration::from_secs_f32(clock.dt());
    let mut last = Instant::now();
    let mut ticks = 0;
    let mut exited = false;

    'frames: while ticks < max_ticks {
        let now = Instant::now();
        let substeps = clock.advance((now - last).as_secs_f32());
        last = now;

        for _ in 0..substeps {
            let events = source.poll(game.phase());
            ticks += 1;
            if game.tick(events) == Control::Exit {
                exited = true;
                break 'frames;
            }
            if ticks >= max_ticks {
                break 'frames;
            }
        }
        std::thread::sleep(frame);
    }

    RunSummary {
        ticks,
        exited,
        sessions: game.sessions_started(),
        final_frame: Frame::capture(game),
    }
}
