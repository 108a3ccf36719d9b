//! Render boundary
//!
//! A [`Frame`] is everything an external renderer needs to draw one tick:
//! rectangles, the score, the phase and the text for the current screen.
//! The core never draws.

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::sim::{Body, Game, GamePhase, Rect};

/// Heading size for screen titles
pub const TITLE_SIZE: u16 = 48;
/// Body text size
pub const TEXT_SIZE: u16 = 22;

/// A line of text anchored at its mid-top point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub size: u16,
    pub x: f32,
    pub y: f32,
}

impl TextLine {
    fn new(text: impl Into<String>, size: u16, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            size,
            x,
            y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    pub id: u32,
    pub rect: Rect,
}

/// Snapshot of the game for drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub phase: GamePhase,
    pub score: u32,
    /// Absent before the first session starts
    pub player: Option<Rect>,
    pub platforms: Vec<PlatformView>,
    pub text: Vec<TextLine>,
}

impl Frame {
    pub fn capture(game: &Game) -> Self {
        let session = game.session();
        let score = session.map(|s| s.score()).unwrap_or(0);
        let phase = game.phase();

        // End screens keep the last session's entities; the renderer decides what to show
        let (player, platforms) = match session {
            Some(s) => (
                Some(s.player.bounds()),
                s.world
                    .platforms
                    .iter()
                    .map(|p| PlatformView {
                        id: p.id,
                        rect: p.bounds(),
                    })
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        Self {
            phase,
            score,
            player,
            platforms,
            text: screen_text(game.config(), phase, score),
        }
    }
}

/// Text layout of each screen
pub fn screen_text(config: &SimConfig, phase: GamePhase, score: u32) -> Vec<TextLine> {
    let w = config.viewport_width as f32;
    let h = config.viewport_height as f32;
    let cx = w / 2.0;

    match phase {
        GamePhase::StartScreen => vec![
            TextLine::new(config.title.clone(), TITLE_SIZE, cx, h / 4.0),
            TextLine::new("Arrows to move, Space to jump", TEXT_SIZE, cx, h / 2.0),
            TextLine::new("Press Enter to play", TEXT_SIZE, cx, h * 3.0 / 4.0),
        ],
        GamePhase::Playing => vec![TextLine::new(score.to_string(), TEXT_SIZE, cx, 15.0)],
        GamePhase::GameOver => vec![
            TextLine::new("GAME OVER", TITLE_SIZE, cx, h / 4.0),
            TextLine::new(format!("Score : {score}"), TEXT_SIZE, cx, h / 2.0),
            TextLine::new("Press Enter to play again", TEXT_SIZE, cx, h * 3.0 / 4.0),
        ],
        GamePhase::Arrival => vec![
            TextLine::new("Arrival", TITLE_SIZE, cx, h / 4.0),
            TextLine::new("Press Enter to play again", TEXT_SIZE, cx, h * 3.0 / 4.0),
        ],
    }
}
