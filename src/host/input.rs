//! Raw key input to simulation events
//!
//! Confirm policy: only an Enter key *press* confirms. Key releases never
//! produce events other than a changed held direction.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::sim::{Event, Horizontal};

/// Keys the game cares about; everything else maps to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Other,
}

/// What a host reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawInput {
    KeyDown(Key),
    KeyUp(Key),
    /// Window closed / terminal hung up
    Close,
}

/// Tracks held arrow keys so `Move` events reflect the combined state
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    left: bool,
    right: bool,
    /// Most recently pressed direction, wins while both are held
    latest: Horizontal,
    current: Horizontal,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction currently held
    pub fn held(&self) -> Horizontal {
        self.current
    }

    /// Translate one raw input; `None` when it means nothing to the game
    pub fn map(&mut self, raw: RawInput) -> Option<Event> {
        match raw {
            RawInput::Close | RawInput::KeyDown(Key::Escape) => Some(Event::Quit),
            RawInput::KeyDown(Key::Space) => Some(Event::Jump),
            RawInput::KeyDown(Key::Enter) => Some(Event::Confirm),
            RawInput::KeyDown(Key::Left) => {
                self.left = true;
                self.latest = Horizontal::Left;
                self.update_direction()
            }
            RawInput::KeyDown(Key::Right) => {
                self.right = true;
                self.latest = Horizontal::Right;
                self.update_direction()
            }
            RawInput::KeyUp(Key::Left) => {
                self.left = false;
                self.update_direction()
            }
            RawInput::KeyUp(Key::Right) => {
                self.right = false;
                self.update_direction()
            }
            RawInput::KeyDown(Key::Other) | RawInput::KeyUp(_) => None,
        }
    }

    fn update_direction(&mut self) -> Option<Event> {
        let dir = match (self.left, self.right) {
            (true, true) => self.latest,
            (true, false) => Horizontal::Left,
            (false, true) => Horizontal::Right,
            (false, false) => Horizontal::None,
        };
        if dir == self.current {
            return None;
        }
        self.current = dir;
        Some(Event::Move(dir))
    }
}

/// Buffers translated events between host polls and simulation ticks
#[derive(Debug, Default)]
pub struct EventQueue {
    mapper: InputMapper,
    pending: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_raw(&mut self, raw: RawInput) {
        if let Some(event) = self.mapper.map(raw) {
            self.pending.push_back(event);
        }
    }

    pub fn push(&mut self, event: Event) {
        self.pending.push_back(event);
    }

    /// Take everything queued so far, oldest first
    pub fn drain(&mut self) -> Vec<Event> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
