//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platforms in insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod game;
pub mod physics;
pub mod rect;
pub mod scroll;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Landing, find_landing, resolve_landing};
pub use game::{Control, Event, Game};
pub use rect::Rect;
pub use scroll::{ScrollResult, scroll_world};
pub use spawn::{replenish, roll_platform};
pub use state::{Body, GamePhase, Horizontal, Motion, Platform, Player, Session, World};
pub use tick::{Outcome, TickReport, check_outcome, tick};
