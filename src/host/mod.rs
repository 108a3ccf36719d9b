//! Host abstraction layer
//!
//! Turns whatever the windowing/terminal host reports into the discrete
//! [`Event`](crate::sim::Event)s the simulation consumes.

pub mod input;

pub use input::{EventQueue, InputMapper, Key, RawInput};
