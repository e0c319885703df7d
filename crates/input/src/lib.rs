//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. It knows
//! nothing about the board; the driver decides what an action does.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_actionable, should_quit};
