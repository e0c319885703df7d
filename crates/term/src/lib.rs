//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! plain framebuffer that is then flushed to the terminal with crossterm, with
//! no widget toolkit in between.
//!
//! - [`fb`]: framebuffer and styles
//! - [`game_view`]: [`BoardSnapshot`](crate::core::BoardSnapshot) → framebuffer (pure)
//! - [`renderer`]: framebuffer → terminal (diffed)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{shape_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
