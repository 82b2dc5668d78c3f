//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal with
//! crossterm, rather than going through a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so boards can be asserted cell by cell
//! - Allow precise control over aspect ratio (2 chars wide per grid cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, BLOCK_CHAR, EMPTY_CHAR};
pub use renderer::{changed_runs, encode_changes, encode_frame, TerminalRenderer};
