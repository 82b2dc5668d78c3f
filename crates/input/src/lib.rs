//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s; the caller feeds
//! steering actions into the session's direction cell once per event.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
