//! TUI Snake (workspace facade crate).
//!
//! Re-exports the `tui_snake::{core,input,term,types}` API from the crates
//! under `crates/`, plus the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use config::GameConfig;
