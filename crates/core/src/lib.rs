//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, state management, and tick driver.
//! It has no dependencies on terminals, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is a plain function over plain data
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`engine`]: the per-tick transition (`advance`), wall/self rules, food placement
//! - [`game_state`]: the `(snake, food)` pair the engine advances
//! - [`grid`]: row/column helpers for the flattened 20x20 board
//! - [`rng`]: seeded randomness for food placement
//! - [`session`]: started flag, steering and RNG around a `GameState`
//! - [`snapshot`]: per-cell view consumed by renderers
//! - [`steering`]: direction cell with the reversal guard
//!
//! # Game Rules
//!
//! - A new game is the single-cell snake `[0]` with no food, heading down.
//! - The first tick moves the head and places food.
//! - Landing on food grows the snake by one and moves the food.
//! - Otherwise the snake slides; hitting a wall or itself flags a collision,
//!   and the slide still happens on that tick.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::Session;
//! use tui_snake_types::Direction;
//!
//! let mut session = Session::with_seed(12345);
//! session.start();
//!
//! session.tick(); // bootstrap: head moves down, food appears
//! assert_eq!(session.state().snake, vec![20]);
//!
//! session.steer(Direction::Right);
//! let outcome = session.tick().unwrap();
//! assert_eq!(outcome.direction, Direction::Right);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. Callers invoke [`Session::tick`] once per fixed
//! interval ([`types::TICK_MS`] by default).

pub mod engine;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod steering;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use engine::{advance, hits_self, hits_wall, place_food, Advance, TickEvent};
pub use game_state::{GameState, Phase};
pub use rng::GameRng;
pub use session::{Session, SessionOptions, TickOutcome};
pub use snapshot::GameSnapshot;
pub use steering::Steering;
