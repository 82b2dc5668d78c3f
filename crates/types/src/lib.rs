//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The playfield is a 20x20 board flattened into a single row-major index:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Index**: `row * 20 + col`, valid range `0..400`
//!
//! # Directions
//!
//! A direction is the index delta applied to the head on every tick:
//!
//! | Direction | Delta | Key |
//! |-----------|-------|-----|
//! | `Right` | +1 | `d` |
//! | `Left` | -1 | `a` |
//! | `Up` | -20 | `w` |
//! | `Down` | +20 | `s` |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, GRID_CELLS, GRID_WIDTH};
//!
//! assert_eq!(Direction::Down.delta(), GRID_WIDTH);
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! let parsed = Direction::from_str("left").unwrap();
//! assert_eq!(parsed, Direction::Left);
//!
//! let action = GameAction::from_str("start").unwrap();
//! assert_eq!(action, GameAction::Start);
//!
//! assert_eq!(GRID_CELLS, 400);
//! ```

/// Linear cell index on the flattened grid.
///
/// Signed on purpose: a snake that runs through a wall on a collision tick
/// keeps advancing and may hold indices outside `0..GRID_CELLS`.
pub type GridIndex = i32;

/// Grid width in cells (20 columns)
pub const GRID_WIDTH: GridIndex = 20;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: GridIndex = 20;

/// Total number of cells on the grid (400)
pub const GRID_CELLS: GridIndex = GRID_WIDTH * GRID_HEIGHT;

/// Threshold for the bottom wall rule: moving down collides once
/// `head + GRID_WIDTH` reaches this index.
///
/// This is one less than [`GRID_CELLS`], so the bottom-right neighbour row is
/// treated slightly conservatively. The value is kept as-is.
pub const BOTTOM_WALL_INDEX: GridIndex = GRID_CELLS - 1;

/// Default tick interval in milliseconds
pub const TICK_MS: u32 = 80;

/// Index of the single-cell snake a new game starts with
pub const START_INDEX: GridIndex = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_constants() {
        assert_eq!(GRID_WIDTH, 20);
        assert_eq!(GRID_HEIGHT, 20);
        assert_eq!(GRID_CELLS, 400);
        assert_eq!(BOTTOM_WALL_INDEX, 399);
        assert_eq!(TICK_MS, 80);
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Right.delta(), 1);
        assert_eq!(Direction::Left.delta(), -1);
        assert_eq!(Direction::Up.delta(), -20);
        assert_eq!(Direction::Down.delta(), 20);
    }

    #[test]
    fn opposites_cancel_out() {
        for dir in Direction::ALL {
            assert_eq!(dir.delta() + dir.opposite().delta(), 0);
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
        }
    }

    #[test]
    fn names_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("R"), Some(Direction::Right));
        assert_eq!(Direction::from_str("sideways"), None);
    }
}

/// Movement direction of the snake head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in delta order +1, -1, -20, +20.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Index delta applied to the head for one step in this direction.
    pub const fn delta(self) -> GridIndex {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            Direction::Up => -GRID_WIDTH,
            Direction::Down => GRID_WIDTH,
        }
    }

    /// The direction that would reverse the snake onto itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "right" | "r", "left" | "l", "up" | "u", "down" | "d"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "right" | "r" => Some(Direction::Right),
            "left" | "l" => Some(Direction::Left),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// What a single grid cell shows.
///
/// The snake wins over food if both claim the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Snake,
    Food,
}

/// Player actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading (subject to the reversal guard)
    Steer(Direction),
    /// Begin producing ticks
    Start,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("start"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Steer(Direction::Up)));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            other => Direction::from_str(other).map(GameAction::Steer),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Steer(dir) => dir.as_str(),
            GameAction::Start => "start",
        }
    }
}
