//! Game state module - the (snake, food) pair the engine advances.

use crate::types::{CellKind, GridIndex, START_INDEX};

/// Whether food has been placed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh game; the next tick moves the head and places the first food.
    NoFood,
    HasFood,
}

/// Snake body plus food position.
///
/// `snake` is ordered tail-first; the last element is the head.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub snake: Vec<GridIndex>,
    pub food: Option<GridIndex>,
}

impl GameState {
    /// Single-cell snake at the top-left corner, no food.
    pub fn new() -> Self {
        Self {
            snake: vec![START_INDEX],
            food: None,
        }
    }

    /// Build a state from an explicit body and food.
    ///
    /// The body must be non-empty.
    pub fn with_snake(snake: Vec<GridIndex>, food: Option<GridIndex>) -> Self {
        debug_assert!(!snake.is_empty(), "snake must have at least one cell");
        Self { snake, food }
    }

    pub fn head(&self) -> GridIndex {
        // Every constructor and engine transition keeps at least one cell.
        self.snake[self.snake.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn phase(&self) -> Phase {
        match self.food {
            Some(_) => Phase::HasFood,
            None => Phase::NoFood,
        }
    }

    pub fn occupies(&self, index: GridIndex) -> bool {
        self.snake.contains(&index)
    }

    /// Display attribute of a cell: snake membership first, then food equality.
    pub fn cell_kind(&self, index: GridIndex) -> CellKind {
        if self.occupies(index) {
            CellKind::Snake
        } else if self.food == Some(index) {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
