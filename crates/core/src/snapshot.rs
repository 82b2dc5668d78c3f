use crate::types::{CellKind, Direction, GridIndex, GRID_CELLS};

/// Read-only view of a session, shaped for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cells: [CellKind; GRID_CELLS as usize],
    pub head: Option<GridIndex>,
    pub food: Option<GridIndex>,
    pub length: u32,
    pub direction: Direction,
    pub started: bool,
    pub halted: bool,
    /// The most recent tick reported a collision.
    pub collided: bool,
    pub tick: u64,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [CellKind::Empty; GRID_CELLS as usize];
        self.head = None;
        self.food = None;
        self.length = 0;
        self.direction = Direction::Down;
        self.started = false;
        self.halted = false;
        self.collided = false;
        self.tick = 0;
        self.seed = 0;
    }

    pub fn cell(&self, index: GridIndex) -> CellKind {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or_default()
    }

    pub fn running(&self) -> bool {
        self.started && !self.halted
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [CellKind::Empty; GRID_CELLS as usize],
            head: None,
            food: None,
            length: 0,
            direction: Direction::Down,
            started: false,
            halted: false,
            collided: false,
            tick: 0,
            seed: 0,
        }
    }
}
