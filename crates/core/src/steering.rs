//! Steering - the single direction cell between input and the tick.
//!
//! Input writes requests at any time; the tick latches exactly once at its
//! start and hands the result to the engine. Reversal is checked against the
//! direction the previous tick actually used, not against the last keypress,
//! so two quick presses (e.g. Up then Left while heading Right) cannot sneak
//! a 180° turn past the guard.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Steering {
    current: Direction,
    pending: Option<Direction>,
}

impl Steering {
    pub fn new(initial: Direction) -> Self {
        Self {
            current: initial,
            pending: None,
        }
    }

    /// Direction used by the most recent tick.
    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Record a requested heading.
    ///
    /// Returns `false` (and changes nothing) for the exact opposite of the
    /// current heading. A newer accepted request replaces an older one.
    pub fn request(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.current) {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Commit the pending request and return the direction for this tick.
    pub fn latch(&mut self) -> Direction {
        if let Some(next) = self.pending.take() {
            self.current = next;
        }
        self.current
    }
}

impl Default for Steering {
    fn default() -> Self {
        Self::new(Direction::Down)
    }
}
