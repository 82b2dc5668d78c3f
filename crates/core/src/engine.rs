//! Engine module - the per-tick state transition.
//!
//! [`advance`] is a pure function of `(state, direction, rng)`. It never fails:
//! the caller only ever hands it engine-produced states and one of the four
//! directions. A collision is an ordinary output value, and the engine does
//! not stop on it; the snake still moves on the tick it collides. Deciding
//! what a collision means (alert, halt) is left to the caller.

use rand::Rng;

use crate::game_state::GameState;
use crate::types::{Direction, GridIndex, BOTTOM_WALL_INDEX, GRID_CELLS, GRID_WIDTH};

/// Which branch of the transition ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// No food yet: head moved and the first food was placed.
    Bootstrap,
    /// Head landed on the food: snake grew and food moved.
    Captured,
    /// Ordinary slide; food unchanged.
    Moved,
}

/// Result of one [`advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advance {
    pub next: GameState,
    pub collided: bool,
    pub event: TickEvent,
}

/// Advance the game by one tick.
pub fn advance<R: Rng + ?Sized>(state: &GameState, direction: Direction, rng: &mut R) -> Advance {
    let delta = direction.delta();
    let head = state.head();
    let target = head + delta;

    let Some(food) = state.food else {
        let snake = vec![target];
        let food = place_food(&snake, rng);
        return Advance {
            next: GameState::with_snake(snake, Some(food)),
            collided: false,
            event: TickEvent::Bootstrap,
        };
    };

    if target == food {
        let snake = if state.len() < 2 {
            vec![head, target]
        } else {
            let mut body = Vec::with_capacity(state.len() + 1);
            body.extend_from_slice(&state.snake);
            body.push(target);
            body
        };
        let food = place_food(&snake, rng);
        return Advance {
            next: GameState::with_snake(snake, Some(food)),
            collided: false,
            event: TickEvent::Captured,
        };
    }

    let collided = hits_wall(head, direction) || hits_self(&state.snake, direction);

    // The body moves even when a collision was flagged.
    let snake = if state.len() < 2 {
        vec![target]
    } else {
        let mut body = Vec::with_capacity(state.len());
        body.extend_from_slice(&state.snake[1..]);
        body.push(target);
        body
    };

    Advance {
        next: GameState::with_snake(snake, Some(food)),
        collided,
        event: TickEvent::Moved,
    }
}

/// Wall rule, evaluated on the current head before it moves.
///
/// Uses truncating `%`, so heads that already left the board through the top
/// (negative indices) behave the same as on a plain integer grid.
pub fn hits_wall(head: GridIndex, direction: Direction) -> bool {
    match direction {
        Direction::Right => (head + 1) % GRID_WIDTH == 0,
        Direction::Left => head % GRID_WIDTH == 0,
        Direction::Up => head - GRID_WIDTH < 0,
        Direction::Down => head + GRID_WIDTH >= BOTTOM_WALL_INDEX,
    }
}

/// Self rule: the prospective head is already a body cell (tail included).
pub fn hits_self(snake: &[GridIndex], direction: Direction) -> bool {
    match snake.last() {
        Some(&head) => snake.contains(&(head + direction.delta())),
        None => false,
    }
}

/// Pick a uniformly random free cell by rejection sampling.
///
/// Loops forever if all [`GRID_CELLS`] cells are occupied; a snake never gets
/// that long in practice.
pub fn place_food<R: Rng + ?Sized>(occupied: &[GridIndex], rng: &mut R) -> GridIndex {
    loop {
        let candidate = rng.random_range(0..GRID_CELLS);
        if !occupied.contains(&candidate) {
            return candidate;
        }
    }
}
