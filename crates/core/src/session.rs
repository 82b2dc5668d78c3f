//! Session module - owns the game state and drives it one tick at a time.
//!
//! The session is the only writer of [`GameState`]. It holds the started flag
//! (the start control), the [`Steering`] cell fed by input, and the RNG used
//! for food placement. Renderers read it through [`GameSnapshot`]s.

use log::{debug, info, trace};

use crate::engine::{advance, TickEvent};
use crate::game_state::GameState;
use crate::grid::in_bounds;
use crate::rng::GameRng;
use crate::snapshot::GameSnapshot;
use crate::steering::Steering;
use crate::types::{CellKind, Direction};

/// Tunables for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    pub seed: Option<u64>,
    /// Stop producing ticks after the first collision.
    pub halt_on_collision: bool,
}

/// What happened on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub tick: u64,
    pub direction: Direction,
    pub event: TickEvent,
    pub collided: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    steering: Steering,
    rng: GameRng,
    started: bool,
    halted: bool,
    halt_on_collision: bool,
    last_collided: bool,
    ticks: u64,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            state: GameState::new(),
            steering: Steering::default(),
            rng,
            started: false,
            halted: false,
            halt_on_collision: options.halt_on_collision,
            last_collided: false,
            ticks: 0,
        }
    }

    /// Deterministic session with default options.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SessionOptions {
            seed: Some(seed),
            ..SessionOptions::default()
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn direction(&self) -> Direction {
        self.steering.current()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Begin producing ticks. Calling it again has no effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("session started (seed {})", self.rng.seed());
    }

    /// Stop producing ticks. Idempotent.
    pub fn stop(&mut self) {
        if self.halted {
            return;
        }
        self.halted = true;
        info!(
            "session stopped after {} ticks, length {}",
            self.ticks,
            self.state.len()
        );
    }

    /// Forward a heading request to the steering cell.
    ///
    /// Returns whether the request was accepted by the reversal guard.
    pub fn steer(&mut self, direction: Direction) -> bool {
        let accepted = self.steering.request(direction);
        if !accepted {
            trace!("ignored reversal to {}", direction.as_str());
        }
        accepted
    }

    /// Run one tick if the session is running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.started || self.halted {
            return None;
        }

        let direction = self.steering.latch();
        let out = advance(&self.state, direction, &mut self.rng);
        self.state = out.next;
        self.ticks += 1;
        self.last_collided = out.collided;

        match out.event {
            TickEvent::Bootstrap => debug!(
                "tick {}: first food at {:?}",
                self.ticks, self.state.food
            ),
            TickEvent::Captured => debug!(
                "tick {}: captured, length {}, next food at {:?}",
                self.ticks,
                self.state.len(),
                self.state.food
            ),
            TickEvent::Moved => trace!(
                "tick {}: head {} heading {}",
                self.ticks,
                self.state.head(),
                direction.as_str()
            ),
        }

        if out.collided {
            info!(
                "tick {}: collision heading {} (head now {})",
                self.ticks,
                direction.as_str(),
                self.state.head()
            );
            if self.halt_on_collision {
                self.stop();
            }
        }

        Some(TickOutcome {
            tick: self.ticks,
            direction,
            event: out.event,
            collided: out.collided,
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.clear();
        if let Some(food) = self.state.food.filter(|&f| in_bounds(f)) {
            snap.cells[food as usize] = CellKind::Food;
        }
        // Snake after food so it wins on a shared cell; off-board cells are skipped.
        for &index in &self.state.snake {
            if in_bounds(index) {
                snap.cells[index as usize] = CellKind::Snake;
            }
        }

        snap.head = Some(self.state.head());
        snap.food = self.state.food;
        snap.length = self.state.len() as u32;
        snap.direction = self.steering.current();
        snap.started = self.started;
        snap.halted = self.halted;
        snap.collided = self.last_collided;
        snap.tick = self.ticks;
        snap.seed = self.rng.seed();
    }
}
