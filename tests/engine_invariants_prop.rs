//! Property/invariant tests for the tick transition.
//!
//! Games are generated from a seed plus a sequence of steering requests and
//! played through the same path the binary uses (`Steering` latch, then
//! `advance`). The invariants are checked after every tick.

use std::collections::HashSet;

use proptest::prelude::*;

use tui_snake::core::{advance, place_food, GameRng, GameState, Steering, TickEvent};
use tui_snake::types::{Direction, GridIndex, GRID_CELLS};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Right),
        Just(Direction::Left),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

fn has_duplicates(snake: &[GridIndex]) -> bool {
    let mut seen = HashSet::with_capacity(snake.len());
    !snake.iter().all(|i| seen.insert(*i))
}

proptest! {
    #[test]
    fn tick_invariants_hold_over_rollouts(
        seed in any::<u64>(),
        requests in prop::collection::vec(direction(), 1..200),
    ) {
        let mut rng = GameRng::new(seed);
        let mut steering = Steering::default();
        let mut state = GameState::new();
        let mut collided_before = false;

        for request in requests {
            steering.request(request);
            let dir = steering.latch();
            let out = advance(&state, dir, &mut rng);

            prop_assert!(!out.next.snake.is_empty());

            // A self-collision can leave overlapping cells behind, so the
            // check only applies until the first flagged collision.
            if !collided_before && has_duplicates(&out.next.snake) {
                prop_assert!(out.collided, "duplicate cells without a collision flag");
            }
            collided_before |= out.collided;

            match out.event {
                TickEvent::Bootstrap => {
                    prop_assert!(state.food.is_none());
                    prop_assert!(!out.collided);
                    let food = out.next.food.unwrap();
                    prop_assert!(!out.next.snake.contains(&food));
                }
                TickEvent::Captured => {
                    prop_assert!(!out.collided);
                    prop_assert_eq!(out.next.snake.len(), state.snake.len() + 1);
                    let food = out.next.food.unwrap();
                    prop_assert!((0..GRID_CELLS).contains(&food));
                    prop_assert!(!out.next.snake.contains(&food));
                }
                TickEvent::Moved => {
                    prop_assert_eq!(out.next.food, state.food);
                    prop_assert_eq!(out.next.snake.len(), state.snake.len());
                }
            }

            prop_assert_eq!(out.next.head(), state.head() + dir.delta());
            state = out.next;
        }
    }

    #[test]
    fn opposite_request_never_changes_direction(
        start in direction(),
        noise in prop::collection::vec(direction(), 0..20),
    ) {
        let mut steering = Steering::new(start);
        for d in noise {
            steering.request(d);
            steering.latch();
        }
        let current = steering.current();
        prop_assert!(!steering.request(current.opposite()));
        prop_assert_eq!(steering.latch(), current);
    }

    #[test]
    fn place_food_avoids_occupied_cells(
        seed in any::<u64>(),
        free in 0..GRID_CELLS,
        fill in 0.0f64..=1.0,
        mask in prop::collection::vec(0.0f64..1.0, GRID_CELLS as usize),
    ) {
        // Anything from an empty board up to 399 occupied cells; `free` always stays open.
        let occupied: Vec<GridIndex> = (0..GRID_CELLS)
            .filter(|&i| i != free && mask[i as usize] < fill)
            .collect();
        let mut rng = GameRng::new(seed);
        let food = place_food(&occupied, &mut rng);
        prop_assert!((0..GRID_CELLS).contains(&food));
        prop_assert!(!occupied.contains(&food));
    }
}
