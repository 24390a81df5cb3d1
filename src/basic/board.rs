use itertools::iproduct;
use rand::Rng;

use crate::basic::{GridDim, GridPoint};
use crate::snake::Snake;

/// How many uniform samples to try before giving up on rejection
/// sampling and picking among the enumerated free cells instead.
const MAX_SAMPLE_ATTEMPTS: usize = 32;

/// Cells that food must not land on, sorted and deduplicated.
pub fn occupied_cells(snake: &Snake, extra: impl IntoIterator<Item = GridPoint>) -> Vec<GridPoint> {
    let mut occupied_cells: Vec<_> = snake.segments.iter().copied().chain(extra).collect();
    occupied_cells.sort_unstable();
    occupied_cells.dedup();
    occupied_cells
}

/// A uniformly random free interior cell, the outermost ring is wall.
/// `None` when the board is full.
pub fn random_free_spot(
    occupied_cells: &[GridPoint],
    board_dim: GridDim,
    rng: &mut impl Rng,
) -> Option<GridPoint> {
    // the board is mostly empty in practice, rejection sampling
    // terminates almost immediately
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let candidate = GridPoint {
            x: rng.gen_range(1..board_dim.x - 1),
            y: rng.gen_range(1..board_dim.y - 1),
        };
        if occupied_cells.binary_search(&candidate).is_err() {
            return Some(candidate);
        }
    }

    // near-full board, enumerate the free cells and pick one
    let free: Vec<_> = iproduct!(1..board_dim.y - 1, 1..board_dim.x - 1)
        .map(|(y, x)| GridPoint { x, y })
        .filter(|cell| occupied_cells.binary_search(cell).is_err())
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}
