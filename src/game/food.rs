//! Fruit placement on the free part of the grid

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use super::state::Position;

/// Every grid cell not in `occupied`, in row-major order
pub fn free_cells(occupied: &[Position], width: usize, height: usize) -> Vec<Position> {
    let taken: HashSet<Position> = occupied.iter().copied().collect();

    (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
        .filter(|pos| !taken.contains(pos))
        .collect()
}

/// Pick a cell for the fruit uniformly among the free cells.
///
/// Returns `None` when the snake covers the whole grid.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    occupied: &[Position],
    width: usize,
    height: usize,
) -> Option<Position> {
    free_cells(occupied, width, height).choose(rng).copied()
}
