// Computer targeting: uniform random choice over cells not yet fired upon.
// Uses no_std and avoids heap allocations.

use crate::grid::Grid;
use rand::Rng;

/// Pick a target uniformly among the unrevealed cells of `grid`.
///
/// Every call is a single bounded pass over the grid; resampling is never
/// needed because revealed cells are excluded up front. Returns `None` once
/// every cell has been fired upon.
pub fn pick_target<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<(usize, usize)> {
    let open = grid.unrevealed_cells().count();
    if open == 0 {
        return None;
    }
    let pick = rng.random_range(0..open);
    grid.unrevealed_cells().nth(pick)
}
