use broadside::{Cell, GameError, Grid, GRID_SIZE, SHIPS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    let ships = rng.random_range(0..=SHIPS.len());
    for def in SHIPS.iter().take(ships) {
        grid.place_ship_randomly(&mut rng, *def).unwrap();
    }
    grid
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placement_legality(
        seed in any::<u64>(),
        ship_idx in 0..SHIPS.len(),
        row in 0..GRID_SIZE,
        col in 0..GRID_SIZE,
    ) {
        let mut grid = random_grid(seed);
        let before = grid;
        let ship = SHIPS[ship_idx];
        let fits = col + ship.length() <= GRID_SIZE;
        let free = fits && (col..col + ship.length()).all(|c| before.cell(row, c) == Some(Cell::Empty));

        match grid.place_ship(ship, row, col) {
            Ok(()) => {
                prop_assert!(fits && free);
                for c in col..col + ship.length() {
                    prop_assert_eq!(grid.cell(row, c), Some(Cell::Occupied));
                }
                prop_assert_eq!(grid.occupied_count(), before.occupied_count() + ship.length());
            }
            Err(err) => {
                if fits {
                    prop_assert_eq!(err, GameError::Overlap);
                    prop_assert!(!free);
                } else {
                    prop_assert_eq!(err, GameError::OutOfBounds);
                }
                prop_assert_eq!(grid, before);
            }
        }
    }

    #[test]
    fn repeat_shot_never_changes_cell(
        seed in any::<u64>(),
        row in 0..GRID_SIZE,
        col in 0..GRID_SIZE,
    ) {
        let mut grid = random_grid(seed);
        grid.fire(row, col).unwrap();
        let after_first = grid;
        let err = grid.fire(row, col).unwrap_err();
        prop_assert_eq!(err, GameError::AlreadyRevealed { row, col });
        prop_assert_eq!(grid, after_first);
    }
}
