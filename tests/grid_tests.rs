use broadside::{
    BattleEngine, Cell, GameError, Grid, ShipType, ShotOutcome, GRID_SIZE, SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const CARRIER: ShipType = SHIPS[0];
const CRUISER: ShipType = SHIPS[1];

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new();
    assert_eq!(grid.count(Cell::Empty), GRID_SIZE * GRID_SIZE);
    assert!(!grid.has_ships_afloat());
    assert_eq!(grid, Grid::default());
}

#[test]
fn test_place_then_overlap_is_rejected() {
    let mut grid = Grid::new();
    grid.place_ship(CARRIER, 3, 0).unwrap();
    for c in 0..5 {
        assert_eq!(grid.cell(3, c), Some(Cell::Occupied));
    }
    assert_eq!(grid.cell(3, 5), Some(Cell::Empty));

    let before = grid;
    assert_eq!(grid.place_ship(CRUISER, 3, 2), Err(GameError::Overlap));
    assert_eq!(grid, before);
}

#[test]
fn test_place_out_of_bounds() {
    let mut grid = Grid::new();
    assert_eq!(grid.place_ship(CARRIER, 0, 6), Err(GameError::OutOfBounds));
    assert_eq!(grid.place_ship(CARRIER, 10, 0), Err(GameError::OutOfBounds));
    assert_eq!(grid, Grid::new());
    // flush against the right edge fits
    grid.place_ship(CARRIER, 9, 5).unwrap();
    assert_eq!(grid.occupied_count(), 5);
}

#[test]
fn test_fire_hit_then_repeat() {
    let mut grid = Grid::new();
    grid.place_ship(ShipType::new("Dinghy", 1), 5, 5).unwrap();
    assert_eq!(grid.fire(5, 5), Ok(ShotOutcome::Hit));
    assert_eq!(grid.cell(5, 5), Some(Cell::Hit));
    assert_eq!(
        grid.fire(5, 5),
        Err(GameError::AlreadyRevealed { row: 5, col: 5 })
    );
    assert_eq!(grid.cell(5, 5), Some(Cell::Hit));
    assert!(!grid.has_ships_afloat());
}

#[test]
fn test_fire_miss_and_off_grid() {
    let mut grid = Grid::new();
    assert_eq!(grid.fire(0, 0), Ok(ShotOutcome::Miss));
    assert_eq!(grid.cell(0, 0), Some(Cell::Miss));
    assert_eq!(
        grid.fire(0, 10),
        Err(GameError::InvalidCoordinate { row: 0, col: 10 })
    );
}

#[test]
fn test_concealed_hides_only_unrevealed_segments() {
    let mut grid = Grid::new();
    grid.place_ship(CRUISER, 2, 2).unwrap();
    grid.fire(2, 3).unwrap();
    grid.fire(7, 7).unwrap();
    let hidden = grid.concealed();
    assert_eq!(hidden.count(Cell::Occupied), 0);
    assert_eq!(hidden.cell(2, 2), Some(Cell::Empty));
    assert_eq!(hidden.cell(2, 3), Some(Cell::Hit));
    assert_eq!(hidden.cell(7, 7), Some(Cell::Miss));
}

#[test]
fn test_random_fleet_has_no_overlap() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = Grid::with_random_fleet(&mut rng).unwrap();
        assert_eq!(grid.occupied_count(), TOTAL_SHIP_CELLS, "seed {}", seed);
    }
}

#[test]
fn test_random_placement_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let a = Grid::with_random_fleet(&mut rng1).unwrap();
    let b = Grid::with_random_fleet(&mut rng2).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_placement_fails_when_no_room() {
    let mut grid = Grid::new();
    // leave only four free cells per row
    let wall = ShipType::new("Wall", 6);
    for r in 0..GRID_SIZE {
        grid.place_ship(wall, r, 2).unwrap();
    }
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        grid.random_placement(&mut rng, CARRIER),
        Err(GameError::UnableToPlaceShip)
    );
    let (r, c) = grid.place_ship_randomly(&mut rng, SHIPS[3]).unwrap();
    assert!(c == 0 || c == 8, "patrol boat must fit a two-cell gap, got ({}, {})", r, c);
}

#[test]
fn test_unrevealed_cells_shrink() {
    let mut grid = Grid::new();
    assert_eq!(grid.unrevealed_cells().count(), 100);
    grid.fire(1, 1).unwrap();
    assert_eq!(grid.unrevealed_cells().count(), 99);
    assert!(grid.unrevealed_cells().all(|p| p != (1, 1)));
}

#[test]
fn test_place_far_past_right_edge() {
    let mut grid = Grid::new();
    assert_eq!(grid.place_ship(CARRIER, 0, usize::MAX), Err(GameError::OutOfBounds));
    assert_eq!(grid.place_ship(CARRIER, 0, 10), Err(GameError::OutOfBounds));
    assert_eq!(grid, Grid::new());

    let mut engine = BattleEngine::with_computer_grid(Grid::new());
    engine.select_ship(SHIPS[3]).unwrap();
    assert_eq!(
        engine.place_selected_ship(2, usize::MAX - 1),
        Err(GameError::OutOfBounds)
    );
    assert!(!engine.is_placed(SHIPS[3]));
    assert_eq!(*engine.player_grid(), Grid::new());
}

#[test]
fn test_zero_length_ship_is_rejected() {
    let mut grid = Grid::new();
    let raft = ShipType::new("Raft", 0);
    assert_eq!(grid.place_ship(raft, 0, 0), Err(GameError::UnableToPlaceShip));
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(grid.random_placement(&mut rng, raft), Err(GameError::UnableToPlaceShip));
    assert_eq!(grid, Grid::new());
}
