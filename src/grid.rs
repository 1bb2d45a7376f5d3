//! The 10×10 cell grid each side plays on, with placement and shot rules.

use crate::common::{GameError, ShotOutcome};
use crate::config::{GRID_SIZE, SHIPS};
use crate::ship::ShipType;
use core::fmt;
use rand::Rng;

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Cell {
    #[default]
    Empty,
    /// Ship segment not yet fired upon.
    Occupied,
    Hit,
    Miss,
}

impl Cell {
    /// `true` once a shot has resolved on this cell.
    pub fn is_revealed(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '□',
            Cell::Occupied => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
        }
    }
}

/// A fixed-size grid of cells, stored row-major.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create a grid holding the whole catalog fleet at random, non-overlapping positions.
    pub fn with_random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut grid = Grid::new();
        for def in SHIPS {
            grid.place_ship_randomly(rng, def)?;
        }
        Ok(grid)
    }

    /// Cell at (`row`, `col`), or `None` when off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Place `ship` horizontally with its leftmost segment at (`row`, `col`).
    ///
    /// Fails with [`GameError::OutOfBounds`] if the ship would not fit,
    /// [`GameError::Overlap`] if any target cell is not empty, and
    /// [`GameError::UnableToPlaceShip`] for a zero-length ship. On failure the
    /// grid is left untouched.
    pub fn place_ship(&mut self, ship: ShipType, row: usize, col: usize) -> Result<(), GameError> {
        if ship.length() == 0 {
            return Err(GameError::UnableToPlaceShip);
        }
        if row >= GRID_SIZE || col >= GRID_SIZE || ship.length() > GRID_SIZE - col {
            return Err(GameError::OutOfBounds);
        }
        if !self.fits(ship, row, col) {
            return Err(GameError::Overlap);
        }
        for cell in &mut self.cells[row][col..col + ship.length()] {
            *cell = Cell::Occupied;
        }
        Ok(())
    }

    /// Choose a uniformly random legal origin for `ship` among all positions
    /// that are in bounds and do not overlap ships already on this grid.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship: ShipType,
    ) -> Result<(usize, usize), GameError> {
        let len = ship.length();
        if len == 0 || len > GRID_SIZE {
            return Err(GameError::UnableToPlaceShip);
        }
        let origins = move || {
            (0..GRID_SIZE)
                .flat_map(move |r| (0..=GRID_SIZE - len).map(move |c| (r, c)))
                .filter(move |&(r, c)| self.fits(ship, r, c))
        };
        let count = origins().count();
        if count == 0 {
            return Err(GameError::UnableToPlaceShip);
        }
        let pick = rng.random_range(0..count);
        origins().nth(pick).ok_or(GameError::UnableToPlaceShip)
    }

    /// Place `ship` at a random legal origin and return that origin.
    pub fn place_ship_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship: ShipType,
    ) -> Result<(usize, usize), GameError> {
        let (row, col) = self.random_placement(rng, ship)?;
        self.place_ship(ship, row, col)?;
        Ok((row, col))
    }

    /// Resolve a shot at (`row`, `col`).
    ///
    /// Empty cells become misses and occupied cells become hits. A cell that
    /// has already been revealed is rejected and stays as it was.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GameError::InvalidCoordinate { row, col })?;
        let outcome = match *cell {
            Cell::Hit | Cell::Miss => return Err(GameError::AlreadyRevealed { row, col }),
            Cell::Occupied => ShotOutcome::Hit,
            Cell::Empty => ShotOutcome::Miss,
        };
        *cell = match outcome {
            ShotOutcome::Hit => Cell::Hit,
            ShotOutcome::Miss => Cell::Miss,
        };
        Ok(outcome)
    }

    /// Number of ship segments not yet hit.
    pub fn occupied_count(&self) -> usize {
        self.count(Cell::Occupied)
    }

    /// `true` while at least one ship segment is still unrevealed.
    pub fn has_ships_afloat(&self) -> bool {
        self.cells.iter().flatten().any(|&c| c == Cell::Occupied)
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == state).count()
    }

    /// Iterator over the coordinates of cells no shot has landed on yet.
    pub fn unrevealed_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| !cell.is_revealed())
                .map(move |(c, _)| (r, c))
        })
    }

    /// Copy of this grid safe to show the opponent: unrevealed ship segments
    /// read as empty water.
    pub fn concealed(&self) -> Grid {
        let mut out = *self;
        for cell in out.cells.iter_mut().flatten() {
            if *cell == Cell::Occupied {
                *cell = Cell::Empty;
            }
        }
        out
    }

    fn fits(&self, ship: ShipType, row: usize, col: usize) -> bool {
        self.cells[row][col..col + ship.length()]
            .iter()
            .all(|&c| c == Cell::Empty)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", GRID_SIZE)?;
        fmt::Display::fmt(self, f)?;
        writeln!(f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            if r + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
