use alloc::vec::Vec;

use log::{debug, info};
use rand::Rng;

use crate::{
    ai,
    common::{GameError, ShotOutcome, Side},
    config::{ship_index, NUM_SHIPS, SHIPS},
    grid::Grid,
    ship::ShipType,
};

/// Top-level stage of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Phase {
    /// The player is laying out ships.
    Placing,
    /// Shots are being exchanged.
    Playing,
    /// A side has sunk every enemy segment; only a reset is accepted.
    GameOver { winner: Side },
}

/// One entry in the player's shot history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotRecord {
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
}

/// Games won by each side during this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Scoreboard {
    pub player: u32,
    pub computer: u32,
}

impl Scoreboard {
    /// Wins recorded for `side`.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    fn record_win(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}

/// A ship committed to the player's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Placement {
    pub ship: ShipType,
    pub row: usize,
    pub col: usize,
}

/// Outcome of a resolved shot, including the winner if the shot ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotReport {
    pub side: Side,
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
    pub winner: Option<Side>,
}

impl ShotReport {
    /// `true` if this shot won the game for the side that fired it.
    pub fn is_win(&self) -> bool {
        self.winner.is_some()
    }
}

/// Read-only view handed to a front end for rendering.
///
/// The computer grid is concealed: unrevealed ship segments appear as empty
/// water so a renderer cannot leak ship positions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub player_grid: Grid,
    pub computer_grid: Grid,
    pub phase: Phase,
    pub turn: Side,
    pub placed: Vec<ShipType>,
    pub selected: Option<ShipType>,
    pub wins: Scoreboard,
    pub shots: Vec<ShotRecord>,
}

/// The battle engine: owns both grids, the turn cycle, and session scores.
///
/// Every command is synchronous. A command that returns an error leaves the
/// engine exactly as it was.
#[derive(Debug, Clone)]
pub struct BattleEngine {
    player_grid: Grid,
    computer_grid: Grid,
    phase: Phase,
    turn: Side,
    placed: [bool; NUM_SHIPS],
    selected: Option<ShipType>,
    wins: Scoreboard,
    shots: Vec<ShotRecord>,
}

impl BattleEngine {
    /// Start a session: empty player grid, randomly populated computer grid.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        Ok(Self::with_computer_grid(Grid::with_random_fleet(rng)?))
    }

    /// Start a session against a prepared computer grid.
    pub fn with_computer_grid(computer_grid: Grid) -> Self {
        Self {
            player_grid: Grid::new(),
            computer_grid,
            phase: Phase::Placing,
            turn: Side::Player,
            placed: [false; NUM_SHIPS],
            selected: None,
            wins: Scoreboard::default(),
            shots: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side allowed to fire next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn player_grid(&self) -> &Grid {
        &self.player_grid
    }

    /// Unconcealed computer grid. Front ends should render
    /// [`GameSnapshot::computer_grid`] instead.
    pub fn computer_grid(&self) -> &Grid {
        &self.computer_grid
    }

    pub fn selected_ship(&self) -> Option<ShipType> {
        self.selected
    }

    pub fn wins(&self) -> Scoreboard {
        self.wins
    }

    /// The player's shots in the order they were fired.
    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    /// `true` if `ship` has already been committed this game.
    pub fn is_placed(&self, ship: ShipType) -> bool {
        ship_index(ship).is_some_and(|i| self.placed[i])
    }

    /// Catalog ships committed this game, in catalog order.
    pub fn placed_ships(&self) -> impl Iterator<Item = ShipType> + '_ {
        SHIPS
            .iter()
            .zip(self.placed.iter())
            .filter(|&(_, &placed)| placed)
            .map(|(def, _)| *def)
    }

    /// Catalog ships still waiting to be placed.
    pub fn unplaced_ships(&self) -> impl Iterator<Item = ShipType> + '_ {
        SHIPS
            .iter()
            .zip(self.placed.iter())
            .filter(|&(_, &placed)| !placed)
            .map(|(def, _)| *def)
    }

    /// Choose the ship the next placement will commit.
    pub fn select_ship(&mut self, ship: ShipType) -> Result<(), GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::InvalidTurn);
        }
        ship_index(ship).ok_or(GameError::UnknownShip)?;
        self.selected = Some(ship);
        Ok(())
    }

    /// Commit the selected ship with its leftmost segment at (`row`, `col`).
    pub fn place_selected_ship(&mut self, row: usize, col: usize) -> Result<Placement, GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::InvalidTurn);
        }
        let ship = self.selected.ok_or(GameError::NoShipSelected)?;
        let idx = ship_index(ship).ok_or(GameError::UnknownShip)?;
        if self.placed[idx] {
            return Err(GameError::AlreadyPlaced { ship: ship.name() });
        }
        self.player_grid.place_ship(ship, row, col)?;
        self.placed[idx] = true;
        debug!("placed {} at ({}, {})", ship.name(), row, col);
        Ok(Placement { ship, row, col })
    }

    /// Leave the placement phase. The fleet does not need to be complete.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::InvalidTurn);
        }
        self.phase = Phase::Playing;
        self.turn = Side::Player;
        self.selected = None;
        info!(
            "game started with {} of {} ships placed",
            self.placed.iter().filter(|&&p| p).count(),
            NUM_SHIPS
        );
        Ok(())
    }

    /// Fire the player's shot at the computer grid.
    pub fn player_fire(&mut self, row: usize, col: usize) -> Result<ShotReport, GameError> {
        self.ensure_turn(Side::Player)?;
        let outcome = self.computer_grid.fire(row, col)?;
        self.shots.push(ShotRecord { row, col, outcome });
        Ok(self.resolve(Side::Player, row, col, outcome))
    }

    /// Fire the computer's shot at a random unrevealed cell of the player grid.
    pub fn computer_fire<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ShotReport, GameError> {
        self.ensure_turn(Side::Computer)?;
        let (row, col) = ai::pick_target(&self.player_grid, rng).ok_or(GameError::BoardExhausted)?;
        let outcome = self.player_grid.fire(row, col)?;
        Ok(self.resolve(Side::Computer, row, col, outcome))
    }

    /// Begin a new game. Session scores carry over.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let computer_grid = Grid::with_random_fleet(rng)?;
        *self = Self {
            wins: self.wins,
            ..Self::with_computer_grid(computer_grid)
        };
        info!(
            "game reset; score player {} computer {}",
            self.wins.player, self.wins.computer
        );
        Ok(())
    }

    /// Rendering view of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player_grid: self.player_grid,
            computer_grid: self.computer_grid.concealed(),
            phase: self.phase,
            turn: self.turn,
            placed: self.placed_ships().collect(),
            selected: self.selected,
            wins: self.wins,
            shots: self.shots.clone(),
        }
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        if self.phase == Phase::Playing && self.turn == side {
            Ok(())
        } else {
            Err(GameError::InvalidTurn)
        }
    }

    fn resolve(&mut self, side: Side, row: usize, col: usize, outcome: ShotOutcome) -> ShotReport {
        debug!("{:?} fired at ({}, {}): {:?}", side, row, col, outcome);
        let target = match side {
            Side::Player => &self.computer_grid,
            Side::Computer => &self.player_grid,
        };
        let winner = if target.has_ships_afloat() {
            self.turn = side.opponent();
            None
        } else {
            self.wins.record_win(side);
            self.phase = Phase::GameOver { winner: side };
            info!(
                "{:?} wins; score player {} computer {}",
                side, self.wins.player, self.wins.computer
            );
            Some(side)
        };
        ShotReport {
            side,
            row,
            col,
            outcome,
            winner,
        }
    }
}
