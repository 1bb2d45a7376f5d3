//! Common types: shot outcomes, sides, and engine errors.

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// Shot struck an unrevealed ship segment.
    Hit,
    /// Shot landed in open water.
    Miss,
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// The other participant.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Errors returned by grid and engine commands. None of them are fatal; the
/// rejected command leaves all state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Placement would extend past the grid edge.
    #[error("ship placement is out of bounds")]
    OutOfBounds,
    /// Placement intersects an occupied or revealed cell.
    #[error("ship placement overlaps another ship")]
    Overlap,
    /// Ship type was already committed this game.
    #[error("{ship} has already been placed")]
    AlreadyPlaced { ship: &'static str },
    /// Command issued in the wrong phase or by the side not holding the turn.
    #[error("command not allowed in the current phase or turn")]
    InvalidTurn,
    /// Shot targets a cell already marked hit or miss.
    #[error("cell ({row}, {col}) has already been fired upon")]
    AlreadyRevealed { row: usize, col: usize },
    /// Shot coordinate lies outside the grid.
    #[error("coordinate ({row}, {col}) is outside the grid")]
    InvalidCoordinate { row: usize, col: usize },
    /// Placement requested before any ship was selected.
    #[error("no ship selected")]
    NoShipSelected,
    /// Ship type is not part of the fleet catalog.
    #[error("ship is not part of the fleet")]
    UnknownShip,
    /// No legal origin is left for a random placement.
    #[error("unable to place ship")]
    UnableToPlaceShip,
    /// Every cell of the target grid has already been revealed.
    #[error("no unrevealed cells left to target")]
    BoardExhausted,
}
