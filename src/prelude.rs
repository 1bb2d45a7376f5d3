//! Commonly used types and utilities for ease of import.

pub use crate::{BattleEngine, Cell, GameError, Grid, Phase, ShipType, ShotOutcome, Side, SHIPS};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::render_snapshot};
