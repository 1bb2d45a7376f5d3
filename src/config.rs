use crate::ship::ShipType;

pub const GRID_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 4;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Cruiser", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("PatrolBoat", 2),
];

/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2;

/// Default pause, in milliseconds, a front end waits before letting the
/// computer fire.
pub const COMPUTER_TURN_DELAY_MS: u64 = 1000;

/// Look up a catalog ship by its name.
pub fn ship_by_name(name: &str) -> Option<ShipType> {
    SHIPS.iter().copied().find(|def| def.name() == name)
}

/// Position of `ship` in [`SHIPS`], or `None` if it is not a catalog entry.
pub fn ship_index(ship: ShipType) -> Option<usize> {
    SHIPS.iter().position(|def| *def == ship)
}
