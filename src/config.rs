/// Number of columns on a standard grid.
pub const GRID_WIDTH: usize = 10;
/// Number of rows on a standard grid.
pub const GRID_HEIGHT: usize = 10;

/// Default TCP port for hosting a game.
pub const DEFAULT_PORT: u16 = 8080;

/// How many ships of one length a fleet contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    pub length: usize,
    pub count: usize,
}

impl ShipClass {
    pub const fn new(length: usize, count: usize) -> Self {
        Self { length, count }
    }
}

/// The fixed ten-ship fleet.
pub const STANDARD_FLEET: [ShipClass; 4] = [
    ShipClass::new(4, 1),
    ShipClass::new(3, 2),
    ShipClass::new(2, 3),
    ShipClass::new(1, 4),
];

/// Total number of ship cells in [`STANDARD_FLEET`].
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Number of ships in [`STANDARD_FLEET`].
pub const TOTAL_SHIPS: usize = 1 + 2 + 3 + 4;
