//! Common types for the engine: shot outcomes and board errors.

use core::fmt;

/// Result of a single shot, as exchanged on the wire.
///
/// The discriminants are the wire values; exactly one outcome is reported per shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Outcome {
    /// Shot landed on water.
    Miss = 1,
    /// Shot hit a ship that still has undamaged cells.
    Damaged = 2,
    /// Shot finished a ship, but the fleet is still afloat.
    Destroyed = 4,
    /// Shot finished the last ship of the fleet.
    Win = 8,
}

impl Outcome {
    /// All outcomes in wire-value order.
    pub const ALL: [Outcome; 4] = [
        Outcome::Miss,
        Outcome::Damaged,
        Outcome::Destroyed,
        Outcome::Win,
    ];

    pub fn is_miss(self) -> bool {
        self == Outcome::Miss
    }

    pub fn is_damaged(self) -> bool {
        self == Outcome::Damaged
    }

    pub fn is_destroyed(self) -> bool {
        self == Outcome::Destroyed
    }

    pub fn is_win(self) -> bool {
        self == Outcome::Win
    }

    /// `true` when the shot sank a ship (a winning shot always does).
    pub fn finishes_ship(self) -> bool {
        matches!(self, Outcome::Destroyed | Outcome::Win)
    }

    /// Raw wire value of this outcome.
    pub fn to_wire(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Outcome {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Outcome::Miss),
            2 => Ok(Outcome::Damaged),
            4 => Ok(Outcome::Destroyed),
            8 => Ok(Outcome::Win),
            other => Err(other),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Miss => "miss",
            Outcome::Damaged => "damaged",
            Outcome::Destroyed => "destroyed",
            Outcome::Win => "win",
        };
        f.write_str(text)
    }
}

/// Errors returned by grid, placement and resolver operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Cell cannot take the requested state (a miss on a ship cell or vice versa).
    ConflictingCell { x: usize, y: usize },
    /// Ship rectangle is not a straight in-bounds 1×L or L×1 run.
    InvalidShipRect {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    },
    /// Fleet contains a ship class of length zero.
    InvalidShipLength,
    /// No placement window is left for a ship of this length.
    NoRoomForShip { length: usize },
    /// The cell has already been shot at.
    AlreadyTargeted { x: usize, y: usize },
    /// The game already has a winner.
    GameOver,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is out of bounds", x, y)
            }
            BoardError::ConflictingCell { x, y } => {
                write!(f, "Cell ({}, {}) cannot take the requested state", x, y)
            }
            BoardError::InvalidShipRect { x0, y0, x1, y1 } => write!(
                f,
                "Invalid ship rectangle ({}, {})-({}, {})",
                x0, y0, x1, y1
            ),
            BoardError::InvalidShipLength => write!(f, "Ship length must be at least 1"),
            BoardError::NoRoomForShip { length } => {
                write!(f, "No room left for a ship of length {}", length)
            }
            BoardError::AlreadyTargeted { x, y } => {
                write!(f, "Cell ({}, {}) was already targeted", x, y)
            }
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
