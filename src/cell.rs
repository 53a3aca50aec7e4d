//! Single grid cell state.
//!
//! A cell moves along one of two chains and never back:
//! `Empty -> Ship -> Damaged -> Destroyed` or `Empty -> Miss`.
//! [`Cell::upgrade`] is the only way to change it.

use crate::common::BoardError;

/// Flag bits carried by a cell on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CellFlag {
    Ship = 0x02,
    Miss = 0x04,
    Damaged = 0x08,
    Destroyed = 0x10,
}

impl CellFlag {
    #[inline]
    pub fn bit(self) -> u8 {
        self as u8
    }
}

/// Sentinel bit of an untouched cell. Never combined with other flags when encoding.
pub const EMPTY_BIT: u8 = 0x01;

const KNOWN_BITS: u8 = EMPTY_BIT
    | CellFlag::Ship as u8
    | CellFlag::Miss as u8
    | CellFlag::Damaged as u8
    | CellFlag::Destroyed as u8;

/// State of one grid location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Miss,
    Damaged,
    Destroyed,
}

impl Cell {
    /// Flag set of this state; each ship state includes the flags below it.
    pub fn flags(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Ship => CellFlag::Ship.bit(),
            Cell::Miss => CellFlag::Miss.bit(),
            Cell::Damaged => CellFlag::Ship.bit() | CellFlag::Damaged.bit(),
            Cell::Destroyed => {
                CellFlag::Ship.bit() | CellFlag::Damaged.bit() | CellFlag::Destroyed.bit()
            }
        }
    }

    #[inline]
    pub fn contains(self, flag: CellFlag) -> bool {
        self.flags() & flag.bit() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn has_ship(self) -> bool {
        self.contains(CellFlag::Ship)
    }

    #[inline]
    pub fn is_miss(self) -> bool {
        self.contains(CellFlag::Miss)
    }

    #[inline]
    pub fn is_damaged(self) -> bool {
        self.contains(CellFlag::Damaged)
    }

    #[inline]
    pub fn is_destroyed(self) -> bool {
        self.contains(CellFlag::Destroyed)
    }

    /// `true` once the cell has been shot at, on either chain.
    pub fn is_targeted(self) -> bool {
        matches!(self, Cell::Miss | Cell::Damaged | Cell::Destroyed)
    }

    /// Position along the ship chain, `None` for `Miss`.
    fn ship_rank(self) -> Option<u8> {
        match self {
            Cell::Empty => Some(0),
            Cell::Ship => Some(1),
            Cell::Damaged => Some(2),
            Cell::Destroyed => Some(3),
            Cell::Miss => None,
        }
    }

    /// Combine `next` into this cell without ever losing a flag.
    ///
    /// Returns `false` when `next` lies on the other chain (`Miss` against a
    /// ship-bearing state), leaving the cell untouched.
    pub fn try_upgrade(&mut self, next: Cell) -> bool {
        match (self.ship_rank(), next.ship_rank()) {
            (Some(current), Some(target)) => {
                if target > current {
                    *self = next;
                }
                true
            }
            (Some(0), None) => {
                *self = Cell::Miss;
                true
            }
            (None, None) => true,
            (None, Some(0)) => true,
            _ => false,
        }
    }

    /// Like [`Cell::try_upgrade`], reporting a conflict at `(x, y)` as an error.
    pub fn upgrade(&mut self, next: Cell, x: usize, y: usize) -> Result<(), BoardError> {
        if self.try_upgrade(next) {
            Ok(())
        } else {
            Err(BoardError::ConflictingCell { x, y })
        }
    }

    /// Raw wire byte of this cell.
    pub fn to_wire(self) -> u8 {
        match self {
            Cell::Empty => EMPTY_BIT,
            other => other.flags(),
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    /// Decode a wire byte. The empty sentinel bit is ignored so cells that carry it
    /// alongside other flags still decode.
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw & !KNOWN_BITS != 0 {
            return Err(raw);
        }
        let flags = raw & !EMPTY_BIT;
        let miss = flags & CellFlag::Miss.bit() != 0;
        if miss {
            return if flags == CellFlag::Miss.bit() {
                Ok(Cell::Miss)
            } else {
                Err(raw)
            };
        }
        if flags & CellFlag::Destroyed.bit() != 0 {
            Ok(Cell::Destroyed)
        } else if flags & CellFlag::Damaged.bit() != 0 {
            Ok(Cell::Damaged)
        } else if flags == CellFlag::Ship.bit() {
            Ok(Cell::Ship)
        } else {
            Ok(Cell::Empty)
        }
    }
}
