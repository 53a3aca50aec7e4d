//! Random fleet placement with a no-touching rule.
//!
//! Placement works on an exclusion mask: a second grid where every cell of a
//! chosen ship, and its one-cell border, is marked. Later ships only pick from
//! unmarked runs, so no two ships ever share an edge or a corner.

use alloc::vec::Vec;
use rand::Rng;

use crate::cell::Cell;
use crate::common::BoardError;
use crate::config::ShipClass;
use crate::grid::Grid;

/// A ship rectangle from `(x0, y0)` to `(x1, y1)` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Placement {
    /// Number of cells covered.
    pub fn length(&self) -> usize {
        (self.x1 - self.x0 + 1) * (self.y1 - self.y0 + 1)
    }

    /// Cells covered, in ascending order.
    pub fn points(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement { x0, y0, x1, y1 } = *self;
        (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| (x, y)))
    }
}

/// Every window of `length` consecutive unmarked cells in `mask`, horizontal then vertical.
///
/// Single cells are only reported once, from the row scan.
pub fn available_placements(mask: &Grid, length: usize) -> Vec<Placement> {
    let mut found = Vec::new();
    if length == 0 {
        return found;
    }

    for (y, row) in mask.rows().enumerate() {
        let mut run = 0;
        for (x, cell) in row.iter().enumerate() {
            if cell.has_ship() {
                run = 0;
                continue;
            }
            run += 1;
            if run >= length {
                found.push(Placement {
                    x0: x + 1 - length,
                    y0: y,
                    x1: x,
                    y1: y,
                });
            }
        }
    }

    if length > 1 {
        for (x, column) in mask.columns().enumerate() {
            let mut run = 0;
            for (y, cell) in column.enumerate() {
                if cell.has_ship() {
                    run = 0;
                    continue;
                }
                run += 1;
                if run >= length {
                    found.push(Placement {
                        x0: x,
                        y0: y + 1 - length,
                        x1: x,
                        y1: y,
                    });
                }
            }
        }
    }

    found
}

/// Mark the placement and its one-cell border on the exclusion mask.
fn mark_surroundings(mask: &mut Grid, placement: &Placement) -> Result<(), BoardError> {
    let x_end = (placement.x1 + 1).min(mask.width() - 1);
    let y_end = (placement.y1 + 1).min(mask.height() - 1);
    for y in placement.y0.saturating_sub(1)..=y_end {
        for x in placement.x0.saturating_sub(1)..=x_end {
            mask.upgrade(x, y, Cell::Ship)?;
        }
    }
    Ok(())
}

/// Randomly place `fleet` on `grid`, longest ships first.
///
/// Returns the chosen rectangles. Ships are only stamped onto `grid` once the whole
/// fleet has been chosen; if some ship has no room left the call fails with `grid`
/// untouched. There is no backtracking.
pub fn place_fleet<R: Rng + ?Sized>(
    grid: &mut Grid,
    fleet: &[ShipClass],
    rng: &mut R,
) -> Result<Vec<Placement>, BoardError> {
    if fleet.iter().any(|class| class.length == 0) {
        return Err(BoardError::InvalidShipLength);
    }
    let mut classes: Vec<ShipClass> = fleet.to_vec();
    classes.sort_by(|a, b| b.length.cmp(&a.length));

    let mut mask = Grid::new(grid.width(), grid.height());
    let mut chosen = Vec::with_capacity(classes.iter().map(|c| c.count).sum());

    for class in &classes {
        for _ in 0..class.count {
            let options = available_placements(&mask, class.length);
            if options.is_empty() {
                log::warn!(
                    "no room for a ship of length {} on a {}x{} grid",
                    class.length,
                    grid.width(),
                    grid.height()
                );
                return Err(BoardError::NoRoomForShip {
                    length: class.length,
                });
            }
            let placement = options[rng.random_range(0..options.len())];
            log::debug!(
                "placing ship of length {} at {:?} ({} options)",
                class.length,
                placement,
                options.len()
            );
            mark_surroundings(&mut mask, &placement)?;
            chosen.push(placement);
        }
    }

    for p in &chosen {
        grid.place_ship(p.x0, p.y0, p.x1, p.y1)?;
    }
    Ok(chosen)
}
