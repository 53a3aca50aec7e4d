//! Shot resolution: classify a shot, then record it on a grid.
//!
//! Classification ([`resolve`]) reads the grid before any mutation, and
//! [`apply`] writes the outcome afterwards. The same `apply` updates both the
//! defender's own grid and the attacker's view of it, so ship recovery via
//! [`ship_points`] works on a fully known grid and on a partially revealed one.

use alloc::vec::Vec;

use crate::cell::Cell;
use crate::common::{BoardError, Outcome};
use crate::grid::Grid;

/// Probe order: +x, -x, +y, -y.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Cells of the ship through a given cell, found by walking outward along both axes.
///
/// Yields the origin first, then each ship-bearing neighbor in turn until the
/// first non-ship or out-of-bounds cell in each direction.
#[derive(Clone)]
pub struct ShipPoints<'a> {
    grid: &'a Grid,
    origin: (usize, usize),
    direction: usize,
    step: usize,
    origin_done: bool,
}

impl<'a> Iterator for ShipPoints<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.origin_done {
            self.origin_done = true;
            return Some(self.origin);
        }
        while let Some(&(dx, dy)) = DIRECTIONS.get(self.direction) {
            self.step += 1;
            let step = self.step as isize;
            let probe = self
                .origin
                .0
                .checked_add_signed(dx * step)
                .zip(self.origin.1.checked_add_signed(dy * step));
            match probe {
                Some((x, y)) if self.grid.get(x, y).is_some_and(Cell::has_ship) => {
                    return Some((x, y));
                }
                _ => {
                    self.direction += 1;
                    self.step = 0;
                }
            }
        }
        None
    }
}

/// Start a ship walk from `(x, y)`. The origin is always included.
pub fn ship_points(grid: &Grid, x: usize, y: usize) -> ShipPoints<'_> {
    ShipPoints {
        grid,
        origin: (x, y),
        direction: 0,
        step: 0,
        origin_done: false,
    }
}

/// Classify a shot at `(x, y)` without changing the grid.
pub fn resolve(grid: &Grid, x: usize, y: usize) -> Result<Outcome, BoardError> {
    let target = grid.cell(x, y)?;
    if !target.has_ship() {
        return Ok(Outcome::Miss);
    }

    // The target itself is not marked yet, so it counts as hit.
    let ship: Vec<(usize, usize)> = ship_points(grid, x, y).collect();
    let ship_finished = ship
        .iter()
        .all(|&(px, py)| (px, py) == (x, y) || grid.get(px, py).is_some_and(Cell::is_damaged));
    if !ship_finished {
        return Ok(Outcome::Damaged);
    }

    // Cells of the ship being finished are only damaged so far, not destroyed.
    let fleet_finished = grid
        .cells()
        .all(|(cx, cy, cell)| !cell.has_ship() || cell.is_destroyed() || ship.contains(&(cx, cy)));
    if fleet_finished {
        Ok(Outcome::Win)
    } else {
        Ok(Outcome::Destroyed)
    }
}

/// Record `outcome` for a shot at `(x, y)`.
///
/// A hit marks the cell as a damaged ship so later walks can find it; a finishing
/// shot marks the whole ship through `(x, y)` as destroyed.
pub fn apply(grid: &mut Grid, x: usize, y: usize, outcome: Outcome) -> Result<(), BoardError> {
    match outcome {
        Outcome::Miss => grid.upgrade(x, y, Cell::Miss),
        Outcome::Damaged => grid.upgrade(x, y, Cell::Damaged),
        Outcome::Destroyed | Outcome::Win => {
            grid.cell(x, y)?;
            let ship: Vec<(usize, usize)> = ship_points(grid, x, y).collect();
            for (px, py) in ship {
                grid.upgrade(px, py, Cell::Destroyed)?;
            }
            Ok(())
        }
    }
}

/// Resolve a shot and apply its outcome in one step.
pub fn fire(grid: &mut Grid, x: usize, y: usize) -> Result<Outcome, BoardError> {
    let outcome = resolve(grid, x, y)?;
    apply(grid, x, y, outcome)?;
    Ok(outcome)
}
