//! Rectangular grid of cells addressed by zero-based `(x, y)`.
//!
//! Cells are stored in row-major order (`y * width + x`). The same type holds a
//! fully known fleet and the partially revealed view of the opponent's fleet.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::slice::ChunksExact;

use crate::cell::{Cell, CellFlag};
use crate::common::BoardError;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Build a grid from row-major cells. Returns `None` if the count does not match.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Option<Self> {
        if cells.len() != width * height {
            return None;
        }
        Some(Grid {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if self.in_bounds(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).ok().map(|i| self.cells[i])
    }

    /// Cell at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        let i = self.index(x, y)?;
        Ok(self.cells[i])
    }

    /// Upgrade the cell at `(x, y)` towards `next`. See [`Cell::upgrade`].
    pub fn upgrade(&mut self, x: usize, y: usize, next: Cell) -> Result<(), BoardError> {
        let i = self.index(x, y)?;
        self.cells[i].upgrade(next, x, y)
    }

    /// Stamp a straight ship from `(x0, y0)` to `(x1, y1)` inclusive.
    pub fn place_ship(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    ) -> Result<(), BoardError> {
        let straight = x0 == x1 || y0 == y1;
        if !straight || x0 > x1 || y0 > y1 || !self.in_bounds(x1, y1) {
            return Err(BoardError::InvalidShipRect { x0, y0, x1, y1 });
        }
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.upgrade(x, y, Cell::Ship)?;
            }
        }
        Ok(())
    }

    /// Row-major traversal: one slice per row, top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Column-major traversal: one iterator per column, left to right.
    pub fn columns(&self) -> impl Iterator<Item = Column<'_>> + '_ {
        (0..self.width).map(move |x| Column {
            grid: self,
            x,
            y: 0,
        })
    }

    /// Every cell with its coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % width, i / width, cell))
    }

    /// Raw row-major cell storage.
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells carrying `flag`.
    pub fn count(&self, flag: CellFlag) -> usize {
        self.cells.iter().filter(|c| c.contains(flag)).count()
    }
}

/// Cells of a single column, top to bottom.
#[derive(Clone)]
pub struct Column<'a> {
    grid: &'a Grid,
    x: usize,
    y: usize,
}

impl<'a> Iterator for Column<'a> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let cell = self.grid.get(self.x, self.y)?;
        self.y += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.height.saturating_sub(self.y);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Column<'_> {}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.width, self.height)?;
        for row in self.rows() {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '·',
                    Cell::Ship => '■',
                    Cell::Miss => 'o',
                    Cell::Damaged => '+',
                    Cell::Destroyed => 'x',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
