//! The cell grid: a fixed-size, row-major array of cell states.
//!
//! The grid is the sole piece of simulation state. Dimensions are fixed at
//! construction and every constructor enforces the shape invariant up front:
//! `rows >= 1`, `cols >= 1`, exactly `rows * cols` cells.
//!
//! Neighbor counting clips the 3x3 window to the grid bounds. There is no
//! wraparound: cells outside the grid are permanently dead and contribute
//! nothing to the count.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use smallvec::SmallVec;

use super::cell::Cell;
use super::error::EngineError;
use super::rng::SimRng;

/// Validate that a grid shape is non-degenerate.
pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<(), EngineError> {
    if rows < 1 || cols < 1 {
        return Err(EngineError::InvalidDimension { rows, cols });
    }
    Ok(())
}

/// A `rows x cols` grid of cells, stored row-major.
///
/// ## Usage
///
/// ```
/// use rust_life::{Cell, Grid};
///
/// let grid = Grid::from_rows(&[[0, 1, 0], [0, 1, 0]]).unwrap();
///
/// assert_eq!(grid.dimensions(), (2, 3));
/// assert_eq!(grid[(0, 1)], Cell::Alive);
/// assert_eq!(grid.population(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn dead(rows: usize, cols: usize) -> Result<Self, EngineError> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Create a grid with each cell independently alive with probability
    /// `density`.
    ///
    /// Draws happen in row-major order, one per cell, so a fixed-seed RNG
    /// pins the exact grid.
    pub fn random(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut SimRng,
    ) -> Result<Self, EngineError> {
        check_dimensions(rows, cols)?;
        if !density.is_finite() || !(0.0..=1.0).contains(&density) {
            return Err(EngineError::InvalidDensity { density });
        }

        let cells = (0..rows * cols)
            .map(|_| Cell::from_alive(rng.gen_bool(density)))
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Create a grid from explicit row data.
    ///
    /// A value of 0 is a dead cell; any other value is alive. All rows must
    /// share a length, and the shape invariant applies as usual.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, EngineError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |r| r.as_ref().len());
        check_dimensions(row_count, col_count)?;

        let mut cells = Vec::with_capacity(row_count * col_count);
        for (row, data) in rows.iter().enumerate() {
            let data = data.as_ref();
            if data.len() != col_count {
                return Err(EngineError::RaggedRows {
                    row,
                    expected: col_count,
                    actual: data.len(),
                });
            }
            cells.extend(data.iter().map(|&v| Cell::from_alive(v != 0)));
        }

        Ok(Self {
            rows: row_count,
            cols: col_count,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The cells as a flat row-major slice of length `rows * cols`.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat index of `(row, col)`.
    ///
    /// Panics if the coordinate is out of bounds.
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// The cell at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrite the cell at `(row, col)`.
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.offset(row, col);
        self.cells[idx] = cell;
    }

    /// Count of alive cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of the in-bounds neighbors of `(row, col)`: the 3x3 block
    /// centered there, clipped to the grid, minus the center itself.
    ///
    /// Interior cells have 8 neighbors; edge and corner cells have fewer.
    /// A 1x1 grid has none.
    #[must_use]
    pub fn neighborhood(&self, row: usize, col: usize) -> SmallVec<[(usize, usize); 8]> {
        debug_assert!(row < self.rows && col < self.cols);

        let mut out = SmallVec::new();
        let row_hi = (row + 1).min(self.rows - 1);
        let col_hi = (col + 1).min(self.cols - 1);
        for nr in row.saturating_sub(1)..=row_hi {
            for nc in col.saturating_sub(1)..=col_hi {
                if nr != row || nc != col {
                    out.push((nr, nc));
                }
            }
        }
        out
    }

    /// Count of alive cells among the in-bounds neighbors of `(row, col)`.
    #[must_use]
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for (nr, nc) in self.neighborhood(row, col) {
            if self.cells[nr * self.cols + nc].is_alive() {
                count += 1;
            }
        }
        count
    }

    /// 64-bit fingerprint of the grid contents.
    ///
    /// Equal grids always produce equal fingerprints; distinct grids may
    /// collide, so this is a cheap comparison heuristic, not an identity.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[self.offset(row, col)]
    }
}

impl fmt::Display for Grid {
    // One text line per grid row: '#' alive, '.' dead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let ch = if self.cells[row * self.cols + col].is_alive() {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
