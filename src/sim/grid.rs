//! Brick field geometry and liveness

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Rectangular grid of bricks, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    cell_width: i32,
    cell_height: i32,
}

impl BrickGrid {
    /// Create a grid with every brick alive
    ///
    /// Cell size is the brick area divided by the grid dimensions, truncated,
    /// so the grid never exceeds the area. Callers pass `rows, cols >= 1`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![true; rows * cols],
            cell_width: GRID_AREA_WIDTH / cols.max(1) as i32,
            cell_height: GRID_AREA_HEIGHT / rows.max(1) as i32,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> i32 {
        self.cell_height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Whether the brick at (row, col) is still standing; out of range is dead
    pub fn cell_alive_at(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i])
    }

    /// Knock out the brick at (row, col)
    ///
    /// Returns true only if a live brick was destroyed, so repeated calls on
    /// the same cell can't be double counted.
    pub fn destroy_cell(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) if self.cells[i] => {
                self.cells[i] = false;
                true
            }
            _ => false,
        }
    }

    /// Screen rectangle of the cell at (row, col)
    pub fn bounds_of(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            col as i32 * self.cell_width + GRID_OFFSET_X,
            row as i32 * self.cell_height + GRID_OFFSET_Y,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Number of bricks still standing
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// Live cells with their bounds, in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cell_alive_at(row, col))
            .map(|(row, col)| (row, col, self.bounds_of(row, col)))
    }
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new(GRID_ROWS, GRID_COLS)
    }
}
