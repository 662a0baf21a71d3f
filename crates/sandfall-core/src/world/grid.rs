//! Flat row-major cell grid

use sandfall_simulation::{Cell, Material};

/// The particle grid.
///
/// A single flat buffer of cells, row-major, with y growing downward.
/// Dimensions are fixed for the grid's lifetime; there is no resizing.
/// Rules mutate the buffer in place during a scan, so cells written early
/// in a pass are immediately visible to cells visited later in the same
/// pass. That immediate visibility is load-bearing for the emergent
/// behavior and must not be replaced with double-buffering.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "cell access out of bounds: ({x}, {y}) in {}x{}",
            self.width,
            self.height
        );
        x + y * self.width
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let index = self.index(x, y);
        self.cells[index] = cell;
    }

    /// True if the signed coordinates land inside the grid. Drawing tools
    /// use this to clip brush geometry that extends past the edges.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// End-of-tick normalization: clear every moved flag and count the
    /// mobile particles currently in the grid.
    pub fn settle_all(&mut self) -> usize {
        let mut count = 0;
        for cell in &mut self.cells {
            if cell.moved {
                cell.settle();
            }
            if cell.material.is_mobile() {
                count += 1;
            }
        }
        count
    }
}
