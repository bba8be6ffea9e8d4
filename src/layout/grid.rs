//! Boolean occupancy grid backing the packer.
//!
//! A flat `Vec<bool>` indexed `row * cols + col`; grids are small (rows stay
//! proportional to the comment count, columns are fixed) so nothing sparse is
//! needed. Each layout call owns a fresh grid for its lifetime.

use super::size::TileSize;

/// Rows x cols occupancy matrix.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Whether a tile anchored at `(row, col)` lies fully inside the grid
    /// with every covered cell free.
    pub fn fits(&self, row: usize, col: usize, tile: TileSize) -> bool {
        if row + tile.h > self.rows || col + tile.w > self.cols {
            return false;
        }
        for r in row..row + tile.h {
            for c in col..col + tile.w {
                if self.cells[r * self.cols + c] {
                    return false;
                }
            }
        }
        true
    }

    /// Mark every cell covered by the tile as occupied.
    pub fn occupy(&mut self, row: usize, col: usize, tile: TileSize) {
        for r in row..row + tile.h {
            for c in col..col + tile.w {
                self.cells[r * self.cols + c] = true;
            }
        }
    }

    /// Count of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_grid_is_empty() {
        let grid = OccupancyGrid::new(4, 5);
        assert_eq!(grid.occupied_cells(), 0);
        assert!(grid.fits(0, 0, TileSize { w: 2, h: 2 }));
    }

    #[test]
    fn test_occupy_blocks_overlap() {
        let mut grid = OccupancyGrid::new(4, 5);
        grid.occupy(1, 1, TileSize { w: 2, h: 2 });
        assert!(grid.is_occupied(1, 1));
        assert!(grid.is_occupied(2, 2));
        assert!(!grid.is_occupied(0, 0));
        // Any footprint touching the occupied block is rejected.
        assert!(!grid.fits(0, 0, TileSize { w: 2, h: 2 }));
        assert!(!grid.fits(2, 2, TileSize::UNIT));
        // Disjoint placements still fit.
        assert!(grid.fits(0, 3, TileSize { w: 2, h: 1 }));
    }

    #[test]
    fn test_fits_respects_bounds() {
        let grid = OccupancyGrid::new(4, 5);
        assert!(!grid.fits(3, 0, TileSize { w: 1, h: 2 }));
        assert!(!grid.fits(0, 4, TileSize { w: 2, h: 1 }));
        assert!(grid.fits(3, 4, TileSize::UNIT));
    }
}
