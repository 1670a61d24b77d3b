#![forbid(unsafe_code)]

//! Occupancy matrix for placing regions without overlap.

use mosaic_core::geometry::{CellRegion, GridSpec};

/// Row-major occupancy flags for a grid.
#[derive(Debug, Clone)]
pub struct Occupancy {
    grid: GridSpec,
    cells: Vec<bool>,
}

impl Occupancy {
    /// An all-free matrix for `grid`.
    pub fn new(grid: GridSpec) -> Self {
        Self {
            grid,
            cells: vec![false; grid.cell_count()],
        }
    }

    /// Grid dimensions.
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.grid.cols + col
    }

    /// Whether `(row, col)` is taken. Cells outside the grid count as taken.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        !self.grid.contains(row, col) || self.cells[self.idx(row, col)]
    }

    /// Whether `region` fits in the grid and every covered cell is free.
    pub fn is_free(&self, region: CellRegion) -> bool {
        region.fits(self.grid) && region.cells().all(|(r, c)| !self.cells[self.idx(r, c)])
    }

    /// Place `region`, or a 1×1 region at its origin when it would overflow
    /// or collide. Returns what was placed.
    ///
    /// The origin must be free; strategies only place at free cells.
    pub fn place(&mut self, region: CellRegion) -> CellRegion {
        let placed = if self.is_free(region) {
            region
        } else {
            CellRegion::unit(region.row, region.col)
        };
        debug_assert!(self.is_free(placed), "origin {placed} already occupied");
        for (r, c) in placed.cells() {
            if self.grid.contains(r, c) {
                let i = self.idx(r, c);
                self.cells[i] = true;
            }
        }
        placed
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&taken| taken).count()
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&taken| taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_marks_cells() {
        let mut occ = Occupancy::new(GridSpec::new(4, 4));
        let placed = occ.place(CellRegion::new(0, 0, 2, 3));
        assert_eq!(placed, CellRegion::new(0, 0, 2, 3));
        assert_eq!(occ.occupied_count(), 6);
        assert!(occ.is_occupied(1, 2));
        assert!(!occ.is_occupied(2, 0));
    }

    #[test]
    fn collision_collapses_to_unit() {
        let mut occ = Occupancy::new(GridSpec::new(4, 4));
        occ.place(CellRegion::new(1, 2, 1, 1));
        let placed = occ.place(CellRegion::new(0, 1, 2, 2));
        assert_eq!(placed, CellRegion::unit(0, 1));
    }

    #[test]
    fn overflow_collapses_to_unit() {
        let mut occ = Occupancy::new(GridSpec::new(3, 3));
        let placed = occ.place(CellRegion::new(2, 2, 2, 2));
        assert_eq!(placed, CellRegion::unit(2, 2));
    }

    #[test]
    fn outside_counts_as_occupied() {
        let occ = Occupancy::new(GridSpec::new(2, 2));
        assert!(occ.is_occupied(2, 0));
        assert!(!occ.is_full());
    }
}
