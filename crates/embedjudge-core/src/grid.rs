//! Occupancy grid over the bounded 3-D lattice.
//!
//! A cell only ever goes from unclaimed to claimed. A second claim on the same
//! cell is how every overlap, touch or self-intersection is detected.

use bitvec::prelude::*;

use crate::error::JudgeFault;
use crate::types::Cell;

/// Largest grid a run may allocate, in cells (256 MiB of bits).
pub const MAX_GRID_CELLS: usize = 1 << 31;

/// One bit per lattice cell in `[0, extent)^3`, owned by a single run.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    extent: usize,
    bits: BitVec<u64, Lsb0>,
}

impl OccupancyGrid {
    /// Number of cells in a grid of side `extent`, if it fits the size cap.
    pub fn cell_count(extent: usize) -> Option<usize> {
        extent
            .checked_mul(extent)?
            .checked_mul(extent)
            .filter(|&cells| cells <= MAX_GRID_CELLS)
    }

    /// Create an empty grid with the given side length.
    pub fn new(extent: usize) -> Result<Self, JudgeFault> {
        let cells = Self::cell_count(extent).ok_or(JudgeFault::GridTooLarge { extent })?;
        Ok(Self {
            extent,
            bits: bitvec![u64, Lsb0; 0; cells],
        })
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let side = self.extent as i64;
        let inside = |c: i64| (0..side).contains(&c);
        if !(inside(cell.x) && inside(cell.y) && inside(cell.z)) {
            return None;
        }
        Some(((cell.x * side + cell.y) * side + cell.z) as usize)
    }

    /// Claim a cell. Returns `true` if it was unclaimed before this call.
    ///
    /// Cells outside the grid cannot be claimed and return `false`; callers
    /// range-check coordinates first.
    pub fn try_claim(&mut self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(index) => !self.bits.replace(index, true),
            None => false,
        }
    }

    /// Whether a cell has been claimed.
    pub fn is_claimed(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|index| self.bits[index])
    }

    /// Full sweep counting claimed cells.
    pub fn count_claimed(&self) -> u64 {
        self.bits.count_ones() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_is_check_and_set() {
        let mut grid = OccupancyGrid::new(4).unwrap();
        let cell = Cell::new(1, 2, 3);

        assert!(!grid.is_claimed(cell));
        assert!(grid.try_claim(cell));
        assert!(grid.is_claimed(cell));
        assert!(!grid.try_claim(cell));
        assert_eq!(grid.count_claimed(), 1);
    }

    #[test]
    fn test_corners_are_distinct() {
        let mut grid = OccupancyGrid::new(3).unwrap();
        for x in [0, 2] {
            for y in [0, 2] {
                for z in [0, 2] {
                    assert!(grid.try_claim(Cell::new(x, y, z)));
                }
            }
        }
        assert_eq!(grid.count_claimed(), 8);
        assert!(!grid.is_claimed(Cell::new(1, 1, 1)));
    }

    #[test]
    fn test_out_of_extent() {
        let mut grid = OccupancyGrid::new(2).unwrap();
        assert!(!grid.try_claim(Cell::new(2, 0, 0)));
        assert!(!grid.try_claim(Cell::new(0, -1, 0)));
        assert!(!grid.is_claimed(Cell::new(0, 0, 5)));
        assert_eq!(grid.count_claimed(), 0);
    }

    #[test]
    fn test_full_size_grid() {
        let mut grid = OccupancyGrid::new(401).unwrap();
        assert!(grid.try_claim(Cell::new(400, 400, 400)));
        assert!(grid.try_claim(Cell::new(0, 0, 0)));
        assert_eq!(grid.count_claimed(), 2);
    }

    #[test]
    fn test_oversized_grid_is_refused() {
        assert_eq!(OccupancyGrid::cell_count(401), Some(401 * 401 * 401));
        assert_eq!(OccupancyGrid::cell_count(3_000_001), None);
        assert_eq!(OccupancyGrid::cell_count(usize::MAX), None);

        assert!(matches!(
            OccupancyGrid::new(3_000_001),
            Err(JudgeFault::GridTooLarge { extent: 3_000_001 })
        ));
    }
}
