//! Independent recount of claimed cells.
//!
//! Every vertex claims one cell and every polyline claims one cell per unit
//! of length, except its destination which the vertex already owns. If the
//! grid disagrees, the walker has a bug, so this is never a rejection.

use serde::Serialize;

use crate::error::JudgeFault;
use crate::grid::OccupancyGrid;
use crate::path::Polyline;

/// Expected and actual claimed-cell totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recount {
    pub expected: u64,
    pub actual: u64,
}

pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Claimed cells implied by `n` vertices and the walked polylines.
    pub fn expected_cells(n: usize, polylines: &[Polyline]) -> u64 {
        let drawn: u64 = polylines.iter().map(Polyline::manhattan_length).sum();
        n as u64 + drawn - polylines.len() as u64
    }

    /// Compare the implied total against a full sweep of the grid.
    pub fn recheck(
        n: usize,
        polylines: &[Polyline],
        grid: &OccupancyGrid,
    ) -> Result<Recount, JudgeFault> {
        let expected = Self::expected_cells(n, polylines);
        let actual = grid.count_claimed();
        if expected != actual {
            return Err(JudgeFault::RecountMismatch { expected, actual });
        }
        Ok(Recount { expected, actual })
    }
}
