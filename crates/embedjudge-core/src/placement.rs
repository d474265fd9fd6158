//! Vertex placement on the `z = 0` plane.

use crate::error::Rejection;
use crate::grid::OccupancyGrid;
use crate::limits::Limits;
use crate::tokens::TokenStream;
use crate::types::{Axis, Cell};

/// Where each vertex was placed. Never mutated after reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    points: Vec<Cell>,
}

impl Placement {
    /// Read `n` pairs `x y` from contestant output and claim their cells.
    pub fn read(
        tokens: &mut TokenStream<'_>,
        n: usize,
        grid: &mut OccupancyGrid,
        limits: &Limits,
    ) -> Result<Self, Rejection> {
        let mut points = Vec::with_capacity(n);

        for i in 0..n {
            let vertex = i + 1;
            let (x, y) = match (tokens.next_int(), tokens.next_int()) {
                (Some(x), Some(y)) => (x, y),
                _ => return Err(Rejection::PointMissing { vertex }),
            };
            for (axis, value) in [(Axis::X, x), (Axis::Y, y)] {
                if !limits.coord_in_range(value) {
                    return Err(Rejection::VertexCoordinateOutOfRange {
                        vertex,
                        axis,
                        value,
                    });
                }
            }

            let cell = Cell::planar(x, y);
            if !grid.try_claim(cell) {
                return Err(Rejection::PointReused { cell });
            }
            points.push(cell);
        }

        Ok(Self { points })
    }

    /// Placement of a 0-indexed vertex.
    pub fn of(&self, vertex: usize) -> Cell {
        self.points[vertex]
    }

    /// Number of placed vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the graph had no vertices to place.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
