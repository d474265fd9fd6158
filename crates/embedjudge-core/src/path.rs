//! Polyline reading and walking.
//!
//! Each edge is drawn as a rectilinear polyline. The walker steps every
//! declared segment one lattice cell at a time and claims each cell it enters,
//! so any overlap with a vertex, another polyline or itself shows up as a
//! second claim.

use tracing::debug;

use crate::error::{JudgeFault, Rejection, ValidationError};
use crate::graph::Edge;
use crate::grid::OccupancyGrid;
use crate::limits::Limits;
use crate::placement::Placement;
use crate::tokens::TokenStream;
use crate::types::{Axis, Cell};

/// A validated polyline for one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyline {
    nodes: Vec<Cell>,
}

impl Polyline {
    /// Sum of the Manhattan lengths of the declared segments.
    pub fn manhattan_length(&self) -> u64 {
        self.nodes.windows(2).map(|w| w[0].manhattan(&w[1])).sum()
    }
}

/// Reads and walks polylines against a shared grid.
pub struct PathWalker<'a> {
    limits: &'a Limits,
}

impl<'a> PathWalker<'a> {
    pub fn new(limits: &'a Limits) -> Self {
        Self { limits }
    }

    /// Read, check and claim the polyline of the `index`-th edge (0-indexed).
    pub fn walk(
        &self,
        tokens: &mut TokenStream<'_>,
        index: usize,
        edge: Edge,
        placement: &Placement,
        grid: &mut OccupancyGrid,
    ) -> Result<Polyline, ValidationError> {
        let number = index + 1;
        let nodes = self.read_nodes(tokens, number)?;

        if nodes[0] != placement.of(edge.lower) {
            return Err(Rejection::EndpointMismatch {
                edge: number,
                vertex: edge.lower + 1,
            }
            .into());
        }
        if nodes[nodes.len() - 1] != placement.of(edge.higher) {
            return Err(Rejection::EndpointMismatch {
                edge: number,
                vertex: edge.higher + 1,
            }
            .into());
        }

        let last = nodes.len() - 1;
        for (s, pair) in nodes.windows(2).enumerate() {
            self.trace_segment(number, s + 1, pair[0], pair[1], s + 1 == last, grid)?;
        }

        debug!(edge = number, nodes = nodes.len(), "Polyline walked");
        Ok(Polyline { nodes })
    }

    fn read_nodes(
        &self,
        tokens: &mut TokenStream<'_>,
        edge: usize,
    ) -> Result<Vec<Cell>, Rejection> {
        let k = tokens
            .next_int()
            .ok_or(Rejection::PolylineLengthMissing { edge })?;
        let min = self.limits.min_polyline_nodes as i64;
        let max = self.limits.max_polyline_nodes as i64;
        if !(min..=max).contains(&k) {
            return Err(Rejection::PolylineLengthInvalid { edge, k });
        }

        let mut nodes = Vec::with_capacity(k as usize);
        for _ in 0..k {
            let (x, y, z) = match (tokens.next_int(), tokens.next_int(), tokens.next_int()) {
                (Some(x), Some(y), Some(z)) => (x, y, z),
                _ => return Err(Rejection::PolylineIncomplete { edge }),
            };
            let node = Cell::new(x, y, z);
            if let Some(axis) = Axis::ALL
                .into_iter()
                .find(|&axis| !self.limits.coord_in_range(node.get(axis)))
            {
                return Err(Rejection::NodeOutOfRange {
                    edge,
                    axis,
                    value: node.get(axis),
                });
            }
            nodes.push(node);
        }

        Ok(nodes)
    }

    /// Claim every cell from the one after `from` up to `to`.
    ///
    /// On the final segment `to` is the destination vertex, which placement
    /// already claimed; it must be found claimed rather than claimed again.
    fn trace_segment(
        &self,
        edge: usize,
        segment: usize,
        from: Cell,
        to: Cell,
        last_segment: bool,
        grid: &mut OccupancyGrid,
    ) -> Result<(), ValidationError> {
        match from.differing_axes(&to) {
            1 => {}
            0 => return Err(Rejection::DegenerateSegment { edge, segment }.into()),
            _ => return Err(Rejection::SegmentNotAxisAligned { edge, segment }.into()),
        }

        let direction = from.direction_to(&to);
        if direction == (0, 0, 0) {
            return Err(JudgeFault::ZeroDirection { edge, segment }.into());
        }

        let bound = self.limits.max_segment_steps;
        let mut cell = from.offset(direction);
        for _ in 0..=bound {
            let done = cell == to;
            if last_segment && done {
                if !grid.is_claimed(cell) {
                    return Err(JudgeFault::ClosureCellUnclaimed { edge, cell }.into());
                }
                return Ok(());
            }

            if !grid.try_claim(cell) {
                return Err(Rejection::Intersection { edge, cell }.into());
            }
            if done {
                return Ok(());
            }
            cell = cell.offset(direction);
        }

        Err(JudgeFault::StepBoundExceeded {
            edge,
            segment,
            bound,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    struct Fixture {
        limits: Limits,
        grid: OccupancyGrid,
        placement: Placement,
    }

    impl Fixture {
        fn new(points: &str, n: usize) -> Self {
            let limits = Limits::default();
            let mut grid = OccupancyGrid::new(limits.grid_extent()).unwrap();
            let placement =
                Placement::read(&mut TokenStream::new(points), n, &mut grid, &limits).unwrap();
            Self {
                limits,
                grid,
                placement,
            }
        }

        fn walk(
            &mut self,
            polyline: &str,
            index: usize,
            edge: Edge,
        ) -> Result<Polyline, ValidationError> {
            let walker = PathWalker::new(&self.limits);
            walker.walk(
                &mut TokenStream::new(polyline),
                index,
                edge,
                &self.placement,
                &mut self.grid,
            )
        }
    }

    const EDGE_1_2: Edge = Edge { lower: 0, higher: 1 };

    #[test]
    fn test_straight_polyline() {
        let mut fx = Fixture::new("0 0\n0 3\n", 2);
        let polyline = fx.walk("4\n0 0 0\n0 1 0\n0 2 0\n0 3 0\n", 0, EDGE_1_2).unwrap();

        assert_eq!(polyline.manhattan_length(), 3);
        assert_eq!(fx.grid.count_claimed(), 4);
    }

    #[test]
    fn test_polyline_with_bends() {
        let mut fx = Fixture::new("0 0\n2 0\n", 2);
        // Lift off the plane, cross over, come back down.
        let polyline = fx
            .walk("4\n0 0 0\n0 0 1\n2 0 1\n2 0 0\n", 0, EDGE_1_2)
            .unwrap();

        assert!(fx.grid.is_claimed(Cell::new(1, 0, 1)));
        assert_eq!(polyline.manhattan_length(), 4);
        assert_eq!(fx.grid.count_claimed(), 2 + 3);
    }

    #[test]
    fn test_length_bounds() {
        let mut fx = Fixture::new("0 0\n0 1\n", 2);
        assert_eq!(
            fx.walk("1\n0 0 0\n", 0, EDGE_1_2),
            Err(Rejection::PolylineLengthInvalid { edge: 1, k: 1 }.into())
        );
        assert_eq!(
            fx.walk("31\n", 0, EDGE_1_2),
            Err(Rejection::PolylineLengthInvalid { edge: 1, k: 31 }.into())
        );
        assert_eq!(
            fx.walk("", 0, EDGE_1_2),
            Err(Rejection::PolylineLengthMissing { edge: 1 }.into())
        );
    }

    #[test]
    fn test_incomplete_and_out_of_range_nodes() {
        let mut fx = Fixture::new("0 0\n0 1\n", 2);
        assert_eq!(
            fx.walk("2\n0 0 0\n0 1\n", 0, EDGE_1_2),
            Err(Rejection::PolylineIncomplete { edge: 1 }.into())
        );
        assert_eq!(
            fx.walk("2\n0 0 0\n0 1 401\n", 0, EDGE_1_2),
            Err(Rejection::NodeOutOfRange {
                edge: 1,
                axis: Axis::Z,
                value: 401
            }
            .into())
        );
    }

    #[test]
    fn test_endpoint_mismatch() {
        let mut fx = Fixture::new("0 0\n0 3\n", 2);
        assert_eq!(
            fx.walk("2\n0 1 0\n0 3 0\n", 0, EDGE_1_2),
            Err(Rejection::EndpointMismatch { edge: 1, vertex: 1 }.into())
        );
        assert_eq!(
            fx.walk("2\n0 0 0\n0 4 0\n", 0, EDGE_1_2),
            Err(Rejection::EndpointMismatch { edge: 1, vertex: 2 }.into())
        );
    }

    #[test]
    fn test_segment_shape() {
        let mut fx = Fixture::new("0 0\n1 1\n", 2);
        assert_eq!(
            fx.walk("2\n0 0 0\n1 1 0\n", 0, EDGE_1_2),
            Err(Rejection::SegmentNotAxisAligned { edge: 1, segment: 1 }.into())
        );
        assert_eq!(
            fx.walk("3\n0 0 0\n0 0 0\n1 1 0\n", 0, EDGE_1_2),
            Err(Rejection::DegenerateSegment { edge: 1, segment: 1 }.into())
        );
    }

    #[test]
    fn test_self_intersection() {
        let mut fx = Fixture::new("0 0\n0 3\n", 2);
        let result = fx.walk("5\n0 0 0\n0 2 0\n0 1 0\n0 2 0\n0 3 0\n", 0, EDGE_1_2);
        assert_eq!(
            result,
            Err(Rejection::Intersection {
                edge: 1,
                cell: Cell::new(0, 1, 0)
            }
            .into())
        );
    }

    #[test]
    fn test_passing_through_a_vertex() {
        let mut fx = Fixture::new("0 0\n0 2\n0 1\n", 3);
        let result = fx.walk("2\n0 0 0\n0 2 0\n", 0, EDGE_1_2);
        assert_eq!(
            result,
            Err(Rejection::Intersection {
                edge: 1,
                cell: Cell::planar(0, 1)
            }
            .into())
        );
    }

    #[test]
    fn test_returning_to_the_start_vertex() {
        let mut fx = Fixture::new("0 0\n0 2\n", 2);
        let result = fx.walk("4\n0 0 0\n0 0 1\n0 0 0\n0 2 0\n", 0, EDGE_1_2);
        assert_eq!(
            result,
            Err(Rejection::Intersection {
                edge: 1,
                cell: Cell::planar(0, 0)
            }
            .into())
        );
    }

    #[test]
    fn test_unclaimed_destination_is_fatal() {
        let limits = Limits::default();
        let mut grid = OccupancyGrid::new(limits.grid_extent()).unwrap();
        let walker = PathWalker::new(&limits);

        let err = walker
            .trace_segment(1, 1, Cell::planar(0, 0), Cell::planar(0, 2), true, &mut grid)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fatal);
        assert_eq!(
            err,
            JudgeFault::ClosureCellUnclaimed {
                edge: 1,
                cell: Cell::planar(0, 2)
            }
            .into()
        );
    }
}
