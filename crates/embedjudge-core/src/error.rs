//! Error kinds raised by the judge.
//!
//! Two families exist and they must never be confused:
//!
//! - [`Rejection`]: something the contestant got wrong. Maps to `WA`.
//! - [`JudgeFault`]: broken test data or a violated internal invariant.
//!   Never maps to a verdict token; the process aborts instead.

use serde::Serialize;
use thiserror::Error;

use crate::types::{Axis, Cell};

/// Contestant-attributable defects. Vertex, edge and segment numbers are
/// 1-indexed, matching the problem statement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Point {vertex} was not given")]
    PointMissing { vertex: usize },

    #[error("{axis}-coordinate of point {vertex} is invalid: {axis}={value}")]
    VertexCoordinateOutOfRange { vertex: usize, axis: Axis, value: i64 },

    #[error("Point at {cell} is used twice")]
    PointReused { cell: Cell },

    #[error("k was not given for edge {edge}")]
    PolylineLengthMissing { edge: usize },

    #[error("k is invalid for edge {edge}: k={k}")]
    PolylineLengthInvalid { edge: usize, k: i64 },

    #[error("Nodes of polyline {edge} were not fully given")]
    PolylineIncomplete { edge: usize },

    #[error("A node of polyline {edge} is out of range: {axis}={value}")]
    NodeOutOfRange { edge: usize, axis: Axis, value: i64 },

    #[error("Endpoint of polyline {edge} does not match vertex {vertex}")]
    EndpointMismatch { edge: usize, vertex: usize },

    #[error("Segment {segment} of polyline {edge} has zero length")]
    DegenerateSegment { edge: usize, segment: usize },

    #[error("Segment {segment} of polyline {edge} is not parallel to an axis")]
    SegmentNotAxisAligned { edge: usize, segment: usize },

    #[error(
        "Polyline {edge} intersects at {cell} (self-intersection, another polyline, or an embedded point)"
    )]
    Intersection { edge: usize, cell: Cell },

    #[error("Trailing output: {token}")]
    TrailingOutput { token: String },
}

/// Judge-side defects: malformed problem input or broken invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JudgeFault {
    #[error("input broken! {what} not found")]
    InputExhausted { what: String },

    #[error("n is invalid: n={n} found (expected {min}..={max})")]
    VertexCountOutOfRange { n: i64, min: usize, max: usize },

    #[error("m is invalid: m={m} found (expected {min}..={max})")]
    EdgeCountOutOfRange { m: i64, min: usize, max: usize },

    #[error("Edge {edge} is not satisfying the constraint: u={u}, w={w}")]
    EdgeOutOfRange { edge: usize, u: i64, w: i64 },

    #[error("Multi edge was found: edge {edge} repeats ({u}, {w})")]
    DuplicateEdge { edge: usize, u: usize, w: usize },

    #[error("Vertex {vertex} has degree {degree}, more than {max}")]
    DegreeExceeded { vertex: usize, degree: usize, max: usize },

    #[error("Segment {segment} of polyline {edge} has no direction")]
    ZeroDirection { edge: usize, segment: usize },

    #[error("Endpoint {cell} of polyline {edge} is not claimed")]
    ClosureCellUnclaimed { edge: usize, cell: Cell },

    #[error("Segment {segment} of polyline {edge} exceeded {bound} steps")]
    StepBoundExceeded { edge: usize, segment: usize, bound: usize },

    #[error("Occupancy grid of side {extent} is too large to allocate")]
    GridTooLarge { extent: usize },

    #[error("Double check failed: expected={expected}; claimed={actual}")]
    RecountMismatch { expected: u64, actual: u64 },
}

/// Which family an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Reject,
    Fatal,
}

/// Either family, so pipeline stages can use `?` on both.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("wrong answer: {0}")]
    Rejected(#[from] Rejection),

    #[error("judge error: {0}")]
    Fatal(#[from] JudgeFault),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Rejected(_) => ErrorKind::Reject,
            ValidationError::Fatal(_) => ErrorKind::Fatal,
        }
    }
}
