//! Core types shared across the judge pipeline.

use serde::Serialize;
use std::fmt;

/// An integer lattice point `(x, y, z)`.
///
/// Coordinates are kept signed so that values read from contestant output can
/// be represented before their range is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// A point on the `z = 0` plane, where vertices are placed.
    pub const fn planar(x: i64, y: i64) -> Self {
        Self { x, y, z: 0 }
    }

    /// Coordinate along the given axis.
    pub fn get(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(&self, other: &Cell) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// Number of axes along which the two cells differ.
    pub fn differing_axes(&self, other: &Cell) -> usize {
        Axis::ALL
            .iter()
            .filter(|&&axis| self.get(axis) != other.get(axis))
            .count()
    }

    /// Unit step direction from `self` toward `other`, one signum per axis.
    pub fn direction_to(&self, other: &Cell) -> (i64, i64, i64) {
        (
            (other.x - self.x).signum(),
            (other.y - self.y).signum(),
            (other.z - self.z).signum(),
        )
    }

    pub fn offset(&self, (dx, dy, dz): (i64, i64, i64)) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A lattice axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}
