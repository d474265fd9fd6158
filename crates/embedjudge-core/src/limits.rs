//! Problem constants and their YAML configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::grid::{OccupancyGrid, MAX_GRID_CELLS};

/// Errors that can occur when loading limits.
#[derive(Error, Debug)]
pub enum LimitsError {
    #[error("Failed to read limits file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Limits validation failed: {0}")]
    ValidationError(String),
}

/// Bounds on the problem input and the contestant output.
///
/// `Limits::default()` is the official problem. Every field may be overridden
/// from YAML; omitted fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub min_edges: usize,
    pub max_edges: usize,

    /// Maximum number of edges incident to one vertex
    pub max_degree: usize,

    /// Coordinates lie in `[0, max_coord]` on every axis
    pub max_coord: i64,

    pub min_polyline_nodes: usize,
    pub max_polyline_nodes: usize,

    /// Unit steps allowed per declared segment before the walker gives up
    pub max_segment_steps: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_vertices: 2,
            max_vertices: 1600,
            min_edges: 1,
            max_edges: 4000,
            max_degree: 5,
            max_coord: 400,
            min_polyline_nodes: 2,
            max_polyline_nodes: 30,
            max_segment_steps: 800,
        }
    }
}

impl Limits {
    /// Parse limits from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, LimitsError> {
        let limits: Limits = serde_yaml::from_str(yaml)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Parse limits from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, LimitsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Side length of the occupancy grid.
    pub fn grid_extent(&self) -> usize {
        (self.max_coord as usize).saturating_add(1)
    }

    pub fn coord_in_range(&self, value: i64) -> bool {
        (0..=self.max_coord).contains(&value)
    }

    /// Check that the bounds are coherent.
    pub fn validate(&self) -> Result<(), LimitsError> {
        let invalid = |msg: String| Err(LimitsError::ValidationError(msg));

        if self.min_vertices < 2 || self.min_vertices > self.max_vertices {
            return invalid(format!(
                "vertex bounds {}..={} are invalid",
                self.min_vertices, self.max_vertices
            ));
        }
        if self.min_edges < 1 || self.min_edges > self.max_edges {
            return invalid(format!(
                "edge bounds {}..={} are invalid",
                self.min_edges, self.max_edges
            ));
        }
        if self.max_degree == 0 {
            return invalid("max_degree must be positive".to_string());
        }
        if self.max_coord < 0 {
            return invalid(format!("max_coord={} is negative", self.max_coord));
        }
        if OccupancyGrid::cell_count(self.grid_extent()).is_none() {
            return invalid(format!(
                "max_coord={} needs more than {} grid cells",
                self.max_coord, MAX_GRID_CELLS
            ));
        }
        if self.min_polyline_nodes < 2 || self.min_polyline_nodes > self.max_polyline_nodes {
            return invalid(format!(
                "polyline node bounds {}..={} are invalid",
                self.min_polyline_nodes, self.max_polyline_nodes
            ));
        }
        // A segment spans at most max_coord cells.
        if (self.max_segment_steps as u64) < 2 * self.max_coord as u64 {
            return invalid(format!(
                "max_segment_steps={} is below twice max_coord={}",
                self.max_segment_steps, self.max_coord
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let limits = Limits::default();
        assert!(limits.validate().is_ok());
        assert_eq!(limits.grid_extent(), 401);
        assert!(limits.coord_in_range(400));
        assert!(!limits.coord_in_range(-1));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let limits = Limits::from_yaml("max_coord: 10\nmax_segment_steps: 20\n").unwrap();
        assert_eq!(limits.max_coord, 10);
        assert_eq!(limits.max_vertices, 1600);
        assert_eq!(limits.grid_extent(), 11);
    }

    #[test]
    fn test_incoherent_bounds_rejected() {
        let result = Limits::from_yaml("min_edges: 10\nmax_edges: 5\n");
        assert!(matches!(result, Err(LimitsError::ValidationError(_))));

        let result = Limits::from_yaml("max_segment_steps: 10\n");
        assert!(matches!(result, Err(LimitsError::ValidationError(_))));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let result = Limits::from_yaml("max_coord: 3000000\nmax_segment_steps: 6000000\n");
        assert!(matches!(result, Err(LimitsError::ValidationError(_))));

        let result = Limits::from_yaml(&format!(
            "max_coord: {}\nmax_segment_steps: {}\n",
            i64::MAX,
            u64::MAX
        ));
        assert!(matches!(result, Err(LimitsError::ValidationError(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Limits::from_yaml("max_cord: 10\n");
        assert!(matches!(result, Err(LimitsError::YamlError(_))));
    }
}
