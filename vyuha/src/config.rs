//! Solver configuration.
//!
//! Loaded from YAML with sensible defaults for the 10×10 competition maze.
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   width: 10
//!   height: 10
//! start: { x: 0, y: 0 }
//! goals:
//!   - { x: 4, y: 4 }
//!   - { x: 4, y: 5 }
//!   - { x: 5, y: 4 }
//!   - { x: 5, y: 5 }
//! max_iterations: 5000
//! ```
//!
//! Every field is optional; missing fields take the defaults. A missing
//! `goals` list becomes the central region of the configured grid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Cell;
use crate::error::ConfigError;
use crate::grid::GridConfig;

/// Complete configuration for one run of the decision engine
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SolverConfigFile")]
pub struct SolverConfig {
    /// Grid dimensions
    pub grid: GridConfig,

    /// Start cell; the return phase heads here and the fast run departs from here
    pub start: Cell,

    /// Goal region; entering any of these ends the search and the fast run
    pub goals: Vec<Cell>,

    /// Upper bound on controller iterations for [`run`](crate::PhaseController::run)
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        let grid = GridConfig::default();
        let goals = grid.center_cells();
        Self {
            grid,
            start: Cell::ORIGIN,
            goals,
            max_iterations: 5000,
        }
    }
}

/// On-disk shape of [`SolverConfig`]; goals depend on the grid, so they
/// are filled in after the grid is known.
#[derive(Deserialize)]
#[serde(default)]
struct SolverConfigFile {
    grid: GridConfig,
    start: Cell,
    goals: Option<Vec<Cell>>,
    max_iterations: usize,
}

impl Default for SolverConfigFile {
    fn default() -> Self {
        let defaults = SolverConfig::default();
        Self {
            grid: defaults.grid,
            start: defaults.start,
            goals: None,
            max_iterations: defaults.max_iterations,
        }
    }
}

impl From<SolverConfigFile> for SolverConfig {
    fn from(file: SolverConfigFile) -> Self {
        let goals = file.goals.unwrap_or_else(|| file.grid.center_cells());
        Self {
            grid: file.grid,
            start: file.start,
            goals,
            max_iterations: file.max_iterations,
        }
    }
}

impl SolverConfig {
    /// Square maze of `size` × `size` with the central goal region
    pub fn for_size(size: usize) -> Self {
        let grid = GridConfig::square(size);
        let goals = grid.center_cells();
        Self {
            grid,
            goals,
            ..Default::default()
        }
    }

    /// Replace the goal region
    pub fn with_goals(mut self, goals: impl IntoIterator<Item = Cell>) -> Self {
        self.goals = goals.into_iter().collect();
        self
    }

    /// Replace the start cell
    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = start;
        self
    }

    /// Replace the iteration budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Is `cell` part of the goal region?
    pub fn is_goal(&self, cell: Cell) -> bool {
        self.goals.contains(&cell)
    }

    /// Check that the configuration describes a usable maze
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.grid.width, self.grid.height);
        if w == 0 || h == 0 {
            return Err(ConfigError::Invalid(format!("grid is {}x{}", w, h)));
        }
        let in_bounds =
            |c: &Cell| c.x >= 0 && c.y >= 0 && (c.x as usize) < w && (c.y as usize) < h;
        if !in_bounds(&self.start) {
            return Err(ConfigError::Invalid(format!(
                "start {} outside {}x{} grid",
                self.start, w, h
            )));
        }
        if self.goals.is_empty() {
            return Err(ConfigError::Invalid("goal set is empty".to_string()));
        }
        if let Some(goal) = self.goals.iter().find(|g| !in_bounds(g)) {
            return Err(ConfigError::Invalid(format!(
                "goal {} outside {}x{} grid",
                goal, w, h
            )));
        }
        if self.is_goal(self.start) {
            return Err(ConfigError::Invalid(format!(
                "start {} is inside the goal region",
                self.start
            )));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid("max_iterations is 0".to_string()));
        }
        Ok(())
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.grid.width, 10);
        assert_eq!(config.start, Cell::ORIGIN);
        assert_eq!(config.goals.len(), 4);
        assert!(config.is_goal(Cell::new(5, 5)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_size() {
        let config = SolverConfig::for_size(16);
        assert_eq!(config.grid.cell_count(), 256);
        assert!(config.is_goal(Cell::new(7, 8)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_goals() {
        let config = SolverConfig::default().with_goals([Cell::new(10, 3)]);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = SolverConfig::default().with_goals(Vec::new());
        assert!(config.validate().is_err());

        let config = SolverConfig::default().with_goals([Cell::ORIGIN]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = SolverConfig::from_yaml("max_iterations: 42\n").unwrap();
        assert_eq!(config.max_iterations, 42);
        assert_eq!(config.grid, GridConfig::default());
        assert_eq!(config.goals.len(), 4);
    }

    #[test]
    fn test_missing_goals_follow_grid_size() {
        let config = SolverConfig::from_yaml("grid:\n  width: 16\n  height: 16\n").unwrap();
        assert_eq!(config.goals, GridConfig::square(16).center_cells());
        assert!(config.is_goal(Cell::new(7, 7)));
        assert!(!config.is_goal(Cell::new(4, 4)));
    }

    #[test]
    fn test_explicit_goals_are_kept() {
        let yaml = "grid:\n  width: 16\n  height: 16\ngoals:\n  - { x: 2, y: 3 }\n";
        let config = SolverConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.goals, vec![Cell::new(2, 3)]);
    }

    #[test]
    fn test_yaml_serialization() {
        let config = SolverConfig::for_size(6).with_max_iterations(900);
        let yaml = config.to_yaml().unwrap();
        let parsed = SolverConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solver.yaml");
        let config = SolverConfig::for_size(8);
        config.to_yaml_file(&path).unwrap();
        assert_eq!(SolverConfig::from_yaml_file(&path).unwrap(), config);

        let missing = SolverConfig::from_yaml_file(&dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = SolverConfig::from_yaml("grid: [1, 2");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
