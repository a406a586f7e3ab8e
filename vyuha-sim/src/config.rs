//! Harness configuration.
//!
//! Loaded from TOML. Every field is optional.
//!
//! ```toml
//! max_steps = 5000
//! maze_dir = "mazes"
//! failures_dir = "failures"
//! seed = 0
//! maze_count = 0
//!
//! [solver]
//! max_iterations = 5000
//! start = { x = 0, y = 0 }
//!
//! [solver.grid]
//! width = 10
//! height = 10
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vyuha::SolverConfig;

use crate::error::{Error, Result};

/// Batch harness configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Advances allowed per maze before the run counts as stuck
    pub max_steps: usize,

    /// Directory scanned for `.maz` files
    pub maze_dir: PathBuf,

    /// Directory failing mazes are copied into
    pub failures_dir: PathBuf,

    /// Generator seed; 0 draws from entropy
    pub seed: u64,

    /// Mazes to generate into `maze_dir` before the batch (0 = none)
    pub maze_count: usize,

    /// Decision engine configuration
    pub solver: SolverConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            max_steps: 5000,
            maze_dir: PathBuf::from("mazes"),
            failures_dir: PathBuf::from("failures"),
            seed: 0,
            maze_count: 0,
            solver: SolverConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: HarnessConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check limits and the embedded solver configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(Error::Config("max_steps is 0".to_string()));
        }
        self.solver
            .validate()
            .map_err(|e| Error::Config(e.to_string()))
    }
}
