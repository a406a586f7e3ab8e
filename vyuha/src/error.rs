//! Error types for Vyuha.

use crate::core::Cell;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Vyuha error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The drive or sensor collaborator failed
    #[error("Drive error: {0}")]
    Drive(String),

    /// The step loop ran past its iteration budget
    #[error("Iteration limit of {limit} reached in phase {phase}")]
    IterationLimit {
        /// Configured iteration budget
        limit: usize,
        /// Phase the controller was in when the budget ran out
        phase: &'static str,
    },
}

impl Error {
    /// Wrap any displayable collaborator failure as a drive error.
    pub fn drive(err: impl std::fmt::Display) -> Self {
        Error::Drive(err.to_string())
    }

    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "CONFIG",
            Error::Drive(_) => "DRIVE",
            Error::IterationLimit { .. } => "ITERATION_LIMIT",
        }
    }
}

/// Non-fatal planning outcomes.
///
/// These are ordinary results of planning over partial knowledge: the
/// controller logs them and substitutes a fallback or an empty path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanningError {
    /// The queried cell carries the unreachable sentinel
    #[error("Cell {cell} is unreachable from the goal set")]
    Unreachable {
        /// Cell whose distance was queried
        cell: Cell,
    },

    /// No neighbor with a strictly smaller distance could be stepped to
    #[error("Path trace stuck at {cell}")]
    TraceStuck {
        /// Cell where the trace stopped
        cell: Cell,
    },

    /// The trace exceeded the grid's cell count
    #[error("Path trace exceeded {limit} steps")]
    StepLimitExceeded {
        /// Step ceiling (grid cell count)
        limit: usize,
    },
}

impl PlanningError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            PlanningError::Unreachable { .. } => "UNREACHABLE",
            PlanningError::TraceStuck { .. } => "TRACE_STUCK",
            PlanningError::StepLimitExceeded { .. } => "TRACE_LIMIT",
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// YAML parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Values that cannot describe a solvable maze
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
