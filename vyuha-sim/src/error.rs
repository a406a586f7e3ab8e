//! Error types for the simulation crate.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Simulation error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed `.maz` content
    #[error("Maze format error at line {line}: {message}")]
    MazeFormat {
        /// 1-based line number, 0 when the error is not tied to a line
        line: usize,
        /// What was wrong
        message: String,
    },

    /// The mouse drove into a wall or off the grid
    #[error("Crash: {0}")]
    Crash(String),

    /// Unexpected simulator response
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Invalid or unreadable harness configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The decision engine failed
    #[error("Solver error: {0}")]
    Solver(#[from] vyuha::Error),
}

impl Error {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Io(_) => "IO",
            Error::MazeFormat { .. } => "MAZE_FORMAT",
            Error::Crash(_) => "CRASH",
            Error::Protocol(_) => "PROTOCOL",
            Error::Config(_) => "CONFIG",
            Error::Solver(e) => e.code(),
        }
    }

    pub(crate) fn maze_format(line: usize, message: impl Into<String>) -> Self {
        Error::MazeFormat {
            line,
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}

/// Drive failures surface to the controller as [`vyuha::Error::Drive`].
impl From<Error> for vyuha::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Solver(inner) => inner,
            other => vyuha::Error::drive(other),
        }
    }
}
