//! Phase state machine states.

use crate::core::{Cell, Direction};

/// A prebuilt move sequence and how far along it the robot is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathCursor {
    /// Headings to drive, one cell each
    path: Vec<Direction>,
    /// Index of the next heading to execute
    index: usize,
}

impl PathCursor {
    /// Start at the beginning of `path`
    pub fn new(path: Vec<Direction>) -> Self {
        Self { path, index: 0 }
    }

    /// Next heading to execute, without consuming it
    pub fn peek(&self) -> Option<Direction> {
        self.path.get(self.index).copied()
    }

    /// Consume the next heading
    pub fn advance(&mut self) -> Option<Direction> {
        let dir = self.peek()?;
        self.index += 1;
        Some(dir)
    }

    /// Has every heading been executed?
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.path.len()
    }

    /// Headings executed so far
    pub fn index(&self) -> usize {
        self.index
    }

    /// Headings left to execute
    pub fn remaining(&self) -> usize {
        self.path.len().saturating_sub(self.index)
    }

    /// The whole path
    pub fn path(&self) -> &[Direction] {
        &self.path
    }
}

/// Run phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Exploring with sensors toward the goal region
    #[default]
    Searching,

    /// Replaying the return path to the start cell
    Returning(PathCursor),

    /// Replaying the fastest known route to the goal region
    FastRun(PathCursor),

    /// Run complete; no further sensing, planning or movement
    Finished,
}

impl Phase {
    /// Is this the terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Finished)
    }

    /// Does this phase read the wall sensors?
    pub fn uses_sensors(&self) -> bool {
        matches!(self, Phase::Searching)
    }

    /// Cursor of the path being replayed, if any
    pub fn cursor(&self) -> Option<&PathCursor> {
        match self {
            Phase::Returning(cursor) | Phase::FastRun(cursor) => Some(cursor),
            Phase::Searching | Phase::Finished => None,
        }
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Searching => "Searching",
            Phase::Returning(_) => "Returning",
            Phase::FastRun(_) => "FastRun",
            Phase::Finished => "Finished",
        }
    }
}

/// What a single controller step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Rotated as needed and advanced one cell
    Moved {
        /// Heading of the advance
        direction: Direction,
        /// Cell entered
        cell: Cell,
    },

    /// Changed phase without moving
    Transitioned {
        /// Phase left
        from: &'static str,
        /// Phase entered
        to: &'static str,
    },

    /// Searching found no open neighbor to move to
    Stalled {
        /// Cell the robot is stuck in
        cell: Cell,
    },

    /// The run is over
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walks_path() {
        let mut cursor = PathCursor::new(vec![Direction::North, Direction::East]);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.advance(), Some(Direction::North));
        assert_eq!(cursor.peek(), Some(Direction::East));
        assert_eq!(cursor.advance(), Some(Direction::East));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_empty_cursor_is_exhausted() {
        let cursor = PathCursor::new(Vec::new());
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::default().name(), "Searching");
        assert!(Phase::Searching.uses_sensors());
        assert!(!Phase::FastRun(PathCursor::default()).uses_sensors());
        assert!(Phase::Finished.is_terminal());
        assert!(Phase::Returning(PathCursor::default()).cursor().is_some());
        assert!(Phase::Searching.cursor().is_none());
    }
}
