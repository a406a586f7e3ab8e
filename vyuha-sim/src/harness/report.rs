//! Run and batch reports.

use std::fmt;

use vyuha::controller::ReturnStrategy;

/// Outcome of simulating one maze.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Entered the goal, came back to the start and finished
    pub success: bool,
    /// Single-cell advances the mouse actually made
    pub steps: usize,
    /// Quarter turns the mouse actually made
    pub turns: usize,
    /// Human-readable result
    pub reason: String,
    /// Advances while searching
    pub search_moves: usize,
    /// Advances while returning
    pub return_moves: usize,
    /// Advances during the fast run
    pub fast_moves: usize,
    /// How the return path was built, if the search finished
    pub return_strategy: Option<ReturnStrategy>,
}

impl RunReport {
    /// Failed run that never got going
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            ..Default::default()
        }
    }
}

/// Result for one maze file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeResult {
    /// File name
    pub name: String,
    /// Run outcome
    pub report: RunReport,
}

/// Aggregate over a directory of mazes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Per-maze results, in file name order
    pub results: Vec<MazeResult>,
}

impl BatchReport {
    /// Record one maze
    pub fn push(&mut self, name: impl Into<String>, report: RunReport) {
        self.results.push(MazeResult {
            name: name.into(),
            report,
        });
    }

    /// Mazes run
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Successful runs
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.report.success).count()
    }

    /// Failed runs
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Steps summed over every run, failed ones included
    pub fn total_steps(&self) -> usize {
        self.results.iter().map(|r| r.report.steps).sum()
    }

    /// Mean steps per maze (0 for an empty batch)
    pub fn average_steps(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.total_steps() as f64 / self.total() as f64
        }
    }

    /// Failing mazes
    pub fn failures(&self) -> impl Iterator<Item = &MazeResult> {
        self.results.iter().filter(|r| !r.report.success)
    }

    /// Did every maze pass?
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<6} {:<30} {:<8} {:<8} Reason",
            "#", "Maze", "Result", "Steps"
        )?;
        for (i, result) in self.results.iter().enumerate() {
            writeln!(
                f,
                "{:<6} {:<30} {:<8} {:<8} {}",
                i + 1,
                result.name,
                if result.report.success { "PASS" } else { "FAIL" },
                result.report.steps,
                result.report.reason
            )?;
        }
        writeln!(
            f,
            "RESULTS: {}/{} passed, {}/{} failed",
            self.passed(),
            self.total(),
            self.failed(),
            self.total()
        )?;
        write!(
            f,
            "AVERAGE STEPS: {:.1} (total: {})",
            self.average_steps(),
            self.total_steps()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing(steps: usize) -> RunReport {
        RunReport {
            success: true,
            steps,
            reason: "ok".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_and_average() {
        let mut batch = BatchReport::default();
        batch.push("a.maz", passing(40));
        batch.push("b.maz", RunReport::failed("Crash"));
        batch.push("c.maz", passing(80));

        assert_eq!(batch.total(), 3);
        assert_eq!(batch.passed(), 2);
        assert_eq!(batch.failed(), 1);
        assert_eq!(batch.total_steps(), 120);
        assert!((batch.average_steps() - 40.0).abs() < 1e-9);
        assert_eq!(batch.failures().next().map(|r| r.name.as_str()), Some("b.maz"));
        assert!(!batch.all_passed());
    }

    #[test]
    fn test_empty_batch() {
        let batch = BatchReport::default();
        assert_eq!(batch.average_steps(), 0.0);
        assert!(batch.all_passed());
        assert!(batch.to_string().contains("RESULTS: 0/0 passed"));
    }
}
