//! Phase controller implementation.

use log::{debug, error, info, trace, warn};

use crate::config::SolverConfig;
use crate::core::{Cell, Direction, Pose, Rotation};
use crate::drive::{DisplayOverlay, MazeDrive, NullOverlay, OverlayColor};
use crate::error::{Error, Result};
use crate::grid::MazeGrid;
use crate::planning::{DistanceField, FloodMode, flood_fill};

use super::routes::{ReturnStrategy, build_fast_path, build_return_path};
use super::state::{PathCursor, Phase, StepOutcome};

/// Counters accumulated over a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Controller iterations executed
    pub iterations: usize,
    /// Cells advanced while searching
    pub search_moves: usize,
    /// Cells advanced while returning
    pub return_moves: usize,
    /// Cells advanced during the fast run
    pub fast_moves: usize,
    /// Quarter turns issued
    pub turns: usize,
    /// Search steps that found no open neighbor
    pub stalls: usize,
    /// Strategy of the return path, once built
    pub return_strategy: Option<ReturnStrategy>,
    /// Length of the fast path, once built
    pub fast_path_len: Option<usize>,
    /// Startup found every side of the start cell closed
    pub no_initial_passage: bool,
}

impl RunStats {
    /// Total cells advanced over all phases
    pub fn total_moves(&self) -> usize {
        self.search_moves + self.return_moves + self.fast_moves
    }
}

/// Outcome of [`PhaseController::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Counters for the whole run
    pub stats: RunStats,
    /// Final dead-reckoned pose
    pub pose: Pose,
    /// Did the run end inside the goal region?
    pub finished_in_goal: bool,
}

/// Four-phase maze solving controller.
///
/// Owns all run state: the wall/visit grid, the dead-reckoned pose, the
/// exploration log and the current [`Phase`]. Each [`step`](Self::step)
/// makes one decision and issues at most one rotate-then-advance sequence
/// to the drive.
///
/// ```text
/// Searching ──goal entered──► Returning ──path done──► FastRun ──goal/path done──► Finished
/// ```
pub struct PhaseController<D, O = NullOverlay> {
    /// Sensing and actuation collaborator
    drive: D,
    /// Observational display
    overlay: O,
    /// Configuration
    config: SolverConfig,
    /// Wall knowledge and visited flags
    grid: MazeGrid,
    /// Dead-reckoned pose
    pose: Pose,
    /// Current phase
    phase: Phase,
    /// Headings advanced while searching, in order
    exploration_log: Vec<Direction>,
    /// Run counters
    stats: RunStats,
    /// Startup sequence done
    initialized: bool,
}

impl<D: MazeDrive> PhaseController<D, NullOverlay> {
    /// Create a controller for a robot standing on `config.start` facing North.
    pub fn new(config: SolverConfig, drive: D) -> Result<Self> {
        config.validate()?;
        let grid = MazeGrid::from_config(&config.grid);
        let pose = Pose::new(config.start, Direction::North);
        Ok(Self {
            drive,
            overlay: NullOverlay,
            config,
            grid,
            pose,
            phase: Phase::Searching,
            exploration_log: Vec::new(),
            stats: RunStats::default(),
            initialized: false,
        })
    }
}

impl<D: MazeDrive, O: DisplayOverlay> PhaseController<D, O> {
    /// Attach a display overlay.
    pub fn with_overlay<P: DisplayOverlay>(self, overlay: P) -> PhaseController<D, P> {
        PhaseController {
            drive: self.drive,
            overlay,
            config: self.config,
            grid: self.grid,
            pose: self.pose,
            phase: self.phase,
            exploration_log: self.exploration_log,
            stats: self.stats,
            initialized: self.initialized,
        }
    }

    /// Get current phase
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Get the dead-reckoned pose
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Get the wall/visit grid
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Headings advanced while searching
    pub fn exploration_log(&self) -> &[Direction] {
        &self.exploration_log
    }

    /// Run counters so far
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Get configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Borrow the drive
    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// Mutably borrow the drive
    pub fn drive_mut(&mut self) -> &mut D {
        &mut self.drive
    }

    /// Borrow the overlay
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Give back the drive
    pub fn into_drive(self) -> D {
        self.drive
    }

    /// Give back the drive and overlay
    pub fn into_parts(self) -> (D, O) {
        (self.drive, self.overlay)
    }

    /// Snapshot of the run so far
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            stats: self.stats.clone(),
            pose: self.pose,
            finished_in_goal: self.phase.is_terminal() && self.config.is_goal(self.pose.cell),
        }
    }

    /// Startup sequence.
    ///
    /// Marks the start visited, records the walls on the grid edge around
    /// it, turns toward the first open side (front, then right, then left)
    /// and records a wall behind the robot. Runs once; later calls return
    /// immediately. [`step`](Self::step) calls it on first use.
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        self.initialized = true;

        let start = self.config.start;
        self.grid.mark_visited(start);
        self.overlay.set_color(start, OverlayColor::Green);

        for dir in Direction::ALL {
            if self.grid.neighbor(start, dir).is_none() {
                self.add_wall(start, dir);
            }
        }

        if !self.drive.wall_front()? {
            info!("[Phase] Open passage: Front. Heading: {}.", self.pose.heading);
        } else if !self.drive.wall_right()? {
            self.rotate(Rotation::Right)?;
            info!("[Phase] Open passage: Right. Heading: {}.", self.pose.heading);
        } else if !self.drive.wall_left()? {
            self.rotate(Rotation::Left)?;
            info!("[Phase] Open passage: Left. Heading: {}.", self.pose.heading);
        } else {
            error!(
                "[Phase] No open passage detected at start {}. Check sensor setup.",
                start
            );
            self.stats.no_initial_passage = true;
        }

        self.add_wall(start, self.pose.heading.opposite());
        Ok(())
    }

    /// Execute one iteration of the control loop.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.phase.is_terminal() {
            return Ok(StepOutcome::Finished);
        }
        self.initialize()?;
        self.stats.iterations += 1;

        if self.phase.uses_sensors() {
            self.sense_walls()?;
        }
        match self.phase {
            Phase::Searching => self.step_searching(),
            Phase::Returning(_) => self.step_returning(),
            Phase::FastRun(_) => self.step_fast_run(),
            Phase::Finished => Ok(StepOutcome::Finished),
        }
    }

    /// Step until [`Phase::Finished`], within `max_iterations`.
    pub fn run(&mut self) -> Result<RunSummary> {
        while !self.phase.is_terminal() {
            if self.stats.iterations >= self.config.max_iterations {
                error!(
                    "[Phase] Iteration limit {} reached while {}",
                    self.config.max_iterations,
                    self.phase.name()
                );
                return Err(Error::IterationLimit {
                    limit: self.config.max_iterations,
                    phase: self.phase.name(),
                });
            }
            self.step()?;
        }
        let summary = self.summary();
        info!(
            "[Phase] Run finished at {} after {} iterations ({} search, {} return, {} fast moves)",
            summary.pose.cell,
            summary.stats.iterations,
            summary.stats.search_moves,
            summary.stats.return_moves,
            summary.stats.fast_moves
        );
        Ok(summary)
    }

    // Phase handlers

    fn step_searching(&mut self) -> Result<StepOutcome> {
        let field = flood_fill(&self.grid, &self.config.goals, FloodMode::Full);
        self.show_distances(&field);

        let here = self.pose.cell;
        if field.get(here) == Some(0) {
            info!("[Phase] Center reached at {}! Building return path...", here);
            self.overlay.set_color(here, OverlayColor::Blue);

            let route =
                build_return_path(&self.grid, here, self.config.start, &self.exploration_log);
            self.stats.return_strategy = Some(route.strategy);
            return Ok(self.transition(Phase::Returning(PathCursor::new(route.path))));
        }

        let Some(dir) = self.best_neighbor(&field) else {
            warn!("[Phase] No open neighbor at {}, search stalled", here);
            self.stats.stalls += 1;
            return Ok(StepOutcome::Stalled { cell: here });
        };

        debug!(
            "[Phase] Searching: {} (dist {:?}) -> {}",
            here,
            field.get(here),
            dir
        );
        self.drive_heading(dir)?;
        self.exploration_log.push(dir);
        self.stats.search_moves += 1;

        Ok(StepOutcome::Moved {
            direction: dir,
            cell: self.pose.cell,
        })
    }

    fn step_returning(&mut self) -> Result<StepOutcome> {
        let (next, left) = match &mut self.phase {
            Phase::Returning(cursor) => (cursor.advance(), cursor.remaining()),
            _ => (None, 0),
        };

        if let Some(dir) = next {
            debug!("[Phase] Returning: {} -> {} ({} left)", self.pose.cell, dir, left);
            self.drive_heading(dir)?;
            self.stats.return_moves += 1;
            return Ok(StepOutcome::Moved {
                direction: dir,
                cell: self.pose.cell,
            });
        }

        let start = self.config.start;
        if self.pose.cell != start {
            warn!(
                "[Phase] Return path ended at {} instead of start {}",
                self.pose.cell, start
            );
        }
        info!("[Phase] Back at Start. Building fast path...");
        self.overlay.set_color(start, OverlayColor::Red);

        let path = build_fast_path(&self.grid, start, &self.config.goals);
        self.stats.fast_path_len = Some(path.len());
        info!("[Phase] Commencing FAST RUN...");
        Ok(self.transition(Phase::FastRun(PathCursor::new(path))))
    }

    fn step_fast_run(&mut self) -> Result<StepOutcome> {
        let (next, left) = match &mut self.phase {
            Phase::FastRun(cursor) => (cursor.advance(), cursor.remaining()),
            _ => (None, 0),
        };

        let Some(dir) = next else {
            info!("[Phase] Fast Run Complete. Mission Successful.");
            return Ok(self.transition(Phase::Finished));
        };
        debug!("[Phase] FastRun: {} -> {} ({} left)", self.pose.cell, dir, left);

        self.drive_heading(dir)?;
        self.stats.fast_moves += 1;

        if self.config.is_goal(self.pose.cell) {
            info!("[Phase] Fast Run Complete. Mission Successful.");
            self.phase = Phase::Finished;
        }

        Ok(StepOutcome::Moved {
            direction: dir,
            cell: self.pose.cell,
        })
    }

    fn transition(&mut self, next: Phase) -> StepOutcome {
        let from = self.phase.name();
        let to = next.name();
        info!("[Phase] {} -> {}", from, to);
        self.phase = next;
        StepOutcome::Transitioned { from, to }
    }

    // Sensing and decisions

    fn sense_walls(&mut self) -> Result<()> {
        let cell = self.pose.cell;
        let heading = self.pose.heading;
        if self.drive.wall_front()? {
            self.add_wall(cell, heading);
        }
        if self.drive.wall_left()? {
            self.add_wall(cell, heading.left());
        }
        if self.drive.wall_right()? {
            self.add_wall(cell, heading.right());
        }
        Ok(())
    }

    fn add_wall(&mut self, cell: Cell, direction: Direction) {
        if self.grid.register_wall(cell, direction) {
            trace!("[Phase] Wall {} of {}", direction, cell);
            self.overlay.set_wall(cell, direction);
        }
    }

    fn show_distances(&mut self, field: &DistanceField) {
        for cell in self.grid.cells() {
            match field.get(cell) {
                Some(d) if self.grid.is_visited(cell) => {
                    self.overlay.set_text(cell, &d.to_string())
                }
                _ => self.overlay.clear_text(cell),
            }
        }
    }

    /// Greedy choice among open neighbors.
    ///
    /// Score is `distance * 10`, plus one when the move needs a turn. The
    /// first direction in N, E, S, W order wins ties.
    fn best_neighbor(&self, field: &DistanceField) -> Option<Direction> {
        let here = self.pose.cell;
        let mut best: Option<(u64, Direction)> = None;
        for dir in Direction::ALL {
            let Some(next) = self.grid.open_neighbor(here, dir) else {
                continue;
            };
            let score = u64::from(field.raw(next)) * 10 + u64::from(dir != self.pose.heading);
            if best.is_none_or(|(s, _)| score < s) {
                best = Some((score, dir));
            }
        }
        best.map(|(_, dir)| dir)
    }

    // Motion

    fn drive_heading(&mut self, dir: Direction) -> Result<()> {
        for &rotation in self.pose.heading.rotations_to(dir) {
            self.rotate(rotation)?;
        }
        self.advance()
    }

    fn rotate(&mut self, rotation: Rotation) -> Result<()> {
        match rotation {
            Rotation::Left => self.drive.turn_left()?,
            Rotation::Right => self.drive.turn_right()?,
        }
        self.pose.heading = rotation.apply(self.pose.heading);
        self.stats.turns += 1;
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        self.drive.move_forward()?;
        self.pose.cell = self.pose.ahead();
        self.grid.mark_visited(self.pose.cell);
        Ok(())
    }
}
