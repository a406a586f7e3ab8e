//! Headless batch harness.
//!
//! Runs the phase controller against a [`SimulatedMouse`] for every `.maz`
//! file in a directory and judges each run the way a maze referee would:
//! the mouse must enter the goal region, come back to the start and finish
//! its fast run without crashing or exceeding the step budget.

mod report;

use std::fs;
use std::path::PathBuf;

use log::{info, warn};
use vyuha::PhaseController;

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::maze::{MazeGenerator, MazeLayout, load_maz, save_maz};
use crate::mouse::SimulatedMouse;

pub use report::{BatchReport, MazeResult, RunReport};

enum Ending {
    Finished,
    Timeout,
    Failed(vyuha::Error),
}

/// Simulate one run through `layout`.
pub fn simulate(layout: &MazeLayout, config: &HarnessConfig) -> RunReport {
    let grid = &config.solver.grid;
    if (layout.width(), layout.height()) != (grid.width, grid.height) {
        return RunReport::failed(format!(
            "Maze is {}x{} but the solver expects {}x{}",
            layout.width(),
            layout.height(),
            grid.width,
            grid.height
        ));
    }

    let mouse = SimulatedMouse::new(layout.clone(), &config.solver);
    let mut controller = match PhaseController::new(config.solver.clone(), mouse) {
        Ok(controller) => controller,
        Err(e) => return RunReport::failed(format!("Invalid configuration: {}", e)),
    };

    let ending = loop {
        if controller.phase().is_terminal() {
            break Ending::Finished;
        }
        if controller.drive().steps() > config.max_steps {
            break Ending::Timeout;
        }
        if controller.stats().iterations >= config.solver.max_iterations {
            break Ending::Failed(vyuha::Error::IterationLimit {
                limit: config.solver.max_iterations,
                phase: controller.phase().name(),
            });
        }
        if let Err(e) = controller.step() {
            break Ending::Failed(e);
        }
    };

    let finished_in_goal = controller.summary().finished_in_goal;
    let mouse = controller.drive();
    let stats = controller.stats();
    let (success, reason) = verdict(ending, mouse, finished_in_goal, config.max_steps);

    RunReport {
        success,
        steps: mouse.steps(),
        turns: mouse.turns(),
        reason,
        search_moves: stats.search_moves,
        return_moves: stats.return_moves,
        fast_moves: stats.fast_moves,
        return_strategy: stats.return_strategy,
    }
}

/// Judge a finished simulation: goal reached, start regained, and the fast
/// run ended inside the goal region.
fn verdict(
    ending: Ending,
    mouse: &SimulatedMouse,
    finished_in_goal: bool,
    max_steps: usize,
) -> (bool, String) {
    match ending {
        Ending::Finished if !mouse.reached_goal() => {
            (false, "Finished without reaching center".to_string())
        }
        Ending::Finished if !mouse.returned_to_start() => (
            false,
            "Reached center but did not return to start".to_string(),
        ),
        Ending::Finished if !finished_in_goal => (
            false,
            format!("Fast run ended outside the goal at {}", mouse.pose().cell),
        ),
        Ending::Finished => (
            true,
            format!("Fast run complete in {} steps", mouse.steps()),
        ),
        Ending::Timeout => (false, format!("Timeout: exceeded {} steps", max_steps)),
        Ending::Failed(vyuha::Error::Drive(message)) => (
            false,
            format!(
                "{} (at {} heading {})",
                message,
                mouse.pose().cell,
                mouse.pose().heading
            ),
        ),
        Ending::Failed(e) => (false, e.to_string()),
    }
}

/// Write `config.maze_count` fresh random mazes into `config.maze_dir`.
pub fn generate_mazes(config: &HarnessConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.maze_dir)?;
    let grid = &config.solver.grid;
    let mut generator = MazeGenerator::new(grid.width, grid.height, config.seed)?;

    let mut paths = Vec::with_capacity(config.maze_count);
    for i in 0..config.maze_count {
        let path = config.maze_dir.join(format!("generated_{:03}.maz", i));
        save_maz(&generator.generate(), &path)?;
        paths.push(path);
    }
    info!(
        "[Harness] Generated {} mazes in {}",
        paths.len(),
        config.maze_dir.display()
    );
    Ok(paths)
}

/// Run every `.maz` file in `config.maze_dir`, in file name order.
///
/// Generates mazes first when `maze_count` is non-zero. Failing mazes are
/// copied into `failures_dir` for inspection in mms.
pub fn run_all(config: &HarnessConfig) -> Result<BatchReport> {
    config.validate()?;
    if config.maze_count > 0 {
        generate_mazes(config)?;
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(&config.maze_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "maz"))
        .collect();
    paths.sort();

    let mut batch = BatchReport::default();
    if paths.is_empty() {
        warn!(
            "[Harness] No .maz files found in {}",
            config.maze_dir.display()
        );
        return Ok(batch);
    }

    info!("[Harness] Running {} mazes...", paths.len());
    for (i, path) in paths.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let report = match load_maz(path) {
            Ok(layout) => simulate(&layout, config),
            Err(e) => RunReport::failed(format!("Unreadable maze: {}", e)),
        };

        info!(
            "[Harness] {:<4} {:<30} {:<4} {:>6}  {}",
            i + 1,
            name,
            if report.success { "PASS" } else { "FAIL" },
            report.steps,
            report.reason
        );

        if !report.success {
            fs::create_dir_all(&config.failures_dir)?;
            fs::copy(path, config.failures_dir.join(&name))?;
        }
        batch.push(name, report);
    }

    info!(
        "[Harness] RESULTS: {}/{} passed, average steps {:.1}",
        batch.passed(),
        batch.total(),
        batch.average_steps()
    );
    if !batch.all_passed() {
        info!(
            "[Harness] Failed mazes saved to {}",
            config.failures_dir.display()
        );
    }
    Ok(batch)
}
