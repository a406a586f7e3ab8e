//! In-process simulated mouse.

use log::{trace, warn};
use vyuha::SolverConfig;
use vyuha::core::{Cell, Direction, Pose};
use vyuha::drive::{Actuator, WallSensor};

use crate::error::Error;
use crate::maze::MazeLayout;

/// A mouse driving through a ground-truth [`MazeLayout`].
///
/// Senses walls relative to its true heading and refuses to drive through
/// walls. Also keeps the bookkeeping a harness needs to judge a run.
#[derive(Clone, Debug)]
pub struct SimulatedMouse {
    layout: MazeLayout,
    pose: Pose,
    start: Cell,
    goals: Vec<Cell>,
    steps: usize,
    turns: usize,
    sensor_reads: usize,
    reached_goal: bool,
    returned_to_start: bool,
}

impl SimulatedMouse {
    /// Place a mouse on the configured start cell, facing North
    pub fn new(layout: MazeLayout, config: &SolverConfig) -> Self {
        Self {
            layout,
            pose: Pose::new(config.start, Direction::North),
            start: config.start,
            goals: config.goals.clone(),
            steps: 0,
            turns: 0,
            sensor_reads: 0,
            reached_goal: false,
            returned_to_start: false,
        }
    }

    /// True pose
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Ground-truth maze
    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    /// Completed single-cell advances
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Quarter turns performed
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Wall sensor queries answered
    pub fn sensor_reads(&self) -> usize {
        self.sensor_reads
    }

    /// Has the mouse entered a goal cell?
    pub fn reached_goal(&self) -> bool {
        self.reached_goal
    }

    /// Has the mouse re-entered the start cell after reaching the goal?
    pub fn returned_to_start(&self) -> bool {
        self.returned_to_start
    }

    fn sense(&mut self, direction: Direction) -> bool {
        self.sensor_reads += 1;
        self.layout.wall(self.pose.cell, direction)
    }
}

impl WallSensor for SimulatedMouse {
    fn wall_front(&mut self) -> vyuha::Result<bool> {
        Ok(self.sense(self.pose.heading))
    }

    fn wall_left(&mut self) -> vyuha::Result<bool> {
        Ok(self.sense(self.pose.heading.left()))
    }

    fn wall_right(&mut self) -> vyuha::Result<bool> {
        Ok(self.sense(self.pose.heading.right()))
    }
}

impl Actuator for SimulatedMouse {
    fn turn_left(&mut self) -> vyuha::Result<()> {
        self.pose.heading = self.pose.heading.left();
        self.turns += 1;
        Ok(())
    }

    fn turn_right(&mut self) -> vyuha::Result<()> {
        self.pose.heading = self.pose.heading.right();
        self.turns += 1;
        Ok(())
    }

    fn move_forward(&mut self) -> vyuha::Result<()> {
        let Pose { cell, heading } = self.pose;
        if self.layout.wall(cell, heading) {
            warn!("[Sim] Crash into {} wall of {}", heading, cell);
            return Err(Error::Crash(format!("wall {} of {}", heading, cell)).into());
        }

        let next = self.pose.ahead();
        self.pose.cell = next;
        self.steps += 1;
        trace!("[Sim] Advanced to {}", next);

        if self.goals.contains(&next) {
            self.reached_goal = true;
        } else if next == self.start && self.reached_goal {
            self.returned_to_start = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> MazeLayout {
        // 3x1 strip, open from (0,0) to (2,0)
        MazeLayout::new(3, 1)
    }

    fn corridor_config() -> SolverConfig {
        SolverConfig::for_size(3).with_goals([Cell::new(2, 0)])
    }

    #[test]
    fn test_sensing_is_relative() {
        let mut mouse = SimulatedMouse::new(corridor(), &corridor_config());
        assert!(mouse.wall_front().unwrap());
        assert!(mouse.wall_left().unwrap());
        assert!(!mouse.wall_right().unwrap());
        mouse.turn_right().unwrap();
        assert!(!mouse.wall_front().unwrap());
        assert_eq!(mouse.sensor_reads(), 4);
    }

    #[test]
    fn test_crash_is_drive_error() {
        let mut mouse = SimulatedMouse::new(corridor(), &corridor_config());
        let err = mouse.move_forward().unwrap_err();
        assert_eq!(err.code(), "DRIVE");
        assert_eq!(mouse.steps(), 0);
        assert_eq!(mouse.pose().cell, Cell::ORIGIN);
    }

    #[test]
    fn test_goal_then_start_tracking() {
        let mut mouse = SimulatedMouse::new(corridor(), &corridor_config());
        mouse.turn_right().unwrap();
        mouse.move_forward().unwrap();
        mouse.move_forward().unwrap();
        assert!(mouse.reached_goal());
        assert!(!mouse.returned_to_start());

        mouse.turn_left().unwrap();
        mouse.turn_left().unwrap();
        mouse.move_forward().unwrap();
        mouse.move_forward().unwrap();
        assert!(mouse.returned_to_start());
        assert_eq!(mouse.steps(), 4);
        assert_eq!(mouse.turns(), 3);
    }
}
