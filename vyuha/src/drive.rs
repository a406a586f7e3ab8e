//! Drive, sensor and display collaborator traits.
//!
//! The decision engine never talks to hardware directly. Anything that can
//! sense walls relative to the robot and perform blocking quarter turns and
//! single-cell advances can drive it: a real mouse, the mms simulator, or
//! the in-process simulated mouse used by the test harness.
//!
//! All calls block until the physical action has completed.

use crate::core::{Cell, Direction};
use crate::error::Result;

/// Wall sensing relative to the robot's current heading.
pub trait WallSensor {
    /// Is there a wall directly ahead?
    fn wall_front(&mut self) -> Result<bool>;

    /// Is there a wall on the left side?
    fn wall_left(&mut self) -> Result<bool>;

    /// Is there a wall on the right side?
    fn wall_right(&mut self) -> Result<bool>;
}

/// Blocking motion primitives.
pub trait Actuator {
    /// Rotate exactly 90° counter-clockwise in place.
    fn turn_left(&mut self) -> Result<()>;

    /// Rotate exactly 90° clockwise in place.
    fn turn_right(&mut self) -> Result<()>;

    /// Advance exactly one cell along the current heading.
    fn move_forward(&mut self) -> Result<()>;
}

/// A complete drive: sensing plus actuation.
pub trait MazeDrive: WallSensor + Actuator {}

impl<T: WallSensor + Actuator> MazeDrive for T {}

impl<T: WallSensor + ?Sized> WallSensor for &mut T {
    fn wall_front(&mut self) -> Result<bool> {
        (**self).wall_front()
    }

    fn wall_left(&mut self) -> Result<bool> {
        (**self).wall_left()
    }

    fn wall_right(&mut self) -> Result<bool> {
        (**self).wall_right()
    }
}

impl<T: Actuator + ?Sized> Actuator for &mut T {
    fn turn_left(&mut self) -> Result<()> {
        (**self).turn_left()
    }

    fn turn_right(&mut self) -> Result<()> {
        (**self).turn_right()
    }

    fn move_forward(&mut self) -> Result<()> {
        (**self).move_forward()
    }
}

/// Cell highlight colors understood by the mms simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayColor {
    /// Start cell at launch
    Green,
    /// Goal cell on arrival
    Blue,
    /// Start cell after the return trip
    Red,
    /// General purpose marker
    Yellow,
}

impl OverlayColor {
    /// Single-character mms color code
    pub fn code(self) -> char {
        match self {
            OverlayColor::Green => 'G',
            OverlayColor::Blue => 'B',
            OverlayColor::Red => 'R',
            OverlayColor::Yellow => 'Y',
        }
    }

    /// CSS color used by SVG renderers
    pub fn css(self) -> &'static str {
        match self {
            OverlayColor::Green => "#7CCF7C",
            OverlayColor::Blue => "#7CA6CF",
            OverlayColor::Red => "#CF7C7C",
            OverlayColor::Yellow => "#E8D96B",
        }
    }
}

/// Purely observational display layer.
///
/// Nothing written here ever feeds back into a decision. Every method has a
/// no-op default so implementors only override what they can show.
pub trait DisplayOverlay {
    /// Annotate a cell with text (e.g. its flood distance).
    fn set_text(&mut self, _cell: Cell, _text: &str) {}

    /// Remove a cell annotation.
    fn clear_text(&mut self, _cell: Cell) {}

    /// Highlight a cell.
    fn set_color(&mut self, _cell: Cell, _color: OverlayColor) {}

    /// Draw a discovered wall segment.
    fn set_wall(&mut self, _cell: Cell, _direction: Direction) {}
}

impl<T: DisplayOverlay + ?Sized> DisplayOverlay for &mut T {
    fn set_text(&mut self, cell: Cell, text: &str) {
        (**self).set_text(cell, text)
    }

    fn clear_text(&mut self, cell: Cell) {
        (**self).clear_text(cell)
    }

    fn set_color(&mut self, cell: Cell, color: OverlayColor) {
        (**self).set_color(cell, color)
    }

    fn set_wall(&mut self, cell: Cell, direction: Direction) {
        (**self).set_wall(cell, direction)
    }
}

/// Overlay that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullOverlay;

impl DisplayOverlay for NullOverlay {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        texts: usize,
    }

    impl DisplayOverlay for Counter {
        fn set_text(&mut self, _cell: Cell, _text: &str) {
            self.texts += 1;
        }
    }

    #[test]
    fn test_overlay_defaults_are_noops() {
        let mut overlay = Counter { texts: 0 };
        overlay.set_text(Cell::ORIGIN, "1");
        overlay.set_color(Cell::ORIGIN, OverlayColor::Green);
        overlay.set_wall(Cell::ORIGIN, Direction::South);
        overlay.clear_text(Cell::ORIGIN);
        assert_eq!(overlay.texts, 1);
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(OverlayColor::Green.code(), 'G');
        assert_eq!(OverlayColor::Blue.code(), 'B');
        assert_eq!(OverlayColor::Red.code(), 'R');
        assert!(OverlayColor::Yellow.css().starts_with('#'));
    }
}
