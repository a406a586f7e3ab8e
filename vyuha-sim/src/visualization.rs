//! SVG rendering of a run.
//!
//! [`SvgOverlay`] is a [`DisplayOverlay`] that records what the controller
//! shows (discovered walls, distance annotations and cell colors) and renders
//! it on top of the ground-truth maze.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Text};
use vyuha::core::{Cell, Direction};
use vyuha::drive::{DisplayOverlay, OverlayColor};

use crate::error::Result;
use crate::maze::MazeLayout;

/// Color palette.
mod colors {
    /// Background
    pub const FLOOR: &str = "#FFFFFF";
    /// Ground-truth walls not yet discovered
    pub const HIDDEN_WALL: &str = "#CCCCCC";
    /// Walls the mouse has sensed
    pub const KNOWN_WALL: &str = "#D55E00";
    /// Distance annotations
    pub const TEXT: &str = "#333333";
}

/// Pixels per cell
const CELL_PX: f32 = 40.0;

/// Outer margin in pixels
const MARGIN_PX: f32 = 10.0;

/// Recording overlay with SVG output.
#[derive(Clone, Debug, Default)]
pub struct SvgOverlay {
    texts: BTreeMap<(i32, i32), String>,
    colors: BTreeMap<(i32, i32), OverlayColor>,
    walls: BTreeSet<(i32, i32, Direction)>,
}

impl SvgOverlay {
    /// Empty overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// Current annotation of a cell
    pub fn text(&self, cell: Cell) -> Option<&str> {
        self.texts.get(&(cell.x, cell.y)).map(String::as_str)
    }

    /// Current color of a cell
    pub fn color(&self, cell: Cell) -> Option<OverlayColor> {
        self.colors.get(&(cell.x, cell.y)).copied()
    }

    /// Number of distinct wall segments reported
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Was this wall segment reported (from either side)?
    pub fn has_wall(&self, cell: Cell, direction: Direction) -> bool {
        let (x, y, d) = canonical(cell, direction);
        self.walls.contains(&(x, y, d))
    }

    /// Render the recorded state over the ground-truth maze.
    pub fn render(&self, layout: &MazeLayout) -> Document {
        let width = layout.width() as f32 * CELL_PX + 2.0 * MARGIN_PX;
        let height = layout.height() as f32 * CELL_PX + 2.0 * MARGIN_PX;

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height));

        doc = doc.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", colors::FLOOR),
        );

        doc = doc.add(self.render_colors(layout));
        doc = doc.add(self.render_walls(layout));
        doc.add(self.render_texts(layout))
    }

    /// Render and write to `path`
    pub fn save<P: AsRef<Path>>(&self, layout: &MazeLayout, path: P) -> Result<()> {
        svg::save(path, &self.render(layout))?;
        Ok(())
    }

    fn render_colors(&self, layout: &MazeLayout) -> Group {
        let mut group = Group::new().set("id", "colors");
        for (&(x, y), color) in &self.colors {
            let (px, py) = cell_origin(layout, Cell::new(x, y));
            group = group.add(
                Rectangle::new()
                    .set("x", px)
                    .set("y", py)
                    .set("width", CELL_PX)
                    .set("height", CELL_PX)
                    .set("fill", color.css()),
            );
        }
        group
    }

    fn render_walls(&self, layout: &MazeLayout) -> Group {
        let mut group = Group::new().set("id", "walls");
        for cell in layout.cells() {
            for dir in Direction::ALL {
                // Interior sides are drawn once, from the south/west cell
                let interior = layout.in_bounds(cell.step(dir));
                if interior && matches!(dir, Direction::South | Direction::West) {
                    continue;
                }
                if !layout.wall(cell, dir) {
                    continue;
                }
                let known = self.has_wall(cell, dir) || !interior;
                let ((x1, y1), (x2, y2)) = side_segment(layout, cell, dir);
                group = group.add(
                    Line::new()
                        .set("x1", x1)
                        .set("y1", y1)
                        .set("x2", x2)
                        .set("y2", y2)
                        .set(
                            "stroke",
                            if known {
                                colors::KNOWN_WALL
                            } else {
                                colors::HIDDEN_WALL
                            },
                        )
                        .set("stroke-width", if known { 3 } else { 1 }),
                );
            }
        }
        group
    }

    fn render_texts(&self, layout: &MazeLayout) -> Group {
        let mut group = Group::new().set("id", "distances");
        for (&(x, y), text) in &self.texts {
            let (px, py) = cell_origin(layout, Cell::new(x, y));
            group = group.add(
                Text::new(text.as_str())
                    .set("x", px + CELL_PX / 2.0)
                    .set("y", py + CELL_PX / 2.0 + 4.0)
                    .set("font-size", 12)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("fill", colors::TEXT),
            );
        }
        group
    }
}

impl DisplayOverlay for SvgOverlay {
    fn set_text(&mut self, cell: Cell, text: &str) {
        self.texts.insert((cell.x, cell.y), text.to_string());
    }

    fn clear_text(&mut self, cell: Cell) {
        self.texts.remove(&(cell.x, cell.y));
    }

    fn set_color(&mut self, cell: Cell, color: OverlayColor) {
        self.colors.insert((cell.x, cell.y), color);
    }

    fn set_wall(&mut self, cell: Cell, direction: Direction) {
        self.walls.insert(canonical(cell, direction));
    }
}

/// Store each wall segment once, as the north or east side of a cell.
fn canonical(cell: Cell, direction: Direction) -> (i32, i32, Direction) {
    match direction {
        Direction::South | Direction::West => {
            let other = cell.step(direction);
            (other.x, other.y, direction.opposite())
        }
        Direction::North | Direction::East => (cell.x, cell.y, direction),
    }
}

/// Top-left pixel of a cell; SVG y grows downward, maze y grows north.
fn cell_origin(layout: &MazeLayout, cell: Cell) -> (f32, f32) {
    let row_from_top = layout.height() as i32 - 1 - cell.y;
    (
        MARGIN_PX + cell.x as f32 * CELL_PX,
        MARGIN_PX + row_from_top as f32 * CELL_PX,
    )
}

fn side_segment(layout: &MazeLayout, cell: Cell, dir: Direction) -> ((f32, f32), (f32, f32)) {
    let (left, top) = cell_origin(layout, cell);
    let (right, bottom) = (left + CELL_PX, top + CELL_PX);
    match dir {
        Direction::North => ((left, top), (right, top)),
        Direction::East => ((right, top), (right, bottom)),
        Direction::South => ((left, bottom), (right, bottom)),
        Direction::West => ((left, top), (left, bottom)),
    }
}
