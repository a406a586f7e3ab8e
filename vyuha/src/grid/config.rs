//! Configuration types for the maze grid.

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// Grid dimensions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

impl GridConfig {
    /// Square grid of `size` × `size` cells
    pub fn square(size: usize) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The central goal region.
    ///
    /// A 2×2 block for even sides; a single row or column collapses to one
    /// cell on the odd axis.
    pub fn center_cells(&self) -> Vec<Cell> {
        let xs = center_span(self.width);
        let ys = center_span(self.height);
        let mut cells = Vec::with_capacity(xs.len() * ys.len());
        for &x in &xs {
            for &y in &ys {
                cells.push(Cell::new(x, y));
            }
        }
        cells
    }
}

fn center_span(len: usize) -> Vec<i32> {
    let half = (len / 2) as i32;
    if len % 2 == 0 && len >= 2 {
        vec![half - 1, half]
    } else {
        vec![half]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.cell_count(), 100);
    }

    #[test]
    fn test_center_cells_even() {
        let cells = GridConfig::square(10).center_cells();
        assert_eq!(
            cells,
            vec![
                Cell::new(4, 4),
                Cell::new(4, 5),
                Cell::new(5, 4),
                Cell::new(5, 5)
            ]
        );
        assert_eq!(GridConfig::square(16).center_cells()[0], Cell::new(7, 7));
    }

    #[test]
    fn test_center_cells_odd() {
        assert_eq!(GridConfig::square(5).center_cells(), vec![Cell::new(2, 2)]);
        let strip = GridConfig {
            width: 4,
            height: 1,
        };
        assert_eq!(strip.center_cells(), vec![Cell::new(1, 0), Cell::new(2, 0)]);
    }
}
