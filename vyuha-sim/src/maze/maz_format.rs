//! `.maz` maze files.
//!
//! One line per cell: `x y n e s w`, where each wall flag is `1` (wall) or
//! `0` (open). The grid size is taken from the largest coordinates, which
//! must stay below [`MAX_SIDE`]. Blank lines and `#` comments are skipped.
//!
//! ```text
//! 0 0 0 1 1 1
//! 0 1 1 0 0 1
//! ...
//! ```
//!
//! Cells missing from the file keep only the outer boundary plus whatever
//! their neighbors declare. When two neighbors disagree about a shared
//! side the wall wins.

use std::fs;
use std::path::Path;

use log::{debug, info};
use vyuha::core::{Cell, Direction};

use super::MazeLayout;
use crate::error::{Error, Result};

/// Flag order on each line after the coordinates
const FLAG_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// Largest accepted maze side
pub const MAX_SIDE: usize = 256;

struct CellLine {
    cell: Cell,
    walls: [bool; 4],
}

/// Parse `.maz` text into a layout.
pub fn parse_maz(text: &str) -> Result<MazeLayout> {
    let mut entries = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        entries.push(parse_line(line, index + 1)?);
    }

    if entries.is_empty() {
        return Err(Error::maze_format(0, "no cells"));
    }

    let width = entries.iter().map(|e| e.cell.x).max().unwrap_or(0) as usize + 1;
    let height = entries.iter().map(|e| e.cell.y).max().unwrap_or(0) as usize + 1;

    let mut layout = MazeLayout::new(width, height);
    for entry in &entries {
        for (dir, &wall) in FLAG_ORDER.iter().zip(&entry.walls) {
            if wall {
                layout.set_wall(entry.cell, *dir);
            }
        }
    }

    debug!(
        "[Maze] Parsed {}x{} maze from {} lines",
        width,
        height,
        entries.len()
    );
    Ok(layout)
}

fn parse_line(line: &str, number: usize) -> Result<CellLine> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(Error::maze_format(
            number,
            format!("expected 6 fields, found {}", fields.len()),
        ));
    }

    let coord = |s: &str, name: &str| -> Result<i32> {
        let value = s.parse::<i32>().ok().filter(|v| *v >= 0).ok_or_else(|| {
            Error::maze_format(number, format!("invalid {} coordinate '{}'", name, s))
        })?;
        if value as usize >= MAX_SIDE {
            return Err(Error::maze_format(
                number,
                format!("{} coordinate {} exceeds maximum side {}", name, value, MAX_SIDE),
            ));
        }
        Ok(value)
    };
    let cell = Cell::new(coord(fields[0], "x")?, coord(fields[1], "y")?);

    let mut walls = [false; 4];
    for (slot, s) in walls.iter_mut().zip(&fields[2..]) {
        *slot = match *s {
            "1" => true,
            "0" => false,
            other => {
                return Err(Error::maze_format(
                    number,
                    format!("wall flag must be 0 or 1, found '{}'", other),
                ));
            }
        };
    }

    Ok(CellLine { cell, walls })
}

/// Render a layout as `.maz` text, column by column.
pub fn write_maz(layout: &MazeLayout) -> String {
    let mut out = String::with_capacity(layout.width() * layout.height() * 12);
    for x in 0..layout.width() as i32 {
        for y in 0..layout.height() as i32 {
            let cell = Cell::new(x, y);
            let flags: Vec<&str> = FLAG_ORDER
                .iter()
                .map(|&dir| if layout.wall(cell, dir) { "1" } else { "0" })
                .collect();
            out.push_str(&format!("{} {} {}\n", x, y, flags.join(" ")));
        }
    }
    out
}

/// Load a `.maz` file
pub fn load_maz<P: AsRef<Path>>(path: P) -> Result<MazeLayout> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let layout = parse_maz(&text)?;
    info!(
        "[Maze] Loaded {} ({}x{})",
        path.display(),
        layout.width(),
        layout.height()
    );
    Ok(layout)
}

/// Save a layout as a `.maz` file
pub fn save_maz<P: AsRef<Path>>(layout: &MazeLayout, path: P) -> Result<()> {
    fs::write(path, write_maz(layout))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
0 0 0 0 1 1
0 1 1 1 0 1
1 0 1 1 1 0
1 1 1 1 1 1
";

    #[test]
    fn test_parse_infers_size() {
        let layout = parse_maz(CORRIDOR).unwrap();
        assert_eq!(layout.width(), 2);
        assert_eq!(layout.height(), 2);
        assert!(!layout.wall(Cell::ORIGIN, Direction::North));
        assert!(!layout.wall(Cell::ORIGIN, Direction::East));
        assert!(layout.wall(Cell::new(0, 1), Direction::East));
    }

    #[test]
    fn test_mirrored_walls_are_unioned() {
        // (0,0) says east is open, (1,0) says west is walled
        let text = "0 0 0 0 1 1\n1 0 0 1 1 1\n";
        let layout = parse_maz(text).unwrap();
        assert!(layout.wall(Cell::ORIGIN, Direction::East));
    }

    #[test]
    fn test_missing_cells_keep_boundary() {
        let text = "0 0 0 0 1 1\n2 2 1 1 0 0\n";
        let layout = parse_maz(text).unwrap();
        assert_eq!(layout.width(), 3);
        assert!(layout.wall(Cell::new(1, 0), Direction::South));
        assert!(!layout.wall(Cell::new(1, 1), Direction::East));
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = parse_maz("0 0 0 0 1 1\n\n0 1 1 x 0 1\n").unwrap_err();
        assert!(matches!(err, Error::MazeFormat { line: 3, .. }));

        let err = parse_maz("0 0 0 0 1\n").unwrap_err();
        assert!(matches!(err, Error::MazeFormat { line: 1, .. }));

        let err = parse_maz("-1 0 0 0 1 1\n").unwrap_err();
        assert!(matches!(err, Error::MazeFormat { line: 1, .. }));

        assert!(matches!(
            parse_maz("# only a comment\n"),
            Err(Error::MazeFormat { line: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_coordinates() {
        let err = parse_maz("0 0 0 0 1 1\n2147483647 2147483647 1 1 1 1\n").unwrap_err();
        assert!(matches!(err, Error::MazeFormat { line: 2, .. }));

        let err = parse_maz(&format!("0 {} 1 1 1 1\n", MAX_SIDE)).unwrap_err();
        assert!(matches!(err, Error::MazeFormat { line: 1, .. }));

        let edge = MAX_SIDE - 1;
        let layout = parse_maz(&format!("{} 0 1 1 1 1\n", edge)).unwrap();
        assert_eq!(layout.width(), MAX_SIDE);
    }

    #[test]
    fn test_write_then_parse_preserves_walls() {
        let layout = parse_maz(CORRIDOR).unwrap();
        let text = write_maz(&layout);
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("0 0 0 0 1 1\n"));
        assert_eq!(parse_maz(&text).unwrap(), layout);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corridor.maz");
        let layout = parse_maz(CORRIDOR).unwrap();
        save_maz(&layout, &path).unwrap();
        assert_eq!(load_maz(&path).unwrap(), layout);
        assert!(matches!(load_maz(dir.path().join("nope.maz")), Err(Error::Io(_))));
    }
}
