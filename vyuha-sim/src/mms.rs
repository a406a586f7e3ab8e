//! Client for the mms micromouse simulator text protocol.
//!
//! The mouse program talks to mms over its own stdin/stdout: one command
//! per line, and for queries and motions one response line back.
//!
//! | Command | Response |
//! |---------|----------|
//! | `mazeWidth`, `mazeHeight` | integer |
//! | `wallFront`, `wallRight`, `wallLeft` | `true` / `false` |
//! | `moveForward`, `turnRight`, `turnLeft` | `ack` / `crash` |
//! | `wasReset` | `true` / `false` |
//! | `ackReset` | `ack` |
//! | `setWall x y d`, `setColor x y c`, `setText x y t`, `clearText x y` | none |
//!
//! [`MmsClient`] implements both [`MazeDrive`](vyuha::MazeDrive) and
//! [`DisplayOverlay`]. Because the controller owns its drive and its overlay
//! separately, [`MmsClient::overlay`] hands out an [`MmsOverlay`] that
//! shares the same connection.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use log::{debug, warn};
use vyuha::core::{Cell, Direction};
use vyuha::drive::{Actuator, DisplayOverlay, OverlayColor, WallSensor};

use crate::error::{Error, Result};

struct Connection<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> Connection<R, W> {
    fn send(&mut self, command: &str) -> Result<()> {
        writeln!(self.writer, "{}", command)?;
        self.writer.flush()?;
        Ok(())
    }

    fn request(&mut self, command: &str) -> Result<String> {
        self.send(command)?;
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Err(Error::Protocol(format!(
                "stream closed while waiting for '{}'",
                command
            )));
        }
        let response = self.line.trim().to_string();
        debug!("[Mms] {} -> {}", command, response);
        Ok(response)
    }
}

/// mms protocol client over any line-oriented reader/writer pair.
pub struct MmsClient<R, W> {
    conn: Rc<RefCell<Connection<R, W>>>,
}

impl<R: BufRead, W: Write> MmsClient<R, W> {
    /// Wrap a reader (simulator to mouse) and writer (mouse to simulator)
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            conn: Rc::new(RefCell::new(Connection {
                reader,
                writer,
                line: String::new(),
            })),
        }
    }

    /// Overlay handle sharing this connection
    pub fn overlay(&self) -> MmsOverlay<R, W> {
        MmsOverlay {
            conn: Rc::clone(&self.conn),
        }
    }

    /// Recover the reader and writer. Fails while overlay handles are alive.
    pub fn into_inner(self) -> std::result::Result<(R, W), Self> {
        match Rc::try_unwrap(self.conn) {
            Ok(cell) => {
                let conn = cell.into_inner();
                Ok((conn.reader, conn.writer))
            }
            Err(conn) => Err(Self { conn }),
        }
    }

    /// Maze width reported by the simulator
    pub fn maze_width(&mut self) -> Result<usize> {
        self.query_number("mazeWidth")
    }

    /// Maze height reported by the simulator
    pub fn maze_height(&mut self) -> Result<usize> {
        self.query_number("mazeHeight")
    }

    /// Has the user pressed reset in the simulator?
    pub fn was_reset(&mut self) -> Result<bool> {
        self.query_bool("wasReset")
    }

    /// Acknowledge a reset
    pub fn ack_reset(&mut self) -> Result<()> {
        self.command("ackReset")
    }

    fn query_bool(&mut self, command: &str) -> Result<bool> {
        match self.conn.borrow_mut().request(command)?.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(Error::Protocol(format!(
                "'{}' answered '{}', expected true/false",
                command, other
            ))),
        }
    }

    fn query_number(&mut self, command: &str) -> Result<usize> {
        let response = self.conn.borrow_mut().request(command)?;
        response.parse().map_err(|_| {
            Error::Protocol(format!(
                "'{}' answered '{}', expected a number",
                command, response
            ))
        })
    }

    fn command(&mut self, command: &str) -> Result<()> {
        match self.conn.borrow_mut().request(command)?.as_str() {
            "ack" => Ok(()),
            "crash" => Err(Error::Crash(format!("simulator rejected '{}'", command))),
            other => Err(Error::Protocol(format!(
                "'{}' answered '{}', expected ack",
                command, other
            ))),
        }
    }
}

impl<R: BufRead, W: Write> WallSensor for MmsClient<R, W> {
    fn wall_front(&mut self) -> vyuha::Result<bool> {
        Ok(self.query_bool("wallFront")?)
    }

    fn wall_left(&mut self) -> vyuha::Result<bool> {
        Ok(self.query_bool("wallLeft")?)
    }

    fn wall_right(&mut self) -> vyuha::Result<bool> {
        Ok(self.query_bool("wallRight")?)
    }
}

impl<R: BufRead, W: Write> Actuator for MmsClient<R, W> {
    fn turn_left(&mut self) -> vyuha::Result<()> {
        Ok(self.command("turnLeft")?)
    }

    fn turn_right(&mut self) -> vyuha::Result<()> {
        Ok(self.command("turnRight")?)
    }

    fn move_forward(&mut self) -> vyuha::Result<()> {
        Ok(self.command("moveForward")?)
    }
}

impl<R: BufRead, W: Write> DisplayOverlay for MmsClient<R, W> {
    fn set_text(&mut self, cell: Cell, text: &str) {
        self.overlay().set_text(cell, text);
    }

    fn clear_text(&mut self, cell: Cell) {
        self.overlay().clear_text(cell);
    }

    fn set_color(&mut self, cell: Cell, color: OverlayColor) {
        self.overlay().set_color(cell, color);
    }

    fn set_wall(&mut self, cell: Cell, direction: Direction) {
        self.overlay().set_wall(cell, direction);
    }
}

/// Display-only handle onto an [`MmsClient`] connection.
pub struct MmsOverlay<R, W> {
    conn: Rc<RefCell<Connection<R, W>>>,
}

impl<R: BufRead, W: Write> MmsOverlay<R, W> {
    /// Display commands have no response and never affect the run.
    fn display(&self, command: &str) {
        if let Err(e) = self.conn.borrow_mut().send(command) {
            warn!("[Mms] Display command '{}' failed: {}", command, e);
        }
    }
}

impl<R: BufRead, W: Write> DisplayOverlay for MmsOverlay<R, W> {
    fn set_text(&mut self, cell: Cell, text: &str) {
        self.display(&format!("setText {} {} {}", cell.x, cell.y, text));
    }

    fn clear_text(&mut self, cell: Cell) {
        self.display(&format!("clearText {} {}", cell.x, cell.y));
    }

    fn set_color(&mut self, cell: Cell, color: OverlayColor) {
        self.display(&format!("setColor {} {} {}", cell.x, cell.y, color.code()));
    }

    fn set_wall(&mut self, cell: Cell, direction: Direction) {
        self.display(&format!(
            "setWall {} {} {}",
            cell.x,
            cell.y,
            direction.as_char()
        ));
    }
}
