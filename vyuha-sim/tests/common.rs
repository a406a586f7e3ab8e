//! Shared helpers for the simulation integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::rc::Rc;

use vyuha::core::{Cell, Direction};
use vyuha::drive::{Actuator, WallSensor};
use vyuha_sim::{MazeLayout, SimulatedMouse};

/// Install the test logger once.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 4×4 maze whose bottom row ends in a dead end the search walks into.
///
/// ```text
/// +---+---+---+---+
/// |             G |
/// +   +   +   +   +
/// |               |
/// +   +   +   +   +
/// |               |
/// +---+   +---+---+
/// | S             |
/// +---+---+---+---+
/// ```
pub fn dead_end_layout() -> MazeLayout {
    let mut layout = MazeLayout::new(4, 4);
    layout.set_wall(Cell::new(0, 0), Direction::North);
    layout.set_wall(Cell::new(2, 0), Direction::North);
    layout.set_wall(Cell::new(3, 0), Direction::North);
    layout
}

/// In-memory stand-in for the mms simulator process.
///
/// Commands written by the client are applied to a [`SimulatedMouse`] and
/// the responses queued for the client to read back.
pub struct FakeMms {
    mouse: SimulatedMouse,
    responses: VecDeque<u8>,
    partial: String,
    pub display_commands: usize,
    pub commands: Vec<String>,
}

impl FakeMms {
    pub fn new(mouse: SimulatedMouse) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            mouse,
            responses: VecDeque::new(),
            partial: String::new(),
            display_commands: 0,
            commands: Vec::new(),
        }))
    }

    pub fn mouse(&self) -> &SimulatedMouse {
        &self.mouse
    }

    fn handle(&mut self, command: &str) {
        let bool_reply = |b: bool| if b { "true" } else { "false" };
        let response = match command {
            "wallFront" => Some(bool_reply(self.mouse.wall_front().unwrap_or(true))),
            "wallLeft" => Some(bool_reply(self.mouse.wall_left().unwrap_or(true))),
            "wallRight" => Some(bool_reply(self.mouse.wall_right().unwrap_or(true))),
            "turnLeft" => Some(if self.mouse.turn_left().is_ok() { "ack" } else { "crash" }),
            "turnRight" => Some(if self.mouse.turn_right().is_ok() { "ack" } else { "crash" }),
            "moveForward" => Some(if self.mouse.move_forward().is_ok() { "ack" } else { "crash" }),
            _ if command.starts_with("set") || command.starts_with("clear") => {
                self.display_commands += 1;
                None
            }
            _ => Some("unknown"),
        };
        self.commands.push(command.to_string());
        if let Some(response) = response {
            self.responses.extend(response.as_bytes());
            self.responses.push_back(b'\n');
        }
    }
}

/// Simulator stdout, read by the client.
pub struct FakeMmsOut(pub Rc<RefCell<FakeMms>>);

impl Read for FakeMmsOut {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut mms = self.0.borrow_mut();
        let n = buf.len().min(mms.responses.len());
        for slot in buf.iter_mut().take(n) {
            *slot = mms.responses.pop_front().unwrap_or(b'\n');
        }
        Ok(n)
    }
}

/// Simulator stdin, written by the client.
pub struct FakeMmsIn(pub Rc<RefCell<FakeMms>>);

impl Write for FakeMmsIn {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut mms = self.0.borrow_mut();
        mms.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(end) = mms.partial.find('\n') {
            let line: String = mms.partial.drain(..=end).collect();
            mms.handle(line.trim());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
