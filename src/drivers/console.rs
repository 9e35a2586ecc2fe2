// Text display mirrored to the serial console
//
// Keeps a COLUMNS x ROWS character frame in RAM and prints it through
// the log facade on flush(). Stands in for the shield's HD44780 so
// the screen logic runs unchanged without driving the parallel bus.

use core::convert::Infallible;

use log::info;

use lcd_shield_keypad::display::LINE_CAPACITY;
use lcd_shield_keypad::{Cursor, LineBuf, TextDisplay};

pub const COLUMNS: usize = 16;
pub const ROWS: usize = 2;

pub struct ConsoleDisplay {
    frame: [[u8; COLUMNS]; ROWS],
    cursor: Cursor,
    dirty: bool,
}

impl ConsoleDisplay {
    pub const fn new() -> Self {
        Self {
            frame: [[b' '; COLUMNS]; ROWS],
            cursor: Cursor::HOME,
            dirty: true,
        }
    }

    pub fn row(&self, row: usize) -> &str {
        self.frame
            .get(row)
            .and_then(|r| core::str::from_utf8(r).ok())
            .unwrap_or("")
    }

    /// Print the frame if anything changed since the last flush.
    pub fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        let mut rule = LineBuf::<LINE_CAPACITY>::new();
        rule.fit_with(COLUMNS, b'-');
        info!("+{}+", rule.as_str());
        for row in 0..ROWS {
            info!("|{}|", self.row(row));
        }
        info!("+{}+", rule.as_str());
    }

    fn put(&mut self, byte: u8) {
        let (col, row) = (self.cursor.col as usize, self.cursor.row as usize);
        // like the controller, characters past the visible area are dropped
        if col < COLUMNS && row < ROWS {
            self.frame[row][col] = byte;
            self.dirty = true;
        }
        self.cursor.col = self.cursor.col.saturating_add(1);
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay for ConsoleDisplay {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.frame = [[b' '; COLUMNS]; ROWS];
        self.cursor = Cursor::HOME;
        self.dirty = true;
        Ok(())
    }

    fn set_cursor(&mut self, pos: Cursor) -> Result<(), Infallible> {
        self.cursor = pos;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for c in s.chars() {
            // the character ROM only covers ASCII here
            let byte = if c.is_ascii() { c as u8 } else { b'#' };
            self.put(byte);
        }
        Ok(())
    }
}
