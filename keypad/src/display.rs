//! Character display seam and the button screen layout
//!
//! The keypad core never talks to the display controller directly.
//! Anything that can position a cursor and print text implements
//! [`TextDisplay`]; [`ButtonScreen`] decides what goes where.
//!
//! Layout (16x2):
//! ```text
//! Botao:
//! SELECT
//! ```

use core::fmt::Write;

use log::debug;

use crate::button::ButtonState;
use crate::config::KeypadConfig;

/// HD44780-family controllers keep 40 characters of DDRAM per line.
pub const LINE_CAPACITY: usize = 40;

// DDRAM address of the first column on the second line
const ROW_STRIDE: u8 = 0x40;

/// Character position; row 0 is the top line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub col: u8,
    pub row: u8,
}

impl Cursor {
    pub const HOME: Cursor = Cursor { col: 0, row: 0 };

    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Set-DDRAM address for this position on a two-line display:
    /// (0,0) -> 0x00, (15,0) -> 0x0F, (0,1) -> 0x40, (15,1) -> 0x4F.
    /// Columns past the 40-character line are clamped to the last one.
    pub const fn ddram_address(self) -> u8 {
        (self.row & 1) * ROW_STRIDE + clamp_col(self.col)
    }

    /// Inverse of [`ddram_address`](Self::ddram_address). Addresses in the
    /// unused gap of a line (0x28..=0x3F, 0x68..=0x7F) clamp to column 39.
    pub const fn from_ddram(addr: u8) -> Self {
        Self {
            col: clamp_col(addr & 0x3F),
            row: (addr >> 6) & 1,
        }
    }
}

const fn clamp_col(col: u8) -> u8 {
    let last = (LINE_CAPACITY - 1) as u8;
    if col > last { last } else { col }
}

/// Minimal text output a character display driver has to provide.
pub trait TextDisplay {
    type Error;

    /// Blank the whole display and home the cursor.
    fn clear(&mut self) -> Result<(), Self::Error>;

    fn set_cursor(&mut self, pos: Cursor) -> Result<(), Self::Error>;

    /// Print at the cursor, advancing it.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error>;
}

// No-alloc line builder. Truncates silently at N, on a char boundary.
pub struct LineBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> LineBuf<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Pad with spaces, or cut, so the line is exactly `width` bytes (capped at N).
    pub fn fit(&mut self, width: usize) {
        self.fit_with(width, b' ');
    }

    /// Like [`fit`](Self::fit) but pads with `fill`. Non-ASCII fill bytes
    /// fall back to a space so the buffer stays valid UTF-8.
    pub fn fit_with(&mut self, width: usize, fill: u8) {
        let fill = if fill.is_ascii() { fill } else { b' ' };
        let width = width.min(N);
        if self.len > width {
            let mut cut = width;
            while !self.as_str().is_char_boundary(cut) {
                cut -= 1;
            }
            self.len = cut;
        }
        while self.len < width {
            self.buf[self.len] = fill;
            self.len += 1;
        }
    }
}

impl<const N: usize> Default for LineBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for LineBuf<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let mut n = s.len().min(N - self.len);
        while !s.is_char_boundary(n) {
            n -= 1;
        }
        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        Ok(())
    }
}

/// Header on the top line, current button on the bottom line.
pub struct ButtonScreen {
    config: KeypadConfig,
    shown: Option<ButtonState>,
}

impl ButtonScreen {
    pub const fn new(config: KeypadConfig) -> Self {
        Self {
            config,
            shown: None,
        }
    }

    /// Clear the display and print the header. The next [`show`](Self::show) always draws.
    pub fn draw_header<D: TextDisplay>(&mut self, display: &mut D) -> Result<(), D::Error> {
        let mut line = LineBuf::<LINE_CAPACITY>::new();
        let _ = line.write_str(self.config.header);
        if line.len() > self.config.columns {
            line.fit(self.config.columns);
        }

        display.clear()?;
        display.set_cursor(Cursor::HOME)?;
        display.write_str(line.as_str())?;
        self.shown = None;
        Ok(())
    }

    /// Print `state` on the bottom line if it differs from what is on screen.
    ///
    /// The label is padded to the full width so a short name such as
    /// "UP" erases what a longer one left behind. Returns whether
    /// anything was written.
    pub fn show<D: TextDisplay>(
        &mut self,
        display: &mut D,
        state: ButtonState,
    ) -> Result<bool, D::Error> {
        if self.shown == Some(state) {
            return Ok(false);
        }

        let mut line = LineBuf::<LINE_CAPACITY>::new();
        let _ = line.write_str(state.label(self.config.labels));
        line.fit(self.config.columns);

        display.set_cursor(Cursor::new(0, 1))?;
        display.write_str(line.as_str())?;

        debug!("keypad: {:?} -> {}", self.shown, state);
        self.shown = Some(state);
        Ok(true)
    }

    /// Repaint everything, e.g. after the display was reset.
    pub fn redraw<D: TextDisplay>(&mut self, display: &mut D) -> Result<(), D::Error> {
        let state = self.shown.unwrap_or_default();
        self.draw_header(display)?;
        self.show(display, state)?;
        Ok(())
    }

    pub fn shown(&self) -> Option<ButtonState> {
        self.shown
    }

    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Labels;

    const COLS: usize = 16;

    // 16x2 glass that remembers every write
    struct Glass {
        rows: [[u8; COLS]; 2],
        cursor: Cursor,
        writes: usize,
        fail: bool,
    }

    #[derive(Debug, PartialEq)]
    struct Unplugged;

    impl Glass {
        fn new() -> Self {
            Self {
                rows: [[b' '; COLS]; 2],
                cursor: Cursor::HOME,
                writes: 0,
                fail: false,
            }
        }

        fn row(&self, r: usize) -> &str {
            core::str::from_utf8(&self.rows[r]).unwrap()
        }
    }

    impl TextDisplay for Glass {
        type Error = Unplugged;

        fn clear(&mut self) -> Result<(), Unplugged> {
            if self.fail {
                return Err(Unplugged);
            }
            self.rows = [[b' '; COLS]; 2];
            self.cursor = Cursor::HOME;
            Ok(())
        }

        fn set_cursor(&mut self, pos: Cursor) -> Result<(), Unplugged> {
            if self.fail {
                return Err(Unplugged);
            }
            self.cursor = pos;
            Ok(())
        }

        fn write_str(&mut self, s: &str) -> Result<(), Unplugged> {
            if self.fail {
                return Err(Unplugged);
            }
            self.writes += 1;
            for b in s.bytes() {
                let col = self.cursor.col as usize;
                if col < COLS {
                    self.rows[self.cursor.row as usize][col] = b;
                }
                self.cursor.col += 1;
            }
            Ok(())
        }
    }

    #[test]
    fn ddram_addresses_match_two_line_layout() {
        assert_eq!(Cursor::new(0, 0).ddram_address(), 0x00);
        assert_eq!(Cursor::new(15, 0).ddram_address(), 0x0F);
        assert_eq!(Cursor::new(0, 1).ddram_address(), 0x40);
        assert_eq!(Cursor::new(15, 1).ddram_address(), 0x4F);
        assert_eq!(Cursor::from_ddram(0x4F), Cursor::new(15, 1));
    }

    #[test]
    fn columns_past_line_end_clamp_to_last() {
        assert_eq!(Cursor::from_ddram(0x27), Cursor::new(39, 0));
        assert_eq!(Cursor::from_ddram(0x28), Cursor::new(39, 0));
        assert_eq!(Cursor::from_ddram(0x7F), Cursor::new(39, 1));
        assert_eq!(Cursor::new(63, 0).ddram_address(), 0x27);
        assert_eq!(Cursor::new(50, 1).ddram_address(), 0x67);
    }

    #[test]
    fn rule_line_follows_width() {
        let mut rule = LineBuf::<LINE_CAPACITY>::new();
        rule.fit_with(16, b'-');
        assert_eq!(rule.as_str(), "----------------");
        rule.clear();
        rule.fit_with(20, b'-');
        assert_eq!(rule.len(), 20);
        assert!(rule.as_str().bytes().all(|b| b == b'-'));

        let mut odd = LineBuf::<4>::new();
        odd.fit_with(3, 0xC3);
        assert_eq!(odd.as_str(), "   ");
    }

    #[test]
    fn line_buf_pads_and_truncates() {
        let mut line = LineBuf::<8>::new();
        write!(line, "UP").unwrap();
        line.fit(6);
        assert_eq!(line.as_str(), "UP    ");

        let mut long = LineBuf::<4>::new();
        write!(long, "SELECT").unwrap();
        assert_eq!(long.as_str(), "SELE");
        long.fit(2);
        assert_eq!(long.as_str(), "SE");
    }

    #[test]
    fn line_buf_never_splits_a_char() {
        let mut line = LineBuf::<3>::new();
        write!(line, "Bot\u{e3}o").unwrap();
        assert_eq!(line.as_str(), "Bot");

        let mut line = LineBuf::<5>::new();
        write!(line, "Bo\u{e3}o").unwrap();
        line.fit(3);
        assert_eq!(line.as_str(), "Bo ");
    }

    #[test]
    fn header_then_button_layout() {
        let mut glass = Glass::new();
        let mut screen = ButtonScreen::new(KeypadConfig::default());
        screen.draw_header(&mut glass).unwrap();
        assert!(screen.show(&mut glass, ButtonState::Select).unwrap());
        assert_eq!(glass.row(0), "Botao:          ");
        assert_eq!(glass.row(1), "SELECT          ");
    }

    #[test]
    fn shorter_label_erases_longer_one() {
        let mut glass = Glass::new();
        let mut screen = ButtonScreen::new(KeypadConfig::default());
        screen.show(&mut glass, ButtonState::None).unwrap();
        assert_eq!(glass.row(1), "NENHUM          ");
        screen.show(&mut glass, ButtonState::Up).unwrap();
        assert_eq!(glass.row(1), "UP              ");
    }

    #[test]
    fn unchanged_state_is_not_rewritten() {
        let mut glass = Glass::new();
        let mut screen = ButtonScreen::new(KeypadConfig::default());
        assert!(screen.show(&mut glass, ButtonState::Left).unwrap());
        assert!(!screen.show(&mut glass, ButtonState::Left).unwrap());
        assert_eq!(glass.writes, 1);
        assert_eq!(screen.shown(), Some(ButtonState::Left));
    }

    #[test]
    fn english_labels_render_none() {
        let mut glass = Glass::new();
        let cfg = KeypadConfig::new().with_labels(Labels::English);
        let mut screen = ButtonScreen::new(cfg);
        screen.show(&mut glass, ButtonState::None).unwrap();
        assert_eq!(glass.row(1), "NONE            ");
    }

    #[test]
    fn redraw_restores_both_lines() {
        let mut glass = Glass::new();
        let mut screen = ButtonScreen::new(KeypadConfig::default());
        screen.draw_header(&mut glass).unwrap();
        screen.show(&mut glass, ButtonState::Down).unwrap();
        glass.clear().unwrap();
        screen.redraw(&mut glass).unwrap();
        assert_eq!(glass.row(0), "Botao:          ");
        assert_eq!(glass.row(1), "DOWN            ");
    }

    #[test]
    fn display_errors_propagate() {
        let mut glass = Glass::new();
        glass.fail = true;
        let mut screen = ButtonScreen::new(KeypadConfig::default());
        assert_eq!(screen.draw_header(&mut glass), Err(Unplugged));
        assert_eq!(screen.show(&mut glass, ButtonState::Up), Err(Unplugged));
        assert_eq!(screen.shown(), None);
    }
}
