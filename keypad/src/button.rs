//! Button identifiers for the LCD keypad shield
//!
//! The shield wires RIGHT, UP, DOWN, LEFT and SELECT into a single
//! resistor divider on one analog pin. Only one button can be read
//! at a time, so a conversion always decodes to exactly one state,
//! with `None` meaning nothing is held.

/// One 10-bit conversion result, 0..=1023.
pub type Sample = u16;

/// Largest value a 10-bit conversion can produce.
pub const SAMPLE_MAX: Sample = 1023;

/// Rescale a raw `bits`-wide converter reading into the 10-bit sample domain.
///
/// The band table is written for a 10-bit converter; wider converters
/// (e.g. 12-bit) are shifted down, narrower ones shifted up. The result
/// is clamped to [`SAMPLE_MAX`].
pub const fn scale_to_sample(raw: u16, bits: u8) -> Sample {
    let raw = raw as u32;
    let scaled = if bits >= 10 {
        match raw.checked_shr((bits - 10) as u32) {
            Some(v) => v,
            None => 0,
        }
    } else {
        raw << (10 - bits)
    };
    if scaled > SAMPLE_MAX as u32 {
        SAMPLE_MAX
    } else {
        scaled as Sample
    }
}

/// Decoded keypad state. Variant order follows the divider, lowest voltage first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ButtonState {
    Right,
    Up,
    Down,
    Left,
    Select,
    #[default]
    None,
}

/// Which text the display shows for the idle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Labels {
    /// "NONE"
    English,
    /// "NENHUM", as printed by the stock shield demo
    #[default]
    Portuguese,
}

impl ButtonState {
    pub const ALL: [ButtonState; 6] = [
        ButtonState::Right,
        ButtonState::Up,
        ButtonState::Down,
        ButtonState::Left,
        ButtonState::Select,
        ButtonState::None,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ButtonState::Right => "RIGHT",
            ButtonState::Up => "UP",
            ButtonState::Down => "DOWN",
            ButtonState::Left => "LEFT",
            ButtonState::Select => "SELECT",
            ButtonState::None => "NONE",
        }
    }

    /// Display text under the given label set.
    pub const fn label(self, labels: Labels) -> &'static str {
        match (self, labels) {
            (ButtonState::None, Labels::Portuguese) => "NENHUM",
            _ => self.name(),
        }
    }

    #[inline]
    pub const fn is_pressed(self) -> bool {
        !matches!(self, ButtonState::None)
    }

    /// Single-byte encoding used by [`ButtonLatch`](crate::ButtonLatch).
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`](Self::as_u8); unknown bytes decode to `None`.
    #[inline]
    pub const fn from_u8(v: u8) -> Self {
        match v {
            0 => ButtonState::Right,
            1 => ButtonState::Up,
            2 => ButtonState::Down,
            3 => ButtonState::Left,
            4 => ButtonState::Select,
            _ => ButtonState::None,
        }
    }
}

impl core::fmt::Display for ButtonState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
