// Single-slot store for the most recent button state
//
// One writer (the conversion-complete handler), one reader (main loop).
// The state fits in one byte, so a plain atomic store is indivisible:
// a reader sees the previous or the newest state, never a torn one.
// Load/store only; riscv32imc has no atomic RMW.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::button::ButtonState;

pub struct ButtonLatch {
    slot: AtomicU8,
}

impl ButtonLatch {
    /// Starts out holding `None`; that is what a read before the first conversion returns.
    pub const fn new() -> Self {
        Self {
            slot: AtomicU8::new(ButtonState::None as u8),
        }
    }

    #[inline]
    pub fn store(&self, state: ButtonState) {
        self.slot.store(state.as_u8(), Ordering::Release);
    }

    #[inline]
    pub fn load(&self) -> ButtonState {
        ButtonState::from_u8(self.slot.load(Ordering::Acquire))
    }
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ButtonLatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ButtonLatch").field(&self.load()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LATCH: ButtonLatch = ButtonLatch::new();

    #[test]
    fn unwritten_latch_reads_none() {
        assert_eq!(ButtonLatch::new().load(), ButtonState::None);
    }

    #[test]
    fn holds_value_until_next_store() {
        let latch = ButtonLatch::new();
        latch.store(ButtonState::Down);
        assert_eq!(latch.load(), ButtonState::Down);
        assert_eq!(latch.load(), ButtonState::Down);
        latch.store(ButtonState::Select);
        assert_eq!(latch.load(), ButtonState::Select);
    }

    #[test]
    fn usable_as_static() {
        LATCH.store(ButtonState::Up);
        assert_eq!(LATCH.load(), ButtonState::Up);
        assert_eq!(format!("{:?}", LATCH), "ButtonLatch(Up)");
    }
}
