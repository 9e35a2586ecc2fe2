// Millisecond clock since boot, for bounding conversion waits

use esp_hal::time::Instant;
use lcd_shield_keypad::Monotonic;

pub struct BootClock {
    start: Instant,
}

impl BootClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for BootClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Monotonic for BootClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        (Instant::now() - self.start).as_millis()
    }
}
