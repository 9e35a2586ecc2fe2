// Runtime knobs for the keypad demo loop

use crate::button::Labels;

pub const DEFAULT_TIMEOUT_MS: u64 = 50;
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 20;
pub const DEFAULT_COLUMNS: usize = 16;
pub const DEFAULT_HEADER: &str = "Botao:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadConfig {
    /// Longest wait for one conversion before reporting a timeout
    pub timeout_ms: u64,
    /// Pause between consumer cycles
    pub poll_interval_ms: u32,
    /// Characters per display line
    pub columns: usize,
    /// Text on the first line
    pub header: &'static str,
    pub labels: Labels,
}

impl KeypadConfig {
    pub const fn new() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            columns: DEFAULT_COLUMNS,
            header: DEFAULT_HEADER,
            labels: Labels::Portuguese,
        }
    }

    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub const fn with_poll_interval_ms(mut self, poll_interval_ms: u32) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    pub const fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub const fn with_header(mut self, header: &'static str) -> Self {
        self.header = header;
        self
    }

    pub const fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self::new()
    }
}
