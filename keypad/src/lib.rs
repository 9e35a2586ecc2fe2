// Button decoding for the 16x2 LCD keypad shield
//
// Five buttons share one analog pin through a resistor divider.
// A conversion-complete handler classifies each sample and latches
// the result; the main loop requests a conversion, waits for it and
// renders the latched button name on the display.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod classifier;
pub mod config;
pub mod conversion;
pub mod display;
pub mod error;
pub mod latch;

pub use button::{ButtonState, Labels, SAMPLE_MAX, Sample, scale_to_sample};
pub use classifier::{Band, Classifier, DEFAULT_BANDS, classify};
pub use config::KeypadConfig;
pub use conversion::{Conversion, Monotonic};
pub use display::{ButtonScreen, Cursor, LineBuf, TextDisplay};
pub use error::Error;
pub use latch::ButtonLatch;
