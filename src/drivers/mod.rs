// Drivers for the shield demo.
//
// keypad:  raw ADC access, scaled to 10-bit samples
// console: text display mirrored to the serial log
// clock:   millisecond clock for bounded waits

pub mod clock;
pub mod console;
pub mod keypad;
