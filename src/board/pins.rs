//! GPIO |     Function     |      Notes
//! -----+------------------+----------------------------------
//!  1   | ADC1 - Keypad    | Shield A0: 5-button resistor divider
//!
//! The shield's 4-bit LCD bus (RS, E, D4..D7) is not driven by this
//! firmware; the screen is mirrored to the serial console instead.

// ----- Keypad (ADC) -----
pub const KEYPAD_ADC: u8 = 1; // GPIO1 - RIGHT/UP/DOWN/LEFT/SELECT

// ----- Converter -----
pub const ADC_BITS: u8 = 12; // ESP32-C3 oneshot resolution
