// Keypad sampler
//
// Owned by the conversion-complete handler. One call = one blocking
// oneshot conversion on the divider pin, rescaled from the C3's
// 12-bit counts to the 10-bit domain the band table is written for.

use lcd_shield_keypad::{Sample, scale_to_sample};

use crate::board::{ADC_BITS, KeypadHw};

pub struct KeypadSampler {
    hw: KeypadHw,
    failures: u32,
}

impl KeypadSampler {
    pub fn new(hw: KeypadHw) -> Self {
        Self { hw, failures: 0 }
    }

    /// `None` if the converter reported an error; the request then stays
    /// pending and the waiting side times out.
    pub fn sample(&mut self) -> Option<Sample> {
        match nb::block!(self.hw.adc.read_oneshot(&mut self.hw.pin)) {
            Ok(raw) => Some(scale_to_sample(raw, ADC_BITS)),
            Err(_) => {
                self.failures = self.failures.wrapping_add(1);
                None
            }
        }
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }
}
