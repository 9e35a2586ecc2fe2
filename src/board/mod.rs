//! LCD keypad shield on an ESP32-C3 board
//!
//! Maps the shield's physical hardware to named subsystems so the
//! rest of the firmware never needs GPIO numbers or ADC settings.

pub mod pins;

pub use pins::{ADC_BITS, KEYPAD_ADC};

use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcConfig, AdcPin, Attenuation},
    peripherals::{ADC1, GPIO1, Peripherals},
};

// Hardware Bundles
/// Keypad subsystem hardware: ADC1 plus the divider pin.
pub struct KeypadHw {
    pub adc: Adc<'static, ADC1<'static>, Blocking>,
    pub pin: AdcPin<GPIO1<'static>, ADC1<'static>>,
}

/// Complete board hardware, ready for driver initialization.
pub struct Board {
    pub keypad: KeypadHw,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        let keypad = Self::init_keypad(p);
        Board { keypad }
    }

    fn init_keypad(p: Peripherals) -> KeypadHw {
        let mut adc_cfg = AdcConfig::new();

        // 11dB attenuation for the widest input range. Raw counts are
        // used as-is: the divider is ratiometric, so no calibration.
        let pin = adc_cfg.enable_pin(p.GPIO1, Attenuation::_11dB);
        let adc = Adc::new(p.ADC1, adc_cfg);

        KeypadHw { adc, pin }
    }
}
