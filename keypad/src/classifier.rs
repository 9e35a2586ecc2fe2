// Threshold table decoding for the keypad divider
//
// Each band is an exclusive upper bound and the button it maps to.
// Bands are scanned lowest first, first match wins; anything at or
// above the last bound means no button is held. No hysteresis: a
// reading that sits on a band edge can flicker between neighbours.

use log::warn;

use crate::button::{ButtonState, Sample};
use crate::error::Error;

/// A reading below `below` that missed every earlier band decodes to `state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub below: Sample,
    pub state: ButtonState,
}

impl Band {
    pub const fn new(below: Sample, state: ButtonState) -> Self {
        Self { below, state }
    }
}

// Shield divider readings on a 10-bit, 5V-referenced converter
pub const DEFAULT_BANDS: &[Band] = &[
    Band::new(50, ButtonState::Right), // shorted to ground
    Band::new(250, ButtonState::Up),
    Band::new(450, ButtonState::Down),
    Band::new(650, ButtonState::Left),
    Band::new(850, ButtonState::Select),
];

/// Decode a sample against [`DEFAULT_BANDS`].
#[inline]
pub fn classify(sample: Sample) -> ButtonState {
    decode_bands(sample, DEFAULT_BANDS)
}

fn decode_bands(sample: Sample, bands: &[Band]) -> ButtonState {
    for band in bands {
        if sample < band.below {
            return band.state;
        }
    }
    ButtonState::None
}

/// Decoder bound to a validated band table.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    bands: &'static [Band],
}

impl Classifier {
    pub const fn new() -> Self {
        Self {
            bands: DEFAULT_BANDS,
        }
    }

    /// Use a custom table, e.g. for a shield with different resistor values.
    ///
    /// Bounds must be strictly increasing and no band may map to
    /// `None`, which is reserved for readings past the last bound.
    pub fn with_bands(bands: &'static [Band]) -> Result<Self, Error> {
        if bands.is_empty() {
            warn!("keypad: empty band table");
            return Err(Error::InvalidBands { index: 0 });
        }

        let mut prev: Option<Sample> = None;
        for (index, band) in bands.iter().enumerate() {
            let ordered = prev.is_none_or(|p| band.below > p);
            if !ordered || band.state == ButtonState::None {
                warn!("keypad: rejected band {} ({:?})", index, band);
                return Err(Error::InvalidBands { index });
            }
            prev = Some(band.below);
        }

        Ok(Self { bands })
    }

    #[inline]
    pub fn classify(&self, sample: Sample) -> ButtonState {
        decode_bands(sample, self.bands)
    }

    pub fn bands(&self) -> &'static [Band] {
        self.bands
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
