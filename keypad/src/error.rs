//! Error types for keypad sampling
//!
//! Classification itself is total and never fails. Errors come from
//! waiting on hardware that does not answer ([`Error::Timeout`]) and
//! from rejecting a malformed threshold table ([`Error::InvalidBands`]).

/// Errors produced by the keypad core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The outstanding conversion did not complete in time
    ///
    /// The request is left pending; call
    /// [`Conversion::cancel`](crate::Conversion::cancel) to drop it.
    Timeout {
        /// Milliseconds spent waiting before giving up
        waited_ms: u64,
    },
    /// A band table was empty, out of order or mapped a band to `None`
    InvalidBands {
        /// Index of the first offending band
        index: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Timeout { waited_ms } => {
                write!(f, "conversion timed out after {waited_ms} ms")
            }
            Error::InvalidBands { index } => write!(f, "invalid threshold band at index {index}"),
        }
    }
}

impl core::error::Error for Error {}
