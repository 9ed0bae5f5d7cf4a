use crate::core::constants::{MAX_PRECISION, MIN_PRECISION};

/// Error type for geosnap operations.
#[derive(Debug, PartialEq)]
pub enum GeosnapError {
    /// The precision level is outside the supported range (2-11).
    InvalidPrecision(u8),
    /// The geohash codec rejected an encode or decode call.
    Codec(String),
}

impl std::fmt::Display for GeosnapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeosnapError::InvalidPrecision(p) => write!(
                f,
                "Invalid precision: {} (supported: {}-{})",
                p, MIN_PRECISION, MAX_PRECISION
            ),
            GeosnapError::Codec(msg) => write!(f, "Codec error: {}", msg),
        }
    }
}

impl std::error::Error for GeosnapError {}
