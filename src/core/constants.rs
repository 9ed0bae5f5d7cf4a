use serde::{Deserialize, Serialize};

/// Lowest supported precision level (geohash length)
pub const MIN_PRECISION: u8 = 2;

/// Highest supported precision level (geohash length)
pub const MAX_PRECISION: u8 = 11;

/// One quarter of a grid cell's latitude/longitude extent at a given precision.
///
/// Used as the probe offset when enumerating the cells around a vertex: a
/// quarter-span step from a cell corner lands strictly inside the interior
/// of the adjacent cell, even when the table value slightly undershoots the
/// true local extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuarterSpan {
    /// Quarter of the cell height, in degrees of latitude
    pub lat: f64,
    /// Quarter of the cell width, in degrees of longitude
    pub lng: f64,
}

/// Quarter spans for precision levels 2-11, indexed by `precision - MIN_PRECISION`
pub const QUARTER_SPANS: [QuarterSpan; 10] = [
    QuarterSpan { lat: 1.40625, lng: 2.8125 },
    QuarterSpan { lat: 0.3515625, lng: 0.3515625 },
    QuarterSpan { lat: 0.0439453125, lng: 0.087890625 },
    QuarterSpan { lat: 0.010986328125, lng: 0.010986328125 },
    QuarterSpan { lat: 0.001373291015625, lng: 0.00274658203125 },
    QuarterSpan { lat: 0.00034332275390625, lng: 0.00034332275390625 },
    QuarterSpan { lat: 4.291534423828125e-5, lng: 8.58306884765625e-5 },
    QuarterSpan { lat: 1.0728836059570312e-5, lng: 1.0728836059570312e-5 },
    QuarterSpan { lat: 1.341104507446289e-6, lng: 2.682209014892578e-6 },
    QuarterSpan { lat: 3.3527612686157227e-7, lng: 3.3527612686157227e-7 },
];

/// Returns the quarter span for a precision level.
///
/// Returns `None` when the precision is outside the supported range (2-11).
pub fn quarter_span(precision: u8) -> Option<QuarterSpan> {
    if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        Some(QUARTER_SPANS[(precision - MIN_PRECISION) as usize])
    } else {
        None
    }
}
