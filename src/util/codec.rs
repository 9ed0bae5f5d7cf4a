use crate::util::error::GeosnapError;
use geo_types::{Coord, Rect};

/// Encodes a coordinate into its grid-cell identifier at the given precision.
///
/// Deterministic: identical inputs always yield the identical identifier.
/// Coordinates are not range-checked here; the codec's rejection of
/// out-of-range values is propagated.
pub fn encode_cell(lng: f64, lat: f64, precision: u8) -> Result<String, GeosnapError> {
    geohash::encode(Coord { x: lng, y: lat }, precision as usize)
        .map_err(|e| GeosnapError::Codec(e.to_string()))
}

/// Decodes a grid-cell identifier into the rectangle it represents.
pub fn cell_bounds(id: &str) -> Result<Rect<f64>, GeosnapError> {
    geohash::decode_bbox(id).map_err(|e| GeosnapError::Codec(e.to_string()))
}
