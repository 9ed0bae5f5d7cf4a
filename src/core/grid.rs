use crate::core::constants::{MAX_PRECISION, MIN_PRECISION, quarter_span};
use crate::util::codec::{cell_bounds, encode_cell};
use crate::util::coord::Coordinate;
use crate::util::error::GeosnapError;
use geo_types::Point;

/// Snaps a coordinate to the nearest vertex of its enclosing grid cell.
///
/// The vertex is the cell corner closest to the coordinate, chosen
/// independently per axis. Exact midpoints resolve to the upper boundary on
/// both axes; callers relying on reproducible anchor points depend on that
/// tie-break staying fixed.
pub fn nearest_vertex<C: Coordinate>(coord: &C, precision: u8) -> Result<Point<f64>, GeosnapError> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(GeosnapError::InvalidPrecision(precision));
    }

    let id = encode_cell(coord.x(), coord.y(), precision)?;
    let bounds = cell_bounds(&id)?;

    let mut lng = bounds.max().x;
    if (coord.x() - bounds.min().x) < (bounds.max().x - coord.x()) {
        lng = bounds.min().x;
    }

    let mut lat = bounds.max().y;
    if (coord.y() - bounds.min().y) < (bounds.max().y - coord.y()) {
        lat = bounds.min().y;
    }

    Ok(Point::new(lng, lat))
}

/// Returns the identifiers of the four grid cells meeting at a vertex.
///
/// Probes the four diagonal offsets of the vertex by the quarter span for
/// the precision, in fixed `(+lat +lng, -lat +lng, +lat -lng, -lat -lng)`
/// order. The result is neither sorted nor deduplicated; two probes landing
/// in the same cell is an accepted approximation, not an error.
///
/// The quarter spans are grid-wide averages. Near the poles an offset can
/// leave the valid latitude range, in which case the codec's error is
/// propagated.
pub fn vertex_cells<C: Coordinate>(vertex: &C, precision: u8) -> Result<[String; 4], GeosnapError> {
    let Some(span) = quarter_span(precision) else {
        return Err(GeosnapError::InvalidPrecision(precision));
    };

    let (lng, lat) = (vertex.x(), vertex.y());
    Ok([
        encode_cell(lng + span.lng, lat + span.lat, precision)?,
        encode_cell(lng + span.lng, lat - span.lat, precision)?,
        encode_cell(lng - span.lng, lat + span.lat, precision)?,
        encode_cell(lng - span.lng, lat - span.lat, precision)?,
    ])
}
