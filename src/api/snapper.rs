use crate::core::constants::{QuarterSpan, quarter_span};
use crate::core::grid::{nearest_vertex, vertex_cells};
use crate::util::coord::Coordinate;
use crate::util::error::GeosnapError;
use geo_types::Point;
use rayon::prelude::*;

/// Snaps coordinates onto the vertices of a geohash grid at a fixed precision.
///
/// A `GridSnapper` holds a validated precision level and the quarter span
/// for that precision, copied out of the precision table at construction.
/// It is immutable afterwards; all operations are pure functions of their
/// inputs and safe to call from any number of threads.
///
/// # Example
///
/// ```
/// use geosnap::GridSnapper;
///
/// # fn main() -> Result<(), geosnap::GeosnapError> {
/// let snapper = GridSnapper::new(5)?;
///
/// let vertex = snapper.nearest_vertex(&(139.767, 35.681))?;
/// let cells = snapper.neighbor_cells(&vertex)?;
/// assert_eq!(cells.len(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnapper {
    precision: u8,
    quarter: QuarterSpan,
}

impl GridSnapper {
    /// Creates a snapper for a precision level.
    ///
    /// Fails with [`GeosnapError::InvalidPrecision`] when the precision is
    /// outside the supported range (2-11).
    pub fn new(precision: u8) -> Result<Self, GeosnapError> {
        let quarter =
            quarter_span(precision).ok_or(GeosnapError::InvalidPrecision(precision))?;
        Ok(Self { precision, quarter })
    }

    /// Returns the configured precision level.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Returns the quarter span for the configured precision.
    pub fn quarter_span(&self) -> QuarterSpan {
        self.quarter
    }

    /// Snaps a coordinate to the nearest vertex of its grid cell.
    ///
    /// Coordinates falling inside the same cell and closer to the same pair
    /// of boundaries snap to the bit-identical vertex, which is what makes
    /// vertices usable as stable anchor points for nearby observations.
    ///
    /// # Example
    ///
    /// ```
    /// use geosnap::GridSnapper;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geosnap::GeosnapError> {
    /// let snapper = GridSnapper::new(5)?;
    /// // From tuple
    /// let vertex = snapper.nearest_vertex(&(139.767, 35.681))?;
    /// // From Point
    /// let same = snapper.nearest_vertex(&Point::new(139.767, 35.681))?;
    /// assert_eq!(vertex, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn nearest_vertex(&self, coord: &impl Coordinate) -> Result<Point<f64>, GeosnapError> {
        nearest_vertex(coord, self.precision)
    }

    /// Returns the identifiers of the four grid cells meeting at a vertex.
    ///
    /// Typically called on the output of [`nearest_vertex`](Self::nearest_vertex),
    /// though any coordinate is accepted. The four identifiers come back in
    /// fixed `(+lat +lng, -lat +lng, +lat -lng, -lat -lng)` offset order.
    pub fn neighbor_cells(&self, vertex: &impl Coordinate) -> Result<[String; 4], GeosnapError> {
        vertex_cells(vertex, self.precision)
    }

    /// Snaps a batch of coordinates in parallel.
    pub fn nearest_vertices(&self, coords: &[Point<f64>]) -> Result<Vec<Point<f64>>, GeosnapError> {
        coords
            .par_iter()
            .map(|coord| nearest_vertex(coord, self.precision))
            .collect()
    }
}
