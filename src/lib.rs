//! # geosnap
//!
//! Snaps coordinates onto the vertices of a geohash grid (the shared corners
//! of four adjacent cells) and enumerates the cell identifiers meeting at a
//! vertex. There are two main entry points.
//!
//! ### 1. `GridSnapper` - validated configuration
//!
//! ```
//! use geosnap::GridSnapper;
//!
//! # fn main() -> Result<(), geosnap::GeosnapError> {
//! let snapper = GridSnapper::new(5)?;
//!
//! let vertex = snapper.nearest_vertex(&(139.767, 35.681))?;
//! for id in snapper.neighbor_cells(&vertex)? {
//!     println!("{}", id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Core functions - precision passed per call
//!
//! ```
//! use geosnap::{nearest_vertex, vertex_cells};
//! use geo_types::point;
//!
//! # fn main() -> Result<(), geosnap::GeosnapError> {
//! let pt = point! { x: -0.1278, y: 51.5074 };
//! let vertex = nearest_vertex(&pt, 7)?;
//! let cells = vertex_cells(&vertex, 7)?;
//! assert_eq!(cells.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! Coordinates follow the geo-types convention: `x` is longitude, `y` is
//! latitude. The geohash encoding itself comes from the [`geohash`] crate;
//! this crate only decides which corner a coordinate snaps to and which
//! cells to probe around it.

pub mod api;
pub mod core;
pub mod util;

pub use api::GridSnapper;
pub use core::{
    MAX_PRECISION, MIN_PRECISION, QUARTER_SPANS, QuarterSpan, nearest_vertex, quarter_span,
    vertex_cells,
};
pub use util::{Coordinate, GeosnapError, cell_bounds, encode_cell};

pub use geo_types;
pub use geohash;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;
    use std::collections::HashSet;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeosnapError> {
        let snapper = GridSnapper::new(5)?;
        assert_eq!(snapper.precision(), 5);
        assert_eq!(snapper.quarter_span().lat, 0.010986328125);
        assert_eq!(snapper.quarter_span().lng, 0.010986328125);

        let pt = point! { x: 139.767, y: 35.681 };
        let vertex = snapper.nearest_vertex(&pt)?;

        // The vertex is a corner of the cell containing the input.
        let id = encode_cell(pt.x(), pt.y(), 5)?;
        let bounds = cell_bounds(&id)?;
        assert!(vertex.x() == bounds.min().x || vertex.x() == bounds.max().x);
        assert!(vertex.y() == bounds.min().y || vertex.y() == bounds.max().y);

        let cells = snapper.neighbor_cells(&vertex)?;
        assert_eq!(cells.len(), 4);
        for id in &cells {
            assert_eq!(id.len(), 5);
        }

        // Away from grid extremes the four cells are distinct and each one
        // has the vertex as a corner of its bounding rectangle.
        let unique: HashSet<&String> = cells.iter().collect();
        assert_eq!(unique.len(), 4);

        for id in &cells {
            let bounds = cell_bounds(id)?;
            assert!(vertex.x() == bounds.min().x || vertex.x() == bounds.max().x);
            assert!(vertex.y() == bounds.min().y || vertex.y() == bounds.max().y);
        }
        Ok(())
    }

    #[test]
    fn test_nearby_points_share_a_vertex() -> Result<(), GeosnapError> {
        let snapper = GridSnapper::new(6)?;

        // Two observations of the same place, a few meters apart.
        let a = snapper.nearest_vertex(&(139.76712, 35.68102))?;
        let b = snapper.nearest_vertex(&(139.76709, 35.68105))?;

        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_invalid_precision_is_the_only_construction_error() {
        for precision in [0u8, 1, 12, 255] {
            let err = GridSnapper::new(precision).unwrap_err();
            assert_eq!(err, GeosnapError::InvalidPrecision(precision));
            assert!(err.to_string().contains("2-11"));
        }
    }
}
