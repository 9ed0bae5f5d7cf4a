pub mod codec;
pub mod coord;
pub mod error;

pub use codec::{cell_bounds, encode_cell};
pub use coord::Coordinate;
pub use error::GeosnapError;
