pub mod constants;
pub mod grid;

pub use constants::{MAX_PRECISION, MIN_PRECISION, QUARTER_SPANS, QuarterSpan, quarter_span};
pub use grid::{nearest_vertex, vertex_cells};
