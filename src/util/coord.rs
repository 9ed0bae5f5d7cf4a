use geo_types::Point;

/// Coordinate access for snapping inputs: `x` is longitude, `y` is latitude.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 { Point::x(*self) }
    fn y(&self) -> f64 { Point::y(*self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (139.767, 35.681);
        assert_eq!(tuple.x(), 139.767);
        assert_eq!(tuple.y(), 35.681);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(139.767, 35.681);
        assert_eq!(point.x(), 139.767);
        assert_eq!(point.y(), 35.681);
    }
}
