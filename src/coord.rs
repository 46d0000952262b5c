use geo_types::Coordinate;

/// A WGS84 coordinate, as given by the caller of a `near` restriction.
///
/// Solr expects `pt=<lat>,<lng>`, so accessors are named in those terms
/// rather than x/y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord(pub Coordinate<f64>);

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Coord {
        Coord(Coordinate { x: lon, y: lat })
    }

    pub fn lat(&self) -> f64 {
        self.0.y
    }

    pub fn lon(&self) -> f64 {
        self.0.x
    }

    /// Whether the coordinate lies in the usual WGS84 ranges. This is an
    /// inspection helper only: query rendering performs no validation and
    /// forwards out-of-range values verbatim to the engine.
    pub fn is_valid(&self) -> bool {
        -90. <= self.lat() && self.lat() <= 90. && -180. <= self.lon() && self.lon() <= 180.
    }
}

impl Default for Coord {
    fn default() -> Coord {
        Coord(Coordinate { x: 0., y: 0. })
    }
}

impl From<(f64, f64)> for Coord {
    /// Builds a coordinate from a `(lat, lon)` pair.
    fn from(latlon: (f64, f64)) -> Coord {
        Coord::new(latlon.0, latlon.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_keep_lat_lon_order() {
        let coord = Coord::new(-40.0, -70.0);
        assert_eq!(coord.lat(), -40.0);
        assert_eq!(coord.lon(), -70.0);
    }

    #[test]
    fn validity_bounds() {
        assert!(Coord::new(48.85, 2.35).is_valid());
        assert!(Coord::new(90.0, 180.0).is_valid());
        assert!(!Coord::new(91.0, 2.35).is_valid());
        assert!(!Coord::new(48.85, -181.0).is_valid());
    }
}
