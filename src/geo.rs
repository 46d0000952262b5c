use serde_json::json;

use crate::coord::Coord;
use crate::field::Field;

/// Default search radius, in kilometers.
pub const DEFAULT_DISTANCE: f64 = 1.;
/// Exact filtering is more processing intensive on the engine side, so the
/// approximate bounding box is the default.
pub const DEFAULT_EXACT: bool = false;
pub const DEFAULT_BOOST: f64 = 1.0;

/// Options of a `near` restriction, with the documented defaults applied
/// for anything the caller leaves out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearOptions {
    /// Search radius in kilometers.
    pub distance: f64,
    /// Exact (`geofilt`) rather than bounding-box (`bbox`) filtering.
    pub exact: bool,
    /// Boost applied to maximum-precision matches, relative to the fulltext
    /// score.
    pub boost: f64,
}

impl Default for NearOptions {
    fn default() -> NearOptions {
        NearOptions {
            distance: DEFAULT_DISTANCE,
            exact: DEFAULT_EXACT,
            boost: DEFAULT_BOOST,
        }
    }
}

impl NearOptions {
    pub fn distance(mut self, km: f64) -> NearOptions {
        self.distance = km;
        self
    }

    pub fn exact(mut self, exact: bool) -> NearOptions {
        self.exact = exact;
        self
    }

    pub fn boost(mut self, boost: f64) -> NearOptions {
        self.boost = boost;
        self
    }
}

/// A geospatial filter clause against one field.
///
/// Renders the localparams fragment understood by the engine's spatial
/// query parsers, either standalone (`to_params`) or parenthesized for
/// embedding in a larger boolean query (`to_subquery`). The fragment
/// syntax, parameter names, and their order are a bit-exact contract with
/// the engine's query parser.
#[derive(Clone, Debug, PartialEq)]
pub struct Geo {
    field: Field,
    coord: Coord,
    options: NearOptions,
}

impl Geo {
    pub fn new(field: Field, lat: f64, lng: f64, options: NearOptions) -> Geo {
        Geo {
            field,
            coord: Coord::new(lat, lng),
            options,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The boost requested for this clause. Upstream reads this option but
    /// never renders it into the fragment; we reproduce that behavior
    /// rather than inventing an application formula.
    pub fn boost(&self) -> f64 {
        self.options.boost
    }

    /// Request parameters for a standalone location search.
    pub fn to_params(&self) -> serde_json::Value {
        json!({ "q": self.to_boolean_query() })
    }

    /// The fragment wrapped in parentheses, suitable for embedding inside
    /// a larger boolean query without altering its content.
    pub fn to_subquery(&self) -> String {
        format!("({})", self.to_boolean_query())
    }

    pub(crate) fn to_boolean_query(&self) -> String {
        let function = if self.options.exact { "geofilt" } else { "bbox" };
        // Coordinates use `{:?}` so whole values keep a fractional digit
        // (`pt=-40.0,-70.0`); the distance keeps the caller's value
        // verbatim, so the default renders as `d=1`.
        format!(
            "{{!{} sfield={} pt={:?},{:?} d={}}}",
            function,
            self.field.indexed_name(),
            self.coord.lat(),
            self.coord.lon(),
            self.options.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Field {
        Field::new("location")
    }

    #[test]
    fn default_options_use_bbox_and_one_kilometer() {
        let geo = Geo::new(location(), -40.0, -70.0, NearOptions::default());
        assert_eq!(
            geo.to_boolean_query(),
            "{!bbox sfield=location pt=-40.0,-70.0 d=1}"
        );
    }

    #[test]
    fn exact_uses_geofilt() {
        let geo = Geo::new(
            location(),
            -40.0,
            -70.0,
            NearOptions::default().exact(true).distance(5.),
        );
        assert_eq!(
            geo.to_boolean_query(),
            "{!geofilt sfield=location pt=-40.0,-70.0 d=5}"
        );
    }

    #[test]
    fn distance_overrides_default_verbatim() {
        let geo = Geo::new(location(), 48.85, 2.35, NearOptions::default().distance(2.5));
        assert_eq!(
            geo.to_boolean_query(),
            "{!bbox sfield=location pt=48.85,2.35 d=2.5}"
        );
    }

    #[test]
    fn params_carry_the_fragment_as_q() {
        let geo = Geo::new(location(), -40.0, -70.0, NearOptions::default());
        assert_eq!(
            geo.to_params(),
            serde_json::json!({ "q": "{!bbox sfield=location pt=-40.0,-70.0 d=1}" })
        );
    }

    #[test]
    fn subquery_wraps_without_altering_content() {
        let geo = Geo::new(location(), -40.0, -70.0, NearOptions::default());
        assert_eq!(geo.to_subquery(), format!("({})", geo.to_boolean_query()));
    }

    #[test]
    fn boost_is_read_but_not_rendered() {
        let geo = Geo::new(location(), -40.0, -70.0, NearOptions::default().boost(2.0));
        assert_eq!(geo.boost(), 2.0);
        assert!(!geo.to_boolean_query().contains("2.0"));
    }

    #[test]
    fn indexed_name_is_what_reaches_sfield() {
        let field = Field::with_indexed_name("location", "location_ll");
        let geo = Geo::new(field, -40.0, -70.0, NearOptions::default());
        assert_eq!(
            geo.to_boolean_query(),
            "{!bbox sfield=location_ll pt=-40.0,-70.0 d=1}"
        );
    }
}
