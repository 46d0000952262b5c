use crate::field::Field;
use crate::geo::NearOptions;
use crate::query::FulltextQuery;
use crate::settings::QuerySettings;

/// Entry point for assembling a search request.
///
/// ```
/// use sunray::QueryBuilder;
///
/// let mut builder = QueryBuilder::new();
/// builder.fulltext("pizza");
/// builder.with("location").near(-40.0, -70.0);
/// let params = builder.to_params();
/// ```
#[derive(Clone, Debug, Default)]
pub struct QueryBuilder {
    fulltext: FulltextQuery,
    settings: QuerySettings,
}

impl QueryBuilder {
    pub fn new() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// Uses `settings` for the defaults of restrictions built without
    /// explicit options.
    pub fn with_settings(settings: QuerySettings) -> QueryBuilder {
        QueryBuilder {
            fulltext: FulltextQuery::new(),
            settings,
        }
    }

    pub fn fulltext<S: Into<String>>(&mut self, keywords: S) -> &mut QueryBuilder {
        self.fulltext.set_keywords(keywords);
        self
    }

    /// Scopes the next restriction to `field`.
    pub fn with<F: Into<Field>>(&mut self, field: F) -> Restriction<'_> {
        Restriction {
            field: field.into(),
            negated: false,
            query: self,
        }
    }

    /// Negated counterpart of [`with`](QueryBuilder::with). Location
    /// restrictions ignore the negation, as upstream only ever applied it
    /// to scope restrictions.
    pub fn without<F: Into<Field>>(&mut self, field: F) -> Restriction<'_> {
        Restriction {
            field: field.into(),
            negated: true,
            query: self,
        }
    }

    pub fn to_params(&self) -> serde_json::Value {
        self.fulltext.to_params()
    }
}

/// A restriction scoped to one field of the enclosing query.
#[derive(Debug)]
pub struct Restriction<'a> {
    field: Field,
    negated: bool,
    query: &'a mut QueryBuilder,
}

impl<'a> Restriction<'a> {
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// Restricts by distance from a point, with the settings' defaults for
    /// radius, exactness and boost.
    pub fn near(self, lat: f64, lng: f64) -> &'a mut QueryBuilder {
        let options = self.query.settings.near_defaults();
        self.near_with(lat, lng, options)
    }

    /// Restricts by distance from a point. This registers a location
    /// clause on the enclosing fulltext query; geographic proximity then
    /// contributes to the same relevance score as keyword matching.
    pub fn near_with(self, lat: f64, lng: f64, options: NearOptions) -> &'a mut QueryBuilder {
        self.query.fulltext.add_location(self.field, lat, lng, options);
        self.query
    }
}
