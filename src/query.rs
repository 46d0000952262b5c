use serde_json::json;
use slog_scope::debug;

use crate::field::Field;
use crate::geo::{Geo, NearOptions};

/// The fulltext part of a search request: one optional keyword clause plus
/// any number of location clauses.
///
/// Geographic relevance plays on the same field as fulltext scoring: when
/// both a keyword clause and a location clause are present, both end up in
/// the single `q` parameter so the engine folds textual relevance and
/// geographic proximity into one score.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FulltextQuery {
    keywords: Option<String>,
    locations: Vec<Geo>,
}

impl FulltextQuery {
    pub fn new() -> FulltextQuery {
        FulltextQuery::default()
    }

    pub fn set_keywords<S: Into<String>>(&mut self, keywords: S) {
        self.keywords = Some(keywords.into());
    }

    /// Registers a location clause against `field`.
    pub fn add_location(&mut self, field: Field, lat: f64, lng: f64, options: NearOptions) {
        debug!(
            "adding location clause on {} at {},{} (d={}km)",
            field.indexed_name(),
            lat,
            lng,
            options.distance
        );
        self.locations.push(Geo::new(field, lat, lng, options));
    }

    pub fn locations(&self) -> &[Geo] {
        &self.locations
    }

    /// Request parameters for the whole query.
    pub fn to_params(&self) -> serde_json::Value {
        json!({ "q": self.to_boolean_query() })
    }

    // A lone location clause stays unwrapped, exactly as its standalone
    // rendering; anything combined embeds the parenthesized subquery form.
    fn to_boolean_query(&self) -> String {
        let mut clauses: Vec<String> = Vec::new();
        if let Some(ref keywords) = self.keywords {
            clauses.push(keywords.clone());
        }
        match (clauses.is_empty(), self.locations.as_slice()) {
            (true, []) => "*:*".to_string(),
            (true, [single]) => single.to_boolean_query(),
            _ => {
                clauses.extend(self.locations.iter().map(Geo::to_subquery));
                clauses.join(" ")
            }
        }
    }
}
