//! Query construction for Solr geospatial and fulltext search.
//!
//! This crate builds the query-language fragments understood by Solr's
//! spatial query parsers (`{!bbox ...}` and `{!geofilt ...}`) and embeds
//! them into a fulltext query, so that textual relevance and geographic
//! proximity combine into a single relevance score. It is a client-side
//! builder only: retrieval, scoring and distance computation all happen in
//! the engine that receives the rendered parameters.
//!
//! ```
//! use sunray::{NearOptions, QueryBuilder};
//!
//! let mut builder = QueryBuilder::new();
//! builder.fulltext("pizza");
//! builder
//!     .with("location")
//!     .near_with(-40.0, -70.0, NearOptions::default().boost(2.0).distance(1.));
//! assert_eq!(
//!     builder.to_params(),
//!     serde_json::json!({ "q": "pizza ({!bbox sfield=location pt=-40.0,-70.0 d=1})" })
//! );
//! ```

pub mod coord;
pub mod dsl;
pub mod field;
pub mod geo;
pub mod logger;
pub mod query;
pub mod settings;

pub use crate::coord::Coord;
pub use crate::dsl::{QueryBuilder, Restriction};
pub use crate::field::Field;
pub use crate::geo::{Geo, NearOptions};
pub use crate::query::FulltextQuery;
pub use crate::settings::QuerySettings;
