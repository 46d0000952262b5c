use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::fs;
use std::path::Path;

use crate::geo::NearOptions;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("IO Error: {}", source))]
    InvalidFileOpen { source: std::io::Error },

    #[snafu(display("TOML Error: {}", source))]
    InvalidFileContent { source: toml::de::Error },
}

/// Defaults applied to `near` restrictions built without explicit options.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GeoDefaults {
    /// Search radius in kilometers.
    pub distance: f64,
    /// Exact (`geofilt`) rather than bounding-box (`bbox`) filtering.
    pub exact: bool,
    pub boost: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuerySettings {
    pub geo: GeoDefaults,
}

// This wrapper is used because the configuration file should
// have the query settings definition in an object under the key 'query'
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuerySettingsWrapper {
    pub query: QuerySettings,
}

impl QuerySettings {
    pub fn new(settings: &str) -> Result<QuerySettings, Error> {
        let wrapper: QuerySettingsWrapper = toml::from_str(settings).context(InvalidFileContent)?;
        Ok(wrapper.query)
    }

    pub fn new_from_file<P>(path: P) -> Result<QuerySettings, Error>
    where
        P: AsRef<Path>,
    {
        let settings_content = fs::read_to_string(path).context(InvalidFileOpen)?;
        QuerySettings::new(&settings_content)
    }

    pub fn near_defaults(&self) -> NearOptions {
        NearOptions {
            distance: self.geo.distance,
            exact: self.geo.exact,
            boost: self.geo.boost,
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        let settings = include_str!("../config/query/default.toml");
        QuerySettings::new(settings)
            .expect("could not create default query settings. Check config/query/default.toml")
    }
}
