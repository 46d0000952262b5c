use std::path::PathBuf;
use structopt::StructOpt;

use sunray::logger::logger_init;
use sunray::{QueryBuilder, QuerySettings};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sunray",
    about = "Build Solr request parameters for a fulltext search near a point"
)]
struct Args {
    /// Fulltext keywords.
    #[structopt(short = "q", long = "keywords")]
    keywords: Option<String>,
    /// Indexed field holding the location.
    #[structopt(short = "f", long = "field", default_value = "location")]
    field: String,
    /// Latitude of the search origin.
    #[structopt(long = "lat", allow_hyphen_values = true)]
    lat: f64,
    /// Longitude of the search origin.
    #[structopt(long = "lon", allow_hyphen_values = true)]
    lon: f64,
    /// Search radius in kilometers.
    #[structopt(short = "d", long = "distance")]
    distance: Option<f64>,
    /// Use exact (geofilt) distance filtering instead of the bounding box.
    #[structopt(long = "exact")]
    exact: bool,
    /// Boost applied to maximum-precision matches.
    #[structopt(short = "b", long = "boost")]
    boost: Option<f64>,
    /// Query settings file (TOML). Compiled-in defaults are used when absent.
    #[structopt(short = "s", long = "settings", parse(from_os_str))]
    settings: Option<PathBuf>,
}

fn main() {
    let _guard = logger_init();
    let args = Args::from_args();

    let settings = match args.settings {
        Some(ref path) => {
            QuerySettings::new_from_file(path).expect("could not read query settings")
        }
        None => QuerySettings::default(),
    };

    let mut options = settings.near_defaults();
    if let Some(distance) = args.distance {
        options = options.distance(distance);
    }
    if args.exact {
        options = options.exact(true);
    }
    if let Some(boost) = args.boost {
        options = options.boost(boost);
    }

    let mut builder = QueryBuilder::with_settings(settings);
    if let Some(ref keywords) = args.keywords {
        builder.fulltext(keywords);
    }
    builder
        .with(args.field.as_str())
        .near_with(args.lat, args.lon, options);

    println!(
        "{}",
        serde_json::to_string_pretty(&builder.to_params())
            .expect("request parameters are valid json")
    );
}
