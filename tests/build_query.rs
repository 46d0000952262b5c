use serde_json::json;
use sunray::{Field, FulltextQuery, NearOptions, QueryBuilder, QuerySettings};

#[test]
fn location_search_with_defaults() {
    let mut builder = QueryBuilder::new();
    builder.with("location").near(-40.0, -70.0);
    assert_eq!(
        builder.to_params(),
        json!({ "q": "{!bbox sfield=location pt=-40.0,-70.0 d=1}" })
    );
}

#[test]
fn exact_location_search_with_distance() {
    let mut builder = QueryBuilder::new();
    builder.with("location").near_with(
        -40.0,
        -70.0,
        NearOptions::default().exact(true).distance(5.),
    );
    assert_eq!(
        builder.to_params(),
        json!({ "q": "{!geofilt sfield=location pt=-40.0,-70.0 d=5}" })
    );
}

#[test]
fn fulltext_and_location_share_relevance() {
    let mut builder = QueryBuilder::new();
    builder.fulltext("pizza");
    builder
        .with("location")
        .near_with(-40.0, -70.0, NearOptions::default().boost(2.0).distance(1.));
    assert_eq!(
        builder.to_params(),
        json!({ "q": "pizza ({!bbox sfield=location pt=-40.0,-70.0 d=1})" })
    );
}

#[test]
fn settings_file_content_drives_defaults() {
    let settings = QuerySettings::new(
        r#"
        [query.geo]
        distance = 3.0
        exact = false
        boost = 1.0
        "#,
    )
    .unwrap();
    let mut builder = QueryBuilder::with_settings(settings);
    builder.with("location").near(-40.0, -70.0);
    assert_eq!(
        builder.to_params(),
        json!({ "q": "{!bbox sfield=location pt=-40.0,-70.0 d=3}" })
    );
}

#[test]
fn fulltext_query_can_be_driven_directly() {
    let mut query = FulltextQuery::new();
    query.set_keywords("pizza");
    query.add_location(
        Field::with_indexed_name("location", "location_ll"),
        48.85,
        2.35,
        NearOptions::default(),
    );
    assert_eq!(
        query.to_params(),
        json!({ "q": "pizza ({!bbox sfield=location_ll pt=48.85,2.35 d=1})" })
    );
}
