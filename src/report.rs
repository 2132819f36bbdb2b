//! Loading the two collections and writing counters back into the areas.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use geojson::{Feature, FeatureCollection, JsonObject, JsonValue, Value};
use indicatif::ProgressBar;
use tracing::info;

use crate::error::{ReportError, Result};
use crate::models::{AreaCounters, Point};
use crate::pip::{build_definition, to_point, AggregateOptions, Aggregator};

/// Property receiving the number of points attributed to an area
pub const COUNT_KEY: &str = "count";
/// Property receiving the fallback point total
pub const TOTAL_KEY: &str = "total";

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub aggregate: AggregateOptions,
    /// Pretty-print the output document
    pub pretty: bool,
    /// Progress bar ticked once per scanned point
    pub progress: Option<ProgressBar>,
}

/// Read a whole input file
pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ReportError::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a GeoJSON document that must be a `FeatureCollection`
pub fn parse_collection(input: &str, what: &'static str) -> Result<FeatureCollection> {
    FeatureCollection::from_str(input).map_err(|source| ReportError::Parse { what, source })
}

/// Positions of every point feature, in input order
pub fn point_positions(features: &[Feature]) -> Result<Vec<Point>> {
    features
        .iter()
        .enumerate()
        .map(|(index, feature)| match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(position)) => Ok(to_point(position)),
            Some(_) => Err(ReportError::InvalidPoint {
                index,
                reason: "geometry is not a Point".to_string(),
            }),
            None => Err(ReportError::InvalidPoint {
                index,
                reason: "missing geometry".to_string(),
            }),
        })
        .collect()
}

/// Write counters into the area features' properties.
///
/// `count` is written for every area, replacing any previous value. `total`
/// is only added when the area recorded a miss and has no `total` yet.
pub fn apply_counters(features: &mut [Feature], counters: &AreaCounters) {
    for (id, tally) in counters.iter() {
        let Some(feature) = features.get_mut(id) else {
            continue;
        };
        let properties = feature.properties.get_or_insert_with(JsonObject::new);
        properties.insert(COUNT_KEY.to_string(), JsonValue::from(tally.count));
        if let Some(total) = tally.total {
            properties
                .entry(TOTAL_KEY)
                .or_insert_with(|| JsonValue::from(total));
        }
    }
}

/// Encode the enriched collection
pub fn serialize(collection: &FeatureCollection, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(collection)?
    } else {
        serde_json::to_string(collection)?
    };
    Ok(encoded)
}

/// Full run: parse both documents, attribute points to areas and return the
/// enriched area collection. Nothing is produced unless every step succeeds.
pub fn generate_report(areas: &str, points: &str, options: &ReportOptions) -> Result<String> {
    let mut boundaries = parse_collection(areas, "area")?;
    let points = parse_collection(points, "point")?;
    let positions = point_positions(&points.features)?;

    info!(
        "Loaded {} areas and {} points",
        boundaries.features.len(),
        positions.len()
    );

    let definition = build_definition(&boundaries.features);
    let mut aggregator = Aggregator::new(&definition, options.aggregate);
    if let Some(progress) = &options.progress {
        aggregator = aggregator.with_progress(progress.clone());
    }
    let counters = aggregator.aggregate(&positions);

    apply_counters(&mut boundaries.features, &counters);
    serialize(&boundaries, options.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::Geometry;

    fn feature(value: Value, properties: Option<JsonObject>) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(value)),
            id: None,
            properties,
            foreign_members: None,
        }
    }

    #[test]
    fn test_point_positions() {
        let features = vec![
            feature(Value::Point(vec![1.0, 2.0]), None),
            feature(Value::Point(vec![3.0, 4.0, 5.0]), None),
        ];
        let positions = point_positions(&features).unwrap();
        assert_eq!(positions, vec![Point { x: 1.0, y: 2.0 }, Point { x: 3.0, y: 4.0 }]);
    }

    #[test]
    fn test_point_positions_rejects_other_geometry() {
        let features = vec![
            feature(Value::Point(vec![1.0, 2.0]), None),
            feature(Value::LineString(vec![vec![0.0, 0.0], vec![1.0, 1.0]]), None),
        ];
        match point_positions(&features) {
            Err(ReportError::InvalidPoint { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_apply_counters() {
        let mut existing = JsonObject::new();
        existing.insert("name".to_string(), JsonValue::from("north"));
        existing.insert(COUNT_KEY.to_string(), JsonValue::from(99));
        existing.insert(TOTAL_KEY.to_string(), JsonValue::from("kept"));

        let mut features = vec![
            feature(Value::MultiPolygon(vec![]), Some(existing)),
            feature(Value::MultiPolygon(vec![]), None),
        ];

        let mut counters = AreaCounters::new(2, 5);
        counters.record_match(0);
        counters.record_miss(0);
        counters.record_miss(1);
        apply_counters(&mut features, &counters);

        let first = features[0].properties.as_ref().unwrap();
        assert_eq!(first["name"], JsonValue::from("north"));
        assert_eq!(first[COUNT_KEY], JsonValue::from(1));
        assert_eq!(first[TOTAL_KEY], JsonValue::from("kept"));

        let second = features[1].properties.as_ref().unwrap();
        assert_eq!(second[COUNT_KEY], JsonValue::from(0));
        assert_eq!(second[TOTAL_KEY], JsonValue::from(5));
    }

    #[test]
    fn test_parse_rejects_non_collection() {
        let single = r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#;
        assert!(matches!(
            parse_collection(single, "point"),
            Err(ReportError::Parse { what: "point", .. })
        ));
        assert!(matches!(
            parse_collection("not json", "area"),
            Err(ReportError::Parse { what: "area", .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let path = Path::new("/nonexistent/areas.geojson");
        match read_input(path) {
            Err(ReportError::InputRead { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
