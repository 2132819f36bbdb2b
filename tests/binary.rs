use std::io::Write;
use std::process::Command;

use serde_json::Value;
use tempfile::NamedTempFile;

const SQUARE_AREAS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": {"name": "square"},
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [[[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]]]
      }
    }
  ]
}"#;

const THREE_POINTS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [5, 5]}},
    {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [15, 15]}},
    {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [5, 5]}}
  ]
}"#;

fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn prints_report() {
    let areas = fixture(SQUARE_AREAS);
    let pts = fixture(THREE_POINTS);

    let output = Command::new(env!("CARGO_BIN_EXE_areacount"))
        .arg("--areas")
        .arg(areas.path())
        .arg("--points")
        .arg(pts.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let document: Value = serde_json::from_slice(&output.stdout).unwrap();
    let props = &document["features"][0]["properties"];
    assert_eq!(props["count"], 2);
    assert_eq!(props["total"], 3);
}

#[test]
fn requires_both_flags() {
    let areas = fixture(SQUARE_AREAS);
    let output = Command::new(env!("CARGO_BIN_EXE_areacount"))
        .arg("--areas")
        .arg(areas.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn fails_on_missing_file() {
    let pts = fixture(THREE_POINTS);
    let output = Command::new(env!("CARGO_BIN_EXE_areacount"))
        .arg("--areas")
        .arg("/nonexistent/areas.geojson")
        .arg("--points")
        .arg(pts.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("/nonexistent/areas.geojson"));
}
