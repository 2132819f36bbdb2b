//! Region definition building from GeoJSON area features.

use geojson::{Feature, PolygonType, Position, Value};
use tracing::debug;

use crate::models::{Point, PolygonPart, RegionDefinition, Ring};

/// Build the region definition for a collection of area features.
///
/// Area ids are feature positions. Every feature gets an entry; geometry that
/// is neither a `MultiPolygon` nor a `Polygon` yields an area with no parts.
pub fn build_definition(features: &[Feature]) -> RegionDefinition {
    let areas = features
        .iter()
        .enumerate()
        .map(|(id, feature)| match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::MultiPolygon(polygons)) => {
                polygons.iter().map(build_part).collect()
            }
            Some(Value::Polygon(rings)) => vec![build_part(rings)],
            Some(_) => {
                debug!("Area {} is not a polygon, no parts", id);
                Vec::new()
            }
            None => {
                debug!("Area {} has no geometry", id);
                Vec::new()
            }
        })
        .collect();

    RegionDefinition::new(areas)
}

fn build_part(rings: &PolygonType) -> PolygonPart {
    PolygonPart::new(rings.iter().map(|ring| build_ring(ring)).collect())
}

fn build_ring(positions: &[Position]) -> Ring {
    Ring::new(positions.iter().map(|position| to_point(position)).collect())
}

/// Convert a GeoJSON position to a point, ignoring any altitude.
///
/// The GeoJSON parser rejects positions with fewer than two ordinates, so
/// those only reach here from hand-built features. A missing ordinate becomes
/// NaN, which never lies inside a ring.
pub fn to_point(position: &[f64]) -> Point {
    let ordinate = |i: usize| position.get(i).copied().unwrap_or(f64::NAN);
    Point {
        x: ordinate(0),
        y: ordinate(1),
    }
}
