//! Region definitions built from area features.

use geo_types::{Coord, LineString};

/// A longitude/latitude pair (x = longitude, y = latitude).
pub type Point = Coord<f64>;

/// Identifier of an area: its zero-based position in the input collection.
pub type AreaId = usize;

/// A closed sequence of points. Closure and orientation are not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring(LineString<f64>);

impl Ring {
    pub fn new(points: Vec<Point>) -> Self {
        Self(LineString::new(points))
    }

    pub fn points(&self) -> &[Point] {
        &self.0 .0
    }

    pub fn line_string(&self) -> &LineString<f64> {
        &self.0
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// One contiguous piece of an area. Ring 0 is conventionally the outer
/// boundary and the rest are holes, but containment only counts rings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonPart {
    pub rings: Vec<Ring>,
}

impl PolygonPart {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }
}

/// Polygon-parts for every area, indexed by [`AreaId`].
///
/// Built once per run and read-only afterwards. Every input area has an
/// entry, even when it has no parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionDefinition {
    areas: Vec<Vec<PolygonPart>>,
}

impl RegionDefinition {
    pub fn new(areas: Vec<Vec<PolygonPart>>) -> Self {
        Self { areas }
    }

    /// Number of areas, including areas without parts
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Polygon-parts of a single area
    pub fn parts(&self, id: AreaId) -> Option<&[PolygonPart]> {
        self.areas.get(id).map(Vec::as_slice)
    }

    /// Iterate over `(area id, parts)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (AreaId, &[PolygonPart])> {
        self.areas
            .iter()
            .enumerate()
            .map(|(id, parts)| (id, parts.as_slice()))
    }
}
