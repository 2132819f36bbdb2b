//! Bounding boxes for cheap rejection before the ring tests.

use geo::{coord, BoundingRect, Rect};

use crate::models::{AreaId, Point, PolygonPart, RegionDefinition};

/// Bounding boxes of every area and polygon-part, laid out like the
/// [`RegionDefinition`] they were built from.
///
/// A part only contains a point lying inside at least one of its rings, so a
/// point outside the union of its ring boxes can be rejected without changing
/// the result.
#[derive(Debug, Clone)]
pub struct RegionBounds {
    areas: Vec<AreaBounds>,
}

#[derive(Debug, Clone)]
struct AreaBounds {
    rect: Option<Rect<f64>>,
    parts: Vec<Option<Rect<f64>>>,
}

impl RegionBounds {
    pub fn build(definition: &RegionDefinition) -> Self {
        let areas = definition
            .iter()
            .map(|(_, parts)| {
                let parts: Vec<Option<Rect<f64>>> = parts.iter().map(part_bounds).collect();
                let rect = parts.iter().flatten().copied().reduce(union);
                AreaBounds { rect, parts }
            })
            .collect();
        Self { areas }
    }

    /// `false` when no part of the area can contain the point
    pub fn area_may_contain(&self, id: AreaId, point: &Point) -> bool {
        match self.areas.get(id).and_then(|area| area.rect.as_ref()) {
            Some(rect) => within(rect, point),
            None => false,
        }
    }

    /// `false` when the part cannot contain the point. Parts without any
    /// coordinates never contain anything.
    pub fn part_may_contain(&self, id: AreaId, part: usize, point: &Point) -> bool {
        match self.areas.get(id).and_then(|area| area.parts.get(part)) {
            Some(Some(rect)) => within(rect, point),
            _ => false,
        }
    }
}

/// Union of the bounding boxes of a part's rings
pub fn part_bounds(part: &PolygonPart) -> Option<Rect<f64>> {
    part.rings
        .iter()
        .filter_map(|ring| ring.line_string().bounding_rect())
        .reduce(union)
}

fn union(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
        coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
    )
}

fn within(rect: &Rect<f64>, point: &Point) -> bool {
    point.x >= rect.min().x
        && point.x <= rect.max().x
        && point.y >= rect.min().y
        && point.y <= rect.max().y
}
