//! Point-in-ring tests and the even/odd rule across a part's rings.

use crate::models::{Point, PolygonPart, Ring};

/// Crossing-number (ray casting) test.
///
/// Casts a ray from `point` towards +x and counts ring edges straddling the
/// point's y. Odd means inside. The edge from the last point back to the first
/// is always tested, so unclosed rings behave as if closed. Points exactly on
/// an edge get an answer fixed by their coordinates alone (for an axis-aligned
/// box the lower and left edges are inside). NaN coordinates never cross and
/// yield `false`.
pub fn ring_contains(point: &Point, ring: &Ring) -> bool {
    let Some(&last) = ring.points().last() else {
        return false;
    };

    let mut inside = false;
    let mut prev = last;
    for &current in ring.points() {
        if (current.y > point.y) != (prev.y > point.y) {
            let x_cross =
                (prev.x - current.x) * (point.y - current.y) / (prev.y - current.y) + current.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        prev = current;
    }
    inside
}

/// Number of rings in `rings` that contain `point`
pub fn crossing_count(point: &Point, rings: &[Ring]) -> usize {
    rings.iter().filter(|ring| ring_contains(point, ring)).count()
}

/// Even/odd rule: a part contains a point inside an odd number of its rings
pub fn part_contains(point: &Point, part: &PolygonPart) -> bool {
    crossing_count(point, &part.rings) % 2 == 1
}
