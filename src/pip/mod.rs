//! Point-in-polygon attribution of points to areas.
//!
//! Builds ring-level region definitions from area features, tests points
//! against them with the even/odd rule and accumulates per-area counters.

mod aggregate;
mod bounds;
mod contains;
mod geometry;

pub use aggregate::{aggregate, AggregateOptions, Aggregator};
pub use bounds::{part_bounds, RegionBounds};
pub use contains::{crossing_count, part_contains, ring_contains};
pub use geometry::{build_definition, to_point};
