//! Core data models for the aggregation engine.

pub mod region;
pub mod tally;

pub use region::{AreaId, Point, PolygonPart, RegionDefinition, Ring};
pub use tally::{AreaCounters, AreaTally};
