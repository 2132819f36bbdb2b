//! Areacount - attribute point observations to area regions
//!
//! This library provides the containment and aggregation engine used by the
//! `areacount` binary.

pub mod error;
pub mod models;
pub mod pip;
pub mod report;

pub use error::ReportError;
pub use models::{AreaCounters, AreaTally, RegionDefinition};
pub use report::{generate_report, ReportOptions};
