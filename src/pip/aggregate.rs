//! Point attribution: every point against every part of every area.

use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::{debug, info};

use super::bounds::RegionBounds;
use super::contains::part_contains;
use crate::models::{AreaCounters, AreaId, Point, PolygonPart, RegionDefinition};

/// Knobs for a scan. None of them change the resulting counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// Split the point set across the rayon pool and merge the partial counters
    pub parallel: bool,
    /// Skip ring tests for points outside an area's or part's bounding box
    pub bbox_prefilter: bool,
}

/// Scans points against a region definition and accumulates per-area counters
pub struct Aggregator<'a> {
    definition: &'a RegionDefinition,
    bounds: Option<RegionBounds>,
    parallel: bool,
    progress: ProgressBar,
}

impl<'a> Aggregator<'a> {
    pub fn new(definition: &'a RegionDefinition, options: AggregateOptions) -> Self {
        let bounds = options
            .bbox_prefilter
            .then(|| RegionBounds::build(definition));
        Self {
            definition,
            bounds,
            parallel: options.parallel,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report scan progress on `progress`, one tick per point
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Attribute every point to the areas containing it.
    ///
    /// Within an area the first part with an odd crossing count wins and ends
    /// the area's evaluation for that point, so `count` grows by at most one
    /// per point. Each part tested before that without a match records a miss,
    /// which sets the area's `total` to `points.len()` the first time.
    pub fn aggregate(&self, points: &[Point]) -> AreaCounters {
        info!(
            "Scanning {} points against {} areas",
            points.len(),
            self.definition.len()
        );
        self.progress.set_length(points.len() as u64);

        let empty = || AreaCounters::new(self.definition.len(), points.len());
        let counters = if self.parallel {
            points
                .par_iter()
                .fold(empty, |mut counters, point| {
                    self.scan_point(point, &mut counters);
                    counters
                })
                .reduce(empty, AreaCounters::merge)
        } else {
            let mut counters = empty();
            for point in points {
                self.scan_point(point, &mut counters);
            }
            counters
        };

        self.progress.finish_and_clear();
        counters
    }

    fn scan_point(&self, point: &Point, counters: &mut AreaCounters) {
        for (id, parts) in self.definition.iter() {
            self.scan_area(id, parts, point, counters);
        }
        self.progress.inc(1);
    }

    fn scan_area(
        &self,
        id: AreaId,
        parts: &[PolygonPart],
        point: &Point,
        counters: &mut AreaCounters,
    ) {
        if let Some(bounds) = &self.bounds {
            if !bounds.area_may_contain(id, point) {
                // every part would miss
                if !parts.is_empty() {
                    counters.record_miss(id);
                }
                return;
            }
        }

        for (index, part) in parts.iter().enumerate() {
            let candidate = self
                .bounds
                .as_ref()
                .map_or(true, |bounds| bounds.part_may_contain(id, index, point));

            if candidate && part_contains(point, part) {
                debug!("Point ({}, {}) in area {} part {}", point.x, point.y, id, index);
                counters.record_match(id);
                break;
            }
            counters.record_miss(id);
        }
    }
}

/// Sequential scan with default options
pub fn aggregate(definition: &RegionDefinition, points: &[Point]) -> AreaCounters {
    Aggregator::new(definition, AggregateOptions::default()).aggregate(points)
}
