//! The layout engine: one pass from feed entities to render geometry.

use crate::axis::{axis_columns, map_range};
use crate::lanes::{pack_lanes, LanePlacement, PackedLanes};
use crate::rows::{row_height_px, ResourceRow};
use crate::sort::interval_order;
use crewboard_core::{
    AxisColumn, Interval, IntervalId, LayoutConfig, RenderRect, Resource, TimeRange, Window,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Complete render geometry for one board pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Placement per visible interval, keyed by id. Intervals outside the
    /// window, or assigned to a resource not on the board, are absent.
    pub geometry: BTreeMap<IntervalId, RenderRect>,
    /// The row height shared by every row on the board.
    pub row_height_px: f32,
    /// One summary per roster entry, in roster order.
    pub rows: Vec<ResourceRow>,
    /// Header columns over the visible window.
    pub columns: Vec<AxisColumn>,
}

/// One resource's day after packing, pending geometry assembly.
struct PackedRow<'a> {
    intervals: Vec<&'a Interval>,
    ranges: Vec<TimeRange>,
    packed: PackedLanes,
}

/// Computes collision-free board geometry from one day's feed.
///
/// The engine holds only sanitized configuration and is pure: identical
/// inputs yield bit-identical layouts, so callers are free to memoize
/// results and debounce recomputes.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutEngine {
    /// Create an engine; the configuration is sanitized on the way in.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    /// The sanitized configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out one board pass.
    ///
    /// Rows follow roster order. Intervals referencing a resource that is
    /// not on the roster are skipped. Packing covers each resource's whole
    /// day, window or not, so panning the window never reshuffles lanes;
    /// the window only decides which rectangles make it into the output.
    #[must_use]
    pub fn compute(
        &self,
        resources: &[Resource],
        intervals: &[Interval],
        window: &Window,
    ) -> BoardLayout {
        let span = window.normalized_range();

        let mut by_resource: HashMap<&str, Vec<&Interval>> = HashMap::new();
        for interval in intervals {
            by_resource
                .entry(interval.resource_id.as_str())
                .or_default()
                .push(interval);
        }

        // Phase 1: pack every row. The shared row height is a fan-in over
        // all of them, so no geometry can be built yet.
        let mut packed_rows: Vec<PackedRow<'_>> = Vec::with_capacity(resources.len());
        for resource in resources {
            let mut day = by_resource.remove(resource.id.as_str()).unwrap_or_default();
            day.sort_by(|a, b| interval_order(a, b));
            let ranges: Vec<TimeRange> = day.iter().map(|iv| iv.normalized_range()).collect();
            let packed = pack_lanes(&ranges, self.config.capacity);
            packed_rows.push(PackedRow {
                intervals: day,
                ranges,
                packed,
            });
        }

        let max_lanes = packed_rows.iter().map(|r| r.packed.lanes_used).max();
        let row_height = row_height_px(max_lanes.unwrap_or(0), &self.config);

        // Phase 2: map each packed day onto the window and emit rectangles.
        let mut geometry = BTreeMap::new();
        let mut rows = Vec::with_capacity(resources.len());
        let mut outside = 0usize;

        for (index, (resource, row)) in resources.iter().zip(&packed_rows).enumerate() {
            rows.push(ResourceRow {
                resource_id: resource.id.clone(),
                index,
                top_px: index as f32 * row_height,
                lanes_used: row.packed.lanes_used,
                overflow_count: row.packed.overflow_count,
            });

            for ((interval, range), placement) in row
                .intervals
                .iter()
                .zip(&row.ranges)
                .zip(&row.packed.placements)
            {
                match map_range(range, &span, self.config.min_width_fraction) {
                    Some((left, width)) => {
                        geometry.insert(interval.id.clone(), self.rect_for(*placement, left, width));
                    }
                    None => outside += 1,
                }
            }
        }

        let orphaned: usize = by_resource.values().map(Vec::len).sum();
        log::debug!(
            "layout pass: {} resources, {} intervals, {} placed, {outside} outside window, {orphaned} orphaned, row height {row_height}px",
            resources.len(),
            intervals.len(),
            geometry.len(),
        );

        BoardLayout {
            geometry,
            row_height_px: row_height,
            rows,
            columns: axis_columns(window),
        }
    }

    /// Geometry for one placement. Lanes stack downward from the row
    /// padding; later lanes paint above earlier ones.
    fn rect_for(&self, placement: LanePlacement, left_fraction: f64, width_fraction: f64) -> RenderRect {
        let lane = placement.lane;
        RenderRect {
            lane_index: lane,
            left_fraction,
            width_fraction,
            top_px: lane as f32 * self.config.lane_pitch_px() + self.config.row_padding_px,
            height_px: self.config.lane_height_px,
            z_index: self
                .config
                .base_z
                .saturating_add(i32::try_from(lane).unwrap_or(i32::MAX)),
        }
    }
}
