//! Shared row height and per-row summaries.

use crewboard_core::{LayoutConfig, ResourceId};
use serde::{Deserialize, Serialize};

/// Summary of one resource row, in board display order.
///
/// Carries everything a consumer needs to position the row and surface
/// capacity overflow (a "+N more" badge) without re-running the packer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRow {
    pub resource_id: ResourceId,
    /// Row position, `0`-based from the board top.
    pub index: usize,
    /// Top edge in pixels from the board top: `index * row_height_px`.
    pub top_px: f32,
    /// Lanes this resource actually needs; `0` for an idle resource.
    pub lanes_used: usize,
    /// Intervals forced into the last lane past capacity.
    pub overflow_count: usize,
}

/// The single row height shared by every visible resource.
///
/// Rows all sit on one time axis, so they must be the same height or the
/// grid drifts out of alignment; the busiest visible resource sets the
/// height for everyone. Floored at `min_row_height_px` so an all-idle
/// board still renders clickable rows.
#[must_use]
pub fn row_height_px(max_lanes_used: usize, config: &LayoutConfig) -> f32 {
    let lanes = max_lanes_used as f32;
    let needed = lanes * config.lane_pitch_px() + config.row_padding_px;
    needed.max(config.min_row_height_px)
}
