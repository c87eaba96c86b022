//! Output geometry: the rectangles and axis columns a renderer consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placement of one interval inside its resource row.
///
/// Horizontal extent is fractional (`0.0` = window start, `1.0` = window
/// end) so the renderer can scale to any viewport width; vertical extent
/// is in pixels, relative to the row's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderRect {
    /// Lane the interval was packed into, `0`-based from the row top.
    pub lane_index: usize,
    /// Left edge as a fraction of the window, in `[0, 1]`.
    pub left_fraction: f64,
    /// Width as a fraction of the window; `left + width <= 1`.
    pub width_fraction: f64,
    /// Top edge in pixels from the row top.
    pub top_px: f32,
    /// Block height in pixels.
    pub height_px: f32,
    /// Paint order; higher lanes paint above lower ones.
    pub z_index: i32,
}

impl RenderRect {
    #[must_use]
    pub const fn new(
        lane_index: usize,
        left_fraction: f64,
        width_fraction: f64,
        top_px: f32,
        height_px: f32,
        z_index: i32,
    ) -> Self {
        Self {
            lane_index,
            left_fraction,
            width_fraction,
            top_px,
            height_px,
            z_index,
        }
    }

    /// Right edge as a fraction of the window.
    #[must_use]
    pub fn right_fraction(&self) -> f64 {
        self.left_fraction + self.width_fraction
    }
}

/// One equal column of the header axis, for hour labels and gridlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisColumn {
    /// Column position, `0`-based from the window start.
    pub index: u32,
    /// Left edge as a fraction of the window.
    pub left_fraction: f64,
    /// Column width as a fraction of the window; equal for all columns.
    pub width_fraction: f64,
    /// Instant at the column's left edge.
    pub start: DateTime<Utc>,
}

impl AxisColumn {
    #[must_use]
    pub const fn new(
        index: u32,
        left_fraction: f64,
        width_fraction: f64,
        start: DateTime<Utc>,
    ) -> Self {
        Self {
            index,
            left_fraction,
            width_fraction,
            start,
        }
    }
}
