//! Horizontal mapping of instants onto the visible window.

use chrono::Duration;
use crewboard_core::{AxisColumn, TimeRange, Window};

/// Fractional horizontal placement of `range` within `span`.
///
/// Returns `None` when the range lies entirely outside the span — an
/// exclusion, not an error. Edges beyond the span clamp to it, then the
/// width is floored at `min_width_fraction` so short jobs stay visible;
/// when the floor would push the right edge past the window, the left edge
/// is pulled back instead, so `left + width <= 1` always holds.
#[must_use]
pub fn map_range(
    range: &TimeRange,
    span: &TimeRange,
    min_width_fraction: f64,
) -> Option<(f64, f64)> {
    let clipped = range.intersection(span)?;
    let span_ms = span.duration().num_milliseconds() as f64;
    let left = (clipped.start - span.start).num_milliseconds() as f64 / span_ms;
    let width = clipped.duration().num_milliseconds() as f64 / span_ms;

    let width = width.max(min_width_fraction.clamp(0.0, 1.0)).min(1.0);
    let left = left.min(1.0 - width).max(0.0);
    Some((left, width))
}

/// The window's equal header columns, for hour labels and gridlines.
#[must_use]
pub fn axis_columns(window: &Window) -> Vec<AxisColumn> {
    let span = window.normalized_range();
    let span_ms = span.duration().num_milliseconds();
    let count = window.column_count();
    let width = 1.0 / f64::from(count);
    (0..count)
        .map(|index| {
            let offset = span_ms * i64::from(index) / i64::from(count);
            AxisColumn::new(
                index,
                f64::from(index) * width,
                width,
                span.start + Duration::milliseconds(offset),
            )
        })
        .collect()
}
