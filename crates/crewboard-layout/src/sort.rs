//! Canonical interval ordering for lane packing.

use crewboard_core::Interval;
use std::cmp::Ordering;

/// Total order over intervals: ascending start, then descending duration,
/// then ascending id.
///
/// Longer intervals first lets the greedy packer lay long spans into low
/// lanes before short ones fragment them. The id tie-break makes the order
/// canonical, so layouts do not depend on feed arrival order. Durations are
/// taken from the normalized ranges, so malformed intervals order by their
/// repaired length.
#[must_use]
pub fn interval_order(a: &Interval, b: &Interval) -> Ordering {
    let ra = a.normalized_range();
    let rb = b.normalized_range();
    ra.start
        .cmp(&rb.start)
        .then_with(|| rb.duration().cmp(&ra.duration()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort intervals in place into the canonical packing order.
pub fn sort_intervals(intervals: &mut [Interval]) {
    intervals.sort_by(interval_order);
}
