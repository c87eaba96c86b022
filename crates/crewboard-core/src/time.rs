//! Time primitives for interval layout.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A half-open span of time `[start, end)`.
///
/// Half-open semantics make back-to-back appointments non-overlapping: an
/// interval ending at 09:00 does not collide with one starting at 09:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive start instant.
    pub start: DateTime<Utc>,
    /// Exclusive end instant.
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a new time range.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Signed duration of the range (negative when `end < start`).
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether the range covers no time at all (`end <= start`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether an instant falls inside the range.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Whether two ranges share any span of time.
    ///
    /// Empty ranges never overlap anything.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The portion of `self` that lies inside `bounds`, or `None` when the
    /// two are disjoint.
    #[must_use]
    pub fn intersection(&self, bounds: &Self) -> Option<Self> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        if start < end {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}
