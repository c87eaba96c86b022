//! The visible time window of the board.

use crate::time::TimeRange;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default number of equal header columns a window is divided into.
pub const DEFAULT_COLUMNS: u32 = 12;

/// Minimum span, in seconds, a degenerate window (`end <= start`) is
/// stretched to. Like malformed intervals, bad windows are repaired
/// rather than rejected.
pub const MIN_WINDOW_SECONDS: i64 = 60;

/// The time span currently visible on the board, plus how many equal
/// columns the header axis divides it into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Header column count; `0` behaves as `1`.
    #[serde(default = "default_columns")]
    pub columns: u32,
}

const fn default_columns() -> u32 {
    DEFAULT_COLUMNS
}

impl Window {
    /// Create a window with [`DEFAULT_COLUMNS`] header columns.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            columns: DEFAULT_COLUMNS,
        }
    }

    /// Override the header column count.
    #[must_use]
    pub const fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// The span as fed, without repair.
    #[must_use]
    pub const fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    /// The span the pipeline maps against: a degenerate window is
    /// stretched to [`MIN_WINDOW_SECONDS`] so fraction math never
    /// divides by zero.
    #[must_use]
    pub fn normalized_range(&self) -> TimeRange {
        if self.end <= self.start {
            TimeRange::new(self.start, self.start + Duration::seconds(MIN_WINDOW_SECONDS))
        } else {
            self.range()
        }
    }

    /// Header column count, clamped to at least one.
    #[must_use]
    pub fn column_count(&self) -> u32 {
        self.columns.max(1)
    }
}
