//! Appointment intervals and their source-tagged payloads.

use crate::time::TimeRange;
use crate::ResourceId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Minimum duration, in seconds, an interval is stretched to when its feed
/// data claims `end <= start`. Malformed intervals are repaired, never
/// rejected: the board must show every assigned appointment.
pub const MIN_INTERVAL_SECONDS: i64 = 60;

/// Identifier of an interval, unique within one layout pass.
///
/// Ids come from the upstream CRM feed as opaque strings; ordering is only
/// used for deterministic tie-breaking and map iteration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalId(String);

impl IntervalId {
    /// Create an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IntervalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IntervalId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IntervalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Source-tagged appointment payload.
///
/// Each upstream feed contributes its own category with its own metadata
/// shape; the layout pipeline treats the `detail` value as opaque and only
/// the common core fields of [`Interval`] drive placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Payload {
    /// Construction work order.
    Construction {
        /// Producer-specific metadata, never inspected by the layout.
        #[serde(default)]
        detail: serde_json::Value,
    },
    /// Fiber splicing job.
    Splicing {
        #[serde(default)]
        detail: serde_json::Value,
    },
    /// Earthwork / excavation job.
    Earthwork {
        #[serde(default)]
        detail: serde_json::Value,
    },
    /// Network autopsy (fault post-mortem) visit.
    Autopsy {
        #[serde(default)]
        detail: serde_json::Value,
    },
    /// Any category this build does not recognize; carries no metadata.
    #[serde(other)]
    #[default]
    Other,
}

impl Payload {
    /// The category tag as it appears on the wire.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Construction { .. } => "construction",
            Self::Splicing { .. } => "splicing",
            Self::Earthwork { .. } => "earthwork",
            Self::Autopsy { .. } => "autopsy",
            Self::Other => "other",
        }
    }

    /// The opaque producer metadata, if this category carries any.
    #[must_use]
    pub const fn detail(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Construction { detail }
            | Self::Splicing { detail }
            | Self::Earthwork { detail }
            | Self::Autopsy { detail } => Some(detail),
            Self::Other => None,
        }
    }
}

/// One appointment: a time span assigned to exactly one resource.
///
/// The four core fields drive layout; the payload rides along untouched so
/// producers keep their own metadata through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Feed-assigned id, unique within the pass.
    pub id: IntervalId,
    /// The resource (technician) this interval belongs to.
    pub resource_id: ResourceId,
    /// Scheduled start.
    pub start: DateTime<Utc>,
    /// Scheduled end. May be `<= start` in malformed feeds; see
    /// [`Interval::normalized_range`].
    pub end: DateTime<Utc>,
    /// Source-tagged metadata, opaque to the layout.
    #[serde(flatten)]
    pub payload: Payload,
}

impl Interval {
    /// Create an interval with a [`Payload::Other`] payload.
    #[must_use]
    pub fn new(
        id: impl Into<IntervalId>,
        resource_id: impl Into<ResourceId>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            resource_id: resource_id.into(),
            start,
            end,
            payload: Payload::Other,
        }
    }

    /// Attach a source payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// The raw `[start, end)` range exactly as fed.
    #[must_use]
    pub const fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    /// The range the pipeline lays out: when the feed claims
    /// `end <= start`, the end is pushed to
    /// `start + MIN_INTERVAL_SECONDS` so the interval still packs and
    /// renders. Well-formed intervals pass through unchanged.
    #[must_use]
    pub fn normalized_range(&self) -> TimeRange {
        if self.end <= self.start {
            TimeRange::new(self.start, self.start + Duration::seconds(MIN_INTERVAL_SECONDS))
        } else {
            self.range()
        }
    }

    /// Whether the feed data violated the `start < end` invariant.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.end <= self.start
    }
}
