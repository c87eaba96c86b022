//! Board layout tuning knobs.

use serde::{Deserialize, Serialize};

/// Hard cap on parallel lanes within one resource row.
const DEFAULT_CAPACITY: usize = 6;
/// Upper bound accepted for any pixel-valued knob.
const MAX_PX: f32 = 10_000.0;

/// Tuning values for the layout pipeline.
///
/// The configuration is an explicit value passed into the engine per pass,
/// not module state; persisting a user's preferred values between sessions
/// is the caller's concern. Every field tolerates nonsense input:
/// [`LayoutConfig::sanitized`] clamps rather than errors, and the engine
/// sanitizes on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Maximum parallel lanes per resource row. Once a resource needs
    /// more, further intervals collide in the last lane.
    pub capacity: usize,
    /// Height of one interval block.
    pub lane_height_px: f32,
    /// Vertical gap between lanes in the same row.
    pub lane_spacing_px: f32,
    /// Padding added to every row beyond its lane stack.
    pub row_padding_px: f32,
    /// Floor for the shared row height, so rows stay clickable even when
    /// every visible resource is idle.
    pub min_row_height_px: f32,
    /// Floor for an interval's rendered width, as a fraction of the
    /// window. Keeps very short jobs visible and clickable.
    pub min_width_fraction: f64,
    /// z-index of lane 0; later lanes paint above earlier ones.
    pub base_z: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            lane_height_px: 28.0,
            lane_spacing_px: 4.0,
            row_padding_px: 8.0,
            min_row_height_px: 40.0,
            min_width_fraction: 0.05,
            base_z: 10,
        }
    }
}

impl LayoutConfig {
    /// A copy with every field clamped into its valid range.
    ///
    /// Total: zero capacity becomes one lane, non-finite pixel values fall
    /// back to their defaults, and the width floor is forced into
    /// `[0, 1]`. Valid configurations pass through unchanged.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            capacity: self.capacity.max(1),
            lane_height_px: px_or(self.lane_height_px, 1.0, defaults.lane_height_px),
            lane_spacing_px: px_or(self.lane_spacing_px, 0.0, defaults.lane_spacing_px),
            row_padding_px: px_or(self.row_padding_px, 0.0, defaults.row_padding_px),
            min_row_height_px: px_or(self.min_row_height_px, 0.0, defaults.min_row_height_px),
            min_width_fraction: if self.min_width_fraction.is_finite() {
                self.min_width_fraction.clamp(0.0, 1.0)
            } else {
                defaults.min_width_fraction
            },
            base_z: self.base_z,
        }
    }

    /// Vertical pitch of one lane: block height plus inter-lane gap.
    #[must_use]
    pub fn lane_pitch_px(&self) -> f32 {
        self.lane_height_px + self.lane_spacing_px
    }
}

fn px_or(value: f32, min: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, MAX_PX)
    } else {
        fallback
    }
}
