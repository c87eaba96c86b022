#![allow(clippy::cast_precision_loss)]
//! Timeline layout pipeline for the crewboard.
//!
//! Turns one day of technician appointments into collision-free render
//! geometry in five steps:
//!
//! 1. **Sort** — canonical interval order per resource ([`interval_order`])
//! 2. **Pack** — greedy first-fit into bounded lanes ([`pack_lanes`])
//! 3. **Normalize** — one shared row height across the board
//!    ([`row_height_px`])
//! 4. **Map** — clamped fractional coordinates over the visible window
//!    ([`map_range`], [`axis_columns`])
//! 5. **Build** — immutable [`RenderRect`](crewboard_core::RenderRect)s
//!    keyed by interval id
//!
//! [`LayoutEngine::compute`] runs the whole pipeline synchronously; it
//! never fails and never drops an in-window interval. See the individual
//! steps for the degenerate-input rules.

mod axis;
mod engine;
mod lanes;
mod rows;
mod sort;

pub use axis::{axis_columns, map_range};
pub use engine::{BoardLayout, LayoutEngine};
pub use lanes::{pack_lanes, LanePlacement, PackedLanes};
pub use rows::{row_height_px, ResourceRow};
pub use sort::{interval_order, sort_intervals};
