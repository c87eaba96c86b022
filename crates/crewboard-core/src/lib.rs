//! Core types for the crewboard timeline layout engine.
//!
//! This crate provides the data model shared by the layout pipeline and
//! its consumers:
//! - Time primitives: [`TimeRange`]
//! - Feed entities: [`Interval`], [`Payload`], [`Resource`]
//! - View parameters: [`Window`], [`LayoutConfig`]
//! - Layout output primitives: [`RenderRect`], [`AxisColumn`]
//!
//! Everything here is transient per layout pass: entities are rebuilt from
//! an external feed for one visible window, consumed once, and discarded on
//! the next recompute. Nothing in this crate performs I/O.

mod config;
mod geometry;
mod interval;
mod resource;
mod time;
mod window;

pub use config::LayoutConfig;
pub use geometry::{AxisColumn, RenderRect};
pub use interval::{Interval, IntervalId, Payload, MIN_INTERVAL_SECONDS};
pub use resource::{sort_resources, Resource, ResourceId};
pub use time::TimeRange;
pub use window::{Window, DEFAULT_COLUMNS, MIN_WINDOW_SECONDS};
