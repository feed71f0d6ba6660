// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative chart grammar building blocks.
//!
//! This crate turns typed data records and mark declarations into concrete render
//! primitives, independent of how those primitives are eventually painted:
//! - **Scales** map data values into pixel space through a two-stage domain → range
//!   transform, with the range deferred until layout time.
//! - **Channels** bind a record attribute (or constant) to a scale.
//! - **Marks** (point, line, bar) walk a dataset and produce [`Symbol`]s plus resolved
//!   [`Axis`] tick layouts once a drawing rectangle is supplied.
//!
//! Everything is an immutable snapshot recomputed per layout pass; rect computation,
//! data loading, and painting belong to the caller.

#![no_std]

extern crate alloc;

mod axis;
mod bar_mark;
mod channel;
mod chart_spec;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod line_mark;
mod mark;
#[cfg(test)]
mod mark_tests;
mod point_mark;
mod scale;
mod symbol;
mod tick;

pub use axis::{
    Axis, AxisConfig, AxisLocation, AxisStyle, GridStyle, LabelAlignment, StrokeStyle,
    TickOrientation,
};
pub use bar_mark::{BarMark, Orientation};
pub use channel::{Binding, Categorical, Quantitative};
pub use chart_spec::{ChartBuilder, ChartSpec};
pub use format::format_tick_with_step;
pub use line_mark::LineMark;
pub use mark::{AnyMark, Mark};
pub use point_mark::PointMark;
pub use scale::{
    Band, BandScale, ContinuousScale, OutOfDomain, PointScale, Transform, infer_domain,
};
pub use symbol::{CornerRadii, Glyph, RuleOrientation, Symbol, TextAnchor};
pub use tick::{Tick, TickValue, nice_ticks};
