// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point (scatter) mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::axis::{Axis, AxisConfig};
use crate::channel::Quantitative;
use crate::mark::Mark;
use crate::symbol::{Glyph, Symbol};

/// A scatter series: one point glyph per record.
///
/// Channel domains are inferred from the dataset at construction; ranges are bound to the
/// drawing rectangle each time symbols are requested. Records whose x or y channel resolves
/// to `None` (NaN, out-of-domain under a drop policy) are silently omitted.
pub struct PointMark<R> {
    data: Vec<R>,
    x: Quantitative<R>,
    y: Quantitative<R>,
    glyph: Glyph,
    size: f64,
    x_axis: Option<AxisConfig>,
    y_axis: Option<AxisConfig>,
}

impl<R> PointMark<R> {
    /// Creates a point mark, inferring both channel domains from `data`.
    pub fn new(data: Vec<R>, x: Quantitative<R>, y: Quantitative<R>) -> Self {
        let x = x.apply_domain(&data);
        let y = y.apply_domain(&data);
        Self {
            data,
            x,
            y,
            glyph: Glyph::Circle,
            size: 6.0,
            x_axis: None,
            y_axis: None,
        }
    }

    /// Sets the glyph shape.
    pub fn with_glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = glyph;
        self
    }

    /// Sets the glyph size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Requests an x axis.
    ///
    /// Panics unless the config's location is `Top` or `Bottom`.
    pub fn with_x_axis(mut self, config: AxisConfig) -> Self {
        assert!(
            config.location.is_horizontal(),
            "an x axis must be placed at the top or bottom edge"
        );
        self.x_axis = Some(config);
        self
    }

    /// Requests a y axis.
    ///
    /// Panics unless the config's location is `Leading` or `Trailing`.
    pub fn with_y_axis(mut self, config: AxisConfig) -> Self {
        assert!(
            config.location.is_vertical(),
            "a y axis must be placed at the leading or trailing edge"
        );
        self.y_axis = Some(config);
        self
    }
}

impl<R> Mark for PointMark<R> {
    fn symbols(&self, rect: Rect) -> Vec<Symbol> {
        let x = self.x.clone().range(rect.x0, rect.x1);
        let y = self.y.clone().range(rect.y0, rect.y1);
        self.data
            .iter()
            .filter_map(|record| {
                let px = x.scaled(record)?;
                let py = y.scaled(record)?;
                Some(Symbol::Point {
                    center: Point::new(px, py),
                    glyph: self.glyph,
                    size: self.size,
                })
            })
            .collect()
    }

    fn axes(&self, rect: Rect) -> Vec<Axis> {
        let mut out = Vec::new();
        if let Some(config) = &self.x_axis {
            out.push(resolve_quantitative_axis(config, &self.x, rect.x0, rect.x1));
        }
        if let Some(config) = &self.y_axis {
            out.push(resolve_quantitative_axis(config, &self.y, rect.y0, rect.y1));
        }
        out
    }
}

/// Resolves an axis config against a quantitative channel's scale over `[lower, higher]`.
pub(crate) fn resolve_quantitative_axis<R>(
    config: &AxisConfig,
    channel: &Quantitative<R>,
    lower: f64,
    higher: f64,
) -> Axis {
    let ticks = match &config.values {
        Some(values) => channel.scale().ticks_from_values(values, lower, higher),
        None => channel.scale().ticks(lower, higher),
    };
    config.resolve(ticks)
}
