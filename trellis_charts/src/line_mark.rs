// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::axis::{Axis, AxisConfig};
use crate::channel::Quantitative;
use crate::mark::Mark;
use crate::point_mark::resolve_quantitative_axis;
use crate::symbol::{Glyph, Symbol};

/// A line series: one point glyph per valid record, connected by segments.
///
/// Each valid point connects to the *previous valid* point, not the previous record: a record
/// dropped by either channel leaves a gap that the line skips across rather than breaking at.
/// Four records with one dropped therefore yield three points and two segments.
pub struct LineMark<R> {
    data: Vec<R>,
    x: Quantitative<R>,
    y: Quantitative<R>,
    glyph: Glyph,
    size: f64,
    x_axis: Option<AxisConfig>,
    y_axis: Option<AxisConfig>,
}

impl<R> LineMark<R> {
    /// Creates a line mark, inferring both channel domains from `data`.
    pub fn new(data: Vec<R>, x: Quantitative<R>, y: Quantitative<R>) -> Self {
        let x = x.apply_domain(&data);
        let y = y.apply_domain(&data);
        Self {
            data,
            x,
            y,
            glyph: Glyph::Circle,
            size: 2.0,
            x_axis: None,
            y_axis: None,
        }
    }

    /// Sets the glyph shape used for the series' points.
    pub fn with_glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = glyph;
        self
    }

    /// Sets the glyph size; segments use the same value as their stroke width.
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

impl<R> Mark for LineMark<R> {
    fn symbols(&self, rect: Rect) -> Vec<Symbol> {
        let x = self.x.clone().range(rect.x0, rect.x1);
        let y = self.y.clone().range(rect.y0, rect.y1);
        let mut out = Vec::new();
        let mut previous: Option<Point> = None;
        for record in &self.data {
            let Some(px) = x.scaled(record) else {
                continue;
            };
            let Some(py) = y.scaled(record) else {
                continue;
            };
            let point = Point::new(px, py);
            out.push(Symbol::Point {
                center: point,
                glyph: self.glyph,
                size: self.size,
            });
            if let Some(previous) = previous {
                out.push(Symbol::Line {
                    start: previous,
                    end: point,
                    glyph: self.glyph,
                    size: self.size,
                });
            }
            previous = Some(point);
        }
        out
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
