// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::axis::{Axis, AxisConfig};
use crate::channel::{Categorical, Quantitative};
use crate::mark::Mark;
use crate::point_mark::resolve_quantitative_axis;
use crate::symbol::{CornerRadii, Symbol};

/// Bar growth direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Categories along x, values along y (the default).
    #[default]
    Vertical,
    /// Categories along y, values along x.
    Horizontal,
    /// Reserved; requesting symbols with this orientation panics.
    Depth,
}

/// A bar series: one rectangle per record, one band per category.
///
/// The categorical channel partitions one plot dimension into bands; the quantitative channel
/// gives each bar its extent along the other, measured from the rectangle's near edge.
pub struct BarMark<R> {
    data: Vec<R>,
    category: Categorical<R>,
    value: Quantitative<R>,
    orientation: Orientation,
    corner_radii: CornerRadii,
    category_axis: Option<AxisConfig>,
    value_axis: Option<AxisConfig>,
}

impl<R> BarMark<R> {
    /// Creates a vertical bar mark, inferring both channel domains from `data`.
    pub fn new(data: Vec<R>, category: Categorical<R>, value: Quantitative<R>) -> Self {
        let category = category.apply_domain(&data);
        let value = value.apply_domain(&data);
        Self {
            data,
            category,
            value,
            orientation: Orientation::Vertical,
            corner_radii: CornerRadii::default(),
            category_axis: None,
            value_axis: None,
        }
    }

    /// Sets the growth direction.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets per-corner rounding radii on every bar.
    pub fn with_corner_radii(mut self, corner_radii: CornerRadii) -> Self {
        self.corner_radii = corner_radii;
        self
    }

    /// Requests an axis along the category dimension.
    pub fn with_category_axis(mut self, config: AxisConfig) -> Self {
        self.category_axis = Some(config);
        self
    }

    /// Requests an axis along the value dimension.
    pub fn with_value_axis(mut self, config: AxisConfig) -> Self {
        self.value_axis = Some(config);
        self
    }

    fn assert_axis_edges(&self) {
        let (category_horizontal, value_horizontal) = match self.orientation {
            Orientation::Vertical => (true, false),
            Orientation::Horizontal => (false, true),
            Orientation::Depth => panic!("depth orientation is not implemented"),
        };
        if let Some(config) = &self.category_axis {
            assert_eq!(
                config.location.is_horizontal(),
                category_horizontal,
                "category axis edge does not match the bar orientation"
            );
        }
        if let Some(config) = &self.value_axis {
            assert_eq!(
                config.location.is_horizontal(),
                value_horizontal,
                "value axis edge does not match the bar orientation"
            );
        }
    }
}

impl<R> Mark for BarMark<R> {
    fn symbols(&self, rect: Rect) -> Vec<Symbol> {
        match self.orientation {
            Orientation::Vertical => {
                let category = self.category.clone().range(rect.x0, rect.x1);
                let value = self.value.clone().range(rect.y0, rect.y1);
                self.data
                    .iter()
                    .filter_map(|record| {
                        let band = category.band(record)?;
                        let extent = value.scaled(record)?;
                        Some(Symbol::Rect {
                            rect: Rect::new(
                                band.lower,
                                rect.y0.min(extent),
                                band.higher,
                                rect.y0.max(extent),
                            ),
                            category: category.resolve(record),
                            corner_radii: self.corner_radii,
                        })
                    })
                    .collect()
            }
            Orientation::Horizontal => {
                let category = self.category.clone().range(rect.y0, rect.y1);
                let value = self.value.clone().range(rect.x0, rect.x1);
                self.data
                    .iter()
                    .filter_map(|record| {
                        let band = category.band(record)?;
                        let extent = value.scaled(record)?;
                        Some(Symbol::Rect {
                            rect: Rect::new(
                                rect.x0.min(extent),
                                band.lower,
                                rect.x0.max(extent),
                                band.higher,
                            ),
                            category: category.resolve(record),
                            corner_radii: self.corner_radii,
                        })
                    })
                    .collect()
            }
            Orientation::Depth => panic!("depth orientation is not implemented"),
        }
    }

    fn axes(&self, rect: Rect) -> Vec<Axis> {
        self.assert_axis_edges();
        let (category_span, value_span) = match self.orientation {
            Orientation::Vertical => ((rect.x0, rect.x1), (rect.y0, rect.y1)),
            Orientation::Horizontal => ((rect.y0, rect.y1), (rect.x0, rect.x1)),
            Orientation::Depth => panic!("depth orientation is not implemented"),
        };
        let mut out = Vec::new();
        if let Some(config) = &self.category_axis {
            let ticks = self
                .category
                .scale()
                .ticks(category_span.0, category_span.1);
            out.push(config.resolve(ticks));
        }
        if let Some(config) = &self.value_axis {
            out.push(resolve_quantitative_axis(
                config,
                &self.value,
                value_span.0,
                value_span.1,
            ));
        }
        out
    }
}
