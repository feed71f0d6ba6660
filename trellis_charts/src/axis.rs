// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration and resolved axes.
//!
//! A mark stores an [`AxisConfig`] per encoded dimension; at layout time the mark resolves
//! the config against its channel's scale into an [`Axis`] carrying the final tick list.
//! [`Axis::symbols`] lowers a resolved axis to plain rules and text runs for the renderer.
//!
//! Coordinates follow the renderer convention of y growing downward.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::symbol::{RuleOrientation, Symbol, TextAnchor};
use crate::tick::Tick;

/// A paint + width pair for stroked rules (domain lines, ticks, gridlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Style for gridlines, when the axis draws them.
    pub grid: GridStyle,
    /// Font size for tick labels.
    pub tick_font_size: f64,
    /// Font size for the axis label.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::default(),
            grid: GridStyle::default(),
            tick_font_size: 10.0,
            label_font_size: 11.0,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                brush: Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0)),
                stroke_width: 1.0,
            },
        }
    }
}

/// The chart edge an axis is placed at.
///
/// X axes may only sit at [`Top`](Self::Top)/[`Bottom`](Self::Bottom), y axes only at
/// [`Leading`](Self::Leading)/[`Trailing`](Self::Trailing); marks enforce this when an axis
/// is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisLocation {
    /// Above the plot area.
    Top,
    /// Below the plot area.
    Bottom,
    /// At the plot's leading (left) edge.
    Leading,
    /// At the plot's trailing (right) edge.
    Trailing,
}

impl AxisLocation {
    /// Whether this edge hosts a horizontal (x) axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Whether this edge hosts a vertical (y) axis.
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}

/// Which side of the axis line tick marks extend to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TickOrientation {
    /// Away from the plot area (the default).
    #[default]
    Outward,
    /// Into the plot area.
    Inward,
}

/// Placement of the axis label along the axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelAlignment {
    /// At the start of the axis (left / top).
    Start,
    /// Centered along the axis (the default).
    #[default]
    Center,
    /// At the end of the axis (right / bottom).
    End,
}

/// Requested axis placement and styling, stored on a mark until tick resolution.
#[derive(Clone, Debug)]
pub struct AxisConfig {
    /// Edge placement.
    pub location: AxisLocation,
    /// Whether to draw the axis domain line.
    pub rule: bool,
    /// Tick mark length in pixels.
    pub tick_length: f64,
    /// Which side of the axis line tick marks extend to.
    pub tick_orientation: TickOrientation,
    /// Padding between the tick end and the tick label.
    pub padding: f64,
    /// Optional axis label text.
    pub label: Option<String>,
    /// Distance from tick labels to the axis label.
    pub label_offset: f64,
    /// Placement of the axis label along the axis.
    pub label_alignment: LabelAlignment,
    /// Whether to draw gridlines spanning the plot area.
    pub grid: bool,
    /// Caller-supplied tick values; when set, values outside the domain are dropped and the
    /// rest replace generated ticks.
    pub values: Option<Vec<f64>>,
    /// Styling.
    pub style: AxisStyle,
}

impl AxisConfig {
    /// Creates an axis config for the given edge with sensible defaults.
    pub fn new(location: AxisLocation) -> Self {
        let padding = if location.is_horizontal() { 12.0 } else { 6.0 };
        Self {
            location,
            rule: true,
            tick_length: 5.0,
            tick_orientation: TickOrientation::Outward,
            padding,
            label: None,
            label_offset: 10.0,
            label_alignment: LabelAlignment::Center,
            grid: false,
            values: None,
            style: AxisStyle::default(),
        }
    }

    /// Convenience constructor for a bottom axis.
    pub fn bottom() -> Self {
        Self::new(AxisLocation::Bottom)
    }

    /// Convenience constructor for a top axis.
    pub fn top() -> Self {
        Self::new(AxisLocation::Top)
    }

    /// Convenience constructor for a leading axis.
    pub fn leading() -> Self {
        Self::new(AxisLocation::Leading)
    }

    /// Convenience constructor for a trailing axis.
    pub fn trailing() -> Self {
        Self::new(AxisLocation::Trailing)
    }

    /// Enables or disables the axis domain line.
    pub fn with_rule(mut self, rule: bool) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the tick mark length.
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }

    /// Sets which side of the axis line tick marks extend to.
    pub fn with_tick_orientation(mut self, orientation: TickOrientation) -> Self {
        self.tick_orientation = orientation;
        self
    }

    /// Sets the padding between tick ends and tick labels.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the axis label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the distance from tick labels to the axis label.
    pub fn with_label_offset(mut self, label_offset: f64) -> Self {
        self.label_offset = label_offset;
        self
    }

    /// Sets the axis label placement along the axis.
    pub fn with_label_alignment(mut self, alignment: LabelAlignment) -> Self {
        self.label_alignment = alignment;
        self
    }

    /// Enables or disables gridlines.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Requests explicit tick values instead of generated ones.
    pub fn with_values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.values = Some(values.into_iter().collect());
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Attaches a resolved tick list, producing the final [`Axis`].
    pub fn resolve(&self, ticks: Vec<Tick>) -> Axis {
        Axis {
            location: self.location,
            rule: self.rule,
            ticks,
            tick_length: self.tick_length,
            tick_orientation: self.tick_orientation,
            padding: self.padding,
            label: self.label.clone(),
            label_offset: self.label_offset,
            label_alignment: self.label_alignment,
            grid: self.grid,
            style: self.style.clone(),
        }
    }
}

/// A resolved axis for one edge of the chart: configuration plus the final tick list.
#[derive(Clone, Debug)]
pub struct Axis {
    /// Edge placement.
    pub location: AxisLocation,
    /// Whether to draw the axis domain line.
    pub rule: bool,
    /// Resolved ticks in domain order.
    pub ticks: Vec<Tick>,
    /// Tick mark length in pixels.
    pub tick_length: f64,
    /// Which side of the axis line tick marks extend to.
    pub tick_orientation: TickOrientation,
    /// Padding between the tick end and the tick label.
    pub padding: f64,
    /// Optional axis label text.
    pub label: Option<String>,
    /// Distance from tick labels to the axis label.
    pub label_offset: f64,
    /// Placement of the axis label along the axis.
    pub label_alignment: LabelAlignment,
    /// Whether to draw gridlines spanning the plot area.
    pub grid: bool,
    /// Styling.
    pub style: AxisStyle,
}

impl Axis {
    /// Lowers this axis to drawable symbols against the plot rectangle.
    ///
    /// Emits the domain rule, one tick rule per tick, gridlines spanning the plot when
    /// enabled, tick label text runs, and the axis label.
    pub fn symbols(&self, plot: Rect) -> Vec<Symbol> {
        let mut out = Vec::new();
        let outward = match self.tick_orientation {
            TickOrientation::Outward => 1.0,
            TickOrientation::Inward => -1.0,
        };
        // Labels always sit clear of outward ticks.
        let label_clearance = match self.tick_orientation {
            TickOrientation::Outward => self.tick_length,
            TickOrientation::Inward => 0.0,
        } + self.padding;

        match self.location {
            AxisLocation::Bottom | AxisLocation::Top => {
                let (edge, away) = if self.location == AxisLocation::Bottom {
                    (plot.y1, 1.0)
                } else {
                    (plot.y0, -1.0)
                };
                if self.rule {
                    out.push(Symbol::Rule {
                        start: Point::new(plot.x0, edge),
                        end: Point::new(plot.x1, edge),
                        orientation: RuleOrientation::Horizontal,
                        style: self.style.rule.clone(),
                    });
                }
                for tick in &self.ticks {
                    let x = tick.range_location;
                    if self.grid {
                        out.push(Symbol::Rule {
                            start: Point::new(x, plot.y0),
                            end: Point::new(x, plot.y1),
                            orientation: RuleOrientation::Vertical,
                            style: self.style.grid.stroke.clone(),
                        });
                    }
                    out.push(Symbol::Rule {
                        start: Point::new(x, edge),
                        end: Point::new(x, edge + away * outward * self.tick_length),
                        orientation: RuleOrientation::Vertical,
                        style: self.style.rule.clone(),
                    });
                    out.push(Symbol::Text {
                        position: Point::new(x, edge + away * label_clearance),
                        text: tick.label.clone(),
                        anchor: TextAnchor::Middle,
                        size: self.style.tick_font_size,
                    });
                }
                if let Some(label) = &self.label {
                    let (x, anchor) = match self.label_alignment {
                        LabelAlignment::Start => (plot.x0, TextAnchor::Start),
                        LabelAlignment::Center => ((plot.x0 + plot.x1) / 2.0, TextAnchor::Middle),
                        LabelAlignment::End => (plot.x1, TextAnchor::End),
                    };
                    out.push(Symbol::Text {
                        position: Point::new(x, edge + away * (label_clearance + self.label_offset)),
                        text: label.clone(),
                        anchor,
                        size: self.style.label_font_size,
                    });
                }
            }
            AxisLocation::Leading | AxisLocation::Trailing => {
                let (edge, away, anchor) = if self.location == AxisLocation::Leading {
                    (plot.x0, -1.0, TextAnchor::End)
                } else {
                    (plot.x1, 1.0, TextAnchor::Start)
                };
                if self.rule {
                    out.push(Symbol::Rule {
                        start: Point::new(edge, plot.y0),
                        end: Point::new(edge, plot.y1),
                        orientation: RuleOrientation::Vertical,
                        style: self.style.rule.clone(),
                    });
                }
                for tick in &self.ticks {
                    let y = tick.range_location;
                    if self.grid {
                        out.push(Symbol::Rule {
                            start: Point::new(plot.x0, y),
                            end: Point::new(plot.x1, y),
                            orientation: RuleOrientation::Horizontal,
                            style: self.style.grid.stroke.clone(),
                        });
                    }
                    out.push(Symbol::Rule {
                        start: Point::new(edge, y),
                        end: Point::new(edge + away * outward * self.tick_length, y),
                        orientation: RuleOrientation::Horizontal,
                        style: self.style.rule.clone(),
                    });
                    out.push(Symbol::Text {
                        position: Point::new(edge + away * label_clearance, y),
                        text: tick.label.clone(),
                        anchor,
                        size: self.style.tick_font_size,
                    });
                }
                if let Some(label) = &self.label {
                    let y = match self.label_alignment {
                        LabelAlignment::Start => plot.y0,
                        LabelAlignment::Center => (plot.y0 + plot.y1) / 2.0,
                        LabelAlignment::End => plot.y1,
                    };
                    out.push(Symbol::Text {
                        position: Point::new(
                            edge + away * (label_clearance + self.label_offset),
                            y,
                        ),
                        text: label.clone(),
                        anchor,
                        size: self.style.label_font_size,
                    });
                }
            }
        }
        out
    }
}
