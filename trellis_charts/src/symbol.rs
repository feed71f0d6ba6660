// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives produced by marks and axes.
//!
//! A [`Symbol`] is pure data: marks compute them, the renderer paints them. Nothing in this
//! crate draws.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Circle, Point, Rect, Shape};

use crate::axis::StrokeStyle;

/// One concrete drawable primitive, resolved into pixel space.
#[derive(Clone, Debug, PartialEq)]
pub enum Symbol {
    /// A point glyph centered at `center`.
    Point {
        /// Center position.
        center: Point,
        /// Glyph shape.
        glyph: Glyph,
        /// Glyph diameter/side length.
        size: f64,
    },
    /// A straight segment between two resolved points.
    Line {
        /// Segment start.
        start: Point,
        /// Segment end.
        end: Point,
        /// Glyph shape of the series the segment belongs to.
        glyph: Glyph,
        /// Stroke width (shared with the series glyph size).
        size: f64,
    },
    /// An axis-aligned rectangle (one bar of a bar mark).
    Rect {
        /// Rectangle geometry.
        rect: Rect,
        /// The category this rectangle encodes.
        category: String,
        /// Per-corner rounding radii.
        corner_radii: CornerRadii,
    },
    /// A reference line (axis domain line, tick mark, gridline).
    Rule {
        /// Rule start.
        start: Point,
        /// Rule end.
        end: Point,
        /// Whether the rule runs horizontally or vertically.
        orientation: RuleOrientation,
        /// Stroke paint and width.
        style: StrokeStyle,
    },
    /// A text run (tick label, axis label).
    Text {
        /// Anchor position.
        position: Point,
        /// The text content.
        text: String,
        /// How the text aligns to `position` along its baseline.
        anchor: TextAnchor,
        /// Font size.
        size: f64,
    },
    /// An external image placed by its top-left corner.
    Image {
        /// Top-left corner.
        position: Point,
        /// Display width.
        width: f64,
        /// Display height.
        height: f64,
        /// Renderer-interpreted source reference (path or URL).
        source: String,
    },
}

/// Per-corner rounding radii for [`Symbol::Rect`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    /// Top-left radius.
    pub top_left: f64,
    /// Top-right radius.
    pub top_right: f64,
    /// Bottom-left radius.
    pub bottom_left: f64,
    /// Bottom-right radius.
    pub bottom_right: f64,
}

impl CornerRadii {
    /// The same radius on all four corners.
    pub fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_left: radius,
            bottom_right: radius,
        }
    }
}

/// Direction of a [`Symbol::Rule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleOrientation {
    /// The rule runs along x.
    Horizontal,
    /// The rule runs along y.
    Vertical,
}

/// Horizontal alignment of a [`Symbol::Text`] run relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start of the run.
    Start,
    /// The position is the middle of the run.
    Middle,
    /// The position is the end of the run.
    End,
}

/// A small set of point glyph shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// A square (axis-aligned).
    Square,
    /// A circle.
    Circle,
}

impl Glyph {
    /// Returns a path for this glyph centered at `cx, cy`, using `size` as the diameter/side.
    pub fn path(self, cx: f64, cy: f64, size: f64) -> BezPath {
        match self {
            Self::Square => square_path(cx, cy, size),
            Self::Circle => circle_path(cx, cy, size),
        }
    }
}

fn square_path(cx: f64, cy: f64, size: f64) -> BezPath {
    let half = size * 0.5;
    let x0 = cx - half;
    let y0 = cy - half;
    let x1 = cx + half;
    let y1 = cy + half;
    let mut p = BezPath::new();
    p.move_to((x0, y0));
    p.line_to((x1, y0));
    p.line_to((x1, y1));
    p.line_to((x0, y1));
    p.close_path();
    p
}

fn circle_path(cx: f64, cy: f64, size: f64) -> BezPath {
    let r = size * 0.5;
    let circle = Circle::new((cx, cy), r);
    // Renderers with device knowledge should flatten themselves; this tolerance is for dumps.
    let tolerance = 0.1;
    circle.path_elements(tolerance).collect()
}
