// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition: an ordered mark list plus the merged per-edge axis set.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::axis::{Axis, AxisLocation};
use crate::mark::{AnyMark, Mark};
use crate::symbol::Symbol;

/// An ordered collection of marks forming one chart.
///
/// Axis resolution folds every mark's axis set into one table keyed by edge; when two marks
/// request an axis at the same edge the later mark wins silently. Callers layering marks with
/// conflicting axis configurations should order them so the intended axis comes last.
#[derive(Debug, Default)]
pub struct ChartSpec {
    /// The marks, in draw order.
    pub marks: Vec<AnyMark>,
}

impl ChartSpec {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenates two charts, preserving mark order (`self` first).
    pub fn merging(mut self, other: Self) -> Self {
        self.marks.extend(other.marks);
        self
    }

    /// Computes all marks' symbols against the plot rectangle, in mark order.
    pub fn symbols(&self, plot: Rect) -> Vec<Symbol> {
        self.marks
            .iter()
            .flat_map(|mark| mark.symbols(plot))
            .collect()
    }

    /// Resolves the merged axis set: at most one [`Axis`] per edge, later marks overwriting
    /// earlier ones at the same edge.
    pub fn axes(&self, plot: Rect) -> HashMap<AxisLocation, Axis> {
        let mut out = HashMap::new();
        for mark in &self.marks {
            for axis in mark.axes(plot) {
                out.insert(axis.location, axis);
            }
        }
        out
    }
}

/// An explicit accumulator for building a [`ChartSpec`] mark by mark.
#[derive(Debug, Default)]
pub struct ChartBuilder {
    marks: Vec<AnyMark>,
}

impl ChartBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mark.
    pub fn add(mut self, mark: impl Mark + 'static) -> Self {
        self.marks.push(AnyMark::new(mark));
        self
    }

    /// Finalizes the chart.
    pub fn build(self) -> ChartSpec {
        ChartSpec { marks: self.marks }
    }
}
