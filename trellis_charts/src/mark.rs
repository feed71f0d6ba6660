// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mark contract and type erasure over heterogeneous mark kinds.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::axis::Axis;
use crate::symbol::Symbol;

/// One series of visual symbols over a dataset.
///
/// A mark is a pure function of its data and the drawing rectangle: both methods recompute
/// from scratch on every call (scale copies are transient, nothing is cached), so re-invoking
/// them on every layout pass is safe and idempotent.
pub trait Mark {
    /// Computes the drawable symbols for the given plot rectangle.
    fn symbols(&self, rect: Rect) -> Vec<Symbol>;

    /// Resolves the axes this mark requests, at most one per edge.
    fn axes(&self, rect: Rect) -> Vec<Axis>;
}

/// A type-erased [`Mark`], letting [`ChartSpec`](crate::ChartSpec) hold heterogeneous mark
/// kinds over differently typed records behind one contract.
pub struct AnyMark(Box<dyn Mark>);

impl AnyMark {
    /// Wraps a concrete mark.
    pub fn new(mark: impl Mark + 'static) -> Self {
        Self(Box::new(mark))
    }
}

impl Mark for AnyMark {
    fn symbols(&self, rect: Rect) -> Vec<Symbol> {
        self.0.symbols(rect)
    }

    fn axes(&self, rect: Rect) -> Vec<Axis> {
        self.0.axes(rect)
    }
}

impl core::fmt::Debug for AnyMark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("AnyMark(..)")
    }
}
