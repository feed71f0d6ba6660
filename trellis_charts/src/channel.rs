// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual channels: the binding of a data attribute (or constant) to a scale.
//!
//! A channel resolves a record into a raw value through its [`Binding`], then maps that value
//! through its scale. Like scales, channels are immutable snapshots: `apply_domain` and
//! `range` return new values and leave the original untouched.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::scale::{Band, BandScale, ContinuousScale, infer_domain};

/// How a channel extracts a value from a record.
///
/// The binding kind is fixed at construction. `Field` and `Derived` resolve identically at
/// lookup time; the discriminant only matters to `apply_domain`, which treats a constant as a
/// singleton domain instead of walking the dataset.
pub enum Binding<R, V> {
    /// Every record resolves to the same value.
    Constant(V),
    /// A fixed attribute reference, e.g. `|r| r.age`.
    Field(Arc<dyn Fn(&R) -> V>),
    /// A value computed from the whole record.
    Derived(Arc<dyn Fn(&R) -> V>),
}

impl<R, V: Clone> Binding<R, V> {
    /// Resolves one record to its raw value.
    pub fn resolve(&self, record: &R) -> V {
        match self {
            Self::Constant(v) => v.clone(),
            Self::Field(f) | Self::Derived(f) => f(record),
        }
    }
}

impl<R, V: Clone> Clone for Binding<R, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Constant(v) => Self::Constant(v.clone()),
            Self::Field(f) => Self::Field(f.clone()),
            Self::Derived(f) => Self::Derived(f.clone()),
        }
    }
}

impl<R, V: core::fmt::Debug> core::fmt::Debug for Binding<R, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Field(_) => f.write_str("Field(..)"),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// A continuous numeric channel: a binding plus a [`ContinuousScale`].
#[derive(Debug)]
pub struct Quantitative<R> {
    binding: Binding<R, f64>,
    scale: ContinuousScale,
}

impl<R> Clone for Quantitative<R> {
    fn clone(&self) -> Self {
        Self {
            binding: self.binding.clone(),
            scale: self.scale,
        }
    }
}

impl<R> Quantitative<R> {
    /// A channel that resolves every record to `value`.
    ///
    /// The constant is still mapped through the scale, never drawn verbatim: its domain
    /// collapses to the singleton `[value, value]` when applied.
    pub fn constant(value: f64) -> Self {
        Self::with_binding(Binding::Constant(value))
    }

    /// A channel bound to a fixed attribute of the record.
    pub fn field(accessor: impl Fn(&R) -> f64 + 'static) -> Self {
        Self::with_binding(Binding::Field(Arc::new(accessor)))
    }

    /// A channel computed from the whole record.
    pub fn derived(derive: impl Fn(&R) -> f64 + 'static) -> Self {
        Self::with_binding(Binding::Derived(Arc::new(derive)))
    }

    fn with_binding(binding: Binding<R, f64>) -> Self {
        Self {
            binding,
            scale: ContinuousScale::new().with_nice(true),
        }
    }

    /// Replaces the channel's scale, keeping the binding.
    pub fn with_scale(mut self, scale: ContinuousScale) -> Self {
        self.scale = scale;
        self
    }

    /// Returns the channel's scale.
    pub fn scale(&self) -> &ContinuousScale {
        &self.scale
    }

    /// Resolves one record to its raw (unscaled) value.
    pub fn resolve(&self, record: &R) -> f64 {
        self.binding.resolve(record)
    }

    /// Maps every record through the binding and replaces the scale's domain.
    ///
    /// A constant binding skips the walk and collapses the domain to its single value. When
    /// no record yields a finite value the domain is applied empty, so later lookups drop
    /// every record instead of panicking.
    pub fn apply_domain(mut self, records: &[R]) -> Self {
        let domain = match &self.binding {
            Binding::Constant(v) => infer_domain([*v]),
            binding => infer_domain(records.iter().map(|r| binding.resolve(r))),
        };
        self.scale = match domain {
            Some(domain) => self.scale.with_domain(domain),
            None => self.scale.with_empty_domain(),
        };
        self
    }

    /// Binds the scale's output range.
    pub fn range(mut self, lower: f64, higher: f64) -> Self {
        self.scale = self.scale.range(lower, higher);
        self
    }

    /// Resolves a record and maps it through the scale.
    ///
    /// Requires both domain and range to have been applied; per-record failures (NaN,
    /// out-of-domain under a drop policy) return `None`.
    pub fn scaled(&self, record: &R) -> Option<f64> {
        self.scale.scale(self.binding.resolve(record))
    }

    /// One-shot lookup that binds `[lower, higher]` for this call only.
    ///
    /// Convenient for ad hoc queries, but rebinding per record costs O(records); callers
    /// mapping a whole dataset should bind the range once with [`Self::range`] and use
    /// [`Self::scaled`].
    pub fn scaled_in(&self, record: &R, lower: f64, higher: f64) -> Option<f64> {
        self.clone().range(lower, higher).scaled(record)
    }
}

/// A discrete categorical channel: a string binding plus a [`BandScale`].
#[derive(Debug)]
pub struct Categorical<R> {
    binding: Binding<R, String>,
    scale: BandScale,
}

impl<R> Clone for Categorical<R> {
    fn clone(&self) -> Self {
        Self {
            binding: self.binding.clone(),
            scale: self.scale.clone(),
        }
    }
}

impl<R> Categorical<R> {
    /// A channel that resolves every record to the same category.
    pub fn constant(category: impl Into<String>) -> Self {
        Self::with_binding(Binding::Constant(category.into()))
    }

    /// A channel bound to a fixed attribute of the record.
    pub fn field(accessor: impl Fn(&R) -> String + 'static) -> Self {
        Self::with_binding(Binding::Field(Arc::new(accessor)))
    }

    /// A channel computed from the whole record.
    pub fn derived(derive: impl Fn(&R) -> String + 'static) -> Self {
        Self::with_binding(Binding::Derived(Arc::new(derive)))
    }

    fn with_binding(binding: Binding<R, String>) -> Self {
        Self {
            binding,
            scale: BandScale::new(),
        }
    }

    /// Replaces the channel's scale, keeping the binding.
    pub fn with_scale(mut self, scale: BandScale) -> Self {
        self.scale = scale;
        self
    }

    /// Returns the channel's scale.
    pub fn scale(&self) -> &BandScale {
        &self.scale
    }

    /// Resolves one record to its category.
    pub fn resolve(&self, record: &R) -> String {
        self.binding.resolve(record)
    }

    /// Maps every record through the binding and replaces the scale's domain, deduplicating
    /// while preserving first-seen order. A constant collapses to a single category.
    pub fn apply_domain(mut self, records: &[R]) -> Self {
        let categories: Vec<String> = match &self.binding {
            Binding::Constant(c) => alloc::vec![c.clone()],
            binding => records.iter().map(|r| binding.resolve(r)).collect(),
        };
        self.scale = self.scale.with_domain(categories);
        self
    }

    /// Binds the scale's output range.
    pub fn range(mut self, lower: f64, higher: f64) -> Self {
        self.scale = self.scale.range(lower, higher);
        self
    }

    /// Resolves a record and maps it to its band.
    ///
    /// Requires both domain and range to have been applied; an unknown category returns
    /// `None`.
    pub fn band(&self, record: &R) -> Option<Band> {
        self.scale.scale(&self.binding.resolve(record))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    struct Row {
        age: f64,
        group: &'static str,
    }

    fn rows() -> std::vec::Vec<Row> {
        std::vec![
            Row {
                age: 10.0,
                group: "a",
            },
            Row {
                age: 30.0,
                group: "b",
            },
            Row {
                age: 20.0,
                group: "a",
            },
        ]
    }

    #[test]
    fn field_channel_infers_domain_from_records() {
        let rows = rows();
        let channel = Quantitative::field(|r: &Row| r.age).apply_domain(&rows);
        assert_eq!(channel.scale().domain(), Some((10.0, 30.0)));
        let channel = channel.range(0.0, 100.0);
        assert_eq!(channel.scaled(&rows[1]), Some(100.0));
    }

    #[test]
    fn apply_domain_leaves_the_original_untouched() {
        let rows = rows();
        let original = Quantitative::field(|r: &Row| r.age);
        let applied = original.clone().apply_domain(&rows);
        assert_eq!(original.scale().domain(), None);
        assert_eq!(applied.scale().domain(), Some((10.0, 30.0)));
    }

    #[test]
    fn constant_channel_is_still_scaled() {
        let rows = rows();
        let channel = Quantitative::constant(4.0)
            .with_scale(ContinuousScale::new())
            .apply_domain(&rows)
            .range(10.0, 20.0);
        // A singleton domain maps to the lower range bound, not to the constant itself.
        assert_eq!(channel.scaled(&rows[0]), Some(10.0));
    }

    #[test]
    fn derived_channel_resolves_through_the_closure() {
        let rows = rows();
        let channel = Quantitative::derived(|r: &Row| r.age * 2.0)
            .apply_domain(&rows)
            .range(0.0, 60.0);
        assert_eq!(channel.scale().domain(), Some((20.0, 60.0)));
        assert_eq!(channel.scaled(&rows[0]), Some(0.0));
    }

    #[test]
    fn one_shot_lookup_matches_prebound_range() {
        let rows = rows();
        let channel = Quantitative::field(|r: &Row| r.age).apply_domain(&rows);
        let prebound = channel.clone().range(0.0, 50.0);
        assert_eq!(
            channel.scaled_in(&rows[2], 0.0, 50.0),
            prebound.scaled(&rows[2])
        );
    }

    #[test]
    fn categorical_channel_dedups_in_first_seen_order() {
        let rows = rows();
        let channel = Categorical::field(|r: &Row| r.group.into())
            .apply_domain(&rows)
            .range(0.0, 100.0);
        assert_eq!(channel.scale().domain(), ["a", "b"]);
        let band = channel.band(&rows[0]).unwrap();
        assert_eq!(band.lower, 0.0);
        assert_eq!(band.higher, 50.0);
    }

    #[test]
    fn constant_categorical_collapses_to_one_band() {
        let rows = rows();
        let channel = Categorical::constant("only")
            .apply_domain(&rows)
            .range(0.0, 80.0);
        let band = channel.band(&rows[1]).unwrap();
        assert_eq!((band.lower, band.higher), (0.0, 80.0));
    }
}
