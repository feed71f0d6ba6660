// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: two-stage domain → range value mapping.
//!
//! A scale is an immutable snapshot; every mutator consumes `self` and returns a new value.
//! Domain and range are independent and can be set in either order, but mapping a value
//! before both are set is a caller bug and panics. Per-value failures (NaN input, unknown
//! categories, out-of-domain values under [`OutOfDomain::Drop`]) map to `None` instead.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::format_tick_with_step;
use crate::tick::{self, Tick};

/// The forward transform applied before affine interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Identity: plain linear interpolation.
    Linear,
    /// Logarithmic interpolation in the given base.
    Log {
        /// Log base (10 is the usual choice).
        base: f64,
    },
    /// Power-law interpolation with the given exponent.
    Pow {
        /// The exponent (0.5 gives a square-root scale).
        exponent: f64,
    },
}

impl Transform {
    fn apply(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Log { base } => {
                let denom = base.ln();
                if denom == 0.0 { x.ln() } else { x.ln() / denom }
            }
            Self::Pow { exponent } => x.powf(exponent),
        }
    }
}

/// Policy for input values outside the domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutOfDomain {
    /// Extrapolate past the range bounds (the default).
    #[default]
    Extend,
    /// Pin the output to the nearer range bound.
    Clamp,
    /// Map the value to `None`; the caller drops it.
    Drop,
}

/// The applied state of a continuous scale's domain.
///
/// `Empty` is distinct from `Unset`: a domain that was applied from data containing no finite
/// values drops every lookup instead of panicking, so an all-NaN dataset degrades to zero
/// symbols rather than aborting the mark.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Domain {
    Unset,
    Empty,
    Bounds(f64, f64),
}

/// A continuous scale mapping a numeric domain onto a numeric range.
///
/// The mapping is affine in transformed space, so `scale(domain_lower) == range_lower` and
/// `scale(domain_higher) == range_higher` exactly, extrapolating outside unless configured
/// otherwise. A reversed range (`lower > higher`) is legal and flips direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousScale {
    domain: Domain,
    range: Option<(f64, f64)>,
    transform: Transform,
    out_of_domain: OutOfDomain,
    nice: bool,
    tick_count: usize,
}

impl Default for ContinuousScale {
    fn default() -> Self {
        Self::new()
    }
}

impl ContinuousScale {
    /// Creates a linear scale with no domain or range yet.
    pub fn new() -> Self {
        Self {
            domain: Domain::Unset,
            range: None,
            transform: Transform::Linear,
            out_of_domain: OutOfDomain::Extend,
            nice: false,
            tick_count: 5,
        }
    }

    /// Creates a log scale in the given base with no domain or range yet.
    pub fn log(base: f64) -> Self {
        Self::new().with_transform(Transform::Log { base })
    }

    /// Creates a power scale with the given exponent and no domain or range yet.
    pub fn pow(exponent: f64) -> Self {
        Self::new().with_transform(Transform::Pow { exponent })
    }

    /// Replaces the domain with `[lower, higher]`.
    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.domain = Domain::Bounds(domain.0, domain.1);
        self
    }

    /// Marks the domain as applied but empty.
    ///
    /// An empty domain drops every lookup (`scale` returns `None`, tick generation yields
    /// nothing), unlike an unset domain which panics when used.
    pub fn with_empty_domain(mut self) -> Self {
        self.domain = Domain::Empty;
        self
    }

    /// Replaces the domain with `[min, max]` of the finite values in `values`.
    ///
    /// When `nice` is set, tick generation rounds both ends outward to step multiples so the
    /// resulting tick labels look round. An empty (or all-NaN) iterator marks the domain
    /// empty, so every lookup drops instead of panicking.
    pub fn domain_from(mut self, values: impl IntoIterator<Item = f64>, nice: bool) -> Self {
        self.domain = match infer_domain(values) {
            Some((lower, higher)) => Domain::Bounds(lower, higher),
            None => Domain::Empty,
        };
        self.nice = nice;
        self
    }

    /// Replaces the output range with `[lower, higher]`.
    ///
    /// Rebinding is idempotent per call: the new bounds fully replace the old ones.
    pub fn range(mut self, lower: f64, higher: f64) -> Self {
        self.range = Some((lower, higher));
        self
    }

    /// Sets the transform kind.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the out-of-domain policy.
    pub fn with_out_of_domain(mut self, policy: OutOfDomain) -> Self {
        self.out_of_domain = policy;
        self
    }

    /// Enables or disables nice tick bounds.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Sets the target tick count (default 5). The generated count is approximate.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Returns the domain bounds, if applied and non-empty.
    pub fn domain(&self) -> Option<(f64, f64)> {
        match self.domain {
            Domain::Bounds(lower, higher) => Some((lower, higher)),
            Domain::Unset | Domain::Empty => None,
        }
    }

    /// Returns the range, if bound.
    pub fn range_bounds(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Whether both domain and range have been applied.
    pub fn is_bound(&self) -> bool {
        !matches!(self.domain, Domain::Unset) && self.range.is_some()
    }

    /// Panics on an unset domain (a caller bug); an applied-but-empty domain is `None`.
    fn domain_bounds(&self) -> Option<(f64, f64)> {
        match self.domain {
            Domain::Unset => panic!("continuous scale used before a domain was applied"),
            Domain::Empty => None,
            Domain::Bounds(lower, higher) => Some((lower, higher)),
        }
    }

    /// Maps a domain value into range space.
    ///
    /// Returns `None` for NaN input, for input the transform cannot represent (e.g. a
    /// non-positive value on a log scale), for out-of-domain input under
    /// [`OutOfDomain::Drop`], and for every input when the domain was applied empty.
    ///
    /// Panics if called before both domain and range are applied.
    pub fn scale(&self, x: f64) -> Option<f64> {
        let (r0, r1) = self
            .range
            .expect("continuous scale used before a range was bound");
        let (d0, d1) = self.domain_bounds()?;
        if x.is_nan() {
            return None;
        }
        if matches!(self.out_of_domain, OutOfDomain::Drop) && (x < d0.min(d1) || x > d0.max(d1)) {
            return None;
        }
        let t0 = self.transform.apply(d0);
        let t1 = self.transform.apply(d1);
        let tx = self.transform.apply(x);
        if !tx.is_finite() || !t0.is_finite() || !t1.is_finite() {
            return None;
        }
        let denom = t1 - t0;
        if denom == 0.0 {
            return Some(r0);
        }
        let t = (tx - t0) / denom;
        let out = r0 + t * (r1 - r0);
        if matches!(self.out_of_domain, OutOfDomain::Clamp) {
            let (lo, hi) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
            return Some(out.clamp(lo, hi));
        }
        Some(out)
    }

    /// Generates ticks over the domain, positioned into `[lower, higher]`.
    ///
    /// Linear and power scales walk multiples of a 1-2-5 nice step; when the scale is nice the
    /// walk rounds outward past the authored domain, otherwise it stays inside. Log scales
    /// tick at integer powers of the base within the domain.
    pub fn ticks(&self, lower: f64, higher: f64) -> Vec<Tick> {
        let Some((d0, d1)) = self.domain_bounds() else {
            return Vec::new();
        };
        let bound = self.range(lower, higher);
        let mn = d0.min(d1);
        let mx = d0.max(d1);

        if let Transform::Log { base } = self.transform {
            return log_tick_values(mn, mx, base, self.tick_count)
                .into_iter()
                .filter_map(|v| {
                    let at = bound.scale(v)?;
                    Some(Tick::new(v, format_tick_with_step(v, 0.0), at))
                })
                .collect();
        }

        let (values, step) = if self.nice {
            let step = tick::nice_step((mx - mn) / self.tick_count.max(1) as f64);
            (tick::nice_ticks(mn, mx, self.tick_count), step)
        } else {
            tick::inner_ticks(mn, mx, self.tick_count)
        };
        values
            .into_iter()
            .filter_map(|v| {
                let at = bound.scale(v)?;
                Some(Tick::new(v, format_tick_with_step(v, step), at))
            })
            .collect()
    }

    /// Positions caller-supplied tick values into `[lower, higher]`.
    ///
    /// Values outside the domain are silently dropped; the rest map through the scale exactly
    /// like data values do.
    pub fn ticks_from_values(&self, values: &[f64], lower: f64, higher: f64) -> Vec<Tick> {
        let Some((d0, d1)) = self.domain_bounds() else {
            return Vec::new();
        };
        let bound = self.range(lower, higher);
        let mn = d0.min(d1);
        let mx = d0.max(d1);
        values
            .iter()
            .copied()
            .filter(|v| *v >= mn && *v <= mx)
            .filter_map(|v| {
                let at = bound.scale(v)?;
                Some(Tick::new(v, format_tick_with_step(v, 0.0), at))
            })
            .collect()
    }
}

fn log_tick_values(mn: f64, mx: f64, base: f64, count: usize) -> Vec<f64> {
    if mn <= 0.0 || !mn.is_finite() || !mx.is_finite() || !(base.is_finite() && base > 1.0) {
        return Vec::new();
    }
    let log = |x: f64| x.ln() / base.ln();
    // The log ratio lands just off integers (ln(1000)/ln(10) < 3.0), so nudge before
    // rounding or the boundary powers get lost.
    let min_e = {
        let e = (log(mn) - 1e-9).ceil().clamp(i32::MIN as f64, i32::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
        {
            e as i32
        }
    };
    let max_e = {
        let e = (log(mx) + 1e-9).floor().clamp(i32::MIN as f64, i32::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
        {
            e as i32
        }
    };
    let mut out = Vec::new();
    for e in min_e..=max_e {
        out.push(base.powi(e));
        if count != 0 && out.len() >= count {
            break;
        }
    }
    out
}

/// One category's slot within a band scale's range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// The lower edge of the usable band.
    pub lower: f64,
    /// The higher edge of the usable band.
    pub higher: f64,
}

impl Band {
    /// Returns the band's midpoint.
    pub fn center(&self) -> f64 {
        (self.lower + self.higher) / 2.0
    }

    /// Returns the band's width.
    pub fn width(&self) -> f64 {
        self.higher - self.lower
    }
}

/// A discrete scale partitioning the range into one contiguous slot per category.
///
/// Categories keep their first-seen insertion order; they are never sorted. With zero padding
/// (the default) consecutive bands partition the range exactly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: Option<(f64, f64)>,
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    /// Creates a band scale with an empty domain, no range, and zero padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the category list, deduplicating while preserving first-seen order.
    pub fn with_domain(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.domain = dedup_categories(categories);
        self
    }

    /// Sets inner and outer padding as fractions of the band step, clamped to `[0, 1]`.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.clamp(0.0, 1.0);
        self
    }

    /// Replaces the output range with `[lower, higher]`. A reversed range flips band order
    /// in pixel space while the domain order stays fixed.
    pub fn range(mut self, lower: f64, higher: f64) -> Self {
        self.range = Some((lower, higher));
        self
    }

    /// Returns the categories in insertion order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Returns the range, if bound.
    pub fn range_bounds(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// The step absorbs the padding, so outer padding insets the bands from both range ends
    /// rather than shifting them past the trailing end.
    fn step(&self, r0: f64, r1: f64) -> f64 {
        let n = self.domain.len();
        if n == 0 {
            return 0.0;
        }
        let slots = n as f64 - self.padding_inner + 2.0 * self.padding_outer;
        if slots <= 0.0 {
            return 0.0;
        }
        (r1 - r0) / slots
    }

    fn band_at(&self, index: usize, r0: f64, r1: f64) -> Band {
        let step = self.step(r0, r1);
        let a = r0 + step * (self.padding_outer + index as f64);
        let b = a + step * (1.0 - self.padding_inner);
        Band {
            lower: a.min(b),
            higher: a.max(b),
        }
    }

    fn index_of(&self, category: &str) -> Option<usize> {
        self.domain.iter().position(|c| c == category)
    }

    /// Returns the band for `category`, or `None` for a category absent from the domain.
    ///
    /// Panics if called before a range is bound.
    pub fn scale(&self, category: &str) -> Option<Band> {
        let (r0, r1) = self
            .range
            .expect("band scale used before a range was bound");
        let index = self.index_of(category)?;
        Some(self.band_at(index, r0, r1))
    }

    /// Generates one tick per category at the band center. There is no thinning.
    pub fn ticks(&self, lower: f64, higher: f64) -> Vec<Tick> {
        self.domain
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let band = self.band_at(i, lower, higher);
                Tick::new(i as f64, category.clone(), band.center())
            })
            .collect()
    }
}

/// A discrete scale like [`BandScale`] but with zero band width: each category maps to the
/// center of its slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointScale {
    domain: Vec<String>,
    range: Option<(f64, f64)>,
}

impl PointScale {
    /// Creates a point scale with an empty domain and no range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the category list, deduplicating while preserving first-seen order.
    pub fn with_domain(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.domain = dedup_categories(categories);
        self
    }

    /// Replaces the output range with `[lower, higher]`.
    pub fn range(mut self, lower: f64, higher: f64) -> Self {
        self.range = Some((lower, higher));
        self
    }

    /// Returns the categories in insertion order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Returns the slot center for `category`, or `None` for an unknown category.
    ///
    /// Panics if called before a range is bound.
    pub fn scale(&self, category: &str) -> Option<f64> {
        let (r0, r1) = self
            .range
            .expect("point scale used before a range was bound");
        let index = self.domain.iter().position(|c| c == category)?;
        let n = self.domain.len();
        if n == 0 {
            return None;
        }
        let step = (r1 - r0) / n as f64;
        Some(r0 + step * (index as f64 + 0.5))
    }

    /// Generates one tick per category at the slot center.
    pub fn ticks(&self, lower: f64, higher: f64) -> Vec<Tick> {
        let n = self.domain.len();
        if n == 0 {
            return Vec::new();
        }
        let step = (higher - lower) / n as f64;
        self.domain
            .iter()
            .enumerate()
            .map(|(i, category)| {
                Tick::new(i as f64, category.clone(), lower + step * (i as f64 + 0.5))
            })
            .collect()
    }
}

fn dedup_categories(categories: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for category in categories {
        let category = category.into();
        if !out.contains(&category) {
            out.push(category);
        }
    }
    out
}

/// Infers a `(min, max)` domain from numeric values.
///
/// Non-finite values are ignored. Returns `None` if no finite values are present.
pub fn infer_domain(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_scale_maps_endpoints_to_range_exactly() {
        let s = ContinuousScale::new().with_domain((0.0, 10.0)).range(0.0, 200.0);
        assert_eq!(s.scale(0.0), Some(0.0));
        assert_eq!(s.scale(10.0), Some(200.0));
        assert_eq!(s.scale(5.0), Some(100.0));
    }

    #[test]
    fn reversed_range_flips_direction() {
        let s = ContinuousScale::new().with_domain((0.0, 10.0)).range(100.0, 0.0);
        assert_eq!(s.scale(0.0), Some(100.0));
        assert_eq!(s.scale(10.0), Some(0.0));
        assert_eq!(s.scale(2.5), Some(75.0));
    }

    #[test]
    fn out_of_domain_policies() {
        let base = ContinuousScale::new().with_domain((0.0, 10.0)).range(0.0, 100.0);
        assert_eq!(base.scale(12.0), Some(120.0));
        assert_eq!(
            base.with_out_of_domain(OutOfDomain::Clamp).scale(12.0),
            Some(100.0)
        );
        assert_eq!(base.with_out_of_domain(OutOfDomain::Drop).scale(12.0), None);
        assert_eq!(base.scale(f64::NAN), None);
    }

    #[test]
    #[should_panic(expected = "range was bound")]
    fn scaling_before_range_is_a_caller_bug() {
        let s = ContinuousScale::new().with_domain((0.0, 1.0));
        let _ = s.scale(0.5);
    }

    #[test]
    fn log_scale_maps_endpoints_to_range() {
        let s = ContinuousScale::log(10.0)
            .with_domain((1.0, 100.0))
            .range(0.0, 10.0);
        assert!((s.scale(1.0).unwrap() - 0.0).abs() < 1e-9);
        assert!((s.scale(100.0).unwrap() - 10.0).abs() < 1e-9);
        assert!((s.scale(10.0).unwrap() - 5.0).abs() < 1e-9);
        // Log of a non-positive value cannot be represented; the value is dropped.
        assert_eq!(s.scale(0.0), None);
    }

    #[test]
    fn pow_scale_interpolates_in_transformed_space() {
        let s = ContinuousScale::pow(0.5)
            .with_domain((0.0, 100.0))
            .range(0.0, 10.0);
        assert!((s.scale(25.0).unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn empty_domain_drops_instead_of_panicking() {
        let s = ContinuousScale::new()
            .domain_from([f64::NAN, f64::NAN], false)
            .range(0.0, 10.0);
        assert_eq!(s.scale(5.0), None);
        assert!(s.ticks(0.0, 10.0).is_empty());
        assert!(s.ticks_from_values(&[1.0], 0.0, 10.0).is_empty());
        assert_eq!(s.domain(), None);
    }

    #[test]
    fn log_ticks_keep_boundary_powers() {
        // ln(0.01)/ln(10) and ln(1000)/ln(10) land just off the integers; the walk must not
        // lose the end powers to rounding.
        let s = ContinuousScale::log(10.0)
            .with_domain((0.01, 100.0))
            .range(0.0, 10.0);
        let values: std::vec::Vec<f64> = s.ticks(0.0, 10.0).iter().map(|t| t.value).collect();
        assert_eq!(values.len(), 5);
        assert!((values[0] - 0.01).abs() < 1e-12);
        assert!((values[4] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn log_ticks_are_powers_of_the_base() {
        let s = ContinuousScale::log(10.0)
            .with_domain((1.0, 1000.0))
            .range(0.0, 30.0);
        let ticks = s.ticks(0.0, 30.0);
        let values: std::vec::Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, std::vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn band_scale_partitions_the_range_with_zero_padding() {
        let s = BandScale::new()
            .with_domain(["a", "b", "c", "d"])
            .range(0.0, 100.0);
        for i in 0..3 {
            let here = s.scale(s.domain()[i].as_str()).unwrap();
            let next = s.scale(s.domain()[i + 1].as_str()).unwrap();
            assert!((here.higher - next.lower).abs() < 1e-9, "bands must abut");
        }
        assert_eq!(s.scale("a").unwrap().lower, 0.0);
        assert_eq!(s.scale("d").unwrap().higher, 100.0);
    }

    #[test]
    fn band_order_follows_insertion_not_sorting() {
        let s = BandScale::new()
            .with_domain(["z", "a", "z", "m"])
            .range(0.0, 30.0);
        assert_eq!(s.domain(), ["z", "a", "m"]);
        assert!(s.scale("z").unwrap().lower < s.scale("a").unwrap().lower);
        assert_eq!(s.scale("q"), None);
    }

    #[test]
    fn band_padding_insets_each_slot() {
        let s = BandScale::new()
            .with_domain(["a", "b"])
            .with_padding(0.2, 0.0)
            .range(0.0, 100.0);
        let a = s.scale("a").unwrap();
        let b = s.scale("b").unwrap();
        // With no outer padding the first and last bands stay flush with the range.
        assert!((a.lower - 0.0).abs() < 1e-9);
        assert!((b.higher - 100.0).abs() < 1e-9);
        let step = 100.0 / 1.8;
        assert!((a.width() - step * 0.8).abs() < 1e-9);
        assert!((b.lower - a.higher - step * 0.2).abs() < 1e-9);
    }

    #[test]
    fn outer_padding_insets_both_range_ends() {
        let s = BandScale::new()
            .with_domain(["a", "b"])
            .with_padding(0.0, 0.5)
            .range(0.0, 100.0);
        let a = s.scale("a").unwrap();
        let b = s.scale("b").unwrap();
        assert!(a.lower > 0.0, "leading end must be inset");
        assert!(b.higher < 100.0, "trailing end must be inset");
        // The insets are symmetric and the bands abut in between.
        assert!((a.lower - (100.0 - b.higher)).abs() < 1e-9);
        assert!((a.higher - b.lower).abs() < 1e-9);
    }

    #[test]
    fn point_scale_yields_slot_centers() {
        let s = PointScale::new()
            .with_domain(["a", "b", "c", "d"])
            .range(0.0, 100.0);
        assert_eq!(s.scale("a"), Some(12.5));
        assert_eq!(s.scale("d"), Some(87.5));
        assert_eq!(s.scale("missing"), None);
    }

    #[test]
    fn infer_domain_skips_non_finite_values() {
        let d = infer_domain([1.0, f64::NAN, -3.0, f64::INFINITY, 2.0]);
        assert_eq!(d, Some((-3.0, 2.0)));
        assert_eq!(infer_domain([f64::NAN]), None);
    }
}
