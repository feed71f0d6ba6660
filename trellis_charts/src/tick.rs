// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick values and "nice" step selection.
//!
//! Continuous scales pick a step from the 1-2-5 sequence that best approximates
//! `domain span / target count`, then walk multiples of that step. Discrete scales tick at
//! every category with no thinning.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// One labelled axis reference value, resolved into range (pixel) space.
///
/// Ticks are produced by scales and consumed by [`Axis`](crate::Axis) and the renderer; they
/// are never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// The tick value in domain units (category insertion index for discrete scales).
    pub value: f64,
    /// The label text for this tick.
    pub label: String,
    /// The resolved position within the queried range.
    pub range_location: f64,
}

impl Tick {
    /// Creates a new tick.
    pub fn new(value: f64, label: impl Into<String>, range_location: f64) -> Self {
        Self {
            value,
            label: label.into(),
            range_location,
        }
    }
}

/// A numeric type that tick generation can walk.
///
/// The nice-step computation happens once in `f64`; domain types (plain floats, integer
/// counters, date-like stamps) only provide the conversions instead of duplicating the
/// stepping logic per type.
pub trait TickValue: Copy {
    /// Converts this value into `f64` for step arithmetic.
    fn to_f64(self) -> f64;
    /// Converts a stepped `f64` back into this type.
    fn from_f64(value: f64) -> Self;
}

impl TickValue for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl TickValue for i64 {
    fn to_f64(self) -> f64 {
        #[allow(
            clippy::cast_precision_loss,
            reason = "tick values are far below 2^53 in practice"
        )]
        {
            self as f64
        }
    }

    fn from_f64(value: f64) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "stepped values are rounded before conversion"
        )]
        {
            value.round() as i64
        }
    }
}

/// Returns "nice" tick values covering `[min, max]`, rounded outward to step multiples.
///
/// The step is chosen from the 1-2-5 sequence closest to `span / count`. The first and last
/// tick may lie outside the authored bounds; that is what makes the sequence look round.
pub fn nice_ticks<T: TickValue>(min: T, max: T, count: usize) -> Vec<T> {
    nice_ticks_f64(min.to_f64(), max.to_f64(), count)
        .into_iter()
        .map(T::from_f64)
        .collect()
}

fn nice_ticks_f64(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count.max(1) as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;
    step_walk(start, stop, step)
}

/// Returns tick values strictly inside `[min, max]`: every multiple of the nice step that
/// falls within the bounds, without the outward rounding of [`nice_ticks`].
pub(crate) fn inner_ticks(mut min: f64, mut max: f64, count: usize) -> (Vec<f64>, f64) {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return (Vec::new(), 0.0);
    }
    if min == max {
        return (alloc::vec![min], 0.0);
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count.max(1) as f64);
    if step == 0.0 {
        return (alloc::vec![min, max], 0.0);
    }

    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step;
    (step_walk(start, stop, step), step)
}

fn step_walk(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        return Vec::new();
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Rounds a raw step to the nearest value in the 1-2-5 sequence.
pub(crate) fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}
