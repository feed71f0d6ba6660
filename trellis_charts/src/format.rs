// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting helpers.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using a decimal count derived from the tick step.
///
/// Ticks produced with a step of `0.5` format as `0.0`, `0.5`, `1.0`, … so labels along one
/// axis stay visually uniform. A non-positive or non-finite `step` falls back to the shortest
/// `f64` representation of the value.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return alloc::format!("{value}");
    }
    if !(step.is_finite() && step > 0.0) {
        return alloc::format!("{value}");
    }

    let frac_digits = -step.log10().floor();
    let decimals = if frac_digits > 0.0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "positive and capped at 12 digits"
        )]
        {
            (frac_digits.min(12.0)) as usize
        }
    } else {
        0
    };

    let out = alloc::format!("{value:.decimals$}");
    // Avoid a stray "-0" label when a negative value rounds to zero.
    if out.starts_with('-') && out[1..].bytes().all(|b| b == b'0' || b == b'.') {
        out[1..].into()
    } else {
        out
    }
}
