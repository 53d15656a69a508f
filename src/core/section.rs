//! Tick ("section") derivation for magnitude-based axes.

use crate::error::{ChartError, ChartResult};

/// Number of intervals the sectioning step aims for.
pub const SECTION_TARGET_INTERVALS: usize = 5;

const MAX_SECTION_TICKS: f64 = 10_000.0;

/// Produces ascending, human-friendly tick boundaries covering `samples`.
///
/// Steps are 1, 2, 5 or 10 times a power of ten. The first tick is `<=` the
/// smallest finite sample and the last tick is `>=` the largest one. A
/// single-valued input `v` is widened to `{v, 2v}` (`{0, 1}` for zero)
/// before stepping, so the result always has at least two ticks.
pub fn section(samples: &[f64]) -> ChartResult<Vec<f64>> {
    let mut finite = samples.iter().copied().filter(|value| value.is_finite());
    let Some(first) = finite.next() else {
        return Err(ChartError::InvalidData(
            "section samples must contain a finite value".to_owned(),
        ));
    };
    let (mut min, mut max) = finite.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });

    if min == max {
        (min, max) = widen_single_value(min);
    }

    let step = nice_step((max - min) / SECTION_TARGET_INTERVALS as f64);
    if step == 0.0 {
        return Ok(vec![min, max]);
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;
    let intervals = ((stop - start) / step).round();
    if !intervals.is_finite() || intervals < 1.0 {
        return Ok(vec![min, max]);
    }
    let intervals = intervals.min(MAX_SECTION_TICKS) as usize;

    let decimals = step_decimals(step);
    Ok((0..=intervals)
        .map(|i| round_to_decimals(start + step * i as f64, decimals))
        .collect())
}

fn widen_single_value(value: f64) -> (f64, f64) {
    if value == 0.0 {
        (0.0, 1.0)
    } else {
        let doubled = value * 2.0;
        (value.min(doubled), value.max(doubled))
    }
}

fn nice_step(step: f64) -> f64 {
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

fn step_decimals(step: f64) -> i32 {
    (-step.log10().floor()).max(0.0) as i32
}

// Strips accumulation noise such as 0.30000000000000004.
fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    if decimals == 0 {
        return value.round();
    }
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
