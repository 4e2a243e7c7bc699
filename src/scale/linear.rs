//! Range selection for linear axes.
//!
//! Without a major tick set the data range is used as is. With one, the
//! range is snapped to nice multiples according to how the two extrema
//! relate: equal, same sign, roughly symmetric about zero, lopsided about
//! zero, or none of these.

use super::RangeFit;
use super::util::{floor_log, int_pow, nice_at_or_above, nice_at_or_below, nice_cover};

/// Most divisions used when one side of the range is pinned at zero.
const MAX_DIVISIONS: u32 = 5;

/// Most divisions per side of a range forced symmetric about zero.
const MAX_SYMMETRIC_DIVISIONS: u32 = 2;

/// Extrema whose magnitudes are within this ratio are made symmetric.
const SYMMETRIC_RATIO: (f64, f64) = (0.8, 1.25);

/// Extrema whose magnitudes differ by at least this factor pin one side at zero.
const LOPSIDED_RATIO: f64 = 10.0;

/// Extrema above this magnitude get a degenerate interval scaled to their size.
const DEGENERATE_SCALE_LIMIT: f64 = 1000.0;

/// Picks a range for sorted, finite extrema `min <= max`.
pub(super) fn fit(min: f64, max: f64, radial: bool, has_ticks: bool) -> Option<RangeFit> {
    let (min, max) = if radial {
        if max <= 0.0 {
            return None;
        }
        (min.max(0.0), max)
    } else {
        (min, max)
    };

    if !has_ticks {
        let end = if max == min { min + 1.0 } else { max };
        return Some(RangeFit::new(min, end, end - min));
    }

    if min == max {
        return degenerate(min);
    }

    let same_sign = (min >= 0.0 && max >= 0.0) || (min <= 0.0 && max <= 0.0);
    let small = min.abs().min(max.abs());
    let large = min.abs().max(max.abs());

    if same_sign {
        if small == 0.0 || large / small >= LOPSIDED_RATIO {
            pinned_at_zero(min, max)
        } else {
            general(min, max)
        }
    } else {
        let ratio = max.abs() / min.abs();
        if (SYMMETRIC_RATIO.0..=SYMMETRIC_RATIO.1).contains(&ratio) {
            symmetric(large)
        } else if ratio >= LOPSIDED_RATIO || ratio <= 1.0 / LOPSIDED_RATIO {
            lopsided(min, max)
        } else {
            general(min, max)
        }
    }
}

/// `min == max`: one power-of-ten interval either side of the rounded value.
fn degenerate(value: f64) -> Option<RangeFit> {
    let magnitude = value.abs();
    let p = if magnitude < DEGENERATE_SCALE_LIMIT {
        0
    } else {
        floor_log(magnitude, 10.0)? - 2
    };
    let interval = int_pow(10.0, p);
    let center = value.round();
    Some(RangeFit::new(center - interval, center + interval, interval))
}

/// Same sign and far apart (or touching zero): start the range at zero.
fn pinned_at_zero(min: f64, max: f64) -> Option<RangeFit> {
    if max > 0.0 {
        let step = nice_cover(max, MAX_DIVISIONS)?;
        Some(RangeFit::new(0.0, step.extent(), step.interval()))
    } else {
        let step = nice_cover(-min, MAX_DIVISIONS)?;
        Some(RangeFit::new(-step.extent(), 0.0, step.interval()))
    }
}

/// Opposite signs of similar magnitude: symmetric about zero.
fn symmetric(large: f64) -> Option<RangeFit> {
    let step = nice_cover(large, MAX_SYMMETRIC_DIVISIONS)?;
    let extent = step.extent();
    Some(RangeFit::new(-extent, extent, step.interval()))
}

/// Opposite signs, one side dominant: cover the large side and give the
/// small side a single division past zero.
fn lopsided(min: f64, max: f64) -> Option<RangeFit> {
    if max.abs() >= min.abs() {
        let step = nice_cover(max, MAX_DIVISIONS)?;
        let interval = step.interval();
        Some(RangeFit::new(-interval, step.extent(), interval))
    } else {
        let step = nice_cover(-min, MAX_DIVISIONS)?;
        let interval = step.interval();
        Some(RangeFit::new(-step.extent(), interval, interval))
    }
}

/// Start at a nice number at or below `min`, then cover the rest.
fn general(min: f64, max: f64) -> Option<RangeFit> {
    let start = if min > 0.0 {
        nice_at_or_below(min)?
    } else {
        -nice_at_or_above(-min)?
    };
    let step = nice_cover(max - start, MAX_DIVISIONS)?;
    Some(RangeFit::new(start, start + step.extent(), step.interval()))
}
