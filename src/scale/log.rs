//! Range selection for logarithmic axes.
//!
//! The range always runs between whole powers of the base, `B^n1 .. B^n2`.
//! With a major tick set the span `n2 - n1` is split into 2 to 5 equal
//! divisions, widening the span a power at a time until it divides evenly.

use super::util::{ceil_log, floor_log, int_pow};
use super::{LabelFormat, LogBase, RangeFit};

/// Powers of the base shown below the maximum when the data has no positive minimum.
const POWERS_BELOW_MAX: i32 = 3;

/// Most powers of the base per division, unless the span is very wide.
const MAX_POWERS_PER_DIVISION: i32 = 5;

/// Division counts tried, largest first.
const DIVISIONS: [i32; 4] = [5, 4, 3, 2];

/// Bound on how many times the span is widened looking for a divisor.
const MAX_WIDENINGS: usize = 8;

/// Picks a range for sorted, finite extrema `min <= max`.
///
/// `None` when no data is positive.
pub(super) fn fit(base: LogBase, min: f64, max: f64, has_ticks: bool) -> Option<RangeFit> {
    if max <= 0.0 {
        return None;
    }
    let b = base.value();
    // powers whose value is a normal, finite f64
    let lowest = ceil_log(f64::MIN_POSITIVE, b)?;
    let highest = floor_log(f64::MAX, b)?;
    let mut n2 = ceil_log(max, b)?.clamp(lowest + 1, highest);
    let mut n1 = if min > 0.0 {
        floor_log(min, b)?.max(lowest)
    } else {
        (n2 - POWERS_BELOW_MAX).max(lowest)
    };
    if n1 >= n2 {
        if n1 < highest {
            n2 = n1 + 1;
        } else {
            n1 = highest - 1;
        }
    }

    let mut powers_per_division = n2 - n1;
    if has_ticks {
        let mut widenings = 0;
        loop {
            if let Some(q) = divide(n2 - n1) {
                powers_per_division = q;
                break;
            }
            if widenings == MAX_WIDENINGS || (n1 == lowest && n2 == highest) {
                tracing::trace!(n1, n2, "no even division of log span; using one division");
                powers_per_division = n2 - n1;
                break;
            }
            widenings += 1;
            let low = widen_low(min, max, n1, n2, b);
            if (low && n1 > lowest) || n2 == highest {
                n1 -= 1;
            } else {
                n2 += 1;
            }
        }
    }

    let start = int_pow(b, n1);
    let end = int_pow(b, n2);
    let format = if start < 1.0 {
        LabelFormat::Fixed3
    } else {
        LabelFormat::Integer
    };
    Some(RangeFit {
        start,
        end,
        interval: int_pow(b, powers_per_division),
        format,
    })
}

/// Powers per division for the largest division count that splits `span`
/// evenly.
fn divide(span: i32) -> Option<i32> {
    let ceiling = MAX_POWERS_PER_DIVISION.max((span + 4) / 5);
    DIVISIONS
        .iter()
        .find(|&&x| span % x == 0 && span / x <= ceiling)
        .map(|&x| span / x)
}

/// Whether widening should lower `n1` rather than raise `n2`: the side whose
/// new boundary lands closer to its extremum. Ties raise `n2`.
fn widen_low(min: f64, max: f64, n1: i32, n2: i32, b: f64) -> bool {
    if min <= 0.0 {
        return true;
    }
    let log_b = b.ln();
    let low_gap = min.ln() / log_b - f64::from(n1);
    let high_gap = f64::from(n2) - max.ln() / log_b;
    low_gap < high_gap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit10(min: f64, max: f64) -> RangeFit {
        fit(LogBase::Ten, min, max, true).unwrap()
    }

    #[test]
    fn snaps_to_whole_decades() {
        let r = fit10(2.0, 300.0);
        assert_eq!((r.start, r.end, r.interval), (1.0, 1000.0, 10.0));
        assert_eq!(r.format, LabelFormat::Integer);
    }

    #[test]
    fn fractional_start_uses_fixed_labels() {
        let r = fit10(0.02, 300.0);
        assert_eq!((r.start, r.end, r.interval), (0.01, 1000.0, 10.0));
        assert_eq!(r.format, LabelFormat::Fixed3);
    }

    #[test]
    fn non_positive_minimum_shows_three_decades() {
        let r = fit10(-5.0, 300.0);
        assert_eq!((r.start, r.end), (1.0, 1000.0));
        let r = fit10(0.0, 50.0);
        assert_eq!((r.start, r.end), (0.1, 100.0));
    }

    #[test]
    fn nothing_positive_is_a_no_op() {
        assert!(fit(LogBase::Ten, -5.0, 0.0, true).is_none());
        assert!(fit(LogBase::Two, -5.0, -1.0, false).is_none());
    }

    #[test]
    fn exact_power_widens_toward_closer_boundary() {
        // 10..10 is 1..2, one decade, widened down since log10(10) sits on n1
        let r = fit10(10.0, 10.0);
        assert_eq!((r.start, r.end, r.interval), (1.0, 100.0, 10.0));
    }

    #[test]
    fn prime_span_widens_to_divisible() {
        // 3 .. 5e6 is 0..7; the top gap (0.30) beats the bottom one (0.48)
        let r = fit10(3.0, 5.0e6);
        assert_eq!((r.start, r.end, r.interval), (1.0, 1.0e8, 100.0));
    }

    #[test]
    fn without_ticks_span_is_left_alone() {
        let r = fit(LogBase::Ten, 3.0, 5.0e6, false).unwrap();
        assert_eq!((r.start, r.end), (1.0, 1.0e7));
    }

    #[test]
    fn base_two() {
        let r = fit(LogBase::Two, 3.0, 20.0, true).unwrap();
        assert_eq!((r.start, r.end, r.interval), (2.0, 32.0, 2.0));
        assert_eq!(r.format, LabelFormat::Integer);
    }

    #[test]
    fn wide_span_raises_the_per_division_ceiling() {
        let r = fit10(1e-20, 1e20);
        assert!((r.start / 1e-20 - 1.0).abs() < 1e-12);
        assert!((r.end / 1e20 - 1.0).abs() < 1e-12);
        assert_eq!(r.interval, 1e8);
    }

    #[test]
    fn powers_stay_within_normal_floats() {
        let r = fit(LogBase::Two, 1e-310, 1.0, true).unwrap();
        assert!(r.start.is_normal() && r.start > 0.0);
        assert!(r.start < r.end);

        let r = fit10(1e-320, 1e-315);
        assert!(r.start.is_normal() && r.end.is_normal());
        assert!(r.start < r.end);

        let r = fit10(1.0, f64::MAX);
        assert!(r.end.is_finite());
        assert!(r.interval.is_finite() && r.interval > 1.0);
    }

    #[test]
    fn divisor_search() {
        assert_eq!(divide(10), Some(2));
        assert_eq!(divide(6), Some(2));
        assert_eq!(divide(7), None);
        assert_eq!(divide(1), None);
        assert_eq!(divide(30), Some(6));
    }
}
