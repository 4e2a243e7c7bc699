//! Tick positions along an axis range.
//!
//! Major ticks (level 0) fall every `interval` from the low end of the range
//! on linear and theta axes, and every factor of `interval` on logarithmic
//! ones. Logarithmic base-10 axes add per-decade ticks (level 1) at the
//! multipliers enabled in [`DecadeTicks`](super::DecadeTicks).

use super::util::{self, int_pow, sorted_pair};
use super::{AxisKind, AxisRange, LogBase, MajorTicks};

/// Upper bound on ticks produced for one axis.
const MAX_TICKS: usize = 1000;

/// A tick value and its level: 0 for major ticks, 1 for per-decade ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    pub value: f64,
    pub level: u8,
}

/// Iterator over the ticks of an axis range, in increasing value order.
pub struct TickIter {
    inner: Box<dyn Iterator<Item = Tick> + 'static>,
}

impl TickIter {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Tick> + 'static,
    {
        Self {
            inner: Box::new(iter),
        }
    }

    /// Wraps a precomputed list of ticks.
    ///
    /// ```
    /// use figscale::scale::{Tick, TickIter};
    ///
    /// let ticks = vec![
    ///     Tick { value: 0.0, level: 0 },
    ///     Tick { value: 50.0, level: 0 },
    /// ];
    /// assert_eq!(TickIter::from_vec(ticks).count(), 2);
    /// ```
    pub fn from_vec(vec: Vec<Tick>) -> Self {
        Self::new(vec.into_iter())
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl Iterator for TickIter {
    type Item = Tick;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl AxisRange {
    /// Tick positions for this range as an axis of kind `kind`.
    ///
    /// Empty without a major tick set, or when the interval cannot step
    /// through the range (non-positive, non-finite, or a log ratio of at
    /// most 1 or a non-positive log range).
    ///
    /// ```
    /// use figscale::{AxisKind, AxisRange, LabelFormat, MajorTicks};
    ///
    /// let range = AxisRange::new(50.0, 0.0).with_major_ticks(MajorTicks::new(10.0, LabelFormat::Integer));
    /// let values: Vec<f64> = range.ticks(AxisKind::Linear).map(|t| t.value).collect();
    /// assert_eq!(values, [0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
    /// ```
    pub fn ticks(&self, kind: AxisKind) -> TickIter {
        let Some(ticks) = self.major_ticks() else {
            return TickIter::empty();
        };
        let (lo, hi) = sorted_pair(self.start(), self.end());
        match kind {
            AxisKind::Linear | AxisKind::Theta(_) => match LinearTicks::new(lo, hi, ticks.interval) {
                Some(iter) => TickIter::new(iter),
                None => TickIter::empty(),
            },
            AxisKind::Log(base) => TickIter::from_vec(log_ticks(lo, hi, ticks, base)),
        }
    }
}

struct LinearTicks {
    start: f64,
    step: f64,
    index: usize,
    count: usize,
}

impl LinearTicks {
    fn new(lo: f64, hi: f64, step: f64) -> Option<Self> {
        if !(step > 0.0) || !step.is_finite() || !lo.is_finite() || !hi.is_finite() {
            return None;
        }
        let span = hi - lo;
        let steps = (span / step + util::epsilon_from(span / step).max(1e-9)).floor();
        // `as` saturates; the cap bounds it anyway
        let count = (steps as usize).saturating_add(1).min(MAX_TICKS);
        Some(Self {
            start: lo,
            step,
            index: 0,
            count,
        })
    }
}

impl Iterator for LinearTicks {
    type Item = Tick;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        // from the index, so rounding does not accumulate
        let value = self.start + self.step * self.index as f64;
        self.index += 1;
        Some(Tick { value, level: 0 })
    }
}

fn log_ticks(lo: f64, hi: f64, ticks: &MajorTicks, base: LogBase) -> Vec<Tick> {
    let ratio = ticks.interval;
    if !(lo > 0.0) || !hi.is_finite() || !(ratio > 1.0) || !ratio.is_finite() {
        return Vec::new();
    }
    let tol = util::epsilon_from(hi);

    let mut out = Vec::new();
    let mut k = 0;
    while out.len() < MAX_TICKS {
        let value = lo * int_pow(ratio, k);
        if value > hi + tol {
            break;
        }
        out.push(Tick { value, level: 0 });
        k += 1;
    }

    if base == LogBase::Ten && !ticks.decade_ticks.is_empty() {
        let majors: Vec<f64> = out.iter().map(|t| t.value).collect();
        let is_major = |v: f64| majors.iter().any(|&m| (m - v).abs() <= util::epsilon_from(m));
        let (Some(first), Some(last)) = (util::floor_log(lo, 10.0), util::ceil_log(hi, 10.0)) else {
            return out;
        };
        'decades: for e in first..=last {
            let decade = int_pow(10.0, e);
            for m in ticks.decade_ticks.multipliers() {
                if out.len() >= MAX_TICKS {
                    break 'decades;
                }
                let value = f64::from(m) * decade;
                let inside = value >= lo - tol && value <= hi + tol;
                if inside && !is_major(value) {
                    out.push(Tick { value, level: 1 });
                }
            }
        }
        out.sort_by(|a, b| a.value.total_cmp(&b.value));
    }
    out
}
