//! Axis range state and automatic "nice" range selection.
//!
//! An [`AxisRange`] holds the user-unit endpoints of one axis together with
//! its optional major tick set ([`MajorTicks`]). [`AxisRange::auto_range`]
//! revises that state from the observed data extrema, choosing numerically
//! pleasing endpoints and a tick interval according to the axis kind:
//!
//! 1. Theta axes get a fixed range set by the polar [`ThetaLayout`].
//! 2. Logarithmic axes snap to whole powers of the base.
//! 3. Linear axes without a tick set take the data range as is.
//! 4. Linear axes with a tick set snap to multiples of a nice number
//!    `K * 10^p`, `K` drawn from [`util::NICE_MULTIPLIERS`].
//!
//! A descending axis stays descending.
//!
//! # Examples
//!
//! ```rust
//! use figscale::{AxisMeta, AxisRange, LabelFormat, MajorTicks};
//!
//! let mut range = AxisRange::new(0.0, 1.0).with_major_ticks(MajorTicks::new(0.2, LabelFormat::Fixed1));
//! let changed = range.auto_range(&AxisMeta::linear(), 0.0, 47.0);
//!
//! assert!(changed);
//! assert_eq!((range.start(), range.end()), (0.0, 50.0));
//! let ticks = range.major_ticks().unwrap();
//! assert_eq!(ticks.interval, 10.0);
//! assert_eq!(ticks.format, LabelFormat::Integer);
//!
//! // Nothing left to do on the second pass.
//! assert!(!range.auto_range(&AxisMeta::linear(), 0.0, 47.0));
//! ```

mod linear;
mod log;
mod theta;
pub mod tick_iter;
pub mod util;

pub use tick_iter::{Tick, TickIter};

use std::fmt;

use util::sorted_pair;

/// Base of a logarithmic axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogBase {
    Two,
    #[default]
    Ten,
}

impl LogBase {
    pub const fn value(self) -> f64 {
        match self {
            Self::Two => 2.0,
            Self::Ten => 10.0,
        }
    }
}

/// Quadrant layout of the polar plot that owns a theta axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThetaLayout {
    /// Full circle, labelled every 30 degrees.
    #[default]
    FullCircle,
    /// Full circle split into all four quadrants, labelled every 45 degrees.
    AllQuadrants,
    FirstQuadrant,
    SecondQuadrant,
    ThirdQuadrant,
    FourthQuadrant,
}

/// What an axis measures, as far as range selection is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisKind {
    Linear,
    Log(LogBase),
    Theta(ThetaLayout),
}

/// Axis metadata consulted by [`AxisRange::auto_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisMeta {
    pub kind: AxisKind,
    /// The radial axis of a polar plot; its range never goes below zero.
    pub radial: bool,
    /// Automatic range adjustment is enabled for this axis.
    pub auto_range: bool,
}

impl AxisMeta {
    pub const fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            radial: false,
            auto_range: true,
        }
    }

    pub const fn linear() -> Self {
        Self::new(AxisKind::Linear)
    }

    pub const fn log(base: LogBase) -> Self {
        Self::new(AxisKind::Log(base))
    }

    pub const fn theta(layout: ThetaLayout) -> Self {
        Self::new(AxisKind::Theta(layout))
    }

    /// Marks the axis as the non-negative radial axis of a polar plot.
    pub const fn radial(mut self) -> Self {
        self.radial = true;
        self
    }

    pub const fn with_auto_range(mut self, enabled: bool) -> Self {
        self.auto_range = enabled;
        self
    }
}

/// How tick labels are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelFormat {
    #[default]
    Integer,
    Fixed1,
    Fixed2,
    Fixed3,
    Exponential,
}

impl LabelFormat {
    /// Formats a tick value.
    ///
    /// ```rust
    /// use figscale::LabelFormat;
    ///
    /// assert_eq!(LabelFormat::Integer.format(42.0), "42");
    /// assert_eq!(LabelFormat::Fixed3.format(0.125), "0.125");
    /// assert_eq!(LabelFormat::Exponential.format(1500.0), "1.5e3");
    /// ```
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Integer => format!("{value:.0}"),
            Self::Fixed1 => format!("{value:.1}"),
            Self::Fixed2 => format!("{value:.2}"),
            Self::Fixed3 => format!("{value:.3}"),
            Self::Exponential => format!("{value:e}"),
        }
    }

    /// `Fixed3` if any value has a fractional part, else `Integer`.
    pub(crate) fn for_values(values: &[f64]) -> Self {
        if values.iter().any(|v| v.fract() != 0.0) {
            Self::Fixed3
        } else {
            Self::Integer
        }
    }
}

/// Per-decade tick multipliers `1..=9` enabled on a logarithmic axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecadeTicks(u16);

impl DecadeTicks {
    pub const NONE: Self = Self(0);
    /// One tick per decade, at the power of the base itself.
    pub const ONE: Self = Self(1 << 1);
    pub const ALL: Self = Self(0b11_1111_1110);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether multiplier `m` (1..=9) is enabled.
    pub const fn contains(self, m: u8) -> bool {
        m >= 1 && m <= 9 && self.0 & (1 << m) != 0
    }

    /// Enables multiplier `m`; values outside 1..=9 are ignored.
    pub const fn with(self, m: u8) -> Self {
        if m >= 1 && m <= 9 {
            Self(self.0 | (1 << m))
        } else {
            self
        }
    }

    /// Enabled multipliers in increasing order.
    pub fn multipliers(self) -> impl Iterator<Item = u8> {
        (1..=9u8).filter(move |&m| self.contains(m))
    }
}

impl fmt::Display for DecadeTicks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in self.multipliers() {
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

/// The major tick set of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MajorTicks {
    /// Distance between ticks; on a logarithmic axis the ratio between them.
    pub interval: f64,
    pub format: LabelFormat,
    pub decade_ticks: DecadeTicks,
}

impl MajorTicks {
    pub const fn new(interval: f64, format: LabelFormat) -> Self {
        Self {
            interval,
            format,
            decade_ticks: DecadeTicks::NONE,
        }
    }

    pub const fn with_decade_ticks(mut self, decade_ticks: DecadeTicks) -> Self {
        self.decade_ticks = decade_ticks;
        self
    }
}

/// A range proposed by one of the selection cases, before direction is restored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RangeFit {
    pub start: f64,
    pub end: f64,
    pub interval: f64,
    pub format: LabelFormat,
}

impl RangeFit {
    pub(crate) fn new(start: f64, end: f64, interval: f64) -> Self {
        Self {
            start,
            end,
            interval,
            format: LabelFormat::for_values(&[start, end, interval]),
        }
    }
}

/// The range of one axis, in user units, plus its major tick set.
///
/// `start > end` is a legal, descending axis. The owning axis is the only
/// writer; [`AxisRange::auto_range`] reads and conditionally writes it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRange {
    start: f64,
    end: f64,
    ticks: Option<MajorTicks>,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(0.0, 100.0).with_major_ticks(MajorTicks::new(20.0, LabelFormat::Integer))
    }
}

impl AxisRange {
    /// A range without a major tick set.
    pub const fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            ticks: None,
        }
    }

    pub const fn with_major_ticks(mut self, ticks: MajorTicks) -> Self {
        self.ticks = Some(ticks);
        self
    }

    pub const fn start(&self) -> f64 {
        self.start
    }

    pub const fn end(&self) -> f64 {
        self.end
    }

    pub fn is_descending(&self) -> bool {
        self.start > self.end
    }

    pub const fn major_ticks(&self) -> Option<&MajorTicks> {
        self.ticks.as_ref()
    }

    /// Manual edit of the endpoints.
    pub fn set_range(&mut self, start: f64, end: f64) {
        self.start = start;
        self.end = end;
    }

    /// Replaces (or removes) the major tick set.
    pub fn set_major_ticks(&mut self, ticks: Option<MajorTicks>) {
        self.ticks = ticks;
    }

    /// Revises the range from the observed data extrema `min`, `max`.
    ///
    /// Returns `true` if the endpoints, tick interval, label format or
    /// per-decade ticks changed. Does nothing and returns `false` when
    /// automatic ranging is disabled in `meta`, when either extremum is not
    /// finite, or when the data cannot be shown on the axis at all (no
    /// positive value on a logarithmic axis, nothing non-negative on a
    /// radial one). The extrema may be given in either order.
    pub fn auto_range(&mut self, meta: &AxisMeta, min: f64, max: f64) -> bool {
        if !meta.auto_range {
            tracing::trace!("auto range disabled");
            return false;
        }
        if !min.is_finite() || !max.is_finite() {
            tracing::trace!(min, max, "skipping auto range for non-finite extrema");
            return false;
        }
        let (min, max) = sorted_pair(min, max);
        let has_ticks = self.ticks.is_some();

        let fit = match meta.kind {
            AxisKind::Theta(layout) => Some(theta::fit(layout)),
            AxisKind::Log(base) => log::fit(base, min, max, has_ticks),
            AxisKind::Linear => linear::fit(min, max, meta.radial, has_ticks),
        };
        let Some(fit) = fit else {
            tracing::trace!(kind = ?meta.kind, min, max, "data cannot be shown on this axis");
            return false;
        };
        self.apply(fit, matches!(meta.kind, AxisKind::Log(_)))
    }

    fn apply(&mut self, fit: RangeFit, log_axis: bool) -> bool {
        let (start, end) = if self.is_descending() {
            (fit.end, fit.start)
        } else {
            (fit.start, fit.end)
        };

        let mut changed = false;
        if self.start != start || self.end != end {
            tracing::debug!(
                old_start = self.start,
                old_end = self.end,
                start,
                end,
                "auto range adjusted axis"
            );
            self.start = start;
            self.end = end;
            changed = true;
        }

        if let Some(ticks) = self.ticks.as_mut() {
            if ticks.interval != fit.interval {
                tracing::debug!(old = ticks.interval, new = fit.interval, "tick interval");
                ticks.interval = fit.interval;
                changed = true;
            }
            if ticks.format != fit.format {
                ticks.format = fit.format;
                changed = true;
            }
            if log_axis && ticks.decade_ticks.is_empty() {
                ticks.decade_ticks = DecadeTicks::ONE;
                changed = true;
            }
        }
        changed
    }
}
