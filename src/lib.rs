//! Figure coordinate engine
//!
//! `figscale` places figure content on a page. It converts coordinates
//! between a viewport's own coordinate system and physical space measured in
//! mils, and it picks numerically pleasing axis ranges and tick intervals
//! from the extent of the plotted data.
//!
//! # Core Concepts
//!
//! ## Viewports and Transforms
//!
//! A [`Viewport`] describes a physical rectangle and the coordinate system
//! laid over it: none, Cartesian, semi-log, log-log, polar, or polar with a
//! logarithmic radius. A [`ViewportTransform`] validates one and then maps:
//! - [`Measurement`] pairs (inches, centimeters, millimeters, points,
//!   percent or user units) to a [`PhysicalPoint`]
//! - [`UserPoint`]s to [`PhysicalPoint`]s, and back
//!
//! Points with no geometric meaning map to `None`; only construction fails.
//!
//! ## Axis Ranges
//!
//! An [`AxisRange`] holds the endpoints and major tick set of one axis.
//! [`AxisRange::auto_range`] revises it from the data extrema according to
//! the axis kind in [`AxisMeta`]: fixed ranges for theta axes, whole powers
//! of the base for logarithmic axes, and multiples of nice numbers for
//! linear ones.
//!
//! # Examples
//!
//! ## Auto Range, Then Transform
//!
//! ```rust
//! use figscale::{
//!     AxisMeta, AxisRange, AxisSpan, LabelFormat, MajorTicks, UserPoint, Viewport,
//!     ViewportTransform,
//! };
//!
//! let ticks = MajorTicks::new(1.0, LabelFormat::Integer);
//! let mut x = AxisRange::new(0.0, 1.0).with_major_ticks(ticks);
//! let mut y = AxisRange::new(0.0, 1.0).with_major_ticks(ticks);
//! x.auto_range(&AxisMeta::linear(), 0.0, 47.0);
//! y.auto_range(&AxisMeta::linear(), -10.0, 11.0);
//! assert_eq!((x.start(), x.end()), (0.0, 50.0));
//! assert_eq!((y.start(), y.end()), (-15.0, 15.0));
//!
//! let vp = Viewport::from_axis_ranges(
//!     5000.0,
//!     3000.0,
//!     AxisSpan::linear(x.start(), x.end()),
//!     AxisSpan::linear(y.start(), y.end()),
//! )
//! .unwrap();
//! let transform = ViewportTransform::new(vp).unwrap();
//!
//! let p = transform.user_to_physical(UserPoint::new(25.0, 0.0)).unwrap();
//! assert_eq!((p.x, p.y), (2500.0, 1500.0));
//! ```
//!
//! ## Ticks
//!
//! ```rust
//! use figscale::{AxisKind, AxisRange, LabelFormat, MajorTicks};
//!
//! let range = AxisRange::new(0.0, 50.0).with_major_ticks(MajorTicks::new(10.0, LabelFormat::Integer));
//! let labels: Vec<String> = range
//!     .ticks(AxisKind::Linear)
//!     .map(|t| LabelFormat::Integer.format(t.value))
//!     .collect();
//! assert_eq!(labels, ["0", "10", "20", "30", "40", "50"]);
//! ```

pub mod error;
pub mod scale;
pub mod transform;
pub mod units;
pub mod viewport;

pub use error::{Result, ViewportError};
pub use scale::{
    AxisKind, AxisMeta, AxisRange, DecadeTicks, LabelFormat, LogBase, MajorTicks, ThetaLayout,
    Tick, TickIter,
};
pub use transform::{PhysicalPoint, PhysicalRect, UserPoint, ViewportTransform};
pub use units::{Dimension, MILS_PER_CM, MILS_PER_INCH, MILS_PER_MM, MILS_PER_POINT, Measurement, Unit};
pub use viewport::{AxisSpan, CoordKind, CoordSystem, PolarFrame, Rectilinear, Viewport};
