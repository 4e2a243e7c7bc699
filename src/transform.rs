//! Coordinate transformations between measurements, user space and mils.
//!
//! This module provides the [`ViewportTransform`], which converts between:
//! - **User space**: coordinates of the viewport's own coordinate system
//!   (Cartesian, semi-log, log-log or polar)
//! - **Measurements**: lengths in inches, centimeters, millimeters, points or
//!   percent of the viewport
//! - **Physical space**: mils (thousandths of an inch) relative to the
//!   bottom-left corner of the viewport, Y up
//!
//! # Key Types
//!
//! - [`UserPoint`] - A point in user coordinates
//! - [`PhysicalPoint`] - A point in mils
//! - [`PhysicalRect`] - A rectangle in mils
//! - [`ViewportTransform`] - Converts between the two, for one [`Viewport`]
//!
//! # Undefined points
//!
//! A point without geometric meaning (log of a non-positive value, a radius
//! outside the radial domain, the polar pole on the way back) maps to `None`.
//! Renderers skip those points, so a polyline with a bad vertex renders with
//! a gap rather than failing.
//!
//! # Examples
//!
//! ## Basic Point Transformation
//!
//! ```rust
//! use figscale::{AxisSpan, Measurement, UserPoint, Viewport, ViewportTransform};
//!
//! // 0..100 across 4 inches, 0..50 up 2 inches.
//! let vp = Viewport::from_axis_ranges(
//!     4000.0,
//!     2000.0,
//!     AxisSpan::linear(0.0, 100.0),
//!     AxisSpan::linear(0.0, 50.0),
//! )
//! .unwrap();
//! let transform = ViewportTransform::new(vp).unwrap();
//!
//! let p = transform.user_to_physical(UserPoint::new(50.0, 25.0)).unwrap();
//! assert_eq!((p.x, p.y), (2000.0, 1000.0));
//!
//! // Measurements of different units can be mixed.
//! let q = transform
//!     .to_physical(Measurement::user(25.0), Measurement::inches(0.5))
//!     .unwrap();
//! assert_eq!((q.x, q.y), (1000.0, 500.0));
//! ```
//!
//! ## Polar Coordinates
//!
//! ```rust
//! use figscale::{AxisSpan, PhysicalPoint, PolarFrame, UserPoint, Viewport, ViewportTransform};
//!
//! let frame = PolarFrame::from_radial_range(
//!     PhysicalPoint::new(1000.0, 1000.0),
//!     AxisSpan::linear(0.0, 10.0),
//!     1000.0,
//! )
//! .unwrap();
//! let transform = ViewportTransform::new(Viewport::polar(2000.0, 2000.0, frame, false)).unwrap();
//!
//! // theta = 90 degrees, r = 5 lands straight above the pole.
//! let p = transform.user_to_physical(UserPoint::new(90.0, 5.0)).unwrap();
//! assert!((p.x - 1000.0).abs() < 1e-9);
//! assert!((p.y - 1500.0).abs() < 1e-9);
//! ```
//!
//! ## Log Axes Reject Non-Positive Values
//!
//! ```rust
//! use figscale::{AxisSpan, UserPoint, Viewport, ViewportTransform};
//!
//! let vp = Viewport::from_axis_ranges(
//!     1000.0,
//!     1000.0,
//!     AxisSpan::log(1.0, 100.0),
//!     AxisSpan::linear(0.0, 1.0),
//! )
//! .unwrap();
//! let transform = ViewportTransform::new(vp).unwrap();
//! assert!(transform.user_to_physical(UserPoint::new(0.0, 0.5)).is_none());
//! assert!(transform.user_to_physical(UserPoint::new(10.0, 0.5)).is_some());
//! ```

use crate::error::Result;
use crate::scale::util::sorted_pair;
use crate::units::{Dimension, Measurement, Unit};
use crate::viewport::{CoordKind, CoordSystem, PolarFrame, Rectilinear, Viewport};

/// Most significant digits kept by [`ViewportTransform::physical_to_user`].
pub const MAX_SIGNIFICANT_DIGITS: i32 = 7;

/// Most fractional digits kept by [`ViewportTransform::physical_to_user`].
pub const MAX_FRACTION_DIGITS: u8 = 3;

/// A point in physical coordinates, measured in mils.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalPoint {
    pub x: f64,
    pub y: f64,
}

impl PhysicalPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in mils.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A point in the user coordinates of a viewport.
///
/// For polar viewports `x` is theta in degrees and `y` is the radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserPoint {
    pub x: f64,
    pub y: f64,
}

impl UserPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite.
    pub fn is_defined(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A rectangle in physical coordinates.
///
/// `x`, `y` name one corner; `width` and `height` may be negative.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PhysicalRect {
    /// Creates a rectangle from two opposite corners, with non-negative extent.
    ///
    /// ```
    /// use figscale::{PhysicalPoint, PhysicalRect};
    ///
    /// let rect = PhysicalRect::from_points(
    ///     PhysicalPoint::new(50.0, 80.0),
    ///     PhysicalPoint::new(10.0, 20.0),
    /// );
    /// assert_eq!((rect.x, rect.y, rect.width, rect.height), (10.0, 20.0, 40.0, 60.0));
    /// ```
    pub fn from_points(p1: PhysicalPoint, p2: PhysicalPoint) -> Self {
        let (x_min, x_max) = sorted_pair(p1.x, p2.x);
        let (y_min, y_max) = sorted_pair(p1.y, p2.y);
        Self {
            x: x_min,
            y: y_min,
            width: x_max - x_min,
            height: y_max - y_min,
        }
    }

    /// Returns true if the point lies within this rectangle.
    ///
    /// Bounds are inclusive and negative spans are handled correctly.
    pub fn contains(&self, point: &PhysicalPoint) -> bool {
        let (min_x, max_x) = sorted_pair(self.x, self.x + self.width);
        let (min_y, max_y) = sorted_pair(self.y, self.y + self.height);
        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    }
}

/// Converts between measurements, user coordinates and mils for one viewport.
///
/// The transform is immutable after construction and can be shared freely
/// between renderers. Construction validates the [`Viewport`]; afterwards no
/// operation fails, they only report undefined points as `None`.
///
/// # Polar conventions
///
/// In a polar viewport the polar mapping applies whenever at least one of
/// the two coordinates is in user units. X is then theta, always in degrees,
/// and Y is the radius. A radius given in an absolute unit is a plain length
/// from the pole; a radius in percent is relative to the smaller viewport
/// dimension. When neither coordinate is in user units both are treated as
/// ordinary Cartesian lengths.
#[derive(Debug, Clone)]
pub struct ViewportTransform {
    viewport: Viewport,
    // log10(radius_at_origin), precomputed for log-radius polar viewports
    log_radius_at_origin: f64,
}

impl ViewportTransform {
    /// Validates `viewport` and builds a transform for it.
    pub fn new(viewport: Viewport) -> Result<Self> {
        viewport.validate()?;
        let log_radius_at_origin = match viewport.system() {
            CoordSystem::PolarLogRadius(frame) => frame.radius_at_origin.log10(),
            _ => 0.0,
        };
        tracing::debug!(
            kind = ?viewport.kind(),
            width = viewport.width(),
            height = viewport.height(),
            "built viewport transform"
        );
        Ok(Self {
            viewport,
            log_radius_at_origin,
        })
    }

    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub const fn kind(&self) -> CoordKind {
        self.viewport.kind()
    }

    /// Physical bounds of the viewport: `[0, width] x [0, height]`.
    pub fn bounds(&self) -> PhysicalRect {
        PhysicalRect {
            x: 0.0,
            y: 0.0,
            width: self.viewport.width(),
            height: self.viewport.height(),
        }
    }

    /// Hit test against the viewport bounds.
    pub fn contains_physical(&self, point: &PhysicalPoint) -> bool {
        self.bounds().contains(point)
    }

    fn extent(&self, axis: Dimension) -> f64 {
        match axis {
            Dimension::X => self.viewport.width(),
            Dimension::Y => self.viewport.height(),
        }
    }

    fn polar_extent(&self) -> f64 {
        self.viewport.width().min(self.viewport.height())
    }

    /// Converts a single non-user measurement to mils along `axis`.
    ///
    /// Percent is relative to the width for X and to the height for Y.
    /// Returns `None` for user units, which need both coordinates, and for
    /// an undefined magnitude.
    pub fn measure_to_mils(&self, measure: Measurement, axis: Dimension) -> Option<f64> {
        if !measure.is_defined() {
            return None;
        }
        match measure.unit() {
            Unit::User => None,
            Unit::Percent => Some(measure.value() * self.extent(axis) / 100.0),
            _ => measure.to_mils(),
        }
    }

    /// Maps a pair of measurements to a physical point.
    ///
    /// Returns `None` when either magnitude is undefined or a user-unit
    /// coordinate cannot be mapped.
    pub fn to_physical(&self, x: Measurement, y: Measurement) -> Option<PhysicalPoint> {
        if !x.is_defined() || !y.is_defined() {
            return None;
        }
        let any_user = x.unit() == Unit::User || y.unit() == Unit::User;
        match self.viewport.system() {
            CoordSystem::Polar(frame) if any_user => self.polar_measure_to_physical(frame, false, x, y),
            CoordSystem::PolarLogRadius(frame) if any_user => {
                self.polar_measure_to_physical(frame, true, x, y)
            }
            _ => {
                let px = self.coordinate_to_mils(x, Dimension::X)?;
                let py = self.coordinate_to_mils(y, Dimension::Y)?;
                Some(PhysicalPoint::new(px, py))
            }
        }
    }

    fn coordinate_to_mils(&self, measure: Measurement, axis: Dimension) -> Option<f64> {
        if measure.unit() != Unit::User {
            return self.measure_to_mils(measure, axis);
        }
        let value = measure.value();
        match self.viewport.system() {
            CoordSystem::Cartesian(r) => rect_to_mils(r, axis, value, false),
            CoordSystem::SemilogX(r) => rect_to_mils(r, axis, value, axis == Dimension::X),
            CoordSystem::SemilogY(r) => rect_to_mils(r, axis, value, axis == Dimension::Y),
            CoordSystem::LogLog(r) => rect_to_mils(r, axis, value, true),
            CoordSystem::None | CoordSystem::Polar(_) | CoordSystem::PolarLogRadius(_) => None,
        }
    }

    fn polar_measure_to_physical(
        &self,
        frame: &PolarFrame,
        log_radius: bool,
        theta: Measurement,
        radius: Measurement,
    ) -> Option<PhysicalPoint> {
        let length = match radius.unit() {
            Unit::User => self.radial_length(frame, log_radius, radius.value())?,
            Unit::Percent => radius.value() * self.polar_extent() / 100.0,
            _ => radius.to_mils()?,
        };
        Some(polar_point(frame, theta.value(), length))
    }

    /// Mils from the pole for a user-unit radius.
    fn radial_length(&self, frame: &PolarFrame, log_radius: bool, r: f64) -> Option<f64> {
        if !r.is_finite() {
            return None;
        }
        let r0 = frame.radius_at_origin;
        let outside = if frame.radius_reversed { r > r0 } else { r < r0 };
        if outside {
            return None;
        }
        let offset = if log_radius {
            if r <= 0.0 {
                return None;
            }
            (r.log10() - self.log_radius_at_origin).abs()
        } else {
            (r - r0).abs()
        };
        Some(offset * frame.scale.abs())
    }

    /// Maps a point given entirely in user units.
    ///
    /// Either both coordinates are defined or the result is `None`; an
    /// undefined (non-finite) input coordinate makes the whole point undefined.
    pub fn user_to_physical(&self, point: UserPoint) -> Option<PhysicalPoint> {
        if !point.is_defined() {
            return None;
        }
        let UserPoint { x, y } = point;
        match self.viewport.system() {
            CoordSystem::None => None,
            CoordSystem::Cartesian(r) => Some(PhysicalPoint::new(
                (x - r.origin_x) * r.scale_x,
                (y - r.origin_y) * r.scale_y,
            )),
            CoordSystem::SemilogX(r) => Some(PhysicalPoint::new(
                rect_to_mils(r, Dimension::X, x, true)?,
                (y - r.origin_y) * r.scale_y,
            )),
            CoordSystem::SemilogY(r) => Some(PhysicalPoint::new(
                (x - r.origin_x) * r.scale_x,
                rect_to_mils(r, Dimension::Y, y, true)?,
            )),
            CoordSystem::LogLog(r) => Some(PhysicalPoint::new(
                rect_to_mils(r, Dimension::X, x, true)?,
                rect_to_mils(r, Dimension::Y, y, true)?,
            )),
            CoordSystem::Polar(frame) => {
                let length = self.radial_length(frame, false, y)?;
                Some(polar_point(frame, x, length))
            }
            CoordSystem::PolarLogRadius(frame) => {
                let length = self.radial_length(frame, true, y)?;
                Some(polar_point(frame, x, length))
            }
        }
    }

    /// Lazily maps the vertices of a polyline.
    ///
    /// Each vertex yields `Some` point or `None`, so callers can break the
    /// line at undefined vertices.
    ///
    /// ```rust
    /// use figscale::{AxisSpan, UserPoint, Viewport, ViewportTransform};
    ///
    /// let vp = Viewport::from_axis_ranges(
    ///     1000.0,
    ///     1000.0,
    ///     AxisSpan::linear(0.0, 10.0),
    ///     AxisSpan::log(1.0, 10.0),
    /// )
    /// .unwrap();
    /// let transform = ViewportTransform::new(vp).unwrap();
    /// let line = [UserPoint::new(0.0, 1.0), UserPoint::new(5.0, -1.0), UserPoint::new(10.0, 10.0)];
    /// let mapped: Vec<_> = transform.user_points_to_physical(line).collect();
    /// assert!(mapped[0].is_some() && mapped[1].is_none() && mapped[2].is_some());
    /// ```
    pub fn user_points_to_physical<'a, I>(
        &'a self,
        points: I,
    ) -> impl Iterator<Item = Option<PhysicalPoint>> + 'a
    where
        I: IntoIterator<Item = UserPoint>,
        I::IntoIter: 'a,
    {
        points.into_iter().map(move |p| self.user_to_physical(p))
    }

    /// Physical length between two user points, or `0.0` if either is undefined.
    pub fn distance_in_physical(&self, a: UserPoint, b: UserPoint) -> f64 {
        match (self.user_to_physical(a), self.user_to_physical(b)) {
            (Some(pa), Some(pb)) => pa.distance(&pb),
            _ => 0.0,
        }
    }

    /// Inverse of [`ViewportTransform::to_physical`].
    ///
    /// Expresses the physical point `(x, y)` in the requested units. The
    /// magnitudes keep at most `precision` fractional digits (clamped to
    /// [`MAX_FRACTION_DIGITS`]) and [`MAX_SIGNIFICANT_DIGITS`] significant
    /// digits. Returns `None` if a requested user coordinate does not exist
    /// there, including the polar pole itself.
    pub fn physical_to_user(
        &self,
        x: f64,
        y: f64,
        unit_x: Unit,
        unit_y: Unit,
        precision: u8,
    ) -> Option<(Measurement, Measurement)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let any_user = unit_x == Unit::User || unit_y == Unit::User;
        let polar_theta = any_user && self.kind().is_polar();
        let (vx, vy) = match self.viewport.system() {
            CoordSystem::Polar(frame) if any_user => {
                self.physical_to_polar(frame, false, x, y, unit_y)?
            }
            CoordSystem::PolarLogRadius(frame) if any_user => {
                self.physical_to_polar(frame, true, x, y, unit_y)?
            }
            _ => (
                self.mils_to_coordinate(x, unit_x, Dimension::X)?,
                self.mils_to_coordinate(y, unit_y, Dimension::Y)?,
            ),
        };
        let precision = precision.min(MAX_FRACTION_DIGITS);
        let mut rx = round_to_precision(vx, precision);
        if polar_theta {
            // 359.9996 rounds up to 360
            rx = normalize_degrees(rx);
        }
        Some((
            Measurement::new(rx, unit_x),
            Measurement::new(round_to_precision(vy, precision), unit_y),
        ))
    }

    fn mils_to_coordinate(&self, mils: f64, unit: Unit, axis: Dimension) -> Option<f64> {
        match unit {
            Unit::User => match self.viewport.system() {
                CoordSystem::Cartesian(r) => rect_from_mils(r, axis, mils, false),
                CoordSystem::SemilogX(r) => rect_from_mils(r, axis, mils, axis == Dimension::X),
                CoordSystem::SemilogY(r) => rect_from_mils(r, axis, mils, axis == Dimension::Y),
                CoordSystem::LogLog(r) => rect_from_mils(r, axis, mils, true),
                CoordSystem::None | CoordSystem::Polar(_) | CoordSystem::PolarLogRadius(_) => None,
            },
            Unit::Percent => {
                let extent = self.extent(axis);
                (extent > 0.0).then(|| mils * 100.0 / extent)
            }
            _ => Measurement::from_mils(mils, unit).map(|m| m.value()),
        }
    }

    /// Recovers `(theta, radius)` from a physical point.
    fn physical_to_polar(
        &self,
        frame: &PolarFrame,
        log_radius: bool,
        x: f64,
        y: f64,
        radius_unit: Unit,
    ) -> Option<(f64, f64)> {
        let dx = x - frame.origin.x;
        let dy = y - frame.origin.y;
        let length = dx.hypot(dy);
        if length == 0.0 {
            return None;
        }

        let angle = dy.atan2(dx).to_degrees() - frame.reference_angle;
        let theta = if frame.theta_reversed { -angle } else { angle };
        let theta = normalize_degrees(theta);

        let radius = match radius_unit {
            Unit::User => {
                if frame.scale == 0.0 {
                    return None;
                }
                let offset = length / frame.scale.abs();
                let signed = if frame.radius_reversed { -offset } else { offset };
                if log_radius {
                    10f64.powf(self.log_radius_at_origin + signed)
                } else {
                    frame.radius_at_origin + signed
                }
            }
            Unit::Percent => {
                let extent = self.polar_extent();
                if extent <= 0.0 {
                    return None;
                }
                length * 100.0 / extent
            }
            _ => Measurement::from_mils(length, radius_unit)?.value(),
        };
        radius.is_finite().then_some((theta, radius))
    }
}

/// Linear map of one rectilinear coordinate, taking log10 first if `log`.
fn rect_to_mils(r: &Rectilinear, axis: Dimension, value: f64, log: bool) -> Option<f64> {
    let v = if log {
        if value <= 0.0 {
            return None;
        }
        value.log10()
    } else {
        value
    };
    let (origin, scale) = match axis {
        Dimension::X => (r.origin_x, r.scale_x),
        Dimension::Y => (r.origin_y, r.scale_y),
    };
    Some((v - origin) * scale)
}

fn rect_from_mils(r: &Rectilinear, axis: Dimension, mils: f64, log: bool) -> Option<f64> {
    let (origin, scale) = match axis {
        Dimension::X => (r.origin_x, r.scale_x),
        Dimension::Y => (r.origin_y, r.scale_y),
    };
    if scale == 0.0 {
        return None;
    }
    let v = mils / scale + origin;
    let value = if log { 10f64.powf(v) } else { v };
    value.is_finite().then_some(value)
}

/// Places a point `length` mils from the pole at user angle `theta` degrees.
fn polar_point(frame: &PolarFrame, theta: f64, length: f64) -> PhysicalPoint {
    let signed = if frame.theta_reversed { -theta } else { theta };
    let radians = normalize_degrees(frame.reference_angle + signed).to_radians();
    let (sin, cos) = radians.sin_cos();
    PhysicalPoint::new(frame.origin.x + length * cos, frame.origin.y + length * sin)
}

/// Reduces an angle in degrees into `[0, 360)`.
fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Rounds to `fraction_digits` decimals and at most seven significant digits.
fn round_to_precision(value: f64, fraction_digits: u8) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let int_digits = value.abs().log10().floor() as i32 + 1;
    let places = (MAX_SIGNIFICANT_DIGITS - int_digits).min(i32::from(fraction_digits));
    if places >= 0 {
        let factor = 10f64.powi(places);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-places);
        (value / factor).round() * factor
    }
}

#[cfg(test)]
mod rect_tests {
    use super::{PhysicalPoint, PhysicalRect};

    #[test]
    fn contains_point_in_positive_rect() {
        let rect = PhysicalRect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 5.0,
        };

        assert!(rect.contains(&PhysicalPoint::new(5.0, 3.0)));
        assert!(rect.contains(&PhysicalPoint::new(0.0, 5.0)));
    }

    #[test]
    fn contains_handles_negative_spans() {
        let rect = PhysicalRect {
            x: 10.0,
            y: 2.0,
            width: -4.0,
            height: -6.0,
        };

        assert!(rect.contains(&PhysicalPoint::new(8.0, -1.0)));
        assert!(rect.contains(&PhysicalPoint::new(6.0, 2.0)));
    }

    #[test]
    fn contains_rejects_outside_values() {
        let rect = PhysicalRect {
            x: -5.0,
            y: -5.0,
            width: 2.0,
            height: 2.0,
        };

        assert!(!rect.contains(&PhysicalPoint::new(-10.0, 0.0)));
        assert!(!rect.contains(&PhysicalPoint::new(0.0, -4.0)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::AxisSpan;

    fn cartesian() -> ViewportTransform {
        let vp = Viewport::from_axis_ranges(
            4000.0,
            2000.0,
            AxisSpan::linear(-10.0, 10.0),
            AxisSpan::linear(0.0, 100.0),
        )
        .unwrap();
        ViewportTransform::new(vp).unwrap()
    }

    fn polar(theta_reversed: bool, radial: AxisSpan, log: bool) -> ViewportTransform {
        let frame = PolarFrame::from_radial_range(PhysicalPoint::new(2000.0, 1000.0), radial, 1000.0)
            .unwrap()
            .with_theta(theta_reversed, 90.0);
        ViewportTransform::new(Viewport::polar(4000.0, 2000.0, frame, log)).unwrap()
    }

    fn assert_close(p: PhysicalPoint, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    #[test]
    fn cartesian_user_points() {
        let t = cartesian();
        assert_close(t.user_to_physical(UserPoint::new(-10.0, 0.0)).unwrap(), 0.0, 0.0);
        assert_close(t.user_to_physical(UserPoint::new(0.0, 50.0)).unwrap(), 2000.0, 1000.0);
        assert_close(t.user_to_physical(UserPoint::new(10.0, 100.0)).unwrap(), 4000.0, 2000.0);
    }

    #[test]
    fn percent_is_relative_to_width_and_height() {
        let t = cartesian();
        let p = t
            .to_physical(Measurement::percent(25.0), Measurement::percent(50.0))
            .unwrap();
        assert_close(p, 1000.0, 1000.0);
    }

    #[test]
    fn mixed_units_are_handled_per_coordinate() {
        let t = cartesian();
        let p = t
            .to_physical(Measurement::new(72.0, Unit::Point), Measurement::user(25.0))
            .unwrap();
        assert_close(p, 1000.0, 500.0);
    }

    #[test]
    fn undefined_input_yields_no_point() {
        let t = cartesian();
        assert!(t.user_to_physical(UserPoint::new(f64::NAN, 1.0)).is_none());
        assert!(t.user_to_physical(UserPoint::new(1.0, f64::INFINITY)).is_none());
    }

    #[test]
    fn undefined_measurement_yields_no_point() {
        let t = cartesian();
        assert!(t.to_physical(Measurement::user(f64::NAN), Measurement::user(5.0)).is_none());
        assert!(t
            .to_physical(Measurement::inches(1.0), Measurement::percent(f64::INFINITY))
            .is_none());
        assert_eq!(t.measure_to_mils(Measurement::percent(f64::NAN), Dimension::X), None);

        let p = polar(false, AxisSpan::linear(0.0, 10.0), false);
        assert!(p.to_physical(Measurement::user(f64::NAN), Measurement::user(5.0)).is_none());
        assert!(p
            .to_physical(Measurement::user(0.0), Measurement::inches(f64::NAN))
            .is_none());
    }

    #[test]
    fn zero_width_viewport_maps_forward_only() {
        let vp = Viewport::from_axis_ranges(
            0.0,
            1000.0,
            AxisSpan::linear(0.0, 10.0),
            AxisSpan::linear(0.0, 10.0),
        )
        .unwrap();
        let t = ViewportTransform::new(vp).unwrap();
        assert_close(t.user_to_physical(UserPoint::new(5.0, 5.0)).unwrap(), 0.0, 500.0);
        assert!(t.physical_to_user(0.0, 500.0, Unit::User, Unit::User, 3).is_none());
        let (x, y) = t.physical_to_user(0.0, 500.0, Unit::Inch, Unit::User, 3).unwrap();
        assert_eq!((x.value(), y.value()), (0.0, 5.0));
    }

    #[test]
    fn kind_none_has_no_user_space() {
        let t = ViewportTransform::new(Viewport::none(1000.0, 500.0)).unwrap();
        assert!(t.user_to_physical(UserPoint::new(1.0, 1.0)).is_none());
        assert!(t
            .to_physical(Measurement::user(1.0), Measurement::inches(0.1))
            .is_none());
        let p = t
            .to_physical(Measurement::inches(0.5), Measurement::percent(10.0))
            .unwrap();
        assert_close(p, 500.0, 50.0);
    }

    #[test]
    fn log_log_maps_decades_evenly() {
        let vp = Viewport::from_axis_ranges(
            3000.0,
            2000.0,
            AxisSpan::log(1.0, 1000.0),
            AxisSpan::log(0.1, 10.0),
        )
        .unwrap();
        let t = ViewportTransform::new(vp).unwrap();
        assert_close(t.user_to_physical(UserPoint::new(10.0, 1.0)).unwrap(), 1000.0, 1000.0);
        assert_close(t.user_to_physical(UserPoint::new(100.0, 10.0)).unwrap(), 2000.0, 2000.0);
        assert!(t.user_to_physical(UserPoint::new(10.0, 0.0)).is_none());
        assert!(t.user_to_physical(UserPoint::new(-10.0, 1.0)).is_none());
    }

    #[test]
    fn polar_reference_angle_and_direction() {
        // theta = 0 points up (reference 90 degrees)
        let ccw = polar(false, AxisSpan::linear(0.0, 10.0), false);
        assert_close(ccw.user_to_physical(UserPoint::new(0.0, 10.0)).unwrap(), 2000.0, 2000.0);
        // counter-clockwise from up is left
        assert_close(ccw.user_to_physical(UserPoint::new(90.0, 10.0)).unwrap(), 1000.0, 1000.0);

        let cw = polar(true, AxisSpan::linear(0.0, 10.0), false);
        assert_close(cw.user_to_physical(UserPoint::new(90.0, 10.0)).unwrap(), 3000.0, 1000.0);
        // negative angles wrap
        assert_close(cw.user_to_physical(UserPoint::new(-270.0, 10.0)).unwrap(), 3000.0, 1000.0);
    }

    #[test]
    fn polar_radius_outside_domain_is_undefined() {
        let t = polar(false, AxisSpan::linear(2.0, 10.0), false);
        assert!(t.user_to_physical(UserPoint::new(0.0, 1.0)).is_none());
        assert!(t.user_to_physical(UserPoint::new(0.0, 2.0)).is_some());

        let reversed = polar(false, AxisSpan::linear(10.0, 0.0), false);
        assert!(reversed.user_to_physical(UserPoint::new(0.0, 11.0)).is_none());
        // r = 0 sits on the outer ring of a reversed radius
        assert_close(
            reversed.user_to_physical(UserPoint::new(0.0, 0.0)).unwrap(),
            2000.0,
            2000.0,
        );
    }

    #[test]
    fn polar_log_radius() {
        let t = polar(false, AxisSpan::log(1.0, 100.0), true);
        // one decade out of two spans half the outer radius
        assert_close(t.user_to_physical(UserPoint::new(0.0, 10.0)).unwrap(), 2000.0, 1500.0);
        assert!(t.user_to_physical(UserPoint::new(0.0, 0.0)).is_none());
        assert!(t.user_to_physical(UserPoint::new(0.0, 0.5)).is_none());
    }

    #[test]
    fn polar_non_user_radius_is_a_plain_length() {
        let t = polar(false, AxisSpan::linear(5.0, 10.0), false);
        let p = t
            .to_physical(Measurement::user(0.0), Measurement::inches(0.5))
            .unwrap();
        assert_close(p, 2000.0, 1500.0);
        // percent radius uses the smaller dimension (2000 mils)
        let q = t
            .to_physical(Measurement::user(180.0), Measurement::percent(10.0))
            .unwrap();
        assert_close(q, 2000.0, 800.0);
    }

    #[test]
    fn polar_without_user_units_is_cartesian() {
        let t = polar(false, AxisSpan::linear(0.0, 10.0), false);
        let p = t
            .to_physical(Measurement::inches(1.0), Measurement::percent(50.0))
            .unwrap();
        assert_close(p, 1000.0, 1000.0);
    }

    #[test]
    fn polar_pole_has_no_inverse() {
        let t = polar(false, AxisSpan::linear(0.0, 10.0), false);
        assert!(t.physical_to_user(2000.0, 1000.0, Unit::User, Unit::User, 3).is_none());
    }

    #[test]
    fn physical_to_user_inverts_cartesian() {
        let t = cartesian();
        let (x, y) = t.physical_to_user(1000.0, 500.0, Unit::User, Unit::User, 3).unwrap();
        assert_eq!(x, Measurement::user(-5.0));
        assert_eq!(y, Measurement::user(25.0));

        let (x, y) = t.physical_to_user(1000.0, 500.0, Unit::Centimeter, Unit::Percent, 3).unwrap();
        assert_eq!(x.value(), 2.54);
        assert_eq!(y.value(), 25.0);
    }

    #[test]
    fn physical_to_user_inverts_polar() {
        let t = polar(true, AxisSpan::linear(0.0, 10.0), false);
        let p = t.user_to_physical(UserPoint::new(135.0, 4.0)).unwrap();
        let (theta, r) = t.physical_to_user(p.x, p.y, Unit::User, Unit::User, 3).unwrap();
        assert_eq!(theta.value(), 135.0);
        assert_eq!(r.value(), 4.0);
    }

    #[test]
    fn theta_just_below_a_full_turn_wraps_to_zero() {
        let t = polar(false, AxisSpan::linear(0.0, 10.0), false);
        let p = t.user_to_physical(UserPoint::new(359.9999, 5.0)).unwrap();
        let (theta, r) = t.physical_to_user(p.x, p.y, Unit::User, Unit::User, 3).unwrap();
        assert_eq!(theta.value(), 0.0);
        assert_eq!(r.value(), 5.0);
    }

    #[test]
    fn precision_limits_fraction_and_significant_digits() {
        assert_eq!(round_to_precision(1.23456, 2), 1.23);
        assert_eq!(round_to_precision(1.23456, 3), 1.235);
        assert_eq!(round_to_precision(123_456.789, 3), 123_456.8);
        assert_eq!(round_to_precision(123_456_789.0, 3), 123_456_800.0);
        assert_eq!(round_to_precision(-0.0004, 3), -0.0);
        assert_eq!(round_to_precision(0.0, 3), 0.0);
    }

    #[test]
    fn distance_is_zero_for_undefined_points() {
        let t = cartesian();
        let d = t.distance_in_physical(UserPoint::new(-10.0, 0.0), UserPoint::new(-4.0, 8.0));
        // (1200, 0) vs (0, 160)
        assert!((d - 1200f64.hypot(160.0)).abs() < 1e-9);
        assert_eq!(
            t.distance_in_physical(UserPoint::new(0.0, f64::NAN), UserPoint::new(1.0, 1.0)),
            0.0
        );
    }

    #[test]
    fn measure_to_mils_rejects_user_units() {
        let t = cartesian();
        assert_eq!(t.measure_to_mils(Measurement::user(1.0), Dimension::X), None);
        assert_eq!(t.measure_to_mils(Measurement::percent(10.0), Dimension::Y), Some(200.0));
    }

    #[test]
    fn bounds_hit_test() {
        let t = cartesian();
        assert!(t.contains_physical(&PhysicalPoint::new(4000.0, 0.0)));
        assert!(!t.contains_physical(&PhysicalPoint::new(4000.1, 0.0)));
    }
}
