//! Viewport descriptors: the coordinate system a transform is built from.
//!
//! A [`Viewport`] is an immutable value describing one 2D coordinate system
//! laid over a physical rectangle measured in mils. The coordinate system is
//! a tagged union, [`CoordSystem`], with one variant per kind:
//!
//! - [`CoordSystem::None`]: no user coordinates, only physical and percent.
//! - [`CoordSystem::Cartesian`], [`CoordSystem::SemilogX`],
//!   [`CoordSystem::SemilogY`], [`CoordSystem::LogLog`]: orthogonal axes,
//!   each either linear or base-10 logarithmic, calibrated by a
//!   [`Rectilinear`] origin and scale pair.
//! - [`CoordSystem::Polar`], [`CoordSystem::PolarLogRadius`]: angle in
//!   degrees and a linear or logarithmic radius, calibrated by a
//!   [`PolarFrame`].
//!
//! Physical space has its origin at the bottom-left corner of the viewport,
//! with X to the right and Y up.
//!
//! # Examples
//!
//! Most callers derive the calibration from axis ranges:
//!
//! ```rust
//! use figscale::{AxisSpan, CoordKind, Viewport};
//!
//! // 0..10 across 5 inches, 1..1000 (log) up 3 inches.
//! let vp = Viewport::from_axis_ranges(
//!     5000.0,
//!     3000.0,
//!     AxisSpan::linear(0.0, 10.0),
//!     AxisSpan::log(1.0, 1000.0),
//! )
//! .unwrap();
//! assert_eq!(vp.kind(), CoordKind::SemilogY);
//! ```

use crate::error::{Result, ViewportError};
use crate::transform::PhysicalPoint;
use crate::units::Dimension;

/// Discriminant of a [`CoordSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordKind {
    None,
    Cartesian,
    SemilogX,
    SemilogY,
    LogLog,
    Polar,
    PolarLogRadius,
}

impl CoordKind {
    pub const fn is_polar(self) -> bool {
        matches!(self, Self::Polar | Self::PolarLogRadius)
    }

    /// Whether the X dimension is logarithmic.
    pub const fn is_log_x(self) -> bool {
        matches!(self, Self::SemilogX | Self::LogLog)
    }

    /// Whether the Y dimension (or the radius, for polar kinds) is logarithmic.
    pub const fn is_log_y(self) -> bool {
        matches!(self, Self::SemilogY | Self::LogLog | Self::PolarLogRadius)
    }
}

/// Calibration of an orthogonal coordinate system.
///
/// `physical = (value - origin) * scale` in each dimension, where `value` is
/// the user coordinate for a linear dimension and its base-10 logarithm for a
/// logarithmic one. Origins of logarithmic dimensions are therefore given in
/// log10 space, and their scales in mils per decade.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectilinear {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Mils per user unit (or per decade) along X.
    pub scale_x: f64,
    /// Mils per user unit (or per decade) along Y.
    pub scale_y: f64,
}

/// Calibration of a polar coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarFrame {
    /// Location of the pole inside the viewport, in mils.
    pub origin: PhysicalPoint,
    /// Radial coordinate found at the pole. This is the minimum radius, or
    /// the maximum when `radius_reversed` is set.
    pub radius_at_origin: f64,
    /// Mils per radial unit, or mils per decade for a logarithmic radius.
    pub scale: f64,
    /// Angles increase clockwise instead of counter-clockwise.
    pub theta_reversed: bool,
    /// Radius decreases away from the pole.
    pub radius_reversed: bool,
    /// Direction of theta = 0, in degrees counter-clockwise from +X.
    pub reference_angle: f64,
}

impl PolarFrame {
    /// Builds a frame whose radial range `start..end` spans `outer_radius`
    /// mils from `origin`.
    ///
    /// The radius at the pole is `start`; the radius is reversed when
    /// `start > end`. Theta runs counter-clockwise from +X until changed
    /// with [`PolarFrame::with_theta`].
    pub fn from_radial_range(
        origin: PhysicalPoint,
        radial: AxisSpan,
        outer_radius: f64,
    ) -> Result<Self> {
        let span = radial.mapped_span(Dimension::Y)?;
        let scale = outer_radius / span.abs();
        if !valid_scale(scale, outer_radius) {
            return Err(ViewportError::InvalidScale {
                axis: Dimension::Y,
                scale,
            });
        }
        Ok(Self {
            origin,
            radius_at_origin: radial.start,
            scale,
            theta_reversed: false,
            radius_reversed: radial.start > radial.end,
            reference_angle: 0.0,
        })
    }

    /// Sets the angular direction and the reference angle in degrees.
    pub fn with_theta(mut self, reversed: bool, reference_angle: f64) -> Self {
        self.theta_reversed = reversed;
        self.reference_angle = reference_angle;
        self
    }

    fn validate(&self, log_radius: bool, extent: f64) -> Result<()> {
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(ViewportError::NonFiniteParameter {
                name: "polar origin",
            });
        }
        if !self.reference_angle.is_finite() {
            return Err(ViewportError::NonFiniteParameter {
                name: "reference angle",
            });
        }
        if !valid_scale(self.scale, extent) {
            return Err(ViewportError::InvalidScale {
                axis: Dimension::Y,
                scale: self.scale,
            });
        }
        let r = self.radius_at_origin;
        let in_domain = if log_radius { r > 0.0 } else { r >= 0.0 };
        if !r.is_finite() || !in_domain {
            return Err(ViewportError::InvalidRadiusAtOrigin { radius: r });
        }
        Ok(())
    }
}

/// The coordinate system of a viewport, one variant per kind.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordSystem {
    None,
    Cartesian(Rectilinear),
    SemilogX(Rectilinear),
    SemilogY(Rectilinear),
    LogLog(Rectilinear),
    Polar(PolarFrame),
    PolarLogRadius(PolarFrame),
}

impl CoordSystem {
    pub const fn kind(&self) -> CoordKind {
        match self {
            Self::None => CoordKind::None,
            Self::Cartesian(_) => CoordKind::Cartesian,
            Self::SemilogX(_) => CoordKind::SemilogX,
            Self::SemilogY(_) => CoordKind::SemilogY,
            Self::LogLog(_) => CoordKind::LogLog,
            Self::Polar(_) => CoordKind::Polar,
            Self::PolarLogRadius(_) => CoordKind::PolarLogRadius,
        }
    }

    fn validate(&self, width: f64, height: f64) -> Result<()> {
        match self {
            Self::None => Ok(()),
            Self::Cartesian(r) | Self::SemilogX(r) | Self::SemilogY(r) | Self::LogLog(r) => {
                if !r.origin_x.is_finite() || !r.origin_y.is_finite() {
                    return Err(ViewportError::NonFiniteParameter { name: "origin" });
                }
                for (axis, scale, extent) in
                    [(Dimension::X, r.scale_x, width), (Dimension::Y, r.scale_y, height)]
                {
                    if !valid_scale(scale, extent) {
                        return Err(ViewportError::InvalidScale { axis, scale });
                    }
                }
                Ok(())
            }
            Self::Polar(frame) => frame.validate(false, width.min(height)),
            Self::PolarLogRadius(frame) => frame.validate(true, width.min(height)),
        }
    }
}

/// A scale must be finite, and may only be zero along a zero extent.
fn valid_scale(scale: f64, extent: f64) -> bool {
    scale.is_finite() && (scale != 0.0 || extent == 0.0)
}

/// One axis' user-space range, used to calibrate a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSpan {
    pub start: f64,
    pub end: f64,
    pub log: bool,
}

impl AxisSpan {
    pub const fn linear(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            log: false,
        }
    }

    pub const fn log(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            log: true,
        }
    }

    /// Endpoints in the space the linear map is applied in.
    fn mapped(&self, axis: Dimension) -> Result<(f64, f64)> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ViewportError::NonFiniteParameter { name: "axis range" });
        }
        if !self.log {
            return Ok((self.start, self.end));
        }
        if self.start <= 0.0 || self.end <= 0.0 {
            return Err(ViewportError::NonPositiveLogRange {
                axis,
                start: self.start,
                end: self.end,
            });
        }
        Ok((self.start.log10(), self.end.log10()))
    }

    fn mapped_span(&self, axis: Dimension) -> Result<f64> {
        let (s, e) = self.mapped(axis)?;
        Ok(e - s)
    }
}

/// Immutable description of one viewport: its size and coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    width: f64,
    height: f64,
    system: CoordSystem,
}

impl Viewport {
    /// Creates a descriptor. Validation happens when a transform is built.
    pub const fn new(width: f64, height: f64, system: CoordSystem) -> Self {
        Self {
            width,
            height,
            system,
        }
    }

    /// A viewport without user coordinates.
    pub const fn none(width: f64, height: f64) -> Self {
        Self::new(width, height, CoordSystem::None)
    }

    /// Calibrates an orthogonal viewport so that `x` spans the full width
    /// and `y` the full height.
    ///
    /// The kind follows from the `log` flags of the two spans. Fails when a
    /// logarithmic span is not strictly positive or a span is empty. A zero
    /// width or height is accepted; that axis then collapses onto zero.
    pub fn from_axis_ranges(width: f64, height: f64, x: AxisSpan, y: AxisSpan) -> Result<Self> {
        let (x0, x1) = x.mapped(Dimension::X)?;
        let (y0, y1) = y.mapped(Dimension::Y)?;
        let scale_x = width / (x1 - x0);
        let scale_y = height / (y1 - y0);
        for (axis, scale, extent) in [(Dimension::X, scale_x, width), (Dimension::Y, scale_y, height)] {
            if !valid_scale(scale, extent) {
                return Err(ViewportError::InvalidScale { axis, scale });
            }
        }
        let calibration = Rectilinear {
            origin_x: x0,
            origin_y: y0,
            scale_x,
            scale_y,
        };
        let system = match (x.log, y.log) {
            (false, false) => CoordSystem::Cartesian(calibration),
            (true, false) => CoordSystem::SemilogX(calibration),
            (false, true) => CoordSystem::SemilogY(calibration),
            (true, true) => CoordSystem::LogLog(calibration),
        };
        Ok(Self::new(width, height, system))
    }

    /// A polar viewport; `log_radius` selects the logarithmic radial kind.
    pub const fn polar(width: f64, height: f64, frame: PolarFrame, log_radius: bool) -> Self {
        let system = if log_radius {
            CoordSystem::PolarLogRadius(frame)
        } else {
            CoordSystem::Polar(frame)
        };
        Self::new(width, height, system)
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub const fn system(&self) -> &CoordSystem {
        &self.system
    }

    pub const fn kind(&self) -> CoordKind {
        self.system.kind()
    }

    /// Checks every invariant a transform relies on.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ViewportError::NonFiniteDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ViewportError::NegativeDimension {
                width: self.width,
                height: self.height,
            });
        }
        self.system.validate(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_log_flags() {
        let lin = AxisSpan::linear(0.0, 1.0);
        let log = AxisSpan::log(1.0, 10.0);
        let kind = |x, y| Viewport::from_axis_ranges(100.0, 100.0, x, y).unwrap().kind();
        assert_eq!(kind(lin, lin), CoordKind::Cartesian);
        assert_eq!(kind(log, lin), CoordKind::SemilogX);
        assert_eq!(kind(lin, log), CoordKind::SemilogY);
        assert_eq!(kind(log, log), CoordKind::LogLog);
    }

    #[test]
    fn log_calibration_is_in_decades() {
        let vp = Viewport::from_axis_ranges(
            3000.0,
            1000.0,
            AxisSpan::log(1.0, 1000.0),
            AxisSpan::linear(-5.0, 5.0),
        )
        .unwrap();
        let CoordSystem::SemilogX(r) = vp.system() else {
            panic!("expected semilog-x, got {:?}", vp.kind());
        };
        assert_eq!(r.origin_x, 0.0);
        assert!((r.scale_x - 1000.0).abs() < 1e-9);
        assert_eq!(r.origin_y, -5.0);
        assert_eq!(r.scale_y, 100.0);
    }

    #[test]
    fn non_positive_log_range_is_rejected() {
        let err = Viewport::from_axis_ranges(
            100.0,
            100.0,
            AxisSpan::linear(0.0, 1.0),
            AxisSpan::log(0.0, 100.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ViewportError::NonPositiveLogRange {
                axis: Dimension::Y,
                start: 0.0,
                end: 100.0
            }
        );
    }

    #[test]
    fn empty_span_is_rejected() {
        let err = Viewport::from_axis_ranges(
            100.0,
            100.0,
            AxisSpan::linear(3.0, 3.0),
            AxisSpan::linear(0.0, 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, ViewportError::InvalidScale { axis: Dimension::X, .. }));
    }

    #[test]
    fn zero_size_viewport_collapses_the_axis() {
        let vp = Viewport::from_axis_ranges(
            0.0,
            1000.0,
            AxisSpan::linear(0.0, 10.0),
            AxisSpan::linear(0.0, 10.0),
        )
        .unwrap();
        assert!(vp.validate().is_ok());
        let CoordSystem::Cartesian(r) = vp.system() else {
            panic!("expected cartesian");
        };
        assert_eq!((r.scale_x, r.scale_y), (0.0, 100.0));

        // a zero scale along a non-zero extent is still rejected
        let stretched = Viewport::new(500.0, 1000.0, *vp.system());
        assert!(matches!(
            stretched.validate(),
            Err(ViewportError::InvalidScale { axis: Dimension::X, .. })
        ));

        let frame = PolarFrame::from_radial_range(
            PhysicalPoint::new(0.0, 0.0),
            AxisSpan::linear(0.0, 10.0),
            0.0,
        )
        .unwrap();
        assert_eq!(frame.scale, 0.0);
        assert!(Viewport::polar(0.0, 0.0, frame, false).validate().is_ok());
        assert!(Viewport::polar(100.0, 100.0, frame, false).validate().is_err());
    }

    #[test]
    fn reversed_span_keeps_direction_in_the_scale() {
        let vp = Viewport::from_axis_ranges(
            100.0,
            100.0,
            AxisSpan::linear(10.0, 0.0),
            AxisSpan::linear(0.0, 1.0),
        )
        .unwrap();
        let CoordSystem::Cartesian(r) = vp.system() else {
            panic!("expected cartesian");
        };
        assert_eq!(r.origin_x, 10.0);
        assert_eq!(r.scale_x, -10.0);
    }

    #[test]
    fn validate_rejects_bad_dimensions() {
        assert!(matches!(
            Viewport::none(f64::NAN, 10.0).validate(),
            Err(ViewportError::NonFiniteDimension { .. })
        ));
        assert!(matches!(
            Viewport::none(-1.0, 10.0).validate(),
            Err(ViewportError::NegativeDimension { .. })
        ));
        assert!(Viewport::none(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn polar_frame_from_reversed_radial_range() {
        let frame = PolarFrame::from_radial_range(
            PhysicalPoint::new(500.0, 500.0),
            AxisSpan::linear(10.0, 0.0),
            500.0,
        )
        .unwrap();
        assert!(frame.radius_reversed);
        assert_eq!(frame.radius_at_origin, 10.0);
        assert_eq!(frame.scale, 50.0);
    }

    #[test]
    fn polar_radius_domain_is_checked() {
        let mut frame = PolarFrame::from_radial_range(
            PhysicalPoint::new(0.0, 0.0),
            AxisSpan::linear(0.0, 1.0),
            100.0,
        )
        .unwrap();
        assert!(Viewport::polar(100.0, 100.0, frame, false).validate().is_ok());
        assert!(matches!(
            Viewport::polar(100.0, 100.0, frame, true).validate(),
            Err(ViewportError::InvalidRadiusAtOrigin { .. })
        ));
        frame.radius_at_origin = -1.0;
        assert!(Viewport::polar(100.0, 100.0, frame, false).validate().is_err());
    }
}
