//! Error types for viewport construction.
//!
//! Only building a [`ViewportTransform`](crate::ViewportTransform) can fail.
//! Mapping individual points never errors: a point that has no geometric
//! meaning maps to `None` instead.

use thiserror::Error;

use crate::units::Dimension;

/// Errors raised while validating a [`Viewport`](crate::Viewport) descriptor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// Width or height is NaN or infinite.
    #[error("viewport dimensions must be finite, got {width} x {height} mils")]
    NonFiniteDimension { width: f64, height: f64 },

    /// Width or height is below zero.
    #[error("viewport dimensions must be non-negative, got {width} x {height} mils")]
    NegativeDimension { width: f64, height: f64 },

    /// A calibration parameter is NaN or infinite.
    #[error("viewport parameter `{name}` must be finite")]
    NonFiniteParameter { name: &'static str },

    /// A logarithmic dimension was given a range that is not strictly positive.
    #[error("logarithmic {axis} axis needs a strictly positive range, got [{start}, {end}]")]
    NonPositiveLogRange {
        axis: Dimension,
        start: f64,
        end: f64,
    },

    /// A scale factor is not finite, or is zero along a non-zero extent.
    #[error("{axis} scale factor must be finite and non-zero, got {scale}")]
    InvalidScale { axis: Dimension, scale: f64 },

    /// The polar radius-at-origin violates the radial axis domain.
    #[error("polar radius at origin {radius} is outside the radial domain")]
    InvalidRadiusAtOrigin { radius: f64 },
}

/// Result alias for viewport construction.
pub type Result<T> = std::result::Result<T, ViewportError>;
