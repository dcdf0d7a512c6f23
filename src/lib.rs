//! The labeled-interp crate provides smart interpolation for
//! multidimensional arrays with named axes.
//!
//! A [`LabeledArray`] couples an _n_-dimensional data buffer with an ordered
//! set of axis names and one coordinate vector per axis. Interpolation is
//! requested against axis *names* with an [`InterpRequest`]; the array
//! decides between the one-dimensional and the regular-grid strategy and
//! reconciles axes the request names but the data does not carry, and
//! singleton axes the data carries but cannot be interpolated.
//!
//! Complex valued data is interpolated by running the real and imaginary
//! parts through the same strategy independently and recombining them.
//!
//! # Operations
//!  - [`LabeledArray::interp1d`] interpolate along one named axis
//!  - [`LabeledArray::interpn`] interpolate along several named axes at once
//!  - [`LabeledArray::smart`] choose the strategy based on the request
//!
//! # Primitives
//!  - [`interp1d::Interp1D`] piecewise linear interpolation along one axis
//!    of _n_-dimensional data
//!  - [`interpnd::InterpND`] multilinear interpolation on a regular
//!    _n_-dimensional grid

use thiserror::Error;

mod dispatch;
mod labeled_array;
mod reconcile;
mod request;

pub mod interp1d;
pub mod interpnd;
pub mod vector_extensions;

pub use labeled_array::LabeledArray;
pub use request::{Fill, InterpRequest};

/// Errors during the creation of arrays and interpolators
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Not enough data for the interpolation strategy
    #[error("{0}")]
    NotEnoughData(String),
    /// A coordinate vector is not strictly monotonic rising
    #[error("{0}")]
    Monotonic(String),
    /// Data and coordinates have incompatible shapes
    #[error("{0}")]
    ShapeError(String),
}

/// Errors during interpolation
#[derive(Debug, Error)]
pub enum InterpolateError {
    /// The request is malformed
    #[error("{0}")]
    Configuration(String),
    /// A named axis does not exist on the array
    #[error("{0}")]
    AxisNotFound(String),
    /// The relationship between the request axes and the data axes
    /// is not supported
    #[error("{0}")]
    UnsupportedShape(String),
    /// A query point lies outside the data domain and `bounds_error` is set
    #[error("{0}")]
    OutOfBounds(String),
    /// An interpolator could not be constructed from the given data
    #[error(transparent)]
    Builder(#[from] BuilderError),
}
