//! Multilinear interpolation on a regular _n_-dimensional grid
//!
//! # Interpolator
//!  - [`InterpND`] The regular grid interpolator
//!  - [`InterpNDBuilder`] Configure the interpolator

use std::fmt::Debug;

use ndarray::{Array, Array1, ArrayView1, ArrayView2, CowArray, Ix1, IxDyn};
use num_traits::{cast, Float};

use crate::request::Fill;
use crate::vector_extensions::{Monotonic, VectorExtensions};
use crate::{BuilderError, InterpolateError};

/// Multilinear interpolator on a regular grid.
///
/// The grid is the cartesian product of one strictly monotonic rising
/// coordinate vector per data axis. Every query point is blended from the
/// 2^n corners of its enclosing grid cell.
#[derive(Debug)]
pub struct InterpND<'a, A> {
    /// one coordinate vector per data axis, each strictly monotonic rising
    points: Vec<CowArray<'a, A, Ix1>>,
    data: CowArray<'a, A, IxDyn>,
    bounds_error: bool,
    fill: Fill<A>,
}

impl<'a, A> InterpND<'a, A>
where
    A: Float + Debug,
{
    /// Get the [`InterpNDBuilder`]
    pub fn builder(data: impl Into<CowArray<'a, A, IxDyn>>) -> InterpNDBuilder<'a, A> {
        InterpNDBuilder::new(data.into())
    }

    /// Calculate the interpolated values at the query points,
    /// one point per row.
    ///
    /// ```rust
    /// # use labeled_interp::interpnd::InterpND;
    /// # use ndarray::array;
    /// let data = array![[0.0, 1.0], [2.0, 3.0]].into_dyn();
    /// let x = array![0.0, 1.0];
    /// let y = array![0.0, 1.0];
    ///
    /// let interpolator = InterpND::builder(data)
    ///     .points(vec![x.view(), y.view()])
    ///     .build()
    ///     .unwrap();
    /// let result = interpolator.interp_points(array![[0.5, 0.5]].view()).unwrap();
    /// # assert_eq!(result, array![1.5]);
    /// ```
    pub fn interp_points(&self, queries: ArrayView2<A>) -> Result<Array1<A>, InterpolateError> {
        if queries.ncols() != self.points.len() {
            return Err(InterpolateError::Configuration(format!(
                "query points have {} coordinates for a grid with {} axes",
                queries.ncols(),
                self.points.len(),
            )));
        }
        let mut values = Array::zeros(queries.nrows());
        for (query, value) in queries.rows().into_iter().zip(values.iter_mut()) {
            *value = self.interp_point(query)?;
        }
        Ok(values)
    }

    fn interp_point(&self, query: ArrayView1<A>) -> Result<A, InterpolateError> {
        let ndim = self.points.len();
        let mut cells = Vec::with_capacity(ndim);
        let mut fracs = Vec::with_capacity(ndim);

        for (axis, (&x, points)) in query.iter().zip(self.points.iter()).enumerate() {
            if !(points[0] <= x && x <= points[points.len() - 1]) {
                if self.bounds_error {
                    return Err(InterpolateError::OutOfBounds(format!(
                        "x = {x:#?} is not in range along axis {axis}"
                    )));
                }
                if let Fill::Value(value) = self.fill {
                    return Ok(value);
                }
                // Fill::Extrapolate extends the edge cell, the fraction
                // is left unclamped
            }
            let idx = points.get_lower_index(x);
            cells.push(idx);
            fracs.push((x - points[idx]) / (points[idx + 1] - points[idx]));
        }

        // blend the 2^n corners of the cell
        let mut value = A::zero();
        let mut corner = vec![0usize; ndim];
        for vertex in 0..1usize << ndim {
            let mut weight = A::one();
            for axis in 0..ndim {
                if vertex >> axis & 1 == 1 {
                    corner[axis] = cells[axis] + 1;
                    weight = weight * fracs[axis];
                } else {
                    corner[axis] = cells[axis];
                    weight = weight * (A::one() - fracs[axis]);
                }
            }
            value = value + weight * self.data[IxDyn(&corner)];
        }
        Ok(value)
    }
}

/// Create and configure a [`InterpND`] interpolator.
///
/// # Default configuration
/// The index to each axis is used as its coordinates, out-of-domain
/// queries are extrapolated.
#[derive(Debug)]
pub struct InterpNDBuilder<'a, A> {
    points: Option<Vec<ArrayView1<'a, A>>>,
    data: CowArray<'a, A, IxDyn>,
    bounds_error: bool,
    fill: Fill<A>,
}

impl<'a, A> InterpNDBuilder<'a, A>
where
    A: Float + Debug,
{
    pub fn new(data: CowArray<'a, A, IxDyn>) -> Self {
        InterpNDBuilder {
            points: None,
            data,
            bounds_error: false,
            fill: Fill::Extrapolate,
        }
    }

    /// Add coordinate vectors for the grid, one per data axis. Each vector
    /// needs to match the extent of its axis and must be strictly monotonic
    /// rising. If not set the index `0..len - 1` is used per axis.
    pub fn points(mut self, points: Vec<ArrayView1<'a, A>>) -> Self {
        self.points = Some(points);
        self
    }

    /// Error on out-of-domain queries instead of filling, default is `false`
    pub fn bounds_error(mut self, bounds_error: bool) -> Self {
        self.bounds_error = bounds_error;
        self
    }

    /// Set the out-of-domain behavior, default is [`Fill::Extrapolate`]
    pub fn fill(mut self, fill: Fill<A>) -> Self {
        self.fill = fill;
        self
    }

    /// Validate the input data and create the configured [`InterpND`]
    pub fn build(self) -> Result<InterpND<'a, A>, BuilderError> {
        use Monotonic::*;

        let InterpNDBuilder {
            points,
            data,
            bounds_error,
            fill,
        } = self;

        if data.ndim() < 1 {
            return Err(BuilderError::ShapeError(
                "data dimension is 0, needs to be at least 1".into(),
            ));
        }

        let points: Vec<CowArray<'a, A, Ix1>> = match points {
            Some(points) => points.into_iter().map(|p| p.into()).collect(),
            None => data
                .shape()
                .iter()
                .map(|&len| {
                    Array::from_iter((0..len).map(|n| {
                        cast(n).unwrap_or_else(|| {
                            unimplemented!("casting from usize to a number should always work")
                        })
                    }))
                    .into()
                })
                .collect(),
        };

        if points.len() != data.ndim() {
            return Err(BuilderError::ShapeError(format!(
                "got {} coordinate vectors for data with {} dimensions",
                points.len(),
                data.ndim(),
            )));
        }
        for (axis, points) in points.iter().enumerate() {
            let len = data.shape()[axis];
            if len < 2 {
                return Err(BuilderError::NotEnoughData(format!(
                    "linear interpolation needs at least 2 points along axis {axis}, got {len}"
                )));
            }
            if points.len() != len {
                return Err(BuilderError::ShapeError(format!(
                    "lengths of the coordinates and the data axis {axis} need to match. Got coordinates: {:}, data: {:}",
                    points.len(),
                    len,
                )));
            }
            if !matches!(points.monotonic_prop(), Rising { strict: true }) {
                return Err(BuilderError::Monotonic(format!(
                    "coordinates along axis {axis} need to be strictly monotonic rising"
                )));
            }
        }

        Ok(InterpND {
            points,
            data,
            bounds_error,
            fill,
        })
    }
}
