//! Piecewise linear interpolation along one axis of _n_-dimensional data
//!
//! # Interpolator
//!  - [`Interp1D`] The one dimensional interpolator
//!  - [`Interp1DBuilder`] Configure the interpolator

use std::fmt::Debug;

use ndarray::{Array, Array1, ArrayD, ArrayView1, ArrayViewMut, Axis, CowArray, Ix1, IxDyn, Zip};
use num_traits::{cast, Float};

use crate::request::Fill;
use crate::vector_extensions::{Monotonic, VectorExtensions};
use crate::{BuilderError, InterpolateError};

/// One dimensional interpolator over one axis of _n_-dimensional data
#[derive(Debug)]
pub struct Interp1D<'a, A> {
    /// x values are guaranteed to be strictly monotonic rising
    x: CowArray<'a, A, Ix1>,
    data: CowArray<'a, A, IxDyn>,
    axis: usize,
    bounds_error: bool,
    fill: Fill<A>,
}

impl<'a, A> Interp1D<'a, A>
where
    A: Float + Debug,
{
    /// Get the [`Interp1DBuilder`]
    pub fn builder(data: impl Into<CowArray<'a, A, IxDyn>>) -> Interp1DBuilder<'a, A> {
        Interp1DBuilder::new(data.into())
    }

    /// Calculate the interpolated values at all points in `xs`.
    ///
    /// The result has the shape of the data with the extent of the
    /// interpolation axis replaced by `xs.len()`.
    ///
    /// ```rust
    /// # use labeled_interp::interp1d::Interp1D;
    /// # use ndarray::array;
    /// let data = array![10.0, 20.0, 30.0].into_dyn();
    /// let x = array![0.0, 1.0, 2.0];
    ///
    /// let interpolator = Interp1D::builder(data).x(x.view()).build().unwrap();
    /// let result = interpolator.interp_array(&array![0.5, 1.5]).unwrap();
    /// # assert_eq!(result, array![15.0, 25.0].into_dyn());
    /// ```
    pub fn interp_array(&self, xs: &Array1<A>) -> Result<ArrayD<A>, InterpolateError> {
        let mut shape = self.data.shape().to_vec();
        shape[self.axis] = xs.len();
        let mut ys = ArrayD::zeros(shape);
        for (index, &x) in xs.iter().enumerate() {
            let target = ys.index_axis_mut(Axis(self.axis), index);
            self.interp_into(x, target)?;
        }
        Ok(ys)
    }

    fn interp_into(
        &self,
        x: A,
        target: ArrayViewMut<'_, A, IxDyn>,
    ) -> Result<(), InterpolateError> {
        if !self.is_in_range(x) {
            if self.bounds_error {
                return Err(InterpolateError::OutOfBounds(format!(
                    "x = {x:#?} is not in range"
                )));
            }
            if let Fill::Value(value) = self.fill {
                target.into_iter().for_each(|y| *y = value);
                return Ok(());
            }
            // Fill::Extrapolate extends the edge segment
        }

        // find the relevant index
        let idx = self.x.get_lower_index(x);

        // lookup the data
        let (x1, y1) = self.index_point(idx);
        let (x2, y2) = self.index_point(idx + 1);

        // do interpolation
        Zip::from(target).and(y1).and(y2).for_each(|y, &y1, &y2| {
            *y = calc_frac((x1, y1), (x2, y2), x);
        });
        Ok(())
    }

    /// get `(x, data)` slice at given index along the interpolation axis
    ///
    /// # panics
    /// when index out of bounds
    fn index_point(&self, index: usize) -> (A, ndarray::ArrayView<'_, A, IxDyn>) {
        (self.x[index], self.data.index_axis(Axis(self.axis), index))
    }

    pub fn is_in_range(&self, x: A) -> bool {
        self.x[0] <= x && x <= self.x[self.x.len() - 1]
    }
}

/// linearly interpolate/extrapolate between two points
pub(crate) fn calc_frac<A: Float>((x1, y1): (A, A), (x2, y2): (A, A), x: A) -> A {
    let m = (y2 - y1) / (x2 - x1);
    m * (x - x1) + y1
}

/// Create and configure a [`Interp1D`] interpolator.
///
/// # Default configuration
/// The data is interpolated along axis 0, the index to the axis is used
/// as x values, out-of-domain queries are extrapolated.
#[derive(Debug)]
pub struct Interp1DBuilder<'a, A> {
    x: Option<ArrayView1<'a, A>>,
    data: CowArray<'a, A, IxDyn>,
    axis: usize,
    bounds_error: bool,
    fill: Fill<A>,
}

impl<'a, A> Interp1DBuilder<'a, A>
where
    A: Float + Debug,
{
    pub fn new(data: CowArray<'a, A, IxDyn>) -> Self {
        Interp1DBuilder {
            x: None,
            data,
            axis: 0,
            bounds_error: false,
            fill: Fill::Extrapolate,
        }
    }

    /// Add a custom x axis for the data. The vector needs to have the same
    /// length as the interpolation axis and must be strictly monotonic
    /// rising. If not set the index `0..len - 1` is used.
    pub fn x(mut self, x: ArrayView1<'a, A>) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the axis to interpolate along, default is `0`
    pub fn axis(mut self, axis: usize) -> Self {
        self.axis = axis;
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

    /// Validate the input data and create the configured [`Interp1D`]
    pub fn build(self) -> Result<Interp1D<'a, A>, BuilderError> {
        use Monotonic::*;

        let Interp1DBuilder {
            x,
            data,
            axis,
            bounds_error,
            fill,
        } = self;

        if data.ndim() < 1 {
            return Err(BuilderError::ShapeError(
                "data dimension is 0, needs to be at least 1".into(),
            ));
        }
        if axis >= data.ndim() {
            return Err(BuilderError::ShapeError(format!(
                "axis {axis} is out of bounds for data with {} dimensions",
                data.ndim(),
            )));
        }
        let len = data.shape()[axis];
        if len < 2 {
            return Err(BuilderError::NotEnoughData(format!(
                "linear interpolation needs at least 2 points along the axis, got {len}"
            )));
        }

        let x: CowArray<'a, A, Ix1> = match x {
            Some(x) => x.into(),
            None => Array::from_iter((0..len).map(|n| {
                cast(n).unwrap_or_else(|| {
                    unimplemented!("casting from usize to a number should always work")
                })
            }))
            .into(),
        };

        if !matches!(x.monotonic_prop(), Rising { strict: true }) {
            return Err(BuilderError::Monotonic(
                "values in the x axis need to be strictly monotonic rising".into(),
            ));
        }
        if x.len() != len {
            return Err(BuilderError::ShapeError(format!(
                "lengths of x and the interpolation axis need to match. Got x: {:}, data: {:}",
                x.len(),
                len,
            )));
        }

        Ok(Interp1D {
            x,
            data,
            axis,
            bounds_error,
            fill,
        })
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::Interp1D;
    use crate::{BuilderError, Fill, InterpolateError};

    #[test]
    fn interp_along_first_axis() {
        let interp = Interp1D::builder(array![10.0, 20.0, 30.0].into_dyn())
            .build()
            .unwrap();
        let result = interp
            .interp_array(&array![0.0, 0.5, 1.0, 1.5, 2.0])
            .unwrap();
        assert_eq!(result, array![10.0, 15.0, 20.0, 25.0, 30.0].into_dyn());
    }

    #[test]
    fn interp_along_inner_axis() {
        let data = array![[0.0, 2.0, 4.0], [1.0, 3.0, 5.0]].into_dyn();
        let x = array![0.0, 1.0, 2.0];
        let interp = Interp1D::builder(data).x(x.view()).axis(1).build().unwrap();
        let result = interp.interp_array(&array![0.5, 1.5]).unwrap();
        assert_eq!(result, array![[1.0, 3.0], [2.0, 4.0]].into_dyn());
    }

    #[test]
    fn extrapolates_by_default() {
        let data = array![0.0, 10.0].into_dyn();
        let x = array![0.0, 1.0];
        let interp = Interp1D::builder(data).x(x.view()).build().unwrap();
        let result = interp.interp_array(&array![-1.0, 2.0]).unwrap();
        assert_eq!(result, array![-10.0, 20.0].into_dyn());
    }

    #[test]
    fn fill_value_outside_domain() {
        let data = array![0.0, 10.0].into_dyn();
        let x = array![0.0, 1.0];
        let interp = Interp1D::builder(data)
            .x(x.view())
            .fill(Fill::Value(f64::NAN))
            .build()
            .unwrap();
        let result = interp.interp_array(&array![-1.0, 0.5, 2.0]).unwrap();
        assert!(result[[0]].is_nan());
        assert_eq!(result[[1]], 5.0);
        assert!(result[[2]].is_nan());
    }

    #[test]
    fn bounds_error_outside_domain() {
        let data = array![0.0, 10.0].into_dyn();
        let x = array![0.0, 1.0];
        let interp = Interp1D::builder(data)
            .x(x.view())
            .bounds_error(true)
            .build()
            .unwrap();
        assert!(matches!(
            interp.interp_array(&array![2.0]),
            Err(InterpolateError::OutOfBounds(_))
        ));
    }

    #[test]
    fn rejects_single_sample() {
        let result = Interp1D::builder(array![1.0].into_dyn()).build();
        assert!(matches!(result, Err(BuilderError::NotEnoughData(_))));
    }

    #[test]
    fn rejects_unsorted_x() {
        let data = array![0.0, 1.0, 2.0].into_dyn();
        let x = array![0.0, 2.0, 1.0];
        let result = Interp1D::builder(data).x(x.view()).build();
        assert!(matches!(result, Err(BuilderError::Monotonic(_))));
    }
}
