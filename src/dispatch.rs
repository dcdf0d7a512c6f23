//! Execution of interpolation requests against labeled arrays.
//!
//! Requests naming a single axis take the one dimensional strategy, all
//! other requests are reconciled against the squeezed data axes and take
//! the regular grid strategy, possibly followed by broadcasting onto axes
//! the data does not have. Whatever axis order is used internally, the
//! result always carries the axes in the order of the request keys.

use std::fmt::Debug;

use ndarray::{indices, Array1, Array2, ArrayD, Dimension, IxDyn};
use num_complex::Complex;
use num_traits::Float;

use crate::interp1d::Interp1D;
use crate::interpnd::InterpND;
use crate::labeled_array::LabeledArray;
use crate::reconcile::{self, AxisRelation};
use crate::request::InterpRequest;
use crate::InterpolateError;

impl<A> LabeledArray<A, A>
where
    A: Float + Debug,
{
    /// Interpolate along a single named axis.
    ///
    /// The request must name exactly one axis and the axis must exist on
    /// the array. All other axes pass through unchanged. When the axis has
    /// extent 1 and `repeat` is set the single slice is replicated across
    /// the new samples instead of interpolated.
    ///
    /// ```rust
    /// # use labeled_interp::{LabeledArray, InterpRequest};
    /// # use ndarray::array;
    /// let array = LabeledArray::new(
    ///     array![10.0, 20.0, 30.0].into_dyn(),
    ///     [("t", array![0.0, 1.0, 2.0])],
    /// ).unwrap();
    ///
    /// let request = InterpRequest::new().axis("t", array![0.0, 0.5, 1.0, 1.5, 2.0]);
    /// let result = array.interp1d(&request).unwrap();
    /// assert_eq!(result.data(), &array![10.0, 15.0, 20.0, 25.0, 30.0].into_dyn());
    /// ```
    pub fn interp1d(&self, request: &InterpRequest<A>) -> Result<Self, InterpolateError> {
        let (name, samples) = request.single_axis()?;
        let axis = self.axis_index(name).ok_or_else(|| {
            InterpolateError::AxisNotFound(format!(
                "axis {name:?} does not exist, available axes: {:?}",
                self.dims,
            ))
        })?;

        let data = if request.repeat && self.data.shape()[axis] == 1 {
            // replicate the single slice instead of interpolating
            let mut shape = self.data.shape().to_vec();
            shape[axis] = samples.len();
            broadcast_to(&self.data, &shape)
        } else {
            Interp1D::builder(self.data.view())
                .x(self.coords[axis].view())
                .axis(axis)
                .bounds_error(request.bounds_error)
                .fill(request.fill)
                .build()?
                .interp_array(samples)?
        };

        let mut coords = self.coords.clone();
        coords[axis] = samples.clone();
        Ok(LabeledArray::new_unchecked(data, self.dims.clone(), coords))
    }

    /// Interpolate along one or more named axes at once.
    ///
    /// Singleton axes of the array never interpolate, they only broadcast.
    /// Axes named by the request but absent from the data become new
    /// broadcast axes as long as `extend_dims` is set. The axes of the
    /// result follow the key order of the request.
    ///
    /// ```rust
    /// # use labeled_interp::{LabeledArray, InterpRequest};
    /// # use ndarray::array;
    /// let array = LabeledArray::new(
    ///     array![[0.0, 1.0], [2.0, 3.0]].into_dyn(),
    ///     [("x", array![0.0, 1.0]), ("y", array![0.0, 1.0])],
    /// ).unwrap();
    ///
    /// let request = InterpRequest::new()
    ///     .axis("x", array![0.0, 0.5, 1.0])
    ///     .axis("y", array![0.0, 1.0]);
    /// let result = array.interpn(&request).unwrap();
    /// assert_eq!(
    ///     result.data(),
    ///     &array![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]].into_dyn(),
    /// );
    /// ```
    pub fn interpn(&self, request: &InterpRequest<A>) -> Result<Self, InterpolateError> {
        // singleton axes cannot be interpolated, they are dropped here and
        // come back as extension axes when the request names them
        let squeezed = self.squeeze();
        let order = request.names();
        let plan = reconcile::plan(&squeezed.dims, &order, request.extend_dims)?;

        let data = match plan.relation {
            AxisRelation::FullyCollapsed => {
                // nothing left to interpolate, broadcast the scalar
                let shape: Vec<usize> = request.axes.iter().map(|(_, v)| v.len()).collect();
                broadcast_to(&squeezed.data, &shape)
            }
            AxisRelation::ExactMatch => {
                let grid = interp_grid(&squeezed, request)?;
                transpose_to(grid, &squeezed.dims, &plan.interp_axes)
            }
            AxisRelation::Superset => {
                let grid = interp_grid(&squeezed, request)?;
                let grid = transpose_to(grid, &squeezed.dims, &plan.interp_axes);

                // new axes broadcast as leading dimensions, transposing
                // into the request order happens afterwards
                let mut shape: Vec<usize> = plan
                    .extend_axes
                    .iter()
                    .map(|name| request.get(name).unwrap_or_else(|| unreachable!()).len())
                    .collect();
                shape.extend_from_slice(grid.shape());
                let extended = broadcast_to(&grid, &shape);

                let mut current = plan.extend_axes.clone();
                current.extend(plan.interp_axes.iter().cloned());
                transpose_to(extended, &current, &order)
            }
            AxisRelation::Subset => unreachable!("refused by the plan"),
        };

        let (dims, coords) = request
            .axes
            .iter()
            .map(|(name, samples)| (name.clone(), samples.clone()))
            .unzip();
        Ok(LabeledArray::new_unchecked(data, dims, coords))
    }

    /// Interpolate with the strategy chosen from the request: a request
    /// naming exactly one axis takes [`interp1d`](LabeledArray::interp1d),
    /// everything else takes [`interpn`](LabeledArray::interpn).
    pub fn smart(&self, request: &InterpRequest<A>) -> Result<Self, InterpolateError> {
        if request.len() == 1 {
            self.interp1d(request)
        } else {
            self.interpn(request)
        }
    }
}

impl<A> LabeledArray<Complex<A>, A>
where
    A: Float + Debug,
{
    /// The complex counterpart of `interp1d`: the real and the imaginary
    /// part are interpolated independently and recombined as `re + i*im`.
    pub fn interp1d(&self, request: &InterpRequest<A>) -> Result<Self, InterpolateError> {
        self.interp_parts(|part| part.interp1d(request))
    }

    /// The complex counterpart of `interpn`
    pub fn interpn(&self, request: &InterpRequest<A>) -> Result<Self, InterpolateError> {
        self.interp_parts(|part| part.interpn(request))
    }

    /// The complex counterpart of `smart`
    pub fn smart(&self, request: &InterpRequest<A>) -> Result<Self, InterpolateError> {
        self.interp_parts(|part| part.smart(request))
    }

    /// Run the real and the imaginary part through the same operation
    /// with identical options
    fn interp_parts<F>(&self, interp: F) -> Result<Self, InterpolateError>
    where
        F: Fn(&LabeledArray<A, A>) -> Result<LabeledArray<A, A>, InterpolateError>,
    {
        let re = interp(&self.real())?;
        let im = interp(&self.imag())?;
        Ok(LabeledArray::from_parts(re, &im))
    }
}

/// Interpolate over the full cartesian grid of the requested samples.
///
/// The query grid and the result follow the order of the data axes, the
/// caller transposes into the request order afterwards.
fn interp_grid<A>(
    array: &LabeledArray<A, A>,
    request: &InterpRequest<A>,
) -> Result<ArrayD<A>, InterpolateError>
where
    A: Float + Debug,
{
    let samples: Vec<&Array1<A>> = array
        .dims
        .iter()
        .map(|name| request.get(name).unwrap_or_else(|| unreachable!()))
        .collect();
    let shape: Vec<usize> = samples.iter().map(|s| s.len()).collect();
    let count = shape.iter().product();

    let mut queries = Array2::zeros((count, shape.len()));
    for (mut query, index) in queries.rows_mut().into_iter().zip(indices(IxDyn(&shape))) {
        for (axis, &i) in index.slice().iter().enumerate() {
            query[axis] = samples[axis][i];
        }
    }

    let flat = InterpND::builder(array.data.view())
        .points(array.coords.iter().map(|c| c.view()).collect())
        .bounds_error(request.bounds_error)
        .fill(request.fill)
        .build()?
        .interp_points(queries.view())?;

    Ok(flat
        .into_shape_with_order(IxDyn(&shape))
        .unwrap_or_else(|_| unreachable!()))
}

/// Broadcast to a shape that only adds leading axes or widens axes
/// of extent 1
fn broadcast_to<A>(data: &ArrayD<A>, shape: &[usize]) -> ArrayD<A>
where
    A: Clone,
{
    data.broadcast(IxDyn(shape))
        .unwrap_or_else(|| unreachable!())
        .to_owned()
}

/// Permute the axes from the `current` into the `target` order
fn transpose_to<A>(data: ArrayD<A>, current: &[String], target: &[String]) -> ArrayD<A>
where
    A: Clone,
{
    let permutation: Vec<usize> = target
        .iter()
        .map(|name| {
            current
                .iter()
                .position(|dim| dim == name)
                .unwrap_or_else(|| unreachable!())
        })
        .collect();
    data.permuted_axes(IxDyn(&permutation))
        .as_standard_layout()
        .to_owned()
}
