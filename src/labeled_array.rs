use std::fmt::Debug;

use ndarray::{Array1, ArrayD, Axis, Zip};
use num_complex::Complex;
use num_traits::Float;

use crate::vector_extensions::{Monotonic, VectorExtensions};
use crate::BuilderError;

/// An _n_-dimensional array with named axes and one coordinate vector
/// per axis.
///
/// `T` is the data element, `A` the coordinate element. For real valued
/// data both are the same float type; complex data uses
/// `LabeledArray<Complex<A>, A>` with real coordinates.
///
/// No operation mutates the array, every result is freshly constructed.
///
/// ```rust
/// # use labeled_interp::LabeledArray;
/// # use ndarray::array;
/// let array = LabeledArray::new(
///     array![[1.0, 2.0], [3.0, 4.0]].into_dyn(),
///     [("x", array![0.0, 1.0]), ("y", array![10.0, 20.0])],
/// ).unwrap();
/// assert_eq!(array.dims(), ["x", "y"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArray<T, A = f64> {
    pub(crate) data: ArrayD<T>,
    pub(crate) dims: Vec<String>,
    pub(crate) coords: Vec<Array1<A>>,
}

impl<T, A> LabeledArray<T, A>
where
    T: Clone,
    A: Float + Debug,
{
    /// Validate the axes and create a new [`LabeledArray`].
    ///
    /// Each axis name pairs with the coordinate vector of that axis, in the
    /// order of the data dimensions. Coordinates must be strictly monotonic
    /// rising and match the extent of their axis; axis names must be unique.
    pub fn new<I, S>(data: ArrayD<T>, axes: I) -> Result<Self, BuilderError>
    where
        I: IntoIterator<Item = (S, Array1<A>)>,
        S: Into<String>,
    {
        use Monotonic::*;

        let (dims, coords): (Vec<String>, Vec<Array1<A>>) =
            axes.into_iter().map(|(n, c)| (n.into(), c)).unzip();

        if dims.len() != data.ndim() {
            return Err(BuilderError::ShapeError(format!(
                "got {} axis names for data with {} dimensions",
                dims.len(),
                data.ndim(),
            )));
        }
        for (ax, (name, coord)) in dims.iter().zip(coords.iter()).enumerate() {
            if coord.len() != data.shape()[ax] {
                return Err(BuilderError::ShapeError(format!(
                    "axis {name:?} has {} coordinates for {} data points",
                    coord.len(),
                    data.shape()[ax],
                )));
            }
            if !matches!(coord.monotonic_prop(), Rising { strict: true }) {
                return Err(BuilderError::Monotonic(format!(
                    "coordinates of axis {name:?} need to be strictly monotonic rising"
                )));
            }
        }
        for (i, name) in dims.iter().enumerate() {
            if dims[..i].contains(name) {
                return Err(BuilderError::ShapeError(format!(
                    "duplicate axis name {name:?}"
                )));
            }
        }

        Ok(LabeledArray { data, dims, coords })
    }

    /// Create a [`LabeledArray`] without any data validation.
    /// This is fast and cheap.
    ///
    /// The following properties are assumed, but not checked:
    ///  - `dims` and `coords` have one entry per data dimension
    ///  - `coords[i].len() == data.shape()[i]`
    ///  - every coordinate vector is strictly monotonic rising
    ///  - axis names are unique
    pub fn new_unchecked(data: ArrayD<T>, dims: Vec<String>, coords: Vec<Array1<A>>) -> Self {
        LabeledArray { data, dims, coords }
    }

    /// The data buffer
    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    /// The axis names in data order
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// The extent of every axis
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// The coordinate vectors in data order
    pub fn coords(&self) -> &[Array1<A>] {
        &self.coords
    }

    /// The coordinate vector of a named axis
    pub fn coord_of(&self, name: &str) -> Option<&Array1<A>> {
        self.axis_index(name).map(|ax| &self.coords[ax])
    }

    /// The position of a named axis
    pub fn axis_index(&self, name: &str) -> Option<usize> {
        self.dims.iter().position(|dim| dim == name)
    }

    /// Drop all axes of extent 1 together with their names and coordinates
    pub fn squeeze(&self) -> Self {
        let mut view = self.data.view();
        for ax in (0..self.data.ndim()).rev() {
            if self.data.shape()[ax] == 1 {
                view = view.index_axis_move(Axis(ax), 0);
            }
        }
        let (dims, coords) = self
            .dims
            .iter()
            .zip(self.coords.iter())
            .zip(self.data.shape())
            .filter(|(_, &extent)| extent != 1)
            .map(|((dim, coord), _)| (dim.clone(), coord.clone()))
            .unzip();
        LabeledArray {
            data: view.to_owned(),
            dims,
            coords,
        }
    }
}

impl<A> LabeledArray<Complex<A>, A>
where
    A: Float + Debug,
{
    /// The real part of the data with the same axes
    pub fn real(&self) -> LabeledArray<A, A> {
        LabeledArray {
            data: self.data.mapv(|value| value.re),
            dims: self.dims.clone(),
            coords: self.coords.clone(),
        }
    }

    /// The imaginary part of the data with the same axes
    pub fn imag(&self) -> LabeledArray<A, A> {
        LabeledArray {
            data: self.data.mapv(|value| value.im),
            dims: self.dims.clone(),
            coords: self.coords.clone(),
        }
    }

    /// Recombine a real and an imaginary part as `re + i*im`.
    /// Both parts must have identical axes.
    pub(crate) fn from_parts(re: LabeledArray<A, A>, im: &LabeledArray<A, A>) -> Self {
        let data = Zip::from(&re.data)
            .and(&im.data)
            .map_collect(|&re, &im| Complex::new(re, im));
        LabeledArray {
            data,
            dims: re.dims,
            coords: re.coords,
        }
    }
}
