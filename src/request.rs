use ndarray::Array1;

use crate::InterpolateError;

/// What to return for query points outside the data domain
/// when `bounds_error` is not set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill<A> {
    /// extend the edge segment linearly beyond the domain
    Extrapolate,
    /// a constant value
    Value(A),
}

/// An interpolation request against named axes.
///
/// The request maps axis names to new sample vectors. The key order is
/// significant: the axes of the interpolated array follow the order in
/// which `axis` was called. Naming the same axis twice replaces the
/// samples without changing its position.
///
/// ```rust
/// # use labeled_interp::InterpRequest;
/// # use ndarray::array;
/// let request = InterpRequest::new()
///     .axis("t", array![0.0, 0.5, 1.0])
///     .bounds_error(true);
/// assert_eq!(request.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InterpRequest<A> {
    pub(crate) axes: Vec<(String, Array1<A>)>,
    pub(crate) bounds_error: bool,
    pub(crate) fill: Fill<A>,
    pub(crate) extend_dims: bool,
    pub(crate) repeat: bool,
}

impl<A> InterpRequest<A> {
    pub fn new() -> Self {
        InterpRequest {
            axes: Vec::new(),
            bounds_error: false,
            fill: Fill::Extrapolate,
            extend_dims: true,
            repeat: true,
        }
    }

    /// Add new samples for a named axis. The axis does not need to exist
    /// on the array as long as broadcasting onto it is allowed.
    pub fn axis(mut self, name: impl Into<String>, samples: Array1<A>) -> Self {
        let name = name.into();
        match self.axes.iter().position(|(n, _)| *n == name) {
            Some(index) => self.axes[index].1 = samples,
            None => self.axes.push((name, samples)),
        }
        self
    }

    /// Error on out-of-domain queries instead of filling, default is `false`
    pub fn bounds_error(mut self, bounds_error: bool) -> Self {
        self.bounds_error = bounds_error;
        self
    }

    /// Set the out-of-domain behavior, default is [`Fill::Extrapolate`].
    /// Only relevant when `bounds_error` is not set.
    pub fn fill(mut self, fill: Fill<A>) -> Self {
        self.fill = fill;
        self
    }

    /// Allow broadcasting onto axes the data does not have, default is `true`
    pub fn extend_dims(mut self, extend_dims: bool) -> Self {
        self.extend_dims = extend_dims;
        self
    }

    /// Replicate instead of interpolate when a single requested axis has
    /// extent 1, default is `true`
    pub fn repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// The number of axes named by the request
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Array1<A>> {
        self.axes.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.axes.iter().map(|(n, _)| n.clone()).collect()
    }

    pub(crate) fn single_axis(&self) -> Result<(&str, &Array1<A>), InterpolateError> {
        match self.axes.as_slice() {
            [(name, samples)] => Ok((name.as_str(), samples)),
            [] => Err(InterpolateError::Configuration(
                "the request names no axes".into(),
            )),
            _ => Err(InterpolateError::Configuration(format!(
                "expected exactly one axis, got {}",
                self.axes.len()
            ))),
        }
    }
}

impl<A> Default for InterpRequest<A> {
    fn default() -> Self {
        Self::new()
    }
}
