// this covers the repeat shortcut and the pass-through of
// unrelated axes as well, because the 1d path is responsible
// for both

use approx::assert_abs_diff_eq;
use ndarray::array;
use num_complex::Complex;

use labeled_interp::{BuilderError, Fill, InterpRequest, InterpolateError, LabeledArray};

#[test]
fn interp_single_axis() {
    let array = LabeledArray::new(
        array![10.0, 20.0, 30.0].into_dyn(),
        [("t", array![0.0, 1.0, 2.0])],
    )
    .unwrap();

    let request = InterpRequest::new().axis("t", array![0.0, 0.5, 1.0, 1.5, 2.0]);
    let result = array.interp1d(&request).unwrap();

    assert_eq!(result.dims(), ["t"]);
    assert_eq!(
        result.data(),
        &array![10.0, 15.0, 20.0, 25.0, 30.0].into_dyn()
    );
    assert_eq!(
        result.coord_of("t").unwrap(),
        &array![0.0, 0.5, 1.0, 1.5, 2.0]
    );
}

#[test]
fn other_axes_pass_through() {
    let array = LabeledArray::new(
        array![[1.0, 2.0, 3.0], [3.0, 4.0, 5.0]].into_dyn(),
        [("t", array![0.0, 1.0]), ("ch", array![0.0, 1.0, 2.0])],
    )
    .unwrap();

    let request = InterpRequest::new().axis("t", array![0.5]);
    let result = array.interp1d(&request).unwrap();

    assert_eq!(result.dims(), ["t", "ch"]);
    assert_eq!(result.data(), &array![[2.0, 3.0, 4.0]].into_dyn());
    // untouched axes keep their coordinates
    assert_eq!(result.coord_of("ch").unwrap(), &array![0.0, 1.0, 2.0]);
}

#[test]
fn repeat_replicates_singleton_axis() {
    let array = LabeledArray::new(array![5.0].into_dyn(), [("x", array![0.0])]).unwrap();

    let request = InterpRequest::new().axis("x", array![0.0, 1.0, 2.0, 3.0]);
    let result = array.interp1d(&request).unwrap();

    assert_eq!(result.data(), &array![5.0, 5.0, 5.0, 5.0].into_dyn());
    assert_eq!(result.coord_of("x").unwrap(), &array![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn repeat_keeps_slices_identical() {
    let array = LabeledArray::new(
        array![[1.25, 2.5]].into_dyn(),
        [("a", array![0.0]), ("x", array![0.0, 1.0])],
    )
    .unwrap();

    let request = InterpRequest::new().axis("a", array![0.0, 1.0, 2.0]);
    let result = array.interp1d(&request).unwrap();

    assert_eq!(result.dims(), ["a", "x"]);
    assert_eq!(
        result.data(),
        &array![[1.25, 2.5], [1.25, 2.5], [1.25, 2.5]].into_dyn()
    );
}

#[test]
fn singleton_axis_without_repeat() {
    let array = LabeledArray::new(array![5.0].into_dyn(), [("x", array![0.0])]).unwrap();

    let request = InterpRequest::new()
        .axis("x", array![0.0, 1.0])
        .repeat(false);
    assert!(matches!(
        array.interp1d(&request),
        Err(InterpolateError::Builder(BuilderError::NotEnoughData(_)))
    ));
}

#[test]
fn unknown_axis() {
    let array = LabeledArray::new(
        array![1.0, 2.0].into_dyn(),
        [("x", array![0.0, 1.0])],
    )
    .unwrap();

    let request = InterpRequest::new().axis("y", array![0.0, 1.0]);
    assert!(matches!(
        array.interp1d(&request),
        Err(InterpolateError::AxisNotFound(_))
    ));
}

#[test]
fn wrong_number_of_axes() {
    let array = LabeledArray::new(
        array![[1.0, 2.0], [3.0, 4.0]].into_dyn(),
        [("x", array![0.0, 1.0]), ("y", array![0.0, 1.0])],
    )
    .unwrap();

    let both = InterpRequest::new()
        .axis("x", array![0.5])
        .axis("y", array![0.5]);
    assert!(matches!(
        array.interp1d(&both),
        Err(InterpolateError::Configuration(_))
    ));

    let none = InterpRequest::<f64>::new();
    assert!(matches!(
        array.interp1d(&none),
        Err(InterpolateError::Configuration(_))
    ));
}

#[test]
fn extrapolates_by_default() {
    let array = LabeledArray::new(
        array![0.0, 10.0].into_dyn(),
        [("t", array![0.0, 1.0])],
    )
    .unwrap();

    let request = InterpRequest::new().axis("t", array![-1.0, 2.0]);
    let result = array.interp1d(&request).unwrap();
    assert_eq!(result.data(), &array![-10.0, 20.0].into_dyn());
}

#[test]
fn fill_value() {
    let array = LabeledArray::new(
        array![0.0, 10.0].into_dyn(),
        [("t", array![0.0, 1.0])],
    )
    .unwrap();

    let request = InterpRequest::new()
        .axis("t", array![-1.0, 0.5, 2.0])
        .fill(Fill::Value(0.0));
    let result = array.interp1d(&request).unwrap();
    assert_eq!(result.data(), &array![0.0, 5.0, 0.0].into_dyn());
}

#[test]
fn bounds_error() {
    let array = LabeledArray::new(
        array![0.0, 10.0].into_dyn(),
        [("t", array![0.0, 1.0])],
    )
    .unwrap();

    let request = InterpRequest::new()
        .axis("t", array![2.0])
        .bounds_error(true);
    assert!(matches!(
        array.interp1d(&request),
        Err(InterpolateError::OutOfBounds(_))
    ));
}

#[test]
fn complex_interpolates_both_parts() {
    let array = LabeledArray::new(
        array![
            Complex::new(1.0, 2.0),
            Complex::new(3.0, -1.0),
            Complex::new(5.0, 0.0),
        ]
        .into_dyn(),
        [("t", array![0.0, 1.0, 2.0])],
    )
    .unwrap();

    let request = InterpRequest::new().axis("t", array![0.5, 1.5]);
    let result = array.interp1d(&request).unwrap();

    let re = array.real().interp1d(&request).unwrap();
    let im = array.imag().interp1d(&request).unwrap();
    for (index, &value) in result.data().indexed_iter() {
        assert_abs_diff_eq!(value.re, re.data()[&index], epsilon = f64::EPSILON);
        assert_abs_diff_eq!(value.im, im.data()[&index], epsilon = f64::EPSILON);
    }

    assert_eq!(
        result.data(),
        &array![Complex::new(2.0, 0.5), Complex::new(4.0, -0.5)].into_dyn()
    );
}
