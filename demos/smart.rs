use labeled_interp::{InterpRequest, LabeledArray};
use ndarray::array;

fn main() {
    // a small gain map over frequency, with a singleton temperature axis
    let gain = LabeledArray::new(
        array![[1.0], [4.0], [9.0]].into_dyn(),
        [
            ("freq", array![1.0e3, 2.0e3, 3.0e3]),
            ("temp", array![25.0]),
        ],
    )
    .unwrap();

    // resample the frequency axis and broadcast over three temperatures
    let request = InterpRequest::new()
        .axis("freq", array![1.0e3, 1.5e3, 2.0e3, 2.5e3, 3.0e3])
        .axis("temp", array![0.0, 25.0, 50.0]);

    let resampled = gain.smart(&request).unwrap();
    println!("axes:  {:?}", resampled.dims());
    println!("shape: {:?}", resampled.shape());
    println!("data:\n{:?}", resampled.data());
}
