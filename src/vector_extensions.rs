//! This module contains the vector extensions trait

use ndarray::{ArrayBase, Data, Ix1};

pub trait VectorExtensions<T> {
    /// get the monotonic property of the vector
    fn monotonic_prop(&self) -> Monotonic;

    /// The index of the sample left of, or at, `x`.
    ///
    /// This will never return the right most index,
    /// so looking up `index + 1` is always safe.
    ///
    /// The values must be strictly monotonic rising and
    /// there must be at least two of them.
    fn get_lower_index(&self, x: T) -> usize;
}

/// Describes the monotonic property of a vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonic {
    Rising { strict: bool },
    Falling { strict: bool },
    NotMonotonic,
}

impl<S, T> VectorExtensions<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
    T: PartialOrd + Copy,
{
    fn monotonic_prop(&self) -> Monotonic {
        if self.len() < 2 {
            return Monotonic::Rising { strict: true };
        }

        let mut rising = true;
        let mut strict_rising = true;
        let mut falling = true;
        let mut strict_falling = true;

        for win in self.windows(2) {
            let (left, right) = (win[0], win[1]);
            if left < right {
                falling = false;
                strict_falling = false;
            } else if left > right {
                rising = false;
                strict_rising = false;
            } else {
                strict_rising = false;
                strict_falling = false;
            }
        }

        if rising {
            Monotonic::Rising {
                strict: strict_rising,
            }
        } else if falling {
            Monotonic::Falling {
                strict: strict_falling,
            }
        } else {
            Monotonic::NotMonotonic
        }
    }

    fn get_lower_index(&self, x: T) -> usize {
        // bisection over the sample intervals
        let mut lo = 0usize;
        let mut hi = self.len() - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self[mid] <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::Monotonic::*;
    use super::VectorExtensions;

    #[test]
    fn monotonic_classification() {
        assert_eq!(array![1.0, 2.0, 3.0].monotonic_prop(), Rising { strict: true });
        assert_eq!(array![1.0, 1.0, 3.0].monotonic_prop(), Rising { strict: false });
        assert_eq!(array![3.0, 2.0, 1.0].monotonic_prop(), Falling { strict: true });
        assert_eq!(array![3.0, 3.0, 1.0].monotonic_prop(), Falling { strict: false });
        assert_eq!(array![1.0, 3.0, 2.0].monotonic_prop(), NotMonotonic);
        assert_eq!(array![1.0].monotonic_prop(), Rising { strict: true });
    }

    #[test]
    fn lower_index() {
        let x = array![0.0, 1.0, 2.0, 3.0];
        assert_eq!(x.get_lower_index(0.0), 0);
        assert_eq!(x.get_lower_index(0.5), 0);
        assert_eq!(x.get_lower_index(1.0), 1);
        assert_eq!(x.get_lower_index(2.5), 2);
        assert_eq!(x.get_lower_index(3.0), 2);
        // outside the domain the edge interval is returned
        assert_eq!(x.get_lower_index(-1.0), 0);
        assert_eq!(x.get_lower_index(9.0), 2);
    }
}
