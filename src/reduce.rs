//! Whole-array reductions.
//!
//! `max`/`min`/`sum` route through [`ActiveKernels`]; the argmax/argmin scans
//! and `prod` are plain left-to-right folds (offset tracking and strict
//! ordering defeat vectorization anyway).

use crate::kernels::{ActiveKernels, Kernels};
use crate::NArray;

impl NArray {
    /// Largest element, `f64::NEG_INFINITY` for an empty array.
    ///
    /// Seeded with the infinite sentinel so the seed can never beat a real
    /// value, all-negative data included. NaN elements never win.
    pub fn max(&self) -> f64 {
        ActiveKernels::max_value(self.data())
    }

    /// Smallest element, `f64::INFINITY` for an empty array. NaN elements
    /// never win.
    pub fn min(&self) -> f64 {
        ActiveKernels::min_value(self.data())
    }

    /// Largest element together with its coordinates.
    ///
    /// Ties resolve to the first occurrence in row-major order (strict `>`
    /// comparison). For an empty array the value is `f64::NEG_INFINITY` and
    /// the coordinates are all zero.
    pub fn max_idx(&self) -> (f64, Vec<usize>) {
        let mut best = f64::NEG_INFINITY;
        let mut best_off = 0usize;
        for (off, &v) in self.data().iter().enumerate() {
            if v > best {
                best = v;
                best_off = off;
            }
        }
        if self.is_empty() {
            return (best, vec![0; self.rank()]);
        }
        (best, self.coords(best_off))
    }

    /// Smallest element together with its coordinates.
    ///
    /// Ties resolve to the first occurrence in row-major order (strict `<`
    /// comparison).
    pub fn min_idx(&self) -> (f64, Vec<usize>) {
        let mut best = f64::INFINITY;
        let mut best_off = 0usize;
        for (off, &v) in self.data().iter().enumerate() {
            if v < best {
                best = v;
                best_off = off;
            }
        }
        if self.is_empty() {
            return (best, vec![0; self.rank()]);
        }
        (best, self.coords(best_off))
    }

    /// Sum of all elements, 0.0 for an empty array.
    pub fn sum(&self) -> f64 {
        ActiveKernels::sum(self.data())
    }

    /// Product of all elements, 1.0 for an empty array. Left-to-right fold.
    pub fn prod(&self) -> f64 {
        self.data().iter().fold(1.0, |acc, &v| acc * v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_over_sparse_cells() {
        let mut a = NArray::zeros(&[3, 3]);
        a.set(&[1, 1], 1.0);
        a.set(&[1, 2], 2.0);
        a.set(&[2, 2], 3.0);
        assert_eq!(a.sum(), 6.0);
    }

    #[test]
    fn prod_over_row_major_values() {
        let a = NArray::from_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(a.prod(), 24.0);
    }

    #[test]
    fn max_idx_finds_injected_peak() {
        let mut a = NArray::from_fn(&[3, 5], |idx| (idx[0] * 5 + idx[1]) as f64 * 0.01);
        a.set(&[1, 1], 9999.0);
        let (v, idx) = a.max_idx();
        assert_eq!(v, 9999.0);
        assert_eq!(idx, vec![1, 1]);
    }

    #[test]
    fn max_of_all_negative_data() {
        let a = NArray::from_vec(&[4], vec![-5.0, -1.0, -3.0, -4.0]).unwrap();
        assert_eq!(a.max(), -1.0);
        let (v, idx) = a.max_idx();
        assert_eq!(v, -1.0);
        assert_eq!(idx, vec![1]);
    }

    #[test]
    fn min_idx_takes_first_occurrence_on_ties() {
        let a = NArray::from_vec(&[5], vec![2.0, -1.0, 3.0, -1.0, 0.0]).unwrap();
        let (v, idx) = a.min_idx();
        assert_eq!(v, -1.0);
        assert_eq!(idx, vec![1]);

        let b = NArray::from_vec(&[4], vec![7.0, 7.0, 7.0, 7.0]).unwrap();
        let (v, idx) = b.max_idx();
        assert_eq!(v, 7.0);
        assert_eq!(idx, vec![0]);
    }

    #[test]
    fn reductions_on_empty_arrays_return_identities() {
        let a = NArray::zeros(&[0, 3]);
        assert_eq!(a.sum(), 0.0);
        assert_eq!(a.prod(), 1.0);
        assert_eq!(a.max(), f64::NEG_INFINITY);
        assert_eq!(a.min(), f64::INFINITY);
    }

    #[test]
    fn nan_never_wins_a_scan() {
        let a = NArray::from_vec(&[3], vec![f64::NAN, 2.0, 1.0]).unwrap();
        assert_eq!(a.max(), 2.0);
        let (v, idx) = a.max_idx();
        assert_eq!(v, 2.0);
        assert_eq!(idx, vec![1]);
    }

    #[test]
    fn scalar_array_reductions() {
        let s = NArray::scalar(4.5);
        assert_eq!(s.max(), 4.5);
        assert_eq!(s.min_idx(), (4.5, vec![]));
        assert_eq!(s.sum(), 4.5);
        assert_eq!(s.prod(), 4.5);
    }
}
