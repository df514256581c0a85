//! The `NArray` type: a dense, fixed-shape multidimensional array of `f64`.
//!
//! Storage is one exclusively-owned contiguous buffer in row-major order
//! (last axis fastest). Strides are always the canonical row-major strides
//! for the shape; permuted or non-contiguous layouts are not representable.

use crate::{ArrayError, Result};

/// A dense multidimensional array of `f64` values.
///
/// The shape is fixed at construction and the buffer is never resized.
/// A rank-0 array is a scalar holding exactly one value.
///
/// # Example
/// ```
/// use narray::NArray;
///
/// let mut a = NArray::zeros(&[2, 3]);
/// a.set(&[1, 2], 7.0);
/// assert_eq!(a.at(&[1, 2]), 7.0);
/// assert_eq!(a.rank(), 2);
/// assert_eq!(a.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NArray {
    shape: Vec<usize>,
    strides: Vec<usize>,
    data: Vec<f64>,
}

/// Canonical row-major strides for a shape: the last axis has stride 1 and
/// each earlier axis has stride `shape[i + 1] * strides[i + 1]`.
pub(crate) fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

impl NArray {
    /// Create a zero-filled array with the given shape.
    ///
    /// An empty shape yields a rank-0 scalar holding `0.0`. Zero-sized
    /// dimensions are permitted and yield an empty buffer.
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, 0.0)
    }

    /// Create an array with every element set to `v`.
    pub fn from_elem(shape: &[usize], v: f64) -> Self {
        let size: usize = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            strides: row_major_strides(shape),
            data: vec![v; size],
        }
    }

    /// Create a rank-0 scalar array holding `v`.
    pub fn scalar(v: f64) -> Self {
        Self::from_elem(&[], v)
    }

    /// Create an array by evaluating `f` at every coordinate tuple, in
    /// row-major order.
    pub fn from_fn(shape: &[usize], mut f: impl FnMut(&[usize]) -> f64) -> Self {
        let size: usize = shape.iter().product();
        let mut data = Vec::with_capacity(size);
        let mut idx = vec![0usize; shape.len()];
        for _ in 0..size {
            data.push(f(&idx));
            // Row-major odometer: advance the last axis first.
            for k in (0..shape.len()).rev() {
                idx[k] += 1;
                if idx[k] < shape[k] {
                    break;
                }
                idx[k] = 0;
            }
        }
        Self {
            shape: shape.to_vec(),
            strides: row_major_strides(shape),
            data,
        }
    }

    /// Create an array from an existing row-major buffer.
    ///
    /// # Errors
    /// Returns [`ArrayError::LengthMismatch`] if `data.len()` differs from
    /// the product of `shape`.
    pub fn from_vec(shape: &[usize], data: Vec<f64>) -> Result<Self> {
        let size: usize = shape.iter().product();
        if data.len() != size {
            return Err(ArrayError::LengthMismatch {
                len: data.len(),
                shape: shape.to_vec(),
            });
        }
        Ok(Self {
            shape: shape.to_vec(),
            strides: row_major_strides(shape),
            data,
        })
    }

    /// Number of dimensions (0 for a scalar array).
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Size of each dimension.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Canonical row-major strides.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of elements (1 for a scalar array).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when some dimension has size zero and the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flat row-major buffer.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the flat row-major buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// True when `other` has the same shape.
    #[inline]
    pub fn same_shape(&self, other: &NArray) -> bool {
        self.shape == other.shape
    }

    /// Linear offset of a coordinate tuple: the dot product with `strides`.
    ///
    /// This is the unchecked hot path. The caller must pass exactly
    /// [`rank`](Self::rank) coordinates, each within its axis; violations
    /// are caught only by `debug_assert!`.
    #[inline]
    pub fn offset(&self, indices: &[usize]) -> usize {
        debug_assert_eq!(indices.len(), self.rank(), "index arity mismatch");
        let mut off = 0;
        for (k, &i) in indices.iter().enumerate() {
            debug_assert!(i < self.shape[k], "index out of bounds");
            off += i * self.strides[k];
        }
        off
    }

    /// Coordinate tuple of a linear offset: the inverse of [`offset`](Self::offset),
    /// computed by successive division by the trailing-dimension volume
    /// (which is exactly the stride of each axis).
    ///
    /// The caller must pass an offset below [`len`](Self::len); violations
    /// are caught only by `debug_assert!`.
    #[inline]
    pub fn coords(&self, offset: usize) -> Vec<usize> {
        debug_assert!(offset < self.data.len(), "offset out of bounds");
        let mut idx = vec![0usize; self.rank()];
        let mut rem = offset;
        for (k, &s) in self.strides.iter().enumerate() {
            idx[k] = rem / s;
            rem %= s;
        }
        idx
    }

    /// Get the element at the given coordinates.
    ///
    /// # Panics
    /// Panics if the coordinate count differs from the rank or any
    /// coordinate is out of range.
    #[inline]
    pub fn at(&self, indices: &[usize]) -> f64 {
        self.check_indices(indices);
        self.data[self.offset(indices)]
    }

    /// Get the element at the given coordinates without bounds checking.
    ///
    /// # Safety
    /// The caller must pass exactly `rank` coordinates, each within its axis.
    #[inline]
    pub unsafe fn at_unchecked(&self, indices: &[usize]) -> f64 {
        *self.data.get_unchecked(self.offset(indices))
    }

    /// Set the element at the given coordinates.
    ///
    /// # Panics
    /// Panics if the coordinate count differs from the rank or any
    /// coordinate is out of range.
    #[inline]
    pub fn set(&mut self, indices: &[usize], value: f64) {
        self.check_indices(indices);
        let off = self.offset(indices);
        self.data[off] = value;
    }

    /// Set the element at the given coordinates without bounds checking.
    ///
    /// # Safety
    /// The caller must pass exactly `rank` coordinates, each within its axis.
    #[inline]
    pub unsafe fn set_unchecked(&mut self, indices: &[usize], value: f64) {
        let off = self.offset(indices);
        *self.data.get_unchecked_mut(off) = value;
    }

    /// Add `delta` to the element at the given coordinates.
    ///
    /// Fused read-add-write: the offset is computed once.
    ///
    /// # Panics
    /// Panics if the coordinate count differs from the rank or any
    /// coordinate is out of range.
    #[inline]
    pub fn inc(&mut self, indices: &[usize], delta: f64) {
        self.check_indices(indices);
        let off = self.offset(indices);
        self.data[off] += delta;
    }

    /// Overwrite the element at the given coordinates with `v` only if `v`
    /// is greater than the current value.
    ///
    /// # Panics
    /// Panics if the coordinate count differs from the rank or any
    /// coordinate is out of range.
    #[inline]
    pub fn max_elem(&mut self, indices: &[usize], v: f64) {
        self.check_indices(indices);
        let off = self.offset(indices);
        if v > self.data[off] {
            self.data[off] = v;
        }
    }

    /// Overwrite the element at the given coordinates with `v` only if `v`
    /// is less than the current value.
    ///
    /// # Panics
    /// Panics if the coordinate count differs from the rank or any
    /// coordinate is out of range.
    #[inline]
    pub fn min_elem(&mut self, indices: &[usize], v: f64) {
        self.check_indices(indices);
        let off = self.offset(indices);
        if v < self.data[off] {
            self.data[off] = v;
        }
    }

    /// Fill the entire buffer with `v`.
    pub fn fill(&mut self, v: f64) {
        self.data.fill(v);
    }

    /// Compare against `other` element by element within tolerance `tol`
    /// (`tol == 0.0` compares exactly). Shapes must match; NaN elements
    /// never compare equal.
    pub fn equal_values(&self, other: &NArray, tol: f64) -> bool {
        if !self.same_shape(other) {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= tol)
    }

    #[inline]
    fn check_indices(&self, indices: &[usize]) {
        assert!(indices.len() == self.rank(), "index arity mismatch");
        for (k, &i) in indices.iter().enumerate() {
            assert!(i < self.shape[k], "index out of bounds");
        }
    }
}
