//! Sub-array extraction: partial-dimension queries over an array.
//!
//! A query holds one entry per axis: a fixed non-negative coordinate pins
//! that axis, a negative sentinel ([`ALL`]) keeps it. Results are new owned
//! arrays; the source is never aliased.
//!
//! Ordering is the load-bearing invariant here: the output's linear order is
//! the row-major enumeration of the kept axes *in their original axis
//! order*. Which axes are wildcards decides the output shape; the axis order
//! decides the element order.

use crate::{ArrayError, NArray, Result};

/// Wildcard query entry: keep this axis. Any negative value works; this
/// constant just reads better.
pub const ALL: isize = -1;

impl NArray {
    /// Fix `axis` to `index` and flatten the remaining axes, in their
    /// original row-major order, into a rank-1 array.
    ///
    /// This is a strided gather, not a plain slice: unless `axis` is the
    /// last one, the kept elements form `stride`-sized contiguous runs
    /// `shape[axis] * stride` apart in the source.
    ///
    /// # Errors
    /// Fails on a rank-0 receiver, an axis outside the rank, or an index
    /// outside the axis.
    pub fn vector(&self, axis: usize, index: usize) -> Result<NArray> {
        if self.rank() == 0 {
            return Err(ArrayError::RankZero { op: "vector" });
        }
        if axis >= self.rank() {
            return Err(ArrayError::InvalidAxis {
                axis,
                rank: self.rank(),
            });
        }
        let axis_len = self.shape()[axis];
        if index >= axis_len {
            return Err(ArrayError::IndexOutOfBounds {
                axis,
                index,
                size: axis_len,
            });
        }

        let stride = self.strides()[axis];
        let out_len = self.len() / axis_len;
        let mut out = Vec::with_capacity(out_len);
        let hop = axis_len * stride;
        let mut src = index * stride;
        while out.len() < out_len {
            out.extend_from_slice(&self.data()[src..src + stride]);
            src += hop;
        }
        NArray::from_vec(&[out_len], out)
    }

    /// Extract the sub-array selected by `query`, one entry per axis.
    ///
    /// Negative entries keep their axis; the output rank is the number of
    /// kept axes, and the output shape lists their sizes in axis order. An
    /// all-fixed query yields a rank-0 scalar; an all-wildcard query yields
    /// a full copy.
    ///
    /// Elements appear in the row-major enumeration order of the kept axes:
    /// `out.data()[k] == self.at(&enumeration[k])` where the enumeration
    /// walks fixed axes at their single coordinate and kept axes over their
    /// full range, last axis fastest.
    ///
    /// # Errors
    /// Fails on a rank-0 receiver, a query whose length differs from the
    /// rank, or a fixed coordinate outside its axis.
    pub fn sub_array(&self, query: &[isize]) -> Result<NArray> {
        if self.rank() == 0 {
            return Err(ArrayError::RankZero { op: "sub_array" });
        }
        if query.len() != self.rank() {
            return Err(ArrayError::RankMismatch(self.rank(), query.len()));
        }
        let mut out_shape = Vec::new();
        for (axis, &q) in query.iter().enumerate() {
            if q < 0 {
                out_shape.push(self.shape()[axis]);
            } else {
                let index = q as usize;
                if index >= self.shape()[axis] {
                    return Err(ArrayError::IndexOutOfBounds {
                        axis,
                        index,
                        size: self.shape()[axis],
                    });
                }
            }
        }

        let out_len: usize = out_shape.iter().product();
        let mut out = Vec::with_capacity(out_len);
        self.gather(query, 0, 0, &mut out);
        NArray::from_vec(&out_shape, out)
    }

    /// Recursive Cartesian walk over the query, axis by axis, accumulating
    /// the partial linear offset. Wildcard axes loop over their full range;
    /// fixed axes contribute one term. Recursing in axis order is what
    /// preserves the output's row-major enumeration order.
    fn gather(&self, query: &[isize], axis: usize, base: usize, out: &mut Vec<f64>) {
        if axis == query.len() {
            out.push(self.data()[base]);
            return;
        }
        let stride = self.strides()[axis];
        match query[axis] {
            q if q < 0 => {
                for i in 0..self.shape()[axis] {
                    self.gather(query, axis + 1, base + i * stride, out);
                }
            }
            q => self.gather(query, axis + 1, base + q as usize * stride, out),
        }
    }
}
