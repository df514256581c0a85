//! Dense multi-dimensional `f64` arrays with row-major strided addressing.
//!
//! An [`NArray`] owns a flat buffer and a fixed shape; every cell is reached
//! through the precomputed stride vector, and [`NArray::offset`] /
//! [`NArray::coords`] convert between index tuples and linear offsets in both
//! directions. Shapes never change after construction: there is no reshape
//! and no broadcasting, and every elementwise operation requires its operands
//! to agree on shape exactly.
//!
//! # Core Types
//!
//! - [`NArray`]: owned dense array (rank 0 scalars included)
//! - [`ArrayDocument`]: serialization form with the special-value offset lists
//! - [`Kernels`] / [`ActiveKernels`]: flat-buffer kernel backend, selected at
//!   compile time
//!
//! # Primary API
//!
//! ## Elementwise Operations
//!
//! - [`add`], [`mul`], [`max_array`], [`min_array`]: N-ary combines over two
//!   or more arrays, accumulating in argument order
//! - [`sub`], [`div`]: binary arithmetic
//! - [`add_const`], [`scale`], [`rcp`]: scalar broadcasts
//! - [`add_scaled`]: `y[i] += a * x[i]`
//! - [`sqrt`], [`abs`], [`map`]: unary maps
//!
//! Each has a `*_into` variant writing into an existing destination.
//!
//! ## Reductions
//!
//! - [`NArray::max`], [`NArray::min`]: NaN-ignoring whole-array scans
//! - [`NArray::max_idx`], [`NArray::min_idx`]: value plus coordinates of the
//!   first occurrence
//! - [`NArray::sum`], [`NArray::prod`]
//!
//! ## Sub-array Extraction
//!
//! - [`NArray::vector`]: fix one axis, flatten the rest to rank 1
//! - [`NArray::sub_array`]: per-axis query mixing fixed coordinates with the
//!   [`ALL`] wildcard
//!
//! ## Serialization
//!
//! [`NArray`] implements `Serialize` / `Deserialize` through
//! [`ArrayDocument`], which stores IEEE specials as finite placeholders plus
//! offset lists so the values survive transports without `Inf`/`NaN`
//! literals. See [`NArray::to_document`] and [`NArray::from_document`].
//!
//! # Example
//!
//! ```rust
//! use narray::NArray;
//!
//! let mut x = NArray::from_fn(&[3, 5], |idx| (5 * idx[0] + idx[1]) as f64);
//! assert_eq!(x.at(&[1, 2]), 7.0);
//!
//! x.inc(&[1, 2], 1.0);
//! assert_eq!(x.at(&[1, 2]), 8.0);
//!
//! // Offsets and coordinates are mutual inverses.
//! assert_eq!(x.offset(&[1, 2]), 7);
//! assert_eq!(x.coords(7), vec![1, 2]);
//! ```
//!
//! ```rust
//! use narray::{add, scale, NArray, ALL};
//!
//! let x = NArray::from_fn(&[3, 5], |idx| (5 * idx[0] + idx[1]) as f64);
//! let y = scale(&x, 2.0);
//! let s = add(&[&x, &y]).unwrap();
//! assert_eq!(s.max_idx(), (42.0, vec![2, 4]));
//!
//! // Keep row 1 as a rank-1 slice.
//! let row = x.sub_array(&[1, ALL]).unwrap();
//! assert_eq!(row.data(), &[5.0, 6.0, 7.0, 8.0, 9.0]);
//! ```
//!
//! # Kernel Selection
//!
//! Elementwise loops and whole-array scans run through the [`Kernels`] trait.
//! On x86_64 and aarch64 the [`ActiveKernels`] alias resolves to the SIMD
//! implementation built on the target's baseline instruction set (SSE2 resp.
//! NEON); everywhere else, and under the `portable` feature, it resolves to
//! [`ScalarKernels`]. The choice is made entirely at compile time, and both
//! implementations follow the same numeric contract (documented on
//! [`Kernels`]), so results do not depend on the backend.

mod array;
mod codec;
mod kernels;
mod ops;
mod reduce;
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
mod simd;
mod subarray;

// ============================================================================
// Core array type
// ============================================================================
pub use array::NArray;

// ============================================================================
// Elementwise operations
// ============================================================================
pub use ops::{
    abs, abs_into, add, add_const, add_const_into, add_into, add_scaled, div, div_into, map,
    map_into, max_array, max_array_into, min_array, min_array_into, mul, mul_into, rcp, rcp_into,
    scale, scale_into, sqrt, sqrt_into, sub, sub_into,
};

// ============================================================================
// Kernel backends
// ============================================================================
pub use kernels::{ActiveKernels, Kernels, ScalarKernels};
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub use simd::SimdKernels;

// ============================================================================
// Sub-array extraction
// ============================================================================
pub use subarray::ALL;

// ============================================================================
// Serialization
// ============================================================================
pub use codec::ArrayDocument;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during array operations.
#[derive(Debug, thiserror::Error)]
pub enum ArrayError {
    /// Array ranks do not match.
    #[error("rank mismatch: {0} vs {1}")]
    RankMismatch(usize, usize),

    /// Array shapes are incompatible for the operation.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    /// An N-ary combine received fewer operands than it requires.
    #[error("need at least {needed} operands, found {found}")]
    InsufficientOperands { needed: usize, found: usize },

    /// Invalid axis index for the given array rank.
    #[error("invalid axis {axis} for rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    /// A coordinate lies outside its axis.
    #[error("index {index} out of bounds for axis {axis} of size {size}")]
    IndexOutOfBounds {
        axis: usize,
        index: usize,
        size: usize,
    },

    /// The operation is undefined on rank-0 arrays.
    #[error("{op} requires an array of rank >= 1")]
    RankZero { op: &'static str },

    /// Buffer length does not hold exactly one value per cell.
    #[error("data length {len} does not match shape {shape:?}")]
    LengthMismatch { len: usize, shape: Vec<usize> },

    /// A serialized stride vector is not the row-major one for its shape.
    #[error("strides {strides:?} are not row-major for shape {shape:?}")]
    BadStrides {
        strides: Vec<usize>,
        shape: Vec<usize>,
    },

    /// A special-value offset list points outside the data buffer.
    #[error("special-value offset {offset} outside data of length {len}")]
    BadOffset { offset: i64, len: usize },
}

/// Result type for array operations.
pub type Result<T> = std::result::Result<T, ArrayError>;
