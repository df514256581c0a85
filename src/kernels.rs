//! Elementwise compute kernels over flat `f64` buffers.
//!
//! This module defines the [`Kernels`] trait, the portable [`ScalarKernels`]
//! implementation, and the [`ActiveKernels`] type alias that serves as the
//! single point of kernel selection based on the build target. The
//! accelerated implementation lives in `crate::simd`.
//!
//! Kernels are non-validating primitives: callers guarantee that all buffers
//! have equal length. Shape checking happens one layer up, in [`crate::ops`].

/// Elementwise kernels over equal-length flat buffers.
///
/// Both implementations honor one numeric contract:
/// - elementwise arithmetic follows IEEE-754 exactly (bit-compatible results
///   for all finite inputs, ±Inf from zero divisors, NaN propagation);
/// - `min_assign`/`max_assign` use comparison-select semantics: the second
///   operand wins whenever the comparison fails, including NaN operands;
/// - `add_scaled` rounds the multiply and the add separately (no fused
///   multiply-add contraction);
/// - `max_value`/`min_value` are NaN-ignoring scans seeded with the infinite
///   sentinel of the losing sign, so the seed never beats a real value. They
///   guarantee value equality across implementations, not bit equality: when
///   the extreme is zero, the sign of the returned zero depends on scan
///   order (a lane-split scan can resolve a `+0.0`/`-0.0` tie toward the
///   other lane) and is unspecified;
/// - `sum` accumulates left-to-right in the scalar implementation; the
///   vectorized implementation may reassociate the additions.
pub trait Kernels {
    /// `out[i] += a[i]`
    fn add_assign(out: &mut [f64], a: &[f64]);
    /// `out[i] -= a[i]`
    fn sub_assign(out: &mut [f64], a: &[f64]);
    /// `out[i] *= a[i]`
    fn mul_assign(out: &mut [f64], a: &[f64]);
    /// `out[i] /= a[i]`
    fn div_assign(out: &mut [f64], a: &[f64]);
    /// `out[i] = if out[i] < a[i] { out[i] } else { a[i] }`
    fn min_assign(out: &mut [f64], a: &[f64]);
    /// `out[i] = if out[i] > a[i] { out[i] } else { a[i] }`
    fn max_assign(out: &mut [f64], a: &[f64]);

    /// `out[i] += c`
    fn add_const(out: &mut [f64], c: f64);
    /// `out[i] *= c`
    fn scale(out: &mut [f64], c: f64);
    /// `out[i] = c / out[i]`
    fn const_div(out: &mut [f64], c: f64);
    /// `out[i] += a * x[i]`
    fn add_scaled(out: &mut [f64], x: &[f64], a: f64);

    /// `out[i] = sqrt(out[i])`
    fn sqrt(out: &mut [f64]);
    /// `out[i] = |out[i]|`
    fn abs(out: &mut [f64]);

    /// Sum of all elements (0.0 for an empty buffer).
    fn sum(a: &[f64]) -> f64;
    /// Largest element; `f64::NEG_INFINITY` for an empty buffer. NaN
    /// elements never win.
    fn max_value(a: &[f64]) -> f64;
    /// Smallest element; `f64::INFINITY` for an empty buffer. NaN elements
    /// never win.
    fn min_value(a: &[f64]) -> f64;
}

// ---------------------------------------------------------------------------
// Portable scalar implementation
// ---------------------------------------------------------------------------

/// Portable scalar kernels: straightforward element-by-element loops.
pub struct ScalarKernels;

impl Kernels for ScalarKernels {
    #[inline]
    fn add_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        for (o, &x) in out.iter_mut().zip(a) {
            *o += x;
        }
    }

    #[inline]
    fn sub_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        for (o, &x) in out.iter_mut().zip(a) {
            *o -= x;
        }
    }

    #[inline]
    fn mul_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        for (o, &x) in out.iter_mut().zip(a) {
            *o *= x;
        }
    }

    #[inline]
    fn div_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        for (o, &x) in out.iter_mut().zip(a) {
            *o /= x;
        }
    }

    #[inline]
    fn min_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        for (o, &x) in out.iter_mut().zip(a) {
            *o = if *o < x { *o } else { x };
        }
    }

    #[inline]
    fn max_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        for (o, &x) in out.iter_mut().zip(a) {
            *o = if *o > x { *o } else { x };
        }
    }

    #[inline]
    fn add_const(out: &mut [f64], c: f64) {
        for o in out.iter_mut() {
            *o += c;
        }
    }

    #[inline]
    fn scale(out: &mut [f64], c: f64) {
        for o in out.iter_mut() {
            *o *= c;
        }
    }

    #[inline]
    fn const_div(out: &mut [f64], c: f64) {
        for o in out.iter_mut() {
            *o = c / *o;
        }
    }

    #[inline]
    fn add_scaled(out: &mut [f64], x: &[f64], a: f64) {
        debug_assert_eq!(out.len(), x.len());
        for (o, &v) in out.iter_mut().zip(x) {
            *o += v * a;
        }
    }

    #[inline]
    fn sqrt(out: &mut [f64]) {
        for o in out.iter_mut() {
            *o = o.sqrt();
        }
    }

    #[inline]
    fn abs(out: &mut [f64]) {
        for o in out.iter_mut() {
            *o = o.abs();
        }
    }

    #[inline]
    fn sum(a: &[f64]) -> f64 {
        a.iter().fold(0.0, |acc, &v| acc + v)
    }

    #[inline]
    fn max_value(a: &[f64]) -> f64 {
        let mut m = f64::NEG_INFINITY;
        for &v in a {
            if v > m {
                m = v;
            }
        }
        m
    }

    #[inline]
    fn min_value(a: &[f64]) -> f64 {
        let mut m = f64::INFINITY;
        for &v in a {
            if v < m {
                m = v;
            }
        }
        m
    }
}

// ---------------------------------------------------------------------------
// ActiveKernels type alias -- the SINGLE point of kernel selection
// ---------------------------------------------------------------------------

/// The active kernel implementation, selected at compile time.
///
/// - x86_64 or aarch64, without the `portable` feature -> [`crate::simd::SimdKernels`]
///   (SSE2 / NEON, both baseline instruction sets of their targets)
/// - any other target, or the `portable` feature -> [`ScalarKernels`]
///
/// Selection never happens per call: every operation in [`crate::ops`] and
/// [`crate::reduce`] is monomorphized against this alias.
#[cfg(all(
    any(target_arch = "x86_64", target_arch = "aarch64"),
    not(feature = "portable")
))]
pub type ActiveKernels = crate::simd::SimdKernels;

#[cfg(any(
    not(any(target_arch = "x86_64", target_arch = "aarch64")),
    feature = "portable"
))]
pub type ActiveKernels = ScalarKernels;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_assign_kernels() {
        let mut out = vec![1.0, 2.0, 3.0];
        ScalarKernels::add_assign(&mut out, &[10.0, 20.0, 30.0]);
        assert_eq!(out, vec![11.0, 22.0, 33.0]);
        ScalarKernels::sub_assign(&mut out, &[1.0, 2.0, 3.0]);
        assert_eq!(out, vec![10.0, 20.0, 30.0]);
        ScalarKernels::mul_assign(&mut out, &[2.0, 2.0, 2.0]);
        assert_eq!(out, vec![20.0, 40.0, 60.0]);
        ScalarKernels::div_assign(&mut out, &[2.0, 4.0, 6.0]);
        assert_eq!(out, vec![10.0, 10.0, 10.0]);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let mut out = vec![1.0, -1.0, 0.0];
        ScalarKernels::div_assign(&mut out, &[0.0, 0.0, 0.0]);
        assert_eq!(out[0], f64::INFINITY);
        assert_eq!(out[1], f64::NEG_INFINITY);
        assert!(out[2].is_nan());
    }

    #[test]
    fn min_max_use_comparison_select() {
        let mut out = vec![1.0, 5.0, f64::NAN, 2.0];
        ScalarKernels::min_assign(&mut out, &[3.0, 2.0, 7.0, f64::NAN]);
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 2.0);
        // Failed comparisons select the second operand.
        assert_eq!(out[2], 7.0);
        assert!(out[3].is_nan());

        let mut out = vec![1.0, 5.0];
        ScalarKernels::max_assign(&mut out, &[3.0, 2.0]);
        assert_eq!(out, vec![3.0, 5.0]);
    }

    #[test]
    fn scalar_broadcast_kernels() {
        let mut out = vec![1.0, 2.0, 4.0];
        ScalarKernels::add_const(&mut out, 1.0);
        assert_eq!(out, vec![2.0, 3.0, 5.0]);
        ScalarKernels::scale(&mut out, 2.0);
        assert_eq!(out, vec![4.0, 6.0, 10.0]);
        ScalarKernels::const_div(&mut out, 12.0);
        assert_eq!(out, vec![3.0, 2.0, 1.2]);
    }

    #[test]
    fn add_scaled_multiplies_then_adds() {
        let mut out = vec![1.0, 2.0];
        ScalarKernels::add_scaled(&mut out, &[10.0, 20.0], 0.5);
        assert_eq!(out, vec![6.0, 12.0]);
    }

    #[test]
    fn unary_kernels() {
        let mut out = vec![4.0, 9.0];
        ScalarKernels::sqrt(&mut out);
        assert_eq!(out, vec![2.0, 3.0]);
        let mut out = vec![-1.5, 2.5, -0.0];
        ScalarKernels::abs(&mut out);
        assert_eq!(out, vec![1.5, 2.5, 0.0]);
    }

    #[test]
    fn scans_over_buffers() {
        assert_eq!(ScalarKernels::sum(&[1.0, 2.0, 3.5]), 6.5);
        assert_eq!(ScalarKernels::sum(&[]), 0.0);
        assert_eq!(ScalarKernels::max_value(&[-5.0, -1.0, -3.0]), -1.0);
        assert_eq!(ScalarKernels::min_value(&[2.0, 7.0, 0.5]), 0.5);
        assert_eq!(ScalarKernels::max_value(&[]), f64::NEG_INFINITY);
        assert_eq!(ScalarKernels::min_value(&[]), f64::INFINITY);
    }

    #[test]
    fn scans_ignore_nan() {
        assert_eq!(ScalarKernels::max_value(&[1.0, f64::NAN, 3.0]), 3.0);
        assert_eq!(ScalarKernels::min_value(&[f64::NAN, f64::NAN]), f64::INFINITY);
    }
}
