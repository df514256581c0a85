//! Vectorized kernels using the target's baseline SIMD instruction set.
//!
//! x86_64 always has SSE2 and aarch64 always has NEON, so both paths are
//! selected purely at compile time through [`crate::kernels::ActiveKernels`];
//! there is no per-call feature detection. Both process two `f64` lanes per
//! step with a scalar tail for odd lengths.
//!
//! The elementwise kernels match [`ScalarKernels`] bit for bit:
//! `min`/`max` are built from comparison-select (SSE2 `minpd`/`maxpd` have
//! exactly those semantics; NEON uses an explicit compare and bit-select
//! because `vminq_f64` propagates NaN instead), and `add_scaled` keeps the
//! multiply and add as two rounded operations. The scans match on value but
//! not on every bit: `sum` accumulates in two lanes, which reassociates the
//! additions, and the lane-split `max_value`/`min_value` can resolve a
//! `+0.0`/`-0.0` tie toward a different lane than the sequential scan, so a
//! zero extreme may come back with the other sign.
//!
//! [`ScalarKernels`]: crate::kernels::ScalarKernels

use crate::kernels::Kernels;

/// Accelerated kernels for x86_64 (SSE2) and aarch64 (NEON).
pub struct SimdKernels;

#[cfg(target_arch = "x86_64")]
use sse2 as imp;

#[cfg(target_arch = "aarch64")]
use neon as imp;

// SAFETY of the delegations below: the instruction set is the compilation
// target's baseline, and every lane access stays within the slice lengths
// the pointer arithmetic is derived from. Equal-length preconditions are the
// trait contract, checked here via debug_assert like the scalar path.
impl Kernels for SimdKernels {
    #[inline]
    fn add_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        unsafe { imp::add_assign(out, a) }
    }

    #[inline]
    fn sub_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        unsafe { imp::sub_assign(out, a) }
    }

    #[inline]
    fn mul_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        unsafe { imp::mul_assign(out, a) }
    }

    #[inline]
    fn div_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        unsafe { imp::div_assign(out, a) }
    }

    #[inline]
    fn min_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        unsafe { imp::min_assign(out, a) }
    }

    #[inline]
    fn max_assign(out: &mut [f64], a: &[f64]) {
        debug_assert_eq!(out.len(), a.len());
        unsafe { imp::max_assign(out, a) }
    }

    #[inline]
    fn add_const(out: &mut [f64], c: f64) {
        unsafe { imp::add_const(out, c) }
    }

    #[inline]
    fn scale(out: &mut [f64], c: f64) {
        unsafe { imp::scale(out, c) }
    }

    #[inline]
    fn const_div(out: &mut [f64], c: f64) {
        unsafe { imp::const_div(out, c) }
    }

    #[inline]
    fn add_scaled(out: &mut [f64], x: &[f64], a: f64) {
        debug_assert_eq!(out.len(), x.len());
        unsafe { imp::add_scaled(out, x, a) }
    }

    #[inline]
    fn sqrt(out: &mut [f64]) {
        unsafe { imp::sqrt(out) }
    }

    #[inline]
    fn abs(out: &mut [f64]) {
        unsafe { imp::abs(out) }
    }

    #[inline]
    fn sum(a: &[f64]) -> f64 {
        unsafe { imp::sum(a) }
    }

    #[inline]
    fn max_value(a: &[f64]) -> f64 {
        unsafe { imp::max_value(a) }
    }

    #[inline]
    fn min_value(a: &[f64]) -> f64 {
        unsafe { imp::min_value(a) }
    }
}

#[cfg(target_arch = "x86_64")]
mod sse2 {
    use std::arch::x86_64::*;

    pub(super) unsafe fn add_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            let va = _mm_loadu_pd(a_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_add_pd(vo, va));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) += *a_ptr.add(n - 1);
        }
    }

    pub(super) unsafe fn sub_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            let va = _mm_loadu_pd(a_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_sub_pd(vo, va));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) -= *a_ptr.add(n - 1);
        }
    }

    pub(super) unsafe fn mul_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            let va = _mm_loadu_pd(a_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_mul_pd(vo, va));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) *= *a_ptr.add(n - 1);
        }
    }

    pub(super) unsafe fn div_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            let va = _mm_loadu_pd(a_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_div_pd(vo, va));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) /= *a_ptr.add(n - 1);
        }
    }

    // minpd/maxpd are comparison-select by definition: the second operand is
    // returned whenever the comparison fails, NaN included.
    pub(super) unsafe fn min_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            let va = _mm_loadu_pd(a_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_min_pd(vo, va));
        }
        if n % 2 == 1 {
            let o = *out_ptr.add(n - 1);
            let x = *a_ptr.add(n - 1);
            *out_ptr.add(n - 1) = if o < x { o } else { x };
        }
    }

    pub(super) unsafe fn max_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            let va = _mm_loadu_pd(a_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_max_pd(vo, va));
        }
        if n % 2 == 1 {
            let o = *out_ptr.add(n - 1);
            let x = *a_ptr.add(n - 1);
            *out_ptr.add(n - 1) = if o > x { o } else { x };
        }
    }

    pub(super) unsafe fn add_const(out: &mut [f64], c: f64) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let vc = _mm_set1_pd(c);
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_add_pd(vo, vc));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) += c;
        }
    }

    pub(super) unsafe fn scale(out: &mut [f64], c: f64) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let vc = _mm_set1_pd(c);
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_mul_pd(vo, vc));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) *= c;
        }
    }

    pub(super) unsafe fn const_div(out: &mut [f64], c: f64) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let vc = _mm_set1_pd(c);
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_div_pd(vc, vo));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) = c / *out_ptr.add(n - 1);
        }
    }

    // Multiply and add stay separate: an fmadd here would round once where
    // the scalar path rounds twice.
    pub(super) unsafe fn add_scaled(out: &mut [f64], x: &[f64], a: f64) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let x_ptr = x.as_ptr();
        let va = _mm_set1_pd(a);
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            let vx = _mm_loadu_pd(x_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_add_pd(vo, _mm_mul_pd(vx, va)));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) += *x_ptr.add(n - 1) * a;
        }
    }

    pub(super) unsafe fn sqrt(out: &mut [f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_sqrt_pd(vo));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) = (*out_ptr.add(n - 1)).sqrt();
        }
    }

    pub(super) unsafe fn abs(out: &mut [f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        // Clearing the sign bit, same as f64::abs.
        let sign = _mm_set1_pd(-0.0);
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = _mm_loadu_pd(out_ptr.add(off));
            _mm_storeu_pd(out_ptr.add(off), _mm_andnot_pd(sign, vo));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) = (*out_ptr.add(n - 1)).abs();
        }
    }

    pub(super) unsafe fn sum(a: &[f64]) -> f64 {
        let n = a.len();
        let a_ptr = a.as_ptr();
        let mut acc0 = _mm_setzero_pd();
        let mut acc1 = _mm_setzero_pd();
        let blocks = n / 4;
        for i in 0..blocks {
            let off = i * 4;
            acc0 = _mm_add_pd(acc0, _mm_loadu_pd(a_ptr.add(off)));
            acc1 = _mm_add_pd(acc1, _mm_loadu_pd(a_ptr.add(off + 2)));
        }
        let acc = _mm_add_pd(acc0, acc1);
        let hi = _mm_unpackhi_pd(acc, acc);
        let mut result = _mm_cvtsd_f64(_mm_add_sd(acc, hi));
        for i in blocks * 4..n {
            result += *a_ptr.add(i);
        }
        result
    }

    // maxpd(v, acc) keeps acc whenever v does not win the comparison, so
    // NaN lanes never contaminate the accumulator.
    pub(super) unsafe fn max_value(a: &[f64]) -> f64 {
        let n = a.len();
        let a_ptr = a.as_ptr();
        let mut acc = _mm_set1_pd(f64::NEG_INFINITY);
        for i in 0..n / 2 {
            let v = _mm_loadu_pd(a_ptr.add(i * 2));
            acc = _mm_max_pd(v, acc);
        }
        let hi = _mm_unpackhi_pd(acc, acc);
        let mut m = _mm_cvtsd_f64(_mm_max_sd(hi, acc));
        if n % 2 == 1 {
            let v = *a_ptr.add(n - 1);
            if v > m {
                m = v;
            }
        }
        m
    }

    pub(super) unsafe fn min_value(a: &[f64]) -> f64 {
        let n = a.len();
        let a_ptr = a.as_ptr();
        let mut acc = _mm_set1_pd(f64::INFINITY);
        for i in 0..n / 2 {
            let v = _mm_loadu_pd(a_ptr.add(i * 2));
            acc = _mm_min_pd(v, acc);
        }
        let hi = _mm_unpackhi_pd(acc, acc);
        let mut m = _mm_cvtsd_f64(_mm_min_sd(hi, acc));
        if n % 2 == 1 {
            let v = *a_ptr.add(n - 1);
            if v < m {
                m = v;
            }
        }
        m
    }
}

#[cfg(target_arch = "aarch64")]
mod neon {
    use std::arch::aarch64::*;

    pub(super) unsafe fn add_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            let va = vld1q_f64(a_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vaddq_f64(vo, va));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) += *a_ptr.add(n - 1);
        }
    }

    pub(super) unsafe fn sub_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            let va = vld1q_f64(a_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vsubq_f64(vo, va));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) -= *a_ptr.add(n - 1);
        }
    }

    pub(super) unsafe fn mul_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            let va = vld1q_f64(a_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vmulq_f64(vo, va));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) *= *a_ptr.add(n - 1);
        }
    }

    pub(super) unsafe fn div_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            let va = vld1q_f64(a_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vdivq_f64(vo, va));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) /= *a_ptr.add(n - 1);
        }
    }

    // vminq_f64 propagates NaN, so comparison-select is spelled out with a
    // compare and bit-select to keep the second-operand-wins contract.
    pub(super) unsafe fn min_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            let va = vld1q_f64(a_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vbslq_f64(vcltq_f64(vo, va), vo, va));
        }
        if n % 2 == 1 {
            let o = *out_ptr.add(n - 1);
            let x = *a_ptr.add(n - 1);
            *out_ptr.add(n - 1) = if o < x { o } else { x };
        }
    }

    pub(super) unsafe fn max_assign(out: &mut [f64], a: &[f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let a_ptr = a.as_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            let va = vld1q_f64(a_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vbslq_f64(vcgtq_f64(vo, va), vo, va));
        }
        if n % 2 == 1 {
            let o = *out_ptr.add(n - 1);
            let x = *a_ptr.add(n - 1);
            *out_ptr.add(n - 1) = if o > x { o } else { x };
        }
    }

    pub(super) unsafe fn add_const(out: &mut [f64], c: f64) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let vc = vdupq_n_f64(c);
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vaddq_f64(vo, vc));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) += c;
        }
    }

    pub(super) unsafe fn scale(out: &mut [f64], c: f64) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let vc = vdupq_n_f64(c);
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vmulq_f64(vo, vc));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) *= c;
        }
    }

    pub(super) unsafe fn const_div(out: &mut [f64], c: f64) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let vc = vdupq_n_f64(c);
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vdivq_f64(vc, vo));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) = c / *out_ptr.add(n - 1);
        }
    }

    // No vfmaq here: the scalar path rounds the multiply and add separately.
    pub(super) unsafe fn add_scaled(out: &mut [f64], x: &[f64], a: f64) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        let x_ptr = x.as_ptr();
        let va = vdupq_n_f64(a);
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            let vx = vld1q_f64(x_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vaddq_f64(vo, vmulq_f64(vx, va)));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) += *x_ptr.add(n - 1) * a;
        }
    }

    pub(super) unsafe fn sqrt(out: &mut [f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vsqrtq_f64(vo));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) = (*out_ptr.add(n - 1)).sqrt();
        }
    }

    pub(super) unsafe fn abs(out: &mut [f64]) {
        let n = out.len();
        let out_ptr = out.as_mut_ptr();
        for i in 0..n / 2 {
            let off = i * 2;
            let vo = vld1q_f64(out_ptr.add(off));
            vst1q_f64(out_ptr.add(off), vabsq_f64(vo));
        }
        if n % 2 == 1 {
            *out_ptr.add(n - 1) = (*out_ptr.add(n - 1)).abs();
        }
    }

    pub(super) unsafe fn sum(a: &[f64]) -> f64 {
        let n = a.len();
        let a_ptr = a.as_ptr();
        let mut acc0 = vdupq_n_f64(0.0);
        let mut acc1 = vdupq_n_f64(0.0);
        let blocks = n / 4;
        for i in 0..blocks {
            let off = i * 4;
            acc0 = vaddq_f64(acc0, vld1q_f64(a_ptr.add(off)));
            acc1 = vaddq_f64(acc1, vld1q_f64(a_ptr.add(off + 2)));
        }
        let mut result = vaddvq_f64(vaddq_f64(acc0, acc1));
        for i in blocks * 4..n {
            result += *a_ptr.add(i);
        }
        result
    }

    // The accumulator only ever takes lanes that won a strict comparison,
    // so NaN input lanes never reach it.
    pub(super) unsafe fn max_value(a: &[f64]) -> f64 {
        let n = a.len();
        let a_ptr = a.as_ptr();
        let mut acc = vdupq_n_f64(f64::NEG_INFINITY);
        for i in 0..n / 2 {
            let v = vld1q_f64(a_ptr.add(i * 2));
            acc = vbslq_f64(vcgtq_f64(v, acc), v, acc);
        }
        let mut m = vmaxvq_f64(acc);
        if n % 2 == 1 {
            let v = *a_ptr.add(n - 1);
            if v > m {
                m = v;
            }
        }
        m
    }

    pub(super) unsafe fn min_value(a: &[f64]) -> f64 {
        let n = a.len();
        let a_ptr = a.as_ptr();
        let mut acc = vdupq_n_f64(f64::INFINITY);
        for i in 0..n / 2 {
            let v = vld1q_f64(a_ptr.add(i * 2));
            acc = vbslq_f64(vcltq_f64(v, acc), v, acc);
        }
        let mut m = vminvq_f64(acc);
        if n % 2 == 1 {
            let v = *a_ptr.add(n - 1);
            if v < m {
                m = v;
            }
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::ScalarKernels;

    fn specials() -> Vec<f64> {
        vec![
            1.5,
            -2.25,
            0.0,
            -0.0,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
            f64::MIN_POSITIVE / 2.0,
            1e300,
        ]
    }

    fn assert_bits_eq(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert_eq!(x.to_bits(), y.to_bits(), "{x} vs {y}");
        }
    }

    #[test]
    fn add_assign_matches_scalar_with_odd_tail() {
        let a: Vec<f64> = (0..7).map(|i| i as f64 * 0.3).collect();
        let mut simd = vec![1.0; 7];
        let mut scalar = vec![1.0; 7];
        SimdKernels::add_assign(&mut simd, &a);
        ScalarKernels::add_assign(&mut scalar, &a);
        assert_bits_eq(&simd, &scalar);
    }

    #[test]
    fn min_assign_matches_scalar_on_specials() {
        let a = specials();
        let mut simd = specials();
        simd.rotate_left(3);
        let mut scalar = simd.clone();
        SimdKernels::min_assign(&mut simd, &a);
        ScalarKernels::min_assign(&mut scalar, &a);
        assert_bits_eq(&simd, &scalar);
    }

    #[test]
    fn scans_match_scalar_on_exact_data() {
        let a: Vec<f64> = (0..13).map(|i| (i * 3 % 7) as f64).collect();
        assert_eq!(SimdKernels::sum(&a), ScalarKernels::sum(&a));
        assert_eq!(SimdKernels::max_value(&a), ScalarKernels::max_value(&a));
        assert_eq!(SimdKernels::min_value(&a), ScalarKernels::min_value(&a));
    }

    #[test]
    fn scans_ignore_nan_like_scalar() {
        let a = vec![f64::NAN, 2.0, f64::NAN, -3.0, 5.0];
        assert_eq!(SimdKernels::max_value(&a), 5.0);
        assert_eq!(SimdKernels::min_value(&a), -3.0);
        assert_eq!(SimdKernels::max_value(&[]), f64::NEG_INFINITY);
    }
}
