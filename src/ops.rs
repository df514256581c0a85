//! Array-level elementwise operations.
//!
//! Every operation validates shapes (and operand counts) before touching the
//! destination, then routes the flat buffers to [`ActiveKernels`]. Allocating
//! forms shape their output like the first input; `*_into` forms require the
//! destination shape to match already. Nothing is written on failure.

use crate::kernels::{ActiveKernels, Kernels};
use crate::{ArrayError, NArray, Result};

/// Validate that two shapes agree, distinguishing rank from dimension
/// disagreement.
pub(crate) fn ensure_same_shape(a: &[usize], b: &[usize]) -> Result<()> {
    if a.len() != b.len() {
        return Err(ArrayError::RankMismatch(a.len(), b.len()));
    }
    if a != b {
        return Err(ArrayError::ShapeMismatch(a.to_vec(), b.to_vec()));
    }
    Ok(())
}

/// Shared body of the N-ary combines: validate everything, seed the
/// destination with the first input, then accumulate left-to-right.
fn combine_into(
    dest: &mut NArray,
    inputs: &[&NArray],
    kernel: fn(&mut [f64], &[f64]),
) -> Result<()> {
    if inputs.len() < 2 {
        return Err(ArrayError::InsufficientOperands {
            needed: 2,
            found: inputs.len(),
        });
    }
    for input in inputs {
        ensure_same_shape(dest.shape(), input.shape())?;
    }
    dest.data_mut().copy_from_slice(inputs[0].data());
    for input in &inputs[1..] {
        kernel(dest.data_mut(), input.data());
    }
    Ok(())
}

fn combine(inputs: &[&NArray], kernel: fn(&mut [f64], &[f64])) -> Result<NArray> {
    if inputs.len() < 2 {
        return Err(ArrayError::InsufficientOperands {
            needed: 2,
            found: inputs.len(),
        });
    }
    let mut out = NArray::zeros(inputs[0].shape());
    combine_into(&mut out, inputs, kernel)?;
    Ok(out)
}

/// Elementwise sum of at least two equal-shaped arrays.
///
/// Accumulates in argument order: `out = in[0]; out[i] += in[k][i]` for each
/// subsequent input.
pub fn add(inputs: &[&NArray]) -> Result<NArray> {
    combine(inputs, ActiveKernels::add_assign)
}

/// Elementwise sum of at least two equal-shaped arrays, written into `dest`.
pub fn add_into(dest: &mut NArray, inputs: &[&NArray]) -> Result<()> {
    combine_into(dest, inputs, ActiveKernels::add_assign)
}

/// Elementwise product of at least two equal-shaped arrays.
pub fn mul(inputs: &[&NArray]) -> Result<NArray> {
    combine(inputs, ActiveKernels::mul_assign)
}

/// Elementwise product of at least two equal-shaped arrays, written into
/// `dest`.
pub fn mul_into(dest: &mut NArray, inputs: &[&NArray]) -> Result<()> {
    combine_into(dest, inputs, ActiveKernels::mul_assign)
}

/// Position-wise maximum across at least two equal-shaped arrays.
///
/// Combines with comparison-select semantics (see [`Kernels`]): a NaN in a
/// later input replaces the running value at that position.
pub fn max_array(inputs: &[&NArray]) -> Result<NArray> {
    combine(inputs, ActiveKernels::max_assign)
}

/// Position-wise maximum across arrays, written into `dest`.
pub fn max_array_into(dest: &mut NArray, inputs: &[&NArray]) -> Result<()> {
    combine_into(dest, inputs, ActiveKernels::max_assign)
}

/// Position-wise minimum across at least two equal-shaped arrays.
pub fn min_array(inputs: &[&NArray]) -> Result<NArray> {
    combine(inputs, ActiveKernels::min_assign)
}

/// Position-wise minimum across arrays, written into `dest`.
pub fn min_array_into(dest: &mut NArray, inputs: &[&NArray]) -> Result<()> {
    combine_into(dest, inputs, ActiveKernels::min_assign)
}

/// Elementwise difference `a - b`.
pub fn sub(a: &NArray, b: &NArray) -> Result<NArray> {
    ensure_same_shape(a.shape(), b.shape())?;
    let mut out = a.clone();
    ActiveKernels::sub_assign(out.data_mut(), b.data());
    Ok(out)
}

/// Elementwise difference `a - b`, written into `dest`.
pub fn sub_into(dest: &mut NArray, a: &NArray, b: &NArray) -> Result<()> {
    ensure_same_shape(dest.shape(), a.shape())?;
    ensure_same_shape(dest.shape(), b.shape())?;
    dest.data_mut().copy_from_slice(a.data());
    ActiveKernels::sub_assign(dest.data_mut(), b.data());
    Ok(())
}

/// Elementwise quotient `a / b`. Zero divisors follow IEEE (±Inf, NaN).
pub fn div(a: &NArray, b: &NArray) -> Result<NArray> {
    ensure_same_shape(a.shape(), b.shape())?;
    let mut out = a.clone();
    ActiveKernels::div_assign(out.data_mut(), b.data());
    Ok(out)
}

/// Elementwise quotient `a / b`, written into `dest`.
pub fn div_into(dest: &mut NArray, a: &NArray, b: &NArray) -> Result<()> {
    ensure_same_shape(dest.shape(), a.shape())?;
    ensure_same_shape(dest.shape(), b.shape())?;
    dest.data_mut().copy_from_slice(a.data());
    ActiveKernels::div_assign(dest.data_mut(), b.data());
    Ok(())
}

/// `src[i] + c` for every element.
pub fn add_const(src: &NArray, c: f64) -> NArray {
    let mut out = src.clone();
    ActiveKernels::add_const(out.data_mut(), c);
    out
}

/// `src[i] + c`, written into `dest`.
pub fn add_const_into(dest: &mut NArray, src: &NArray, c: f64) -> Result<()> {
    ensure_same_shape(dest.shape(), src.shape())?;
    dest.data_mut().copy_from_slice(src.data());
    ActiveKernels::add_const(dest.data_mut(), c);
    Ok(())
}

/// `src[i] * c` for every element.
pub fn scale(src: &NArray, c: f64) -> NArray {
    let mut out = src.clone();
    ActiveKernels::scale(out.data_mut(), c);
    out
}

/// `src[i] * c`, written into `dest`.
pub fn scale_into(dest: &mut NArray, src: &NArray, c: f64) -> Result<()> {
    ensure_same_shape(dest.shape(), src.shape())?;
    dest.data_mut().copy_from_slice(src.data());
    ActiveKernels::scale(dest.data_mut(), c);
    Ok(())
}

/// Fused scaled accumulate: `y[i] += a * x[i]`.
pub fn add_scaled(y: &mut NArray, x: &NArray, a: f64) -> Result<()> {
    ensure_same_shape(y.shape(), x.shape())?;
    ActiveKernels::add_scaled(y.data_mut(), x.data(), a);
    Ok(())
}

/// Elementwise square root.
pub fn sqrt(src: &NArray) -> NArray {
    let mut out = src.clone();
    ActiveKernels::sqrt(out.data_mut());
    out
}

/// Elementwise square root, written into `dest`.
pub fn sqrt_into(dest: &mut NArray, src: &NArray) -> Result<()> {
    ensure_same_shape(dest.shape(), src.shape())?;
    dest.data_mut().copy_from_slice(src.data());
    ActiveKernels::sqrt(dest.data_mut());
    Ok(())
}

/// Elementwise absolute value.
pub fn abs(src: &NArray) -> NArray {
    let mut out = src.clone();
    ActiveKernels::abs(out.data_mut());
    out
}

/// Elementwise absolute value, written into `dest`.
pub fn abs_into(dest: &mut NArray, src: &NArray) -> Result<()> {
    ensure_same_shape(dest.shape(), src.shape())?;
    dest.data_mut().copy_from_slice(src.data());
    ActiveKernels::abs(dest.data_mut());
    Ok(())
}

/// Elementwise reciprocal `1.0 / src[i]`. No zero guard: IEEE division
/// yields ±Inf on zero elements.
pub fn rcp(src: &NArray) -> NArray {
    let mut out = src.clone();
    ActiveKernels::const_div(out.data_mut(), 1.0);
    out
}

/// Elementwise reciprocal, written into `dest`.
pub fn rcp_into(dest: &mut NArray, src: &NArray) -> Result<()> {
    ensure_same_shape(dest.shape(), src.shape())?;
    dest.data_mut().copy_from_slice(src.data());
    ActiveKernels::const_div(dest.data_mut(), 1.0);
    Ok(())
}

/// Apply `f` to every element, producing a new array.
pub fn map(src: &NArray, mut f: impl FnMut(f64) -> f64) -> NArray {
    let mut out = src.clone();
    for v in out.data_mut() {
        *v = f(*v);
    }
    out
}

/// Apply `f` to every element of `src`, writing the results into `dest`.
pub fn map_into(dest: &mut NArray, src: &NArray, mut f: impl FnMut(f64) -> f64) -> Result<()> {
    ensure_same_shape(dest.shape(), src.shape())?;
    for (o, &v) in dest.data_mut().iter_mut().zip(src.data()) {
        *o = f(v);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, cols: usize, offset: f64) -> NArray {
        NArray::from_fn(&[rows, cols], |idx| (idx[0] * cols + idx[1]) as f64 + offset)
    }

    #[test]
    fn add_accumulates_all_inputs() {
        let a = NArray::from_elem(&[3, 5], 1.0);
        let b = NArray::from_elem(&[3, 5], 2.0);
        let c = NArray::from_elem(&[3, 5], 3.0);
        let out = add(&[&a, &b, &c]).unwrap();
        assert!(out.data().iter().all(|&v| v == 6.0));
    }

    #[test]
    fn add_requires_two_operands() {
        let a = NArray::zeros(&[2]);
        assert!(matches!(
            add(&[&a]),
            Err(ArrayError::InsufficientOperands { needed: 2, found: 1 })
        ));
        assert!(matches!(
            mul(&[]),
            Err(ArrayError::InsufficientOperands { needed: 2, found: 0 })
        ));
    }

    #[test]
    fn mismatched_rank_is_rejected() {
        let a = NArray::zeros(&[3, 5]);
        let b = NArray::zeros(&[3, 5, 66]);
        assert!(matches!(add(&[&a, &b]), Err(ArrayError::RankMismatch(2, 3))));
    }

    #[test]
    fn mismatched_dims_are_rejected() {
        let a = NArray::zeros(&[3, 5]);
        let b = NArray::zeros(&[3, 6]);
        assert!(matches!(sub(&a, &b), Err(ArrayError::ShapeMismatch(_, _))));
    }

    #[test]
    fn into_form_checks_destination_shape() {
        let a = NArray::zeros(&[2, 2]);
        let b = NArray::zeros(&[2, 2]);
        let mut dest = NArray::zeros(&[4]);
        assert!(add_into(&mut dest, &[&a, &b]).is_err());
        // Nothing was written.
        assert!(dest.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn binary_results_at_known_cells() {
        let x = grid(3, 5, 0.0);
        let y = grid(3, 5, 2.0);
        assert_eq!(sub(&y, &x).unwrap().at(&[1, 1]), 2.0);
        assert_eq!(div(&y, &x).unwrap().at(&[1, 1]), 4.0 / 3.0);
        assert_eq!(mul(&[&y, &x]).unwrap().at(&[1, 1]), 48.0);
        assert_eq!(scale(&x, 2.0).at(&[1, 1]), 12.0);
    }

    #[test]
    fn max_array_and_min_array_are_position_wise() {
        let a = NArray::from_vec(&[4], vec![1.0, 9.0, -3.0, 0.0]).unwrap();
        let b = NArray::from_vec(&[4], vec![5.0, 2.0, -7.0, 0.0]).unwrap();
        assert_eq!(max_array(&[&a, &b]).unwrap().data(), &[5.0, 9.0, -3.0, 0.0]);
        assert_eq!(min_array(&[&a, &b]).unwrap().data(), &[1.0, 2.0, -7.0, 0.0]);
    }

    #[test]
    fn add_const_broadcasts() {
        let x = grid(2, 2, 0.0);
        let out = add_const(&x, 10.0);
        assert_eq!(out.data(), &[10.0, 11.0, 12.0, 13.0]);
    }

    #[test]
    fn add_scaled_is_fused_accumulate() {
        let mut y = NArray::from_vec(&[3], vec![1.0, 2.0, 3.0]).unwrap();
        let x = NArray::from_vec(&[3], vec![10.0, 20.0, 30.0]).unwrap();
        add_scaled(&mut y, &x, 0.5).unwrap();
        assert_eq!(y.data(), &[6.0, 12.0, 18.0]);
    }

    #[test]
    fn rcp_produces_inf_on_zero() {
        let x = NArray::from_vec(&[3], vec![2.0, 0.0, -4.0]).unwrap();
        let out = rcp(&x);
        assert_eq!(out.data()[0], 0.5);
        assert_eq!(out.data()[1], f64::INFINITY);
        assert_eq!(out.data()[2], -0.25);
    }

    #[test]
    fn sqrt_and_abs() {
        let x = NArray::from_vec(&[2], vec![9.0, 16.0]).unwrap();
        assert_eq!(sqrt(&x).data(), &[3.0, 4.0]);
        let y = NArray::from_vec(&[2], vec![-1.5, 2.0]).unwrap();
        assert_eq!(abs(&y).data(), &[1.5, 2.0]);
    }

    #[test]
    fn map_applies_closure_everywhere() {
        let x = grid(2, 3, 0.0);
        let out = map(&x, |v| v * v + 1.0);
        assert_eq!(out.at(&[1, 2]), 26.0);

        let mut dest = NArray::zeros(&[2, 3]);
        map_into(&mut dest, &x, |v| -v).unwrap();
        assert_eq!(dest.at(&[1, 2]), -5.0);
    }

    #[test]
    fn rank_zero_operands_work() {
        let a = NArray::scalar(2.0);
        let b = NArray::scalar(3.0);
        assert_eq!(add(&[&a, &b]).unwrap().at(&[]), 5.0);
        assert_eq!(div(&a, &b).unwrap().at(&[]), 2.0 / 3.0);
    }
}
