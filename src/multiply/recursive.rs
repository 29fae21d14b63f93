//! Block-recursive (divide-and-conquer) multiplication.

use crate::block::{add, merge, slice};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::multiply::{DEFAULT_THRESHOLD, check_halvable, direct};

/// Multiply with the standard 8-multiply block recursion and the default
/// base-case threshold.
///
/// See [`multiply_with_threshold`] for the mechanics and error conditions.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    multiply_with_threshold(a, b, DEFAULT_THRESHOLD)
}

/// Multiply with the standard 8-multiply block recursion.
///
/// Above `threshold`, both operands are split into four quadrants and the
/// product is assembled from eight half-size multiplications and four
/// additions:
///
/// ```text
/// c11 = a11*b11 + a12*b21      c12 = a11*b12 + a12*b22
/// c21 = a21*b11 + a22*b21      c22 = a21*b12 + a22*b22
/// ```
///
/// Algebraically this is the same product the direct triple loop computes,
/// just walked blockwise. At or below `threshold` (clamped to at least 1,
/// since a base case of 0 would never be reached) the blocks go straight to
/// [`direct::multiply`].
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the operands differ in size, and
/// [`Error::InvalidDimension`] if their size cannot be halved evenly all the
/// way down to the base case.
pub fn multiply_with_threshold(a: &Matrix, b: &Matrix, threshold: usize) -> Result<Matrix> {
    if a.dim() != b.dim() {
        return Err(Error::DimensionMismatch {
            lhs: a.dim(),
            rhs: b.dim(),
        });
    }
    let threshold = threshold.max(1);
    check_halvable(a.dim(), threshold)?;
    mul(a, b, threshold)
}

fn mul(x: &Matrix, y: &Matrix, threshold: usize) -> Result<Matrix> {
    let n = x.dim();
    if n <= threshold {
        return direct::multiply(x, y);
    }
    let h = n / 2;

    let a11 = slice(x, 0, h, 0, h)?;
    let a12 = slice(x, 0, h, h, n)?;
    let a21 = slice(x, h, n, 0, h)?;
    let a22 = slice(x, h, n, h, n)?;

    let b11 = slice(y, 0, h, 0, h)?;
    let b12 = slice(y, 0, h, h, n)?;
    let b21 = slice(y, h, n, 0, h)?;
    let b22 = slice(y, h, n, h, n)?;

    let c11 = add(&mul(&a11, &b11, threshold)?, &mul(&a12, &b21, threshold)?)?;
    let c12 = add(&mul(&a11, &b12, threshold)?, &mul(&a12, &b22, threshold)?)?;
    let c21 = add(&mul(&a21, &b11, threshold)?, &mul(&a22, &b21, threshold)?)?;
    let c22 = add(&mul(&a21, &b12, threshold)?, &mul(&a22, &b22, threshold)?)?;

    merge(&c11, &c12, &c21, &c22)
}
