//! Strassen's sub-cubic multiplication.

use crate::block::{add, merge, slice, subtract};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::multiply::{DEFAULT_THRESHOLD, check_halvable, direct};

/// Multiply with Strassen's 7-multiply recursion and the default base-case
/// threshold.
///
/// See [`multiply_with_threshold`] for the mechanics and error conditions.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    multiply_with_threshold(a, b, DEFAULT_THRESHOLD)
}

/// Multiply with Strassen's 7-multiply recursion.
///
/// Same splitting and threshold discipline as the block-recursive
/// multiplier, but each level does 7 half-size multiplications plus 18
/// additions/subtractions instead of 8 and 4. That drops the asymptotic
/// cost to O(n^log2(7)) at the price of heavier constant factors, which is
/// exactly why the base case bottoms out in the direct triple loop.
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

    let m1 = mul(&add(&a11, &a22)?, &add(&b11, &b22)?, threshold)?;
    let m2 = mul(&add(&a21, &a22)?, &b11, threshold)?;
    let m3 = mul(&a11, &subtract(&b12, &b22)?, threshold)?;
    let m4 = mul(&a22, &subtract(&b21, &b11)?, threshold)?;
    let m5 = mul(&add(&a11, &a12)?, &b22, threshold)?;
    let m6 = mul(&subtract(&a21, &a11)?, &add(&b11, &b12)?, threshold)?;
    let m7 = mul(&subtract(&a12, &a22)?, &add(&b21, &b22)?, threshold)?;

    let c11 = add(&add(&m1, &m4)?, &subtract(&m7, &m5)?)?;
    let c12 = add(&m3, &m5)?;
    let c21 = add(&m2, &m4)?;
    let c22 = add(&add(&m3, &m6)?, &subtract(&m1, &m2)?)?;

    merge(&c11, &c12, &c21, &c22)
}
