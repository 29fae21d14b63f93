//! Block-decomposition primitives.
//!
//! Elementwise add/subtract, sub-block extraction and quadrant reassembly.
//! The divide-and-conquer multipliers are built entirely out of these four
//! operations plus the direct base case.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Elementwise sum of two matrices of equal dimension.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the operands differ in size.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    elementwise(a, b, |x, y| x + y)
}

/// Elementwise difference `a - b` of two matrices of equal dimension.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the operands differ in size.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    elementwise(a, b, |x, y| x - y)
}

fn elementwise<F>(a: &Matrix, b: &Matrix, f: F) -> Result<Matrix>
where
    F: Fn(i32, i32) -> i32,
{
    if a.n != b.n {
        return Err(Error::DimensionMismatch { lhs: a.n, rhs: b.n });
    }
    let data = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(&x, &y)| f(x, y))
        .collect();
    Ok(Matrix { n: a.n, data })
}

/// Copy out the sub-matrix `a[row_start..row_end, col_start..col_end]`.
///
/// Both windows are half-open. The result is a new, independently owned
/// matrix; the source is untouched.
///
/// ```
/// use blockmul::{Matrix, block};
///
/// let m = Matrix::from_fn(4, |i, j| (i * 4 + j) as i32);
/// let tr = block::slice(&m, 0, 2, 2, 4).unwrap();
/// assert_eq!(tr.as_slice(), &[2, 3, 6, 7]);
/// ```
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] unless `0 <= start < end <= n` holds on
/// both axes, and [`Error::DimensionMismatch`] if the window is not square
/// (this crate's matrices are square by construction).
pub fn slice(
    a: &Matrix,
    row_start: usize,
    row_end: usize,
    col_start: usize,
    col_end: usize,
) -> Result<Matrix> {
    let n = a.n;
    if row_start >= row_end || row_end > n || col_start >= col_end || col_end > n {
        return Err(Error::OutOfRange {
            row_start,
            row_end,
            col_start,
            col_end,
            n,
        });
    }
    let rows = row_end - row_start;
    let cols = col_end - col_start;
    if rows != cols {
        return Err(Error::DimensionMismatch {
            lhs: rows,
            rhs: cols,
        });
    }

    let mut data = Vec::with_capacity(rows * cols);
    for i in row_start..row_end {
        data.extend_from_slice(&a.data[i * n + col_start..i * n + col_end]);
    }
    Ok(Matrix { n: rows, data })
}

/// Reassemble four equal `k x k` quadrants into one `2k x 2k` matrix.
///
/// Quadrant order is top-left, top-right, bottom-left, bottom-right -
/// the inverse of slicing a matrix at its midpoints.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the quadrants differ in size.
pub fn merge(m1: &Matrix, m2: &Matrix, m3: &Matrix, m4: &Matrix) -> Result<Matrix> {
    let k = m1.n;
    for q in [m2, m3, m4] {
        if q.n != k {
            return Err(Error::DimensionMismatch { lhs: k, rhs: q.n });
        }
    }

    let n = 2 * k;
    let mut data = vec![0; n * n];
    for i in 0..k {
        let top = i * n;
        let bottom = (i + k) * n;
        data[top..top + k].copy_from_slice(&m1.data[i * k..(i + 1) * k]);
        data[top + k..top + n].copy_from_slice(&m2.data[i * k..(i + 1) * k]);
        data[bottom..bottom + k].copy_from_slice(&m3.data[i * k..(i + 1) * k]);
        data[bottom + k..bottom + n].copy_from_slice(&m4.data[i * k..(i + 1) * k]);
    }
    Ok(Matrix { n, data })
}
