//! Direct triple-loop multiplication.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Multiply two square matrices with the classic triple loop.
///
/// Runs in i-k-j order so the innermost loop walks both `b` and the
/// accumulator row sequentially (stride 1) - noticeably faster than the
/// textbook i-j-k order on large matrices, with identical results.
///
/// Each output element is the dot product over `k` of `a[i][k] * b[k][j]`,
/// accumulated in `i64` so partial sums cannot wrap even when an individual
/// product exceeds the `i32` range. The finished sums are narrowed back to
/// `i32`; inputs must be bounded so that `n * max|a| * max|b| < 2^31`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the operands differ in size.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.n != b.n {
        return Err(Error::DimensionMismatch { lhs: a.n, rhs: b.n });
    }
    let n = a.n;

    let mut acc = vec![0i64; n * n];
    for i in 0..n {
        for p in 0..n {
            let aip = a.data[i * n + p] as i64;
            for j in 0..n {
                acc[i * n + j] += aip * b.data[p * n + j] as i64;
            }
        }
    }

    debug_assert!(
        acc.iter().all(|&v| i32::try_from(v).is_ok()),
        "accumulated product exceeds the i32 element range"
    );
    let data = acc.into_iter().map(|v| v as i32).collect();
    Ok(Matrix { n, data })
}
