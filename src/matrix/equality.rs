//! Elementwise structural comparison of two matrices.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Compare two matrices element by element.
///
/// Stops at the first mismatch. Unlike `==` on [`Matrix`], a size mismatch
/// here is an error rather than plain inequality - comparing matrices of
/// different dimensions is a contract violation, not a negative answer.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `x` and `y` differ in dimension.
pub fn equal(x: &Matrix, y: &Matrix) -> Result<bool> {
    if x.n != y.n {
        return Err(Error::DimensionMismatch { lhs: x.n, rhs: y.n });
    }
    for (a, b) in x.data.iter().zip(&y.data) {
        if a != b {
            return Ok(false);
        }
    }
    Ok(true)
}
