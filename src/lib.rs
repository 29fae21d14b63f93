//! Square matrix multiplication three ways, built from scratch.
//!
//! I built this to understand why Strassen's algorithm is faster on paper
//! and when it actually wins in practice. This crate implements the classic
//! triple loop, the 8-multiply block recursion, and Strassen's 7-multiply
//! recursion over the same immutable matrix type, so the three can be run
//! against each other and checked for exact agreement.
//!
//! ## Usage
//!
//! ```
//! use blockmul::{Algorithm, Matrix, equal, multiply};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
//!
//! let c = multiply(&a, &b, Algorithm::Direct).unwrap();
//! assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
//!
//! let d = multiply(&a, &b, Algorithm::Strassen).unwrap();
//! assert!(equal(&c, &d).unwrap());
//! ```
//!
//! ## What's inside
//!
//! - An immutable square [`Matrix`] over bounded integers
//! - Block primitives: elementwise add/subtract, slice, merge
//! - Three multipliers that provably agree with each other
//! - Checked preconditions everywhere - bad dimensions come back as
//!   [`Error`] values, never as silently wrong numbers

pub mod block;
pub mod error;
pub mod matrix;
pub mod multiply;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use matrix::equality::equal;
pub use multiply::DEFAULT_THRESHOLD;

/// Which multiplication algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Triple-nested-loop multiplication, O(n^3).
    Direct,
    /// 8-multiply divide-and-conquer block recursion, O(n^3) with a
    /// blockwise access pattern.
    BlockRecursive,
    /// Strassen's 7-multiply recursion, O(n^log2(7)).
    Strassen,
}

/// Matrix multiply: `a * b` with the chosen algorithm.
///
/// The recursive algorithms use [`DEFAULT_THRESHOLD`] as their base case;
/// call `multiply_with_threshold` in [`multiply::recursive`] or
/// [`multiply::strassen`] directly to pick a different one.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the operands differ in size, and
/// [`Error::InvalidDimension`] if a recursive algorithm is asked for a size
/// that cannot be halved evenly down to the base case.
pub fn multiply(a: &Matrix, b: &Matrix, algorithm: Algorithm) -> Result<Matrix> {
    match algorithm {
        Algorithm::Direct => multiply::direct::multiply(a, b),
        Algorithm::BlockRecursive => multiply::recursive::multiply(a, b),
        Algorithm::Strassen => multiply::strassen::multiply(a, b),
    }
}
