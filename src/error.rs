//! Error types for blockmul.

use thiserror::Error;

/// Result type alias using blockmul's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in matrix operations.
///
/// All of these are precondition violations caught before any computation
/// runs. None of them is transient, so there is nothing to retry - the
/// caller handed over operands the operation cannot accept.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operands differ in size, or an input is not square where a square
    /// matrix is required.
    #[error("dimension mismatch: {lhs}x{lhs} vs {rhs}x{rhs}")]
    DimensionMismatch {
        /// Dimension of the left operand
        lhs: usize,
        /// Dimension of the right operand
        rhs: usize,
    },

    /// Slice bounds fall outside the source matrix.
    #[error("slice rows {row_start}..{row_end}, cols {col_start}..{col_end} out of range for a {n}x{n} matrix")]
    OutOfRange {
        /// Start of the row window (inclusive)
        row_start: usize,
        /// End of the row window (exclusive)
        row_end: usize,
        /// Start of the column window (inclusive)
        col_start: usize,
        /// End of the column window (exclusive)
        col_end: usize,
        /// Dimension of the source matrix
        n: usize,
    },

    /// A recursive multiplier was handed a size that cannot be halved
    /// evenly all the way down to its base case.
    #[error("matrix size {n} cannot be halved evenly down to the base case {threshold}")]
    InvalidDimension {
        /// Dimension of the operands
        n: usize,
        /// Base-case threshold in effect
        threshold: usize,
    },
}
