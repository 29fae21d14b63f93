//! The square matrix value type and its constructors.
//!
//! Matrices are immutable values: every operation in this crate builds and
//! returns a fresh `Matrix`, nothing edits one in place. Storage is a flat
//! row-major `Vec<i32>`, so element `(i, j)` lives at `i * n + j`.

pub mod equality;

use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};

/// A square `n x n` matrix of bounded integers.
///
/// Use the factory methods to create one:
///
/// ```
/// use blockmul::Matrix;
///
/// let z = Matrix::zeros(3);
/// let i = Matrix::identity(3);
/// let m = Matrix::from_fn(2, |i, j| (i * 2 + j) as i32);
///
/// assert_eq!(m.get(1, 0), 2);
/// assert_eq!(i.get(2, 2), 1);
/// assert_eq!(z.dim(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub(crate) n: usize,
    pub(crate) data: Vec<i32>,
}

impl Matrix {
    /// Create an `n x n` matrix filled with zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Create an `n x n` matrix from a function of `(row, col)`.
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> i32,
    {
        let data = (0..n * n).map(|idx| f(idx / n, idx % n)).collect();
        Self { n, data }
    }

    /// Create a matrix from nested row vectors.
    ///
    /// ```
    /// use blockmul::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.get(1, 1), 4);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if any row's length differs from
    /// the number of rows - the input must describe a square.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(Error::DimensionMismatch {
                    lhs: n,
                    rhs: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { n, data })
    }

    /// Create an `n x n` matrix with elements drawn uniformly from `0..100`.
    ///
    /// The generator is passed in explicitly, so a seeded `StdRng` gives
    /// reproducible matrices:
    ///
    /// ```
    /// use blockmul::Matrix;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let a = Matrix::random(4, &mut StdRng::seed_from_u64(42));
    /// let b = Matrix::random(4, &mut StdRng::seed_from_u64(42));
    /// assert_eq!(a, b);
    /// ```
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self::from_fn(n, |_, _| rng.gen_range(0..100))
    }

    /// The dimension `n` (rows == columns).
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..n`.
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(
            row < self.n && col < self.n,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.n,
            self.n
        );
        self.data[row * self.n + col]
    }

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }
}

/// Renders each row as `| a, b, c |`, one row per line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.n.max(1)) {
            write!(f, "| ")?;
            for (j, v) in row.iter().enumerate() {
                if j + 1 == self.n {
                    write!(f, "{}", v)?;
                } else {
                    write!(f, "{}, ", v)?;
                }
            }
            writeln!(f, " |")?;
        }
        Ok(())
    }
}
